//! DOM bindings for each page enhancement.
//!
//! Every `setup` function is callable in host builds, where it does nothing.
//! In browser builds a component whose elements are missing logs at debug
//! level and skips itself.

pub mod mobile_menu;
pub mod navigation;
pub mod sections;
pub mod theme_toggle;
pub mod typing;

/// Toggle `class` on `el` to match `on`, logging DOM failures.
#[cfg(feature = "hydrate")]
pub(crate) fn set_class(el: &web_sys::Element, class: &str, on: bool) {
    let list = el.class_list();
    let result = if on { list.add_1(class) } else { list.remove_1(class) };
    if let Err(e) = result {
        log::warn!("classList update for {class} failed: {}", crate::error::PortfolioError::describe_js(&e));
    }
}

/// Attach a click listener for the lifetime of the page.
#[cfg(feature = "hydrate")]
pub(crate) fn on_click<F>(target: &web_sys::EventTarget, handler: F)
where
    F: FnMut(web_sys::Event) + 'static,
{
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let cb = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
    if let Err(e) = target.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref()) {
        log::warn!("click listener not attached: {}", crate::error::PortfolioError::describe_js(&e));
    }
    cb.forget();
}
