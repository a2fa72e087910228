//! Local-development inspection hooks.

#[cfg(test)]
#[path = "debug_test.rs"]
mod debug_test;

/// Global property holding the application handle.
pub const APP_GLOBAL: &str = "PortfolioApp";
/// Global property holding the selector helpers.
pub const UTILS_GLOBAL: &str = "portfolioUtils";

/// Hosts on which internals are exposed on `window`.
pub fn is_debug_host(hostname: &str) -> bool {
    matches!(hostname, "localhost" | "127.0.0.1")
}

/// Log level after raising it to `Debug` on debug hosts.
pub fn effective_level(configured: log::Level, debug_host: bool) -> log::Level {
    if debug_host {
        configured.max(log::Level::Debug)
    } else {
        configured
    }
}

/// Whether the current page is served from a debug host.
#[cfg(feature = "hydrate")]
pub fn current_host_is_debug() -> bool {
    web_sys::window()
        .and_then(|w| w.location().hostname().into_iter().next())
        .is_some_and(|host| is_debug_host(&host))
}

#[cfg(feature = "hydrate")]
pub use browser::{PortfolioHandle, expose};

#[cfg(feature = "hydrate")]
mod browser {
    use std::rc::Rc;

    use wasm_bindgen::prelude::*;

    use super::{APP_GLOBAL, UTILS_GLOBAL};
    use crate::app::AppContext;
    use crate::error::PortfolioError;
    use crate::util::selector;

    /// Inspection handle published as `window.PortfolioApp`.
    #[wasm_bindgen(js_name = PortfolioApp)]
    pub struct PortfolioHandle {
        ctx: Rc<AppContext>,
    }

    #[wasm_bindgen(js_class = PortfolioApp)]
    impl PortfolioHandle {
        /// Disconnect every viewport observer.
        pub fn destroy(&self) -> usize {
            self.ctx.destroy()
        }

        #[wasm_bindgen(js_name = basePath)]
        pub fn base_path(&self) -> String {
            self.ctx.base.prefix().to_owned()
        }

        pub fn theme(&self) -> String {
            self.ctx.theme().as_str().to_owned()
        }
    }

    fn set_global(window: &web_sys::Window, name: &str, value: &JsValue) {
        if let Err(e) = js_sys::Reflect::set(window, &JsValue::from_str(name), value) {
            log::warn!("could not expose {name}: {}", PortfolioError::describe_js(&e));
        }
    }

    /// Publish the handle and selector helpers on loopback hosts only.
    pub fn expose(ctx: &Rc<AppContext>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        if !super::current_host_is_debug() {
            return;
        }

        let handle = PortfolioHandle { ctx: Rc::clone(ctx) };
        set_global(&window, APP_GLOBAL, &JsValue::from(handle));

        let utils = js_sys::Object::new();
        let query = Closure::<dyn Fn(String) -> Option<web_sys::Element>>::new(|sel: String| selector::query(&sel));
        let query_all = Closure::<dyn Fn(String) -> js_sys::Array>::new(|sel: String| {
            selector::query_all(&sel).into_iter().collect::<js_sys::Array>()
        });
        for (name, func) in [("safeQuerySelector", query.into_js_value()), ("safeQuerySelectorAll", query_all.into_js_value())] {
            if let Err(e) = js_sys::Reflect::set(&utils, &JsValue::from_str(name), &func) {
                log::warn!("could not expose {name}: {}", PortfolioError::describe_js(&e));
            }
        }
        set_global(&window, UTILS_GLOBAL, &utils);
        log::debug!("debug globals exposed as {APP_GLOBAL} and {UTILS_GLOBAL}");
    }
}
