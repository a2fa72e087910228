//! # portfolio-web
//!
//! WebAssembly interactivity for the static portfolio site: shared
//! header/footer fragments, navigation, smooth scrolling, active-link and
//! reveal-on-scroll observers, the hero typing effect, the light/dark theme
//! toggle, and the mobile menu.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`app`] | Per-page [`app::AppContext`] and the two-phase boot |
//! | [`components`] | `web-sys` bindings, one per page enhancement |
//! | [`state`] | Pure state machines and their DOM projections |
//! | [`net`] | Fragment fetching and injection |
//! | [`util`] | Selector, storage, observer, scroll and error helpers |
//! | [`config`] | Tunable timings and thresholds |
//! | [`error`] | [`error::PortfolioError`] |
//!
//! Browser code sits behind the `hydrate` feature. Without it every
//! component is a no-op and the crate builds and tests on the host.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod net;
pub mod state;
pub mod util;

/// WASM entry point: set up logging, then boot once the DOM is parsed.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    console_error_panic_hook::set_once();
    let config = config::Config::load();
    let level = util::debug::effective_level(config.level_filter(), util::debug::current_host_is_debug());
    if let Err(e) = console_log::init_with_level(level) {
        web_sys::console::warn_1(&wasm_bindgen::JsValue::from_str(&e.to_string()));
    }

    let Some(doc) = util::selector::document() else {
        log::warn!("no document; portfolio enhancements disabled");
        return;
    };
    if app::still_parsing(&doc.ready_state()) {
        let on_ready = Closure::<dyn FnMut()>::once(move || app::run(config));
        if let Err(e) = doc.add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref()) {
            log::error!("DOMContentLoaded listener failed: {}", error::PortfolioError::describe_js(&e));
        }
        on_ready.forget();
    } else {
        app::run(config);
    }
}
