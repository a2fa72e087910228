//! Light/dark theme controls (desktop button and mobile menu entry).
//!
//! Both controls are anchors, so clicks suppress navigation and stop
//! propagation before toggling.

use std::rc::Rc;

use crate::app::AppContext;
use crate::state::theme::ThemeView;

pub const DESKTOP_TOGGLE: &str = "#theme-toggle";
pub const MOBILE_TOGGLE: &str = ".mobile-theme-toggle";
pub const DESKTOP_ICON: &str = "#theme-toggle i";
pub const MOBILE_ICON: &str = ".mobile-theme-toggle i";
pub const MOBILE_LABEL: &str = ".mobile-theme-toggle .theme-text";

#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
pub fn setup(ctx: &Rc<AppContext>) {
    #[cfg(feature = "hydrate")]
    {
        use crate::state::theme::LIGHT_THEME_CLASS;
        use crate::util::selector::{document, query};

        let desktop = query(DESKTOP_TOGGLE);
        let mobile = query(MOBILE_TOGGLE);

        let body_light = document()
            .and_then(|doc| doc.body())
            .is_some_and(|body| body.class_list().contains(LIGHT_THEME_CLASS));
        if let Some(view) = ctx.sync_initial_theme(desktop.is_some(), body_light) {
            apply(view);
        }

        for control in desktop.iter().chain(mobile.iter()) {
            let ctx = Rc::clone(ctx);
            super::on_click(control, move |event: web_sys::Event| {
                event.prevent_default();
                event.stop_propagation();
                apply(ctx.toggle_theme());
            });
        }
    }
}

/// Push a theme view onto the body class, icons and mobile label.
#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
pub fn apply(view: ThemeView) {
    #[cfg(feature = "hydrate")]
    {
        use crate::state::theme::LIGHT_THEME_CLASS;
        use crate::util::selector::{document, query};

        if let Some(body) = document().and_then(|doc| doc.body()) {
            super::set_class(&body, LIGHT_THEME_CLASS, view.body_light_class);
        }
        if let Some(icon) = query(DESKTOP_ICON) {
            icon.set_class_name(view.desktop_icon_class);
        }
        if let Some(icon) = query(MOBILE_ICON) {
            icon.set_class_name(view.mobile_icon_class);
        }
        if let Some(label) = query(MOBILE_LABEL) {
            label.set_text_content(Some(view.mobile_label));
        }
    }
}
