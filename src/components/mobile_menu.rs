//! Hamburger-driven overlay menu.

use std::rc::Rc;

use crate::app::AppContext;
use crate::state::menu::MenuView;

pub const HAMBURGER: &str = ".hamburger-menu";
pub const PANEL: &str = ".mobile-menu-container";
pub const CLOSE_BUTTON: &str = ".close-menu";
pub const OVERLAY: &str = ".overlay";
pub const MENU_LINKS: &str = ".mobile-nav-list a";

#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
pub fn setup(ctx: &Rc<AppContext>) {
    #[cfg(feature = "hydrate")]
    {
        use crate::state::menu::MenuEvent;
        use crate::util::selector::{query, query_all};

        let (Some(hamburger), Some(_panel), Some(close), Some(overlay)) =
            (query(HAMBURGER), query(PANEL), query(CLOSE_BUTTON), query(OVERLAY))
        else {
            log::debug!("mobile menu skipped: controls missing");
            return;
        };

        let bind = |target: &web_sys::Element, event: MenuEvent| {
            let ctx = Rc::clone(ctx);
            super::on_click(target, move |_: web_sys::Event| apply(ctx.menu_event(event)));
        };
        bind(&hamburger, MenuEvent::Hamburger);
        bind(&close, MenuEvent::CloseButton);
        bind(&overlay, MenuEvent::Overlay);
        for link in query_all(MENU_LINKS) {
            bind(&link, MenuEvent::NavLink);
        }
    }
}

/// Push a menu view onto the panel, overlay and body scroll lock.
#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
pub fn apply(view: MenuView) {
    #[cfg(feature = "hydrate")]
    {
        use crate::state::menu::OPEN_CLASS;
        use crate::util::selector::{document, query};

        if let Some(panel) = query(PANEL) {
            super::set_class(&panel, OPEN_CLASS, view.panel_open);
        }
        if let Some(overlay) = query(OVERLAY) {
            super::set_class(&overlay, OPEN_CLASS, view.overlay_open);
        }
        if let Some(body) = document().and_then(|doc| doc.body()) {
            if let Err(e) = body.style().set_property("overflow", view.body_overflow) {
                log::warn!("body overflow not set: {}", crate::error::PortfolioError::describe_js(&e));
            }
        }
    }
}
