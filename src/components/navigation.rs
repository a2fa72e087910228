//! Navigation lists, logo link and smooth in-page scrolling.

use std::rc::Rc;

use crate::app::AppContext;

/// Desktop and mobile nav containers, filled identically.
pub const NAV_LISTS: [&str; 2] = ["#main-nav-list", "#mobile-nav-list"];
pub const LOGO_LINK: &str = "#nav-logo-link";
/// Links whose in-page targets are followed with smooth scrolling.
pub const SCROLL_LINKS: &str = ".main-nav a";

/// Fill both nav lists and point the logo at the right page.
#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
pub fn populate(ctx: &Rc<AppContext>) {
    #[cfg(feature = "hydrate")]
    {
        use crate::state::nav::{nav_items, render_list};
        use crate::util::selector::query;

        if let Some(logo) = query(LOGO_LINK) {
            if let Err(e) = logo.set_attribute("href", ctx.base.logo_href()) {
                log::warn!("logo href not set: {}", crate::error::PortfolioError::describe_js(&e));
            }
        }
        let html = render_list(&nav_items(ctx.base));
        for list in NAV_LISTS.iter().filter_map(|sel| query(sel)) {
            list.set_inner_html(&html);
        }
    }
}

/// Intercept clicks on in-page nav anchors.
#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
pub fn setup_smooth_scrolling(ctx: &Rc<AppContext>) {
    #[cfg(feature = "hydrate")]
    {
        use crate::util::scroll::{BrowserAnchorHost, handle_nav_click};
        use crate::util::selector::query_all;
        use wasm_bindgen::JsCast;

        let links = query_all(SCROLL_LINKS);
        log::debug!("smooth scrolling on {} link(s) (base {})", links.len(), ctx.base.prefix());
        for link in links {
            super::on_click(&link, |event: web_sys::Event| {
                let href = event
                    .current_target()
                    .and_then(|t| t.dyn_ref::<web_sys::Element>().and_then(|el| el.get_attribute("href")));
                if handle_nav_click(&BrowserAnchorHost, href.as_deref()) {
                    event.prevent_default();
                }
            });
        }
    }
}
