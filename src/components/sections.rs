//! Scroll-driven section behavior: active nav link and one-shot reveal.
//!
//! Both observers are registered on the context so the debug handle can
//! release them. Overlapping sections may both report in one batch; the
//! last delivered entry owns the active link.

use std::rc::Rc;

use crate::app::AppContext;

pub const TRACKED_SECTIONS: &str = "section[id]";
pub const TRACKED_LINKS: &str = ".main-nav ul li a";
pub const REVEAL_SECTIONS: &str = ".content-section";

/// Mark the nav link of the section crossing the scroll threshold.
#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
pub fn setup_active_navigation(ctx: &Rc<AppContext>) {
    #[cfg(feature = "hydrate")]
    {
        use super::set_class;
        use crate::util::observer::{ObserverKind, observe};
        use crate::util::scroll::{ACTIVE_CLASS, last_intersecting, link_targets};
        use crate::util::selector::query_all;

        let sections = query_all(TRACKED_SECTIONS);
        let links = query_all(TRACKED_LINKS);
        if sections.is_empty() || links.is_empty() {
            log::debug!("active navigation skipped: {} section(s), {} link(s)", sections.len(), links.len());
            return;
        }

        let kind = ObserverKind::Navigation;
        let observed = observe(kind.options(&ctx.config), &sections, move |batch, _observer| {
            let ids: Vec<String> = batch
                .iter()
                .map(|(el, _)| el.id())
                .collect();
            let entries = ids.iter().map(String::as_str).zip(batch.iter().map(|(_, hit)| *hit));
            let Some(active) = last_intersecting(entries) else {
                return;
            };
            for link in &links {
                set_class(link, ACTIVE_CLASS, link_targets(link.get_attribute("href").as_deref(), active));
            }
        });
        match observed {
            Ok(handle) => ctx.register_observer(kind, handle),
            Err(reason) => log::warn!("{} observer not created: {reason}", kind.name()),
        }
    }
}

/// Reveal each content section the first time it scrolls into view.
#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
pub fn setup_reveals(ctx: &Rc<AppContext>) {
    #[cfg(feature = "hydrate")]
    {
        use super::set_class;
        use crate::util::observer::{ObserverKind, observe};
        use crate::util::scroll::{VISIBLE_CLASS, entered};
        use crate::util::selector::query_all;

        let sections = query_all(REVEAL_SECTIONS);
        if sections.is_empty() {
            log::debug!("reveal skipped: no {REVEAL_SECTIONS}");
            return;
        }

        let kind = ObserverKind::Reveal;
        let observed = observe(kind.options(&ctx.config), &sections, |batch, observer| {
            for section in entered(batch) {
                set_class(&section, VISIBLE_CLASS, true);
                observer.unobserve(&section);
            }
        });
        match observed {
            Ok(handle) => ctx.register_observer(kind, handle),
            Err(reason) => log::warn!("{} observer not created: {reason}", kind.name()),
        }
    }
}
