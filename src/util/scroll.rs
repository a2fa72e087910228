//! In-page anchor navigation and scroll-driven link state.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// Class marking the nav link for the section in view.
pub const ACTIVE_CLASS: &str = "active";
/// Class marking a content section that has been revealed.
pub const VISIBLE_CLASS: &str = "visible";

/// Browser capabilities needed to follow an in-page anchor.
pub trait AnchorHost {
    /// Smooth-scroll the element matching `selector` to the top of the
    /// viewport. Returns `false` when no such element exists.
    fn scroll_to(&self, selector: &str) -> bool;

    /// Replace the visible URL without reloading or scrolling.
    fn push_url(&self, href: &str);
}

/// The `#fragment` of an in-page link, if `href` is one.
pub fn anchor_target(href: Option<&str>) -> Option<&str> {
    href.filter(|h| h.starts_with('#'))
}

/// Handle a click on a navigation link.
///
/// Returns whether default navigation must be suppressed. Off-page links
/// are left to the browser.
pub fn handle_nav_click<H: AnchorHost + ?Sized>(host: &H, href: Option<&str>) -> bool {
    let Some(anchor) = anchor_target(href) else {
        return false;
    };
    if host.scroll_to(anchor) {
        host.push_url(anchor);
    }
    true
}

/// Whether a nav link `href` points at section `section_id`.
pub fn link_targets(href: Option<&str>, section_id: &str) -> bool {
    href.and_then(|h| h.strip_prefix('#'))
        .is_some_and(|id| !section_id.is_empty() && id == section_id)
}

/// Section that should own the active link after a batch of intersection
/// entries. Later entries win.
pub fn last_intersecting<'a, I>(entries: I) -> Option<&'a str>
where
    I: IntoIterator<Item = (&'a str, bool)>,
{
    entries
        .into_iter()
        .filter(|(_, intersecting)| *intersecting)
        .map(|(id, _)| id)
        .last()
}

/// Items from a batch of entries that just entered the viewport.
pub fn entered<T, I>(entries: I) -> impl Iterator<Item = T>
where
    I: IntoIterator<Item = (T, bool)>,
{
    entries
        .into_iter()
        .filter_map(|(item, intersecting)| intersecting.then_some(item))
}

/// `window.history` + `scrollIntoView` backed host.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserAnchorHost;

#[cfg(feature = "hydrate")]
impl AnchorHost for BrowserAnchorHost {
    fn scroll_to(&self, selector: &str) -> bool {
        let Some(target) = crate::util::selector::query(selector) else {
            return false;
        };
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        options.set_block(web_sys::ScrollLogicalPosition::Start);
        target.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }

    fn push_url(&self, href: &str) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let history = match window.history() {
            Ok(history) => history,
            Err(e) => {
                log::warn!("history unavailable: {}", crate::error::PortfolioError::describe_js(&e));
                return;
            }
        };
        let state = js_sys::Object::new();
        if let Err(e) = history.push_state_with_url(&state, "", Some(href)) {
            log::warn!("pushState({href}) failed: {}", crate::error::PortfolioError::describe_js(&e));
        }
    }
}
