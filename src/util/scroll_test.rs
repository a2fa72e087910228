use std::cell::RefCell;

use super::*;

/// Host over a fixed set of element ids that records every effect.
struct RecordingHost {
    ids: Vec<&'static str>,
    scrolled: RefCell<Vec<String>>,
    url: RefCell<String>,
}

impl RecordingHost {
    fn new(ids: &[&'static str]) -> Self {
        Self {
            ids: ids.to_vec(),
            scrolled: RefCell::new(Vec::new()),
            url: RefCell::new("https://example.test/index.html".to_owned()),
        }
    }
}

impl AnchorHost for RecordingHost {
    fn scroll_to(&self, selector: &str) -> bool {
        let found = selector
            .strip_prefix('#')
            .is_some_and(|id| self.ids.contains(&id));
        if found {
            self.scrolled.borrow_mut().push(selector.to_owned());
        }
        found
    }

    fn push_url(&self, href: &str) {
        let mut url = self.url.borrow_mut();
        let base = url.split('#').next().unwrap_or_default().to_owned();
        *url = format!("{base}{href}");
    }
}

// =============================================================
// Anchor clicks
// =============================================================

#[test]
fn anchor_click_scrolls_and_updates_url() {
    let host = RecordingHost::new(&["about", "skills"]);
    assert!(handle_nav_click(&host, Some("#about")));
    assert_eq!(*host.scrolled.borrow(), ["#about"]);
    assert!(host.url.borrow().ends_with("#about"));
}

#[test]
fn repeated_anchor_clicks_replace_fragment() {
    let host = RecordingHost::new(&["about", "skills"]);
    handle_nav_click(&host, Some("#about"));
    handle_nav_click(&host, Some("#skills"));
    assert_eq!(*host.url.borrow(), "https://example.test/index.html#skills");
}

#[test]
fn off_page_link_is_left_to_browser() {
    let host = RecordingHost::new(&["about"]);
    assert!(!handle_nav_click(&host, Some("pages/experience.html")));
    assert!(!handle_nav_click(&host, Some("../index.html#about")));
    assert!(!handle_nav_click(&host, None));
    assert!(host.scrolled.borrow().is_empty());
}

#[test]
fn missing_target_still_prevents_default_without_push() {
    let host = RecordingHost::new(&["about"]);
    assert!(handle_nav_click(&host, Some("#nowhere")));
    assert!(handle_nav_click(&host, Some("#")));
    assert!(host.scrolled.borrow().is_empty());
    assert_eq!(*host.url.borrow(), "https://example.test/index.html");
}

// =============================================================
// Active link
// =============================================================

#[test]
fn link_targets_matches_exact_fragment() {
    assert!(link_targets(Some("#about"), "about"));
    assert!(!link_targets(Some("#about-me"), "about"));
    assert!(!link_targets(Some("pages/details.html"), "details"));
    assert!(!link_targets(Some("#"), ""));
    assert!(!link_targets(None, "about"));
}

#[test]
fn last_intersecting_entry_wins() {
    let batch = [("hero", true), ("about", true), ("skills", false)];
    assert_eq!(last_intersecting(batch), Some("about"));
}

#[test]
fn batch_without_intersections_changes_nothing() {
    assert_eq!(last_intersecting([("hero", false), ("about", false)]), None);
    assert_eq!(last_intersecting(std::iter::empty()), None);
}

// =============================================================
// Reveal
// =============================================================

#[test]
fn entered_keeps_only_intersecting_items_in_order() {
    let revealed: Vec<_> = entered([(1, true), (2, false), (3, true)]).collect();
    assert_eq!(revealed, [1, 3]);
}
