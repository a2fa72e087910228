#![cfg(not(feature = "hydrate"))]

use std::cell::RefCell;
use std::collections::HashMap;

use futures::executor::block_on;

use super::*;
use crate::error::PortfolioError;
use crate::net::fragment::Fragment;
use crate::util::observer::Detached;
use crate::util::storage::{MemoryStore, PreferenceStore};

struct StaticSource {
    failing: Option<Fragment>,
}

impl FragmentSource for StaticSource {
    async fn fetch(&self, fragment: Fragment, _url: &str) -> Result<String, PortfolioError> {
        if self.failing == Some(fragment) {
            return Err(PortfolioError::FragmentTransport {
                fragment: fragment.name().to_owned(),
                reason: "offline".to_owned(),
            });
        }
        Ok(format!("<div>{}</div>", fragment.name()))
    }
}

#[derive(Default)]
struct MapSink {
    injected: RefCell<HashMap<Fragment, String>>,
}

impl FragmentSink for MapSink {
    fn inject(&self, fragment: Fragment, html: &str) -> Result<(), PortfolioError> {
        self.injected.borrow_mut().insert(fragment, html.to_owned());
        Ok(())
    }
}

fn context(pathname: &str) -> Rc<AppContext> {
    Rc::new(AppContext::new(Config::default(), pathname, MemoryStore::new(), None))
}

// =============================================================
// Context
// =============================================================

#[test]
fn context_derives_base_from_pathname() {
    assert_eq!(context("/index.html").base, BasePath::Root);
    assert_eq!(context("/pages/details.html").base, BasePath::Nested);
}

#[test]
fn context_starts_created_closed_and_dark() {
    let ctx = context("/");
    assert_eq!(ctx.phase(), BootPhase::Created);
    assert_eq!(ctx.menu(), MenuState::Closed);
    assert_eq!(ctx.theme(), Theme::Dark);
}

#[test]
fn stored_theme_is_read_with_configured_key() {
    let ctx = AppContext::new(Config::default(), "/", MemoryStore::with_entry("theme", "light"), Some(Theme::Dark));
    assert_eq!(ctx.theme(), Theme::Light);
}

#[test]
fn toggle_theme_persists_and_returns_view() {
    let ctx = context("/");
    let view = ctx.toggle_theme();
    assert!(view.body_light_class);
    assert_eq!(ctx.theme.borrow().store().get("theme").as_deref(), Some("light"));
}

#[test]
fn desktop_toggle_applies_resolved_theme() {
    let ctx = AppContext::new(Config::default(), "/", MemoryStore::with_entry("theme", "light"), None);
    let view = ctx.sync_initial_theme(true, false);
    assert_eq!(view, Some(Theme::Light.view()));
    assert_eq!(ctx.theme(), Theme::Light);
}

#[test]
fn mobile_only_page_first_toggle_changes_what_is_shown() {
    let ctx = AppContext::new(Config::default(), "/", MemoryStore::with_entry("theme", "light"), None);
    let body_light = false;

    assert_eq!(ctx.sync_initial_theme(false, body_light), None);
    assert_eq!(ctx.theme(), Theme::Dark);

    let view = ctx.toggle_theme();
    assert_ne!(view.body_light_class, body_light);
    assert_eq!(ctx.theme.borrow().store().get("theme").as_deref(), Some("light"));
}

#[test]
fn adopting_shown_theme_does_not_persist() {
    let ctx = context("/");
    ctx.sync_initial_theme(false, true);
    assert_eq!(ctx.theme(), Theme::Light);
    assert_eq!(ctx.theme.borrow().store().get("theme"), None);
}

#[test]
fn only_loading_state_defers_boot() {
    assert!(still_parsing("loading"));
    assert!(!still_parsing("interactive"));
    assert!(!still_parsing("complete"));
}

#[test]
fn menu_open_then_close_restores_scrolling() {
    let ctx = context("/");
    assert_eq!(ctx.menu_event(MenuEvent::Hamburger).body_overflow, "hidden");
    let view = ctx.menu_event(MenuEvent::Overlay);
    assert!(!view.panel_open && !view.overlay_open);
    assert_eq!(view.body_overflow, "");
    assert_eq!(ctx.menu(), MenuState::Closed);
}

#[test]
fn destroy_releases_registered_observers() {
    let ctx = context("/");
    ctx.register_observer(ObserverKind::Navigation, Detached);
    ctx.register_observer(ObserverKind::Reveal, Detached);
    assert_eq!(ctx.observer_count(), 2);
    assert_eq!(ctx.destroy(), 2);
    assert_eq!(ctx.observer_count(), 0);
}

// =============================================================
// Boot
// =============================================================

#[test]
fn boot_populates_navigation_after_both_fragments() {
    let ctx = context("/index.html");
    let sink = MapSink::default();
    let report = block_on(boot(&ctx, &StaticSource { failing: None }, &sink));

    assert!(report.fragments.is_complete());
    assert!(report.navigation_populated);
    assert_eq!(ctx.phase(), BootPhase::Ready);
    assert_eq!(sink.injected.borrow().len(), 2);
}

#[test]
fn boot_wires_handlers_even_when_a_fragment_fails() {
    let ctx = context("/pages/experience.html");
    let sink = MapSink::default();
    let report = block_on(boot(&ctx, &StaticSource { failing: Some(Fragment::Header) }, &sink));

    assert!(!report.navigation_populated);
    assert_eq!(ctx.phase(), BootPhase::Ready);
    assert_eq!(
        sink.injected.borrow().get(&Fragment::Footer).map(String::as_str),
        Some("<div>footer</div>")
    );
    assert!(!sink.injected.borrow().contains_key(&Fragment::Header));
}
