//! Application context and the two-phase page boot.
//!
//! ARCHITECTURE
//! ============
//! One [`AppContext`] is built per page load and shared by every component
//! through an `Rc`. Boot runs in two phases:
//!
//! 1. Load: header and footer fragments are fetched concurrently. Navigation
//!    is populated only when both arrived.
//! 2. Wire: every handler is attached, whatever the load phase produced.
//!    Components whose elements are missing skip themselves.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::components::{mobile_menu, navigation, sections, theme_toggle, typing};
use crate::config::Config;
use crate::net::fragment::{self, FragmentSink, FragmentSource, LoadReport};
use crate::state::menu::{MenuEvent, MenuState, MenuView};
use crate::state::nav::BasePath;
use crate::state::theme::{Theme, ThemeController, ThemeView};
use crate::util::error_hook;
use crate::util::observer::{ObserverKind, ObserverRegistry, PageObserver};

/// Preference store backing the theme toggle.
#[cfg(feature = "hydrate")]
pub type PageStore = crate::util::storage::LocalStorage;
/// Preference store backing the theme toggle.
#[cfg(not(feature = "hydrate"))]
pub type PageStore = crate::util::storage::MemoryStore;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BootPhase {
    #[default]
    Created,
    Loading,
    Wiring,
    Ready,
}

/// Per-page state shared by all components.
pub struct AppContext {
    pub config: Config,
    pub base: BasePath,
    phase: Cell<BootPhase>,
    menu: Cell<MenuState>,
    theme: RefCell<ThemeController<PageStore>>,
    observers: RefCell<ObserverRegistry<PageObserver>>,
}

impl AppContext {
    pub fn new(config: Config, pathname: &str, store: PageStore, system_theme: Option<Theme>) -> Self {
        let theme = ThemeController::new(store, &config.theme_storage_key, system_theme);
        Self {
            base: BasePath::from_pathname(pathname),
            config,
            phase: Cell::new(BootPhase::Created),
            menu: Cell::new(MenuState::Closed),
            theme: RefCell::new(theme),
            observers: RefCell::new(ObserverRegistry::new()),
        }
    }

    /// Context for the current browser page.
    #[cfg(feature = "hydrate")]
    pub fn from_window(config: Config) -> Self {
        let window = web_sys::window();
        let pathname = window
            .as_ref()
            .and_then(|w| match w.location().pathname() {
                Ok(path) => Some(path),
                Err(e) => {
                    log::warn!("location unavailable: {}", crate::error::PortfolioError::describe_js(&e));
                    None
                }
            })
            .unwrap_or_default();
        let system = window.as_ref().and_then(system_theme);
        Self::new(config, &pathname, crate::util::storage::LocalStorage, system)
    }

    pub fn phase(&self) -> BootPhase {
        self.phase.get()
    }

    pub fn theme(&self) -> Theme {
        self.theme.borrow().theme()
    }

    /// Reconcile the resolved theme with the page at setup.
    ///
    /// With the desktop control present the resolved theme is shown, so its
    /// view is returned for applying. Otherwise the page keeps its markup and
    /// the context adopts whatever the body currently shows, so the first
    /// toggle always changes the page.
    pub fn sync_initial_theme(&self, desktop_present: bool, body_light: bool) -> Option<ThemeView> {
        if desktop_present {
            return Some(self.theme().view());
        }
        let shown = if body_light { Theme::Light } else { Theme::Dark };
        self.theme.borrow_mut().adopt(shown);
        None
    }

    /// Flip and persist the theme, returning what the page should now show.
    pub fn toggle_theme(&self) -> ThemeView {
        let theme = self.theme.borrow_mut().toggle();
        log::debug!("theme toggled to {}", theme.as_str());
        theme.view()
    }

    pub fn menu(&self) -> MenuState {
        self.menu.get()
    }

    /// Apply a menu interaction, returning what the page should now show.
    pub fn menu_event(&self, event: MenuEvent) -> MenuView {
        let next = self.menu.get().on(event);
        self.menu.set(next);
        next.view()
    }

    pub fn register_observer(&self, kind: ObserverKind, handle: PageObserver) {
        self.observers.borrow_mut().insert(kind, handle);
    }

    pub fn observer_count(&self) -> usize {
        self.observers.borrow().len()
    }

    /// Disconnect every registered observer.
    pub fn destroy(&self) -> usize {
        let released = self.observers.borrow_mut().teardown();
        log::info!("released {released} observer(s)");
        released
    }
}

#[cfg(feature = "hydrate")]
fn system_theme(window: &web_sys::Window) -> Option<Theme> {
    let matches = |query: &str| match window.match_media(query) {
        Ok(Some(mq)) => mq.matches(),
        Ok(None) => false,
        Err(e) => {
            log::warn!("matchMedia({query}) failed: {}", crate::error::PortfolioError::describe_js(&e));
            false
        }
    };
    if matches("(prefers-color-scheme: dark)") {
        Some(Theme::Dark)
    } else if matches("(prefers-color-scheme: light)") {
        Some(Theme::Light)
    } else {
        None
    }
}

/// Whether `document.readyState` means boot must wait for `DOMContentLoaded`.
pub fn still_parsing(ready_state: &str) -> bool {
    ready_state == "loading"
}

/// What the boot sequence did.
#[derive(Debug, PartialEq, Eq)]
pub struct BootReport {
    pub fragments: LoadReport,
    pub navigation_populated: bool,
}

/// Load fragments, then wire every component.
pub async fn boot<S, K>(ctx: &Rc<AppContext>, source: &S, sink: &K) -> BootReport
where
    S: FragmentSource,
    K: FragmentSink,
{
    ctx.phase.set(BootPhase::Loading);
    let mut navigation_populated = false;
    let fragments = fragment::load_then(source, sink, ctx.base, || {
        navigation::populate(ctx);
        navigation_populated = true;
    })
    .await;

    ctx.phase.set(BootPhase::Wiring);
    wire(ctx);
    ctx.phase.set(BootPhase::Ready);
    log::info!("portfolio ready (base {})", ctx.base.prefix());

    BootReport {
        fragments,
        navigation_populated,
    }
}

fn wire(ctx: &Rc<AppContext>) {
    navigation::setup_smooth_scrolling(ctx);
    sections::setup_active_navigation(ctx);
    sections::setup_reveals(ctx);
    typing::setup(ctx);
    error_hook::install();
    theme_toggle::setup(ctx);
    mobile_menu::setup(ctx);
}

/// Build the context and boot against the live document.
#[cfg(feature = "hydrate")]
pub fn run(config: Config) {
    use crate::net::fragment::{DocumentSink, HttpSource};

    let ctx = Rc::new(AppContext::from_window(config));
    crate::util::debug::expose(&ctx);
    wasm_bindgen_futures::spawn_local(async move {
        let report = boot(&ctx, &HttpSource, &DocumentSink).await;
        if !report.navigation_populated {
            log::debug!("navigation left as shipped in the page markup");
        }
    });
}
