//! Viewport observers and the registry used to tear them down.
//!
//! SYSTEM CONTEXT
//! ==============
//! Setup registers one observer per [`ObserverKind`]. Nothing releases them
//! during normal operation; [`ObserverRegistry::teardown`] exists for the
//! debug handle.

#[cfg(test)]
#[path = "observer_test.rs"]
mod observer_test;

use std::collections::BTreeMap;

use crate::config::Config;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum ObserverKind {
    /// Active nav link tracking over `section[id]`.
    Navigation,
    /// One-shot reveal of `.content-section`.
    Reveal,
}

impl ObserverKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::Navigation => "navigation",
            Self::Reveal => "reveal",
        }
    }

    /// Intersection options for this observer.
    pub fn options(self, config: &Config) -> ObserverOptions {
        let threshold = match self {
            Self::Navigation => config.scroll_threshold,
            Self::Reveal => config.reveal_threshold,
        };
        ObserverOptions {
            root_margin: "0px",
            threshold,
        }
    }
}

/// `IntersectionObserverInit` subset used here; the root is always the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ObserverOptions {
    pub root_margin: &'static str,
    pub threshold: f64,
}

/// Something that can stop observing everything.
pub trait Disconnect {
    fn disconnect(&self);
}

/// Live observers keyed by kind.
pub struct ObserverRegistry<H> {
    observers: BTreeMap<ObserverKind, H>,
}

impl<H> Default for ObserverRegistry<H> {
    fn default() -> Self {
        Self {
            observers: BTreeMap::new(),
        }
    }
}

impl<H: Disconnect> ObserverRegistry<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handle`, disconnecting any observer it replaces.
    pub fn insert(&mut self, kind: ObserverKind, handle: H) {
        if let Some(previous) = self.observers.insert(kind, handle) {
            previous.disconnect();
        }
    }

    pub fn contains(&self, kind: ObserverKind) -> bool {
        self.observers.contains_key(&kind)
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    /// Disconnect and forget every observer. Returns how many were released.
    pub fn teardown(&mut self) -> usize {
        let count = self.observers.len();
        for (kind, handle) in std::mem::take(&mut self.observers) {
            handle.disconnect();
            log::debug!("disconnected {} observer", kind.name());
        }
        count
    }
}

/// Observer handle type held by the application context.
#[cfg(feature = "hydrate")]
pub type PageObserver = ViewportObserver;
/// Observer handle type held by the application context.
#[cfg(not(feature = "hydrate"))]
pub type PageObserver = Detached;

/// Handle for an observer that was never attached to a browser.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Detached;

impl Disconnect for Detached {
    fn disconnect(&self) {}
}

#[cfg(feature = "hydrate")]
pub use browser::{ViewportObserver, observe};

#[cfg(feature = "hydrate")]
mod browser {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;
    use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

    use super::{Disconnect, ObserverOptions};
    use crate::error::PortfolioError;

    type Callback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

    /// An `IntersectionObserver` and the closure it calls back into.
    pub struct ViewportObserver {
        observer: IntersectionObserver,
        _callback: Callback,
    }

    impl Disconnect for ViewportObserver {
        fn disconnect(&self) {
            self.observer.disconnect();
        }
    }

    /// Observe `targets`, calling `on_entries` with `(element, is_intersecting)`
    /// pairs in delivery order plus the observer itself.
    ///
    /// # Errors
    ///
    /// Returns the browser's reason when the observer cannot be constructed.
    pub fn observe<F>(options: ObserverOptions, targets: &[Element], mut on_entries: F) -> Result<ViewportObserver, String>
    where
        F: FnMut(Vec<(Element, bool)>, &IntersectionObserver) + 'static,
    {
        let callback: Callback = Closure::wrap(Box::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
            let batch = entries
                .iter()
                .flat_map(JsCast::dyn_into::<IntersectionObserverEntry>)
                .map(|entry| (entry.target(), entry.is_intersecting()))
                .collect();
            on_entries(batch, &observer);
        }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        init.set_root_margin(options.root_margin);
        init.set_threshold(&wasm_bindgen::JsValue::from_f64(options.threshold));
        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .map_err(|e| PortfolioError::describe_js(&e))?;
        for target in targets {
            observer.observe(target);
        }
        Ok(ViewportObserver {
            observer,
            _callback: callback,
        })
    }
}
