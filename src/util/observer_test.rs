use std::cell::Cell;
use std::rc::Rc;

use super::*;

#[derive(Clone)]
struct FakeObserver {
    disconnects: Rc<Cell<u32>>,
}

impl FakeObserver {
    fn new() -> (Self, Rc<Cell<u32>>) {
        let disconnects = Rc::new(Cell::new(0));
        (
            Self {
                disconnects: Rc::clone(&disconnects),
            },
            disconnects,
        )
    }
}

impl Disconnect for FakeObserver {
    fn disconnect(&self) {
        self.disconnects.set(self.disconnects.get() + 1);
    }
}

#[test]
fn options_use_configured_thresholds() {
    let config = Config::default();
    let nav = ObserverKind::Navigation.options(&config);
    let reveal = ObserverKind::Reveal.options(&config);
    assert_eq!(nav.root_margin, "0px");
    assert!((nav.threshold - 0.4).abs() < f64::EPSILON);
    assert!((reveal.threshold - 0.15).abs() < f64::EPSILON);
}

#[test]
fn kinds_have_stable_names() {
    assert_eq!(ObserverKind::Navigation.name(), "navigation");
    assert_eq!(ObserverKind::Reveal.name(), "reveal");
}

#[test]
fn teardown_disconnects_everything_once() {
    let (nav, nav_count) = FakeObserver::new();
    let (reveal, reveal_count) = FakeObserver::new();
    let mut registry = ObserverRegistry::new();
    registry.insert(ObserverKind::Navigation, nav);
    registry.insert(ObserverKind::Reveal, reveal);
    assert_eq!(registry.len(), 2);

    assert_eq!(registry.teardown(), 2);
    assert!(registry.is_empty());
    assert_eq!(nav_count.get(), 1);
    assert_eq!(reveal_count.get(), 1);

    assert_eq!(registry.teardown(), 0);
    assert_eq!(nav_count.get(), 1);
}

#[test]
fn replacing_an_observer_disconnects_the_old_one() {
    let (first, first_count) = FakeObserver::new();
    let (second, second_count) = FakeObserver::new();
    let mut registry = ObserverRegistry::new();
    registry.insert(ObserverKind::Reveal, first);
    registry.insert(ObserverKind::Reveal, second);
    assert_eq!(registry.len(), 1);
    assert_eq!(first_count.get(), 1);
    assert_eq!(second_count.get(), 0);
    assert!(registry.contains(ObserverKind::Reveal));
    assert!(!registry.contains(ObserverKind::Navigation));
}
