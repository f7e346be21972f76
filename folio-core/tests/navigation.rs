//! End-to-end behaviour of the controller wired to an observer, using hosts
//! that record what the page would have been asked to do.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use folio_core::content::Portfolio;
use folio_core::{
    IntersectionCallback, IntersectionEntry, NavError, ObserverConfig, Registration,
    ScrollBehavior, ScrollHost, SectionController, SectionRegistry, ViewportObserver, initialize,
};
use pretty_assertions::assert_eq;

/// Page with a fixed set of element ids; records every scroll request.
struct FakePage {
    elements: Vec<String>,
    scrolls: Rc<RefCell<Vec<(String, ScrollBehavior)>>>,
}

impl FakePage {
    fn with(ids: &[&str]) -> Self {
        Self {
            elements: ids.iter().map(|id| id.to_string()).collect(),
            scrolls: Rc::default(),
        }
    }
}

impl ScrollHost for FakePage {
    type Target = String;

    fn locate(&self, id: &str) -> Option<String> {
        self.elements.iter().find(|e| *e == id).cloned()
    }

    fn scroll_into_view(&self, target: &String, behavior: ScrollBehavior) {
        self.scrolls.borrow_mut().push((target.clone(), behavior));
    }
}

/// Observer that keeps the callback so tests can fire batches by hand.
#[derive(Default)]
struct ManualObserver {
    callback: Rc<RefCell<Option<IntersectionCallback>>>,
    disconnected: Rc<Cell<bool>>,
}

struct ManualRegistration {
    callback: Rc<RefCell<Option<IntersectionCallback>>>,
    disconnected: Rc<Cell<bool>>,
}

impl Registration for ManualRegistration {
    fn disconnect(&mut self) {
        self.callback.borrow_mut().take();
        self.disconnected.set(true);
    }
}

impl ViewportObserver for ManualObserver {
    type Registration = ManualRegistration;

    fn observe(
        &self,
        _ids: &[&str],
        _config: &ObserverConfig,
        callback: IntersectionCallback,
    ) -> Result<ManualRegistration, NavError> {
        *self.callback.borrow_mut() = Some(callback);
        Ok(ManualRegistration {
            callback: self.callback.clone(),
            disconnected: self.disconnected.clone(),
        })
    }
}

impl ManualObserver {
    fn fire(&self, batch: Vec<IntersectionEntry>) -> bool {
        match self.callback.borrow_mut().as_mut() {
            Some(callback) => {
                callback(batch);
                true
            }
            None => false,
        }
    }
}

const ALL: [&str; 5] = ["home", "about", "projects", "skills", "contact"];

#[test]
fn navigate_to_projects_scrolls_smoothly() {
    let page = FakePage::with(&ALL);
    let scrolls = page.scrolls.clone();
    let mut nav = SectionController::new(SectionRegistry::default(), page);

    let section = nav.navigate_to("projects").expect("projects is on the page");
    assert_eq!(section.id, "projects");
    assert_eq!(nav.active_id(), "projects");
    assert_eq!(
        *scrolls.borrow(),
        vec![("projects".to_string(), ScrollBehavior::Smooth)]
    );
}

#[test]
fn every_registered_section_is_reachable() {
    let mut nav = SectionController::new(SectionRegistry::default(), FakePage::with(&ALL));
    for id in ALL {
        nav.navigate_to(id).expect("section present");
        assert_eq!(nav.active_id(), id);
        assert!(nav.is_active(id));
    }
}

#[test]
fn observer_batches_feed_visibility_until_teardown() {
    let portfolio = Portfolio::builtin().expect("embedded content parses");
    let registry = portfolio.section_registry().expect("valid sections");
    let nav = Rc::new(RefCell::new(SectionController::new(
        registry.clone(),
        FakePage::with(&ALL),
    )));

    let observer = ManualObserver::default();
    let sink = nav.clone();
    let guard = initialize(
        &observer,
        &registry,
        &portfolio.site.observer,
        Box::new(move |batch| sink.borrow_mut().apply_intersections(batch)),
    )
    .expect("observer available");

    // nothing reported yet
    assert!(nav.borrow().visibility().is_empty());
    assert_eq!(nav.borrow().active_id(), "home");

    assert!(observer.fire(vec![
        IntersectionEntry::new("home", true),
        IntersectionEntry::new("about", true),
    ]));
    assert!(observer.fire(vec![IntersectionEntry::new("skills", true)]));
    assert!(observer.fire(vec![IntersectionEntry::new("home", false)]));

    {
        let nav = nav.borrow();
        let visibility = nav.visibility();
        assert_eq!(visibility.get("home"), Some(false));
        assert_eq!(visibility.get("about"), Some(true));
        assert_eq!(visibility.get("skills"), Some(true));
        assert_eq!(visibility.get("projects"), None);
        assert_eq!(visibility.get("contact"), None);
        // scrolling past sections never changes the highlighted one
        assert_eq!(nav.active_id(), "home");
    }

    guard.teardown();
    assert!(observer.disconnected.get());
    assert!(!observer.fire(vec![IntersectionEntry::new("contact", true)]));
    assert_eq!(nav.borrow().visibility().get("contact"), None);
}

#[test]
fn navigation_works_without_observer() {
    struct NoObserver;
    struct Never;
    impl Registration for Never {
        fn disconnect(&mut self) {}
    }
    impl ViewportObserver for NoObserver {
        type Registration = Never;
        fn observe(
            &self,
            _ids: &[&str],
            _config: &ObserverConfig,
            _callback: IntersectionCallback,
        ) -> Result<Never, NavError> {
            Err(NavError::ObserverUnavailable("unsupported".into()))
        }
    }

    let registry = SectionRegistry::default();
    let tracking = initialize(
        &NoObserver,
        &registry,
        &ObserverConfig::default(),
        Box::new(|_| {}),
    );
    assert!(matches!(tracking, Err(NavError::ObserverUnavailable(_))));

    let mut nav = SectionController::new(registry, FakePage::with(&ALL));
    nav.navigate_to("contact").expect("navigation still works");
    assert_eq!(nav.active_id(), "contact");
}
