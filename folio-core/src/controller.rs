//! Section Visibility & Navigation Controller.
//!
//! Owns the active section and the visibility map. Two event sources feed it:
//! explicit navigation through [`SectionController::navigate_to`] and observer
//! batches through [`SectionController::apply_intersections`]. Visibility does
//! not drive the active section; only navigation does.

use tracing::{debug, info, warn};

use crate::error::NavError;
use crate::sections::{Section, SectionRegistry};
use crate::visibility::{IntersectionEntry, VisibilityMap};

/// How a scroll request should animate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollBehavior {
    Smooth,
    Instant,
}

/// Host capability to find section elements and scroll them into view.
///
/// Scroll requests are fire-and-forget; completion is never awaited.
pub trait ScrollHost {
    type Target;

    fn locate(&self, id: &str) -> Option<Self::Target>;

    /// Align the target's top with the viewport.
    fn scroll_into_view(&self, target: &Self::Target, behavior: ScrollBehavior);
}

pub struct SectionController<H: ScrollHost> {
    sections: SectionRegistry,
    active: usize,
    visibility: VisibilityMap,
    host: H,
}

impl<H: ScrollHost> SectionController<H> {
    /// Start on the first registered section with an empty visibility map.
    pub fn new(sections: SectionRegistry, host: H) -> Self {
        Self {
            sections,
            active: 0,
            visibility: VisibilityMap::new(),
            host,
        }
    }

    pub fn sections(&self) -> &SectionRegistry {
        &self.sections
    }

    pub fn active(&self) -> &Section {
        self.sections
            .get(self.active)
            .unwrap_or_else(|| self.sections.first())
    }

    pub fn active_id(&self) -> &str {
        &self.active().id
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active_id() == id
    }

    pub fn visibility(&self) -> &VisibilityMap {
        &self.visibility
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Smooth-scroll to `id` and mark it active.
    ///
    /// The section must be registered and present in the page. On failure no
    /// scroll is requested and the state is left as it was.
    pub fn navigate_to(&mut self, id: &str) -> Result<&Section, NavError> {
        let Some(index) = self.sections.position(id) else {
            warn!(section = id, "navigation to unregistered section ignored");
            return Err(NavError::SectionNotFound(id.to_string()));
        };
        let Some(target) = self.host.locate(id) else {
            warn!(section = id, "no element for section, navigation ignored");
            return Err(NavError::SectionNotFound(id.to_string()));
        };

        self.host.scroll_into_view(&target, ScrollBehavior::Smooth);
        if self.active != index {
            info!(from = self.active_id(), to = id, "active section changed");
            self.active = index;
        }
        Ok(self.active())
    }

    /// [`navigate_to`](Self::navigate_to), reporting whether the active
    /// section moved. Repeats still reissue the scroll but return `false`.
    pub fn navigate(&mut self, id: &str) -> Result<bool, NavError> {
        let before = self.active;
        self.navigate_to(id)?;
        Ok(self.active != before)
    }

    /// Merge one observer batch into the visibility map.
    ///
    /// Entries for identifiers outside the registry are dropped.
    pub fn apply_intersections<I>(&mut self, batch: I)
    where
        I: IntoIterator<Item = IntersectionEntry>,
    {
        let sections = &self.sections;
        let known = batch.into_iter().filter(|entry| {
            let known = sections.contains(&entry.section_id);
            if !known {
                debug!(section = %entry.section_id, "intersection for unknown section dropped");
            }
            known
        });
        self.visibility = self.visibility.merged(known);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct FakeHost {
        missing: Vec<&'static str>,
        scrolls: RefCell<Vec<(String, ScrollBehavior)>>,
    }

    impl ScrollHost for FakeHost {
        type Target = String;

        fn locate(&self, id: &str) -> Option<String> {
            (!self.missing.iter().any(|m| *m == id)).then(|| id.to_string())
        }

        fn scroll_into_view(&self, target: &String, behavior: ScrollBehavior) {
            self.scrolls.borrow_mut().push((target.clone(), behavior));
        }
    }

    fn controller() -> SectionController<FakeHost> {
        SectionController::new(SectionRegistry::default(), FakeHost::default())
    }

    #[test]
    fn starts_on_first_section() {
        let ctl = controller();
        assert_eq!(ctl.active_id(), "home");
        assert!(ctl.visibility().is_empty());
    }

    #[test]
    fn navigation_is_idempotent() {
        let mut ctl = controller();
        ctl.navigate_to("about").expect("about exists");
        ctl.navigate_to("about").expect("about exists");

        assert_eq!(ctl.active_id(), "about");
        // scroll is reissued, state is not
        assert_eq!(ctl.host().scrolls.borrow().len(), 2);
    }

    #[test]
    fn navigate_reports_state_changes_only() {
        let mut ctl = controller();

        assert_eq!(ctl.navigate("projects"), Ok(true));
        assert_eq!(ctl.navigate("projects"), Ok(false));
        assert!(ctl.navigate("nonexistent").is_err());
        assert_eq!(ctl.active_id(), "projects");
        assert_eq!(ctl.navigate("home"), Ok(true));
        // every successful call scrolls, changed or not
        assert_eq!(ctl.host().scrolls.borrow().len(), 3);
    }

    #[test]
    fn unknown_section_leaves_state() {
        let mut ctl = controller();
        ctl.navigate_to("skills").expect("skills exists");

        let err = ctl.navigate_to("nonexistent").unwrap_err();
        assert_eq!(err, NavError::SectionNotFound("nonexistent".into()));
        assert_eq!(ctl.active_id(), "skills");
        assert_eq!(ctl.host().scrolls.borrow().len(), 1);
    }

    #[test]
    fn missing_element_aborts_before_scroll() {
        let host = FakeHost {
            missing: vec!["contact"],
            ..Default::default()
        };
        let mut ctl = SectionController::new(SectionRegistry::default(), host);

        assert!(matches!(
            ctl.navigate_to("contact"),
            Err(NavError::SectionNotFound(id)) if id == "contact"
        ));
        assert_eq!(ctl.active_id(), "home");
        assert!(ctl.host().scrolls.borrow().is_empty());
    }

    #[test]
    fn intersections_do_not_move_active_section() {
        let mut ctl = controller();
        ctl.apply_intersections([
            IntersectionEntry::new("home", false),
            IntersectionEntry::new("contact", true),
            IntersectionEntry::new("footer", true),
        ]);

        assert_eq!(ctl.active_id(), "home");
        assert_eq!(ctl.visibility().get("contact"), Some(true));
        assert_eq!(ctl.visibility().get("footer"), None);
        assert_eq!(ctl.visibility().len(), 2);
    }
}
