//! Controller state shared with the view through Leptos context.

use folio_core::{
    IntersectionCallback, ObserverConfig, ObserverGuard, Section, SectionController,
    SectionRegistry, SectionRole, Theme, initialize,
};
use leptos::prelude::*;
use tracing::{debug, warn};

use crate::dom::{DomObserver, DomRegistration, DomScrollHost};

/// Handle consumers use to read the active section and request navigation.
///
/// Copyable; it only carries a signal id and the chosen theme.
#[derive(Clone, Copy)]
pub struct Navigator {
    controller: RwSignal<SectionController<DomScrollHost>>,
    theme: Theme,
}

impl Navigator {
    /// Registered sections in page order.
    pub fn sections(&self) -> Vec<Section> {
        self.controller
            .with_untracked(|controller| controller.sections().iter().cloned().collect())
    }

    /// Id of the section rendering `role`.
    pub fn id_for(&self, role: SectionRole) -> Option<String> {
        self.controller
            .with_untracked(|controller| controller.sections().id_for(role).map(str::to_owned))
    }

    /// Smooth-scroll to `id` and highlight it. Unknown ids are logged and
    /// ignored. Subscribers are notified only when the active section moved.
    pub fn navigate(&self, id: &str) -> bool {
        let mut changed = false;
        self.controller.maybe_update(|controller| {
            changed = controller.navigate(id).unwrap_or_else(|err| {
                debug!(%err, "navigation aborted");
                false
            });
            changed
        });
        changed
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.controller.with(|controller| controller.is_active(id))
    }

    pub fn is_visible(&self, id: &str) -> bool {
        self.controller
            .with(|controller| controller.visibility().is_visible(id))
    }

    pub fn link_class(&self, id: &str) -> &'static str {
        self.theme.nav_link_class(self.is_active(id))
    }
}

/// Create the controller for this view and provide it as context.
///
/// Visibility tracking starts after mount and is torn down with the owner.
/// Without observer support the page keeps working with navigation only.
pub fn provide_navigator(
    sections: SectionRegistry,
    observer: ObserverConfig,
    theme: Theme,
) -> Navigator {
    let controller = RwSignal::new(SectionController::new(sections.clone(), DomScrollHost));
    let navigator = Navigator { controller, theme };
    provide_context(navigator);

    let tracking: StoredValue<Option<ObserverGuard<DomRegistration>>, LocalStorage> =
        StoredValue::new_local(None);

    Effect::new(move || {
        let callback: IntersectionCallback = Box::new(move |batch| {
            let _ = controller.try_update(|c| c.apply_intersections(batch));
        });
        match initialize(&DomObserver, &sections, &observer, callback) {
            Ok(guard) => tracking.set_value(Some(guard)),
            Err(err) => warn!(%err, "visibility tracking disabled"),
        }
    });

    on_cleanup(move || {
        tracking.try_update_value(|guard| {
            if let Some(guard) = guard.take() {
                guard.teardown();
            }
        });
    });

    navigator
}

pub fn use_navigator() -> Navigator {
    expect_context::<Navigator>()
}
