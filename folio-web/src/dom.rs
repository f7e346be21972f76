//! Browser implementations of the core host traits.

use folio_core::{
    IntersectionCallback, IntersectionEntry, NavError, ObserverConfig, Registration,
    ScrollBehavior, ScrollHost, ViewportObserver,
};
use tracing::debug;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    ScrollIntoViewOptions, ScrollLogicalPosition,
};

fn document() -> Option<web_sys::Document> {
    web_sys::window().and_then(|w| w.document())
}

/// Readable text for a thrown JS value. DOMExceptions and TypeErrors carry a
/// `message`; anything else falls back to its debug form.
fn js_error_message(err: &JsValue) -> String {
    err.dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| err.as_string())
        .unwrap_or_else(|| format!("{err:?}"))
}

/// Looks sections up by element id and scrolls with `scrollIntoView`.
#[derive(Clone, Copy, Debug, Default)]
pub struct DomScrollHost;

impl ScrollHost for DomScrollHost {
    type Target = Element;

    fn locate(&self, id: &str) -> Option<Element> {
        document()?.get_element_by_id(id)
    }

    fn scroll_into_view(&self, target: &Element, behavior: ScrollBehavior) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(match behavior {
            ScrollBehavior::Smooth => web_sys::ScrollBehavior::Smooth,
            ScrollBehavior::Instant => web_sys::ScrollBehavior::Instant,
        });
        options.set_block(ScrollLogicalPosition::Start);
        target.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

/// `IntersectionObserver` over the section elements.
#[derive(Clone, Copy, Debug, Default)]
pub struct DomObserver;

/// Keeps the JS callback alive for as long as the observer is connected.
pub struct DomRegistration {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl Registration for DomRegistration {
    fn disconnect(&mut self) {
        self.observer.disconnect();
    }
}

impl ViewportObserver for DomObserver {
    type Registration = DomRegistration;

    fn observe(
        &self,
        ids: &[&str],
        config: &ObserverConfig,
        mut callback: IntersectionCallback,
    ) -> Result<DomRegistration, NavError> {
        let document = document()
            .ok_or_else(|| NavError::ObserverUnavailable("no document".into()))?;

        let closure = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, _observer: IntersectionObserver| {
                let batch: Vec<IntersectionEntry> = entries
                    .iter()
                    .filter_map(|value| value.dyn_into::<IntersectionObserverEntry>().ok())
                    .map(|entry| IntersectionEntry::new(entry.target().id(), entry.is_intersecting()))
                    .collect();
                debug!(entries = batch.len(), "intersection batch");
                callback(batch);
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(config.threshold));
        init.set_root_margin(&config.root_margin);

        // Throws when the host lacks IntersectionObserver support.
        let observer = IntersectionObserver::new_with_options(closure.as_ref().unchecked_ref(), &init)
            .map_err(|err| NavError::ObserverUnavailable(js_error_message(&err)))?;

        for id in ids {
            match document.get_element_by_id(id) {
                Some(element) => observer.observe(&element),
                None => debug!(section = *id, "section element missing, not observed"),
            }
        }

        Ok(DomRegistration {
            observer,
            _callback: closure,
        })
    }
}
