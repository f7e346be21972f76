//! Viewport observation as a scoped resource.
//!
//! [`initialize`] registers a single observer over every section element and
//! hands back an [`ObserverGuard`]. The guard disconnects the registration
//! exactly once: explicitly through [`ObserverGuard::teardown`], or when it is
//! dropped on any other exit path.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ConfigError, NavError};
use crate::sections::SectionRegistry;
use crate::visibility::IntersectionEntry;

/// Fraction of a section that must be inside the viewport to count as visible.
pub const DEFAULT_THRESHOLD: f64 = 0.1;

/// Batch callback invoked by the host whenever sections cross the threshold.
///
/// Ordering of entries inside one batch is unspecified.
pub type IntersectionCallback = Box<dyn FnMut(Vec<IntersectionEntry>)>;

/// Options handed to the host observer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObserverConfig {
    pub threshold: f64,
    pub root_margin: String,
}

impl Default for ObserverConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            root_margin: "0px".into(),
        }
    }
}

impl ObserverConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(ConfigError::InvalidThreshold(self.threshold));
        }
        if !is_root_margin(&self.root_margin) {
            return Err(ConfigError::InvalidRootMargin(self.root_margin.clone()));
        }
        Ok(())
    }
}

/// CSS margin shorthand as `IntersectionObserver` accepts it: one to four
/// lengths, each `0`, `<n>px` or `<n>%`.
fn is_root_margin(margin: &str) -> bool {
    let parts: Vec<&str> = margin.split_whitespace().collect();
    (1..=4).contains(&parts.len()) && parts.iter().all(|part| is_margin_length(part))
}

fn is_margin_length(part: &str) -> bool {
    if part == "0" {
        return true;
    }
    let number = part
        .strip_suffix("px")
        .or_else(|| part.strip_suffix('%'))
        .map(|n| n.strip_prefix(['-', '+']).unwrap_or(n));
    match number {
        Some(n) if !n.is_empty() => {
            n.chars().all(|c| c.is_ascii_digit() || c == '.') && n.parse::<f64>().is_ok()
        }
        _ => false,
    }
}

/// A live observer registration owned by the host.
pub trait Registration {
    fn disconnect(&mut self);
}

/// Host capability to watch elements crossing the viewport.
pub trait ViewportObserver {
    type Registration: Registration;

    /// Watch every element whose id is in `ids`.
    ///
    /// Fails with [`NavError::ObserverUnavailable`] when the host has no
    /// observer support.
    fn observe(
        &self,
        ids: &[&str],
        config: &ObserverConfig,
        callback: IntersectionCallback,
    ) -> Result<Self::Registration, NavError>;
}

/// Teardown handle returned by [`initialize`].
#[must_use = "dropping the guard disconnects the observer immediately"]
pub struct ObserverGuard<R: Registration> {
    registration: Option<R>,
}

impl<R: Registration> ObserverGuard<R> {
    pub fn new(registration: R) -> Self {
        Self {
            registration: Some(registration),
        }
    }

    pub fn is_active(&self) -> bool {
        self.registration.is_some()
    }

    /// Disconnect now. Consumes the guard, so it cannot run twice.
    pub fn teardown(mut self) {
        self.disconnect();
    }

    fn disconnect(&mut self) {
        if let Some(mut registration) = self.registration.take() {
            registration.disconnect();
            debug!("viewport observer disconnected");
        }
    }
}

impl<R: Registration> Drop for ObserverGuard<R> {
    fn drop(&mut self) {
        self.disconnect();
    }
}

/// Register one observer over all sections in `registry`.
pub fn initialize<O: ViewportObserver>(
    observer: &O,
    registry: &SectionRegistry,
    config: &ObserverConfig,
    callback: IntersectionCallback,
) -> Result<ObserverGuard<O::Registration>, NavError> {
    let ids = registry.ids();
    let registration = observer.observe(&ids, config, callback)?;
    debug!(
        sections = ids.len(),
        threshold = config.threshold,
        "viewport observer registered"
    );
    Ok(ObserverGuard::new(registration))
}
