//! Error types for navigation and site configuration.

use thiserror::Error;

/// Failures raised by the section controller.
///
/// Both variants are local and non-fatal. Callers log them and keep the view
/// alive; nothing is retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavError {
    /// The identifier is not a registered section, or the page has no
    /// element carrying it.
    #[error("section not found: {0}")]
    SectionNotFound(String),
    /// The host could not register a viewport observer.
    #[error("viewport observer unavailable: {0}")]
    ObserverUnavailable(String),
}

/// Failures while loading or validating site configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("site must declare at least one section")]
    NoSections,
    #[error("duplicate section id: {0}")]
    DuplicateSection(String),
    #[error("section {0} renders a role already taken by an earlier section")]
    DuplicateRole(String),
    #[error("section id must not be empty")]
    EmptySectionId,
    #[error("intersection threshold {0} is outside 0.0..=1.0")]
    InvalidThreshold(f64),
    #[error("invalid root margin: {0:?}")]
    InvalidRootMargin(String),
    #[error("unknown theme: {0}")]
    UnknownTheme(String),
    #[error("malformed content: {0}")]
    Parse(#[from] serde_json::Error),
}
