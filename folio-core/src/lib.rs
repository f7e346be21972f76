//! # folio-core
//!
//! Target-independent core of the folio portfolio page: which section is
//! active, which sections are on screen, and the static content the page
//! renders.
//!
//! Browser specifics stay behind two traits so the logic runs under plain
//! `cargo test`:
//!
//! - [`ScrollHost`] finds section elements and issues smooth scrolls
//! - [`ViewportObserver`] reports sections crossing the visibility threshold
//!
//! ```rust
//! use folio_core::{ScrollBehavior, ScrollHost, SectionController, SectionRegistry};
//!
//! struct Headless;
//!
//! impl ScrollHost for Headless {
//!     type Target = ();
//!     fn locate(&self, _id: &str) -> Option<()> { Some(()) }
//!     fn scroll_into_view(&self, _target: &(), _behavior: ScrollBehavior) {}
//! }
//!
//! let mut nav = SectionController::new(SectionRegistry::default(), Headless);
//! assert_eq!(nav.active_id(), "home");
//! nav.navigate_to("projects").unwrap();
//! assert_eq!(nav.active_id(), "projects");
//! assert!(nav.navigate_to("nonexistent").is_err());
//! ```

pub mod content;
pub mod controller;
pub mod error;
pub mod observer;
pub mod sections;
pub mod theme;
pub mod visibility;

pub use controller::{ScrollBehavior, ScrollHost, SectionController};
pub use error::{ConfigError, NavError};
pub use observer::{
    DEFAULT_THRESHOLD, IntersectionCallback, ObserverConfig, ObserverGuard, Registration,
    ViewportObserver, initialize,
};
pub use sections::{Section, SectionRegistry, SectionRole};
pub use theme::Theme;
pub use visibility::{IntersectionEntry, VisibilityMap};
