//! Presentation themes.
//!
//! Both themes render the same controller and content; they differ only in
//! the class names handed to the markup.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Dark slate/purple gradient
    #[default]
    Nebula,
    /// Light paper background with ink accents
    Paper,
}

impl Theme {
    pub const ALL: [Theme; 2] = [Theme::Nebula, Theme::Paper];

    pub fn name(self) -> &'static str {
        match self {
            Theme::Nebula => "nebula",
            Theme::Paper => "paper",
        }
    }

    /// Class applied to the page root.
    pub fn root_class(self) -> &'static str {
        match self {
            Theme::Nebula => "folio theme-nebula",
            Theme::Paper => "folio theme-paper",
        }
    }

    /// Class for a navigation affordance, highlighted when it names the
    /// active section.
    pub fn nav_link_class(self, active: bool) -> &'static str {
        match (self, active) {
            (Theme::Nebula, true) => "nav-link nav-link-active nebula-accent",
            (Theme::Nebula, false) => "nav-link",
            (Theme::Paper, true) => "nav-link nav-link-active paper-accent",
            (Theme::Paper, false) => "nav-link",
        }
    }

    /// Resolve `theme=<name>` from a URL query string, falling back to
    /// `fallback` when the parameter is missing or unknown.
    pub fn from_query(query: &str, fallback: Theme) -> Theme {
        query
            .trim_start_matches('?')
            .split('&')
            .filter_map(|pair| pair.split_once('='))
            .find(|(key, _)| *key == "theme")
            .and_then(|(_, value)| value.parse().ok())
            .unwrap_or(fallback)
    }
}

impl FromStr for Theme {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Theme::ALL
            .into_iter()
            .find(|theme| theme.name() == wanted)
            .ok_or_else(|| ConfigError::UnknownTheme(s.to_string()))
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
