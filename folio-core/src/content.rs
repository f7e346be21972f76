//! Static portfolio content and site settings.
//!
//! The payload ships as JSON embedded in the binary. It is read once at mount
//! and never mutated afterwards.
//!
//! ```rust
//! use folio_core::content::Portfolio;
//!
//! let portfolio = Portfolio::builtin().unwrap();
//! let sections = portfolio.section_registry().unwrap();
//! assert_eq!(sections.first().id, "home");
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::observer::ObserverConfig;
use crate::sections::{Section, SectionRegistry};
use crate::theme::Theme;

const BUILTIN_CONTENT: &str = include_str!("../content/portfolio.json");

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    pub site: Site,
    pub profile: Profile,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub skills: Vec<SkillGroup>,
}

/// Page-level settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Site {
    pub sections: Vec<Section>,
    #[serde(default)]
    pub observer: ObserverConfig,
    #[serde(default)]
    pub default_theme: Theme,
    #[serde(default)]
    pub footer: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub text: String,
    pub author: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub brand: String,
    pub headline: String,
    pub summary: String,
    #[serde(default)]
    pub about: Vec<String>,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub quote: Option<Quote>,
    pub location: String,
    pub availability: String,
    pub github: String,
    pub linkedin: String,
    pub email: String,
    /// Downloadable CV; the affordance is hidden when absent
    #[serde(default)]
    pub cv_url: Option<String>,
}

impl Profile {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

/// Icon drawn next to a project title.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectIcon {
    Telescope,
    Award,
    Database,
    Cpu,
    #[default]
    Brain,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    /// Technology tags in display order
    #[serde(default)]
    pub tech: Vec<String>,
    pub link: String,
    #[serde(default)]
    pub featured: bool,
    /// Accent key, rendered as the `accent-<key>` class
    #[serde(default)]
    pub accent: String,
    #[serde(default)]
    pub icon: ProjectIcon,
}

impl Project {
    pub fn accent_class(&self) -> String {
        if self.accent.is_empty() {
            "accent-default".into()
        } else {
            format!("accent-{}", self.accent)
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillGroup {
    pub category: String,
    #[serde(default)]
    pub items: Vec<String>,
}

impl Portfolio {
    /// Content compiled into the binary.
    pub fn builtin() -> Result<Self, ConfigError> {
        Self::from_json(BUILTIN_CONTENT)
    }

    /// Parse and validate a JSON payload.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let portfolio: Portfolio = serde_json::from_str(json)?;
        portfolio.section_registry()?;
        portfolio.site.observer.validate()?;
        Ok(portfolio)
    }

    pub fn section_registry(&self) -> Result<SectionRegistry, ConfigError> {
        SectionRegistry::new(self.site.sections.clone())
    }

    pub fn featured(&self) -> impl Iterator<Item = &Project> {
        self.projects.iter().filter(|p| p.featured)
    }
}
