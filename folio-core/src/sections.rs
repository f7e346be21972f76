//! Page sections and the registry that fixes their order.
//!
//! The registry is built once from site configuration and never changes
//! afterwards. Everything that names "the active section" stores an index into
//! it, so an identifier outside the enumeration can never become active.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Which block of the page a section renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionRole {
    Home,
    About,
    Projects,
    Skills,
    Contact,
}

/// A named region of the single-page layout.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Identifier shared with the DOM `id` attribute of the section element
    pub id: String,
    /// Text shown on navigation affordances
    pub label: String,
    pub role: SectionRole,
}

impl Section {
    pub fn new(id: impl Into<String>, label: impl Into<String>, role: SectionRole) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            role,
        }
    }
}

/// Ordered, non-empty, duplicate-free list of sections.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SectionRegistry {
    sections: Vec<Section>,
}

impl SectionRegistry {
    /// Build a registry, rejecting empty lists, empty ids, duplicate ids and
    /// roles rendered twice.
    pub fn new(sections: Vec<Section>) -> Result<Self, ConfigError> {
        if sections.is_empty() {
            return Err(ConfigError::NoSections);
        }
        for (idx, section) in sections.iter().enumerate() {
            if section.id.trim().is_empty() {
                return Err(ConfigError::EmptySectionId);
            }
            if sections[..idx].iter().any(|s| s.id == section.id) {
                return Err(ConfigError::DuplicateSection(section.id.clone()));
            }
            if sections[..idx].iter().any(|s| s.role == section.role) {
                return Err(ConfigError::DuplicateRole(section.id.clone()));
            }
        }
        Ok(Self { sections })
    }

    /// Position of `id` among its siblings.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.sections.iter().position(|s| s.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    /// Id of the section rendering `role`, if the page has one.
    pub fn id_for(&self, role: SectionRole) -> Option<&str> {
        self.sections
            .iter()
            .find(|s| s.role == role)
            .map(|s| s.id.as_str())
    }

    pub fn get(&self, index: usize) -> Option<&Section> {
        self.sections.get(index)
    }

    pub fn first(&self) -> &Section {
        // Non-empty by construction.
        &self.sections[0]
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter()
    }

    pub fn ids(&self) -> Vec<&str> {
        self.sections.iter().map(|s| s.id.as_str()).collect()
    }
}

impl Default for SectionRegistry {
    /// home, about, projects, skills, contact
    fn default() -> Self {
        Self {
            sections: vec![
                Section::new("home", "Home", SectionRole::Home),
                Section::new("about", "About", SectionRole::About),
                Section::new("projects", "Projects", SectionRole::Projects),
                Section::new("skills", "Skills", SectionRole::Skills),
                Section::new("contact", "Contact", SectionRole::Contact),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_registry_order() {
        let registry = SectionRegistry::default();
        assert_eq!(
            registry.ids(),
            vec!["home", "about", "projects", "skills", "contact"]
        );
        assert_eq!(registry.first().id, "home");
        assert_eq!(registry.position("skills"), Some(3));
        assert!(!registry.contains("work"));
    }

    #[test]
    fn rejects_empty_registry() {
        assert!(matches!(
            SectionRegistry::new(vec![]),
            Err(ConfigError::NoSections)
        ));
    }

    #[test]
    fn rejects_duplicates_and_blank_ids() {
        let dup = SectionRegistry::new(vec![
            Section::new("home", "Home", SectionRole::Home),
            Section::new("home", "Again", SectionRole::About),
        ]);
        assert!(matches!(dup, Err(ConfigError::DuplicateSection(id)) if id == "home"));

        let blank = SectionRegistry::new(vec![Section::new("  ", "Blank", SectionRole::Home)]);
        assert!(matches!(blank, Err(ConfigError::EmptySectionId)));
    }

    #[test]
    fn rejects_role_rendered_twice() {
        let twice = SectionRegistry::new(vec![
            Section::new("projects", "Projects", SectionRole::Projects),
            Section::new("work", "Work", SectionRole::Projects),
        ]);
        assert!(matches!(twice, Err(ConfigError::DuplicateRole(id)) if id == "work"));
    }

    #[test]
    fn renamed_section_keeps_its_role() {
        let registry = SectionRegistry::new(vec![
            Section::new("home", "Home", SectionRole::Home),
            Section::new("work", "Work", SectionRole::Projects),
        ])
        .expect("valid registry");

        assert_eq!(registry.id_for(SectionRole::Projects), Some("work"));
        assert_eq!(registry.id_for(SectionRole::Skills), None);
        assert!(!registry.contains("projects"));
    }
}
