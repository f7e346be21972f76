//! Per-section viewport visibility.
//!
//! Sections that were never reported by the observer are absent from the map.
//! [`VisibilityMap::is_visible`] reads absence as `false`.

use std::collections::BTreeMap;

/// One observer report for one section element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IntersectionEntry {
    pub section_id: String,
    pub is_intersecting: bool,
}

impl IntersectionEntry {
    pub fn new(section_id: impl Into<String>, is_intersecting: bool) -> Self {
        Self {
            section_id: section_id.into(),
            is_intersecting,
        }
    }
}

/// Section id -> "currently intersecting the viewport".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VisibilityMap {
    entries: BTreeMap<String, bool>,
}

impl VisibilityMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Produce a new map holding every previous entry overlaid with `batch`.
    ///
    /// Nothing is ever removed. Within a batch the last report for a section
    /// wins.
    pub fn merged<I>(&self, batch: I) -> VisibilityMap
    where
        I: IntoIterator<Item = IntersectionEntry>,
    {
        let mut entries = self.entries.clone();
        for entry in batch {
            entries.insert(entry.section_id, entry.is_intersecting);
        }
        VisibilityMap { entries }
    }

    /// Last reported value, `None` if the section was never reported.
    pub fn get(&self, id: &str) -> Option<bool> {
        self.entries.get(id).copied()
    }

    pub fn is_visible(&self, id: &str) -> bool {
        self.get(id).unwrap_or(false)
    }

    pub fn visible_ids(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(|(_, visible)| **visible)
            .map(|(id, _)| id.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
