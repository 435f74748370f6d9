//! Filter state owned by the panel, and the visibility rule applied to
//! every entry.
//!
//! An entry is visible iff its level is active and, when any tag is active,
//! it carries at least one active tag. An empty tag set means no tag
//! restriction.

use std::collections::{BTreeSet, HashSet};

use crate::entry::EntryMeta;
use crate::level::Level;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    active_levels: BTreeSet<Level>,
    active_tags: HashSet<String>,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            active_levels: Level::ALL.into_iter().collect(),
            active_tags: HashSet::new(),
        }
    }
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip membership of `level`; returns whether it is now active.
    pub fn toggle_level(&mut self, level: Level) -> bool {
        if !self.active_levels.remove(&level) {
            self.active_levels.insert(level);
            return true;
        }
        false
    }

    /// Flip membership of `tag`; returns whether it is now active.
    pub fn toggle_tag(&mut self, tag: &str) -> bool {
        if !self.active_tags.remove(tag) {
            self.active_tags.insert(tag.to_string());
            return true;
        }
        false
    }

    pub fn is_level_active(&self, level: Level) -> bool {
        self.active_levels.contains(&level)
    }

    pub fn is_tag_active(&self, tag: &str) -> bool {
        self.active_tags.contains(tag)
    }

    pub fn is_visible(&self, entry: &EntryMeta) -> bool {
        self.active_levels.contains(&entry.level)
            && (self.active_tags.is_empty() || entry.has_any_tag(&self.active_tags))
    }

    /// Visibility of every entry, recomputed from scratch.
    pub fn compute_visibility<'a>(
        &self,
        entries: impl IntoIterator<Item = &'a EntryMeta>,
    ) -> Vec<bool> {
        entries.into_iter().map(|e| self.is_visible(e)).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FilterStats {
    pub total: usize,
    pub visible: usize,
}

impl FilterStats {
    pub fn from_visibility(visibility: &[bool]) -> Self {
        Self {
            total: visibility.len(),
            visible: visibility.iter().filter(|v| **v).count(),
        }
    }
}
