use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Which per-sticker delete flow the drawer presents.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Design {
    /// Every sticker carries its own delete glyph.
    #[default]
    SingleDelete,
    /// A header toggle enters select mode; selected stickers are deleted together.
    BulkSelect,
}

/// Catalog indices marked for bulk deletion, kept in ascending order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SelectionSet {
    indices: BTreeSet<usize>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `index` if absent, remove it if present. Returns whether it is
    /// selected afterwards.
    pub fn toggle(&mut self, index: usize) -> bool {
        if self.indices.remove(&index) {
            false
        } else {
            self.indices.insert(index);
            true
        }
    }

    pub fn contains(&self, index: usize) -> bool {
        self.indices.contains(&index)
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn clear(&mut self) {
        self.indices.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.indices.iter().copied()
    }

    /// Follow a single removal at `removed`: drop that index and shift the
    /// ones above it down, so the set keeps pointing at the same stickers.
    pub(crate) fn shift_after_removal(&mut self, removed: usize) {
        self.indices = self
            .indices
            .iter()
            .filter(|&&index| index != removed)
            .map(|&index| if index > removed { index - 1 } else { index })
            .collect();
    }
}

impl FromIterator<usize> for SelectionSet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        Self {
            indices: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_twice_restores_set() {
        let mut selection: SelectionSet = [2, 5].into_iter().collect();
        let before = selection.clone();

        assert!(selection.toggle(3));
        assert!(!selection.toggle(3));
        assert_eq!(selection, before);

        assert!(!selection.toggle(5));
        assert!(selection.toggle(5));
        assert_eq!(selection, before);
    }

    #[test]
    fn iter_is_ascending() {
        let selection: SelectionSet = [4, 0, 2].into_iter().collect();

        assert_eq!(selection.iter().collect::<Vec<_>>(), [0, 2, 4]);
    }

    #[test]
    fn shift_after_removal_tracks_stickers() {
        let mut selection: SelectionSet = [0, 2, 3].into_iter().collect();

        selection.shift_after_removal(2);

        assert_eq!(selection.iter().collect::<Vec<_>>(), [0, 2]);
    }

    #[test]
    fn design_uses_kebab_case_names() {
        let encoded = serde_json::to_string(&Design::BulkSelect).unwrap();
        assert_eq!(encoded, "\"bulk-select\"");
        assert_eq!(Design::default(), Design::SingleDelete);
    }
}
