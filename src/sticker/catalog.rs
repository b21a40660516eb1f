use std::fmt;

use serde::{Deserialize, Serialize};

use super::selection::SelectionSet;

/// Opaque reference to sticker artwork: an image path or a color token.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sticker(String);

impl Sticker {
    pub fn new(artwork: impl Into<String>) -> Self {
        Self(artwork.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Sticker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Sticker {
    fn from(artwork: &str) -> Self {
        Self::new(artwork)
    }
}

impl From<String> for Sticker {
    fn from(artwork: String) -> Self {
        Self(artwork)
    }
}

/// A catalog entry paired with its current position.
///
/// The index identifies the slot only within the catalog snapshot it was
/// read from; any removal shifts later slots down by one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CatalogSlot<'a> {
    pub index: usize,
    pub sticker: &'a Sticker,
}

/// Ordered stickers available in the drawer.
///
/// Indices are always `0..len`. Duplicate artwork is allowed; two slots with
/// the same artwork are still distinct entries.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    stickers: Vec<Sticker>,
}

impl Catalog {
    pub fn new<I, S>(stickers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Sticker>,
    {
        Self {
            stickers: stickers.into_iter().map(Into::into).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.stickers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stickers.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Sticker> {
        self.stickers.get(index)
    }

    pub fn contains_index(&self, index: usize) -> bool {
        index < self.stickers.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Sticker> {
        self.stickers.iter()
    }

    pub fn as_slice(&self) -> &[Sticker] {
        &self.stickers
    }

    /// Iterate entries together with their current indices.
    pub fn slots(&self) -> impl Iterator<Item = CatalogSlot<'_>> {
        self.stickers
            .iter()
            .enumerate()
            .map(|(index, sticker)| CatalogSlot { index, sticker })
    }

    /// Remove the entry at `index`, shifting later entries down.
    ///
    /// Out-of-range indices leave the catalog untouched.
    pub fn remove(&mut self, index: usize) -> Option<Sticker> {
        if index < self.stickers.len() {
            Some(self.stickers.remove(index))
        } else {
            None
        }
    }

    /// Remove every entry whose index is in `selection`, returning how many
    /// were removed.
    ///
    /// Indices are matched against this snapshot in one filtering pass, so
    /// the result does not depend on the order of the selection.
    pub fn remove_selected(&mut self, selection: &SelectionSet) -> usize {
        let before = self.stickers.len();
        let mut index = 0;
        self.stickers.retain(|_| {
            let keep = !selection.contains(index);
            index += 1;
            keep
        });
        before - self.stickers.len()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Sticker;
    type IntoIter = std::slice::Iter<'a, Sticker>;

    fn into_iter(self) -> Self::IntoIter {
        self.stickers.iter()
    }
}
