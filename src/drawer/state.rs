use serde::Serialize;

use super::prompt::{bulk_delete_label, ConfirmationPrompt};
use crate::sticker::{Catalog, Design, SelectionSet, SpawnedSticker, Sticker};

pub const EMPTY_CATALOG_MESSAGE: &str = "All stickers deleted.";

/// What tapping a catalog sticker does in the current mode.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TapAction {
    ToggleSelection(usize),
    Spawn(Sticker),
}

/// Snapshot of everything the rendering surface draws.
///
/// Obtained from [`StickerDrawer::snapshot`](crate::StickerDrawer::snapshot)
/// or returned by each drawer operation. Changing a snapshot has no effect on
/// the drawer it came from, so fields are read through accessors.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DrawerState {
    catalog: Catalog,
    spawned: Vec<SpawnedSticker>,
    design: Design,
    select_mode: bool,
    selection: SelectionSet,
    pending_delete: Option<usize>,
    pending_bulk_delete: bool,
    open: bool,
}

impl DrawerState {
    pub(crate) fn new(catalog: Catalog, design: Design) -> Self {
        Self {
            catalog,
            spawned: Vec::new(),
            design,
            select_mode: false,
            selection: SelectionSet::new(),
            pending_delete: None,
            pending_bulk_delete: false,
            open: true,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn spawned(&self) -> &[SpawnedSticker] {
        &self.spawned
    }

    pub fn design(&self) -> Design {
        self.design
    }

    pub fn select_mode(&self) -> bool {
        self.select_mode
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    pub fn pending_delete(&self) -> Option<usize> {
        self.pending_delete
    }

    pub fn pending_bulk_delete(&self) -> bool {
        self.pending_bulk_delete
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selection.contains(index)
    }

    pub fn is_catalog_empty(&self) -> bool {
        self.catalog.is_empty()
    }

    /// Placeholder shown in place of the grid once every sticker is gone.
    pub fn empty_catalog_message(&self) -> Option<&'static str> {
        self.catalog.is_empty().then_some(EMPTY_CATALOG_MESSAGE)
    }

    /// Per-sticker delete glyphs are drawn under the single-delete design.
    pub fn shows_delete_affordance(&self) -> bool {
        self.design == Design::SingleDelete
    }

    /// Selection checkboxes are drawn while bulk select mode is active.
    pub fn shows_selection_overlay(&self) -> bool {
        self.in_bulk_selection()
    }

    /// The bulk delete button is enabled only with something selected.
    pub fn can_request_bulk_delete(&self) -> bool {
        self.in_bulk_selection() && !self.selection.is_empty()
    }

    pub fn bulk_delete_label(&self) -> String {
        bulk_delete_label(self.selection.len())
    }

    /// Dialog for whichever deletion awaits confirmation, if any.
    pub fn confirmation_prompt(&self) -> Option<ConfirmationPrompt> {
        if let Some(index) = self.pending_delete {
            Some(ConfirmationPrompt::single(index))
        } else if self.pending_bulk_delete {
            Some(ConfirmationPrompt::bulk(self.selection.len()))
        } else {
            None
        }
    }

    /// Resolve a tap on catalog slot `index`. `None` when the slot is gone.
    pub fn tap_action(&self, index: usize) -> Option<TapAction> {
        let sticker = self.catalog.get(index)?;
        if self.in_bulk_selection() {
            Some(TapAction::ToggleSelection(index))
        } else {
            Some(TapAction::Spawn(sticker.clone()))
        }
    }

    fn in_bulk_selection(&self) -> bool {
        self.design == Design::BulkSelect && self.select_mode
    }

    pub(crate) fn push_spawned(&mut self, sticker: SpawnedSticker) {
        self.spawned.push(sticker);
    }

    /// Returns `false` when `index` is outside the catalog.
    pub(crate) fn request_delete(&mut self, index: usize) -> bool {
        if !self.catalog.contains_index(index) {
            return false;
        }
        self.pending_delete = Some(index);
        true
    }

    /// The pending index is read against the catalog as it is now.
    pub(crate) fn confirm_delete(&mut self) -> Option<(usize, Option<Sticker>)> {
        let index = self.pending_delete.take()?;
        let removed = self.catalog.remove(index);
        if removed.is_some() {
            self.selection.shift_after_removal(index);
        }
        Some((index, removed))
    }

    pub(crate) fn cancel_delete(&mut self) -> Option<usize> {
        self.pending_delete.take()
    }

    pub(crate) fn toggle_select_mode(&mut self) -> bool {
        self.select_mode = !self.select_mode;
        self.selection.clear();
        self.select_mode
    }

    /// `None` for indices outside the catalog; otherwise whether `index` is
    /// selected afterwards.
    pub(crate) fn toggle_selection(&mut self, index: usize) -> Option<bool> {
        if !self.catalog.contains_index(index) {
            return None;
        }
        Some(self.selection.toggle(index))
    }

    pub(crate) fn request_bulk_delete(&mut self) {
        self.pending_bulk_delete = true;
    }

    /// Returns how many stickers were removed.
    pub(crate) fn confirm_bulk_delete(&mut self) -> usize {
        let removed = self.catalog.remove_selected(&self.selection);
        self.selection.clear();
        self.pending_bulk_delete = false;
        self.select_mode = false;
        removed
    }

    pub(crate) fn cancel_bulk_delete(&mut self) -> bool {
        std::mem::replace(&mut self.pending_bulk_delete, false)
    }

    pub(crate) fn switch_design(&mut self, design: Design) {
        self.design = design;
        self.select_mode = false;
        self.selection.clear();
    }

    pub(crate) fn set_open(&mut self, open: bool) {
        self.open = open;
    }
}
