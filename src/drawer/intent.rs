//! Discrete UI events and how they map onto drawer operations.

use tracing::trace;

use super::drawer::StickerDrawer;
use super::state::{DrawerState, TapAction};
use crate::sticker::Design;

/// Input from the rendering surface. Intents carry no mutation logic;
/// [`StickerDrawer::dispatch`] decides which operation each one becomes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawerIntent {
    /// A catalog sticker was tapped
    StickerTapped { index: usize },
    /// The per-sticker delete glyph was tapped (single-delete design)
    DeleteGlyphTapped { index: usize },
    DeleteConfirmed,
    DeleteCancelled,
    /// Header bin toggled (bulk-select design)
    SelectModeToggled,
    /// "Delete N stickers" button pressed
    BulkDeleteRequested,
    BulkDeleteConfirmed,
    BulkDeleteCancelled,
    DesignSwitched { design: Design },
    DrawerOpened,
    DrawerClosed,
}

impl StickerDrawer {
    /// Apply one UI event and return the resulting state.
    ///
    /// A sticker tap toggles its selection while bulk select mode is active
    /// and spawns a copy otherwise. A bulk delete request with nothing
    /// selected is dropped, like the disabled button it comes from.
    pub fn dispatch(&self, intent: DrawerIntent) -> DrawerState {
        match intent {
            DrawerIntent::StickerTapped { index } => match self.read(|s| s.tap_action(index)) {
                Some(TapAction::ToggleSelection(index)) => self.toggle_selection(index),
                Some(TapAction::Spawn(sticker)) => {
                    self.spawn(sticker);
                    self.snapshot()
                }
                None => {
                    trace!(index, "tap outside catalog");
                    self.snapshot()
                }
            },
            DrawerIntent::DeleteGlyphTapped { index } => self.request_delete(index),
            DrawerIntent::DeleteConfirmed => self.confirm_delete(),
            DrawerIntent::DeleteCancelled => self.cancel_delete(),
            DrawerIntent::SelectModeToggled => self.toggle_select_mode(),
            DrawerIntent::BulkDeleteRequested => {
                if self.read(DrawerState::can_request_bulk_delete) {
                    self.request_bulk_delete()
                } else {
                    trace!("bulk delete requested with nothing selected");
                    self.snapshot()
                }
            }
            DrawerIntent::BulkDeleteConfirmed => self.confirm_bulk_delete(),
            DrawerIntent::BulkDeleteCancelled => self.cancel_bulk_delete(),
            DrawerIntent::DesignSwitched { design } => self.switch_design(design),
            DrawerIntent::DrawerOpened => self.open(),
            DrawerIntent::DrawerClosed => self.close(),
        }
    }
}
