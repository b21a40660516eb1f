//! # Sticker Drawer
//!
//! State for a bottom-sheet sticker drawer and the canvas it spawns onto.
//!
//! The drawer offers two interchangeable delete flows:
//! - `Design::SingleDelete` - every sticker has a delete glyph; each deletion
//!   is confirmed on its own
//! - `Design::BulkSelect` - a header toggle enters select mode, taps build a
//!   selection, and the whole selection is deleted after one confirmation
//!
//! Tapping a sticker outside select mode spawns a copy of it at a random
//! canvas position.
//!
//! ## Layers
//!
//! - [`StickerDrawer`] - the collection store and its operations
//! - [`DrawerIntent`] - discrete UI events, routed by [`StickerDrawer::dispatch`]
//! - [`DrawerState`] - the snapshot handed to the rendering surface
//! - [`Store`] - the shared container underneath, with change subscriptions

pub mod config;
pub mod drawer;
pub mod error;
pub mod logging;
pub mod sticker;
pub mod store;

// Re-export main types for convenience
pub use config::DrawerConfig;
pub use drawer::{ConfirmationPrompt, DrawerIntent, DrawerState, PromptKind, StickerDrawer};
pub use error::{ConfigError, Result};
pub use sticker::{
    Catalog, Design, FixedPlacement, Placement, PlacementRange, RandomPlacement, SelectionSet,
    SpawnId, SpawnIdAllocator, SpawnedSticker, Sticker,
};
pub use store::{Store, SubscriptionId};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_works() {
        // Basic smoke test
        let drawer = StickerDrawer::from_config(&DrawerConfig::default()).unwrap();
        assert_eq!(drawer.snapshot().catalog().len(), 9);
        assert_eq!(drawer.snapshot().design(), Design::SingleDelete);
    }
}
