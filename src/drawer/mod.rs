//! The sticker collection store and the views derived from it.

mod drawer;
mod intent;
mod prompt;
mod state;

pub use drawer::StickerDrawer;
pub use intent::DrawerIntent;
pub use prompt::{bulk_delete_label, ConfirmationPrompt, PromptKind};
pub use state::{DrawerState, TapAction, EMPTY_CATALOG_MESSAGE};
