//! Sticker domain types.
//!
//! - [`Catalog`] - ordered artwork available in the drawer
//! - [`SelectionSet`] and [`Design`] - bulk-delete selection and the active delete flow
//! - [`SpawnedSticker`] and [`SpawnIdAllocator`] - canvas copies and their identities
//! - [`Placement`] - where a spawned copy lands

mod catalog;
mod placement;
mod selection;
mod spawn;

pub use catalog::{Catalog, CatalogSlot, Sticker};
pub use placement::{AxisRange, FixedPlacement, Placement, PlacementRange, RandomPlacement};
pub use selection::{Design, SelectionSet};
pub use spawn::{SpawnId, SpawnIdAllocator, SpawnedSticker};
