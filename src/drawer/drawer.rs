use std::sync::Arc;

use tracing::{debug, trace};

use super::state::DrawerState;
use crate::config::DrawerConfig;
use crate::error::Result;
use crate::sticker::{
    Catalog, Design, Placement, PlacementRange, RandomPlacement, SpawnIdAllocator,
    SpawnedSticker, Sticker,
};
use crate::store::{Store, SubscriptionId};

/// The sticker collection store.
///
/// Holds the catalog, the stickers spawned onto the canvas, and the
/// selection/confirmation state of both delete flows. Every operation applies
/// its whole transition at once and returns the resulting snapshot;
/// subscribers receive the same snapshot.
///
/// Operations are meant to be driven by one user, one event at a time.
/// [`request_delete`](Self::request_delete) captures a catalog *index*, and
/// [`confirm_delete`](Self::confirm_delete) removes whatever sits at that
/// index when it runs. Nothing else mutates the catalog between the two in
/// that model; a host that interleaves other deletions must not rely on the
/// pending index still naming the same sticker.
///
/// # Examples
///
/// ```
/// use sticker_drawer::{Catalog, FixedPlacement, StickerDrawer};
///
/// let drawer = StickerDrawer::new(Catalog::new(["A", "B", "C"]))
///     .with_placement(FixedPlacement::new(50.0, 50.0));
///
/// drawer.request_delete(1);
/// let state = drawer.confirm_delete();
/// assert_eq!(state.catalog().len(), 2);
///
/// let spawned = drawer.spawn("A");
/// assert_eq!(spawned.len(), 1);
/// ```
pub struct StickerDrawer {
    store: Store<DrawerState>,
    ids: Arc<SpawnIdAllocator>,
    placement: Box<dyn Placement>,
    range: PlacementRange,
}

impl StickerDrawer {
    /// Seed a drawer with `catalog`, the single-delete design, and random
    /// placement. Spawn ids always come from the process-wide allocator.
    pub fn new(catalog: Catalog) -> Self {
        Self::with_design(catalog, Design::default())
    }

    pub fn with_design(catalog: Catalog, design: Design) -> Self {
        debug!(stickers = catalog.len(), ?design, "seeded sticker drawer");
        Self {
            store: Store::new(DrawerState::new(catalog, design)),
            ids: SpawnIdAllocator::global(),
            placement: Box::new(RandomPlacement::new()),
            range: PlacementRange::default(),
        }
    }

    pub fn from_config(config: &DrawerConfig) -> Result<Self> {
        config.validate()?;
        let mut drawer = Self::with_design(config.seed_catalog(), config.design);
        drawer.range = config.placement;
        Ok(drawer)
    }

    /// Replace the coordinate generator used by [`spawn`](Self::spawn).
    pub fn with_placement(mut self, placement: impl Placement + 'static) -> Self {
        self.placement = Box::new(placement);
        self
    }

    pub fn placement_range(&self) -> &PlacementRange {
        &self.range
    }

    /// Current state.
    pub fn snapshot(&self) -> DrawerState {
        self.store.get()
    }

    /// Borrow the current state without cloning it.
    pub fn read<R>(&self, f: impl FnOnce(&DrawerState) -> R) -> R {
        self.store.read(f)
    }

    /// Call `callback` with the new state after every operation.
    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&DrawerState) + Send + Sync + 'static,
    {
        self.store.subscribe(callback)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.store.unsubscribe(id)
    }

    /// Place a copy of `artwork` on the canvas and return the spawned list.
    ///
    /// The artwork does not have to be in the catalog; spawned copies outlive
    /// catalog deletions.
    pub fn spawn(&self, artwork: impl Into<Sticker>) -> Vec<SpawnedSticker> {
        let artwork = artwork.into();
        let id = self.ids.next_id();
        let (x, y) = self.placement.place(&self.range);
        self.store.update(|state| {
            debug!(%artwork, %id, x, y, "spawned sticker");
            state.push_spawned(SpawnedSticker { artwork, id, x, y });
            state.spawned().to_vec()
        })
    }

    /// Mark catalog slot `index` for deletion pending confirmation.
    ///
    /// Indices outside the catalog are ignored.
    pub fn request_delete(&self, index: usize) -> DrawerState {
        self.transition(|state| {
            if state.request_delete(index) {
                debug!(index, "delete requested");
            } else {
                trace!(index, len = state.catalog().len(), "delete request out of range");
            }
        })
    }

    /// Remove the sticker at the pending index and clear the marker.
    pub fn confirm_delete(&self) -> DrawerState {
        self.transition(|state| match state.confirm_delete() {
            Some((index, Some(sticker))) => debug!(index, %sticker, "deleted sticker"),
            Some((index, None)) => trace!(index, "pending index no longer in catalog"),
            None => trace!("confirm without pending delete"),
        })
    }

    pub fn cancel_delete(&self) -> DrawerState {
        self.transition(|state| {
            if let Some(index) = state.cancel_delete() {
                debug!(index, "delete cancelled");
            }
        })
    }

    /// Enter or leave select mode. The selection starts empty either way.
    pub fn toggle_select_mode(&self) -> DrawerState {
        self.transition(|state| {
            let active = state.toggle_select_mode();
            debug!(active, "select mode toggled");
        })
    }

    /// Flip whether catalog slot `index` is selected.
    ///
    /// Whether selecting is allowed in the current mode is the caller's
    /// concern; [`dispatch`](Self::dispatch) routes taps accordingly.
    pub fn toggle_selection(&self, index: usize) -> DrawerState {
        self.transition(|state| match state.toggle_selection(index) {
            Some(selected) => debug!(
                index,
                selected,
                count = state.selection().len(),
                "selection toggled"
            ),
            None => trace!(index, "selection toggle out of range"),
        })
    }

    /// Mark the current selection for deletion pending confirmation.
    ///
    /// An empty selection is accepted; the rendering surface keeps the
    /// button disabled in that case.
    pub fn request_bulk_delete(&self) -> DrawerState {
        self.transition(|state| {
            state.request_bulk_delete();
            debug!(count = state.selection().len(), "bulk delete requested");
        })
    }

    /// Remove every selected sticker, clear the selection and the bulk
    /// marker, and leave select mode, as one transition.
    pub fn confirm_bulk_delete(&self) -> DrawerState {
        self.transition(|state| {
            let removed = state.confirm_bulk_delete();
            debug!(removed, remaining = state.catalog().len(), "bulk deleted stickers");
        })
    }

    /// Dismiss the bulk confirmation. Selection and select mode stay as they were.
    pub fn cancel_bulk_delete(&self) -> DrawerState {
        self.transition(|state| {
            if state.cancel_bulk_delete() {
                debug!(count = state.selection().len(), "bulk delete cancelled");
            }
        })
    }

    /// Switch delete flow. Select mode and selection are reset.
    pub fn switch_design(&self, design: Design) -> DrawerState {
        self.transition(|state| {
            state.switch_design(design);
            debug!(?design, "design switched");
        })
    }

    pub fn open(&self) -> DrawerState {
        self.set_open(true)
    }

    pub fn close(&self) -> DrawerState {
        self.set_open(false)
    }

    fn set_open(&self, open: bool) -> DrawerState {
        self.transition(|state| {
            state.set_open(open);
            debug!(open, "drawer visibility changed");
        })
    }

    fn transition(&self, f: impl FnOnce(&mut DrawerState)) -> DrawerState {
        self.store.update(|state| {
            f(state);
            state.clone()
        })
    }
}
