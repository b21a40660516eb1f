use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, OnceLock};

use serde::{Deserialize, Serialize};

use super::catalog::Sticker;

/// Identity of one spawned copy. Never reused within a process.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpawnId(u64);

impl SpawnId {
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for SpawnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A sticker copy placed on the canvas.
///
/// `x` and `y` are percentages of the viewport.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpawnedSticker {
    pub artwork: Sticker,
    pub id: SpawnId,
    pub x: f64,
    pub y: f64,
}

/// Monotonic source of [`SpawnId`]s.
///
/// There is no reset: once an id is handed out it stays taken. The only
/// instance outside this module is the process-wide one from
/// [`SpawnIdAllocator::global`], which every drawer shares.
#[derive(Debug)]
pub struct SpawnIdAllocator {
    next: AtomicU64,
}

impl SpawnIdAllocator {
    fn new() -> Self {
        Self {
            next: AtomicU64::new(0),
        }
    }

    #[cfg(test)]
    fn starting_at(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first),
        }
    }

    /// The process-wide allocator, initialized on first use.
    pub fn global() -> Arc<Self> {
        static ALLOCATOR: OnceLock<Arc<SpawnIdAllocator>> = OnceLock::new();
        Arc::clone(ALLOCATOR.get_or_init(|| Arc::new(Self::new())))
    }

    /// Take the next id.
    pub fn next_id(&self) -> SpawnId {
        SpawnId(self.next.fetch_add(1, Ordering::Relaxed))
    }
}
