//! Shared state container with change notification.
//!
//! The drawer keeps its whole state in one [`Store`]; the rendering surface
//! subscribes to it and re-renders from the published snapshot.

mod store;

pub use store::{Store, SubscriptionId};
