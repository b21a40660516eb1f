use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

type Subscriber<T> = Box<dyn Fn(&T) + Send + Sync>;

/// Handle returned by [`Store::subscribe`], used to detach the callback again.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

struct Subscribers<T> {
    next_id: u64,
    entries: Vec<(SubscriptionId, Subscriber<T>)>,
}

/// A shared state container that publishes a snapshot after every change.
///
/// Cloning a `Store` yields another handle to the same state. Each
/// [`update`](Store::update) runs and notifies under a single write lock, so
/// readers never observe a half-applied transition and subscribers see
/// exactly the state that transition produced.
pub struct Store<T> {
    state: Arc<RwLock<T>>,
    subscribers: Arc<RwLock<Subscribers<T>>>,
}

// Poisoning is ignored: the guarded values are plain data.
fn read_lock<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

fn write_lock<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}

impl<T: Clone> Store<T> {
    /// Create a new store with the given initial state.
    pub fn new(initial: T) -> Self {
        Self {
            state: Arc::new(RwLock::new(initial)),
            subscribers: Arc::new(RwLock::new(Subscribers {
                next_id: 0,
                entries: Vec::new(),
            })),
        }
    }

    /// Get a clone of the current state.
    pub fn get(&self) -> T {
        read_lock(&self.state).clone()
    }

    /// Apply `f` to the state, notify subscribers, and return `f`'s result.
    ///
    /// This is the transition primitive the drawer operations are built on.
    pub fn update<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut T) -> R,
    {
        let mut state = write_lock(&self.state);
        let result = f(&mut *state);
        self.notify(&*state);
        result
    }

    /// Replace the state wholesale.
    pub fn set(&self, new_state: T) {
        let mut state = write_lock(&self.state);
        *state = new_state;
        self.notify(&*state);
    }

    /// Subscribe to state changes.
    ///
    /// The callback runs after every `update` or `set`, with the new state,
    /// while the store is still locked. It must not call back into the same
    /// store.
    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        let mut subscribers = write_lock(&self.subscribers);
        let id = SubscriptionId(subscribers.next_id);
        subscribers.next_id += 1;
        subscribers.entries.push((id, Box::new(callback)));
        id
    }

    /// Detach a subscriber. Returns `false` if it was already gone.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subscribers = write_lock(&self.subscribers);
        let before = subscribers.entries.len();
        subscribers.entries.retain(|(entry, _)| *entry != id);
        subscribers.entries.len() != before
    }

    fn notify(&self, state: &T) {
        let subscribers = read_lock(&self.subscribers);
        for (_, subscriber) in subscribers.entries.iter() {
            subscriber(state);
        }
    }

    /// Read state without cloning it.
    pub fn read<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        let state = read_lock(&self.state);
        f(&*state)
    }
}

impl<T> Clone for Store<T> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            subscribers: Arc::clone(&self.subscribers),
        }
    }
}
