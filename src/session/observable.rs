//! A single mutable cell with change notification.
//!
//! Thin wrapper over [`tokio::sync::watch`]: one writer publishes a value,
//! any number of readers see the latest value synchronously and can await
//! the next change.

use tokio::sync::watch;

/// A value with publish/subscribe change notification.
///
/// # Example
///
/// ```ignore
/// use zoneblog::session::Observable;
///
/// let cell = Observable::new(0);
/// let mut rx = cell.subscribe();
/// cell.set(1);
/// rx.changed().await?;
/// assert_eq!(*rx.borrow(), 1);
/// ```
#[derive(Debug)]
pub struct Observable<T> {
    tx: watch::Sender<T>,
}

impl<T> Observable<T> {
    /// Create a cell holding `initial`.
    pub fn new(initial: T) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx }
    }

    /// Replace the value and notify subscribers. Works with no subscribers.
    pub fn set(&self, value: T) {
        self.tx.send_replace(value);
    }

    /// Modify the value in place and notify subscribers.
    pub fn update(&self, f: impl FnOnce(&mut T)) {
        self.tx.send_modify(f);
    }

    /// A new subscriber that starts out having seen the current value.
    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.tx.subscribe()
    }

    /// Number of live subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl<T: Clone> Observable<T> {
    /// Clone of the current value.
    pub fn get(&self) -> T {
        self.tx.borrow().clone()
    }
}

impl<T: Default> Default for Observable<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}
