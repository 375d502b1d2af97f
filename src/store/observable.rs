//! Observable value container with ordered synchronous subscribers.
//!
//! DESIGN
//! ======
//! A handle owns a shared current value plus the list of callbacks registered
//! against it. Every mutation notifies all subscribers synchronously, in
//! registration order. Subscribing delivers the current value immediately so
//! persistence subscribers also run once at construction.
//!
//! The lock is never held while a callback runs. Mutations made from inside a
//! callback are queued and delivered after the current round completes, so
//! every subscriber observes values in the order they were set.
//!
//! TRADE-OFFS
//! ==========
//! The client is single-threaded, but handles are `Send + Sync` so they can be
//! placed in Leptos context. A `std::sync::Mutex` is enough for that and is
//! uncontended in practice.

#[cfg(test)]
#[path = "observable_test.rs"]
mod observable_test;

use std::collections::VecDeque;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard};

type Callback<T> = Arc<dyn Fn(&T) + Send + Sync>;

/// Handle returned by [`Observable::subscribe`], used to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Shared observable value. Clones refer to the same underlying state.
pub struct Observable<T> {
    inner: Arc<Mutex<Inner<T>>>,
}

struct Inner<T> {
    value: T,
    next_id: u64,
    subscribers: Vec<(SubscriptionId, Callback<T>)>,
    /// Notifications waiting to be delivered: value snapshot plus the
    /// subscriber list at the time of the mutation.
    pending: VecDeque<(T, Vec<Callback<T>>)>,
    notifying: bool,
}

impl<T> Clone for Observable<T> {
    fn clone(&self) -> Self {
        Self { inner: Arc::clone(&self.inner) }
    }
}

impl<T> Observable<T>
where
    T: Clone + Send + 'static,
{
    #[must_use]
    pub fn new(value: T) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                value,
                next_id: 0,
                subscribers: Vec::new(),
                pending: VecDeque::new(),
                notifying: false,
            })),
        }
    }

    /// Clone of the current value.
    #[must_use]
    pub fn get(&self) -> T {
        self.lock().value.clone()
    }

    /// Borrow the current value without cloning it.
    ///
    /// `f` runs under the internal lock and must not touch this observable.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.lock().value)
    }

    /// Register `callback`, immediately calling it with the current value.
    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        let callback: Callback<T> = Arc::new(callback);
        let (id, current) = {
            let mut inner = self.lock();
            let id = SubscriptionId(inner.next_id);
            inner.next_id += 1;
            inner.subscribers.push((id, Arc::clone(&callback)));
            (id, inner.value.clone())
        };
        callback(&current);
        id
    }

    /// Remove a subscriber. Returns `false` if `id` was not registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut inner = self.lock();
        let before = inner.subscribers.len();
        inner.subscribers.retain(|(sub_id, _)| *sub_id != id);
        inner.subscribers.len() != before
    }

    /// Replace the value and notify every subscriber.
    pub fn set(&self, value: T) {
        self.mutate(|current| *current = value);
    }

    /// Mutate the value in place and notify every subscriber.
    pub fn update(&self, f: impl FnOnce(&mut T)) {
        self.mutate(f);
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.lock().subscribers.len()
    }

    fn mutate(&self, f: impl FnOnce(&mut T)) {
        {
            let mut inner = self.lock();
            f(&mut inner.value);
            let snapshot = inner.value.clone();
            let callbacks = inner.subscribers.iter().map(|(_, cb)| Arc::clone(cb)).collect();
            inner.pending.push_back((snapshot, callbacks));
            if inner.notifying {
                // An outer `mutate` is draining the queue and will deliver this.
                return;
            }
            inner.notifying = true;
        }
        self.drain();
    }

    fn drain(&self) {
        loop {
            let next = {
                let mut inner = self.lock();
                let next = inner.pending.pop_front();
                if next.is_none() {
                    inner.notifying = false;
                }
                next
            };
            let Some((value, callbacks)) = next else {
                return;
            };
            for callback in callbacks {
                callback(&value);
            }
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner<T>> {
        self.inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl<T> Default for Observable<T>
where
    T: Clone + Default + Send + 'static,
{
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T> fmt::Debug for Observable<T>
where
    T: Clone + fmt::Debug + Send + 'static,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.lock();
        f.debug_struct("Observable")
            .field("value", &inner.value)
            .field("subscribers", &inner.subscribers.len())
            .finish()
    }
}
