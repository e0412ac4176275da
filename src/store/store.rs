use std::sync::{Arc, RwLock, Weak};

type Subscriber<T> = Arc<dyn Fn(&T) + Send + Sync>;

struct SubscriberList<T> {
    next_id: usize,
    entries: Vec<(usize, Subscriber<T>)>,
}

impl<T> SubscriberList<T> {
    fn new() -> Self {
        Self {
            next_id: 0,
            entries: Vec::new(),
        }
    }
}

/// A container holding one mutable value, notifying subscribers on every
/// write.
///
/// Stores decouple the code that produces a value (a wallet connector, a
/// theme toggle) from the code that renders it: neither side knows about the
/// other, both hold a clone of the same store.
///
/// Every `set` and `update` notifies, even when the new value equals the old
/// one. Consumers are known to rely on redundant notifications, so there is
/// no equality check on the write path.
pub struct Store<T> {
    value: Arc<RwLock<T>>,
    subscribers: Arc<RwLock<SubscriberList<T>>>,
}

impl<T: Clone> Store<T> {
    /// Create a new store seeded with the given value.
    pub fn new(initial: T) -> Self {
        Self {
            value: Arc::new(RwLock::new(initial)),
            subscribers: Arc::new(RwLock::new(SubscriberList::new())),
        }
    }

    /// Get a clone of the current value.
    pub fn get(&self) -> T {
        self.value.read().unwrap().clone()
    }

    /// Read the current value with a function, without cloning.
    pub fn read<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        let value = self.value.read().unwrap();
        f(&value)
    }

    /// Replace the current value and notify all subscribers.
    pub fn set(&self, new_value: T) {
        *self.value.write().unwrap() = new_value;
        self.notify();
    }

    /// Update the value in place and notify all subscribers.
    pub fn update<F>(&self, f: F)
    where
        F: FnOnce(&mut T),
    {
        {
            let mut value = self.value.write().unwrap();
            f(&mut value);
        }
        self.notify();
    }

    /// Subscribe to the store.
    ///
    /// The callback is invoked immediately with the current value, then again
    /// after every subsequent `set` or `update`, in the order subscriptions
    /// were registered. Dropping the returned [`Subscription`] removes the
    /// callback.
    pub fn subscribe<F>(&self, callback: F) -> Subscription<T>
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        let callback: Subscriber<T> = Arc::new(callback);
        let id = {
            let mut subs = self.subscribers.write().unwrap();
            let id = subs.next_id;
            subs.next_id += 1;
            subs.entries.push((id, Arc::clone(&callback)));
            id
        };

        // Call immediately with the current value, outside the list lock
        let current = self.value.read().unwrap().clone();
        callback(&current);

        Subscription {
            id,
            subscribers: Arc::downgrade(&self.subscribers),
        }
    }

    /// Notify all current subscribers with the current value.
    ///
    /// Both locks are released before any callback runs, so a subscriber may
    /// itself call `set` or `subscribe` on this store. A reentrant `set`
    /// completes its own notification pass before the outer pass resumes;
    /// each pass delivers the value captured by its own write.
    fn notify(&self) {
        let value = self.value.read().unwrap().clone();
        let subscribers: Vec<Subscriber<T>> = {
            let subs = self.subscribers.read().unwrap();
            subs.entries.iter().map(|(_, cb)| Arc::clone(cb)).collect()
        };
        for subscriber in subscribers {
            subscriber(&value);
        }
    }
}

impl<T> Clone for Store<T> {
    fn clone(&self) -> Self {
        Self {
            value: Arc::clone(&self.value),
            subscribers: Arc::clone(&self.subscribers),
        }
    }
}

/// RAII handle for a store subscription.
///
/// Holds a weak reference to the subscriber list, so an outstanding handle
/// does not keep a dropped store alive.
pub struct Subscription<T> {
    id: usize,
    subscribers: Weak<RwLock<SubscriberList<T>>>,
}

impl<T> Subscription<T> {
    /// Remove the subscription explicitly. Equivalent to dropping the handle.
    pub fn unsubscribe(self) {}
}

impl<T> Drop for Subscription<T> {
    fn drop(&mut self) {
        if let Some(subscribers) = self.subscribers.upgrade() {
            if let Ok(mut subs) = subscribers.write() {
                subs.entries.retain(|(id, _)| *id != self.id);
            }
        }
    }
}
