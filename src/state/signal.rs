//! Observable value with change subscriptions.

use std::cell::RefCell;
use std::rc::Rc;

type Subscriber<T> = Box<dyn FnMut(&T)>;

/// Handle returned by [`Signal::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionId(usize);

struct Inner<T> {
    value: T,
    next_id: usize,
    subscribers: Vec<(usize, Subscriber<T>)>,
}

/// Shared, single-threaded value. Clones point at the same value.
///
/// Subscribers run after every `set`/`update`, in subscription order, with
/// the new value. They must not write back into the same signal.
pub struct Signal<T> {
    inner: Rc<RefCell<Inner<T>>>,
}

impl<T> Clone for Signal<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Signal<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Signal").field(&self.inner.borrow().value).finish()
    }
}

impl<T: Clone> Signal<T> {
    pub fn get(&self) -> T {
        self.inner.borrow().value.clone()
    }
}

impl<T> Signal<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                value,
                next_id: 0,
                subscribers: Vec::new(),
            })),
        }
    }

    /// Borrow the current value without cloning.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.borrow().value)
    }

    pub fn set(&self, value: T) {
        self.inner.borrow_mut().value = value;
        self.notify();
    }

    pub fn update(&self, f: impl FnOnce(&mut T)) {
        f(&mut self.inner.borrow_mut().value);
        self.notify();
    }

    pub fn subscribe(&self, f: impl FnMut(&T) + 'static) -> SubscriptionId {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.subscribers.push((id, Box::new(f)));
        SubscriptionId(id)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.inner
            .borrow_mut()
            .subscribers
            .retain(|(sub, _)| *sub != id.0);
    }

    fn notify(&self) {
        // Subscribers are taken out while they run so they may read the signal.
        let mut subscribers = std::mem::take(&mut self.inner.borrow_mut().subscribers);
        {
            let inner = self.inner.borrow();
            for (_, subscriber) in subscribers.iter_mut() {
                subscriber(&inner.value);
            }
        }
        let mut inner = self.inner.borrow_mut();
        subscribers.append(&mut inner.subscribers);
        inner.subscribers = subscribers;
    }
}
