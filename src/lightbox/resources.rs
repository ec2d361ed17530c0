//! Page-wide side effects held by an open lightbox.
//!
//! Two resources belong to the Open state: the scroll lock on the page root
//! and the window keydown listener. Both are reached through collaborator
//! traits so the controller never touches a global directly, and both are
//! held through guards whose `Drop` releases them. However the Open state
//! ends (explicit close, controller dropped, page torn down) the release
//! runs exactly once.
//!
//! Everything here is single-threaded: collaborators are shared through
//! `Rc` and implementations use interior mutability.

use std::fmt;
use std::rc::Rc;

/// Suppresses background scrolling while an overlay is shown.
pub trait ScrollLock {
    fn activate_scroll_lock(&self);
    fn deactivate_scroll_lock(&self);
}

/// Handle for a registered key listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(pub u64);

impl fmt::Display for ListenerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Registry of window-level keydown listeners.
pub trait KeyListeners {
    fn register_key_listener(&self) -> ListenerId;
    fn unregister_key_listener(&self, id: ListenerId);
}

/// Holds the scroll lock until dropped.
pub struct ScrollLockGuard {
    lock: Rc<dyn ScrollLock>,
}

impl ScrollLockGuard {
    pub fn acquire(lock: Rc<dyn ScrollLock>) -> Self {
        lock.activate_scroll_lock();
        log::debug!("scroll lock acquired");
        Self { lock }
    }
}

impl Drop for ScrollLockGuard {
    fn drop(&mut self) {
        self.lock.deactivate_scroll_lock();
        log::debug!("scroll lock released");
    }
}

impl fmt::Debug for ScrollLockGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ScrollLockGuard")
    }
}

/// Keeps one key listener registered until dropped.
pub struct KeyListenerGuard {
    registry: Rc<dyn KeyListeners>,
    id: ListenerId,
}

impl KeyListenerGuard {
    pub fn register(registry: Rc<dyn KeyListeners>) -> Self {
        let id = registry.register_key_listener();
        log::debug!("key listener {id} registered");
        Self { registry, id }
    }

    pub fn id(&self) -> ListenerId {
        self.id
    }
}

impl Drop for KeyListenerGuard {
    fn drop(&mut self) {
        self.registry.unregister_key_listener(self.id);
        log::debug!("key listener {} unregistered", self.id);
    }
}

impl fmt::Debug for KeyListenerGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyListenerGuard")
            .field("id", &self.id)
            .finish()
    }
}

/// Resources tied to one Open period.
///
/// Fields drop in declaration order, so the key listener goes away before
/// the scroll lock is lifted (reverse of acquisition).
#[derive(Debug)]
pub(crate) struct OpenSession {
    keys: KeyListenerGuard,
    _scroll_lock: ScrollLockGuard,
}

impl OpenSession {
    pub(crate) fn begin(scroll_lock: Rc<dyn ScrollLock>, keys: Rc<dyn KeyListeners>) -> Self {
        let scroll_lock = ScrollLockGuard::acquire(scroll_lock);
        let keys = KeyListenerGuard::register(keys);
        Self {
            keys,
            _scroll_lock: scroll_lock,
        }
    }

    pub(crate) fn listener(&self) -> ListenerId {
        self.keys.id()
    }
}
