//! In-process model of the hosting document.
//!
//! Stands in for the browser's `document.body.classList` and the window's
//! keydown listener list. It is the production implementation of both
//! lightbox collaborators: the site generator reads its body classes to
//! decide what each pre-rendered page looks like, and `replay` reports them.

use crate::lightbox::resources::{KeyListeners, ListenerId, ScrollLock};
use std::cell::{Cell, RefCell};
use std::collections::BTreeSet;

/// Body class that suppresses background scrolling (see `static/style.css`).
pub const SCROLL_LOCK_CLASS: &str = "lightbox-open";

#[derive(Debug, Default)]
pub struct PageDocument {
    body_classes: RefCell<BTreeSet<String>>,
    key_listeners: RefCell<BTreeSet<ListenerId>>,
    next_listener: Cell<u64>,
}

impl PageDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Body classes in sorted order.
    pub fn body_classes(&self) -> Vec<String> {
        self.body_classes.borrow().iter().cloned().collect()
    }

    /// Classes joined for a `class` attribute, or `None` when there are none.
    pub fn body_class_attr(&self) -> Option<String> {
        let classes = self.body_classes.borrow();
        if classes.is_empty() {
            None
        } else {
            Some(classes.iter().cloned().collect::<Vec<_>>().join(" "))
        }
    }

    pub fn is_scroll_locked(&self) -> bool {
        self.body_classes.borrow().contains(SCROLL_LOCK_CLASS)
    }

    pub fn key_listener_count(&self) -> usize {
        self.key_listeners.borrow().len()
    }

    /// Whether a keydown would reach any listener.
    pub fn has_key_listener(&self) -> bool {
        !self.key_listeners.borrow().is_empty()
    }
}

impl ScrollLock for PageDocument {
    fn activate_scroll_lock(&self) {
        self.body_classes
            .borrow_mut()
            .insert(SCROLL_LOCK_CLASS.to_string());
    }

    fn deactivate_scroll_lock(&self) {
        self.body_classes.borrow_mut().remove(SCROLL_LOCK_CLASS);
    }
}

impl KeyListeners for PageDocument {
    fn register_key_listener(&self) -> ListenerId {
        let id = ListenerId(self.next_listener.get());
        self.next_listener.set(id.0 + 1);
        self.key_listeners.borrow_mut().insert(id);
        id
    }

    fn unregister_key_listener(&self, id: ListenerId) {
        self.key_listeners.borrow_mut().remove(&id);
    }
}
