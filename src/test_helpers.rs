//! Shared test utilities for the moments test suite.
//!
//! Provides gallery builders, recording collaborators for the lightbox's
//! side effects, and fixture setup for filesystem tests.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let lock = Rc::new(RecordingScrollLock::default());
//! let keys = Rc::new(RecordingKeyListeners::default());
//! let mut controller = controller_over(three_moments(), lock.clone(), keys.clone());
//!
//! controller.open_at(0).unwrap();
//! assert_eq!(lock.balance(), 1);
//! assert_eq!(keys.active().len(), 1);
//! ```

use std::cell::{Cell, RefCell};
use std::path::Path;
use std::rc::Rc;
use tempfile::TempDir;

use crate::content::{GalleryContent, ImageRecord};
use crate::lightbox::LightboxController;
use crate::lightbox::resources::{KeyListeners, ListenerId, ScrollLock};

// =========================================================================
// Gallery builders
// =========================================================================

/// A record with predictable text derived from its id.
pub fn record(id: u32) -> ImageRecord {
    ImageRecord {
        id,
        src: format!("https://cdn.example.com/moment-{id}.jpg"),
        title: format!("Moment {id}"),
        category: "Portfolio".to_string(),
        description: format!("Description {id}"),
    }
}

/// Gallery with ids 1, 2, 3 in that order.
pub fn three_moments() -> GalleryContent {
    GalleryContent::new(vec![record(1), record(2), record(3)]).unwrap()
}

pub fn one_moment() -> GalleryContent {
    GalleryContent::new(vec![record(1)]).unwrap()
}

pub fn controller_over(
    content: GalleryContent,
    lock: Rc<RecordingScrollLock>,
    keys: Rc<RecordingKeyListeners>,
) -> LightboxController {
    LightboxController::new(Rc::new(content), lock, keys)
}

// =========================================================================
// Recording collaborators
// =========================================================================

/// One observed side effect, in call order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SideEffect {
    LockOn,
    LockOff,
    Registered(ListenerId),
    Unregistered(ListenerId),
}

/// Ordered log shared between several recorders.
#[derive(Debug, Clone, Default)]
pub struct Journal(Rc<RefCell<Vec<SideEffect>>>);

impl Journal {
    fn push(&self, effect: SideEffect) {
        self.0.borrow_mut().push(effect);
    }

    pub fn entries(&self) -> Vec<SideEffect> {
        self.0.borrow().clone()
    }
}

#[derive(Debug, Default)]
pub struct RecordingScrollLock {
    activations: Cell<usize>,
    deactivations: Cell<usize>,
    journal: Option<Journal>,
}

impl RecordingScrollLock {
    pub fn with_journal(journal: Journal) -> Self {
        Self {
            journal: Some(journal),
            ..Self::default()
        }
    }

    pub fn activations(&self) -> usize {
        self.activations.get()
    }

    pub fn deactivations(&self) -> usize {
        self.deactivations.get()
    }

    /// Activations minus deactivations.
    pub fn balance(&self) -> i64 {
        self.activations.get() as i64 - self.deactivations.get() as i64
    }
}

impl ScrollLock for RecordingScrollLock {
    fn activate_scroll_lock(&self) {
        self.activations.set(self.activations.get() + 1);
        if let Some(journal) = &self.journal {
            journal.push(SideEffect::LockOn);
        }
    }

    fn deactivate_scroll_lock(&self) {
        self.deactivations.set(self.deactivations.get() + 1);
        if let Some(journal) = &self.journal {
            journal.push(SideEffect::LockOff);
        }
    }
}

#[derive(Debug, Default)]
pub struct RecordingKeyListeners {
    next_id: Cell<u64>,
    registrations: Cell<usize>,
    active: RefCell<Vec<ListenerId>>,
    journal: Option<Journal>,
}

impl RecordingKeyListeners {
    pub fn with_journal(journal: Journal) -> Self {
        Self {
            journal: Some(journal),
            ..Self::default()
        }
    }

    /// Total registrations ever made.
    pub fn registrations(&self) -> usize {
        self.registrations.get()
    }

    /// Listeners currently registered.
    pub fn active(&self) -> Vec<ListenerId> {
        self.active.borrow().clone()
    }
}

impl KeyListeners for RecordingKeyListeners {
    fn register_key_listener(&self) -> ListenerId {
        let id = ListenerId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.registrations.set(self.registrations.get() + 1);
        self.active.borrow_mut().push(id);
        if let Some(journal) = &self.journal {
            journal.push(SideEffect::Registered(id));
        }
        id
    }

    fn unregister_key_listener(&self, id: ListenerId) {
        self.active.borrow_mut().retain(|active| *active != id);
        if let Some(journal) = &self.journal {
            journal.push(SideEffect::Unregistered(id));
        }
    }
}

// =========================================================================
// Fixture setup
// =========================================================================

/// Copy `fixtures/content/` to a temp directory and return it.
///
/// Tests get an isolated copy they can mutate without affecting other tests
/// or the source fixtures.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/content");
    copy_dir_recursive(&fixtures, tmp.path()).unwrap();
    tmp
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            std::fs::create_dir_all(&dst_path)?;
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}
