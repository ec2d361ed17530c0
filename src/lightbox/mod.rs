//! Lightbox controller: the full-screen viewer's state machine.
//!
//! ```text
//!              open_at(i)
//!   Closed ─────────────────► Open ──┐ next / previous / open_at(j)
//!     ▲                        │ ◄───┘
//!     └──────── close ─────────┘
//! ```
//!
//! The controller is the only owner and mutator of [`LightboxState`]. Entering
//! Open acquires the scroll lock and registers one key listener; leaving Open
//! releases both. The resources live in a guard (see [`resources`]) that is
//! dropped on close and when the controller itself is dropped, so neither can
//! leak across open/close cycles.
//!
//! Navigation wraps: `next` from the last image lands on the first and
//! `previous` from the first lands on the last. While closed, `next` and
//! `previous` still move the retained index; it is simply not shown.

pub mod keyboard;
pub mod resources;

use crate::content::{GalleryContent, ImageRecord};
use keyboard::{Key, KeyCommand};
use resources::{KeyListeners, ListenerId, OpenSession, ScrollLock};
use serde::Serialize;
use std::fmt;
use std::rc::Rc;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LightboxError {
    #[error("Image index {index} out of range for gallery of {len}")]
    OutOfRange { index: usize, len: usize },
}

/// Snapshot of the viewer state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct LightboxState {
    pub is_open: bool,
    pub current_index: usize,
}

/// Position indicator shown under the open image, 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Position {
    pub number: usize,
    pub total: usize,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.number, self.total)
    }
}

/// Indices reachable from the current image by one step either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Neighbors {
    pub previous: usize,
    pub next: usize,
}

/// Index after `index` in a cycle of `len`. Returns `index` unchanged for an
/// empty cycle.
pub fn cycle_next(index: usize, len: usize) -> usize {
    if len == 0 { index } else { (index + 1) % len }
}

/// Index before `index` in a cycle of `len`.
pub fn cycle_previous(index: usize, len: usize) -> usize {
    if len == 0 {
        index
    } else {
        (index % len + len - 1) % len
    }
}

pub struct LightboxController {
    content: Rc<GalleryContent>,
    scroll_lock: Rc<dyn ScrollLock>,
    key_listeners: Rc<dyn KeyListeners>,
    current_index: usize,
    /// Present exactly while Open.
    session: Option<OpenSession>,
}

impl LightboxController {
    pub fn new(
        content: Rc<GalleryContent>,
        scroll_lock: Rc<dyn ScrollLock>,
        key_listeners: Rc<dyn KeyListeners>,
    ) -> Self {
        Self {
            content,
            scroll_lock,
            key_listeners,
            current_index: 0,
            session: None,
        }
    }

    pub fn content(&self) -> &GalleryContent {
        &self.content
    }

    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn state(&self) -> LightboxState {
        LightboxState {
            is_open: self.is_open(),
            current_index: self.current_index,
        }
    }

    /// Listener registered for the current Open period.
    pub fn active_listener(&self) -> Option<ListenerId> {
        self.session.as_ref().map(OpenSession::listener)
    }

    /// Show the image at `index`.
    ///
    /// From Closed this acquires the scroll lock and the key listener. While
    /// already Open it only moves to `index`.
    pub fn open_at(&mut self, index: usize) -> Result<(), LightboxError> {
        let len = self.content.len();
        if index >= len {
            return Err(LightboxError::OutOfRange { index, len });
        }
        self.current_index = index;
        if self.session.is_none() {
            self.session = Some(OpenSession::begin(
                self.scroll_lock.clone(),
                self.key_listeners.clone(),
            ));
            log::debug!("lightbox opened at {index}");
        } else {
            log::debug!("lightbox moved to {index}");
        }
        Ok(())
    }

    /// Close the viewer. Safe to call when already closed.
    pub fn close(&mut self) {
        if self.session.take().is_some() {
            log::debug!("lightbox closed at {}", self.current_index);
        }
    }

    pub fn next(&mut self) {
        self.current_index = cycle_next(self.current_index, self.content.len());
    }

    pub fn previous(&mut self) {
        self.current_index = cycle_previous(self.current_index, self.content.len());
    }

    /// The image on screen, or `None` while closed.
    pub fn current(&self) -> Option<&ImageRecord> {
        if self.is_open() {
            self.content.get(self.current_index)
        } else {
            None
        }
    }

    pub fn position(&self) -> Option<Position> {
        self.is_open().then(|| Position {
            number: self.current_index + 1,
            total: self.content.len(),
        })
    }

    pub fn neighbors(&self) -> Option<Neighbors> {
        let len = self.content.len();
        self.is_open().then(|| Neighbors {
            previous: cycle_previous(self.current_index, len),
            next: cycle_next(self.current_index, len),
        })
    }

    /// Apply the keyboard protocol. Returns whether the key was consumed.
    ///
    /// No listener is registered while closed, so nothing is consumed then.
    pub fn handle_key(&mut self, key: &Key) -> bool {
        if !self.is_open() {
            return false;
        }
        match KeyCommand::for_key(key) {
            Some(KeyCommand::Close) => self.close(),
            Some(KeyCommand::Previous) => self.previous(),
            Some(KeyCommand::Next) => self.next(),
            None => return false,
        }
        true
    }
}

impl fmt::Debug for LightboxController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LightboxController")
            .field("len", &self.content.len())
            .field("current_index", &self.current_index)
            .field("session", &self.session)
            .finish()
    }
}
