//! Page shell: wires user gestures into the lightbox.
//!
//! The shell owns the content store, the document model and the lightbox
//! controller for one page. Every gesture enters through [`Page::dispatch`]:
//!
//! - thumbnail click → `open_at(i)`
//! - arrow buttons and swipes → `previous` / `next` (only while open)
//! - close button, backdrop click, `Escape` → `close`
//! - keys reach the controller only through a registered key listener
//! - scrolling toggles the header style and never touches the lightbox

pub mod document;
pub mod events;

use crate::config::BehaviorConfig;
use crate::content::{ContentStore, GalleryContent};
use crate::lightbox::{LightboxController, LightboxError};
use document::PageDocument;
use events::{EventParseError, PageEvent, SwipeDirection, resolve_swipe};
use serde::Serialize;
use std::rc::Rc;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReplayError {
    #[error("Event {step}: {source}")]
    Parse {
        step: usize,
        #[source]
        source: EventParseError,
    },
    #[error("Event {step}: {source}")]
    Lightbox {
        step: usize,
        #[source]
        source: LightboxError,
    },
}

/// What the page looks like after an event, for logs and `replay`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageSnapshot {
    pub is_open: bool,
    pub current_index: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_id: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    pub header_scrolled: bool,
    pub scroll_locked: bool,
    pub key_listeners: usize,
}

/// One replayed event and the page state after it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplayStep {
    /// 1-based position in the event list.
    pub step: usize,
    pub event: String,
    #[serde(flatten)]
    pub snapshot: PageSnapshot,
}

#[derive(Debug)]
pub struct Page {
    store: ContentStore,
    document: Rc<PageDocument>,
    controller: LightboxController,
    behavior: BehaviorConfig,
    header_scrolled: bool,
}

impl Page {
    pub fn new(store: ContentStore, behavior: BehaviorConfig) -> Self {
        let document = Rc::new(PageDocument::new());
        let controller =
            LightboxController::new(store.shared(), document.clone(), document.clone());
        Self {
            store,
            document,
            controller,
            behavior,
            header_scrolled: false,
        }
    }

    pub fn content(&self) -> &GalleryContent {
        self.store.get()
    }

    pub fn controller(&self) -> &LightboxController {
        &self.controller
    }

    pub fn document(&self) -> &PageDocument {
        &self.document
    }

    pub fn header_scrolled(&self) -> bool {
        self.header_scrolled
    }

    /// Route one gesture. Only an out-of-range thumbnail index can fail.
    pub fn dispatch(&mut self, event: PageEvent) -> Result<(), LightboxError> {
        log::debug!("dispatch {event:?}");
        match event {
            PageEvent::ThumbnailClicked(index) => self.controller.open_at(index)?,
            PageEvent::PreviousClicked => {
                if self.controller.is_open() {
                    self.controller.previous();
                }
            }
            PageEvent::NextClicked => {
                if self.controller.is_open() {
                    self.controller.next();
                }
            }
            PageEvent::CloseClicked | PageEvent::BackdropClicked => self.controller.close(),
            PageEvent::ImageClicked => {}
            PageEvent::Key(key) => {
                if self.document.has_key_listener() {
                    self.controller.handle_key(&key);
                }
            }
            PageEvent::Swipe { dx, dy } => {
                if self.controller.is_open() {
                    match resolve_swipe(dx, dy, self.behavior.swipe_threshold) {
                        Some(SwipeDirection::Left) => self.controller.next(),
                        Some(SwipeDirection::Right) => self.controller.previous(),
                        None => {}
                    }
                }
            }
            PageEvent::Scrolled(y) => {
                self.header_scrolled = y > self.behavior.header_scroll_threshold as f32;
            }
        }
        Ok(())
    }

    pub fn snapshot(&self) -> PageSnapshot {
        PageSnapshot {
            is_open: self.controller.is_open(),
            current_index: self.controller.current_index(),
            current_id: self.controller.current().map(|image| image.id),
            position: self.controller.position().map(|p| p.to_string()),
            header_scrolled: self.header_scrolled,
            scroll_locked: self.document.is_scroll_locked(),
            key_listeners: self.document.key_listener_count(),
        }
    }

    /// Parse and dispatch textual events in order, recording the state after
    /// each. Stops at the first event that fails to parse or dispatch.
    pub fn replay<I, S>(&mut self, events: I) -> Result<Vec<ReplayStep>, ReplayError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut steps = Vec::new();
        for (idx, text) in events.into_iter().enumerate() {
            let step = idx + 1;
            let text = text.as_ref();
            let event: PageEvent = text
                .parse()
                .map_err(|source| ReplayError::Parse { step, source })?;
            self.dispatch(event)
                .map_err(|source| ReplayError::Lightbox { step, source })?;
            steps.push(ReplayStep {
                step,
                event: text.trim().to_string(),
                snapshot: self.snapshot(),
            });
        }
        Ok(steps)
    }
}
