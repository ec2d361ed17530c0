//! # Moments
//!
//! A single-page photo portfolio with a full-screen lightbox viewer.
//!
//! The page is a long scroll of sections (header, hero, gallery grid, about,
//! contact, footer). Selecting a thumbnail opens the lightbox on that image;
//! arrows, keys and swipes move through the gallery with wrap-around; the
//! close button, a click outside the image or `Escape` closes it. While the
//! viewer is open the page body does not scroll.
//!
//! # Architecture
//!
//! ```text
//! gallery.toml ─→ ContentStore ─→ Page ──dispatch(PageEvent)──→ LightboxController
//!                                  │                                  │
//!                                  │                 acquires / releases
//!                                  ▼                                  ▼
//!                             PageDocument ◀── ScrollLock + KeyListeners
//!                                  │
//!                                  ▼
//!                     generate: index.html + view/{n}.html
//! ```
//!
//! The same [`shell::Page`] drives both outputs of the CLI: `build` walks it
//! through every open state to pre-render the lightbox pages, and `replay`
//! feeds it textual events and reports what the page looks like after each.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`content`] | `gallery.toml` loading and the read-only [`content::ContentStore`] |
//! | [`lightbox`] | Viewer state machine, wrap-around navigation, keyboard protocol, scoped side effects |
//! | [`shell`] | Page model: routes gestures to the controller, swipe and header-scroll thresholds |
//! | [`icons`] | Closed set of inline SVG icons |
//! | [`generate`] | Renders the static site with Maud |
//! | [`config`] | `config.toml` loading, validation, and CSS generation |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Side Effects as Guards
//!
//! Opening the lightbox locks page scrolling and registers a keyboard
//! listener. Both are held as guard values inside the controller's open
//! session ([`lightbox::resources`]); closing drops the session, and dropping
//! the controller drops it too. A lock can't leak on an early return, and a
//! listener can't be registered twice.
//!
//! The collaborators that apply the effects ([`lightbox::resources::ScrollLock`],
//! [`lightbox::resources::KeyListeners`]) are traits. The production
//! implementation is [`shell::document::PageDocument`]; tests use recorders.
//!
//! ## Pre-rendered Lightbox States
//!
//! The site is static HTML. Each open state of the viewer becomes its own page
//! (`view/{n}.html`) with the scroll-lock body class already applied, and
//! prev/next links computed by the controller. A small script maps the
//! keyboard and swipes onto those links, so the browser behaves the same way
//! the in-process model does.
//!
//! ## Icons as an Enum
//!
//! Icons are an [`icons::Icon`] enum instead of name lookups. Asking for an
//! icon that doesn't exist is a compile error, so there is no fallback path.
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/): templates are
//! checked at compile time and all interpolation is auto-escaped, which
//! matters because titles and descriptions come straight from user content.

pub mod config;
pub mod content;
pub mod generate;
pub mod icons;
pub mod lightbox;
pub mod output;
pub mod shell;

#[cfg(test)]
pub(crate) mod test_helpers;
