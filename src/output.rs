//! CLI output formatting for all commands.
//!
//! # Information-First Display
//!
//! Output leads with what the visitor sees (positional index and title) and
//! shows sources and file paths as indented context lines beneath.
//!
//! # Output Format
//!
//! ## Check
//!
//! ```text
//! Images
//! 001 Dawn [Landscapes]
//!     Source: https://cdn.example.com/dawn.jpg
//!     Description: First light over the ridge
//!
//! Config
//!     gallery.toml
//!     config.toml
//!     assets/
//! ```
//!
//! ## Build
//!
//! ```text
//! Home → index.html
//! 001 Dawn → view/1.html
//!     Previous: view/2.html
//!     Next: view/2.html
//!
//! Assets
//!     favicon.svg
//!
//! Generated 1 page, 2 lightbox views, 1 asset
//! ```
//!
//! ## Replay
//!
//! ```text
//! 001 open:1 → open 2 / 3 (id 2) [scroll locked, 1 key listener]
//! 002 key:Escape → closed at 002
//! 003 scroll:120 → closed at 002 [header scrolled]
//! ```
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure: no I/O, no side effects.

use crate::config::CONFIG_FILE;
use crate::content::{GALLERY_FILE, GalleryContent};
use crate::generate::SiteManifest;
use crate::shell::ReplayStep;
use std::path::Path;

// ============================================================================
// Shared helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// `1 page`, `3 pages`.
fn plural(count: usize, word: &str) -> String {
    if count == 1 {
        format!("{count} {word}")
    } else {
        format!("{count} {word}s")
    }
}

/// Truncate text to `max` characters, appending `...` if truncated.
fn truncate_desc(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((byte_idx, _)) => format!("{}...", &text[..byte_idx]),
        None => text.to_string(),
    }
}

// ============================================================================
// Check
// ============================================================================

/// Format the content inventory printed by `check`.
pub fn format_check_output(content: &GalleryContent, source_root: &Path) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push("Images".to_string());
    if content.is_empty() {
        lines.push(format!("{}(none)", indent(1)));
    }
    for (idx, image) in content.iter().enumerate() {
        lines.push(format!(
            "{} {} [{}]",
            format_index(idx + 1),
            image.title,
            image.category
        ));
        lines.push(format!("{}Source: {}", indent(1), image.src));
        if !image.description.is_empty() {
            lines.push(format!(
                "{}Description: {}",
                indent(1),
                truncate_desc(&image.description, 60)
            ));
        }
    }

    lines.push(String::new());
    lines.push("Config".to_string());
    lines.push(format!("{}{}", indent(1), GALLERY_FILE));
    if source_root.join(CONFIG_FILE).exists() {
        lines.push(format!("{}{}", indent(1), CONFIG_FILE));
    }
    if source_root.join("assets").is_dir() {
        lines.push(format!("{}assets/", indent(1)));
    }

    lines
}

/// Print check output to stdout.
pub fn print_check_output(content: &GalleryContent, source_root: &Path) {
    for line in format_check_output(content, source_root) {
        println!("{}", line);
    }
}

// ============================================================================
// Build
// ============================================================================

/// Format the list of generated pages printed by `build`.
pub fn format_generate_output(manifest: &SiteManifest) -> Vec<String> {
    let mut lines = Vec::new();
    let mut views = 0;
    let mut pages = 0;

    for page in &manifest.pages {
        if page.image_id.is_none() {
            pages += 1;
            lines.push(format!("Home \u{2192} {}", page.path));
            continue;
        }
        views += 1;
        lines.push(format!(
            "{} {} \u{2192} {}",
            format_index(views),
            page.title,
            page.path
        ));
        if let Some(prev) = &page.prev {
            lines.push(format!("{}Previous: {}", indent(1), prev));
        }
        if let Some(next) = &page.next {
            lines.push(format!("{}Next: {}", indent(1), next));
        }
    }

    if !manifest.assets.is_empty() {
        lines.push(String::new());
        lines.push("Assets".to_string());
        for asset in &manifest.assets {
            lines.push(format!("{}{}", indent(1), asset));
        }
    }

    lines.push(String::new());
    lines.push(format!(
        "Generated {}, {}, {}",
        plural(pages, "page"),
        plural(views, "lightbox view"),
        plural(manifest.assets.len(), "asset")
    ));

    lines
}

/// Print generate output to stdout.
pub fn print_generate_output(manifest: &SiteManifest) {
    for line in format_generate_output(manifest) {
        println!("{}", line);
    }
}

// ============================================================================
// Replay
// ============================================================================

/// Format one replayed event as a single line.
pub fn format_replay_step(step: &ReplayStep) -> String {
    let snap = &step.snapshot;
    let state = match (&snap.position, snap.current_id) {
        (Some(position), Some(id)) if snap.is_open => format!("open {position} (id {id})"),
        _ => format!("closed at {}", format_index(snap.current_index + 1)),
    };

    let mut flags = Vec::new();
    if snap.scroll_locked {
        flags.push("scroll locked".to_string());
    }
    if snap.key_listeners > 0 {
        flags.push(plural(snap.key_listeners, "key listener"));
    }
    if snap.header_scrolled {
        flags.push("header scrolled".to_string());
    }

    let mut line = format!(
        "{} {} \u{2192} {}",
        format_index(step.step),
        step.event,
        state
    );
    if !flags.is_empty() {
        line.push_str(&format!(" [{}]", flags.join(", ")));
    }
    line
}

pub fn format_replay_output(steps: &[ReplayStep]) -> Vec<String> {
    steps.iter().map(format_replay_step).collect()
}

/// Print replay output to stdout, as text or as JSON lines.
pub fn print_replay_output(steps: &[ReplayStep], json: bool) -> Result<(), serde_json::Error> {
    if json {
        for step in steps {
            println!("{}", serde_json::to_string(step)?);
        }
    } else {
        for line in format_replay_output(steps) {
            println!("{}", line);
        }
    }
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
