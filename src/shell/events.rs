//! User gestures the page shell reacts to.
//!
//! Events also have a compact text form used by `moments replay`:
//!
//! | Text              | Event                       |
//! |-------------------|-----------------------------|
//! | `open:N`          | thumbnail N (0-based) click |
//! | `next` / `prev`   | arrow button click          |
//! | `close`           | close button click          |
//! | `backdrop`        | click outside the image     |
//! | `image`           | click on the image itself   |
//! | `key:NAME`        | key press (`key:Escape`)    |
//! | `swipe:DX[,DY]`   | resolved touch gesture      |
//! | `scroll:Y`        | page scrolled to Y pixels   |

use crate::lightbox::keyboard::Key;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EventParseError {
    #[error("Unknown event: {0}")]
    Unknown(String),
    #[error("Invalid argument for {event}: {value}")]
    InvalidArgument { event: String, value: String },
    #[error("Missing argument for {0}")]
    MissingArgument(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent {
    ThumbnailClicked(usize),
    PreviousClicked,
    NextClicked,
    CloseClicked,
    BackdropClicked,
    /// Clicks on the image don't reach the backdrop.
    ImageClicked,
    Key(Key),
    /// Touch travel in pixels; negative `dx` is a leftward swipe.
    Swipe {
        dx: f32,
        dy: f32,
    },
    Scrolled(f32),
}

/// Horizontal direction of a recognised swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    Left,
    Right,
}

/// Resolve raw touch travel into a swipe.
///
/// A swipe must be mostly horizontal and travel at least `threshold` pixels.
/// Non-finite travel never resolves.
pub fn resolve_swipe(dx: f32, dy: f32, threshold: u32) -> Option<SwipeDirection> {
    if !dx.is_finite() || !dy.is_finite() {
        return None;
    }
    if dx.abs() <= dy.abs() || dx.abs() < threshold as f32 {
        return None;
    }
    if dx < 0.0 {
        Some(SwipeDirection::Left)
    } else {
        Some(SwipeDirection::Right)
    }
}

fn parse_number<T: FromStr>(event: &str, value: &str) -> Result<T, EventParseError> {
    value
        .trim()
        .parse()
        .map_err(|_| invalid(event, value))
}

/// Pixel distance; `NaN` and infinities are rejected.
fn parse_pixels(event: &str, value: &str) -> Result<f32, EventParseError> {
    let pixels: f32 = parse_number(event, value)?;
    if pixels.is_finite() {
        Ok(pixels)
    } else {
        Err(invalid(event, value))
    }
}

fn invalid(event: &str, value: &str) -> EventParseError {
    EventParseError::InvalidArgument {
        event: event.to_string(),
        value: value.to_string(),
    }
}

impl FromStr for PageEvent {
    type Err = EventParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (name, arg) = match s.split_once(':') {
            Some((name, arg)) => (name, Some(arg)),
            None => (s, None),
        };
        let need = || arg.ok_or_else(|| EventParseError::MissingArgument(name.to_string()));

        match name {
            "open" => Ok(PageEvent::ThumbnailClicked(parse_number(name, need()?)?)),
            "next" => Ok(PageEvent::NextClicked),
            "prev" | "previous" => Ok(PageEvent::PreviousClicked),
            "close" => Ok(PageEvent::CloseClicked),
            "backdrop" => Ok(PageEvent::BackdropClicked),
            "image" => Ok(PageEvent::ImageClicked),
            "key" => Ok(PageEvent::Key(Key::from_name(need()?.trim()))),
            "swipe" => {
                let arg = need()?;
                let (dx, dy) = match arg.split_once(',') {
                    Some((dx, dy)) => (parse_pixels(name, dx)?, parse_pixels(name, dy)?),
                    None => (parse_pixels(name, arg)?, 0.0),
                };
                Ok(PageEvent::Swipe { dx, dy })
            }
            "scroll" => Ok(PageEvent::Scrolled(parse_pixels(name, need()?)?)),
            _ => Err(EventParseError::Unknown(s.to_string())),
        }
    }
}
