//! Site configuration module.
//!
//! Handles loading and validating `config.toml`. Stock defaults are
//! overridden by an optional `config.toml` next to `gallery.toml` in the
//! content directory. The photographs themselves live in `gallery.toml` (see
//! [`crate::content`]); this file only controls how the page presents them.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [site]
//! name = "PhotoGallery"     # Brand in header and footer
//! lang = "en"
//! badge = "Visual art"      # Small pill above the hero title
//! hero_title = "Gallery"
//! hero_subtitle = "of moments"
//! hero_text = "A collection of photographs..."
//! cta_label = "View gallery"
//!
//! [nav]
//! gallery = "Gallery"
//! about = "About"
//! contact = "Contact"
//!
//! [gallery]
//! heading = "Collection"
//! intro = "Every photograph tells its own story..."
//!
//! [about]
//! heading = "About the project"
//! body = "Markdown text"
//! photos_label = "Photos"   # Label of the automatic photo count
//! stats = [{ value = "1", label = "Project" }]
//!
//! [contact]
//! heading = "Get in touch"
//! text = "Questions or collaboration ideas?"
//! email = "contact@example.com"
//! email_label = "Write an email"
//! instagram = "#"
//! instagram_label = "Instagram"
//!
//! [footer]
//! copyright = "© 2024 All rights reserved"
//!
//! [lightbox]
//! close_label = "Close"
//! previous_label = "Previous"
//! next_label = "Next"
//! swipe_hint = "Swipe to navigate"
//!
//! [behavior]
//! header_scroll_threshold = 50  # px scrolled before the header turns solid
//! swipe_threshold = 50          # min horizontal px for a swipe to navigate
//! transition_ms = 300           # overlay fade duration
//!
//! [theme]
//! max_width = "80rem"
//! grid_gap = "1.5rem"
//! radius = "1rem"
//! thumbnail_aspect = [4, 3]
//!
//! [theme.section_padding]
//! size = "8vw"
//! min = "3rem"
//! max = "6rem"
//!
//! [colors]
//! background = "#030712"
//! surface = "#111827"
//! text = "#ffffff"
//! text_muted = "#9ca3af"
//! border = "rgba(255, 255, 255, 0.1)"
//! accent_from = "#9333ea"
//! accent_to = "#db2777"
//! overlay = "rgba(0, 0, 0, 0.95)"
//! ```
//!
//! ## Partial Configuration
//!
//! Config files are sparse. Override just the values you want:
//!
//! ```toml
//! [contact]
//! email = "me@example.org"
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
///
/// All fields have sensible defaults. User config files need only specify
/// the values they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Brand and hero copy.
    pub site: SiteInfo,
    /// Header navigation labels.
    pub nav: NavLabels,
    /// Gallery section heading and intro.
    pub gallery: GallerySection,
    /// About section copy and stats.
    pub about: AboutSection,
    /// Contact section copy and links.
    pub contact: ContactSection,
    pub footer: FooterSection,
    /// Lightbox control labels.
    pub lightbox: LightboxLabels,
    /// Interaction thresholds.
    pub behavior: BehaviorConfig,
    /// Layout settings.
    pub theme: ThemeConfig,
    /// Color palette.
    pub colors: ColorConfig,
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.site.name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "site.name must not be empty".into(),
            ));
        }
        if self.behavior.swipe_threshold == 0 {
            return Err(ConfigError::Validation(
                "behavior.swipe_threshold must be non-zero".into(),
            ));
        }
        if self.behavior.transition_ms > 5000 {
            return Err(ConfigError::Validation(
                "behavior.transition_ms must be at most 5000".into(),
            ));
        }
        if self.theme.thumbnail_aspect[0] == 0 || self.theme.thumbnail_aspect[1] == 0 {
            return Err(ConfigError::Validation(
                "theme.thumbnail_aspect values must be non-zero".into(),
            ));
        }
        if let Some(email) = self.contact.email_link() {
            if !email.contains('@') {
                return Err(ConfigError::Validation(format!(
                    "contact.email is not an address: {email}"
                )));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteInfo {
    /// Brand name shown in the header, footer and `<title>`.
    pub name: String,
    /// Value of `<html lang>`.
    pub lang: String,
    /// Small pill above the hero title.
    pub badge: String,
    /// First, gradient-colored line of the hero title.
    pub hero_title: String,
    /// Second line of the hero title.
    pub hero_subtitle: String,
    pub hero_text: String,
    /// Label of the button that scrolls to the gallery.
    pub cta_label: String,
}

impl Default for SiteInfo {
    fn default() -> Self {
        Self {
            name: "PhotoGallery".to_string(),
            lang: "en".to_string(),
            badge: "Visual art".to_string(),
            hero_title: "Gallery".to_string(),
            hero_subtitle: "of moments".to_string(),
            hero_text: "A collection of photographs capturing emotion, nature and the beauty \
                        of the world around us. Step into a visual journey."
                .to_string(),
            cta_label: "View gallery".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NavLabels {
    pub gallery: String,
    pub about: String,
    pub contact: String,
}

impl Default for NavLabels {
    fn default() -> Self {
        Self {
            gallery: "Gallery".to_string(),
            about: "About".to_string(),
            contact: "Contact".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GallerySection {
    pub heading: String,
    pub intro: String,
}

impl Default for GallerySection {
    fn default() -> Self {
        Self {
            heading: "Collection".to_string(),
            intro: "Every photograph tells its own story. Select an image to view it full screen."
                .to_string(),
        }
    }
}

/// A headline number in the About section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AboutSection {
    pub heading: String,
    /// Markdown, rendered to HTML at build time.
    pub body: String,
    /// Label of the photo-count stat, which is always shown first.
    pub photos_label: String,
    /// Further stats after the photo count.
    pub stats: Vec<Stat>,
}

impl Default for AboutSection {
    fn default() -> Self {
        Self {
            heading: "About the project".to_string(),
            body: "This gallery comes from a passion for photography and a wish to keep the \
                   brightest moments of life. Every shot is carefully processed and selected \
                   to carry the feeling of the moment it was taken."
                .to_string(),
            photos_label: "Photos".to_string(),
            stats: vec![
                Stat {
                    value: "1".to_string(),
                    label: "Project".to_string(),
                },
                Stat {
                    value: "100%".to_string(),
                    label: "Inspiration".to_string(),
                },
            ],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContactSection {
    pub heading: String,
    pub text: String,
    /// Empty string hides the email button.
    pub email: Option<String>,
    pub email_label: String,
    /// Empty string hides the Instagram button.
    pub instagram: Option<String>,
    pub instagram_label: String,
}

impl ContactSection {
    pub fn email_link(&self) -> Option<&str> {
        non_empty(&self.email)
    }

    pub fn instagram_link(&self) -> Option<&str> {
        non_empty(&self.instagram)
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

impl Default for ContactSection {
    fn default() -> Self {
        Self {
            heading: "Get in touch".to_string(),
            text: "Questions or collaboration ideas? Happy to talk!".to_string(),
            email: Some("contact@example.com".to_string()),
            email_label: "Write an email".to_string(),
            instagram: Some("#".to_string()),
            instagram_label: "Instagram".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FooterSection {
    pub copyright: String,
    /// Accessible label of the back-to-top button.
    pub back_to_top_label: String,
}

impl Default for FooterSection {
    fn default() -> Self {
        Self {
            copyright: "© 2024 All rights reserved".to_string(),
            back_to_top_label: "Back to top".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LightboxLabels {
    pub close_label: String,
    pub previous_label: String,
    pub next_label: String,
    /// Hint shown on touch screens.
    pub swipe_hint: String,
}

impl Default for LightboxLabels {
    fn default() -> Self {
        Self {
            close_label: "Close".to_string(),
            previous_label: "Previous".to_string(),
            next_label: "Next".to_string(),
            swipe_hint: "Swipe to navigate".to_string(),
        }
    }
}

/// Interaction thresholds, shared by the in-process page model and the
/// browser script.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BehaviorConfig {
    /// Pixels scrolled before the header switches to its solid style.
    pub header_scroll_threshold: u32,
    /// Minimum horizontal travel in pixels for a swipe to navigate.
    pub swipe_threshold: u32,
    /// Overlay fade duration in milliseconds.
    pub transition_ms: u32,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            header_scroll_threshold: 50,
            swipe_threshold: 50,
            transition_ms: 300,
        }
    }
}

/// A responsive CSS size expressed as `clamp(min, size, max)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClampSize {
    /// Preferred/fluid value, typically viewport-relative (e.g. `"8vw"`).
    pub size: String,
    /// Minimum bound (e.g. `"3rem"`).
    pub min: String,
    /// Maximum bound (e.g. `"6rem"`).
    pub max: String,
}

impl ClampSize {
    /// Render as a CSS `clamp()` expression.
    pub fn to_css(&self) -> String {
        format!("clamp({}, {}, {})", self.min, self.size, self.max)
    }
}

/// Layout settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    /// Maximum content width (CSS value).
    pub max_width: String,
    /// Gap between gallery cards (CSS value).
    pub grid_gap: String,
    /// Corner radius of cards and images (CSS value).
    pub radius: String,
    /// Thumbnail crop as `[width, height]`.
    pub thumbnail_aspect: [u32; 2],
    /// Vertical padding of page sections.
    pub section_padding: ClampSize,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            max_width: "80rem".to_string(),
            grid_gap: "1.5rem".to_string(),
            radius: "1rem".to_string(),
            thumbnail_aspect: [4, 3],
            section_padding: ClampSize {
                size: "8vw".to_string(),
                min: "3rem".to_string(),
                max: "6rem".to_string(),
            },
        }
    }
}

/// Color palette. The page has a single dark scheme.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    pub background: String,
    /// Cards and alternating section background.
    pub surface: String,
    pub text: String,
    /// Secondary copy, nav links, captions.
    pub text_muted: String,
    pub border: String,
    /// Start of the accent gradient.
    pub accent_from: String,
    /// End of the accent gradient.
    pub accent_to: String,
    /// Lightbox backdrop.
    pub overlay: String,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            background: "#030712".to_string(),
            surface: "#111827".to_string(),
            text: "#ffffff".to_string(),
            text_muted: "#9ca3af".to_string(),
            border: "rgba(255, 255, 255, 0.1)".to_string(),
            accent_from: "#9333ea".to_string(),
            accent_to: "#db2777".to_string(),
            overlay: "rgba(0, 0, 0, 0.95)".to_string(),
        }
    }
}

// =============================================================================
// Config loading and validation
// =============================================================================

/// File name of the optional site config inside the content directory.
pub const CONFIG_FILE: &str = "config.toml";

/// Parse and validate config text.
///
/// Every section and key is optional; missing ones take the stock default.
pub fn parse_config(text: &str) -> Result<SiteConfig, ConfigError> {
    let config: SiteConfig = toml::from_str(text)?;
    config.validate()?;
    Ok(config)
}

/// Load `config.toml` from the content directory, or the stock defaults if
/// there is none.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let path = root.join(CONFIG_FILE);
    if !path.exists() {
        log::debug!("no {} in {}, using defaults", CONFIG_FILE, root.display());
        return Ok(SiteConfig::default());
    }
    let config = parse_config(&fs::read_to_string(&path)?)?;
    log::debug!("loaded site config from {}", path.display());
    Ok(config)
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Moments Configuration
# =====================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# This file controls presentation only. The photographs are listed in
# gallery.toml next to it.
# Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Brand and hero
# ---------------------------------------------------------------------------
[site]
name = "PhotoGallery"
lang = "en"
badge = "Visual art"
hero_title = "Gallery"
hero_subtitle = "of moments"
hero_text = "A collection of photographs capturing emotion, nature and the beauty of the world around us. Step into a visual journey."
cta_label = "View gallery"

# ---------------------------------------------------------------------------
# Header navigation
# ---------------------------------------------------------------------------
[nav]
gallery = "Gallery"
about = "About"
contact = "Contact"

# ---------------------------------------------------------------------------
# Sections
# ---------------------------------------------------------------------------
[gallery]
heading = "Collection"
intro = "Every photograph tells its own story. Select an image to view it full screen."

[about]
heading = "About the project"
# Markdown is supported.
body = "This gallery comes from a passion for photography and a wish to keep the brightest moments of life. Every shot is carefully processed and selected to carry the feeling of the moment it was taken."
# The photo count is computed from gallery.toml and shown first.
photos_label = "Photos"
stats = [
    { value = "1", label = "Project" },
    { value = "100%", label = "Inspiration" },
]

[contact]
heading = "Get in touch"
text = "Questions or collaboration ideas? Happy to talk!"
# Set email or instagram to "" to hide the button.
email = "contact@example.com"
email_label = "Write an email"
instagram = "#"
instagram_label = "Instagram"

[footer]
copyright = "© 2024 All rights reserved"
back_to_top_label = "Back to top"

# ---------------------------------------------------------------------------
# Lightbox
# ---------------------------------------------------------------------------
[lightbox]
close_label = "Close"
previous_label = "Previous"
next_label = "Next"
swipe_hint = "Swipe to navigate"

# ---------------------------------------------------------------------------
# Interaction
# ---------------------------------------------------------------------------
[behavior]
# Pixels scrolled before the header switches to its solid style.
header_scroll_threshold = 50
# Minimum horizontal travel in pixels for a swipe to change image.
swipe_threshold = 50
# Overlay fade duration in milliseconds (max 5000).
transition_ms = 300

# ---------------------------------------------------------------------------
# Layout
# ---------------------------------------------------------------------------
[theme]
max_width = "80rem"
grid_gap = "1.5rem"
radius = "1rem"
# Thumbnail crop as [width, height].
thumbnail_aspect = [4, 3]

# Vertical section padding, as CSS clamp(min, size, max).
[theme.section_padding]
size = "8vw"
min = "3rem"
max = "6rem"

# ---------------------------------------------------------------------------
# Colors
# ---------------------------------------------------------------------------
[colors]
background = "#030712"
surface = "#111827"
text = "#ffffff"
text_muted = "#9ca3af"
border = "rgba(255, 255, 255, 0.1)"
accent_from = "#9333ea"
accent_to = "#db2777"
overlay = "rgba(0, 0, 0, 0.95)"
"##
}

/// Generate CSS custom properties from color config.
pub fn generate_color_css(colors: &ColorConfig) -> String {
    format!(
        r#":root {{
    --color-bg: {background};
    --color-surface: {surface};
    --color-text: {text};
    --color-text-muted: {text_muted};
    --color-border: {border};
    --color-accent-from: {accent_from};
    --color-accent-to: {accent_to};
    --color-overlay: {overlay};
}}"#,
        background = colors.background,
        surface = colors.surface,
        text = colors.text,
        text_muted = colors.text_muted,
        border = colors.border,
        accent_from = colors.accent_from,
        accent_to = colors.accent_to,
        overlay = colors.overlay,
    )
}

/// Generate CSS custom properties from theme and behavior config.
pub fn generate_theme_css(theme: &ThemeConfig, behavior: &BehaviorConfig) -> String {
    format!(
        r#":root {{
    --max-width: {max_width};
    --grid-gap: {grid_gap};
    --radius: {radius};
    --thumb-aspect: {aspect_w} / {aspect_h};
    --section-padding: {section_padding};
    --transition: {transition}ms;
}}"#,
        max_width = theme.max_width,
        grid_gap = theme.grid_gap,
        radius = theme.radius,
        aspect_w = theme.thumbnail_aspect[0],
        aspect_h = theme.thumbnail_aspect[1],
        section_padding = theme.section_padding.to_css(),
        transition = behavior.transition_ms,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_has_brand() {
        let config = SiteConfig::default();
        assert_eq!(config.site.name, "PhotoGallery");
        assert_eq!(config.nav.gallery, "Gallery");
    }

    #[test]
    fn default_config_has_behavior() {
        let config = SiteConfig::default();
        assert_eq!(config.behavior.header_scroll_threshold, 50);
        assert_eq!(config.behavior.swipe_threshold, 50);
        assert_eq!(config.behavior.transition_ms, 300);
        assert_eq!(
            config.theme.section_padding.to_css(),
            "clamp(3rem, 8vw, 6rem)"
        );
    }

    #[test]
    fn default_config_validates() {
        SiteConfig::default().validate().unwrap();
    }

    #[test]
    fn parse_partial_config() {
        let toml = r##"
[colors]
background = "#000000"
"##;
        let config: SiteConfig = toml::from_str(toml).unwrap();
        // Overridden value
        assert_eq!(config.colors.background, "#000000");
        // Default values preserved
        assert_eq!(config.colors.accent_from, "#9333ea");
        assert_eq!(config.site.name, "PhotoGallery");
    }

    #[test]
    fn parse_stats_list() {
        let toml = r#"
[about]
stats = [{ value = "12", label = "Years" }]
"#;
        let config: SiteConfig = toml::from_str(toml).unwrap();
        assert_eq!(
            config.about.stats,
            vec![Stat {
                value: "12".to_string(),
                label: "Years".to_string()
            }]
        );
        assert_eq!(config.about.photos_label, "Photos");
    }

    #[test]
    fn generate_css_uses_config_colors() {
        let colors = ColorConfig {
            accent_from: "#ff0000".to_string(),
            ..ColorConfig::default()
        };
        let css = generate_color_css(&colors);
        assert!(css.contains("--color-accent-from: #ff0000"));
        assert!(css.contains("--color-overlay: rgba(0, 0, 0, 0.95)"));
    }

    #[test]
    fn generate_theme_css_includes_transition_and_aspect() {
        let css = generate_theme_css(&ThemeConfig::default(), &BehaviorConfig::default());
        assert!(css.contains("--transition: 300ms"));
        assert!(css.contains("--thumb-aspect: 4 / 3"));
        assert!(css.contains("--section-padding: clamp(3rem, 8vw, 6rem)"));
    }

    // =========================================================================
    // load_config tests
    // =========================================================================

    #[test]
    fn load_config_returns_default_when_no_file() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(tmp.path()).unwrap();

        assert_eq!(config.site.name, "PhotoGallery");
        assert_eq!(config.contact.email.as_deref(), Some("contact@example.com"));
    }

    #[test]
    fn load_config_reads_file() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("config.toml"),
            r##"
[site]
name = "Moments"

[behavior]
swipe_threshold = 80
"##,
        )
        .unwrap();

        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.site.name, "Moments");
        assert_eq!(config.behavior.swipe_threshold, 80);
        // Unspecified values should be defaults
        assert_eq!(config.site.hero_title, "Gallery");
        assert_eq!(config.behavior.header_scroll_threshold, 50);
    }

    #[test]
    fn load_config_rejects_unknown_keys() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("config.toml"),
            r#"
[site]
nmae = "typo"
"#,
        )
        .unwrap();

        assert!(matches!(
            load_config(tmp.path()),
            Err(ConfigError::Toml(_))
        ));
    }

    #[test]
    fn load_config_invalid_toml_is_error() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("config.toml"), "this is not [valid").unwrap();
        assert!(matches!(
            load_config(tmp.path()),
            Err(ConfigError::Toml(_))
        ));
    }

    #[test]
    fn validate_rejects_zero_swipe_threshold() {
        let mut config = SiteConfig::default();
        config.behavior.swipe_threshold = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn validate_rejects_zero_aspect() {
        let mut config = SiteConfig::default();
        config.theme.thumbnail_aspect = [4, 0];
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_bad_email() {
        let mut config = SiteConfig::default();
        config.contact.email = Some("nobody".to_string());
        assert!(config.validate().is_err());
        config.contact.email = None;
        config.validate().unwrap();
    }

    #[test]
    fn empty_contact_link_is_hidden() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("config.toml"),
            r#"
[contact]
email = ""
"#,
        )
        .unwrap();

        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.contact.email_link(), None);
        assert_eq!(config.contact.instagram_link(), Some("#"));
    }

    // =========================================================================
    // parse_config tests
    // =========================================================================

    #[test]
    fn parse_config_keeps_unset_keys_in_section() {
        let config = parse_config(
            r#"
[site]
name = "B"
"#,
        )
        .unwrap();
        assert_eq!(config.site.name, "B");
        assert_eq!(config.site.lang, "en");
        assert_eq!(config.site.badge, "Visual art");
    }

    #[test]
    fn parse_config_replaces_stats_list() {
        let config = parse_config(
            r#"
[about]
stats = [{ value = "9", label = "Cities" }]
"#,
        )
        .unwrap();
        assert_eq!(config.about.stats.len(), 1);
    }

    #[test]
    fn parse_config_validates() {
        let err = parse_config(
            r#"
[behavior]
transition_ms = 99999
"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn stock_config_parses_to_defaults() {
        let config: SiteConfig = toml::from_str(stock_config_toml()).unwrap();
        let defaults = SiteConfig::default();
        assert_eq!(config.site.hero_text, defaults.site.hero_text);
        assert_eq!(config.about.body, defaults.about.body);
        assert_eq!(config.about.stats, defaults.about.stats);
        assert_eq!(config.colors.overlay, defaults.colors.overlay);
        assert_eq!(
            config.behavior.header_scroll_threshold,
            defaults.behavior.header_scroll_threshold
        );
        config.validate().unwrap();
    }
}
