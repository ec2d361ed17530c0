//! HTML site generation.
//!
//! Renders the portfolio as a static site. The page is a single long scroll
//! (header, hero, gallery grid, about, contact, footer); the lightbox is
//! pre-rendered once per image by driving a [`Page`] through the same
//! gestures a visitor would make.
//!
//! ## Output Structure
//!
//! ```text
//! dist/
//! ├── index.html        # Lightbox closed
//! ├── view/
//! │   ├── 1.html        # Lightbox open on the first image
//! │   ├── 2.html
//! │   └── 3.html
//! ├── manifest.json     # What was generated, with prev/next links
//! └── ...               # Contents of content/assets/, if present
//! ```
//!
//! Assets share the output root with the generated files, so an asset named
//! `index.html`, `manifest.json` or anything under `view/` fails the build.
//!
//! Each view page carries the `lightbox-open` body class the controller's
//! scroll lock put on the document, and links to its wrap-around neighbours.
//! The embedded script (`static/lightbox.js`) registers the keyboard and
//! swipe listeners on view pages only, so keys do nothing while the lightbox
//! is closed.
//!
//! ## CSS and JavaScript
//!
//! Static assets are embedded at compile time:
//! - `static/style.css`: Base styles (colors and layout injected from config)
//! - `static/lightbox.js`: Keyboard, swipe and header-scroll behavior
//!
//! ## HTML Generation
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating.
//! Templates are type-safe Rust code with automatic XSS escaping.

use crate::config::{self, ConfigError, SiteConfig};
use crate::content::{ContentError, ContentStore, GalleryContent, ImageRecord};
use crate::icons::Icon;
use crate::lightbox::{LightboxError, Neighbors};
use crate::shell::Page;
use crate::shell::events::PageEvent;
use maud::{DOCTYPE, Markup, PreEscaped, html};
use pulldown_cmark::{Parser, html as md_html};
use serde::Serialize;
use std::fs;
use std::path::{Component, Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
    #[error("Content error: {0}")]
    Content(#[from] ContentError),
    #[error("Lightbox error: {0}")]
    Lightbox(#[from] LightboxError),
    #[error("Asset copy error: {0}")]
    WalkDir(#[from] walkdir::Error),
    #[error("Asset {0} would overwrite a generated file")]
    AssetCollision(String),
}

/// Record of one generated page, written to `manifest.json`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneratedPage {
    /// Path relative to the output directory.
    pub path: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_id: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
}

/// Everything a build produced.
#[derive(Debug, Clone, Serialize)]
pub struct SiteManifest {
    pub site: String,
    pub pages: Vec<GeneratedPage>,
    pub assets: Vec<String>,
}

const CSS_STATIC: &str = include_str!("../static/style.css");
const JS: &str = include_str!("../static/lightbox.js");

/// Directory of pre-rendered lightbox pages inside the output.
const VIEW_DIR: &str = "view";
const INDEX_FILE: &str = "index.html";
const MANIFEST_FILE: &str = "manifest.json";

fn view_path(index: usize) -> String {
    format!("{}/{}.html", VIEW_DIR, index + 1)
}

/// Build the site from a content directory.
pub fn generate(source: &Path, output_dir: &Path) -> Result<SiteManifest, GenerateError> {
    let config = config::load_config(source)?;
    let store = ContentStore::load(source)?;
    let assets_dir = source.join("assets");
    let assets = collect_assets(&assets_dir)?;
    let mut manifest = render_site(&config, store, output_dir)?;
    manifest.assets = copy_assets(&assets_dir, &assets, output_dir)?;

    let json = serde_json::to_string_pretty(&manifest)?;
    fs::write(output_dir.join(MANIFEST_FILE), json)?;
    log::info!("site generated at {}", output_dir.display());
    Ok(manifest)
}

/// Write `index.html` and one view page per image.
pub fn render_site(
    config: &SiteConfig,
    store: ContentStore,
    output_dir: &Path,
) -> Result<SiteManifest, GenerateError> {
    let css = format!(
        "{}\n\n{}\n\n{}",
        config::generate_color_css(&config.colors),
        config::generate_theme_css(&config.theme, &config.behavior),
        CSS_STATIC
    );

    fs::create_dir_all(output_dir)?;
    let mut page = Page::new(store, config.behavior.clone());
    let mut pages = Vec::with_capacity(page.content().len() + 1);

    let index_html = render_page(config, &page, &css, "");
    fs::write(output_dir.join(INDEX_FILE), index_html.into_string())?;
    log::info!("generated {INDEX_FILE}");
    pages.push(GeneratedPage {
        path: INDEX_FILE.to_string(),
        title: config.site.name.clone(),
        image_id: None,
        position: None,
        prev: None,
        next: None,
    });

    if !page.content().is_empty() {
        fs::create_dir_all(output_dir.join(VIEW_DIR))?;
    }
    for index in 0..page.content().len() {
        page.dispatch(PageEvent::ThumbnailClicked(index))?;
        let controller = page.controller();
        let (Some(image), Some(neighbors)) = (controller.current(), controller.neighbors())
        else {
            continue;
        };

        let path = view_path(index);
        let html = render_page(config, &page, &css, "../");
        fs::write(output_dir.join(&path), html.into_string())?;
        log::info!("generated {path}");

        pages.push(GeneratedPage {
            path,
            title: image.title.clone(),
            image_id: Some(image.id),
            position: controller.position().map(|p| p.to_string()),
            prev: Some(view_path(neighbors.previous)),
            next: Some(view_path(neighbors.next)),
        });
    }
    page.dispatch(PageEvent::CloseClicked)?;
    debug_assert!(!page.document().is_scroll_locked());

    Ok(SiteManifest {
        site: config.site.name.clone(),
        pages,
        assets: Vec::new(),
    })
}

/// Relative paths under `assets/`, sorted, directories included.
///
/// Fails before anything is written if an entry lands on `index.html`,
/// `manifest.json` or anywhere under `view/`.
fn collect_assets(assets_dir: &Path) -> Result<Vec<PathBuf>, GenerateError> {
    let mut entries = Vec::new();
    if !assets_dir.is_dir() {
        return Ok(entries);
    }
    for entry in WalkDir::new(assets_dir).sort_by_file_name() {
        let entry = entry?;
        let Ok(relative) = entry.path().strip_prefix(assets_dir) else {
            continue;
        };
        if relative.as_os_str().is_empty() {
            continue;
        }
        if is_generated_path(relative) {
            return Err(GenerateError::AssetCollision(asset_name(relative)));
        }
        entries.push(relative.to_path_buf());
    }
    Ok(entries)
}

fn is_generated_path(relative: &Path) -> bool {
    let top_level_view = matches!(
        relative.components().next(),
        Some(Component::Normal(first)) if first == VIEW_DIR
    );
    top_level_view || relative == Path::new(INDEX_FILE) || relative == Path::new(MANIFEST_FILE)
}

fn asset_name(relative: &Path) -> String {
    relative.to_string_lossy().replace('\\', "/")
}

/// Copy collected assets into the output root. Returns the copied files.
fn copy_assets(
    assets_dir: &Path,
    entries: &[PathBuf],
    output_dir: &Path,
) -> Result<Vec<String>, GenerateError> {
    let mut copied = Vec::new();
    for relative in entries {
        let source = assets_dir.join(relative);
        let target = output_dir.join(relative);
        if source.is_dir() {
            fs::create_dir_all(&target)?;
        } else {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(&source, &target)?;
            copied.push(asset_name(relative));
        }
    }
    log::info!("copied {} assets", copied.len());
    Ok(copied)
}

// ============================================================================
// HTML Components
// ============================================================================

/// Renders the base HTML document structure
fn base_document(
    lang: &str,
    title: &str,
    css: &str,
    body_class: Option<&str>,
    content: Markup,
) -> Markup {
    html! {
        (DOCTYPE)
        html lang=(lang) {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(css)) }
            }
            body class=[body_class] {
                (content)
                script { (PreEscaped(JS)) }
            }
        }
    }
}

/// Renders the fixed site header with brand and section links.
///
/// `base` is the relative path back to the site root (`""` or `"../"`).
fn site_header(config: &SiteConfig, base: &str, scrolled: bool) -> Markup {
    let home = format!("{base}index.html");
    html! {
        header.site-header.scrolled[scrolled] id="top"
            data-scroll-threshold=(config.behavior.header_scroll_threshold) {
            div.container.header-inner {
                a.brand href=(home) {
                    span.brand-mark { (Icon::Camera.render(24)) }
                    span.brand-name { (config.site.name) }
                }
                nav.site-nav {
                    a href={ (home) "#gallery" } { (config.nav.gallery) }
                    a href={ (home) "#about" } { (config.nav.about) }
                    a href={ (home) "#contact" } { (config.nav.contact) }
                }
                a.nav-menu href={ (home) "#gallery" } aria-label=(config.nav.gallery) {
                    (Icon::Grid.render(24))
                }
            }
        }
    }
}

fn hero_section(config: &SiteConfig, content: &GalleryContent, base: &str) -> Markup {
    html! {
        section.hero {
            div.hero-orb.orb-a {}
            div.hero-orb.orb-b {}
            div.container.hero-inner {
                span.badge { (config.site.badge) }
                h1.hero-title {
                    span.gradient-text { (config.site.hero_title) }
                    br;
                    span { (config.site.hero_subtitle) }
                }
                p.hero-text { (config.site.hero_text) }
                a.cta href="#gallery" {
                    span { (config.site.cta_label) }
                    (Icon::ChevronRight.render(20))
                }
                @if !content.is_empty() {
                    div.hero-preview {
                        @for (idx, image) in content.iter().enumerate() {
                            a.preview.raised[idx == 1] href={ (base) (view_path(idx)) } {
                                img src=(image.src) alt=(image.title);
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Renders one thumbnail card in the gallery grid.
fn gallery_item(image: &ImageRecord, index: usize, base: &str) -> Markup {
    let delay = format!("--delay: {}ms;", index * 100);
    html! {
        a.gallery-item href={ (base) (view_path(index)) } style=(delay) data-index=(index) {
            div.thumb {
                img src=(image.src) alt=(image.title) loading="lazy";
            }
            div.item-overlay {
                span.category { (image.category) }
                h3 { (image.title) }
                p { (image.description) }
                span.zoom { (Icon::ZoomIn.render(20)) }
            }
        }
    }
}

fn gallery_section(config: &SiteConfig, content: &GalleryContent, base: &str) -> Markup {
    html! {
        section.gallery id="gallery" {
            div.container {
                header.section-header {
                    h2 { (config.gallery.heading) }
                    p { (config.gallery.intro) }
                }
                div.gallery-grid {
                    @for (idx, image) in content.iter().enumerate() {
                        (gallery_item(image, idx, base))
                    }
                }
            }
        }
    }
}

fn about_section(config: &SiteConfig, content: &GalleryContent) -> Markup {
    let parser = Parser::new(&config.about.body);
    let mut body_html = String::new();
    md_html::push_html(&mut body_html, parser);

    html! {
        section.about id="about" {
            div.container.about-inner {
                div.about-text {
                    h2 { (config.about.heading) }
                    div.about-body { (PreEscaped(body_html)) }
                    div.stats {
                        div.stat {
                            div.stat-value { (content.len()) }
                            div.stat-label { (config.about.photos_label) }
                        }
                        @for stat in &config.about.stats {
                            div.stat {
                                div.stat-value { (stat.value) }
                                div.stat-label { (stat.label) }
                            }
                        }
                    }
                }
                @if let Some(featured) = content.featured() {
                    div.about-image {
                        img src=(featured.src) alt=(featured.title);
                    }
                }
            }
        }
    }
}

fn contact_section(config: &SiteConfig) -> Markup {
    let contact = &config.contact;
    html! {
        section.contact id="contact" {
            div.container.contact-inner {
                h2 { (contact.heading) }
                p { (contact.text) }
                div.contact-links {
                    @if let Some(email) = contact.email_link() {
                        a.button.primary href={ "mailto:" (email) } {
                            (Icon::Mail.render(20))
                            span { (contact.email_label) }
                        }
                    }
                    @if let Some(instagram) = contact.instagram_link() {
                        a.button.outline href=(instagram) target="_blank" rel="noopener" {
                            (Icon::Instagram.render(20))
                            span { (contact.instagram_label) }
                        }
                    }
                }
            }
        }
    }
}

fn site_footer(config: &SiteConfig) -> Markup {
    html! {
        footer.site-footer {
            div.container.footer-inner {
                div.brand {
                    span.brand-mark { (Icon::Camera.render(20)) }
                    span.brand-name { (config.site.name) }
                }
                p.copyright { (config.footer.copyright) }
                a.back-to-top href="#top" aria-label=(config.footer.back_to_top_label) {
                    (Icon::ChevronRight.render_with_class(20, Some("rotate-up")))
                }
            }
        }
    }
}

/// Renders the open lightbox overlay for the page's current image.
///
/// Returns empty markup while the lightbox is closed.
pub fn render_overlay(config: &SiteConfig, page: &Page, base: &str) -> Markup {
    let controller = page.controller();
    let (Some(image), Some(position), Some(Neighbors { previous, next })) = (
        controller.current(),
        controller.position(),
        controller.neighbors(),
    ) else {
        return html! {};
    };

    let close_url = format!("{base}index.html#gallery");
    let prev_url = format!("{base}{}", view_path(previous));
    let next_url = format!("{base}{}", view_path(next));
    let labels = &config.lightbox;

    html! {
        div.lightbox role="dialog" aria-modal="true" aria-label=(image.title)
            data-close=(close_url) data-prev=(prev_url) data-next=(next_url)
            data-swipe-threshold=(config.behavior.swipe_threshold) {
            a.lightbox-backdrop href=(close_url) aria-label=(labels.close_label) tabindex="-1" {}
            a.lightbox-close href=(close_url) aria-label=(labels.close_label) {
                (Icon::Close.render(28))
            }
            a.lightbox-nav.lightbox-prev href=(prev_url) aria-label=(labels.previous_label) {
                (Icon::ChevronLeft.render(32))
            }
            a.lightbox-nav.lightbox-next href=(next_url) aria-label=(labels.next_label) {
                (Icon::ChevronRight.render(32))
            }
            figure.lightbox-frame {
                img src=(image.src) alt=(image.title);
                figcaption.lightbox-info {
                    h3 { (image.title) }
                    p { (image.description) }
                    span.lightbox-position { (position) }
                }
            }
            div.swipe-hint { span { (labels.swipe_hint) } }
        }
    }
}

// ============================================================================
// Page Renderer
// ============================================================================

/// Renders the whole page in the state `page` is currently in.
fn render_page(config: &SiteConfig, page: &Page, css: &str, base: &str) -> Markup {
    let content = page.content();
    let title = match page.controller().current() {
        Some(image) => format!("{} - {}", image.title, config.site.name),
        None => config.site.name.clone(),
    };
    let body_class = page.document().body_class_attr();

    let markup = html! {
        (site_header(config, base, page.header_scrolled()))
        main {
            (hero_section(config, content, base))
            (gallery_section(config, content, base))
            (about_section(config, content))
            (contact_section(config))
        }
        (site_footer(config))
        (render_overlay(config, page, base))
    };

    base_document(
        &config.site.lang,
        &title,
        css,
        body_class.as_deref(),
        markup,
    )
}

// ============================================================================
// Tests
// ============================================================================
