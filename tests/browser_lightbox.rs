//! Browser lightbox tests: keyboard navigation, scroll lock and header style
//! on the generated site.
//!
//! Run with: `cargo test --test browser_lightbox -- --ignored`

use headless_chrome::{Browser, LaunchOptions, Tab};
use std::path::PathBuf;
use std::process::Command;
use std::sync::{Arc, OnceLock};
use std::time::{Duration, Instant};

// ---------------------------------------------------------------------------
// Setup helpers
// ---------------------------------------------------------------------------

fn generated_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/browser/generated")
}

fn ensure_fixtures_built() {
    static BUILT: OnceLock<()> = OnceLock::new();
    BUILT.get_or_init(|| {
        let bin = env!("CARGO_BIN_EXE_moments");
        let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));

        let output_dir = generated_dir();
        if output_dir.exists() {
            std::fs::remove_dir_all(&output_dir).expect("failed to clean output dir");
        }

        let status = Command::new(bin)
            .args([
                "build",
                "--source",
                root.join("fixtures/content").to_str().unwrap(),
                "--output",
                output_dir.to_str().unwrap(),
            ])
            .status()
            .expect("failed to run moments");
        assert!(status.success(), "fixture generation failed");
    });
}

fn browser() -> &'static Browser {
    static B: OnceLock<Browser> = OnceLock::new();
    B.get_or_init(|| {
        Browser::new(LaunchOptions {
            window_size: Some((1280, 800)),
            ..Default::default()
        })
        .expect("failed to launch Chrome")
    })
}

fn load(page: &str) -> Arc<Tab> {
    ensure_fixtures_built();
    let tab = browser().new_tab().unwrap();
    let file = generated_dir().join(page);
    assert!(file.exists(), "missing: {}", file.display());

    tab.navigate_to(&format!("file://{}", file.display()))
        .unwrap()
        .wait_until_navigated()
        .unwrap();
    tab
}

fn eval_bool(tab: &Tab, js: &str) -> bool {
    tab.evaluate(js, false)
        .expect("failed to evaluate JS")
        .value
        .and_then(|v| v.as_bool())
        .unwrap_or(false)
}

/// Poll until the tab's URL ends with `suffix`.
fn wait_for_url(tab: &Tab, suffix: &str) -> String {
    let deadline = Instant::now() + Duration::from_secs(5);
    loop {
        let url = tab.get_url();
        if url.ends_with(suffix) || Instant::now() > deadline {
            return url;
        }
        std::thread::sleep(Duration::from_millis(50));
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[test]
#[ignore]
fn index_has_no_open_lightbox() {
    let tab = load("index.html");
    assert!(!eval_bool(&tab, "document.body.classList.contains('lightbox-open')"));
    assert!(!eval_bool(&tab, "document.querySelector('.lightbox') !== null"));
}

#[test]
#[ignore]
fn keys_do_nothing_while_closed() {
    let tab = load("index.html");
    tab.press_key("ArrowRight").unwrap();
    std::thread::sleep(Duration::from_millis(300));
    assert!(tab.get_url().ends_with("index.html"));
}

#[test]
#[ignore]
fn view_page_locks_scroll() {
    let tab = load("view/2.html");
    assert!(eval_bool(&tab, "document.body.classList.contains('lightbox-open')"));
    assert!(eval_bool(
        &tab,
        "getComputedStyle(document.body).overflow === 'hidden'"
    ));
}

#[test]
#[ignore]
fn arrow_right_goes_to_next() {
    let tab = load("view/1.html");
    tab.press_key("ArrowRight").unwrap();
    let url = wait_for_url(&tab, "view/2.html");
    assert!(url.ends_with("view/2.html"), "url was {}", url);
}

#[test]
#[ignore]
fn arrow_left_wraps_to_last() {
    let tab = load("view/1.html");
    tab.press_key("ArrowLeft").unwrap();
    let url = wait_for_url(&tab, "view/3.html");
    assert!(url.ends_with("view/3.html"), "url was {}", url);
}

#[test]
#[ignore]
fn escape_closes() {
    let tab = load("view/3.html");
    tab.press_key("Escape").unwrap();
    let url = wait_for_url(&tab, "index.html#gallery");
    assert!(url.ends_with("index.html#gallery"), "url was {}", url);
}

#[test]
#[ignore]
fn header_turns_solid_after_scroll() {
    let tab = load("index.html");
    assert!(!eval_bool(
        &tab,
        "document.querySelector('.site-header').classList.contains('scrolled')"
    ));
    tab.evaluate("window.scrollTo(0, 400)", false).unwrap();
    std::thread::sleep(Duration::from_millis(200));
    assert!(eval_bool(
        &tab,
        "document.querySelector('.site-header').classList.contains('scrolled')"
    ));
}
