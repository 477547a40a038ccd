//! Browser overlay tests — drives the generated page's gallery previews.
//!
//! Builds `fixtures/browser-content` (three galleries: three local images,
//! one missing image next to a good one, and an empty one) and exercises the
//! overlay script through headless Chrome.
//!
//! Run with: `cargo test --test browser_overlay -- --ignored`

use headless_chrome::{Browser, LaunchOptions, Tab};
use std::path::PathBuf;
use std::process::Command;
use std::sync::{Arc, OnceLock};

// ---------------------------------------------------------------------------
// Setup helpers
// ---------------------------------------------------------------------------

fn generated_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/browser/generated")
}

fn ensure_fixtures_built() {
    static BUILT: OnceLock<()> = OnceLock::new();
    BUILT.get_or_init(|| {
        let bin = env!("CARGO_BIN_EXE_vitrine");
        let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));

        let output_dir = generated_dir();
        if output_dir.exists() {
            std::fs::remove_dir_all(&output_dir).expect("failed to clean output dir");
        }

        let status = Command::new(bin)
            .args([
                "build",
                "--source",
                root.join("fixtures/browser-content").to_str().unwrap(),
                "--output",
                output_dir.to_str().unwrap(),
            ])
            .status()
            .expect("failed to run vitrine");
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

fn load_index() -> Arc<Tab> {
    ensure_fixtures_built();
    let tab = browser().new_tab().unwrap();
    let file = generated_dir().join("index.html");
    assert!(file.exists(), "missing: {}", file.display());

    tab.navigate_to(&format!("file://{}", file.display()))
        .unwrap()
        .wait_until_navigated()
        .unwrap();
    tab
}

fn eval(tab: &Tab, js: &str) -> serde_json::Value {
    tab.evaluate(js, true)
        .expect("failed to evaluate JS")
        .value
        .unwrap_or(serde_json::Value::Null)
}

fn eval_bool(tab: &Tab, js: &str) -> bool {
    eval(tab, js).as_bool().unwrap_or(false)
}

fn overlay_count(tab: &Tab, gallery: &str) -> u64 {
    eval(
        tab,
        &format!(r#"document.querySelectorAll('[data-gallery="{gallery}"] .overlay').length"#),
    )
    .as_u64()
    .expect("count is not a number")
}

fn click_thumb(tab: &Tab, gallery: &str, index: usize) {
    eval(
        tab,
        &format!(
            r#"document.querySelectorAll('[data-gallery="{gallery}"] .gallery-thumb')[{index}].click()"#
        ),
    );
}

fn preview_src(tab: &Tab, gallery: &str) -> String {
    eval(
        tab,
        &format!(r#"document.querySelector('[data-gallery="{gallery}"] .overlay-image').src"#),
    )
    .as_str()
    .expect("src is not a string")
    .to_string()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[test]
#[ignore]
fn page_loads_idle() {
    let tab = load_index();
    assert_eq!(overlay_count(&tab, "gallery-1"), 0);
    assert_eq!(overlay_count(&tab, "gallery-2"), 0);
    assert!(!eval_bool(&tab, "document.body.classList.contains('overlay-open')"));
}

#[test]
#[ignore]
fn thumbnail_opens_preview() {
    let tab = load_index();
    click_thumb(&tab, "gallery-1", 1);
    assert_eq!(overlay_count(&tab, "gallery-1"), 1);
    assert!(preview_src(&tab, "gallery-1").ends_with("green.svg"));
    assert!(eval_bool(&tab, "document.body.classList.contains('overlay-open')"));
}

#[test]
#[ignore]
fn second_activation_replaces_preview() {
    let tab = load_index();
    click_thumb(&tab, "gallery-1", 0);
    click_thumb(&tab, "gallery-1", 2);
    assert_eq!(overlay_count(&tab, "gallery-1"), 1);
    assert!(preview_src(&tab, "gallery-1").ends_with("blue.svg"));
}

#[test]
#[ignore]
fn backdrop_click_dismisses() {
    let tab = load_index();
    click_thumb(&tab, "gallery-1", 0);
    eval(&tab, r#"document.querySelector('[data-gallery="gallery-1"] .overlay').click()"#);
    assert_eq!(overlay_count(&tab, "gallery-1"), 0);
    assert!(!eval_bool(&tab, "document.body.classList.contains('overlay-open')"));
}

#[test]
#[ignore]
fn close_button_dismisses() {
    let tab = load_index();
    click_thumb(&tab, "gallery-1", 0);
    eval(&tab, r#"document.querySelector('[data-gallery="gallery-1"] .overlay-close').click()"#);
    assert_eq!(overlay_count(&tab, "gallery-1"), 0);
}

#[test]
#[ignore]
fn image_click_keeps_preview_open() {
    let tab = load_index();
    click_thumb(&tab, "gallery-1", 0);
    eval(&tab, r#"document.querySelector('[data-gallery="gallery-1"] .overlay-image').click()"#);
    assert_eq!(overlay_count(&tab, "gallery-1"), 1);
}

#[test]
#[ignore]
fn escape_dismisses() {
    let tab = load_index();
    click_thumb(&tab, "gallery-1", 0);
    eval(
        &tab,
        "document.dispatchEvent(new KeyboardEvent('keydown', { key: 'Escape' }))",
    );
    assert_eq!(overlay_count(&tab, "gallery-1"), 0);
}

#[test]
#[ignore]
fn galleries_keep_separate_selections() {
    let tab = load_index();
    click_thumb(&tab, "gallery-1", 0);
    assert_eq!(overlay_count(&tab, "gallery-2"), 0);

    click_thumb(&tab, "gallery-2", 1);
    assert_eq!(overlay_count(&tab, "gallery-1"), 1);
    assert_eq!(overlay_count(&tab, "gallery-2"), 1);

    eval(&tab, r#"document.querySelector('[data-gallery="gallery-2"] .overlay').click()"#);
    assert_eq!(overlay_count(&tab, "gallery-1"), 1);
    assert_eq!(overlay_count(&tab, "gallery-2"), 0);
    // One preview still open, so scrolling stays locked
    assert!(eval_bool(&tab, "document.body.classList.contains('overlay-open')"));
}

#[test]
#[ignore]
fn broken_thumbnail_is_hidden() {
    let tab = load_index();
    let hidden = eval_bool(
        &tab,
        r#"new Promise((resolve) => {
            const gallery = document.querySelector('[data-gallery="gallery-2"]');
            gallery.scrollIntoView();
            const thumb = gallery.querySelectorAll('.gallery-thumb')[0];
            const started = Date.now();
            (function poll() {
                if (thumb.classList.contains('broken')) return resolve(true);
                if (Date.now() - started > 5000) return resolve(false);
                setTimeout(poll, 50);
            })();
        })"#,
    );
    assert!(hidden, "missing image thumbnail was not hidden");
    assert!(!eval_bool(
        &tab,
        r#"document.querySelectorAll('[data-gallery="gallery-2"] .gallery-thumb')[1].classList.contains('broken')"#,
    ));
}

#[test]
#[ignore]
fn broken_preview_still_dismisses() {
    let tab = load_index();
    click_thumb(&tab, "gallery-2", 0);
    let broken = eval_bool(
        &tab,
        r#"new Promise((resolve) => {
            const overlay = document.querySelector('[data-gallery="gallery-2"] .overlay');
            const started = Date.now();
            (function poll() {
                if (overlay.classList.contains('overlay-broken')) return resolve(true);
                if (Date.now() - started > 5000) return resolve(false);
                setTimeout(poll, 50);
            })();
        })"#,
    );
    assert!(broken, "missing preview image was not flagged");
    eval(&tab, r#"document.querySelector('[data-gallery="gallery-2"] .overlay-close').click()"#);
    assert_eq!(overlay_count(&tab, "gallery-2"), 0);
}

#[test]
#[ignore]
fn empty_gallery_has_no_thumbnails() {
    let tab = load_index();
    let count = eval(
        &tab,
        r#"document.querySelectorAll('[data-gallery="gallery-3"] .gallery-thumb').length"#,
    );
    assert_eq!(count.as_u64(), Some(0));
    assert_eq!(overlay_count(&tab, "gallery-3"), 0);
}

#[test]
#[ignore]
fn assets_copied_next_to_index() {
    ensure_fixtures_built();
    for name in ["red.svg", "green.svg", "blue.svg"] {
        assert!(generated_dir().join(name).is_file(), "missing {name}");
    }
}
