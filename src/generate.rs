//! HTML site generation.
//!
//! Reads `config.toml` and `page.toml` from the content directory and writes
//! a single self-contained page.
//!
//! ## Output Structure
//!
//! ```text
//! dist/
//! ├── index.html        # The whole site: inline CSS and overlay script
//! └── ...               # Everything under content/assets/, copied verbatim
//! ```
//!
//! ## Page Layout
//!
//! Sections render in `page.toml` order, followed by a footer built from the
//! site config. Gallery sections get sequential ids (`gallery-1`,
//! `gallery-2`, ...) so each one keeps its own preview selection.
//!
//! ## CSS and JavaScript
//!
//! Static assets are embedded at compile time:
//! - `static/style.css`: base styles (palette and layout variables injected from config)
//! - `static/overlay.js`: thumbnail activation and overlay dismissal
//!
//! ## HTML Generation
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating.
//! All interpolated content is auto-escaped, except inline markdown, which is
//! rendered with pulldown-cmark.

use crate::components::{self, Icon};
use crate::config::{self, SiteConfig};
use crate::content::{self, CtaBand, Features, GallerySection, Hero, Page, Section, Showcase, Steps};
use crate::gallery::{self, Gallery};
use chrono::Datelike;
use maud::{DOCTYPE, Markup, PreEscaped, html};
use pulldown_cmark::{Parser, html as md_html};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Config(#[from] config::ConfigError),
    #[error(transparent)]
    Content(#[from] content::ContentError),
    #[error("asset copy failed: {0}")]
    Walk(#[from] walkdir::Error),
}

/// What a build wrote, for CLI output.
#[derive(Debug, Serialize)]
pub struct GenerateReport {
    pub index: PathBuf,
    pub sections: Vec<SectionSummary>,
    /// Asset files copied, relative to the output directory.
    pub assets: Vec<PathBuf>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SectionSummary {
    pub kind: String,
    pub heading: Option<String>,
    pub images: usize,
}

impl SectionSummary {
    pub fn of(section: &Section) -> Self {
        Self {
            kind: section.kind_label().to_string(),
            heading: section.heading().map(str::to_string),
            images: section.image_count(),
        }
    }
}

const CSS_STATIC: &str = include_str!("../static/style.css");
const JS: &str = include_str!("../static/overlay.js");

pub fn generate(source: &Path, output_dir: &Path) -> Result<GenerateReport, GenerateError> {
    let config = config::load_config(source)?;
    let page = content::load_page(source)?;

    fs::create_dir_all(output_dir)?;
    let assets = copy_assets(&source.join("assets"), output_dir)?;

    let year = chrono::Local::now().year();
    let html = render_page(&page, &config, year);
    let index = output_dir.join("index.html");
    fs::write(&index, html.into_string())?;

    Ok(GenerateReport {
        index,
        sections: page.sections.iter().map(SectionSummary::of).collect(),
        assets,
    })
}

/// Copy `src` recursively into `dst`. A missing `src` copies nothing.
fn copy_assets(src: &Path, dst: &Path) -> Result<Vec<PathBuf>, GenerateError> {
    let mut copied = Vec::new();
    if !src.is_dir() {
        return Ok(copied);
    }
    for entry in WalkDir::new(src).sort_by_file_name() {
        let entry = entry?;
        let Ok(rel) = entry.path().strip_prefix(src) else {
            continue;
        };
        let target = dst.join(rel);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else {
            fs::copy(entry.path(), &target)?;
            copied.push(rel.to_path_buf());
        }
    }
    Ok(copied)
}

/// Full stylesheet: config-derived variables followed by the static styles.
pub fn site_css(config: &SiteConfig) -> String {
    format!(
        "{}\n\n{}\n\n{}",
        config::generate_color_css(&config.colors),
        config::generate_theme_css(&config.theme),
        CSS_STATIC
    )
}

// ============================================================================
// HTML Components
// ============================================================================

/// Renders the base HTML document structure
fn base_document(config: &SiteConfig, css: &str, content: Markup) -> Markup {
    let description = (!config.site.description.is_empty()).then_some(&config.site.description);
    let favicon = (!config.site.favicon.is_empty()).then_some(&config.site.favicon);
    html! {
        (DOCTYPE)
        html lang=(config.site.lang) {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                @if let Some(description) = description {
                    meta name="description" content=(description);
                }
                @if let Some(favicon) = favicon {
                    link rel="icon" href=(favicon);
                }
                title { (config.page_title()) }
                style { (PreEscaped(css)) }
            }
            body {
                (content)
                script { (PreEscaped(JS)) }
            }
        }
    }
}

/// Inline markdown to HTML. Paragraph wrappers are kept.
fn markdown(text: &str) -> Markup {
    let mut out = String::new();
    md_html::push_html(&mut out, Parser::new(text));
    PreEscaped(out)
}

// ============================================================================
// Section Renderers
// ============================================================================

/// Renders the whole page.
pub fn render_page(page: &Page, config: &SiteConfig, year: i32) -> Markup {
    let css = site_css(config);
    let mut galleries = 0;
    let sections: Vec<Markup> = page
        .sections
        .iter()
        .map(|section| match section {
            Section::Hero(hero) => render_hero(hero, config),
            Section::Gallery(g) => {
                galleries += 1;
                render_gallery_section(g, &format!("gallery-{galleries}"), config)
            }
            Section::Showcase(s) => render_showcase(s, config),
            Section::Features(f) => render_features(f),
            Section::CtaBand(c) => render_cta_band(c, config),
            Section::Steps(s) => render_steps(s),
        })
        .collect();

    let content = html! {
        main {
            @for section in sections {
                (section)
            }
        }
        (render_footer(config, year))
    };
    base_document(config, &css, content)
}

fn render_hero(hero: &Hero, config: &SiteConfig) -> Markup {
    html! {
        section.hero {
            div.container.hero-inner {
                div.hero-image {
                    span.hero-glow {}
                    img src=(hero.image) alt=(config.site.name) referrerpolicy="no-referrer";
                }
                div.hero-card {
                    span.badge { (hero.badge) }
                    h1 { (hero.headline) }
                    p.lead { (hero.lead) }
                    div.hero-actions {
                        (components::button(&hero.cta, &config.links.messaging))
                        @if let Some(note) = &hero.note {
                            span.note { (Icon::Check.render()) (note) }
                        }
                    }
                }
            }
        }
    }
}

fn render_gallery_section(section: &GallerySection, id: &str, config: &SiteConfig) -> Markup {
    let gallery = Gallery::new(section.images.clone());
    let alt_label = section
        .alt_label
        .as_deref()
        .unwrap_or(&config.site.thumbnail_alt);
    html! {
        section.section-gallery id=(id) {
            div.container {
                (components::section_title(&section.title, section.subtitle.as_deref(), true))
                (gallery::render_gallery(&gallery, id, alt_label, &config.overlay_labels()))
                @if let Some(cta) = &section.cta {
                    div.section-actions {
                        (components::button(cta, &config.links.messaging))
                    }
                }
            }
        }
    }
}

fn render_showcase(showcase: &Showcase, config: &SiteConfig) -> Markup {
    let (featured, rest) = match showcase.images.split_first() {
        Some((first, rest)) => (Some(first), rest),
        None => (None, &[][..]),
    };
    html! {
        section.showcase.dark {
            div.container.showcase-inner {
                div.showcase-copy {
                    span.eyebrow { (showcase.eyebrow) }
                    h2 { (showcase.headline) }
                    div.showcase-body { (markdown(&showcase.body)) }
                    @if !showcase.checklist.is_empty() {
                        ul.checklist {
                            @for item in &showcase.checklist {
                                li {
                                    span.check-dot { (Icon::Check.render()) }
                                    span { (item) }
                                }
                            }
                        }
                    }
                    (components::button(&showcase.cta, &config.links.messaging))
                }
                @if let Some(featured) = featured {
                    div.showcase-images {
                        img.featured src=(featured) alt=(showcase.image_alt) referrerpolicy="no-referrer";
                        @if !rest.is_empty() {
                            div.showcase-row {
                                @for image in rest {
                                    img src=(image) alt=(showcase.image_alt) referrerpolicy="no-referrer";
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn render_features(features: &Features) -> Markup {
    html! {
        section.features {
            div.container.feature-grid {
                @for feature in &features.items {
                    div.feature-card {
                        div.feature-icon { (feature.icon.render()) }
                        h3 { (feature.title) }
                        p { (feature.description) }
                    }
                }
            }
        }
    }
}

fn render_cta_band(band: &CtaBand, config: &SiteConfig) -> Markup {
    html! {
        section.cta-band.dark[band.dark] {
            div.container.narrow {
                h2 { (band.headline) }
                @if let Some(lead) = &band.lead {
                    p.lead { (lead) }
                }
                (components::button(&band.cta, &config.links.messaging))
                @if let Some(note) = &band.note {
                    p.note { (note) }
                }
            }
        }
    }
}

fn render_steps(steps: &Steps) -> Markup {
    html! {
        section.steps {
            div.container {
                (components::section_title(&steps.title, None, true))
                ol.step-list {
                    @for (idx, step) in steps.items.iter().enumerate() {
                        li.step {
                            div.step-number {
                                span { (content::step_number(idx)) }
                                span.step-badge { (steps.badge) }
                            }
                            h3 { (step.title) }
                            p { (step.description) }
                        }
                    }
                }
            }
        }
    }
}

fn render_footer(config: &SiteConfig, year: i32) -> Markup {
    let site = &config.site;
    html! {
        footer.site-footer {
            div.container.narrow {
                div.monogram { span { (site.initials) } }
                h3 { (site.name) }
                @if !site.location.is_empty() {
                    p.location { (Icon::MapPin.render()) (site.location) }
                }
                nav.social {
                    a href=(config.links.social) target="_blank" rel="noopener noreferrer" aria-label="Instagram" {
                        (Icon::Instagram.render())
                    }
                    a href=(config.links.messaging) target="_blank" rel="noopener noreferrer" aria-label="WhatsApp" {
                        (Icon::Message.render())
                    }
                }
                p.copyright { "© " (year) " " (site.name) ". " (site.rights) }
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
