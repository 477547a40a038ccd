//! Page content loaded from `page.toml`.
//!
//! The page is an ordered list of sections, each a `[[sections]]` table tagged
//! by `kind`. Sections are static data: copy, image references and calls to
//! action. Only `gallery` sections are interactive.
//!
//! ```toml
//! [[sections]]
//! kind = "gallery"
//! title = "Páscoa Gourmet"
//! subtitle = "Edição Limitada"
//! images = ["https://example.com/1.png", "https://example.com/2.png"]
//! cta = { label = "Ver cardápio de Páscoa", variant = "secondary" }
//! ```
//!
//! Section kinds: `hero`, `gallery`, `showcase`, `features`, `cta_band`,
//! `steps`. Unknown kinds and unknown keys are rejected.

use crate::components::{Cta, Icon};
use crate::gallery::ImageRef;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("page description not found: {}", .0.display())]
    Missing(PathBuf),
}

/// The full page: sections in display order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Page {
    #[serde(default)]
    pub sections: Vec<Section>,
}

impl Page {
    /// Gallery sections in page order.
    pub fn galleries(&self) -> impl Iterator<Item = &GallerySection> {
        self.sections.iter().filter_map(|s| match s {
            Section::Gallery(g) => Some(g),
            _ => None,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Section {
    Hero(Hero),
    Gallery(GallerySection),
    Showcase(Showcase),
    Features(Features),
    CtaBand(CtaBand),
    Steps(Steps),
}

impl Section {
    /// Display name of the section kind.
    pub fn kind_label(&self) -> &'static str {
        match self {
            Section::Hero(_) => "Hero",
            Section::Gallery(_) => "Gallery",
            Section::Showcase(_) => "Showcase",
            Section::Features(_) => "Features",
            Section::CtaBand(_) => "Call to action",
            Section::Steps(_) => "Steps",
        }
    }

    /// The section's main heading, if it has one.
    pub fn heading(&self) -> Option<&str> {
        match self {
            Section::Hero(h) => Some(&h.headline),
            Section::Gallery(g) => Some(&g.title),
            Section::Showcase(s) => Some(&s.headline),
            Section::Features(_) => None,
            Section::CtaBand(c) => Some(&c.headline),
            Section::Steps(s) => Some(&s.title),
        }
    }

    /// Number of image references the section displays.
    pub fn image_count(&self) -> usize {
        match self {
            Section::Hero(_) => 1,
            Section::Gallery(g) => g.images.len(),
            Section::Showcase(s) => s.images.len(),
            Section::Features(_) | Section::CtaBand(_) | Section::Steps(_) => 0,
        }
    }
}

/// Opening banner: brand image, pitch and the first call to action.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Hero {
    pub image: ImageRef,
    /// Small pill above the headline.
    pub badge: String,
    pub headline: String,
    pub lead: String,
    pub cta: Cta,
    /// Reassurance line under the button.
    #[serde(default)]
    pub note: Option<String>,
}

/// Interactive thumbnail grid with a full-screen preview.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GallerySection {
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub images: Vec<ImageRef>,
    /// Overrides `site.thumbnail_alt` for this gallery.
    #[serde(default)]
    pub alt_label: Option<String>,
    #[serde(default)]
    pub cta: Option<Cta>,
}

/// Two-column service pitch: copy and checklist next to a static image stack.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Showcase {
    pub eyebrow: String,
    pub headline: String,
    /// Inline markdown.
    pub body: String,
    #[serde(default)]
    pub checklist: Vec<String>,
    pub cta: Cta,
    /// First image is featured; the rest share a row below it.
    #[serde(default)]
    pub images: Vec<ImageRef>,
    #[serde(default = "default_showcase_alt")]
    pub image_alt: String,
}

fn default_showcase_alt() -> String {
    "Detalhe".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Features {
    pub items: Vec<Feature>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Feature {
    pub icon: Icon,
    pub title: String,
    pub description: String,
}

/// A full-width band with a headline and a single call to action.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CtaBand {
    pub headline: String,
    #[serde(default)]
    pub lead: Option<String>,
    pub cta: Cta,
    #[serde(default)]
    pub note: Option<String>,
    /// Light text on the chocolate background.
    #[serde(default)]
    pub dark: bool,
}

/// Numbered "how it works" sequence.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Steps {
    pub title: String,
    /// Caption on each step's number badge.
    #[serde(default = "default_step_badge")]
    pub badge: String,
    pub items: Vec<Step>,
}

fn default_step_badge() -> String {
    "Passo".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Step {
    pub title: String,
    pub description: String,
}

/// Two-digit, 1-based step number ("01", "02", ...).
pub fn step_number(index: usize) -> String {
    format!("{:0>2}", index + 1)
}

/// Load `page.toml` from the content root.
pub fn load_page(root: &Path) -> Result<Page, ContentError> {
    let page_path = root.join("page.toml");
    if !page_path.exists() {
        return Err(ContentError::Missing(page_path));
    }
    let content = fs::read_to_string(&page_path)?;
    parse_page(&content)
}

pub fn parse_page(content: &str) -> Result<Page, ContentError> {
    Ok(toml::from_str(content)?)
}
