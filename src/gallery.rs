//! Image galleries and their preview selection.
//!
//! A [`Gallery`] holds an ordered list of [`ImageRef`]s and at most one
//! selected image. The selection is a two-state machine:
//!
//! ```text
//! Idle --activate(x)--> Previewing(x)
//! Previewing(x) --activate(y)--> Previewing(y)
//! Previewing(x) --dismiss()--> Idle
//! Idle --dismiss()--> Idle
//! ```
//!
//! The generated page runs the same machine in `static/overlay.js`; the Rust
//! side renders the grid and the initial overlay state.

use crate::overlay::{self, OverlayLabels};
use maud::{Markup, Render, html};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque reference to a displayable image, usually a URL.
///
/// Never validated: whatever the content says is what the browser is
/// asked to load.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageRef(String);

impl ImageRef {
    pub fn new(src: impl Into<String>) -> Self {
        Self(src.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Render for ImageRef {
    fn render_to(&self, buffer: &mut String) {
        self.0.render_to(buffer);
    }
}

impl From<&str> for ImageRef {
    fn from(src: &str) -> Self {
        Self::new(src)
    }
}

/// Preview state of a single gallery.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    Idle,
    Previewing(ImageRef),
}

impl Selection {
    /// The image being previewed, if any.
    pub fn image(&self) -> Option<&ImageRef> {
        match self {
            Selection::Idle => None,
            Selection::Previewing(image) => Some(image),
        }
    }

    pub fn is_previewing(&self) -> bool {
        matches!(self, Selection::Previewing(_))
    }
}

/// An ordered set of thumbnails with at most one image open in the overlay.
#[derive(Debug, Clone)]
pub struct Gallery {
    images: Vec<ImageRef>,
    selection: Selection,
}

impl Gallery {
    pub fn new(images: Vec<ImageRef>) -> Self {
        Self {
            images,
            selection: Selection::Idle,
        }
    }

    pub fn images(&self) -> &[ImageRef] {
        &self.images
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Open `image` in the overlay, replacing any current preview.
    ///
    /// Membership is not checked; any reference becomes the preview target.
    pub fn activate(&mut self, image: ImageRef) {
        self.selection = Selection::Previewing(image);
    }

    /// Close the overlay. No-op when nothing is selected.
    pub fn dismiss(&mut self) {
        self.selection = Selection::Idle;
    }
}

/// Render a gallery's thumbnail grid followed by its overlay.
///
/// `id` scopes the overlay script to this grid so several galleries on one
/// page keep independent selections. `alt_label` prefixes the 1-based
/// thumbnail alt text ("Doce 1", "Doce 2", ...).
pub fn render_gallery(
    gallery: &Gallery,
    id: &str,
    alt_label: &str,
    labels: &OverlayLabels,
) -> Markup {
    html! {
        div.gallery data-gallery=(id) {
            div.gallery-grid {
                @for (idx, image) in gallery.images().iter().enumerate() {
                    button.gallery-thumb type="button" data-src=(image) style={ "--reveal-delay: " (reveal_delay(idx)) } {
                        img src=(image) alt={ (alt_label) " " (idx + 1) } loading="lazy" referrerpolicy="no-referrer";
                        span.gallery-thumb-tint {}
                    }
                }
            }
            (overlay::render(gallery.selection(), labels))
            (overlay::render_template(labels))
        }
    }
}

/// Staggered entrance delay for the thumbnail at `idx`, 100ms apart.
fn reveal_delay(idx: usize) -> String {
    format!("{}ms", idx * 100)
}
