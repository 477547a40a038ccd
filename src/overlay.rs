//! Full-screen image preview.
//!
//! The overlay is a pure view of a gallery's [`Selection`]: it renders
//! nothing while idle, and a backdrop with the centered image plus a close
//! control while previewing. Dismissal is wired through `data-dismiss`
//! attributes that `static/overlay.js` routes to a single dismiss path:
//!
//! - `data-dismiss="close"`: the close button
//! - `data-dismiss="backdrop"`: the backdrop itself, but not the image on it
//!
//! Each gallery also carries an inert `<template>` copy of the frame that the
//! script clones when a thumbnail is activated in the browser.

use crate::components::Icon;
use crate::gallery::{ImageRef, Selection};
use maud::{Markup, html};

/// Text shown on the overlay, taken from the site config.
#[derive(Debug, Clone)]
pub struct OverlayLabels {
    /// Alt text for the previewed image, also shown if it fails to load.
    pub image_alt: String,
    /// Accessible label of the close control.
    pub close: String,
}

impl Default for OverlayLabels {
    fn default() -> Self {
        Self {
            image_alt: "Detalhe do doce".to_string(),
            close: "Fechar".to_string(),
        }
    }
}

/// Render the overlay for `selection`. Empty markup when idle.
pub fn render(selection: &Selection, labels: &OverlayLabels) -> Markup {
    match selection.image() {
        Some(image) => frame(Some(image), labels),
        None => html! {},
    }
}

/// Inert copy of the overlay frame for the browser script to clone.
pub fn render_template(labels: &OverlayLabels) -> Markup {
    html! {
        template.overlay-template {
            (frame(None, labels))
        }
    }
}

fn frame(image: Option<&ImageRef>, labels: &OverlayLabels) -> Markup {
    html! {
        div.overlay role="dialog" aria-modal="true" aria-label=(labels.image_alt)
            data-dismiss="backdrop" data-overlay=[image.map(|_| "open")] {
            button.overlay-close type="button" aria-label=(labels.close) data-dismiss="close" {
                (Icon::Close.render())
            }
            img.overlay-image src=[image] alt=(labels.image_alt) referrerpolicy="no-referrer";
        }
    }
}
