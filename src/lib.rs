//! # Vitrine
//!
//! A static site generator for single-page confectionery storefronts: a hero
//! banner, image galleries with a full-screen preview, a service showcase, a
//! feature list, a "how it works" sequence, calls to action that open a
//! messaging app, and a footer.
//!
//! # Content
//!
//! ```text
//! content/
//! ├── config.toml    # Site settings: brand, links, palette (optional, sparse)
//! ├── page.toml      # Ordered [[sections]] describing the page
//! └── assets/        # Copied verbatim to the output root
//! ```
//!
//! The build writes one `index.html` with inline CSS and a short vanilla
//! script. Images are referenced by URL and never fetched or processed.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`gallery`] | Ordered image references plus the Idle/Previewing selection, and the thumbnail grid |
//! | [`overlay`] | Full-screen preview of a gallery's selection |
//! | [`components`] | Buttons, section titles and icons, styled through variant lookup tables |
//! | [`content`] | `page.toml` model: the tagged section list |
//! | [`config`] | `config.toml` loading, merging over stock defaults, validation, CSS variables |
//! | [`generate`] | Renders the page with Maud and writes the output directory |
//! | [`output`] | CLI output formatting for `check` and `build` |
//!
//! # The Preview Overlay
//!
//! Each gallery owns at most one selected image. The Rust side models the
//! selection as [`gallery::Selection`] and renders the initial state; the
//! emitted script runs the same two transitions in the browser: activating
//! a thumbnail opens (or retargets) the overlay, and the close button, the
//! backdrop, or Escape dismiss it. Clicking the image itself does nothing.

pub mod components;
pub mod config;
pub mod content;
pub mod gallery;
pub mod generate;
pub mod output;
pub mod overlay;

#[cfg(test)]
pub(crate) mod test_helpers;
