//! Site configuration module.
//!
//! Handles loading, validating, and merging `config.toml`. The file lives in
//! the content root next to `page.toml` and is sparse: stock defaults are
//! overridden key by key with whatever the file sets.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [site]
//! name = "Doceria"              # Brand name (footer, page title fallback)
//! initials = "D"                # Monogram shown in the footer badge
//! location = ""                 # City line under the footer brand
//! lang = "pt-BR"                # <html lang>
//! title = ""                    # <title>; empty means use `name`
//! description = ""              # <meta name="description">
//! favicon = ""                  # e.g. "favicon.svg" from content/assets/
//! thumbnail_alt = "Doce"        # Gallery alt text prefix ("Doce 1", ...)
//! preview_alt = "Detalhe do doce"
//! close_label = "Fechar"        # Accessible label of the overlay close button
//! rights = "Todos os direitos reservados."
//!
//! [links]
//! messaging = "https://wa.me/"  # Target of every call-to-action button
//! social = "https://www.instagram.com/"
//!
//! [colors]
//! cream = "#fdf6ec"
//! chocolate = "#5c3a2e"
//! pastel_pink = "#f6c6d0"
//! footer = "#4a2e25"
//!
//! [theme]
//! max_width = "64rem"           # Content column width
//! radius = "1rem"               # Corner radius of cards and thumbnails
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::overlay::OverlayLabels;

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
/// All fields have defaults. User config files need only specify the values
/// they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Brand identity and page-level text.
    pub site: SiteInfo,
    /// External destinations for buttons and footer icons.
    pub links: LinksConfig,
    /// Brand palette.
    pub colors: ColorConfig,
    /// Layout settings.
    pub theme: ThemeConfig,
}

impl SiteConfig {
    /// Validate config values are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.site.name.trim().is_empty() {
            return Err(ConfigError::Validation("site.name must not be empty".into()));
        }
        for (key, url) in [
            ("links.messaging", &self.links.messaging),
            ("links.social", &self.links.social),
        ] {
            if !is_absolute_http_url(url) {
                return Err(ConfigError::Validation(format!(
                    "{key} must be an absolute http(s) URL, got {url:?}"
                )));
            }
        }
        Ok(())
    }

    /// The `<title>` of the generated page.
    pub fn page_title(&self) -> &str {
        if self.site.title.is_empty() {
            &self.site.name
        } else {
            &self.site.title
        }
    }

    pub fn overlay_labels(&self) -> OverlayLabels {
        OverlayLabels {
            image_alt: self.site.preview_alt.clone(),
            close: self.site.close_label.clone(),
        }
    }
}

fn is_absolute_http_url(url: &str) -> bool {
    ["https://", "http://"]
        .iter()
        .any(|scheme| url.len() > scheme.len() && url.starts_with(scheme))
}

/// Brand identity and page-level text.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteInfo {
    pub name: String,
    /// Monogram shown in the footer badge.
    pub initials: String,
    pub location: String,
    /// Value of `<html lang>`.
    pub lang: String,
    /// Page `<title>`. Empty means use `name`.
    pub title: String,
    /// `<meta name="description">`, omitted when empty.
    pub description: String,
    /// Favicon path relative to the output root, omitted when empty.
    pub favicon: String,
    /// Prefix of gallery thumbnail alt text, numbered from 1.
    pub thumbnail_alt: String,
    /// Alt text of the previewed image in the overlay.
    pub preview_alt: String,
    pub close_label: String,
    /// Trailing text of the footer copyright line.
    pub rights: String,
}

impl Default for SiteInfo {
    fn default() -> Self {
        Self {
            name: "Doceria".to_string(),
            initials: "D".to_string(),
            location: String::new(),
            lang: "pt-BR".to_string(),
            title: String::new(),
            description: String::new(),
            favicon: String::new(),
            thumbnail_alt: "Doce".to_string(),
            preview_alt: "Detalhe do doce".to_string(),
            close_label: "Fechar".to_string(),
            rights: "Todos os direitos reservados.".to_string(),
        }
    }
}

/// External link targets.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LinksConfig {
    /// Messaging-app deep link; every call-to-action points here.
    pub messaging: String,
    /// Social profile linked from the footer.
    pub social: String,
}

impl Default for LinksConfig {
    fn default() -> Self {
        Self {
            messaging: "https://wa.me/".to_string(),
            social: "https://www.instagram.com/".to_string(),
        }
    }
}

/// Brand palette, emitted as CSS custom properties.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    /// Light page background.
    pub cream: String,
    /// Primary text and dark section background.
    pub chocolate: String,
    /// Accent for secondary buttons and highlights.
    pub pastel_pink: String,
    /// Footer background.
    pub footer: String,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            cream: "#fdf6ec".to_string(),
            chocolate: "#5c3a2e".to_string(),
            pastel_pink: "#f6c6d0".to_string(),
            footer: "#4a2e25".to_string(),
        }
    }
}

/// Layout settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    /// Maximum width of the content column (CSS value).
    pub max_width: String,
    /// Corner radius of cards and thumbnails (CSS value).
    pub radius: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            max_width: "64rem".to_string(),
            radius: "1rem".to_string(),
        }
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the base layer that user overrides are merged on top of.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(SiteConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load `config.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if the directory has no `config.toml`.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = path.join("config.toml");
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `config.toml` in the given directory.
///
/// Merges user values on top of stock defaults, rejects unknown keys,
/// and validates the result.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value();
    let overlay = load_raw_config(root)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Vitrine Configuration
# =====================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# Place this file next to page.toml in the content directory.
# Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Brand and page text
# ---------------------------------------------------------------------------
[site]
name = "Doceria"
# Monogram shown in the footer badge.
initials = "D"
# City line under the footer brand. Empty hides it.
location = ""
# Value of <html lang>.
lang = "pt-BR"
# Page <title>. Empty means use `name`.
title = ""
# <meta name="description">. Empty omits the tag.
description = ""
# Favicon path relative to the site root, e.g. "favicon.svg" for
# content/assets/favicon.svg. Empty omits the tag.
favicon = ""
# Gallery thumbnails get alt text "<thumbnail_alt> 1", "<thumbnail_alt> 2", ...
thumbnail_alt = "Doce"
# Alt text of the full-screen preview image.
preview_alt = "Detalhe do doce"
# Accessible label of the preview close button.
close_label = "Fechar"
# Trailing text of the footer copyright line.
rights = "Todos os direitos reservados."

# ---------------------------------------------------------------------------
# External links (absolute http/https URLs)
# ---------------------------------------------------------------------------
[links]
# Every call-to-action button opens this messaging deep link.
messaging = "https://wa.me/"
# Social profile linked from the footer.
social = "https://www.instagram.com/"

# ---------------------------------------------------------------------------
# Colors
# ---------------------------------------------------------------------------
[colors]
cream = "#fdf6ec"        # Light background
chocolate = "#5c3a2e"    # Text and dark sections
pastel_pink = "#f6c6d0"  # Accent
footer = "#4a2e25"       # Footer background

# ---------------------------------------------------------------------------
# Layout
# ---------------------------------------------------------------------------
[theme]
# Maximum width of the content column.
max_width = "64rem"
# Corner radius of cards and thumbnails.
radius = "1rem"
"##
}

/// Generate CSS custom properties from color config.
pub fn generate_color_css(colors: &ColorConfig) -> String {
    format!(
        r#":root {{
    --color-cream: {cream};
    --color-chocolate: {chocolate};
    --color-pastel-pink: {pastel_pink};
    --color-footer: {footer};
}}"#,
        cream = colors.cream,
        chocolate = colors.chocolate,
        pastel_pink = colors.pastel_pink,
        footer = colors.footer,
    )
}

/// Generate CSS custom properties from theme config.
pub fn generate_theme_css(theme: &ThemeConfig) -> String {
    format!(
        r#":root {{
    --max-width: {max_width};
    --radius: {radius};
}}"#,
        max_width = theme.max_width,
        radius = theme.radius,
    )
}
