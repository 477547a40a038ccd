//! CLI output formatting for `check` and `build`.
//!
//! Output is an inventory of the page, not a file listing: every section
//! leads with its position and kind, then its heading, with image counts
//! where the section shows images.
//!
//! # Output Format
//!
//! ## Check
//!
//! ```text
//! Site
//!     Doceria Algodão Doce
//!     Messaging: https://api.whatsapp.com/message/...
//!
//! Sections
//! 001 Hero: Doces artesanais que impressionam no sabor e encantam...
//! 002 Gallery: Doces perfeitos para seu evento (7 images)
//! 003 Features
//!
//! Config
//!     config.toml
//!     page.toml
//!     assets/
//! ```
//!
//! ## Build
//!
//! ```text
//! 001 Hero: Doces artesanais que impressionam no sabor e encantam...
//! 002 Gallery: Doces perfeitos para seu evento (7 images)
//!     Assets
//!     favicon.svg
//!
//! Generated dist/index.html: 8 sections, 2 galleries, 10 gallery images, 1 asset
//! ```
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout.

use crate::config::SiteConfig;
use crate::content::Page;
use crate::generate::{GenerateReport, SectionSummary};
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Truncate text to `max` characters, appending `...` if truncated.
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max).collect();
        format!("{}...", cut.trim_end())
    }
}

/// Format a section line: position, kind, heading, and image count.
///
/// ```text
/// 002 Gallery: Páscoa Gourmet (3 images)
/// 005 Features
/// ```
fn section_line(index: usize, section: &SectionSummary) -> String {
    let mut line = format!("{} {}", format_index(index), section.kind);
    if let Some(heading) = &section.heading {
        line.push_str(&format!(": {}", truncate(heading, 60)));
    }
    if section.kind == "Gallery" || section.images > 1 {
        line.push_str(&format!(" ({} images)", section.images));
    }
    line
}

fn count(n: usize, singular: &str, plural: &str) -> String {
    format!("{n} {}", if n == 1 { singular } else { plural })
}

// ============================================================================
// Check
// ============================================================================

/// Format the content inventory shown by `check`.
pub fn format_check_output(page: &Page, config: &SiteConfig, source_root: &Path) -> Vec<String> {
    let mut lines = vec![
        "Site".to_string(),
        format!("    {}", config.site.name),
        format!("    Messaging: {}", config.links.messaging),
        String::new(),
        "Sections".to_string(),
    ];

    for (i, section) in page.sections.iter().enumerate() {
        lines.push(section_line(i + 1, &SectionSummary::of(section)));
    }
    if page.sections.is_empty() {
        lines.push("    (none)".to_string());
    }

    lines.push(String::new());
    lines.push("Config".to_string());
    for file in ["config.toml", "page.toml"] {
        if source_root.join(file).exists() {
            lines.push(format!("    {file}"));
        }
    }
    if source_root.join("assets").is_dir() {
        lines.push("    assets/".to_string());
    }

    lines
}

pub fn print_check_output(page: &Page, config: &SiteConfig, source_root: &Path) {
    for line in format_check_output(page, config, source_root) {
        println!("{}", line);
    }
}

// ============================================================================
// Build
// ============================================================================

/// Format the summary shown after `build`.
pub fn format_generate_output(report: &GenerateReport) -> Vec<String> {
    let mut lines: Vec<String> = report
        .sections
        .iter()
        .enumerate()
        .map(|(i, s)| section_line(i + 1, s))
        .collect();

    if !report.assets.is_empty() {
        lines.push("    Assets".to_string());
        for asset in &report.assets {
            lines.push(format!("    {}", asset.display()));
        }
    }

    let galleries: Vec<_> = report
        .sections
        .iter()
        .filter(|s| s.kind == "Gallery")
        .collect();
    let gallery_images: usize = galleries.iter().map(|s| s.images).sum();

    lines.push(String::new());
    lines.push(format!(
        "Generated {}: {}, {}, {}, {}",
        report.index.display(),
        count(report.sections.len(), "section", "sections"),
        count(galleries.len(), "gallery", "galleries"),
        count(gallery_images, "gallery image", "gallery images"),
        count(report.assets.len(), "asset", "assets"),
    ));
    lines
}

pub fn print_generate_output(report: &GenerateReport) {
    for line in format_generate_output(report) {
        println!("{}", line);
    }
}
