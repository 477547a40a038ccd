//! Declarative display components shared by the page sections.
//!
//! Components are plain functions returning [`Markup`]. Styling options are
//! closed enums resolved through lookup tables ([`ButtonVariant::classes`],
//! [`Icon::shapes`]), so an unknown variant in `page.toml` is a parse error
//! instead of a silently unstyled element.

use maud::{Markup, PreEscaped, html};
use serde::{Deserialize, Serialize};

/// Visual style of a call-to-action button.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
}

impl ButtonVariant {
    /// CSS classes for this variant, appended to the shared `button` class.
    pub fn classes(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "button-primary",
            ButtonVariant::Secondary => "button-secondary",
            ButtonVariant::Outline => "button-outline",
        }
    }
}

/// Inline SVG icons, drawn on a 24×24 stroked grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Icon {
    Message,
    Star,
    Heart,
    Check,
    MapPin,
    Instagram,
    Close,
    ChevronRight,
}

impl Icon {
    fn shapes(self) -> &'static str {
        match self {
            Icon::Message => r#"<path d="M7.9 20A9 9 0 1 0 4 16.1L2 22Z"/>"#,
            Icon::Star => {
                r#"<polygon points="12 2 15.09 8.26 22 9.27 17 14.14 18.18 21.02 12 17.77 5.82 21.02 7 14.14 2 9.27 8.91 8.26 12 2"/>"#
            }
            Icon::Heart => {
                r#"<path d="M19 14c1.49-1.46 3-3.21 3-5.5A5.5 5.5 0 0 0 16.5 3c-1.76 0-3 .5-4.5 2-1.5-1.5-2.74-2-4.5-2A5.5 5.5 0 0 0 2 8.5c0 2.3 1.5 4.05 3 5.5l7 7Z"/>"#
            }
            Icon::Check => r#"<circle cx="12" cy="12" r="10"/><path d="m9 12 2 2 4-4"/>"#,
            Icon::MapPin => {
                r#"<path d="M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z"/><circle cx="12" cy="10" r="3"/>"#
            }
            Icon::Instagram => {
                r#"<rect width="20" height="20" x="2" y="2" rx="5" ry="5"/><path d="M16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37z"/><line x1="17.5" x2="17.51" y1="6.5" y2="6.5"/>"#
            }
            Icon::Close => r#"<path d="M18 6 6 18"/><path d="m6 6 12 12"/>"#,
            Icon::ChevronRight => r#"<path d="m9 18 6-6-6-6"/>"#,
        }
    }

    pub fn render(self) -> Markup {
        html! {
            svg.icon xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none"
                stroke="currentColor" stroke-width="2" stroke-linecap="round"
                stroke-linejoin="round" aria-hidden="true" {
                (PreEscaped(self.shapes()))
            }
        }
    }
}

/// A call to action: an external link styled as a button.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Cta {
    pub label: String,
    #[serde(default)]
    pub variant: ButtonVariant,
    /// Icon before the label.
    #[serde(default)]
    pub icon: Option<Icon>,
    /// Icon after the label.
    #[serde(default)]
    pub trailing_icon: Option<Icon>,
    /// Larger padding and type, used for the hero and closing CTAs.
    #[serde(default)]
    pub large: bool,
}

impl Cta {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            variant: ButtonVariant::default(),
            icon: None,
            trailing_icon: None,
            large: false,
        }
    }
}

/// Render `cta` as a link to `href`, opened in a new tab.
pub fn button(cta: &Cta, href: &str) -> Markup {
    let class = format!(
        "button {}{}",
        cta.variant.classes(),
        if cta.large { " button-large" } else { "" }
    );
    html! {
        a class=(class) href=(href) target="_blank" rel="noopener noreferrer" {
            @if let Some(icon) = cta.icon {
                (icon.render())
            }
            span { (cta.label) }
            @if let Some(icon) = cta.trailing_icon {
                (icon.render())
            }
        }
    }
}

/// Section heading with an optional ruled subtitle.
pub fn section_title(title: &str, subtitle: Option<&str>, centered: bool) -> Markup {
    html! {
        div.section-title.centered[centered] {
            h2 { (title) }
            @if let Some(subtitle) = subtitle {
                div.section-subtitle {
                    span.rule {}
                    p { (subtitle) }
                    span.rule {}
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_variant_has_its_own_classes() {
        let variants = [
            ButtonVariant::Primary,
            ButtonVariant::Secondary,
            ButtonVariant::Outline,
        ];
        let classes: std::collections::HashSet<_> =
            variants.iter().map(|v| v.classes()).collect();
        assert_eq!(classes.len(), variants.len());
    }

    #[test]
    fn variant_defaults_to_primary() {
        let cta: Cta = toml::from_str(r#"label = "Pedir""#).unwrap();
        assert_eq!(cta.variant, ButtonVariant::Primary);
        assert!(!cta.large);
    }

    #[test]
    fn unknown_variant_rejected() {
        let result: Result<Cta, _> = toml::from_str(
            r#"
label = "Pedir"
variant = "ghost"
"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn unknown_icon_rejected() {
        let result: Result<Cta, _> = toml::from_str(
            r#"
label = "Pedir"
icon = "rocket"
"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn button_links_out_safely() {
        let html = button(&Cta::new("Pedir"), "https://wa.me/123").into_string();
        assert!(html.contains(r#"href="https://wa.me/123""#));
        assert!(html.contains(r#"target="_blank""#));
        assert!(html.contains(r#"rel="noopener noreferrer""#));
        assert!(html.contains("button button-primary"));
    }

    #[test]
    fn button_renders_icons_around_label() {
        let cta = Cta {
            icon: Some(Icon::Message),
            trailing_icon: Some(Icon::ChevronRight),
            large: true,
            variant: ButtonVariant::Secondary,
            ..Cta::new("Pedir")
        };
        let html = button(&cta, "#").into_string();
        assert_eq!(html.matches("<svg").count(), 2);
        let label = html.find("Pedir").unwrap();
        assert!(html.find("<svg").unwrap() < label);
        assert!(html.rfind("<svg").unwrap() > label);
        assert!(html.contains("button-secondary button-large"));
    }

    #[test]
    fn section_title_without_subtitle() {
        let html = section_title("Como fazer seu pedido", None, true).into_string();
        assert!(html.contains("<h2>Como fazer seu pedido</h2>"));
        assert!(!html.contains("section-subtitle"));
        assert!(html.contains("centered"));
    }

    #[test]
    fn section_title_with_subtitle_left_aligned() {
        let html = section_title("Páscoa", Some("Edição Limitada"), false).into_string();
        assert!(html.contains("Edição Limitada"));
        assert!(html.contains("section-subtitle"));
        assert!(!html.contains("centered"));
    }

    #[test]
    fn icons_render_as_hidden_svg() {
        let html = Icon::Heart.render().into_string();
        assert!(html.starts_with("<svg"));
        assert!(html.contains(r#"aria-hidden="true""#));
        assert!(html.contains("<path"));
    }
}
