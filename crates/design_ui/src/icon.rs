//! Inline SVG icon catalog.
//!
//! Glyphs come from the Fluent UI System Icons regular 24px set and are rendered
//! with `fill="currentColor"` so the surrounding control decides their color.

use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Icon identifiers available to library components.
pub enum IconName {
    /// Forward arrow; mirror it for "back".
    ArrowRight,
    /// Plus sign.
    Add,
    /// Dismiss / close cross.
    Dismiss,
    /// Checkmark.
    Checkmark,
    /// Expand chevron.
    ChevronDown,
    /// Opens in a new window.
    Open,
}

impl IconName {
    /// Stable token used for debugging and test hooks.
    pub const fn token(self) -> &'static str {
        match self {
            Self::ArrowRight => "arrow-right",
            Self::Add => "add",
            Self::Dismiss => "dismiss",
            Self::Checkmark => "checkmark",
            Self::ChevronDown => "chevron-down",
            Self::Open => "open",
        }
    }

    fn svg_body(self) -> &'static str {
        match self {
            Self::ArrowRight => {
                r#"<path d="M13.27 4.2a.75.75 0 0 1 1.06.04l7 7.5c.27.29.27.73 0 1.02l-7 7.5a.75.75 0 1 1-1.1-1.02l5.83-6.24H3.75a.75.75 0 0 1 0-1.5h15.31l-5.83-6.24a.75.75 0 0 1 .04-1.06Z"/>"#
            }
            Self::Add => {
                r#"<path d="M12 4.5a.75.75 0 0 1 .75.75v6h6a.75.75 0 0 1 0 1.5h-6v6a.75.75 0 0 1-1.5 0v-6h-6a.75.75 0 0 1 0-1.5h6v-6A.75.75 0 0 1 12 4.5Z"/>"#
            }
            Self::Dismiss => {
                r#"<path d="m4.4 4.55.07-.08a.75.75 0 0 1 .98-.07l.08.07L12 10.94l6.47-6.47a.75.75 0 1 1 1.06 1.06L13.06 12l6.47 6.47c.27.27.3.68.07.98l-.07.08a.75.75 0 0 1-.98.07l-.08-.07L12 13.06l-6.47 6.47a.75.75 0 0 1-1.06-1.06L10.94 12 4.47 5.53a.75.75 0 0 1-.07-.98l.07-.08-.07.08Z"/>"#
            }
            Self::Checkmark => {
                r#"<path d="M4.53 12.97a.75.75 0 0 0-1.06 1.06l4.5 4.5c.3.3.77.3 1.06 0l11-11a.75.75 0 0 0-1.06-1.06L8.5 16.94l-3.97-3.97Z"/>"#
            }
            Self::ChevronDown => {
                r#"<path d="M4.22 8.47c.3-.3.77-.3 1.06 0L12 15.19l6.72-6.72a.75.75 0 1 1 1.06 1.06l-7.25 7.25c-.3.3-.77.3-1.06 0L4.22 9.53a.75.75 0 0 1 0-1.06Z"/>"#
            }
            Self::Open => {
                r#"<path d="M6.25 4.5c-.97 0-1.75.78-1.75 1.75v11.5c0 .97.78 1.75 1.75 1.75h11.5c.97 0 1.75-.78 1.75-1.75v-4a.75.75 0 0 1 1.5 0v4c0 1.8-1.46 3.25-3.25 3.25H6.25A3.25 3.25 0 0 1 3 17.75V6.25C3 4.45 4.46 3 6.25 3h4a.75.75 0 0 1 0 1.5h-4Zm7-.75c0-.41.34-.75.75-.75h6.25c.41 0 .75.34.75.75V10a.75.75 0 0 1-1.5 0V5.56l-5.22 5.22a.75.75 0 0 1-1.06-1.06l5.22-5.22H14a.75.75 0 0 1-.75-.75Z"/>"#
            }
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
/// Icon sizes.
pub enum IconSize {
    /// 16px, paired with small controls.
    Sm,
    /// 20px, paired with medium controls.
    #[default]
    Md,
    /// 24px.
    Lg,
}

impl IconSize {
    /// Pixel size for the icon.
    pub const fn px(self) -> u16 {
        match self {
            Self::Sm => 16,
            Self::Md => 20,
            Self::Lg => 24,
        }
    }
}

/// Inline style applied to an icon; mirrored icons are flipped horizontally.
pub(crate) fn icon_style(mirrored: bool) -> &'static str {
    if mirrored {
        "display: block; transform: scaleX(-1);"
    } else {
        "display: block;"
    }
}

#[component]
/// Renders a decorative icon from the catalog.
pub fn Icon(
    /// Glyph to draw.
    icon: IconName,
    /// Rendered size.
    #[prop(default = IconSize::Md)]
    size: IconSize,
    /// Flip horizontally, for right-to-left layouts or reversed arrows.
    #[prop(optional)]
    mirrored: bool,
) -> impl IntoView {
    let size_px = size.px().to_string();

    view! {
        <svg
            data-icon=icon.token()
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            width=size_px.clone()
            height=size_px
            fill="currentColor"
            focusable="false"
            aria-hidden="true"
            style=icon_style(mirrored)
            inner_html=icon.svg_body()
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mirrored_icons_flip_horizontally() {
        assert!(icon_style(true).contains("scaleX(-1)"));
        assert!(!icon_style(false).contains("transform"));
    }

    #[test]
    fn sizes_grow_monotonically() {
        assert!(IconSize::Sm.px() < IconSize::Md.px());
        assert!(IconSize::Md.px() < IconSize::Lg.px());
    }
}
