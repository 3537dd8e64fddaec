//! Static design tokens shared by every component in the library.
//!
//! Tokens are plain constants. Components read them directly; only palette
//! colors that vary per application live on [`crate::Theme`].

use crate::theme::Color;

/// Neutral color ramp.
#[allow(missing_docs)]
pub mod colors {
    use super::Color;

    /// Pure white.
    pub const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);
    /// Lightest neutral surface tint.
    pub const GRAY_100: Color = Color::rgb(0xf4, 0xf5, 0xf7);
    /// Light neutral used for disabled fills.
    pub const GRAY_200: Color = Color::rgb(0xe6, 0xe8, 0xeb);
    /// Neutral border for disabled controls.
    pub const GRAY_300: Color = Color::rgb(0xc9, 0xcd, 0xd3);
    /// Muted text on light surfaces.
    pub const GRAY_400: Color = Color::rgb(0xa0, 0xa6, 0xaf);
    /// Resting control border.
    pub const GRAY_500: Color = Color::rgb(0x75, 0x7c, 0x87);
    pub const GRAY_700: Color = Color::rgb(0x44, 0x4a, 0x54);
    /// Default body text.
    pub const GRAY_900: Color = Color::rgb(0x1d, 0x21, 0x27);
    pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);
}

/// Spacing scale on a 4px grid.
#[allow(missing_docs)]
pub mod spacing {
    pub const XXS: u16 = 2;
    pub const XS: u16 = 4;
    pub const SM: u16 = 8;
    pub const MD: u16 = 12;
    pub const LG: u16 = 16;
    pub const XL: u16 = 24;
}

/// Corner radii in pixels.
#[allow(missing_docs)]
pub mod radii {
    pub const SM: u16 = 4;
    pub const MD: u16 = 8;
    /// Fully rounded; large enough for any control height in the library.
    pub const ROUND: u16 = 999;
}

/// Type scale in pixels.
#[allow(missing_docs)]
pub mod typography {
    pub const FONT_FAMILY: &str = "\"Inter\", \"Helvetica Neue\", Arial, sans-serif";
    pub const CAPTION: u16 = 12;
    pub const BODY_SMALL: u16 = 14;
    pub const BODY: u16 = 16;
    pub const LINE_HEIGHT: f32 = 1.5;

    pub const WEIGHT_REGULAR: u16 = 400;
    pub const WEIGHT_MEDIUM: u16 = 500;
    pub const WEIGHT_BOLD: u16 = 700;

    /// Tracking for mixed-case labels.
    pub const TRACKING_NORMAL: &str = "0.01em";
    /// Tracking for all-caps labels.
    pub const TRACKING_WIDE: &str = "0.08em";
}

/// Motion durations in milliseconds.
#[allow(missing_docs)]
pub mod motion {
    pub const FAST: u16 = 120;
    pub const STANDARD: u16 = 200;
    pub const EASING: &str = "cubic-bezier(0.4, 0, 0.2, 1)";
}

/// Renders a pixel length.
pub fn px(value: impl std::fmt::Display) -> String {
    format!("{value}px")
}

/// Renders a transition list for the given properties with the standard easing.
pub fn transition(properties: &[&str], duration_ms: u16) -> String {
    properties
        .iter()
        .map(|property| format!("{property} {duration_ms}ms {}", motion::EASING))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn transition_joins_each_property_with_shared_timing() {
        assert_eq!(
            transition(&["opacity", "transform"], motion::FAST),
            "opacity 120ms cubic-bezier(0.4, 0, 0.2, 1), transform 120ms cubic-bezier(0.4, 0, 0.2, 1)"
        );
    }

    #[test]
    fn spacing_scale_stays_on_grid() {
        for value in [spacing::XS, spacing::SM, spacing::MD, spacing::LG, spacing::XL] {
            assert_eq!(value % 4, 0);
        }
    }
}
