//! Theme palette, color values, and JSON theme documents.
//!
//! A [`Theme`] is owned by the surrounding application and handed to the
//! component tree through [`crate::ThemeProvider`]. Components only ever read
//! it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
/// Errors raised while building a [`Theme`] from external input.
pub enum ThemeError {
    /// A color string was not `#RGB`, `#RRGGBB`, `#RRGGBBAA`, or `transparent`.
    #[error("invalid color `{0}`")]
    InvalidColor(String),
    /// A theme document failed to deserialize.
    #[error("invalid theme document: {0}")]
    Document(#[from] serde_json::Error),
    /// A preset name did not match any built-in theme.
    #[error("unknown theme preset `{0}`")]
    UnknownPreset(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
/// An sRGB color with 8-bit alpha.
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel; 255 is opaque.
    pub a: u8,
}

impl Color {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);

    /// Opaque color from channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Color from channels including alpha.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Same hue with alpha replaced by `opacity` (clamped to `0.0..=1.0`).
    pub fn with_alpha(self, opacity: f32) -> Self {
        let a = (opacity.clamp(0.0, 1.0) * 255.0).round() as u8;
        Self { a, ..self }
    }

    /// Whether the color paints nothing.
    pub fn is_transparent(self) -> bool {
        self.a == 0
    }

    /// CSS color text: `#rrggbb` when opaque, `transparent` when fully clear,
    /// `rgba(...)` otherwise.
    pub fn to_css(self) -> String {
        if self.is_transparent() {
            return "transparent".to_string();
        }
        match self.a {
            255 => format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b),
            a => {
                let alpha = format!("{:.3}", f32::from(a) / 255.0);
                let alpha = alpha.trim_end_matches('0').trim_end_matches('.');
                format!("rgba({}, {}, {}, {alpha})", self.r, self.g, self.b)
            }
        }
    }

    fn to_hex(self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

impl FromStr for Color {
    type Err = ThemeError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        if trimmed.eq_ignore_ascii_case("transparent") {
            return Ok(Self::TRANSPARENT);
        }
        let invalid = || ThemeError::InvalidColor(raw.to_string());
        let digits = trimmed.strip_prefix('#').ok_or_else(invalid)?;
        if !digits.chars().all(|ch| ch.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let channel = |start: usize, len: usize| -> Result<u8, ThemeError> {
            let slice = &digits[start..start + len];
            let value = u8::from_str_radix(slice, 16).map_err(|_| invalid())?;
            Ok(if len == 1 { value * 17 } else { value })
        };
        match digits.len() {
            3 => Ok(Self::rgb(channel(0, 1)?, channel(1, 1)?, channel(2, 1)?)),
            6 => Ok(Self::rgb(channel(0, 2)?, channel(2, 2)?, channel(4, 2)?)),
            8 => Ok(Self::rgba(
                channel(0, 2)?,
                channel(2, 2)?,
                channel(4, 2)?,
                channel(6, 2)?,
            )),
            _ => Err(invalid()),
        }
    }
}

impl TryFrom<String> for Color {
    type Error = ThemeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// One color family: a main tone plus darker and lighter companions.
pub struct PaletteColor {
    /// Resting tone.
    pub main: Color,
    /// Emphasis tone used for hover and pressed states.
    pub dark: Color,
    /// Subdued tone used for disabled content.
    pub light: Color,
}

impl Default for PaletteColor {
    fn default() -> Self {
        ThemePreset::Ocean.theme().palette.primary
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
/// Application palette.
pub struct Palette {
    /// Brand color family.
    pub primary: PaletteColor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
/// Tokens shared by every palette.
pub struct CommonColors {
    /// Keyboard focus outline color.
    pub focus_outline: Color,
}

impl Default for CommonColors {
    fn default() -> Self {
        ThemePreset::Ocean.theme().common_colors
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
/// Theme consumed by every component.
pub struct Theme {
    /// Palette color families.
    pub palette: Palette,
    /// Shared tokens such as the focus outline.
    pub common_colors: CommonColors,
}

impl Theme {
    /// Parses a JSON theme document. Missing sections and fields fall back to
    /// the stock theme.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Document`] for malformed JSON or color strings.
    pub fn from_json(raw: &str) -> Result<Self, ThemeError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Serializes the theme to a JSON document readable by [`Theme::from_json`].
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Document`] if serialization fails.
    pub fn to_json(&self) -> Result<String, ThemeError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Built-in themes.
pub enum ThemePreset {
    /// Blue brand palette; the stock theme.
    #[default]
    Ocean,
    /// Orange brand palette.
    Ember,
    /// Green brand palette.
    Forest,
}

impl ThemePreset {
    /// Every preset, in display order.
    pub const ALL: [Self; 3] = [Self::Ocean, Self::Ember, Self::Forest];

    /// Stable lowercase identifier.
    pub fn token(self) -> &'static str {
        match self {
            Self::Ocean => "ocean",
            Self::Ember => "ember",
            Self::Forest => "forest",
        }
    }

    /// Builds the preset theme.
    pub fn theme(self) -> Theme {
        let primary = match self {
            Self::Ocean => PaletteColor {
                main: Color::rgb(0x1f, 0x6f, 0xeb),
                dark: Color::rgb(0x0b, 0x4f, 0xc4),
                light: Color::rgb(0x9e, 0xc2, 0xff),
            },
            Self::Ember => PaletteColor {
                main: Color::rgb(0xe8, 0x59, 0x0c),
                dark: Color::rgb(0xb8, 0x42, 0x0a),
                light: Color::rgb(0xff, 0xc9, 0xa8),
            },
            Self::Forest => PaletteColor {
                main: Color::rgb(0x2b, 0x8a, 0x3e),
                dark: Color::rgb(0x1b, 0x5e, 0x2a),
                light: Color::rgb(0xa9, 0xe3, 0xb4),
            },
        };
        Theme {
            palette: Palette { primary },
            common_colors: CommonColors {
                focus_outline: Color::rgb(0x3d, 0x8b, 0xfd),
            },
        }
    }
}

impl FromStr for ThemePreset {
    type Err = ThemeError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|preset| preset.token().eq_ignore_ascii_case(raw.trim()))
            .ok_or_else(|| ThemeError::UnknownPreset(raw.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parses_short_long_and_alpha_hex_colors() {
        assert_eq!("#fff".parse::<Color>().unwrap(), Color::rgb(255, 255, 255));
        assert_eq!(
            "#1F6FEB".parse::<Color>().unwrap(),
            Color::rgb(0x1f, 0x6f, 0xeb)
        );
        assert_eq!(
            "#1f6feb80".parse::<Color>().unwrap(),
            Color::rgba(0x1f, 0x6f, 0xeb, 0x80)
        );
        assert_eq!("transparent".parse::<Color>().unwrap(), Color::TRANSPARENT);
    }

    #[test]
    fn rejects_malformed_colors() {
        for raw in ["", "fff", "#ff", "#ggg", "#12345", "#1234567890", "#éé"] {
            assert!(
                matches!(raw.parse::<Color>(), Err(ThemeError::InvalidColor(_))),
                "{raw} should be rejected"
            );
        }
    }

    #[test]
    fn css_output_depends_on_alpha() {
        let blue = Color::rgb(0x1f, 0x6f, 0xeb);
        assert_eq!(blue.to_css(), "#1f6feb");
        assert_eq!(blue.with_alpha(0.0).to_css(), "transparent");
        assert_eq!(blue.with_alpha(0.5).to_css(), "rgba(31, 111, 235, 0.502)");
        assert_eq!(Color::rgba(0, 0, 0, 51).to_css(), "rgba(0, 0, 0, 0.2)");
    }

    #[test]
    fn theme_json_fills_missing_sections_from_defaults() {
        let theme = Theme::from_json(
            r##"{ "palette": { "primary": { "main": "#e8590c", "dark": "#b8420a", "light": "#ffc9a8" } } }"##,
        )
        .expect("theme");

        assert_eq!(theme.palette, ThemePreset::Ember.theme().palette);
        assert_eq!(theme.common_colors, CommonColors::default());
    }

    #[test]
    fn theme_json_fills_partial_sections_from_defaults() {
        let stock = Theme::default();
        assert_eq!(Theme::from_json(r#"{ "commonColors": {} }"#).expect("theme"), stock);
        assert_eq!(Theme::from_json(r#"{ "palette": {} }"#).expect("theme"), stock);
        assert_eq!(Theme::from_json("{}").expect("theme"), stock);

        let theme = Theme::from_json(r##"{ "palette": { "primary": { "main": "#e8590c" } } }"##)
            .expect("theme");
        assert_eq!(theme.palette.primary.main, Color::rgb(0xe8, 0x59, 0x0c));
        assert_eq!(theme.palette.primary.dark, stock.palette.primary.dark);
        assert_eq!(theme.palette.primary.light, stock.palette.primary.light);
    }

    #[test]
    fn transparency_tracks_alpha() {
        assert!(Color::TRANSPARENT.is_transparent());
        assert!(Color::rgba(255, 255, 255, 0).is_transparent());
        assert!(!Color::rgb(0, 0, 0).is_transparent());
    }

    #[test]
    fn theme_json_round_trips_through_hex_strings() {
        let theme = ThemePreset::Forest.theme();
        let json = theme.to_json().expect("serialize");
        assert!(json.contains("\"focusOutline\": \"#3d8bfd\""));
        assert_eq!(Theme::from_json(&json).expect("parse"), theme);
    }

    #[test]
    fn theme_json_rejects_bad_colors() {
        let err = Theme::from_json(r#"{ "commonColors": { "focusOutline": "blue" } }"#)
            .expect_err("named colors are not supported");
        assert!(matches!(err, ThemeError::Document(_)));
    }

    #[test]
    fn presets_parse_case_insensitively_and_fail_closed() {
        assert_eq!("Ember".parse::<ThemePreset>().unwrap(), ThemePreset::Ember);
        assert!(matches!(
            "midnight".parse::<ThemePreset>(),
            Err(ThemeError::UnknownPreset(name)) if name == "midnight"
        ));
    }
}
