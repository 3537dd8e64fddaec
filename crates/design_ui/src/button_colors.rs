//! Per-state color tables for themed buttons.

use std::str::FromStr;

use thiserror::Error;

use crate::focus::{focus_ring, FocusRing};
use crate::theme::{Color, Theme};
use crate::tokens::colors;

/// Gap between a focused button and its focus ring, in pixels.
pub const BUTTON_FOCUS_SEPARATION: f32 = 2.0;

const HOVER_TINT: f32 = 0.08;
const ACTIVE_TINT: f32 = 0.16;
const INVERSE_DISABLED_OPACITY: f32 = 0.4;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Errors raised when a variant is named by a string.
pub enum VariantError {
    /// The name matched no variant.
    #[error("unknown button variant `{0}`")]
    UnknownVariant(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Color scheme family for a button.
pub enum ButtonVariant {
    /// Brand-colored content on a clear background.
    #[default]
    Default,
    /// Light content for placement on dark or brand-colored surfaces.
    Inverse,
}

impl ButtonVariant {
    /// Stable lowercase identifier.
    pub fn token(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Inverse => "inverse",
        }
    }
}

impl FromStr for ButtonVariant {
    type Err = VariantError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim() {
            "default" => Ok(Self::Default),
            "inverse" => Ok(Self::Inverse),
            other => Err(VariantError::UnknownVariant(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Interaction states a button is styled for.
pub enum InteractionState {
    /// Resting state.
    Default,
    /// Pointer over the button.
    Hover,
    /// Button being pressed.
    Active,
    /// Button has keyboard focus.
    Focus,
    /// Button cannot be interacted with.
    Disabled,
}

impl InteractionState {
    /// Every state, resting state first.
    pub const ALL: [Self; 5] = [
        Self::Default,
        Self::Hover,
        Self::Active,
        Self::Focus,
        Self::Disabled,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
/// Colors for one interaction state. `None` inherits the container default.
pub struct StateColors {
    /// Container fill.
    pub background: Option<Color>,
    /// Icon fill.
    pub icon: Option<Color>,
    /// Label text color.
    pub label: Option<Color>,
    /// Focus outline, present for the focus state.
    pub focus_ring: Option<FocusRing>,
}

impl StateColors {
    fn new(background: Color, content: Color) -> Self {
        Self {
            background: Some(background),
            icon: Some(content),
            label: Some(content),
            focus_ring: None,
        }
    }

    fn with_ring(self, ring: FocusRing) -> Self {
        Self {
            focus_ring: Some(ring),
            ..self
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
/// Complete color table for a button, one entry per [`InteractionState`].
pub struct ButtonColors {
    /// Resting colors.
    pub default: StateColors,
    /// Hover colors.
    pub hover: StateColors,
    /// Pressed colors.
    pub active: StateColors,
    /// Keyboard focus colors.
    pub focus: StateColors,
    /// Disabled colors.
    pub disabled: StateColors,
}

impl ButtonColors {
    /// Colors for `state`.
    pub fn get(&self, state: InteractionState) -> &StateColors {
        match state {
            InteractionState::Default => &self.default,
            InteractionState::Hover => &self.hover,
            InteractionState::Active => &self.active,
            InteractionState::Focus => &self.focus,
            InteractionState::Disabled => &self.disabled,
        }
    }
}

/// Builds the color table for `variant` under `theme`.
pub fn resolve_button_colors(variant: ButtonVariant, theme: &Theme) -> ButtonColors {
    let ring = focus_ring(BUTTON_FOCUS_SEPARATION, theme);
    match variant {
        ButtonVariant::Default => {
            let primary = theme.palette.primary;
            ButtonColors {
                default: StateColors::new(Color::TRANSPARENT, primary.main),
                hover: StateColors::new(primary.main.with_alpha(HOVER_TINT), primary.dark),
                active: StateColors::new(primary.main.with_alpha(ACTIVE_TINT), primary.dark),
                focus: StateColors::new(Color::TRANSPARENT, primary.main).with_ring(ring),
                disabled: StateColors::new(Color::TRANSPARENT, primary.light),
            }
        }
        ButtonVariant::Inverse => ButtonColors {
            default: StateColors::new(Color::TRANSPARENT, colors::WHITE),
            hover: StateColors::new(colors::GRAY_100, colors::GRAY_900),
            active: StateColors::new(colors::GRAY_200, colors::GRAY_900),
            focus: StateColors::new(colors::GRAY_100, colors::GRAY_900).with_ring(ring),
            disabled: StateColors::new(
                Color::TRANSPARENT,
                colors::WHITE.with_alpha(INVERSE_DISABLED_OPACITY),
            ),
        },
    }
}
