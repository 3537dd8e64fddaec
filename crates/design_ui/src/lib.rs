//! Themed presentational components for the design system.
//!
//! The crate owns the token tables, the [`Theme`] contract, the per-state
//! color resolver, and the Leptos components built on them. Interaction
//! visuals (hover, focus, pressed, checked, disabled) are expressed as scoped
//! pseudo-class rules generated per component instance, so rendering stays a
//! pure function of props and theme.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod button_colors;
mod context;
mod controls;
mod focus;
mod icon;
mod ids;
mod layout;
pub mod style;
mod theme;
pub mod tokens;

pub use button_colors::{
    resolve_button_colors, ButtonColors, ButtonVariant, InteractionState, StateColors,
    VariantError, BUTTON_FOCUS_SEPARATION,
};
pub use context::{use_theme, ThemeProvider};
pub use controls::{
    disc_colors, inner_dot_style, label_style, label_type, radio_stylesheet, slot_order,
    tertiary_button_styles, tertiary_button_stylesheet, ButtonSize, ButtonSlot, DiscColors,
    IconPosition, Radio, RadioIdentity, TertiaryButton, TertiaryButtonStyles, TypeTier,
    RADIO_BORDER_WIDTH, RADIO_DOT_SIZE, RADIO_FOCUS_SEPARATION, RADIO_RIPPLE_SIZE, RADIO_SIZE,
};
pub use focus::{focus_ring, FocusRing, FOCUS_RING_WIDTH};
pub use icon::{Icon, IconName, IconSize};
pub use ids::next_instance_id;
pub use layout::{Cluster, LayoutGap, Stack};
pub use theme::{Color, CommonColors, Palette, PaletteColor, Theme, ThemeError, ThemePreset};

/// Convenience imports for application crates consuming the component set.
pub mod prelude {
    pub use crate::{
        ButtonSize, ButtonVariant, Cluster, Color, Icon, IconName, IconPosition, IconSize,
        LayoutGap, Radio, Stack, TertiaryButton, Theme, ThemePreset, ThemeProvider,
    };
}
