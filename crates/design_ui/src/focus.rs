//! Keyboard focus ring descriptor.

use crate::style::StyleRecord;
use crate::theme::{Color, Theme};
use crate::tokens::px;

/// Stroke width of every focus ring, in pixels.
pub const FOCUS_RING_WIDTH: u16 = 2;

#[derive(Debug, Clone, Copy, PartialEq)]
/// Outline drawn around a control with keyboard focus.
pub struct FocusRing {
    /// Outline color.
    pub color: Color,
    /// Stroke width in pixels.
    pub width: u16,
    /// Gap between the control edge and the ring, in pixels.
    pub separation: f32,
    /// Draw the ring inside the control edge instead of outside it.
    pub inset: bool,
}

impl FocusRing {
    /// Offset passed to `outline-offset`; negative when inset.
    pub fn offset(&self) -> f32 {
        if self.inset {
            -(self.separation + f32::from(self.width))
        } else {
            self.separation
        }
    }

    /// Outline declarations for this ring.
    pub fn declarations(&self) -> StyleRecord {
        StyleRecord::new()
            .set("outline", format!("{} solid {}", px(self.width), self.color))
            .set("outline-offset", px(self.offset()))
    }
}

/// Focus ring drawn `separation` pixels outside the control edge in the theme's
/// focus color. Negative separations draw the ring inset by that distance.
pub fn focus_ring(separation: f32, theme: &Theme) -> FocusRing {
    FocusRing {
        color: theme.common_colors.focus_outline,
        width: FOCUS_RING_WIDTH,
        separation: separation.abs(),
        inset: separation < 0.0,
    }
}
