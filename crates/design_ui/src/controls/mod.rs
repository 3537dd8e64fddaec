//! Themed form controls.

mod radio;
mod tertiary_button;

pub use radio::{
    disc_colors, inner_dot_style, label_style, radio_stylesheet, DiscColors, Radio,
    RadioIdentity, RADIO_BORDER_WIDTH, RADIO_DOT_SIZE, RADIO_FOCUS_SEPARATION, RADIO_RIPPLE_SIZE,
    RADIO_SIZE,
};
pub use tertiary_button::{
    label_type, slot_order, tertiary_button_styles, tertiary_button_stylesheet, ButtonSize,
    ButtonSlot, IconPosition, TertiaryButton, TertiaryButtonStyles, TypeTier,
};

pub(crate) fn scoped_class(scope: &str, layout_class: Option<&'static str>) -> String {
    match layout_class {
        Some(layout_class) if !layout_class.is_empty() => format!("{scope} {layout_class}"),
        _ => scope.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn scoped_class_appends_non_empty_layout_class() {
        assert_eq!(scoped_class("ds-1", None), "ds-1");
        assert_eq!(scoped_class("ds-1", Some("")), "ds-1");
        assert_eq!(scoped_class("ds-1", Some("toolbar-action")), "ds-1 toolbar-action");
    }
}
