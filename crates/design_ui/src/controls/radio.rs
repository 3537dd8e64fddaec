use leptos::*;

use super::scoped_class;
use crate::context::use_theme;
use crate::focus::focus_ring;
use crate::ids::next_instance_id;
use crate::style::{PseudoState, Selector, StyleRecord, StyleSheet};
use crate::theme::{Color, Theme};
use crate::tokens::{colors, motion, px, spacing, transition, typography};

/// Outer diameter of the radio control, in pixels.
pub const RADIO_SIZE: u16 = 20;
/// Diameter of the checked dot, in pixels.
pub const RADIO_DOT_SIZE: u16 = 10;
/// Ring stroke width, in pixels.
pub const RADIO_BORDER_WIDTH: u16 = 2;
/// Diameter of the hover halo, in pixels.
pub const RADIO_RIPPLE_SIZE: u16 = 40;
/// Gap between the disc and its focus ring, in pixels.
pub const RADIO_FOCUS_SEPARATION: f32 = 2.0;

const RIPPLE_OPACITY: f32 = 0.12;

const INPUT_PART: &str = "input";
const RIPPLE_PART: &str = "ripple";
const DISC_PART: &str = "disc";
const DOT_PART: &str = "dot";
const CONTROL_PART: &str = "control";
const LABEL_PART: &str = "label";

#[derive(Debug, Clone, PartialEq, Eq)]
/// Identifier binding a radio input to its visible label.
///
/// Created once per component instance and never regenerated.
pub struct RadioIdentity {
    id: String,
}

impl RadioIdentity {
    /// Uses `explicit` when it is non-empty, otherwise generates a fresh id.
    pub fn new(explicit: Option<String>) -> Self {
        let id = explicit
            .filter(|id| !id.trim().is_empty())
            .unwrap_or_else(|| next_instance_id("ds-radio"));
        Self { id }
    }

    /// The input's `id`.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Value for the label's `for` attribute; `None` when there is no label to render.
    pub fn label_target(&self, label: &str) -> Option<&str> {
        (!label.is_empty()).then_some(self.id.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Colors of the disc and dot for one checked/disabled combination.
pub struct DiscColors {
    /// Ring color.
    pub border: Color,
    /// Disc fill.
    pub fill: Color,
    /// Checked dot fill.
    pub dot: Color,
}

/// Disc colors for the given state. Disabled colors take precedence over checked ones.
pub fn disc_colors(checked: bool, disabled: bool, theme: &Theme) -> DiscColors {
    let primary = theme.palette.primary;
    match (checked, disabled) {
        (_, true) => DiscColors {
            border: colors::GRAY_300,
            fill: colors::GRAY_100,
            dot: colors::GRAY_300,
        },
        (true, false) => DiscColors {
            border: primary.main,
            fill: colors::WHITE,
            dot: primary.main,
        },
        (false, false) => DiscColors {
            border: colors::GRAY_500,
            fill: colors::WHITE,
            dot: primary.main,
        },
    }
}

/// Opacity and scale of the dot. Both animate between states.
pub fn inner_dot_style(checked: bool) -> StyleRecord {
    if checked {
        StyleRecord::new()
            .set("opacity", "1")
            .set("transform", "scale(1)")
    } else {
        StyleRecord::new()
            .set("opacity", "0")
            .set("transform", "scale(0.5)")
    }
}

/// Inline label style; disabled labels are muted and lose the pointer cursor.
pub fn label_style(disabled: bool) -> String {
    let (color, cursor) = if disabled {
        (colors::GRAY_400, "default")
    } else {
        (colors::GRAY_900, "pointer")
    };
    StyleRecord::new()
        .set("color", color.to_css())
        .set("cursor", cursor)
        .set("user-select", "none")
        .to_inline()
}

fn disc_record(colors: DiscColors) -> StyleRecord {
    StyleRecord::new()
        .set("border-color", colors.border.to_css())
        .set("background-color", colors.fill.to_css())
}

fn centered(size: u16) -> StyleRecord {
    let offset = (i32::from(RADIO_SIZE) - i32::from(size)) / 2;
    StyleRecord::new()
        .set("position", "absolute")
        .set("top", px(offset))
        .set("left", px(offset))
        .set("width", px(size))
        .set("height", px(size))
        .set("border-radius", "50%")
        .set("box-sizing", "border-box")
}

/// Scoped stylesheet for one radio instance.
///
/// The native input sits invisibly on top of the decorative layers; its
/// `:checked`, `:disabled`, `:hover`, and `:focus-visible` states drive the
/// disc, dot, and ripple through sibling selectors.
pub fn radio_stylesheet(scope: &str, theme: &Theme) -> StyleSheet {
    let resting = disc_colors(false, false, theme);
    let checked = disc_colors(true, false, theme);
    let disabled = disc_colors(false, true, theme);
    let ripple_color = theme.palette.primary.main.with_alpha(RIPPLE_OPACITY);

    StyleSheet::new(scope)
        .rule(
            Selector::root(),
            StyleRecord::new()
                .set("display", "inline-flex")
                .set("align-items", "center")
                .set("gap", px(spacing::SM))
                .set("font-family", typography::FONT_FAMILY)
                .set("font-size", px(typography::BODY_SMALL))
                .set("line-height", typography::LINE_HEIGHT.to_string()),
        )
        .rule(
            Selector::part(CONTROL_PART),
            StyleRecord::new()
                .set("position", "relative")
                .set("display", "inline-block")
                .set("flex-shrink", "0")
                .set("width", px(RADIO_SIZE))
                .set("height", px(RADIO_SIZE)),
        )
        .rule(
            Selector::part(INPUT_PART),
            StyleRecord::new()
                .set("position", "absolute")
                .set("inset", "0")
                .set("width", "100%")
                .set("height", "100%")
                .set("margin", "0")
                .set("opacity", "0")
                .set("cursor", "pointer")
                .set("z-index", "1"),
        )
        .rule(
            Selector::part(RIPPLE_PART),
            centered(RADIO_RIPPLE_SIZE)
                .set("background-color", ripple_color.to_css())
                .set("opacity", "0")
                .set("pointer-events", "none")
                .set("transition", transition(&["opacity"], motion::STANDARD)),
        )
        .rule(
            Selector::part(DISC_PART),
            centered(RADIO_SIZE)
                .set(
                    "border",
                    format!("{} solid {}", px(RADIO_BORDER_WIDTH), resting.border),
                )
                .merge(&disc_record(resting))
                .set(
                    "transition",
                    transition(&["border-color", "background-color"], motion::FAST),
                ),
        )
        .rule(
            Selector::part(DOT_PART),
            centered(RADIO_DOT_SIZE)
                .set("background-color", resting.dot.to_css())
                .merge(&inner_dot_style(false))
                .set(
                    "transition",
                    transition(&["opacity", "transform"], motion::FAST),
                ),
        )
        .rule(
            Selector::part(INPUT_PART)
                .on(PseudoState::Hover)
                .unless(PseudoState::Disabled)
                .sibling(RIPPLE_PART),
            StyleRecord::new().set("opacity", "1"),
        )
        .rule(
            Selector::part(INPUT_PART)
                .on(PseudoState::FocusVisible)
                .unless(PseudoState::Disabled)
                .sibling(DISC_PART),
            focus_ring(RADIO_FOCUS_SEPARATION, theme).declarations(),
        )
        .rule(
            Selector::part(INPUT_PART)
                .on(PseudoState::Checked)
                .sibling(DISC_PART),
            disc_record(checked),
        )
        .rule(
            Selector::part(INPUT_PART)
                .on(PseudoState::Checked)
                .sibling(DOT_PART),
            inner_dot_style(true),
        )
        .rule(
            Selector::part(INPUT_PART).on(PseudoState::Disabled),
            StyleRecord::new().set("cursor", "not-allowed"),
        )
        .rule(
            Selector::part(INPUT_PART)
                .on(PseudoState::Disabled)
                .sibling(DISC_PART),
            disc_record(disabled),
        )
        .rule(
            Selector::part(INPUT_PART)
                .on(PseudoState::Disabled)
                .sibling(DOT_PART),
            StyleRecord::new().set("background-color", disabled.dot.to_css()),
        )
}

#[component]
/// Radio button with an optional visible label.
///
/// `checked` and `disabled` are owned by the caller; `on_change` receives the
/// native change event untouched.
pub fn Radio(
    #[prop(optional, into)] checked: MaybeSignal<bool>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    /// Input id; generated once per instance when omitted.
    #[prop(optional, into)]
    id: Option<String>,
    #[prop(optional)] input_ref: NodeRef<html::Input>,
    /// Visible label text; no label element is rendered when empty.
    #[prop(optional, into)]
    label: String,
    #[prop(optional, into)] name: Option<String>,
    #[prop(optional, into)] value: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] on_change: Option<Callback<web_sys::Event>>,
    /// Additional attributes (`aria-*`, `data-*`) forwarded to the input.
    #[prop(attrs)]
    attrs: Vec<(&'static str, Attribute)>,
) -> impl IntoView {
    let identity = RadioIdentity::new(id);
    let theme = use_theme();
    let sheet = radio_stylesheet(&next_instance_id("ds-radio-scope"), &theme);
    let class = scoped_class(sheet.scope(), layout_class);
    let css = sheet.to_css();

    let label_view = identity.label_target(&label).map(|target| {
        let target = target.to_string();
        view! {
            <label
                for=target
                data-ds-part=LABEL_PART
                style=move || label_style(disabled.get())
            >
                {label.clone()}
            </label>
        }
    });

    view! {
        <style>{css}</style>
        <span class=class>
            <span data-ds-part=CONTROL_PART>
                <input
                    type="radio"
                    id=identity.id().to_string()
                    name=name
                    value=value
                    aria-label=aria_label
                    node_ref=input_ref
                    data-ds-part=INPUT_PART
                    prop:checked=move || checked.get()
                    disabled=move || disabled.get()
                    {..attrs}
                    on:change=move |ev| {
                        if let Some(on_change) = on_change.as_ref() {
                            on_change.call(ev);
                        }
                    }
                />
                <span data-ds-part=RIPPLE_PART aria-hidden="true"></span>
                <span data-ds-part=DISC_PART aria-hidden="true"></span>
                <span data-ds-part=DOT_PART aria-hidden="true"></span>
            </span>
            {label_view}
        </span>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn generated_identity_is_stable_for_the_instance() {
        let identity = RadioIdentity::new(None);
        let first = identity.id().to_string();

        for _ in 0..3 {
            assert_eq!(identity.id(), first);
        }
        assert!(first.starts_with("ds-radio-"));
        assert_ne!(RadioIdentity::new(None).id(), first);
    }

    #[test]
    fn explicit_id_wins_unless_blank() {
        assert_eq!(RadioIdentity::new(Some("plan-basic".into())).id(), "plan-basic");
        assert!(RadioIdentity::new(Some("  ".into())).id().starts_with("ds-radio-"));
    }

    #[test]
    fn label_targets_the_input_id() {
        let identity = RadioIdentity::new(Some("plan-pro".into()));
        assert_eq!(identity.label_target("Pro plan"), Some("plan-pro"));
        assert_eq!(identity.label_target(""), None);
    }

    #[test]
    fn dot_projection_matches_checked_state() {
        let on = inner_dot_style(true);
        assert_eq!(on.get("opacity"), Some("1"));
        assert_eq!(on.get("transform"), Some("scale(1)"));

        let off = inner_dot_style(false);
        assert_eq!(off.get("opacity"), Some("0"));
        assert_eq!(off.get("transform"), Some("scale(0.5)"));
    }

    #[test]
    fn disabled_colors_win_over_checked_colors() {
        let theme = Theme::default();
        let disabled = disc_colors(false, true, &theme);

        assert_eq!(disc_colors(true, true, &theme), disabled);
        assert_ne!(disc_colors(true, false, &theme), disabled);
        assert_eq!(disc_colors(true, false, &theme).border, theme.palette.primary.main);
    }

    #[test]
    fn stylesheet_projects_states_through_sibling_rules() {
        let theme = Theme::default();
        let sheet = radio_stylesheet("ds-radio-scope-1", &theme);

        let checked_dot = sheet
            .find(&Selector::part(INPUT_PART).on(PseudoState::Checked).sibling(DOT_PART))
            .expect("checked dot rule");
        assert_eq!(checked_dot, &inner_dot_style(true));

        let resting_dot = sheet.find(&Selector::part(DOT_PART)).expect("dot rule");
        assert_eq!(resting_dot.get("opacity"), Some("0"));
        assert_eq!(resting_dot.get("transform"), Some("scale(0.5)"));
        assert!(resting_dot.get("transition").is_some());
    }

    #[test]
    fn interaction_rules_skip_disabled_inputs_and_disabled_rules_come_last() {
        let sheet = radio_stylesheet("ds-radio-scope-2", &Theme::default());
        let css = sheet.to_css();

        let hover = css
            .lines()
            .find(|line| line.contains(":hover"))
            .expect("hover rule");
        let focus = css
            .lines()
            .find(|line| line.contains(":focus-visible"))
            .expect("focus rule");
        assert!(hover.contains(":hover:not(:disabled)"));
        assert!(focus.contains(":focus-visible:not(:disabled)"));

        let checked_disc = css.find(":checked ~ [data-ds-part=\"disc\"]").expect("checked");
        let disabled_disc = css.find(":disabled ~ [data-ds-part=\"disc\"]").expect("disabled");
        assert!(disabled_disc > checked_disc);
    }

    #[test]
    fn layer_geometry_is_centered_on_the_control() {
        let sheet = radio_stylesheet("ds-radio-scope-3", &Theme::default());
        let ripple = sheet.find(&Selector::part(RIPPLE_PART)).expect("ripple");
        let dot = sheet.find(&Selector::part(DOT_PART)).expect("dot");

        assert_eq!(ripple.get("top"), Some("-10px"));
        assert_eq!(ripple.get("width"), Some("40px"));
        assert_eq!(dot.get("left"), Some("5px"));
    }

    #[test]
    fn disabled_labels_are_muted() {
        assert!(label_style(true).contains("cursor: default;"));
        assert!(label_style(false).contains("cursor: pointer;"));
    }
}
