use leptos::ev::{FocusEvent, KeyboardEvent, MouseEvent};
use leptos::*;

use super::scoped_class;
use crate::button_colors::{resolve_button_colors, ButtonColors, ButtonVariant, StateColors};
use crate::context::use_theme;
use crate::icon::{Icon, IconName, IconSize};
use crate::ids::next_instance_id;
use crate::style::{PseudoState, Selector, StyleRecord, StyleSheet};
use crate::theme::Color;
use crate::tokens::{motion, px, radii, spacing, transition, typography};

const ICON_PART: &str = "icon";
const LABEL_PART: &str = "label";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Button sizes.
pub enum ButtonSize {
    /// Compact button; the label inherits the surrounding font size.
    Small,
    /// Standard button.
    #[default]
    Medium,
}

impl ButtonSize {
    /// Stable lowercase identifier.
    pub fn token(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
        }
    }

    fn height(self) -> u16 {
        match self {
            Self::Small => 32,
            Self::Medium => 40,
        }
    }

    fn padding_inline(self) -> u16 {
        match self {
            Self::Small => spacing::SM,
            Self::Medium => spacing::MD,
        }
    }

    fn gap(self) -> u16 {
        match self {
            Self::Small => spacing::XS,
            Self::Medium => spacing::SM,
        }
    }

    /// Icon size paired with this button size.
    pub fn icon_size(self) -> IconSize {
        match self {
            Self::Small => IconSize::Sm,
            Self::Medium => IconSize::Md,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Side of the label the icon sits on.
pub enum IconPosition {
    /// Icon precedes the label.
    #[default]
    Left,
    /// Icon follows the label.
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Content slots of a button, in render order.
pub enum ButtonSlot {
    /// Icon wrapper.
    Icon,
    /// Label wrapper.
    Label,
}

/// Render order of the button's content slots.
pub fn slot_order(has_icon: bool, position: IconPosition) -> Vec<ButtonSlot> {
    match (has_icon, position) {
        (false, _) => vec![ButtonSlot::Label],
        (true, IconPosition::Left) => vec![ButtonSlot::Icon, ButtonSlot::Label],
        (true, IconPosition::Right) => vec![ButtonSlot::Label, ButtonSlot::Icon],
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Typography tier for a button label.
pub struct TypeTier {
    /// Explicit font size in pixels; `None` inherits.
    pub font_size: Option<u16>,
    /// Font weight.
    pub weight: u16,
    /// Letter spacing.
    pub letter_spacing: &'static str,
    /// Render the label in capitals.
    pub uppercase: bool,
}

/// Typography for a label of `size`, in capitals or mixed case.
pub fn label_type(size: ButtonSize, all_caps: bool) -> TypeTier {
    let font_size = match size {
        ButtonSize::Medium if all_caps => Some(typography::BODY_SMALL),
        ButtonSize::Medium => Some(typography::BODY),
        ButtonSize::Small => None,
    };
    if all_caps {
        TypeTier {
            font_size,
            weight: typography::WEIGHT_BOLD,
            letter_spacing: typography::TRACKING_WIDE,
            uppercase: true,
        }
    } else {
        TypeTier {
            font_size,
            weight: typography::WEIGHT_MEDIUM,
            letter_spacing: typography::TRACKING_NORMAL,
            uppercase: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Resting styles for a tertiary button and its parts.
pub struct TertiaryButtonStyles {
    /// Button element.
    pub container: StyleRecord,
    /// Icon wrapper.
    pub icon: StyleRecord,
    /// Label wrapper.
    pub label: StyleRecord,
}

/// Resting styles derived from the color table, size, and capitalization.
pub fn tertiary_button_styles(
    colors: &ButtonColors,
    size: ButtonSize,
    all_caps: bool,
) -> TertiaryButtonStyles {
    let tier = label_type(size, all_caps);
    let resting = colors.default;

    let container = StyleRecord::new()
        .set("display", "inline-flex")
        .set("align-items", "center")
        .set("justify-content", "center")
        .set("gap", px(size.gap()))
        .set("height", px(size.height()))
        .set("padding", format!("0 {}", px(size.padding_inline())))
        .set("border", "none")
        .set("border-radius", px(radii::SM))
        .set("outline", "none")
        .set_opt("background-color", resting.background.map(|color| color.to_css()))
        .set_opt("color", resting.label.map(|color| color.to_css()))
        .set("cursor", "pointer")
        .set("font-family", typography::FONT_FAMILY)
        .set_opt("font-size", tier.font_size.map(|size| px(size)))
        .set("font-weight", tier.weight.to_string())
        .set("letter-spacing", tier.letter_spacing)
        .set("line-height", "1")
        .set_opt("text-transform", tier.uppercase.then_some("uppercase"))
        .set("white-space", "nowrap")
        .set(
            "transition",
            transition(&["background-color", "color"], motion::FAST),
        );

    let icon = StyleRecord::new()
        .set("display", "inline-flex")
        .set("flex-shrink", "0")
        .set_opt("color", resting.icon.map(|color| color.to_css()));

    let label = StyleRecord::new().set_opt("color", resting.label.map(|color| color.to_css()));

    TertiaryButtonStyles {
        container,
        icon,
        label,
    }
}

fn container_overrides(colors: &StateColors) -> StyleRecord {
    let record = StyleRecord::new()
        .set_opt("background-color", colors.background.map(|color| color.to_css()));
    match colors.focus_ring {
        Some(ring) => record.merge(&ring.declarations()),
        None => record,
    }
}

fn content_color(color: Option<Color>) -> StyleRecord {
    StyleRecord::new().set_opt("color", color.map(|color| color.to_css()))
}

fn state_rules(sheet: StyleSheet, anchor: Selector, colors: &StateColors) -> StyleSheet {
    sheet
        .rule(anchor.clone(), container_overrides(colors))
        .rule(anchor.clone().descendant(ICON_PART), content_color(colors.icon))
        .rule(anchor.descendant(LABEL_PART), content_color(colors.label))
}

/// Complete scoped stylesheet for a tertiary button instance.
///
/// Hover, active, and focus rules never match a disabled button. The focus
/// rule precedes hover and active so a focused button still tints under the
/// pointer, and the disabled rules come last.
pub fn tertiary_button_stylesheet(
    scope: &str,
    colors: &ButtonColors,
    size: ButtonSize,
    all_caps: bool,
) -> StyleSheet {
    let styles = tertiary_button_styles(colors, size, all_caps);
    let interactive = |state: PseudoState| Selector::root().on(state).unless(PseudoState::Disabled);

    let sheet = StyleSheet::new(scope)
        .rule(Selector::root(), styles.container)
        .rule(Selector::part(ICON_PART), styles.icon)
        .rule(Selector::part(LABEL_PART), styles.label);
    let sheet = state_rules(sheet, interactive(PseudoState::FocusVisible), &colors.focus);
    let sheet = state_rules(sheet, interactive(PseudoState::Hover), &colors.hover);
    let sheet = state_rules(sheet, interactive(PseudoState::Active), &colors.active);
    let sheet = state_rules(
        sheet,
        Selector::root().on(PseudoState::Disabled),
        &colors.disabled,
    );
    sheet.rule(
        Selector::root().on(PseudoState::Disabled),
        StyleRecord::new().set("cursor", "default"),
    )
}

#[component]
/// Low-emphasis button: label and optional icon on a clear background that
/// tints on interaction.
pub fn TertiaryButton(
    /// Color scheme family.
    #[prop(default = ButtonVariant::Default)]
    variant: ButtonVariant,
    /// Height, padding, and type scale.
    #[prop(default = ButtonSize::Medium)]
    size: ButtonSize,
    /// Optional leading or trailing icon.
    #[prop(optional)]
    icon: Option<IconName>,
    /// Side of the label the icon sits on.
    #[prop(default = IconPosition::Left)]
    icon_position: IconPosition,
    /// Flip the icon horizontally.
    #[prop(optional)]
    should_mirror_icon: bool,
    /// Bold, widely tracked capitals.
    #[prop(optional)]
    all_caps: bool,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    /// Extra class appended after the instance scope class.
    #[prop(optional)]
    layout_class: Option<&'static str>,
    #[prop(optional)] node_ref: NodeRef<html::Button>,
    #[prop(optional)] button_type: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    #[prop(optional)] on_focus: Option<Callback<FocusEvent>>,
    #[prop(optional)] on_blur: Option<Callback<FocusEvent>>,
    #[prop(optional)] on_keydown: Option<Callback<KeyboardEvent>>,
    /// Additional attributes (`aria-*`, `data-*`) forwarded to the button.
    #[prop(attrs)]
    attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    let theme = use_theme();
    let colors = resolve_button_colors(variant, &theme);
    let sheet = tertiary_button_stylesheet(
        &next_instance_id("ds-tertiary-button"),
        &colors,
        size,
        all_caps,
    );
    let class = scoped_class(sheet.scope(), layout_class);
    let css = sheet.to_css();

    let mut icon_view = icon.map(|icon| {
        view! {
            <span data-ds-part=ICON_PART>
                <Icon icon size=size.icon_size() mirrored=should_mirror_icon />
            </span>
        }
        .into_view()
    });
    let mut label_view = Some(view! { <span data-ds-part=LABEL_PART>{children()}</span> }.into_view());
    let content = slot_order(icon_view.is_some(), icon_position)
        .into_iter()
        .filter_map(|slot| match slot {
            ButtonSlot::Icon => icon_view.take(),
            ButtonSlot::Label => label_view.take(),
        })
        .collect_view();

    view! {
        <style>{css}</style>
        <button
            type=button_type.unwrap_or("button")
            class=class
            node_ref=node_ref
            aria-label=aria_label
            title=title
            disabled=move || disabled.get()
            data-ds-variant=variant.token()
            data-ds-size=size.token()
            {..attrs}
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
            on:focus=move |ev| {
                if let Some(on_focus) = on_focus.as_ref() {
                    on_focus.call(ev);
                }
            }
            on:blur=move |ev| {
                if let Some(on_blur) = on_blur.as_ref() {
                    on_blur.call(ev);
                }
            }
            on:keydown=move |ev| {
                if let Some(on_keydown) = on_keydown.as_ref() {
                    on_keydown.call(ev);
                }
            }
        >
            {content}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::theme::Theme;

    fn default_colors() -> ButtonColors {
        resolve_button_colors(ButtonVariant::Default, &Theme::default())
    }

    #[test]
    fn icon_order_follows_position() {
        assert_eq!(
            slot_order(true, IconPosition::Left),
            vec![ButtonSlot::Icon, ButtonSlot::Label]
        );
        assert_eq!(
            slot_order(true, IconPosition::Right),
            vec![ButtonSlot::Label, ButtonSlot::Icon]
        );
        assert_eq!(slot_order(false, IconPosition::Right), vec![ButtonSlot::Label]);
        assert_eq!(IconPosition::default(), IconPosition::Left);
    }

    #[test]
    fn all_caps_selects_bold_wide_tier() {
        let caps = label_type(ButtonSize::Medium, true);
        assert_eq!(caps.weight, typography::WEIGHT_BOLD);
        assert_eq!(caps.letter_spacing, typography::TRACKING_WIDE);
        assert!(caps.uppercase);

        let normal = label_type(ButtonSize::Medium, false);
        assert_eq!(normal.weight, typography::WEIGHT_MEDIUM);
        assert_eq!(normal.letter_spacing, typography::TRACKING_NORMAL);
        assert_eq!(normal.font_size, Some(typography::BODY));
    }

    #[test]
    fn only_medium_sets_an_explicit_font_size() {
        let medium = tertiary_button_styles(&default_colors(), ButtonSize::Medium, false);
        let small = tertiary_button_styles(&default_colors(), ButtonSize::Small, false);

        assert_eq!(medium.container.get("font-size"), Some("16px"));
        assert_eq!(small.container.get("font-size"), None);
        assert_eq!(small.container.get("height"), Some("32px"));
        assert_eq!(medium.container.get("text-transform"), None);
    }

    #[test]
    fn resting_styles_use_default_state_colors() {
        let colors = default_colors();
        let styles = tertiary_button_styles(&colors, ButtonSize::Medium, true);
        let main = Theme::default().palette.primary.main.to_css();

        assert_eq!(styles.container.get("background-color"), Some("transparent"));
        assert_eq!(styles.icon.get("color"), Some(main.as_str()));
        assert_eq!(styles.label.get("color"), Some(main.as_str()));
        assert_eq!(styles.container.get("text-transform"), Some("uppercase"));
    }

    #[test]
    fn interaction_rules_never_match_disabled_buttons() {
        let colors = default_colors();
        let sheet = tertiary_button_stylesheet("ds-9", &colors, ButtonSize::Medium, false);
        let css = sheet.to_css();

        for state in [":hover", ":active", ":focus-visible"] {
            let rule = css
                .lines()
                .find(|line| line.starts_with(&format!(".ds-9{state}")))
                .expect("state rule");
            assert!(rule.contains(":not(:disabled)"), "{rule}");
        }
        let last_disabled = css.rfind(".ds-9:disabled").expect("disabled rule");
        let last_hover = css.rfind(".ds-9:hover").expect("hover rule");
        assert!(last_disabled > last_hover);
    }

    #[test]
    fn focus_rule_carries_the_focus_ring() {
        let colors = default_colors();
        let sheet = tertiary_button_stylesheet("ds-9", &colors, ButtonSize::Small, false);
        let focus = sheet
            .find(
                &Selector::root()
                    .on(PseudoState::FocusVisible)
                    .unless(PseudoState::Disabled),
            )
            .expect("focus rule");

        assert_eq!(focus.get("outline"), Some("2px solid #3d8bfd"));
        assert_eq!(focus.get("outline-offset"), Some("2px"));
    }

    #[test]
    fn hover_and_active_rules_follow_the_focus_rule() {
        let colors = default_colors();
        let css = tertiary_button_stylesheet("ds-7", &colors, ButtonSize::Medium, false).to_css();
        let focus = css.find(".ds-7:focus-visible").expect("focus rule");
        let hover = css.find(".ds-7:hover").expect("hover rule");
        let active = css.find(".ds-7:active").expect("active rule");

        assert!(focus < hover && hover < active);
        let hover_label = css
            .lines()
            .find(|line| line.starts_with(".ds-7:hover:not(:disabled) [data-ds-part=\"label\"]"))
            .expect("hover label rule");
        let dark = Theme::default().palette.primary.dark.to_css();
        assert!(hover_label.contains(&format!("color: {dark};")), "{hover_label}");
    }

    #[test]
    fn disabled_rule_uses_disabled_content_colors() {
        let colors = resolve_button_colors(ButtonVariant::Inverse, &Theme::default());
        let sheet = tertiary_button_stylesheet("ds-4", &colors, ButtonSize::Medium, false);
        let label = sheet
            .find(&Selector::root().on(PseudoState::Disabled).descendant(LABEL_PART))
            .expect("disabled label rule");
        let expected = colors.disabled.label.map(Color::to_css);

        assert_eq!(label.get("color").map(str::to_string), expected);
    }
}
