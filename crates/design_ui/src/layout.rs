//! Flex layout helpers used to arrange controls.

use leptos::*;

use crate::style::StyleRecord;
use crate::tokens::{px, spacing};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Gap between laid-out children.
pub enum LayoutGap {
    /// No gap.
    None,
    /// Small gap.
    Sm,
    /// Default gap.
    #[default]
    Md,
    /// Large gap.
    Lg,
}

impl LayoutGap {
    fn px(self) -> u16 {
        match self {
            Self::None => 0,
            Self::Sm => spacing::SM,
            Self::Md => spacing::LG,
            Self::Lg => spacing::XL,
        }
    }
}

/// Inline style for a flex container flowing in `direction`.
pub(crate) fn flex_style(direction: &'static str, gap: LayoutGap, wrap: bool) -> String {
    StyleRecord::new()
        .set("display", "flex")
        .set("flex-direction", direction)
        .set("gap", px(gap.px()))
        .set_opt("flex-wrap", wrap.then_some("wrap"))
        .set_opt("align-items", wrap.then_some("center"))
        .to_inline()
}

#[component]
/// Vertical layout stack.
pub fn Stack(
    #[prop(default = LayoutGap::Md)] gap: LayoutGap,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=layout_class style=flex_style("column", gap, false)>
            {children()}
        </div>
    }
}

#[component]
/// Horizontal wrapping cluster.
pub fn Cluster(
    #[prop(default = LayoutGap::Md)] gap: LayoutGap,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=layout_class style=flex_style("row", gap, true)>
            {children()}
        </div>
    }
}
