//! Gallery of every `design_ui` control under one theme.
//!
//! The gallery renders each button variant, size, and icon placement plus a
//! radio group, so visual changes to the component library can be reviewed in
//! one place. Its own UI state round-trips through JSON so a host can restore
//! it between sessions.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use design_ui::prelude::*;
use design_ui::tokens::{colors, px, spacing};
use design_ui::{use_theme, Theme};
use leptos::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
enum Plan {
    Basic,
    Pro,
    Enterprise,
}

impl Plan {
    const ALL: [Self; 3] = [Self::Basic, Self::Pro, Self::Enterprise];

    fn label(self) -> &'static str {
        match self {
            Self::Basic => "Basic",
            Self::Pro => "Pro",
            Self::Enterprise => "Enterprise (contact sales)",
        }
    }

    fn value(self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Pro => "pro",
            Self::Enterprise => "enterprise",
        }
    }

    fn available(self) -> bool {
        !matches!(self, Self::Enterprise)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
struct ShowcaseState {
    plan: Plan,
    all_caps: bool,
    buttons_disabled: bool,
    clicks: u32,
}

impl Default for ShowcaseState {
    fn default() -> Self {
        Self {
            plan: Plan::Pro,
            all_caps: false,
            buttons_disabled: false,
            clicks: 0,
        }
    }
}

impl ShowcaseState {
    fn restore(restored: Option<Value>) -> Self {
        let Some(restored) = restored else {
            return Self::default();
        };
        match serde_json::from_value::<Self>(restored) {
            Ok(state) => state,
            Err(err) => {
                logging::warn!("ui showcase restore failed: {err}");
                Self::default()
            }
        }
    }

    /// Restored state plus the serialized form already held by the host, so
    /// the first export after a restore is skipped.
    fn seed(restored: Option<Value>) -> (Self, Option<String>) {
        let held = restored.is_some();
        let state = Self::restore(restored);
        let saved = held.then(|| serde_json::to_string(&state).ok()).flatten();
        (state, saved)
    }
}

fn inverse_surface_style(theme: &Theme) -> String {
    format!(
        "background-color: {}; padding: {}; border-radius: {};",
        theme.palette.primary.dark,
        px(spacing::LG),
        px(spacing::SM),
    )
}

fn caption_style() -> String {
    format!("color: {}; margin: 0;", colors::GRAY_700)
}

#[component]
/// Gallery contents.
pub fn ShowcaseApp(
    /// Theme applied to every control in the gallery.
    #[prop(optional, into)]
    theme: Option<Theme>,
    /// Previously persisted gallery state.
    #[prop(optional)]
    restored_state: Option<Value>,
    /// Receives the gallery state whenever it changes.
    #[prop(optional)]
    on_state_change: Option<Callback<Value>>,
) -> impl IntoView {
    let (restored, saved) = ShowcaseState::seed(restored_state);
    let state = create_rw_signal(restored);
    let last_saved = create_rw_signal(saved);

    create_effect(move |_| {
        let snapshot = state.get();
        let serialized = match serde_json::to_string(&snapshot) {
            Ok(serialized) => serialized,
            Err(err) => {
                logging::warn!("ui showcase serialize failed: {err}");
                return;
            }
        };

        if last_saved.get_untracked().as_deref() == Some(serialized.as_str()) {
            return;
        }
        last_saved.set(Some(serialized));

        if let Some(on_state_change) = on_state_change.as_ref() {
            match serde_json::to_value(&snapshot) {
                Ok(value) => on_state_change.call(value),
                Err(err) => logging::warn!("ui showcase state export failed: {err}"),
            }
        }
    });

    view! {
        <ThemeProvider theme=theme.unwrap_or_default()>
            <ShowcaseBody state />
        </ThemeProvider>
    }
}

#[component]
fn ShowcaseBody(state: RwSignal<ShowcaseState>) -> impl IntoView {
    let theme = use_theme();
    let all_caps = create_memo(move |_| state.with(|value| value.all_caps));
    let disabled = Signal::derive(move || state.get().buttons_disabled);
    let count_click = Callback::new(move |_: ev::MouseEvent| state.update(|value| value.clicks += 1));

    let plans = Plan::ALL
        .into_iter()
        .map(|plan| {
            view! {
                <Radio
                    name="showcase-plan"
                    value=plan.value()
                    label=plan.label()
                    checked=Signal::derive(move || state.get().plan == plan)
                    disabled=!plan.available()
                    on_change=Callback::new(move |_| state.update(|value| value.plan = plan))
                />
            }
        })
        .collect_view();

    view! {
        <Stack gap=LayoutGap::Lg>
            <h2>"Tertiary buttons"</h2>
            {move || {
                let all_caps = all_caps.get();
                view! {
                    <Cluster gap=LayoutGap::Sm>
                        <TertiaryButton all_caps disabled on_click=count_click>"Medium"</TertiaryButton>
                        <TertiaryButton all_caps disabled size=ButtonSize::Small on_click=count_click>
                            "Small"
                        </TertiaryButton>
                        <TertiaryButton all_caps disabled icon=IconName::Add on_click=count_click>
                            "Add item"
                        </TertiaryButton>
                        <TertiaryButton
                            all_caps
                            disabled
                            icon=IconName::ArrowRight
                            icon_position=IconPosition::Right
                            on_click=count_click
                        >
                            "Continue"
                        </TertiaryButton>
                        <TertiaryButton
                            all_caps
                            disabled
                            icon=IconName::ArrowRight
                            should_mirror_icon=true
                            on_click=count_click
                        >
                            "Back"
                        </TertiaryButton>
                        <TertiaryButton disabled=true icon=IconName::Dismiss>"Always disabled"</TertiaryButton>
                    </Cluster>
                    <div style=inverse_surface_style(&theme)>
                        <Cluster gap=LayoutGap::Sm>
                            <TertiaryButton variant=ButtonVariant::Inverse all_caps disabled on_click=count_click>
                                "Inverse"
                            </TertiaryButton>
                            <TertiaryButton
                                variant=ButtonVariant::Inverse
                                all_caps
                                disabled
                                icon=IconName::Open
                                icon_position=IconPosition::Right
                                attr:aria-describedby="showcase-inverse-note"
                                on_click=count_click
                            >
                                "Open docs"
                            </TertiaryButton>
                        </Cluster>
                    </div>
                }
            }}
            <p id="showcase-inverse-note" style=caption_style()>
                {move || format!("Button clicks: {}", state.get().clicks)}
            </p>
            <Cluster gap=LayoutGap::Sm>
                <TertiaryButton
                    size=ButtonSize::Small
                    icon=IconName::Checkmark
                    on_click=Callback::new(move |_| {
                        state.update(|value| value.buttons_disabled = !value.buttons_disabled);
                    })
                >
                    {move || {
                        if state.get().buttons_disabled {
                            "Enable buttons"
                        } else {
                            "Disable buttons"
                        }
                    }}
                </TertiaryButton>
                <TertiaryButton
                    size=ButtonSize::Small
                    on_click=Callback::new(move |_| {
                        state.update(|value| value.all_caps = !value.all_caps);
                    })
                >
                    {move || if all_caps.get() { "Mixed case" } else { "All caps" }}
                </TertiaryButton>
            </Cluster>

            <h2>"Radio"</h2>
            <div role="radiogroup" aria-label="Plan">
                <Stack gap=LayoutGap::Sm>{plans}</Stack>
            </div>
            <p style=caption_style()>
                {move || format!("Selected plan: {}", state.get().plan.label())}
            </p>
        </Stack>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn restore_falls_back_to_defaults() {
        assert_eq!(ShowcaseState::restore(None), ShowcaseState::default());
        assert_eq!(
            ShowcaseState::restore(Some(json!({ "plan": "unknown-tier" }))),
            ShowcaseState::default()
        );
    }

    #[test]
    fn restore_keeps_known_fields_and_defaults_the_rest() {
        let restored = ShowcaseState::restore(Some(json!({ "plan": "basic", "clicks": 4 })));
        assert_eq!(restored.plan, Plan::Basic);
        assert_eq!(restored.clicks, 4);
        assert!(!restored.all_caps);
    }

    #[test]
    fn seeding_marks_restored_state_as_already_saved() {
        let (state, saved) = ShowcaseState::seed(Some(json!({ "all_caps": true })));
        assert!(state.all_caps);
        assert_eq!(saved, serde_json::to_string(&state).ok());

        let (state, saved) = ShowcaseState::seed(None);
        assert_eq!(state, ShowcaseState::default());
        assert_eq!(saved, None);
    }

    #[test]
    fn only_enterprise_is_unavailable() {
        let unavailable: Vec<_> = Plan::ALL.into_iter().filter(|plan| !plan.available()).collect();
        assert_eq!(unavailable, vec![Plan::Enterprise]);
    }

    #[test]
    fn inverse_surface_uses_the_dark_primary_tone() {
        let theme = Theme::default();
        assert!(inverse_surface_style(&theme).starts_with(&format!(
            "background-color: {};",
            theme.palette.primary.dark
        )));
    }
}
