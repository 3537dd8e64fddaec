//! Theme injection through the Leptos context tree.

use leptos::*;

use crate::theme::Theme;

#[component]
/// Provides a [`Theme`] to every descendant component.
pub fn ThemeProvider(
    /// Theme to inject; the stock theme when omitted.
    #[prop(optional, into)]
    theme: Option<Theme>,
    children: Children,
) -> impl IntoView {
    provide_context(theme.unwrap_or_default());
    children()
}

/// Returns the nearest provided [`Theme`], or the stock theme when no
/// [`ThemeProvider`] is mounted above the caller.
pub fn use_theme() -> Theme {
    use_context::<Theme>().unwrap_or_else(|| {
        logging::debug_warn!("design_ui: no ThemeProvider in scope, using the default theme");
        Theme::default()
    })
}
