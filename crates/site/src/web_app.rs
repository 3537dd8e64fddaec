use design_ui::ThemePreset;
use design_ui_showcase::ShowcaseApp;
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Design UI Gallery" />
        <Meta name="description" content="Themed buttons and radio inputs rendered under each built-in preset." />

        <Router>
            <main class="site-root">
                <PresetNav />
                <Routes>
                    <Route path="" view=GalleryEntry />
                    <Route path="/themes/:preset" view=PresetGalleryRoute />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
pub fn GalleryEntry() -> impl IntoView {
    view! { <ShowcaseApp theme=ThemePreset::default().theme() /> }
}

#[component]
fn PresetNav() -> impl IntoView {
    view! {
        <nav aria-label="Theme presets">
            {ThemePreset::ALL
                .into_iter()
                .map(|preset| {
                    view! { <A href=format!("/themes/{}", preset.token())>{preset.token()}</A> " " }
                })
                .collect_view()}
        </nav>
    }
}

#[component]
fn PresetGalleryRoute() -> impl IntoView {
    let params = use_params_map();
    let preset = move || params.with(|map| preset_from_param(map.get("preset").map(String::as_str)));

    view! {
        {move || {
            let theme = preset().theme();
            view! { <ShowcaseApp theme /> }
        }}
    }
}

fn preset_from_param(raw: Option<&str>) -> ThemePreset {
    let Some(raw) = raw else {
        return ThemePreset::default();
    };
    raw.parse().unwrap_or_else(|err| {
        logging::warn!("{err}; rendering the default theme");
        ThemePreset::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_presets_resolve_and_unknown_ones_fall_back() {
        assert_eq!(preset_from_param(Some("forest")), ThemePreset::Forest);
        assert_eq!(preset_from_param(Some("midnight")), ThemePreset::Ocean);
        assert_eq!(preset_from_param(None), ThemePreset::Ocean);
    }
}
