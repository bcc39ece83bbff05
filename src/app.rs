mod about;
mod contact;
mod footer;
mod hero;
mod homepage;
mod icons;
mod listeners;
mod nav;
mod resume;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::{
    content::PROFILE,
    state::{Tab, ViewState},
    theme::Palette,
};
use homepage::HomePage;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="light dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_context(RwSignal::new(ViewState::new()));

    let name = PROFILE.identity.name.as_str();

    view! {
        <Title formatter=move |title| format!("{name} - {title}") />
        <Meta name="description" content=PROFILE.identity.tagline.as_str() />
        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/") view=HomePage />
            </Routes>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(resp) = use_context::<leptos_axum::ResponseOptions>() {
            resp.set_status(http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <Title text="Not Found" />
        <main class="min-h-screen flex flex-col items-center justify-center gap-4 bg-gray-50 text-gray-900">
            <h1 class="text-3xl font-bold">"Page not found."</h1>
            <a href="/" class="text-emerald-600 hover:underline">
                "Back to the portfolio"
            </a>
        </main>
    }
}

pub(crate) fn use_view_state() -> RwSignal<ViewState> {
    expect_context::<RwSignal<ViewState>>()
}

// Narrow memos so pointer moves only wake the glow, not every class binding.

pub(crate) fn use_dark_mode() -> Memo<bool> {
    let state = use_view_state();
    Memo::new(move |_| state.with(|s| s.is_dark_mode()))
}

pub(crate) fn use_palette() -> Memo<&'static Palette> {
    let is_dark_mode = use_dark_mode();
    Memo::new(move |_| Palette::for_mode(is_dark_mode.get()))
}

pub(crate) fn use_loaded() -> Memo<bool> {
    let state = use_view_state();
    Memo::new(move |_| state.with(|s| s.is_loaded()))
}

pub(crate) fn use_active_tab() -> Memo<Tab> {
    let state = use_view_state();
    Memo::new(move |_| state.with(|s| s.active_tab()))
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::motion::Entrance;

    fn render(state: ViewState) -> String {
        Owner::new().with(|| {
            provide_meta_context();
            provide_context(RwSignal::new(state));
            view! { <homepage::HomePage /> }.to_html()
        })
    }

    fn panels(html: &str) -> Vec<Tab> {
        Tab::ALL
            .into_iter()
            .filter(|tab| html.contains(&format!("data-panel=\"{}\"", tab.id())))
            .collect()
    }

    #[test]
    fn test_only_active_panel_rendered() {
        for tab in Tab::ALL {
            let mut state = ViewState::new();
            state.select(tab);
            let html = render(state);
            assert_eq!(panels(&html), vec![tab]);
            assert_eq!(html.matches(&format!("data-panel=\"{}\"", tab.id())).count(), 1);
        }
    }

    #[test]
    fn test_page_uses_palette_for_mode() {
        let light = render(ViewState::new());
        assert!(light.contains(&format!("duration-300 {}\"", Palette::LIGHT.page)));

        let mut state = ViewState::new();
        state.toggle_dark_mode();
        let dark = render(state);
        assert!(dark.contains(&format!("duration-300 {}\"", Palette::DARK.page)));
        assert!(!dark.contains(&format!("duration-300 {}\"", Palette::LIGHT.page)));
    }

    #[test]
    fn test_entrance_styles_follow_loaded() {
        let before = render(ViewState::new());
        assert!(before.contains(&Entrance::ABOUT.style(false)));
        assert!(!before.contains(&Entrance::ABOUT.style(true)));

        let mut state = ViewState::new();
        state.mark_loaded();
        let after = render(state);
        assert!(after.contains(&Entrance::ABOUT.style(true)));
        assert!(after.contains(&Entrance::CONTACT.style(true)));
    }

    #[test]
    fn test_sections_and_socials_render() {
        let html = render(ViewState::new());
        for id in ["about", "resume", "contact"] {
            assert!(html.contains(&format!("id=\"{id}\"")), "missing #{id}");
        }
        assert!(html.contains(&PROFILE.mailto()));
    }
}
