use leptos::prelude::*;
use leptos_meta::Title;
use leptos_use::use_preferred_dark;

use super::{
    about::About,
    contact::Contact,
    footer::Footer,
    hero::{CursorGlow, Hero},
    listeners::{use_anchor_scrolling, use_cursor_tracking},
    nav::Navbar,
    resume::Resume,
    use_palette, use_view_state,
};

#[component]
pub fn HomePage() -> impl IntoView {
    let state = use_view_state();
    let palette = use_palette();
    let prefers_dark = use_preferred_dark();

    // Effects only run in the browser, once the server-rendered markup has
    // been hydrated. Reads are untracked so this never fires again.
    Effect::new(move |_| {
        let prefers_dark = prefers_dark.get_untracked();
        state.update(|s| s.mount(Some(prefers_dark)));
        log::debug!("page mounted, dark mode: {prefers_dark}");
    });

    use_anchor_scrolling();
    use_cursor_tracking(state);

    view! {
        <Title text="Portfolio" />
        <main class=move || {
            format!("min-h-screen transition-colors duration-300 {}", palette.get().page)
        }>
            <CursorGlow />
            <Navbar />
            <Hero />
            <About />
            <Resume />
            <Contact />
            <Footer />
        </main>
    }
}
