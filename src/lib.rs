#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;
pub mod content;
pub mod error;
pub mod motion;
pub mod scroll;
pub mod state;
pub mod theme;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    use crate::content::profile;

    console_error_panic_hook::set_once();
    // a second init only fails if a logger is already installed
    let _ = console_log::init_with_level(log::Level::Info);

    let profile = match profile() {
        Ok(profile) => profile,
        Err(e) => {
            log::error!("not hydrating: {e}");
            return;
        }
    };
    log::debug!("hydrating page for {}", profile.identity.name);
    leptos::mount::hydrate_body(App);
}
