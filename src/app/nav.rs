use leptos::prelude::*;

use super::{icons::ThemeGlyph, use_dark_mode, use_palette, use_view_state};
use crate::{content::PROFILE, state::ViewState};

const SECTIONS: [(&str, &str); 3] = [("#about", "About"), ("#resume", "Resume"), ("#contact", "Contact")];

#[component]
pub fn Navbar() -> impl IntoView {
    let state = use_view_state();
    let palette = use_palette();
    let is_dark_mode = use_dark_mode();
    let identity = &PROFILE.identity;

    view! {
        <nav class=move || format!("sticky top-0 z-50 shadow-sm {}", palette.get().nav)>
            <div class="container mx-auto px-4 py-4 flex justify-between items-center">
                <a href="#" class="text-xl font-bold">
                    {identity.brand.as_str()}
                    <span class=move || palette.get().accent_text>
                        {identity.brand_accent.as_str()}
                    </span>
                </a>
                <div class="flex items-center gap-6">
                    <div class="hidden md:flex gap-6">
                        {SECTIONS
                            .into_iter()
                            .map(|(href, label)| {
                                view! {
                                    <a
                                        href=href
                                        class=move || {
                                            format!("transition-colors {}", palette.get().link_hover)
                                        }
                                    >
                                        {label}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                    <button
                        type="button"
                        aria-label="Toggle dark mode"
                        class=move || format!("p-2 rounded-full {}", palette.get().toggle)
                        on:click=move |_| state.update(ViewState::toggle_dark_mode)
                    >
                        {move || view! { <ThemeGlyph is_dark_mode=is_dark_mode.get() /> }}
                    </button>
                </div>
            </div>
        </nav>
    }
}
