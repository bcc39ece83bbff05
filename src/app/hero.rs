use leptos::prelude::*;

use super::{use_loaded, use_palette, use_view_state};
use crate::{
    content::PROFILE,
    motion::{glow_style, Entrance},
};

const WAVE: &str = "M321.39,56.44c58-10.79,114.16-30.13,172-41.86,82.39-16.72,168.19-17.73,250.45-.39C823.78,31,906.67,72,985.66,92.83c70.05,18.48,146.53,26.09,214.34,3V120H0V59.27C57.1,66.9,114.97,76.66,170.25,78.94Z";

#[component]
pub fn Hero() -> impl IntoView {
    let palette = use_palette();
    let is_loaded = use_loaded();
    let profile = &*PROFILE;
    let identity = &profile.identity;

    view! {
        <section class=move || format!("relative overflow-hidden {}", palette.get().hero)>
            <div class="absolute inset-0 overflow-hidden opacity-20">
                <div class="absolute -top-24 -left-24 w-96 h-96 rounded-full bg-white/20"></div>
                <div class="absolute top-32 right-64 w-64 h-64 rounded-full bg-white/20"></div>
                <div class="absolute -bottom-20 right-10 w-80 h-80 rounded-full bg-white/20"></div>
            </div>

            <div class="container mx-auto px-4 py-20 md:py-28 flex flex-col md:flex-row items-center relative z-10">
                <div
                    class="md:w-1/3 flex justify-center mb-10 md:mb-0"
                    style=move || Entrance::AVATAR.style(is_loaded.get())
                >
                    <div class="relative">
                        <div class="absolute inset-0 rounded-full bg-white blur-xl opacity-20 transform -translate-x-2 translate-y-2"></div>
                        <div class=move || {
                            format!(
                                "rounded-full overflow-hidden border-4 h-64 w-64 relative shadow-2xl {}",
                                palette.get().avatar_border,
                            )
                        }>
                            <img
                                src=identity.avatar.as_str()
                                alt=identity.name.as_str()
                                class="w-full h-full object-cover"
                            />
                        </div>
                    </div>
                </div>

                <div
                    class="md:w-2/3 md:pl-16 text-white"
                    style=move || Entrance::HERO_TEXT.style(is_loaded.get())
                >
                    <div class="space-y-4">
                        <h2 class=move || {
                            format!("text-sm uppercase tracking-wider {}", palette.get().hero_kicker)
                        }>{identity.role.as_str()}</h2>
                        <h1 class="text-4xl md:text-6xl font-bold">{identity.name.as_str()}</h1>
                        <p class="text-lg opacity-80 max-w-lg">{identity.tagline.as_str()}</p>
                        <div class="flex flex-wrap gap-4 pt-4">
                            <a
                                href=profile.mailto()
                                class=move || {
                                    format!(
                                        "px-6 py-3 rounded-full font-medium transition duration-300 shadow-lg {}",
                                        palette.get().primary_button,
                                    )
                                }
                            >
                                "Contact Me"
                            </a>
                            <a
                                href="#about"
                                class="bg-transparent border-2 border-white px-6 py-3 rounded-full font-medium hover:bg-white hover:text-emerald-900 transition duration-300 learn-more-btn"
                            >
                                "Learn More"
                            </a>
                        </div>
                    </div>
                </div>
            </div>

            <div class=move || {
                format!(
                    "absolute bottom-0 left-0 w-full overflow-hidden leading-none {}",
                    palette.get().wave,
                )
            }>
                <svg
                    xmlns="http://www.w3.org/2000/svg"
                    viewBox="0 0 1200 120"
                    preserveAspectRatio="none"
                    class="w-full h-16 md:h-24"
                >
                    <path d=WAVE fill="currentColor"></path>
                </svg>
            </div>
        </section>
    }
}

/// Soft light that trails the pointer across the page.
#[component]
pub fn CursorGlow() -> impl IntoView {
    let state = use_view_state();
    let palette = use_palette();
    let cursor = Memo::new(move |_| state.with(|s| s.cursor()));

    view! {
        <div
            aria-hidden="true"
            class="pointer-events-none fixed inset-0 z-30 transition duration-300"
            style=move || glow_style(cursor.get(), palette.get().glow_rgb)
        ></div>
    }
}
