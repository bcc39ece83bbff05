use leptos::prelude::*;

use super::{icons::IconSvg, use_loaded, use_palette};
use crate::{content::PROFILE, motion::Entrance};

/// Centered section title flanked by two short rules.
#[component]
pub fn SectionHeading(title: &'static str) -> impl IntoView {
    let palette = use_palette();
    let rule = move || format!("h-px w-12 {}", palette.get().rule);
    view! {
        <div class="flex items-center justify-center gap-4 mb-12">
            <div class=rule></div>
            <h2 class=move || format!("text-3xl font-bold {}", palette.get().heading)>{title}</h2>
            <div class=rule></div>
        </div>
    }
}

#[component]
pub fn About() -> impl IntoView {
    let palette = use_palette();
    let is_loaded = use_loaded();
    let profile = &*PROFILE;

    view! {
        <section id="about" class="py-24 container mx-auto px-4">
            <div class="max-w-4xl mx-auto" style=move || Entrance::ABOUT.style(is_loaded.get())>
                <SectionHeading title="About Me" />
                <div class=move || {
                    format!(
                        "p-8 rounded-xl shadow-xl transition-all duration-300 hover:shadow-2xl {}",
                        palette.get().card,
                    )
                }>
                    <div class="space-y-6">
                        {profile
                            .about
                            .iter()
                            .map(|paragraph| {
                                view! {
                                    <p class=move || {
                                        format!("text-lg leading-relaxed {}", palette.get().body_text)
                                    }>{paragraph.as_str()}</p>
                                }
                            })
                            .collect_view()}
                        <div class="grid grid-cols-1 md:grid-cols-3 gap-6 pt-6">
                            {profile
                                .services
                                .iter()
                                .map(|service| {
                                    view! {
                                        <div class=move || {
                                            format!("p-6 rounded-lg transition-colors {}", palette.get().tile)
                                        }>
                                            <div class=move || {
                                                format!(
                                                    "inline-flex p-3 rounded-full mb-4 {}",
                                                    palette.get().tile_icon,
                                                )
                                            }>
                                                <IconSvg icon=service.icon class="h-6 w-6" />
                                            </div>
                                            <h3 class="text-xl font-semibold mb-2">
                                                {service.title.as_str()}
                                            </h3>
                                            <p class=move || palette.get().muted_text>
                                                {service.blurb.as_str()}
                                            </p>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
