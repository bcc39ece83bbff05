use leptos::prelude::*;

use super::{about::SectionHeading, icons::IconSvg, use_loaded, use_palette};
use crate::{
    content::{Icon, PROFILE},
    motion::Entrance,
};

#[component]
fn ContactRow(icon: Icon, children: Children) -> impl IntoView {
    let palette = use_palette();
    view! {
        <div class="flex items-start">
            <div class=move || {
                format!("p-3 rounded-full mr-4 shrink-0 {}", palette.get().contact_icon)
            }>
                <IconSvg icon class="w-5 h-5" />
            </div>
            <div class="pt-2">{children()}</div>
        </div>
    }
}

#[component]
pub fn Contact() -> impl IntoView {
    let palette = use_palette();
    let is_loaded = use_loaded();
    let profile = &*PROFILE;
    let contact = &profile.contact;

    view! {
        <section id="contact" class="py-24 container mx-auto px-4">
            <div class="max-w-5xl mx-auto" style=move || Entrance::CONTACT.style(is_loaded.get())>
                <SectionHeading title="Get In Touch" />
                <div class=move || {
                    format!("rounded-2xl shadow-xl overflow-hidden {}", palette.get().card)
                }>
                    <div class="grid grid-cols-1 lg:grid-cols-5">
                        <div class=move || {
                            format!(
                                "lg:col-span-2 text-white p-8 lg:p-10 {}",
                                palette.get().contact_panel,
                            )
                        }>
                            <h3 class="text-2xl font-semibold mb-8">"Contact Information"</h3>
                            <div class="space-y-6">
                                <ContactRow icon=Icon::Phone>
                                    <a href=profile.tel() class="hover:underline">
                                        {contact.phone.as_str()}
                                    </a>
                                </ContactRow>
                                <ContactRow icon=Icon::Mail>
                                    <a href=profile.mailto() class="hover:underline break-all">
                                        {contact.email.as_str()}
                                    </a>
                                </ContactRow>
                                <ContactRow icon=Icon::Location>
                                    {contact
                                        .address
                                        .iter()
                                        .map(|line| view! { <p>{line.as_str()}</p> })
                                        .collect_view()}
                                </ContactRow>
                            </div>
                            <div class="mt-12">
                                <h3 class="text-xl font-semibold mb-4">"Connect"</h3>
                                <div class="flex space-x-4">
                                    {profile
                                        .socials
                                        .iter()
                                        .map(|social| {
                                            view! {
                                                <a
                                                    href=social.href.as_str()
                                                    aria-label=social.label.as_str()
                                                    class=move || {
                                                        format!(
                                                            "p-3 rounded-full hover:opacity-80 transition-opacity {}",
                                                            palette.get().contact_icon,
                                                        )
                                                    }
                                                >
                                                    <IconSvg icon=social.icon class="w-5 h-5" />
                                                </a>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </div>
                        </div>

                        <div class="lg:col-span-3 p-8 lg:p-10">
                            <div class="grid grid-cols-1 md:grid-cols-2 gap-8 mb-8">
                                <Languages />
                                <Interests />
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn Languages() -> impl IntoView {
    let palette = use_palette();
    view! {
        <div>
            <h3 class=move || {
                format!("text-xl font-semibold mb-4 {}", palette.get().heading)
            }>"Languages"</h3>
            <div class="space-y-3">
                {PROFILE
                    .languages
                    .iter()
                    .map(|language| {
                        view! {
                            <div class="flex items-center">
                                <div class=move || {
                                    format!("w-full rounded-full h-2.5 {}", palette.get().meter_track)
                                }>
                                    <div
                                        class=move || {
                                            format!("h-2.5 rounded-full {}", palette.get().meter_fill)
                                        }
                                        style=language.width_style()
                                    ></div>
                                </div>
                                <span class=move || {
                                    format!("ml-3 {}", palette.get().body_text)
                                }>{language.name.as_str()}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn Interests() -> impl IntoView {
    let palette = use_palette();
    view! {
        <div>
            <h3 class=move || {
                format!("text-xl font-semibold mb-4 {}", palette.get().heading)
            }>"Interests"</h3>
            <div class="flex flex-wrap gap-2">
                {PROFILE
                    .interests
                    .iter()
                    .map(|interest| {
                        view! {
                            <span class=move || {
                                format!("px-3 py-1 rounded-full text-sm {}", palette.get().chip)
                            }>{interest.as_str()}</span>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
