use leptos::{either::EitherOf3, prelude::*};

use super::{about::SectionHeading, icons::IconSvg, use_active_tab, use_loaded, use_palette, use_view_state};
use crate::{
    content::{ResumeEntry, PROFILE},
    motion::{stagger_style, Entrance},
    state::Tab,
};

#[component]
pub fn Resume() -> impl IntoView {
    let palette = use_palette();
    let is_loaded = use_loaded();
    let active_tab = use_active_tab();

    view! {
        <section id="resume" class="py-24 container mx-auto px-4">
            <div class="max-w-4xl mx-auto" style=move || Entrance::RESUME.style(is_loaded.get())>
                <SectionHeading title="My Resume" />
                <div class=move || {
                    format!(
                        "rounded-xl shadow-xl overflow-hidden transition-all duration-300 hover:shadow-2xl {}",
                        palette.get().card,
                    )
                }>
                    <TabBar />
                    <div class="p-8">
                        {move || match active_tab.get() {
                            Tab::Experience => EitherOf3::A(view! { <ExperiencePanel /> }),
                            Tab::Education => EitherOf3::B(view! { <EducationPanel /> }),
                            Tab::Skills => EitherOf3::C(view! { <SkillsPanel /> }),
                        }}
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn TabBar() -> impl IntoView {
    let state = use_view_state();
    let palette = use_palette();
    let active_tab = use_active_tab();

    view! {
        <div class="flex" role="tablist">
            {Tab::ALL
                .into_iter()
                .map(|tab| {
                    view! {
                        <button
                            type="button"
                            role="tab"
                            data-tab=tab.id()
                            aria-selected=move || (active_tab.get() == tab).to_string()
                            class=move || {
                                format!(
                                    "flex-1 py-5 font-medium transition-all duration-300 {}",
                                    palette.get().tab(active_tab.get() == tab),
                                )
                            }
                            on:click=move |_| state.update(|s| s.select_tab(tab.id()))
                        >
                            {tab.label()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn PanelTitle(title: &'static str) -> impl IntoView {
    let palette = use_palette();
    view! { <h3 class=move || format!("text-2xl font-bold mb-8 {}", palette.get().heading)>{title}</h3> }
}

/// Experience and education share the timeline layout.
#[component]
fn Timeline(entries: &'static [ResumeEntry], period_under_title: bool) -> impl IntoView {
    let palette = use_palette();
    view! {
        <div class="space-y-10">
            {entries
                .iter()
                .enumerate()
                .map(|(i, entry)| {
                    let badge = move || format!("px-3 py-1 rounded-full text-sm {}", palette.get().badge);
                    let title = view! {
                        <h4 class=move || {
                            format!("text-xl font-semibold {}", palette.get().heading)
                        }>{entry.title.as_str()}</h4>
                    };
                    let header = if period_under_title {
                        EitherOf3::A(
                            view! {
                                {title}
                                <p class=move || {
                                    format!("mt-2 text-lg {}", palette.get().body_text)
                                }>{entry.organization.as_str()}</p>
                                <div class=move || {
                                    format!("inline-block mt-3 {}", badge())
                                }>{entry.period.as_str()}</div>
                            },
                        )
                    } else if entry.description.is_some() {
                        EitherOf3::B(
                            view! {
                                <div class="flex flex-col md:flex-row md:items-center gap-2 md:gap-6 mb-2">
                                    {title}
                                    <div class=badge>{entry.period.as_str()}</div>
                                </div>
                                <p class=move || {
                                    format!("mb-2 {}", palette.get().body_text)
                                }>{entry.organization.as_str()}</p>
                                <p class=move || {
                                    format!("mt-2 {}", palette.get().body_text)
                                }>{entry.description.as_deref()}</p>
                            },
                        )
                    } else {
                        EitherOf3::C(
                            view! {
                                <div class="flex flex-col md:flex-row md:items-center gap-2 md:gap-6 mb-2">
                                    {title}
                                    <div class=badge>{entry.period.as_str()}</div>
                                </div>
                                <p class=move || {
                                    format!("mb-2 {}", palette.get().body_text)
                                }>{entry.organization.as_str()}</p>
                            },
                        )
                    };
                    view! {
                        <div
                            class=move || {
                                format!("relative pl-10 animate-slide-in {}", palette.get().timeline)
                            }
                            style=stagger_style(i)
                        >
                            <div class=move || {
                                format!(
                                    "absolute -left-2.5 top-0 h-5 w-5 rounded-full {}",
                                    palette.get().timeline_dot,
                                )
                            }></div>
                            {header}
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn ExperiencePanel() -> impl IntoView {
    view! {
        <div class="animate-fade-in" data-panel=Tab::Experience.id()>
            <PanelTitle title="Experience & Trainings" />
            <Timeline entries=PROFILE.experience.as_slice() period_under_title=false />
        </div>
    }
}

#[component]
fn EducationPanel() -> impl IntoView {
    view! {
        <div class="animate-fade-in" data-panel=Tab::Education.id()>
            <PanelTitle title="Education" />
            <Timeline entries=PROFILE.education.as_slice() period_under_title=true />
        </div>
    }
}

#[component]
fn SkillsPanel() -> impl IntoView {
    let palette = use_palette();
    view! {
        <div class="animate-fade-in" data-panel=Tab::Skills.id()>
            <PanelTitle title="Skills" />
            <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                {PROFILE
                    .skills
                    .iter()
                    .enumerate()
                    .map(|(i, skill)| {
                        view! {
                            <div
                                class=move || {
                                    format!(
                                        "p-6 rounded-lg shadow-sm animate-slide-in {}",
                                        palette.get().skill_card,
                                    )
                                }
                                style=stagger_style(i)
                            >
                                <h4 class="text-xl font-semibold mb-4 flex items-center">
                                    <span class=move || format!("mr-2 {}", palette.get().skill_icon)>
                                        <IconSvg icon=skill.icon class="w-6 h-6" />
                                    </span>
                                    {skill.title.as_str()}
                                </h4>
                                <p class=move || palette.get().body_text>
                                    {skill.description.as_str()}
                                </p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
