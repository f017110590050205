use leptos::{either::Either, prelude::*};

use crate::keys;
use crate::sections::WORK;
use crate::timeline::{ExpandedRoles, Job, Role, Timeline};

use super::i18n::use_i18n;

#[component]
pub fn Experience() -> impl IntoView {
    let i18n = use_i18n();
    let expanded = RwSignal::new(ExpandedRoles::new());

    view! {
        <section id=WORK.id class="min-h-screen px-6 md:px-12 py-32">
            <div class="max-w-6xl w-full mx-auto">
                <h2 class="text-5xl md:text-6xl font-bold mb-20">{i18n.tr(keys::experience::TITLE)}</h2>
                <div class="space-y-24">
                    {move || {
                        i18n.list::<Job>(keys::experience::JOBS)
                            .into_iter()
                            .enumerate()
                            .map(|(index, job)| view! { <JobEntry job index expanded /> })
                            .collect_view()
                    }}
                </div>
            </div>
        </section>
    }
}

#[component]
fn JobEntry(job: Job, index: usize, expanded: RwSignal<ExpandedRoles>) -> impl IntoView {
    let timeline = if job.has_timeline() {
        job.timeline()
            .inspect_err(|e| log::warn!("{}: {e}", job.company))
            .ok()
    } else {
        None
    };

    view! {
        <div class="grid md:grid-cols-4 gap-8">
            <div class="text-sm text-gray-500 uppercase tracking-wider">
                <div>{job.period.clone()}</div>
                {job.location.clone().map(|l| view! { <div class="normal-case mt-1">{l}</div> })}
            </div>
            <div class="md:col-span-3 space-y-4">
                <h3 class="text-2xl font-bold">{job.company.clone()}</h3>
                {match timeline {
                    Some(timeline) => {
                        Either::Left(
                            view! { <RoleTimeline roles=job.roles timeline index expanded /> },
                        )
                    }
                    None => Either::Right(view! { <RoleList roles=job.roles /> }),
                }}
            </div>
        </div>
    }
}

/// Proportional bars on a shared year axis; clicking a bar opens its details.
#[component]
fn RoleTimeline(
    roles: Vec<Role>,
    timeline: Timeline,
    index: usize,
    expanded: RwSignal<ExpandedRoles>,
) -> impl IntoView {
    let i18n = use_i18n();
    let bars = roles
        .iter()
        .enumerate()
        .filter_map(|(role_index, role)| Some((role_index, role, timeline.bar(role)?)))
        .map(|(role_index, role, bar)| {
            let is_open = move || expanded.with(|e| e.is_expanded(index, role_index));
            view! {
                <div class="relative h-10">
                    <button
                        class=move || {
                            if is_open() {
                                "absolute top-0 h-10 rounded-md px-3 text-left text-sm font-medium truncate bg-black text-white"
                            } else {
                                "absolute top-0 h-10 rounded-md px-3 text-left text-sm font-medium truncate bg-gray-100 hover:bg-gray-200"
                            }
                        }
                        style:left=format!("{:.2}%", bar.left)
                        style:width=format!("{:.2}%", bar.width)
                        aria-expanded=move || is_open().to_string()
                        on:click=move |_| expanded.update(|e| e.toggle(index, role_index))
                    >
                        {role.title.clone()}
                    </button>
                </div>
            }
        })
        .collect_view();

    let ticks = timeline.ticks();
    view! {
        <p class="text-sm text-gray-500">{i18n.tr(keys::experience::TIMELINE_HINT)}</p>
        <div class="space-y-2">{bars}</div>
        <div class="flex justify-between text-xs text-gray-400">
            {ticks.into_iter().map(|year| view! { <span>{year}</span> }).collect_view()}
        </div>
        {move || {
            expanded
                .with(|e| e.expanded(index))
                .and_then(|i| roles.get(i).cloned())
                .map(|role| view! { <RoleDetail role /> })
        }}
    }
}

#[component]
fn RoleList(roles: Vec<Role>) -> impl IntoView {
    roles
        .into_iter()
        .map(|role| view! { <RoleDetail role /> })
        .collect_view()
}

#[component]
fn RoleDetail(role: Role) -> impl IntoView {
    let i18n = use_i18n();
    let years = if role.start == role.end {
        role.start.to_string()
    } else {
        format!("{} — {}", role.start, role.end)
    };

    view! {
        <div class="space-y-3 border-l-2 border-black pl-4">
            <div class="flex items-baseline justify-between">
                <h4 class="text-xl font-semibold">{role.title}</h4>
                <span class="text-sm text-gray-500">{years}</span>
            </div>
            <p class="text-gray-500 leading-relaxed">{role.description}</p>
            <div class="flex flex-wrap gap-2" aria-label=i18n.tr(keys::experience::SKILLS_LABEL)>
                {role
                    .skills
                    .into_iter()
                    .map(|skill| {
                        view! { <span class="rounded-md px-2 py-1 bg-gray-100 text-sm">{skill}</span> }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
