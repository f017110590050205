use leptos::prelude::*;

use crate::content::Project;
use crate::keys;
use crate::sections::PROJECTS;

use super::i18n::use_i18n;

#[component]
pub fn Projects() -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <section id=PROJECTS.id class="px-6 md:px-12 py-32">
            <div class="max-w-6xl w-full mx-auto">
                <h2 class="text-5xl md:text-6xl font-bold mb-20">{i18n.tr(keys::projects::TITLE)}</h2>
                <div class="grid md:grid-cols-3 gap-8">
                    {move || {
                        i18n.list::<Project>(keys::projects::ITEMS)
                            .into_iter()
                            .map(|project| view! { <ProjectCard project /> })
                            .collect_view()
                    }}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <article class="group flex flex-col gap-4 p-6 rounded-lg border border-gray-200 hover:border-gray-400 transition-colors">
            <h3 class="text-2xl font-bold">{project.title}</h3>
            <p class="text-gray-500 leading-relaxed flex-grow">{project.description}</p>
            <div class="flex flex-wrap gap-2">
                {project
                    .tags
                    .into_iter()
                    .map(|tag| view! { <span class="rounded-md px-2 py-1 bg-gray-100 text-sm">{tag}</span> })
                    .collect_view()}
            </div>
            {project
                .link
                .map(|href| {
                    view! {
                        <a
                            href=href
                            target="_blank"
                            rel="noopener noreferrer"
                            class="minimal-underline text-sm font-medium"
                        >
                            {i18n.tr(keys::projects::VISIT)}
                            " ↗"
                        </a>
                    }
                })}
        </article>
    }
}
