use leptos::prelude::*;

use crate::content::SkillGroup;
use crate::keys;

use super::i18n::use_i18n;

/// Not a navigation target; the tracker keeps the previous section active
/// while this one is in view.
#[component]
pub fn Skills() -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <section id="skills" class="px-6 md:px-12 py-32 bg-gray-50">
            <div class="max-w-6xl w-full mx-auto">
                <h2 class="text-5xl md:text-6xl font-bold mb-20">{i18n.tr(keys::skills::TITLE)}</h2>
                <div class="grid md:grid-cols-3 gap-16">
                    {move || {
                        i18n.list::<SkillGroup>(keys::skills::GROUPS)
                            .into_iter()
                            .map(|group| {
                                view! {
                                    <div>
                                        <h3 class="text-sm uppercase tracking-wider text-gray-500 mb-6">
                                            {group.title}
                                        </h3>
                                        <ul class="space-y-3 text-lg">
                                            {group
                                                .items
                                                .into_iter()
                                                .map(|item| view! { <li>{item}</li> })
                                                .collect_view()}
                                        </ul>
                                    </div>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </div>
        </section>
    }
}
