use leptos::prelude::*;

use crate::content::{CoreValue, Stat};
use crate::keys;
use crate::sections::ABOUT;

use super::i18n::use_i18n;

#[component]
pub fn About() -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <section id=ABOUT.id class="min-h-screen flex items-center px-6 md:px-12 py-32">
            <div class="max-w-6xl w-full mx-auto grid md:grid-cols-2 gap-16">
                <h2 class="text-5xl md:text-6xl font-bold mb-6">{i18n.tr(keys::about::TITLE)}</h2>
                <div class="space-y-6">
                    <p class="text-xl text-gray-600 leading-relaxed">{i18n.tr(keys::about::INTRO)}</p>
                    <p class="text-xl text-gray-600 leading-relaxed">{i18n.tr(keys::about::CURRENT)}</p>
                    <div class="grid grid-cols-2 gap-8 pt-8">
                        {move || {
                            i18n.list::<Stat>(keys::about::STATS)
                                .into_iter()
                                .map(|stat| {
                                    view! {
                                        <div>
                                            <div class="text-4xl font-bold mb-2">{stat.value}</div>
                                            <div class="text-sm text-gray-500 uppercase tracking-wider">
                                                {stat.label}
                                            </div>
                                        </div>
                                    }
                                })
                                .collect_view()
                        }}
                    </div>
                    <h3 class="text-sm uppercase tracking-wider text-gray-500 pt-8">
                        {i18n.tr(keys::about::VALUES_TITLE)}
                    </h3>
                    <ul class="space-y-4">
                        {move || {
                            i18n.list::<CoreValue>(keys::about::VALUES)
                                .into_iter()
                                .map(|value| {
                                    view! {
                                        <li>
                                            <div class="font-medium">{value.title}</div>
                                            <p class="text-gray-500">{value.description}</p>
                                        </li>
                                    }
                                })
                                .collect_view()
                        }}
                    </ul>
                </div>
            </div>
        </section>
    }
}
