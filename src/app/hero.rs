use leptos::prelude::*;

use crate::keys;
use crate::sections::{CONTACT, HERO, WORK};

use super::i18n::use_i18n;
use super::scroll::scroll_to_section;

#[component]
pub fn Hero() -> impl IntoView {
    let i18n = use_i18n();

    // anchors keep working without wasm; with it they scroll smoothly
    let jump = move |id: &'static str| {
        move |ev: leptos::ev::MouseEvent| {
            ev.prevent_default();
            scroll_to_section(id);
        }
    };

    view! {
        <section id=HERO.id class="min-h-screen flex items-center justify-center px-6 md:px-12">
            <div class="max-w-6xl w-full">
                <div class="mb-8">
                    <span class="text-sm tracking-wider text-gray-500 uppercase">
                        {i18n.tr(keys::hero::BADGE)}
                    </span>
                </div>
                <h1 class="text-6xl md:text-8xl lg:text-9xl font-bold mb-8 leading-none tracking-tight">
                    {i18n.tr(keys::hero::NAME)}
                </h1>
                <p class="text-2xl md:text-4xl text-gray-600 mb-12 max-w-3xl leading-relaxed">
                    {i18n.tr(keys::hero::TAGLINE)}
                </p>
                <div class="flex gap-6 text-sm">
                    <a
                        href=format!("#{}", CONTACT.id)
                        on:click=jump(CONTACT.id)
                        class="minimal-underline text-black font-medium"
                    >
                        {i18n.tr(keys::hero::CTA_CONTACT)}
                    </a>
                    <a
                        href=format!("#{}", WORK.id)
                        on:click=jump(WORK.id)
                        class="minimal-underline text-gray-500 font-medium"
                    >
                        {i18n.tr(keys::hero::CTA_WORK)}
                    </a>
                </div>
            </div>
        </section>
    }
}
