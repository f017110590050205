use leptos::prelude::*;

use crate::keys;
use crate::navigation::MenuState;
use crate::sections::{MAIN_CONTENT_ID, SECTIONS};

use super::i18n::use_i18n;
use super::locale_switcher::LocaleSwitcher;
use super::scroll::scroll_to_section;

fn nav_class(active: bool, mobile: bool) -> &'static str {
    match (active, mobile) {
        (true, false) => "px-4 py-2 rounded-full text-sm font-medium transition-all duration-300 bg-blue-600 text-white shadow-lg shadow-blue-600/20",
        (false, false) => "px-4 py-2 rounded-full text-sm font-medium transition-all duration-300 text-gray-600 hover:text-blue-600 hover:bg-blue-50",
        (true, true) => "px-4 py-3 rounded-lg text-left font-medium transition-all duration-300 min-h-[44px] bg-blue-600 text-white shadow-lg shadow-blue-600/20",
        (false, true) => "px-4 py-3 rounded-lg text-left font-medium transition-all duration-300 min-h-[44px] text-gray-600 hover:bg-blue-50 hover:text-blue-600",
    }
}

#[component]
pub fn Navigation(progress: Signal<f64>, active: Signal<Option<&'static str>>) -> impl IntoView {
    let i18n = use_i18n();
    let menu = RwSignal::new(MenuState::Closed);
    let close_menu = move || menu.update(|m| *m = m.closed());

    let go = move |id: &'static str| {
        scroll_to_section(id);
        close_menu();
    };

    let items = move |mobile: bool| {
        SECTIONS
            .iter()
            .map(|section| {
                let id = section.id;
                let is_active = move || active.get() == Some(id);
                view! {
                    <button
                        on:click=move |_| go(id)
                        class=move || nav_class(is_active(), mobile)
                        aria-current=move || is_active().then_some("true")
                    >
                        {i18n.tr(section.label_key)}
                    </button>
                }
            })
            .collect_view()
    };

    view! {
        <div
            class="fixed top-0 left-0 right-0 h-1 bg-gradient-to-r from-blue-600 via-blue-500 to-blue-400 z-50 origin-left"
            style:transform=move || format!("scaleX({})", progress.get())
        ></div>

        <nav class="hidden md:flex items-center gap-2 fixed top-8 left-1/2 -translate-x-1/2 z-40">
            <div class="flex gap-1 px-2 py-2 rounded-full bg-white/80 backdrop-blur-md border border-gray-200 shadow-lg">
                {items(false)}
            </div>
            <LocaleSwitcher />
        </nav>

        <button
            on:click=move |_| menu.update(|m| *m = m.toggled())
            class="md:hidden fixed top-6 left-6 z-50 p-3 rounded-full bg-white border-2 border-blue-200 shadow-lg hover:border-blue-400 hover:bg-blue-50 transition-colors"
            aria-label=i18n.tr(keys::nav::MENU)
            aria-expanded=move || menu.get().is_open().to_string()
        >
            {move || if menu.get().is_open() { "✕" } else { "☰" }}
        </button>

        <Show when=move || menu.get().is_open()>
            <div
                class="md:hidden fixed inset-0 bg-black/50 backdrop-blur-sm z-40"
                on:click=move |_| close_menu()
            >
                <div
                    class="absolute left-0 top-0 bottom-0 w-64 bg-white shadow-2xl p-6"
                    on:click=|ev| ev.stop_propagation()
                >
                    <div class="flex flex-col gap-2 mt-16">
                        {items(true)}
                        <div class="mt-4 pt-4 border-t border-gray-200">
                            <LocaleSwitcher full=true on_switch=Callback::new(move |_: ()| close_menu()) />
                        </div>
                    </div>
                </div>
            </div>
        </Show>

        <a
            href=format!("#{MAIN_CONTENT_ID}")
            class="sr-only focus:not-sr-only focus:absolute focus:top-4 focus:left-4 focus:z-50 focus:px-4 focus:py-2 focus:bg-black focus:text-white focus:rounded-lg"
        >
            {i18n.tr(keys::nav::SKIP)}
        </a>
    }
}
