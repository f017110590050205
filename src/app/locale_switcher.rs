use leptos::prelude::*;
use leptos_router::{
    hooks::{use_location, use_navigate},
    NavigateOptions,
};

use crate::keys;

use super::i18n::use_i18n;

/// Switch to the other locale, staying on the same route and scroll position.
#[component]
pub fn LocaleSwitcher(
    /// Show the language name next to the code (mobile menu layout).
    #[prop(optional)]
    full: bool,
    #[prop(optional, into)] on_switch: Option<Callback<()>>,
) -> impl IntoView {
    let i18n = use_i18n();
    let location = use_location();
    let navigate = use_navigate();

    let switch = move |_| {
        let next = i18n.locale_untracked().toggled();
        let route = next.localize_path(&location.pathname.get_untracked());
        log::debug!("switching locale to {next}");
        navigate(
            &route,
            NavigateOptions {
                replace: true,
                scroll: false,
                ..Default::default()
            },
        );
        if let Some(cb) = on_switch {
            cb.run(());
        }
    };

    let aria_label = move || {
        format!(
            "{} {}",
            i18n.t(keys::nav::SWITCH_LANGUAGE),
            i18n.locale().toggled().label()
        )
    };

    if full {
        view! {
            <button
                on:click=switch
                class="w-full flex items-center justify-between px-4 py-3 rounded-lg text-gray-600 hover:bg-blue-50 hover:text-blue-600 transition-all duration-300 min-h-[44px] focus-visible:ring-2 focus-visible:ring-blue-600 focus-visible:outline-none"
                aria-label=aria_label
            >
                <span class="font-medium">{move || i18n.locale().label()}</span>
                <span class="text-xs uppercase font-semibold px-2 py-1 bg-blue-50 text-blue-600 rounded">
                    {move || i18n.locale().code()}
                </span>
            </button>
        }
        .into_any()
    } else {
        view! {
            <button
                on:click=switch
                class="flex items-center gap-2 px-4 py-2 rounded-full bg-white border border-gray-200 hover:border-gray-300 transition-all shadow-sm"
                aria-label=aria_label
            >
                <span class="text-sm font-medium uppercase">{move || i18n.locale().code()}</span>
            </button>
        }
        .into_any()
    }
}
