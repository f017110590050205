use leptos::prelude::*;

use crate::keys;

use super::contact::{EMAIL, GITHUB, LINKEDIN};
use super::i18n::use_i18n;

const BUILD_YEAR: &str = env!("BUILD_YEAR");

#[component]
pub fn Footer() -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <footer class="px-6 md:px-12 py-12 border-t border-gray-200">
            <div class="max-w-6xl w-full mx-auto flex flex-col sm:flex-row gap-4 justify-between items-center text-sm text-gray-500">
                <p>{format!("© {BUILD_YEAR} ")} {i18n.tr(keys::hero::NAME)}</p>
                <div class="flex gap-4">
                    <a href=format!("mailto:{EMAIL}") aria-label="Email">"Email"</a>
                    <a href=GITHUB target="_blank" rel="noopener noreferrer">"GitHub"</a>
                    <a href=LINKEDIN target="_blank" rel="noopener noreferrer">"LinkedIn"</a>
                </div>
                <p>{i18n.tr(keys::footer::BUILT_WITH)}</p>
            </div>
        </footer>
    }
}
