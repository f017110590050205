mod about;
mod contact;
mod experience;
mod footer;
mod hero;
pub mod i18n;
mod locale_switcher;
mod navigation;
mod projects;
pub mod scroll;
mod skills;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, hooks::use_location, path};

use crate::i18n::{Locale, Translations, DEFAULT_LOCALE};
use crate::keys;
use crate::sections::{MAIN_CONTENT_ID, SECTIONS};

use about::About;
use contact::Contact;
use experience::Experience;
use footer::Footer;
use hero::Hero;
use i18n::{provide_i18n, use_i18n};
use navigation::Navigation;
use projects::Projects;
use scroll::use_scroll_tracker;
use skills::Skills;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html>
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1, maximum-scale=5" />
                <meta name="theme-color" content="#2563eb" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title formatter=|title| format!("{title} | Thomas Grandjean") />
        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/") view=RootRedirect />
                <Route path=path!("/en") view=|| view! { <LocalePage locale=Locale::En /> } />
                <Route path=path!("/fr") view=|| view! { <LocalePage locale=Locale::Fr /> } />
            </Routes>
        </Router>
    }
}

#[component]
fn RootRedirect() -> impl IntoView {
    view! { <Redirect path=DEFAULT_LOCALE.home_route() /> }
}

/// Provides translations for one locale's copy of the page.
#[component]
fn LocalePage(locale: Locale) -> impl IntoView {
    provide_i18n(Signal::stored(locale));

    view! { <Portfolio /> }
}

#[component]
fn Portfolio() -> impl IntoView {
    let i18n = use_i18n();
    let scroll = use_scroll_tracker(&SECTIONS);

    view! {
        <Html attr:lang=move || i18n.locale().code() />
        <Title text=i18n.tr(keys::meta::TITLE) />
        <Meta name="description" content=i18n.tr(keys::meta::DESCRIPTION) />
        <Navigation progress=scroll.progress active=scroll.active />
        <main id=MAIN_CONTENT_ID class="bg-white">
            <Hero />
            <About />
            <Skills />
            <Experience />
            <Projects />
            <Contact />
        </main>
        <Footer />
    }
    .into_any()
}

/// Unknown routes and unsupported locales. Rendered in the default locale.
#[component]
fn NotFound() -> impl IntoView {
    let location = use_location();
    log::warn!("no page for {}", location.pathname.get_untracked());
    #[cfg(feature = "ssr")]
    {
        if let Some(res) = use_context::<leptos_axum::ResponseOptions>() {
            res.set_status(http::StatusCode::NOT_FOUND);
        }
    }
    let bundle = Translations::get(DEFAULT_LOCALE);

    view! {
        <Title text=bundle.text(keys::not_found::TITLE) />
        <main class="min-h-screen flex flex-col items-center justify-center gap-6 px-6 text-center">
            <h1 class="text-5xl font-bold">"404"</h1>
            <p class="text-2xl">{bundle.text(keys::not_found::TITLE)}</p>
            <p class="text-gray-500">{bundle.text(keys::not_found::BODY)}</p>
            <a href=DEFAULT_LOCALE.home_route() class="minimal-underline font-medium">
                {bundle.text(keys::not_found::HOME)}
            </a>
        </main>
    }
}
