use leptos::{ev::SubmitEvent, prelude::*};
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

use crate::contact::{
    deliver, ContactError, ContactFields, ContactForm, ContactStatus, Field, RESET_DELAY,
    SEND_DELAY,
};
use crate::keys;
use crate::sections::CONTACT;

use super::i18n::use_i18n;

pub const EMAIL: &str = "hello@thomasgrandjean.dev";
pub const GITHUB: &str = "https://github.com/thomasgrandjean";
pub const LINKEDIN: &str = "https://linkedin.com/in/thomasgrandjean";

fn label_key(field: Field) -> &'static str {
    match field {
        Field::Name => keys::contact::NAME,
        Field::Email => keys::contact::EMAIL,
        Field::Message => keys::contact::MESSAGE,
    }
}

fn placeholder_key(field: Field) -> &'static str {
    match field {
        Field::Name => keys::contact::NAME_PLACEHOLDER,
        Field::Email => keys::contact::EMAIL_PLACEHOLDER,
        Field::Message => keys::contact::MESSAGE_PLACEHOLDER,
    }
}

#[component]
pub fn Contact() -> impl IntoView {
    let i18n = use_i18n();
    let form = RwSignal::new(ContactForm::new());

    // both timers are cancelled when this component is disposed
    let UseTimeoutFnReturn {
        start: start_reset, ..
    } = use_timeout_fn(
        move |_: ()| form.update(ContactForm::reset),
        RESET_DELAY.as_secs_f64() * 1000.0,
    );
    let UseTimeoutFnReturn {
        start: start_send, ..
    } = use_timeout_fn(
        move |fields: ContactFields| {
            let result = deliver(&fields);
            if let Err(e) = &result {
                log::warn!("contact delivery failed: {e}");
            }
            form.update(|f| f.complete(result));
            start_reset(());
        },
        SEND_DELAY.as_secs_f64() * 1000.0,
    );

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if let Some(fields) = form.try_update(ContactForm::begin_submit).flatten() {
            log::debug!("sending contact message");
            start_send(fields);
        }
    };
    let sending = move || form.with(ContactForm::is_sending);

    view! {
        <section id=CONTACT.id class="min-h-screen flex items-center px-6 md:px-12 py-32">
            <div class="max-w-6xl w-full mx-auto grid md:grid-cols-2 gap-16">
                <div>
                    <h2 class="text-5xl md:text-6xl font-bold mb-12">{i18n.tr(keys::contact::TITLE)}</h2>
                    <p class="text-2xl text-gray-600 mb-16 max-w-2xl">{i18n.tr(keys::contact::INTRO)}</p>
                    <p class="text-sm uppercase tracking-wider text-gray-500 mb-4">
                        {i18n.tr(keys::contact::DIRECT)}
                    </p>
                    <div class="space-y-4 text-xl font-medium">
                        <a href=format!("mailto:{EMAIL}") class="block hover:translate-x-2 transition-transform">
                            {EMAIL}
                        </a>
                        <a href=GITHUB target="_blank" rel="noopener noreferrer" class="block hover:translate-x-2 transition-transform">
                            "GitHub ↗"
                        </a>
                        <a href=LINKEDIN target="_blank" rel="noopener noreferrer" class="block hover:translate-x-2 transition-transform">
                            "LinkedIn ↗"
                        </a>
                    </div>
                </div>
                <form class="space-y-6" on:submit=on_submit>
                    <TextField form field=Field::Name kind="text" />
                    <TextField form field=Field::Email kind="email" />
                    <TextField form field=Field::Message kind="textarea" />
                    <button
                        type="submit"
                        disabled=sending
                        class="w-full px-6 py-3 rounded-md bg-black text-white font-medium disabled:opacity-50 transition-opacity"
                    >
                        {move || {
                            if sending() { i18n.t(keys::contact::SENDING) } else { i18n.t(keys::contact::SEND) }
                        }}
                    </button>
                    <div role="status" aria-live="polite">
                        {move || match form.with(|f| f.status) {
                            ContactStatus::Success => {
                                Some(
                                    view! { <p class="text-green-600">{i18n.t(keys::contact::SUCCESS)}</p> }
                                        .into_any(),
                                )
                            }
                            ContactStatus::Error(ContactError::Blank(field)) => {
                                Some(
                                    view! {
                                        <p class="text-red-600">
                                            {i18n.t(keys::contact::ERROR)} " " {i18n.t(label_key(field))}
                                        </p>
                                    }
                                        .into_any(),
                                )
                            }
                            ContactStatus::Idle | ContactStatus::Sending => None,
                        }}
                    </div>
                </form>
            </div>
        </section>
    }
}

#[component]
fn TextField(form: RwSignal<ContactForm>, field: Field, kind: &'static str) -> impl IntoView {
    let i18n = use_i18n();
    let id = format!("contact-{field}");
    let value = move || form.with(|f| f.fields.get(field).to_string());
    let on_input = move |ev: leptos::ev::Event| form.update(|f| f.edit(field, event_target_value(&ev)));
    let disabled = move || form.with(ContactForm::is_sending);
    let class = "w-full px-4 py-3 rounded-md border border-gray-300 focus:outline-none focus:ring-2 focus:ring-black disabled:bg-gray-50";

    let input = if kind == "textarea" {
        view! {
            <textarea
                id=id.clone()
                name=field.to_string()
                rows="6"
                required
                class=class
                placeholder=i18n.tr(placeholder_key(field))
                prop:value=value
                on:input=on_input
                disabled=disabled
            ></textarea>
        }
        .into_any()
    } else {
        view! {
            <input
                id=id.clone()
                name=field.to_string()
                type=kind
                required
                class=class
                placeholder=i18n.tr(placeholder_key(field))
                prop:value=value
                on:input=on_input
                disabled=disabled
            />
        }
        .into_any()
    };

    view! {
        <div class="space-y-2">
            <label for=id class="block text-sm uppercase tracking-wider text-gray-500">
                {i18n.tr(label_key(field))}
            </label>
            {input}
        </div>
    }
}
