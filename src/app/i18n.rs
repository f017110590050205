use std::sync::Arc;

use leptos::prelude::*;
use serde::de::DeserializeOwned;

use crate::i18n::{Locale, Translations};

/// Translation lookups for the active locale, provided as context by the
/// locale page.
#[derive(Debug, Clone, Copy)]
pub struct I18n {
    locale: Signal<Locale>,
    bundle: Memo<Arc<Translations>>,
}

impl I18n {
    pub fn locale(&self) -> Locale {
        self.locale.get()
    }

    pub fn locale_untracked(&self) -> Locale {
        self.locale.get_untracked()
    }

    pub fn t(&self, key: &str) -> String {
        self.bundle.with(|b| b.text(key))
    }

    /// Reactive text for use directly in a view or attribute.
    pub fn tr(self, key: &'static str) -> impl Fn() -> String + Copy + Send + Sync + 'static {
        move || self.t(key)
    }

    pub fn list<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        self.bundle.with(|b| b.list(key))
    }
}

pub fn provide_i18n(locale: Signal<Locale>) -> I18n {
    let bundle = Memo::new(move |_| Translations::get(locale.get()));
    let i18n = I18n { locale, bundle };
    provide_context(i18n);
    i18n
}

pub fn use_i18n() -> I18n {
    expect_context::<I18n>()
}
