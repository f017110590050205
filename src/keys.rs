//! Translation keys used by the page. Each resolves in every locale file.

pub mod meta {
    pub const TITLE: &str = "meta.title";
    pub const DESCRIPTION: &str = "meta.description";
}

pub mod nav {
    pub const HOME: &str = "nav.home";
    pub const ABOUT: &str = "nav.about";
    pub const EXPERIENCE: &str = "nav.experience";
    pub const PROJECTS: &str = "nav.projects";
    pub const CONTACT: &str = "nav.contact";
    pub const MENU: &str = "nav.menu";
    pub const SKIP: &str = "nav.skip";
    pub const SWITCH_LANGUAGE: &str = "nav.switch_language";
}

pub mod hero {
    pub const NAME: &str = "hero.name";
    pub const BADGE: &str = "hero.badge";
    pub const TAGLINE: &str = "hero.tagline";
    pub const CTA_CONTACT: &str = "hero.cta_contact";
    pub const CTA_WORK: &str = "hero.cta_work";
}

pub mod about {
    pub const TITLE: &str = "about.title";
    pub const INTRO: &str = "about.intro";
    pub const CURRENT: &str = "about.current";
    pub const STATS: &str = "about.stats";
    pub const VALUES_TITLE: &str = "about.values_title";
    pub const VALUES: &str = "about.values";
}

pub mod skills {
    pub const TITLE: &str = "skills.title";
    pub const GROUPS: &str = "skills.groups";
}

pub mod experience {
    pub const TITLE: &str = "experience.title";
    pub const JOBS: &str = "experience.jobs";
    pub const TIMELINE_HINT: &str = "experience.timeline_hint";
    pub const SKILLS_LABEL: &str = "experience.skills_label";
}

pub mod projects {
    pub const TITLE: &str = "projects.title";
    pub const ITEMS: &str = "projects.items";
    pub const VISIT: &str = "projects.visit";
}

pub mod contact {
    pub const NAME: &str = "contact.name";
    pub const EMAIL: &str = "contact.email";
    pub const MESSAGE: &str = "contact.message";
    pub const NAME_PLACEHOLDER: &str = "contact.name_placeholder";
    pub const EMAIL_PLACEHOLDER: &str = "contact.email_placeholder";
    pub const MESSAGE_PLACEHOLDER: &str = "contact.message_placeholder";
    pub const TITLE: &str = "contact.title";
    pub const INTRO: &str = "contact.intro";
    pub const DIRECT: &str = "contact.direct";
    pub const SENDING: &str = "contact.sending";
    pub const SEND: &str = "contact.send";
    pub const SUCCESS: &str = "contact.success";
    pub const ERROR: &str = "contact.error";
}

pub mod footer {
    pub const BUILT_WITH: &str = "footer.built_with";
}

pub mod not_found {
    pub const TITLE: &str = "not_found.title";
    pub const BODY: &str = "not_found.body";
    pub const HOME: &str = "not_found.home";
}

/// Keys holding plain strings.
pub const TEXT: &[&str] = &[
    meta::TITLE,
    meta::DESCRIPTION,
    nav::HOME,
    nav::ABOUT,
    nav::EXPERIENCE,
    nav::PROJECTS,
    nav::CONTACT,
    nav::MENU,
    nav::SKIP,
    nav::SWITCH_LANGUAGE,
    hero::NAME,
    hero::BADGE,
    hero::TAGLINE,
    hero::CTA_CONTACT,
    hero::CTA_WORK,
    about::TITLE,
    about::INTRO,
    about::CURRENT,
    about::VALUES_TITLE,
    skills::TITLE,
    experience::TITLE,
    experience::TIMELINE_HINT,
    experience::SKILLS_LABEL,
    projects::TITLE,
    projects::VISIT,
    contact::NAME,
    contact::EMAIL,
    contact::MESSAGE,
    contact::NAME_PLACEHOLDER,
    contact::EMAIL_PLACEHOLDER,
    contact::MESSAGE_PLACEHOLDER,
    contact::TITLE,
    contact::INTRO,
    contact::DIRECT,
    contact::SENDING,
    contact::SEND,
    contact::SUCCESS,
    contact::ERROR,
    footer::BUILT_WITH,
    not_found::TITLE,
    not_found::BODY,
    not_found::HOME,
];

/// Keys holding arrays of records.
pub const LISTS: &[&str] = &[
    about::STATS,
    about::VALUES,
    skills::GROUPS,
    experience::JOBS,
    projects::ITEMS,
];

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use super::*;
    use crate::i18n::{Locale, Translations};

    #[test]
    fn text_keys_resolve_in_every_locale() {
        for locale in Locale::ALL {
            let bundle = Translations::load(locale).expect("locale file should parse");
            for key in TEXT {
                let text = bundle.lookup(key);
                assert!(
                    text.is_ok_and(|t| !t.trim().is_empty()),
                    "{locale}: {key} is missing or blank"
                );
            }
        }
    }

    #[test]
    fn list_keys_resolve_in_every_locale() {
        for locale in Locale::ALL {
            let bundle = Translations::load(locale).expect("locale file should parse");
            for key in LISTS {
                let records: Vec<Value> = bundle
                    .records(key)
                    .unwrap_or_else(|e| panic!("{locale}: {key}: {e}"));
                assert!(!records.is_empty(), "{locale}: {key} is empty");
            }
        }
    }

    #[test]
    fn keys_are_distinct() {
        let mut all: Vec<&str> = TEXT.iter().chain(LISTS).copied().collect();
        let total = all.len();
        all.sort_unstable();
        all.dedup();
        assert_eq!(all.len(), total);
    }
}
