//! Records rendered by the about, skills and projects sections. They are
//! read from the locale files, so every locale carries its own copy.

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CoreValue {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SkillGroup {
    pub title: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub link: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{Locale, Translations};

    #[test]
    fn locale_files_carry_every_record_list() {
        for locale in Locale::ALL {
            let bundle = Translations::load(locale).expect("locale file should parse");
            let stats: Vec<Stat> = bundle.records("about.stats").unwrap();
            let values: Vec<CoreValue> = bundle.records("about.values").unwrap();
            let groups: Vec<SkillGroup> = bundle.records("skills.groups").unwrap();
            let projects: Vec<Project> = bundle.records("projects.items").unwrap();
            assert!(!stats.is_empty());
            assert!(!values.is_empty());
            assert!(groups.iter().all(|g| !g.items.is_empty()));
            assert!(projects.iter().any(|p| p.link.is_none()));
        }
    }

    #[test]
    fn project_link_and_tags_are_optional() {
        let project: Project =
            serde_json::from_str(r#"{"title":"t","description":"d"}"#).unwrap();
        assert!(project.tags.is_empty());
        assert_eq!(project.link, None);
    }
}
