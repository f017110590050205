use crate::keys;

/// A navigable region of the page. `id` is the DOM id of the section element
/// and must match exactly for both scrolling and position probing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub id: &'static str,
    pub label_key: &'static str,
}

impl Section {
    pub const fn new(id: &'static str, label_key: &'static str) -> Self {
        Self { id, label_key }
    }
}

pub const HERO: Section = Section::new("hero", keys::nav::HOME);
pub const ABOUT: Section = Section::new("about", keys::nav::ABOUT);
pub const WORK: Section = Section::new("work", keys::nav::EXPERIENCE);
pub const PROJECTS: Section = Section::new("projects", keys::nav::PROJECTS);
pub const CONTACT: Section = Section::new("contact", keys::nav::CONTACT);

/// Navigation order. The first entry is what the tracker falls back to at
/// the top of the page.
pub static SECTIONS: [Section; 5] = [HERO, ABOUT, WORK, PROJECTS, CONTACT];

/// Id of the `<main>` element targeted by the skip link.
pub const MAIN_CONTENT_ID: &str = "main-content";

pub fn find(id: &str) -> Option<&'static Section> {
    SECTIONS.iter().find(|s| s.id == id)
}
