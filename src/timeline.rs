//! Experience entries and the role timeline geometry.

use std::collections::HashMap;

use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimelineError {
    #[error("role '{title}' ends ({end}) before it starts ({start})")]
    InvertedRole { title: String, start: u16, end: u16 },
    #[error("job has no roles")]
    Empty,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Role {
    pub title: String,
    pub start: u16,
    pub end: u16,
    pub description: String,
    #[serde(default)]
    pub skills: Vec<String>,
}

impl Role {
    fn validate(&self) -> Result<(), TimelineError> {
        if self.start > self.end {
            return Err(TimelineError::InvertedRole {
                title: self.title.clone(),
                start: self.start,
                end: self.end,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Job {
    pub company: String,
    #[serde(default)]
    pub location: Option<String>,
    pub period: String,
    pub roles: Vec<Role>,
}

impl Job {
    /// Only jobs with several roles get a timeline.
    pub fn has_timeline(&self) -> bool {
        self.roles.len() > 1
    }

    pub fn timeline(&self) -> Result<Timeline, TimelineError> {
        Timeline::for_roles(&self.roles)
    }
}

/// Horizontal placement of one role, in percent of the axis width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bar {
    pub left: f64,
    pub width: f64,
}

/// Shared year axis for the roles of one job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeline {
    first_year: u16,
    last_year: u16,
}

impl Timeline {
    /// Axis between two years, given in either order.
    pub fn new(a: u16, b: u16) -> Self {
        Self {
            first_year: a.min(b),
            last_year: a.max(b),
        }
    }

    /// Axis covering every valid role. Inverted roles are logged and left
    /// out; if none remain the job has no timeline.
    pub fn for_roles(roles: &[Role]) -> Result<Self, TimelineError> {
        let mut valid = roles.iter().filter(|r| match r.validate() {
            Ok(()) => true,
            Err(e) => {
                log::warn!("{e}");
                false
            }
        });
        let first = valid.next().ok_or(TimelineError::Empty)?;
        let (first_year, last_year) = valid.fold((first.start, first.end), |(lo, hi), r| {
            (lo.min(r.start), hi.max(r.end))
        });
        Ok(Self::new(first_year, last_year))
    }

    pub fn first_year(&self) -> u16 {
        self.first_year
    }

    pub fn last_year(&self) -> u16 {
        self.last_year
    }

    /// Number of years on the axis, never less than one.
    pub fn span(&self) -> u16 {
        self.last_year.saturating_sub(self.first_year).max(1)
    }

    /// Position of `role` on the axis, in percent. Inverted roles have no bar.
    pub fn bar(&self, role: &Role) -> Option<Bar> {
        role.validate().ok()?;
        let span = f64::from(self.span());
        let start = role.start.clamp(self.first_year, self.last_year);
        let end = role.end.clamp(start, self.last_year);
        let width = (f64::from((end - start).max(1)) / span * 100.0).min(100.0);
        let left = (f64::from(start - self.first_year) / span * 100.0).min(100.0 - width);
        Some(Bar { left, width })
    }

    /// Years to label under the axis.
    pub fn ticks(&self) -> Vec<u16> {
        if self.first_year == self.last_year {
            vec![self.first_year]
        } else {
            vec![self.first_year, self.last_year]
        }
    }
}

/// Which role detail panel is open, per job index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpandedRoles {
    open: HashMap<usize, usize>,
}

impl ExpandedRoles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open `role` on `job`, replacing whatever was open there. Toggling the
    /// open role closes it.
    pub fn toggle(&mut self, job: usize, role: usize) {
        if self.open.get(&job) == Some(&role) {
            self.open.remove(&job);
        } else {
            self.open.insert(job, role);
        }
    }

    pub fn expanded(&self, job: usize) -> Option<usize> {
        self.open.get(&job).copied()
    }

    pub fn is_expanded(&self, job: usize, role: usize) -> bool {
        self.expanded(job) == Some(role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn role(title: &str, start: u16, end: u16) -> Role {
        Role {
            title: title.to_string(),
            start,
            end,
            description: String::new(),
            skills: vec![],
        }
    }

    #[test]
    fn axis_spans_all_roles() {
        let roles = [role("a", 2018, 2020), role("b", 2020, 2024), role("c", 2016, 2019)];
        let timeline = Timeline::for_roles(&roles).unwrap();
        assert_eq!(timeline.first_year(), 2016);
        assert_eq!(timeline.last_year(), 2024);
        assert_eq!(timeline.span(), 8);
        assert_eq!(timeline.ticks(), vec![2016, 2024]);

        let bar = timeline.bar(&roles[1]).unwrap();
        assert_eq!(bar.left, 50.0);
        assert_eq!(bar.width, 50.0);
    }

    #[test]
    fn zero_length_axis_gets_minimum_span() {
        let roles = [role("a", 2021, 2021), role("b", 2021, 2021), role("c", 2021, 2021)];
        let timeline = Timeline::for_roles(&roles).unwrap();
        assert_eq!(timeline.span(), 1);
        for r in &roles {
            let bar = timeline.bar(r).unwrap();
            assert!(bar.left.is_finite() && bar.width.is_finite());
            assert!(bar.width > 0.0);
            assert!(bar.left + bar.width <= 100.0);
        }
    }

    #[test]
    fn single_year_role_stays_on_axis() {
        let roles = [role("a", 2019, 2023), role("b", 2023, 2023)];
        let timeline = Timeline::for_roles(&roles).unwrap();
        let bar = timeline.bar(&roles[1]).unwrap();
        assert_eq!(bar.width, 25.0);
        assert_eq!(bar.left, 75.0);
    }

    #[test]
    fn inverted_roles_are_rejected() {
        let bad = role("bad", 2024, 2020);
        assert_eq!(
            bad.validate(),
            Err(TimelineError::InvertedRole {
                title: "bad".to_string(),
                start: 2024,
                end: 2020
            })
        );
        let timeline = Timeline::for_roles(&[bad.clone(), role("ok", 2019, 2021)]).unwrap();
        assert_eq!((timeline.first_year(), timeline.last_year()), (2019, 2021));
        assert_eq!(timeline.bar(&bad), None);
        assert_eq!(Timeline::for_roles(&[bad]), Err(TimelineError::Empty));
        assert_eq!(Timeline::for_roles(&[]), Err(TimelineError::Empty));
    }

    #[test]
    fn reversed_bounds_are_ordered() {
        let timeline = Timeline::new(2024, 2020);
        assert_eq!((timeline.first_year(), timeline.last_year()), (2020, 2024));
        assert_eq!(timeline.span(), 4);
        assert_eq!(timeline.ticks(), vec![2020, 2024]);

        let bar = timeline.bar(&role("a", 2022, 2024)).unwrap();
        assert_eq!(bar.left, 50.0);
        assert_eq!(bar.width, 50.0);

        // roles outside the axis are pulled onto it
        let bar = timeline.bar(&role("early", 2010, 2012)).unwrap();
        assert!(bar.left >= 0.0 && bar.left + bar.width <= 100.0);
    }

    #[test]
    fn opening_second_role_closes_first() {
        let mut expanded = ExpandedRoles::new();
        expanded.toggle(0, 1);
        assert!(expanded.is_expanded(0, 1));
        expanded.toggle(0, 2);
        assert!(!expanded.is_expanded(0, 1));
        assert_eq!(expanded.expanded(0), Some(2));
        expanded.toggle(0, 2);
        assert_eq!(expanded.expanded(0), None);
    }

    #[test]
    fn jobs_are_independent() {
        let mut expanded = ExpandedRoles::new();
        expanded.toggle(0, 0);
        expanded.toggle(1, 3);
        assert_eq!(expanded.expanded(0), Some(0));
        assert_eq!(expanded.expanded(1), Some(3));
        assert_eq!(expanded.expanded(2), None);
    }

    #[test]
    fn jobs_deserialize_from_locale_files() {
        use crate::i18n::{Locale, Translations};

        for locale in Locale::ALL {
            let bundle = Translations::load(locale).expect("locale file should parse");
            let jobs: Vec<Job> = bundle
                .records("experience.jobs")
                .expect("jobs should deserialize");
            assert!(!jobs.is_empty());
            assert!(jobs.iter().any(Job::has_timeline));
            for job in &jobs {
                assert!(job.timeline().is_ok(), "{} has a bad timeline", job.company);
            }
        }
    }
}
