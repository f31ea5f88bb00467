//! Class groups, their sections, and the per-group selection.
//!
//! DESIGN
//! ======
//! A group is a set of mutually exclusive options for one slot in the
//! schedule, so at most one section per group is selected. Selections are
//! keyed by group id and dropped whenever the group or section they point at
//! goes away, which keeps `selected_schedule` free of dangling entries.

#[cfg(test)]
#[path = "schedule_test.rs"]
mod schedule_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::util::schedule_format::parse_clock;

/// Credit values offered by the section form.
pub const CREDIT_CHOICES: [u8; 5] = [1, 2, 3, 4, 5];

/// Credits preselected for a new section.
pub const DEFAULT_CREDITS: u8 = 3;

/// Day of the week a section meets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
        Self::Sunday,
    ];

    /// Registrar-style single-letter code (`R` for Thursday, `U` for Sunday).
    #[must_use]
    pub fn abbreviation(self) -> &'static str {
        match self {
            Self::Monday => "M",
            Self::Tuesday => "T",
            Self::Wednesday => "W",
            Self::Thursday => "R",
            Self::Friday => "F",
            Self::Saturday => "S",
            Self::Sunday => "U",
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
            Self::Sunday => "Sunday",
        }
    }
}

/// One offering of a course.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassSection {
    pub id: String,
    pub course_code: String,
    pub section_number: String,
    pub course_name: String,
    pub instructor: String,
    /// Meeting days in the order they were picked.
    pub days: Vec<Weekday>,
    /// 24-hour `HH:MM`.
    pub start_time: String,
    /// 24-hour `HH:MM`.
    pub end_time: String,
    pub location: String,
    pub credits: u8,
}

/// Mutually exclusive sections competing for one schedule slot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassGroup {
    pub id: String,
    pub name: String,
    pub sections: Vec<ClassSection>,
}

impl ClassGroup {
    fn new(position: usize) -> Self {
        Self { id: new_id(), name: format!("Class {position}"), sections: Vec::new() }
    }
}

/// A selected section together with the group it was chosen from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScheduledSection<'a> {
    pub group: &'a ClassGroup,
    pub section: &'a ClassSection,
}

/// All groups on the planner and the current selection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScheduleState {
    pub groups: Vec<ClassGroup>,
    /// Group id -> selected section id.
    pub selected: BTreeMap<String, String>,
}

impl Default for ScheduleState {
    fn default() -> Self {
        Self { groups: vec![ClassGroup::new(1)], selected: BTreeMap::new() }
    }
}

impl ScheduleState {
    pub fn group(&self, group_id: &str) -> Option<&ClassGroup> {
        self.groups.iter().find(|g| g.id == group_id)
    }

    fn group_mut(&mut self, group_id: &str) -> Option<&mut ClassGroup> {
        self.groups.iter_mut().find(|g| g.id == group_id)
    }

    /// Append an empty group and return its id.
    pub fn add_group(&mut self) -> String {
        let group = ClassGroup::new(self.groups.len() + 1);
        let id = group.id.clone();
        self.groups.push(group);
        id
    }

    /// Whether a group may be removed. The last group always stays.
    pub fn can_remove_group(&self) -> bool {
        self.groups.len() > 1
    }

    /// Remove a group and its selection. Returns `false` when refused or unknown.
    pub fn remove_group(&mut self, group_id: &str) -> bool {
        if !self.can_remove_group() {
            return false;
        }
        let before = self.groups.len();
        self.groups.retain(|g| g.id != group_id);
        self.selected.remove(group_id);
        self.groups.len() != before
    }

    /// Append a section to a group. Returns `false` for an unknown group.
    pub fn add_section(&mut self, group_id: &str, section: ClassSection) -> bool {
        let Some(group) = self.group_mut(group_id) else {
            return false;
        };
        group.sections.push(section);
        true
    }

    /// Remove a section, clearing the group's selection if it pointed at it.
    pub fn remove_section(&mut self, group_id: &str, section_id: &str) -> bool {
        let Some(group) = self.group_mut(group_id) else {
            return false;
        };
        let before = group.sections.len();
        group.sections.retain(|s| s.id != section_id);
        let removed = group.sections.len() != before;

        if self.selected.get(group_id).is_some_and(|id| id == section_id) {
            self.selected.remove(group_id);
        }
        removed
    }

    /// Select a section, or deselect it if it is already the group's choice.
    pub fn select_section(&mut self, group_id: &str, section_id: &str) {
        if self.selected.get(group_id).is_some_and(|id| id == section_id) {
            self.selected.remove(group_id);
            return;
        }
        let exists = self
            .group(group_id)
            .is_some_and(|g| g.sections.iter().any(|s| s.id == section_id));
        if exists {
            self.selected.insert(group_id.to_owned(), section_id.to_owned());
        }
    }

    pub fn selected_section(&self, group_id: &str) -> Option<&ClassSection> {
        let section_id = self.selected.get(group_id)?;
        self.group(group_id)?.sections.iter().find(|s| &s.id == section_id)
    }

    pub fn is_selected(&self, group_id: &str, section_id: &str) -> bool {
        self.selected.get(group_id).is_some_and(|id| id == section_id)
    }

    /// Selected sections in group order.
    pub fn selected_schedule(&self) -> Vec<ScheduledSection<'_>> {
        self.groups
            .iter()
            .filter_map(|group| {
                self.selected_section(&group.id)
                    .map(|section| ScheduledSection { group, section })
            })
            .collect()
    }

    pub fn total_credits(&self) -> u32 {
        self.selected_schedule()
            .iter()
            .map(|entry| u32::from(entry.section.credits))
            .sum()
    }
}

/// Reason a [`SectionDraft`] cannot become a section.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DraftError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("pick at least one meeting day")]
    NoDays,
    #[error("{field} must be a time like 09:30, got {value:?}")]
    InvalidTime { field: &'static str, value: String },
    #[error("end time must be after start time")]
    EndBeforeStart,
    #[error("credits must be between 1 and 5, got {0}")]
    InvalidCredits(u8),
}

/// Form data for the add-section dialog.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionDraft {
    pub course_code: String,
    pub section_number: String,
    pub course_name: String,
    pub instructor: String,
    pub days: Vec<Weekday>,
    pub start_time: String,
    pub end_time: String,
    pub location: String,
    pub credits: u8,
}

impl Default for SectionDraft {
    fn default() -> Self {
        Self {
            course_code: String::new(),
            section_number: String::new(),
            course_name: String::new(),
            instructor: String::new(),
            days: Vec::new(),
            start_time: String::new(),
            end_time: String::new(),
            location: String::new(),
            credits: DEFAULT_CREDITS,
        }
    }
}

impl SectionDraft {
    /// Add `day` if absent, otherwise remove it.
    pub fn toggle_day(&mut self, day: Weekday) {
        if let Some(pos) = self.days.iter().position(|d| *d == day) {
            self.days.remove(pos);
        } else {
            self.days.push(day);
        }
    }

    /// Validate the draft into a section with a fresh id.
    ///
    /// # Errors
    ///
    /// Returns the first problem found, checking fields in form order.
    pub fn build(&self) -> Result<ClassSection, DraftError> {
        let required = [
            ("Course code", &self.course_code),
            ("Section", &self.section_number),
            ("Course name", &self.course_name),
            ("Instructor", &self.instructor),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(DraftError::MissingField(field));
            }
        }
        if self.days.is_empty() {
            return Err(DraftError::NoDays);
        }
        let start = required_clock("Start time", &self.start_time)?;
        let end = required_clock("End time", &self.end_time)?;
        if end <= start {
            return Err(DraftError::EndBeforeStart);
        }
        if self.location.trim().is_empty() {
            return Err(DraftError::MissingField("Location"));
        }
        if !CREDIT_CHOICES.contains(&self.credits) {
            return Err(DraftError::InvalidCredits(self.credits));
        }

        Ok(ClassSection {
            id: new_id(),
            course_code: self.course_code.trim().to_owned(),
            section_number: self.section_number.trim().to_owned(),
            course_name: self.course_name.trim().to_owned(),
            instructor: self.instructor.trim().to_owned(),
            days: self.days.clone(),
            start_time: self.start_time.clone(),
            end_time: self.end_time.clone(),
            location: self.location.trim().to_owned(),
            credits: self.credits,
        })
    }
}

fn required_clock(field: &'static str, value: &str) -> Result<(u8, u8), DraftError> {
    if value.trim().is_empty() {
        return Err(DraftError::MissingField(field));
    }
    parse_clock(value).ok_or_else(|| DraftError::InvalidTime { field, value: value.to_owned() })
}

fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
