use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use log::{debug, warn};
use serde::Serialize;

use crate::parser::{parse_line, Assignment};

pub type DaySet = BTreeSet<NaiveDate>;

/// Inclusive range of days. Empty when `end` lies before `start`.
#[derive(Debug, Clone)]
pub struct DayRange {
    next: Option<NaiveDate>,
    end: NaiveDate,
}

impl DayRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            next: Some(start),
            end,
        }
    }
}

impl Iterator for DayRange {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<Self::Item> {
        let day = self.next.filter(|day| *day <= self.end)?;
        self.next = day.succ_opt();
        Some(day)
    }
}

/// Covered days per project, then per person.
///
/// Only pairs with at least one covered day are ever present. Keys iterate in
/// sorted order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Plan {
    projects: BTreeMap<String, BTreeMap<String, DaySet>>,
}

impl Plan {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a plan from the stored text, `None` meaning there is no text yet.
    pub fn from_source(source: Option<&str>) -> Self {
        source.map(Self::from_text).unwrap_or_default()
    }

    pub fn from_text(text: &str) -> Self {
        Self::from_lines(text.lines())
    }

    /// Parses and merges every line. Lines that fail to parse are logged and
    /// skipped, they never abort the batch.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut plan = Self::new();

        for (idx, line) in lines.into_iter().enumerate() {
            let line = line.as_ref();
            if line.trim().is_empty() {
                debug!("Skipping blank line {}", idx + 1);
                continue;
            }

            match parse_line(line) {
                Ok(assignment) => plan.insert(&assignment),
                Err(err) => warn!("Skipping line {}: {err}", idx + 1),
            }
        }

        plan
    }

    /// Unions the days of `assignment` into its (project, person) entry.
    pub fn insert(&mut self, assignment: &Assignment) {
        let mut days = DayRange::new(assignment.start, assignment.end).peekable();
        if days.peek().is_none() {
            return;
        }

        self.projects
            .entry(assignment.project.clone())
            .or_default()
            .entry(assignment.person.clone())
            .or_default()
            .extend(days);
    }

    pub fn days(&self, project: &str, person: &str) -> Option<&DaySet> {
        self.projects.get(project)?.get(person)
    }

    pub fn projects(&self) -> impl Iterator<Item = (&str, &BTreeMap<String, DaySet>)> {
        self.projects
            .iter()
            .map(|(project, people)| (project.as_str(), people))
    }

    pub fn people(&self, project: &str) -> impl Iterator<Item = (&str, &DaySet)> {
        self.projects
            .get(project)
            .into_iter()
            .flatten()
            .map(|(person, days)| (person.as_str(), days))
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Number of projects.
    pub fn len(&self) -> usize {
        self.projects.len()
    }
}
