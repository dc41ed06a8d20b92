use chrono::NaiveDate;
use serde::Serialize;

use crate::calendar::Selection;
use crate::color::color_hex;
use crate::plan::{DaySet, Plan};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersonRow {
    pub person: String,
    pub color: String,
    pub days: DaySet,
}

impl PersonRow {
    pub fn covers(&self, day: NaiveDate) -> bool {
        self.days.contains(&day)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectRow {
    pub project: String,
    pub people: Vec<PersonRow>,
}

/// What the calendar page shows: the plan narrowed to a selection, with a
/// color per person.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct View {
    pub selection: Selection,
    pub projects: Vec<ProjectRow>,
}

impl View {
    /// People without a day inside `selection` are left out, and so are
    /// projects left without people. Each row keeps only the days of the
    /// grids on display.
    pub fn build(plan: &Plan, selection: Selection) -> Self {
        let window = selection.window();
        let shown = |days: &DaySet| -> DaySet {
            match window {
                Some((start, end)) => days.range(start..=end).copied().collect(),
                None => days.iter().copied().filter(|day| selection.contains(*day)).collect(),
            }
        };

        let projects = plan
            .projects()
            .filter_map(|(project, people)| {
                let people = people
                    .iter()
                    .filter(|(_, days)| days.iter().any(|day| selection.contains(*day)))
                    .map(|(person, days)| PersonRow {
                        person: person.clone(),
                        color: color_hex(person),
                        days: shown(days),
                    })
                    .collect::<Vec<_>>();

                (!people.is_empty()).then(|| ProjectRow {
                    project: project.to_string(),
                    people,
                })
            })
            .collect();

        Self {
            selection,
            projects,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan() -> Plan {
        Plan::from_text(
            "from 2024-03-01 to 2024-03-03 alice does proj1.\n\
             from 2024-05-01 to 2024-05-03 bob does proj1.\n\
             from 2024-03-10 to 2024-03-12 carol does proj2.\n\
             from 2025-01-01 to 2025-01-02 dave does proj3.\n",
        )
    }

    #[test]
    fn month_selection_filters_people_and_projects() {
        let view = View::build(&plan(), Selection::new(2024, Some(3)).unwrap());

        let summary = view
            .projects
            .iter()
            .map(|row| {
                (
                    row.project.as_str(),
                    row.people.iter().map(|p| p.person.as_str()).collect::<Vec<_>>(),
                )
            })
            .collect::<Vec<_>>();

        assert_eq!(summary, [("proj1", vec!["alice"]), ("proj2", vec!["carol"])]);
    }

    #[test]
    fn year_selection_keeps_every_month() {
        let view = View::build(&plan(), Selection::new(2024, None).unwrap());
        assert_eq!(view.projects.len(), 2);
        assert_eq!(view.projects[0].people.len(), 2);
    }

    #[test]
    fn rows_only_carry_days_of_the_visible_grid() {
        let plan = Plan::from_text(
            "from 2014-01-01 to 2024-02-20 erin does proj1.\n\
             from 2024-02-27 to 2024-03-02 erin does proj1.\n\
             from 2024-04-01 to 2034-01-01 erin does proj1.\n",
        );
        let view = View::build(&plan, Selection::new(2024, Some(3)).unwrap());
        let erin = &view.projects[0].people[0];

        assert_eq!(
            erin.days.iter().copied().collect::<Vec<_>>(),
            [
                NaiveDate::from_ymd_opt(2024, 2, 27).unwrap(),
                NaiveDate::from_ymd_opt(2024, 2, 28).unwrap(),
                NaiveDate::from_ymd_opt(2024, 2, 29).unwrap(),
                NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
                NaiveDate::from_ymd_opt(2024, 3, 2).unwrap(),
            ]
        );
    }

    #[test]
    fn rows_carry_color_and_days() {
        let view = View::build(&plan(), Selection::new(2025, Some(1)).unwrap());
        let dave = &view.projects[0].people[0];

        assert_eq!(dave.color, color_hex("dave"));
        assert!(dave.covers(NaiveDate::from_ymd_opt(2025, 1, 2).unwrap()));
        assert!(!dave.covers(NaiveDate::from_ymd_opt(2025, 1, 3).unwrap()));
    }

    #[test]
    fn empty_plan_gives_empty_view() {
        assert!(View::build(&Plan::new(), Selection::new(2024, None).unwrap()).is_empty());
    }
}
