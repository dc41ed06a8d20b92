//! Random sample lines for trying out the calendar.

use chrono::{Datelike, Days, NaiveDate};
use rand::Rng;

use crate::parser::Assignment;

const PEOPLE: [&str; 5] = ["aa", "bb", "cc", "dd", "ee"];
const PROJECTS: [&str; 4] = ["prj1", "prj2", "prj3", "urlaub"];

/// Generates `count` assignments starting this year or next, each lasting two
/// to fourteen days.
pub fn generate<R: Rng + ?Sized>(rng: &mut R, today: NaiveDate, count: usize) -> Vec<Assignment> {
    let mut assignments = Vec::with_capacity(count);

    while assignments.len() < count {
        let year = today.year() + rng.random_range(0..2);
        let month = rng.random_range(1..13);
        let day = rng.random_range(1..29);

        let Some(start) = NaiveDate::from_ymd_opt(year, month, day) else {
            continue;
        };
        let Some(end) = start.checked_add_days(Days::new(rng.random_range(2..14))) else {
            continue;
        };

        assignments.push(Assignment {
            start,
            end,
            person: PEOPLE[rng.random_range(0..PEOPLE.len())].to_string(),
            project: PROJECTS[rng.random_range(0..PROJECTS.len())].to_string(),
        });
    }

    assignments
}

/// The generated assignments as stored text, one line each.
pub fn lines<R: Rng + ?Sized>(rng: &mut R, today: NaiveDate, count: usize) -> String {
    generate(rng, today, count)
        .iter()
        .map(|assignment| format!("{assignment}\n"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_line;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    #[test]
    fn generates_requested_count_within_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let assignments = generate(&mut rng, today(), 100);

        assert_eq!(assignments.len(), 100);
        for assignment in &assignments {
            assert!((2024..=2025).contains(&assignment.start.year()));
            assert!(assignment.start.day() <= 28);
            let length = (assignment.end - assignment.start).num_days();
            assert!((2..14).contains(&length));
            assert!(PEOPLE.contains(&assignment.person.as_str()));
            assert!(PROJECTS.contains(&assignment.project.as_str()));
        }
    }

    #[test]
    fn seeded_output_is_reproducible() {
        let first = generate(&mut StdRng::seed_from_u64(1), today(), 10);
        let second = generate(&mut StdRng::seed_from_u64(1), today(), 10);
        assert_eq!(first, second);
    }

    #[test]
    fn lines_parse_back() {
        let text = lines(&mut StdRng::seed_from_u64(3), today(), 20);
        let parsed = text
            .lines()
            .map(parse_line)
            .collect::<Result<Vec<_>, _>>()
            .unwrap();
        assert_eq!(parsed.len(), 20);
    }
}
