use chrono::{DateTime, NaiveDate, Utc};
use ics::{
    components::Parameter,
    properties::{DtEnd, DtStart, Summary},
    Event, ICalendar,
};

use crate::plan::{DaySet, Plan};

const PRODID: &str = "-//managenplot//plan//EN";

/// Splits a day set into maximal runs of consecutive days, inclusive on both ends.
pub fn runs(days: &DaySet) -> Vec<(NaiveDate, NaiveDate)> {
    let mut spans: Vec<(NaiveDate, NaiveDate)> = Vec::new();

    for &day in days {
        if let Some((_, end)) = spans.last_mut() {
            if end.succ_opt() == Some(day) {
                *end = day;
                continue;
            }
        }
        spans.push((day, day));
    }

    spans
}

fn all_day_event(
    project: &str,
    person: &str,
    start: NaiveDate,
    end: NaiveDate,
    stamp: &str,
) -> Event<'static> {
    let first = start.format("%Y%m%d").to_string();
    // DTEND of an all-day event is exclusive
    let after = end.succ_opt().unwrap_or(end).format("%Y%m%d").to_string();

    let id = format!("{first}_{project}_{person}");
    let mut event = Event::new(id, stamp.to_string());

    let mut dtstart = DtStart::new(first);
    dtstart.add(Parameter::new("VALUE", "DATE"));
    let mut dtend = DtEnd::new(after);
    dtend.add(Parameter::new("VALUE", "DATE"));

    event.push(dtstart);
    event.push(dtend);
    event.push(Summary::new(format!("{person} does {project}")));

    event
}

/// One all-day event per run of consecutive days of every (project, person).
pub fn plan_to_ics(plan: &Plan) -> ICalendar<'static> {
    plan_to_ics_at(plan, Utc::now())
}

/// Like [`plan_to_ics`], with every DTSTAMP set to `created`.
pub fn plan_to_ics_at(plan: &Plan, created: DateTime<Utc>) -> ICalendar<'static> {
    let stamp = created.format("%Y%m%dT%H%M%SZ").to_string();
    let mut icalendar = ICalendar::new("2.0", PRODID);

    for (project, people) in plan.projects() {
        for (person, days) in people {
            for (start, end) in runs(days) {
                icalendar.add_event(all_day_event(project, person, start, end, &stamp));
            }
        }
    }

    icalendar
}
