use chrono::{Datelike, Days, Local, Month, NaiveDate};
use serde::Serialize;

/// English name of `month` (1 = January), `None` outside 1..=12.
pub fn month_name(month: u32) -> Option<&'static str> {
    let month = u8::try_from(month).ok()?;
    Month::try_from(month).ok().map(|month| month.name())
}

/// The period on display: a whole year, or one month of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Selection {
    year: i32,
    month: Option<u32>,
}

impl Selection {
    pub fn new(year: i32, month: Option<u32>) -> Option<Self> {
        if month.is_some_and(|month| !(1..=12).contains(&month)) {
            return None;
        }
        NaiveDate::from_ymd_opt(year, month.unwrap_or(1), 1)?;
        Some(Self { year, month })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> Option<u32> {
        self.month
    }

    pub fn today() -> Self {
        let today = Local::now().date_naive();
        Self {
            year: today.year(),
            month: Some(today.month()),
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && self.month.map_or(true, |month| date.month() == month)
    }

    pub fn months(&self) -> Vec<u32> {
        match self.month {
            Some(month) => vec![month],
            None => (1..=12).collect(),
        }
    }

    pub fn previous(&self) -> Option<Self> {
        match self.month {
            Some(1) => Self::new(self.year - 1, Some(12)),
            Some(month) => Self::new(self.year, Some(month - 1)),
            None => Self::new(self.year - 1, None),
        }
    }

    pub fn next(&self) -> Option<Self> {
        match self.month {
            Some(12) => Self::new(self.year + 1, Some(1)),
            Some(month) => Self::new(self.year, Some(month + 1)),
            None => Self::new(self.year + 1, None),
        }
    }

    /// Path of the calendar page showing this selection.
    pub fn path(&self) -> String {
        match self.month {
            Some(month) => format!("/{}/{}/", self.year, month),
            None => format!("/{}/", self.year),
        }
    }

    pub fn title(&self) -> String {
        match self.month.and_then(month_name) {
            Some(name) => format!("{name} {}", self.year),
            None => self.year.to_string(),
        }
    }

    /// First and last day of the grids on display, padding weeks included.
    pub fn window(&self) -> Option<(NaiveDate, NaiveDate)> {
        let (first, last) = match self.month {
            Some(month) => (month, month),
            None => (1, 12),
        };
        let start = month_weeks(self.year, first)?.first()?[0];
        let end = month_weeks(self.year, last)?.last()?[6];
        Some((start, end))
    }
}

/// Monday-first weeks covering `month`, padded with days of the neighbouring
/// months.
pub fn month_weeks(year: i32, month: u32) -> Option<Vec<[NaiveDate; 7]>> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let last = match month {
        12 => NaiveDate::from_ymd_opt(year + 1, 1, 1)?,
        _ => NaiveDate::from_ymd_opt(year, month + 1, 1)?,
    }
    .pred_opt()?;

    let mut monday =
        first.checked_sub_days(Days::new(u64::from(first.weekday().num_days_from_monday())))?;

    let mut weeks = Vec::new();
    while monday <= last {
        let mut week = [monday; 7];
        for (offset, day) in week.iter_mut().enumerate().skip(1) {
            *day = monday.checked_add_days(Days::new(offset as u64))?;
        }
        weeks.push(week);
        monday = monday.checked_add_days(Days::new(7))?;
    }

    Some(weeks)
}
