use std::fmt;

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

static LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^from ([0-9]+-[0-9]+-[0-9]+) to ([0-9]+-[0-9]+-[0-9]+) (\w+) does (\w+)\.$")
        .expect("valid assignment regex")
});

const DATE_FORMAT: &str = "%Y-%m-%d";

/// One accepted line: `person` works on `project` from `start` to `end`, both inclusive.
///
/// Nothing guarantees `start <= end`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Assignment {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub person: String,
    pub project: String,
}

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("line does not match `from DATE to DATE PERSON does PROJECT.`: {line:?}")]
    Grammar { line: String },
    #[error("invalid date {value:?}: {source}")]
    Date {
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "from {} to {} {} does {}.",
            self.start.format(DATE_FORMAT),
            self.end.format(DATE_FORMAT),
            self.person,
            self.project
        )
    }
}

/// Parses a single line. The whole line has to match, a trailing comment or a
/// missing period is a rejection.
pub fn parse_line(line: &str) -> Result<Assignment, ParseError> {
    let Some(captures) = LINE.captures(line) else {
        return Err(ParseError::Grammar {
            line: line.to_string(),
        });
    };

    Ok(Assignment {
        start: parse_date(&captures[1])?,
        end: parse_date(&captures[2])?,
        person: captures[3].to_string(),
        project: captures[4].to_string(),
    })
}

fn parse_date(value: &str) -> Result<NaiveDate, ParseError> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|source| ParseError::Date {
        value: value.to_string(),
        source,
    })
}
