//! Project calendar built from a plain-text plan.
//!
//! Each line of the plan reads `from 2024-03-01 to 2024-03-05 alice does proj1.`
//! and the lines are merged into covered days per project and person.

pub mod calendar;
pub mod cli;
pub mod color;
pub mod ics;
pub mod parser;
pub mod plan;
pub mod render;
pub mod server;
pub mod store;
pub mod testdata;
pub mod view;

pub use parser::{parse_line, Assignment, ParseError};
pub use plan::{DayRange, DaySet, Plan};
pub use store::{Store, StoreError};
