//! Helper functions shared by the content layer and its consumers
//!
//! Date parsing/formatting and reading-time estimation. These are pure
//! functions and are exported for presentation code that needs the same
//! rules.

mod date;
mod reading_time;

pub use date::*;
pub use reading_time::*;
