use std::fmt;

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::error::ListError;

/// Picks the banner artwork for the list pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Season {
    Winter,
    Spring,
    Summer,
    Fall,
}

impl Season {
    /// `month` is 1-based, January is 1.
    pub fn for_month(month: u32) -> Result<Self, ListError> {
        match month {
            1..=3 => Ok(Season::Winter),
            4..=6 => Ok(Season::Spring),
            7..=9 => Ok(Season::Summer),
            10..=12 => Ok(Season::Fall),
            _ => Err(ListError::invalid(format!(
                "month must be between 1 and 12, got {month}"
            ))),
        }
    }

    pub fn from_date(date: &impl Datelike) -> Self {
        match date.month0() {
            0..=2 => Season::Winter,
            3..=5 => Season::Spring,
            6..=8 => Season::Summer,
            _ => Season::Fall,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Season::Winter => "Winter",
            Season::Spring => "Spring",
            Season::Summer => "Summer",
            Season::Fall => "Fall",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
