use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::util::dates::parse_date;

/// A date range with optional bounds, kept as the raw strings the snapshot
/// carries. Parsing is lazy and a bound that fails to parse behaves exactly
/// like a missing bound.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Timeframe {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}

impl Timeframe {
    pub fn new(start: Option<&str>, end: Option<&str>) -> Self {
        Timeframe {
            start_date: start.map(str::to_string),
            end_date: end.map(str::to_string),
        }
    }

    /// The "all time" sentinel: no bound on either side
    pub fn unbounded() -> Self {
        Timeframe::default()
    }

    pub fn start(&self) -> Option<NaiveDate> {
        self.start_date.as_deref().and_then(parse_date)
    }

    pub fn end(&self) -> Option<NaiveDate> {
        self.end_date.as_deref().and_then(parse_date)
    }

    pub fn is_unbounded(&self) -> bool {
        self.start().is_none() && self.end().is_none()
    }

    /// Closed-interval overlap test. Missing bounds on either side include
    /// conservatively; touching endpoints count as overlapping.
    pub fn overlaps(&self, other: &Timeframe) -> bool {
        let (Some(ws), Some(we)) = (self.start(), self.end()) else {
            return true;
        };
        let (Some(os), Some(oe)) = (other.start(), other.end()) else {
            return true;
        };
        oe >= ws && os <= we
    }
}
