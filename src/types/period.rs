use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::{Display, Formatter};

/// A calendar month, the group key of the monthly AQI series.
///
/// Ordering is chronological: by year first, then month.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }
}

impl Display for YearMonth {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// An inclusive range of calendar years. `start <= end` always holds, also for
/// deserialized values.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "YearRangeBounds")]
pub struct YearRange {
    start: i32,
    end: i32,
}

#[derive(Deserialize)]
struct YearRangeBounds {
    start: i32,
    end: i32,
}

impl From<YearRangeBounds> for YearRange {
    fn from(bounds: YearRangeBounds) -> Self {
        YearRange::new(bounds.start, bounds.end)
    }
}

impl YearRange {
    /// Creates a range, swapping the bounds if they are given in reverse.
    pub fn new(start: i32, end: i32) -> Self {
        if start <= end {
            Self { start, end }
        } else {
            Self {
                start: end,
                end: start,
            }
        }
    }

    /// A range covering a single year.
    pub fn single(year: i32) -> Self {
        Self {
            start: year,
            end: year,
        }
    }

    /// The first year included.
    pub fn start(&self) -> i32 {
        self.start
    }

    /// The last year included.
    pub fn end(&self) -> i32 {
        self.end
    }

    pub fn contains(&self, year: i32) -> bool {
        self.start <= year && year <= self.end
    }

    /// Clamps both endpoints into `bounds`.
    ///
    /// A range lying completely outside `bounds` collapses onto the nearest
    /// bound, the same way a slider pinned to the dataset's years would.
    pub fn clamp_to(&self, bounds: YearRange) -> YearRange {
        YearRange::new(
            self.start.clamp(bounds.start, bounds.end),
            self.end.clamp(bounds.start, bounds.end),
        )
    }
}

impl Display for YearRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}..={:04}", self.start, self.end)
    }
}
