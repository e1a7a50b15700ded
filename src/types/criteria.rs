use crate::types::period::YearRange;
use bon::bon;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// The viewer's current selection: a year range and a set of station labels.
///
/// Criteria are rebuilt on every interaction and passed explicitly to the filter
/// engine. A criteria value with no year range or no stations selects nothing.
///
/// # Examples
///
/// ```
/// use aqi_dashboard::{FilterCriteria, YearRange};
/// use std::collections::BTreeSet;
///
/// let criteria = FilterCriteria::builder()
///     .year_range(YearRange::new(2014, 2016))
///     .stations(BTreeSet::from(["Aotizhongxin".to_string()]))
///     .build();
///
/// assert!(criteria.is_selecting());
/// assert!(!FilterCriteria::builder().build().is_selecting());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub year_range: Option<YearRange>,
    pub stations: BTreeSet<String>,
}

#[bon]
impl FilterCriteria {
    /// Creates new criteria.
    ///
    /// * `.year_range(YearRange)`: Optional. Inclusive year bounds; unset selects nothing.
    /// * `.stations(BTreeSet<String>)`: Optional. Station labels; empty selects nothing.
    #[builder]
    pub fn new(year_range: Option<YearRange>, #[builder(default)] stations: BTreeSet<String>) -> Self {
        Self {
            year_range,
            stations,
        }
    }

    /// Returns `true` when both a year range and at least one station are set.
    pub fn is_selecting(&self) -> bool {
        self.year_range.is_some() && !self.stations.is_empty()
    }
}
