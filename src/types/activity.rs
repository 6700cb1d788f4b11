use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Number of calendar days covered by the activity series, today included.
pub const ACTIVITY_WINDOW_DAYS: usize = 30;

/// One slot of the daily activity series, keyed by calendar date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayBucket {
    pub date: NaiveDate,
    pub count: u64,
}

impl DayBucket {
    /// Short `MM/DD` label used by the chart axis.
    pub fn label(&self) -> String {
        self.date.format("%m/%d").to_string()
    }
}

/// Occurrence count for one event type over the full fetched history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventTypeCount {
    pub kind: String,
    pub count: u64,
}

/// Time-bucketed activity derived from an event collection.
///
/// `daily` always holds exactly [`ACTIVITY_WINDOW_DAYS`] entries in
/// chronological order, zero-filled for quiet days. `event_types` counts
/// every fetched event (including those outside the daily window), sorted
/// descending by count with first-encountered order on ties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivitySeries {
    pub daily: Vec<DayBucket>,
    pub event_types: Vec<EventTypeCount>,
    pub total_events: u64,
}
