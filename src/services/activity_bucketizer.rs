//! Activity Bucketizer — reduces an event collection into a fixed-width
//! daily series plus an event-type frequency table.
//!
//! Pure transformation over an already-fetched event snapshot and a caller
//! supplied reference date, so the window is fully deterministic in tests.

use chrono::{Duration, NaiveDate};

use crate::types::activity::{ActivitySeries, DayBucket, EventTypeCount, ACTIVITY_WINDOW_DAYS};
use crate::types::github::Event;

/// Buckets events into the trailing [`ACTIVITY_WINDOW_DAYS`]-day series
/// ending at and including `today`, oldest day first.
///
/// Every event increments its type's frequency count; only events whose
/// date falls inside the window increment a daily bucket. Events outside
/// the window (or with no parseable date) therefore still show up in the
/// type table. The type table is sorted descending by count, ties keeping
/// first-encountered order.
pub fn bucketize(events: &[Event], today: NaiveDate) -> ActivitySeries {
    let window_start = today - Duration::days(ACTIVITY_WINDOW_DAYS as i64 - 1);

    let mut daily: Vec<DayBucket> = (0..ACTIVITY_WINDOW_DAYS)
        .map(|offset| DayBucket {
            date: window_start + Duration::days(offset as i64),
            count: 0,
        })
        .collect();

    // First-encountered order is preserved by pushing new kinds to the end;
    // event pages are small (<= 100), so the linear lookup is fine.
    let mut event_types: Vec<EventTypeCount> = Vec::new();

    for event in events {
        match event_types.iter_mut().find(|e| e.kind == event.kind) {
            Some(entry) => entry.count += 1,
            None => event_types.push(EventTypeCount {
                kind: event.kind.clone(),
                count: 1,
            }),
        }

        if let Some(date) = event.occurred_on {
            if date >= window_start && date <= today {
                let index = (date - window_start).num_days() as usize;
                daily[index].count += 1;
            }
        }
    }

    // Stable sort keeps first-encountered order on equal counts.
    event_types.sort_by(|a, b| b.count.cmp(&a.count));

    ActivitySeries {
        daily,
        event_types,
        total_events: events.len() as u64,
    }
}
