// Per-day ordering of events before row assignment

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::models::event::Event;

/// How events sharing a day are stacked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortPolicy {
    /// Earlier start first
    #[default]
    StartPriority,
    /// Multi-day events first, longer bars ahead of shorter ones starting together
    SpanPriority,
}

impl SortPolicy {
    pub fn from_spans_have_priority(spans_have_priority: bool) -> Self {
        if spans_have_priority {
            SortPolicy::SpanPriority
        } else {
            SortPolicy::StartPriority
        }
    }
}

/// Ordering used for the events of a single day.
///
/// All-day events always come before timed events; the policy decides the
/// rest. Equal events compare as `Equal` so a stable sort keeps input order.
pub fn compare_events(a: &Event, b: &Event, policy: SortPolicy) -> Ordering {
    b.all_day.cmp(&a.all_day).then_with(|| match policy {
        SortPolicy::StartPriority => a.start.cmp(&b.start),
        SortPolicy::SpanPriority => match (a.is_multi_day(), b.is_multi_day()) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (true, true) => a
                .start
                .cmp(&b.start)
                .then_with(|| b.effective_end().cmp(&a.effective_end())),
            (false, false) => a.start.cmp(&b.start),
        },
    })
}

pub fn sort_day(events: &mut [&Event], policy: SortPolicy) {
    events.sort_by(|a, b| compare_events(a, b, policy));
}
