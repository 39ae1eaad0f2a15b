use chrono::NaiveDate;

use super::EventStore;
use crate::models::event::Event;
use crate::models::view::ViewWindow;
use crate::services::layout::{is_visible, is_visible_in, sort_day, SortPolicy};
use crate::utils::date::{end_of_day, start_of_day};

/// One row of a day's full event list (the "+N more" panel).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayDetailItem<'a> {
    pub event: &'a Event,
    /// Event started on an earlier day
    pub span_left: bool,
    /// Event continues on a later day
    pub span_right: bool,
}

impl EventStore {
    /// Events that may appear in `window`, ordered by start.
    ///
    /// Events of hidden calendars are left out.
    pub fn query_window(&self, window: &ViewWindow) -> Vec<&Event> {
        let mut events: Vec<&Event> = self
            .events
            .iter()
            .filter(|event| self.is_calendar_shown(event) && is_visible_in(event, window))
            .collect();
        events.sort_by_key(|event| event.start);
        events
    }

    /// Every event touching `date`, in day order.
    pub fn day_detail(&self, date: NaiveDate, policy: SortPolicy) -> Vec<DayDetailItem<'_>> {
        let (day_start, day_end) = (start_of_day(date), end_of_day(date));
        let mut events: Vec<&Event> = self
            .events
            .iter()
            .filter(|event| self.is_calendar_shown(event) && is_visible(event, day_start, day_end))
            .collect();
        sort_day(&mut events, policy);

        events
            .into_iter()
            .map(|event| DayDetailItem {
                event,
                span_left: event.first_day() < date,
                span_right: event.last_day() > date,
            })
            .collect()
    }

    /// Case-insensitive search over title, location and notes.
    pub fn search(&self, query: &str) -> Vec<&Event> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }

        let hit = |field: Option<&str>| {
            field.is_some_and(|text| text.to_lowercase().contains(query.as_str()))
        };
        let mut events: Vec<&Event> = self
            .events
            .iter()
            .filter(|event| {
                hit(Some(event.title.as_str()))
                    || hit(event.location.as_deref())
                    || hit(event.notes.as_deref())
            })
            .collect();
        events.sort_by_key(|event| event.start);
        events
    }
}
