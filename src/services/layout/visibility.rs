use chrono::NaiveDateTime;

use crate::models::event::Event;
use crate::models::view::ViewWindow;

/// True if any part of `event` falls inside `[view_start, view_end]`.
///
/// Both endpoints are inclusive. A timed event's last instant is one second
/// before its end, so an event ending exactly at midnight is not visible on
/// the following day.
pub fn is_visible(event: &Event, view_start: NaiveDateTime, view_end: NaiveDateTime) -> bool {
    event.start <= view_end && event.last_instant() >= view_start
}

pub fn is_visible_in(event: &Event, window: &ViewWindow) -> bool {
    is_visible(event, window.view_start(), window.view_end())
}

/// True if two events share at least one instant.
///
/// Intervals are closed (`[start, last_instant]`); zero or negative
/// durations collapse onto `start`.
pub fn overlaps(a: &Event, b: &Event) -> bool {
    a.start <= b.last_instant() && b.start <= a.last_instant()
}
