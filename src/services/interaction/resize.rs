// Time-grid drag ranges
//
// Both drags work on one day column: the hovered slot's time is applied to the
// origin's date, so dragging across columns never changes the day.

use chrono::{Duration, NaiveDateTime};

use crate::utils::date::copy_time;

/// Range dragged out from the slot starting at `origin`.
///
/// Dragging upward selects from the hovered slot down to the end of the
/// origin slot; otherwise from the origin to the end of the hovered slot.
pub fn create_time_range(
    origin: NaiveDateTime,
    hovered: NaiveDateTime,
    increment: Duration,
) -> (NaiveDateTime, NaiveDateTime) {
    let current = copy_time(hovered, origin.date());
    if current < origin {
        (current, origin + increment)
    } else {
        (origin, current + increment)
    }
}

/// New bounds for an event whose bottom edge is dragged to `hovered`.
///
/// Hovering at or below the start extends to the end of the hovered slot.
/// Hovering above it flips the range so the event ends at its old start.
pub fn resize_range(
    start: NaiveDateTime,
    hovered: NaiveDateTime,
    increment: Duration,
) -> (NaiveDateTime, NaiveDateTime) {
    let mut current = copy_time(hovered, start.date());
    if current >= start {
        current += increment;
    }
    (start.min(current), start.max(current))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(day: u32, hour: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, day)
            .unwrap()
            .and_hms_opt(hour, min, 0)
            .unwrap()
    }

    fn half_hour() -> Duration {
        Duration::minutes(30)
    }

    #[test]
    fn test_create_downward() {
        let range = create_time_range(at(6, 9, 0), at(6, 10, 30), half_hour());
        assert_eq!(range, (at(6, 9, 0), at(6, 11, 0)));
    }

    #[test]
    fn test_create_on_origin_slot() {
        let range = create_time_range(at(6, 9, 0), at(6, 9, 0), half_hour());
        assert_eq!(range, (at(6, 9, 0), at(6, 9, 30)));
    }

    #[test]
    fn test_create_upward() {
        let range = create_time_range(at(6, 9, 0), at(6, 7, 30), half_hour());
        assert_eq!(range, (at(6, 7, 30), at(6, 9, 30)));
    }

    #[test]
    fn test_create_ignores_hovered_column() {
        let range = create_time_range(at(6, 9, 0), at(8, 10, 0), half_hour());
        assert_eq!(range, (at(6, 9, 0), at(6, 10, 30)));
    }

    #[test]
    fn test_resize_extends_to_hovered_slot_end() {
        let range = resize_range(at(6, 9, 0), at(6, 12, 0), half_hour());
        assert_eq!(range, (at(6, 9, 0), at(6, 12, 30)));
    }

    #[test]
    fn test_resize_last_slot_rolls_to_midnight() {
        let range = resize_range(at(6, 22, 0), at(6, 23, 30), half_hour());
        assert_eq!(range, (at(6, 22, 0), at(7, 0, 0)));
    }

    #[test]
    fn test_resize_above_start_flips() {
        let range = resize_range(at(6, 9, 0), at(6, 8, 0), half_hour());
        assert_eq!(range, (at(6, 8, 0), at(6, 9, 0)));
    }
}
