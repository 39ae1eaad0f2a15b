// Property-based tests for the grid layout
// Random event sets laid out over random month views

use std::collections::HashMap;

use calendar_grid::models::event::Event;
use calendar_grid::models::view::{ViewKind, ViewWindow};
use calendar_grid::services::layout::{
    build, is_visible, is_visible_in, LayoutOptions, SortPolicy,
};
use chrono::{Duration, NaiveDate, NaiveDateTime};
use proptest::prelude::*;

fn month_window(year: i32, month: u32, first_day_of_week: u8) -> ViewWindow {
    let anchor = NaiveDate::from_ymd_opt(year, month, 15).unwrap();
    ViewWindow::for_kind(anchor, ViewKind::Month, first_day_of_week).unwrap()
}

/// (start day offset from the 1st, start minute, duration minutes, all day)
fn event_spec() -> impl Strategy<Value = (i64, i64, i64, bool)> {
    (-12i64..45, 0i64..1440, -120i64..(9 * 1440), any::<bool>())
}

fn make_events(year: i32, month: u32, specs: &[(i64, i64, i64, bool)]) -> Vec<Event> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    specs
        .iter()
        .enumerate()
        .map(|(i, &(day, minute, duration, all_day))| {
            let start = first + Duration::days(day) + Duration::minutes(minute);
            let mut event = Event::new(i as i64, format!("Event {i}"), start, start + Duration::minutes(duration))
                .unwrap();
            event.all_day = all_day;
            event
        })
        .collect()
}

fn options(spans_first: bool, max: Option<usize>) -> LayoutOptions {
    LayoutOptions {
        sort_policy: if spans_first {
            SortPolicy::SpanPriority
        } else {
            SortPolicy::StartPriority
        },
        max_per_day: max,
    }
}

fn base() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

/// Instant `minutes` after the base, nudged by `jitter` seconds so the
/// closed interval endpoints get exercised.
fn instant(minutes: i64, jitter: i64) -> NaiveDateTime {
    base() + Duration::minutes(minutes) + Duration::seconds(jitter)
}

proptest! {
    /// Property: visibility is closed-interval intersection with the window
    #[test]
    fn prop_visible_iff_intervals_intersect(
        start_min in 0i64..3000,
        duration_min in -300i64..3000,
        end_jitter in -1i64..=1,
        all_day in any::<bool>(),
        window_start_min in 0i64..3000,
        window_len_min in 0i64..3000,
        window_jitter in -1i64..=1,
    ) {
        let start = instant(start_min, 0);
        let end = instant(start_min + duration_min, end_jitter);
        let mut event = Event::new("e", "Event", start, end).unwrap();
        event.all_day = all_day;

        let window_start = instant(window_start_min, 0);
        let window_end = instant(window_start_min + window_len_min, window_jitter).max(window_start);

        // Inverted ranges collapse onto the start
        let last = if all_day {
            end.max(start)
        } else {
            (end - Duration::seconds(1)).max(start)
        };
        let expected = start <= window_end && last >= window_start;
        prop_assert_eq!(is_visible(&event, window_start, window_end), expected);
    }

    /// Property: an event shows up in the grid exactly when it overlaps the window
    #[test]
    fn prop_placed_iff_visible(
        year in 2023..2027i32,
        month in 1..=12u32,
        first_day_of_week in 0..7u8,
        specs in prop::collection::vec(event_spec(), 0..25),
    ) {
        let window = month_window(year, month, first_day_of_week);
        let events = make_events(year, month, &specs);
        let layout = build(&events, &window, &LayoutOptions::default());

        for event in &events {
            let placed = (0..layout.week_count()).any(|w| {
                (0..layout.day_count()).any(|d| layout.grid.row_of(w, d, &event.id).is_some())
            });
            prop_assert_eq!(placed, is_visible_in(event, &window), "event {:?}", event);
        }
    }

    /// Property: no week reports more than one row past the per-day cap
    #[test]
    fn prop_row_counts_capped(
        year in 2023..2027i32,
        month in 1..=12u32,
        max in 1usize..5,
        specs in prop::collection::vec(event_spec(), 0..40),
    ) {
        let window = month_window(year, month, 0);
        let events = make_events(year, month, &specs);
        let layout = build(&events, &window, &options(false, Some(max)));

        prop_assert_eq!(layout.row_counts.len(), window.row_count());
        for &rows in &layout.row_counts {
            prop_assert!(rows <= max + 1);
        }
    }

    /// Property: laying out the same input twice gives the same grid
    #[test]
    fn prop_layout_is_idempotent(
        year in 2023..2027i32,
        month in 1..=12u32,
        spans_first in any::<bool>(),
        specs in prop::collection::vec(event_spec(), 0..25),
    ) {
        let window = month_window(year, month, 1);
        let events = make_events(year, month, &specs);
        let options = options(spans_first, None);

        prop_assert_eq!(build(&events, &window, &options), build(&events, &window, &options));
    }

    /// Property: a multi-day event keeps one row across each week it covers
    #[test]
    fn prop_span_row_stable_within_week(
        year in 2023..2027i32,
        month in 1..=12u32,
        spans_first in any::<bool>(),
        specs in prop::collection::vec(event_spec(), 0..25),
    ) {
        let window = month_window(year, month, 0);
        let events = make_events(year, month, &specs);
        let layout = build(&events, &window, &options(spans_first, None));

        for w in 0..layout.week_count() {
            let mut rows: HashMap<String, usize> = HashMap::new();
            let mut days: HashMap<String, Vec<usize>> = HashMap::new();
            for d in 0..layout.day_count() {
                for (row, slot) in layout.grid.cell(w, d).iter().enumerate() {
                    let Some(event) = slot.event() else { continue };
                    let id = event.id.to_string();
                    let first_row = *rows.entry(id.clone()).or_insert(row);
                    prop_assert_eq!(first_row, row, "event {} moved rows in week {}", id, w);
                    days.entry(id).or_default().push(d);
                }
            }
            // Placeholders of one event sit on consecutive days
            for covered in days.values() {
                prop_assert!(covered.windows(2).all(|pair| pair[1] == pair[0] + 1));
            }
        }
    }
}
