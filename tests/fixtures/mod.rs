// Test fixtures - reusable test data
// A January 2025 calendar shared by the integration tests

#![allow(dead_code)]

use calendar_grid::models::calendar::{Calendar, CalendarId};
use calendar_grid::models::event::Event;
use calendar_grid::services::store::EventStore;
use chrono::{NaiveDate, NaiveDateTime};

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Returns the given January 2025 day
    pub fn jan(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, day).unwrap()
    }

    /// Returns the given January 2025 day at `hour:min`
    pub fn jan_at(day: u32, hour: u32, min: u32) -> NaiveDateTime {
        jan(day).and_hms_opt(hour, min, 0).unwrap()
    }

    /// Returns Feb 29, 2024 (leap year)
    pub fn leap_day_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
    }
}

/// Sample events for testing
pub mod events {
    use super::dates::jan_at;
    use super::*;

    pub fn timed(id: &str, title: &str, start: NaiveDateTime, end: NaiveDateTime) -> Event {
        Event::new(id, title, start, end).unwrap()
    }

    /// Monday Jan 6 through Friday Jan 10, all day
    pub fn vacation() -> Event {
        Event::builder()
            .id("vacation")
            .calendar(CalendarId(1))
            .title("Vacation")
            .start(jan_at(6, 0, 0))
            .end(jan_at(10, 0, 0))
            .all_day(true)
            .build()
            .unwrap()
    }

    pub fn standup() -> Event {
        timed("standup", "Standup", jan_at(8, 9, 0), jan_at(8, 10, 0))
    }

    pub fn review() -> Event {
        timed("review", "Design review", jan_at(8, 9, 30), jan_at(8, 10, 30))
    }

    pub fn lunch() -> Event {
        let mut lunch = timed("lunch", "Lunch with Matt", jan_at(8, 12, 0), jan_at(8, 13, 0));
        lunch.location = Some("Chuy's".to_string());
        lunch
    }

    /// Runs from the last week of December into January
    pub fn new_year_trip() -> Event {
        let mut trip = timed("trip", "New year trip", jan_at(1, 8, 0), jan_at(3, 18, 0));
        trip.start = NaiveDate::from_ymd_opt(2024, 12, 27)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap();
        trip.calendar_id = Some(CalendarId(2));
        trip
    }
}

/// Store holding every sample event and two calendars
pub fn january_store() -> EventStore {
    let mut store = EventStore::new();
    store.add_calendar(Calendar::new(1, "Home")).unwrap();
    store.add_calendar(Calendar::new(2, "Travel")).unwrap();
    for event in [
        events::vacation(),
        events::standup(),
        events::review(),
        events::lunch(),
        events::new_year_trip(),
    ] {
        store.add(event).unwrap();
    }
    store
}
