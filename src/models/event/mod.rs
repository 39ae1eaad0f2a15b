// Event module
// Calendar event record as consumed by the grid layout engine

use std::fmt;

use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};

use crate::models::calendar::CalendarId;
use crate::utils::date::diff_days;

/// Opaque, stable event identifier.
///
/// Event feeds use numeric ids while hosts frequently mint string ids, so both
/// deserialize into the same string form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct EventId(pub String);

impl EventId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EventId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for EventId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<i64> for EventId {
    fn from(value: i64) -> Self {
        Self(value.to_string())
    }
}

impl<'de> Deserialize<'de> for EventId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Number(i64),
            Text(String),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Number(n) => EventId::from(n),
            RawId::Text(s) => EventId(s),
        })
    }
}

/// Calendar event.
///
/// Timed events treat `end` as exclusive: an event ending at midnight does not
/// occupy the following day. All-day events use `end` as given, so it names
/// the last day the event occupies and may equal `start`.
///
/// Serialized field names follow the compact keys used by calendar event feeds
/// (`cid`, `loc`, `ad`, `rem`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    #[serde(rename = "cid", default, skip_serializing_if = "Option::is_none")]
    pub calendar_id: Option<CalendarId>,
    #[serde(default)]
    pub title: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    #[serde(rename = "ad", default)]
    pub all_day: bool,
    #[serde(rename = "loc", default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Reminder lead time in minutes, as entered.
    #[serde(rename = "rem", default, skip_serializing_if = "Option::is_none")]
    pub reminder: Option<String>,
}

impl Event {
    /// Create a new timed event with required fields
    ///
    /// # Examples
    /// ```
    /// use calendar_grid::models::event::Event;
    /// use chrono::NaiveDate;
    ///
    /// let start = NaiveDate::from_ymd_opt(2025, 1, 6).unwrap().and_hms_opt(10, 0, 0).unwrap();
    /// let end = start + chrono::Duration::hours(1);
    /// let event = Event::new("42", "Team Meeting", start, end).unwrap();
    /// assert!(!event.is_multi_day());
    /// ```
    pub fn new(
        id: impl Into<EventId>,
        title: impl Into<String>,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Self, String> {
        let event = Self {
            id: id.into(),
            calendar_id: None,
            title: title.into(),
            start,
            end,
            all_day: false,
            location: None,
            notes: None,
            url: None,
            reminder: None,
        };
        event.validate()?;
        Ok(event)
    }

    /// Create a builder for constructing events with optional fields
    pub fn builder() -> EventBuilder {
        EventBuilder::new()
    }

    /// Validate the event.
    ///
    /// An inverted range is not an error: the layout clamps it to a minimal
    /// duration so the event still renders.
    pub fn validate(&self) -> Result<(), String> {
        if self.id.0.trim().is_empty() {
            return Err("Event id cannot be empty".to_string());
        }

        if let Some(ref reminder) = self.reminder {
            if !reminder.is_empty() && reminder.parse::<u32>().is_err() {
                return Err("Reminder must be a number of minutes".to_string());
            }
        }

        Ok(())
    }

    /// Title for display, with a placeholder for untitled events.
    pub fn display_title(&self) -> &str {
        if self.title.trim().is_empty() {
            "(No title)"
        } else {
            &self.title
        }
    }

    /// End instant with zero or negative durations normalised to one second.
    pub fn effective_end(&self) -> NaiveDateTime {
        if self.all_day {
            self.end.max(self.start)
        } else {
            self.end.max(self.start + Duration::seconds(1))
        }
    }

    /// Last instant the event occupies (inclusive).
    pub fn last_instant(&self) -> NaiveDateTime {
        if self.all_day {
            self.effective_end()
        } else {
            self.effective_end() - Duration::seconds(1)
        }
    }

    pub fn first_day(&self) -> NaiveDate {
        self.start.date()
    }

    pub fn last_day(&self) -> NaiveDate {
        self.last_instant().date()
    }

    /// Number of calendar days the event touches.
    pub fn day_span(&self) -> i64 {
        diff_days(self.start, self.last_instant()) + 1
    }

    /// True when the event touches more than one calendar day.
    pub fn is_multi_day(&self) -> bool {
        self.day_span() > 1
    }

    /// Get the duration of the event
    pub fn duration(&self) -> Duration {
        self.effective_end() - self.start
    }

    /// Copy of this event moved so that it starts at `start`, keeping its duration.
    pub fn moved_to(&self, start: NaiveDateTime) -> Event {
        let delta = start - self.start;
        Event {
            start,
            end: self.end + delta,
            ..self.clone()
        }
    }
}

/// Builder for creating events with optional fields
#[derive(Default)]
pub struct EventBuilder {
    id: Option<EventId>,
    calendar_id: Option<CalendarId>,
    title: Option<String>,
    start: Option<NaiveDateTime>,
    end: Option<NaiveDateTime>,
    all_day: bool,
    location: Option<String>,
    notes: Option<String>,
    url: Option<String>,
    reminder: Option<String>,
}

impl EventBuilder {
    /// Create a new event builder
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: impl Into<EventId>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn calendar(mut self, calendar_id: CalendarId) -> Self {
        self.calendar_id = Some(calendar_id);
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn start(mut self, start: NaiveDateTime) -> Self {
        self.start = Some(start);
        self
    }

    pub fn end(mut self, end: NaiveDateTime) -> Self {
        self.end = Some(end);
        self
    }

    /// Set as all-day event
    pub fn all_day(mut self, all_day: bool) -> Self {
        self.all_day = all_day;
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Reminder lead time in minutes
    pub fn reminder(mut self, minutes: u32) -> Self {
        self.reminder = Some(minutes.to_string());
        self
    }

    /// Build the event
    pub fn build(self) -> Result<Event, String> {
        let id = self.id.ok_or("Event id is required")?;
        let start = self.start.ok_or("Event start time is required")?;
        let end = self.end.ok_or("Event end time is required")?;

        let event = Event {
            id,
            calendar_id: self.calendar_id,
            title: self.title.unwrap_or_default(),
            start,
            end,
            all_day: self.all_day,
            location: self.location,
            notes: self.notes,
            url: self.url,
            reminder: self.reminder,
        };

        event.validate()?;
        Ok(event)
    }
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

    #[test]
    fn test_new_event_success() {
        let event = Event::new("1", "Meeting", at(6, 10, 0), at(6, 11, 0)).unwrap();
        assert_eq!(event.id, EventId::from("1"));
        assert_eq!(event.title, "Meeting");
        assert!(!event.all_day);
        assert!(event.location.is_none());
    }

    #[test]
    fn test_new_event_empty_id() {
        let result = Event::new("  ", "Meeting", at(6, 10, 0), at(6, 11, 0));
        assert_eq!(result.unwrap_err(), "Event id cannot be empty");
    }

    #[test]
    fn test_inverted_range_is_accepted_and_clamped() {
        let event = Event::new("1", "Backwards", at(6, 10, 0), at(6, 9, 0)).unwrap();
        assert_eq!(event.effective_end(), at(6, 10, 0) + Duration::seconds(1));
        assert_eq!(event.last_instant(), at(6, 10, 0));
        assert_eq!(event.duration(), Duration::seconds(1));
    }

    #[test]
    fn test_midnight_end_does_not_bleed_into_next_day() {
        let event = Event::new("1", "Late", at(6, 22, 0), at(7, 0, 0)).unwrap();
        assert_eq!(event.last_day(), NaiveDate::from_ymd_opt(2025, 1, 6).unwrap());
        assert!(!event.is_multi_day());
    }

    #[test]
    fn test_all_day_end_is_inclusive() {
        let event = Event::builder()
            .id("2")
            .title("Holiday")
            .start(at(6, 0, 0))
            .end(at(8, 0, 0))
            .all_day(true)
            .build()
            .unwrap();
        assert_eq!(event.day_span(), 3);
        assert!(event.is_multi_day());
    }

    #[test]
    fn test_single_all_day_with_equal_bounds() {
        let event = Event::builder()
            .id("3")
            .start(at(6, 0, 0))
            .end(at(6, 0, 0))
            .all_day(true)
            .build()
            .unwrap();
        assert_eq!(event.day_span(), 1);
        assert_eq!(event.display_title(), "(No title)");
    }

    #[test]
    fn test_builder_missing_id() {
        let result = Event::builder().start(at(6, 1, 0)).end(at(6, 2, 0)).build();
        assert_eq!(result.unwrap_err(), "Event id is required");
    }

    #[test]
    fn test_builder_missing_start() {
        let result = Event::builder().id("1").end(at(6, 2, 0)).build();
        assert_eq!(result.unwrap_err(), "Event start time is required");
    }

    #[test]
    fn test_builder_missing_end() {
        let result = Event::builder().id("1").start(at(6, 2, 0)).build();
        assert_eq!(result.unwrap_err(), "Event end time is required");
    }

    #[test]
    fn test_validate_reminder() {
        let mut event = Event::new("1", "Call", at(6, 10, 0), at(6, 11, 0)).unwrap();
        event.reminder = Some("15".to_string());
        assert!(event.validate().is_ok());
        event.reminder = Some("soon".to_string());
        assert!(event.validate().unwrap_err().contains("minutes"));
    }

    #[test]
    fn test_moved_to_keeps_duration() {
        let event = Event::new("1", "Call", at(6, 10, 0), at(6, 11, 30)).unwrap();
        let moved = event.moved_to(at(8, 14, 0));
        assert_eq!(moved.end, at(8, 15, 30));
        assert_eq!(moved.id, event.id);
    }

    #[test]
    fn test_deserialize_feed_record() {
        let json = r#"{
            "id": 1002,
            "cid": 2,
            "title": "Lunch with Matt",
            "start": "2025-01-06T11:30:00",
            "end": "2025-01-06T13:00:00",
            "loc": "Chuy's!",
            "rem": "15"
        }"#;
        let event: Event = serde_json::from_str(json).unwrap();
        assert_eq!(event.id.as_str(), "1002");
        assert_eq!(event.calendar_id, Some(CalendarId(2)));
        assert_eq!(event.location.as_deref(), Some("Chuy's!"));
        assert!(!event.all_day);
        assert_eq!(event.start, at(6, 11, 30));
    }

    #[test]
    fn test_serialize_uses_feed_keys() {
        let event = Event::builder()
            .id("abc")
            .title("Offsite")
            .start(at(6, 0, 0))
            .end(at(7, 0, 0))
            .all_day(true)
            .build()
            .unwrap();
        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["id"], "abc");
        assert_eq!(value["ad"], true);
        assert!(value.get("loc").is_none());
    }
}
