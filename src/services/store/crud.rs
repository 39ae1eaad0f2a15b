use anyhow::{anyhow, bail, Result};
use log::{debug, info};

use super::EventStore;
use crate::models::calendar::{Calendar, CalendarId};
use crate::models::event::{Event, EventId};
use crate::services::interaction::CalendarEvent;

impl EventStore {
    /// Add a new event. Ids must be unique.
    pub fn add(&mut self, event: Event) -> Result<&Event> {
        event.validate().map_err(|e| anyhow!(e))?;
        if self.get(&event.id).is_some() {
            bail!("Event {} already exists", event.id);
        }

        debug!("Adding event {} ({})", event.id, event.display_title());
        self.events.push(event);
        Ok(&self.events[self.events.len() - 1])
    }

    /// Retrieve an event by id.
    pub fn get(&self, id: &EventId) -> Option<&Event> {
        self.events.iter().find(|event| &event.id == id)
    }

    /// Replace the stored event carrying the same id.
    pub fn update(&mut self, event: Event) -> Result<()> {
        event.validate().map_err(|e| anyhow!(e))?;
        let slot = self
            .events
            .iter_mut()
            .find(|existing| existing.id == event.id)
            .ok_or_else(|| anyhow!("Event {} not found", event.id))?;
        *slot = event;
        Ok(())
    }

    /// Remove an event, returning it.
    pub fn remove(&mut self, id: &EventId) -> Result<Event> {
        let index = self
            .events
            .iter()
            .position(|event| &event.id == id)
            .ok_or_else(|| anyhow!("Event {} not found", id))?;
        Ok(self.events.remove(index))
    }

    /// Apply a move or resize notification to the stored event.
    ///
    /// Returns false for notifications that do not change stored data.
    pub fn apply(&mut self, change: &CalendarEvent) -> Result<bool> {
        let (id, start, end) = match change {
            CalendarEvent::EventMove { id, start, end }
            | CalendarEvent::EventResize { id, start, end } => (id, *start, *end),
            _ => return Ok(false),
        };

        let event = self
            .events
            .iter_mut()
            .find(|event| &event.id == id)
            .ok_or_else(|| anyhow!("Event {} not found", id))?;
        event.start = start;
        event.end = end;
        info!("Event {} now runs {} .. {}", id, start, end);
        Ok(true)
    }

    pub fn add_calendar(&mut self, calendar: Calendar) -> Result<()> {
        calendar.validate().map_err(|e| anyhow!(e))?;
        if self.calendar(calendar.id).is_some() {
            bail!("Calendar {} already exists", calendar.id);
        }
        self.calendars.push(calendar);
        Ok(())
    }

    /// Show or hide every event of a calendar.
    pub fn set_calendar_hidden(&mut self, id: CalendarId, hidden: bool) -> Result<()> {
        let calendar = self
            .calendars
            .iter_mut()
            .find(|calendar| calendar.id == id)
            .ok_or_else(|| anyhow!("Calendar {} not found", id))?;
        calendar.hidden = hidden;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    fn at(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, day)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    fn sample(id: &str) -> Event {
        Event::new(id, "Sample", at(6, 9), at(6, 10)).unwrap()
    }

    #[test]
    fn test_add_and_get() {
        let mut store = EventStore::new();
        store.add(sample("1")).unwrap();
        assert_eq!(store.len(), 1);
        assert!(store.get(&EventId::from("1")).is_some());
        assert!(store.get(&EventId::from("2")).is_none());
    }

    #[test]
    fn test_add_duplicate_rejected() {
        let mut store = EventStore::new();
        store.add(sample("1")).unwrap();
        let err = store.add(sample("1")).unwrap_err();
        assert!(err.to_string().contains("already exists"));
    }

    #[test]
    fn test_update_and_remove() {
        let mut store = EventStore::new();
        store.add(sample("1")).unwrap();

        let mut changed = sample("1");
        changed.title = "Renamed".to_string();
        store.update(changed).unwrap();
        assert_eq!(store.get(&EventId::from("1")).unwrap().title, "Renamed");

        let removed = store.remove(&EventId::from("1")).unwrap();
        assert_eq!(removed.title, "Renamed");
        assert!(store.is_empty());
        assert!(store.remove(&EventId::from("1")).is_err());
        assert!(store.update(sample("9")).is_err());
    }

    #[test]
    fn test_apply_move() {
        let mut store = EventStore::new();
        store.add(sample("1")).unwrap();
        let changed = store
            .apply(&CalendarEvent::EventMove {
                id: "1".into(),
                start: at(7, 9),
                end: at(7, 10),
            })
            .unwrap();
        assert!(changed);
        assert_eq!(store.get(&EventId::from("1")).unwrap().start, at(7, 9));

        let ignored = store
            .apply(&CalendarEvent::EventClick { id: "1".into() })
            .unwrap();
        assert!(!ignored);
    }

    #[test]
    fn test_hide_calendar() {
        let mut store = EventStore::new();
        store.add_calendar(Calendar::new(1, "Home")).unwrap();
        assert!(store.add_calendar(Calendar::new(1, "Again")).is_err());
        store.set_calendar_hidden(CalendarId(1), true).unwrap();
        assert!(store.calendar(CalendarId(1)).unwrap().hidden);
        assert!(store.set_calendar_hidden(CalendarId(5), true).is_err());
    }
}
