//! In-memory event store.
//! Holds the events and calendars a host feeds into the layout engine,
//! with JSON persistence and the window/day queries the views need.

mod crud;
mod persistence;
mod queries;

use crate::models::calendar::{Calendar, CalendarId};
use crate::models::event::Event;

pub use persistence::{load_snapshot, save_snapshot, StoreSnapshot};
pub use queries::DayDetailItem;

/// Events and calendars kept in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventStore {
    pub(crate) events: Vec<Event>,
    pub(crate) calendars: Vec<Calendar>,
}

impl EventStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn all(&self) -> &[Event] {
        &self.events
    }

    pub fn calendars(&self) -> &[Calendar] {
        &self.calendars
    }

    pub fn calendar(&self, id: CalendarId) -> Option<&Calendar> {
        self.calendars.iter().find(|calendar| calendar.id == id)
    }

    /// False only for events of a known, hidden calendar.
    pub(crate) fn is_calendar_shown(&self, event: &Event) -> bool {
        event
            .calendar_id
            .and_then(|id| self.calendar(id))
            .map_or(true, |calendar| !calendar.hidden)
    }
}
