//! Notifications raised by pointer interactions, and the drag state behind them.
//!
//! The grid never talks to the host directly. Clicks and drops are turned
//! into [`CalendarEvent`]s and handed to a [`CalendarListener`] supplied by
//! the caller.

mod drag;
mod resize;

use std::sync::mpsc::Sender;

use chrono::{NaiveDate, NaiveDateTime};
use log::warn;
use serde::{Deserialize, Serialize};

use crate::models::event::EventId;

pub use drag::{DragContext, DragKind, DragSession, DragTarget};
pub use resize::{create_time_range, resize_range};

/// Notification for the host application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum CalendarEvent {
    /// An event was clicked
    EventClick { id: EventId },
    /// An event was dragged to a new start; `end` keeps its duration
    EventMove {
        id: EventId,
        start: NaiveDateTime,
        end: NaiveDateTime,
    },
    /// An event's bounds were changed by dragging its edge
    EventResize {
        id: EventId,
        start: NaiveDateTime,
        end: NaiveDateTime,
    },
    /// A free range was dragged out; the host should open an editor
    RangeSelect {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },
    /// Empty space on a day was clicked
    DayClick { date: NaiveDate, all_day: bool },
}

/// Receiver of [`CalendarEvent`]s.
#[cfg_attr(test, mockall::automock)]
pub trait CalendarListener {
    fn notify(&mut self, event: CalendarEvent);
}

impl CalendarListener for Vec<CalendarEvent> {
    fn notify(&mut self, event: CalendarEvent) {
        self.push(event);
    }
}

/// Forwards notifications to a host thread. A closed channel drops them.
impl CalendarListener for Sender<CalendarEvent> {
    fn notify(&mut self, event: CalendarEvent) {
        if let Err(err) = self.send(event) {
            warn!("Dropping calendar notification, receiver is gone: {:?}", err.0);
        }
    }
}
