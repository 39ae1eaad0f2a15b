use chrono::{Duration, NaiveDate, NaiveDateTime};
use log::debug;

use super::resize::{create_time_range, resize_range};
use super::{CalendarEvent, CalendarListener};
use crate::models::event::{Event, EventId};
use crate::services::geometry::{DayHit, TimeHit};
use crate::utils::date::{copy_time, end_of_day, start_of_day};

/// Cell under the pointer while dragging.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragTarget {
    /// Whole day (month and multi-week grids)
    Day(NaiveDate),
    /// Increment slot of a time grid
    Time(NaiveDateTime),
}

impl DragTarget {
    pub fn date(&self) -> NaiveDate {
        match self {
            DragTarget::Day(date) => *date,
            DragTarget::Time(date_time) => date_time.date(),
        }
    }

    pub fn date_time(&self) -> NaiveDateTime {
        match self {
            DragTarget::Day(date) => start_of_day(*date),
            DragTarget::Time(date_time) => *date_time,
        }
    }
}

impl From<DayHit> for DragTarget {
    fn from(hit: DayHit) -> Self {
        DragTarget::Day(hit.date)
    }
}

impl From<TimeHit> for DragTarget {
    fn from(hit: TimeHit) -> Self {
        DragTarget::Time(hit.date_time)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum DragKind {
    /// Drag out whole days in a month grid
    CreateRange { origin: NaiveDate },
    /// Drag out time slots in a day column
    CreateTimeRange { origin: NaiveDateTime },
    Move {
        id: EventId,
        start: NaiveDateTime,
        end: NaiveDateTime,
    },
    Resize {
        id: EventId,
        start: NaiveDateTime,
        end: NaiveDateTime,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct DragContext {
    pub kind: DragKind,
    pub increment: Duration,
    pub hovered: Option<DragTarget>,
}

impl DragContext {
    pub fn new(kind: DragKind, increment_minutes: u32) -> Self {
        Self {
            kind,
            increment: Duration::minutes(increment_minutes.max(1) as i64),
            hovered: None,
        }
    }

    /// Range the drop would produce at the current hover position.
    ///
    /// Create drags fall back to their origin when nothing was hovered yet;
    /// move and resize drags have no range until the pointer moves.
    pub fn hovered_range(&self) -> Option<(NaiveDateTime, NaiveDateTime)> {
        match &self.kind {
            DragKind::CreateRange { origin } => {
                let current = self.hovered.map_or(*origin, |target| target.date());
                let (first, last) = if current < *origin {
                    (current, *origin)
                } else {
                    (*origin, current)
                };
                Some((start_of_day(first), end_of_day(last)))
            }
            DragKind::CreateTimeRange { origin } => {
                let hovered = self.hovered.map_or(*origin, |target| target.date_time());
                Some(create_time_range(*origin, hovered, self.increment))
            }
            DragKind::Move { start, end, .. } => {
                let new_start = match self.hovered? {
                    DragTarget::Day(date) => copy_time(*start, date),
                    DragTarget::Time(date_time) => date_time,
                };
                Some((new_start, *end + (new_start - *start)))
            }
            DragKind::Resize { start, .. } => {
                let hovered = self.hovered?.date_time();
                Some(resize_range(*start, hovered, self.increment))
            }
        }
    }
}

/// Transient drag state owned by the view host.
///
/// At most one drag is active. A finished create drag leaves the session
/// pending until the host calls [`DragSession::complete`]; clicks and new
/// drags are ignored meanwhile. Navigating away must call
/// [`DragSession::cancel`].
#[derive(Debug, Default)]
pub struct DragSession {
    active: Option<DragContext>,
    pending: Option<(NaiveDateTime, NaiveDateTime)>,
}

impl DragSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a drag. Returns false while a previous range is still pending.
    pub fn begin(&mut self, kind: DragKind, increment_minutes: u32) -> bool {
        if self.pending.is_some() {
            debug!("Ignoring drag start while a range selection is pending");
            return false;
        }
        self.active = Some(DragContext::new(kind, increment_minutes));
        true
    }

    pub fn begin_create_range(&mut self, origin: NaiveDate) -> bool {
        self.begin(DragKind::CreateRange { origin }, 1)
    }

    pub fn begin_create_time_range(&mut self, origin: NaiveDateTime, increment_minutes: u32) -> bool {
        self.begin(DragKind::CreateTimeRange { origin }, increment_minutes)
    }

    pub fn begin_move(&mut self, event: &Event) -> bool {
        self.begin(
            DragKind::Move {
                id: event.id.clone(),
                start: event.start,
                end: event.end,
            },
            1,
        )
    }

    pub fn begin_resize(&mut self, event: &Event, increment_minutes: u32) -> bool {
        self.begin(
            DragKind::Resize {
                id: event.id.clone(),
                start: event.start,
                end: event.end,
            },
            increment_minutes,
        )
    }

    pub fn active(&self) -> Option<&DragContext> {
        self.active.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Pending range awaiting [`DragSession::complete`].
    pub fn pending_range(&self) -> Option<(NaiveDateTime, NaiveDateTime)> {
        self.pending
    }

    /// Record the cell under the pointer and return the previewed range.
    pub fn update_hover(&mut self, target: impl Into<DragTarget>) -> Option<(NaiveDateTime, NaiveDateTime)> {
        let context = self.active.as_mut()?;
        context.hovered = Some(target.into());
        context.hovered_range()
    }

    /// Drop at the last hovered cell.
    ///
    /// Notifies `listener` and returns the raised event. Moves and resizes
    /// that leave the event unchanged raise nothing.
    pub fn finish<L>(&mut self, listener: &mut L) -> Option<CalendarEvent>
    where
        L: CalendarListener + ?Sized,
    {
        let context = self.active.take()?;
        let (start, end) = context.hovered_range()?;

        let event = match context.kind {
            DragKind::CreateRange { .. } | DragKind::CreateTimeRange { .. } => {
                self.pending = Some((start, end));
                CalendarEvent::RangeSelect { start, end }
            }
            DragKind::Move {
                id,
                start: old_start,
                ..
            } => {
                if start == old_start {
                    debug!("Event {} dropped where it started", id);
                    return None;
                }
                CalendarEvent::EventMove { id, start, end }
            }
            DragKind::Resize {
                id,
                start: old_start,
                end: old_end,
            } => {
                if (start, end) == (old_start, old_end) {
                    return None;
                }
                CalendarEvent::EventResize { id, start, end }
            }
        };

        listener.notify(event.clone());
        Some(event)
    }

    /// Host finished handling a range selection.
    pub fn complete(&mut self) -> Option<(NaiveDateTime, NaiveDateTime)> {
        self.pending.take()
    }

    /// Drop all drag state without notifying.
    pub fn cancel(&mut self) {
        let had_drag = self.active.take().is_some();
        let had_pending = self.pending.take().is_some();
        if had_drag || had_pending {
            debug!("Drag cancelled");
        }
    }

    /// Raise `EventClick` unless a range selection is pending.
    pub fn click_event<L>(&self, id: &EventId, listener: &mut L) -> bool
    where
        L: CalendarListener + ?Sized,
    {
        if self.is_pending() {
            return false;
        }
        listener.notify(CalendarEvent::EventClick { id: id.clone() });
        true
    }

    /// Raise `DayClick` unless a range selection is pending.
    pub fn click_day<L>(&self, date: NaiveDate, all_day: bool, listener: &mut L) -> bool
    where
        L: CalendarListener + ?Sized,
    {
        if self.is_pending() {
            return false;
        }
        listener.notify(CalendarEvent::DayClick { date, all_day });
        true
    }
}
