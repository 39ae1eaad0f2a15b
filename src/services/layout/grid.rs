// Event grid storage and row placement

use chrono::NaiveDateTime;

use crate::models::event::{Event, EventId};
use crate::models::view::ViewWindow;
use crate::utils::date::{diff_days, start_of_day};

/// Continuation record for a multi-day event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpanPlaceholder<'a> {
    pub event: &'a Event,
    /// First placeholder of a row segment; renderers draw the bar from here
    pub is_span_start: bool,
    /// The event began before this row
    pub span_left: bool,
    /// The event continues after this cell's row or past the view
    pub span_right: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GridSlot<'a> {
    Empty,
    Event(&'a Event),
    Span(SpanPlaceholder<'a>),
}

impl<'a> GridSlot<'a> {
    pub fn event(&self) -> Option<&'a Event> {
        match self {
            GridSlot::Empty => None,
            GridSlot::Event(event) => Some(event),
            GridSlot::Span(span) => Some(span.event),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, GridSlot::Empty)
    }

    /// True for slots that start a visual bar (plain events and span starts).
    pub fn starts_bar(&self) -> bool {
        match self {
            GridSlot::Empty => false,
            GridSlot::Event(_) => true,
            GridSlot::Span(span) => span.is_span_start,
        }
    }

    pub fn as_span(&self) -> Option<&SpanPlaceholder<'a>> {
        match self {
            GridSlot::Span(span) => Some(span),
            _ => None,
        }
    }
}

/// Rows of slots for every `(week, day)` cell of a view.
#[derive(Debug, Clone, PartialEq)]
pub struct EventGrid<'a> {
    day_count: usize,
    weeks: Vec<Vec<Vec<GridSlot<'a>>>>,
}

impl<'a> EventGrid<'a> {
    pub fn new(week_count: usize, day_count: usize) -> Self {
        Self {
            day_count,
            weeks: vec![vec![Vec::new(); day_count]; week_count],
        }
    }

    pub fn week_count(&self) -> usize {
        self.weeks.len()
    }

    pub fn day_count(&self) -> usize {
        self.day_count
    }

    /// Slots of a cell ordered by row. Out-of-range cells are empty.
    pub fn cell(&self, week: usize, day: usize) -> &[GridSlot<'a>] {
        self.weeks
            .get(week)
            .and_then(|days| days.get(day))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn slot(&self, week: usize, day: usize, row: usize) -> Option<&GridSlot<'a>> {
        self.cell(week, day).get(row)
    }

    /// Lowest row holding no event, or the cell length when every row is taken.
    pub fn free_row(&self, week: usize, day: usize) -> usize {
        let cell = self.cell(week, day);
        cell.iter().position(GridSlot::is_empty).unwrap_or(cell.len())
    }

    /// Row occupied by `id` in a cell, if any.
    pub fn row_of(&self, week: usize, day: usize, id: &EventId) -> Option<usize> {
        self.cell(week, day)
            .iter()
            .position(|slot| slot.event().is_some_and(|event| &event.id == id))
    }

    pub fn occupied(&self, week: usize, day: usize) -> usize {
        self.cell(week, day).iter().filter(|slot| !slot.is_empty()).count()
    }

    /// Per-week row counts, each day capped one past `max_per_day` so an
    /// overflow indicator can be sized without the true count.
    pub fn row_counts(&self, max_per_day: Option<usize>) -> Vec<usize> {
        self.weeks
            .iter()
            .map(|days| {
                days.iter()
                    .map(|cell| match max_per_day {
                        Some(max) => cell.len().min(max.saturating_add(1)),
                        None => cell.len(),
                    })
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    pub(crate) fn place(&mut self, week: usize, day: usize, row: usize, slot: GridSlot<'a>) {
        let cell = &mut self.weeks[week][day];
        if cell.len() <= row {
            cell.resize(row + 1, GridSlot::Empty);
        }
        debug_assert!(cell[row].is_empty(), "slot ({week}, {day}, {row}) already taken");
        cell[row] = slot;
    }

    /// Put a single-cell event in the first free row of `(week, day)`.
    pub(crate) fn place_event(&mut self, week: usize, day: usize, event: &'a Event) -> usize {
        let row = self.free_row(week, day);
        self.place(week, day, row, GridSlot::Event(event));
        row
    }

    /// Lay down placeholders for `event` covering `days` visible days from `(week, day)`.
    ///
    /// The row picked in the first cell is kept for the rest of that row
    /// segment; each following segment starts on the first free row of its
    /// column 0. Returns the number of placeholders written.
    pub(crate) fn place_span(
        &mut self,
        window: &ViewWindow,
        event: &'a Event,
        week: usize,
        day: usize,
        days: usize,
    ) -> usize {
        let continues_past_view = event.last_instant() > window.view_end();
        let first_of_week = start_of_day(window.week_bounds(week).0);

        let (mut w, mut d) = (week, day);
        let mut row = self.free_row(w, d);
        let mut placed = 0;

        for remaining in (1..=days).rev() {
            let is_last = remaining == 1;
            let segment_start = placed == 0 || d == 0;
            let span_left = if placed == 0 {
                event.start < first_of_week
            } else {
                d == 0
            };
            let span_right = if is_last {
                continues_past_view
            } else {
                d + 1 == self.day_count
            };

            self.place(
                w,
                d,
                row,
                GridSlot::Span(SpanPlaceholder {
                    event,
                    is_span_start: segment_start,
                    span_left,
                    span_right,
                }),
            );
            placed += 1;

            if is_last {
                break;
            }
            d += 1;
            if d == self.day_count {
                d = 0;
                w += 1;
                if w >= self.week_count() {
                    break;
                }
                row = self.free_row(w, 0);
            }
        }

        placed
    }
}

/// Visible days of `event`, clipped to the window.
pub(crate) fn visible_days(event: &Event, window: &ViewWindow) -> usize {
    let first: NaiveDateTime = event.start.max(window.view_start());
    let last = event.last_instant().min(window.view_end());
    (diff_days(first, last) + 1).max(1) as usize
}
