//! Grid layout engine.
//!
//! Turns the events of a [`ViewWindow`] into a [`GridLayout`]: for every
//! `(week, day)` cell, which event sits in which row, which slots are
//! continuation placeholders of multi-day events, and how tall each week
//! row has to be. The layout is rebuilt from scratch on every call; nothing
//! is cached between calls.

mod columns;
mod grid;
mod sorting;
mod visibility;

use std::collections::HashMap;

use chrono::NaiveDate;
use log::{debug, trace};

use crate::models::event::Event;
use crate::models::settings::LayoutSettings;
use crate::models::view::ViewWindow;
use grid::visible_days;

pub use columns::{layout_day_columns, ColumnPlacement};
pub use grid::{EventGrid, GridSlot, SpanPlaceholder};
pub use sorting::{compare_events, sort_day, SortPolicy};
pub use visibility::{is_visible, is_visible_in, overlaps};

/// Knobs of a layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LayoutOptions {
    pub sort_policy: SortPolicy,
    /// Rows shown per day before overflow; `None` means unlimited
    pub max_per_day: Option<usize>,
}

impl From<&LayoutSettings> for LayoutOptions {
    fn from(settings: &LayoutSettings) -> Self {
        Self {
            sort_policy: SortPolicy::from_spans_have_priority(settings.spans_have_priority),
            max_per_day: settings.max_events_per_day,
        }
    }
}

/// Result of one layout pass.
#[derive(Debug, Clone, PartialEq)]
pub struct GridLayout<'a> {
    pub grid: EventGrid<'a>,
    /// All-day and multi-day events only, for header banners
    pub all_day_grid: EventGrid<'a>,
    /// Per-week row count, capped one past `max_per_day`
    pub row_counts: Vec<usize>,
    pub max_per_day: Option<usize>,
}

impl<'a> GridLayout<'a> {
    pub fn week_count(&self) -> usize {
        self.grid.week_count()
    }

    pub fn day_count(&self) -> usize {
        self.grid.day_count()
    }

    /// Number of occupied slots in `(week, day)` that fall beyond `max_per_day`.
    pub fn skipped(&self, week: usize, day: usize) -> usize {
        match self.max_per_day {
            Some(max) => self
                .grid
                .cell(week, day)
                .iter()
                .skip(max)
                .filter(|slot| !slot.is_empty())
                .count(),
            None => 0,
        }
    }

    pub fn all_day_row_counts(&self) -> Vec<usize> {
        self.all_day_grid.row_counts(self.max_per_day)
    }
}

/// Lay out `events` for `window`.
///
/// Each cell receives the visible events that start on its date; the first
/// cell also receives events that began before the window. Events are ordered
/// per day with [`sort_day`], then multi-day events become placeholder runs
/// while single-day events take the first free row of their cell. All-day
/// and multi-day events are mirrored into the all-day grid.
///
/// # Panics
///
/// Panics if the window ends before it starts. [`ViewWindow`] constructors
/// reject such windows, so this only fires on a logic error.
pub fn build<'a, I>(events: I, window: &ViewWindow, options: &LayoutOptions) -> GridLayout<'a>
where
    I: IntoIterator<Item = &'a Event>,
{
    assert!(
        window.view_end() >= window.view_start(),
        "view window ends before it starts"
    );

    let weeks = window.row_count();
    let day_count = window.day_count();
    let first_date = window.first_date();

    let mut by_day: HashMap<NaiveDate, Vec<&'a Event>> = HashMap::new();
    let mut visible = 0usize;
    for event in events {
        if !is_visible_in(event, window) {
            continue;
        }
        if event.end < event.start {
            trace!("Event {} ends before it starts, clamping", event.id);
        }
        // Events that began before the window all land in the first cell
        let key = event.first_day().max(first_date);
        by_day.entry(key).or_default().push(event);
        visible += 1;
    }

    let mut grid = EventGrid::new(weeks, day_count);
    let mut all_day_grid = EventGrid::new(weeks, day_count);

    for w in 0..weeks {
        for d in 0..day_count {
            let date = window.date_at(w, d);
            let Some(mut day_events) = by_day.remove(&date) else {
                continue;
            };
            sort_day(&mut day_events, options.sort_policy);
            trace!("{} events start on {} at ({}, {})", day_events.len(), date, w, d);

            for event in day_events {
                if event.is_multi_day() {
                    let days = visible_days(event, window);
                    let placed = grid.place_span(window, event, w, d, days);
                    all_day_grid.place_span(window, event, w, d, days);
                    trace!("Span {} covers {} of {} visible days", event.id, placed, days);
                } else {
                    grid.place_event(w, d, event);
                    if event.all_day {
                        all_day_grid.place_event(w, d, event);
                    }
                }
            }
        }
    }

    if !by_day.is_empty() {
        debug!(
            "{} visible days fall outside the laid out rows",
            by_day.len()
        );
    }

    let row_counts = grid.row_counts(options.max_per_day);
    debug!(
        "Built {}x{} grid for {} visible events starting {}",
        weeks, day_count, visible, first_date
    );

    GridLayout {
        grid,
        all_day_grid,
        row_counts,
        max_per_day: options.max_per_day,
    }
}
