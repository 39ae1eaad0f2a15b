// Month grid rendering strategy
// Flattens each week of the layout into bars, filler cells and "+N more" markers

use chrono::NaiveDate;

use super::GridRenderer;
use crate::models::event::Event;
use crate::models::view::ViewWindow;
use crate::services::layout::{EventGrid, GridLayout};
use crate::utils::date::start_of_day;

/// Horizontal bar for one event within a week row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EventBar<'a> {
    pub event: &'a Event,
    pub row: usize,
    pub day: usize,
    /// Number of day columns the bar covers
    pub col_span: usize,
    /// Event started before this week row
    pub span_left: bool,
    /// Event continues after this week row
    pub span_right: bool,
    /// Draw as an all-day bar (all-day events and multi-day spans)
    pub all_day: bool,
}

/// Blank filler so sparse rows keep their height.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyCell {
    pub row: usize,
    pub day: usize,
    pub row_span: usize,
}

/// Overflow marker for a day with more events than fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoreIndicator {
    pub day: usize,
    pub date: NaiveDate,
    pub skipped: usize,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WeekRowItem<'a> {
    Bar(EventBar<'a>),
    Empty(EmptyCell),
    More(MoreIndicator),
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeekRow<'a> {
    pub week: usize,
    pub first_date: NaiveDate,
    /// Height of the row in event rows
    pub row_count: usize,
    pub items: Vec<WeekRowItem<'a>>,
}

impl<'a> WeekRow<'a> {
    pub fn bars(&self) -> impl Iterator<Item = &EventBar<'a>> {
        self.items.iter().filter_map(|item| match item {
            WeekRowItem::Bar(bar) => Some(bar),
            _ => None,
        })
    }

    pub fn more(&self) -> impl Iterator<Item = &MoreIndicator> {
        self.items.iter().filter_map(|item| match item {
            WeekRowItem::More(more) => Some(more),
            _ => None,
        })
    }
}

/// Renders the event grid, or the all-day grid for day-header banners.
#[derive(Debug, Clone, Copy, Default)]
pub struct MonthGridRenderer {
    banner: bool,
}

impl MonthGridRenderer {
    pub fn month() -> Self {
        Self { banner: false }
    }

    /// Day and week view header: only all-day and multi-day events.
    pub fn banner() -> Self {
        Self { banner: true }
    }

    fn render_week<'a>(
        &self,
        layout: &GridLayout<'a>,
        grid: &EventGrid<'a>,
        row_count: usize,
        window: &ViewWindow,
        week: usize,
    ) -> WeekRow<'a> {
        let (week_first, week_last) = window.week_bounds(week);
        let last_date = week_last.min(window.last_date());
        let max = layout.max_per_day.unwrap_or(usize::MAX);
        let mut items = Vec::new();

        for day in 0..grid.day_count() {
            let date = window.date_at(week, day);
            let cell = grid.cell(week, day);

            if cell.is_empty() {
                items.push(WeekRowItem::Empty(EmptyCell {
                    row: 0,
                    day,
                    row_span: row_count.max(1),
                }));
                continue;
            }

            let mut skipped = 0;
            for (row, slot) in cell.iter().enumerate() {
                if row >= max {
                    if !slot.is_empty() {
                        skipped += 1;
                    }
                    continue;
                }
                if slot.is_empty() {
                    items.push(WeekRowItem::Empty(EmptyCell {
                        row,
                        day,
                        row_span: 1,
                    }));
                    continue;
                }
                if !slot.starts_bar() {
                    continue;
                }
                let Some(event) = slot.event() else {
                    continue;
                };

                let remaining = (event.last_day().min(last_date) - date).num_days() + 1;
                items.push(WeekRowItem::Bar(EventBar {
                    event,
                    row,
                    day,
                    col_span: (remaining.max(1) as usize).min(grid.day_count() - day),
                    span_left: event.start < start_of_day(week_first),
                    span_right: event.last_day() > week_last,
                    all_day: event.all_day || slot.as_span().is_some(),
                }));
            }

            if skipped > 0 {
                items.push(WeekRowItem::More(MoreIndicator { day, date, skipped }));
            }

            if cell.len() < row_count {
                items.push(WeekRowItem::Empty(EmptyCell {
                    row: cell.len(),
                    day,
                    row_span: row_count - cell.len(),
                }));
            }
        }

        WeekRow {
            week,
            first_date: week_first,
            row_count,
            items,
        }
    }
}

impl<'a> GridRenderer<'a> for MonthGridRenderer {
    type Output = Vec<WeekRow<'a>>;

    fn render(&self, layout: &GridLayout<'a>, window: &ViewWindow) -> Self::Output {
        let (grid, row_counts) = if self.banner {
            (&layout.all_day_grid, layout.all_day_row_counts())
        } else {
            (&layout.grid, layout.row_counts.clone())
        };

        row_counts
            .iter()
            .enumerate()
            .map(|(week, &rows)| self.render_week(layout, grid, rows, window, week))
            .collect()
    }
}
