// Day column rendering strategy
// Positions timed single-day events inside the scrolling body of day and week views

use chrono::{NaiveDate, Timelike};

use super::GridRenderer;
use crate::models::event::Event;
use crate::models::settings::LayoutSettings;
use crate::models::view::ViewWindow;
use crate::services::layout::{layout_day_columns, GridLayout, GridSlot};

/// Positioned box for one timed event.
///
/// `top` and `height` are pixels from the top of the day body; `left` and
/// `width` are percentages of the column width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EventBox<'a> {
    pub event: &'a Event,
    pub date: NaiveDate,
    pub top: f32,
    pub height: f32,
    pub left: f32,
    pub width: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DayColumn<'a> {
    pub day: usize,
    pub date: NaiveDate,
    pub boxes: Vec<EventBox<'a>>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayColumnRenderer {
    pub hour_height: f32,
    pub min_event_height: f32,
}

impl Default for DayColumnRenderer {
    fn default() -> Self {
        Self::from(&LayoutSettings::default())
    }
}

impl From<&LayoutSettings> for DayColumnRenderer {
    fn from(settings: &LayoutSettings) -> Self {
        Self {
            hour_height: settings.hour_height,
            min_event_height: settings.min_event_height,
        }
    }
}

impl DayColumnRenderer {
    fn event_box<'a>(&self, event: &'a Event, date: NaiveDate, left: f32, width: f32) -> EventBox<'a> {
        let start_minutes = (event.start.hour() * 60 + event.start.minute()) as f32;
        let duration_minutes = event.duration().num_seconds() as f32 / 60.0;
        EventBox {
            event,
            date,
            top: (start_minutes * self.hour_height / 60.0).round(),
            height: (duration_minutes * self.hour_height / 60.0).max(self.min_event_height),
            left,
            width,
        }
    }
}

impl<'a> GridRenderer<'a> for DayColumnRenderer {
    type Output = Vec<DayColumn<'a>>;

    /// All-day events and multi-day spans belong to the header banner and
    /// are left out of the columns.
    fn render(&self, layout: &GridLayout<'a>, window: &ViewWindow) -> Self::Output {
        let mut columns = Vec::with_capacity(layout.week_count() * layout.day_count());

        for week in 0..layout.week_count() {
            for day in 0..layout.day_count() {
                let date = window.date_at(week, day);
                let timed: Vec<&'a Event> = layout
                    .grid
                    .cell(week, day)
                    .iter()
                    .filter_map(|slot| match slot {
                        GridSlot::Event(event) if !event.all_day => Some(*event),
                        _ => None,
                    })
                    .collect();

                let boxes = layout_day_columns(&timed)
                    .into_iter()
                    .map(|placement| self.event_box(placement.event, date, placement.left, placement.width))
                    .collect();

                columns.push(DayColumn {
                    day: week * layout.day_count() + day,
                    date,
                    boxes,
                });
            }
        }

        columns
    }
}
