//! Pixel to date mapping for pointer interactions.
//!
//! Both geometries are pure functions of a container box and the cell counts
//! of the view, so the cell a pointer resolves to is exactly the cell the
//! renderer drew there.

use chrono::{Duration, NaiveDate, NaiveDateTime, Timelike};

use crate::models::settings::LayoutSettings;
use crate::models::view::ViewWindow;
use crate::utils::date::start_of_day;

const MINUTES_PER_DAY: u32 = 24 * 60;

/// Largest divisor of an hour not above `minutes`, so increment rows tile the day.
fn snap_increment(minutes: u32) -> u32 {
    (1..=minutes.clamp(1, 60))
        .rev()
        .find(|m| 60 % m == 0)
        .unwrap_or(1)
}

/// Axis-aligned box in container pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Half-open containment: the right and bottom edges belong to the next box.
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }
}

/// Day cell under the pointer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayHit {
    pub date: NaiveDate,
    pub week: usize,
    pub day: usize,
    pub cell: Bounds,
}

/// Time slot under the pointer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeHit {
    pub date_time: NaiveDateTime,
    pub day: usize,
    pub slot: usize,
    pub cell: Bounds,
}

/// Geometry of a month or multi-week grid.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthGeometry {
    pub container: Bounds,
    pub first_date: NaiveDate,
    pub day_count: usize,
    pub week_count: usize,
}

impl MonthGeometry {
    pub fn new(container: Bounds, window: &ViewWindow) -> Self {
        Self {
            container,
            first_date: window.first_date(),
            day_count: window.day_count(),
            week_count: window.row_count(),
        }
    }

    pub fn cell_width(&self) -> f32 {
        self.container.width / self.day_count.max(1) as f32
    }

    pub fn cell_height(&self) -> f32 {
        self.container.height / self.week_count.max(1) as f32
    }

    /// Resolve a pointer position to the day cell under it.
    pub fn day_at(&self, x: f32, y: f32) -> Option<DayHit> {
        if !self.container.contains(x, y) {
            return None;
        }
        let day = (((x - self.container.x) / self.cell_width()).floor() as usize)
            .min(self.day_count.saturating_sub(1));
        let week = (((y - self.container.y) / self.cell_height()).floor() as usize)
            .min(self.week_count.saturating_sub(1));
        let date = self.first_date + Duration::days((week * self.day_count + day) as i64);

        Some(DayHit {
            date,
            week,
            day,
            cell: self.cell_bounds(week, day),
        })
    }

    /// Box of the cell showing `date`, if it is on the grid.
    pub fn day_box(&self, date: NaiveDate) -> Option<Bounds> {
        let offset = (date - self.first_date).num_days();
        if offset < 0 {
            return None;
        }
        let offset = offset as usize;
        let week = offset / self.day_count;
        (week < self.week_count).then(|| self.cell_bounds(week, offset % self.day_count))
    }

    fn cell_bounds(&self, week: usize, day: usize) -> Bounds {
        let (w, h) = (self.cell_width(), self.cell_height());
        Bounds::new(
            self.container.x + day as f32 * w,
            self.container.y + week as f32 * h,
            w,
            h,
        )
    }
}

/// Geometry of a day or week time grid body.
///
/// `container` is the visible part of the scrolling body, `gutter_width` the
/// hour label column on its left and `scroll_top` how far the body is
/// scrolled down.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeGridGeometry {
    pub container: Bounds,
    pub gutter_width: f32,
    pub scroll_top: f32,
    pub first_date: NaiveDate,
    pub day_count: usize,
    pub hour_height: f32,
    pub increment_minutes: u32,
}

impl TimeGridGeometry {
    pub fn new(container: Bounds, window: &ViewWindow, settings: &LayoutSettings) -> Self {
        Self {
            container,
            gutter_width: 0.0,
            scroll_top: 0.0,
            first_date: window.first_date(),
            day_count: window.day_count(),
            hour_height: settings.hour_height,
            increment_minutes: snap_increment(settings.time_increment_minutes),
        }
    }

    pub fn with_gutter(mut self, gutter_width: f32) -> Self {
        self.gutter_width = gutter_width;
        self
    }

    pub fn with_scroll(mut self, scroll_top: f32) -> Self {
        self.scroll_top = scroll_top;
        self
    }

    pub fn column_width(&self) -> f32 {
        (self.container.width - self.gutter_width).max(0.0) / self.day_count.max(1) as f32
    }

    /// `increment_minutes` bounded so a day holds at least one row.
    fn increment(&self) -> u32 {
        self.increment_minutes.clamp(1, MINUTES_PER_DAY)
    }

    /// Pixel height of one increment row.
    pub fn slot_height(&self) -> f32 {
        self.hour_height * self.increment() as f32 / 60.0
    }

    pub fn slots_per_day(&self) -> usize {
        (MINUTES_PER_DAY / self.increment()) as usize
    }

    /// Resolve a pointer position to the increment slot under it.
    ///
    /// The offset into the body is floored to a whole increment, so any
    /// point inside a slot resolves to the slot's start time.
    pub fn time_at(&self, x: f32, y: f32) -> Option<TimeHit> {
        if !self.container.contains(x, y) {
            return None;
        }
        let columns_x = self.container.x + self.gutter_width;
        if x < columns_x || self.slot_height() <= 0.0 {
            return None;
        }

        let day = (((x - columns_x) / self.column_width()).floor() as usize)
            .min(self.day_count.saturating_sub(1));
        let body_y = y - self.container.y + self.scroll_top;
        let slot = ((body_y / self.slot_height()).floor().max(0.0) as usize)
            .min(self.slots_per_day().saturating_sub(1));

        let date = self.first_date + Duration::days(day as i64);
        let minutes = slot as i64 * self.increment() as i64;
        Some(TimeHit {
            date_time: start_of_day(date) + Duration::minutes(minutes),
            day,
            slot,
            cell: self.cell_bounds(day, slot),
        })
    }

    /// Box of the slot containing `date_time`, in container coordinates.
    pub fn slot_box(&self, date_time: NaiveDateTime) -> Option<Bounds> {
        let offset = (date_time.date() - self.first_date).num_days();
        if offset < 0 || offset as usize >= self.day_count {
            return None;
        }
        let minutes = date_time.hour() * 60 + date_time.minute();
        let slot = ((minutes / self.increment()) as usize)
            .min(self.slots_per_day().saturating_sub(1));
        Some(self.cell_bounds(offset as usize, slot))
    }

    /// Column box of `date` covering the whole scrolled body.
    pub fn day_box(&self, date: NaiveDate) -> Option<Bounds> {
        let offset = (date - self.first_date).num_days();
        if offset < 0 || offset as usize >= self.day_count {
            return None;
        }
        let height = self.slot_height() * self.slots_per_day() as f32;
        Some(Bounds::new(
            self.container.x + self.gutter_width + offset as f32 * self.column_width(),
            self.container.y - self.scroll_top,
            self.column_width(),
            height,
        ))
    }

    fn cell_bounds(&self, day: usize, slot: usize) -> Bounds {
        let h = self.slot_height();
        Bounds::new(
            self.container.x + self.gutter_width + day as f32 * self.column_width(),
            self.container.y + slot as f32 * h - self.scroll_top,
            self.column_width(),
            h,
        )
    }
}
