//! Visible date window of a calendar view.
//!
//! A window is a run of whole days laid out as `row_count()` rows of
//! `day_count` cells. Month views use [`WeekCount::Auto`], which lays out
//! whole weeks until the anchor month is covered.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use thiserror::Error;

use crate::utils::date::{
    diff_days, end_of_day, first_day_of_month, last_date_of_month, start_of_day, week_end,
    week_start,
};

/// Upper bound on rows in an auto-sized month view.
pub const MAX_MONTH_ROWS: usize = 6;

/// Kind of calendar view, used to derive a window from an anchor date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewKind {
    Day,
    /// A run of 1..=7 days starting at the anchor (7 aligns to the week start)
    Days(u8),
    Week,
    /// Several consecutive weeks
    Weeks(u8),
    #[default]
    Month,
}

/// Number of rows in a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeekCount {
    Fixed(usize),
    /// Whole calendar month, clipped to week boundaries
    Auto,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViewWindowError {
    #[error("view end {end} is before view start {start}")]
    EndBeforeStart {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },
    #[error("day count must be between 1 and 7, got {0}")]
    InvalidDayCount(usize),
    #[error("week count must be at least 1")]
    InvalidWeekCount,
    #[error("{rows} rows of {day_count} days cannot show {days} days")]
    RowsDoNotCover {
        rows: usize,
        day_count: usize,
        days: i64,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewWindow {
    start_date: NaiveDate,
    view_start: NaiveDateTime,
    view_end: NaiveDateTime,
    day_count: usize,
    week_count: WeekCount,
}

impl ViewWindow {
    /// Build a window from explicit bounds.
    ///
    /// `view_start` is truncated to midnight; `view_end` is inclusive. Auto
    /// windows take their month from the first row's last day, so a month
    /// view starting in the previous month still covers the right month.
    /// The laid out rows must reach `view_end`.
    pub fn new(
        view_start: NaiveDateTime,
        view_end: NaiveDateTime,
        day_count: usize,
        week_count: WeekCount,
    ) -> Result<Self, ViewWindowError> {
        if view_end < view_start {
            return Err(ViewWindowError::EndBeforeStart {
                start: view_start,
                end: view_end,
            });
        }
        if !(1..=7).contains(&day_count) {
            return Err(ViewWindowError::InvalidDayCount(day_count));
        }
        if week_count == WeekCount::Fixed(0) {
            return Err(ViewWindowError::InvalidWeekCount);
        }

        let start_date = match week_count {
            WeekCount::Auto => (view_start.date() + Duration::days(6)).min(view_end.date()),
            WeekCount::Fixed(_) => view_start.date(),
        };
        let window = Self {
            start_date,
            view_start: start_of_day(view_start.date()),
            view_end,
            day_count,
            week_count,
        };

        let rows = window.row_count();
        let days = window.day_span();
        if ((rows * day_count) as i64) < days {
            return Err(ViewWindowError::RowsDoNotCover {
                rows,
                day_count,
                days,
            });
        }
        Ok(window)
    }

    /// Derive the window a view of `kind` shows for `anchor`.
    pub fn for_kind(
        anchor: NaiveDate,
        kind: ViewKind,
        first_day_of_week: u8,
    ) -> Result<Self, ViewWindowError> {
        let (first, last, day_count, week_count) = match kind {
            ViewKind::Day => (anchor, anchor, 1, WeekCount::Fixed(1)),
            ViewKind::Days(n) => {
                let n = n as usize;
                if !(1..=7).contains(&n) {
                    return Err(ViewWindowError::InvalidDayCount(n));
                }
                let first = if n < 7 {
                    anchor
                } else {
                    week_start(anchor, first_day_of_week)
                };
                (first, first + Duration::days(n as i64 - 1), n, WeekCount::Fixed(1))
            }
            ViewKind::Week | ViewKind::Weeks(_) => {
                let weeks = match kind {
                    ViewKind::Weeks(n) => n as usize,
                    _ => 1,
                };
                if weeks == 0 {
                    return Err(ViewWindowError::InvalidWeekCount);
                }
                let first = week_start(anchor, first_day_of_week);
                let last = first + Duration::days(weeks as i64 * 7 - 1);
                (first, last, 7, WeekCount::Fixed(weeks))
            }
            ViewKind::Month => {
                let first = week_start(first_day_of_month(anchor), first_day_of_week);
                let last = week_end(last_date_of_month(anchor), first_day_of_week);
                (first, last, 7, WeekCount::Auto)
            }
        };

        let mut window = Self::new(start_of_day(first), end_of_day(last), day_count, week_count)?;
        window.start_date = anchor;
        Ok(window)
    }

    /// Navigation anchor (the date the view was asked to show).
    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn view_start(&self) -> NaiveDateTime {
        self.view_start
    }

    pub fn view_end(&self) -> NaiveDateTime {
        self.view_end
    }

    pub fn day_count(&self) -> usize {
        self.day_count
    }

    pub fn week_count(&self) -> WeekCount {
        self.week_count
    }

    pub fn first_date(&self) -> NaiveDate {
        self.view_start.date()
    }

    pub fn last_date(&self) -> NaiveDate {
        self.view_end.date()
    }

    /// Number of days between the first and last visible date, inclusive.
    pub fn day_span(&self) -> i64 {
        diff_days(self.view_start, self.view_end) + 1
    }

    /// Rows actually laid out.
    ///
    /// Auto windows stop at the first row that begins after the anchor month.
    pub fn row_count(&self) -> usize {
        match self.week_count {
            WeekCount::Fixed(n) => n,
            WeekCount::Auto => {
                let limit = last_date_of_month(self.start_date).min(self.last_date());
                (0..MAX_MONTH_ROWS)
                    .take_while(|&w| self.date_at(w, 0) <= limit)
                    .count()
                    .max(1)
            }
        }
    }

    pub fn date_at(&self, week: usize, day: usize) -> NaiveDate {
        self.first_date() + Duration::days((week * self.day_count + day) as i64)
    }

    /// Grid cell showing `date`, if it is laid out.
    pub fn cell_of(&self, date: NaiveDate) -> Option<(usize, usize)> {
        let offset = (date - self.first_date()).num_days();
        if offset < 0 || date > self.last_date() {
            return None;
        }
        let offset = offset as usize;
        let week = offset / self.day_count;
        (week < self.row_count()).then_some((week, offset % self.day_count))
    }

    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.first_date() && date <= self.last_date()
    }

    /// True if the window is currently displaying `today`.
    pub fn is_today(&self, today: NaiveDate) -> bool {
        self.contains_date(today)
    }

    /// First and last date of row `week`.
    pub fn week_bounds(&self, week: usize) -> (NaiveDate, NaiveDate) {
        let first = self.date_at(week, 0);
        (first, first + Duration::days(self.day_count as i64 - 1))
    }
}
