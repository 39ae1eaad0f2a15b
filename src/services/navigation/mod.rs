// Navigation service
// Moves a view's anchor date and recomputes its visible window

use chrono::{Duration, NaiveDate};
use log::debug;

use crate::models::view::{ViewKind, ViewWindow, ViewWindowError};
use crate::utils::date::add_months;

/// Tracks the window shown by one calendar view.
///
/// Every move recomputes the window from the new anchor. Hosts should cancel
/// any active [`DragSession`](crate::services::interaction::DragSession)
/// before moving so no stale drag state survives.
#[derive(Debug, Clone, PartialEq)]
pub struct Navigator {
    kind: ViewKind,
    first_day_of_week: u8,
    window: ViewWindow,
}

impl Navigator {
    pub fn new(anchor: NaiveDate, kind: ViewKind, first_day_of_week: u8) -> Result<Self, ViewWindowError> {
        Ok(Self {
            kind,
            first_day_of_week,
            window: ViewWindow::for_kind(anchor, kind, first_day_of_week)?,
        })
    }

    pub fn window(&self) -> &ViewWindow {
        &self.window
    }

    pub fn kind(&self) -> ViewKind {
        self.kind
    }

    pub fn anchor(&self) -> NaiveDate {
        self.window.start_date()
    }

    /// Switch view kind, keeping the anchor date.
    pub fn set_kind(&mut self, kind: ViewKind) -> Result<&ViewWindow, ViewWindowError> {
        self.window = ViewWindow::for_kind(self.anchor(), kind, self.first_day_of_week)?;
        self.kind = kind;
        Ok(&self.window)
    }

    pub fn move_to(&mut self, date: NaiveDate) -> Result<&ViewWindow, ViewWindowError> {
        self.window = ViewWindow::for_kind(date, self.kind, self.first_day_of_week)?;
        debug!(
            "Moved {:?} view to {} ({} .. {})",
            self.kind,
            date,
            self.window.first_date(),
            self.window.last_date()
        );
        Ok(&self.window)
    }

    /// Show the period right after the current one.
    pub fn move_next(&mut self) -> Result<&ViewWindow, ViewWindowError> {
        match self.kind {
            ViewKind::Month => self.move_months(1),
            _ => self.move_to(self.window.last_date() + Duration::days(1)),
        }
    }

    /// Show the period right before the current one.
    pub fn move_prev(&mut self) -> Result<&ViewWindow, ViewWindowError> {
        match self.kind {
            ViewKind::Month => self.move_months(-1),
            _ => self.move_days(-self.window.day_span()),
        }
    }

    pub fn move_days(&mut self, days: i64) -> Result<&ViewWindow, ViewWindowError> {
        self.move_to(self.anchor() + Duration::days(days))
    }

    pub fn move_weeks(&mut self, weeks: i64) -> Result<&ViewWindow, ViewWindowError> {
        self.move_days(weeks * 7)
    }

    /// Shift by whole months; the anchor day is clamped to the month length.
    pub fn move_months(&mut self, months: i32) -> Result<&ViewWindow, ViewWindowError> {
        self.move_to(add_months(self.anchor(), months))
    }

    pub fn move_today(&mut self, today: NaiveDate) -> Result<&ViewWindow, ViewWindowError> {
        self.move_to(today)
    }
}
