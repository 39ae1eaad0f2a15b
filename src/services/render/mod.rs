//! Consumers of a [`GridLayout`].
//!
//! Every calendar view builds the same layout and hands it to a rendering
//! strategy. [`MonthGridRenderer`] produces bar rows for month, multi-week
//! and day-header views; [`DayColumnRenderer`] produces positioned boxes for
//! the scrolling body of day and week views.

mod day_column;
mod month;

use crate::models::view::ViewWindow;
use crate::services::layout::GridLayout;

pub use day_column::{DayColumn, DayColumnRenderer, EventBox};
pub use month::{EmptyCell, EventBar, MonthGridRenderer, MoreIndicator, WeekRow, WeekRowItem};

/// Strategy turning a layout into view-specific output.
pub trait GridRenderer<'a> {
    type Output;

    fn render(&self, layout: &GridLayout<'a>, window: &ViewWindow) -> Self::Output;
}
