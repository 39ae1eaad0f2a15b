// Side-by-side columns for overlapping events in a single day body

use chrono::NaiveDateTime;

use super::visibility::overlaps;
use crate::models::event::Event;

/// Horizontal placement of one event inside a day column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnPlacement<'a> {
    pub event: &'a Event,
    pub column: usize,
    /// Columns in the event's overlap group
    pub columns: usize,
    /// Offset from the left edge, percent of the day width
    pub left: f32,
    /// Percent of the day width
    pub width: f32,
}

/// Pack the timed events of one day into columns.
///
/// Events are split into groups of transitively overlapping events. Within
/// a group each event takes the lowest column whose previous occupant ended
/// before it started, and every member gets `100 / columns` percent of the
/// width. Output is ordered by start time.
pub fn layout_day_columns<'a>(events: &[&'a Event]) -> Vec<ColumnPlacement<'a>> {
    let mut sorted: Vec<&'a Event> = events.to_vec();
    sorted.sort_by(|a, b| {
        a.start
            .cmp(&b.start)
            .then_with(|| b.effective_end().cmp(&a.effective_end()))
    });

    let mut placements = Vec::with_capacity(sorted.len());
    let mut group: Vec<(&'a Event, usize)> = Vec::new();
    let mut column_ends: Vec<NaiveDateTime> = Vec::new();
    let mut group_end: Option<NaiveDateTime> = None;

    for event in sorted {
        if group_end.is_some_and(|end| event.start > end) {
            flush_group(&mut group, column_ends.len(), &mut placements);
            column_ends.clear();
            group_end = None;
        }

        let column = match column_ends.iter().position(|end| *end < event.start) {
            Some(free) => {
                column_ends[free] = event.last_instant();
                free
            }
            None => {
                column_ends.push(event.last_instant());
                column_ends.len() - 1
            }
        };
        debug_assert!(group
            .iter()
            .filter(|(_, col)| *col == column)
            .all(|(other, _)| !overlaps(other, event)));

        group.push((event, column));
        let last = event.last_instant();
        group_end = Some(group_end.map_or(last, |end| end.max(last)));
    }
    flush_group(&mut group, column_ends.len(), &mut placements);

    placements
}

fn flush_group<'a>(
    group: &mut Vec<(&'a Event, usize)>,
    columns: usize,
    placements: &mut Vec<ColumnPlacement<'a>>,
) {
    if group.is_empty() {
        return;
    }
    let width = 100.0 / columns as f32;
    placements.extend(group.drain(..).map(|(event, column)| ColumnPlacement {
        event,
        column,
        columns,
        left: width * column as f32,
        width,
    }));
}
