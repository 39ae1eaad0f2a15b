//! Calendar model.
//!
//! Every event may belong to a calendar, which supplies its colour key and can
//! be hidden to drop its events from the layout.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Calendar identifier, also used as the colour key of its events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CalendarId(pub i64);

impl fmt::Display for CalendarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A calendar that groups events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Calendar {
    pub id: CalendarId,
    pub title: String,
    #[serde(rename = "desc", default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Palette index used when rendering events of this calendar
    #[serde(rename = "color", default, skip_serializing_if = "Option::is_none")]
    pub color_id: Option<u32>,
    /// Hidden calendars contribute no events to the layout
    #[serde(default)]
    pub hidden: bool,
}

impl Calendar {
    pub fn new(id: i64, title: impl Into<String>) -> Self {
        Self {
            id: CalendarId(id),
            title: title.into(),
            description: None,
            color_id: None,
            hidden: false,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Calendar title cannot be empty".to_string());
        }
        Ok(())
    }

    /// Colour key for rendering, falling back to the calendar id.
    pub fn color_key(&self) -> i64 {
        self.color_id.map(i64::from).unwrap_or(self.id.0)
    }
}
