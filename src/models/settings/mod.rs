// Settings module
// Layout preferences persisted as TOML

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutSettings {
    /// 0 = Sunday, 1 = Monday, etc.
    pub first_day_of_week: u8,
    /// Sort multi-day events ahead of single-day events sharing a day
    pub spans_have_priority: bool,
    /// Rows shown per day before an overflow indicator; `None` shows everything
    pub max_events_per_day: Option<usize>,
    /// Pixel height of one hour in time-grid views
    pub hour_height: f32,
    /// Drag and click resolution in time-grid views
    pub time_increment_minutes: u32,
    /// Smallest rendered height of a timed event box
    pub min_event_height: f32,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            first_day_of_week: 0, // Sunday
            spans_have_priority: false,
            max_events_per_day: None,
            hour_height: 42.0,
            time_increment_minutes: 30,
            min_event_height: 15.0,
        }
    }
}

impl LayoutSettings {
    pub fn validate(&self) -> Result<(), String> {
        if self.first_day_of_week > 6 {
            return Err("First day of week must be between 0 (Sunday) and 6 (Saturday)".to_string());
        }

        if self.max_events_per_day == Some(0) {
            return Err("Max events per day must be at least 1".to_string());
        }

        if !(self.hour_height.is_finite() && self.hour_height > 0.0) {
            return Err("Hour height must be a positive number of pixels".to_string());
        }

        if self.time_increment_minutes == 0 || 60 % self.time_increment_minutes != 0 {
            return Err("Time increment must divide an hour evenly".to_string());
        }

        if !(self.min_event_height.is_finite() && self.min_event_height >= 0.0) {
            return Err("Minimum event height cannot be negative".to_string());
        }

        Ok(())
    }

    /// Pixel height of one time increment row.
    pub fn increment_height(&self) -> f32 {
        self.hour_height * self.time_increment_minutes as f32 / 60.0
    }
}
