use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::info;
use serde::{Deserialize, Serialize};
use serde_json::Error as SerdeError;

use super::EventStore;
use crate::models::calendar::Calendar;
use crate::models::event::Event;

/// On-disk form of a store, using the feed's root keys.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreSnapshot {
    #[serde(rename = "evts", default)]
    pub events: Vec<Event>,
    #[serde(default)]
    pub calendars: Vec<Calendar>,
}

pub fn load_snapshot(path: &Path) -> Result<StoreSnapshot> {
    if !path.exists() {
        return Ok(StoreSnapshot::default());
    }

    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read events from {}", path.display()))?;
    let snapshot = serde_json::from_str(&data).map_err(|err| map_deser_error(err, path))?;
    Ok(snapshot)
}

pub fn save_snapshot(path: &Path, snapshot: &StoreSnapshot) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create dir {}", parent.display()))?;
    }

    let data = serde_json::to_string_pretty(snapshot)?;
    fs::write(path, data)
        .with_context(|| format!("failed to write events to {}", path.display()))?;
    Ok(())
}

fn map_deser_error(err: SerdeError, path: &Path) -> anyhow::Error {
    anyhow::Error::new(err).context(format!(
        "failed to deserialize events from {}",
        path.display()
    ))
}

impl EventStore {
    /// Build a store from a snapshot, validating every record.
    pub fn from_snapshot(snapshot: StoreSnapshot) -> Result<Self> {
        let mut store = EventStore::new();
        for calendar in snapshot.calendars {
            store.add_calendar(calendar)?;
        }
        for event in snapshot.events {
            let id = event.id.clone();
            store
                .add(event)
                .with_context(|| format!("invalid event {}", id))?;
        }
        Ok(store)
    }

    pub fn snapshot(&self) -> StoreSnapshot {
        StoreSnapshot {
            events: self.events.clone(),
            calendars: self.calendars.clone(),
        }
    }

    /// Load a store from a JSON file. A missing file gives an empty store.
    pub fn load_json(path: &Path) -> Result<Self> {
        let store = Self::from_snapshot(load_snapshot(path)?)
            .with_context(|| format!("failed to load events from {}", path.display()))?;
        info!(
            "Loaded {} events and {} calendars from {}",
            store.events.len(),
            store.calendars.len(),
            path.display()
        );
        Ok(store)
    }

    pub fn save_json(&self, path: &Path) -> Result<()> {
        save_snapshot(path, &self.snapshot())?;
        info!("Saved {} events to {}", self.events.len(), path.display());
        Ok(())
    }
}
