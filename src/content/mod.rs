// src/content/mod.rs
// Static dashboard content: academic calendar, tool directory, tutorials.
// The store is read-only after startup and injected wherever it is needed,
// so tests (and deployments with their own data) can substitute the tables.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

pub mod builtin;
pub mod calendar;
pub mod resources;
pub mod tutorials;

pub use calendar::{AcademicEvent, EventCategory};
pub use resources::{ResourceCategory, Tool};
pub use tutorials::{ContentBlock, Hotspot, Tutorial, TutorialStep};

/// Errors while loading a content file override.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("Failed to read content file: {0}")]
    Read(#[from] std::io::Error),
    #[error("Failed to parse content file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// The full set of static tables behind the dashboard panels.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentStore {
    pub events: Vec<AcademicEvent>,
    pub resources: Vec<ResourceCategory>,
    pub tutorials: Vec<Tutorial>,
}

impl ContentStore {
    /// The built-in 2025 UNPilar tables.
    pub fn builtin() -> Self {
        Self {
            events: builtin::academic_events_2025(),
            resources: builtin::resource_categories(),
            tutorials: builtin::tutorials(),
        }
    }

    /// Replace the built-in tables with a JSON file, wholesale.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ContentError> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Events sorted by start instant, for display.
    pub fn sorted_events(&self) -> Vec<AcademicEvent> {
        let mut events = self.events.clone();
        events.sort_by_key(|e| e.start);
        events
    }

    /// Look up a resource category by its label.
    pub fn resource_category(&self, label: &str) -> Option<&ResourceCategory> {
        self.resources.iter().find(|c| c.category == label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn event(title: &str, start: (i32, u32, u32)) -> AcademicEvent {
        AcademicEvent {
            title: title.to_string(),
            start: Utc.with_ymd_and_hms(start.0, start.1, start.2, 3, 0, 0).unwrap(),
            end: Utc.with_ymd_and_hms(start.0, 12, 20, 3, 0, 0).unwrap(),
            category: EventCategory::Exam,
        }
    }

    #[test]
    fn sorted_events_orders_by_start_instant() {
        let store = ContentStore {
            events: vec![
                event("julio", (2025, 7, 28)),
                event("febrero", (2025, 2, 17)),
                event("abril", (2025, 4, 7)),
            ],
            resources: Vec::new(),
            tutorials: Vec::new(),
        };

        let sorted = store.sorted_events();
        let titles: Vec<&str> = sorted.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["febrero", "abril", "julio"]);
    }

    #[test]
    fn resource_category_is_keyed_by_label() {
        let store = ContentStore::builtin();
        assert!(store.resource_category("Video y Animación").is_some());
        assert!(store.resource_category("Inexistente").is_none());
    }

    #[test]
    fn content_store_round_trips_through_json() {
        let store = ContentStore::builtin();
        let json = serde_json::to_string(&store).unwrap();
        let parsed: ContentStore = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.events.len(), store.events.len());
        assert_eq!(parsed.resources.len(), store.resources.len());
        assert_eq!(parsed.tutorials.len(), store.tutorials.len());
    }
}
