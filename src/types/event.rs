//! Event types for the access-control registry
//!
//! An event is the unit every ticket and every scan is scoped to.

use serde::{Deserialize, Serialize};

/// Lifecycle status of an event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum EventStatus {
    /// Scheduled, doors not open yet
    #[default]
    Upcoming,
    /// Doors open
    Active,
    /// Over
    Finished,
}

impl std::fmt::Display for EventStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventStatus::Upcoming => write!(f, "upcoming"),
            EventStatus::Active => write!(f, "active"),
            EventStatus::Finished => write!(f, "finished"),
        }
    }
}

/// A live event tickets are issued for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub name: String,
    /// Calendar date, `YYYY-MM-DD`
    pub date: String,
    #[serde(default)]
    pub location: String,
    pub capacity: u32,
    #[serde(default)]
    pub status: EventStatus,
    #[serde(default)]
    pub category: String,
}

impl Event {
    /// Build an event from operator input with an assigned identifier
    ///
    /// New events always start out `upcoming`.
    pub fn from_new(id: String, new_event: NewEvent) -> Self {
        Self {
            id,
            name: new_event.name,
            date: new_event.date,
            location: new_event.location,
            capacity: new_event.capacity,
            status: EventStatus::Upcoming,
            category: new_event.category,
        }
    }
}

/// Operator input for creating an event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEvent {
    pub name: String,
    pub date: String,
    #[serde(default)]
    pub location: String,
    pub capacity: u32,
    #[serde(default = "default_category")]
    pub category: String,
}

fn default_category() -> String {
    "Concert".to_string()
}

impl NewEvent {
    pub fn new(name: &str, date: &str, location: &str, capacity: u32, category: &str) -> Self {
        Self {
            name: name.to_string(),
            date: date.to_string(),
            location: location.to_string(),
            capacity,
            category: category.to_string(),
        }
    }
}
