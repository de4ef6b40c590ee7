//! Checks on event forms and scanned codes

use chrono::NaiveDate;

use crate::error::{GateError, GateResult};
use crate::types::NewEvent;

/// Event categories offered by the creation form
pub const STANDARD_CATEGORIES: &[&str] = &[
    "Concert",
    "Electro",
    "Jazz",
    "Rock",
    "Theatre",
    "Sport",
    "Conference",
    "Festival",
];

/// Reject an event form with a missing name, bad date or zero capacity
pub fn validate_new_event(new_event: &NewEvent) -> GateResult<()> {
    if new_event.name.trim().is_empty() {
        return Err(GateError::InvalidInput("event name is required".to_string()));
    }

    if NaiveDate::parse_from_str(new_event.date.trim(), "%Y-%m-%d").is_err() {
        return Err(GateError::InvalidInput(format!(
            "event date '{}' is not YYYY-MM-DD",
            new_event.date
        )));
    }

    if new_event.capacity == 0 {
        return Err(GateError::InvalidInput(
            "event capacity must be positive".to_string(),
        ));
    }

    Ok(())
}

/// Warning for a category outside the standard list
pub fn validate_category(category: &str) -> Option<String> {
    if STANDARD_CATEGORIES
        .iter()
        .any(|&c| c.eq_ignore_ascii_case(category))
    {
        None
    } else {
        Some(format!(
            "Non-standard category '{}'. Recommended: {:?}",
            category, STANDARD_CATEGORIES
        ))
    }
}

/// Trim a captured code, rejecting blank input
pub fn normalize_code(raw: &str) -> GateResult<&str> {
    let code = raw.trim();
    if code.is_empty() {
        return Err(GateError::EmptyCode);
    }
    Ok(code)
}
