//! Operator input validation
//!
//! Hard checks reject input outright; category checks are soft and only
//! produce a warning string.

mod input;

pub use input::{normalize_code, validate_category, validate_new_event, STANDARD_CATEGORIES};
