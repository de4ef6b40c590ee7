//! Utility functions and helpers
//!
//! Atomic file writes plus the injectable clock and identifier sources.

pub mod atomic;
pub mod clock;
pub mod ids;

pub use atomic::{atomic_write, cleanup_temp_files};
pub use clock::{Clock, ManualClock, SystemClock};
pub use ids::{IdSource, RandomIds, SequentialIds};
