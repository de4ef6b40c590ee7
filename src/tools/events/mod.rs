//! Event management tools

mod create_event;
mod list_events;
mod select_event;

pub use create_event::CreateEventTool;
pub use list_events::ListEventsTool;
pub use select_event::SelectEventTool;
