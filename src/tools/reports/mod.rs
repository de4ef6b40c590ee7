//! Reporting tools: dashboard figures, scan log and ticket lists

mod get_scan_history;
mod get_stats;
mod list_tickets;

pub use get_scan_history::GetScanHistoryTool;
pub use get_stats::GetStatsTool;
pub use list_tickets::ListTicketsTool;
