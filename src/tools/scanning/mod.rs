//! Door scanning tools

mod scan_ticket;

pub use scan_ticket::ScanTicketTool;
