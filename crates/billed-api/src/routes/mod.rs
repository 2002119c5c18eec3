//! Route modules for the API server
//!
//! - login: Login page, logout, session API
//! - bills: Bills list page, receipt modal, bills API
//! - new_bill: New-bill page, receipt upload, bill submission
//! - receipts: Uploaded receipt files
//!
//! Each page module follows the same structure:
//! - mod.rs: Module declaration and exports
//! - api.rs: JSON API endpoints and HTMX partial responses
//! - page.rs: Full page rendering

pub mod login;
pub mod bills;
pub mod new_bill;
pub mod receipts;
