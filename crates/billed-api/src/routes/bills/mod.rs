//! Bills routes - Bills list and receipt modal

pub mod api;
pub mod page;

pub use api::{api_bills, htmx_receipt_modal};
pub use page::page_bills;
