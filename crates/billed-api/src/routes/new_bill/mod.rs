//! New-bill routes - Form, receipt upload and submission

pub mod api;
pub mod page;

pub use api::{htmx_new_bill_file, htmx_new_bill_submit};
pub use page::page_new_bill;
