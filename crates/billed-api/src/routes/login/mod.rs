//! Login routes - Employee login, logout and session

pub mod api;
pub mod page;

pub use api::{api_session, login_submit, logout};
pub use page::page_login;
