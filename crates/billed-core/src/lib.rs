//! Bill model, remote store and page controllers
//!
//! - bills: bills list controller (fetch, order, format, interactions)
//! - new_bill: new-bill form controller (receipt upload, submission)
//! - store: `BillStore` trait and the in-memory store
//! - session: logged-in user storage
//! - routes: page identifiers

pub mod error;
pub mod types;
pub mod models;
pub mod format;
pub mod session;
pub mod store;
pub mod receipt;
pub mod routes;
pub mod bills;
pub mod new_bill;

#[cfg(test)]
mod test_support;

use std::sync::Arc;

pub use error::{CoreError, CoreResult, ErrorCode, ErrorDetails, ErrorSeverity};
pub use types::{BillStatus, UserType, EXPENSE_TYPES};
pub use models::{Bill, DisplayBill};
pub use format::format_date;
pub use session::{SessionRegistry, SessionStore, User};
pub use store::{BillStore, CreatedReceipt, MemoryBillStore, ReceiptUpload, StoreError, StoreResult, StoredReceipt};
pub use receipt::{FileCheck, FileInput, RejectReason, SelectedFile};
pub use routes::RoutePath;
pub use bills::{Bills, EyeIcon, ReceiptModal};
pub use new_bill::{NewBill, NewBillForm, NewBillSettings, UploadedReceipt};

/// Shared store reference
pub type StoreRef = Arc<dyn BillStore>;
