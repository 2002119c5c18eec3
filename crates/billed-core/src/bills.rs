//! Bills list controller
//!
//! Fetches the employee's bills, orders them newest first and prepares
//! them for display. Also answers the two interactions of the list page:
//! the "new bill" button and the eye icon that opens a receipt.

use crate::error::{CoreError, CoreResult, DefaultErrorLogger, ErrorContext, ErrorLogger};
use crate::format::format_date;
use crate::models::{Bill, DisplayBill};
use crate::routes::RoutePath;
use crate::StoreRef;

const DEFAULT_MODAL_WIDTH: u32 = 800;

/// Eye icon of a bill row, carrying the receipt URL in `data-bill-url`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EyeIcon {
    pub bill_url: Option<String>,
}

impl EyeIcon {
    pub fn new(bill_url: &str) -> Self {
        Self {
            bill_url: Some(bill_url.to_string()),
        }
    }
}

/// Receipt modal opened from the eye icon
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiptModal {
    pub url: String,
    /// Image width in pixels, half the modal width
    pub image_width: u32,
}

/// Bills list controller
pub struct Bills {
    store: StoreRef,
    modal_width: u32,
    logger: DefaultErrorLogger,
}

impl Bills {
    pub fn new(store: StoreRef) -> Self {
        Self {
            store,
            modal_width: DEFAULT_MODAL_WIDTH,
            logger: DefaultErrorLogger,
        }
    }

    /// Set the receipt modal width
    pub fn with_modal_width(mut self, modal_width: u32) -> Self {
        self.modal_width = modal_width;
        self
    }

    /// Fetch all bills, newest first, ready for display
    ///
    /// Ordering compares the raw ISO date strings. A bill whose date cannot
    /// be formatted is kept with its raw date.
    pub async fn get_bills(&self) -> CoreResult<Vec<DisplayBill>> {
        let mut bills = self.store.list().await.map_err(|e| {
            let error = CoreError::from(e);
            self.logger.log_error(&error, &ErrorContext::new("get_bills"));
            error
        })?;

        sort_by_date_desc(&mut bills);

        let display = bills.into_iter().map(|bill| self.to_display(bill)).collect::<Vec<_>>();
        log::debug!("get_bills: {} bills", display.len());
        Ok(display)
    }

    fn to_display(&self, bill: Bill) -> DisplayBill {
        let date = match format_date(&bill.date) {
            Ok(formatted) => formatted,
            Err(e) => {
                self.logger.log_warning(
                    &format!("{} for bill {}", e, bill.id),
                    &ErrorContext::new("get_bills"),
                );
                bill.date.clone()
            }
        };
        let status = bill.status.label().to_string();
        DisplayBill { bill, date, status }
    }

    /// The "new bill" button leads to the new-bill form
    pub fn handle_click_new_bill(&self) -> RoutePath {
        RoutePath::NewBill
    }

    /// Open the receipt behind an eye icon
    pub fn handle_click_icon_eye(&self, icon: &EyeIcon) -> CoreResult<ReceiptModal> {
        let url = icon
            .bill_url
            .as_deref()
            .filter(|u| !u.is_empty())
            .ok_or_else(|| CoreError::ValidationError {
                message: "Eye icon has no receipt URL".to_string(),
            })?;

        Ok(ReceiptModal {
            url: url.to_string(),
            image_width: self.modal_width / 2,
        })
    }
}

/// Sort bills by raw date string, most recent first
pub fn sort_by_date_desc(bills: &mut [Bill]) {
    bills.sort_by(|a, b| b.date.cmp(&a.date));
}
