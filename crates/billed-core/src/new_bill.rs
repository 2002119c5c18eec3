//! New-bill form controller
//!
//! Holds the receipt uploaded for the bill being written, then turns the
//! submitted form into a pending bill.

use billed_config::Config;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::{CoreError, CoreResult, DefaultErrorLogger, ErrorContext, ErrorLogger};
use crate::models::Bill;
use crate::receipt::{extension_allowed, FileCheck, FileInput, RejectReason};
use crate::routes::RoutePath;
use crate::session::User;
use crate::store::ReceiptUpload;
use crate::types::BillStatus;
use crate::StoreRef;

/// Limits applied by the new-bill form
#[derive(Debug, Clone)]
pub struct NewBillSettings {
    pub allowed_extensions: Vec<String>,
    pub max_size_bytes: usize,
    pub default_pct: u32,
}

impl Default for NewBillSettings {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl From<&Config> for NewBillSettings {
    fn from(config: &Config) -> Self {
        Self {
            allowed_extensions: config.uploads.allowed_extensions.clone(),
            max_size_bytes: config.uploads.max_size_bytes,
            default_pct: config.ui.default_pct,
        }
    }
}

/// Receipt already uploaded for the bill being written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedReceipt {
    /// Key reserved by the store for the bill
    pub bill_id: String,
    pub file_url: String,
    pub file_name: String,
}

/// Submitted new-bill form, with the field names of the HTML form
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewBillForm {
    #[serde(rename = "expense-type", default)]
    pub expense_type: String,
    #[serde(rename = "expense-name", default)]
    pub name: String,
    #[serde(rename = "datepicker", default)]
    pub date: String,
    #[serde(default)]
    pub amount: String,
    #[serde(default)]
    pub vat: String,
    #[serde(default)]
    pub pct: String,
    #[serde(default)]
    pub commentary: String,
}

/// New-bill form controller
pub struct NewBill {
    store: StoreRef,
    user: User,
    settings: NewBillSettings,
    receipt: Option<UploadedReceipt>,
    logger: DefaultErrorLogger,
}

impl NewBill {
    pub fn new(store: StoreRef, user: User, settings: NewBillSettings) -> Self {
        Self {
            store,
            user,
            settings,
            receipt: None,
            logger: DefaultErrorLogger,
        }
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn receipt(&self) -> Option<&UploadedReceipt> {
        self.receipt.as_ref()
    }

    /// Attach an already uploaded receipt
    pub fn set_receipt(&mut self, receipt: UploadedReceipt) {
        self.receipt = Some(receipt);
    }

    fn context(&self, operation: &str) -> ErrorContext {
        ErrorContext::new(operation).with_user(&self.user.email)
    }

    /// Validate the receipt in `input` and upload it
    ///
    /// A refused file clears the input and nothing is sent to the store.
    pub async fn handle_change_file(&mut self, input: &mut FileInput) -> CoreResult<FileCheck> {
        let file = match input.first_file() {
            Some(file) => file.clone(),
            None => {
                input.clear();
                return Ok(FileCheck::Rejected { reason: RejectReason::NoFile });
            }
        };
        let file_name = input.file_name().unwrap_or_else(|| file.name.clone());

        let reason = if !extension_allowed(&file.name, &self.settings.allowed_extensions) {
            Some(RejectReason::Extension)
        } else if file.content.len() > self.settings.max_size_bytes {
            Some(RejectReason::TooLarge)
        } else {
            None
        };

        if let Some(reason) = reason {
            self.logger.log_warning(
                &format!("Receipt {} rejected: {:?}", file.name, reason),
                &self.context("handle_change_file"),
            );
            input.clear();
            return Ok(FileCheck::Rejected { reason });
        }

        let upload = ReceiptUpload {
            email: self.user.email.clone(),
            file_name: file_name.clone(),
            content_type: file.content_type,
            content: file.content,
        };

        let created = self.store.create(upload).await.map_err(|e| {
            let error = CoreError::from(e);
            self.logger.log_error(&error, &self.context("handle_change_file"));
            error
        })?;

        log::info!("Receipt {} uploaded for bill {}", file_name, created.key);
        self.receipt = Some(UploadedReceipt {
            bill_id: created.key,
            file_url: created.file_url.clone(),
            file_name: file_name.clone(),
        });

        Ok(FileCheck::Accepted {
            file_name,
            file_url: created.file_url,
        })
    }

    /// Build the pending bill described by `form`
    pub fn bill_from_form(&self, form: &NewBillForm) -> CoreResult<Bill> {
        let date = form.date.trim();
        if chrono::NaiveDate::parse_from_str(date, "%Y-%m-%d").is_err() {
            return Err(CoreError::ValidationError {
                message: format!("Invalid date: {}", form.date),
            });
        }

        let amount = parse_decimal(&form.amount)
            .ok_or_else(|| CoreError::ValidationError {
                message: format!("Invalid amount: {}", form.amount),
            })?
            .trunc();

        let vat = if form.vat.trim().is_empty() {
            Decimal::ZERO
        } else {
            parse_decimal(&form.vat).ok_or_else(|| CoreError::ValidationError {
                message: format!("Invalid VAT: {}", form.vat),
            })?
        };

        let pct = form
            .pct
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|p| *p > 0)
            .unwrap_or(self.settings.default_pct);

        let (id, file_url, file_name) = match &self.receipt {
            Some(r) => (r.bill_id.clone(), r.file_url.clone(), r.file_name.clone()),
            None => (billed_utils::generate_id(), String::new(), String::new()),
        };

        Ok(Bill {
            id,
            email: Some(self.user.email.clone()),
            bill_type: form.expense_type.clone(),
            name: form.name.clone(),
            date: date.to_string(),
            amount,
            vat,
            pct,
            commentary: form.commentary.clone(),
            file_url,
            file_name,
            status: BillStatus::Pending,
            comment_admin: None,
        })
    }

    /// Send the bill to the store, then go back to the bills list
    ///
    /// A store failure is returned as is and no navigation happens.
    pub async fn handle_submit(&mut self, form: NewBillForm) -> CoreResult<RoutePath> {
        let bill = self.bill_from_form(&form)?;
        let id = bill.id.clone();

        self.store.update(bill).await.map_err(|e| {
            let error = CoreError::from(e);
            self.logger.log_error(&error, &self.context("handle_submit"));
            error
        })?;

        log::info!("Bill {} submitted by {}", id, self.user.email);
        self.receipt = None;
        Ok(RoutePath::Bills)
    }
}

fn parse_decimal(raw: &str) -> Option<Decimal> {
    Decimal::from_str(raw.trim()).ok()
}
