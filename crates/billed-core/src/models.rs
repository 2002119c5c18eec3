//! Core data models for bills

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::types::BillStatus;

/// Expense-report record submitted by an employee
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bill {
    /// Store key
    #[serde(default)]
    pub id: String,
    /// Email of the employee who submitted the bill
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Expense category (e.g. "Transports")
    #[serde(rename = "type")]
    pub bill_type: String,
    /// Short description
    #[serde(default)]
    pub name: String,
    /// Expense date (YYYY-MM-DD)
    pub date: String,
    /// Amount including VAT, a JSON number
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    /// VAT amount, a JSON number
    #[serde(default, with = "rust_decimal::serde::float")]
    pub vat: Decimal,
    /// VAT percentage
    #[serde(default)]
    pub pct: u32,
    #[serde(default)]
    pub commentary: String,
    /// URL of the uploaded receipt
    #[serde(default)]
    pub file_url: String,
    /// File name of the uploaded receipt
    #[serde(default)]
    pub file_name: String,
    #[serde(default)]
    pub status: BillStatus,
    /// Reviewer comment, set by administrators
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment_admin: Option<String>,
}

impl Bill {
    /// Get the bill date as NaiveDate
    pub fn date_naive(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").ok()
    }

    /// Check if the bill carries a receipt
    pub fn has_receipt(&self) -> bool {
        !self.file_url.is_empty()
    }
}

/// Bill prepared for the list view: date formatted, status as label
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayBill {
    /// Underlying record with its raw ISO date
    pub bill: Bill,
    /// Formatted date, or the raw date when it could not be formatted
    pub date: String,
    /// Status label
    pub status: String,
}
