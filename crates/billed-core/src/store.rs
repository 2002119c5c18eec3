//! Remote store for bills and receipts
//!
//! `BillStore` is the seam between the page controllers and whatever
//! backend holds the bills. `MemoryBillStore` keeps everything in memory
//! and can be seeded from a JSON file.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;
use tokio::sync::RwLock;

use crate::error::{CoreError, CoreResult};
use crate::models::Bill;

/// Failed store call, displayed as "Erreur <code>"
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[error("Erreur {code}")]
pub struct StoreError {
    /// HTTP-like status code
    pub code: u16,
}

impl StoreError {
    pub fn new(code: u16) -> Self {
        Self { code }
    }

    pub fn not_found() -> Self {
        Self::new(404)
    }

    pub fn internal() -> Self {
        Self::new(500)
    }
}

/// Result type with StoreError
pub type StoreResult<T> = Result<T, StoreError>;

/// Receipt file sent to the store
#[derive(Debug, Clone)]
pub struct ReceiptUpload {
    /// Owner email, used as the receipt folder
    pub email: String,
    pub file_name: String,
    pub content_type: String,
    pub content: Vec<u8>,
}

impl ReceiptUpload {
    /// Path of the receipt inside the store: `<email>/<key>/<file name>`
    ///
    /// The bill key keeps two uploads with the same file name apart.
    pub fn storage_path(&self, key: &str) -> String {
        format!("{}/{}/{}", self.email, key, self.file_name)
    }
}

/// Store answer to a receipt upload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedReceipt {
    pub file_url: String,
    /// Key reserved for the bill the receipt belongs to
    pub key: String,
}

/// Receipt bytes held by the store
#[derive(Debug, Clone)]
pub struct StoredReceipt {
    pub content_type: String,
    pub content: Vec<u8>,
}

/// Trait for bill stores
#[async_trait]
pub trait BillStore: Send + Sync {
    /// Fetch every bill
    async fn list(&self) -> StoreResult<Vec<Bill>>;

    /// Upload a receipt and reserve a bill key
    async fn create(&self, upload: ReceiptUpload) -> StoreResult<CreatedReceipt>;

    /// Update the bill with the same id, or create it
    async fn update(&self, bill: Bill) -> StoreResult<Bill>;
}

/// In-memory bill store
#[derive(Debug)]
pub struct MemoryBillStore {
    bills: RwLock<Vec<Bill>>,
    receipts: RwLock<HashMap<String, StoredReceipt>>,
    receipt_url_prefix: String,
}

impl MemoryBillStore {
    /// Create an empty store serving receipts under `receipt_url_prefix`
    pub fn new(receipt_url_prefix: &str) -> Self {
        Self::with_bills(receipt_url_prefix, Vec::new())
    }

    /// Create a store holding `bills`
    pub fn with_bills(receipt_url_prefix: &str, bills: Vec<Bill>) -> Self {
        Self {
            bills: RwLock::new(bills),
            receipts: RwLock::new(HashMap::new()),
            receipt_url_prefix: receipt_url_prefix.trim_end_matches('/').to_string(),
        }
    }

    /// Create a store from a JSON array of bills
    pub async fn from_seed_file(receipt_url_prefix: &str, path: &Path) -> CoreResult<Self> {
        let content = tokio::fs::read_to_string(path).await?;
        let bills: Vec<Bill> = serde_json::from_str(&content).map_err(|e| CoreError::InvalidFormat {
            message: format!("{}: {}", path.display(), e),
        })?;
        log::info!("Seeded store with {} bills from {}", bills.len(), path.display());
        Ok(Self::with_bills(receipt_url_prefix, bills))
    }

    /// Receipt stored under `path` (`<email>/<key>/<file name>`)
    pub async fn receipt(&self, path: &str) -> Option<StoredReceipt> {
        self.receipts.read().await.get(path).cloned()
    }

    pub async fn len(&self) -> usize {
        self.bills.read().await.len()
    }
}

#[async_trait]
impl BillStore for MemoryBillStore {
    async fn list(&self) -> StoreResult<Vec<Bill>> {
        let bills = self.bills.read().await;
        log::debug!("store: list -> {} bills", bills.len());
        Ok(bills.clone())
    }

    async fn create(&self, upload: ReceiptUpload) -> StoreResult<CreatedReceipt> {
        if upload.email.is_empty() || upload.file_name.is_empty() {
            return Err(StoreError::new(400));
        }

        let key = billed_utils::generate_id();
        let path = upload.storage_path(&key);
        let created = CreatedReceipt {
            file_url: format!("{}/{}", self.receipt_url_prefix, path),
            key,
        };

        log::debug!("store: create receipt {} ({} bytes)", path, upload.content.len());
        self.receipts.write().await.insert(
            path,
            StoredReceipt {
                content_type: upload.content_type,
                content: upload.content,
            },
        );

        Ok(created)
    }

    async fn update(&self, mut bill: Bill) -> StoreResult<Bill> {
        if bill.id.is_empty() {
            bill.id = billed_utils::generate_id();
        }

        let mut bills = self.bills.write().await;
        match bills.iter_mut().find(|b| b.id == bill.id) {
            Some(existing) => {
                log::debug!("store: update bill {}", bill.id);
                *existing = bill.clone();
            }
            None => {
                log::debug!("store: create bill {}", bill.id);
                bills.push(bill.clone());
            }
        }

        Ok(bill)
    }
}
