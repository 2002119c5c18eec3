//! Fixtures and store doubles shared by the unit tests

use async_trait::async_trait;
use rust_decimal::Decimal;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::models::Bill;
use crate::store::{BillStore, CreatedReceipt, ReceiptUpload, StoreError, StoreResult};
use crate::types::BillStatus;

pub fn sample_bill(id: &str, date: &str) -> Bill {
    Bill {
        id: id.to_string(),
        email: Some("a@a".to_string()),
        bill_type: "Transports".to_string(),
        name: format!("bill {}", id),
        date: date.to_string(),
        amount: Decimal::from(100),
        vat: Decimal::from(20),
        pct: 20,
        commentary: String::new(),
        file_url: format!("/receipts/a@a/{}.png", id),
        file_name: format!("{}.png", id),
        status: BillStatus::Pending,
        comment_admin: None,
    }
}

/// The four bills of the demo data set, deliberately out of date order
pub fn sample_bills() -> Vec<Bill> {
    let json = r#"[
        {
            "id": "47qAXb6fIm2zOKkLzMro",
            "vat": 80,
            "fileUrl": "https://test.storage.tld/v0/b/billable-677b6.a…f-1.jpg?alt=media&token=c1640e12-a24b-4b11-ae52-529112e9602a",
            "status": "pending",
            "type": "Hôtel et logement",
            "commentary": "séminaire billed",
            "name": "encore",
            "fileName": "preview-facture-free-201801-pdf-1.jpg",
            "date": "2004-04-04",
            "amount": 400,
            "commentAdmin": "ok",
            "email": "a@a",
            "pct": 20
        },
        {
            "id": "BeKy5Mo4jkmdfPGYpTxZ",
            "vat": 0,
            "amount": 100,
            "name": "test1",
            "fileName": "1592770761.jpeg",
            "commentary": "plop",
            "pct": 20,
            "type": "Transports",
            "email": "a@a",
            "fileUrl": "https://test.storage.tld/v0/b/billable-677b6.a…61.jpeg?alt=media&token=7685cd61-c112-42bc-9929-8a799bb82d8b",
            "date": "2001-01-01",
            "status": "refused",
            "commentAdmin": "en fait non"
        },
        {
            "id": "UIUZtnPQvnbFnB0ozvJh",
            "name": "test3",
            "email": "a@a",
            "type": "Services en ligne",
            "vat": 60,
            "pct": 20,
            "commentAdmin": "bon bah d'accord",
            "amount": 300,
            "status": "accepted",
            "date": "2003-03-03",
            "commentary": "",
            "fileName": "facture-client-php-exportee-dans-document-pdf-enregistre-sur-disque-dur.png",
            "fileUrl": "https://test.storage.tld/v0/b/billable-677b6.a…dur.png?alt=media&token=571d34cb-9c8f-430a-af52-66221cae1da3"
        },
        {
            "id": "qcCK3SzECmaZAGRrHjaC",
            "status": "refused",
            "pct": 20,
            "amount": 200,
            "email": "a@a",
            "name": "test2",
            "vat": 40,
            "fileName": "preview-facture-free-201801-pdf-1.jpg",
            "date": "2002-02-02",
            "commentAdmin": "pas la bonne facture",
            "commentary": "test2",
            "type": "Restaurants et bars",
            "fileUrl": "https://test.storage.tld/v0/b/billable-677b6.a…f-1.jpg?alt=media&token=4df6ed2c-12c8-42a2-b013-346c1346f732"
        }
    ]"#;
    serde_json::from_str(json).expect("sample bills are valid JSON")
}

/// Store whose every call fails with the same error
pub struct FailingStore {
    error: StoreError,
}

impl FailingStore {
    pub fn new(error: StoreError) -> Self {
        Self { error }
    }
}

#[async_trait]
impl BillStore for FailingStore {
    async fn list(&self) -> StoreResult<Vec<Bill>> {
        Err(self.error)
    }

    async fn create(&self, _upload: ReceiptUpload) -> StoreResult<CreatedReceipt> {
        Err(self.error)
    }

    async fn update(&self, _bill: Bill) -> StoreResult<Bill> {
        Err(self.error)
    }
}

/// Store that accepts everything and counts the calls it receives
#[derive(Default)]
pub struct RecordingStore {
    creates: AtomicUsize,
    updates: Mutex<Vec<Bill>>,
}

impl RecordingStore {
    pub fn create_calls(&self) -> usize {
        self.creates.load(Ordering::SeqCst)
    }

    pub fn update_calls(&self) -> usize {
        self.updates.lock().unwrap().len()
    }

    pub fn last_update(&self) -> Option<Bill> {
        self.updates.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl BillStore for RecordingStore {
    async fn list(&self) -> StoreResult<Vec<Bill>> {
        Ok(self.updates.lock().unwrap().clone())
    }

    async fn create(&self, upload: ReceiptUpload) -> StoreResult<CreatedReceipt> {
        let key = format!("key-{}", self.creates.fetch_add(1, Ordering::SeqCst));
        Ok(CreatedReceipt {
            file_url: format!("/receipts/{}", upload.storage_path(&key)),
            key,
        })
    }

    async fn update(&self, bill: Bill) -> StoreResult<Bill> {
        self.updates.lock().unwrap().push(bill.clone());
        Ok(bill)
    }
}
