//! Uploaded receipt files

use axum::extract::Path;
use axum::http::header;
use axum::response::IntoResponse;
use bytes::Bytes;

use crate::{ApiError, AppState};

/// Serve the receipt stored under `<email>/<file name>`
pub async fn receipt_file(
    state: axum::extract::State<AppState>,
    Path(path): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let receipt = state
        .receipts
        .receipt(&path)
        .await
        .ok_or_else(|| ApiError::NotFound { resource: format!("receipt {}", path) })?;

    Ok(([(header::CONTENT_TYPE, receipt.content_type)], Bytes::from(receipt.content)))
}
