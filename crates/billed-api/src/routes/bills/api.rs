//! Bills API endpoints - JSON API and HTMX partial responses
//!
//! Endpoints:
//! - api_bills: Bills list, newest first (JSON)
//! - htmx_receipt_modal: Receipt modal behind an eye icon (HTML fragment)

use axum::extract::Query;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use billed_core::{CoreError, EyeIcon};
use std::collections::HashMap;

use super::page::bills_controller;
use crate::views::receipt_modal;
use crate::{ApiError, AppState};

/// Error body for JSON endpoints
fn json_error(err: &CoreError) -> Response {
    let status = match err {
        CoreError::Store(e) => StatusCode::from_u16(e.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        CoreError::NoSession => StatusCode::UNAUTHORIZED,
        CoreError::ValidationError { .. } | CoreError::InvalidFormat { .. } => StatusCode::BAD_REQUEST,
        CoreError::IoError => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, Json(err.to_details())).into_response()
}

/// Get bills (JSON API)
pub async fn api_bills(state: axum::extract::State<AppState>, headers: axum::http::HeaderMap) -> Response {
    let user = match state.session(&headers) {
        Some((_, session)) => session.require_user(),
        None => Err(CoreError::NoSession),
    };
    if let Err(e) = user {
        return json_error(&e);
    }

    match bills_controller(&state).get_bills().await {
        Ok(bills) => Json(bills).into_response(),
        Err(e) => json_error(&e),
    }
}

/// Receipt modal for the eye icon carrying `url` (HTML fragment)
pub async fn htmx_receipt_modal(
    state: axum::extract::State<AppState>,
    headers: axum::http::HeaderMap,
    params: Query<HashMap<String, String>>,
) -> Result<Html<String>, ApiError> {
    state.employee(&headers)?;

    let icon = EyeIcon {
        bill_url: params.get("url").cloned(),
    };
    let modal = bills_controller(&state).handle_click_icon_eye(&icon)?;
    Ok(Html(receipt_modal(&modal)))
}
