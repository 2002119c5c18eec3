//! New-bill endpoints - HTMX partial responses
//!
//! Endpoints:
//! - htmx_new_bill_file: Receipt picked in the file input (HTML fragment)
//! - htmx_new_bill_submit: Submit the form (HX-Redirect to the bills list)

use axum::extract::{Form, Multipart};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use billed_core::{CoreError, FileInput, NewBillForm, RoutePath, SelectedFile};
use bytes::Bytes;

use crate::views::{error_page, file_check_fragment};
use crate::{page_response, ApiError, AppState};

/// Read the `file` part (and the optional `path` input value) of an upload
async fn read_file_input(mut multipart: Multipart) -> Result<FileInput, ApiError> {
    let mut value = None;
    let mut files = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest { message: e.body_text() })?
    {
        let field_name = field.name().unwrap_or_default().to_string();
        match field_name.as_str() {
            "file" => {
                let name = field.file_name().unwrap_or_default().to_string();
                let content_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                let data: Bytes = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::BadRequest { message: e.body_text() })?;
                // An empty file part is what browsers send when nothing is picked
                if !name.is_empty() {
                    files.push(SelectedFile::new(&name, &content_type, data.to_vec()));
                }
            }
            "path" => {
                value = Some(
                    field
                        .text()
                        .await
                        .map_err(|e| ApiError::BadRequest { message: e.body_text() })?,
                );
            }
            _ => {}
        }
    }

    let value = value
        .or_else(|| files.first().map(|f| f.name.clone()))
        .unwrap_or_default();
    Ok(FileInput::new(&value, files))
}

/// Validate and upload the receipt picked in the form
pub async fn htmx_new_bill_file(
    state: axum::extract::State<AppState>,
    headers: axum::http::HeaderMap,
    multipart: Multipart,
) -> Result<Html<String>, ApiError> {
    let client = state.employee(&headers)?;
    let mut input = read_file_input(multipart).await?;

    let mut draft = state.take_draft(&client).await;
    let check = draft.handle_change_file(&mut input).await;
    state.put_draft(&client, draft).await;

    Ok(Html(file_check_fragment(
        &check?,
        &state.config.uploads.allowed_extensions,
        state.config.uploads.show_rejection_message,
    )))
}

/// Submit the new bill, then go back to the bills list
///
/// A failed store call shows the error page instead and keeps the draft.
pub async fn htmx_new_bill_submit(
    state: axum::extract::State<AppState>,
    headers: axum::http::HeaderMap,
    Form(form): Form<NewBillForm>,
) -> Result<Response, ApiError> {
    let client = state.employee(&headers)?;
    let mut draft = state.take_draft(&client).await;

    match draft.handle_submit(form).await {
        Ok(route) => {
            if headers.get("hx-request").is_some() {
                Ok((StatusCode::OK, [("hx-redirect", route.path())]).into_response())
            } else {
                Ok(Redirect::to(route.path()).into_response())
            }
        }
        Err(CoreError::Store(e)) => {
            state.put_draft(&client, draft).await;
            let html = page_response(&headers, RoutePath::Bills.title(), &error_page(&e.to_string()));
            Ok(Html(html).into_response())
        }
        Err(e) => {
            state.put_draft(&client, draft).await;
            Err(e.into())
        }
    }
}
