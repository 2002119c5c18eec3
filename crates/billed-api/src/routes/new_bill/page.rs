//! New-bill page rendering - Full page endpoints

use billed_core::RoutePath;

use crate::views::{render, FormOptions, RenderState};
use crate::{page_response, ApiError, AppState};

/// New-bill form; opening it starts a fresh draft for the client
pub async fn page_new_bill(
    state: axum::extract::State<AppState>,
    headers: axum::http::HeaderMap,
) -> Result<axum::response::Html<String>, ApiError> {
    let client = state.employee(&headers)?;
    let draft = state.new_bill(client.user.clone());
    state.put_draft(&client, draft).await;

    let form = FormOptions {
        accept: &state.config.uploads.allowed_extensions,
        default_pct: state.config.ui.default_pct,
    };
    let inner_content = render(RoutePath::NewBill, &RenderState::default(), &form);
    Ok(axum::response::Html(page_response(&headers, RoutePath::NewBill.title(), &inner_content)))
}
