//! Bills page rendering - Full page endpoints

use billed_core::{Bills, CoreError, RoutePath};

use crate::views::{render, FormOptions, RenderState};
use crate::{page_response, ApiError, AppState};

/// Bills list controller configured from the app state
pub(crate) fn bills_controller(state: &AppState) -> Bills {
    Bills::new(state.store.clone()).with_modal_width(state.config.ui.modal_width)
}

/// Bills list, or the error page when the store call fails
pub(crate) async fn bills_html(state: &AppState, headers: &axum::http::HeaderMap) -> Result<String, ApiError> {
    let controller = bills_controller(state);
    let render_state = match controller.get_bills().await {
        Ok(bills) => RenderState::with_data(bills).with_new_bill_route(controller.handle_click_new_bill()),
        Err(CoreError::Store(e)) => RenderState::with_error(e.to_string()),
        Err(e) => return Err(e.into()),
    };

    let form = FormOptions {
        accept: &state.config.uploads.allowed_extensions,
        default_pct: state.config.ui.default_pct,
    };
    let inner_content = render(RoutePath::Bills, &render_state, &form);
    Ok(page_response(headers, RoutePath::Bills.title(), &inner_content))
}

pub async fn page_bills(
    state: axum::extract::State<AppState>,
    headers: axum::http::HeaderMap,
) -> Result<axum::response::Html<String>, ApiError> {
    state.employee(&headers)?;
    Ok(axum::response::Html(bills_html(&state, &headers).await?))
}
