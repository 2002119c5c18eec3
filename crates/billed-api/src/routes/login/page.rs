//! Login page rendering

use billed_core::RoutePath;

use crate::views::{render, FormOptions, RenderState};
use crate::{page_response, AppState};

pub async fn page_login(
    state: axum::extract::State<AppState>,
    headers: axum::http::HeaderMap,
) -> axum::response::Html<String> {
    axum::response::Html(login_html(&state, &headers, RenderState::default()))
}

/// Login page, with the error of a refused attempt when there is one
pub(crate) fn login_html(state: &AppState, headers: &axum::http::HeaderMap, render_state: RenderState) -> String {
    let form = FormOptions {
        accept: &state.config.uploads.allowed_extensions,
        default_pct: state.config.ui.default_pct,
    };
    let inner_content = render(RoutePath::Login, &render_state, &form);
    page_response(headers, RoutePath::Login.title(), &inner_content)
}
