//! Login endpoints
//!
//! Endpoints:
//! - login_submit: Employee login form (redirects to the bills list)
//! - logout: Close the client's session
//! - api_session: Logged-in user of the client (JSON)

use axum::extract::Form;
use axum::http::header;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Json;
use billed_core::{RoutePath, User};
use serde::Deserialize;

use super::page::login_html;
use crate::views::RenderState;
use crate::{expired_session_cookie, session_cookie, ApiError, AppState};

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Open a session for the employee and go to the bills list
///
/// The client keeps the session id in a cookie. A session it already had is closed.
pub async fn login_submit(
    state: axum::extract::State<AppState>,
    headers: axum::http::HeaderMap,
    Form(form): Form<LoginForm>,
) -> Result<Response, ApiError> {
    let email = form.email.trim();
    if email.is_empty() || !email.contains('@') || form.password.is_empty() {
        log::warn!("Refused login for {:?}", email);
        let html = login_html(&state, &headers, RenderState::with_error("Email ou mot de passe invalide"));
        return Ok(Html(html).into_response());
    }

    if let Some((old_id, _)) = state.session(&headers) {
        state.sessions.close(&old_id);
        state.drafts.lock().await.remove(&old_id);
    }

    let (id, session) = state.sessions.open();
    session.set_user(&User::employee(email))?;
    log::info!("{} logged in", email);

    Ok((
        [(header::SET_COOKIE, session_cookie(&id))],
        Redirect::to(RoutePath::Bills.path()),
    )
        .into_response())
}

pub async fn logout(
    state: axum::extract::State<AppState>,
    headers: axum::http::HeaderMap,
) -> Response {
    if let Some((id, session)) = state.session(&headers) {
        if let Ok(Some(user)) = session.user() {
            log::info!("{} logged out", user.email);
        }
        state.sessions.close(&id);
        state.drafts.lock().await.remove(&id);
    }
    (
        [(header::SET_COOKIE, expired_session_cookie())],
        Redirect::to(RoutePath::Login.path()),
    )
        .into_response()
}

/// Logged-in user of the client, or null (JSON API)
pub async fn api_session(
    state: axum::extract::State<AppState>,
    headers: axum::http::HeaderMap,
) -> Result<Json<Option<User>>, ApiError> {
    match state.session(&headers) {
        Some((_, session)) => Ok(Json(session.user()?)),
        None => Ok(Json(None)),
    }
}
