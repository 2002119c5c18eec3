//! Error types for billed-api

use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use billed_core::{CoreError, RoutePath, StoreError};
use thiserror::Error;

use crate::base_html;
use crate::views::error_page;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Not found: {resource}")]
    NotFound { resource: String },

    #[error("Bad request: {message}")]
    BadRequest { message: String },

    #[error("Unauthorized")]
    Unauthorized,

    #[error(transparent)]
    Store(StoreError),

    #[error("Internal server error")]
    InternalError,
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Store(e) => ApiError::Store(e),
            CoreError::NoSession => ApiError::Unauthorized,
            CoreError::ValidationError { message } | CoreError::InvalidFormat { message } => {
                ApiError::BadRequest { message }
            }
            CoreError::IoError => ApiError::InternalError,
        }
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized => StatusCode::SEE_OTHER,
            ApiError::Store(e) => {
                StatusCode::from_u16(e.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
            ApiError::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            // Back to the login page, for plain and HTMX requests alike
            ApiError::Unauthorized => {
                let login = HeaderValue::from_static(RoutePath::Login.path());
                let mut response = StatusCode::SEE_OTHER.into_response();
                response.headers_mut().insert(header::LOCATION, login.clone());
                response.headers_mut().insert("hx-redirect", login);
                response
            }
            ApiError::Store(e) => {
                log::warn!("Store call failed: {}", e);
                let body = base_html("Erreur", &error_page(&e.to_string()));
                (status, Html(body)).into_response()
            }
            other => {
                log::warn!("Request failed: {}", other);
                (status, other.to_string()).into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_core_error() {
        assert!(matches!(ApiError::from(CoreError::NoSession), ApiError::Unauthorized));
        assert!(matches!(
            ApiError::from(CoreError::ValidationError { message: "x".to_string() }),
            ApiError::BadRequest { .. }
        ));
        assert!(matches!(
            ApiError::from(CoreError::from(StoreError::not_found())),
            ApiError::Store(StoreError { code: 404 })
        ));
    }

    #[test]
    fn test_status() {
        assert_eq!(ApiError::Store(StoreError::not_found()).status(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::Store(StoreError::new(42)).status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(ApiError::Unauthorized.status(), StatusCode::SEE_OTHER);
    }

    #[test]
    fn test_unauthorized_redirects_to_login() {
        let response = ApiError::Unauthorized.into_response();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/");
        assert_eq!(response.headers().get("hx-redirect").unwrap(), "/");
    }
}
