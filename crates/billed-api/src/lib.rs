//! HTTP server with HTMX support
//!
//! Routes are organized into modules:
//! - routes::login: Login page, logout, session API
//! - routes::bills: Bills list, receipt modal, bills API
//! - routes::new_bill: New-bill form, receipt upload, submission
//! - routes::receipts: Uploaded receipt files

pub mod error;
pub mod routes;
pub mod views;

use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderMap},
    routing::{get, post},
    Router,
};
use billed_config::Config;
use billed_core::{MemoryBillStore, NewBill, NewBillSettings, SessionRegistry, SessionStore, StoreRef, User};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Mutex;
use tower_http::cors::CorsLayer;

pub use error::ApiError;

/// Room left in request bodies for multipart framing around a receipt
const MULTIPART_OVERHEAD: usize = 64 * 1024;

/// Cookie carrying the client's session id
pub const SESSION_COOKIE: &str = "billed_session";

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Store used by the page controllers
    pub store: StoreRef,
    /// Store holding uploaded receipt files
    pub receipts: Arc<MemoryBillStore>,
    /// Client sessions, selected by the session cookie
    pub sessions: Arc<SessionRegistry>,
    /// Bill being written, per session id
    pub drafts: Arc<Mutex<HashMap<String, NewBill>>>,
}

/// Logged-in employee behind a request
#[derive(Debug, Clone)]
pub struct Client {
    pub session_id: String,
    pub user: User,
}

impl AppState {
    pub fn new(config: Config, store: Arc<MemoryBillStore>) -> Self {
        Self {
            config,
            store: store.clone(),
            receipts: store,
            sessions: Arc::new(SessionRegistry::new()),
            drafts: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Use another store for bills, keeping receipt files where they are
    pub fn with_store(mut self, store: StoreRef) -> Self {
        self.store = store;
        self
    }

    /// Session of the client sending `headers`
    pub fn session(&self, headers: &HeaderMap) -> Option<(String, Arc<SessionStore>)> {
        let id = session_id(headers)?;
        let session = self.sessions.get(&id)?;
        Some((id, session))
    }

    /// Logged-in employee of the client sending `headers`, or `Unauthorized`
    ///
    /// A logged-in admin is sent back to the login page as well.
    pub fn employee(&self, headers: &HeaderMap) -> Result<Client, ApiError> {
        let (session_id, session) = self.session(headers).ok_or(ApiError::Unauthorized)?;
        let user = session.require_user()?;
        if !user.is_employee() {
            log::warn!("{} is not an employee", user.email);
            return Err(ApiError::Unauthorized);
        }
        Ok(Client { session_id, user })
    }

    pub fn new_bill_settings(&self) -> NewBillSettings {
        NewBillSettings::from(&self.config)
    }

    /// Fresh new-bill controller for `user`
    pub fn new_bill(&self, user: User) -> NewBill {
        NewBill::new(self.store.clone(), user, self.new_bill_settings())
    }

    /// Take the client's draft out of the map, or start a fresh one
    ///
    /// The map is not locked while the draft talks to the store.
    pub async fn take_draft(&self, client: &Client) -> NewBill {
        let draft = self.drafts.lock().await.remove(&client.session_id);
        draft.unwrap_or_else(|| self.new_bill(client.user.clone()))
    }

    /// Put a draft back for the client
    pub async fn put_draft(&self, client: &Client, draft: NewBill) {
        self.drafts.lock().await.insert(client.session_id.clone(), draft);
    }
}

/// Session id from the request cookies
pub fn session_id(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .map(|(_, id)| id.to_string())
}

/// `Set-Cookie` value opening a session
pub fn session_cookie(id: &str) -> String {
    format!("{}={}; Path=/; HttpOnly; SameSite=Lax", SESSION_COOKIE, id)
}

/// `Set-Cookie` value dropping the session
pub fn expired_session_cookie() -> String {
    format!("{}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0", SESSION_COOKIE)
}

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    use routes::login::{api_session, login_submit, logout, page_login};
    use routes::bills::{api_bills, htmx_receipt_modal, page_bills};
    use routes::new_bill::{htmx_new_bill_file, htmx_new_bill_submit, page_new_bill};
    use routes::receipts::receipt_file;

    let body_limit = state.config.uploads.max_size_bytes + MULTIPART_OVERHEAD;

    Router::new()
        // API endpoints
        .route("/api/health", get(health_check))
        .route("/api/bills", get(api_bills))
        .route("/api/session", get(api_session))
        // Page routes
        .route("/", get(page_login))
        .route("/login", post(login_submit))
        .route("/logout", get(logout))
        .route("/bills", get(page_bills))
        .route("/bills", post(htmx_new_bill_submit))
        .route("/bills/new", get(page_new_bill))
        // HTMX partial routes
        .route("/bills/new/file", post(htmx_new_bill_file))
        .route("/bills/receipt", get(htmx_receipt_modal))
        // Receipt files
        .route("/receipts/*path", get(receipt_file))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

// ==================== Template Functions ====================

/// Base HTML template
pub fn base_html(title: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="fr">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{} - Billed</title>
    <script src="https://unpkg.com/htmx.org@1.9.10"></script>
    <script src="https://cdn.tailwindcss.com"></script>
    <style>
        .active-icon {{ opacity: 1; }}
        .vertical-navbar a:not(.active-icon) {{ opacity: 0.5; }}
        .htmx-indicator {{ opacity: 0; transition: opacity 0.3s; }}
        .htmx-request .htmx-indicator {{ opacity: 1; }}
    </style>
</head>
<body class="bg-gray-50 text-gray-900">
    {}
</body>
</html>"#,
        title, content
    )
}

/// Check if request is from HTMX (partial page update)
fn is_htmx_request(headers: &HeaderMap) -> bool {
    headers.get("hx-request").is_some()
}

/// Wrap content for full page or HTMX partial
pub fn page_response(headers: &HeaderMap, title: &str, inner_content: &str) -> String {
    if is_htmx_request(headers) {
        inner_content.to_string()
    } else {
        base_html(title, inner_content)
    }
}

/// Start the HTTP server
///
/// Binds to the configured address and serves until the process stops.
pub async fn start_server(state: AppState) -> std::io::Result<()> {
    let addr = state.config.listen_addr();
    let cors = state.config.server.cors;

    let mut router = create_router(state);
    if cors {
        router = router.layer(CorsLayer::permissive());
    }

    let listener = TcpListener::bind(&addr).await?;
    log::info!("Starting Billed server on http://{}", addr);
    log::info!("Available routes:");
    log::info!("  - / (Login)");
    log::info!("  - /bills (Bills list)");
    log::info!("  - /bills/new (New bill)");
    log::info!("  - /api/* (JSON API endpoints)");

    axum::serve(listener, router).await?;
    log::info!("Server stopped");
    Ok(())
}
