//! Session storage for the logged-in user
//!
//! Each client gets its own `SessionStore`, found in the `SessionRegistry`
//! by session id. The user is kept as a JSON blob under the `user` key, the
//! same shape the login page writes: `{"type": "Employee", "email": "a@a"}`.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use uuid::Uuid;

use crate::error::{CoreError, CoreResult};
use crate::types::UserType;

const USER_KEY: &str = "user";

/// Logged-in user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "type")]
    pub user_type: UserType,
    #[serde(default)]
    pub email: String,
}

impl User {
    pub fn employee(email: &str) -> Self {
        Self {
            user_type: UserType::Employee,
            email: email.to_string(),
        }
    }

    pub fn is_employee(&self) -> bool {
        self.user_type == UserType::Employee
    }
}

/// Key/value session storage
#[derive(Debug, Default)]
pub struct SessionStore {
    items: RwLock<HashMap<String, String>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_item(&self, key: &str) -> Option<String> {
        let items = self.items.read().unwrap_or_else(|e| e.into_inner());
        items.get(key).cloned()
    }

    pub fn set_item(&self, key: &str, value: String) {
        let mut items = self.items.write().unwrap_or_else(|e| e.into_inner());
        items.insert(key.to_string(), value);
    }

    pub fn remove_item(&self, key: &str) {
        let mut items = self.items.write().unwrap_or_else(|e| e.into_inner());
        items.remove(key);
    }

    pub fn clear(&self) {
        let mut items = self.items.write().unwrap_or_else(|e| e.into_inner());
        items.clear();
    }

    /// Store the logged-in user
    pub fn set_user(&self, user: &User) -> CoreResult<()> {
        let json = serde_json::to_string(user).map_err(|e| CoreError::InvalidFormat {
            message: e.to_string(),
        })?;
        self.set_item(USER_KEY, json);
        log::info!("Session opened for {} ({})", user.email, user.user_type);
        Ok(())
    }

    /// Read the logged-in user, if any
    pub fn user(&self) -> CoreResult<Option<User>> {
        match self.get_item(USER_KEY) {
            Some(json) => serde_json::from_str(&json)
                .map(Some)
                .map_err(|e| CoreError::InvalidFormat {
                    message: format!("Stored user is not valid JSON: {}", e),
                }),
            None => Ok(None),
        }
    }

    /// Read the logged-in user or fail with `NoSession`
    pub fn require_user(&self) -> CoreResult<User> {
        self.user()?.ok_or(CoreError::NoSession)
    }
}

/// Sessions of every client, by session id
#[derive(Debug, Default)]
pub struct SessionRegistry {
    sessions: RwLock<HashMap<String, Arc<SessionStore>>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open an empty session under a fresh random id
    pub fn open(&self) -> (String, Arc<SessionStore>) {
        let id = Uuid::new_v4().to_string();
        let session = Arc::new(SessionStore::new());
        let mut sessions = self.sessions.write().unwrap_or_else(|e| e.into_inner());
        sessions.insert(id.clone(), session.clone());
        (id, session)
    }

    pub fn get(&self, id: &str) -> Option<Arc<SessionStore>> {
        let sessions = self.sessions.read().unwrap_or_else(|e| e.into_inner());
        sessions.get(id).cloned()
    }

    /// Drop the session; other clients keep theirs
    pub fn close(&self, id: &str) -> Option<Arc<SessionStore>> {
        let mut sessions = self.sessions.write().unwrap_or_else(|e| e.into_inner());
        sessions.remove(id)
    }

    pub fn len(&self) -> usize {
        self.sessions.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
