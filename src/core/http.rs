//! HTTP utilities for stats API communication

use std::sync::Mutex;

use crate::Result;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};

/// Environment variable holding a bearer token for the stats API.
pub const API_TOKEN_ENV_VAR: &str = "BASKETIFY_API_TOKEN";

/// Session token capability injected into the network layer.
pub trait TokenStore: Send + Sync {
    fn get_token(&self) -> Option<String>;
    fn set_token(&self, token: String);
    fn clear_token(&self);
}

/// Token store backed by the process environment. Setting or clearing only
/// affects the in-process override, never the real environment.
#[derive(Debug, Default)]
pub struct EnvTokenStore {
    overridden: Mutex<Option<Option<String>>>,
}

impl EnvTokenStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for EnvTokenStore {
    fn get_token(&self) -> Option<String> {
        if let Ok(guard) = self.overridden.lock() {
            if let Some(token) = guard.as_ref() {
                return token.clone();
            }
        }
        std::env::var(API_TOKEN_ENV_VAR)
            .ok()
            .filter(|t| !t.trim().is_empty())
    }

    fn set_token(&self, token: String) {
        if let Ok(mut guard) = self.overridden.lock() {
            *guard = Some(Some(token));
        }
    }

    fn clear_token(&self) {
        if let Ok(mut guard) = self.overridden.lock() {
            *guard = Some(None);
        }
    }
}

/// In-memory token store.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new(token: Option<String>) -> Self {
        Self {
            token: Mutex::new(token),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn get_token(&self) -> Option<String> {
        self.token.lock().ok().and_then(|t| t.clone())
    }

    fn set_token(&self, token: String) {
        if let Ok(mut guard) = self.token.lock() {
            *guard = Some(token);
        }
    }

    fn clear_token(&self) {
        if let Ok(mut guard) = self.token.lock() {
            *guard = None;
        }
    }
}

/// JSON accept header plus a bearer `Authorization` header when the store
/// holds a token.
pub fn auth_header_map(store: &dyn TokenStore) -> Result<HeaderMap> {
    let mut h = HeaderMap::new();
    h.insert(ACCEPT, HeaderValue::from_static("application/json"));
    if let Some(token) = store.get_token() {
        h.insert(AUTHORIZATION, HeaderValue::from_str(&format!("Bearer {token}"))?);
    }
    Ok(h)
}
