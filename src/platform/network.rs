// src/platform/network.rs

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

/// Network request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkRequest {
    pub method: String,
    pub url: String,
    pub headers: HashMap<String, String>,
    pub body: Option<String>,
}

impl NetworkRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: "GET".to_string(),
            url: url.into(),
            headers: HashMap::new(),
            body: None,
        }
    }

    pub fn post(url: impl Into<String>, body: impl Into<String>) -> Self {
        let mut request = Self {
            method: "POST".to_string(),
            url: url.into(),
            headers: HashMap::new(),
            body: Some(body.into()),
        };
        request
            .headers
            .insert("Content-Type".to_string(), "application/json".to_string());
        request
    }

    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }
}

/// Network response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkResponse {
    pub status_code: u16,
    pub body: String,
}

impl NetworkResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub type DynNetwork = dyn NetworkProvider + Send + Sync;

#[cfg(target_arch = "wasm32")]
pub type DynNetwork = dyn NetworkProvider + Sync;

pub type NetworkArc = Arc<DynNetwork>;

/// HTTP transport. Cancellation is cooperative: dropping the returned
/// future abandons the request, and the application layer discards any
/// result whose scope has been superseded regardless.
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
pub trait NetworkProvider: NetworkBounds {
    async fn request(&self, request: NetworkRequest) -> Result<NetworkResponse>;
}

#[cfg(not(target_arch = "wasm32"))]
pub trait NetworkBounds: Send + Sync {}

#[cfg(target_arch = "wasm32")]
pub trait NetworkBounds: Sync {}
