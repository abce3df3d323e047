// src/platform/web.rs - Web/WASM platform implementations

use async_trait::async_trait;
use std::sync::Arc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response, Storage};

use crate::error::{Error, Result};
use crate::platform::network::{NetworkBounds, NetworkProvider, NetworkRequest, NetworkResponse};
use crate::platform::storage::{StorageBounds, StorageProvider};
use crate::platform::PlatformProviders;

/// Creates web platform providers
pub fn create_providers() -> PlatformProviders {
    PlatformProviders {
        storage: Arc::new(WebStorage::new()),
        network: Arc::new(FetchNetwork::new()),
    }
}

/// Write or clear the `token` cookie mirrored from storage. Protected
/// routes are guarded by its presence before hydration completes.
pub fn mirror_token_cookie(token: Option<&str>) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Ok(document) = document.dyn_into::<web_sys::HtmlDocument>() else {
        return;
    };
    let cookie = match token {
        Some(token) => format!("token={}; path=/; max-age=3600; samesite=lax", token),
        None => "token=; path=/; max-age=0; samesite=lax".to_string(),
    };
    if document.set_cookie(&cookie).is_err() {
        tracing::warn!("failed to mirror token cookie");
    }
}

/// Fetch API network implementation
pub struct FetchNetwork;

impl FetchNetwork {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FetchNetwork {
    fn default() -> Self {
        Self::new()
    }
}

impl NetworkBounds for FetchNetwork {}

#[async_trait(?Send)]
impl NetworkProvider for FetchNetwork {
    async fn request(&self, request: NetworkRequest) -> Result<NetworkResponse> {
        let window = web_sys::window()
            .ok_or_else(|| Error::transport(&request.url, "no window available"))?;

        let opts = RequestInit::new();
        opts.set_method(&request.method);
        if let Some(body) = &request.body {
            opts.set_body(&wasm_bindgen::JsValue::from_str(body));
        }

        let req = Request::new_with_str_and_init(&request.url, &opts)
            .map_err(|e| Error::transport(&request.url, format!("failed to create request: {:?}", e)))?;

        for (key, value) in &request.headers {
            req.headers().set(key, value).map_err(|e| {
                Error::transport(&request.url, format!("failed to set header: {:?}", e))
            })?;
        }

        let response_value = JsFuture::from(window.fetch_with_request(&req))
            .await
            .map_err(|e| Error::transport(&request.url, format!("fetch failed: {:?}", e)))?;

        let response: Response = response_value
            .dyn_into()
            .map_err(|_| Error::transport(&request.url, "fetch returned a non-response"))?;
        let status_code = response.status();

        let text_promise = response
            .text()
            .map_err(|e| Error::transport(&request.url, format!("failed to read body: {:?}", e)))?;
        let text_value = JsFuture::from(text_promise)
            .await
            .map_err(|e| Error::transport(&request.url, format!("failed to read body: {:?}", e)))?;
        let body = text_value.as_string().unwrap_or_default();

        Ok(NetworkResponse { status_code, body })
    }
}

/// Web storage implementation over localStorage
pub struct WebStorage;

impl WebStorage {
    pub fn new() -> Self {
        Self
    }

    fn local_storage(&self) -> Result<Storage> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .ok_or_else(|| Error::storage("*", "localStorage not available"))
    }
}

impl Default for WebStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl StorageBounds for WebStorage {}

#[async_trait(?Send)]
impl StorageProvider for WebStorage {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let storage = self.local_storage()?;
        storage
            .get_item(key)
            .map_err(|e| Error::storage(key, format!("failed to get item: {:?}", e)))
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let storage = self.local_storage()?;
        storage
            .set_item(key, value)
            .map_err(|e| Error::storage(key, format!("failed to set item: {:?}", e)))
    }

    async fn delete(&self, key: &str) -> Result<()> {
        let storage = self.local_storage()?;
        storage
            .remove_item(key)
            .map_err(|e| Error::storage(key, format!("failed to remove item: {:?}", e)))
    }

    async fn clear(&self) -> Result<()> {
        let storage = self.local_storage()?;
        storage
            .clear()
            .map_err(|e| Error::storage("*", format!("failed to clear storage: {:?}", e)))
    }
}
