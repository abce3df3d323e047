// src/platform/native.rs - Native platform implementations

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tokio::fs;

use crate::error::{Error, Result};
use crate::platform::network::{NetworkBounds, NetworkProvider, NetworkRequest, NetworkResponse};
use crate::platform::storage::{StorageBounds, StorageProvider};
use crate::platform::PlatformProviders;

/// Creates native platform providers
pub fn create_providers() -> PlatformProviders {
    PlatformProviders {
        storage: Arc::new(NativeStorage::new()),
        network: Arc::new(NativeNetwork::new(Duration::from_secs(
            crate::config::AppConfig::default().request_timeout_secs,
        ))),
    }
}

/// Native network implementation over reqwest
pub struct NativeNetwork {
    client: reqwest::Client,
}

impl NativeNetwork {
    pub fn new(timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, "HTTP client builder failed, using defaults");
                reqwest::Client::new()
            });
        Self { client }
    }
}

impl NetworkBounds for NativeNetwork {}

#[async_trait]
impl NetworkProvider for NativeNetwork {
    async fn request(&self, request: NetworkRequest) -> Result<NetworkResponse> {
        let mut req = match request.method.as_str() {
            "GET" => self.client.get(&request.url),
            "POST" => self.client.post(&request.url),
            "PUT" => self.client.put(&request.url),
            "DELETE" => self.client.delete(&request.url),
            other => {
                return Err(Error::new(
                    crate::error::ErrorKind::Application,
                    format!("Unsupported HTTP method: {}", other),
                ))
            }
        };

        for (key, value) in request.headers {
            req = req.header(&key, &value);
        }

        if let Some(body) = request.body {
            req = req.body(body);
        }

        let response = req
            .send()
            .await
            .map_err(|e| Error::transport(&request.url, "HTTP request failed").caused_by(e))?;

        let status_code = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| Error::transport(&request.url, "failed to read response body").caused_by(e))?;

        Ok(NetworkResponse { status_code, body })
    }
}

/// Native storage implementation backed by one JSON-text file per key
pub struct NativeStorage {
    storage_path: std::path::PathBuf,
}

impl Default for NativeStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl NativeStorage {
    pub fn new() -> Self {
        let storage_path = dirs::data_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("channelboard")
            .join("storage");
        Self { storage_path }
    }

    pub fn with_path(storage_path: std::path::PathBuf) -> Self {
        Self { storage_path }
    }

    fn key_to_path(&self, key: &str) -> std::path::PathBuf {
        let safe_key = key.replace(['/', '\\', ':', '*', '?', '"', '<', '>', '|'], "_");
        self.storage_path.join(format!("{}.json", safe_key))
    }
}

impl StorageBounds for NativeStorage {}

#[async_trait]
impl StorageProvider for NativeStorage {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_to_path(key);
        match fs::read_to_string(&path).await {
            Ok(data) => Ok(Some(data)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(Error::storage(key, "failed to read key").caused_by(e)),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.key_to_path(key);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| Error::storage(key, "failed to create storage directory").caused_by(e))?;
        }
        fs::write(&path, value)
            .await
            .map_err(|e| Error::storage(key, "failed to write key").caused_by(e))
    }

    async fn delete(&self, key: &str) -> Result<()> {
        let path = self.key_to_path(key);
        match fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(Error::storage(key, "failed to delete key").caused_by(e)),
        }
    }

    async fn clear(&self) -> Result<()> {
        if self.storage_path.exists() {
            fs::remove_dir_all(&self.storage_path)
                .await
                .map_err(|e| Error::storage("*", "failed to clear storage").caused_by(e))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_native_storage_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let storage = NativeStorage::with_path(dir.path().join("storage"));

        assert_eq!(storage.get("token").await.unwrap(), None);
        storage.set("token", "abc123").await.unwrap();
        assert_eq!(storage.get("token").await.unwrap().as_deref(), Some("abc123"));

        storage.delete("token").await.unwrap();
        assert_eq!(storage.get("token").await.unwrap(), None);
        // deleting a missing key is not an error
        storage.delete("token").await.unwrap();
    }

    #[tokio::test]
    async fn test_native_storage_clear() {
        let dir = tempfile::tempdir().unwrap();
        let storage = NativeStorage::with_path(dir.path().join("storage"));
        storage.set("token", "abc").await.unwrap();
        storage.set("activeBrand", "{\"id\":1,\"name\":\"Crisbar\"}").await.unwrap();
        storage.clear().await.unwrap();
        assert_eq!(storage.get("token").await.unwrap(), None);
        assert_eq!(storage.get("activeBrand").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_key_sanitization() {
        let dir = tempfile::tempdir().unwrap();
        let storage = NativeStorage::with_path(dir.path().join("storage"));
        storage.set("weird/key:name", "v").await.unwrap();
        assert_eq!(
            storage.get("weird/key:name").await.unwrap().as_deref(),
            Some("v")
        );
    }
}
