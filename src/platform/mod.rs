// src/platform/mod.rs - Platform abstraction for storage and network

//! The only platform services this client needs are a durable key-value
//! store (session persistence) and an HTTP transport. Native uses the
//! filesystem and reqwest; the web build uses `localStorage` and `fetch`.

#[cfg(not(target_arch = "wasm32"))]
pub mod native;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub mod network;
pub mod storage;

pub use network::{NetworkArc, NetworkProvider, NetworkRequest, NetworkResponse};
pub use storage::{MemoryStorage, StorageArc, StorageProvider};

/// The platform services handed to the application at startup.
#[derive(Clone)]
pub struct PlatformProviders {
    pub storage: StorageArc,
    pub network: NetworkArc,
}

/// Build the providers for the compile target.
pub fn create_providers() -> PlatformProviders {
    #[cfg(not(target_arch = "wasm32"))]
    {
        native::create_providers()
    }
    #[cfg(target_arch = "wasm32")]
    {
        web::create_providers()
    }
}

/// Mirror the session token into a `token` cookie so protected routes can
/// be guarded before the app hydrates. No-op on native, where there is no
/// cookie jar.
pub fn mirror_token_cookie(token: Option<&str>) {
    #[cfg(target_arch = "wasm32")]
    web::mirror_token_cookie(token);
    #[cfg(not(target_arch = "wasm32"))]
    let _ = token;
}
