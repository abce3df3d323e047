// src/session/mod.rs - Authenticated identity and brand selection

//! The session is the app's tenant scope: a bearer token, the logged-in
//! user, the brand list, and the active brand every data fetch is scoped
//! to. It persists across reloads in durable key-value storage and is
//! modeled as a tagged union so consumers pattern-match instead of
//! falling back to structural defaults.

use tokio::sync::RwLock;

use crate::api::models::{AppUser, Brand};
use crate::api::ApiClient;
use crate::platform::{mirror_token_cookie, StorageArc};
use crate::types::EntityId;

pub const KEY_TOKEN: &str = "token";
pub const KEY_USER: &str = "user";
pub const KEY_BRANDS: &str = "brands";
pub const KEY_ACTIVE_BRAND: &str = "activeBrand";

/// The authenticated session payload.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionData {
    pub token: String,
    pub user: Option<AppUser>,
    pub brands: Vec<Brand>,
    pub active_brand: Option<Brand>,
}

/// Either there is no token, or there is a full session. There is no
/// in-between state to destructure around.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SessionState {
    #[default]
    Unauthenticated,
    Ready(SessionData),
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    pub fn token(&self) -> Option<&str> {
        match self {
            Self::Unauthenticated => None,
            Self::Ready(data) => Some(&data.token),
        }
    }

    pub fn user(&self) -> Option<&AppUser> {
        match self {
            Self::Unauthenticated => None,
            Self::Ready(data) => data.user.as_ref(),
        }
    }

    pub fn brands(&self) -> &[Brand] {
        match self {
            Self::Unauthenticated => &[],
            Self::Ready(data) => &data.brands,
        }
    }

    pub fn active_brand(&self) -> Option<&Brand> {
        match self {
            Self::Unauthenticated => None,
            Self::Ready(data) => data.active_brand.as_ref(),
        }
    }
}

/// Owns the canonical session state and its persistence.
pub struct SessionManager {
    storage: StorageArc,
    api: ApiClient,
    state: RwLock<SessionState>,
}

impl SessionManager {
    pub fn new(storage: StorageArc, api: ApiClient) -> Self {
        Self {
            storage,
            api,
            state: RwLock::new(SessionState::Unauthenticated),
        }
    }

    pub async fn snapshot(&self) -> SessionState {
        self.state.read().await.clone()
    }

    /// Load the persisted session at startup. Malformed stored JSON is
    /// treated as absent; this never fails out of startup.
    pub async fn hydrate(&self) -> SessionState {
        let token = match self.read_key(KEY_TOKEN).await {
            Some(token) if !token.is_empty() => token,
            _ => {
                mirror_token_cookie(None);
                return self.install(SessionState::Unauthenticated).await;
            }
        };

        let user: Option<AppUser> = self.read_json(KEY_USER).await;
        let brands: Vec<Brand> = self.read_json(KEY_BRANDS).await.unwrap_or_default();
        let active_brand: Option<Brand> = self.read_json(KEY_ACTIVE_BRAND).await;

        let data = self
            .repair(SessionData {
                token,
                user,
                brands,
                active_brand,
            })
            .await;
        mirror_token_cookie(Some(&data.token));
        self.install(SessionState::Ready(data)).await
    }

    /// Install the post-login session without refetching the brand list.
    pub async fn seed(
        &self,
        token: String,
        user: Option<AppUser>,
        brands: Vec<Brand>,
        active_id: Option<EntityId>,
    ) -> SessionState {
        let active_brand = active_id.and_then(|id| brands.iter().find(|b| b.id == id).cloned());
        let data = self
            .repair(SessionData {
                token,
                user,
                brands,
                active_brand,
            })
            .await;

        self.write_key(KEY_TOKEN, &data.token).await;
        self.write_json(KEY_USER, &data.user).await;
        self.write_json(KEY_BRANDS, &data.brands).await;
        mirror_token_cookie(Some(&data.token));
        self.install(SessionState::Ready(data)).await
    }

    /// Re-fetch the brand list with the current token. A no-op when
    /// unauthenticated; failures keep the current state and log a warning,
    /// so this is safe to call from a fixed interval.
    pub async fn refresh_brands(&self) -> SessionState {
        let current = self.snapshot().await;
        let SessionState::Ready(mut data) = current else {
            return SessionState::Unauthenticated;
        };

        match self.api.brands(&data.token).await {
            Ok(brands) => {
                data.brands = brands;
                self.write_json(KEY_BRANDS, &data.brands).await;
                let data = self.repair(data).await;
                self.install(SessionState::Ready(data)).await
            }
            Err(e) => {
                tracing::warn!(error = %e, "brand refresh failed");
                SessionState::Ready(data)
            }
        }
    }

    /// Make the given brand active. The local change lands first and is
    /// not rolled back if the backend notification fails.
    pub async fn select_brand(&self, brand_id: EntityId) -> SessionState {
        let current = self.snapshot().await;
        let SessionState::Ready(mut data) = current else {
            return SessionState::Unauthenticated;
        };

        data.active_brand = data.brands.iter().find(|b| b.id == brand_id).cloned();
        let data = self.repair(data).await;
        let state = self.install(SessionState::Ready(data.clone())).await;

        if let Err(e) = self.api.select_brand(&data.token, brand_id).await {
            tracing::warn!(error = %e, brand_id, "brand selection not acknowledged by backend");
        }
        state
    }

    /// Tear the session down: clear every field and the persisted copy.
    pub async fn logout(&self) -> SessionState {
        if let Err(e) = self.storage.clear().await {
            tracing::warn!(error = %e, "failed to clear persisted session");
        }
        mirror_token_cookie(None);
        self.install(SessionState::Unauthenticated).await
    }

    /// Keep the invariant: whenever no brand is active and the list is
    /// non-empty, the first brand becomes active. The repaired choice is
    /// persisted immediately.
    async fn repair(&self, mut data: SessionData) -> SessionData {
        let listed = |brand: &Brand| data.brands.iter().any(|b| b.id == brand.id);
        let needs_repair = match &data.active_brand {
            Some(active) => !data.brands.is_empty() && !listed(active),
            None => !data.brands.is_empty(),
        };
        if needs_repair {
            data.active_brand = data.brands.first().cloned();
        }
        self.write_json(KEY_ACTIVE_BRAND, &data.active_brand).await;
        data
    }

    async fn install(&self, state: SessionState) -> SessionState {
        *self.state.write().await = state.clone();
        state
    }

    async fn read_key(&self, key: &str) -> Option<String> {
        match self.storage.get(key).await {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(key, error = %e, "storage read failed");
                None
            }
        }
    }

    async fn read_json<T: serde::de::DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.read_key(key).await?;
        serde_json::from_str(&raw).ok()
    }

    async fn write_key(&self, key: &str, value: &str) {
        if let Err(e) = self.storage.set(key, value).await {
            tracing::warn!(key, error = %e, "storage write failed");
        }
    }

    async fn write_json<T: serde::Serialize>(&self, key: &str, value: &T) {
        match serde_json::to_string(value) {
            Ok(json) => self.write_key(key, &json).await,
            Err(e) => tracing::warn!(key, error = %e, "failed to encode value"),
        }
    }
}
