// src/api/mod.rs - Typed client for the REST backend

//! Thin endpoint wrappers over the platform [`NetworkProvider`]. Every
//! call except login carries the bearer token. Non-2xx responses surface
//! the body's `message` field when one exists; transport failures keep
//! their own category so the views can show the generic "cannot reach
//! server" banner.

pub mod models;

use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{Error, Result};
use crate::platform::{NetworkArc, NetworkRequest};
use crate::table::Selection;
use crate::types::EntityId;

use models::{
    ActiveBrandResponse, Brand, ChannelRef, Company, CompanyResponse, CreateUserRequest,
    DashboardSummary, DataPayload, LoginRequest, LoginResponse, OutletRef, ProductRow, ReviewRow,
    RowsPayload, SelectBrandResponse,
};

/// Server-side scope for the reviews fetch. `All` selections and empty
/// strings are omitted from the query entirely.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReviewQuery {
    pub brand_id: EntityId,
    pub channel_id: Selection,
    pub outlet_id: Selection,
    pub rating: Selection,
    pub q: String,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
}

impl ReviewQuery {
    pub fn to_query_string(&self) -> String {
        let mut params = vec![format!("brandId={}", self.brand_id)];
        if let Some(channel) = self.channel_id.as_param() {
            params.push(format!("channelId={}", channel));
        }
        if let Some(outlet) = self.outlet_id.as_param() {
            params.push(format!("outletId={}", outlet));
        }
        if let Some(rating) = self.rating.as_param() {
            params.push(format!("rating={}", rating));
        }
        if !self.q.is_empty() {
            params.push(format!("q={}", urlencoding::encode(&self.q)));
        }
        if let Some(from) = self.date_from {
            params.push(format!("dateFrom={}", from.format("%Y-%m-%d")));
        }
        if let Some(to) = self.date_to {
            params.push(format!("dateTo={}", to.format("%Y-%m-%d")));
        }
        params.join("&")
    }
}

#[derive(Clone)]
pub struct ApiClient {
    base: String,
    network: NetworkArc,
}

impl ApiClient {
    pub fn new(base: impl Into<String>, network: NetworkArc) -> Self {
        Self {
            base: base.into(),
            network,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    fn authorize(request: NetworkRequest, token: Option<&str>) -> NetworkRequest {
        match token {
            Some(token) => request.with_header("Authorization", format!("Bearer {}", token)),
            None => request,
        }
    }

    /// Decode a success body, or turn a non-2xx response into an error
    /// carrying the body's `message` when present.
    fn decode<T: DeserializeOwned>(path: &str, response: crate::platform::NetworkResponse) -> Result<T> {
        if !response.is_success() {
            return Err(Error::http(
                response.status_code,
                path,
                extract_message(&response.body, response.status_code),
            ));
        }
        serde_json::from_str(&response.body)
            .map_err(|e| Error::serialization(format!("unexpected response from {}", path)).caused_by(e))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str, token: Option<&str>) -> Result<T> {
        let request = Self::authorize(NetworkRequest::get(self.url(path)), token);
        let response = self.network.request(request).await?;
        Self::decode(path, response)
    }

    async fn post_json<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        token: Option<&str>,
        body: &B,
    ) -> Result<T> {
        let payload = serde_json::to_string(body)?;
        let request = Self::authorize(NetworkRequest::post(self.url(path), payload), token);
        let response = self.network.request(request).await?;
        Self::decode(path, response)
    }

    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse> {
        let body = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        self.post_json("/auth/login", None, &body).await
    }

    pub async fn brands(&self, token: &str) -> Result<Vec<Brand>> {
        self.get_json("/brands", Some(token)).await
    }

    pub async fn active_brand(&self, token: &str) -> Result<Option<Brand>> {
        let response: ActiveBrandResponse = self.get_json("/brands/active", Some(token)).await?;
        Ok(response.active)
    }

    pub async fn select_brand(&self, token: &str, brand_id: EntityId) -> Result<Option<Brand>> {
        let body = serde_json::json!({ "brandId": brand_id });
        let response: SelectBrandResponse =
            self.post_json("/brands/select", Some(token), &body).await?;
        Ok(response.selected)
    }

    pub async fn products(&self, token: &str, brand_id: EntityId) -> Result<Vec<ProductRow>> {
        let path = format!("/products?brandId={}", brand_id);
        self.get_json(&path, Some(token)).await
    }

    pub async fn reviews(&self, token: &str, query: &ReviewQuery) -> Result<Vec<ReviewRow>> {
        let path = format!("/reviews?{}", query.to_query_string());
        let payload: RowsPayload<ReviewRow> = self.get_json(&path, Some(token)).await?;
        Ok(payload.into_rows())
    }

    pub async fn outlets(&self, token: &str, brand_id: EntityId) -> Result<Vec<OutletRef>> {
        let path = format!("/outlets?brandId={}", brand_id);
        let payload: RowsPayload<OutletRef> = self.get_json(&path, Some(token)).await?;
        Ok(payload.into_rows())
    }

    pub async fn channels(&self, token: &str) -> Result<Vec<ChannelRef>> {
        let payload: DataPayload<ChannelRef> = self.get_json("/channels", Some(token)).await?;
        Ok(payload.data)
    }

    pub async fn companies(&self, token: &str) -> Result<Vec<Company>> {
        self.get_json("/companies", Some(token)).await
    }

    pub async fn create_company(&self, token: &str, name: &str) -> Result<Company> {
        let body = serde_json::json!({ "name": name });
        let response: CompanyResponse = self.post_json("/companies", Some(token), &body).await?;
        Ok(response.company)
    }

    pub async fn company_brands(&self, token: &str, company_id: EntityId) -> Result<Vec<Brand>> {
        let path = format!("/companies/{}/brands", company_id);
        self.get_json(&path, Some(token)).await
    }

    pub async fn create_company_brand(
        &self,
        token: &str,
        company_id: EntityId,
        name: &str,
    ) -> Result<()> {
        let path = format!("/companies/{}/brands", company_id);
        let body = serde_json::json!({ "name": name });
        let _: serde_json::Value = self.post_json(&path, Some(token), &body).await?;
        Ok(())
    }

    pub async fn create_user(&self, token: &str, request: &CreateUserRequest) -> Result<()> {
        let _: serde_json::Value = self
            .post_json("/superadmin/create-user", Some(token), request)
            .await?;
        Ok(())
    }

    pub async fn dashboard_summary(&self, token: &str, brand_id: EntityId) -> Result<DashboardSummary> {
        let path = format!("/dashboard/summary?brandId={}", brand_id);
        self.get_json(&path, Some(token)).await
    }
}

/// The backend reports failures as `{message}`; anything else falls back
/// to a generic status line.
fn extract_message(body: &str, status_code: u16) -> String {
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        message: Option<String>,
    }

    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .unwrap_or_else(|| format!("HTTP {}", status_code))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::{NetworkProvider, NetworkResponse};
    use parking_lot::Mutex;
    use std::sync::Arc;

    struct MockNetwork {
        responses: Mutex<Vec<NetworkResponse>>,
        requests: Mutex<Vec<NetworkRequest>>,
    }

    impl MockNetwork {
        fn new(responses: Vec<NetworkResponse>) -> Arc<Self> {
            Arc::new(Self {
                responses: Mutex::new(responses),
                requests: Mutex::new(Vec::new()),
            })
        }

        fn ok(body: &str) -> NetworkResponse {
            NetworkResponse {
                status_code: 200,
                body: body.to_string(),
            }
        }

        fn last_request(&self) -> NetworkRequest {
            self.requests.lock().last().cloned().unwrap()
        }
    }

    impl crate::platform::network::NetworkBounds for MockNetwork {}

    #[async_trait::async_trait]
    impl NetworkProvider for MockNetwork {
        async fn request(&self, request: NetworkRequest) -> Result<NetworkResponse> {
            self.requests.lock().push(request);
            Ok(self.responses.lock().remove(0))
        }
    }

    fn client(mock: &Arc<MockNetwork>) -> ApiClient {
        ApiClient::new("http://localhost:5000", mock.clone() as NetworkArc)
    }

    #[tokio::test]
    async fn test_bearer_header_is_attached() {
        let mock = MockNetwork::new(vec![MockNetwork::ok("[]")]);
        client(&mock).brands("tok-123").await.unwrap();
        let request = mock.last_request();
        assert_eq!(
            request.headers.get("Authorization").map(String::as_str),
            Some("Bearer tok-123")
        );
        assert_eq!(request.url, "http://localhost:5000/brands");
    }

    #[tokio::test]
    async fn test_login_carries_no_token() {
        let mock = MockNetwork::new(vec![MockNetwork::ok(r#"{"token": "t"}"#)]);
        client(&mock).login("admin", "rahasia").await.unwrap();
        let request = mock.last_request();
        assert!(!request.headers.contains_key("Authorization"));
        assert_eq!(request.method, "POST");
    }

    #[tokio::test]
    async fn test_review_query_omits_unset_filters() {
        let query = ReviewQuery {
            brand_id: 3,
            ..Default::default()
        };
        assert_eq!(query.to_query_string(), "brandId=3");
    }

    #[tokio::test]
    async fn test_review_query_full() {
        let query = ReviewQuery {
            brand_id: 3,
            channel_id: Selection::Id(2),
            outlet_id: Selection::Id(7),
            rating: Selection::Id(5),
            q: "ayam goreng".to_string(),
            date_from: NaiveDate::from_ymd_opt(2025, 3, 1),
            date_to: NaiveDate::from_ymd_opt(2025, 3, 14),
        };
        assert_eq!(
            query.to_query_string(),
            "brandId=3&channelId=2&outletId=7&rating=5&q=ayam%20goreng&dateFrom=2025-03-01&dateTo=2025-03-14"
        );
    }

    #[tokio::test]
    async fn test_outlets_accepts_wrapped_payload() {
        let mock = MockNetwork::new(vec![MockNetwork::ok(
            r#"{"rows": [{"id": 1, "name": "Kemang"}]}"#,
        )]);
        let outlets = client(&mock).outlets("t", 3).await.unwrap();
        assert_eq!(outlets.len(), 1);
        assert_eq!(outlets[0].name, "Kemang");
    }

    #[tokio::test]
    async fn test_channels_unwraps_data_envelope() {
        let mock = MockNetwork::new(vec![MockNetwork::ok(
            r#"{"data": [{"id": 1, "name": "GrabFood", "code": "grab"}]}"#,
        )]);
        let channels = client(&mock).channels("t").await.unwrap();
        assert_eq!(channels.len(), 1);
    }

    #[tokio::test]
    async fn test_non_2xx_surfaces_body_message() {
        let mock = MockNetwork::new(vec![NetworkResponse {
            status_code: 401,
            body: r#"{"message": "Password salah"}"#.to_string(),
        }]);
        let err = client(&mock).brands("t").await.unwrap_err();
        assert_eq!(err.user_message().as_deref(), Some("Password salah"));
    }

    #[tokio::test]
    async fn test_non_2xx_without_message_falls_back() {
        let mock = MockNetwork::new(vec![NetworkResponse {
            status_code: 500,
            body: "<html>oops</html>".to_string(),
        }]);
        let err = client(&mock).brands("t").await.unwrap_err();
        assert_eq!(err.user_message().as_deref(), Some("HTTP 500"));
    }
}
