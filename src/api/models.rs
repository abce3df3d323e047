// src/api/models.rs - Wire models for the REST backend

//! The backend is loose about scalar types: ids arrive as numbers or
//! strings depending on the endpoint, prices as numbers or formatted
//! strings, and list payloads either bare or wrapped in `{rows}` /
//! `{data}` envelopes. The deserializers here absorb all of that so the
//! rest of the application sees one shape.

use serde::{Deserialize, Deserializer, Serialize};

use crate::table::{SortValue, TableRow};
use crate::types::EntityId;

/// Accept an id encoded as either a JSON number or a numeric string.
fn flexible_id<'de, D>(deserializer: D) -> Result<EntityId, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(i64),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(n) => Ok(n),
        Raw::Text(s) => s.parse().map_err(serde::de::Error::custom),
    }
}

fn flexible_id_opt<'de, D>(deserializer: D) -> Result<Option<EntityId>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    struct Wrapper(#[serde(deserialize_with = "flexible_id")] EntityId);

    Option::<Wrapper>::deserialize(deserializer).map(|opt| opt.map(|w| w.0))
}

/// The tenant-scoping entity. All data fetches are implicitly filtered to
/// the active brand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brand {
    #[serde(deserialize_with = "flexible_id")]
    pub id: EntityId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppUser {
    #[serde(deserialize_with = "flexible_id")]
    pub id: EntityId,
    pub username: String,
    #[serde(default)]
    pub role: String,
}

impl AppUser {
    pub fn is_superadmin(&self) -> bool {
        self.role == "superadmin"
    }
}

/// A delivery platform an item or review is associated with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelRef {
    #[serde(deserialize_with = "flexible_id")]
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub code: Option<String>,
}

/// A storefront location under a brand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutletRef {
    #[serde(deserialize_with = "flexible_id")]
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub status: Option<i64>,
}

/// Price as the backend sends it: a number, or a preformatted string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Price {
    Number(f64),
    Text(String),
}

impl Price {
    /// Numeric value for sorting; non-numeric strings count as zero.
    pub fn numeric(&self) -> f64 {
        match self {
            Self::Number(n) => *n,
            Self::Text(s) => s.parse().unwrap_or(0.0),
        }
    }

    /// IDR display form; non-numeric strings render verbatim.
    pub fn display_idr(&self) -> String {
        match self {
            Self::Number(n) => format_idr(*n),
            Self::Text(s) => match s.parse::<f64>() {
                Ok(n) => format_idr(n),
                Err(_) => s.clone(),
            },
        }
    }

    /// CSV form: the plain number, or empty when the string is not numeric.
    pub fn csv_value(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(s) => s.parse().ok(),
        }
    }
}

/// `Rp 25.000` style formatting, no decimals, dot thousand separators.
fn format_idr(value: f64) -> String {
    let whole = value.round() as i64;
    let negative = whole < 0;
    let digits = whole.abs().to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    if negative {
        format!("-Rp {}", grouped)
    } else {
        format!("Rp {}", grouped)
    }
}

/// An item synced from a delivery channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRow {
    #[serde(deserialize_with = "flexible_id")]
    pub id: EntityId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub price: Option<Price>,
    /// 1 = active, 0 = inactive
    #[serde(default)]
    pub status: i64,
    #[serde(default, deserialize_with = "flexible_id_opt")]
    pub brand_id: Option<EntityId>,
    #[serde(default, deserialize_with = "flexible_id_opt")]
    pub outlet_id: Option<EntityId>,
    #[serde(default)]
    pub outlet: Option<OutletRef>,
    #[serde(default)]
    pub channel: Option<ChannelRef>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl TableRow for ProductRow {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str()];
        if let Some(outlet) = &self.outlet {
            fields.push(outlet.name.as_str());
        }
        if let Some(channel) = &self.channel {
            fields.push(channel.name.as_str());
        }
        fields
    }

    fn event_timestamp(&self) -> Option<&str> {
        self.updated_at.as_deref()
    }

    fn is_active(&self) -> bool {
        self.status == 1
    }

    fn channel_name(&self) -> Option<&str> {
        self.channel.as_ref().map(|c| c.name.as_str())
    }

    fn outlet_name(&self) -> Option<&str> {
        self.outlet.as_ref().map(|o| o.name.as_str())
    }
}

/// A customer review pulled from a channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewRow {
    #[serde(deserialize_with = "flexible_id")]
    pub id: EntityId,
    #[serde(default, deserialize_with = "flexible_id_opt")]
    pub outlet_id: Option<EntityId>,
    #[serde(default, deserialize_with = "flexible_id_opt")]
    pub channel_id: Option<EntityId>,
    #[serde(default)]
    pub rating: i64,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub ordered_product: Option<String>,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub outlet: Option<OutletRef>,
    #[serde(default)]
    pub channel: Option<ChannelRef>,
}

impl TableRow for ReviewRow {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.message.as_str()];
        if let Some(product) = &self.ordered_product {
            fields.push(product);
        }
        if let Some(customer) = &self.customer_name {
            fields.push(customer);
        }
        fields
    }

    fn event_timestamp(&self) -> Option<&str> {
        self.created_at.as_deref()
    }

    fn is_active(&self) -> bool {
        // reviews carry no status; treat high ratings as the positive bucket
        self.rating >= 4
    }

    fn channel_name(&self) -> Option<&str> {
        self.channel.as_ref().map(|c| c.name.as_str())
    }

    fn outlet_name(&self) -> Option<&str> {
        self.outlet.as_ref().map(|o| o.name.as_str())
    }
}

/// List payloads arrive bare or wrapped in `{rows: [...]}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RowsPayload<T> {
    Bare(Vec<T>),
    Wrapped { rows: Vec<T> },
}

impl<T> RowsPayload<T> {
    pub fn into_rows(self) -> Vec<T> {
        match self {
            Self::Bare(rows) => rows,
            Self::Wrapped { rows } => rows,
        }
    }
}

/// `GET /channels` wraps its list in `{data: [...]}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataPayload<T> {
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<AppUser>,
    #[serde(default)]
    pub brands: Vec<Brand>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActiveBrandResponse {
    #[serde(default)]
    pub active: Option<Brand>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectBrandResponse {
    #[serde(default)]
    pub selected: Option<Brand>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    #[serde(deserialize_with = "flexible_id")]
    pub id: EntityId,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyResponse {
    pub company: Company,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
    pub password: String,
    pub role: String,
    pub company_id: Option<EntityId>,
}

/// Per-channel block on the dashboard summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelSummary {
    pub name: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub total: i64,
    #[serde(default)]
    pub open: i64,
    #[serde(default)]
    pub close: i64,
    #[serde(default)]
    pub item_active: i64,
    #[serde(default)]
    pub item_inactive: i64,
}

/// One point of the rating-history line series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingPoint {
    pub name: String,
    #[serde(default)]
    pub gofood: f64,
    #[serde(default)]
    pub grab: f64,
    #[serde(default)]
    pub shopee: f64,
}

/// One slice of the outlet-status pie series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusSlice {
    pub name: String,
    #[serde(default)]
    pub value: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    #[serde(default)]
    pub channels: Vec<ChannelSummary>,
    #[serde(default)]
    pub rating_history: Vec<RatingPoint>,
    #[serde(default)]
    pub outlet_status: Vec<StatusSlice>,
    #[serde(default)]
    pub open_outlets: Vec<OutletRef>,
    #[serde(default)]
    pub closed_outlets: Vec<OutletRef>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brand_id_accepts_string_and_number() {
        let from_number: Brand = serde_json::from_str(r#"{"id": 3, "name": "Crisbar"}"#).unwrap();
        let from_string: Brand = serde_json::from_str(r#"{"id": "3", "name": "Crisbar"}"#).unwrap();
        assert_eq!(from_number, from_string);
    }

    #[test]
    fn test_product_row_tolerates_sparse_payload() {
        let row: ProductRow = serde_json::from_str(r#"{"id": 1}"#).unwrap();
        assert_eq!(row.name, "");
        assert!(row.price.is_none());
        assert!(row.outlet.is_none());
        assert!(!row.is_active());
    }

    #[test]
    fn test_product_row_full_payload() {
        let json = r#"{
            "id": 10,
            "name": "Ayam Geprek",
            "price": "25000",
            "status": 1,
            "brandId": 3,
            "outletId": 7,
            "outlet": {"id": 7, "name": "Kemang", "status": 1},
            "channel": {"id": 1, "name": "GrabFood", "code": "grab"},
            "updatedAt": "2025-03-14T03:30:45Z"
        }"#;
        let row: ProductRow = serde_json::from_str(json).unwrap();
        assert!(row.is_active());
        assert_eq!(row.channel_name(), Some("GrabFood"));
        assert_eq!(row.outlet_name(), Some("Kemang"));
        assert_eq!(row.price.as_ref().unwrap().numeric(), 25000.0);
        assert_eq!(
            row.search_fields(),
            vec!["Ayam Geprek", "Kemang", "GrabFood"]
        );
    }

    #[test]
    fn test_price_display() {
        assert_eq!(Price::Number(25000.0).display_idr(), "Rp 25.000");
        assert_eq!(Price::Number(1250000.0).display_idr(), "Rp 1.250.000");
        assert_eq!(Price::Text("gratis".to_string()).display_idr(), "gratis");
        assert_eq!(Price::Text("gratis".to_string()).numeric(), 0.0);
    }

    #[test]
    fn test_rows_payload_bare_and_wrapped() {
        let bare: RowsPayload<OutletRef> =
            serde_json::from_str(r#"[{"id": 1, "name": "Kemang"}]"#).unwrap();
        let wrapped: RowsPayload<OutletRef> =
            serde_json::from_str(r#"{"rows": [{"id": 1, "name": "Kemang"}]}"#).unwrap();
        assert_eq!(bare.into_rows().len(), 1);
        assert_eq!(wrapped.into_rows().len(), 1);
    }

    #[test]
    fn test_login_response_without_brands() {
        let resp: LoginResponse =
            serde_json::from_str(r#"{"token": "abc", "user": {"id": 1, "username": "admin", "role": "superadmin"}}"#)
                .unwrap();
        assert_eq!(resp.token.as_deref(), Some("abc"));
        assert!(resp.brands.is_empty());
        assert!(resp.user.unwrap().is_superadmin());
    }

    #[test]
    fn test_dashboard_summary_defaults() {
        let summary: DashboardSummary = serde_json::from_str("{}").unwrap();
        assert!(summary.channels.is_empty());
        assert!(summary.rating_history.is_empty());
    }

    #[test]
    fn test_review_row_camel_case() {
        let json = r#"{
            "id": 5,
            "outletId": 7,
            "channelId": 2,
            "rating": 5,
            "message": "Enak banget",
            "createdAt": "2025-03-14T03:30:45Z",
            "orderedProduct": "Nasi Uduk",
            "customerName": "Budi",
            "outlet": {"id": 7, "name": "Kemang"},
            "channel": {"id": 2, "name": "GoFood"}
        }"#;
        let row: ReviewRow = serde_json::from_str(json).unwrap();
        assert_eq!(row.rating, 5);
        assert_eq!(
            row.search_fields(),
            vec!["Enak banget", "Nasi Uduk", "Budi"]
        );
        assert_eq!(row.event_timestamp(), Some("2025-03-14T03:30:45Z"));
    }
}
