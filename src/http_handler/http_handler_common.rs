use super::http_request::request_common::RequestError;
use super::http_response::response_common::ResponseError;
use fixed::types::I64F64;
use strum_macros::Display;

/// Product record as stored by the backend.
#[derive(serde::Deserialize, serde::Serialize, Debug, Clone)]
pub(crate) struct Product {
    pub(crate) id: u32,
    pub(crate) name: String,
    pub(crate) description: Option<String>,
    pub(crate) sku: String,
    pub(crate) unit_price: I64F64,
    pub(crate) reorder_level: i32,
    pub(crate) created_at: chrono::DateTime<chrono::Utc>,
}

/// On-hand stock for one product, joined with the product master data the
/// dashboard needs to render an alert line.
#[derive(serde::Deserialize, Debug, Clone)]
pub(crate) struct StockLevel {
    pub(crate) product_id: u32,
    pub(crate) product_name: String,
    pub(crate) sku: String,
    pub(crate) quantity_available: i32,
    pub(crate) reorder_level: i32,
    pub(crate) last_updated: chrono::DateTime<chrono::Utc>,
}

impl Stocked for StockLevel {
    fn quantity_available(&self) -> i32 { self.quantity_available }
    fn reorder_level(&self) -> i32 { self.reorder_level }
}

#[derive(serde::Deserialize, Debug, Clone)]
pub(crate) struct CustomerOrder {
    pub(crate) id: u32,
    pub(crate) customer_name: String,
    pub(crate) customer_email: String,
    pub(crate) order_date: chrono::DateTime<chrono::Utc>,
    pub(crate) status: OrderStatus,
    pub(crate) total_amount: I64F64,
    pub(crate) items: Vec<OrderItem>,
}

#[derive(serde::Deserialize, Debug, Clone)]
pub(crate) struct OrderItem {
    pub(crate) product_id: u32,
    pub(crate) quantity: i32,
    pub(crate) unit_price: I64F64,
}

#[derive(serde::Deserialize, Debug, Clone)]
pub(crate) struct Supplier {
    pub(crate) id: u32,
    pub(crate) name: String,
    pub(crate) contact_person: Option<String>,
    pub(crate) email: String,
    pub(crate) phone: Option<String>,
    pub(crate) address: Option<String>,
    pub(crate) created_at: chrono::DateTime<chrono::Utc>,
}

/// Lifecycle states of a customer order, in the order the backend walks
/// them. `Cancelled` is reachable from every non-terminal state.
#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, Copy, PartialEq, Eq, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub(crate) enum OrderStatus {
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

/// Reasons a stock quantity changed. `Return` goes over the wire as the
/// literal string `"return"`.
#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, Copy, PartialEq, Eq, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub(crate) enum MovementType {
    Purchase,
    Sale,
    Adjustment,
    Return,
    Waste,
}

/// One line in the dashboard's recent-activity feed.
#[derive(serde::Deserialize, Debug, Clone)]
pub(crate) struct ActivityEntry {
    /// Feed category, e.g. `"ORDER"` or `"STOCK_MOVEMENT"`.
    #[serde(rename = "type")]
    pub(crate) kind: String,
    pub(crate) timestamp: chrono::DateTime<chrono::Utc>,
    pub(crate) description: String,
}

/// Anything with an on-hand quantity and a reorder threshold.
pub(crate) trait Stocked {
    fn quantity_available(&self) -> i32;
    fn reorder_level(&self) -> i32;

    fn is_out_of_stock(&self) -> bool { self.quantity_available() <= 0 }

    fn is_low_stock(&self) -> bool {
        self.quantity_available() > 0 && self.quantity_available() <= self.reorder_level()
    }

    fn needs_reorder(&self) -> bool { self.is_out_of_stock() || self.is_low_stock() }
}

/// Umbrella error for one request round-trip. Displays as the underlying
/// failure so callers can surface it unwrapped.
#[derive(Debug, Display)]
pub enum HTTPError {
    #[strum(to_string = "{source}")]
    Request { source: RequestError },
    #[strum(to_string = "{source}")]
    Response { source: ResponseError },
}

impl std::error::Error for HTTPError {}

impl From<RequestError> for HTTPError {
    fn from(source: RequestError) -> Self { HTTPError::Request { source } }
}

impl From<ResponseError> for HTTPError {
    fn from(source: ResponseError) -> Self { HTTPError::Response { source } }
}
