use crate::http_handler::http_handler_common::OrderStatus;
use crate::http_handler::http_response::response_common::SerdeJSONBodyHTTPResponseType;
use fixed::types::I64F64;

/// Response type for order placement.
#[derive(serde::Deserialize, Debug)]
pub(crate) struct OrderCreateResponse {
    id: u32,
    status: OrderStatus,
    /// Total as priced by the backend at placement time.
    total_amount: I64F64,
}

impl SerdeJSONBodyHTTPResponseType for OrderCreateResponse {}

impl OrderCreateResponse {
    pub(crate) fn id(&self) -> u32 { self.id }
    pub(crate) fn status(&self) -> OrderStatus { self.status }
    pub(crate) fn total_amount(&self) -> I64F64 { self.total_amount }
}
