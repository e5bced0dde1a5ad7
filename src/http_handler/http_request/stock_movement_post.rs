use super::request_common::{HTTPRequestMethod, HTTPRequestType, JSONBodyHTTPRequestType};
use super::stock_movement::StockMovementResponse;
use crate::http_handler::http_handler_common::MovementType;

/// Request type for recording a stock movement against a product.
#[derive(serde::Serialize, Debug)]
pub(crate) struct StockMovementRequest {
    pub(crate) product_id: u32,
    pub(crate) movement_type: MovementType,
    /// Signed quantity; negative values draw stock down.
    pub(crate) quantity: i32,
    /// Order id this movement settles, if any.
    pub(crate) reference_id: Option<u32>,
    pub(crate) notes: Option<String>,
}

impl JSONBodyHTTPRequestType for StockMovementRequest {
    type Body = StockMovementRequest;
    fn body(&self) -> &Self::Body { self }
}

impl HTTPRequestType for StockMovementRequest {
    type Response = StockMovementResponse;
    fn endpoint(&self) -> &'static str { "/stock/movements" }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Post }
}
