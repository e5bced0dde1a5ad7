use crate::http_handler::http_response::response_common::SerdeJSONBodyHTTPResponseType;

/// Response type for a recorded stock movement.
#[derive(serde::Deserialize, Debug)]
pub(crate) struct StockMovementResponse {
    movement_id: u32,
    product_id: u32,
    /// On-hand quantity after the movement was applied.
    quantity_available: i32,
    movement_date: chrono::DateTime<chrono::Utc>,
}

impl SerdeJSONBodyHTTPResponseType for StockMovementResponse {}

impl StockMovementResponse {
    pub(crate) fn movement_id(&self) -> u32 { self.movement_id }
    pub(crate) fn product_id(&self) -> u32 { self.product_id }
    pub(crate) fn quantity_available(&self) -> i32 { self.quantity_available }
    pub(crate) fn movement_date(&self) -> chrono::DateTime<chrono::Utc> { self.movement_date }
}
