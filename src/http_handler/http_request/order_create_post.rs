use super::order_create::OrderCreateResponse;
use super::request_common::{HTTPRequestMethod, HTTPRequestType, JSONBodyHTTPRequestType};

/// Request type for placing a customer order. Totals are computed by the
/// backend from current unit prices.
#[derive(serde::Serialize, Debug)]
pub(crate) struct OrderCreateRequest {
    pub(crate) customer_name: String,
    pub(crate) customer_email: String,
    pub(crate) items: Vec<OrderItemDraft>,
}

#[derive(serde::Serialize, Debug)]
pub(crate) struct OrderItemDraft {
    pub(crate) product_id: u32,
    pub(crate) quantity: i32,
}

impl JSONBodyHTTPRequestType for OrderCreateRequest {
    type Body = OrderCreateRequest;
    fn body(&self) -> &Self::Body { self }
}

impl HTTPRequestType for OrderCreateRequest {
    type Response = OrderCreateResponse;
    fn endpoint(&self) -> &'static str { "/orders" }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Post }
}
