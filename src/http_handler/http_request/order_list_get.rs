use super::order_list::OrderListResponse;
use super::request_common::{HTTPRequestMethod, HTTPRequestType, NoBodyHTTPRequestType};
use crate::http_handler::http_handler_common::OrderStatus;

/// Request type for the /orders listing endpoint.
#[derive(Debug, Default)]
pub(crate) struct OrderListRequest {
    /// Restricts the listing to one lifecycle state.
    pub(crate) status: Option<OrderStatus>,
}

impl NoBodyHTTPRequestType for OrderListRequest {}

impl HTTPRequestType for OrderListRequest {
    type Response = OrderListResponse;
    fn endpoint(&self) -> &'static str { "/orders" }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }

    fn query_params(&self) -> Vec<(&'static str, String)> {
        match self.status {
            Some(status) => vec![("status", status.to_string())],
            None => Vec::new(),
        }
    }
}
