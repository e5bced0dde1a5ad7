use crate::http_handler::http_handler_common::CustomerOrder;
use crate::http_handler::http_response::response_common::SerdeJSONBodyHTTPResponseType;

#[derive(serde::Deserialize, Debug)]
pub(crate) struct OrderListResponse {
    orders: Vec<CustomerOrder>,
}

impl SerdeJSONBodyHTTPResponseType for OrderListResponse {}

impl OrderListResponse {
    pub(crate) fn orders(&self) -> &[CustomerOrder] { &self.orders }
}
