use crate::http_handler::http_handler_common::Product;
use crate::http_handler::http_response::response_common::SerdeJSONBodyHTTPResponseType;

/// Response type for product creation: the stored record, ids assigned.
#[derive(serde::Deserialize, Debug)]
pub(crate) struct ProductCreateResponse {
    product: Product,
}

impl SerdeJSONBodyHTTPResponseType for ProductCreateResponse {}

impl ProductCreateResponse {
    pub(crate) fn product(&self) -> &Product { &self.product }
}
