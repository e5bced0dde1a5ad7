use crate::http_handler::http_handler_common::Product;
use crate::http_handler::http_response::response_common::SerdeJSONBodyHTTPResponseType;

/// Response type for product modification: the record as stored after the
/// update.
#[derive(serde::Deserialize, Debug)]
pub(crate) struct ProductModifyResponse {
    product: Product,
}

impl SerdeJSONBodyHTTPResponseType for ProductModifyResponse {}

impl ProductModifyResponse {
    pub(crate) fn product(&self) -> &Product { &self.product }
}
