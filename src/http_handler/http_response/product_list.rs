use crate::http_handler::http_handler_common::Product;
use crate::http_handler::http_response::response_common::SerdeJSONBodyHTTPResponseType;

#[derive(serde::Deserialize, Debug)]
pub(crate) struct ProductListResponse {
    products: Vec<Product>,
}

impl SerdeJSONBodyHTTPResponseType for ProductListResponse {}

impl ProductListResponse {
    pub(crate) fn products(&self) -> &[Product] { &self.products }
}
