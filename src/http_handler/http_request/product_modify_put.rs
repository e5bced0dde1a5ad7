use super::product_modify::ProductModifyResponse;
use super::request_common::{HTTPRequestMethod, HTTPRequestType, JSONBodyHTTPRequestType};
use crate::http_handler::http_handler_common::Product;

/// Request type for replacing a product record. The full record goes out;
/// the backend matches on its id.
#[derive(Debug)]
pub(crate) struct ProductModifyRequest {
    pub(crate) product: Product,
}

impl JSONBodyHTTPRequestType for ProductModifyRequest {
    type Body = Product;
    fn body(&self) -> &Self::Body { &self.product }
}

impl HTTPRequestType for ProductModifyRequest {
    type Response = ProductModifyResponse;
    fn endpoint(&self) -> &'static str { "/products" }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Put }
}
