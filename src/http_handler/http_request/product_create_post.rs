use super::product_create::ProductCreateResponse;
use super::request_common::{HTTPRequestMethod, HTTPRequestType, JSONBodyHTTPRequestType};
use fixed::types::I64F64;

/// Request type for creating a product. The backend assigns the id and
/// the creation timestamp.
#[derive(serde::Serialize, Debug)]
pub(crate) struct ProductCreateRequest {
    pub(crate) name: String,
    pub(crate) description: Option<String>,
    /// Stock-keeping unit, unique per backend.
    pub(crate) sku: String,
    pub(crate) unit_price: I64F64,
    pub(crate) reorder_level: i32,
}

impl JSONBodyHTTPRequestType for ProductCreateRequest {
    type Body = ProductCreateRequest;
    fn body(&self) -> &Self::Body { self }
}

impl HTTPRequestType for ProductCreateRequest {
    type Response = ProductCreateResponse;
    fn endpoint(&self) -> &'static str { "/products" }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Post }
}
