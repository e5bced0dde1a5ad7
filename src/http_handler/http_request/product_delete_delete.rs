use super::product_delete::ProductDeleteResponse;
use super::request_common::{HTTPRequestMethod, HTTPRequestType, NoBodyHTTPRequestType};

#[derive(Debug)]
pub(crate) struct ProductDeleteRequest {
    pub(crate) id: u32,
}

impl NoBodyHTTPRequestType for ProductDeleteRequest {}

impl HTTPRequestType for ProductDeleteRequest {
    type Response = ProductDeleteResponse;
    fn endpoint(&self) -> &'static str { "/products" }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Delete }

    fn header_params(&self) -> reqwest::header::HeaderMap {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.append("id", self.id.into());
        headers
    }
}
