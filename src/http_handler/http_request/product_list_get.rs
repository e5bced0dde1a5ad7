use super::product_list::ProductListResponse;
use super::request_common::{HTTPRequestMethod, HTTPRequestType, NoBodyHTTPRequestType};

/// Request type for the /products listing endpoint.
#[derive(Debug, Default)]
pub(crate) struct ProductListRequest {
    /// Optional name filter, matched as a substring by the backend.
    pub(crate) search: Option<String>,
}

impl NoBodyHTTPRequestType for ProductListRequest {}

impl HTTPRequestType for ProductListRequest {
    type Response = ProductListResponse;
    fn endpoint(&self) -> &'static str { "/products" }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }

    fn query_params(&self) -> Vec<(&'static str, String)> {
        match &self.search {
            Some(term) => vec![("search", term.clone())],
            None => Vec::new(),
        }
    }
}
