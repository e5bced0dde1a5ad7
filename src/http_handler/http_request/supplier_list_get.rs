use super::request_common::{HTTPRequestMethod, HTTPRequestType, NoBodyHTTPRequestType};
use super::supplier_list::SupplierListResponse;

/// Request type for the /suppliers endpoint.
#[derive(Debug)]
pub(crate) struct SupplierListRequest {}

impl NoBodyHTTPRequestType for SupplierListRequest {}

impl HTTPRequestType for SupplierListRequest {
    type Response = SupplierListResponse;
    fn endpoint(&self) -> &'static str { "/suppliers" }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
}
