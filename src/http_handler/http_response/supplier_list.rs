use crate::http_handler::http_handler_common::Supplier;
use crate::http_handler::http_response::response_common::SerdeJSONBodyHTTPResponseType;

#[derive(serde::Deserialize, Debug)]
pub(crate) struct SupplierListResponse {
    suppliers: Vec<Supplier>,
}

impl SerdeJSONBodyHTTPResponseType for SupplierListResponse {}

impl SupplierListResponse {
    pub(crate) fn suppliers(&self) -> &[Supplier] { &self.suppliers }
}
