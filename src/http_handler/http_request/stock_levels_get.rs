use super::request_common::{HTTPRequestMethod, HTTPRequestType, NoBodyHTTPRequestType};
use super::stock_levels::StockLevelsResponse;

/// Request type for the /stock endpoint.
#[derive(Debug)]
pub(crate) struct StockLevelsRequest {}

impl NoBodyHTTPRequestType for StockLevelsRequest {}

impl HTTPRequestType for StockLevelsRequest {
    /// Type of the expected response.
    type Response = StockLevelsResponse;
    /// `str` object representing the specific endpoint.
    fn endpoint(&self) -> &'static str { "/stock" }
    /// The corresponding HTTP Request Method.
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
}
