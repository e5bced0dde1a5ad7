use super::logout::LogoutResponse;
use super::request_common::{HTTPRequestMethod, HTTPRequestType, NoBodyHTTPRequestType};

/// Request type for the /logout endpoint. Invalidates the session the
/// backend associated with this client.
#[derive(Debug)]
pub(crate) struct LogoutRequest {}

impl NoBodyHTTPRequestType for LogoutRequest {}

impl HTTPRequestType for LogoutRequest {
    type Response = LogoutResponse;
    fn endpoint(&self) -> &'static str { "/logout" }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Post }
}
