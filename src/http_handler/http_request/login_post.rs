use super::login::LoginResponse;
use super::request_common::{HTTPRequestMethod, HTTPRequestType, JSONBodyHTTPRequestType};

/// Request type for the /login endpoint.
#[derive(serde::Serialize, Debug)]
pub(crate) struct LoginRequest {
    pub(crate) username: String,
    pub(crate) password: String,
}

impl JSONBodyHTTPRequestType for LoginRequest {
    /// The type of the json body.
    type Body = LoginRequest;
    /// Returns the serializable object.
    fn body(&self) -> &Self::Body { self }
}

impl HTTPRequestType for LoginRequest {
    /// Type of the expected response.
    type Response = LoginResponse;
    /// `str` object representing the specific endpoint.
    fn endpoint(&self) -> &'static str { "/login" }
    /// The corresponding HTTP Request Method.
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Post }
}
