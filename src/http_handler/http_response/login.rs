use crate::http_handler::http_response::response_common::SerdeJSONBodyHTTPResponseType;

/// Response type for the /login endpoint, mirroring the session principal
/// the backend keeps for this client.
#[derive(serde::Deserialize, Debug)]
pub(crate) struct LoginResponse {
    username: String,
    full_name: String,
    roles: Vec<String>,
    permissions: Vec<String>,
}

impl SerdeJSONBodyHTTPResponseType for LoginResponse {}

impl LoginResponse {
    pub(crate) fn username(&self) -> &str { self.username.as_str() }
    pub(crate) fn full_name(&self) -> &str { self.full_name.as_str() }
    pub(crate) fn roles(&self) -> &[String] { &self.roles }

    /// Permission strings are `"<domain>:<action>"`, e.g. `"dashboard:view"`.
    pub(crate) fn has_permission(&self, permission: &str) -> bool {
        self.permissions.iter().any(|p| p == permission)
    }
}
