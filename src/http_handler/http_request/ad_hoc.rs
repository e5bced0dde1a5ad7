use super::request_common::{HTTPRequestMethod, HTTPRequestType, RequestError};
use crate::http_handler::http_client::HTTPClient;
use crate::http_handler::http_handler_common::HTTPError;

/// Untyped JSON exchange against an arbitrary endpoint, for one-off calls
/// whose shape is not worth a dedicated request type.
#[derive(Debug)]
pub(crate) struct AdHocRequest {
    pub(crate) endpoint: String,
    pub(crate) method: HTTPRequestMethod,
    pub(crate) payload: Option<serde_json::Value>,
}

impl HTTPRequestType for AdHocRequest {
    type Response = serde_json::Value;
    fn endpoint(&self) -> &str { &self.endpoint }
    fn request_method(&self) -> HTTPRequestMethod { self.method }
}

impl AdHocRequest {
    /// An absent payload sends an empty body, not JSON `null`.
    pub(crate) async fn send_request(
        &self,
        client: &HTTPClient,
    ) -> Result<serde_json::Value, HTTPError> {
        let body = match &self.payload {
            Some(value) => Some(
                serde_json::to_string(value)
                    .map_err(|e| RequestError::NotSerializable { details: e.to_string() })?,
            ),
            None => None,
        };
        self.dispatch(client, body).await
    }
}
