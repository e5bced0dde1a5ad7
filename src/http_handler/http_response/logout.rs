use crate::http_handler::http_response::response_common::{
    HTTPResponseType, JSONBodyHTTPResponseType, ResponseError,
};

/// Response type for the /logout endpoint.
pub(crate) struct LogoutResponse {}

impl JSONBodyHTTPResponseType for LogoutResponse {}

impl HTTPResponseType for LogoutResponse {
    /// The body is a bare JSON string acknowledging the logout.
    type ParsedResponseType = String;

    async fn read_response(
        response: reqwest::Response,
    ) -> Result<Self::ParsedResponseType, ResponseError> {
        let resp = Self::unwrap_return_code(response).await?;
        Self::parse_json_body(resp).await
    }
}
