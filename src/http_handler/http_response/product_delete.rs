use crate::http_handler::http_response::response_common::{
    HTTPResponseType, JSONBodyHTTPResponseType, ResponseError,
};

/// Response type for product deletion.
pub(crate) struct ProductDeleteResponse {}

impl JSONBodyHTTPResponseType for ProductDeleteResponse {}

impl HTTPResponseType for ProductDeleteResponse {
    /// The body is a bare JSON string confirming the deletion.
    type ParsedResponseType = String;

    async fn read_response(
        response: reqwest::Response,
    ) -> Result<Self::ParsedResponseType, ResponseError> {
        let resp = Self::unwrap_return_code(response).await?;
        Self::parse_json_body(resp).await
    }
}
