use crate::http_handler::http_client::HTTPClient;
use crate::http_handler::http_handler_common::HTTPError;
use crate::http_handler::http_response::response_common::{HTTPResponseType, ResponseError};
use strum_macros::Display;

/// Parsed payload a request type resolves to on success.
pub(crate) type ParsedResponse<T> =
    <<T as HTTPRequestType>::Response as HTTPResponseType>::ParsedResponseType;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum HTTPRequestMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl From<HTTPRequestMethod> for reqwest::Method {
    fn from(value: HTTPRequestMethod) -> Self {
        match value {
            HTTPRequestMethod::Get => reqwest::Method::GET,
            HTTPRequestMethod::Post => reqwest::Method::POST,
            HTTPRequestMethod::Put => reqwest::Method::PUT,
            HTTPRequestMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

pub(crate) trait HTTPRequestType: Sized {
    type Response: HTTPResponseType;
    fn endpoint(&self) -> &str;
    fn request_method(&self) -> HTTPRequestMethod;
    fn header_params(&self) -> reqwest::header::HeaderMap { reqwest::header::HeaderMap::new() }
    fn query_params(&self) -> Vec<(&'static str, String)> { Vec::new() }

    /// Performs the exchange: one outbound call, one `Result` back.
    /// `Content-Type: application/json` goes out on every request whether
    /// or not a body is present. A transport fault before any status maps
    /// to [`ResponseError::NoConnection`].
    async fn dispatch(
        &self,
        client: &HTTPClient,
        body: Option<String>,
    ) -> Result<ParsedResponse<Self>, HTTPError> {
        let url = format!("{}{}", client.url(), self.endpoint());
        let mut request = client
            .client()
            .request(self.request_method().into(), url)
            .headers(self.header_params())
            .header(reqwest::header::CONTENT_TYPE, "application/json");
        let query = self.query_params();
        if !query.is_empty() {
            request = request.query(&query);
        }
        if let Some(body) = body {
            request = request.body(body);
        }
        let response = request.send().await.map_err(ResponseError::from)?;
        Ok(Self::Response::read_response(response).await?)
    }
}

/// Request types that send an empty body.
pub(crate) trait NoBodyHTTPRequestType: HTTPRequestType {
    async fn send_request(&self, client: &HTTPClient) -> Result<ParsedResponse<Self>, HTTPError> {
        self.dispatch(client, None).await
    }
}

/// Request types whose body is the JSON serialization of [`Self::Body`].
pub(crate) trait JSONBodyHTTPRequestType: HTTPRequestType {
    type Body: serde::Serialize;
    fn body(&self) -> &Self::Body;

    async fn send_request(&self, client: &HTTPClient) -> Result<ParsedResponse<Self>, HTTPError> {
        let body = serde_json::to_string(self.body())
            .map_err(|e| RequestError::NotSerializable { details: e.to_string() })?;
        self.dispatch(client, Some(body)).await
    }
}

#[derive(Debug, Display)]
pub enum RequestError {
    #[strum(to_string = "Request body is not serializable to JSON: {details}")]
    NotSerializable { details: String },
}

impl std::error::Error for RequestError {}
