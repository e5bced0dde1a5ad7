use strum_macros::Display;

pub(crate) trait JSONBodyHTTPResponseType: HTTPResponseType {
    async fn parse_json_body(
        response: reqwest::Response,
    ) -> Result<Self::ParsedResponseType, ResponseError>
    where Self::ParsedResponseType: for<'de> serde::Deserialize<'de> {
        Ok(response.json::<Self::ParsedResponseType>().await?)
    }
}

pub(crate) trait SerdeJSONBodyHTTPResponseType {}

/// Untyped calls parse straight into a JSON value.
impl SerdeJSONBodyHTTPResponseType for serde_json::Value {}

impl<T> JSONBodyHTTPResponseType for T
where
    T: SerdeJSONBodyHTTPResponseType,
    for<'de> T: serde::Deserialize<'de>,
{
}

impl<T> HTTPResponseType for T
where
    T: SerdeJSONBodyHTTPResponseType,
    for<'de> T: serde::Deserialize<'de>,
{
    type ParsedResponseType = T;

    async fn read_response(
        response: reqwest::Response,
    ) -> Result<Self::ParsedResponseType, ResponseError> {
        let resp = Self::unwrap_return_code(response).await?;
        Self::parse_json_body(resp).await
    }
}

pub(crate) trait HTTPResponseType {
    type ParsedResponseType;
    async fn read_response(
        response: reqwest::Response,
    ) -> Result<Self::ParsedResponseType, ResponseError>;

    /// Splits completions on the success range [200, 300). Everything
    /// outside it keeps the numeric code in the error.
    async fn unwrap_return_code(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, ResponseError> {
        if response.status().is_success() {
            Ok(response)
        } else {
            Err(ResponseError::Status { code: response.status().as_u16() })
        }
    }
}

#[derive(Debug, Display)]
pub enum ResponseError {
    /// The exchange completed with a status outside the success range.
    #[strum(to_string = "Request failed with status {code}")]
    Status { code: u16 },
    /// Transport-level fault before any status was received.
    #[strum(to_string = "Network error")]
    NoConnection,
    /// A success status whose body was not parseable as JSON.
    #[strum(to_string = "Malformed JSON in response body: {details}")]
    Decode { details: String },
    #[strum(to_string = "Unknown transfer error")]
    Unknown,
}

impl std::error::Error for ResponseError {}

impl From<reqwest::Error> for ResponseError {
    fn from(value: reqwest::Error) -> Self {
        if value.is_decode() {
            ResponseError::Decode { details: value.to_string() }
        } else if value.is_builder() {
            ResponseError::Unknown
        } else if value.is_connect() || value.is_timeout() || value.is_request() {
            ResponseError::NoConnection
        } else {
            ResponseError::Unknown
        }
    }
}
