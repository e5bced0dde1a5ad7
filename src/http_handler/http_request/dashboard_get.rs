use super::dashboard::DashboardResponse;
use super::request_common::{HTTPRequestMethod, HTTPRequestType, NoBodyHTTPRequestType};
use chrono::{DateTime, Utc};

/// Request type for the /dashboard endpoint.
#[derive(Debug, Default)]
pub struct DashboardRequest {
    /// Start of the reporting window; the backend defaults to 30 days back.
    pub(crate) start_date: Option<DateTime<Utc>>,
    /// End of the reporting window; the backend defaults to now.
    pub(crate) end_date: Option<DateTime<Utc>>,
}

impl NoBodyHTTPRequestType for DashboardRequest {}

impl HTTPRequestType for DashboardRequest {
    /// Type of the expected response.
    type Response = DashboardResponse;
    /// `str` object representing the specific endpoint.
    fn endpoint(&self) -> &'static str { "/dashboard" }
    /// The corresponding HTTP Request Method.
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }

    fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(start) = self.start_date {
            params.push(("startDate", start.to_rfc3339()));
        }
        if let Some(end) = self.end_date {
            params.push(("endDate", end.to_rfc3339()));
        }
        params
    }
}
