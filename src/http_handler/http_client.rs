/// A simple wrapper around `reqwest::Client` used to manage HTTP requests
/// with a preconfigured base URL and default settings.
///
/// This client is used for making REST API calls to the SCM backend.
/// It enforces no timeout of its own; callers that need one construct the
/// client through [`HTTPClient::with_timeout`] and own that policy.
#[derive(Debug)]
pub(crate) struct HTTPClient {
    /// The underlying `reqwest::Client` used to perform HTTP requests.
    client: reqwest::Client,
    /// Base URL for the API, prepended to all endpoint paths.
    base_url: String,
}

impl HTTPClient {
    /// Constructs a new `HTTPClient` with the given base URL.
    ///
    /// # Arguments
    /// * `base_url` – The root URL for all HTTP requests
    ///   (e.g., `"http://localhost:8080/scm/api"`).
    ///
    /// # Returns
    /// A configured `HTTPClient` instance.
    pub(crate) fn new(base_url: &str) -> HTTPClient {
        HTTPClient {
            client: reqwest::Client::new(),
            base_url: String::from(base_url),
        }
    }

    /// Constructs a new `HTTPClient` whose requests are cut off after
    /// `timeout`. A completion past the deadline surfaces as a
    /// network-level failure, exactly as if the connection had dropped.
    pub(crate) fn with_timeout(base_url: &str, timeout: std::time::Duration) -> HTTPClient {
        HTTPClient {
            client: reqwest::Client::builder().timeout(timeout).build().unwrap(),
            base_url: String::from(base_url),
        }
    }

    /// Returns a reference to the internal `reqwest::Client`.
    pub(super) fn client(&self) -> &reqwest::Client { &self.client }
    /// Returns the base URL that the client was initialized with.
    pub(crate) fn url(&self) -> &str { self.base_url.as_str() }
}
