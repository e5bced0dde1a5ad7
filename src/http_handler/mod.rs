pub use chrono;
pub use reqwest;
pub use serde;

pub mod http_client;
pub(crate) mod http_handler_common;
pub mod http_request;
pub mod http_response;

#[cfg(test)]
mod tests;
