#![allow(dead_code, clippy::similar_names)]
#![warn(clippy::shadow_reuse, clippy::shadow_same, clippy::builtin_type_shadow)]
mod console;
mod http_handler;
mod logger;

use crate::console::{build_widgets, render_widgets};
use crate::http_handler::http_client::HTTPClient;
use crate::http_handler::http_request::dashboard_get::DashboardRequest;
use crate::http_handler::http_request::login_post::LoginRequest;
use crate::http_handler::http_request::request_common::{
    JSONBodyHTTPRequestType, NoBodyHTTPRequestType,
};
use std::env;

const DEFAULT_BASE_URL: &str = "http://localhost:8080/scm/api";

#[tokio::main(flavor = "multi_thread", worker_threads = 4)]
async fn main() {
    let base_url_var = env::var("SCM_BASE_URL");
    let base_url = base_url_var.as_ref().map_or(DEFAULT_BASE_URL, |v| v.as_str());
    info!("Supply Chain Management console initialized against {base_url}");

    let client = setup(base_url);

    if let (Ok(username), Ok(password)) = (env::var("SCM_USERNAME"), env::var("SCM_PASSWORD")) {
        login(&client, username, password).await;
    }

    match (DashboardRequest::default()).send_request(&client).await {
        Ok(dashboard) => {
            let widgets = build_widgets(&dashboard);
            render_widgets(&widgets);
        }
        Err(err) => fatal!("Could not fetch dashboard: {err}"),
    }
}

/// One-time setup, the console counterpart of the page-load hook. Every
/// request issued by this process goes through the one client built here.
fn setup(base_url: &str) -> HTTPClient { HTTPClient::new(base_url) }

async fn login(client: &HTTPClient, username: String, password: String) {
    log!("Form submitted: login");
    let request = LoginRequest { username, password };
    match request.send_request(client).await {
        Ok(principal) => {
            info!("Logged in as {} ({})", principal.username(), principal.full_name());
            event!("session roles: {:?}", principal.roles());
            if !principal.has_permission("dashboard:view") {
                warn!("Account lacks the dashboard:view permission");
            }
        }
        Err(err) => error!("Login failed: {err}"),
    }
}
