use super::http_client::HTTPClient;
use super::http_handler_common::{
    HTTPError, MovementType, OrderStatus, Product, StockLevel, Stocked,
};
use super::http_request::ad_hoc::AdHocRequest;
use super::http_request::dashboard_get::DashboardRequest;
use super::http_request::login_post::LoginRequest;
use super::http_request::logout_post::LogoutRequest;
use super::http_request::order_create_post::{OrderCreateRequest, OrderItemDraft};
use super::http_request::order_list_get::OrderListRequest;
use super::http_request::product_create_post::ProductCreateRequest;
use super::http_request::product_delete_delete::ProductDeleteRequest;
use super::http_request::product_list_get::ProductListRequest;
use super::http_request::product_modify_put::ProductModifyRequest;
use super::http_request::request_common::{
    HTTPRequestMethod, JSONBodyHTTPRequestType, NoBodyHTTPRequestType,
};
use super::http_request::stock_levels_get::StockLevelsRequest;
use super::http_request::stock_movement_post::StockMovementRequest;
use super::http_request::supplier_list_get::SupplierListRequest;
use super::http_response::response_common::ResponseError;
use bytes::Bytes;
use chrono::{TimeZone, Utc};
use fixed::types::I64F64;
use http_body_util::{BodyExt, Full};
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use serde_json::json;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

/// What the mock backend saw for the request it served.
#[derive(Debug, Clone)]
struct RecordedRequest {
    method: String,
    path: String,
    headers: Vec<(String, String)>,
    body: String,
}

impl RecordedRequest {
    fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(header_name, _)| header_name == name)
            .map(|(_, value)| value.as_str())
    }
}

type Recorded = Arc<Mutex<Option<RecordedRequest>>>;

/// Binds a backend on a random local port that answers every request with
/// the given status and body, recording what it received.
async fn spawn_backend(status: u16, body: &'static str) -> (String, Recorded) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let recorded: Recorded = Arc::new(Mutex::new(None));
    let recorded_accept = Arc::clone(&recorded);
    tokio::spawn(async move {
        loop {
            let Ok((stream, _)) = listener.accept().await else {
                return;
            };
            let io = TokioIo::new(stream);
            let recorded_conn = Arc::clone(&recorded_accept);
            tokio::spawn(async move {
                let service = service_fn(move |req: hyper::Request<hyper::body::Incoming>| {
                    let recorded_req = Arc::clone(&recorded_conn);
                    async move {
                        let method = req.method().to_string();
                        let path = req
                            .uri()
                            .path_and_query()
                            .map_or_else(|| req.uri().path().to_string(), ToString::to_string);
                        let headers = req
                            .headers()
                            .iter()
                            .map(|(name, value)| {
                                (name.to_string(), value.to_str().unwrap_or("").to_string())
                            })
                            .collect();
                        let received = req.into_body().collect().await.unwrap().to_bytes();
                        *recorded_req.lock().unwrap() = Some(RecordedRequest {
                            method,
                            path,
                            headers,
                            body: String::from_utf8_lossy(&received).to_string(),
                        });
                        Ok::<_, hyper::Error>(
                            hyper::Response::builder()
                                .status(status)
                                .header(hyper::header::CONTENT_TYPE, "application/json")
                                .body(Full::new(Bytes::from_static(body.as_bytes())))
                                .unwrap(),
                        )
                    }
                });
                let _ = http1::Builder::new().serve_connection(io, service).await;
            });
        }
    });
    (format!("http://{addr}"), recorded)
}

fn recorded_request(recorded: &Recorded) -> RecordedRequest {
    recorded.lock().unwrap().take().expect("backend saw no request")
}

const DASHBOARD_BODY: &str = r#"{
    "sales": {"total_sales": 12850.25, "order_count": 42, "average_order_value": 305.25},
    "inventory": {"total_products": 120, "low_stock_count": 7, "out_of_stock_count": 2, "inventory_value": 99500.5},
    "suppliers": {"total_suppliers": 12, "active_suppliers": 9, "average_lead_time": 4.5},
    "top_products": [{"product_id": 3, "name": "Pallet jack", "units_sold": 18}],
    "recent_activity": [{"type": "ORDER", "timestamp": "2026-08-04T16:20:00Z", "description": "Order #1043 placed"}],
    "stock_alerts": [{"product_id": 5, "product_name": "Stretch wrap", "sku": "WRAP-500", "quantity_available": 0, "reorder_level": 10, "last_updated": "2026-08-04T12:00:00Z"}]
}"#;

#[tokio::test]
async fn get_without_payload_sends_empty_body_and_json_content_type() {
    let (url, recorded) = spawn_backend(200, r#"{"items":[1,2,3]}"#).await;
    let client = HTTPClient::new(&url);
    let request = AdHocRequest {
        endpoint: String::from("/api/items"),
        method: HTTPRequestMethod::Get,
        payload: None,
    };

    let parsed = request.send_request(&client).await.unwrap();

    assert_eq!(parsed, json!({"items": [1, 2, 3]}));
    let seen = recorded_request(&recorded);
    assert_eq!(seen.method, "GET");
    assert_eq!(seen.path, "/api/items");
    assert_eq!(seen.header("content-type"), Some("application/json"));
    assert!(seen.body.is_empty());
}

#[tokio::test]
async fn payload_goes_out_as_its_exact_json_serialization() {
    let (url, recorded) = spawn_backend(500, "").await;
    let client = HTTPClient::new(&url);
    let request = AdHocRequest {
        endpoint: String::from("/api/items"),
        method: HTTPRequestMethod::Post,
        payload: Some(json!({"name": "widget"})),
    };

    let err = request.send_request(&client).await.unwrap_err();

    assert_eq!(err.to_string(), "Request failed with status 500");
    let seen = recorded_request(&recorded);
    assert_eq!(seen.method, "POST");
    assert_eq!(seen.body, r#"{"name":"widget"}"#);
    assert_eq!(seen.header("content-type"), Some("application/json"));
}

#[tokio::test]
async fn failure_status_keeps_the_numeric_code() {
    let (url, _recorded) = spawn_backend(404, "not found").await;
    let client = HTTPClient::new(&url);
    let request = AdHocRequest {
        endpoint: String::from("/missing"),
        method: HTTPRequestMethod::Get,
        payload: None,
    };

    let err = request.send_request(&client).await.unwrap_err();

    assert!(err.to_string().contains("404"), "got: {err}");
    assert!(matches!(
        err,
        HTTPError::Response { source: ResponseError::Status { code: 404 } }
    ));
}

#[tokio::test]
async fn status_300_is_outside_the_success_range() {
    let (url, _recorded) = spawn_backend(300, "{}").await;
    let client = HTTPClient::new(&url);
    let request = AdHocRequest {
        endpoint: String::from("/api/items"),
        method: HTTPRequestMethod::Get,
        payload: None,
    };

    let err = request.send_request(&client).await.unwrap_err();
    assert_eq!(err.to_string(), "Request failed with status 300");
}

#[tokio::test]
async fn status_299_is_inside_the_success_range() {
    let (url, _recorded) = spawn_backend(299, "{}").await;
    let client = HTTPClient::new(&url);
    let request = AdHocRequest {
        endpoint: String::from("/api/items"),
        method: HTTPRequestMethod::Get,
        payload: None,
    };

    let parsed = request.send_request(&client).await.unwrap();
    assert_eq!(parsed, json!({}));
}

#[tokio::test]
async fn transport_fault_reports_the_fixed_network_error() {
    // Bind to learn a free port, then drop the listener so nothing answers.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = HTTPClient::new(&format!("http://{addr}"));
    let request = AdHocRequest {
        endpoint: String::from("/dashboard"),
        method: HTTPRequestMethod::Get,
        payload: None,
    };

    let err = request.send_request(&client).await.unwrap_err();

    assert_eq!(err.to_string(), "Network error");
    assert!(matches!(
        err,
        HTTPError::Response { source: ResponseError::NoConnection }
    ));
}

#[tokio::test]
async fn malformed_success_body_is_a_decode_error() {
    let (url, _recorded) = spawn_backend(200, "<html>surprise</html>").await;
    let client = HTTPClient::new(&url);
    let request = AdHocRequest {
        endpoint: String::from("/api/items"),
        method: HTTPRequestMethod::Get,
        payload: None,
    };

    let err = request.send_request(&client).await.unwrap_err();

    assert!(matches!(
        err,
        HTTPError::Response { source: ResponseError::Decode { .. } }
    ));
}

#[tokio::test]
async fn dashboard_round_trip_parses_statistics() {
    let (url, recorded) = spawn_backend(200, DASHBOARD_BODY).await;
    let client = HTTPClient::new(&url);

    let dashboard = DashboardRequest::default().send_request(&client).await.unwrap();

    assert_eq!(dashboard.sales().order_count(), 42);
    assert_eq!(dashboard.sales().total_sales(), I64F64::lit("12850.25"));
    assert_eq!(dashboard.inventory().low_stock_count(), 7);
    assert_eq!(dashboard.suppliers().active_suppliers(), 9);
    assert_eq!(dashboard.top_products().len(), 1);
    assert_eq!(dashboard.top_products()[0].name(), "Pallet jack");
    assert_eq!(dashboard.stock_alerts()[0].quantity_available, 0);

    let seen = recorded_request(&recorded);
    assert_eq!(seen.path, "/dashboard");
}

#[tokio::test]
async fn dashboard_request_carries_the_date_window() {
    let (url, recorded) = spawn_backend(200, DASHBOARD_BODY).await;
    let client = HTTPClient::new(&url);
    let request = DashboardRequest {
        start_date: Some(Utc.with_ymd_and_hms(2026, 7, 6, 0, 0, 0).unwrap()),
        end_date: Some(Utc.with_ymd_and_hms(2026, 8, 5, 0, 0, 0).unwrap()),
    };

    request.send_request(&client).await.unwrap();

    let seen = recorded_request(&recorded);
    assert!(seen.path.contains("startDate=2026-07-06T00"), "got: {}", seen.path);
    assert!(seen.path.contains("endDate=2026-08-05T00"), "got: {}", seen.path);
}

#[tokio::test]
async fn login_round_trip_exposes_the_principal() {
    let (url, recorded) = spawn_backend(
        200,
        r#"{"username": "mgeller", "full_name": "Maria Geller", "roles": ["manager"], "permissions": ["dashboard:view", "product:view"]}"#,
    )
    .await;
    let client = HTTPClient::new(&url);
    let request = LoginRequest {
        username: String::from("mgeller"),
        password: String::from("hunter2"),
    };

    let principal = request.send_request(&client).await.unwrap();

    assert_eq!(principal.username(), "mgeller");
    assert!(principal.has_permission("dashboard:view"));
    assert!(!principal.has_permission("product:delete"));

    let seen = recorded_request(&recorded);
    assert_eq!(seen.method, "POST");
    assert_eq!(seen.body, serde_json::to_string(request.body()).unwrap());
}

#[tokio::test]
async fn product_delete_sends_the_id_header() {
    let (url, recorded) = spawn_backend(200, r#""Product deleted""#).await;
    let client = HTTPClient::new(&url);

    let message = ProductDeleteRequest { id: 7 }.send_request(&client).await.unwrap();

    assert_eq!(message, "Product deleted");
    let seen = recorded_request(&recorded);
    assert_eq!(seen.method, "DELETE");
    assert_eq!(seen.header("id"), Some("7"));
}

#[tokio::test]
async fn order_list_filter_lands_in_the_query_string() {
    let (url, recorded) = spawn_backend(200, r#"{"orders": []}"#).await;
    let client = HTTPClient::new(&url);
    let request = OrderListRequest { status: Some(OrderStatus::Pending) };

    let orders = request.send_request(&client).await.unwrap();

    assert!(orders.orders().is_empty());
    let seen = recorded_request(&recorded);
    assert!(seen.path.contains("status=pending"), "got: {}", seen.path);
}

#[tokio::test]
async fn concurrent_calls_complete_independently() {
    let (ok_url, _ok_recorded) = spawn_backend(200, "{}").await;
    let (err_url, _err_recorded) = spawn_backend(503, "").await;
    let ok_client = HTTPClient::new(&ok_url);
    let err_client = HTTPClient::new(&err_url);

    let ok_request = AdHocRequest {
        endpoint: String::from("/a"),
        method: HTTPRequestMethod::Get,
        payload: None,
    };
    let err_request = AdHocRequest {
        endpoint: String::from("/b"),
        method: HTTPRequestMethod::Get,
        payload: None,
    };

    let (first, second) = tokio::join!(
        ok_request.send_request(&ok_client),
        err_request.send_request(&err_client)
    );

    assert!(first.is_ok());
    assert_eq!(second.unwrap_err().to_string(), "Request failed with status 503");
}

#[tokio::test]
async fn product_search_lands_in_the_query_string() {
    let (url, recorded) = spawn_backend(
        200,
        r#"{"products": [{"id": 5, "name": "Stretch wrap", "description": null, "sku": "WRAP-500",
                         "unit_price": 249.5, "reorder_level": 10, "created_at": "2026-01-12T09:00:00Z"}]}"#,
    )
    .await;
    let client = HTTPClient::new(&url);
    let request = ProductListRequest { search: Some(String::from("wrap")) };

    let listing = request.send_request(&client).await.unwrap();

    assert_eq!(listing.products().len(), 1);
    assert_eq!(listing.products()[0].unit_price, I64F64::lit("249.5"));
    let seen = recorded_request(&recorded);
    assert!(seen.path.contains("search=wrap"), "got: {}", seen.path);
}

#[tokio::test]
async fn product_create_echoes_the_stored_record() {
    let (url, recorded) = spawn_backend(
        200,
        r#"{"product": {"id": 31, "name": "Box cutter", "description": "10-pack", "sku": "CUT-10",
                        "unit_price": 12.25, "reorder_level": 5, "created_at": "2026-08-05T08:00:00Z"}}"#,
    )
    .await;
    let client = HTTPClient::new(&url);
    let request = ProductCreateRequest {
        name: String::from("Box cutter"),
        description: Some(String::from("10-pack")),
        sku: String::from("CUT-10"),
        unit_price: I64F64::lit("12.25"),
        reorder_level: 5,
    };

    let created = request.send_request(&client).await.unwrap();

    assert_eq!(created.product().id, 31);
    assert_eq!(created.product().sku, "CUT-10");
    let seen = recorded_request(&recorded);
    assert_eq!(seen.body, serde_json::to_string(request.body()).unwrap());
}

#[tokio::test]
async fn product_modify_sends_the_full_record() {
    let (url, recorded) = spawn_backend(
        200,
        r#"{"product": {"id": 31, "name": "Box cutter", "description": null, "sku": "CUT-10",
                        "unit_price": 13.5, "reorder_level": 8, "created_at": "2026-08-05T08:00:00Z"}}"#,
    )
    .await;
    let client = HTTPClient::new(&url);
    let request = ProductModifyRequest {
        product: Product {
            id: 31,
            name: String::from("Box cutter"),
            description: None,
            sku: String::from("CUT-10"),
            unit_price: I64F64::lit("13.5"),
            reorder_level: 8,
            created_at: Utc.with_ymd_and_hms(2026, 8, 5, 8, 0, 0).unwrap(),
        },
    };

    let updated = request.send_request(&client).await.unwrap();

    assert_eq!(updated.product().reorder_level, 8);
    let seen = recorded_request(&recorded);
    assert_eq!(seen.method, "PUT");
    assert_eq!(seen.body, serde_json::to_string(request.body()).unwrap());
}

#[tokio::test]
async fn stock_movement_reports_the_new_level() {
    let (url, recorded) = spawn_backend(
        200,
        r#"{"movement_id": 9, "product_id": 5, "quantity_available": 25, "movement_date": "2026-08-05T10:30:00Z"}"#,
    )
    .await;
    let client = HTTPClient::new(&url);
    let request = StockMovementRequest {
        product_id: 5,
        movement_type: MovementType::Purchase,
        quantity: 25,
        reference_id: None,
        notes: Some(String::from("restock")),
    };

    let movement = request.send_request(&client).await.unwrap();

    assert_eq!(movement.movement_id(), 9);
    assert_eq!(movement.quantity_available(), 25);
    let seen = recorded_request(&recorded);
    assert_eq!(seen.path, "/stock/movements");
    assert_eq!(seen.body, serde_json::to_string(request.body()).unwrap());
}

#[tokio::test]
async fn order_create_parses_backend_pricing() {
    let (url, recorded) = spawn_backend(
        200,
        r#"{"id": 1044, "status": "pending", "total_amount": 499.0}"#,
    )
    .await;
    let client = HTTPClient::new(&url);
    let request = OrderCreateRequest {
        customer_name: String::from("Wile E. Coyote"),
        customer_email: String::from("wile@acme.example"),
        items: vec![OrderItemDraft { product_id: 3, quantity: 2 }],
    };

    let placed = request.send_request(&client).await.unwrap();

    assert_eq!(placed.id(), 1044);
    assert_eq!(placed.status(), OrderStatus::Pending);
    assert_eq!(placed.total_amount(), I64F64::lit("499.0"));
    let seen = recorded_request(&recorded);
    assert_eq!(seen.body, serde_json::to_string(request.body()).unwrap());
}

#[tokio::test]
async fn logout_and_supplier_listing_round_trip() {
    let (logout_url, _logout_recorded) = spawn_backend(200, r#""Logged out""#).await;
    let logout_client = HTTPClient::new(&logout_url);
    let message = LogoutRequest {}.send_request(&logout_client).await.unwrap();
    assert_eq!(message, "Logged out");

    let (supplier_url, _supplier_recorded) = spawn_backend(
        200,
        r#"{"suppliers": [{"id": 2, "name": "Acme Corp", "contact_person": null, "email": "sales@acme.example",
                           "phone": null, "address": null, "created_at": "2025-11-02T00:00:00Z"}]}"#,
    )
    .await;
    let supplier_client = HTTPClient::new(&supplier_url);
    let listing = SupplierListRequest {}.send_request(&supplier_client).await.unwrap();
    assert_eq!(listing.suppliers()[0].name, "Acme Corp");
}

#[tokio::test]
async fn stock_listing_flags_levels_needing_reorder() {
    let (url, _recorded) = spawn_backend(
        200,
        r#"{"levels": [
            {"product_id": 5, "product_name": "Stretch wrap", "sku": "WRAP-500",
             "quantity_available": 0, "reorder_level": 10, "last_updated": "2026-08-04T12:00:00Z"},
            {"product_id": 7, "product_name": "Tape gun", "sku": "TAPE-2",
             "quantity_available": 50, "reorder_level": 10, "last_updated": "2026-08-04T12:00:00Z"}
        ]}"#,
    )
    .await;
    let client = HTTPClient::new(&url);

    let stock = StockLevelsRequest {}.send_request(&client).await.unwrap();

    assert_eq!(stock.levels().len(), 2);
    let flagged: Vec<&str> = stock.needing_reorder().map(|level| level.sku.as_str()).collect();
    assert_eq!(flagged, ["WRAP-500"]);
}

#[test]
fn error_messages_match_the_wire_contract() {
    assert_eq!(
        ResponseError::Status { code: 503 }.to_string(),
        "Request failed with status 503"
    );
    assert_eq!(ResponseError::NoConnection.to_string(), "Network error");
    let wrapped = HTTPError::Response { source: ResponseError::Status { code: 418 } };
    assert_eq!(wrapped.to_string(), "Request failed with status 418");
}

#[test]
fn movement_type_return_serializes_as_the_keyword() {
    assert_eq!(serde_json::to_string(&MovementType::Return).unwrap(), r#""return""#);
    assert_eq!(MovementType::Return.to_string(), "return");
}

#[test]
fn stocked_predicates_split_on_the_reorder_level() {
    let mut level = StockLevel {
        product_id: 1,
        product_name: String::from("Stretch wrap"),
        sku: String::from("WRAP-500"),
        quantity_available: 0,
        reorder_level: 10,
        last_updated: Utc::now(),
    };
    assert!(level.is_out_of_stock());
    assert!(!level.is_low_stock());

    level.quantity_available = 10;
    assert!(level.is_low_stock());
    assert!(level.needs_reorder());

    level.quantity_available = 11;
    assert!(!level.is_low_stock());
    assert!(!level.needs_reorder());
}
