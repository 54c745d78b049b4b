use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use erbeds_availability::{AvailabilityError, BedQueryClient, BedSource, FailureKind};
use erbeds_domain::config::ApiConfig;
use erbeds_kernel::prelude::*;
use serde_json::{Value, json};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;

type Captured = Arc<Mutex<Vec<HashMap<String, String>>>>;

#[derive(Clone)]
enum Reply {
    Json(Value),
    Raw(StatusCode, &'static str),
    Delayed(Duration, Value),
}

#[derive(Clone)]
struct Upstream {
    reply: Reply,
    captured: Captured,
}

async fn handler(
    State(upstream): State<Upstream>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    upstream.captured.lock().expect("capture lock").push(params);
    match upstream.reply {
        Reply::Json(body) => Json(body).into_response(),
        Reply::Raw(status, body) => (status, body).into_response(),
        Reply::Delayed(delay, body) => {
            tokio::time::sleep(delay).await;
            Json(body).into_response()
        },
    }
}

/// Serves `reply` on an ephemeral port and returns a client pointed at it.
async fn spawn_upstream(reply: Reply) -> (BedQueryClient, Captured) {
    let captured = Captured::default();
    let app = Router::new()
        .route("/getEmrrmRltmUsefulSckbdInfoInqire", get(handler))
        .with_state(Upstream { reply, captured: captured.clone() });

    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve");
    });

    let config = ApiConfig {
        endpoint: format!("http://{addr}/getEmrrmRltmUsefulSckbdInfoInqire"),
        service_key: Some("test-key".to_owned()),
    };
    (BedQueryClient::new(&config).expect("client"), captured)
}

fn gwangju_seogu() -> Selection {
    Selection::new(&RegionCatalog::builtin(), "광주광역시", "서구").expect("known selection")
}

fn envelope(item: Value) -> Value {
    json!({
        "response": {
            "header": { "resultCode": "00", "resultMsg": "NORMAL SERVICE." },
            "body": { "items": { "item": item }, "numOfRows": 30, "pageNo": 1 }
        }
    })
}

#[tokio::test]
async fn test_query_sends_selection_and_decodes_records() {
    let (client, captured) = spawn_upstream(Reply::Json(envelope(json!([
        { "dutyName": "A병원", "hvec": 10, "dutyTel3": "062-111-1111", "hpid": "A1" },
        { "dutyName": "B병원", "hvec": 2, "dutyTel3": "062-222-2222" }
    ]))))
    .await;

    let records = client.query(gwangju_seogu()).await.expect("query");

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].name, "A병원");
    assert_eq!(records[0].available_beds, Some(10));
    assert_eq!(records[0].phone.as_deref(), Some("062-111-1111"));
    assert_eq!(records[0].field("hpid"), Some(&json!("A1")));
    assert_eq!(records[1].available_beds, Some(2));

    let requests = captured.lock().expect("capture lock");
    assert_eq!(requests.len(), 1);
    let params = &requests[0];
    assert_eq!(params["STAGE1"], "광주광역시");
    assert_eq!(params["STAGE2"], "서구");
    assert_eq!(params["pageNo"], "1");
    assert_eq!(params["numOfRows"], "30");
    assert_eq!(params["serviceKey"], "test-key");
    assert_eq!(params["_type"], "json");
}

#[tokio::test]
async fn test_missing_item_is_empty_result() {
    let body = json!({ "response": { "header": { "resultCode": "00" }, "body": { "items": "" } } });
    let (client, _) = spawn_upstream(Reply::Json(body)).await;

    let mut results = ResultsState::default();
    results.begin_query();
    let count = results.finish(client.fetch(gwangju_seogu()).await).expect("query");

    assert_eq!(count, 0);
    assert!(results.is_empty());
    assert!(!results.is_loading());
}

#[tokio::test]
async fn test_single_object_item_is_one_record() {
    let (client, _) =
        spawn_upstream(Reply::Json(envelope(json!({ "dutyName": "단독병원", "hvec": "3" })))).await;

    let records = client.query(gwangju_seogu()).await.expect("query");

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].available_beds, Some(3));
    assert_eq!(records[0].phone, None);
}

#[tokio::test]
async fn test_server_error_keeps_previous_results() {
    let (client, _) =
        spawn_upstream(Reply::Raw(StatusCode::INTERNAL_SERVER_ERROR, "boom")).await;

    let mut results = ResultsState::default();
    results.complete_query(vec![HospitalRecord::new("이전병원", Some(4), None)]);
    results.begin_query();

    let err = results.finish(client.fetch(gwangju_seogu()).await).expect_err("500");

    assert!(matches!(err, AvailabilityError::Upstream { ref code, .. } if code == "500"));
    assert_eq!(err.kind(), FailureKind::NetworkOrParseFailure);
    assert!(!results.is_loading());
    assert_eq!(results.records().len(), 1);
    assert_eq!(results.records()[0].name, "이전병원");
}

#[tokio::test]
async fn test_malformed_body_is_decode_error() {
    let (client, _) = spawn_upstream(Reply::Raw(StatusCode::OK, "{\"response\": {")).await;

    let err = client.query(gwangju_seogu()).await.expect_err("malformed");

    assert!(matches!(err, AvailabilityError::Decode { .. }));
    assert_eq!(err.kind(), FailureKind::NetworkOrParseFailure);
}

#[tokio::test]
async fn test_result_code_error_is_upstream_error() {
    let body = json!({
        "response": { "header": { "resultCode": "30", "resultMsg": "SERVICE KEY IS NOT REGISTERED ERROR." } }
    });
    let (client, _) = spawn_upstream(Reply::Json(body)).await;

    let err = client.query(gwangju_seogu()).await.expect_err("result code 30");

    match err {
        AvailabilityError::Upstream { code, message, .. } => {
            assert_eq!(code, "30");
            assert!(message.contains("NOT REGISTERED"));
        },
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_slow_upstream_is_not_cut_off() {
    let body = envelope(json!({ "dutyName": "느린병원", "hvec": 7 }));
    let (client, _) = spawn_upstream(Reply::Delayed(Duration::from_secs(17), body)).await;

    let records = client.query(gwangju_seogu()).await.expect("slow reply still arrives");

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name, "느린병원");
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    // Bind then drop to obtain a port with nothing listening on it.
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);

    let config =
        ApiConfig { endpoint: format!("http://{addr}/"), service_key: Some("k".to_owned()) };
    let client = BedQueryClient::new(&config).expect("client");

    let err = client.query(gwangju_seogu()).await.expect_err("nothing listening");

    assert!(matches!(err, AvailabilityError::Transport { .. }));
    assert_eq!(err.context(), Some("Sending bed availability request"));
}

#[test]
fn test_missing_service_key_is_configuration_failure() {
    let err = BedQueryClient::new(&ApiConfig::default()).expect_err("no key");
    assert_eq!(err.kind(), FailureKind::Configuration);
    assert_eq!(err.label(), "config");
}
