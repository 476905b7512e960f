// Contract tests for POST /api/estimates
//
// Validates the JSON shape of requests and responses:
// - Required fields are present with integer types
// - Optional fields (discount_cents, gst_rate) have their documented defaults
// - Malformed payloads are rejected before reaching the estimator
// - Errors use the standard envelope

use actix_web::{test, web, App};
use billing_estimator::config::EstimatorConfig;
use billing_estimator::modules;
use serde_json::{json, Value};

async fn post_estimate(payload: Value) -> (u16, Value) {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(EstimatorConfig::default()))
            .configure(modules::configure),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/estimates")
        .set_json(payload)
        .to_request();

    let resp = test::call_service(&app, req).await;
    let status = resp.status().as_u16();
    let body: Value = test::read_body_json(resp).await;
    (status, body)
}

// Raw body, so numbers reach the server with every digit the client wrote
async fn post_raw_estimate(body: &'static str) -> (u16, Value) {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(EstimatorConfig::default()))
            .configure(modules::configure),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/estimates")
        .insert_header(("content-type", "application/json"))
        .set_payload(body)
        .to_request();

    let resp = test::call_service(&app, req).await;
    let status = resp.status().as_u16();
    let body: Value = test::read_body_json(resp).await;
    (status, body)
}

#[actix_web::test]
async fn test_estimate_response_schema() {
    let (status, body) = post_estimate(json!({
        "items": [
            {
                "description": "OPD consultation",
                "quantity": 1,
                "unit_price_cents": 5000,
                "gst_rate": 0.18
            }
        ],
        "discount_cents": 0
    }))
    .await;

    assert_eq!(status, 200);

    for field in ["subtotal_cents", "gst_cents", "discount_cents", "total_cents"] {
        assert!(body.get(field).is_some(), "Response must include '{}'", field);
        let value = body[field].as_i64();
        assert!(value.is_some(), "{} must be an integer", field);
        assert!(value.unwrap() >= 0, "{} must be non-negative", field);
    }

    let lines = body["lines"].as_array().expect("lines must be an array");
    assert_eq!(lines.len(), 1);
    for field in ["index", "description", "gst_rate", "subtotal_cents", "gst_cents"] {
        assert!(lines[0].get(field).is_some(), "Line must include '{}'", field);
    }
    assert!(lines[0]["gst_rate"].is_number(), "gst_rate must be a JSON number");
}

#[actix_web::test]
async fn test_discount_defaults_to_zero() {
    let (status, body) = post_estimate(json!({
        "items": [
            { "description": "Lab test", "quantity": 2, "unit_price_cents": 1250, "gst_rate": 0 }
        ]
    }))
    .await;

    assert_eq!(status, 200);
    assert_eq!(body["discount_cents"].as_i64(), Some(0));
    assert_eq!(body["total_cents"].as_i64(), Some(2500));
}

#[actix_web::test]
async fn test_gst_rate_defaults_to_configured_rate() {
    let (status, body) = post_estimate(json!({
        "items": [
            { "description": "Lab test", "quantity": 1, "unit_price_cents": 1000 }
        ]
    }))
    .await;

    // Default configuration has a zero default rate
    assert_eq!(status, 200);
    assert_eq!(body["gst_cents"].as_i64(), Some(0));
}

#[actix_web::test]
async fn test_missing_items_rejected() {
    let (status, body) = post_estimate(json!({ "discount_cents": 100 })).await;

    assert_eq!(status, 400);
    assert_eq!(body["error"]["code"], "INVALID_JSON");
}

#[actix_web::test]
async fn test_unknown_fields_rejected() {
    let (status, body) = post_estimate(json!({
        "items": [
            {
                "description": "OPD consultation",
                "quantity": 1,
                "unit_price_cents": 5000,
                "tax_rate": 0.18
            }
        ]
    }))
    .await;

    assert_eq!(status, 400);
    assert_eq!(body["error"]["code"], "INVALID_JSON");
}

#[actix_web::test]
async fn test_string_quantity_rejected() {
    let (status, body) = post_estimate(json!({
        "items": [
            { "description": "OPD consultation", "quantity": "1", "unit_price_cents": 5000 }
        ]
    }))
    .await;

    assert_eq!(status, 400);
    assert_eq!(body["error"]["code"], "INVALID_JSON");
}

#[actix_web::test]
async fn test_tax_rate_out_of_range_error_envelope() {
    let (status, body) = post_estimate(json!({
        "items": [
            { "description": "OK", "quantity": 1, "unit_price_cents": 100, "gst_rate": 0.05 },
            { "description": "Bad", "quantity": 1, "unit_price_cents": 100, "gst_rate": 1.5 }
        ]
    }))
    .await;

    assert_eq!(status, 400);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    assert!(body["error"]["message"]
        .as_str()
        .unwrap()
        .starts_with("items[1].gst_rate"));
    assert_eq!(body["error"]["details"]["field"], "gst_rate");
    assert_eq!(body["error"]["details"]["index"].as_u64(), Some(1));
}

#[actix_web::test]
async fn test_negative_discount_error_envelope() {
    let (status, body) = post_estimate(json!({
        "items": [],
        "discount_cents": -100
    }))
    .await;

    assert_eq!(status, 400);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(body["error"]["details"]["field"], "discount_cents");
}

#[actix_web::test]
async fn test_empty_description_error_envelope() {
    let (status, body) = post_estimate(json!({
        "items": [
            { "description": "", "quantity": 1, "unit_price_cents": 100 }
        ]
    }))
    .await;

    assert_eq!(status, 400);
    assert_eq!(body["error"]["details"]["field"], "description");
    assert_eq!(body["error"]["details"]["index"].as_u64(), Some(0));
}

#[actix_web::test]
async fn test_gst_rate_beyond_decimal_precision_rejected() {
    let (status, body) = post_raw_estimate(
        r#"{"items":[{"description":"OPD consultation","quantity":1,"unit_price_cents":5000,"gst_rate":1.00000000000000000000000000000001}]}"#,
    )
    .await;

    assert_eq!(status, 400);
    assert_eq!(body["error"]["code"], "INVALID_JSON");
}

#[actix_web::test]
async fn test_tiny_negative_gst_rate_rejected() {
    let (status, body) = post_raw_estimate(
        r#"{"items":[{"description":"OPD consultation","quantity":1,"unit_price_cents":5000,"gst_rate":-0.00000000000000000000000000000001}]}"#,
    )
    .await;

    assert_eq!(status, 400);
    assert_eq!(body["error"]["code"], "INVALID_JSON");
}

#[actix_web::test]
async fn test_string_gst_rate_rejected() {
    let (status, body) = post_raw_estimate(
        r#"{"items":[{"description":"OPD consultation","quantity":1,"unit_price_cents":5000,"gst_rate":"0.18"}]}"#,
    )
    .await;

    assert_eq!(status, 400);
    assert_eq!(body["error"]["code"], "INVALID_JSON");
}

#[actix_web::test]
async fn test_precise_gst_rate_accepted() {
    let (status, body) = post_raw_estimate(
        r#"{"items":[{"description":"OPD consultation","quantity":1,"unit_price_cents":10000,"gst_rate":0.0825}]}"#,
    )
    .await;

    assert_eq!(status, 200);
    assert_eq!(body["gst_cents"].as_i64(), Some(825));
}
