// Test Assertion Helpers
//
// Common assertions for HTTP responses in integration tests.

use actix_web::http::StatusCode;
use awc::ClientResponse;
use serde_json::Value;

/// Assert the response has the expected status
///
/// # Panics
/// If the status differs, with the actual code and reason
pub fn assert_status<S>(response: &ClientResponse<S>, expected: StatusCode) {
    let status = response.status();
    assert_eq!(
        status,
        expected,
        "Expected {} {}, got {} {}",
        expected.as_u16(),
        expected.canonical_reason().unwrap_or("Unknown"),
        status.as_u16(),
        status.canonical_reason().unwrap_or("Unknown")
    );
}

/// Assert HTTP response is 200 OK
pub fn assert_ok<S>(response: &ClientResponse<S>) {
    assert_status(response, StatusCode::OK);
}

/// Assert HTTP response is 400 Bad Request
pub fn assert_bad_request<S>(response: &ClientResponse<S>) {
    assert_status(response, StatusCode::BAD_REQUEST);
}

/// Assert HTTP response is 422 Unprocessable Entity
pub fn assert_unprocessable<S>(response: &ClientResponse<S>) {
    assert_status(response, StatusCode::UNPROCESSABLE_ENTITY);
}

/// Assert HTTP response is 429 Too Many Requests
pub fn assert_too_many_requests<S>(response: &ClientResponse<S>) {
    assert_status(response, StatusCode::TOO_MANY_REQUESTS);
}

/// Assert a JSON body is the standard error envelope with the given code
///
/// # Example
/// ```no_run
/// let body: Value = response.json().await.unwrap();
/// assert_error_code(&body, "VALIDATION_ERROR");
/// ```
pub fn assert_error_code(body: &Value, expected_code: &str) {
    let error = body
        .get("error")
        .unwrap_or_else(|| panic!("Response is not an error envelope: {}", body));

    assert_eq!(
        error["code"], expected_code,
        "Unexpected error code in {}",
        body
    );
    assert!(
        error["message"].is_string(),
        "Error envelope must carry a message: {}",
        body
    );
}

/// Assert the four estimate amounts in a response body
pub fn assert_estimate_amounts(
    body: &Value,
    subtotal_cents: i64,
    gst_cents: i64,
    discount_cents: i64,
    total_cents: i64,
) {
    assert_eq!(body["subtotal_cents"].as_i64(), Some(subtotal_cents), "subtotal in {}", body);
    assert_eq!(body["gst_cents"].as_i64(), Some(gst_cents), "gst in {}", body);
    assert_eq!(body["discount_cents"].as_i64(), Some(discount_cents), "discount in {}", body);
    assert_eq!(body["total_cents"].as_i64(), Some(total_cents), "total in {}", body);
}
