//! End-to-end behaviour of `predict` against a mock prediction service

use crate::mock_server::{
    client_for, scan_candidate, unreachable_base_url, MockServerFixture, GLIOMA_BODY,
};
use scanix_client::{predict, PredictionResult, UploadCandidate};

const CONNECTION_MESSAGE: &str = "Failed to connect to the prediction service. Please check if the backend server is running and the API URL is correct.";

#[tokio::test]
async fn test_success_glioma() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture.mock_predict(200, GLIOMA_BODY).await;

    let result = fixture.client().predict(&scan_candidate()).await;
    mock.assert_async().await;

    let prediction = result.prediction().expect("should succeed");
    assert_eq!(prediction.label(), Some("glioma"));
    assert_eq!(prediction.confidence(), Some(0.87));
    assert_eq!(prediction.probabilities().len(), 4);
    assert!(!prediction.metadata.request_id.is_empty());
    assert_eq!(prediction.metadata.api_version, "1.0.0");
    assert!(prediction.metadata.processing_time.ends_with('Z'));
}

#[tokio::test]
async fn test_success_equals_input_plus_metadata() {
    let mut fixture = MockServerFixture::new().await;
    let _mock = fixture.mock_predict(200, GLIOMA_BODY).await;

    let result = fixture.client().predict(&scan_candidate()).await;
    let prediction = result.prediction().expect("should succeed");

    let expected: serde_json::Value = serde_json::from_str(GLIOMA_BODY).unwrap();
    let mut actual = prediction.to_json();
    assert!(actual["metadata"].is_object());
    actual.as_object_mut().unwrap().remove("metadata");
    assert_eq!(actual, expected);
}

#[tokio::test]
async fn test_request_shape() {
    let mut fixture = MockServerFixture::new().await;
    let candidate = scan_candidate();
    let mock = fixture
        .mock_predict_strict("scan.jpg", "image/jpeg", candidate.size() as usize)
        .await;

    let result = fixture.client().predict(&candidate).await;
    mock.assert_async().await;
    assert!(result.is_success(), "got {:?}", result);
}

#[tokio::test]
async fn test_server_version_and_request_id() {
    let mut fixture = MockServerFixture::new().await;
    let _mock = fixture
        .mock_predict(
            200,
            r#"{"prediction":"pituitary","confidence":0.91,"probabilities":{"pituitary":0.91},"version":"2.3.1","request_id":"req-7"}"#,
        )
        .await;

    let result = fixture.client().predict(&scan_candidate()).await;
    let prediction = result.prediction().expect("should succeed");
    assert_eq!(prediction.metadata.api_version, "2.3.1");
    assert_eq!(prediction.metadata.request_id, "req-7");
}

#[tokio::test]
async fn test_object_without_expected_fields_still_succeeds() {
    let mut fixture = MockServerFixture::new().await;
    let _mock = fixture.mock_predict(200, r#"{"unexpected":true}"#).await;

    let result = fixture.client().predict(&scan_candidate()).await;
    let prediction = result.prediction().expect("any object is accepted");
    assert_eq!(prediction.label(), None);
    assert!(!prediction.metadata.request_id.is_empty());
}

#[tokio::test]
async fn test_serialized_success_keeps_its_tag() {
    let mut fixture = MockServerFixture::new().await;
    let _mock = fixture
        .mock_predict(
            200,
            r#"{"prediction":"glioma","confidence":0.87,"status":"ok"}"#,
        )
        .await;

    let result = fixture.client().predict(&scan_candidate()).await;
    let text = serde_json::to_string(&result).unwrap();
    let v: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(v["status"], "success");
    assert_eq!(v["result"]["status"], "ok");
    assert_eq!(v["result"]["prediction"], "glioma");
}

#[tokio::test]
async fn test_fixed_status_messages() {
    let cases = [
        (413usize, "File too large. Please upload a smaller image."),
        (415, "Unsupported file format. Please use JPEG or PNG."),
        (500, "Internal server error. Please try again later."),
        (404, "Prediction endpoint not found. Please check the API URL."),
    ];
    for (status, expected) in cases {
        let mut fixture = MockServerFixture::new().await;
        let _mock = fixture
            .mock_predict(status, r#"{"error":"something went wrong"}"#)
            .await;

        let result = fixture.client().predict(&scan_candidate()).await;
        assert_eq!(
            result,
            PredictionResult::failure(expected),
            "status {} should map to its fixed message",
            status
        );
    }
}

#[tokio::test]
async fn test_other_statuses_report_code() {
    for status in [400usize, 401, 403, 429, 502, 503] {
        let mut fixture = MockServerFixture::new().await;
        let _mock = fixture.mock_predict(status, "nope").await;

        let result = fixture.client().predict(&scan_candidate()).await;
        assert_eq!(
            result.error_message(),
            Some(format!("Server error: {}", status).as_str())
        );
    }
}

#[tokio::test]
async fn test_server_errors_are_not_retried() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .server
        .mock("POST", "/predict")
        .with_status(503)
        .expect(1)
        .create_async()
        .await;

    let result = fixture.client().predict(&scan_candidate()).await;
    assert_eq!(result.error_message(), Some("Server error: 503"));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_invalid_bodies() {
    for body in ["<html>oops</html>", "[0.87, 0.13]", "\"glioma\"", "null", ""] {
        let mut fixture = MockServerFixture::new().await;
        let _mock = fixture.mock_predict(200, body).await;

        let result = fixture.client().predict(&scan_candidate()).await;
        assert_eq!(
            result.error_message(),
            Some("Invalid response format from server"),
            "body {:?}",
            body
        );
    }
}

#[tokio::test]
async fn test_connection_refused() {
    let client = client_for(&unreachable_base_url());
    let result = client.predict(&scan_candidate()).await;
    assert_eq!(result, PredictionResult::failure(CONNECTION_MESSAGE));
}

#[tokio::test]
async fn test_malformed_base_url_is_unexpected_failure() {
    let client = client_for("not a url");
    let result = client.predict(&scan_candidate()).await;
    let message = result.error_message().expect("should fail");
    assert_ne!(message, CONNECTION_MESSAGE);
    assert!(!message.is_empty());
}

#[tokio::test]
async fn test_empty_candidate_sends_nothing() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .server
        .mock("POST", "/predict")
        .expect(0)
        .create_async()
        .await;

    let empty = UploadCandidate::new("scan.jpg", "image/jpeg", Vec::new());
    let result = fixture.client().predict(&empty).await;
    assert_eq!(result.error_message(), Some("Please select an image first"));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_concurrent_calls_are_independent() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .server
        .mock("POST", "/predict")
        .with_status(200)
        .with_body(GLIOMA_BODY)
        .expect(3)
        .create_async()
        .await;

    let client = fixture.client();
    let candidates: Vec<UploadCandidate> = (0..3)
        .map(|i| UploadCandidate::new(format!("scan-{}.png", i), "image/png", vec![b'x'; 8 + i]))
        .collect();
    let results =
        futures::future::join_all(candidates.iter().map(|c| client.predict(c))).await;

    mock.assert_async().await;
    let ids: std::collections::HashSet<String> = results
        .into_iter()
        .map(|r| r.into_result().expect("should succeed").metadata.request_id)
        .collect();
    assert_eq!(ids.len(), 3, "each call gets its own request id");
}

#[tokio::test]
async fn test_one_shot_predict() {
    let mut fixture = MockServerFixture::new().await;
    let _mock = fixture.mock_predict(200, GLIOMA_BODY).await;

    let result = predict(&scan_candidate(), Some(&fixture.base_url)).await;
    assert!(result.is_success());

    let offline = predict(&scan_candidate(), Some(&unreachable_base_url())).await;
    assert_eq!(offline.error_message(), Some(CONNECTION_MESSAGE));
}
