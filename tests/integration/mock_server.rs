//! Mock HTTP server setup for integration tests

use mockito::{Matcher, Mock, Server, ServerGuard};
use scanix_client::{PredictionClient, UploadCandidate};

pub const GLIOMA_BODY: &str = r#"{"prediction":"glioma","confidence":0.87,"probabilities":{"glioma":0.87,"notumor":0.05,"meningioma":0.05,"pituitary":0.03}}"#;

/// Test fixture that owns a mock server and a client pointed at it
pub struct MockServerFixture {
    pub server: ServerGuard,
    pub base_url: String,
}

impl MockServerFixture {
    pub async fn new() -> Self {
        let server = Server::new_async().await;
        let base_url = server.url();
        Self { server, base_url }
    }

    pub fn client(&self) -> PredictionClient {
        client_for(&self.base_url)
    }

    /// Mock `/predict` returning the given status and body
    pub async fn mock_predict(&mut self, status: usize, body: &str) -> Mock {
        self.server
            .mock("POST", "/predict")
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await
    }

    /// Mock `/predict` that only matches a well-formed multipart upload
    pub async fn mock_predict_strict(&mut self, filename: &str, filetype: &str, size: usize) -> Mock {
        self.server
            .mock("POST", "/predict")
            .match_header("accept", "application/json")
            .match_header(
                "content-type",
                Matcher::Regex("^multipart/form-data; boundary=".to_string()),
            )
            .match_body(Matcher::AllOf(vec![
                Matcher::Regex(format!(
                    r#"name="image"; filename="{}""#,
                    regex_escape(filename)
                )),
                Matcher::Regex(format!(
                    r#"name="filename"\r\n\r\n{}\r\n"#,
                    regex_escape(filename)
                )),
                Matcher::Regex(format!(
                    r#"name="filetype"\r\n\r\n{}\r\n"#,
                    regex_escape(filetype)
                )),
                Matcher::Regex(format!(r#"name="filesize"\r\n\r\n{}\r\n"#, size)),
                Matcher::Regex(
                    r#"name="upload_time"\r\n\r\n\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}\.\d{3}Z\r\n"#
                        .to_string(),
                ),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(GLIOMA_BODY)
            .create_async()
            .await
    }

    pub async fn mock_health(&mut self, status: usize, body: &str) -> Mock {
        self.server
            .mock("GET", "/health")
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await
    }
}

/// Client that ignores any proxy configured in the test environment
pub fn client_for(base_url: &str) -> PredictionClient {
    let http = reqwest::Client::builder()
        .no_proxy()
        .build()
        .expect("http client should build");
    PredictionClient::builder()
        .base_url(base_url)
        .http_client(http)
        .build()
        .expect("client should build")
}

/// An ASCII-only stand-in for image bytes so body matchers can see it
pub fn scan_candidate() -> UploadCandidate {
    UploadCandidate::new("scan.jpg", "image/jpeg", b"fake-jpeg-bytes".to_vec())
}

/// A base URL nothing is listening on
pub fn unreachable_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let port = listener.local_addr().expect("local addr").port();
    drop(listener);
    format!("http://127.0.0.1:{}", port)
}

fn regex_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if "\\.+*?()|[]{}^$".contains(c) {
            out.push('\\');
        }
        out.push(c);
    }
    out
}
