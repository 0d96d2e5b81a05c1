//! Transport error classification

/// Whether a transport error means the request never got a response.
///
/// Connection refused, DNS failures, timeouts and errors while sending the
/// request all count. Builder errors (e.g. a malformed URL) and errors while
/// reading a body that did arrive do not.
pub(crate) fn is_connectivity_failure(err: &reqwest::Error) -> bool {
    if err.is_builder() || err.is_body() || err.is_decode() {
        return false;
    }
    err.is_connect() || err.is_timeout() || (err.is_request() && err.status().is_none())
}
