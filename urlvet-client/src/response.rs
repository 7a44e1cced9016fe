use std::borrow::Cow;

use bytes::Bytes;
use reqwest::StatusCode;
use reqwest::header::{CONTENT_TYPE, HeaderMap};
use serde::de::DeserializeOwned;

use crate::error::ValidationResult;
use crate::report::ValidationReport;

/// A reply from the validation service, exactly as it arrived.
#[derive(Debug, Clone)]
pub struct ValidationResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: Bytes,
}

impl ValidationResponse {
    pub fn new(status: StatusCode, headers: HeaderMap, body: Bytes) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// Drain a transport response into an owned value.
    pub(crate) async fn read(response: reqwest::Response) -> Result<Self, reqwest::Error> {
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await?;
        Ok(Self::new(status, headers, body))
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn content_type(&self) -> Option<&str> {
        self.headers
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
    }

    pub fn body(&self) -> &Bytes {
        &self.body
    }

    pub fn into_body(self) -> Bytes {
        self.body
    }

    /// Body as text; invalid UTF-8 is replaced rather than rejected.
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }

    pub fn json<T: DeserializeOwned>(&self) -> ValidationResult<T> {
        Ok(serde_json::from_slice(&self.body)?)
    }

    /// Decode the body as the report produced by the reference validation service.
    pub fn report(&self) -> ValidationResult<ValidationReport> {
        self.json()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;

    fn response(status: u16, body: &'static [u8]) -> ValidationResponse {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        ValidationResponse::new(
            StatusCode::from_u16(status).expect("status"),
            headers,
            Bytes::from_static(body),
        )
    }

    #[test]
    fn exposes_status_headers_and_body_verbatim() {
        let response = response(200, br#"{"valid": true}"#);
        assert!(response.is_success());
        assert_eq!(response.content_type(), Some("application/json"));
        assert_eq!(
            response.body(),
            &Bytes::from_static(br#"{"valid": true}"#)
        );
        assert_eq!(response.text(), r#"{"valid": true}"#);
    }

    #[test]
    fn json_reports_decode_errors() {
        let response = response(200, b"<html>");
        let err = response.json::<serde_json::Value>().unwrap_err();
        assert!(matches!(err, crate::ValidationError::Decode(_)));
    }

    #[test]
    fn text_is_lossy_for_invalid_utf8() {
        let response = response(200, b"ok\xff");
        assert_eq!(response.text(), "ok\u{fffd}");
    }
}
