//! Terminal rendering of validation replies.

use urlvet_client::ValidationResponse;

/// Render a reply for stdout.
///
/// In JSON mode only the body is printed (pretty when it parses as JSON).
/// Otherwise a status line precedes the raw body text.
pub fn render_response(response: &ValidationResponse, json_only: bool) -> String {
    if json_only {
        return match response.json::<serde_json::Value>() {
            Ok(value) => serde_json::to_string_pretty(&value)
                .unwrap_or_else(|_| response.text().into_owned()),
            Err(_) => response.text().into_owned(),
        };
    }

    let body = response.text();
    if body.is_empty() {
        format!("HTTP {}", response.status())
    } else {
        format!("HTTP {}\n{}", response.status(), body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;
    use reqwest::StatusCode;
    use reqwest::header::HeaderMap;

    fn response(body: &'static str) -> ValidationResponse {
        ValidationResponse::new(StatusCode::OK, HeaderMap::new(), Bytes::from_static(body.as_bytes()))
    }

    #[test]
    fn plain_mode_prefixes_status_line() {
        assert_eq!(
            render_response(&response(r#"{"valid":true}"#), false),
            "HTTP 200 OK\n{\"valid\":true}"
        );
    }

    #[test]
    fn plain_mode_without_body_prints_status_only() {
        assert_eq!(render_response(&response(""), false), "HTTP 200 OK");
    }

    #[test]
    fn json_mode_pretty_prints() {
        assert_eq!(
            render_response(&response(r#"{"valid":true}"#), true),
            "{\n  \"valid\": true\n}"
        );
    }

    #[test]
    fn json_mode_falls_back_to_raw_text() {
        assert_eq!(render_response(&response("plain"), true), "plain");
    }
}
