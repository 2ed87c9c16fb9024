//! JSON response bodies
//!
//! axum's `Json` writes compact output; the API answers with indented JSON
//! unless the gateway is configured otherwise.

use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// A JSON body with an explicit status and layout
#[derive(Debug)]
pub struct JsonBody<T> {
    status: StatusCode,
    pretty: bool,
    value: T,
}

impl<T: Serialize> JsonBody<T> {
    /// Indented body with status 200
    pub fn pretty(value: T) -> Self {
        Self {
            status: StatusCode::OK,
            pretty: true,
            value,
        }
    }

    /// Override the status code
    pub fn with_status(mut self, status: StatusCode) -> Self {
        self.status = status;
        self
    }

    /// Choose indented or compact output
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Status this body will be sent with
    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl<T: Serialize> IntoResponse for JsonBody<T> {
    fn into_response(self) -> Response {
        let encoded = if self.pretty {
            serde_json::to_string_pretty(&self.value)
        } else {
            serde_json::to_string(&self.value)
        };

        match encoded {
            Ok(body) => (
                self.status,
                [(
                    header::CONTENT_TYPE,
                    HeaderValue::from_static("application/json"),
                )],
                body,
            )
                .into_response(),
            Err(e) => {
                tracing::error!("Failed to encode response: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_text(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), 64 * 1024)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_pretty_body() {
        let response = JsonBody::pretty(serde_json::json!({"a": 1})).into_response();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            HeaderValue::from_static("application/json")
        );
        assert_eq!(body_text(response).await, "{\n  \"a\": 1\n}");
    }

    #[tokio::test]
    async fn test_compact_body_with_status() {
        let body = JsonBody::pretty(serde_json::json!({"a": 1}))
            .with_pretty(false)
            .with_status(StatusCode::NOT_FOUND);
        assert_eq!(body.status(), StatusCode::NOT_FOUND);
        let response = body.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_text(response).await, "{\"a\":1}");
    }
}
