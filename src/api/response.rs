use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::gnews::UpstreamReply;

/// Relays an upstream body to the caller as a 200 plain-text response.
///
/// The bytes go out exactly as received, whatever their encoding.
///
/// The upstream status is not carried over: GNews error payloads
/// are forwarded with a 200 like any other body.
pub fn relay(reply: UpstreamReply) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        reply.body,
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;

    #[test]
    fn relay_ignores_upstream_status() {
        let response = relay(UpstreamReply {
            status: reqwest::StatusCode::TOO_MANY_REQUESTS,
            body: Bytes::from_static(br#"{"errors":["quota"]}"#),
        });
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/plain; charset=utf-8"
        );
    }
}
