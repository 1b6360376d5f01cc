//! API Middleware
//!
//! Operation context, API key authentication and request logging.

use std::net::IpAddr;

use axum::{
    body::Body,
    extract::State,
    http::{HeaderMap, HeaderValue, Request},
    middleware::Next,
    response::{IntoResponse, Response},
};
use uuid::Uuid;

use super::AppState;
use crate::config::hash_api_key;
use crate::domain::OperationContext;
use crate::error::AppError;

pub const CORRELATION_ID_HEADER: &str = "x-correlation-id";

// =========================================================================
// Operation context
// =========================================================================

/// Attach an [`OperationContext`] to the request.
///
/// The correlation id comes from `X-Correlation-Id` when it holds a UUID,
/// otherwise a new one is generated. It is echoed on the response.
pub async fn context_middleware(mut request: Request<Body>, next: Next) -> Response {
    let headers = request.headers();
    let correlation_id = headers
        .get(CORRELATION_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| Uuid::parse_str(s).ok())
        .unwrap_or_else(Uuid::new_v4);

    let mut context = OperationContext::new().with_correlation_id(correlation_id);
    if let Some(ip) = forwarded_ip(headers) {
        context = context.with_client_ip(ip);
    }
    request.extensions_mut().insert(context);

    let mut response = next.run(request).await;
    if let Ok(value) = HeaderValue::from_str(&correlation_id.to_string()) {
        response.headers_mut().insert(CORRELATION_ID_HEADER, value);
    }
    response
}

/// First address of `X-Forwarded-For`, if it parses
fn forwarded_ip(headers: &HeaderMap) -> Option<IpAddr> {
    headers
        .get("X-Forwarded-For")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .and_then(|ip| ip.trim().parse().ok())
}

// =========================================================================
// API Key Authentication Middleware
// =========================================================================

/// Check the X-API-Key header against the configured key digest
pub async fn auth_middleware(
    State(state): State<AppState>,
    request: Request<Body>,
    next: Next,
) -> Result<Response, Response> {
    let api_key = request
        .headers()
        .get("X-API-Key")
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| AppError::MissingApiKey.into_response())?;

    if hash_api_key(api_key) != state.config.api_key_hash {
        let correlation_id = request
            .extensions()
            .get::<OperationContext>()
            .and_then(|ctx| ctx.correlation_id);
        tracing::warn!(correlation_id = ?correlation_id, "Rejected request with invalid API key");
        return Err(AppError::InvalidApiKey.into_response());
    }

    Ok(next.run(request).await)
}

// =========================================================================
// mask_headers_for_logging
// =========================================================================

/// Headers that should be masked in logs
const SENSITIVE_HEADERS: &[&str] = &["x-api-key", "authorization", "cookie", "set-cookie"];

/// Mask sensitive headers for logging
pub fn mask_headers_for_logging(headers: &HeaderMap) -> Vec<(String, String)> {
    headers
        .iter()
        .map(|(name, value)| {
            let masked_value = if SENSITIVE_HEADERS.contains(&name.as_str()) {
                "[REDACTED]".to_string()
            } else {
                value.to_str().unwrap_or("[invalid utf8]").to_string()
            };
            (name.to_string(), masked_value)
        })
        .collect()
}

// =========================================================================
// Request Logging Middleware
// =========================================================================

/// Request logging middleware
pub async fn logging_middleware(request: Request<Body>, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let headers = mask_headers_for_logging(request.headers());
    let (correlation_id, client_ip) = request
        .extensions()
        .get::<OperationContext>()
        .map_or((None, None), |ctx| (ctx.correlation_id, ctx.client_ip));

    let start = std::time::Instant::now();

    tracing::info!(
        method = %method,
        uri = %uri,
        correlation_id = ?correlation_id,
        client_ip = ?client_ip,
        headers = ?headers,
        "Incoming request"
    );

    let response = next.run(request).await;

    tracing::info!(
        method = %method,
        uri = %uri,
        status = %response.status(),
        duration_ms = %start.elapsed().as_millis(),
        correlation_id = ?correlation_id,
        "Request completed"
    );

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_headers_for_logging() {
        let mut headers = HeaderMap::new();
        headers.insert("content-type", "application/json".parse().unwrap());
        headers.insert("x-api-key", "secret-key-12345".parse().unwrap());
        headers.insert("x-correlation-id", "abc".parse().unwrap());

        let masked = mask_headers_for_logging(&headers);
        let value_of = |name: &str| masked.iter().find(|(k, _)| k == name).map(|(_, v)| v.as_str());

        assert_eq!(value_of("x-api-key"), Some("[REDACTED]"));
        assert_eq!(value_of("content-type"), Some("application/json"));
        assert_eq!(value_of("x-correlation-id"), Some("abc"));
    }

    #[test]
    fn test_sensitive_headers_list() {
        assert!(SENSITIVE_HEADERS.contains(&"x-api-key"));
        assert!(SENSITIVE_HEADERS.contains(&"authorization"));
        assert!(!SENSITIVE_HEADERS.contains(&"content-type"));
    }

    #[test]
    fn test_forwarded_ip_takes_first_hop() {
        let mut headers = HeaderMap::new();
        headers.insert("x-forwarded-for", "203.0.113.7, 10.0.0.1".parse().unwrap());
        assert_eq!(forwarded_ip(&headers), Some("203.0.113.7".parse().unwrap()));

        headers.insert("x-forwarded-for", "not-an-ip".parse().unwrap());
        assert_eq!(forwarded_ip(&headers), None);
    }

    #[tokio::test]
    async fn test_context_carries_forwarded_client_ip() {
        use axum::{middleware, routing::get, Extension, Router};
        use tower::util::ServiceExt;

        async fn echo_ip(Extension(context): Extension<OperationContext>) -> String {
            context.client_ip.map(|ip| ip.to_string()).unwrap_or_default()
        }

        let app = Router::new()
            .route("/", get(echo_ip))
            .layer(middleware::from_fn(logging_middleware))
            .layer(middleware::from_fn(context_middleware));

        let request = Request::builder()
            .uri("/")
            .header("X-Forwarded-For", "203.0.113.7")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert!(response.headers().contains_key(CORRELATION_ID_HEADER));
        let body = http_body_util::BodyExt::collect(response.into_body())
            .await
            .unwrap()
            .to_bytes();
        assert_eq!(&body[..], b"203.0.113.7");
    }
}
