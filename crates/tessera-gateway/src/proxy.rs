//! Pass-through proxy to the interior services.
//!
//! By the time a request reaches this handler the verifier middleware has
//! either let it through on the allowlist or rewritten it with verified
//! trust headers. This hop only moves bytes.

use axum::{
    body::{Body, to_bytes},
    extract::{Request, State},
    http::header,
    response::Response,
};
use tracing::debug;

use tessera_core::AppError;

use crate::state::AppState;

/// Largest request or response body buffered across the proxy hop.
const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

pub async fn forward(State(state): State<AppState>, req: Request) -> Result<Response, AppError> {
    let path = req.uri().path().to_string();
    let path_and_query = req
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| path.clone());

    let upstream = state.upstreams.upstream_for(&path);
    let url = format!("{upstream}{path_and_query}");
    debug!(%url, "forwarding request upstream");

    let (parts, body) = req.into_parts();
    let body = to_bytes(body, MAX_BODY_BYTES)
        .await
        .map_err(|e| AppError::bad_request(anyhow::anyhow!("unreadable request body: {e}")))?;

    // Host and Content-Length belong to the new connection, not the old one.
    let mut headers = parts.headers;
    headers.remove(header::HOST);
    headers.remove(header::CONTENT_LENGTH);

    let upstream_response = state
        .http
        .request(parts.method, &url)
        .headers(headers)
        .body(body)
        .send()
        .await
        .map_err(|e| AppError::bad_gateway(anyhow::anyhow!("upstream request failed: {e}")))?;

    let status = upstream_response.status();
    let mut response_headers = upstream_response.headers().clone();
    let bytes = upstream_response
        .bytes()
        .await
        .map_err(|e| AppError::bad_gateway(anyhow::anyhow!("upstream response failed: {e}")))?;

    // The upstream body has been collected; framing headers no longer apply.
    response_headers.remove(header::TRANSFER_ENCODING);
    response_headers.remove(header::CONTENT_LENGTH);
    response_headers.remove(header::CONNECTION);

    let mut response = Response::new(Body::from(bytes));
    *response.status_mut() = status;
    *response.headers_mut() = response_headers;
    Ok(response)
}
