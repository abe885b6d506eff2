//! The request dispatcher.
//!
//! # Responsibilities
//! - Validate the `/video/{id}` path segment
//! - Honor `forceError` overrides (429, 404) without touching state
//! - Drive the per-id attempt counter and pick 202 vs 307
//! - Answer anything else with the invalid-endpoint body
//!
//! # Design Decisions
//! - Every branch is a deterministic response; handlers are infallible
//! - Forced errors bypass attempt tracking entirely, so a client can probe
//!   error handling mid-sequence without disturbing the count

use axum::{
    extract::{Path, RawQuery, State},
    http::{header, HeaderName, StatusCode, Uri},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::http::server::AppState;

/// Attempts (per id) that answer "retry later" before the redirect.
const RETRIES_BEFORE_REDIRECT: u32 = 2;

/// Header telling the client to skip its delayed-fetch short-circuit.
const DELAYED_FETCH: HeaderName = HeaderName::from_static("delayed-fetch");

/// Handler for `/video/{id}`.
pub async fn video_request(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    RawQuery(query): RawQuery,
) -> Response {
    let Some(id) = parse_video_id(&raw_id) else {
        return invalid_endpoint_response(&raw_id);
    };

    match force_error_param(query.as_deref()) {
        Some("429") => {
            tracing::info!(video_id = id, forced = 429, "Forced rate-limit response");
            (
                StatusCode::TOO_MANY_REQUESTS,
                [(header::RETRY_AFTER, "5")],
                Json(json!({
                    "status": 429,
                    "message": "Too many requests. Try later",
                })),
            )
                .into_response()
        }
        Some("404") => {
            tracing::info!(video_id = id, forced = 404, "Forced not-found response");
            (
                StatusCode::NOT_FOUND,
                Json(json!({
                    "status": 404,
                    "message": "Not found",
                })),
            )
                .into_response()
        }
        // Unrecognized values fall through to the attempt flow, same as no
        // forceError at all.
        _ => attempt_response(&state, id),
    }
}

/// Attempt-tracking flow: count the request, then 202 twice and 307 forever.
fn attempt_response(state: &AppState, id: u16) -> Response {
    let attempt = state.attempts.record(id);
    let url = state.catalog.url_for(id);

    if attempt <= RETRIES_BEFORE_REDIRECT {
        tracing::info!(
            video_id = id,
            attempt,
            url,
            "Retry-later response"
        );
        return (
            StatusCode::ACCEPTED,
            [
                (header::RETRY_AFTER, "40"),
                (DELAYED_FETCH, "no-check"),
            ],
            Json(json!({
                "status": 202,
                "message": "Please retry later",
                "attempt": attempt,
                "videoId": id.to_string(),
            })),
        )
            .into_response();
    }

    tracing::info!(
        video_id = id,
        attempt,
        url,
        "Redirecting to video URL"
    );
    (StatusCode::TEMPORARY_REDIRECT, [(header::LOCATION, url)]).into_response()
}

/// Fallback handler for every path outside `/video/{id}`.
pub async fn invalid_endpoint(uri: Uri) -> Response {
    invalid_endpoint_response(uri.path())
}

fn invalid_endpoint_response(requested: &str) -> Response {
    tracing::warn!(requested = %requested, "Invalid endpoint");
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "error": "Invalid endpoint",
            "message": "Only endpoints /video/1 through /video/100 are available",
        })),
    )
        .into_response()
}

/// First `forceError` value in the query string, if any.
///
/// Lenient by design: malformed pairs and other parameters are skipped,
/// and a repeated `forceError` takes the first value rather than failing
/// the request. Recognized values are plain digits, so no percent-decoding
/// is needed before comparison.
fn force_error_param(query: Option<&str>) -> Option<&str> {
    query?.split('&').find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        (key == "forceError").then_some(value)
    })
}

/// Parse a path segment as a video id.
///
/// Accepts `0`..`100` written as plain decimal with no leading zeros
/// (pattern `^(0|[1-9][0-9]?|100)$`). Everything else is rejected.
fn parse_video_id(segment: &str) -> Option<u16> {
    if segment.is_empty() || segment.len() > 3 {
        return None;
    }
    if !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if segment.len() > 1 && segment.starts_with('0') {
        return None;
    }
    let id: u16 = segment.parse().ok()?;
    (id <= 100).then_some(id)
}
