//! The pseudo-GraphQL endpoint.

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::extract::rejection::BytesRejection;
use axum::http::{Method, header};
use axum::response::{IntoResponse, Response};
use edgechat_core::protocol::ProtocolError;
use tracing::{debug, warn};

use crate::AppState;
use crate::error::AppResult;
use crate::models::DataEnvelope;

/// Plain-text body returned for any non-POST request.
pub const READY_MESSAGE: &str = "GraphQL endpoint ready";

/// `POST *`: decode the envelope, run the operation and wrap the result.
/// Any other method gets the readiness marker. A body that cannot be read
/// (over the size limit, aborted) is reported as an invalid payload.
pub async fn graphql_handler(
    State(state): State<AppState>,
    method: Method,
    body: Result<Bytes, BytesRejection>,
) -> AppResult<Response> {
    if method != Method::POST {
        debug!(%method, "readiness probe");
        return Ok(ready().into_response());
    }

    let body = body.map_err(|rejection| {
        warn!(status = %rejection.status(), "request body rejected: {rejection}");
        ProtocolError::InvalidPayload
    })?;

    let data = state.operations.handle(&body).await?;
    Ok(Json(DataEnvelope { data }).into_response())
}

fn ready() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        READY_MESSAGE,
    )
}
