use crate::body::decode_json_body;
use crate::error::{ApiError, ErrorResponse};
use crate::routes;
use crate::state::AppState;
use axum::{body::Bytes, extract::State, http::HeaderMap};

/// GET /puppies handler
#[utoipa::path(
    get,
    path = routes::PUPPIES,
    responses(
        (status = 200, description = "Fixed greeting", body = String, content_type = "text/plain")
    ),
    tag = "puppies"
)]
pub async fn get_puppies() -> &'static str {
    routes::GET_PUPPIES_REPLY
}

/// GET /puppiezzzz handler
///
/// A separate route from `/puppies`; paths are matched exactly.
#[utoipa::path(
    get,
    path = routes::PUPPIEZZZZ,
    responses(
        (status = 200, description = "Fixed greeting", body = String, content_type = "text/plain")
    ),
    tag = "puppies"
)]
pub async fn get_puppiezzzz() -> &'static str {
    routes::GET_PUPPIEZZZZ_REPLY
}

/// POST /puppies handler - Log the JSON body and reply
///
/// The body is decoded according to the configured body policy and logged.
/// Its content never changes the reply.
#[utoipa::path(
    post,
    path = routes::PUPPIES,
    request_body = serde_json::Value,
    responses(
        (status = 200, description = "Fixed greeting", body = String, content_type = "text/plain"),
        (status = 400, description = "Malformed JSON body (strict body policy only)", body = ErrorResponse)
    ),
    tag = "puppies"
)]
pub async fn post_puppies(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<&'static str, ApiError> {
    let payload = decode_json_body(&headers, &body, state.config.body_policy)?;

    tracing::info!(body = %payload, "POST /puppies");
    Ok(routes::POST_PUPPIES_REPLY)
}

/// PUT /puppies handler
#[utoipa::path(
    put,
    path = routes::PUPPIES,
    responses(
        (status = 200, description = "Fixed greeting", body = String, content_type = "text/plain")
    ),
    tag = "puppies"
)]
pub async fn put_puppies() -> &'static str {
    routes::PUT_PUPPIES_REPLY
}

/// DELETE /puppies handler
#[utoipa::path(
    delete,
    path = routes::PUPPIES,
    responses(
        (status = 200, description = "Fixed greeting", body = String, content_type = "text/plain")
    ),
    tag = "puppies"
)]
pub async fn delete_puppies() -> &'static str {
    routes::DELETE_PUPPIES_REPLY
}
