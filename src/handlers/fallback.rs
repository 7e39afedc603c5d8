use axum::http::{Method, StatusCode, Uri};

/// Fallback for requests no route claims
///
/// Covers unknown paths and known paths hit with an unregistered method.
/// Both answer 404 with an empty body.
pub async fn not_found(method: Method, uri: Uri) -> StatusCode {
    tracing::debug!("No route for {} {}", method, uri.path());
    StatusCode::NOT_FOUND
}
