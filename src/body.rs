use crate::config::BodyPolicy;
use crate::error::ApiError;
use axum::http::{header, HeaderMap};
use serde_json::{Map, Value as JsonValue};

/// Whether the request declares an `application/json` body.
///
/// Structured-syntax types such as `application/vnd.api+json` are not JSON here.
pub fn is_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
    else {
        return false;
    };

    let media_type = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    media_type == "application/json"
}

/// Decode a request body into JSON before the handler sees it.
///
/// Bodies that aren't declared JSON, and zero-length bodies, decode to `{}`.
/// A whitespace-only body is not empty and goes through the parser.
/// A malformed JSON body is either replaced by `{}` (lenient) or
/// rejected with `ApiError::MalformedJson` (strict).
pub fn decode_json_body(
    headers: &HeaderMap,
    bytes: &[u8],
    policy: BodyPolicy,
) -> Result<JsonValue, ApiError> {
    if !is_json_content_type(headers) || bytes.is_empty() {
        return Ok(empty_object());
    }

    match serde_json::from_slice::<JsonValue>(bytes) {
        Ok(value) => Ok(value),
        Err(err) => match policy {
            BodyPolicy::Lenient => {
                tracing::warn!("Ignoring malformed JSON body: {}", err);
                Ok(empty_object())
            }
            BodyPolicy::Strict => {
                tracing::info!("Rejecting malformed JSON body: {}", err);
                Err(ApiError::from(err))
            }
        },
    }
}

fn empty_object() -> JsonValue {
    JsonValue::Object(Map::new())
}
