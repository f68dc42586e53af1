use super::Resp;
use crate::error::AccessError;
use bytes::Bytes;
use http_body_util::Full;
use hyper::{header, Response, StatusCode};

pub fn status_for(error: &AccessError) -> StatusCode {
    match error {
        AccessError::UnknownAction(_)
        | AccessError::UnknownSubject(_)
        | AccessError::InvalidPermission(_) => StatusCode::BAD_REQUEST,
        AccessError::Session(_) => StatusCode::SERVICE_UNAVAILABLE,
        AccessError::MissingProvider | AccessError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// JSON error response with a uniform shape
/// {
///   "error": "snake_code",
///   "message": "Human readable detail"
/// }
pub fn json_error(error: &AccessError) -> Resp {
    let body = serde_json::json!({
        "error": error.code(),
        "message": error.to_string(),
    });

    let mut resp = Response::new(Full::new(Bytes::from(body.to_string())));
    *resp.status_mut() = status_for(error);
    resp.headers_mut()
        .insert(header::CONTENT_TYPE, header::HeaderValue::from_static("application/json"));
    resp
}
