use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use bento_core::Error;
use serde_json::{json, Map, Value};
use tracing::{error, warn};

/// Maps a crate [`Error`] onto the `{error, details?, raw?}` response envelope.
#[derive(Debug)]
pub struct ApiError(pub Error);

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        Self(err)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        StatusCode::from_u16(self.0.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    pub fn body(&self) -> Value {
        let mut body = Map::new();
        body.insert("error".to_string(), json!(self.0.to_string()));
        body.insert("details".to_string(), json!(self.0.kind()));
        if let Error::ModelOutputParse { raw, .. } = &self.0 {
            body.insert("raw".to_string(), json!(raw));
        }
        Value::Object(body)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!("❌ {} ({}): {}", status, self.0.kind(), self.0);
        } else {
            warn!("⚠️ {} ({}): {}", status, self.0.kind(), self.0);
        }
        (status, Json(self.body())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_carries_raw() {
        let err = ApiError(Error::ModelOutputParse {
            reason: "expected value".to_string(),
            raw: "not json".to_string(),
        });
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = err.body();
        assert_eq!(body["raw"], "not json");
        assert_eq!(body["details"], "ModelOutputParseError");
    }

    #[test]
    fn test_input_error() {
        let err = ApiError::from(Error::InvalidInput("content must not be empty".to_string()));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        let body = err.body();
        assert_eq!(body["error"], "Invalid input: content must not be empty");
        assert!(body.get("raw").is_none());
    }
}
