use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;

/// Request body as untyped JSON.
///
/// An empty body reads as `{}`. Anything that is not a JSON object or array
/// is rejected with the `Invalid JSON payload` response; a body over the
/// router's size limit gets 413.
#[derive(Debug, Clone)]
pub struct JsonPayload(pub Value);

#[derive(Debug)]
pub enum PayloadRejection {
    InvalidJson,
    TooLarge,
}

impl IntoResponse for PayloadRejection {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            PayloadRejection::InvalidJson => (StatusCode::BAD_REQUEST, "Invalid JSON payload"),
            PayloadRejection::TooLarge => (StatusCode::PAYLOAD_TOO_LARGE, "Payload too large"),
        };
        (status, Json(serde_json::json!({ "message": message }))).into_response()
    }
}

#[async_trait]
impl<S> FromRequest<S> for JsonPayload
where
    S: Send + Sync,
{
    type Rejection = PayloadRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|e| {
            tracing::warn!(error = %e, status = %e.status(), "request_body_read_failed");
            if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
                PayloadRejection::TooLarge
            } else {
                PayloadRejection::InvalidJson
            }
        })?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self(Value::Object(Default::default())));
        }

        match serde_json::from_slice::<Value>(&bytes) {
            Ok(value @ (Value::Object(_) | Value::Array(_))) => Ok(Self(value)),
            Ok(_) => {
                tracing::warn!("request_body_not_object_or_array");
                Err(PayloadRejection::InvalidJson)
            }
            Err(e) => {
                tracing::warn!(error = %e, "request_body_invalid_json");
                Err(PayloadRejection::InvalidJson)
            }
        }
    }
}
