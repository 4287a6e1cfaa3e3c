use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::error;
use xmpp_srv_check_domain::DomainError;

pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match &self.0 {
            DomainError::InvalidHostname(_) => StatusCode::BAD_REQUEST,
            DomainError::AuthorityUndetermined { .. } => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = match &self.0 {
            DomainError::InvalidHostname(_) | DomainError::AuthorityUndetermined { .. } => {
                self.0.to_string()
            }
            other => {
                error!(error = %other, "Lookup failed unexpectedly");
                "internal error".to_string()
            }
        };

        (
            status,
            Json(json!({ "error": message, "status": self.0.status() })),
        )
            .into_response()
    }
}
