use crate::errors::{
    error::{ErrorResponse, ValidationErrorItem, ValidationErrorResponse},
    service::ServiceError,
};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

#[derive(Debug)]
pub enum HttpError {
    /// Request body could not be read at all (oversized or broken stream).
    /// Keeps the status the extractor chose.
    Rejected(StatusCode, String),
    NotFound(String),
    UnprocessableEntity(Vec<ValidationErrorItem>),
    Internal(String),
}

impl From<ServiceError> for HttpError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::NotFound(msg) => HttpError::NotFound(msg),
            ServiceError::Repo(err) => HttpError::Internal(err.to_string()),
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, msg) = match self {
            HttpError::UnprocessableEntity(detail) => {
                let body = Json(ValidationErrorResponse { detail });
                return (StatusCode::UNPROCESSABLE_ENTITY, body).into_response();
            }
            HttpError::Rejected(status, msg) => (status, msg),
            HttpError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            HttpError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        (status, Json(ErrorResponse { detail: msg })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::RepositoryError;

    #[test]
    fn not_found_service_error_maps_to_404() {
        let err = HttpError::from(ServiceError::NotFound("Product not found".to_string()));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn exhausted_ids_map_to_500() {
        let err = HttpError::from(ServiceError::from(RepositoryError::IdsExhausted));
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn validation_failures_map_to_422() {
        let err = HttpError::UnprocessableEntity(vec![ValidationErrorItem::new(
            &["body", "name"],
            "Name is required",
            "length",
        )]);
        assert_eq!(err.into_response().status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn rejections_keep_their_status() {
        let err = HttpError::Rejected(StatusCode::PAYLOAD_TOO_LARGE, "too big".to_string());
        assert_eq!(err.into_response().status(), StatusCode::PAYLOAD_TOO_LARGE);
    }
}
