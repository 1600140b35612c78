use super::{RosterErr, RosterError};
use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;

impl RosterError {
    pub fn status(&self) -> StatusCode {
        use RosterErr as E;
        use StatusCode as SC;
        match self.error {
            E::Multipart(_) | E::SerdeJson(_) => SC::BAD_REQUEST,
            E::DoesNotExist(_) => SC::NOT_FOUND,
            E::InUse(_) => SC::CONFLICT,
            E::Validation(_)
            | E::InvalidReference(_)
            | E::InvalidFile(_)
            | E::InvalidPath(_) => SC::UNPROCESSABLE_ENTITY,
            E::PasswordHash(_) | E::IO(_) | E::Sqlx(_) | E::Migrate(_) => {
                SC::INTERNAL_SERVER_ERROR
            }
        }
    }
}

/// Error response wrapper.
#[derive(Debug, Serialize)]
struct ResponseError<T: Serialize> {
    error_type: ErrorType,
    body: T,
}

impl<T> ResponseError<T>
where
    T: Serialize,
{
    pub fn new(error_type: ErrorType, body: T) -> Self {
        Self { error_type, body }
    }
}

#[derive(Debug, Serialize)]
enum ErrorType {
    Internal,
    Api,
}

impl<T> IntoResponse for ResponseError<T>
where
    T: Serialize,
{
    fn into_response(self) -> axum::response::Response {
        <Json<ResponseError<T>> as IntoResponse>::into_response(Json(self))
    }
}

impl IntoResponse for RosterError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();

        self.print();

        use ErrorType as ET;
        use RosterErr as RE;

        match self.error {
            RE::Validation(errors) => (status, ResponseError::new(ET::Api, errors)).into_response(),

            RE::DoesNotExist(e)
            | RE::InUse(e)
            | RE::InvalidReference(e)
            | RE::InvalidFile(e)
            | RE::InvalidPath(e) => (status, ResponseError::new(ET::Api, e)).into_response(),

            RE::Multipart(e) => (status, ResponseError::new(ET::Api, e.body_text())).into_response(),

            RE::SerdeJson(e) => {
                (status, ResponseError::new(ET::Api, e.to_string())).into_response()
            }

            // Persistence and storage details stay in the logs.
            RE::PasswordHash(_) | RE::IO(_) | RE::Sqlx(_) | RE::Migrate(_) => (
                status,
                ResponseError::new(ET::Internal, "Internal".to_string()),
            )
                .into_response(),
        }
    }
}
