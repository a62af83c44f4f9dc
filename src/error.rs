use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use std::env;
use std::fmt::{self, Debug, Display};

/// Error returned by every fallible operation in the service.
///
/// `code` selects the HTTP status: 1..=99 are internal failures, 100..=199 are
/// validation failures and 200..=299 are authentication failures.
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    pub code: i32,
    pub message: String,
}

impl Error {
    pub fn status(&self) -> StatusCode {
        match self.code {
            1..=99 => StatusCode::INTERNAL_SERVER_ERROR,
            200..=299 => StatusCode::UNAUTHORIZED,
            _ => StatusCode::BAD_REQUEST,
        }
    }

    pub fn is_validation_error(&self) -> bool {
        (100..=199).contains(&self.code)
    }

    pub fn is_unauthorized_error(&self) -> bool {
        (200..=299).contains(&self.code)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code {})", self.message, self.code)
    }
}

impl std::error::Error for Error {}

impl From<env::VarError> for Error {
    fn from(err: env::VarError) -> Self {
        env_var_error(err)
    }
}

impl From<sqlx::Error> for Error {
    fn from(err: sqlx::Error) -> Self {
        database_error(err)
    }
}

impl From<JsonRejection> for Error {
    fn from(rejection: JsonRejection) -> Self {
        invalid_input_error(format!("invalid body: {}", rejection))
    }
}

impl From<QueryRejection> for Error {
    fn from(rejection: QueryRejection) -> Self {
        invalid_input_error(format!("invalid query: {}", rejection))
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status();

        let error_message = if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(code = self.code, "{}", self.message);
            "Internal Server Error"
        } else {
            self.message.as_str()
        };

        let body = Json(json!({
            "code": self.code,
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

pub fn invalid_input_error(message: impl Into<String>) -> Error {
    Error {
        code: 101,
        message: message.into(),
    }
}

pub fn invalid_location_error() -> Error {
    Error {
        code: 102,
        message: "latitude must be within [-90, 90] and longitude within [-180, 180]".into(),
    }
}

pub fn partial_proximity_error() -> Error {
    Error {
        code: 103,
        message: "latitude, longitude and radius must be given together".into(),
    }
}

pub fn unauthorized_error() -> Error {
    Error {
        code: 200,
        message: "missing or invalid API key".into(),
    }
}

pub fn config_error(key: &str, reason: impl Display) -> Error {
    Error {
        code: 1,
        message: format!("configuration error for {}: {}", key, reason),
    }
}

pub fn env_var_error(err: env::VarError) -> Error {
    Error {
        code: 1,
        message: format!("environment variable error: {}", err),
    }
}

pub fn database_error<T: Debug>(err: T) -> Error {
    Error {
        code: 2,
        message: format!("database error: {:?}", err),
    }
}

pub fn unexpected_error(message: impl Into<String>) -> Error {
    Error {
        code: 5,
        message: message.into(),
    }
}

#[test]
fn status_follows_code_range() {
    assert_eq!(invalid_input_error("x").status(), StatusCode::BAD_REQUEST);
    assert_eq!(partial_proximity_error().status(), StatusCode::BAD_REQUEST);
    assert_eq!(unauthorized_error().status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        database_error("boom").status(),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}

#[test]
fn internal_errors_map_to_500() {
    let response = database_error("connection refused").into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
