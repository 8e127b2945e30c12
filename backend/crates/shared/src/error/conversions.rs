//! Error conversions - From implementations for common error types
//!
//! Provides automatic conversion into [`AppError`] and the HTTP rendering.

use super::app_error::AppError;

// ============================================================================
// serde_json conversions
// ============================================================================

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_syntax() || err.is_data() {
            AppError::bad_request(format!("JSON parse error: {}", err)).with_source(err)
        } else {
            AppError::internal("JSON serialization error").with_source(err)
        }
    }
}

// ============================================================================
// SQLx conversions (feature-gated)
// ============================================================================

#[cfg(feature = "sqlx")]
impl AppError {
    /// Classify a sqlx error without taking ownership (no source attached)
    pub fn classify_sqlx(err: &sqlx::Error) -> AppError {
        match err {
            sqlx::Error::RowNotFound => AppError::not_found("Record not found"),
            sqlx::Error::PoolTimedOut => {
                AppError::service_unavailable("Database connection pool exhausted")
            }
            sqlx::Error::Database(db_err) => {
                // https://www.postgresql.org/docs/current/errcodes-appendix.html
                match db_err.code().as_deref() {
                    Some("23502") => AppError::bad_request("Required field is null"),
                    Some("23505") => AppError::new(
                        super::kind::ErrorKind::Conflict,
                        "Duplicate key value",
                    ),
                    Some("23514") => AppError::unprocessable("Check constraint violation"),
                    Some("42501") => {
                        AppError::new(super::kind::ErrorKind::Forbidden, "Insufficient privilege")
                    }
                    Some("57P01" | "57P02" | "57P03") => {
                        AppError::service_unavailable("Database unavailable")
                    }
                    _ => AppError::internal("Database error"),
                }
            }
            sqlx::Error::Io(_) => AppError::service_unavailable("Database connection error"),
            _ => AppError::internal("Database error"),
        }
    }
}

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::classify_sqlx(&err).with_source(err)
    }
}

// ============================================================================
// Axum conversions (feature-gated)
// ============================================================================

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;
        use axum::http::StatusCode;

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        // RFC 7807 Problem Details for HTTP APIs
        let body = serde_json::json!({
            "type": format!("https://httpstatuses.io/{}", self.status_code()),
            "title": self.kind().as_str(),
            "status": self.status_code(),
            "detail": self.message(),
            "action": self.action(),
        });

        (status, Json(body)).into_response()
    }
}
