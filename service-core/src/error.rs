use axum::{
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Failure outcomes of a request handler.
///
/// Every variant maps to a fixed status and a fixed plain-text body. Causes
/// carried by a variant are for server-side logging only and never reach the
/// client.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Forbidden: invalid or missing access code")]
    Forbidden,

    #[error("Missing required fields")]
    BadRequest,

    /// A server-held credential is missing. Carries the setting name.
    #[error("Server misconfigured: missing {0}")]
    Misconfigured(&'static str),

    /// The upstream API answered with a non-success status. Carries the
    /// operation label.
    #[error("Upstream failure ({0})")]
    UpstreamFailure(&'static str),

    /// Anything unexpected while serving an operation.
    #[error("Internal failure ({operation}): {source}")]
    InternalFailure {
        operation: &'static str,
        #[source]
        source: anyhow::Error,
    },

    #[error("Configuration error: {0}")]
    ConfigError(anyhow::Error),
}

impl AppError {
    pub fn internal(operation: &'static str, source: impl Into<anyhow::Error>) -> Self {
        AppError::InternalFailure {
            operation,
            source: source.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Forbidden => StatusCode::FORBIDDEN,
            AppError::BadRequest => StatusCode::BAD_REQUEST,
            AppError::Misconfigured(_)
            | AppError::UpstreamFailure(_)
            | AppError::InternalFailure { .. }
            | AppError::ConfigError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-facing body. Never includes a cause.
    pub fn public_message(&self) -> String {
        match self {
            AppError::MethodNotAllowed => "Method Not Allowed".to_string(),
            AppError::Forbidden => "Forbidden: invalid or missing access code.".to_string(),
            AppError::BadRequest => "Missing required fields.".to_string(),
            AppError::Misconfigured(key) => format!("Server misconfigured: missing {}", key),
            AppError::UpstreamFailure(operation) => {
                format!("Error from OpenAI API ({})", operation)
            }
            AppError::InternalFailure { operation, .. } => {
                format!("Server error ({})", operation)
            }
            AppError::ConfigError(_) => "Configuration error".to_string(),
        }
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::ConfigError(anyhow::Error::new(err))
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::ConfigError(anyhow::Error::new(err))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        match &self {
            AppError::InternalFailure { operation, source } => {
                tracing::error!(operation = %operation, error = ?source, "Request failed");
            }
            AppError::ConfigError(err) => {
                tracing::error!(error = %err, "Configuration error");
            }
            _ => {}
        }

        (
            status,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            self.public_message(),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_of(err: AppError) -> (StatusCode, String) {
        let response = err.into_response();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn gate_errors_map_to_fixed_bodies() {
        assert_eq!(
            body_of(AppError::MethodNotAllowed).await,
            (StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed".into())
        );
        assert_eq!(
            body_of(AppError::Forbidden).await,
            (
                StatusCode::FORBIDDEN,
                "Forbidden: invalid or missing access code.".into()
            )
        );
        assert_eq!(
            body_of(AppError::BadRequest).await,
            (StatusCode::BAD_REQUEST, "Missing required fields.".into())
        );
    }

    #[tokio::test]
    async fn internal_failure_hides_cause() {
        let err = AppError::internal("report", anyhow::anyhow!("connection reset by peer"));
        let (status, body) = body_of(err).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, "Server error (report)");
    }

    #[tokio::test]
    async fn upstream_failure_names_operation_only() {
        let (status, body) = body_of(AppError::UpstreamFailure("question")).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, "Error from OpenAI API (question)");
    }

    #[test]
    fn errors_are_plain_text() {
        let response = AppError::Misconfigured("OPENAI_API_KEY").into_response();
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/plain; charset=utf-8"
        );
    }
}
