//! Access and input checks that run before any prompt is rendered.

use crate::config::AccessConfig;
use axum::http::Method;
use secrecy::ExposeSecret;
use service_core::error::AppError;
use service_core::utils::secure_compare;

/// Only POST reaches the pipeline.
pub fn check_method(method: &Method) -> Result<(), AppError> {
    if *method == Method::POST {
        Ok(())
    } else {
        Err(AppError::MethodNotAllowed)
    }
}

/// Match the caller's access code against the server's.
///
/// With no server-side code configured every caller is rejected.
pub fn authorize(access: &AccessConfig, provided: Option<&str>) -> Result<(), AppError> {
    let expected = match &access.access_code {
        Some(code) => code.expose_secret(),
        None => {
            tracing::warn!("ACCESS_CODE is not configured; rejecting request");
            return Err(AppError::Forbidden);
        }
    };

    match provided {
        Some(code) if secure_compare(expected, code) => Ok(()),
        _ => Err(AppError::Forbidden),
    }
}
