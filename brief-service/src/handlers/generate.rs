//! Generation handlers.
//!
//! All three endpoints run the same pipeline: method check, body parse,
//! access check, required-field check, credential check, prompt rendering,
//! one completion call. Only the [`Variant`] differs.

use axum::{
    body::to_bytes,
    extract::{Request, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{Map, Value};
use service_core::error::AppError;
use std::time::Instant;

use super::gate;
use crate::models::IntakeRequest;
use crate::prompts::Variant;
use crate::services::metrics;
use crate::services::providers::{CompletionRequest, ProviderError};
use crate::AppState;

/// Name of the upstream credential, as reported to callers when it is unset.
const UPSTREAM_CREDENTIAL: &str = "OPENAI_API_KEY";

/// Run the pipeline for one request and return the generated text.
///
/// The method is checked before the body is read; the body itself is read
/// without a size limit.
#[tracing::instrument(skip(state, request), fields(variant = %variant))]
pub async fn generate_impl(
    state: &AppState,
    variant: Variant,
    request: Request,
) -> Result<String, AppError> {
    let operation = variant.operation();

    gate::check_method(request.method())?;

    let body = to_bytes(request.into_body(), usize::MAX)
        .await
        .map_err(|e| AppError::internal(operation, e))?;

    let request =
        IntakeRequest::from_body(&body).map_err(|e| AppError::internal(operation, e))?;

    gate::authorize(&state.config.access, request.access_code.as_deref())?;

    let brief = request.into_brief().map_err(|_| AppError::BadRequest)?;

    if !state.provider.is_configured() {
        tracing::error!("Missing {}", UPSTREAM_CREDENTIAL);
        return Err(AppError::Misconfigured(UPSTREAM_CREDENTIAL));
    }

    let prompts = variant.render(&brief);
    let model = state.config.model_for_variant(variant);
    let completion = CompletionRequest::new(
        model,
        prompts.system,
        prompts.user,
        state.config.models.temperature,
    );

    let started = Instant::now();
    let result = state.provider.complete(&completion).await;
    metrics::record_upstream_latency(variant.as_str(), model, started.elapsed().as_secs_f64());

    match result {
        Ok(text) => {
            tracing::info!(model = %model, output_len = text.len(), "Completion received");
            Ok(text)
        }
        Err(err) => {
            metrics::record_upstream_error(variant.as_str(), err.kind());
            Err(map_provider_error(state.provider.name(), operation, err))
        }
    }
}

fn map_provider_error(provider: &str, operation: &'static str, err: ProviderError) -> AppError {
    match err {
        ProviderError::ApiError { status, body } => {
            tracing::error!(
                provider = provider,
                upstream_status = status,
                upstream_body = %body,
                "Completion API error ({})",
                operation
            );
            AppError::UpstreamFailure(operation)
        }
        ProviderError::NotConfigured(msg) => {
            tracing::error!(provider = provider, "{}", msg);
            AppError::Misconfigured(UPSTREAM_CREDENTIAL)
        }
        other => AppError::internal(operation, other),
    }
}

async fn respond(state: &AppState, variant: Variant, request: Request) -> Response {
    let response = match generate_impl(state, variant, request).await {
        Ok(text) => {
            let mut payload = Map::new();
            payload.insert(variant.response_field().to_string(), Value::String(text));
            (StatusCode::OK, Json(Value::Object(payload))).into_response()
        }
        Err(err) => err.into_response(),
    };

    metrics::record_request(variant.as_str(), response.status().as_u16());
    response
}

/// `/api/generate-question`: one clarifying question, as `{"question": ...}`.
pub async fn generate_question(
    State(state): State<AppState>,
    request: Request,
) -> Response {
    respond(&state, Variant::ClarifyingQuestion, request).await
}

/// `/api/generate-report`: generic tech-first report, as `{"report": ...}`.
pub async fn generate_report(
    State(state): State<AppState>,
    request: Request,
) -> Response {
    respond(&state, Variant::GenericReport, request).await
}

/// `/api/generate-airport-report`: airport report informed by the prior
/// clarifying exchange, as `{"report": ...}`.
pub async fn generate_airport_report(
    State(state): State<AppState>,
    request: Request,
) -> Response {
    respond(&state, Variant::AirportReport, request).await
}
