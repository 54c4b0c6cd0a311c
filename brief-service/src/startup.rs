//! Application startup and lifecycle management.

use crate::config::BriefConfig;
use crate::handlers::{
    generate::{generate_airport_report, generate_question, generate_report},
    health::health_check,
    metrics::metrics,
};
use crate::services::metrics::init_metrics;
use crate::services::providers::openai::OpenAiProvider;
use crate::services::providers::CompletionProvider;
use crate::AppState;
use axum::{
    middleware::from_fn,
    routing::{any, get},
    Router,
};
use service_core::error::AppError;
use service_core::middleware::{request_id_middleware, security_headers_middleware};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

/// Build the HTTP router around the given state.
///
/// Generation routes accept any method so the pipeline can answer non-POST
/// requests with its own plain-text 405.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/metrics", get(metrics))
        .route("/api/generate-question", any(generate_question))
        .route("/api/generate-report", any(generate_report))
        .route("/api/generate-airport-report", any(generate_airport_report))
        .layer(from_fn(security_headers_middleware))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                let request_id = request
                    .headers()
                    .get("x-request-id")
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("-");

                tracing::info_span!(
                    "http_request",
                    request_id = %request_id,
                    method = %request.method(),
                    uri = %request.uri(),
                    version = ?request.version(),
                )
            }),
        )
        .layer(from_fn(request_id_middleware))
        .with_state(state)
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application with the given configuration and the OpenAI
    /// provider.
    pub async fn build(config: BriefConfig) -> Result<Self, AppError> {
        let provider = OpenAiProvider::new(&config.openai)
            .map_err(|e| AppError::ConfigError(anyhow::anyhow!(e)))?;

        if !provider.is_configured() {
            tracing::warn!("OPENAI_API_KEY is not set; generation requests will fail");
        }
        if config.access.access_code.is_none() {
            tracing::warn!("ACCESS_CODE is not set; generation requests will be rejected");
        }

        Self::build_with_provider(config, Arc::new(provider)).await
    }

    /// Build the application around an explicit provider.
    pub async fn build_with_provider(
        config: BriefConfig,
        provider: Arc<dyn CompletionProvider>,
    ) -> Result<Self, AppError> {
        init_metrics();

        // Port 0 = random port for testing
        let address = config.common.address();
        let listener = TcpListener::bind(&address).await.map_err(|e| {
            tracing::error!("Failed to bind HTTP listener to {}: {}", address, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!(
            provider = provider.name(),
            question_model = %config.models.question_model,
            report_model = %config.models.report_model,
            airport_report_model = %config.models.airport_report_model,
            "Brief service listening on port {}",
            port
        );

        let router = build_router(AppState::new(config, provider));

        Ok(Self {
            port,
            listener,
            router,
        })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Run the application until stopped.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
