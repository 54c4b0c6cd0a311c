pub mod config;
pub mod handlers;
pub mod models;
pub mod prompts;
pub mod services;
pub mod startup;

use config::BriefConfig;
use services::providers::CompletionProvider;
use std::sync::Arc;

/// Shared application state. Immutable for the life of the process.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<BriefConfig>,
    pub provider: Arc<dyn CompletionProvider>,
}

impl AppState {
    pub fn new(config: BriefConfig, provider: Arc<dyn CompletionProvider>) -> Self {
        Self {
            config: Arc::new(config),
            provider,
        }
    }
}
