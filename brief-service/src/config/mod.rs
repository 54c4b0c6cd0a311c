use crate::prompts::Variant;
use secrecy::Secret;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

/// Default chat-completion API root.
const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

/// Sampling temperature shared by all variants unless overridden.
const DEFAULT_TEMPERATURE: f32 = 0.3;

/// Process-wide settings, read once at startup and never mutated.
#[derive(Debug, Clone)]
pub struct BriefConfig {
    pub common: core_config::Config,
    pub service_name: String,
    pub log_level: String,
    pub otlp_endpoint: Option<String>,
    pub access: AccessConfig,
    pub openai: OpenAiConfig,
    pub models: ModelConfig,
}

#[derive(Debug, Clone, Default)]
pub struct AccessConfig {
    /// Code callers must echo back in `accessCode`. When unset, every
    /// generation request is rejected.
    pub access_code: Option<Secret<String>>,
}

#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    /// Upstream credential. When unset, generation requests fail with a
    /// misconfiguration error after the gate.
    pub api_key: Option<Secret<String>>,
    pub base_url: String,
    /// Client-side request timeout; `None` leaves it to the platform.
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone)]
pub struct ModelConfig {
    /// Model for the clarifying-question variant.
    pub question_model: String,
    /// Model for the generic report variant.
    pub report_model: String,
    /// Model for the airport report variant.
    pub airport_report_model: String,
    pub temperature: f32,
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_OPENAI_BASE_URL.to_string(),
            timeout_secs: None,
        }
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            question_model: "gpt-5.0".to_string(),
            report_model: "gpt-4o".to_string(),
            airport_report_model: "gpt-4o".to_string(),
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}

impl Default for BriefConfig {
    fn default() -> Self {
        Self {
            common: core_config::Config::default(),
            service_name: "brief-service".to_string(),
            log_level: "info".to_string(),
            otlp_endpoint: None,
            access: AccessConfig::default(),
            openai: OpenAiConfig::default(),
            models: ModelConfig::default(),
        }
    }
}

impl BriefConfig {
    pub fn load() -> Result<Self, AppError> {
        let common_config = core_config::Config::load()?;
        let is_prod = env::var("ENVIRONMENT").unwrap_or_else(|_| "dev".to_string()) == "prod";
        let defaults = ModelConfig::default();

        Ok(BriefConfig {
            common: common_config,
            service_name: get_env("SERVICE_NAME", Some("brief-service"), is_prod)?,
            log_level: get_env("LOG_LEVEL", Some("info"), is_prod)?,
            otlp_endpoint: get_optional_env("OTLP_ENDPOINT"),
            access: AccessConfig {
                access_code: get_optional_env("ACCESS_CODE").map(Secret::new),
            },
            openai: OpenAiConfig {
                api_key: get_optional_env("OPENAI_API_KEY").map(Secret::new),
                base_url: get_env("OPENAI_BASE_URL", Some(DEFAULT_OPENAI_BASE_URL), is_prod)?,
                timeout_secs: get_optional_env("OPENAI_TIMEOUT_SECS")
                    .map(|v| v.parse::<u64>())
                    .transpose()
                    .map_err(|e| {
                        AppError::ConfigError(anyhow::anyhow!(
                            "OPENAI_TIMEOUT_SECS must be a whole number of seconds: {}",
                            e
                        ))
                    })?,
            },
            models: ModelConfig {
                question_model: get_env(
                    "BRIEF_QUESTION_MODEL",
                    Some(&defaults.question_model),
                    is_prod,
                )?,
                report_model: get_env("BRIEF_REPORT_MODEL", Some(&defaults.report_model), is_prod)?,
                airport_report_model: get_env(
                    "BRIEF_AIRPORT_REPORT_MODEL",
                    Some(&defaults.airport_report_model),
                    is_prod,
                )?,
                temperature: get_env(
                    "BRIEF_TEMPERATURE",
                    Some(&DEFAULT_TEMPERATURE.to_string()),
                    is_prod,
                )?
                .parse()
                .unwrap_or(DEFAULT_TEMPERATURE),
            },
        })
    }

    /// Get the model that serves the given variant.
    pub fn model_for_variant(&self, variant: Variant) -> &str {
        match variant {
            Variant::ClarifyingQuestion => &self.models.question_model,
            Variant::GenericReport => &self.models.report_model,
            Variant::AirportReport => &self.models.airport_report_model,
        }
    }
}

/// Read a setting that may legitimately be absent. Empty values count as
/// absent.
fn get_optional_env(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.is_empty())
}

fn get_env(key: &str, default: Option<&str>, is_prod: bool) -> Result<String, AppError> {
    match env::var(key) {
        Ok(val) => Ok(val),
        Err(_) => {
            if let Some(def) = default {
                if is_prod {
                    tracing::warn!(key = key, "Using default value in production");
                }
                Ok(def.to_string())
            } else {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required but not set",
                    key
                )))
            }
        }
    }
}
