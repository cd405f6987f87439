/*!
 * Translation provider implementations.
 *
 * This module contains clients for the services that translate German text:
 * - Google: keyless Google Translate web endpoint
 * - Ollama: local LLM server
 * - Mock: deterministic offline provider for tests and dry runs
 */

use std::fmt::Debug;
use std::sync::Arc;

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use log::debug;

use crate::app_config::{TranslationConfig, TranslationProvider};
use crate::errors::ProviderError;

pub mod google;
pub mod mock;
pub mod ollama;

/// Common trait for all translation providers
///
/// Implementations perform exactly one request per call and never retry;
/// failures are reported to the caller, which decides how to present them.
#[async_trait]
pub trait Translator: Send + Sync + Debug {
    /// Translate German `text` into `target_language` (ISO 639-1 code)
    async fn translate(&self, text: &str, target_language: &str) -> Result<String, ProviderError>;

    /// Short provider name for logs
    fn name(&self) -> &str;
}

/// Build the provider selected in the configuration
pub fn build_translator(config: &TranslationConfig) -> Result<Arc<dyn Translator>> {
    let provider_config = config
        .get_active_provider_config()
        .ok_or_else(|| anyhow!("No configuration for provider '{}'", config.provider))?;
    debug!("Using translation provider {}", config.provider.display_name());

    let translator: Arc<dyn Translator> = match config.provider {
        TranslationProvider::Google => Arc::new(google::GoogleTranslate::new(
            config.get_endpoint(),
            provider_config.timeout_secs,
        )?),
        TranslationProvider::Ollama => Arc::new(
            ollama::Ollama::new(config.get_endpoint(), config.get_model(), provider_config.timeout_secs)?
                .with_system_prompt(config.common.system_prompt.clone())
                .with_temperature(config.common.temperature),
        ),
        TranslationProvider::Mock => Arc::new(mock::MockProvider::working()),
    };

    Ok(translator)
}
