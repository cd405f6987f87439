/*!
 * Core translation service implementation.
 *
 * Wraps a provider with the failure policy of the application: every call is
 * bounded by a deadline, failures never propagate and are turned into a
 * visible placeholder in place of the translated content.
 */

use std::sync::Arc;
use std::time::Duration;

use futures::stream::{self, StreamExt};
use log::{debug, info, warn};

use super::cache::TranslationCache;
use crate::dialog::{segment_dialog, DialogRecord};
use crate::errors::{ProviderError, TranslationError};
use crate::language_utils;
use crate::providers::Translator;

/// Prefix of the placeholder emitted when a provider call fails
pub const ERROR_PLACEHOLDER_PREFIX: &str = "Translation error: ";

/// Placeholder text for a failed provider call
pub fn error_placeholder(error: &ProviderError) -> String {
    format!("{}{}", ERROR_PLACEHOLDER_PREFIX, error)
}

/// Runtime options of the translation service
#[derive(Debug, Clone)]
pub struct TranslationOptions {
    /// Deadline per provider call, `None` to wait indefinitely
    pub timeout: Option<Duration>,

    /// Maximum provider calls in flight for one document
    pub concurrent_requests: usize,

    pub cache_enabled: bool,
}

impl Default for TranslationOptions {
    fn default() -> Self {
        Self {
            timeout: Some(Duration::from_secs(30)),
            concurrent_requests: 1,
            cache_enabled: true,
        }
    }
}

/// Translation service for German text
#[derive(Debug, Clone)]
pub struct TranslationService {
    provider: Arc<dyn Translator>,
    cache: TranslationCache,
    options: TranslationOptions,
}

impl TranslationService {
    pub fn new(provider: Arc<dyn Translator>, options: TranslationOptions) -> Self {
        Self {
            provider,
            cache: TranslationCache::new(options.cache_enabled),
            options,
        }
    }

    pub fn cache(&self) -> &TranslationCache {
        &self.cache
    }

    /// Normalize the target code to what providers expect
    fn resolve_target(target_language: &str) -> Result<String, TranslationError> {
        language_utils::normalize_to_part1_or_part2t(target_language)
            .map_err(|_| TranslationError::UnsupportedLanguage(target_language.trim().to_string()))
    }

    /// One provider call under the configured deadline
    async fn call_provider(&self, text: &str, target: &str) -> Result<String, ProviderError> {
        if let Some(cached) = self.cache.get(text, target) {
            return Ok(cached);
        }

        let call = self.provider.translate(text, target);
        let result = match self.options.timeout {
            Some(deadline) => tokio::time::timeout(deadline, call)
                .await
                .unwrap_or_else(|_| Err(ProviderError::Timeout(deadline.as_secs()))),
            None => call.await,
        };

        if let Ok(translation) = &result {
            self.cache.store(text, target, translation);
        }
        result
    }

    /// Translate `text`, substituting the placeholder on failure
    async fn translate_or_placeholder(&self, text: &str, target: &str) -> String {
        match self.call_provider(text, target).await {
            Ok(translation) => translation,
            Err(e) => {
                warn!("{} translation to {} failed: {}", self.provider.name(), target, e);
                error_placeholder(&e)
            }
        }
    }

    /// Translate the whole text in a single provider call.
    ///
    /// Blank input returns an empty string without calling the provider.
    pub async fn translate_text(&self, text: &str, target_language: &str) -> String {
        if text.trim().is_empty() {
            return String::new();
        }
        match Self::resolve_target(target_language) {
            Ok(target) => self.translate_or_placeholder(text, &target).await,
            Err(e) => e.to_string(),
        }
    }

    /// Translate a dialog line by line, keeping speaker names untranslated.
    ///
    /// The output has exactly as many lines as the input.
    pub async fn translate_dialog(&self, text: &str, target_language: &str) -> String {
        if text.trim().is_empty() {
            return String::new();
        }
        match self.translate_dialog_records(text, target_language).await {
            Ok(records) => records
                .iter()
                .map(DialogRecord::to_line)
                .collect::<Vec<_>>()
                .join("\n"),
            Err(e) => e.to_string(),
        }
    }

    /// Segment `text` and translate every record's content, speakers kept as-is
    pub async fn translate_dialog_records(
        &self,
        text: &str,
        target_language: &str,
    ) -> Result<Vec<DialogRecord>, TranslationError> {
        let target = Self::resolve_target(target_language)?;
        let records = segment_dialog(text);
        info!(
            "Translating {} lines to {} with {}",
            records.len(),
            target,
            self.provider.name()
        );

        Ok(self.translate_records(&records, &target).await)
    }

    /// Translate segmented records, one output record per input record, in order
    pub async fn translate_records(&self, records: &[DialogRecord], target: &str) -> Vec<DialogRecord> {
        stream::iter(records)
            .map(|record| self.translate_record(record, target))
            .buffered(self.options.concurrent_requests.max(1))
            .collect()
            .await
    }

    async fn translate_record(&self, record: &DialogRecord, target: &str) -> DialogRecord {
        if record.is_blank {
            return record.clone();
        }
        if record.content.trim().is_empty() {
            return DialogRecord {
                content: String::new(),
                ..record.clone()
            };
        }

        if let Some(speaker) = &record.speaker {
            debug!("Translating line of speaker '{}'", speaker);
        }
        let translated = self.translate_or_placeholder(&record.content, target).await;
        DialogRecord {
            speaker: record.speaker.clone(),
            content: single_line(&translated),
            is_blank: false,
        }
    }
}

/// Collapse line breaks so one translated record stays one output line
pub fn single_line(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
