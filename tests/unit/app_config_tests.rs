/*!
 * Tests for application configuration functionality
 */

use std::time::Duration;

use anyhow::Result;
use derdiedas::app_config::{Config, LogLevel, ProviderConfig, TranslationProvider};
use derdiedas::gender::PossessivePolicy;

use crate::common;

/// Test default configuration values
#[test]
fn test_default_config_withNoParameters_shouldHaveCorrectDefaults() {
    let config = Config::default();

    assert_eq!(config.target_languages, vec!["en".to_string(), "es".to_string()]);
    assert_eq!(config.translation.provider, TranslationProvider::Google);
    assert_eq!(config.translation.common.concurrent_requests, 1);
    assert!(config.translation.common.cache_enabled);
    assert_eq!(config.analysis.possessive_policy, PossessivePolicy::Suffix);
    assert_eq!(config.log_level, LogLevel::Info);

    let ollama = config
        .translation
        .get_provider_config(&TranslationProvider::Ollama)
        .expect("Ollama provider config should exist");
    assert_eq!(ollama.model, "llama3.2:3b");
    assert_eq!(ollama.timeout_secs, 120);
}

#[test]
fn test_config_validation_withDefaults_shouldPass() {
    assert!(Config::default().validate().is_ok());
}

#[test]
fn test_config_validation_withInvalidTarget_shouldFail() {
    let mut config = Config::default();
    config.target_languages = vec!["en".to_string(), "xyz1".to_string()];
    assert!(config.validate().is_err());

    config.target_languages.clear();
    assert!(config.validate().is_err());
}

#[test]
fn test_config_validation_withZeroConcurrency_shouldFail() {
    let mut config = Config::default();
    config.translation.common.concurrent_requests = 0;
    assert!(config.validate().is_err());
}

#[test]
fn test_config_validation_withMissingProviderConfig_shouldFail() {
    let mut config = Config::default();
    config.translation.provider = TranslationProvider::Ollama;
    config.translation.available_providers = vec![ProviderConfig::new(TranslationProvider::Google)];
    assert!(config.validate().is_err());
}

#[test]
fn test_config_validation_withBadThemeColor_shouldFail() {
    let mut config = Config::default();
    config.theme.masculine = "blue".to_string();
    let error = config.validate().unwrap_err();
    assert!(error.to_string().contains("theme"));
}

#[test]
fn test_loadOrCreate_withMissingFile_shouldWriteDefaults() -> Result<()> {
    let dir = common::create_temp_dir()?;
    let path = dir.path().join("conf.json");

    let config = Config::load_or_create(&path)?;
    assert!(path.exists());
    assert_eq!(config.target_languages, Config::default().target_languages);

    let reloaded = Config::load_or_create(&path)?;
    assert_eq!(reloaded.translation.provider, config.translation.provider);
    Ok(())
}

#[test]
fn test_loadOrCreate_withPartialFile_shouldFillDefaults() -> Result<()> {
    let dir = common::create_temp_dir()?;
    let path = common::create_test_file(
        dir.path(),
        "conf.json",
        r##"{
            "target_languages": ["fr"],
            "analysis": { "possessive_policy": "ungendered" },
            "theme": { "plural": "#FFA500" },
            "translation": { "provider": "mock" }
        }"##,
    )?;

    let config = Config::load_or_create(&path)?;
    assert_eq!(config.target_languages, vec!["fr".to_string()]);
    assert_eq!(config.analysis.possessive_policy, PossessivePolicy::Ungendered);
    assert_eq!(config.theme.plural, "#FFA500");
    assert_eq!(config.theme.masculine, "#3B82F6");
    assert_eq!(config.translation.provider, TranslationProvider::Mock);
    assert!(config.validate().is_ok());
    Ok(())
}

#[test]
fn test_loadOrCreate_withMalformedJson_shouldFail() -> Result<()> {
    let dir = common::create_temp_dir()?;
    let path = common::create_test_file(dir.path(), "conf.json", "{ not json")?;
    assert!(Config::load_or_create(&path).is_err());
    Ok(())
}

#[test]
fn test_serviceOptions_shouldMapProviderTimeout() {
    let mut config = Config::default();
    let options = config.translation.service_options();
    assert_eq!(options.timeout, Some(Duration::from_secs(30)));
    assert_eq!(options.concurrent_requests, 1);

    for provider in config.translation.available_providers.iter_mut() {
        provider.timeout_secs = 0;
    }
    assert_eq!(config.translation.service_options().timeout, None);
}

#[test]
fn test_translationProvider_fromStr_shouldBeCaseInsensitive() {
    assert_eq!("Ollama".parse::<TranslationProvider>().ok(), Some(TranslationProvider::Ollama));
    assert_eq!("GOOGLE".parse::<TranslationProvider>().ok(), Some(TranslationProvider::Google));
    assert!("deepl".parse::<TranslationProvider>().is_err());
}

#[test]
fn test_getEndpoint_withEmptyConfiguredEndpoint_shouldUseDefault() {
    let mut config = Config::default();
    config.translation.provider = TranslationProvider::Ollama;
    for provider in config.translation.available_providers.iter_mut() {
        provider.endpoint.clear();
    }
    assert_eq!(config.translation.get_endpoint(), "http://localhost:11434");
}
