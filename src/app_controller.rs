use std::path::Path;
use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use log::{debug, info};
use parking_lot::Mutex;
use sha2::{Digest, Sha256};
use tokio::io::AsyncReadExt;

use crate::analysis::{render_plain_dialog, AnalyzedLine, GenderAnalyzer};
use crate::app_config::Config;
use crate::dialog::{segment_dialog, SpeakerColorMap};
use crate::gender::theme;
use crate::language_utils;
use crate::morphology::{LexiconTagger, NounLexicon, Tagger};
use crate::providers::{build_translator, Translator};
use crate::render::{escape_html, render_page, PagePanel};
use crate::translation::TranslationService;

// @module: Application controller for colorizing and translating German text

/// Speaker map of the most recently seen document
#[derive(Debug)]
struct CachedSpeakers {
    fingerprint: String,
    speakers: SpeakerColorMap,
}

/// Main application controller
#[derive(Debug)]
pub struct Controller {
    // @field: App configuration
    config: Config,
    analyzer: GenderAnalyzer,
    translator: TranslationService,
    speakers: Mutex<Option<CachedSpeakers>>,
}

/// SHA-256 hex digest of a document
pub fn document_fingerprint(text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    format!("{:x}", hasher.finalize())
}

impl Controller {
    /// Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        let lexicon = match &config.analysis.lexicon_path {
            Some(path) => NounLexicon::load_with_file(path)
                .with_context(|| format!("Failed to load lexicon: {}", path.display()))?,
            None => NounLexicon::builtin(),
        };
        debug!("Noun lexicon has {} entries", lexicon.len());

        let provider = build_translator(&config.translation)?;
        Ok(Self::with_components(config, Arc::new(LexiconTagger::new(lexicon)), provider))
    }

    /// Create a controller around explicit collaborators.
    ///
    /// Installs `config.theme` as the process-wide theme if none is set yet.
    pub fn with_components(config: Config, tagger: Arc<dyn Tagger>, provider: Arc<dyn Translator>) -> Self {
        theme::ensure_installed(&config.theme);
        let analyzer = GenderAnalyzer::new(tagger).with_policy(config.analysis.possessive_policy);
        let translator = TranslationService::new(provider, config.translation.service_options());

        Self {
            config,
            analyzer,
            translator,
            speakers: Mutex::new(None),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Speaker colors for `text`, reused while the document stays the same
    pub fn speaker_colors(&self, text: &str) -> SpeakerColorMap {
        let fingerprint = document_fingerprint(text);
        let mut cached = self.speakers.lock();

        if let Some(entry) = cached.as_ref() {
            if entry.fingerprint == fingerprint {
                return entry.speakers.clone();
            }
        }

        let speakers = SpeakerColorMap::from_records(&segment_dialog(text));
        debug!("Built speaker map with {} speakers", speakers.len());
        *cached = Some(CachedSpeakers {
            fingerprint,
            speakers: speakers.clone(),
        });
        speakers
    }

    /// Token-level analysis of every line
    pub fn analyze(&self, text: &str) -> Vec<AnalyzedLine> {
        self.analyzer.analyze_dialog(text)
    }

    /// Gender-colored dialog markup
    pub fn colorize(&self, text: &str) -> String {
        let speakers = self.speaker_colors(text);
        self.analyzer.colorize_dialog(text, &speakers)
    }

    /// Translate into one language, line by line unless `plain`
    pub async fn translate(&self, text: &str, target_language: &str, plain: bool) -> String {
        if plain {
            self.translator.translate_text(text, target_language).await
        } else {
            self.translator.translate_dialog(text, target_language).await
        }
    }

    /// Full HTML page with the colorized text and every configured translation
    pub async fn render_page(&self, text: &str) -> String {
        let speakers = self.speaker_colors(text);
        let mut panels = vec![PagePanel::new(
            "German with Gender Colors",
            self.analyzer.colorize_dialog(text, &speakers),
        )];

        for target in &self.config.target_languages {
            let name = language_utils::get_language_name(target).unwrap_or_else(|_| target.clone());
            let body = if text.trim().is_empty() {
                String::new()
            } else {
                match self.translator.translate_dialog_records(text, target).await {
                    Ok(records) => render_plain_dialog(&records, &speakers),
                    Err(e) => format!("<div>{}</div>", escape_html(&e.to_string())),
                }
            };
            panels.push(PagePanel::new(format!("{} Translation", name), body));
        }

        let (hits, misses, _) = self.translator.cache().stats();
        info!("Rendered page with {} panels (cache: {} hits, {} misses)", panels.len(), hits, misses);
        render_page(theme::current(), &panels)
    }
}

/// Read the input text from `--text`, a file, or stdin (`-`)
pub async fn read_input(path: Option<&Path>, text: Option<&str>) -> Result<String> {
    if let Some(text) = text {
        return Ok(text.to_string());
    }

    match path {
        Some(path) if path.as_os_str() != "-" => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read input file: {}", path.display())),
        Some(_) => {
            let mut buffer = String::new();
            tokio::io::stdin()
                .read_to_string(&mut buffer)
                .await
                .context("Failed to read stdin")?;
            Ok(buffer)
        }
        None => Err(anyhow!("No input given: pass a file, '-' for stdin, or --text")),
    }
}

/// Write output to a file, or stdout when no path is given
pub async fn write_output(path: Option<&Path>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            tokio::fs::write(path, content)
                .await
                .with_context(|| format!("Failed to write output file: {}", path.display()))?;
            info!("Success: {:?}", path);
        }
        None => println!("{}", content),
    }
    Ok(())
}
