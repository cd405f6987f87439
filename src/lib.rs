/*!
 * # DerDieDas - German gender colorizer and dialog translator
 *
 * A Rust library that colors German articles and nouns by grammatical gender
 * and translates dialogs while keeping speaker names intact.
 *
 * ## Features
 *
 * - Gender resolution for definite, indefinite, negative and possessive articles
 * - Propagation of an article's gender to the noun it governs
 * - Consistent per-speaker colors across every rendering of a document
 * - Line-by-line dialog translation through pluggable providers:
 *   - Google Translate web endpoint
 *   - Ollama (local LLM)
 * - Full HTML page with the colorized text, translations and a legend
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `morphology`: Tokens, morphological features and the built-in lexicon tagger
 * - `gender`: Gender analysis:
 *   - `gender::classifier`: Closed-class vocabularies of articles and pronouns
 *   - `gender::resolver`: Per-token gender resolution
 *   - `gender::propagation`: Article-to-noun propagation pass
 *   - `gender::theme`: Display colors
 * - `dialog`: Speaker line segmentation and speaker colors
 * - `render`: HTML markup for tokens, dialogs and full pages
 * - `analysis`: Analyzer tying tagger, propagation and rendering together
 * - `translation`: Dialog-aware translation service and cache
 * - `providers`: Client implementations for translation providers
 * - `app_config`: Configuration management
 * - `app_controller`: Main application controller
 * - `language_utils`: ISO language code utilities
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod analysis;
pub mod app_config;
pub mod app_controller;
pub mod dialog;
pub mod errors;
pub mod gender;
pub mod language_utils;
pub mod morphology;
pub mod providers;
pub mod render;
pub mod translation;

// Re-export main types for easier usage
pub use analysis::{AnalyzedLine, GenderAnalyzer};
pub use app_config::Config;
pub use dialog::{segment_dialog, DialogRecord, SpeakerColorMap};
pub use errors::{AppError, ProviderError, TranslationError};
pub use gender::{propagate, resolve_gender, AnalyzedToken, Gender, PossessivePolicy};
pub use language_utils::{get_language_name, language_codes_match, normalize_to_part1_or_part2t};
pub use morphology::{LexiconTagger, TaggedToken, Tagger};
pub use translation::TranslationService;
