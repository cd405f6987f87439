/*!
 * Translation of German text through a provider.
 *
 * - `core`: the translation service with dialog-aware name preservation
 * - `cache`: in-memory cache of successful translations
 */

pub use self::cache::TranslationCache;
pub use self::core::{error_placeholder, single_line, TranslationOptions, TranslationService, ERROR_PLACEHOLDER_PREFIX};

pub mod cache;
pub mod core;
