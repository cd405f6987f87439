/*!
 * Common test utilities for the derdiedas test suite
 */

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;
use tempfile::TempDir;

use derdiedas::app_config::{Config, TranslationProvider};
use derdiedas::morphology::{GramGender, GramNumber, PartOfSpeech, StaticTagger, TaggedToken};

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &Path, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Route library logs to the test harness; safe to call from every test
pub fn init_test_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A short three-line dialog with two speakers and a blank line
pub const SAMPLE_DIALOG: &str = "Anna: Der Hund spielt im Garten.\n\nMichael: Die Katze schläft.\nAnna: Ein Kind lacht.";

/// Config that never touches the network
pub fn offline_config() -> Config {
    let mut config = Config::default();
    config.translation.provider = TranslationProvider::Mock;
    config
}

pub fn det(text: &str, gender: Option<GramGender>, number: GramNumber) -> TaggedToken {
    TaggedToken::new(text, PartOfSpeech::Determiner)
        .with_morph(derdiedas::morphology::Morphology::of(gender, number))
}

pub fn word(text: &str) -> TaggedToken {
    TaggedToken::new(text, PartOfSpeech::Other)
}

/// Tokens of "Der Hund spielt mit der Katze."
pub fn dog_and_cat_tokens() -> Vec<TaggedToken> {
    vec![
        det("Der", Some(GramGender::Masculine), GramNumber::Singular),
        TaggedToken::noun("Hund", Some(GramGender::Masculine), GramNumber::Singular),
        TaggedToken::new("spielt", PartOfSpeech::Verb),
        word("mit"),
        det("der", Some(GramGender::Feminine), GramNumber::Singular),
        TaggedToken::noun("Katze", Some(GramGender::Feminine), GramNumber::Singular),
        TaggedToken::punct("."),
    ]
}

/// Static tagger that knows the dog-and-cat sentence
pub fn dog_and_cat_tagger() -> Arc<StaticTagger> {
    Arc::new(StaticTagger::new().with_sequence("Der Hund spielt mit der Katze.", dog_and_cat_tokens()))
}
