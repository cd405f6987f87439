/*!
 * Lexicon based tagger for German.
 *
 * A lightweight stand-in for a statistical tagger. Words are found with a
 * Unicode-aware pattern, nouns are recognised through a noun lexicon or by
 * German noun capitalisation, and articles receive Gender/Number features by
 * agreement with the noun that follows them in the same phrase.
 */

use std::collections::HashMap;
use std::path::Path;

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::{GramGender, GramNumber, Morphology, PartOfSpeech, TaggedToken, Tagger};
use crate::errors::AppError;
use crate::gender::classifier::{classify_surface, LexicalCategory};

/// Words (with inner hyphens/apostrophes) or single non-space symbols
static TOKEN_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[\p{L}\p{N}]+(?:[-'][\p{L}\p{N}]+)*|[^\s\p{L}\p{N}]").unwrap()
});

const SENTENCE_TERMINATORS: [&str; 4] = [".", "!", "?", ":"];

/// How far an article looks ahead for the noun it agrees with
const AGREEMENT_WINDOW: usize = 4;

use GramGender::{Feminine as F, Masculine as M, Neuter as N};

/// Built-in singular nouns with their grammatical gender
const SINGULAR_NOUNS: &[(&str, GramGender)] = &[
    ("hund", M), ("katze", F), ("frau", F), ("mann", M), ("kind", N),
    ("buch", N), ("apfel", M), ("garten", M), ("blume", F), ("haus", N),
    ("tag", M), ("stadt", F), ("auto", N), ("tisch", M), ("stuhl", M),
    ("zeitung", F), ("schule", F), ("lehrer", M), ("lehrerin", F), ("freund", M),
    ("freundin", F), ("vater", M), ("mutter", F), ("bruder", M), ("schwester", F),
    ("wasser", N), ("brot", N), ("zug", M), ("bahnhof", M), ("straße", F),
    ("wohnung", F), ("zimmer", N), ("tür", F), ("arbeit", F), ("welt", F),
    ("jahr", N), ("zeit", F), ("woche", F), ("abend", M), ("morgen", M),
    ("nacht", F), ("geld", N), ("ball", M), ("baum", M), ("hand", F),
    ("kopf", M), ("auge", N), ("name", M), ("frage", F), ("antwort", F),
    ("sonne", F), ("mond", M), ("musik", F), ("film", M), ("spiel", N),
    ("land", N), ("kaffee", M), ("tee", M), ("milch", F), ("fisch", M),
    ("vogel", M), ("pferd", N), ("maus", F), ("mädchen", N), ("essen", N),
];

/// Built-in plural forms
const PLURAL_NOUNS: &[&str] = &[
    "kinder", "hunde", "katzen", "frauen", "männer", "bücher", "äpfel", "blumen",
    "häuser", "leute", "eltern", "freunde", "tage", "jahre", "augen", "hände",
    "städte", "autos", "straßen", "fragen",
];

/// One entry of a JSON noun lexicon
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LexiconEntry {
    /// Noun form, matched case-insensitively
    pub form: String,

    /// Grammatical gender, absent for plural-only forms
    #[serde(default)]
    pub gender: Option<GramGender>,

    #[serde(default = "default_number")]
    pub number: GramNumber,
}

fn default_number() -> GramNumber {
    GramNumber::Singular
}

/// Noun forms with known morphology, keyed by lowercase form
#[derive(Debug, Clone, Default)]
pub struct NounLexicon {
    entries: HashMap<String, Morphology>,
}

impl NounLexicon {
    /// The lexicon shipped with the crate
    pub fn builtin() -> Self {
        let mut entries = HashMap::with_capacity(SINGULAR_NOUNS.len() + PLURAL_NOUNS.len());
        for (form, gender) in SINGULAR_NOUNS {
            entries.insert(form.to_string(), Morphology::of(Some(*gender), GramNumber::Singular));
        }
        for form in PLURAL_NOUNS {
            entries.insert(form.to_string(), Morphology::of(None, GramNumber::Plural));
        }
        Self { entries }
    }

    /// Add or replace entries
    pub fn extend(&mut self, extra: impl IntoIterator<Item = LexiconEntry>) {
        for entry in extra {
            self.entries.insert(
                entry.form.to_lowercase(),
                Morphology::of(entry.gender, entry.number),
            );
        }
    }

    /// Parse a JSON array of `LexiconEntry`
    pub fn entries_from_json(json: &str) -> Result<Vec<LexiconEntry>, AppError> {
        serde_json::from_str(json).map_err(|e| AppError::Lexicon(e.to_string()))
    }

    /// Built-in lexicon extended with the entries of a JSON file
    pub fn load_with_file(path: &Path) -> Result<Self, AppError> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| AppError::Lexicon(format!("{}: {}", path.display(), e)))?;
        let extra = Self::entries_from_json(&json)?;
        debug!("Loaded {} lexicon entries from {}", extra.len(), path.display());

        let mut lexicon = Self::builtin();
        lexicon.extend(extra);
        Ok(lexicon)
    }

    pub fn lookup(&self, word: &str) -> Option<&Morphology> {
        self.entries.get(&word.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Rule based German tagger backed by a `NounLexicon`
#[derive(Debug, Clone)]
pub struct LexiconTagger {
    lexicon: NounLexicon,
}

impl Default for LexiconTagger {
    fn default() -> Self {
        Self::new(NounLexicon::builtin())
    }
}

impl LexiconTagger {
    pub fn new(lexicon: NounLexicon) -> Self {
        Self { lexicon }
    }

    fn tag_word(&self, word: &str, sentence_start: bool) -> TaggedToken {
        if !word.chars().any(char::is_alphanumeric) {
            return TaggedToken::punct(word);
        }

        match classify_surface(word) {
            Some(LexicalCategory::PersonalPronoun) => {
                return TaggedToken::new(word, PartOfSpeech::Pronoun);
            }
            Some(_) => return TaggedToken::new(word, PartOfSpeech::Determiner),
            None => {}
        }

        let capitalized = word.chars().next().is_some_and(char::is_uppercase);
        if capitalized {
            if let Some(morph) = self.lexicon.lookup(word) {
                return TaggedToken::new(word, PartOfSpeech::Noun).with_morph(morph.clone());
            }
            if !sentence_start {
                return TaggedToken::new(word, PartOfSpeech::Noun);
            }
        }

        TaggedToken::new(word, PartOfSpeech::Other)
    }
}

/// Copy each determiner's features from the next noun of its phrase
fn agree_determiners(tokens: &mut [TaggedToken]) {
    for i in 0..tokens.len() {
        if tokens[i].pos != PartOfSpeech::Determiner {
            continue;
        }

        let window_end = (i + 1 + AGREEMENT_WINDOW).min(tokens.len());
        let head = tokens[i + 1..window_end]
            .iter()
            .take_while(|t| !t.is_punctuation() && t.pos != PartOfSpeech::Determiner)
            .find(|t| t.is_noun())
            .map(|noun| noun.morph.clone());

        if let Some(morph) = head {
            tokens[i].morph = morph;
        }
    }
}

impl Tagger for LexiconTagger {
    fn tag(&self, text: &str) -> Vec<TaggedToken> {
        let mut tokens = Vec::new();
        let mut sentence_start = true;

        for found in TOKEN_PATTERN.find_iter(text) {
            let word = found.as_str();
            let token = self.tag_word(word, sentence_start);

            // opening quotes and brackets keep the sentence start
            sentence_start = if token.is_punctuation() {
                sentence_start || SENTENCE_TERMINATORS.contains(&word)
            } else {
                false
            };
            tokens.push(token);
        }

        agree_determiners(&mut tokens);
        tokens
    }
}
