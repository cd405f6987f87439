/*!
 * Token classification against the closed German article and pronoun vocabularies.
 */

use std::collections::HashSet;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::Gender;
use crate::morphology::TaggedToken;

/// Lexical category of a token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LexicalCategory {
    DefiniteArticle,
    IndefiniteArticle,
    NegativeArticle,
    PossessiveArticle,
    PersonalPronoun,
    Noun,
    Other,
}

impl LexicalCategory {
    /// Any of the four article kinds
    pub fn is_article(&self) -> bool {
        matches!(
            self,
            Self::DefiniteArticle
                | Self::IndefiniteArticle
                | Self::NegativeArticle
                | Self::PossessiveArticle
        )
    }
}

pub const DEFINITE_ARTICLES: [&str; 3] = ["der", "die", "das"];

pub const INDEFINITE_ARTICLES: [&str; 6] = ["ein", "eine", "einen", "einem", "einer", "eines"];

pub const NEGATIVE_ARTICLES: [&str; 6] = ["kein", "keine", "keinen", "keinem", "keiner", "keines"];

/// Endings shared by the ein-, kein- and possessive declensions
pub const DECLENSION_SUFFIXES: [&str; 6] = ["", "e", "en", "em", "er", "es"];

/// Person/number marker stems of the possessive articles
pub const POSSESSIVE_STEMS: [&str; 6] = ["mein", "dein", "sein", "ihr", "unser", "euer"];

/// Personal pronouns with their fixed gender label.
///
/// `sie` is always feminine, even when it means "they" or formal "you".
pub const PERSONAL_PRONOUNS: [(&str, Gender); 15] = [
    ("ich", Gender::Default),
    ("du", Gender::Default),
    ("er", Gender::Masculine),
    ("sie", Gender::Feminine),
    ("es", Gender::Neuter),
    ("wir", Gender::Plural),
    ("ihr", Gender::Plural),
    ("mich", Gender::Default),
    ("dich", Gender::Default),
    ("ihn", Gender::Masculine),
    ("uns", Gender::Plural),
    ("euch", Gender::Plural),
    ("mir", Gender::Default),
    ("dir", Gender::Default),
    ("ihm", Gender::Masculine),
];

/// Every stem + ending combination, 36 forms
static POSSESSIVE_ARTICLES: Lazy<HashSet<String>> = Lazy::new(|| {
    POSSESSIVE_STEMS
        .iter()
        .flat_map(|stem| DECLENSION_SUFFIXES.iter().map(move |suffix| format!("{}{}", stem, suffix)))
        .collect()
});

/// Gender of a personal pronoun, matched case-insensitively
pub fn pronoun_gender(text: &str) -> Option<Gender> {
    let lower = text.to_lowercase();
    PERSONAL_PRONOUNS
        .iter()
        .find(|(form, _)| *form == lower)
        .map(|(_, gender)| *gender)
}

/// Closed-vocabulary category of a surface form, if it has one.
///
/// Vocabularies are tried in a fixed order: definite, indefinite, negative,
/// possessive, pronoun. The first match wins, so bare `ihr` is possessive.
pub fn classify_surface(text: &str) -> Option<LexicalCategory> {
    let lower = text.to_lowercase();
    let word = lower.as_str();

    if DEFINITE_ARTICLES.contains(&word) {
        Some(LexicalCategory::DefiniteArticle)
    } else if INDEFINITE_ARTICLES.contains(&word) {
        Some(LexicalCategory::IndefiniteArticle)
    } else if NEGATIVE_ARTICLES.contains(&word) {
        Some(LexicalCategory::NegativeArticle)
    } else if POSSESSIVE_ARTICLES.contains(word) {
        Some(LexicalCategory::PossessiveArticle)
    } else if pronoun_gender(word).is_some() {
        Some(LexicalCategory::PersonalPronoun)
    } else {
        None
    }
}

/// Lexical category of a tagged token
pub fn classify(token: &TaggedToken) -> LexicalCategory {
    match classify_surface(&token.text) {
        Some(category) => category,
        None if token.is_noun() => LexicalCategory::Noun,
        None => LexicalCategory::Other,
    }
}

/// Number of possessive surface forms in the vocabulary
pub fn possessive_vocabulary_size() -> usize {
    POSSESSIVE_ARTICLES.len()
}
