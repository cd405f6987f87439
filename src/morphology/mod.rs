/*!
 * Morphological tagging contract.
 *
 * The gender engine consumes tokens produced by a tagger; it never looks at
 * raw text itself. A tagger turns text into an ordered sequence of tokens,
 * each carrying its surface form, a coarse part-of-speech tag, and the
 * Gender and Number feature sets.
 *
 * - `TaggedToken`, `PartOfSpeech`, `Morphology`: the token data model
 * - `Tagger`: the collaborator trait
 * - `StaticTagger`: replays pre-tagged tokens (JSON input, tests)
 * - `lexicon`: a built-in rule and lexicon based tagger for German
 */

use std::collections::HashMap;
use std::fmt::Debug;

use serde::{Deserialize, Serialize};

pub mod lexicon;

pub use self::lexicon::{LexiconEntry, LexiconTagger, NounLexicon};

/// Grammatical gender feature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GramGender {
    Masculine,
    Feminine,
    Neuter,
}

/// Grammatical number feature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GramNumber {
    Singular,
    Plural,
}

/// Coarse part-of-speech tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartOfSpeech {
    Noun,
    ProperNoun,
    Determiner,
    Pronoun,
    Verb,
    Punctuation,
    Other,
}

/// Gender and Number feature sets of a token.
///
/// An empty set means the tagger reported no value ("none").
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Morphology {
    #[serde(default)]
    pub gender: Vec<GramGender>,

    #[serde(default)]
    pub number: Vec<GramNumber>,
}

impl Morphology {
    /// Morphology with no features at all
    pub fn none() -> Self {
        Self::default()
    }

    /// Morphology with a single gender and number
    pub fn of(gender: Option<GramGender>, number: GramNumber) -> Self {
        Self {
            gender: gender.into_iter().collect(),
            number: vec![number],
        }
    }

    pub fn has_gender(&self, gender: GramGender) -> bool {
        self.gender.contains(&gender)
    }

    pub fn has_number(&self, number: GramNumber) -> bool {
        self.number.contains(&number)
    }

    pub fn is_plural(&self) -> bool {
        self.has_number(GramNumber::Plural)
    }

    pub fn is_empty(&self) -> bool {
        self.gender.is_empty() && self.number.is_empty()
    }
}

/// A single token as produced by a tagger
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedToken {
    /// Surface text exactly as it appears in the input
    pub text: String,

    /// Coarse part of speech
    pub pos: PartOfSpeech,

    /// Gender and Number features
    #[serde(default)]
    pub morph: Morphology,
}

impl TaggedToken {
    pub fn new(text: impl Into<String>, pos: PartOfSpeech) -> Self {
        Self {
            text: text.into(),
            pos,
            morph: Morphology::none(),
        }
    }

    /// Attach morphological features
    pub fn with_morph(mut self, morph: Morphology) -> Self {
        self.morph = morph;
        self
    }

    /// Convenience constructor for a punctuation token
    pub fn punct(text: impl Into<String>) -> Self {
        Self::new(text, PartOfSpeech::Punctuation)
    }

    /// Convenience constructor for a noun with known features
    pub fn noun(text: impl Into<String>, gender: Option<GramGender>, number: GramNumber) -> Self {
        Self::new(text, PartOfSpeech::Noun).with_morph(Morphology::of(gender, number))
    }

    pub fn is_noun(&self) -> bool {
        self.pos == PartOfSpeech::Noun
    }

    pub fn is_punctuation(&self) -> bool {
        self.pos == PartOfSpeech::Punctuation
    }
}

/// The morphology collaborator.
///
/// Implementations must behave as a pure function of the input text.
pub trait Tagger: Send + Sync + Debug {
    /// Split `text` into tagged tokens, in order
    fn tag(&self, text: &str) -> Vec<TaggedToken>;
}

/// Tagger that replays token sequences registered for exact input strings.
///
/// Unknown inputs produce no tokens.
#[derive(Debug, Clone, Default)]
pub struct StaticTagger {
    sequences: HashMap<String, Vec<TaggedToken>>,
}

impl StaticTagger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the token sequence returned for `text`
    pub fn with_sequence(mut self, text: impl Into<String>, tokens: Vec<TaggedToken>) -> Self {
        self.sequences.insert(text.into(), tokens);
        self
    }

    /// Load sequences from a JSON object mapping line text to token arrays
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let sequences: HashMap<String, Vec<TaggedToken>> = serde_json::from_str(json)?;
        Ok(Self { sequences })
    }
}

impl Tagger for StaticTagger {
    fn tag(&self, text: &str) -> Vec<TaggedToken> {
        self.sequences.get(text).cloned().unwrap_or_default()
    }
}
