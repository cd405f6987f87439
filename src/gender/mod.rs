/*!
 * Grammatical gender resolution for German text.
 *
 * - `classifier`: closed-vocabulary lexical categories
 * - `resolver`: gender label of an article or pronoun token
 * - `propagation`: left-to-right pass carrying an article's gender to its noun
 * - `theme`: read-only color configuration shared by all renderings
 */

use std::fmt;

use serde::{Deserialize, Serialize};

pub mod classifier;
pub mod propagation;
pub mod resolver;
pub mod theme;

pub use self::classifier::{classify, LexicalCategory};
pub use self::propagation::{propagate, AnalyzedToken};
pub use self::resolver::{resolve_gender, PossessivePolicy};
pub use self::theme::Theme;

/// Gender label attached to an analyzed token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Masculine,
    Feminine,
    Neuter,
    Plural,
    /// Not grammatically gendered, or unresolved
    #[default]
    Default,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Masculine => "masculine",
            Self::Feminine => "feminine",
            Self::Neuter => "neuter",
            Self::Plural => "plural",
            Self::Default => "default",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
