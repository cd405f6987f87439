/*!
 * Gender resolution for articles and personal pronouns.
 *
 * Surface forms are ambiguous (`der` is masculine nominative or feminine
 * dative/genitive, `einem` is masculine or neuter); the tagger's Gender and
 * Number feature sets decide between the readings.
 */

use serde::{Deserialize, Serialize};

use super::classifier::{pronoun_gender, LexicalCategory, POSSESSIVE_STEMS};
use super::Gender;
use crate::morphology::{GramGender, Morphology, TaggedToken};

/// How possessive articles (`mein`, `deine`, `unserem`, ...) are resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PossessivePolicy {
    /// Resolve by declension ending, like `ein`/`kein`
    #[default]
    Suffix,
    /// Treat every singular possessive as ungendered
    Ungendered,
}

/// Resolve the gender label of a classified article or pronoun token.
///
/// Pure function of its inputs. Tokens of any other category resolve to
/// `Gender::Default`.
pub fn resolve_gender(token: &TaggedToken, category: LexicalCategory, policy: PossessivePolicy) -> Gender {
    if category == LexicalCategory::PersonalPronoun {
        return pronoun_gender(&token.text).unwrap_or_default();
    }
    if !category.is_article() {
        return Gender::Default;
    }

    let morph = &token.morph;
    if morph.is_plural() {
        return Gender::Plural;
    }

    let lower = token.text.to_lowercase();
    match category {
        LexicalCategory::DefiniteArticle => resolve_definite(&lower, morph),
        LexicalCategory::IndefiniteArticle => strip_stem(&lower, &["ein"])
            .map_or(Gender::Default, |suffix| resolve_by_suffix(suffix, morph)),
        LexicalCategory::NegativeArticle => strip_stem(&lower, &["kein"])
            .map_or(Gender::Default, |suffix| resolve_by_suffix(suffix, morph)),
        LexicalCategory::PossessiveArticle => match policy {
            PossessivePolicy::Ungendered => Gender::Default,
            PossessivePolicy::Suffix => strip_stem(&lower, &POSSESSIVE_STEMS)
                .map_or(Gender::Default, |suffix| resolve_by_suffix(suffix, morph)),
        },
        _ => Gender::Default,
    }
}

fn resolve_definite(lower: &str, morph: &Morphology) -> Gender {
    match lower {
        "der" if morph.has_gender(GramGender::Masculine) => Gender::Masculine,
        "der" if morph.has_gender(GramGender::Feminine) => Gender::Feminine,
        "der" => Gender::Masculine,
        "die" => Gender::Feminine,
        "das" => Gender::Neuter,
        _ => Gender::Default,
    }
}

/// Ending left after removing the first matching stem
fn strip_stem<'a>(word: &'a str, stems: &[&str]) -> Option<&'a str> {
    stems.iter().find_map(|stem| word.strip_prefix(stem))
}

/// Shared ein-/kein-/possessive declension rules
fn resolve_by_suffix(suffix: &str, morph: &Morphology) -> Gender {
    match suffix {
        "" | "en" | "em" | "es" if morph.has_gender(GramGender::Neuter) => Gender::Neuter,
        "" | "en" | "em" | "es" => Gender::Masculine,
        "e" => Gender::Feminine,
        "er" if morph.has_gender(GramGender::Feminine) => Gender::Feminine,
        "er" => Gender::Masculine,
        _ => Gender::Default,
    }
}

/// Gender of a noun inferred from its own features, without article context.
///
/// Priority: plural, masculine, feminine, neuter.
pub fn gender_from_morphology(morph: &Morphology) -> Gender {
    if morph.is_plural() {
        Gender::Plural
    } else if morph.has_gender(GramGender::Masculine) {
        Gender::Masculine
    } else if morph.has_gender(GramGender::Feminine) {
        Gender::Feminine
    } else if morph.has_gender(GramGender::Neuter) {
        Gender::Neuter
    } else {
        Gender::Default
    }
}
