/*!
 * Governing-gender propagation.
 *
 * A single left-to-right fold over one token sequence. The accumulator is the
 * optional governing gender: set by an article, stamped onto the next noun,
 * cleared by any noun or punctuation token.
 */

use serde::Serialize;

use super::classifier::{classify, LexicalCategory};
use super::resolver::{gender_from_morphology, resolve_gender, PossessivePolicy};
use super::{theme, Gender};
use crate::morphology::TaggedToken;

/// Surface forms that close a noun phrase regardless of their tag
pub const PHRASE_TERMINATORS: [&str; 6] = [",", ".", "!", "?", ";", ":"];

/// A token after classification, resolution and propagation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalyzedToken {
    pub text: String,
    pub category: LexicalCategory,
    pub gender: Gender,

    /// Display color of `gender` in the current theme
    pub color: String,

    /// Articles and personal pronouns
    pub is_article: bool,
    pub is_noun: bool,
}

impl AnalyzedToken {
    fn new(text: &str, category: LexicalCategory) -> Self {
        Self {
            text: text.to_string(),
            category,
            gender: Gender::Default,
            color: theme::current().gender_color(Gender::Default).to_string(),
            is_article: false,
            is_noun: false,
        }
    }

    fn stamp(&mut self, gender: Gender) {
        self.gender = gender;
        self.color = theme::current().gender_color(gender).to_string();
    }

    /// Whether the token renders with a color span
    pub fn is_colored(&self) -> bool {
        self.is_article || self.is_noun
    }
}

/// Whether `token` ends the current noun phrase
pub fn ends_phrase(token: &TaggedToken) -> bool {
    token.is_noun() || token.is_punctuation() || PHRASE_TERMINATORS.contains(&token.text.as_str())
}

/// Transition function of the pass: analyze one token under the current
/// governing gender and return the governing gender for the next token.
pub fn step(
    governing: Option<Gender>,
    token: &TaggedToken,
    policy: PossessivePolicy,
) -> (AnalyzedToken, Option<Gender>) {
    let category = classify(token);
    let mut analyzed = AnalyzedToken::new(&token.text, category);
    let mut next = governing;

    match category {
        c if c.is_article() => {
            let gender = resolve_gender(token, c, policy);
            analyzed.stamp(gender);
            analyzed.is_article = true;
            next = Some(gender);
        }
        LexicalCategory::PersonalPronoun => {
            analyzed.stamp(resolve_gender(token, category, policy));
            analyzed.is_article = true;
        }
        LexicalCategory::Noun => {
            analyzed.is_noun = true;
            analyzed.stamp(governing.unwrap_or_else(|| gender_from_morphology(&token.morph)));
        }
        _ => {}
    }

    if ends_phrase(token) {
        next = None;
    }

    (analyzed, next)
}

/// Run the propagation pass over one token sequence
pub fn propagate(tokens: &[TaggedToken], policy: PossessivePolicy) -> Vec<AnalyzedToken> {
    let (analyzed, _governing) = tokens.iter().fold(
        (Vec::with_capacity(tokens.len()), None),
        |(mut analyzed, governing), token| {
            let (result, next) = step(governing, token, policy);
            analyzed.push(result);
            (analyzed, next)
        },
    );
    analyzed
}
