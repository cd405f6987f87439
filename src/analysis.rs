/*!
 * Gender analysis entry points.
 *
 * `GenderAnalyzer` ties the tagger to the propagation pass and the markup
 * renderer. Every call is independent: governing-gender state lives only for
 * the duration of one line and nothing is kept between calls.
 */

use std::sync::Arc;

use log::debug;
use serde::Serialize;

use crate::dialog::{segment_dialog, DialogRecord, SpeakerColorMap};
use crate::gender::{propagate, AnalyzedToken, PossessivePolicy};
use crate::morphology::{LexiconTagger, Tagger};
use crate::render::{escape_html, render_dialog, render_tokens};

/// Analysis result for one dialog line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalyzedLine {
    pub speaker: Option<String>,
    pub tokens: Vec<AnalyzedToken>,
    pub is_blank: bool,
}

/// Tagger plus resolution policy
#[derive(Debug, Clone)]
pub struct GenderAnalyzer {
    tagger: Arc<dyn Tagger>,
    policy: PossessivePolicy,
}

impl Default for GenderAnalyzer {
    fn default() -> Self {
        Self::new(Arc::new(LexiconTagger::default()))
    }
}

impl GenderAnalyzer {
    pub fn new(tagger: Arc<dyn Tagger>) -> Self {
        Self {
            tagger,
            policy: PossessivePolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: PossessivePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> PossessivePolicy {
        self.policy
    }

    /// Analyze one unit of text. Blank input never reaches the tagger.
    pub fn analyze(&self, text: &str) -> Vec<AnalyzedToken> {
        if text.trim().is_empty() {
            return Vec::new();
        }
        let tokens = self.tagger.tag(text);
        debug!("Tagged {} tokens", tokens.len());
        propagate(&tokens, self.policy)
    }

    /// Analyze each dialog line's content separately
    pub fn analyze_dialog(&self, text: &str) -> Vec<AnalyzedLine> {
        if text.trim().is_empty() {
            return Vec::new();
        }
        segment_dialog(text)
            .into_iter()
            .map(|record| AnalyzedLine {
                tokens: self.analyze(&record.content),
                speaker: record.speaker,
                is_blank: record.is_blank,
            })
            .collect()
    }

    /// Gender-colored markup for one unit of text
    pub fn colorize(&self, text: &str) -> String {
        render_tokens(&self.analyze(text))
    }

    /// Gender-colored markup for a dialog, speaker labels colored by `speakers`
    pub fn colorize_dialog(&self, text: &str, speakers: &SpeakerColorMap) -> String {
        if text.trim().is_empty() {
            return String::new();
        }
        let records = segment_dialog(text);
        self.colorize_records(&records, speakers)
    }

    /// Same as `colorize_dialog` for already segmented records
    pub fn colorize_records(&self, records: &[DialogRecord], speakers: &SpeakerColorMap) -> String {
        render_dialog(records, speakers, |content| self.colorize(content))
    }
}

/// Dialog markup for translated records: speaker labels keep their colors,
/// content is plain escaped text and is never re-parsed for labels.
pub fn render_plain_dialog(records: &[DialogRecord], speakers: &SpeakerColorMap) -> String {
    if records.iter().all(|record| record.is_blank) {
        return String::new();
    }
    render_dialog(records, speakers, escape_html)
}
