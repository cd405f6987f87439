/*!
 * Tests for the gender analyzer and the built-in lexicon tagger
 */

use std::sync::Arc;

use derdiedas::analysis::{render_plain_dialog, GenderAnalyzer};
use derdiedas::dialog::{segment_dialog, DialogRecord, SpeakerColorMap};
use derdiedas::gender::{Gender, PossessivePolicy};
use derdiedas::morphology::{LexiconEntry, LexiconTagger, NounLexicon, StaticTagger, Tagger};

use crate::common::{dog_and_cat_tagger, SAMPLE_DIALOG};

fn genders_of(analyzer: &GenderAnalyzer, text: &str) -> Vec<(String, Gender)> {
    analyzer
        .analyze(text)
        .into_iter()
        .map(|t| (t.text, t.gender))
        .collect()
}

#[test]
fn test_analyze_withStaticTagger_shouldResolveDogAndCat() {
    let analyzer = GenderAnalyzer::new(dog_and_cat_tagger());
    let genders = genders_of(&analyzer, "Der Hund spielt mit der Katze.");

    assert_eq!(genders[0], ("Der".to_string(), Gender::Masculine));
    assert_eq!(genders[1], ("Hund".to_string(), Gender::Masculine));
    assert_eq!(genders[4], ("der".to_string(), Gender::Feminine));
    assert_eq!(genders[5], ("Katze".to_string(), Gender::Feminine));
}

#[test]
fn test_analyze_withLexiconTagger_shouldResolveSameSentence() {
    let analyzer = GenderAnalyzer::default();
    let genders = genders_of(&analyzer, "Der Hund spielt mit der Katze.");

    assert_eq!(genders[0].1, Gender::Masculine);
    assert_eq!(genders[1].1, Gender::Masculine);
    assert_eq!(genders[4].1, Gender::Feminine);
    assert_eq!(genders[5].1, Gender::Feminine);
    assert_eq!(genders[6].1, Gender::Default);
}

#[test]
fn test_analyze_withLexiconTaggerPlural_shouldResolvePlural() {
    let analyzer = GenderAnalyzer::default();
    let genders = genders_of(&analyzer, "Die Kinder spielen.");
    assert_eq!(genders[0].1, Gender::Plural);
    assert_eq!(genders[1].1, Gender::Plural);
}

#[test]
fn test_analyze_withNeuterDative_shouldResolveEinemAsNeuter() {
    let analyzer = GenderAnalyzer::default();
    let genders = genders_of(&analyzer, "Sie spielt mit einem Kind.");
    assert_eq!(genders[0].1, Gender::Feminine);
    assert_eq!(genders[3], ("einem".to_string(), Gender::Neuter));
    assert_eq!(genders[4], ("Kind".to_string(), Gender::Neuter));
}

#[test]
fn test_analyze_withBlankInput_shouldSkipTagger() {
    let analyzer = GenderAnalyzer::new(Arc::new(StaticTagger::new()));
    assert!(analyzer.analyze("   \n").is_empty());
    assert_eq!(analyzer.colorize(""), "");
    assert!(analyzer.analyze_dialog("").is_empty());
}

#[test]
fn test_analyze_repeatedCalls_shouldNotShareState() {
    let analyzer = GenderAnalyzer::default();
    // a dangling article at the end of one call must not govern the next call's noun
    let _ = analyzer.analyze("Ich sehe das");
    let genders = genders_of(&analyzer, "Katze schläft.");
    assert_eq!(genders[0].1, Gender::Feminine);
}

#[test]
fn test_analyzeDialog_shouldAnalyzeContentWithoutLabel() {
    let analyzer = GenderAnalyzer::default();
    let lines = analyzer.analyze_dialog(SAMPLE_DIALOG);

    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0].speaker.as_deref(), Some("Anna"));
    assert_eq!(lines[0].tokens[0].text, "Der");
    assert!(lines[1].is_blank);
    assert!(lines[1].tokens.is_empty());
}

#[test]
fn test_colorizeDialog_shouldColorSpeakersAndContent() {
    let analyzer = GenderAnalyzer::default();
    let speakers = SpeakerColorMap::from_records(&segment_dialog(SAMPLE_DIALOG));
    let markup = analyzer.colorize_dialog(SAMPLE_DIALOG, &speakers);

    let anna = speakers.color_for("Anna").map(str::to_string).unwrap_or_default();
    assert!(markup.contains(&format!(r#"<span style="color: {}; font-weight: 700;">Anna</span>: "#, anna)));
    assert!(markup.contains(r#"<span style="color: #EC4899; font-weight: 700;">Die</span>"#));
    assert!(markup.contains("<br>"));
    assert_eq!(markup.matches("<div").count(), 3);
}

#[test]
fn test_renderPlainDialog_shouldReuseSpeakerColorsWithoutGenderSpans() {
    let speakers = SpeakerColorMap::from_records(&segment_dialog(SAMPLE_DIALOG));
    let markup = render_plain_dialog(&segment_dialog("Anna: The dog plays.\nMichael: <ok>"), &speakers);

    let anna = speakers.color_for("Anna").map(str::to_string).unwrap_or_default();
    assert!(markup.contains(&format!("color: {}", anna)));
    assert!(markup.contains("The dog plays."));
    assert!(markup.contains("&lt;ok&gt;"));
    assert!(!markup.contains("font-weight: 600"));
}

#[test]
fn test_renderPlainDialog_withLabelLikeContent_shouldNotAddSpeakerSpan() {
    let records = vec![DialogRecord {
        speaker: None,
        content: "Translation error: API responded with error: 500".to_string(),
        is_blank: false,
    }];
    let markup = render_plain_dialog(&records, &SpeakerColorMap::default());

    assert_eq!(markup, "<div>Translation error: API responded with error: 500</div>");
    assert!(!markup.contains("font-weight: 700"));
}

#[test]
fn test_withPolicy_shouldChangePossessiveResolution() {
    let analyzer = GenderAnalyzer::default().with_policy(PossessivePolicy::Ungendered);
    assert_eq!(analyzer.policy(), PossessivePolicy::Ungendered);
    let genders = genders_of(&analyzer, "Das ist meine Katze.");
    assert_eq!(genders[2], ("meine".to_string(), Gender::Default));
}

#[test]
fn test_lexiconTagger_withCustomEntries_shouldTagNewNoun() {
    let mut lexicon = NounLexicon::builtin();
    lexicon.extend(vec![LexiconEntry {
        form: "Gespenst".to_string(),
        gender: Some(derdiedas::morphology::GramGender::Neuter),
        number: derdiedas::morphology::GramNumber::Singular,
    }]);
    let tagger = LexiconTagger::new(lexicon);
    let tokens = tagger.tag("Gespenst");
    assert!(tokens[0].is_noun());

    let analyzer = GenderAnalyzer::new(Arc::new(tagger));
    assert_eq!(genders_of(&analyzer, "Gespenst")[0].1, Gender::Neuter);
}
