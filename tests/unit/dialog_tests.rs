/*!
 * Tests for dialog segmentation and speaker colors
 */

use derdiedas::dialog::segmenter::parse_line;
use derdiedas::dialog::{rejoin, segment_dialog, DialogRecord, SpeakerColorMap};
use derdiedas::gender::theme::Theme;

use crate::common::SAMPLE_DIALOG;

fn palette(size: usize) -> Vec<String> {
    (0..size).map(|i| format!("#00000{}", i)).collect()
}

#[test]
fn test_parseLine_withSpeakerLabel_shouldSplitNameAndContent() {
    let record = parse_line("Anna: Guten Morgen!");
    assert_eq!(record.speaker.as_deref(), Some("Anna"));
    assert_eq!(record.content, "Guten Morgen!");
    assert!(!record.is_blank);
}

#[test]
fn test_parseLine_withTitleAndUmlaut_shouldKeepWholeName() {
    let record = parse_line("Dr. Müller: Wie geht es Ihnen?");
    assert_eq!(record.speaker.as_deref(), Some("Dr. Müller"));
    assert_eq!(record.content, "Wie geht es Ihnen?");
}

#[test]
fn test_parseLine_withDigitInLabel_shouldNotBeSpeaker() {
    let record = parse_line("Punkt 1: Einkaufen");
    assert_eq!(record.speaker, None);
    assert_eq!(record.content, "Punkt 1: Einkaufen");
}

#[test]
fn test_parseLine_withNoColon_shouldKeepLine() {
    let record = parse_line("Der Hund bellt.");
    assert_eq!(record.speaker, None);
    assert_eq!(record.content, "Der Hund bellt.");
}

#[test]
fn test_parseLine_withEmptyContent_shouldKeepSpeaker() {
    let record = parse_line("Michael:");
    assert_eq!(record.speaker.as_deref(), Some("Michael"));
    assert_eq!(record.content, "");
    assert_eq!(record.to_line(), "Michael:");
}

#[test]
fn test_parseLine_withLabelOfSpaces_shouldNotBeSpeaker() {
    let record = parse_line("   : nichts");
    assert_eq!(record.speaker, None);
}

#[test]
fn test_parseLine_withWhitespaceOnly_shouldBeBlank() {
    assert_eq!(parse_line("  \t"), DialogRecord::blank());
    assert_eq!(parse_line("\r"), DialogRecord::blank());
}

#[test]
fn test_segmentDialog_shouldYieldOneRecordPerLine() {
    let records = segment_dialog(SAMPLE_DIALOG);
    assert_eq!(records.len(), 4);
    assert!(records[1].is_blank);
    assert_eq!(records[2].speaker.as_deref(), Some("Michael"));
}

#[test]
fn test_segmentDialog_withTrailingNewline_shouldKeepFinalBlankLine() {
    let records = segment_dialog("Anna: Hallo\n");
    assert_eq!(records.len(), 2);
    assert!(records[1].is_blank);
}

#[test]
fn test_segmentDialog_withWindowsLineEndings_shouldStripCarriageReturn() {
    let records = segment_dialog("Anna: Hallo\r\nBen: Tschüss\r\n");
    assert_eq!(records[0].content, "Hallo");
    assert_eq!(records[1].content, "Tschüss");
}

#[test]
fn test_rejoin_withoutSpeakers_shouldRoundTrip() {
    let text = "Erste Zeile\nZweite Zeile\n\nVierte Zeile";
    assert_eq!(rejoin(&segment_dialog(text)), text);
}

#[test]
fn test_rejoin_withSpeakersAndBlankLines_shouldKeepLineCount() {
    let text = "Anna: Hallo!\n\nMichael:\nDer Hund bellt.\nDr. Müller: Guten Tag.\n";
    let records = segment_dialog(text);

    assert_eq!(records.len(), 6);
    assert_eq!(rejoin(&records).split('\n').count(), text.split('\n').count());
    assert_eq!(rejoin(&records), "Hallo!\n\n\nDer Hund bellt.\nGuten Tag.\n");

    let lines: Vec<String> = records.iter().map(DialogRecord::to_line).collect();
    assert_eq!(lines.join("\n"), text);
}

#[test]
fn test_speakerColors_withRepeatedSpeaker_shouldKeepFirstColor() {
    let records = segment_dialog("A: eins\nB: zwei\nA: drei");
    let map = SpeakerColorMap::with_palette(&records, &palette(8));

    assert_eq!(map.len(), 2);
    assert_eq!(map.color_for("A"), Some("#000000"));
    assert_eq!(map.color_for("B"), Some("#000001"));
}

#[test]
fn test_speakerColors_withMoreSpeakersThanColors_shouldWrapAround() {
    let text: String = (0..10)
        .map(|i| format!("Sprecher {}: Hallo", ["A", "B", "C", "D", "E", "F", "G", "H", "I", "J"][i]))
        .collect::<Vec<_>>()
        .join("\n");
    let map = SpeakerColorMap::with_palette(&segment_dialog(&text), &palette(8));

    assert_eq!(map.len(), 10);
    assert_eq!(map.color_for("Sprecher I"), map.color_for("Sprecher A"));
    assert_eq!(map.color_for("Sprecher J"), map.color_for("Sprecher B"));
    assert_ne!(map.color_for("Sprecher H"), map.color_for("Sprecher A"));
}

#[test]
fn test_speakerColors_shouldListSpeakersInOrderOfAppearance() {
    let map = SpeakerColorMap::with_palette(&segment_dialog("Zoe: a\nAnna: b\nZoe: c"), &palette(8));
    let names: Vec<&str> = map.speakers().map(|(name, _)| name).collect();
    assert_eq!(names, vec!["Zoe", "Anna"]);
}

#[test]
fn test_speakerColors_withEmptyPalette_shouldAssignNothing() {
    let map = SpeakerColorMap::with_palette(&segment_dialog("A: x"), &[]);
    assert!(map.is_empty());
}

#[test]
fn test_speakerColors_withoutSpeakers_shouldBeEmpty() {
    let map = SpeakerColorMap::from_records(&segment_dialog("Nur Text.\nNoch mehr Text."));
    assert!(map.is_empty());
}

#[test]
fn test_speakerColors_fromRecords_shouldUseThemePalette() {
    let map = SpeakerColorMap::from_records(&segment_dialog(SAMPLE_DIALOG));
    let theme = Theme::default();
    assert_eq!(map.color_for("Anna"), Some(theme.speaker_palette[0].as_str()));
    assert_eq!(map.color_for("Michael"), Some(theme.speaker_palette[1].as_str()));
}
