/*!
 * Tests for token, dialog and page markup
 */

use derdiedas::dialog::{segment_dialog, SpeakerColorMap};
use derdiedas::gender::theme::Theme;
use derdiedas::gender::{propagate, PossessivePolicy};
use derdiedas::morphology::{PartOfSpeech, TaggedToken};
use derdiedas::render::{escape_html, render_dialog, render_page, render_tokens, PagePanel, LINE_BREAK};

use crate::common::dog_and_cat_tokens;

#[test]
fn test_renderTokens_withDogAndCat_shouldWrapArticlesAndNouns() {
    let markup = render_tokens(&propagate(&dog_and_cat_tokens(), PossessivePolicy::Suffix));

    assert_eq!(
        markup,
        concat!(
            r#"<span style="color: #3B82F6; font-weight: 700;">Der</span> "#,
            r#"<span style="color: #3B82F6; font-weight: 600;">Hund</span> spielt mit "#,
            r#"<span style="color: #EC4899; font-weight: 700;">der</span> "#,
            r#"<span style="color: #EC4899; font-weight: 600;">Katze</span>."#
        )
    );
}

#[test]
fn test_renderTokens_withPunctuation_shouldNotInsertSpaceBefore() {
    let tokens = vec![
        TaggedToken::new("Ja", PartOfSpeech::Other),
        TaggedToken::punct(","),
        TaggedToken::new("gut", PartOfSpeech::Other),
        TaggedToken::punct("!"),
    ];
    assert_eq!(render_tokens(&propagate(&tokens, PossessivePolicy::Suffix)), "Ja, gut!");
}

#[test]
fn test_renderTokens_withMarkupCharacters_shouldEscape() {
    let tokens = vec![
        TaggedToken::new("<b>", PartOfSpeech::Other),
        TaggedToken::new("&", PartOfSpeech::Other),
    ];
    assert_eq!(render_tokens(&propagate(&tokens, PossessivePolicy::Suffix)), "&lt;b&gt; &amp;");
}

#[test]
fn test_renderTokens_withUnresolvedNoun_shouldStillEmitDefaultSpan() {
    let tokens = vec![TaggedToken::new("Gespenst", PartOfSpeech::Noun)];
    assert_eq!(
        render_tokens(&propagate(&tokens, PossessivePolicy::Suffix)),
        r#"<span style="color: #1F2937; font-weight: 600;">Gespenst</span>"#
    );
}

#[test]
fn test_escapeHtml_withQuotes_shouldEscapeBoth() {
    assert_eq!(escape_html(r#"a "b" 'c'"#), "a &quot;b&quot; &#39;c&#39;");
}

#[test]
fn test_renderDialog_withSpeakersAndBlankLine_shouldEmitBlocks() {
    let records = segment_dialog("Anna: Hallo\n\nEinfach Text");
    let palette = vec!["#111111".to_string()];
    let speakers = SpeakerColorMap::with_palette(&records, &palette);

    let markup = render_dialog(&records, &speakers, escape_html);
    assert_eq!(
        markup,
        format!(
            r#"<div style="margin-bottom: 6px;"><span style="color: #111111; font-weight: 700;">Anna</span>: Hallo</div>{}<div>Einfach Text</div>"#,
            LINE_BREAK
        )
    );
}

#[test]
fn test_renderDialog_withUnknownSpeaker_shouldFallBackToDefaultColor() {
    let records = segment_dialog("Ben: Hallo");
    let markup = render_dialog(&records, &SpeakerColorMap::default(), escape_html);
    assert!(markup.contains(r#"<span style="color: #1F2937; font-weight: 700;">Ben</span>"#));
}

#[test]
fn test_renderDialog_shouldRenderContentThroughCallback() {
    let records = segment_dialog("Anna: eins\nzwei");
    let mut seen = Vec::new();
    render_dialog(&records, &SpeakerColorMap::default(), |content| {
        seen.push(content.to_string());
        String::new()
    });
    assert_eq!(seen, vec!["eins", "zwei"]);
}

#[test]
fn test_renderPage_shouldContainLegendAndEscapedPanelTitles() {
    let panels = vec![
        PagePanel::new("German with Gender Colors", "<div>x</div>"),
        PagePanel::new("English <Translation>", "<div>y</div>"),
    ];
    let page = render_page(&Theme::default(), &panels);

    assert!(page.starts_with("<!DOCTYPE html>"));
    assert!(page.contains("Color Legend"));
    for label in ["Masculine", "Feminine", "Neuter", "Plural"] {
        assert!(page.contains(label));
    }
    assert!(page.contains("English &lt;Translation&gt;"));
    assert!(page.contains("<div>x</div>"));
    assert!(page.contains("<div>y</div>"));
}
