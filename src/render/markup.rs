/*!
 * Inline markup for analyzed tokens and dialog records.
 *
 * Output only ever contains `span`, `div` and `br` elements with inline color
 * and weight styles; all text is HTML-escaped.
 */

use crate::dialog::{DialogRecord, SpeakerColorMap};
use crate::gender::{theme, AnalyzedToken};

/// Tokens that attach to the preceding word without a space
pub const NO_SPACE_BEFORE: [&str; 8] = [",", ".", "!", "?", ";", ":", "'", "\""];

/// Font weight of colored articles and pronouns
pub const ARTICLE_WEIGHT: u16 = 700;

/// Font weight of colored nouns
pub const NOUN_WEIGHT: u16 = 600;

/// Marker emitted for a blank dialog line
pub const LINE_BREAK: &str = "<br>";

/// Escape text for embedding in HTML content or attribute values
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn styled_span(text: &str, color: &str, weight: u16) -> String {
    format!(
        r#"<span style="color: {}; font-weight: {};">{}</span>"#,
        color,
        weight,
        escape_html(text)
    )
}

fn render_token(token: &AnalyzedToken) -> String {
    if token.is_article {
        styled_span(&token.text, &token.color, ARTICLE_WEIGHT)
    } else if token.is_noun {
        styled_span(&token.text, &token.color, NOUN_WEIGHT)
    } else {
        escape_html(&token.text)
    }
}

/// Render a token sequence as one line of markup
pub fn render_tokens(tokens: &[AnalyzedToken]) -> String {
    let mut markup = String::new();
    for (i, token) in tokens.iter().enumerate() {
        if i > 0 && !NO_SPACE_BEFORE.contains(&token.text.as_str()) {
            markup.push(' ');
        }
        markup.push_str(&render_token(token));
    }
    markup
}

/// Render dialog records as blocks, one per line.
///
/// `render_content` turns a record's content into markup; it decides whether
/// the content is gender-colored or plain.
pub fn render_dialog<F>(records: &[DialogRecord], speakers: &SpeakerColorMap, mut render_content: F) -> String
where
    F: FnMut(&str) -> String,
{
    let fallback = theme::current().default_color.as_str();

    records
        .iter()
        .map(|record| {
            if record.is_blank {
                return LINE_BREAK.to_string();
            }
            let content = render_content(&record.content);
            match &record.speaker {
                Some(speaker) => {
                    let color = speakers.color_for(speaker).unwrap_or(fallback);
                    format!(
                        r#"<div style="margin-bottom: 6px;"><span style="color: {}; font-weight: {};">{}</span>: {}</div>"#,
                        color,
                        ARTICLE_WEIGHT,
                        escape_html(speaker),
                        content
                    )
                }
                None => format!("<div>{}</div>", content),
            }
        })
        .collect()
}
