/*!
 * Standalone HTML page: header, color legend, the colorized German text and
 * one panel per translation.
 */

use super::markup::escape_html;
use crate::gender::theme::{LegendEntry, Theme};

const PAGE_BACKGROUND: &str = "#3F3244";
const PANEL_BACKGROUND: &str = "#2F2235";
const PANEL_BORDER: &str = "#60495A";
const TEXT_COLOR: &str = "#BFC3BA";
const MUTED_TEXT_COLOR: &str = "#A9ACA9";

/// A titled box of pre-rendered markup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagePanel {
    /// Plain-text heading, escaped on output
    pub title: String,

    /// Markup produced by the renderer
    pub markup: String,
}

impl PagePanel {
    pub fn new(title: impl Into<String>, markup: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            markup: markup.into(),
        }
    }
}

fn render_legend(entries: &[LegendEntry]) -> String {
    let rows: String = entries
        .iter()
        .map(|entry| {
            format!(
                r#"<div style="padding: 5px 0;"><span style="color: {}; font-size: 20px; font-weight: 700;">&#9679;</span> <span style="color: {};">{}</span></div>"#,
                entry.color,
                TEXT_COLOR,
                escape_html(entry.label)
            )
        })
        .collect();

    format!(
        r#"<div style="margin-bottom: 20px;"><h2 style="color: {};">Color Legend</h2>{}</div>"#,
        TEXT_COLOR, rows
    )
}

fn render_panel(panel: &PagePanel) -> String {
    format!(
        r#"<h3 style="color: {text};">{title}</h3>
<div style="background-color: {bg}; border: 2px solid {border}; border-radius: 12px; padding: 25px; font-size: 22px; line-height: 2; color: {text}; margin-bottom: 25px;">{markup}</div>
"#,
        text = TEXT_COLOR,
        title = escape_html(&panel.title),
        bg = PANEL_BACKGROUND,
        border = PANEL_BORDER,
        markup = panel.markup
    )
}

/// Assemble a complete HTML document from rendered panels
pub fn render_page(theme: &Theme, panels: &[PagePanel]) -> String {
    let body: String = panels.iter().map(render_panel).collect();

    format!(
        r#"<!DOCTYPE html>
<html lang="de">
<head>
<meta charset="utf-8">
<title>German Translator</title>
</head>
<body style="background-color: {bg}; font-family: sans-serif; padding: 20px 40px;">
<div style="text-align: center; padding: 30px 0; margin-bottom: 20px;">
<h1 style="color: {text}; margin-bottom: 10px; font-size: 2.8rem; font-weight: 700;">German Translator</h1>
<p style="color: {muted}; font-size: 1.2rem;">German text with gender-colored articles and nouns</p>
</div>
{legend}
{body}</body>
</html>
"#,
        bg = PAGE_BACKGROUND,
        text = TEXT_COLOR,
        muted = MUTED_TEXT_COLOR,
        legend = render_legend(&theme.legend()),
        body = body
    )
}
