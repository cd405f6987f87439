/*!
 * Line segmentation for dialog transcripts.
 *
 * A speaker label is a run of ASCII letters, the German letters Ä Ö Ü ä ö ü ß,
 * periods and spaces at the very start of a line, followed by a colon and
 * optional whitespace. The character class is spelled out explicitly so the
 * match does not depend on Unicode letter tables.
 */

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

/// Pattern for a speaker label at the start of a line, e.g. "Anna:", "Dr. Müller:"
static SPEAKER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-zÄÖÜäöüß. ]+):\s*(.*)$").expect("Invalid speaker regex")
});

/// One parsed input line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DialogRecord {
    /// Trimmed speaker name, present only when the line has a speaker label
    pub speaker: Option<String>,

    /// Text after the label, or the whole line. Empty for blank lines.
    pub content: String,

    pub is_blank: bool,
}

impl DialogRecord {
    pub fn blank() -> Self {
        Self {
            speaker: None,
            content: String::new(),
            is_blank: true,
        }
    }

    /// The line as it should read after re-joining
    pub fn to_line(&self) -> String {
        match &self.speaker {
            Some(speaker) if self.content.is_empty() => format!("{}:", speaker),
            Some(speaker) => format!("{}: {}", speaker, self.content),
            None => self.content.clone(),
        }
    }
}

/// Parse one line (without its newline)
pub fn parse_line(line: &str) -> DialogRecord {
    let line = line.strip_suffix('\r').unwrap_or(line);
    if line.trim().is_empty() {
        return DialogRecord::blank();
    }

    if let Some(captures) = SPEAKER_PATTERN.captures(line) {
        let speaker = captures.get(1).map_or("", |m| m.as_str()).trim();
        if !speaker.is_empty() {
            return DialogRecord {
                speaker: Some(speaker.to_string()),
                content: captures.get(2).map_or("", |m| m.as_str()).to_string(),
                is_blank: false,
            };
        }
    }

    DialogRecord {
        speaker: None,
        content: line.to_string(),
        is_blank: false,
    }
}

/// Split text into one record per line, blank lines included
pub fn segment_dialog(text: &str) -> Vec<DialogRecord> {
    text.split('\n').map(parse_line).collect()
}

/// Join record contents with newlines, one line per record
pub fn rejoin(records: &[DialogRecord]) -> String {
    records
        .iter()
        .map(|r| r.content.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}
