/*!
 * Speaker color assignment.
 *
 * Colors are handed out in order of first appearance, cycling through the
 * palette. The map is built once per document and then shared by every
 * rendering of that document (source text and each translation).
 */

use std::collections::HashMap;

use log::debug;

use super::segmenter::DialogRecord;
use crate::gender::theme;

/// Mapping from speaker name to palette color
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpeakerColorMap {
    colors: HashMap<String, String>,

    /// Speakers in order of first appearance
    order: Vec<String>,
}

impl SpeakerColorMap {
    /// Build from records with the palette of the current theme
    pub fn from_records(records: &[DialogRecord]) -> Self {
        Self::with_palette(records, &theme::current().speaker_palette)
    }

    /// Build from records with an explicit palette
    pub fn with_palette(records: &[DialogRecord], palette: &[String]) -> Self {
        let mut map = Self::default();
        if palette.is_empty() {
            return map;
        }

        for speaker in records.iter().filter_map(|r| r.speaker.as_ref()) {
            if map.colors.contains_key(speaker) {
                continue;
            }
            let color = &palette[map.order.len() % palette.len()];
            debug!("Speaker '{}' assigned color {}", speaker, color);
            map.colors.insert(speaker.clone(), color.clone());
            map.order.push(speaker.clone());
        }

        map
    }

    pub fn color_for(&self, speaker: &str) -> Option<&str> {
        self.colors.get(speaker).map(String::as_str)
    }

    /// `(speaker, color)` pairs in order of first appearance
    pub fn speakers(&self) -> impl Iterator<Item = (&str, &str)> {
        self.order
            .iter()
            .map(|name| (name.as_str(), self.colors[name].as_str()))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
