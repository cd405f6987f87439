/*!
 * Display colors.
 *
 * The theme is installed once at startup and only read afterwards, so it can
 * be shared by any number of concurrent analyses.
 */

use log::warn;
use once_cell::sync::{Lazy, OnceCell};
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::Gender;

static HEX_COLOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"^#[0-9A-Fa-f]{6}$").unwrap());

static THEME: OnceCell<Theme> = OnceCell::new();

/// Number of colors in the speaker palette
pub const SPEAKER_PALETTE_SIZE: usize = 8;

/// Gender colors plus the ordered speaker palette
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub masculine: String,
    pub feminine: String,
    pub neuter: String,
    pub plural: String,

    /// Color of ungendered or unresolved words
    #[serde(rename = "default")]
    pub default_color: String,

    pub speaker_palette: Vec<String>,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            masculine: "#3B82F6".to_string(),
            feminine: "#EC4899".to_string(),
            neuter: "#22C55E".to_string(),
            plural: "#F97316".to_string(),
            default_color: "#1F2937".to_string(),
            speaker_palette: [
                "#F59E0B", "#14B8A6", "#A855F7", "#EF4444",
                "#0EA5E9", "#84CC16", "#F43F5E", "#EAB308",
            ]
            .iter()
            .map(|c| c.to_string())
            .collect(),
        }
    }
}

/// One row of the color legend
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LegendEntry {
    pub label: &'static str,
    pub color: String,
}

impl Theme {
    pub fn gender_color(&self, gender: Gender) -> &str {
        match gender {
            Gender::Masculine => &self.masculine,
            Gender::Feminine => &self.feminine,
            Gender::Neuter => &self.neuter,
            Gender::Plural => &self.plural,
            Gender::Default => &self.default_color,
        }
    }

    /// The four gendered colors with human readable labels
    pub fn legend(&self) -> Vec<LegendEntry> {
        [
            ("Masculine", Gender::Masculine),
            ("Feminine", Gender::Feminine),
            ("Neuter", Gender::Neuter),
            ("Plural", Gender::Plural),
        ]
        .into_iter()
        .map(|(label, gender)| LegendEntry {
            label,
            color: self.gender_color(gender).to_string(),
        })
        .collect()
    }

    /// Check every color is `#RRGGBB` and the palette has the expected size
    pub fn validate(&self) -> Result<(), String> {
        let gender_colors = [
            &self.masculine,
            &self.feminine,
            &self.neuter,
            &self.plural,
            &self.default_color,
        ];
        for color in gender_colors.into_iter().chain(self.speaker_palette.iter()) {
            if !HEX_COLOR.is_match(color) {
                return Err(format!("Invalid color '{}', expected #RRGGBB", color));
            }
        }
        if self.speaker_palette.len() != SPEAKER_PALETTE_SIZE {
            return Err(format!(
                "Speaker palette must have {} colors, found {}",
                SPEAKER_PALETTE_SIZE,
                self.speaker_palette.len()
            ));
        }
        Ok(())
    }
}

/// Install the process-wide theme. Only the first call has an effect.
pub fn install(theme: Theme) -> bool {
    THEME.set(theme).is_ok()
}

/// Install `theme`, or check it matches the one already installed.
///
/// Returns whether `theme` is the active theme afterwards.
pub fn ensure_installed(theme: &Theme) -> bool {
    if install(theme.clone()) {
        return true;
    }
    if current() == theme {
        return true;
    }
    warn!("A different color theme is already installed, keeping it");
    false
}

/// The installed theme, or the default one
pub fn current() -> &'static Theme {
    THEME.get_or_init(Theme::default)
}

/// Legend of the current theme
pub fn color_legend() -> Vec<LegendEntry> {
    current().legend()
}
