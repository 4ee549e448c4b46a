//! Named color presets

/// A color bundle applied on top of a configuration.
///
/// Applying a theme only touches the stroke color, the background color
/// and the background texture color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemePreset {
    pub key: &'static str,
    pub stroke_color: &'static str,
    pub background_color: &'static str,
    pub pattern_color: &'static str,
}

const fn theme(
    key: &'static str,
    stroke_color: &'static str,
    background_color: &'static str,
    pattern_color: &'static str,
) -> ThemePreset {
    ThemePreset {
        key,
        stroke_color,
        background_color,
        pattern_color,
    }
}

pub const THEMES: [ThemePreset; 13] = [
    theme("default", "#94a3b8", "#ffffff", "#e2e8f0"),
    theme("night", "#475569", "#1e293b", "#334155"),
    theme("sepia", "#5c5346", "#fbf0d9", "#e6dec8"),
    theme("vintage", "#857F72", "#F4F1EA", "#D3CEC4"),
    theme("pastel", "#bcece0", "#fff5f7", "#fce7f3"),
    theme("classic", "#000000", "#ffffff", "#d1d5db"),
    theme("minimalist", "#e2e8f0", "#ffffff", "#f1f5f9"),
    theme("ocean", "#38bdf8", "#f0f9ff", "#bae6fd"),
    theme("forest", "#4ade80", "#f0fdf4", "#bbf7d0"),
    theme("sunset", "#fb923c", "#fff7ed", "#fed7aa"),
    theme("tech", "#22d3ee", "#0f172a", "#1e293b"),
    theme("elegant", "#78716c", "#fafaf9", "#e7e5e4"),
    theme("creative", "#a855f7", "#faf5ff", "#e9d5ff"),
];

pub fn themes() -> &'static [ThemePreset] {
    &THEMES
}

pub fn find_theme(key: &str) -> Option<&'static ThemePreset> {
    THEMES.iter().find(|t| t.key == key)
}
