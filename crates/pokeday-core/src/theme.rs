//! Color and elemental-type lookup tables.
//!
//! Two independent tables: the dominant-color table drives the primary page
//! theme, the elemental-type table drives secondary styling (particle
//! effects, gradients). They are deliberately not reconciled with each other.
//! Both are closed sets; a value outside the table is a data-contract
//! violation and surfaces as a typed error, never as a silent default.

use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ThemeError {
    #[error("unknown color category: {0}")]
    UnknownColor(String),

    #[error("unknown elemental type: {0}")]
    UnknownType(String),
}

/// The day's display theme derived from the entry's dominant color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColorTheme {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub accent: &'static str,
}

/// Symbolic visual-effect tag attached to an elemental type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, strum::Display)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Effect {
    Fire,
    Bubbles,
    Leaves,
    Thunder,
    Rocks,
    Wind,
    Mist,
    Snow,
    Aura,
    Darkness,
    Sparkle,
    Dust,
    Punch,
    Ghost,
    Metal,
    Flame,
    None,
}

/// Secondary styling for one elemental type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TypeStyle {
    pub colors: [&'static str; 3],
    pub effect: Effect,
}

/// Dominant-color → theme table. Closed set: these are the only color
/// categories the upstream dataset emits.
pub const COLOR_THEMES: &[(&str, ColorTheme)] = &[
    ("blue", ColorTheme { primary: "#3b82f6", secondary: "#60a5fa", accent: "#93c5fd" }),
    ("brown", ColorTheme { primary: "#a16207", secondary: "#d97706", accent: "#fbbf24" }),
    ("yellow", ColorTheme { primary: "#facc15", secondary: "#fde047", accent: "#fef08a" }),
    ("green", ColorTheme { primary: "#16a34a", secondary: "#4ade80", accent: "#86efac" }),
    ("red", ColorTheme { primary: "#dc2626", secondary: "#f87171", accent: "#fca5a5" }),
    ("purple", ColorTheme { primary: "#9333ea", secondary: "#a855f7", accent: "#c084fc" }),
    ("gray", ColorTheme { primary: "#6b7280", secondary: "#9ca3af", accent: "#d1d5db" }),
    ("pink", ColorTheme { primary: "#ec4899", secondary: "#f472b6", accent: "#f9a8d4" }),
    ("white", ColorTheme { primary: "#f3f4f6", secondary: "#e5e7eb", accent: "#d1d5db" }),
    ("black", ColorTheme { primary: "#111827", secondary: "#374151", accent: "#6b7280" }),
];

/// Elemental-type → { colors, effect } table. Closed set of the types the
/// upstream dataset emits.
pub const TYPE_STYLES: &[(&str, TypeStyle)] = &[
    ("Fire", TypeStyle { colors: ["#ff5f3d", "#ffb347", "#ffcc70"], effect: Effect::Fire }),
    ("Water", TypeStyle { colors: ["#3d9eff", "#74c2ff", "#a6d9ff"], effect: Effect::Bubbles }),
    ("Grass", TypeStyle { colors: ["#5eff77", "#4ed66a", "#b8ffb2"], effect: Effect::Leaves }),
    ("Electric", TypeStyle { colors: ["#fff700", "#ffeb7a", "#ffd500"], effect: Effect::Thunder }),
    ("Rock", TypeStyle { colors: ["#b39b7a", "#d0c6a1", "#897b64"], effect: Effect::Rocks }),
    ("Flying", TypeStyle { colors: ["#a1e3ff", "#d3f0ff", "#ffffff"], effect: Effect::Wind }),
    ("Poison", TypeStyle { colors: ["#a060c9", "#d28dfc", "#e0aaff"], effect: Effect::Mist }),
    ("Ice", TypeStyle { colors: ["#b3e5fc", "#e1f5fe", "#ffffff"], effect: Effect::Snow }),
    ("Psychic", TypeStyle { colors: ["#ff80ab", "#ea80fc", "#b388ff"], effect: Effect::Aura }),
    ("Dark", TypeStyle { colors: ["#333333", "#555555", "#000000"], effect: Effect::Darkness }),
    ("Fairy", TypeStyle { colors: ["#ffb6c1", "#ffcce7", "#fff0f5"], effect: Effect::Sparkle }),
    ("Ground", TypeStyle { colors: ["#e0c68a", "#b99867", "#7a6043"], effect: Effect::Dust }),
    ("Fighting", TypeStyle { colors: ["#ff7043", "#e64a19", "#bf360c"], effect: Effect::Punch }),
    ("Ghost", TypeStyle { colors: ["#7b62a3", "#a18fd0", "#c4b7f0"], effect: Effect::Ghost }),
    ("Steel", TypeStyle { colors: ["#b0bec5", "#cfd8dc", "#eceff1"], effect: Effect::Metal }),
    ("Dragon", TypeStyle { colors: ["#7038f8", "#a890f0", "#c6afff"], effect: Effect::Flame }),
    ("Normal", TypeStyle { colors: ["#c6c6a7", "#e0e0c0", "#f5f5dc"], effect: Effect::None }),
];

/// Resolves a dominant-color category to its [`ColorTheme`].
///
/// Constructed over a table reference so tests can substitute alternates;
/// [`Default`] uses [`COLOR_THEMES`]. Lookup is case-insensitive since the
/// upstream emits lowercase names. Values are returned exactly as stored.
#[derive(Debug, Clone, Copy)]
pub struct ThemeResolver {
    table: &'static [(&'static str, ColorTheme)],
}

impl ThemeResolver {
    pub fn new(table: &'static [(&'static str, ColorTheme)]) -> Self {
        Self { table }
    }

    pub fn resolve(&self, color: &str) -> Result<ColorTheme, ThemeError> {
        self.table
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(color))
            .map(|(_, theme)| *theme)
            .ok_or_else(|| ThemeError::UnknownColor(color.to_string()))
    }
}

impl Default for ThemeResolver {
    fn default() -> Self {
        Self::new(COLOR_THEMES)
    }
}

/// Resolves an elemental type to its [`TypeStyle`]. Independent of
/// [`ThemeResolver`]; the two tables are never merged.
#[derive(Debug, Clone, Copy)]
pub struct TypeStyleResolver {
    table: &'static [(&'static str, TypeStyle)],
}

impl TypeStyleResolver {
    pub fn new(table: &'static [(&'static str, TypeStyle)]) -> Self {
        Self { table }
    }

    pub fn resolve(&self, type_name: &str) -> Result<TypeStyle, ThemeError> {
        self.table
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(type_name))
            .map(|(_, style)| *style)
            .ok_or_else(|| ThemeError::UnknownType(type_name.to_string()))
    }
}

impl Default for TypeStyleResolver {
    fn default() -> Self {
        Self::new(TYPE_STYLES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_color_round_trips_stored_values() {
        let resolver = ThemeResolver::default();
        for (name, theme) in COLOR_THEMES {
            let resolved = resolver.resolve(name).unwrap();
            assert_eq!(resolved.primary, theme.primary);
            assert_eq!(resolved.secondary, theme.secondary);
            assert_eq!(resolved.accent, theme.accent);
        }
    }

    #[test]
    fn test_yellow_primary() {
        let theme = ThemeResolver::default().resolve("yellow").unwrap();
        assert_eq!(theme.primary, "#facc15");
    }

    #[test]
    fn test_color_lookup_is_case_insensitive() {
        let resolver = ThemeResolver::default();
        assert_eq!(
            resolver.resolve("Blue").unwrap(),
            resolver.resolve("blue").unwrap()
        );
    }

    #[test]
    fn test_unknown_color_is_an_error() {
        let err = ThemeResolver::default().resolve("octarine").unwrap_err();
        assert_eq!(err, ThemeError::UnknownColor("octarine".to_string()));
    }

    #[test]
    fn test_every_type_has_three_colors_and_an_effect() {
        let resolver = TypeStyleResolver::default();
        for (name, style) in TYPE_STYLES {
            let resolved = resolver.resolve(name).unwrap();
            assert_eq!(resolved.colors, style.colors);
            assert_eq!(resolved.effect, style.effect);
        }
    }

    #[test]
    fn test_type_effects() {
        let resolver = TypeStyleResolver::default();
        assert_eq!(resolver.resolve("Fire").unwrap().effect, Effect::Fire);
        assert_eq!(resolver.resolve("Water").unwrap().effect, Effect::Bubbles);
        assert_eq!(resolver.resolve("Normal").unwrap().effect, Effect::None);
    }

    #[test]
    fn test_unknown_type_is_an_error() {
        let err = TypeStyleResolver::default().resolve("Sound").unwrap_err();
        assert_eq!(err, ThemeError::UnknownType("Sound".to_string()));
    }

    #[test]
    fn test_effect_tags_serialize_lowercase() {
        assert_eq!(Effect::Thunder.to_string(), "thunder");
        assert_eq!(serde_json::to_string(&Effect::Sparkle).unwrap(), "\"sparkle\"");
    }

    #[test]
    fn test_resolver_accepts_substitute_table() {
        static TINY: &[(&str, ColorTheme)] = &[(
            "teal",
            ColorTheme { primary: "#111111", secondary: "#222222", accent: "#333333" },
        )];
        let resolver = ThemeResolver::new(TINY);
        assert_eq!(resolver.resolve("teal").unwrap().primary, "#111111");
        assert!(resolver.resolve("blue").is_err());
    }
}
