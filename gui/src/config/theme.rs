// Theme specific configurations (colors, fonts, styles)
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemePalette {
    pub background: String,
    pub foreground: String,
    pub panel: String,
    pub border: String,
    pub primary: String,
    pub positive: String,
    pub negative: String,
}

impl ThemePalette {
    pub fn default_light() -> Self {
        Self {
            background: "#fafafa".to_string(),
            foreground: "#1e1e1e".to_string(),
            panel: "#ffffff".to_string(),
            border: "#d0d0d0".to_string(),
            primary: "#003366".to_string(),
            positive: "#2e7d32".to_string(),
            negative: "#c62828".to_string(),
        }
    }

    pub fn default_dark() -> Self {
        Self {
            background: "#1e1e1e".to_string(),
            foreground: "#d1d4dc".to_string(),
            panel: "#252526".to_string(),
            border: "#3c3c3c".to_string(),
            primary: "#4f9cd8".to_string(),
            positive: "#26a69a".to_string(),
            negative: "#ef5350".to_string(),
        }
    }

    /// Palette for the theme name carried in the app configuration.
    /// Unknown names fall back to the light palette.
    pub fn for_name(name: &str) -> Self {
        match name {
            "dark" => Self::default_dark(),
            _ => Self::default_light(),
        }
    }

    /// Stylesheet for the single-screen layout, parameterized by this
    /// palette.
    pub fn stylesheet(&self) -> String {
        format!(
            "body {{ margin: 0; font-family: sans-serif; background: {background}; color: {foreground}; }}\n\
             header h1 {{ text-align: center; margin: 12px 0; color: {primary}; }}\n\
             .toolbar {{ display: flex; align-items: center; gap: 12px; padding: 8px 16px; }}\n\
             .toolbar button {{ padding: 6px 14px; }}\n\
             .layout {{ display: flex; gap: 16px; padding: 0 16px 16px; }}\n\
             .param-form {{ min-width: 260px; background: {panel}; border: 1px solid {border}; padding: 12px; }}\n\
             .param-form .field {{ display: block; margin-bottom: 8px; }}\n\
             .param-form .field span {{ display: block; font-size: 0.85em; margin-bottom: 2px; }}\n\
             .param-form input {{ width: 100%; box-sizing: border-box; }}\n\
             .content {{ flex: 1; display: flex; flex-direction: column; gap: 16px; }}\n\
             .columns {{ display: flex; gap: 16px; }}\n\
             .columns .panel {{ flex: 1; }}\n\
             .panel {{ background: {panel}; border: 1px solid {border}; padding: 12px; }}\n\
             .panel h2 {{ margin-top: 0; color: {primary}; }}\n\
             .result-line {{ display: flex; justify-content: space-between; margin: 4px 0; }}\n\
             .result-line .value {{ font-weight: bold; }}\n\
             .slider-row {{ display: flex; gap: 24px; }}\n\
             .slider-row label {{ flex: 1; }}\n\
             .positive {{ color: {positive}; }}\n\
             .negative {{ color: {negative}; }}\n\
             .muted {{ opacity: 0.6; }}\n\
             .error {{ color: {negative}; }}\n",
            background = self.background,
            foreground = self.foreground,
            panel = self.panel,
            border = self.border,
            primary = self.primary,
            positive = self.positive,
            negative = self.negative,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_theme_falls_back_to_light() {
        assert_eq!(ThemePalette::for_name("fuchsia"), ThemePalette::default_light());
        assert_eq!(ThemePalette::for_name("dark"), ThemePalette::default_dark());
    }

    #[test]
    fn test_stylesheet_uses_palette_colors() {
        let palette = ThemePalette::default_dark();
        let css = palette.stylesheet();
        assert!(css.contains(&palette.background));
        assert!(css.contains(&palette.positive));
    }
}
