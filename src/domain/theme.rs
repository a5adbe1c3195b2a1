//! Display palettes for dark and light mode.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Semantic colors consumed by the rendering layer.
///
/// Both palettes are the same type, so they always carry the same keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub background_color: &'static str,
    pub text_color: &'static str,
    pub accent_color: &'static str,
    pub card_background_color: &'static str,
}

pub const DARK_THEME: Theme = Theme {
    background_color: "#2f3640",
    text_color: "white",
    accent_color: "#4cd137",
    card_background_color: "transparent",
};

pub const LIGHT_THEME: Theme = Theme {
    background_color: "whitesmoke",
    text_color: "black",
    accent_color: "#9c88ff",
    card_background_color: "white",
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    pub fn theme(&self) -> &'static Theme {
        match self {
            Self::Dark => &DARK_THEME,
            Self::Light => &LIGHT_THEME,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            other => Err(format!("unknown theme '{}', expected dark or light", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(theme: &Theme) -> Vec<String> {
        let value = serde_json::to_value(theme).unwrap();
        let mut keys: Vec<String> = value.as_object().unwrap().keys().cloned().collect();
        keys.sort();
        keys
    }

    #[test]
    fn test_themes_share_key_set() {
        assert_eq!(keys(&DARK_THEME), keys(&LIGHT_THEME));
        assert_eq!(
            keys(&DARK_THEME),
            vec!["accentColor", "backgroundColor", "cardBackgroundColor", "textColor"]
        );
    }

    #[test]
    fn test_mode_selects_theme() {
        assert_eq!(ThemeMode::Dark.theme(), &DARK_THEME);
        assert_eq!(ThemeMode::Light.theme().accent_color, "#9c88ff");
        assert_eq!(ThemeMode::default(), ThemeMode::Dark);
    }

    #[test]
    fn test_toggle_round_trips() {
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
        assert_eq!(ThemeMode::Light.toggled().toggled(), ThemeMode::Light);
    }

    #[test]
    fn test_mode_from_str() {
        assert_eq!("Light".parse::<ThemeMode>().unwrap(), ThemeMode::Light);
        assert!("sepia".parse::<ThemeMode>().is_err());
    }
}
