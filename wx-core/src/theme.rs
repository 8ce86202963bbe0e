//! Display theme. The theme never changes derived numbers; it is forwarded
//! untouched to the chart renderer, which reads its palette.

use crate::error::UnknownTheme;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// Colors handed to the chart scripts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Palette {
    pub background: &'static str,
    pub text: &'static str,
    pub grid: &'static str,
    pub accent: &'static str,
    /// Low and high ends of the sequential color scale.
    pub scale_low: &'static str,
    pub scale_high: &'static str,
    /// Categorical colors for the condition distribution.
    pub categories: &'static [&'static str],
}

const CATEGORY_COLORS: &[&str] = &[
    "#636EFA", "#EF553B", "#00CC96", "#AB63FA", "#FFA15A", "#19D3F3", "#FF6692", "#B6E880",
    "#FF97FF", "#FECB52",
];

impl Theme {
    pub const ALL: [Theme; 2] = [Theme::Light, Theme::Dark];

    /// Label shown next to the theme radio button.
    pub fn label(&self) -> &'static str {
        match self {
            Theme::Light => "☀️ Light Mode",
            Theme::Dark => "🌙 Dark Mode",
        }
    }

    /// Value used for form inputs and CSS class names.
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn palette(&self) -> Palette {
        match self {
            Theme::Light => Palette {
                background: "#FFFFFF",
                text: "#2A3F5F",
                grid: "#E5ECF6",
                accent: "#636EFA",
                scale_low: "#0D0887",
                scale_high: "#F0F921",
                categories: CATEGORY_COLORS,
            },
            Theme::Dark => Palette {
                background: "#111111",
                text: "#F2F5FA",
                grid: "#283442",
                accent: "#636EFA",
                scale_low: "#0D0887",
                scale_high: "#F0F921",
                categories: CATEGORY_COLORS,
            },
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" | "plotly" => Ok(Theme::Light),
            "dark" | "plotly_dark" => Ok(Theme::Dark),
            other => Err(UnknownTheme(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_round_trips_through_str() {
        for theme in Theme::ALL {
            assert_eq!(theme.as_str().parse::<Theme>(), Ok(theme));
        }
        assert_eq!(" Dark ".parse::<Theme>(), Ok(Theme::Dark));
        assert_eq!("plotly_dark".parse::<Theme>(), Ok(Theme::Dark));
        assert!("sepia".parse::<Theme>().is_err());
    }

    #[test]
    fn test_palettes_differ_by_background() {
        assert_ne!(Theme::Light.palette().background, Theme::Dark.palette().background);
        assert_eq!(Theme::default(), Theme::Light);
    }
}
