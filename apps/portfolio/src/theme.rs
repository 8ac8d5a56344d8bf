use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Two-state visual theme held per session. Always exactly one of the variants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeState {
    #[default]
    Light,
    Dark,
}

impl ThemeState {
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeState::Light => "light",
            ThemeState::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemeState::Light => ThemeState::Dark,
            ThemeState::Dark => ThemeState::Light,
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            ThemeState::Light => LIGHT,
            ThemeState::Dark => DARK,
        }
    }
}

impl fmt::Display for ThemeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(ThemeState::Light),
            "dark" => Ok(ThemeState::Dark),
            other => Err(format!("unknown theme '{other}'")),
        }
    }
}

/// Color and shadow tokens emitted once per render as CSS custom properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Palette {
    pub background: &'static str,
    pub surface: &'static str,
    pub surface_glass: &'static str,
    pub border: &'static str,
    pub text: &'static str,
    pub text_muted: &'static str,
    pub accent: &'static str,
    pub accent_soft: &'static str,
    pub hero_gradient: &'static str,
    pub shadow: &'static str,
    pub shadow_hover: &'static str,
}

const LIGHT: Palette = Palette {
    background: "#F8FAFC",
    surface: "#FFFFFF",
    surface_glass: "rgba(255, 255, 255, 0.7)",
    border: "#E2E8F0",
    text: "#1E293B",
    text_muted: "#64748B",
    accent: "#3B82F6",
    accent_soft: "rgba(59, 130, 246, 0.2)",
    hero_gradient: "linear-gradient(135deg, #0F172A 0%, #1E293B 100%)",
    shadow: "0 4px 6px -1px rgba(0, 0, 0, 0.1)",
    shadow_hover: "0 20px 25px -5px rgba(0, 0, 0, 0.1)",
};

const DARK: Palette = Palette {
    background: "#0B1120",
    surface: "#1E293B",
    surface_glass: "rgba(30, 41, 59, 0.6)",
    border: "#334155",
    text: "#F1F5F9",
    text_muted: "#94A3B8",
    accent: "#60A5FA",
    accent_soft: "rgba(96, 165, 250, 0.25)",
    hero_gradient: "linear-gradient(135deg, #1E3A8A 0%, #0F172A 100%)",
    shadow: "0 4px 6px -1px rgba(0, 0, 0, 0.5)",
    shadow_hover: "0 20px 25px -5px rgba(0, 0, 0, 0.6)",
};
