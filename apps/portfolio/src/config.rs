use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{anyhow, Context, Result};
use chrono::{Datelike, Utc};
use serde::Serialize;

/// Page width mode, applied as a class on `<body>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutMode {
    Wide,
    Centered,
}

impl LayoutMode {
    pub fn as_str(self) -> &'static str {
        match self {
            LayoutMode::Wide => "wide",
            LayoutMode::Centered => "centered",
        }
    }
}

impl FromStr for LayoutMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "wide" => Ok(LayoutMode::Wide),
            "centered" => Ok(LayoutMode::Centered),
            other => Err(anyhow!("expected 'wide' or 'centered', got '{other}'")),
        }
    }
}

/// Whether the sidebar starts open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SidebarState {
    Expanded,
    Collapsed,
}

impl FromStr for SidebarState {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "expanded" => Ok(SidebarState::Expanded),
            "collapsed" => Ok(SidebarState::Collapsed),
            other => Err(anyhow!("expected 'expanded' or 'collapsed', got '{other}'")),
        }
    }
}

/// Fixed page settings consumed by the renderer.
#[derive(Debug, Clone, Serialize)]
pub struct PageSettings {
    pub title: String,
    pub icon: String,
    pub layout: LayoutMode,
    pub sidebar: SidebarState,
    pub profile_photo: String,
    pub cv_filename: String,
    pub year: i32,
}

impl Default for PageSettings {
    fn default() -> Self {
        Self {
            title: "Raja Roy | AI & Data Science Portfolio".to_string(),
            icon: "🚀".to_string(),
            layout: LayoutMode::Wide,
            sidebar: SidebarState::Expanded,
            profile_photo: "profile_photo.png".to_string(),
            cv_filename: "Raja_Roy_CV.pdf".to_string(),
            year: Utc::now().year(),
        }
    }
}

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Overrides the executable's directory as the first asset root.
    pub asset_dir: Option<PathBuf>,
    /// JSON file replacing the built-in content.
    pub content_path: Option<PathBuf>,
    pub session_ttl_secs: u64,
    pub page: PageSettings,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = PageSettings::default();

        Ok(Config {
            port: parse_env("PORT", 8080).context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            asset_dir: optional_env("ASSET_DIR").map(PathBuf::from),
            content_path: optional_env("CONTENT_PATH").map(PathBuf::from),
            session_ttl_secs: parse_env("SESSION_TTL_SECS", 86_400)
                .context("SESSION_TTL_SECS must be a whole number of seconds")?,
            page: PageSettings {
                title: optional_env("PAGE_TITLE").unwrap_or(defaults.title),
                icon: optional_env("PAGE_ICON").unwrap_or(defaults.icon),
                layout: parse_env("LAYOUT", defaults.layout).context("Invalid LAYOUT")?,
                sidebar: parse_env("SIDEBAR_STATE", defaults.sidebar)
                    .context("Invalid SIDEBAR_STATE")?,
                profile_photo: optional_env("PROFILE_PHOTO").unwrap_or(defaults.profile_photo),
                cv_filename: optional_env("CV_FILENAME").unwrap_or(defaults.cv_filename),
                year: parse_env("PORTFOLIO_YEAR", defaults.year)
                    .context("PORTFOLIO_YEAR must be a year")?,
            },
        })
    }
}

/// Returns the variable's value, treating unset and blank alike.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match optional_env(key) {
        Some(raw) => raw
            .parse::<T>()
            .map_err(|e| anyhow!("{key}='{raw}': {e}")),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_parsing() {
        assert_eq!("Wide".parse::<LayoutMode>().unwrap(), LayoutMode::Wide);
        assert_eq!("centered".parse::<LayoutMode>().unwrap(), LayoutMode::Centered);
        assert!("narrow".parse::<LayoutMode>().is_err());
    }

    #[test]
    fn test_sidebar_parsing() {
        assert_eq!(
            "collapsed".parse::<SidebarState>().unwrap(),
            SidebarState::Collapsed
        );
        assert!("hidden".parse::<SidebarState>().is_err());
    }

    #[test]
    fn test_parse_env_uses_default_when_unset() {
        let value: u16 = parse_env("PORTFOLIO_TEST_SURELY_UNSET_VAR", 1234).unwrap();
        assert_eq!(value, 1234);
    }

    #[test]
    fn test_default_settings_name_the_assets() {
        let settings = PageSettings::default();
        assert_eq!(settings.profile_photo, "profile_photo.png");
        assert_eq!(settings.cv_filename, "Raja_Roy_CV.pdf");
        assert_eq!(settings.layout, LayoutMode::Wide);
    }
}
