use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub page: PageConfig,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct PageConfig {
    /// Title for standalone page output. Falls back to the input file stem
    /// when unset.
    pub title: Option<String>,
    /// Optional stylesheet href linked from the page head.
    pub stylesheet: Option<String>,
}

impl Config {
    /// Load config from a TOML file, or return defaults if not found.
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Config;

    #[test]
    fn parses_page_section() {
        let config: Config =
            toml::from_str("[page]\ntitle = \"Wiki\"\nstylesheet = \"/style.css\"").unwrap();
        assert_eq!(config.page.title.as_deref(), Some("Wiki"));
        assert_eq!(config.page.stylesheet.as_deref(), Some("/style.css"));
    }

    #[test]
    fn defaults_when_empty() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.page.title.is_none());
        assert!(config.page.stylesheet.is_none());
    }
}
