use anyhow::{Context, Result};
use directories::BaseDirs;
use serde::Deserialize;
use std::{collections::HashMap, fs, path::PathBuf};

use crate::categories::Categories;
use crate::parse_dates::PairDays;

/// Published feed, used when no local snapshot exists.
pub const DEFAULT_FEED_URL: &str =
    "https://raw.githubusercontent.com/ryoohkilo/kai-tak-events-scraper/main/total_events.json";

#[derive(Debug, Clone)]
pub struct Config {
    /// Local feed snapshot tried before falling back to `feed_url`.
    pub feed_path: Option<PathBuf>,
    /// Remote fallback feed.
    pub feed_url: String,
    /// Interpretation of 及 day pairs in event dates.
    pub pair_days: PairDays,
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    feed_path: Option<PathBuf>,
    feed_url: Option<String>,
    pair_days: Option<PairDays>,
    /// Optional table:
    /// [categories]
    /// "體育活動" = "sports"
    categories: Option<HashMap<String, String>>,
}

impl Config {
    /// Public entrypoint: load config from disk (first XDG path, then native),
    /// apply defaults, and extend the global category registry with
    /// user-defined labels if present.
    pub fn load() -> Result<Self> {
        let file_config = Self::read_file_config().unwrap_or_else(|_| FileConfig {
            feed_path: None,
            feed_url: None,
            pair_days: None,
            categories: None,
        });

        let feed_path = file_config
            .feed_path
            .or_else(|| Some(PathBuf::from("total_events.json")));

        let feed_url = file_config
            .feed_url
            .unwrap_or_else(|| DEFAULT_FEED_URL.to_string());

        // Extend the global category registry once at startup.
        Self::load_categories(&file_config.categories);

        Ok(Self {
            feed_path,
            feed_url,
            pair_days: file_config.pair_days.unwrap_or_default(),
        })
    }

    fn config_file_paths() -> Vec<PathBuf> {
        let mut v = Vec::new();
        if let Some(b) = BaseDirs::new() {
            let xdg = b
                .home_dir()
                .join(".config")
                .join("kaitak")
                .join("config.toml");
            v.push(xdg);
            let native = b.config_dir().join("kaitak").join("config.toml");
            v.push(native);
        }
        v
    }

    /// Read the first existing config file and parse it.
    fn read_file_config() -> Result<FileConfig> {
        for path in Self::config_file_paths() {
            if !path.exists() {
                continue;
            }
            let s =
                fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
            return Self::parse_file(&s).with_context(|| format!("parsing {}", path.display()));
        }
        Ok(FileConfig {
            feed_path: None,
            feed_url: None,
            pair_days: None,
            categories: None,
        })
    }

    /// Parse a TOML string into `FileConfig`.
    fn parse_file(s: &str) -> Result<FileConfig> {
        Ok(toml::from_str::<FileConfig>(s)?)
    }

    /// Merge `[categories]` into the global registry.
    /// Omits labels that collide with a canonical category name.
    fn load_categories(categories: &Option<HashMap<String, String>>) {
        match categories {
            Some(map) if !map.is_empty() => {
                let pairs: Vec<(String, String)> = map
                    .iter()
                    .filter(|(label, _)| !Categories::is_canonical(label))
                    .map(|(l, t)| (l.clone(), t.clone()))
                    .collect();

                if !pairs.is_empty() {
                    Categories::extend(&pairs);
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use crate::categories::Category;
    use std::path::Path;

    /// Test helper to create a default `Config` for testing purposes.
    ///
    /// This is the single source of truth for test configuration.
    /// If you add a field to `Config`, you only need to update it here.
    pub(crate) fn mk_config(feed_path: Option<PathBuf>) -> Config {
        Config {
            feed_path,
            feed_url: DEFAULT_FEED_URL.to_string(),
            pair_days: PairDays::default(),
        }
    }

    #[test]
    fn candidates_prioritize_xdg_then_native() {
        if let Some(b) = BaseDirs::new() {
            let expected_xdg = b
                .home_dir()
                .join(".config")
                .join("kaitak")
                .join("config.toml");
            let expected_native = b.config_dir().join("kaitak").join("config.toml");
            let c = super::Config::config_file_paths();
            assert_eq!(c.first(), Some(&expected_xdg));
            assert_eq!(c.get(1), Some(&expected_native));
        }
    }

    #[test]
    fn parse_file_accepts_feed_fields() {
        let toml = r#"
            feed_path = "/tmp/total_events.json"
            feed_url = "https://example.com/events.json"
        "#;
        let fc = super::Config::parse_file(toml).unwrap();
        assert_eq!(
            fc.feed_path.as_deref(),
            Some(Path::new("/tmp/total_events.json"))
        );
        assert_eq!(fc.feed_url.as_deref(), Some("https://example.com/events.json"));
        assert!(fc.pair_days.is_none());
    }

    #[test]
    fn parse_file_accepts_pair_days() {
        let fc = super::Config::parse_file(r#"pair_days = "exact""#).unwrap();
        assert_eq!(fc.pair_days, Some(PairDays::Exact));
        let fc = super::Config::parse_file(r#"pair_days = "span""#).unwrap();
        assert_eq!(fc.pair_days, Some(PairDays::Span));
        assert!(super::Config::parse_file(r#"pair_days = "both""#).is_err());
    }

    #[test]
    fn parse_file_accepts_categories_and_extends_registry() {
        let toml = r#"
            [categories]
            "國際賽事" = "sports"
        "#;

        let fc = super::Config::parse_file(toml).unwrap();
        assert!(fc.categories.is_some());

        super::Config::load_categories(&fc.categories);

        assert_eq!(Categories::classify("國際賽事"), Category::Sports);
    }

    #[test]
    fn parse_file_does_not_accept_canonical_labels() {
        let toml = r#"
            [categories]
            sports = "concert"
            "賽馬" = "sports"
        "#;

        let fc = super::Config::parse_file(toml).unwrap();
        super::Config::load_categories(&fc.categories);

        assert_eq!(Categories::classify("sports"), Category::General);
        assert_eq!(Categories::classify("賽馬"), Category::Sports);
    }
}
