use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::sync::RwLock;
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, EnumIter, EnumString};

/// Canonical event categories, used for card labels and colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, AsRefStr, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum Category {
    Sports,
    Entertainment,
    Concert,
    General,
}

impl Category {
    /// Label printed on the card, matching the venue's own wording.
    pub fn display_label(self) -> &'static str {
        match self {
            Category::Sports => "體育賽事",
            Category::Concert => "音樂會",
            Category::Entertainment | Category::General => "娛樂活動",
        }
    }
}

pub struct Categories;

impl Categories {
    /// Returns the global label registry (feed label → canonical category).
    ///
    /// Initialized once on first access, thread-safe behind an [`RwLock`],
    /// and extensible at startup from the config `[categories]` table via
    /// [`extend`](Self::extend).
    fn registry() -> &'static RwLock<HashMap<String, Category>> {
        static REGISTRY: Lazy<RwLock<HashMap<String, Category>>> = Lazy::new(|| {
            let mut m = HashMap::new();
            m.insert("運動賽事".to_string(), Category::Sports);
            m.insert("娛樂活動".to_string(), Category::Entertainment);
            m.insert("演唱會".to_string(), Category::Concert);
            m.insert("一般活動".to_string(), Category::General);
            RwLock::new(m)
        });
        &REGISTRY
    }

    /// Maps a feed label to its canonical category. Labels the registry does
    /// not know fall back to [`Category::General`].
    pub fn classify(label: &str) -> Category {
        let reg = Self::registry().read().unwrap();
        reg.get(label.trim()).copied().unwrap_or(Category::General)
    }

    /// Extends the registry with `(label, target)` pairs, typically from
    /// `[categories]` in `config.toml`:
    ///
    /// ```toml
    /// [categories]
    /// "體育活動" = "sports"
    /// "音樂節" = "concert"
    /// ```
    ///
    /// Targets are the canonical kebab-case names; pairs with an unknown
    /// target are ignored silently.
    pub fn extend(labels: &[(String, String)]) {
        let mut reg = Self::registry().write().unwrap();
        for (label, target) in labels {
            if let Ok(canonical) = target.to_ascii_lowercase().parse::<Category>() {
                reg.insert(label.trim().to_string(), canonical);
            }
        }
    }

    /// Returns `true` if `label` is one of the canonical kebab-case names.
    pub fn is_canonical(label: &str) -> bool {
        Category::iter().any(|c| c.as_ref() == label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_labels_classify() {
        assert_eq!(Categories::classify("運動賽事"), Category::Sports);
        assert_eq!(Categories::classify("演唱會"), Category::Concert);
        assert_eq!(Categories::classify("娛樂活動"), Category::Entertainment);
    }

    #[test]
    fn unknown_label_is_general() {
        assert_eq!(Categories::classify("嘉年華"), Category::General);
        assert_eq!(Categories::classify(""), Category::General);
    }

    #[test]
    fn extend_adds_labels_and_skips_unknown_targets() {
        Categories::extend(&[
            ("體育活動".into(), "sports".into()),
            ("音樂節".into(), "CONCERT".into()),
            ("something".into(), "not-a-category".into()),
        ]);
        assert_eq!(Categories::classify("體育活動"), Category::Sports);
        assert_eq!(Categories::classify("音樂節"), Category::Concert);
        assert_eq!(Categories::classify("something"), Category::General);
    }

    #[test]
    fn display_labels_match_the_board_wording() {
        assert_eq!(Category::Sports.display_label(), "體育賽事");
        assert_eq!(Category::Concert.display_label(), "音樂會");
        assert_eq!(Category::General.display_label(), "娛樂活動");
    }

    #[test]
    fn canonical_names_are_kebab_case() {
        assert!(Categories::is_canonical("sports"));
        assert!(!Categories::is_canonical("Sports"));
        assert!(!Categories::is_canonical("運動賽事"));
    }
}
