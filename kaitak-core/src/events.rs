//! Event records as they arrive from the venue feed.

use serde::Deserialize;

/// One scheduled event from the feed.
///
/// The scraper emits Chinese field keys. Everything except the title is
/// optional; cards with missing details still render, using the venue's own
/// placeholder wording.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Event {
    pub title: String,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(rename = "日期", default)]
    pub date: Option<String>,
    #[serde(rename = "時間", default)]
    pub time: Option<String>,
    #[serde(rename = "地點", default)]
    pub venue: Option<String>,
    #[serde(rename = "類別", default)]
    pub category: Option<String>,
}

impl Event {
    /// Raw date text, used both for parsing and for display. The pending
    /// placeholder when the feed has no date (which also makes the event
    /// unparseable, so it never lands on the today list).
    pub fn date_text(&self) -> &str {
        self.date.as_deref().unwrap_or("日期待定")
    }

    pub fn time_text(&self) -> &str {
        self.time.as_deref().unwrap_or("時間待定")
    }

    pub fn venue_text(&self) -> &str {
        self.venue.as_deref().unwrap_or("啟德體育園")
    }

    pub fn category_text(&self) -> &str {
        self.category.as_deref().unwrap_or("一般活動")
    }

    /// Titles sometimes carry embedded newlines from the scraped markup.
    pub fn display_title(&self) -> String {
        self.title.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_feed_keys() {
        let json = r#"{
            "title": "香港欖球七人賽",
            "link": "https://www.kaitaksportspark.com.hk/tc/event/rugby",
            "日期": "2025年10月4至7日",
            "時間": "10:00",
            "地點": "啟德主場館",
            "類別": "運動賽事"
        }"#;
        let event: Event = serde_json::from_str(json).unwrap();
        assert_eq!(event.title, "香港欖球七人賽");
        assert_eq!(event.date_text(), "2025年10月4至7日");
        assert_eq!(event.venue_text(), "啟德主場館");
        assert_eq!(event.category_text(), "運動賽事");
    }

    #[test]
    fn missing_fields_fall_back_to_placeholders() {
        let event: Event = serde_json::from_str(r#"{"title": "神秘活動"}"#).unwrap();
        assert_eq!(event.date_text(), "日期待定");
        assert_eq!(event.time_text(), "時間待定");
        assert_eq!(event.venue_text(), "啟德體育園");
        assert_eq!(event.category_text(), "一般活動");
        assert!(event.link.is_none());
    }

    #[test]
    fn display_title_collapses_newlines() {
        let event: Event = serde_json::from_str(r#"{"title": "演唱會\n加場"}"#).unwrap();
        assert_eq!(event.display_title(), "演唱會 加場");
    }
}
