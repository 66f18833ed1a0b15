//! The core `Dashboard` struct, composing feed loading with the today filter.

use crate::config::Config;
use crate::events::Event;
use crate::feed::{self, Feed, FeedError};
use crate::parse_dates::{ParseOptions, occurs_on};
use anyhow::Result;
use chrono::{Local, NaiveDate};

/// The central struct for board operations.
///
/// Holds the configuration and produces the two lists the board renders:
/// today's events and the full listing.
#[derive(Debug)]
pub struct Dashboard {
    pub config: Config,
}

/// One fully assembled board.
///
/// Events whose dates cannot be parsed never appear in `today`, but are
/// always kept in `all`; the board shows their raw date text as-is.
#[derive(Debug)]
pub struct DayBoard {
    /// The day the board was assembled for.
    pub date: NaiveDate,
    pub today: Vec<Event>,
    pub all: Vec<Event>,
    pub errors: Vec<FeedError>,
}

impl Dashboard {
    /// Creates a new `Dashboard`, loading configuration from standard paths.
    pub fn new() -> Result<Self> {
        Ok(Self {
            config: Config::load()?,
        })
    }

    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    /// Loads the feed and assembles the board for `reference_date`
    /// (the local calendar day when `None`).
    pub fn assemble(&self, reference_date: Option<NaiveDate>) -> Result<DayBoard> {
        let feed = feed::load_feed(&self.config)?;
        Ok(self.partition(feed, reference_date))
    }

    /// Splits a decoded feed into today's list and the full listing.
    pub fn partition(&self, feed: Feed, reference_date: Option<NaiveDate>) -> DayBoard {
        let date = reference_date.unwrap_or_else(|| Local::now().date_naive());
        let options = ParseOptions {
            reference_date: Some(date),
            pair_days: self.config.pair_days,
        };
        let today = feed
            .events
            .iter()
            .filter(|e| occurs_on(e.date_text(), Some(options)))
            .cloned()
            .collect();
        DayBoard {
            date,
            today,
            all: feed.events,
            errors: feed.errors,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::tests::mk_config;
    use crate::parse_dates::PairDays;

    fn event(title: &str, date: Option<&str>) -> Event {
        Event {
            title: title.to_string(),
            link: None,
            date: date.map(str::to_string),
            time: None,
            venue: None,
            category: None,
        }
    }

    fn feed(events: Vec<Event>) -> Feed {
        Feed {
            events,
            errors: Vec::new(),
        }
    }

    fn anchor() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 10, 5).unwrap()
    }

    #[test]
    fn partition_filters_today_and_keeps_everything() {
        let d = Dashboard::with_config(mk_config(None));
        let board = d.partition(
            feed(vec![
                event("今天單日", Some("2025年10月5日")),
                event("進行中賽事", Some("2025年10月4至7日")),
                event("下月活動", Some("2025年11月1日")),
                event("日期未定活動", Some("日期未定")),
                event("無日期活動", None),
            ]),
            Some(anchor()),
        );

        let today: Vec<_> = board.today.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(today, ["今天單日", "進行中賽事"]);
        // The full listing keeps unparseable entries for display.
        assert_eq!(board.all.len(), 5);
        assert_eq!(board.date, anchor());
    }

    #[test]
    fn pair_days_config_reaches_the_filter() {
        let mut config = mk_config(None);
        config.pair_days = PairDays::Exact;
        let d = Dashboard::with_config(config);

        let board = d.partition(
            feed(vec![event("兩日活動", Some("2025年10月3及7日"))]),
            Some(anchor()),
        );
        assert!(board.today.is_empty());

        let d = Dashboard::with_config(mk_config(None));
        let board = d.partition(
            feed(vec![event("兩日活動", Some("2025年10月3及7日"))]),
            Some(anchor()),
        );
        assert_eq!(board.today.len(), 1);
    }

    #[test]
    fn feed_errors_are_carried_through() {
        let d = Dashboard::with_config(mk_config(None));
        let parsed = crate::feed::parse_feed(r#"[{"title": "好活動"}, false]"#).unwrap();
        let board = d.partition(parsed, Some(anchor()));
        assert_eq!(board.errors.len(), 1);
        assert_eq!(board.all.len(), 1);
    }
}
