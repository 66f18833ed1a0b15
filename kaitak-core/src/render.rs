//! Pure text rendering helpers for the board.
//!
//! Clock line: `2025年8月25日（星期一）`
//! Event card:
//!   ## 【體育賽事】香港欖球七人賽
//!   - 日期：2025年10月4至7日
//!   ...

use crate::categories::Categories;
use crate::events::Event;
use chrono::{Datelike, NaiveDate};

/// Message shown when today's list is empty.
pub const NO_EVENTS_TODAY: &str = "今日沒有活動";

const WEEKDAY_GLYPHS: [&str; 7] = ["日", "一", "二", "三", "四", "五", "六"];

/// `2025年8月25日（星期一）`
pub fn format_clock_date(date: NaiveDate) -> String {
    let glyph = WEEKDAY_GLYPHS[date.weekday().num_days_from_sunday() as usize];
    format!(
        "{}年{}月{}日（星期{}）",
        date.year(),
        date.month(),
        date.day(),
        glyph
    )
}

/// Renders one event as a small Markdown card.
///
/// Missing fields fall back to the venue placeholders; the date line always
/// shows the raw feed text, never a normalized form.
pub fn format_event_card(event: &Event) -> String {
    let label = Categories::classify(event.category_text()).display_label();
    let mut card = format!("## 【{}】{}\n", label, event.display_title());
    card.push_str(&format!("- 日期:{}\n", event.date_text()));
    card.push_str(&format!("- 時間:{}\n", event.time_text()));
    card.push_str(&format!("- 地點:{}\n", event.venue_text()));
    if let Some(link) = &event.link {
        card.push_str(&format!("- 連結:{link}\n"));
    }
    card
}
