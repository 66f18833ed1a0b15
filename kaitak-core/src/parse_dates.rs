//! Parses the venue's Chinese date notation into calendar-day spans and
//! answers "does this event happen today?".
//!
//! The feed writes dates by hand in a small family of shapes:
//!
//! - `2025年9月27日至2026年10月13日` (range across years)
//! - `2025年9月27日至10月13日` (range across months, shared year)
//! - `2025年10月4至7日` (range within one month)
//! - `2025年12月6及7日` (two named days)
//! - `2025年10月5日` (single day)

use chrono::{Local, NaiveDate};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde::Deserialize;

/// A year/month/day triple exactly as captured from the feed text.
///
/// Nothing is validated at capture time; the feed occasionally carries
/// impossible dates (a 31st in a 30-day month) and the parser trusts the
/// source. [`RawDate::resolve`] is the single place calendar validity is
/// decided.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RawDate {
    pub year: i32,
    /// 1-based month, as written.
    pub month: u32,
    pub day: u32,
}

impl RawDate {
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    /// Returns the real calendar date, or `None` for impossible dates.
    pub fn resolve(self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
    }
}

/// Which connector glyph produced a span.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SpanKind {
    /// 至, or a single day: every day between the endpoints is an event day.
    Continuous,
    /// 及: the feed names two specific days. See [`PairDays`].
    DayPair,
}

/// An inclusive span between two captured dates.
///
/// `start <= end` is not guaranteed; the parser reproduces whatever the
/// source text says, and a reversed span simply covers no days.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DateSpan {
    pub start: RawDate,
    pub end: RawDate,
    pub kind: SpanKind,
}

/// How a 及 ("and") day pair is read by the membership test.
///
/// `2025年12月6及7日` is ambiguous: the venue uses 及 both for consecutive
/// days and for two separate days with nothing scheduled in between. The
/// default treats the pair as an inclusive range, which is what the original
/// dashboard did; `Exact` matches only the two named days.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PairDays {
    #[default]
    Span,
    Exact,
}

/// Options for the membership test.
#[derive(Copy, Clone, Debug, Default)]
pub struct ParseOptions {
    /// The date to treat as "today". `None` means the live local clock.
    pub reference_date: Option<NaiveDate>,
    /// Interpretation of 及 day pairs.
    pub pair_days: PairDays,
}

type Extract = fn(&Captures) -> Option<DateSpan>;

/// Grammar table, most specific first. Matching stops at the first hit, so a
/// cross-year range is never shortened by the single-day pattern.
static PATTERNS: Lazy<Vec<(Regex, Extract)>> = Lazy::new(|| {
    vec![
        (
            Regex::new(r"(\d{4})年(\d{1,2})月(\d{1,2})日至(\d{4})年(\d{1,2})月(\d{1,2})日")
                .unwrap(),
            |c: &Captures| {
                Some(DateSpan {
                    start: RawDate::new(num(c, 1)? as i32, num(c, 2)?, num(c, 3)?),
                    end: RawDate::new(num(c, 4)? as i32, num(c, 5)?, num(c, 6)?),
                    kind: SpanKind::Continuous,
                })
            },
        ),
        (
            Regex::new(r"(\d{4})年(\d{1,2})月(\d{1,2})日至(\d{1,2})月(\d{1,2})日").unwrap(),
            |c: &Captures| {
                let year = num(c, 1)? as i32;
                Some(DateSpan {
                    start: RawDate::new(year, num(c, 2)?, num(c, 3)?),
                    end: RawDate::new(year, num(c, 4)?, num(c, 5)?),
                    kind: SpanKind::Continuous,
                })
            },
        ),
        (
            Regex::new(r"(\d{4})年(\d{1,2})月(\d{1,2})至(\d{1,2})日").unwrap(),
            |c: &Captures| {
                let (year, month) = (num(c, 1)? as i32, num(c, 2)?);
                Some(DateSpan {
                    start: RawDate::new(year, month, num(c, 3)?),
                    end: RawDate::new(year, month, num(c, 4)?),
                    kind: SpanKind::Continuous,
                })
            },
        ),
        (
            Regex::new(r"(\d{4})年(\d{1,2})月(\d{1,2})及(\d{1,2})日").unwrap(),
            |c: &Captures| {
                let (year, month) = (num(c, 1)? as i32, num(c, 2)?);
                Some(DateSpan {
                    start: RawDate::new(year, month, num(c, 3)?),
                    end: RawDate::new(year, month, num(c, 4)?),
                    kind: SpanKind::DayPair,
                })
            },
        ),
        (
            Regex::new(r"(\d{4})年(\d{1,2})月(\d{1,2})日").unwrap(),
            |c: &Captures| {
                let day = RawDate::new(num(c, 1)? as i32, num(c, 2)?, num(c, 3)?);
                Some(DateSpan {
                    start: day,
                    end: day,
                    kind: SpanKind::Continuous,
                })
            },
        ),
    ]
});

/// Placeholder tokens the venue publishes while a date is unconfirmed.
static PENDING: Lazy<Regex> = Lazy::new(|| Regex::new(r"待定|未定|(?i)TBD").unwrap());

fn num(c: &Captures, i: usize) -> Option<u32> {
    c.get(i)?.as_str().parse().ok()
}

/// Parses a feed date string into a [`DateSpan`].
///
/// All whitespace (including full-width spaces) is stripped before matching;
/// the notation never contains meaningful spaces. Returns `None` for empty
/// input, pending placeholders (待定 / 未定 / TBD) and anything outside the
/// known notation. A match is all-or-nothing per pattern, and the patterns are
/// anchor-free, so a date embedded in longer text still parses.
///
/// # Examples
///
/// ```
/// # use kaitak_core::parse_dates::{parse_date_span, RawDate};
/// let span = parse_date_span("2025年10月4至7日").unwrap();
/// assert_eq!(span.start, RawDate::new(2025, 10, 4));
/// assert_eq!(span.end, RawDate::new(2025, 10, 7));
///
/// assert!(parse_date_span("日期待定").is_none());
/// ```
pub fn parse_date_span(raw: &str) -> Option<DateSpan> {
    let s: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    if s.is_empty() || PENDING.is_match(&s) {
        return None;
    }
    PATTERNS
        .iter()
        .find_map(|(re, extract)| re.captures(&s).and_then(|c| extract(&c)))
}

/// Whether the event described by `raw` takes place on the reference day.
///
/// Unparseable input, impossible calendar dates on either endpoint, and
/// anything else that goes wrong all resolve to `false`. This never panics,
/// so the rendering layer can call it on untrusted feed text without
/// guarding.
pub fn occurs_on(raw: &str, options: Option<ParseOptions>) -> bool {
    let options = options.unwrap_or_default();
    let today = options
        .reference_date
        .unwrap_or_else(|| Local::now().date_naive());
    span_covers(parse_date_span(raw), today, options.pair_days).unwrap_or(false)
}

/// [`occurs_on`] against the live local clock with default options.
pub fn is_today(raw: &str) -> bool {
    occurs_on(raw, None)
}

fn span_covers(span: Option<DateSpan>, today: NaiveDate, pair_days: PairDays) -> Option<bool> {
    let span = span?;
    let start = span.start.resolve()?;
    let end = span.end.resolve()?;
    Some(match (span.kind, pair_days) {
        (SpanKind::DayPair, PairDays::Exact) => today == start || today == end,
        _ => today >= start && today <= end,
    })
}
