use super::theme::OneDark;
use chrono::NaiveTime;
use kaitak_core::categories::Categories;
use kaitak_core::feed::FeedError;
use kaitak_core::render::{NO_EVENTS_TODAY, format_clock_date, format_event_card};
use kaitak_core::{DayBoard, Event};
use termimad::{MadSkin, crossterm::style::Stylize};

#[derive(Clone)]
pub struct RenderOptions {
    pub use_color: bool,
    pub short_mode: bool,
}

pub struct Renderer {
    skin: MadSkin,
    opts: RenderOptions,
}

impl Renderer {
    pub fn new(config: Option<RenderOptions>) -> Self {
        let opts = config.unwrap_or(RenderOptions {
            use_color: true,
            short_mode: false,
        });
        Self {
            skin: if opts.use_color {
                OneDark::default_onedark_skin()
            } else {
                MadSkin::no_style()
            },
            opts,
        }
    }

    pub fn print_md(&self, md: &str) {
        self.skin.print_text(md);
    }

    pub fn print_info(&self, message: &str) {
        let md = format!("|-|\n| {message} |\n|-|\n");
        self.skin.print_text(&md);
    }

    /// The board header: date with Chinese weekday plus the wall clock.
    pub fn print_header(&self, date: chrono::NaiveDate, time: NaiveTime) {
        let line = format!("{} {}", format_clock_date(date), time.format("%H:%M:%S"));
        self.print_info(&line);
    }

    pub fn print_today(&self, board: &DayBoard) {
        self.print_md("# 今日活動");
        if board.today.is_empty() {
            self.print_md(NO_EVENTS_TODAY);
            return;
        }
        self.print_events(&board.today);
    }

    pub fn print_all(&self, board: &DayBoard) {
        self.print_md("# 全部活動");
        if board.all.is_empty() {
            self.print_info("No events in the feed.");
            return;
        }
        self.print_events(&board.all);
    }

    pub fn print_feed_errors(&self, board: &DayBoard) {
        if board.errors.is_empty() {
            return;
        }
        self.print_md("\n# Errors:");
        for error in &board.errors {
            match error {
                FeedError::BadRecord { index, error } => {
                    let message = format!("* Could not decode feed record {index}: {error}");
                    self.print_md(&message);
                }
            }
        }
    }

    fn print_events(&self, events: &[Event]) {
        for (i, event) in events.iter().enumerate() {
            if self.opts.short_mode {
                self.print_event_line(event);
                continue;
            }
            self.skin.print_text(&format_event_card(event));
            if i + 1 < events.len() {
                println!();
            }
        }
    }

    fn print_event_line(&self, event: &Event) {
        let mut date = event.date_text().to_string();
        let mut title = event.display_title();
        if self.opts.use_color {
            let accent = OneDark::category_color(Categories::classify(event.category_text()));
            date = date.with(OneDark::CYAN).to_string();
            title = title.with(accent).to_string();
        }
        println!("{} - {}", date, title);
    }
}
