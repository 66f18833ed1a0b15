pub mod categories;
pub mod config;
pub mod dashboard;
pub mod events;
pub mod feed;
pub mod parse_dates;
pub mod render;

pub use config::Config;
pub use dashboard::{Dashboard, DayBoard};
pub use events::Event;
