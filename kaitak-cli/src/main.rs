mod render;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::Parser;
use kaitak_core::{Config, Dashboard};
use render::{ColorMode, RenderOptions, Renderer};
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process::ExitCode;

/// kaitak — Kai Tak Sports Park events board for the terminal
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Only print today's events
    #[arg(long, short, conflicts_with = "all")]
    today: bool,
    /// Only print the full event listing
    #[arg(long, short, conflicts_with = "today")]
    all: bool,
    /// Assemble the board for this date instead of today (e.g. 2025-10-05)
    #[arg(long)]
    on: Option<String>,
    /// Read the feed from this file instead of the configured locations
    #[arg(long)]
    feed: Option<PathBuf>,
    /// Fetch the feed from this URL when no local copy exists
    #[arg(long, env = "KAITAK_FEED_URL")]
    url: Option<String>,
    /// Control ANSI colors in output.
    /// By default, colors are disabled when output is redirected (e.g with `>` or `|`).
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    color: ColorMode,
    /// Only shows one line per event.
    #[arg(long, short)]
    short: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("kaitak: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load()?;
    if let Some(feed) = cli.feed {
        config.feed_path = Some(feed);
    }
    if let Some(url) = cli.url {
        config.feed_url = url;
    }

    let reference_date = cli
        .on
        .as_deref()
        .map(|s| {
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .with_context(|| format!("'{s}' is not a YYYY-MM-DD date"))
        })
        .transpose()?;

    let use_color = match cli.color {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            if std::env::var_os("NO_COLOR").is_some() {
                false
            } else {
                io::stdout().is_terminal()
            }
        }
    };
    let renderer = Renderer::new(Some(RenderOptions {
        use_color,
        short_mode: cli.short,
    }));

    let dashboard = Dashboard::with_config(config);
    let board = dashboard.assemble(reference_date)?;

    renderer.print_header(board.date, Local::now().time());
    if !cli.all {
        renderer.print_today(&board);
    }
    if !cli.today {
        renderer.print_all(&board);
    }
    renderer.print_feed_errors(&board);

    Ok(())
}
