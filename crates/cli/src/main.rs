use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use clap::Parser;
use herbarium_types::DEFAULT_AGE_LIMIT_MONTHS;
use herbarium_util::{UserPreferences, open_log_file, resolve_log_path};
use tracing::warn;
use tracing_subscriber::EnvFilter;

/// Keep a small plant collection from the terminal.
#[derive(Debug, Parser)]
#[command(name = "herbarium", version, about)]
struct Args {
    /// Theme id to start with (dracula, nord, ansi256).
    #[arg(long, value_name = "ID")]
    theme: Option<String>,

    /// Upper bound of the age field, in months.
    #[arg(long = "max-age", value_name = "MONTHS", default_value_t = DEFAULT_AGE_LIMIT_MONTHS)]
    max_age: u32,

    /// Write logs here instead of the default log file.
    #[arg(long = "log-file", value_name = "PATH")]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.log_file.as_deref())?;

    let preferences = UserPreferences::new().unwrap_or_else(|error| {
        warn!(%error, "Failed to load preferences; using defaults");
        UserPreferences::ephemeral()
    });

    herbarium_tui::run(herbarium_tui::TuiOptions {
        theme: args.theme,
        age_limit_months: args.max_age,
        preferences: Arc::new(preferences),
    })
    .await
}

/// The TUI owns the terminal, so logs always go to a file.
fn init_tracing(explicit: Option<&std::path::Path>) -> Result<()> {
    let path = resolve_log_path(explicit);
    let file = open_log_file(&path).with_context(|| format!("open log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_form() {
        let args = Args::try_parse_from(["herbarium"]).unwrap();
        assert_eq!(args.max_age, DEFAULT_AGE_LIMIT_MONTHS);
        assert!(args.theme.is_none());
        assert!(args.log_file.is_none());
    }

    #[test]
    fn parses_every_flag() {
        let args = Args::try_parse_from(["herbarium", "--theme", "nord", "--max-age", "24", "--log-file", "/tmp/h.log"]).unwrap();
        assert_eq!(args.theme.as_deref(), Some("nord"));
        assert_eq!(args.max_age, 24);
        assert_eq!(args.log_file, Some(PathBuf::from("/tmp/h.log")));
    }

    #[test]
    fn rejects_non_numeric_age_limit() {
        assert!(Args::try_parse_from(["herbarium", "--max-age", "lots"]).is_err());
    }
}
