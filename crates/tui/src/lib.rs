//! # Herbarium TUI
//!
//! A terminal interface for recording a personal plant collection: an entry
//! form, a table of every plant added so far and a status line with the
//! running total. Records live only for the lifetime of the process.
//!
//! ## Architecture
//!
//! Components (form, table, warning dialog) handle their own input and
//! rendering and report [`Effect`](app::Effect)s. They edit the form draft and
//! the row selection in place. The runtime turns effects into
//! [`Msg`](app::Msg)s for [`App::update`](app::App::update), which is the only
//! place records are added or removed.

mod app;
mod ui;

use anyhow::Result;

pub use app::TuiOptions;

/// Run the TUI until the user quits.
///
/// # Errors
///
/// Returns an error if the terminal cannot be put into (or restored from)
/// raw mode and the alternate screen, or if drawing fails.
pub async fn run(options: TuiOptions) -> Result<()> {
    ui::runtime::run_app(options).await
}
