//! Runtime: terminal lifecycle and the event loop.
//!
//! - Own the terminal lifecycle (raw mode, alternate screen, mouse capture).
//! - A blocking task reads crossterm events and forwards them over a channel.
//! - Each event is routed through `MainView`; the resulting effects are
//!   processed to completion before the next event is read, so collection
//!   updates are strictly sequential.
//! - Redraw only after something changed.

use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, prelude::*};
use tokio::{signal, sync::mpsc};
use tracing::{info, warn};

use crate::app::{App, Effect, Msg, TuiOptions};
use crate::ui::components::Component;
use crate::ui::main_component::MainView;

type Backend = CrosstermBackend<std::io::Stdout>;

const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Spawn a blocking reader that forwards terminal events to the event loop.
///
/// The reader polls with a short timeout so it notices a dropped receiver
/// and exits, letting the runtime shut down.
fn spawn_input_reader() -> mpsc::Receiver<Event> {
    let (sender, receiver) = mpsc::channel(256);
    tokio::task::spawn_blocking(move || {
        while !sender.is_closed() {
            match event::poll(INPUT_POLL_INTERVAL) {
                Ok(false) => continue,
                Ok(true) => {}
                Err(error) => {
                    warn!("Failed to poll terminal events: {}", error);
                    break;
                }
            }
            match event::read() {
                Ok(event) => {
                    if sender.blocking_send(event).is_err() {
                        break;
                    }
                }
                Err(error) => {
                    warn!("Failed to read terminal event: {}", error);
                    break;
                }
            }
        }
    });
    receiver
}

/// Put the terminal into raw mode and enter the alternate screen.
fn setup_terminal() -> Result<Terminal<Backend>> {
    enable_raw_mode().context("enable raw mode")?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture).context("enter alternate screen")?;
    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    Ok(terminal)
}

/// Restore terminal settings and leave the alternate screen.
fn cleanup_terminal(terminal: &mut Terminal<Backend>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;
    Ok(())
}

fn render(terminal: &mut Terminal<Backend>, app: &mut App, main_view: &mut MainView) -> Result<()> {
    terminal.draw(|frame| main_view.render(frame, frame.area(), app))?;
    Ok(())
}

/// Translate a raw terminal event into effects.
fn handle_input_event(app: &mut App, main_view: &mut MainView, input_event: Event) -> Vec<Effect> {
    match input_event {
        Event::Key(key_event) if key_event.kind == KeyEventKind::Press => main_view.handle_key_events(app, key_event),
        Event::Mouse(mouse_event) => main_view.handle_mouse_events(app, mouse_event),
        Event::Resize(width, height) => main_view.handle_message(app, Msg::Resize(width, height)),
        _ => Vec::new(),
    }
}

/// Process effects until none remain. Returns `true` when the app should quit.
fn process_effects(app: &mut App, main_view: &mut MainView, mut effects: Vec<Effect>) -> bool {
    while !effects.is_empty() {
        for effect in std::mem::take(&mut effects) {
            match main_view.handle_navigation_effect(app, effect) {
                Some(Effect::SendMsg(msg)) => effects.extend(main_view.handle_message(app, msg)),
                Some(Effect::Quit) => return true,
                Some(other) => warn!(?other, "Unhandled effect"),
                None => {}
            }
        }
    }
    false
}

async fn event_loop(terminal: &mut Terminal<Backend>, app: &mut App, main_view: &mut MainView) -> Result<()> {
    let mut input_receiver = spawn_input_reader();
    render(terminal, app, main_view)?;

    loop {
        tokio::select! {
            maybe_event = input_receiver.recv() => {
                let Some(input_event) = maybe_event else {
                    // Input reader stopped; shut down cleanly.
                    break;
                };
                if let Event::Key(key_event) = &input_event
                    && key_event.code == KeyCode::Char('c')
                    && key_event.modifiers.contains(KeyModifiers::CONTROL)
                {
                    break;
                }
                let effects = handle_input_event(app, main_view, input_event);
                if process_effects(app, main_view, effects) {
                    break;
                }
                render(terminal, app, main_view)?;
            }
            _ = signal::ctrl_c() => { break; }
        }
    }
    Ok(())
}

/// Entry point for the TUI: set up the terminal, run the loop, and always
/// restore the terminal afterwards.
pub async fn run_app(options: TuiOptions) -> Result<()> {
    let mut app = App::new(&options);
    let mut main_view = MainView::new();
    info!(theme = app.ctx.active_theme.id, age_limit = options.age_limit_months, "Starting Herbarium");

    let mut terminal = setup_terminal()?;
    let outcome = event_loop(&mut terminal, &mut app, &mut main_view).await;
    cleanup_terminal(&mut terminal)?;

    info!(plants = app.collection.len(), "Herbarium closed; collection discarded");
    outcome
}
