//! Main TUI runner - entry point and event loop

use tokio::sync::mpsc;
use xword_app::message::Message;
use xword_app::process::process_message;
use xword_app::signals;
use xword_app::storage::KeyValueStore;
use xword_app::{AppState, Catalog, Settings, TimerScheduler, TimerService};
use xword_core::prelude::*;

use crate::{event, render, terminal};

/// Run the TUI until the user quits
pub async fn run(
    catalog: Catalog,
    settings: Settings,
    store: Option<Box<dyn KeyValueStore>>,
) -> Result<()> {
    let timer = TimerService::new(store);
    if !timer.is_persistent() {
        info!("Progress will not be saved this run");
    }
    let mut state = AppState::new(catalog, settings, timer);

    // Timer ticks and shutdown signals share one queue
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);
    let signal_task = signals::spawn_shutdown_listener(msg_tx.clone());
    let mut scheduler = TimerScheduler::new(msg_tx);

    match state.initial_puzzle_id() {
        Some(id) => process_message(&mut state, Message::SelectPuzzle { id }, &mut scheduler),
        None => warn!("Catalog is empty; nothing to solve"),
    }

    let mut session = terminal::TerminalSession::enter()?;
    let result = run_loop(session.terminal(), &mut state, msg_rx, &mut scheduler);

    scheduler.stop();
    signal_task.abort();
    drop(session);

    info!("xword exiting");
    result
}

/// Main event loop
fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    scheduler: &mut TimerScheduler,
) -> Result<()> {
    while !state.should_quit() {
        // Process queued messages (timer ticks, signals)
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg, scheduler);
        }

        terminal.draw(|frame| render::view(frame, state))?;

        if let Some(message) = event::poll()? {
            process_message(state, message, scheduler);
        }
    }

    Ok(())
}
