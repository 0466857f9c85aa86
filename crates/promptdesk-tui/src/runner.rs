//! Main TUI loop

use tokio::sync::mpsc;

use promptdesk_app::message::Message;
use promptdesk_app::signals;
use promptdesk_app::{process_message, AppState};
use promptdesk_core::prelude::*;

use crate::{event, render, terminal};

/// Run the TUI until the user quits or a shutdown signal arrives.
pub async fn run(mut state: AppState) -> Result<()> {
    terminal::install_panic_hook();

    info!(
        "Starting TUI: {} tools, {} prompts",
        state.tools.store.len(),
        state.prompts.store.len()
    );

    let mut term = ratatui::try_init()
        .map_err(|e| Error::terminal(format!("Failed to initialize terminal: {}", e)))?;

    let (msg_tx, msg_rx) = mpsc::channel::<Message>(16);
    signals::spawn_signal_handler(msg_tx);

    let result = run_loop(&mut term, &mut state, msg_rx);

    ratatui::restore();

    if let Err(e) = &result {
        error!("TUI loop failed: {}", e);
    } else {
        info!("PromptDesk exiting");
    }
    result
}

fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
) -> Result<()> {
    while !state.should_quit() {
        // Signal-driven messages
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg);
        }

        terminal.draw(|frame| render::view(frame, state))?;

        if let Some(message) = event::poll()? {
            process_message(state, message);
        }
    }

    Ok(())
}
