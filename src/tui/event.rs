//! Event handling for the TUI.

use std::time::Duration;

use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc;

use crate::models::balance::BalanceSnapshot;
use crate::models::mutation::MutationRecord;

use super::app::{App, FetchStatus, Mode};

/// Events that can occur in the application.
#[derive(Debug)]
pub enum Event {
    /// A key was pressed.
    Key(KeyEvent),
    /// Terminal was resized.
    Resize(u16, u16),
    /// Periodic tick for UI updates.
    Tick,
}

/// Messages that update application state.
#[derive(Debug)]
pub enum Message {
    /// Input event from terminal.
    Input(Event),

    /// Balance and mutation window fetched together; never delivered
    /// unless both calls succeeded.
    SnapshotLoaded {
        balance: BalanceSnapshot,
        mutations: Vec<MutationRecord>,
    },
    /// A fetch failed; the previous snapshot stays on screen.
    FetchFailed(String),

    /// Request to quit the application.
    Quit,
}

/// Follow-up work the event loop owner must perform after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Re-fetch the wallet snapshot.
    Refresh,
}

/// Spawns a task that polls for terminal events and sends them to a channel.
pub fn spawn_event_reader(tx: mpsc::UnboundedSender<Message>) {
    tokio::spawn(async move {
        loop {
            // Poll for events with a 50ms timeout
            match tokio::task::spawn_blocking(|| {
                if event::poll(Duration::from_millis(50)).unwrap_or(false) {
                    event::read().ok()
                } else {
                    None
                }
            })
            .await
            {
                Ok(Some(CrosstermEvent::Key(key))) => {
                    if tx.send(Message::Input(Event::Key(key))).is_err() {
                        break;
                    }
                }
                Ok(Some(CrosstermEvent::Resize(w, h))) => {
                    if tx.send(Message::Input(Event::Resize(w, h))).is_err() {
                        break;
                    }
                }
                Ok(_) => {}
                Err(_) => break,
            }
        }
    });
}

/// Spawns a task that sends periodic tick events.
pub fn spawn_tick_timer(tx: mpsc::UnboundedSender<Message>, interval_ms: u64) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_millis(interval_ms));
        loop {
            interval.tick().await;
            if tx.send(Message::Input(Event::Tick)).is_err() {
                break;
            }
        }
    });
}

/// Updates application state based on a message.
pub fn update(app: &mut App, message: Message) -> Option<Action> {
    match message {
        Message::Input(event) => handle_input(app, event),
        Message::SnapshotLoaded { balance, mutations } => {
            app.apply_snapshot(balance, mutations);
            None
        }
        Message::FetchFailed(message) => {
            app.fetch_failed(message);
            None
        }
        Message::Quit => {
            app.should_quit = true;
            None
        }
    }
}

/// Routes an input event by the current mode.
fn handle_input(app: &mut App, event: Event) -> Option<Action> {
    match event {
        Event::Key(key) => match app.mode {
            Mode::Normal => handle_normal_key(app, key),
            Mode::Search => handle_search_key(app, key),
        },
        Event::Resize(..) | Event::Tick => None,
    }
}

fn handle_normal_key(app: &mut App, key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Char('q') => {
            app.should_quit = true;
            None
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true;
            None
        }
        KeyCode::Char('r') => {
            app.fetch_status = FetchStatus::Loading;
            Some(Action::Refresh)
        }
        KeyCode::Char('f') => {
            app.cycle_filter();
            None
        }
        KeyCode::Left | KeyCode::Char('h') => {
            app.previous_page();
            None
        }
        KeyCode::Right | KeyCode::Char('l') => {
            app.next_page();
            None
        }
        KeyCode::Char('/') => {
            app.begin_search();
            None
        }
        KeyCode::Esc => {
            app.clear_search();
            None
        }
        _ => None,
    }
}

fn handle_search_key(app: &mut App, key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Enter => app.commit_search(),
        KeyCode::Esc => app.cancel_search(),
        KeyCode::Backspace => app.delete_search_char(),
        KeyCode::Left => app.move_search_cursor_left(),
        KeyCode::Right => app.move_search_cursor_right(),
        KeyCode::Char(c) => app.insert_search_char(c),
        _ => {}
    }
    None
}
