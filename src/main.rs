use std::io;

use tokio::sync::mpsc;
use tracing::error;

use dompet::DompetError;
use dompet::client::WalletClient;
use dompet::config::fetch_config;
use dompet::credentials;
use dompet::tui::{
    self, Action, App, Message, app::FetchStatus, restore_terminal, setup_terminal,
    spawn_event_reader, spawn_tick_timer,
};

#[tokio::main]
async fn main() -> Result<(), DompetError> {
    // The TUI owns stdout; log to stderr.
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    credentials::populate_env_from_keychain();
    let config = fetch_config()?;
    let client = WalletClient::new(&config.api)?;
    let limit = config.api.mutation_limit;

    let (tx, mut rx) = mpsc::unbounded_channel();
    spawn_event_reader(tx.clone());
    spawn_tick_timer(tx.clone(), 250);

    let mut app = App::new();
    app.fetch_status = FetchStatus::Loading;
    spawn_fetch(client.clone(), limit, tx.clone());

    let mut terminal = setup_terminal()?;
    let result = run(&mut terminal, &mut app, &mut rx, &client, limit, &tx).await;
    restore_terminal(&mut terminal)?;
    result
}

/// Drives the draw/update loop until quit or channel close.
async fn run(
    terminal: &mut tui::Tui,
    app: &mut App,
    rx: &mut mpsc::UnboundedReceiver<Message>,
    client: &WalletClient,
    limit: usize,
    tx: &mpsc::UnboundedSender<Message>,
) -> Result<(), DompetError> {
    while !app.should_quit {
        terminal
            .draw(|frame| tui::render(frame, app))
            .map_err(|e| DompetError::Io(e.to_string()))?;

        let Some(message) = rx.recv().await else {
            break;
        };
        if let Some(action) = tui::update(app, message) {
            match action {
                Action::Refresh => spawn_fetch(client.clone(), limit, tx.clone()),
            }
        }
    }
    Ok(())
}

/// Fetches balance and mutations concurrently; the pair is committed as
/// a single message only once both calls settle, and a failure leaves
/// the previous snapshot untouched.
fn spawn_fetch(client: WalletClient, limit: usize, tx: mpsc::UnboundedSender<Message>) {
    tokio::spawn(async move {
        match client.load_snapshot(limit).await {
            Ok((balance, mutations)) => {
                let _ = tx.send(Message::SnapshotLoaded { balance, mutations });
            }
            Err(e) => {
                error!(error = %e, "wallet snapshot fetch failed");
                let _ = tx.send(Message::FetchFailed(e.to_string()));
            }
        }
    });
}
