use tokio::sync::broadcast::error::RecvError;
use tracing_subscriber::EnvFilter;

use ringside_core::controls::SessionKeys;
use ringside_core::events::{Banner, DuelEvent};
use ringside_core::fighter::{Corner, Fighter};
use ringside_duel::Duel;
use ringside_duel::config::DuelConfig;
use ringside_runtime::session::{DuelBroadcast, SessionCommand, spawn_session};

/// Headless session host: runs one duel and logs display updates until the
/// round is decided.
#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    tracing::info!("Ringside session starting");

    let profiles = [
        Fighter {
            name: "Player 1".to_string(),
            corner: Corner::Left,
        },
        Fighter {
            name: "Player 2".to_string(),
            corner: Corner::Right,
        },
    ];
    let duel = Duel::new(profiles, DuelConfig::load());
    let (commands, mut events, handle) = spawn_session(duel, SessionKeys::default());

    loop {
        match events.recv().await {
            Ok(DuelBroadcast::Display(event)) => {
                tracing::info!(?event, "display update");
                if matches!(
                    event,
                    DuelEvent::BannerShown(Banner::Tie | Banner::Wins(_))
                ) {
                    let _ = commands.send(SessionCommand::Stop);
                }
            },
            Ok(DuelBroadcast::SessionEnded) | Err(RecvError::Closed) => break,
            Err(RecvError::Lagged(skipped)) => {
                tracing::warn!(skipped, "display events dropped");
            },
        }
    }

    let _ = handle.await;
}
