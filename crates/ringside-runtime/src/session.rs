use std::time::Duration;

use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;
use tokio::time::{Interval, MissedTickBehavior};

use ringside_core::controls::SessionKeys;
use ringside_core::events::DuelEvent;
use ringside_core::input::InputState;
use ringside_duel::Duel;

/// Capacity of the display broadcast channel. Slow subscribers miss events
/// rather than blocking the session loop.
const EVENT_CHANNEL_CAPACITY: usize = 64;
/// The countdown cadence.
const COUNTDOWN_PERIOD: Duration = Duration::from_secs(1);

/// Commands sent from the input collaborator to the session loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    KeyDown(String),
    KeyUp(String),
    /// Pause or resume without a key trigger.
    TogglePause,
    /// Restart without a key trigger.
    Restart,
    Stop,
}

/// Broadcasts sent from the session loop to display subscribers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DuelBroadcast {
    Display(DuelEvent),
    /// The session loop has exited.
    SessionEnded,
}

/// Spawn a duel session as a tokio task. Returns the command sender, a
/// display event receiver, and the task handle.
pub fn spawn_session(
    duel: Duel,
    keys: SessionKeys,
) -> (
    mpsc::UnboundedSender<SessionCommand>,
    broadcast::Receiver<DuelBroadcast>,
    JoinHandle<()>,
) {
    let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
    let (event_tx, event_rx) = broadcast::channel(EVENT_CHANNEL_CAPACITY);

    let handle = tokio::spawn(run_session(duel, keys, cmd_rx, event_tx));
    (cmd_tx, event_rx, handle)
}

/// The session loop: a logic interval driving combat ticks, a one-second
/// countdown interval, and command receipt, multiplexed on one task. The
/// select is biased so a knockout in a logic tick is decided before a
/// countdown expiry queued for the same batch.
async fn run_session(
    mut duel: Duel,
    keys: SessionKeys,
    mut cmd_rx: mpsc::UnboundedReceiver<SessionCommand>,
    event_tx: broadcast::Sender<DuelBroadcast>,
) {
    let tick_period = Duration::from_millis(duel.config().tick_interval_ms.max(1));
    let mut logic = tokio::time::interval(tick_period);
    logic.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let mut countdown = new_countdown();
    let mut countdown_armed = true;
    let mut input = InputState::default();

    tracing::info!(round_secs = duel.config().round_secs, "duel session running");

    loop {
        tokio::select! {
            biased;
            _ = logic.tick() => {
                publish(&event_tx, duel.tick(&input));
                if duel.outcome().is_some() {
                    countdown_armed = false;
                }
            }
            _ = countdown.tick(), if countdown_armed => {
                publish(&event_tx, duel.second());
                if duel.outcome().is_some() {
                    countdown_armed = false;
                }
            }
            cmd = cmd_rx.recv() => match cmd {
                Some(SessionCommand::KeyDown(key)) => {
                    if key == keys.pause {
                        toggle_pause(&mut duel, &event_tx, &mut countdown, &mut countdown_armed);
                    } else if key == keys.restart {
                        restart(&mut duel, &event_tx, &mut countdown, &mut countdown_armed);
                    } else {
                        input.press(&key);
                    }
                }
                Some(SessionCommand::KeyUp(key)) => input.release(&key),
                Some(SessionCommand::TogglePause) => {
                    toggle_pause(&mut duel, &event_tx, &mut countdown, &mut countdown_armed);
                }
                Some(SessionCommand::Restart) => {
                    restart(&mut duel, &event_tx, &mut countdown, &mut countdown_armed);
                }
                Some(SessionCommand::Stop) | None => break,
            }
        }
    }

    tracing::info!("duel session ended");
    let _ = event_tx.send(DuelBroadcast::SessionEnded);
}

/// A fresh countdown interval whose first tick fires one full second from
/// now; pausing mid-second therefore rounds that second up on resume.
fn new_countdown() -> Interval {
    let mut interval =
        tokio::time::interval_at(tokio::time::Instant::now() + COUNTDOWN_PERIOD, COUNTDOWN_PERIOD);
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
    interval
}

fn toggle_pause(
    duel: &mut Duel,
    event_tx: &broadcast::Sender<DuelBroadcast>,
    countdown: &mut Interval,
    countdown_armed: &mut bool,
) {
    let events = duel.toggle_pause();
    if events.is_empty() {
        tracing::debug!("pause toggle ignored, round already decided");
        return;
    }
    publish(event_tx, events);
    if duel.is_paused() {
        *countdown_armed = false;
    } else {
        *countdown = new_countdown();
        *countdown_armed = true;
    }
}

fn restart(
    duel: &mut Duel,
    event_tx: &broadcast::Sender<DuelBroadcast>,
    countdown: &mut Interval,
    countdown_armed: &mut bool,
) {
    publish(event_tx, duel.restart());
    *countdown = new_countdown();
    *countdown_armed = true;
}

fn publish(event_tx: &broadcast::Sender<DuelBroadcast>, events: Vec<DuelEvent>) {
    for event in events {
        // Send only fails when no subscriber is connected
        let _ = event_tx.send(DuelBroadcast::Display(event));
    }
}
