//! Countdown dispatcher task
//!
//! One task owns the engine. Commands and ticks are serialized through its
//! select loop, and the tick source is armed exactly while the engine runs.

use std::num::NonZeroU32;

use tokio::{
    sync::{mpsc, oneshot, watch},
    task::JoinHandle,
};
use tracing::{debug, info};

use super::TickSource;
use crate::{
    config::TimerOptions,
    services::CompletionHook,
    state::{CountdownEngine, Snapshot, TickOutcome},
};

const COMMAND_QUEUE_DEPTH: usize = 32;

/// User commands, the only mutators of a countdown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    StartOrPause,
    Reset,
    SetDuration(NonZeroU32),
}

#[derive(Debug)]
enum Message {
    Command {
        command: Command,
        reply: oneshot::Sender<Snapshot>,
    },
    Teardown,
}

/// Cloneable handle to a running countdown task
#[derive(Debug, Clone)]
pub struct TimerHandle {
    tx: mpsc::Sender<Message>,
    snapshot_rx: watch::Receiver<Snapshot>,
}

impl TimerHandle {
    /// Queue a command and wait for the snapshot it produced
    pub async fn send(&self, command: Command) -> Result<Snapshot, String> {
        let (reply, reply_rx) = oneshot::channel();
        self.tx
            .send(Message::Command { command, reply })
            .await
            .map_err(|_| "Countdown task has stopped".to_string())?;

        reply_rx
            .await
            .map_err(|_| "Countdown task stopped before replying".to_string())
    }

    pub async fn start_or_pause(&self) -> Result<Snapshot, String> {
        self.send(Command::StartOrPause).await
    }

    pub async fn reset(&self) -> Result<Snapshot, String> {
        self.send(Command::Reset).await
    }

    pub async fn set_duration(&self, minutes: NonZeroU32) -> Result<Snapshot, String> {
        self.send(Command::SetDuration(minutes)).await
    }

    /// Latest published snapshot
    pub fn snapshot(&self) -> Snapshot {
        *self.snapshot_rx.borrow()
    }

    /// Receiver notified after every tick and command
    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.snapshot_rx.clone()
    }

    /// Stop the task and disarm its tick source
    pub async fn teardown(&self) -> Result<(), String> {
        self.tx
            .send(Message::Teardown)
            .await
            .map_err(|_| "Countdown task has already stopped".to_string())
    }
}

/// Spawn a countdown task on the current tokio runtime
pub fn spawn_countdown<T>(options: &TimerOptions, ticks: T) -> (TimerHandle, JoinHandle<()>)
where
    T: TickSource + Send + 'static,
{
    let engine = CountdownEngine::new(options.duration_secs);
    let (tx, rx) = mpsc::channel(COMMAND_QUEUE_DEPTH);
    let (snapshot_tx, snapshot_rx) = watch::channel(engine.snapshot());
    let hook = CompletionHook::from_options(options);

    let task = tokio::spawn(countdown_task(engine, ticks, rx, snapshot_tx, hook));
    (TimerHandle { tx, snapshot_rx }, task)
}

fn apply(engine: &mut CountdownEngine, command: Command) {
    match command {
        Command::StartOrPause => {
            let run_state = engine.start_or_pause();
            info!("Start/pause: now {:?} with {}s remaining", run_state, engine.remaining_secs());
        }
        Command::Reset => {
            engine.reset();
            info!("Countdown reset to {}s", engine.total_secs());
        }
        Command::SetDuration(minutes) => {
            engine.set_duration(minutes);
            info!("Countdown span set to {} min", minutes);
        }
    }
}

/// Arm the tick source iff the engine is running
fn sync_ticks<T: TickSource>(engine: &CountdownEngine, ticks: &mut T) {
    match (engine.is_running(), ticks.is_armed()) {
        (true, false) => {
            debug!("Arming tick source");
            ticks.arm();
        }
        (false, true) => {
            debug!("Disarming tick source");
            ticks.disarm();
        }
        _ => {}
    }
}

async fn countdown_task<T: TickSource>(
    mut engine: CountdownEngine,
    mut ticks: T,
    mut rx: mpsc::Receiver<Message>,
    snapshot_tx: watch::Sender<Snapshot>,
    hook: CompletionHook,
) {
    info!("Starting countdown task with a {}s span", engine.total_secs());

    loop {
        let reply = tokio::select! {
            // Ticks already delivered win over commands queued after them
            biased;

            _ = ticks.tick(), if ticks.is_armed() => {
                match engine.on_tick() {
                    TickOutcome::Counted => debug!("Tick: {}s remaining", engine.remaining_secs()),
                    TickOutcome::Completed => hook.fire(),
                    TickOutcome::Ignored => debug!("Tick delivered while idle, ignored"),
                }
                None
            }

            message = rx.recv() => match message {
                Some(Message::Command { command, reply }) => {
                    apply(&mut engine, command);
                    Some(reply)
                }
                Some(Message::Teardown) => {
                    info!("Countdown teardown requested");
                    break;
                }
                None => {
                    info!("All timer handles dropped");
                    break;
                }
            }
        };

        sync_ticks(&engine, &mut ticks);
        let snapshot = engine.snapshot();
        snapshot_tx.send_replace(snapshot);

        if let Some(reply) = reply {
            if reply.send(snapshot).is_err() {
                debug!("Command caller went away before the reply");
            }
        }
    }

    ticks.disarm();
    info!("Countdown task stopped");
}
