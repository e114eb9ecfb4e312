//! Drives a [`RevealEngine`] from one async task.
//!
//! The frame tick, the reveal-step tick and every external request (result, resize,
//! stop) are multiplexed with `tokio::select!` onto the task that owns the engine, so the
//! engine's state is never touched from two places at once. Other threads talk to it only
//! through an [`EngineHandle`].

use image::DynamicImage;
use tokio::{
    sync::{mpsc, watch},
    time::{Instant, Interval, MissedTickBehavior},
};

use crate::{
    engine::{
        reveal::{RevealEngine, RevealStep, StopFlag},
        state::EngineState,
    },
    foundation::core::Viewport,
};

#[derive(Debug)]
pub enum EngineCommand {
    SupplyResult(DynamicImage),
    Resize(Viewport),
    Stop,
}

/// Cloneable, `Send` front door to a running [`Scheduler`].
#[derive(Clone, Debug)]
pub struct EngineHandle {
    commands: mpsc::UnboundedSender<EngineCommand>,
    stop: StopFlag,
    state: watch::Receiver<EngineState>,
}

impl EngineHandle {
    /// Hand the enhanced image to the engine. Safe to call from any thread.
    /// Returns `false` if the scheduler is already gone.
    pub fn supply_result(&self, result: DynamicImage) -> bool {
        self.commands
            .send(EngineCommand::SupplyResult(result))
            .is_ok()
    }

    pub fn resize(&self, viewport: Viewport) -> bool {
        self.commands.send(EngineCommand::Resize(viewport)).is_ok()
    }

    /// Idempotent. Takes effect before the next render even if the command is still queued.
    pub fn stop(&self) {
        self.stop.raise();
        let _ = self.commands.send(EngineCommand::Stop);
    }

    pub fn is_stopped(&self) -> bool {
        self.stop.is_raised()
    }

    pub fn state(&self) -> EngineState {
        *self.state.borrow()
    }

    pub fn state_changes(&self) -> watch::Receiver<EngineState> {
        self.state.clone()
    }
}

enum Event {
    Command(Option<EngineCommand>),
    RevealStep,
    Frame,
}

#[derive(Debug)]
pub struct Scheduler {
    engine: RevealEngine,
    commands: mpsc::UnboundedReceiver<EngineCommand>,
    state: watch::Sender<EngineState>,
}

impl Scheduler {
    pub fn new(engine: RevealEngine) -> (Self, EngineHandle) {
        let (tx, rx) = mpsc::unbounded_channel();
        let (state_tx, state_rx) = watch::channel(engine.state());
        let handle = EngineHandle {
            commands: tx,
            stop: engine.stop_flag(),
            state: state_rx,
        };
        (
            Self {
                engine,
                commands: rx,
                state: state_tx,
            },
            handle,
        )
    }

    /// Runs until the engine stops (via a handle or a presentation failure) and hands the
    /// engine back for inspection.
    pub async fn run(mut self) -> RevealEngine {
        let mut frames = tokio::time::interval(self.engine.frame_interval());
        frames.set_missed_tick_behavior(MissedTickBehavior::Skip);

        let mut reveal: Option<Interval> = None;
        let mut reveal_armed = false;
        let mut commands_open = true;

        while !self.engine.is_stopped() {
            let event = tokio::select! {
                biased;
                cmd = self.commands.recv(), if commands_open => Event::Command(cmd),
                () = next_reveal_step(&mut reveal) => Event::RevealStep,
                _ = frames.tick() => Event::Frame,
            };

            match event {
                Event::Command(Some(cmd)) => self.apply(cmd),
                Event::Command(None) => {
                    tracing::debug!("all engine handles dropped");
                    commands_open = false;
                }
                Event::RevealStep => match self.engine.reveal_step() {
                    RevealStep::Advanced(_) => {}
                    RevealStep::Finished | RevealStep::Inactive => reveal = None,
                },
                Event::Frame => {
                    let elapsed = self.engine.elapsed();
                    self.engine.tick(elapsed);
                }
            }

            if !reveal_armed && self.engine.state() == EngineState::Revealing {
                let period = self.engine.reveal_step_interval();
                let mut timer = tokio::time::interval_at(Instant::now() + period, period);
                timer.set_missed_tick_behavior(MissedTickBehavior::Delay);
                reveal = Some(timer);
                reveal_armed = true;
            }
            self.publish_state();
        }

        tracing::debug!(state = %self.engine.state(), "scheduler exited");
        self.publish_state();
        self.engine
    }

    fn apply(&mut self, cmd: EngineCommand) {
        match cmd {
            EngineCommand::SupplyResult(img) => {
                self.engine.supply_result(&img);
            }
            EngineCommand::Resize(viewport) => {
                self.engine.resize(viewport);
            }
            EngineCommand::Stop => self.engine.stop(),
        }
    }

    fn publish_state(&self) {
        let now = self.engine.state();
        let changed = self.state.send_if_modified(|s| {
            if *s == now {
                return false;
            }
            *s = now;
            true
        });
        if changed {
            tracing::info!(state = %now, status = now.status_label(), "engine state changed");
        }
    }
}

async fn next_reveal_step(timer: &mut Option<Interval>) {
    match timer {
        Some(t) => {
            t.tick().await;
        }
        None => std::future::pending::<()>().await,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/scheduler.rs"]
mod tests;
