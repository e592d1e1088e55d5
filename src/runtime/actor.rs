//! A session running inside one tokio task.
//!
//! The task owns the `GameEngine`. Player input arrives as [`Command`]s over an
//! `mpsc` channel, so a timer frame and a dig can never touch the grid or the
//! ledger at the same time. Every `TickEvent` is published on a `broadcast`
//! channel for any number of listeners.

use rand::Rng;
use std::time::Duration;
use tokio::sync::{broadcast, mpsc, oneshot};
use tokio::task::JoinHandle;
use tokio::time::{interval, Instant, Interval, MissedTickBehavior};
use tracing::{debug, info};

use crate::core::engine::{AnswerOutcome, DigRequest, GameEngine};
use crate::core::game_state::GameState;
use crate::core::tick::TickEvent;
use crate::equipment::{EquipmentSlot, PurchaseOutcome};
use crate::error::SessionClosed;
use crate::problems::Problem;

const COMMAND_BUFFER: usize = 64;
const EVENT_BUFFER: usize = 256;

pub enum Command {
    RequestDig {
        row: usize,
        col: usize,
        reply: oneshot::Sender<DigRequest>,
    },
    RequestSuperpower {
        reply: oneshot::Sender<Option<Problem>>,
    },
    SubmitAnswer {
        answer: i64,
        use_dynamite: bool,
        reply: oneshot::Sender<AnswerOutcome>,
    },
    CancelChallenge,
    Purchase {
        slot: EquipmentSlot,
        reply: oneshot::Sender<PurchaseOutcome>,
    },
    SetTestingMode(bool),
    SetMathDifficulty(u8),
    SetResourceMultiplier(u32),
    Reset,
    RegenerateMine,
    /// Moves virtual time forward by hand.
    Advance {
        elapsed_ms: u64,
        reply: oneshot::Sender<()>,
    },
    Snapshot {
        reply: oneshot::Sender<GameState>,
    },
    Shutdown,
}

pub struct SessionActor<R: Rng> {
    engine: GameEngine<R>,
    commands: mpsc::Receiver<Command>,
    events: broadcast::Sender<TickEvent>,
    frame: Option<Duration>,
}

impl<R: Rng + Send + 'static> SessionActor<R> {
    /// Starts the session task.
    ///
    /// With `frame` set, virtual time follows the wall clock, advanced once
    /// per frame. Without it, time only moves on [`SessionHandle::advance`].
    /// The task hands the engine back when it stops, ready to be saved.
    pub fn spawn(
        engine: GameEngine<R>,
        frame: Option<Duration>,
    ) -> (SessionHandle, JoinHandle<GameEngine<R>>) {
        let (command_tx, commands) = mpsc::channel(COMMAND_BUFFER);
        let (events, _) = broadcast::channel(EVENT_BUFFER);

        let actor = SessionActor {
            engine,
            commands,
            events: events.clone(),
            frame,
        };
        let handle = SessionHandle {
            commands: command_tx,
            events,
        };
        (handle, tokio::spawn(actor.run()))
    }

    async fn run(mut self) -> GameEngine<R> {
        let mut frames = self.frame.map(|period| {
            let mut frames = interval(period);
            frames.set_missed_tick_behavior(MissedTickBehavior::Delay);
            frames
        });
        let mut last = Instant::now();

        info!("session started");
        loop {
            tokio::select! {
                command = self.commands.recv() => match command {
                    Some(Command::Shutdown) | None => break,
                    Some(command) => self.handle(command),
                },
                _ = next_frame(&mut frames) => {
                    let elapsed_ms = last.elapsed().as_millis() as u64;
                    last += Duration::from_millis(elapsed_ms);
                    self.advance(elapsed_ms);
                }
            }
        }
        info!("session stopped");
        self.engine
    }

    fn handle(&mut self, command: Command) {
        match command {
            Command::RequestDig { row, col, reply } => {
                let _ = reply.send(self.engine.request_dig(row, col));
            }
            Command::RequestSuperpower { reply } => {
                let _ = reply.send(self.engine.request_superpower());
            }
            Command::SubmitAnswer {
                answer,
                use_dynamite,
                reply,
            } => {
                let _ = reply.send(self.engine.submit_answer(answer, use_dynamite));
            }
            Command::CancelChallenge => self.engine.cancel_challenge(),
            Command::Purchase { slot, reply } => {
                let _ = reply.send(self.engine.purchase(slot));
            }
            Command::SetTestingMode(enabled) => self.engine.set_testing_mode(enabled),
            Command::SetMathDifficulty(level) => self.engine.set_math_difficulty(level),
            Command::SetResourceMultiplier(m) => self.engine.set_resource_multiplier(m),
            Command::Reset => self.engine.reset(),
            Command::RegenerateMine => self.engine.regenerate_mine(),
            Command::Advance { elapsed_ms, reply } => {
                self.advance(elapsed_ms);
                let _ = reply.send(());
            }
            Command::Snapshot { reply } => {
                let _ = reply.send(self.engine.state().clone());
            }
            Command::Shutdown => {}
        }
        let events = self.engine.drain_events();
        self.publish(events);
    }

    fn advance(&mut self, elapsed_ms: u64) {
        let events = self.engine.advance(elapsed_ms);
        self.publish(events);
    }

    fn publish(&self, events: Vec<TickEvent>) {
        for event in events {
            // No subscribers is fine.
            if self.events.send(event).is_err() {
                debug!("event dropped, no subscribers");
            }
        }
    }
}

async fn next_frame(frames: &mut Option<Interval>) {
    match frames {
        Some(frames) => {
            frames.tick().await;
        }
        None => std::future::pending().await,
    }
}

/// Cloneable front end to a running session.
#[derive(Clone)]
pub struct SessionHandle {
    commands: mpsc::Sender<Command>,
    events: broadcast::Sender<TickEvent>,
}

impl SessionHandle {
    /// Events published from now on.
    pub fn subscribe(&self) -> broadcast::Receiver<TickEvent> {
        self.events.subscribe()
    }

    async fn send(&self, command: Command) -> Result<(), SessionClosed> {
        self.commands.send(command).await.map_err(|_| SessionClosed)
    }

    async fn call<T>(
        &self,
        make: impl FnOnce(oneshot::Sender<T>) -> Command,
    ) -> Result<T, SessionClosed> {
        let (reply, response) = oneshot::channel();
        self.send(make(reply)).await?;
        response.await.map_err(|_| SessionClosed)
    }

    pub async fn request_dig(&self, row: usize, col: usize) -> Result<DigRequest, SessionClosed> {
        self.call(|reply| Command::RequestDig { row, col, reply })
            .await
    }

    pub async fn request_superpower(&self) -> Result<Option<Problem>, SessionClosed> {
        self.call(|reply| Command::RequestSuperpower { reply }).await
    }

    pub async fn submit_answer(
        &self,
        answer: i64,
        use_dynamite: bool,
    ) -> Result<AnswerOutcome, SessionClosed> {
        self.call(|reply| Command::SubmitAnswer {
            answer,
            use_dynamite,
            reply,
        })
        .await
    }

    pub async fn cancel_challenge(&self) -> Result<(), SessionClosed> {
        self.send(Command::CancelChallenge).await
    }

    pub async fn purchase(&self, slot: EquipmentSlot) -> Result<PurchaseOutcome, SessionClosed> {
        self.call(|reply| Command::Purchase { slot, reply }).await
    }

    pub async fn set_testing_mode(&self, enabled: bool) -> Result<(), SessionClosed> {
        self.send(Command::SetTestingMode(enabled)).await
    }

    pub async fn set_math_difficulty(&self, difficulty: u8) -> Result<(), SessionClosed> {
        self.send(Command::SetMathDifficulty(difficulty)).await
    }

    pub async fn set_resource_multiplier(&self, multiplier: u32) -> Result<(), SessionClosed> {
        self.send(Command::SetResourceMultiplier(multiplier)).await
    }

    pub async fn reset(&self) -> Result<(), SessionClosed> {
        self.send(Command::Reset).await
    }

    pub async fn regenerate_mine(&self) -> Result<(), SessionClosed> {
        self.send(Command::RegenerateMine).await
    }

    /// Moves virtual time forward and waits until every due action ran.
    pub async fn advance(&self, elapsed_ms: u64) -> Result<(), SessionClosed> {
        self.call(|reply| Command::Advance { elapsed_ms, reply })
            .await
    }

    /// A copy of the persisted part of the session.
    pub async fn snapshot(&self) -> Result<GameState, SessionClosed> {
        self.call(|reply| Command::Snapshot { reply }).await
    }

    pub async fn shutdown(&self) -> Result<(), SessionClosed> {
        self.send(Command::Shutdown).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::{ATTACK_WINDUP_MS, COMBAT_TICK_MS, DIG_RESOLVE_MS};
    use crate::combat::Side;
    use crate::mine::TileType;

    fn manual_session() -> (SessionHandle, JoinHandle<GameEngine>) {
        SessionActor::spawn(GameEngine::with_seed(11), None)
    }

    #[tokio::test]
    async fn test_dig_through_handle() {
        let (handle, task) = manual_session();
        let mut events = handle.subscribe();

        // Row 0 has a pre-carved opening above column 3.
        let problem = match handle.request_dig(1, 3).await.unwrap() {
            DigRequest::Challenge(problem) => problem,
            other => panic!("expected challenge, got {:?}", other),
        };
        let outcome = handle.submit_answer(problem.answer, false).await.unwrap();
        assert!(matches!(outcome, AnswerOutcome::DigScheduled { row: 1, col: 3, .. }));

        handle.advance(DIG_RESOLVE_MS).await.unwrap();
        let event = events.recv().await.unwrap();
        assert!(matches!(event, TickEvent::DigResolved { row: 1, col: 3, .. }));

        let state = handle.snapshot().await.unwrap();
        assert_eq!(state.grid.tile_type(1, 3), Some(TileType::Empty));
        assert_eq!(state.deepest_row, 1);

        handle.shutdown().await.unwrap();
        let engine = task.await.unwrap();
        assert_eq!(engine.state().grid.tile_type(1, 3), Some(TileType::Empty));
    }

    #[tokio::test]
    async fn test_combat_advances_on_manual_clock() {
        let (handle, task) = manual_session();
        let mut events = handle.subscribe();

        handle
            .advance(COMBAT_TICK_MS + ATTACK_WINDUP_MS)
            .await
            .unwrap();
        assert_eq!(
            events.recv().await.unwrap(),
            TickEvent::AttackStarted {
                attacker: Side::Hero
            }
        );
        assert!(matches!(
            events.recv().await.unwrap(),
            TickEvent::AttackResolved {
                attacker: Side::Hero,
                ..
            }
        ));

        handle.shutdown().await.unwrap();
        task.await.unwrap();
    }

    #[tokio::test]
    async fn test_handle_reports_closed_session() {
        let (handle, task) = manual_session();
        handle.shutdown().await.unwrap();
        task.await.unwrap();
        assert_eq!(handle.snapshot().await.unwrap_err(), SessionClosed);
    }
}
