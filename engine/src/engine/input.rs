use super::broadcaster::GameBroadcaster;
use super::session::SnakeEngine;
use crate::game::{Direction, GameStatus};

/// Already-classified host input. Raw key handling stays host-side.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputIntent {
    Turn(Direction),
    Start,
}

impl<B: GameBroadcaster> SnakeEngine<B> {
    pub async fn handle_input(&mut self, intent: InputIntent) {
        match intent {
            InputIntent::Turn(direction) => self.handle_direction_input(direction).await,
            InputIntent::Start => self.handle_start_input().await,
        }
    }

    /// Turns are ignored unless the game is running and the scheduler is
    /// live. An accepted change notifies the input channel once.
    pub async fn handle_direction_input(&self, direction: Direction) {
        if !self.is_running() {
            return;
        }

        let accepted = {
            let mut state = self.state.lock().await;
            state.status == GameStatus::Running && state.set_direction(direction)
        };

        if accepted {
            self.broadcaster.broadcast_input().await;
        }
    }

    /// The start intent restarts only from an idle session (never started,
    /// game over, or stopped); while actively running it is a no-op.
    pub async fn handle_start_input(&mut self) {
        let status = self.state.lock().await.status;
        if status == GameStatus::Running && self.is_running() {
            return;
        }
        self.restart().await;
    }
}
