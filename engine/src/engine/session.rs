use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::interval;

use super::broadcaster::GameBroadcaster;
use crate::config::{GameConfig, Validate};
use crate::game::{GameSnapshot, GameState, GameStatus, SessionRng, TickEvent};
use crate::log;

pub struct SnakeEngine<B: GameBroadcaster> {
    pub(crate) config: GameConfig,
    pub(crate) state: Arc<Mutex<GameState>>,
    pub(crate) rng: Arc<Mutex<SessionRng>>,
    pub(crate) broadcaster: B,
    pub(crate) loop_handle: Option<JoinHandle<()>>,
}

impl<B: GameBroadcaster> SnakeEngine<B> {
    pub fn new(config: GameConfig, seed: u64, broadcaster: B) -> Result<Self, String> {
        config.validate()?;
        log!("Session created, seed {}", seed);

        let state = GameState::new(&config);
        Ok(Self {
            config,
            state: Arc::new(Mutex::new(state)),
            rng: Arc::new(Mutex::new(SessionRng::new(seed))),
            broadcaster,
            loop_handle: None,
        })
    }

    /// Resets the whole session and starts ticking. Any previous loop is
    /// stopped first so a single timer drives the game.
    pub async fn restart(&mut self) {
        self.stop().await;

        {
            let mut state = self.state.lock().await;
            *state = GameState::new(&self.config);
            state.status = GameStatus::Running;
        }
        log!("Game restarted");

        let state = Arc::clone(&self.state);
        let rng = Arc::clone(&self.rng);
        let broadcaster = self.broadcaster.clone();
        let tick_interval = self.config.tick_interval();

        self.loop_handle = Some(tokio::spawn(async move {
            run_loop(state, rng, broadcaster, tick_interval).await;
        }));
    }

    /// Halts the scheduler without touching game state. Once this returns
    /// no further tick fires; only `restart` resumes play.
    pub async fn stop(&mut self) {
        if let Some(handle) = self.loop_handle.take() {
            handle.abort();
            let _ = handle.await;
            log!("Game loop stopped");
        }
    }

    pub fn is_running(&self) -> bool {
        self.loop_handle
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    pub async fn current_state(&self) -> GameSnapshot {
        self.state.lock().await.snapshot()
    }
}

async fn run_loop<B: GameBroadcaster>(
    state: Arc<Mutex<GameState>>,
    rng: Arc<Mutex<SessionRng>>,
    broadcaster: B,
    tick_interval: Duration,
) {
    let mut timer = interval(tick_interval);
    // The interval's first tick completes immediately; consume it so the
    // first state transition lands one full period after start.
    timer.tick().await;

    loop {
        timer.tick().await;

        let (snapshot, event) = {
            let mut state = state.lock().await;
            let mut rng = rng.lock().await;
            let Some(event) = state.tick(&mut rng) else {
                return;
            };
            (state.snapshot(), event)
        };

        let game_over = matches!(event, TickEvent::GameOver(_));
        broadcaster.broadcast_tick(snapshot, event).await;

        if game_over {
            return;
        }
    }
}
