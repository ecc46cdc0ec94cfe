use std::future::Future;

use crate::game::{GameSnapshot, TickEvent};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AudioCue {
    Move,
    Eat,
    Die,
}

/// Observer seam of the engine: one call per tick with the fresh snapshot,
/// plus a call per accepted direction change for the move cue.
pub trait GameBroadcaster: Send + Sync + Clone + 'static {
    fn broadcast_tick(
        &self,
        snapshot: GameSnapshot,
        event: TickEvent,
    ) -> impl Future<Output = ()> + Send;

    fn broadcast_input(&self) -> impl Future<Output = ()> + Send;
}

pub trait RenderAdapter: Send + Sync + Clone + 'static {
    fn render(&self, snapshot: GameSnapshot) -> impl Future<Output = ()> + Send;
}

pub trait AudioAdapter: Send + Sync + Clone + 'static {
    fn play(&self, cue: AudioCue) -> impl Future<Output = ()> + Send;
}

pub trait ScoreDisplay: Send + Sync + Clone + 'static {
    fn update(&self, score: u32) -> impl Future<Output = ()> + Send;
}

/// Fans engine notifications out to the host-side adapters: the eat/die
/// cues and score update land before the redraw, the move cue comes from
/// the input path.
#[derive(Clone)]
pub struct HostBroadcaster<R, A, S> {
    render: R,
    audio: A,
    score: S,
}

impl<R, A, S> HostBroadcaster<R, A, S>
where
    R: RenderAdapter,
    A: AudioAdapter,
    S: ScoreDisplay,
{
    pub fn new(render: R, audio: A, score: S) -> Self {
        Self {
            render,
            audio,
            score,
        }
    }
}

impl<R, A, S> GameBroadcaster for HostBroadcaster<R, A, S>
where
    R: RenderAdapter,
    A: AudioAdapter,
    S: ScoreDisplay,
{
    async fn broadcast_tick(&self, snapshot: GameSnapshot, event: TickEvent) {
        match event {
            TickEvent::Ate => {
                self.audio.play(AudioCue::Eat).await;
                self.score.update(snapshot.score).await;
            }
            TickEvent::GameOver(_) => {
                self.audio.play(AudioCue::Die).await;
            }
            TickEvent::Moved => {}
        }

        self.render.render(snapshot).await;
    }

    async fn broadcast_input(&self) {
        self.audio.play(AudioCue::Move).await;
    }
}
