mod broadcaster;
mod input;
mod session;

pub use broadcaster::{
    AudioAdapter, AudioCue, GameBroadcaster, HostBroadcaster, RenderAdapter, ScoreDisplay,
};
pub use input::InputIntent;
pub use session::SnakeEngine;
