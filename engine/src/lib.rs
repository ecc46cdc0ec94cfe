pub mod config;
pub mod engine;
pub mod game;
pub mod logger;

pub use config::{ConfigManager, GameConfig, Validate};
pub use engine::{
    AudioAdapter, AudioCue, GameBroadcaster, HostBroadcaster, InputIntent, RenderAdapter,
    ScoreDisplay, SnakeEngine,
};
pub use game::{
    DeathReason, Direction, Food, FruitType, GameSnapshot, GameState, GameStatus, Point,
    SessionRng, Snake, TickEvent,
};
