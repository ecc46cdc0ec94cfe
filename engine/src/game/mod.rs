pub mod collision;
mod food;
mod game_state;
mod session_rng;
mod snake;
mod types;

pub use food::spawn_food;
pub use game_state::{GameSnapshot, GameState};
pub use session_rng::SessionRng;
pub use snake::Snake;
pub use types::{DeathReason, Direction, Food, FruitType, GameStatus, Point, TickEvent};
