mod game_config;
mod manager;
mod validate;

pub use game_config::GameConfig;
pub use manager::ConfigManager;
pub use validate::Validate;
