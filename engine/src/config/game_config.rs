use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::Validate;
use crate::game::Point;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct GameConfig {
    pub grid_size: i32,
    pub tick_interval_ms: u32,
    pub initial_head: Point,
    pub initial_snake_length: usize,
    pub initial_food: Point,
}

impl GameConfig {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms as u64)
    }

    fn contains(&self, point: Point) -> bool {
        point.x >= 0 && point.x < self.grid_size && point.y >= 0 && point.y < self.grid_size
    }
}

impl Validate for GameConfig {
    fn validate(&self) -> Result<(), String> {
        if self.grid_size < 5 || self.grid_size > 100 {
            return Err("grid_size must be between 5 and 100".to_string());
        }
        if self.tick_interval_ms < 50 || self.tick_interval_ms > 5000 {
            return Err("tick_interval_ms must be between 50 and 5000".to_string());
        }
        if self.initial_snake_length < 1 {
            return Err("initial_snake_length must be at least 1".to_string());
        }
        if !self.contains(self.initial_head) {
            return Err("initial_head must lie on the grid".to_string());
        }
        if !self.contains(self.initial_food) {
            return Err("initial_food must lie on the grid".to_string());
        }
        if self.initial_head.x < self.initial_snake_length as i32 - 1 {
            return Err("initial snake does not fit on the grid".to_string());
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: 15,
            tick_interval_ms: 120,
            initial_head: Point::new(10, 10),
            initial_snake_length: 3,
            initial_food: Point::new(5, 5),
        }
    }
}
