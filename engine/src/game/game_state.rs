use super::collision;
use super::food::spawn_food;
use super::session_rng::SessionRng;
use super::snake::Snake;
use super::types::{Direction, Food, FruitType, GameStatus, Point, TickEvent};
use crate::config::GameConfig;
use crate::log;

#[derive(Clone, Debug)]
pub struct GameState {
    pub snake: Snake,
    pub food: Food,
    pub score: u32,
    pub frame: u64,
    pub status: GameStatus,
    grid_size: i32,
}

impl GameState {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            snake: Snake::new(
                config.initial_head,
                Direction::Right,
                config.initial_snake_length,
            ),
            food: Food {
                position: config.initial_food,
                fruit: FruitType::Apple,
            },
            score: 0,
            frame: 0,
            status: GameStatus::NotStarted,
            grid_size: config.grid_size,
        }
    }

    pub fn grid_size(&self) -> i32 {
        self.grid_size
    }

    /// Applies a direction change immediately unless it reverses the live
    /// heading or matches it. The guard reads the direction at call time,
    /// so two quick turns within one tick interval can still chain into a
    /// net reversal.
    pub fn set_direction(&mut self, direction: Direction) -> bool {
        if direction.is_opposite(&self.snake.direction) || direction == self.snake.direction {
            return false;
        }
        self.snake.direction = direction;
        true
    }

    pub fn tick(&mut self, rng: &mut SessionRng) -> Option<TickEvent> {
        if self.status != GameStatus::Running {
            return None;
        }

        self.frame += 1;

        let head = self.snake.head();
        let (dx, dy) = self.snake.direction.delta();
        let prospective_head = Point::new(head.x + dx, head.y + dy);

        if let Some(reason) = collision::classify(&self.snake, prospective_head, self.grid_size) {
            self.status = GameStatus::GameOver;
            log!("Snake died at frame {}: {:?}", self.frame, reason);
            return Some(TickEvent::GameOver(reason));
        }

        self.snake.grow_head(prospective_head);

        if prospective_head == self.food.position {
            self.score += 1;
            log!(
                "Ate {:?} at ({}, {}). Score: {}",
                self.food.fruit,
                prospective_head.x,
                prospective_head.y,
                self.score
            );
            self.food = spawn_food(rng, self.grid_size, self.food.fruit.next());
            Some(TickEvent::Ate)
        } else {
            self.snake.drop_tail();
            Some(TickEvent::Moved)
        }
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            segments: self.snake.body.iter().copied().collect(),
            direction: self.snake.direction,
            food: self.food,
            score: self.score,
            frame: self.frame,
            status: self.status,
            grid_size: self.grid_size,
        }
    }
}

/// Flat read-only copy handed to collaborators after each tick.
#[derive(Clone, Debug, PartialEq)]
pub struct GameSnapshot {
    pub segments: Vec<Point>,
    pub direction: Direction,
    pub food: Food,
    pub score: u32,
    pub frame: u64,
    pub status: GameStatus,
    pub grid_size: i32,
}
