use super::session_rng::SessionRng;
use super::types::{Food, FruitType, Point};
use crate::log;

/// Places food uniformly on `[0, grid_size - 1)` per axis; the last row
/// and column never receive food. The snake body is not excluded; an
/// overlap resolves on a later tick.
pub fn spawn_food(rng: &mut SessionRng, grid_size: i32, fruit: FruitType) -> Food {
    let x = rng.random_range(0..grid_size - 1);
    let y = rng.random_range(0..grid_size - 1);
    log!("Food spawned at ({}, {})", x, y);

    Food {
        position: Point::new(x, y),
        fruit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_is_deterministic_for_a_seed() {
        let mut a = SessionRng::new(42);
        let mut b = SessionRng::new(42);

        let first = spawn_food(&mut a, 15, FruitType::Apple);
        let second = spawn_food(&mut b, 15, FruitType::Apple);
        assert_eq!(first, second);
    }

    #[test]
    fn test_spawn_never_hits_last_row_or_column() {
        let mut rng = SessionRng::new(7);
        for _ in 0..500 {
            let food = spawn_food(&mut rng, 15, FruitType::Apple);
            assert!(food.position.x >= 0 && food.position.x <= 13);
            assert!(food.position.y >= 0 && food.position.y <= 13);
        }
    }

    #[test]
    fn test_spawn_keeps_requested_fruit() {
        let mut rng = SessionRng::new(1);
        let food = spawn_food(&mut rng, 15, FruitType::Orange);
        assert_eq!(food.fruit, FruitType::Orange);
    }
}
