use super::snake::Snake;
use super::types::{DeathReason, Point};

/// Classifies the move into `prospective_head` against the pre-move body.
/// The tail cell counts as occupied even though it would be vacated on the
/// same tick.
pub fn classify(snake: &Snake, prospective_head: Point, grid_size: i32) -> Option<DeathReason> {
    if prospective_head.x < 0
        || prospective_head.y < 0
        || prospective_head.x >= grid_size
        || prospective_head.y >= grid_size
    {
        return Some(DeathReason::WallCollision);
    }

    if snake.occupies(prospective_head) {
        return Some(DeathReason::SelfCollision);
    }

    None
}
