use std::collections::{HashSet, VecDeque};

use super::types::{Direction, Point};

#[derive(Clone, Debug)]
pub struct Snake {
    pub body: VecDeque<Point>,
    body_set: HashSet<Point>,
    pub direction: Direction,
}

impl Snake {
    pub fn new(head: Point, direction: Direction, length: usize) -> Self {
        let (dx, dy) = direction.delta();
        let mut body = VecDeque::new();
        let mut body_set = HashSet::new();

        for i in 0..length as i32 {
            let segment = Point::new(head.x - dx * i, head.y - dy * i);
            body.push_back(segment);
            body_set.insert(segment);
        }

        Self {
            body,
            body_set,
            direction,
        }
    }

    pub fn head(&self) -> Point {
        *self.body.front().expect("Snake body should never be empty")
    }

    pub fn tail(&self) -> Point {
        *self.body.back().expect("Snake body should never be empty")
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn occupies(&self, position: Point) -> bool {
        self.body_set.contains(&position)
    }

    pub fn grow_head(&mut self, position: Point) {
        self.body.push_front(position);
        self.body_set.insert(position);
    }

    pub fn drop_tail(&mut self) {
        if let Some(tail) = self.body.pop_back() {
            self.body_set.remove(&tail);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_snake_extends_behind_head() {
        let snake = Snake::new(Point::new(10, 10), Direction::Right, 3);
        let body: Vec<Point> = snake.body.iter().copied().collect();

        assert_eq!(
            body,
            vec![Point::new(10, 10), Point::new(9, 10), Point::new(8, 10)]
        );
        assert_eq!(snake.head(), Point::new(10, 10));
        assert_eq!(snake.tail(), Point::new(8, 10));
    }

    #[test]
    fn test_occupies_tracks_grow_and_drop() {
        let mut snake = Snake::new(Point::new(5, 5), Direction::Right, 2);
        assert!(snake.occupies(Point::new(4, 5)));

        snake.grow_head(Point::new(6, 5));
        assert!(snake.occupies(Point::new(6, 5)));
        assert_eq!(snake.len(), 3);

        snake.drop_tail();
        assert!(!snake.occupies(Point::new(4, 5)));
        assert_eq!(snake.len(), 2);
    }
}
