use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use snake_engine::{
    Direction, GameConfig, GameState, GameStatus, Point, SessionRng, Snake, TickEvent,
};

fn patrol_direction(head: Point, current: Direction) -> Option<Direction> {
    // Clockwise lap over the inner square [1,13] x [1,13].
    match current {
        Direction::Right if head.x >= 13 => Some(Direction::Down),
        Direction::Down if head.y >= 13 => Some(Direction::Left),
        Direction::Left if head.x <= 1 => Some(Direction::Up),
        Direction::Up if head.y <= 1 => Some(Direction::Right),
        _ => None,
    }
}

fn run_patrol_session(seed: u64) -> u64 {
    let mut state = GameState::new(&GameConfig::default());
    state.status = GameStatus::Running;
    let mut rng = SessionRng::new(seed);

    for _ in 0..500 {
        if let Some(direction) = patrol_direction(state.snake.head(), state.snake.direction) {
            state.set_direction(direction);
        }
        match state.tick(&mut rng) {
            Some(TickEvent::GameOver(_)) | None => break,
            _ => {}
        }
    }

    state.frame
}

fn long_snake_state() -> GameState {
    let mut state = GameState::new(&GameConfig::default());
    state.status = GameStatus::Running;

    // Serpentine body covering rows 0..=9, head ending at (0, 9).
    let mut snake = Snake::new(Point::new(0, 0), Direction::Right, 1);
    for y in 0..10 {
        let xs: Vec<i32> = if y % 2 == 0 {
            (0..=13).collect()
        } else {
            (0..=13).rev().collect()
        };
        for x in xs {
            if y == 0 && x == 0 {
                continue;
            }
            snake.grow_head(Point::new(x, y));
        }
    }
    snake.direction = Direction::Down;

    state.snake = snake;
    state.food.position = Point::new(14, 14);
    state
}

fn tick_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("tick");

    group.bench_function("patrol_500_ticks", |b| b.iter(|| run_patrol_session(7)));

    group.bench_function("single_tick_long_snake", |b| {
        let state = long_snake_state();
        b.iter_batched(
            || (state.clone(), SessionRng::new(3)),
            |(mut state, mut rng)| state.tick(&mut rng),
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

criterion_group!(benches, tick_bench);
criterion_main!(benches);
