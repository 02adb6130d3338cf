//! Snake per-frame logic
//!
//! `tick` runs once per display frame, but the snake itself only steps on
//! every fifth call: the logic cadence is decoupled from the render cadence.

use super::state::{Cell, Direction, SnakeEvent, SnakePhase, SnakeState};
use crate::consts::STEP_INTERVAL;
use crate::input::{InputState, Key};

/// Advance the game by one frame.
pub fn tick(state: &mut SnakeState, input: &InputState) {
    if state.phase == SnakePhase::Complete {
        return;
    }

    // Held arrows update the pending heading, in the original poll order.
    for key in Key::ALL {
        if input.is_held(key) {
            state.set_direction(direction_for(key));
        }
    }

    state.frames += 1;
    if !state.frames.is_multiple_of(STEP_INTERVAL) {
        return;
    }

    step(state);
}

fn direction_for(key: Key) -> Direction {
    match key {
        Key::Left => Direction::Left,
        Key::Up => Direction::Up,
        Key::Right => Direction::Right,
        Key::Down => Direction::Down,
    }
}

/// One movement step of the snake.
fn step(state: &mut SnakeState) {
    let Some(next) = state.next_head(state.snake.head(), state.snake.direction) else {
        // Blocked edge policy: leaving the board is a collision.
        collision_restart(state);
        return;
    };

    match state.grid.get(next) {
        Cell::Snake => collision_restart(state),
        Cell::Fruit => {
            state.score += 1;
            // Fruit cell becomes the new head; no tail removal, net growth 1.
            state.grid.set(next, Cell::Snake);
            state.snake.queue.push_front(next);
            state.events.push(SnakeEvent::FruitEaten { score: state.score });
            log::info!("fruit eaten, score {}", state.score);

            if !state.place_fruit() {
                state.phase = SnakePhase::Complete;
                state
                    .events
                    .push(SnakeEvent::BoardComplete { final_score: state.score });
                log::info!("board complete at score {}", state.score);
            }
        }
        Cell::Empty => {
            let tail = state.snake.queue.pop_back().expect("snake is never empty");
            state.grid.set(tail, Cell::Empty);
            state.grid.set(next, Cell::Snake);
            state.snake.queue.push_front(next);
        }
    }
}

fn collision_restart(state: &mut SnakeState) {
    state
        .events
        .push(SnakeEvent::CollisionRestart { final_score: state.score });
    log::info!("collision, restarting (score was {})", state.score);
    state.restart();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{GRID_COLS, GRID_ROWS};
    use crate::snake::state::{EdgePolicy, Grid, GridPos};
    use proptest::prelude::*;
    use std::collections::VecDeque;

    /// Queue entries and grid `Snake` cells must describe the same set.
    fn bijection_holds(state: &SnakeState) -> bool {
        let mut snake_cells = 0;
        for y in 0..state.grid.height {
            for x in 0..state.grid.width {
                if state.grid.get(GridPos { x, y }) == Cell::Snake {
                    snake_cells += 1;
                }
            }
        }
        snake_cells == state.snake.len()
            && state
                .snake
                .queue
                .iter()
                .all(|&pos| state.grid.get(pos) == Cell::Snake)
    }

    fn fruit_cells(state: &SnakeState) -> Vec<GridPos> {
        let mut cells = Vec::new();
        for y in 0..state.grid.height {
            for x in 0..state.grid.width {
                let pos = GridPos { x, y };
                if state.grid.get(pos) == Cell::Fruit {
                    cells.push(pos);
                }
            }
        }
        cells
    }

    /// Move the fruit to a known cell so scenarios are deterministic.
    fn pin_fruit(state: &mut SnakeState, pos: GridPos) {
        for fruit in fruit_cells(state) {
            state.grid.set(fruit, Cell::Empty);
        }
        state.grid.set(pos, Cell::Fruit);
    }

    #[test]
    fn test_initial_layout() {
        let state = SnakeState::new(42, EdgePolicy::Wrap);
        assert_eq!(state.snake.head(), GridPos { x: 13, y: 25 });
        assert_eq!(state.snake.direction, Direction::Up);
        assert_eq!(state.snake.len(), 1);
        assert_eq!(state.score, 0);
        assert_eq!(fruit_cells(&state).len(), 1);
        assert!(bijection_holds(&state));
    }

    #[test]
    fn test_step_cadence_is_every_fifth_frame() {
        let mut state = SnakeState::new(1, EdgePolicy::Wrap);
        let input = InputState::new();

        for _ in 0..4 {
            tick(&mut state, &input);
        }
        assert_eq!(state.snake.head(), GridPos { x: 13, y: 25 });

        tick(&mut state, &input);
        assert_eq!(state.snake.head(), GridPos { x: 13, y: 24 });
    }

    #[test]
    fn test_fruit_scenario_after_25_frames() {
        let mut state = SnakeState::new(7, EdgePolicy::Wrap);
        pin_fruit(&mut state, GridPos { x: 13, y: 20 });
        let input = InputState::new();

        for _ in 0..25 {
            tick(&mut state, &input);
        }

        // Five logic steps: the head walked from y=25 to the fruit at y=20.
        assert_eq!(state.snake.head(), GridPos { x: 13, y: 20 });
        assert_eq!(state.score, 1);
        assert_eq!(state.snake.len(), 2);
        assert!(
            state
                .drain_events()
                .contains(&SnakeEvent::FruitEaten { score: 1 })
        );

        // A replacement fruit exists somewhere else.
        let fruits = fruit_cells(&state);
        assert_eq!(fruits.len(), 1);
        assert_ne!(fruits[0], GridPos { x: 13, y: 20 });
        assert!(bijection_holds(&state));
    }

    #[test]
    fn test_normal_move_preserves_length() {
        let mut state = SnakeState::new(3, EdgePolicy::Wrap);
        // Park the fruit away from the snake's column.
        pin_fruit(&mut state, GridPos { x: 0, y: 0 });
        let input = InputState::new();

        for _ in 0..15 {
            tick(&mut state, &input);
        }
        assert_eq!(state.snake.len(), 1);
        assert!(bijection_holds(&state));
    }

    #[test]
    fn test_reversal_rejected() {
        let mut state = SnakeState::new(5, EdgePolicy::Wrap);
        assert_eq!(state.snake.direction, Direction::Up);

        state.set_direction(Direction::Down);
        assert_eq!(state.snake.direction, Direction::Up);

        state.set_direction(Direction::Left);
        assert_eq!(state.snake.direction, Direction::Left);

        state.set_direction(Direction::Right);
        assert_eq!(state.snake.direction, Direction::Left);
    }

    #[test]
    fn test_held_reverse_key_is_ignored() {
        let mut state = SnakeState::new(5, EdgePolicy::Wrap);
        let mut input = InputState::new();
        input.press(Key::Down); // opposite of the initial Up heading

        for _ in 0..5 {
            tick(&mut state, &input);
        }
        assert_eq!(state.snake.direction, Direction::Up);
        assert_eq!(state.snake.head(), GridPos { x: 13, y: 24 });
    }

    #[test]
    fn test_self_collision_restarts() {
        let mut state = SnakeState::new(9, EdgePolicy::Wrap);

        // Hand-build a hook shape with the head about to bite the body.
        let body = [
            GridPos { x: 5, y: 5 },
            GridPos { x: 5, y: 6 },
            GridPos { x: 6, y: 6 },
            GridPos { x: 6, y: 5 },
        ];
        state.grid = Grid::new(GRID_COLS, GRID_ROWS);
        for pos in body {
            state.grid.set(pos, Cell::Snake);
        }
        state.grid.set(GridPos { x: 0, y: 0 }, Cell::Fruit);
        state.snake.queue = VecDeque::from(body.to_vec());
        state.snake.direction = Direction::Right;
        state.score = 3;
        assert!(bijection_holds(&state));

        let input = InputState::new();
        for _ in 0..5 {
            tick(&mut state, &input);
        }

        assert_eq!(state.score, 0);
        assert_eq!(state.snake.len(), 1);
        assert_eq!(state.snake.head(), SnakeState::spawn_point());
        assert_eq!(state.snake.direction, Direction::Up);
        assert!(
            state
                .drain_events()
                .contains(&SnakeEvent::CollisionRestart { final_score: 3 })
        );
        assert!(bijection_holds(&state));
    }

    #[test]
    fn test_blocked_policy_edge_is_collision() {
        let mut state = SnakeState::new(11, EdgePolicy::Blocked);
        let input = InputState::new();

        // 26 steps straight up: the 26th leaves the board.
        for _ in 0..26 * 5 {
            tick(&mut state, &input);
        }

        assert_eq!(state.snake.head(), SnakeState::spawn_point());
        assert_eq!(state.snake.len(), 1);
        assert_eq!(state.score, 0);
        assert!(
            state
                .drain_events()
                .iter()
                .any(|e| matches!(e, SnakeEvent::CollisionRestart { .. }))
        );
    }

    #[test]
    fn test_wrap_policy_crosses_edge() {
        let mut state = SnakeState::new(11, EdgePolicy::Wrap);
        let input = InputState::new();

        for _ in 0..26 * 5 {
            tick(&mut state, &input);
        }

        // Same walk as above, but the head wraps back around instead.
        assert_eq!(state.snake.head().x, 13);
        assert_eq!(state.snake.head().y, 25);
        assert!(
            !state
                .drain_events()
                .iter()
                .any(|e| matches!(e, SnakeEvent::CollisionRestart { .. }))
        );
        assert!(bijection_holds(&state));
    }

    #[test]
    fn test_full_board_completes() {
        let mut state = SnakeState::new(13, EdgePolicy::Wrap);

        // Fill everything with snake except a single fruit ahead of the head.
        let head = GridPos { x: 0, y: 1 };
        let fruit = GridPos { x: 0, y: 0 };
        state.grid = Grid::new(GRID_COLS, GRID_ROWS);
        let mut queue = VecDeque::new();
        for y in 0..GRID_ROWS {
            for x in 0..GRID_COLS {
                let pos = GridPos { x, y };
                if pos != fruit {
                    state.grid.set(pos, Cell::Snake);
                    if pos != head {
                        queue.push_back(pos);
                    }
                }
            }
        }
        queue.push_front(head);
        state.grid.set(fruit, Cell::Fruit);
        state.snake.queue = queue;
        state.snake.direction = Direction::Up;
        state.score = 100;

        let input = InputState::new();
        for _ in 0..5 {
            tick(&mut state, &input);
        }

        assert_eq!(state.phase, SnakePhase::Complete);
        assert_eq!(state.score, 101);
        assert!(
            state
                .drain_events()
                .contains(&SnakeEvent::BoardComplete { final_score: 101 })
        );

        // Further frames are no-ops.
        let head_after = state.snake.head();
        for _ in 0..10 {
            tick(&mut state, &input);
        }
        assert_eq!(state.snake.head(), head_after);
    }

    proptest! {
        #[test]
        fn prop_bijection_holds_under_random_input(
            seed in any::<u64>(),
            blocked in any::<bool>(),
            keys in prop::collection::vec(prop::option::of(0..4usize), 0..400),
        ) {
            let policy = if blocked { EdgePolicy::Blocked } else { EdgePolicy::Wrap };
            let mut state = SnakeState::new(seed, policy);

            for key in keys {
                let mut input = InputState::new();
                if let Some(idx) = key {
                    input.press(Key::ALL[idx]);
                }
                tick(&mut state, &input);

                prop_assert!(bijection_holds(&state));
                if state.phase == SnakePhase::Running {
                    prop_assert_eq!(fruit_cells(&state).len(), 1);
                }
            }
        }
    }
}
