//! Snake game state
//!
//! The grid and the position queue describe the same snake from two sides:
//! every queue entry maps to a `Snake` cell and vice versa. Every mutation
//! below keeps that bijection intact by construction.

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Contents of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Snake,
    Fruit,
}

/// Heading of the snake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Up,
    Right,
    Down,
}

impl Direction {
    pub fn opposite(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Up => Direction::Down,
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
        }
    }
}

/// A grid coordinate, x growing right and y growing down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridPos {
    pub x: usize,
    pub y: usize,
}

/// What happens when the head crosses a board edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EdgePolicy {
    /// Coordinates wrap modulo the grid dimensions.
    #[default]
    Wrap,
    /// Leaving the board counts as a collision and restarts the game.
    Blocked,
}

/// Fixed-size 2D cell grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Grid {
    pub width: usize,
    pub height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::Empty; width * height],
        }
    }

    #[inline]
    fn index(&self, pos: GridPos) -> usize {
        debug_assert!(pos.x < self.width && pos.y < self.height);
        pos.y * self.width + pos.x
    }

    pub fn get(&self, pos: GridPos) -> Cell {
        self.cells[self.index(pos)]
    }

    pub fn set(&mut self, pos: GridPos, cell: Cell) {
        let idx = self.index(pos);
        self.cells[idx] = cell;
    }

    /// All cells currently empty, in row-major order.
    pub fn empty_cells(&self) -> Vec<GridPos> {
        (0..self.height)
            .flat_map(|y| (0..self.width).map(move |x| GridPos { x, y }))
            .filter(|&pos| self.get(pos) == Cell::Empty)
            .collect()
    }
}

/// The snake: an ordered double-ended run of occupied coordinates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snake {
    /// Front is the head, back is the tail.
    pub queue: VecDeque<GridPos>,
    pub direction: Direction,
}

impl Snake {
    fn new(spawn: GridPos, direction: Direction) -> Self {
        let mut queue = VecDeque::new();
        queue.push_front(spawn);
        Self { queue, direction }
    }

    pub fn head(&self) -> GridPos {
        *self.queue.front().expect("snake is never empty")
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

/// Current phase of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SnakePhase {
    Running,
    /// Every cell is snake: the board is beaten and ticks become no-ops.
    Complete,
}

/// Domain events surfaced to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnakeEvent {
    FruitEaten { score: u32 },
    /// Self-collision (or edge hit under [`EdgePolicy::Blocked`]) reset the
    /// game; this is normal gameplay, not an error.
    CollisionRestart { final_score: u32 },
    BoardComplete { final_score: u32 },
}

/// Complete Snake simulation state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnakeState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Simulation RNG (fruit placement)
    pub rng: Pcg32,
    pub grid: Grid,
    pub snake: Snake,
    pub score: u32,
    /// Frames seen so far; the snake steps every fifth one.
    pub frames: u64,
    pub phase: SnakePhase,
    pub edge_policy: EdgePolicy,
    /// Events accumulated since the last drain
    #[serde(skip)]
    pub events: Vec<SnakeEvent>,
}

impl SnakeState {
    /// Create a fresh game: snake of length one at the bottom center facing
    /// up, one fruit at a random empty cell.
    pub fn new(seed: u64, edge_policy: EdgePolicy) -> Self {
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            grid: Grid::new(GRID_COLS, GRID_ROWS),
            snake: Snake::new(Self::spawn_point(), Direction::Up),
            score: 0,
            frames: 0,
            phase: SnakePhase::Running,
            edge_policy,
            events: Vec::new(),
        };
        state.grid.set(Self::spawn_point(), Cell::Snake);
        state.place_fruit();
        state
    }

    /// Fixed spawn point: horizontal center of the bottom row.
    pub fn spawn_point() -> GridPos {
        GridPos {
            x: GRID_COLS / 2,
            y: GRID_ROWS - 1,
        }
    }

    /// Reinitialize grid, snake, and score after a collision. The RNG and
    /// frame counter carry over so restarts stay on the same cadence.
    pub fn restart(&mut self) {
        self.grid = Grid::new(GRID_COLS, GRID_ROWS);
        self.snake = Snake::new(Self::spawn_point(), Direction::Up);
        self.score = 0;
        self.phase = SnakePhase::Running;
        self.grid.set(Self::spawn_point(), Cell::Snake);
        self.place_fruit();
    }

    /// Update the heading, silently rejecting a 180° reversal. Reversal
    /// rejection is what makes direct self-collision impossible.
    pub fn set_direction(&mut self, direction: Direction) {
        if direction != self.snake.direction.opposite() {
            self.snake.direction = direction;
        }
    }

    /// Place a fruit at a uniformly random empty cell. Returns false when
    /// no empty cell remains (the board is full).
    pub fn place_fruit(&mut self) -> bool {
        let empty = self.grid.empty_cells();
        if empty.is_empty() {
            return false;
        }
        let pos = empty[self.rng.random_range(0..empty.len())];
        self.grid.set(pos, Cell::Fruit);
        true
    }

    /// Next head coordinate under the configured edge policy. `None` means
    /// the move leaves the board and the policy blocks it.
    pub fn next_head(&self, from: GridPos, direction: Direction) -> Option<GridPos> {
        let (w, h) = (self.grid.width, self.grid.height);
        match self.edge_policy {
            EdgePolicy::Wrap => Some(match direction {
                Direction::Left => GridPos { x: (from.x + w - 1) % w, y: from.y },
                Direction::Up => GridPos { x: from.x, y: (from.y + h - 1) % h },
                Direction::Right => GridPos { x: (from.x + 1) % w, y: from.y },
                Direction::Down => GridPos { x: from.x, y: (from.y + 1) % h },
            }),
            EdgePolicy::Blocked => match direction {
                Direction::Left => from.x.checked_sub(1).map(|x| GridPos { x, y: from.y }),
                Direction::Up => from.y.checked_sub(1).map(|y| GridPos { x: from.x, y }),
                Direction::Right => (from.x + 1 < w).then(|| GridPos { x: from.x + 1, y: from.y }),
                Direction::Down => (from.y + 1 < h).then(|| GridPos { x: from.x, y: from.y + 1 }),
            },
        }
    }

    /// Take the events accumulated since the last call.
    pub fn drain_events(&mut self) -> Vec<SnakeEvent> {
        std::mem::take(&mut self.events)
    }
}
