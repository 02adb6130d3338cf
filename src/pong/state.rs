//! Pong game state
//!
//! All simulation state lives on [`PongState`]; nothing is module-global.
//! The struct doubles as the read-only drawable snapshot the host renderer
//! reads after each tick.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// The two sides of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    /// Left paddle, driven by the keyboard.
    Player,
    /// Right paddle, driven by proportional ball tracking.
    Opponent,
}

impl Side {
    pub fn other(self) -> Self {
        match self {
            Side::Player => Side::Opponent,
            Side::Opponent => Side::Player,
        }
    }

    /// Horizontal sign of travel toward this side (+1 moves right).
    pub fn sign(self) -> f32 {
        match self {
            Side::Player => -1.0,
            Side::Opponent => 1.0,
        }
    }
}

/// Current phase of the match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchPhase {
    /// Ball is out of play; the next tick serves it.
    Serving,
    /// Ball in play.
    Rallying,
    /// A side reached the win score; the next tick resets the match.
    MatchOver,
}

/// An axis-aligned paddle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Paddle {
    fn new(x: f32) -> Self {
        Self {
            x,
            y: (BOARD_HEIGHT - PADDLE_HEIGHT) / 2.0,
            width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
        }
    }

    /// Move vertically, clamped to the board. Upholds 0 <= y <= H - height.
    pub fn shift(&mut self, dy: f32) {
        self.y = (self.y + dy).clamp(0.0, BOARD_HEIGHT - self.height);
    }

    /// Proportional tracking toward a target y. The gain < 1 makes the
    /// opponent lag the ball, which is what keeps it beatable.
    pub fn track(&mut self, target_y: f32, gain: f32) {
        self.y += (target_y - self.y) * gain;
        self.y = self.y.clamp(0.0, BOARD_HEIGHT - self.height);
    }
}

/// The ball, a square of side `side`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub side: f32,
    pub speed: f32,
}

impl Ball {
    fn new() -> Self {
        Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            side: BALL_SIZE,
            speed: BALL_SPEED,
        }
    }
}

/// Match scores, monotonically increasing until the match resets.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Score {
    pub player: u32,
    pub opponent: u32,
}

impl Score {
    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Player => self.player,
            Side::Opponent => self.opponent,
        }
    }

    pub(crate) fn add(&mut self, side: Side) {
        match side {
            Side::Player => self.player += 1,
            Side::Opponent => self.opponent += 1,
        }
    }
}

/// Domain events surfaced to the host (never blocking).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PongEvent {
    PointScored { scorer: Side },
    MatchWon { winner: Side },
}

/// Complete Pong simulation state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PongState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Simulation RNG (serve angles)
    pub rng: Pcg32,
    pub player: Paddle,
    pub opponent: Paddle,
    pub ball: Ball,
    pub score: Score,
    pub phase: MatchPhase,
    /// Side the next serve travels toward
    pub serve_toward: Side,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Events accumulated since the last drain
    #[serde(skip)]
    pub events: Vec<PongEvent>,
}

impl PongState {
    /// Create a match with paddles centered and the first serve queued
    /// toward the opponent.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            player: Paddle::new(PADDLE_WIDTH),
            opponent: Paddle::new(BOARD_WIDTH - 2.0 * PADDLE_WIDTH),
            ball: Ball::new(),
            score: Score::default(),
            phase: MatchPhase::Serving,
            serve_toward: Side::Opponent,
            time_ticks: 0,
            events: Vec::new(),
        }
    }

    /// Place the ball flush against the serving paddle and launch it toward
    /// `toward` at a uniform random angle within ±0.1π. No-op once the
    /// match is over.
    pub fn serve(&mut self, toward: Side) {
        if self.phase == MatchPhase::MatchOver {
            return;
        }

        let r = self.rng.random::<f32>();
        self.ball.pos.x = match toward {
            Side::Opponent => self.player.x + self.player.width,
            Side::Player => self.opponent.x - self.ball.side,
        };
        self.ball.pos.y = (BOARD_HEIGHT - self.ball.side) * r;

        let phi = SERVE_ANGLE_MAX * (1.0 - 2.0 * r);
        self.ball.vel = Vec2::new(
            toward.sign() * self.ball.speed * phi.cos(),
            self.ball.speed * phi.sin(),
        );
        self.phase = MatchPhase::Rallying;
    }

    /// Full match reset: scores zeroed, paddles recentered, serve queued.
    pub fn reset_match(&mut self) {
        self.score = Score::default();
        self.player = Paddle::new(PADDLE_WIDTH);
        self.opponent = Paddle::new(BOARD_WIDTH - 2.0 * PADDLE_WIDTH);
        self.ball = Ball::new();
        self.serve_toward = Side::Opponent;
        self.phase = MatchPhase::Serving;
    }

    /// Take the events accumulated since the last call.
    pub fn drain_events(&mut self) -> Vec<PongEvent> {
        std::mem::take(&mut self.events)
    }
}
