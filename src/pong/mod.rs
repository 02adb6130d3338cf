//! Pong simulation
//!
//! Discrete-time physics with elastic wall reflection, angle-of-impact
//! paddle returns, a lagging tracking opponent, and first-to-five scoring.
//! Pure and deterministic: fixed step, seeded RNG, no platform code.

pub mod state;
pub mod tick;

pub use state::{Ball, MatchPhase, Paddle, PongEvent, PongState, Score, Side};
pub use tick::tick;
