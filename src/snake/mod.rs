//! Snake simulation
//!
//! Discrete-grid movement on a fixed five-frame cadence, with growth on
//! fruit, restart on collision, and a configurable edge policy (wrap-around
//! or blocked). Pure and deterministic: seeded RNG, no platform code.

pub mod state;
pub mod tick;

pub use state::{
    Cell, Direction, EdgePolicy, Grid, GridPos, Snake, SnakeEvent, SnakePhase, SnakeState,
};
pub use tick::tick;
