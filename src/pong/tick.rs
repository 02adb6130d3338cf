//! Pong per-tick simulation
//!
//! One call advances the match by a single fixed step. Speeds are in pixels
//! per tick at the assumed display rate; there is no delta-time integration,
//! matching the frame-coupled feel of the original game.

use glam::Vec2;

use super::state::{MatchPhase, PongEvent, PongState, Side};
use crate::consts::*;
use crate::input::{InputState, Key};

/// Advance the match by one tick.
pub fn tick(state: &mut PongState, input: &InputState) {
    state.time_ticks += 1;

    match state.phase {
        MatchPhase::MatchOver => {
            // Matches never truly end; the tick after a win starts fresh.
            state.reset_match();
            return;
        }
        MatchPhase::Serving => {
            let toward = state.serve_toward;
            state.serve(toward);
        }
        MatchPhase::Rallying => {}
    }

    // Player paddle from held keys, single clamp after both.
    let mut dy = 0.0;
    if input.is_held(Key::Up) {
        dy -= PADDLE_STEP;
    }
    if input.is_held(Key::Down) {
        dy += PADDLE_STEP;
    }
    state.player.shift(dy);

    // Opponent tracks the ball center with a lagging proportional step.
    let target_y = state.ball.pos.y - (state.opponent.height - state.ball.side) * 0.5;
    state.opponent.track(target_y, TRACKING_GAIN);

    // Integrate ball position.
    state.ball.pos += state.ball.vel;

    // Elastic reflection off top/bottom: mirror the overshoot back inside
    // rather than clamping, so the bounce conserves |vy| and never tunnels.
    if state.ball.pos.y < 0.0 || state.ball.pos.y + state.ball.side > BOARD_HEIGHT {
        let offset = if state.ball.vel.y < 0.0 {
            -state.ball.pos.y
        } else {
            BOARD_HEIGHT - (state.ball.pos.y + state.ball.side)
        };
        state.ball.pos.y += 2.0 * offset;
        state.ball.vel.y = -state.ball.vel.y;
    }

    // Only the paddle the ball is traveling toward can be hit.
    let toward = if state.ball.vel.x < 0.0 {
        Side::Player
    } else {
        Side::Opponent
    };
    let paddle = match toward {
        Side::Player => state.player.clone(),
        Side::Opponent => state.opponent.clone(),
    };

    if aabb_intersect(
        paddle.x,
        paddle.y,
        paddle.width,
        paddle.height,
        state.ball.pos.x,
        state.ball.pos.y,
        state.ball.side,
        state.ball.side,
    ) {
        // Reposition flush against the paddle face.
        state.ball.pos.x = match toward {
            Side::Player => paddle.x + paddle.width,
            Side::Opponent => paddle.x - state.ball.side,
        };

        // Impact offset n in [0, 1] maps to a return angle in ±0.25π.
        let n = (state.ball.pos.y + state.ball.side - paddle.y) / (paddle.height + state.ball.side);
        let phi = HIT_ANGLE_MAX * (2.0 * n - 1.0);
        let smash = if phi.abs() > SMASH_THRESHOLD {
            SMASH_MULTIPLIER
        } else {
            1.0
        };
        state.ball.vel = Vec2::new(
            smash * toward.other().sign() * state.ball.speed * phi.cos(),
            smash * state.ball.speed * phi.sin(),
        );
    }

    // Out of bounds left/right scores for the opposing side.
    if state.ball.pos.x + state.ball.side < 0.0 || state.ball.pos.x > BOARD_WIDTH {
        let scorer = if state.ball.pos.x > BOARD_WIDTH {
            Side::Player
        } else {
            Side::Opponent
        };
        score_point(state, scorer, toward.other());
    }
}

/// Axis-aligned bounding box overlap test.
#[inline]
fn aabb_intersect(ax: f32, ay: f32, aw: f32, ah: f32, bx: f32, by: f32, bw: f32, bh: f32) -> bool {
    ax < bx + bw && ay < by + bh && bx < ax + aw && by < ay + ah
}

fn score_point(state: &mut PongState, scorer: Side, serve_toward: Side) {
    state.score.add(scorer);
    state.events.push(PongEvent::PointScored { scorer });
    log::info!("point for {:?} ({:?})", scorer, state.score);

    if state.score.get(scorer) >= WIN_SCORE {
        state.phase = MatchPhase::MatchOver;
        state.events.push(PongEvent::MatchWon { winner: scorer });
        log::info!("match won by {:?}", scorer);
    } else {
        state.serve_toward = serve_toward;
        state.phase = MatchPhase::Serving;
    }
}
