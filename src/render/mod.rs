//! Canvas2D painters
//!
//! Thin, stateless drawing of simulation snapshots. The simulations never
//! draw; these functions read their public state after a tick and paint it.

use std::f64::consts::TAU;

use web_sys::CanvasRenderingContext2d;

use crate::consts::*;
use crate::pong::PongState;
use crate::snake::{Cell, GridPos, SnakeState};

/// Paint a Pong frame: board, paddles, ball, center line, scores.
pub fn draw_pong(ctx: &CanvasRenderingContext2d, state: &PongState) {
    let (w, h) = (BOARD_WIDTH as f64, BOARD_HEIGHT as f64);

    ctx.set_fill_style_str("#000");
    ctx.fill_rect(0.0, 0.0, w, h);

    ctx.set_fill_style_str("#fff");
    for paddle in [&state.player, &state.opponent] {
        ctx.fill_rect(
            paddle.x as f64,
            paddle.y as f64,
            paddle.width as f64,
            paddle.height as f64,
        );
    }
    ctx.fill_rect(
        state.ball.pos.x as f64,
        state.ball.pos.y as f64,
        state.ball.side as f64,
        state.ball.side as f64,
    );

    // Dashed center line.
    let line_w = 4.0;
    let step = h / 20.0;
    let x = (w - line_w) / 2.0;
    let mut y = 0.0;
    while y < h {
        ctx.fill_rect(x, y + step * 0.25, line_w, step * 0.5);
        y += step;
    }

    ctx.set_font("30px Arial");
    let _ = ctx.fill_text(
        &format!("Player: {}", state.score.player),
        w / 2.0 - 100.0,
        50.0,
    );
    let _ = ctx.fill_text(&format!("AI: {}", state.score.opponent), w / 2.0 + 50.0, 50.0);
}

/// Paint a Snake frame. `cell_px` is the pixel size of one grid cell.
pub fn draw_snake(ctx: &CanvasRenderingContext2d, state: &SnakeState, cell_px: f64) {
    let w = state.grid.width as f64 * cell_px;
    let h = state.grid.height as f64 * cell_px;

    ctx.set_fill_style_str("#000");
    ctx.fill_rect(0.0, 0.0, w, h);

    for y in 0..state.grid.height {
        for x in 0..state.grid.width {
            let (px, py) = (x as f64 * cell_px, y as f64 * cell_px);
            match state.grid.get(GridPos { x, y }) {
                Cell::Snake => {
                    ctx.set_fill_style_str("#00c000");
                    ctx.fill_rect(px, py, cell_px, cell_px);
                }
                Cell::Fruit => {
                    ctx.set_fill_style_str("#ff0000");
                    ctx.begin_path();
                    let r = cell_px / 2.0;
                    let _ = ctx.arc(px + r, py + r, r, 0.0, TAU);
                    ctx.fill();
                }
                Cell::Empty => {
                    ctx.set_fill_style_str("#222");
                    ctx.fill_rect(px, py, cell_px, cell_px);
                }
            }
        }
    }

    // Mark the head so the heading reads at a glance.
    let head = state.snake.head();
    ctx.set_fill_style_str("#008000");
    ctx.fill_rect(
        head.x as f64 * cell_px + 2.0,
        head.y as f64 * cell_px + 2.0,
        cell_px - 4.0,
        cell_px - 4.0,
    );

    ctx.set_fill_style_str("#fff");
    ctx.set_font("12px Helvetica");
    let _ = ctx.fill_text(&format!("SCORE: {}", state.score), 10.0, h - 10.0);
}
