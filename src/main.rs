//! Web Arcade entry point
//!
//! Mounts one game onto the page canvas, forwards keyboard events into the
//! held-key set, and drives the simulation from requestAnimationFrame. The
//! simulations never touch the DOM; everything platform-shaped lives here.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

    use web_arcade::consts::*;
    use web_arcade::pong::{self, PongEvent, PongState};
    use web_arcade::render;
    use web_arcade::snake::{self, SnakeEvent, SnakeState};
    use web_arcade::{InputState, Key, Settings};

    /// Pixel size of one Snake grid cell.
    const SNAKE_CELL_PX: f64 = 20.0;

    enum ActiveGame {
        Pong(PongState),
        Snake(SnakeState),
    }

    /// App instance holding the mounted game and its input state.
    struct App {
        game: ActiveGame,
        input: InputState,
        ctx: CanvasRenderingContext2d,
    }

    impl App {
        /// One display frame: tick, surface events, paint.
        fn frame(&mut self) {
            match &mut self.game {
                ActiveGame::Pong(state) => {
                    pong::tick(state, &self.input);
                    for event in state.drain_events() {
                        surface_event(&describe_pong(event));
                    }
                    render::draw_pong(&self.ctx, state);
                }
                ActiveGame::Snake(state) => {
                    snake::tick(state, &self.input);
                    for event in state.drain_events() {
                        surface_event(&describe_snake(event));
                    }
                    render::draw_snake(&self.ctx, state, SNAKE_CELL_PX);
                }
            }
        }
    }

    fn describe_pong(event: PongEvent) -> String {
        match event {
            PongEvent::PointScored { scorer } => format!("Point for {scorer:?}"),
            PongEvent::MatchWon { winner } => format!("{winner:?} wins the match!"),
        }
    }

    fn describe_snake(event: SnakeEvent) -> String {
        match event {
            SnakeEvent::FruitEaten { score } => format!("Score: {score}"),
            SnakeEvent::CollisionRestart { final_score } => {
                format!("Crashed at {final_score} - restarting")
            }
            SnakeEvent::BoardComplete { final_score } => {
                format!("Board complete! Final score {final_score}")
            }
        }
    }

    /// Non-blocking outcome notification: log it and mirror it into the
    /// status element if the page has one.
    fn surface_event(message: &str) {
        log::info!("{message}");
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("status"))
        {
            el.set_text_content(Some(message));
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("failed to init logger");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let settings = Settings::load();
        let seed = js_sys::Date::now() as u64;

        // The page picks the game via its hash; Pong is the default.
        let wants_snake = window
            .location()
            .hash()
            .map(|h| h == "#snake")
            .unwrap_or(false);

        let game = if wants_snake {
            canvas.set_width((GRID_COLS as f64 * SNAKE_CELL_PX) as u32);
            canvas.set_height((GRID_ROWS as f64 * SNAKE_CELL_PX) as u32);
            ActiveGame::Snake(SnakeState::new(seed, settings.snake_edge_policy))
        } else {
            canvas.set_width(BOARD_WIDTH as u32);
            canvas.set_height(BOARD_HEIGHT as u32);
            ActiveGame::Pong(PongState::new(seed))
        };

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .expect("no 2d context")
            .dyn_into()
            .expect("not a 2d context");

        let app = Rc::new(RefCell::new(App {
            game,
            input: InputState::new(),
            ctx,
        }));

        log::info!(
            "Web Arcade running {} with seed {seed}",
            if wants_snake { "Snake" } else { "Pong" }
        );

        setup_input_handlers(app.clone());
        request_animation_frame(app);
    }

    fn setup_input_handlers(app: Rc<RefCell<App>>) {
        let window = web_sys::window().unwrap();

        // Key down
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                if let Some(key) = Key::from_key_code(&event.key()) {
                    event.prevent_default(); // keep arrows from scrolling the page
                    app.borrow_mut().input.press(key);
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key up
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                if let Some(key) = Key::from_key_code(&event.key()) {
                    app.borrow_mut().input.release(key);
                }
            });
            let _ =
                window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Window blur: drop all held keys so nothing sticks.
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                app.borrow_mut().input.clear();
            });
            let _ =
                window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |_time: f64| {
            game_loop(app);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(app: Rc<RefCell<App>>) {
        app.borrow_mut().frame();
        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_app::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use web_arcade::snake::{EdgePolicy, SnakeState};
    use web_arcade::{InputState, pong, snake};

    env_logger::init();
    log::info!("Web Arcade (native) - headless demo");

    // No browser frame driver here; run a fixed number of frames of each
    // game to show the simulations ticking.
    let input = InputState::new();

    let mut match_state = pong::PongState::new(42);
    for _ in 0..2000 {
        pong::tick(&mut match_state, &input);
    }
    log::info!(
        "pong after 2000 ticks: player {} / opponent {}",
        match_state.score.player,
        match_state.score.opponent
    );

    let mut board = SnakeState::new(42, EdgePolicy::Wrap);
    for _ in 0..500 {
        snake::tick(&mut board, &input);
    }
    log::info!(
        "snake after 500 frames: score {}, length {}",
        board.score,
        board.snake.len()
    );
}
