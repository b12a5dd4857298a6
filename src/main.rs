//! Flappy Web entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, HtmlElement};

    use flappy_web::config::GameConfig;
    use flappy_web::highscore::HighScore;
    use flappy_web::render::CanvasRenderer;
    use flappy_web::sim::{GamePhase, GameState, TickInput, spawn_pipe_pair, tick};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        config: GameConfig,
        high_score: HighScore,
        renderer: CanvasRenderer,
        /// Jump signal gathered from keyboard/touch/click since the last frame
        jump_requested: bool,
        last_time: f64,
        /// setInterval handle for the pipe spawner
        spawn_timer: Option<i32>,
        /// Previous frame's phase, for detecting the Running -> Over edge
        last_phase: GamePhase,
    }

    impl Game {
        fn new(seed: u64, config: GameConfig, renderer: CanvasRenderer) -> Self {
            Self {
                state: GameState::new(seed, &config),
                config,
                high_score: HighScore::load(),
                renderer,
                jump_requested: false,
                last_time: 0.0,
                spawn_timer: None,
                last_phase: GamePhase::Running,
            }
        }

        /// Reset session state for a new run
        fn restart(&mut self, seed: u64) {
            self.state = GameState::new(seed, &self.config);
            self.jump_requested = false;
            self.last_time = 0.0;
            self.last_phase = GamePhase::Running;
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Flappy Web starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("board")
            .expect("no board canvas")
            .dyn_into()
            .expect("not a canvas");

        let config = GameConfig::default();
        let renderer = CanvasRenderer::new(&canvas, &config).expect("Failed to init canvas");

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(seed, config, renderer)));

        log::info!("Game initialized with seed: {}", seed);

        setup_input_handlers(game.clone());
        start_spawn_timer(&game);
        request_animation_frame(game);

        log::info!("Flappy Web running!");
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let document = window.document().unwrap();

        // Keyboard
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                match event.code().as_str() {
                    "Space" | "ArrowUp" => game.borrow_mut().jump_requested = true,
                    _ => {}
                }
            });
            let _ = document
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch start (prevent scrolling on mobile)
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::TouchEvent| {
                event.prevent_default();
                game.borrow_mut().jump_requested = true;
            });
            let _ = document
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse click
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                game.borrow_mut().jump_requested = true;
            });
            let _ = document
                .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        let mut entered_game_over = false;
        {
            let mut g = game.borrow_mut();

            // Delta since last frame; the sim clamps it further
            let dt = if g.last_time > 0.0 {
                (time - g.last_time) as f32
            } else {
                0.0
            };
            g.last_time = time;

            let input = TickInput {
                jump: std::mem::take(&mut g.jump_requested),
                now_ms: js_sys::Date::now(),
            };
            let config = g.config.clone();
            tick(&mut g.state, &input, dt, &config);
            g.renderer.render(&g.state, g.high_score.best(), &g.config);

            if g.state.is_over() && g.last_phase == GamePhase::Running {
                g.last_phase = GamePhase::Over;
                entered_game_over = true;
            }
        }

        if entered_game_over {
            handle_game_over(&game);
        }

        request_animation_frame(game);
    }

    /// Running -> Over transition: stop the spawner, persist the high score,
    /// and present the overlay with its restart control
    fn handle_game_over(game: &Rc<RefCell<Game>>) {
        let (score, is_new_best, best) = {
            let mut g = game.borrow_mut();
            stop_spawn_timer(&mut g);
            let score = g.state.score;
            let is_new_best = g.high_score.record(score);
            (score, is_new_best, g.high_score.best())
        };

        log::info!("Game over with score {}", score);

        let document = web_sys::window().unwrap().document().unwrap();
        if let Some(modal) = document.get_element_by_id("gameovermodal") {
            // The congratulation needs a fresh record, a nonzero score, and
            // the score matching what was just stored
            let text = if is_new_best && score == best && score != 0.0 {
                format!("Congratulations!<br></br> New High Score! {}", score)
            } else {
                "Game Over".to_string()
            };
            modal.set_inner_html(&format!(
                "<h3>{} </h3><button id=\"playAgainBtn\">Play Again</button>",
                text
            ));
            if let Some(el) = modal.dyn_ref::<HtmlElement>() {
                let _ = el.style().set_property("display", "block");
            }
            setup_restart_button(game.clone());
        }
    }

    /// Wire the freshly created Play Again button (only reachable while the
    /// overlay is up, so repeated triggers can't overlap a running session)
    fn setup_restart_button(game: Rc<RefCell<Game>>) {
        let document = web_sys::window().unwrap().document().unwrap();

        if let Some(btn) = document.get_element_by_id("playAgainBtn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                let seed = js_sys::Date::now() as u64;
                game.borrow_mut().restart(seed);

                let document = web_sys::window().unwrap().document().unwrap();
                if let Some(modal) = document.get_element_by_id("gameovermodal") {
                    modal.set_inner_html("");
                    if let Some(el) = modal.dyn_ref::<HtmlElement>() {
                        let _ = el.style().set_property("display", "none");
                    }
                }

                start_spawn_timer(&game);
                log::info!("Game restarted with seed: {}", seed);
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    /// (Re)start the pipe spawn interval, cancelling any previous timer so a
    /// restart never leaves an orphaned spawner feeding the new session
    fn start_spawn_timer(game: &Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();

        let interval_ms = {
            let mut g = game.borrow_mut();
            stop_spawn_timer(&mut g);
            g.config.spawn_interval_ms as i32
        };

        let cb_game = game.clone();
        let closure = Closure::<dyn FnMut()>::new(move || {
            let mut g = cb_game.borrow_mut();
            let config = g.config.clone();
            spawn_pipe_pair(&mut g.state, &config);
        });

        match window.set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            interval_ms,
        ) {
            Ok(handle) => game.borrow_mut().spawn_timer = Some(handle),
            Err(e) => log::error!("Failed to start spawn timer: {:?}", e),
        }
        closure.forget();
    }

    fn stop_spawn_timer(g: &mut Game) {
        if let Some(handle) = g.spawn_timer.take() {
            if let Some(window) = web_sys::window() {
                window.clear_interval_with_handle(handle);
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Flappy Web (native) starting...");
    log::info!("Native mode is a headless demo - build for wasm32 for the playable version");

    headless_demo();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Drive a seeded session at 60 fps with scripted flaps until it ends
#[cfg(not(target_arch = "wasm32"))]
fn headless_demo() {
    use flappy_web::GameConfig;
    use flappy_web::sim::{GameState, TickInput, spawn_pipe_pair, tick};

    let config = GameConfig::default();
    let seed = 0xF1A9;
    let mut state = GameState::new(seed, &config);
    log::info!("Demo session with seed: {}", seed);

    let frame_ms = 1000.0 / 60.0;
    let mut clock = 0.0f64;
    let mut since_spawn = 0.0f64;

    for frame in 0u32..36_000 {
        if state.is_over() {
            break;
        }
        clock += frame_ms as f64;
        since_spawn += frame_ms as f64;

        if since_spawn >= config.spawn_interval_ms {
            spawn_pipe_pair(&mut state, &config);
            since_spawn = 0.0;
        }

        let input = TickInput {
            jump: frame % 18 == 0,
            now_ms: clock,
        };
        tick(&mut state, &input, frame_ms, &config);
    }

    println!("Demo over - score {}", state.score);
}
