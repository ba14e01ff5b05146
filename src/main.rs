//! Ortho Break entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::HtmlCanvasElement;

    use ortho_break::config::GameConfig;
    use ortho_break::consts::*;
    use ortho_break::renderer::{RenderState, SceneMeshes};
    use ortho_break::sim::{GameEvent, GamePhase, GameState, TickInput, tick};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        meshes: SceneMeshes,
        render_state: Option<RenderState>,
        accumulator: f32,
        last_time: f64,
        input: TickInput,
        /// Set when the loss condition fires; stops the frame loop
        exit_requested: bool,
    }

    impl Game {
        fn new(seed: u64) -> Self {
            let state = GameState::new(seed, GameConfig::default());
            let meshes = SceneMeshes::new(&state);
            Self {
                state,
                meshes,
                render_state: None,
                accumulator: 0.0,
                last_time: 0.0,
                input: TickInput::default(),
                exit_requested: false,
            }
        }

        /// Run simulation ticks from the frame-time accumulator
        fn update(&mut self, dt: f32) {
            let dt = dt.min(0.1);
            self.accumulator += dt;

            let tick_dt = self.state.config.tick_dt;
            let mut substeps = 0;
            while self.accumulator >= tick_dt && substeps < MAX_SUBSTEPS {
                let input = self.input;
                tick(&mut self.state, &input, tick_dt);
                self.accumulator -= tick_dt;
                substeps += 1;

                // Clear one-shot inputs after processing
                self.input.start = false;
            }

            for event in self.state.drain_events() {
                match event {
                    GameEvent::BallLost => {
                        log::info!("game over");
                        self.exit_requested = true;
                    }
                    GameEvent::LevelCleared => log::info!("level cleared"),
                    GameEvent::BlockDestroyed { index } => {
                        log::debug!("block {} destroyed", index)
                    }
                    _ => {}
                }
            }
        }

        /// Render the current frame
        fn render(&mut self) {
            let vertices = self.meshes.frame_vertices(&self.state);
            if let Some(ref mut render_state) = self.render_state {
                match render_state.render(&vertices) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        render_state.resize(render_state.size.0, render_state.size.1);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Ortho Break starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let dpr = window.device_pixel_ratio();
        let width = (canvas.client_width() as f64 * dpr) as u32;
        let height = (canvas.client_height() as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(seed)));
        log::info!("Game initialized with seed: {}", seed);

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .expect("Failed to create surface");

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .expect("Failed to get adapter");

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = RenderState::new(surface, &adapter, width, height).await;
        game.borrow_mut().render_state = Some(render_state);

        setup_input_handlers(game.clone());

        request_animation_frame(game);

        log::info!("Ortho Break running!");
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();

        // Key down: held directions plus the one-shot start edge
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                let mut g = game.borrow_mut();
                match event.key().as_str() {
                    "ArrowLeft" => g.input.left = true,
                    "ArrowRight" => g.input.right = true,
                    " " => {
                        if g.state.phase == GamePhase::Idle {
                            g.input.start = true;
                        }
                    }
                    _ => {}
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key up: release held directions
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                let mut g = game.borrow_mut();
                match event.key().as_str() {
                    "ArrowLeft" => g.input.left = false,
                    "ArrowRight" => g.input.right = false,
                    _ => {}
                }
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
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
        {
            let mut g = game.borrow_mut();

            let dt = if g.last_time > 0.0 {
                ((time - g.last_time) / 1000.0) as f32
            } else {
                g.state.config.tick_dt
            };
            g.last_time = time;

            g.update(dt);
            g.render();

            // Loss condition honored by ending the loop after this frame
            if g.exit_requested {
                log::info!("frame loop stopped");
                return;
            }
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use ortho_break::config::GameConfig;
    use ortho_break::sim::{GameEvent, GamePhase, GameState, TickInput, tick};

    env_logger::init();

    let config = GameConfig::default();
    match serde_json::to_string(&config) {
        Ok(json) => log::info!("Ortho Break (headless) starting, config: {}", json),
        Err(e) => log::warn!("config not serializable: {}", e),
    }

    // Headless run: start the game and let the ball play against a
    // stationary paddle until a terminal phase is reached.
    let tick_dt = config.tick_dt;
    let mut state = GameState::new(0xB10C5, config);

    let start = TickInput {
        start: true,
        ..Default::default()
    };
    tick(&mut state, &start, tick_dt);

    let max_ticks = 60_000;
    while state.phase == GamePhase::Running && state.ticks < max_ticks {
        tick(&mut state, &TickInput::default(), tick_dt);
        for event in state.drain_events() {
            if let GameEvent::BlockDestroyed { index } = event {
                log::debug!("block {} destroyed at tick {}", index, state.ticks);
            }
        }
    }

    log::info!(
        "finished: phase {:?}, {} ticks, {} blocks left",
        state.phase,
        state.ticks,
        state.live_blocks()
    );
}
