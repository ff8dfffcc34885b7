//! Block Hop entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent, MouseEvent};

    use block_hop::Settings;
    use block_hop::audio::AudioManager;
    use block_hop::consts::*;
    use block_hop::platform::{click_event, key_from_dom};
    use block_hop::renderer::vertex::colors;
    use block_hop::renderer::{RenderState, Scene};
    use block_hop::sim::{GameState, InputEvent, InputQueue, tick};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        settings: Settings,
        input: InputQueue,
        render_state: Option<RenderState>,
        labels: Option<CanvasRenderingContext2d>,
        audio: AudioManager,
        accumulator: f32,
        last_time: f64,
    }

    impl Game {
        fn new(width: f32, height: f32, settings: Settings) -> Self {
            Self {
                state: GameState::new(width, height, settings.tuning),
                audio: AudioManager::new(&settings),
                settings,
                input: InputQueue::default(),
                render_state: None,
                labels: None,
                accumulator: 0.0,
                last_time: 0.0,
            }
        }

        /// Run simulation ticks
        fn update(&mut self, dt: f32) {
            self.accumulator += dt.min(0.1);

            let mut substeps = 0;
            while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
                let events = tick(&mut self.state, &mut self.input);
                self.audio.handle_events(&events);
                self.accumulator -= SIM_DT;
                substeps += 1;
            }
            // Drop backlog we could not catch up on
            if substeps == MAX_SUBSTEPS {
                self.accumulator = self.accumulator.min(SIM_DT);
            }
        }

        /// Render the current frame
        fn render(&mut self) {
            let scene = Scene::build(&self.state, &self.settings);

            if let Some(ref mut render_state) = self.render_state {
                match render_state.render(&scene) {
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

            if let Some(ref ctx) = self.labels {
                draw_labels(ctx, &scene, self.state.width, self.state.height);
            }
        }
    }

    /// Draw life percentages on the 2D overlay canvas
    fn draw_labels(ctx: &CanvasRenderingContext2d, scene: &Scene, width: f32, height: f32) {
        ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
        if scene.labels.is_empty() {
            return;
        }
        ctx.set_font("8px Arial");
        ctx.set_fill_style_str(&colors::css(colors::LABEL));
        ctx.set_text_align("center");
        ctx.set_text_baseline("middle");
        for label in &scene.labels {
            let _ = ctx.fill_text(&label.text, label.center.x as f64, label.center.y as f64);
        }
    }

    /// Look up a canvas by id
    fn canvas_by_id(document: &web_sys::Document, id: &str) -> Option<HtmlCanvasElement> {
        document.get_element_by_id(id)?.dyn_into().ok()
    }

    /// Size the overlay like the main canvas and return its 2D context
    fn setup_label_overlay(
        document: &web_sys::Document,
        width: u32,
        height: u32,
        dpr: f64,
    ) -> Option<CanvasRenderingContext2d> {
        let Some(overlay) = canvas_by_id(document, "labels") else {
            log::warn!("No #labels canvas - life labels disabled");
            return None;
        };
        overlay.set_width(width);
        overlay.set_height(height);
        let ctx: CanvasRenderingContext2d = overlay.get_context("2d").ok()??.dyn_into().ok()?;
        ctx.scale(dpr, dpr).ok()?;
        Some(ctx)
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Block Hop starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");
        let canvas = canvas_by_id(&document, "canvas").expect("no canvas");

        // Simulation runs in CSS pixels; the surface gets device pixels
        let dpr = window.device_pixel_ratio();
        let view_w = canvas.client_width() as f32;
        let view_h = canvas.client_height() as f32;
        let width = (view_w as f64 * dpr) as u32;
        let height = (view_h as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let settings = Settings::load();
        let game = Rc::new(RefCell::new(Game::new(view_w, view_h, settings)));
        game.borrow_mut().labels = setup_label_overlay(&document, width, height, dpr);

        log::info!(
            "World generated: {} blocks on {}x{}",
            game.borrow().state.world.len(),
            view_w,
            view_h
        );

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .expect("Failed to create surface");

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .expect("Failed to get adapter");

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = RenderState::new(surface, &adapter, width, height, (view_w, view_h)).await;
        game.borrow_mut().render_state = Some(render_state);

        setup_input_handlers(&canvas, game.clone());

        // Start game loop
        request_animation_frame(game);

        log::info!("Block Hop running!");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();

        // Key down
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(key) = key_from_dom(&event.key(), &event.code()) {
                    // Keep Space from scrolling the page
                    event.prevent_default();
                    game.borrow_mut().input.push(InputEvent::KeyDown(key));
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key up
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(key) = key_from_dom(&event.key(), &event.code()) {
                    game.borrow_mut().input.push(InputEvent::KeyUp(key));
                }
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Click - damage a block
        {
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let rect = canvas_clone.get_bounding_client_rect();
                let mut g = game.borrow_mut();
                let scale = if rect.width() > 0.0 && rect.height() > 0.0 {
                    Vec2::new(
                        g.state.width / rect.width() as f32,
                        g.state.height / rect.height() as f32,
                    )
                } else {
                    Vec2::ONE
                };
                let click = click_event(
                    event.client_x() as f32,
                    event.client_y() as f32,
                    rect.left() as f32,
                    rect.top() as f32,
                    scale,
                );
                g.input.push(click);
            });
            let _ = canvas
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
        {
            let mut g = game.borrow_mut();

            // Calculate delta time
            let dt = if g.last_time > 0.0 {
                ((time - g.last_time) / 1000.0) as f32
            } else {
                SIM_DT
            };
            g.last_time = time;

            g.update(dt);
            g.render();
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Block Hop (native) starting...");
    log::info!("Native mode runs a scripted headless session - use `trunk serve` to play");

    let settings = block_hop::Settings::load();
    headless::run(&settings);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use glam::Vec2;

    use block_hop::Settings;
    use block_hop::renderer::Scene;
    use block_hop::sim::{GameEvent, GameState, InputEvent, InputQueue, Key, tick};

    const WIDTH: f32 = 640.0;
    const HEIGHT: f32 = 480.0;

    /// Scripted input: (tick, event)
    fn script(state: &GameState) -> Vec<(u64, InputEvent)> {
        let below = state.player.center() + Vec2::new(0.0, state.tuning.block_size);
        let mut script = vec![
            (10, InputEvent::KeyDown(Key::Right)),
            (40, InputEvent::KeyUp(Key::Right)),
            (45, InputEvent::KeyDown(Key::Jump)),
            (50, InputEvent::KeyDown(Key::Jump)),
            (60, InputEvent::KeyUp(Key::Jump)),
        ];
        // Dig straight down from where the walk ends
        let dig_at = below + Vec2::new(30.0 * state.tuning.player_speed, 0.0);
        script.extend((100..104).map(|t| (t, InputEvent::Click(dig_at))));
        script
    }

    pub fn run(settings: &Settings) {
        let mut state = GameState::new(WIDTH, HEIGHT, settings.tuning);
        let mut queue = InputQueue::default();
        let script = script(&state);

        let mut hits = 0;
        let mut destroyed = 0;
        for t in 0..180u64 {
            for (_, event) in script.iter().filter(|(at, _)| *at == t) {
                queue.push(*event);
            }
            for event in tick(&mut state, &mut queue) {
                match event {
                    GameEvent::BlockHit { .. } => hits += 1,
                    GameEvent::BlockDestroyed { .. } => destroyed += 1,
                    other => log::info!("tick {}: {:?}", t, other),
                }
            }
        }

        let scene = Scene::build(&state, settings);
        println!(
            "After {} ticks: player at ({:.1}, {:.1}), {} hits, {} destroyed, {} blocks left, {} rects, {} labels",
            state.time_ticks,
            state.player.pos.x,
            state.player.pos.y,
            hits,
            destroyed,
            state.world.len(),
            scene.rects.len(),
            scene.labels.len(),
        );
    }
}
