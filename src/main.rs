//! Court Pong entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent, MouseEvent};

    use court_pong::consts::*;
    use court_pong::platform::{FrameClock, KeyState};
    use court_pong::renderer::Surface;
    use court_pong::ui::TextMeasure;
    use court_pong::{Game, Settings};
    use glam::Vec2;

    /// `Surface` over a canvas 2D context
    struct CanvasSurface {
        ctx: CanvasRenderingContext2d,
    }

    impl TextMeasure for CanvasSurface {
        fn text_width(&self, font: &str, text: &str) -> f32 {
            self.ctx.set_font(font);
            self.ctx
                .measure_text(text)
                .map(|m| m.width() as f32)
                .unwrap_or(0.0)
        }
    }

    impl Surface for CanvasSurface {
        fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: &str) {
            self.ctx.set_fill_style_str(color);
            self.ctx
                .fill_rect(pos.x as f64, pos.y as f64, size.x as f64, size.y as f64);
        }

        fn fill_circle(&mut self, center: Vec2, radius: f32, color: &str) {
            self.ctx.begin_path();
            let _ = self.ctx.arc(
                center.x as f64,
                center.y as f64,
                radius as f64,
                0.0,
                std::f64::consts::TAU,
            );
            self.ctx.set_fill_style_str(color);
            self.ctx.fill();
            self.ctx.close_path();
        }

        fn fill_text(&mut self, text: &str, x: f32, y: f32, font: &str, color: &str) {
            self.ctx.set_fill_style_str(color);
            self.ctx.set_font(font);
            self.ctx.set_text_align("center");
            let _ = self.ctx.fill_text(text, x as f64, y as f64);
        }

        fn stroke_dashed_line(&mut self, from: Vec2, to: Vec2, dash: f32, color: &str) {
            let pattern = js_sys::Array::of2(&(dash as f64).into(), &(dash as f64).into());
            self.ctx.set_stroke_style_str(color);
            let _ = self.ctx.set_line_dash(&pattern);
            self.ctx.begin_path();
            self.ctx.move_to(from.x as f64, from.y as f64);
            self.ctx.line_to(to.x as f64, to.y as f64);
            self.ctx.stroke();
            let _ = self.ctx.set_line_dash(&js_sys::Array::new());
        }
    }

    /// Game instance holding all state
    struct App {
        game: Game,
        surface: CanvasSurface,
        keys: KeyState,
        clock: FrameClock,
    }

    impl App {
        fn frame(&mut self, time: f64) {
            let dt = self.clock.advance(time);
            let input = self.keys.input();
            self.game.frame(&input, dt, &mut self.surface);
        }
    }

    fn find_canvas() -> Option<(HtmlCanvasElement, CanvasRenderingContext2d)> {
        let document = web_sys::window()?.document()?;
        let canvas: HtmlCanvasElement = document
            .query_selector("canvas")
            .ok()
            .flatten()?
            .dyn_into()
            .ok()?;
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into()
            .ok()?;
        Some((canvas, ctx))
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);
        log::info!("Court Pong starting...");

        let Some((canvas, ctx)) = find_canvas() else {
            log::error!("No 2D canvas found");
            return;
        };
        canvas.set_width(COURT_WIDTH as u32);
        canvas.set_height(COURT_HEIGHT as u32);

        let settings = Settings::load_or_default(canvas.get_attribute("data-settings").as_deref());
        let keys = KeyState::new(settings.controls.clone());
        let seed: u64 = rand::random();

        let app = Rc::new(RefCell::new(App {
            game: Game::new(seed, settings),
            surface: CanvasSurface { ctx },
            keys,
            clock: FrameClock::new(),
        }));

        setup_keyboard(app.clone());
        setup_click(app.clone(), canvas);
        start_loop(app);
        log::info!("Court Pong running!");
    }

    fn setup_keyboard(app: Rc<RefCell<App>>) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };

        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if app.borrow_mut().keys.key_down(&event.code()) {
                    event.prevent_default();
                }
            });
            let _ = document
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                app.borrow_mut().keys.key_up(&event.code());
            });
            let _ = document
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_click(app: Rc<RefCell<App>>, canvas: HtmlCanvasElement) {
        let target = canvas.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            let rect = target.get_bounding_client_rect();
            let x = event.client_x() as f64 - rect.left();
            let y = event.client_y() as f64 - rect.top();
            let mut guard = app.borrow_mut();
            let App { game, surface, .. } = &mut *guard;
            game.click(x as f32, y as f32, &*surface);
        });
        let _ = canvas.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_frame(f: &Closure<dyn FnMut(f64)>) {
        if let Some(window) = web_sys::window() {
            let _ = window.request_animation_frame(f.as_ref().unchecked_ref());
        }
    }

    fn start_loop(app: Rc<RefCell<App>>) {
        let f: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
        let g = f.clone();

        *g.borrow_mut() = Some(Closure::new(move |time: f64| {
            app.borrow_mut().frame(time);
            if let Some(cb) = f.borrow().as_ref() {
                request_frame(cb);
            }
        }));

        if let Some(cb) = g.borrow().as_ref() {
            request_frame(cb);
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
    use court_pong::consts::{FRAME_DT, WIN_SCORE};
    use court_pong::renderer::record::Recorder;
    use court_pong::sim::TickInput;
    use court_pong::{Game, GamePhase, OpponentMode, Settings};

    /// Ten minutes at 60 Hz
    const HEADLESS_FRAMES: u32 = 60 * 60 * 10;

    env_logger::init();
    log::info!("Court Pong (native) starting...");
    log::info!("Native mode runs headless - run with `trunk serve` for the web version");

    let seed: u64 = rand::random();
    let mut game = Game::new(seed, Settings::default());
    let mut recorder = Recorder::new();
    game.start(OpponentMode::ComputerPerfect);

    // Idle left paddle against the perfect tracker
    let idle = TickInput::default();
    let mut frames = 0;
    while frames < HEADLESS_FRAMES && game.phase == GamePhase::Playing {
        recorder.clear();
        game.frame(&idle, FRAME_DT, &mut recorder);
        frames += 1;
    }

    let score = game.session.score;
    match game.winner_label() {
        Some(label) => log::info!(
            "{} reached {} after {} frames ({} : {})",
            label,
            WIN_SCORE,
            frames,
            score.left,
            score.right
        ),
        None => log::info!(
            "No winner after {} frames ({} : {})",
            frames,
            score.left,
            score.right
        ),
    }
    log::debug!("Last frame drew {} commands", recorder.commands().len());
    if let Ok(json) = serde_json::to_string(&game.session) {
        log::debug!("Final match state: {}", json);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
