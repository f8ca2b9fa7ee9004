//! Jar Drop entry point
//!
//! Handles platform-specific initialization and runs the frame loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent};

    use jar_drop::Settings;
    use jar_drop::sim::{SimState, TickInput, rescale, tick};

    /// App instance holding all state
    struct App {
        state: SimState,
        input: TickInput,
        settings: Settings,
        canvas: HtmlCanvasElement,
        ctx: CanvasRenderingContext2d,
        // FPS tracking
        frame_times: [f64; 60],
        frame_index: usize,
        fps: u32,
    }

    impl App {
        fn new(canvas: HtmlCanvasElement, ctx: CanvasRenderingContext2d) -> Self {
            let viewport = Vec2::new(canvas.width() as f32, canvas.height() as f32);
            let settings = Settings::load();

            let mut state = SimState::new(viewport);
            state.config.gravity = settings.gravity;
            state.config.dampening = settings.dampening;

            Self {
                state,
                input: TickInput::default(),
                settings,
                canvas,
                ctx,
                frame_times: [0.0; 60],
                frame_index: 0,
                fps: 0,
            }
        }

        /// Scale from CSS pixels (mouse events) to canvas backing pixels
        fn pointer_scale(&self) -> f32 {
            let client_w = self.canvas.client_width();
            if client_w > 0 {
                self.canvas.width() as f32 / client_w as f32
            } else {
                1.0
            }
        }

        /// Resize the canvas backing store to match its layout size and
        /// rescale the simulation with it. Cheap when nothing changed.
        fn sync_canvas_size(&mut self) {
            let window = web_sys::window().expect("no window");
            let dpr = window.device_pixel_ratio();
            let width = (self.canvas.client_width() as f64 * dpr) as u32;
            let height = (self.canvas.client_height() as f64 * dpr) as u32;
            if width == 0 || height == 0 {
                return;
            }

            if width != self.canvas.width() || height != self.canvas.height() {
                self.canvas.set_width(width);
                self.canvas.set_height(height);
            }
            rescale(&mut self.state, Vec2::new(width as f32, height as f32));
        }

        /// Run one frame: resize, step, clear one-shot input
        fn update(&mut self, time: f64) {
            self.sync_canvas_size();
            tick(&mut self.state, &self.input);
            // Clear one-shot inputs after processing
            self.input.clicked = false;

            // Track frame times for FPS
            self.frame_times[self.frame_index] = time;
            self.frame_index = (self.frame_index + 1) % 60;
            let oldest_time = self.frame_times[self.frame_index];
            if oldest_time > 0.0 {
                let elapsed = time - oldest_time;
                if elapsed > 0.0 {
                    self.fps = (60000.0 / elapsed).round() as u32;
                }
            }
        }

        /// Render the current frame with the 2D canvas API
        fn render(&self) {
            let viewport = self.state.config.viewport;
            let (w, h) = (viewport.x as f64, viewport.y as f64);
            let ctx = &self.ctx;

            ctx.clear_rect(0.0, 0.0, w, h);

            // hairline viewport box
            ctx.set_stroke_style_str("black");
            ctx.set_line_width(0.001);
            ctx.stroke_rect(0.5, 0.5, w - 1.0, h - 1.0);

            // interactive area outline
            let area = &self.state.area;
            ctx.begin_path();
            ctx.move_to(area.p1.x as f64, area.p1.y as f64);
            for p in [area.p2, area.p3, area.p4, area.p1] {
                ctx.line_to(p.x as f64, p.y as f64);
            }
            ctx.set_line_width(4.0);
            ctx.stroke();

            for circle in &self.state.circles {
                ctx.begin_path();
                let draw_radius = (circle.radius - circle.line_width / 2.0).max(0.0);
                let _ = ctx.arc(
                    circle.pos.x as f64,
                    circle.pos.y as f64,
                    draw_radius as f64,
                    0.0,
                    std::f64::consts::TAU,
                );
                ctx.set_fill_style_str(&circle.fill_color.css());
                ctx.fill();
                ctx.set_line_width(4.0);
                ctx.set_stroke_style_str(&circle.stroke_color.css());
                ctx.stroke();
            }
        }

        /// Update HUD elements in the DOM
        fn update_hud(&self) {
            if !self.settings.show_fps {
                return;
            }
            let window = web_sys::window().expect("no window");
            let document = window.document().expect("no document");
            if let Some(el) = document.get_element_by_id("hud-fps") {
                el.set_text_content(Some(&self.fps.to_string()));
            }
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Jar Drop starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // Size the backing store before the sim takes its first look
        let dpr = window.device_pixel_ratio();
        let width = (canvas.client_width() as f64 * dpr) as u32;
        let height = (canvas.client_height() as f64 * dpr) as u32;
        canvas.set_width(width.max(1));
        canvas.set_height(height.max(1));

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .expect("no 2d context")
            .expect("no 2d context")
            .dyn_into()
            .expect("not a 2d context");

        let app = Rc::new(RefCell::new(App::new(canvas.clone(), ctx)));

        log::info!("Simulation initialized at {}x{}", width, height);

        setup_input_handlers(&canvas, app.clone());
        request_animation_frame(app);

        log::info!("Jar Drop running!");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, app: Rc<RefCell<App>>) {
        // Mouse down - press and position
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let mut a = app.borrow_mut();
                let scale = a.pointer_scale();
                a.input.pointer =
                    Vec2::new(event.offset_x() as f32 * scale, event.offset_y() as f32 * scale);
                a.input.pressed = true;
            });
            let _ = canvas
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse up - release
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                app.borrow_mut().input.pressed = false;
            });
            let _ = canvas
                .add_event_listener_with_callback("mouseup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse move - position only
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let mut a = app.borrow_mut();
                let scale = a.pointer_scale();
                a.input.pointer =
                    Vec2::new(event.offset_x() as f32 * scale, event.offset_y() as f32 * scale);
            });
            let _ = canvas
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Click - one-shot, consumed by the next tick
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let mut a = app.borrow_mut();
                let scale = a.pointer_scale();
                a.input.pointer =
                    Vec2::new(event.offset_x() as f32 * scale, event.offset_y() as f32 * scale);
                a.input.clicked = true;
            });
            let _ = canvas
                .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let window = web_sys::window().expect("no window");
        let closure = Closure::once(move |time: f64| {
            frame_loop(app, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn frame_loop(app: Rc<RefCell<App>>, time: f64) {
        {
            let mut a = app.borrow_mut();
            a.update(time);
            a.render();
            a.update_hud();
        }

        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_app::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Jar Drop (native) starting...");
    log::info!("Native mode is headless - build for wasm32 for the interactive version");

    println!("\nRunning headless simulation check...");
    headless_smoke();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn headless_smoke() {
    use glam::Vec2;
    use jar_drop::sim::{SimState, TickInput, tick};

    let mut state = SimState::new(Vec2::new(400.0, 400.0));
    let input = TickInput::default();

    for _ in 0..300 {
        tick(&mut state, &input);
    }

    for circle in &state.circles {
        assert!(circle.pos.y + circle.radius <= 400.0 + 0.001);
        assert!(circle.pos.y - circle.radius >= -0.001);
        log::info!("circle settled at {:?}", circle.pos);
    }
    println!("✓ Circles stayed inside the viewport for 300 frames");
}
