//! Wheel Garden entry point
//!
//! Handles platform-specific initialization and runs the frame loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::HtmlCanvasElement;

    use wheel_garden::Settings;
    use wheel_garden::platform::WebCanvas;
    use wheel_garden::renderer::render_frame;
    use wheel_garden::sim::{PerlinNoise, SketchState, step};

    /// App instance holding all state
    struct App {
        state: SketchState,
        canvas: WebCanvas,
        noise: PerlinNoise,
    }

    impl App {
        /// Step every wheel, then paint every wheel
        fn frame(&mut self) {
            step(&mut self.state);
            render_frame(&mut self.canvas, &self.state, &self.noise);
        }

        fn regenerate(&mut self) {
            self.state.rebuild();
        }

        fn resize(&mut self, width: u32, height: u32) {
            self.canvas.resize(width, height);
            self.state.resize(width as f32, height as f32);
        }
    }

    fn window_size(window: &web_sys::Window) -> (u32, u32) {
        let dim = |v: Result<JsValue, JsValue>| {
            v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0).max(0.0) as u32
        };
        (dim(window.inner_width()), dim(window.inner_height()))
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);

        log::info!("Wheel Garden starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let element: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .ok_or("canvas not found")?
            .dyn_into()?;

        let (width, height) = window_size(&window);
        element.set_width(width);
        element.set_height(height);

        let settings = Settings::load();
        settings.save();
        let seed = js_sys::Date::now() as u64;
        let noise = PerlinNoise::new(seed as u32);
        let state = SketchState::new(settings, seed, width as f32, height as f32);
        log::info!("Sketch initialized with seed: {}", seed);

        let app = Rc::new(RefCell::new(App {
            state,
            canvas: WebCanvas::new(element)?,
            noise,
        }));

        setup_input_handlers(app.clone())?;
        request_animation_frame(app);

        log::info!("Wheel Garden running!");
        Ok(())
    }

    fn setup_input_handlers(app: Rc<RefCell<App>>) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or("no window")?;

        // Regenerate key
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                let mut a = app.borrow_mut();
                if event.key() == a.state.settings.regenerate_key {
                    a.regenerate();
                }
            });
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Window resize rebuilds before the next frame
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                let Some(window) = web_sys::window() else {
                    return;
                };
                let (width, height) = window_size(&window);
                app.borrow_mut().resize(width, height);
            });
            window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            frame_loop(app);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn frame_loop(app: Rc<RefCell<App>>) {
        app.borrow_mut().frame();
        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_app::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::time::{SystemTime, UNIX_EPOCH};
    use wheel_garden::Settings;
    use wheel_garden::consts::TARGET_FPS;
    use wheel_garden::renderer::{MeshCanvas, render_frame, vertex_bytes};
    use wheel_garden::sim::{PerlinNoise, SketchState, step};

    env_logger::init();
    log::info!("Wheel Garden (native) starting...");
    log::info!("Native mode renders headless - run with `trunk serve` for the web version");

    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load_from_path(std::path::Path::new(&path)),
        None => Settings::default(),
    };

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    let (width, height) = (1920.0, 1080.0);

    let mut state = SketchState::new(settings, seed, width, height);
    let noise = PerlinNoise::new(seed as u32);
    let mut canvas = MeshCanvas::new(width, height);

    // Ten seconds of animation
    let frames = TARGET_FPS * 10;
    let mut max_vertices = 0;
    let mut total_bytes = 0;
    for _ in 0..frames {
        step(&mut state);
        render_frame(&mut canvas, &state, &noise);
        max_vertices = max_vertices.max(canvas.vertices().len());
        total_bytes += vertex_bytes(canvas.vertices()).len();
    }

    println!(
        "Rendered {} frames: {} wheels, {} particles, up to {} vertices per frame ({:.1} MiB of vertex data)",
        state.frame_count,
        state.wheels.len(),
        state.particle_count(),
        max_vertices,
        total_bytes as f64 / (1024.0 * 1024.0)
    );
}
