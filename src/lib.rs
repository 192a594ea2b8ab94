
//! Rust versions of the OpenGL SuperBible demos, together with the small framework they run on.
//!
//! Every demo is a binary in `src/bin` which implements [`Demo`](trait.Demo.html) and hands
//! itself to [`main`](fn.main.html).

// Lets `#[derive(Vertex)]` refer to `::superbible` from inside this crate
extern crate self as superbible;

pub mod error;
pub mod config;
pub mod time;
pub mod input;
pub mod window;
pub mod graphics;
pub mod shader;
pub mod buffer;
pub mod color;
pub mod pixmap;
pub mod texture;
pub mod matrix_stack;
pub mod region;
pub mod pipeline;
pub mod points;
pub mod shapes;
pub mod sphere_world;

pub use crate::color::Color;
pub use crate::config::{Args, Config};
pub use crate::error::{Error, Result};
pub use crate::input::{Input, Key, KeyState};
pub use crate::matrix_stack::MatrixStack;

use std::thread;
use std::time::{Duration, Instant};

use clap::Parser;
use log::{error, info, warn};
use math3d::Vec2;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::pixmap::Pixmap;
use crate::time::{FixedStep, Timer};
use crate::window::Window;

/// Entry point for demo binaries. Parses the command line, loads the config and runs the demo.
/// Errors are logged and end the process with exit code 1.
///
/// # Example
/// ```rust,no_run
/// use superbible::{Demo, DemoState, MatrixStack, Result};
///
/// struct Empty;
///
/// impl Demo for Empty {
///     fn setup(_state: &mut DemoState) -> Result<Empty> { Ok(Empty) }
///     fn draw(&mut self, _state: &DemoState, _stack: &mut MatrixStack) {}
///     fn name() -> &'static str { "empty" }
/// }
///
/// fn main() {
///     superbible::main::<Empty>();
/// }
/// ```
pub fn main<T: Demo>() {
    let args = Args::parse();
    config::init_logging();

    let result = args.load_config().and_then(run::<T>);
    if let Err(err) = result {
        error!("{}", err);
        std::process::exit(1);
    }
}

/// Creates a new window and runs the given demo in it. This function does not return until the
/// demo exits.
pub fn run<T: Demo>(config: Config) -> Result<()> {
    let mut window = Window::new(T::name(), config.window.width, config.window.height)?;
    window.set_vsync(config.window.vsync);

    let mut state = DemoState::new(config);
    state.win_size = window.size();
    graphics::viewport(state.win_size.x, state.win_size.y);

    let mut stack = MatrixStack::new();
    let mut input = Input::new();

    info!("Starting {}", T::name());
    let mut demo = T::setup(&mut state)?;
    demo.on_resize(&state, &mut stack);
    window.show();

    let mut timer = Timer::new();
    let mut fixed_step = FixedStep::new(state.config.timing.tick_rate);
    let target_delta = Duration::from_millis(state.config.timing.target_delta_ms);

    'main_loop:
    loop {
        let frame_start = Instant::now();

        // Events
        window.poll_events(&mut input);
        if window.close_requested() {
            break 'main_loop;
        }
        if window.resized() {
            state.win_size = window.size();
            graphics::viewport(state.win_size.x, state.win_size.y);
            demo.on_resize(&state, &mut stack);
        }

        if input.key(Key::Escape).pressed() {
            state.exit = true;
        }
        demo.handle_input(&input, &mut state);

        // Logic and rendering
        let (_, delta) = timer.tick();
        for _ in 0..fixed_step.advance(delta) {
            demo.tick(&mut state);
        }

        demo.draw(&state, &mut stack);
        if input.key(Key::F12).pressed() {
            if let Err(err) = state.screenshot(T::name()) {
                warn!("Could not take screenshot: {}", err);
            }
        }
        window.swap_buffers();
        graphics::print_errors();

        state.frame += 1;
        if let Some(limit) = state.config.frame_limit {
            if state.frame >= limit {
                info!("Rendered {} frames, exiting", state.frame);
                state.exit = true;
            }
        }
        if state.exit {
            break 'main_loop;
        }

        // Timing
        let elapsed = frame_start.elapsed();
        if elapsed < target_delta {
            thread::sleep(target_delta - elapsed);
        }
    }

    demo.close();
    info!("Closing {}", T::name());
    Ok(())
}

/// General info about the currently running demo. Passed as a parameter to most
/// [`Demo`](trait.Demo.html) methods.
pub struct DemoState {
    /// The size of the window in which this demo is running, in pixels.
    pub win_size: Vec2<u32>,
    /// If set to true the demo will exit after rendering.
    pub exit: bool,
    /// The number of frames rendered so far
    pub frame: u64,
    pub config: Config,

    rng: StdRng,
    screenshots: u32,
}

impl DemoState {
    pub fn new(config: Config) -> DemoState {
        DemoState {
            win_size: Vec2::new(config.window.width, config.window.height),
            exit: false,
            frame: 0,
            rng: StdRng::seed_from_u64(config.seed),
            config,
            screenshots: 0,
        }
    }

    /// Width divided by height of the window. A window with no height is treated as one pixel
    /// high.
    pub fn aspect(&self) -> f32 {
        self.win_size.x as f32 / self.win_size.y.max(1) as f32
    }

    /// Random numbers, seeded from the config so scenes are identical between runs
    pub fn rng(&mut self) -> &mut StdRng {
        &mut self.rng
    }

    /// Writes the contents of the back buffer to `<screenshots>/<name>-<n>.png`
    fn screenshot(&mut self, name: &str) -> Result<()> {
        let Vec2 { x: width, y: height } = self.win_size;
        let pixmap = Pixmap::from_rgba(width, height, graphics::read_pixels(width, height))?;

        self.screenshots += 1;
        let path = self.config.screenshots.join(format!("{}-{}.png", name, self.screenshots));
        pixmap.save(&path)?;

        info!("Saved screenshot to {}", path.display());
        Ok(())
    }
}

/// Used with [`superbible::main`](fn.main.html)
pub trait Demo: Sized {
    /// Called before the main loop. Resources and initial state should be set up here.
    fn setup(state: &mut DemoState) -> Result<Self>;

    /// Called once every frame, before ticking.
    fn handle_input(&mut self, _input: &Input, _state: &mut DemoState) {}
    /// Called at a fixed rate (60 times per second by default), independent of the frame rate.
    fn tick(&mut self, _state: &mut DemoState) {}
    /// Called once every frame, after ticking.
    fn draw(&mut self, state: &DemoState, stack: &mut MatrixStack);

    /// Called once before the first frame and whenever the window is resized. Projections should
    /// be set up here.
    fn on_resize(&mut self, _state: &DemoState, _stack: &mut MatrixStack) {}
    /// Called after the main loop exits. This method is not called if the main loop `panic!`s.
    fn close(&mut self) {}

    fn name() -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn aspect_never_divides_by_zero() {
        let mut state = DemoState::new(Config::default());
        assert!((state.aspect() - 800.0 / 600.0).abs() < 0.001);

        state.win_size = Vec2::new(640, 0);
        assert_eq!(640.0, state.aspect());
    }

    #[test]
    fn seeded_rng_repeats() {
        let mut config = Config::default();
        config.seed = 5;

        let mut a = DemoState::new(config.clone());
        let mut b = DemoState::new(config);
        let xs: Vec<u32> = (0..4).map(|_| a.rng().gen()).collect();
        let ys: Vec<u32> = (0..4).map(|_| b.rng().gen()).collect();
        assert_eq!(xs, ys);
    }
}
