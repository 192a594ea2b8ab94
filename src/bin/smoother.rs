
//! Stars, a moon and the outline of hills drawn with points, a triangle fan and a thick line.
//! `Space` toggles antialiasing.

use log::info;
use math3d::Vec2;
use superbible::{Color, Demo, DemoState, Input, Key, KeyState, MatrixStack, Result};
use superbible::buffer::{PrimitiveMode, VertexBuffer};
use superbible::graphics::{self, BlendSettings};
use superbible::points::{PointMode, PointPipeline, PointVertex};
use superbible::region::Region;
use superbible::shapes;

/// The scene is laid out for a screen of this size, and stretched to fit the window
const SCREEN: Region = Region {
    min: Vec2::new(0.0, 0.0),
    max: Vec2::new(800.0, 600.0),
};

/// (count, size in pixels)
const STARS: [(usize, f32); 3] = [(100, 1.0), (40, 3.05), (15, 5.5)];

const MOON_CENTER: Vec2<f32> = Vec2::new(700.0, 500.0);
const MOON_RADIUS: f32 = 50.0;

const HORIZON_WIDTH: f32 = 3.5;
const HORIZON: [(f32, f32); 12] = [
    (0.0, 25.0), (50.0, 100.0), (100.0, 25.0), (225.0, 125.0),
    (300.0, 50.0), (375.0, 100.0), (460.0, 25.0), (525.0, 100.0),
    (600.0, 20.0), (675.0, 70.0), (750.0, 25.0), (800.0, 90.0),
];

struct Smoother {
    pipeline: PointPipeline,
    stars: Vec<(VertexBuffer<PointVertex>, f32)>,
    moon: VertexBuffer<PointVertex>,
    horizon: VertexBuffer<PointVertex>,
    smooth: bool,
}

impl Demo for Smoother {
    fn setup(state: &mut DemoState) -> Result<Smoother> {
        graphics::set_depth_testing(false);

        let sky = Region::new(Vec2::new(0.0, 100.0), SCREEN.max);
        let mut stars = Vec::with_capacity(STARS.len());
        for &(count, size) in STARS.iter() {
            let points = shapes::scatter_points(count, sky, state.rng());
            stars.push((VertexBuffer::with_data(PrimitiveMode::Points, &points), size));
        }

        let moon = shapes::circle_fan(MOON_CENTER, MOON_RADIUS, 64);

        Ok(Smoother {
            pipeline: PointPipeline::new()?,
            stars,
            moon: VertexBuffer::with_data(PrimitiveMode::TriangleFan, &moon),
            horizon: VertexBuffer::with_data(PrimitiveMode::LineStrip, &shapes::line_strip(&HORIZON)),
            smooth: false,
        })
    }

    fn handle_input(&mut self, input: &Input, _state: &mut DemoState) {
        if input.key(Key::Space) == KeyState::Pressed {
            self.smooth = !self.smooth;
            info!("Antialiasing {}", if self.smooth { "on" } else { "off" });
        }
    }

    fn draw(&mut self, _state: &DemoState, stack: &mut MatrixStack) {
        graphics::clear(Some(Color::BLACK), false, false);
        stack.load_identity();

        graphics::set_blending(if self.smooth { Some(BlendSettings::default()) } else { None });
        graphics::set_smoothing(self.smooth);

        self.pipeline.mode = if self.smooth { PointMode::Antialiased } else { PointMode::Square };
        for &(ref stars, size) in self.stars.iter() {
            self.pipeline.bind(stack, size, Color::WHITE);
            stars.draw();
        }

        // Point coordinates only exist for points
        self.pipeline.mode = PointMode::Square;
        self.pipeline.bind(stack, 1.0, Color::WHITE);
        self.moon.draw();

        graphics::set_line_width(HORIZON_WIDTH);
        self.horizon.draw();
        graphics::set_line_width(1.0);

        graphics::set_smoothing(false);
        graphics::set_blending(None);
    }

    fn on_resize(&mut self, _state: &DemoState, stack: &mut MatrixStack) {
        stack.ortho(SCREEN.min.x, SCREEN.max.x, SCREEN.min.y, SCREEN.max.y, -1.0, 1.0);
    }

    fn name() -> &'static str { "smoother" }
}

fn main() {
    superbible::main::<Smoother>();
}
