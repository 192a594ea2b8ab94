
//! A night sky drawn with points. `1` draws plain square points, `2` antialiased points and `3`
//! textured point sprites.

use log::info;
use math3d::Vec2;
use superbible::{Color, Demo, DemoState, Input, Key, KeyState, MatrixStack, Result};
use superbible::buffer::{PrimitiveMode, VertexBuffer};
use superbible::graphics::{self, BlendFactor, BlendSettings};
use superbible::pixmap::patterns;
use superbible::points::{PointMode, PointPipeline, PointVertex};
use superbible::region::Region;
use superbible::shapes;
use superbible::texture::{Texture, TextureFilter, TextureWrap};

const SMALL_STARS: usize = 100;
const MEDIUM_STARS: usize = 40;
const LARGE_STARS: usize = 15;

const MOON_POSITION: (f32, f32) = (700.0, 500.0);
const MOON_SIZE: f32 = 120.0;

const HORIZON: [(f32, f32); 12] = [
    (0.0, 25.0), (50.0, 100.0), (100.0, 25.0), (225.0, 115.0),
    (300.0, 50.0), (375.0, 100.0), (460.0, 25.0), (525.0, 100.0),
    (600.0, 20.0), (675.0, 70.0), (750.0, 25.0), (800.0, 90.0),
];

const HORIZON_WIDTH: f32 = 3.5;

const MODES: [PointMode; 3] = [PointMode::Square, PointMode::Antialiased, PointMode::Sprite];

struct PointSprites {
    pipeline: PointPipeline,
    mode: PointMode,

    /// (stars, size in pixels)
    stars: Vec<(VertexBuffer<PointVertex>, f32)>,
    moon: VertexBuffer<PointVertex>,
    horizon: VertexBuffer<PointVertex>,

    star_texture: Texture,
    moon_texture: Texture,
}

fn sprite_texture(state: &DemoState, name: &str, size: u32, color: Color) -> Texture {
    let mut texture = Texture::from_asset_or(&state.config.assets, name, || patterns::glow(size, color));
    texture.set_filter(TextureFilter::Linear, TextureFilter::LinearMipmapLinear);
    texture.set_wrap(TextureWrap::ClampToEdge);
    texture
}

impl Demo for PointSprites {
    fn setup(state: &mut DemoState) -> Result<PointSprites> {
        graphics::set_depth_testing(false);

        // Stars stay above the horizon
        let Vec2 { x: width, y: height } = state.win_size;
        let sky = Region::new(Vec2::new(0.0, 100.0), Vec2::new(width as f32, height as f32));

        let mut stars = Vec::with_capacity(3);
        for &(count, size) in [(SMALL_STARS, 7.0), (MEDIUM_STARS, 12.0), (LARGE_STARS, 20.0)].iter() {
            let points = shapes::scatter_points(count, sky, state.rng());
            stars.push((VertexBuffer::with_data(PrimitiveMode::Points, &points), size));
        }

        let moon = [PointVertex::new(MOON_POSITION.0, MOON_POSITION.1)];
        let horizon = shapes::line_strip(&HORIZON);

        Ok(PointSprites {
            pipeline: PointPipeline::new()?,
            mode: PointMode::Square,

            stars,
            moon: VertexBuffer::with_data(PrimitiveMode::Points, &moon),
            horizon: VertexBuffer::with_data(PrimitiveMode::LineStrip, &horizon),

            star_texture: sprite_texture(state, "star", 64, Color::WHITE),
            moon_texture: sprite_texture(state, "moon", 128, Color::rgb(1.0, 1.0, 0.85)),
        })
    }

    fn handle_input(&mut self, input: &Input, _state: &mut DemoState) {
        for (key, &mode) in Key::DIGITS.iter().zip(MODES.iter()) {
            if input.key(*key) == KeyState::Pressed && self.mode != mode {
                info!("Drawing points as {:?}", mode);
                self.mode = mode;
            }
        }
    }

    fn draw(&mut self, _state: &DemoState, stack: &mut MatrixStack) {
        graphics::clear(Some(Color::BLACK), false, false);
        stack.load_identity();

        let blending = match self.mode {
            PointMode::Square => None,
            PointMode::Antialiased => Some(BlendSettings::default()),
            PointMode::Sprite => Some(BlendSettings::new(BlendFactor::SrcColor, BlendFactor::OneMinusSrcColor)),
        };
        graphics::set_blending(blending);

        self.pipeline.mode = self.mode;
        self.star_texture.bind(0);
        for &(ref stars, size) in self.stars.iter() {
            self.pipeline.bind(stack, size, Color::WHITE);
            stars.draw();
        }

        if self.mode == PointMode::Sprite {
            graphics::set_blending(None);
            self.moon_texture.bind(0);
        }
        self.pipeline.bind(stack, MOON_SIZE, Color::WHITE);
        self.moon.draw();

        // Lines have no point coordinates, so they are smoothed by the rasterizer instead
        let smooth = self.mode == PointMode::Antialiased;
        self.pipeline.mode = PointMode::Square;
        self.pipeline.bind(stack, 1.0, Color::WHITE);
        graphics::set_smoothing(smooth);
        graphics::set_line_width(HORIZON_WIDTH);
        self.horizon.draw();
        graphics::set_line_width(1.0);
        graphics::set_smoothing(false);

        graphics::set_blending(None);
    }

    fn on_resize(&mut self, state: &DemoState, stack: &mut MatrixStack) {
        let screen = Region::sized(state.win_size.x as f32, state.win_size.y.max(1) as f32);
        stack.ortho(screen.min.x, screen.max.x, screen.min.y, screen.max.y, -1.0, 1.0);
    }

    fn name() -> &'static str { "pointsprites" }
}

fn main() {
    superbible::main::<PointSprites>();
}
