
//! A stone textured pyramid. Hold the arrow keys to spin it.

use math3d::{Vec3, Vec4};
use superbible::{Color, Demo, DemoState, Input, Key, MatrixStack, Result};
use superbible::buffer::{PrimitiveMode, VertexBuffer};
use superbible::graphics::{self, FaceSide, WindingOrder};
use superbible::pipeline::{FixedPipeline, Light};
use superbible::pixmap::patterns;
use superbible::shapes::{self, MeshVertex};
use superbible::texture::{Texture, TextureFilter, TextureWrap};

const TURN_SPEED: f32 = 5.0;
const LIGHT_POSITION: Vec4<f32> = Vec4::new(-10.0, 5.0, 5.0, 1.0);

struct Pyramid {
    pipeline: FixedPipeline,
    pyramid: VertexBuffer<MeshVertex>,
    stone: Texture,
    x_rot: f32,
    y_rot: f32,
    x_turn: f32,
    y_turn: f32,
}

impl Demo for Pyramid {
    fn setup(state: &mut DemoState) -> Result<Pyramid> {
        graphics::set_depth_testing(true);
        graphics::set_culling(Some((WindingOrder::CounterClockwise, FaceSide::Back)));

        let source = Color::rgb(0.25, 0.25, 0.25);
        let mut pipeline = FixedPipeline::new()?;
        pipeline.state.lighting = Some(Light {
            ambient: source,
            diffuse: source,
            specular: Color::BLACK,
            global_ambient: Color::rgb(0.05, 0.05, 0.05),
            .. Light::default()
        });
        pipeline.state.texture = true;

        let gray = Color::rgb(0.55, 0.53, 0.5);
        let assets = state.config.assets.clone();
        let rng = state.rng();
        let mut stone = Texture::from_asset_or(&assets, "stone", || patterns::noise(128, gray, 0.25, rng));
        stone.set_filter(TextureFilter::Linear, TextureFilter::Linear);
        stone.set_wrap(TextureWrap::ClampToEdge);

        Ok(Pyramid {
            pipeline,
            pyramid: VertexBuffer::with_data(PrimitiveMode::Triangles, &shapes::pyramid()),
            stone,
            x_rot: 0.0,
            y_rot: 0.0,
            x_turn: 0.0,
            y_turn: 0.0,
        })
    }

    fn handle_input(&mut self, input: &Input, _state: &mut DemoState) {
        let turn = |negative: Key, positive: Key| {
            if input.down(negative) {
                -TURN_SPEED
            } else if input.down(positive) {
                TURN_SPEED
            } else {
                0.0
            }
        };
        self.x_turn = turn(Key::Up, Key::Down);
        self.y_turn = turn(Key::Left, Key::Right);
    }

    fn tick(&mut self, _state: &mut DemoState) {
        self.x_rot = (self.x_rot + self.x_turn) % 360.0;
        self.y_rot = (self.y_rot + self.y_turn) % 360.0;
    }

    fn draw(&mut self, _state: &DemoState, stack: &mut MatrixStack) {
        graphics::clear(Some(Color::BLACK), true, false);

        stack.load_identity();
        self.pipeline.place_light(LIGHT_POSITION, stack);

        stack.translate(Vec3::new(0.0, -0.25, -4.0));
        stack.rotate(self.x_rot, Vec3::new(1.0, 0.0, 0.0));
        stack.rotate(self.y_rot, Vec3::new(0.0, 1.0, 0.0));

        self.stone.bind(0);
        self.pipeline.bind(stack);
        self.pyramid.draw();
    }

    fn on_resize(&mut self, state: &DemoState, stack: &mut MatrixStack) {
        stack.perspective(35.0, state.aspect(), 1.0, 40.0);
    }

    fn name() -> &'static str { "pyramid" }
}

fn main() {
    superbible::main::<Pyramid>();
}
