
//! The colored jet lit only by white ambient light, which makes it look flat. Arrow keys rotate
//! it.

use math3d::Vec3;
use superbible::{Color, Demo, DemoState, Input, Key, MatrixStack, Result};
use superbible::buffer::{PrimitiveMode, VertexBuffer};
use superbible::graphics::{self, FaceSide, WindingOrder};
use superbible::pipeline::{FixedPipeline, Light};
use superbible::region::Region;
use superbible::shapes::{self, MeshVertex};

const ROTATION_STEP: f32 = 5.0;
/// The shorter side of the window always shows this range around the origin
const RANGE: f32 = 80.0;

struct Ambient {
    pipeline: FixedPipeline,
    jet: VertexBuffer<MeshVertex>,
    x_rot: f32,
    y_rot: f32,
}

impl Demo for Ambient {
    fn setup(_state: &mut DemoState) -> Result<Ambient> {
        graphics::set_depth_testing(true);
        graphics::set_culling(Some((WindingOrder::CounterClockwise, FaceSide::Back)));

        // No light source, only ambient light
        let mut pipeline = FixedPipeline::new()?;
        pipeline.state.lighting = Some(Light {
            ambient: Color::BLACK,
            diffuse: Color::BLACK,
            specular: Color::BLACK,
            global_ambient: Color::WHITE,
            .. Light::default()
        });

        Ok(Ambient {
            pipeline,
            jet: VertexBuffer::with_data(PrimitiveMode::Triangles, &shapes::colored_jet()),
            x_rot: 0.0,
            y_rot: 0.0,
        })
    }

    fn handle_input(&mut self, input: &Input, _state: &mut DemoState) {
        if input.pressed(Key::Up)    { self.x_rot -= ROTATION_STEP; }
        if input.pressed(Key::Down)  { self.x_rot += ROTATION_STEP; }
        if input.pressed(Key::Left)  { self.y_rot -= ROTATION_STEP; }
        if input.pressed(Key::Right) { self.y_rot += ROTATION_STEP; }

        self.x_rot %= 360.0;
        self.y_rot %= 360.0;
    }

    fn draw(&mut self, _state: &DemoState, stack: &mut MatrixStack) {
        graphics::clear(Some(Color::rgb(0.0, 0.0, 1.0)), true, false);

        stack.load_identity();
        stack.rotate(self.x_rot, Vec3::new(1.0, 0.0, 0.0));
        stack.rotate(self.y_rot, Vec3::new(0.0, 1.0, 0.0));

        self.pipeline.bind(stack);
        self.jet.draw();
    }

    fn on_resize(&mut self, state: &DemoState, stack: &mut MatrixStack) {
        let area = Region::fit_aspect(RANGE, state.aspect());
        stack.ortho(area.min.x, area.max.x, area.min.y, area.max.y, -RANGE, RANGE);
    }

    fn name() -> &'static str { "ambient" }
}

fn main() {
    superbible::main::<Ambient>();
}
