
//! The square tube from the `ortho` demo, seen through a perspective projection. Arrow keys
//! rotate it.

use math3d::{Vec3, Vec4};
use superbible::{Color, Demo, DemoState, Input, Key, MatrixStack, Result};
use superbible::buffer::{PrimitiveMode, VertexBuffer};
use superbible::graphics::{self, FaceSide, WindingOrder};
use superbible::pipeline::{FixedPipeline, Light};
use superbible::shapes::{self, MeshVertex};

const ROTATION_STEP: f32 = 5.0;
const LIGHT_POSITION: Vec4<f32> = Vec4::new(-50.0, 25.0, 250.0, 0.0);

struct Perspective {
    pipeline: FixedPipeline,
    tube: VertexBuffer<MeshVertex>,
    x_rot: f32,
    y_rot: f32,
}

impl Demo for Perspective {
    fn setup(_state: &mut DemoState) -> Result<Perspective> {
        graphics::set_depth_testing(true);
        graphics::set_culling(Some((WindingOrder::CounterClockwise, FaceSide::Back)));

        let source = Color::rgb(0.25, 0.25, 0.25);
        let mut pipeline = FixedPipeline::new()?;
        pipeline.state.lighting = Some(Light {
            ambient: source,
            diffuse: source,
            specular: Color::BLACK,
            global_ambient: Color::rgb(0.45, 0.45, 0.45),
            .. Light::default()
        });

        Ok(Perspective {
            pipeline,
            tube: VertexBuffer::with_data(PrimitiveMode::Triangles, &shapes::square_tube()),
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
        graphics::clear(Some(Color::BLACK), true, false);

        stack.load_identity();
        self.pipeline.place_light(LIGHT_POSITION, stack);

        stack.translate(Vec3::new(0.0, 0.0, -300.0));
        stack.rotate(self.x_rot, Vec3::new(1.0, 0.0, 0.0));
        stack.rotate(self.y_rot, Vec3::new(0.0, 1.0, 0.0));

        self.pipeline.bind(stack);
        self.tube.draw();
    }

    fn on_resize(&mut self, state: &DemoState, stack: &mut MatrixStack) {
        stack.perspective(60.0, state.aspect(), 1.0, 400.0);
    }

    fn name() -> &'static str { "perspective" }
}

fn main() {
    superbible::main::<Perspective>();
}
