
//! The RGB color cube. Arrow keys rotate it.

use math3d::Vec3;
use superbible::{Color, Demo, DemoState, Input, Key, MatrixStack, Result};
use superbible::buffer::{PrimitiveMode, VertexBuffer};
use superbible::graphics;
use superbible::pipeline::FixedPipeline;
use superbible::shapes::{self, MeshVertex};

const CUBE_SIZE: f32 = 50.0;
const ROTATION_STEP: f32 = 5.0;

struct ColorCube {
    pipeline: FixedPipeline,
    cube: VertexBuffer<MeshVertex>,
    x_rot: f32,
    y_rot: f32,
}

impl Demo for ColorCube {
    fn setup(_state: &mut DemoState) -> Result<ColorCube> {
        graphics::set_depth_testing(true);

        Ok(ColorCube {
            pipeline: FixedPipeline::new()?,
            cube: VertexBuffer::with_data(PrimitiveMode::Triangles, &shapes::color_cube(CUBE_SIZE)),
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
        stack.translate(Vec3::new(0.0, 0.0, -300.0));
        stack.rotate(self.x_rot, Vec3::new(1.0, 0.0, 0.0));
        stack.rotate(self.y_rot, Vec3::new(0.0, 1.0, 0.0));

        self.pipeline.bind(stack);
        self.cube.draw();
    }

    fn on_resize(&mut self, state: &DemoState, stack: &mut MatrixStack) {
        stack.perspective(45.0, state.aspect(), 1.0, 1000.0);
    }

    fn name() -> &'static str { "ccube" }
}

fn main() {
    superbible::main::<ColorCube>();
}
