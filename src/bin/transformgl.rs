
//! The spinning wireframe torus from the `transform` demo, with its matrix loaded onto the
//! matrix stack instead of being applied to the vertices on the CPU.

use math3d::{Mat4, Vec3};
use superbible::{Color, Demo, DemoState, MatrixStack, Result};
use superbible::buffer::{PrimitiveMode, VertexBuffer};
use superbible::graphics;
use superbible::pipeline::FixedPipeline;
use superbible::shapes::{self, MeshVertex};

struct TransformGl {
    pipeline: FixedPipeline,
    torus: VertexBuffer<MeshVertex>,
    y_rot: f32,
}

impl Demo for TransformGl {
    fn setup(_state: &mut DemoState) -> Result<TransformGl> {
        graphics::set_depth_testing(false);
        graphics::set_wireframe(true);

        Ok(TransformGl {
            pipeline: FixedPipeline::new()?,
            torus: VertexBuffer::with_data(PrimitiveMode::Triangles, &shapes::torus(0.35, 0.15, 40, 20)),
            y_rot: 0.0,
        })
    }

    fn tick(&mut self, _state: &mut DemoState) {
        self.y_rot = (self.y_rot + 0.5) % 360.0;
    }

    fn draw(&mut self, _state: &DemoState, stack: &mut MatrixStack) {
        graphics::clear(Some(Color::rgb(0.0, 0.0, 0.5)), true, false);

        let mut transform = Mat4::rotation(self.y_rot.to_radians(), Vec3::new(0.0, 1.0, 0.0));
        transform.set(0, 3, 0.0);
        transform.set(1, 3, 0.0);
        transform.set(2, 3, -2.5);

        stack.load_identity();
        stack.multiply(transform);
        self.pipeline.bind(stack);
        self.torus.draw();
    }

    fn on_resize(&mut self, state: &DemoState, stack: &mut MatrixStack) {
        stack.perspective(35.0, state.aspect(), 1.0, 50.0);
    }

    fn close(&mut self) {
        graphics::set_wireframe(false);
    }

    fn name() -> &'static str { "transformgl" }
}

fn main() {
    superbible::main::<TransformGl>();
}
