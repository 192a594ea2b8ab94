
//! A single triangle with a red, a green and a blue corner. The colors are blended smoothly
//! across its face.

use math3d::{Vec2, Vec3};
use superbible::{Color, Demo, DemoState, MatrixStack, Result};
use superbible::buffer::{PrimitiveMode, VertexBuffer};
use superbible::graphics;
use superbible::pipeline::FixedPipeline;
use superbible::region::Region;
use superbible::shapes::MeshVertex;

/// The shorter side of the window always shows this range around the origin
const RANGE: f32 = 250.0;

struct Triangle {
    pipeline: FixedPipeline,
    triangle: VertexBuffer<MeshVertex>,
}

impl Demo for Triangle {
    fn setup(_state: &mut DemoState) -> Result<Triangle> {
        graphics::set_depth_testing(false);

        let corner = |x: f32, y: f32, color: Color| MeshVertex {
            position: Vec3::new(x, y, 0.0),
            normal: Vec3::new(0.0, 0.0, 1.0),
            uv: Vec2::zero(),
            color,
        };
        let triangle = [
            corner(0.0, 200.0, Color::rgb(1.0, 0.0, 0.0)),
            corner(200.0, -70.0, Color::rgb(0.0, 1.0, 0.0)),
            corner(-200.0, -70.0, Color::rgb(0.0, 0.0, 1.0)),
        ];

        Ok(Triangle {
            pipeline: FixedPipeline::new()?,
            triangle: VertexBuffer::with_data(PrimitiveMode::Triangles, &triangle),
        })
    }

    fn draw(&mut self, _state: &DemoState, stack: &mut MatrixStack) {
        graphics::clear(Some(Color::BLACK), false, false);

        stack.load_identity();
        self.pipeline.bind(stack);
        self.triangle.draw();
    }

    fn on_resize(&mut self, state: &DemoState, stack: &mut MatrixStack) {
        let area = Region::fit_aspect(RANGE, state.aspect());
        stack.ortho(area.min.x, area.max.x, area.min.y, area.max.y, -1.0, 1.0);
    }

    fn name() -> &'static str { "triangle" }
}

fn main() {
    superbible::main::<Triangle>();
}
