
//! A nucleus with three electrons on tilted orbits.

use math3d::Vec3;
use superbible::{Color, Demo, DemoState, MatrixStack, Result};
use superbible::buffer::{PrimitiveMode, VertexBuffer};
use superbible::graphics::{self, FaceSide, WindingOrder};
use superbible::pipeline::FixedPipeline;
use superbible::shapes::{self, MeshVertex};

/// Half the height (or width, if smaller) of the visible area
const VIEW_RANGE: f32 = 100.0;

struct Atom {
    pipeline: FixedPipeline,
    nucleus: VertexBuffer<MeshVertex>,
    electron: VertexBuffer<MeshVertex>,
    angle: f32,
}

fn ball(radius: f32, color: Color) -> VertexBuffer<MeshVertex> {
    let mut vertices = shapes::sphere(radius, 15, 15);
    shapes::paint(&mut vertices, color);
    VertexBuffer::with_data(PrimitiveMode::Triangles, &vertices)
}

impl Demo for Atom {
    fn setup(_state: &mut DemoState) -> Result<Atom> {
        graphics::set_depth_testing(true);
        graphics::set_culling(Some((WindingOrder::CounterClockwise, FaceSide::Back)));

        Ok(Atom {
            pipeline: FixedPipeline::new()?,
            nucleus: ball(10.0, Color::rgb(1.0, 0.0, 0.0)),
            electron: ball(6.0, Color::rgb(1.0, 1.0, 0.0)),
            angle: 0.0,
        })
    }

    fn tick(&mut self, _state: &mut DemoState) {
        self.angle = (self.angle + 1.0) % 360.0;
    }

    fn draw(&mut self, _state: &DemoState, stack: &mut MatrixStack) {
        graphics::clear(Some(Color::BLACK), true, false);

        stack.load_identity();
        stack.translate(Vec3::new(0.0, 0.0, -100.0));

        self.pipeline.bind(stack);
        self.nucleus.draw();

        // (tilt around z, offset from the nucleus) for each electron
        let orbits = [
            (0.0, Vec3::new(90.0, 0.0, 0.0)),
            (45.0, Vec3::new(-70.0, 0.0, 0.0)),
            (360.0 - 45.0, Vec3::new(0.0, 0.0, 60.0)),
        ];

        for &(tilt, offset) in orbits.iter() {
            stack.push(|stack| {
                stack.rotate(tilt, Vec3::new(0.0, 0.0, 1.0));
                stack.rotate(self.angle, Vec3::new(0.0, 1.0, 0.0));
                stack.translate(offset);

                self.pipeline.bind(stack);
                self.electron.draw();
            });
        }
    }

    fn on_resize(&mut self, state: &DemoState, stack: &mut MatrixStack) {
        let aspect = state.aspect();
        let range = VIEW_RANGE;

        if aspect <= 1.0 {
            stack.ortho(-range, range, -range / aspect, range / aspect, -range*2.0, range*2.0);
        } else {
            stack.ortho(-range * aspect, range * aspect, -range, range, -range*2.0, range*2.0);
        }
    }

    fn name() -> &'static str { "atom" }
}

fn main() {
    superbible::main::<Atom>();
}
