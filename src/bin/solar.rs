
//! The sun, the earth and the moon. The sun is the only light source.

use math3d::{Vec3, Vec4};
use superbible::{Color, Demo, DemoState, MatrixStack, Result};
use superbible::buffer::{PrimitiveMode, VertexBuffer};
use superbible::graphics::{self, FaceSide, WindingOrder};
use superbible::pipeline::{FixedPipeline, Light};
use superbible::shapes::{self, MeshVertex};

struct Solar {
    pipeline: FixedPipeline,
    light: Light,
    sun: VertexBuffer<MeshVertex>,
    earth: VertexBuffer<MeshVertex>,
    moon: VertexBuffer<MeshVertex>,
    earth_rot: f32,
    moon_rot: f32,
}

fn body(radius: f32, color: Color) -> VertexBuffer<MeshVertex> {
    let mut vertices = shapes::sphere(radius, 30, 17);
    shapes::paint(&mut vertices, color);
    VertexBuffer::with_data(PrimitiveMode::Triangles, &vertices)
}

impl Demo for Solar {
    fn setup(_state: &mut DemoState) -> Result<Solar> {
        graphics::set_depth_testing(true);
        graphics::set_culling(Some((WindingOrder::CounterClockwise, FaceSide::Back)));

        let light = Light {
            ambient: Color::BLACK,
            diffuse: Color::rgb(0.8, 0.8, 0.8),
            specular: Color::BLACK,
            global_ambient: Color::rgb(0.2, 0.2, 0.2),
            .. Light::default()
        };

        Ok(Solar {
            pipeline: FixedPipeline::new()?,
            light,
            sun: body(15.0, Color::from_u8(255, 255, 0, 255)),
            earth: body(15.0, Color::from_u8(0, 0, 255, 255)),
            moon: body(6.0, Color::from_u8(200, 200, 200, 255)),
            earth_rot: 0.0,
            moon_rot: 0.0,
        })
    }

    fn tick(&mut self, _state: &mut DemoState) {
        self.earth_rot = (self.earth_rot + 1.0) % 360.0;
        self.moon_rot = (self.moon_rot + 3.0) % 360.0;
    }

    fn draw(&mut self, _state: &DemoState, stack: &mut MatrixStack) {
        graphics::clear(Some(Color::BLACK), true, false);

        stack.load_identity();
        stack.translate(Vec3::new(0.0, 0.0, -300.0));

        // The sun glows by itself
        self.pipeline.state.lighting = None;
        self.pipeline.bind(stack);
        self.sun.draw();

        // Everything else is lit from its center
        self.pipeline.state.lighting = Some(self.light);
        self.pipeline.place_light(Vec4::new(0.0, 0.0, 0.0, 1.0), stack);

        stack.rotate(self.earth_rot, Vec3::new(0.0, 1.0, 0.0));
        stack.translate(Vec3::new(105.0, 0.0, 0.0));
        self.pipeline.bind(stack);
        self.earth.draw();

        stack.rotate(self.moon_rot, Vec3::new(0.0, 1.0, 0.0));
        stack.translate(Vec3::new(30.0, 0.0, 0.0));
        self.pipeline.bind(stack);
        self.moon.draw();
    }

    fn on_resize(&mut self, state: &DemoState, stack: &mut MatrixStack) {
        stack.perspective(45.0, state.aspect(), 1.0, 425.0);
    }

    fn name() -> &'static str { "solar" }
}

fn main() {
    superbible::main::<Solar>();
}
