
//! A torus and an orbiting sphere above a checkered floor. The floor is translucent, and the
//! scene is drawn a second time upside down below it to fake a reflection.

use math3d::{Mat4, Vec3, Vec4};
use superbible::{Color, Demo, DemoState, MatrixStack, Result};
use superbible::buffer::{PrimitiveMode, VertexBuffer};
use superbible::graphics::{self, BlendSettings, FaceSide, WindingOrder};
use superbible::pipeline::{FixedPipeline, Light, Material};
use superbible::shapes::{self, MeshVertex};

const LOW_LIGHT: Color = Color { r: 0.25, g: 0.25, b: 0.25, a: 1.0 };
const LIGHT_POSITION: Vec4<f32> = Vec4::new(-100.0, 100.0, 50.0, 1.0);
/// `LIGHT_POSITION` mirrored on the floor
const MIRRORED_LIGHT_POSITION: Vec4<f32> = Vec4::new(-100.0, -100.0, 50.0, 1.0);

struct Reflection {
    pipeline: FixedPipeline,
    light: Light,
    sphere: VertexBuffer<MeshVertex>,
    torus: VertexBuffer<MeshVertex>,
    floor: VertexBuffer<MeshVertex>,
    y_rot: f32,
}

impl Reflection {
    fn draw_world(&mut self, stack: &mut MatrixStack) {
        stack.push(|stack| {
            stack.translate(Vec3::new(0.0, 0.5, -3.5));

            stack.push(|stack| {
                stack.rotate(-self.y_rot * 2.0, Vec3::new(0.0, 1.0, 0.0));
                stack.translate(Vec3::new(1.0, 0.0, 0.0));
                self.pipeline.bind(stack);
                self.sphere.draw();
            });

            stack.rotate(self.y_rot, Vec3::new(0.0, 1.0, 0.0));
            self.pipeline.bind(stack);
            self.torus.draw();
        });
    }
}

impl Demo for Reflection {
    fn setup(_state: &mut DemoState) -> Result<Reflection> {
        graphics::set_depth_testing(true);
        graphics::set_culling(Some((WindingOrder::CounterClockwise, FaceSide::Back)));

        let mut pipeline = FixedPipeline::new()?;
        pipeline.state.material = Material { specular: Color::BLACK, shininess: 128.0 };

        let light = Light {
            ambient: LOW_LIGHT,
            diffuse: Color::WHITE,
            specular: Color::WHITE,
            global_ambient: Color::BLACK,
            .. Light::default()
        };

        let red = Color::rgb(1.0, 0.0, 0.0);
        let mut sphere = shapes::sphere(0.1, 17, 9);
        let mut torus = shapes::torus(0.35, 0.15, 61, 37);
        shapes::paint(&mut sphere, red);
        shapes::paint(&mut torus, red);

        let floor_colors = [Color::WHITE.with_alpha(0.5), Color::BLACK.with_alpha(0.5)];
        let floor = shapes::checker_floor(20.0, 0.5, 0.0, floor_colors);

        Ok(Reflection {
            pipeline,
            light,
            sphere: VertexBuffer::with_data(PrimitiveMode::Triangles, &sphere),
            torus: VertexBuffer::with_data(PrimitiveMode::Triangles, &torus),
            floor: VertexBuffer::with_data(PrimitiveMode::Triangles, &floor),
            y_rot: 0.0,
        })
    }

    fn tick(&mut self, _state: &mut DemoState) {
        self.y_rot = (self.y_rot + 1.0) % 360.0;
    }

    fn draw(&mut self, _state: &DemoState, stack: &mut MatrixStack) {
        graphics::clear(Some(LOW_LIGHT), true, false);

        stack.load_identity();
        stack.set_view(Mat4::translation(Vec3::new(0.0, -0.4, 0.0)));

        // Reflection, with the light moved below the floor
        self.pipeline.state.lighting = Some(self.light);
        self.pipeline.place_light(MIRRORED_LIGHT_POSITION, stack);
        graphics::set_culling(Some((WindingOrder::Clockwise, FaceSide::Back)));
        stack.push(|stack| {
            stack.scale(Vec3::new(1.0, -1.0, 1.0));
            self.draw_world(stack);
        });
        graphics::set_culling(Some((WindingOrder::CounterClockwise, FaceSide::Back)));

        // The translucent floor lets the reflection shine through
        self.pipeline.state.lighting = None;
        graphics::set_blending(Some(BlendSettings::default()));
        self.pipeline.bind(stack);
        self.floor.draw();
        graphics::set_blending(None);

        self.pipeline.state.lighting = Some(self.light);
        self.pipeline.place_light(LIGHT_POSITION, stack);
        self.draw_world(stack);
    }

    fn on_resize(&mut self, state: &DemoState, stack: &mut MatrixStack) {
        stack.perspective(35.0, state.aspect(), 1.0, 50.0);
    }

    fn name() -> &'static str { "reflection" }
}

fn main() {
    superbible::main::<Reflection>();
}
