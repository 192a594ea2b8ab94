
//! A lit, shiny jet. Arrow keys rotate it, `S` turns the specular highlights on and off.

use log::info;
use math3d::{Vec3, Vec4};
use superbible::{Color, Demo, DemoState, Input, Key, KeyState, MatrixStack, Result};
use superbible::buffer::{PrimitiveMode, VertexBuffer};
use superbible::graphics::{self, FaceSide, WindingOrder};
use superbible::pipeline::{FixedPipeline, Light, Material};
use superbible::shapes::{self, MeshVertex};

const ROTATION_STEP: f32 = 5.0;
const LIGHT_POSITION: Vec4<f32> = Vec4::new(-50.0, 50.0, 100.0, 1.0);

struct Jet {
    pipeline: FixedPipeline,
    jet: VertexBuffer<MeshVertex>,
    x_rot: f32,
    y_rot: f32,
    specular: bool,
}

impl Jet {
    fn material(&self) -> Material {
        Material {
            specular: if self.specular { Color::WHITE } else { Color::BLACK },
            shininess: 128.0,
        }
    }
}

impl Demo for Jet {
    fn setup(_state: &mut DemoState) -> Result<Jet> {
        graphics::set_depth_testing(true);
        graphics::set_culling(Some((WindingOrder::CounterClockwise, FaceSide::Back)));

        let mut pipeline = FixedPipeline::new()?;
        pipeline.state.lighting = Some(Light {
            ambient: Color::rgb(0.3, 0.3, 0.3),
            diffuse: Color::rgb(0.7, 0.7, 0.7),
            specular: Color::WHITE,
            .. Light::default()
        });

        let gray = Color::from_u8(128, 128, 128, 255);
        let mut jet = Jet {
            pipeline,
            jet: VertexBuffer::with_data(PrimitiveMode::Triangles, &shapes::jet(gray)),
            x_rot: 0.0,
            y_rot: 0.0,
            specular: true,
        };
        jet.pipeline.state.material = jet.material();

        Ok(jet)
    }

    fn handle_input(&mut self, input: &Input, _state: &mut DemoState) {
        if input.pressed(Key::Up)    { self.x_rot -= ROTATION_STEP; }
        if input.pressed(Key::Down)  { self.x_rot += ROTATION_STEP; }
        if input.pressed(Key::Left)  { self.y_rot -= ROTATION_STEP; }
        if input.pressed(Key::Right) { self.y_rot += ROTATION_STEP; }

        self.x_rot %= 360.0;
        self.y_rot %= 360.0;

        if input.key(Key::S) == KeyState::Pressed {
            self.specular = !self.specular;
            self.pipeline.state.material = self.material();
            info!("Specular highlights {}", if self.specular { "on" } else { "off" });
        }
    }

    fn draw(&mut self, _state: &DemoState, stack: &mut MatrixStack) {
        graphics::clear(Some(Color::rgb(0.0, 0.0, 1.0)), true, false);

        // The light stays fixed relative to the viewer
        stack.load_identity();
        self.pipeline.place_light(LIGHT_POSITION, stack);

        stack.translate(Vec3::new(0.0, 0.0, -150.0));
        stack.rotate(self.x_rot, Vec3::new(1.0, 0.0, 0.0));
        stack.rotate(self.y_rot, Vec3::new(0.0, 1.0, 0.0));

        self.pipeline.bind(stack);
        self.jet.draw();
    }

    fn on_resize(&mut self, state: &DemoState, stack: &mut MatrixStack) {
        stack.perspective(45.0, state.aspect(), 1.0, 225.0);
    }

    fn name() -> &'static str { "jet" }
}

fn main() {
    superbible::main::<Jet>();
}
