
//! A spot light shining on a blue sphere. Arrow keys move the light around the sphere, `S`
//! switches between flat and smooth shading and `T` changes how finely the sphere is tessellated.
//! `H` logs the current modes.

use log::info;
use math3d::{Mat4, Vec3, Vec4};
use superbible::{Color, Demo, DemoState, Input, Key, KeyState, MatrixStack, Result};
use superbible::buffer::{PrimitiveMode, VertexBuffer};
use superbible::graphics::{self, FaceSide, WindingOrder};
use superbible::pipeline::{FixedPipeline, Light, Material, Spot};
use superbible::shapes::{self, MeshVertex};

const ROTATION_STEP: f32 = 5.0;
const LIGHT_POSITION: Vec4<f32> = Vec4::new(0.0, 0.0, 75.0, 1.0);
const SPOT_DIRECTION: Vec3<f32> = Vec3::new(0.0, 0.0, -1.0);

/// Slices and stacks of the sphere
const TESSELLATIONS: [(&str, usize); 3] = [("very low", 7), ("medium", 15), ("very high", 50)];

struct SpotDemo {
    pipeline: FixedPipeline,
    light: Light,
    spheres: Vec<VertexBuffer<MeshVertex>>,
    cone: VertexBuffer<MeshVertex>,
    bulb: VertexBuffer<MeshVertex>,

    x_rot: f32,
    y_rot: f32,
    tessellation: usize,
    flat: bool,
}

impl SpotDemo {
    fn log_modes(&self) {
        info!("Shading: {}", if self.flat { "flat" } else { "smooth" });
        info!("Tessellation: {}", TESSELLATIONS[self.tessellation].0);
    }
}

impl Demo for SpotDemo {
    fn setup(_state: &mut DemoState) -> Result<SpotDemo> {
        graphics::set_depth_testing(true);
        graphics::set_culling(Some((WindingOrder::CounterClockwise, FaceSide::Back)));

        let mut pipeline = FixedPipeline::new()?;
        pipeline.state.material = Material { specular: Color::WHITE, shininess: 128.0 };

        let half = Color::rgb(0.5, 0.5, 0.5);
        let light = Light {
            ambient: Color::BLACK,
            diffuse: half,
            specular: Color::WHITE,
            global_ambient: half,
            spot: Some(Spot { direction: SPOT_DIRECTION, cutoff: 50.0, exponent: 0.0 }),
            .. Light::default()
        };

        let blue = Color::rgb(0.0, 0.0, 1.0);
        let spheres = TESSELLATIONS.iter()
            .map(|&(_, detail)| {
                let mut sphere = shapes::sphere(30.0, detail, detail);
                shapes::paint(&mut sphere, blue);
                VertexBuffer::with_data(PrimitiveMode::Triangles, &sphere)
            })
            .collect();

        let mut cone = shapes::cone(4.0, 6.0, 15, 15);
        shapes::paint(&mut cone, Color::rgb(1.0, 0.0, 0.0));

        Ok(SpotDemo {
            pipeline,
            light,
            spheres,
            cone: VertexBuffer::with_data(PrimitiveMode::Triangles, &cone),
            bulb: VertexBuffer::with_data(PrimitiveMode::Triangles, &shapes::sphere(3.0, 15, 15)),

            x_rot: 0.0,
            y_rot: 0.0,
            tessellation: 1,
            flat: false,
        })
    }

    fn handle_input(&mut self, input: &Input, _state: &mut DemoState) {
        if input.pressed(Key::Up)    { self.x_rot -= ROTATION_STEP; }
        if input.pressed(Key::Down)  { self.x_rot += ROTATION_STEP; }
        if input.pressed(Key::Left)  { self.y_rot -= ROTATION_STEP; }
        if input.pressed(Key::Right) { self.y_rot += ROTATION_STEP; }

        self.x_rot %= 360.0;
        self.y_rot %= 360.0;

        if input.key(Key::S) == KeyState::Pressed {
            self.flat = !self.flat;
            self.log_modes();
        }
        if input.key(Key::T) == KeyState::Pressed {
            self.tessellation = (self.tessellation + 1) % TESSELLATIONS.len();
            self.log_modes();
        }
        if input.key(Key::H) == KeyState::Pressed {
            self.log_modes();
        }
    }

    fn draw(&mut self, _state: &DemoState, stack: &mut MatrixStack) {
        graphics::clear(Some(Color::BLACK), true, false);

        stack.load_identity();
        stack.set_view(Mat4::translation(Vec3::new(0.0, 0.0, -250.0)));

        self.pipeline.state.flat_shading = self.flat;
        self.pipeline.state.lighting = Some(self.light);

        // Only the light moves
        stack.push(|stack| {
            stack.rotate(self.y_rot, Vec3::new(0.0, 1.0, 0.0));
            stack.rotate(self.x_rot, Vec3::new(1.0, 0.0, 0.0));
            self.pipeline.place_light(LIGHT_POSITION, stack);
            self.pipeline.aim_spot(SPOT_DIRECTION, stack);

            stack.translate(LIGHT_POSITION.xyz());
            self.pipeline.bind(stack);
            self.cone.draw();

            self.pipeline.state.color_override = Some(Color::rgb(1.0, 1.0, 0.0));
            self.pipeline.bind(stack);
            self.bulb.draw();
            self.pipeline.state.color_override = None;
        });

        self.pipeline.bind(stack);
        self.spheres[self.tessellation].draw();
    }

    fn on_resize(&mut self, state: &DemoState, stack: &mut MatrixStack) {
        stack.perspective(35.0, state.aspect(), 1.0, 500.0);
    }

    fn name() -> &'static str { "spot" }
}

fn main() {
    superbible::main::<SpotDemo>();
}
