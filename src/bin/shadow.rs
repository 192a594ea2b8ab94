
//! The jet casting a flat shadow onto the ground. Arrow keys rotate the jet.

use math3d::{plane_equation, planar_shadow_matrix, Mat4, Vec2, Vec3, Vec4};
use superbible::{Color, Demo, DemoState, Input, Key, MatrixStack, Result};
use superbible::buffer::{PrimitiveMode, VertexBuffer};
use superbible::graphics::{self, FaceSide, WindingOrder};
use superbible::pipeline::{FixedPipeline, Light, Material};
use superbible::shapes::{self, MeshVertex};

const ROTATION_STEP: f32 = 5.0;
/// Directional, so the shadow is a parallel projection
const LIGHT_POSITION: Vec4<f32> = Vec4::new(-75.0, 150.0, -50.0, 0.0);

struct Shadow {
    pipeline: FixedPipeline,
    light: Light,
    jet: VertexBuffer<MeshVertex>,
    ground: VertexBuffer<MeshVertex>,
    light_marker: VertexBuffer<MeshVertex>,
    shadow_matrix: Mat4<f32>,
    x_rot: f32,
    y_rot: f32,
}

impl Shadow {
    fn rotate_jet(&self, stack: &mut MatrixStack) {
        stack.rotate(self.x_rot, Vec3::new(1.0, 0.0, 0.0));
        stack.rotate(self.y_rot, Vec3::new(0.0, 1.0, 0.0));
    }
}

/// A large quad at `y = -150`, fading from dark green in the back to bright green in the front
fn ground() -> Vec<MeshVertex> {
    let y = -150.0;
    let mut ground = shapes::quad(
        [
            Vec3::new(400.0, y, -200.0),
            Vec3::new(-400.0, y, -200.0),
            Vec3::new(-400.0, y, 200.0),
            Vec3::new(400.0, y, 200.0),
        ],
        [Vec2::new(1.0, 0.0), Vec2::new(0.0, 0.0), Vec2::new(0.0, 1.0), Vec2::new(1.0, 1.0)],
        Vec3::new(0.0, 1.0, 0.0),
    );

    for vertex in ground.iter_mut() {
        vertex.color = if vertex.position.z < 0.0 {
            Color::from_u8(0, 32, 0, 255)
        } else {
            Color::from_u8(0, 255, 0, 255)
        };
    }
    ground.to_vec()
}

impl Demo for Shadow {
    fn setup(_state: &mut DemoState) -> Result<Shadow> {
        graphics::set_depth_testing(true);
        graphics::set_culling(Some((WindingOrder::CounterClockwise, FaceSide::Back)));

        let mut pipeline = FixedPipeline::new()?;
        pipeline.state.material = Material { specular: Color::WHITE, shininess: 128.0 };

        let light = Light {
            ambient: Color::rgb(0.3, 0.3, 0.3),
            diffuse: Color::rgb(0.7, 0.7, 0.7),
            specular: Color::WHITE,
            .. Light::default()
        };

        // Just above the ground, so the shadow is not hidden by it
        let shadow_matrix = plane_equation(
            Vec3::new(-30.0, -149.0, -20.0),
            Vec3::new(-30.0, -149.0, 20.0),
            Vec3::new(40.0, -149.0, 20.0),
        ).map(|plane| planar_shadow_matrix(plane, LIGHT_POSITION))
         .unwrap_or_else(Mat4::identity);

        let mut light_marker = shapes::sphere(5.0, 10, 10);
        shapes::paint(&mut light_marker, Color::from_u8(255, 255, 0, 255));

        let gray = Color::from_u8(128, 128, 128, 255);

        Ok(Shadow {
            pipeline,
            light,
            jet: VertexBuffer::with_data(PrimitiveMode::Triangles, &shapes::jet(gray)),
            ground: VertexBuffer::with_data(PrimitiveMode::Triangles, &ground()),
            light_marker: VertexBuffer::with_data(PrimitiveMode::Triangles, &light_marker),
            shadow_matrix,
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
        stack.set_view(Mat4::translation(Vec3::new(0.0, 0.0, -400.0)));

        // Ground, without lighting
        self.pipeline.state.lighting = None;
        self.pipeline.bind(stack);
        self.ground.draw();

        // Jet
        self.pipeline.state.lighting = Some(self.light);
        self.pipeline.place_light(LIGHT_POSITION, stack);

        stack.push(|stack| {
            self.rotate_jet(stack);
            self.pipeline.bind(stack);
            self.jet.draw();
        });

        // Shadow and light marker are drawn on top of everything
        graphics::set_depth_testing(false);
        self.pipeline.state.lighting = None;

        self.pipeline.state.color_override = Some(Color::BLACK);
        stack.push(|stack| {
            stack.multiply(self.shadow_matrix);
            self.rotate_jet(stack);
            self.pipeline.bind(stack);
            self.jet.draw();
        });
        self.pipeline.state.color_override = None;

        stack.push(|stack| {
            stack.translate(LIGHT_POSITION.xyz());
            self.pipeline.bind(stack);
            self.light_marker.draw();
        });

        graphics::set_depth_testing(true);
    }

    fn on_resize(&mut self, state: &DemoState, stack: &mut MatrixStack) {
        stack.perspective(60.0, state.aspect(), 200.0, 500.0);
    }

    fn name() -> &'static str { "shadow" }
}

fn main() {
    superbible::main::<Shadow>();
}
