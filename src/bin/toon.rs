
//! A cel shaded torus. The diffuse light intensity picks one of four shades of green from a
//! small lookup texture, giving hard edges between the shades.

use math3d::{Vec3, Vec4};
use superbible::{Color, Demo, DemoState, MatrixStack, Result};
use superbible::buffer::{PrimitiveMode, VertexBuffer};
use superbible::graphics::{self, FaceSide, WindingOrder};
use superbible::pipeline::{FixedPipeline, Light};
use superbible::pixmap::patterns;
use superbible::shapes::{self, MeshVertex};
use superbible::texture::{Texture, TextureFilter, TextureWrap};

/// Directional and fixed relative to the viewer
const LIGHT_DIRECTION: Vec4<f32> = Vec4::new(-1.0, 1.0, 1.0, 0.0);

struct Toon {
    pipeline: FixedPipeline,
    torus: VertexBuffer<MeshVertex>,
    shades: Texture,
    y_rot: f32,
}

impl Demo for Toon {
    fn setup(_state: &mut DemoState) -> Result<Toon> {
        graphics::set_depth_testing(true);
        graphics::set_culling(Some((WindingOrder::CounterClockwise, FaceSide::Back)));

        let mut pipeline = FixedPipeline::new()?;
        pipeline.state.lighting = Some(Light::default());
        pipeline.state.texture = true;
        pipeline.state.toon = true;

        let table = [32, 64, 128, 192].iter()
            .map(|&green| Color::from_u8(0, green, 0, 255))
            .collect::<Vec<_>>();
        let mut shades = Texture::from_pixmap(&patterns::ramp(&table));
        shades.set_filter(TextureFilter::Nearest, TextureFilter::Nearest);
        shades.set_wrap(TextureWrap::ClampToEdge);

        Ok(Toon {
            pipeline,
            torus: VertexBuffer::with_data(PrimitiveMode::Triangles, &shapes::torus(0.35, 0.15, 50, 25)),
            shades,
            y_rot: 0.0,
        })
    }

    fn tick(&mut self, _state: &mut DemoState) {
        self.y_rot = (self.y_rot + 0.5) % 360.0;
    }

    fn draw(&mut self, _state: &DemoState, stack: &mut MatrixStack) {
        graphics::clear(Some(Color::rgb(0.0, 0.0, 0.5)), true, false);

        stack.load_identity();
        self.pipeline.place_light(LIGHT_DIRECTION, stack);

        stack.translate(Vec3::new(0.0, 0.0, -2.5));
        stack.rotate(self.y_rot, Vec3::new(0.0, 1.0, 0.0));

        self.shades.bind(0);
        self.pipeline.bind(stack);
        self.torus.draw();
    }

    fn on_resize(&mut self, state: &DemoState, stack: &mut MatrixStack) {
        stack.perspective(35.0, state.aspect(), 1.0, 50.0);
    }

    fn name() -> &'static str { "toon" }
}

fn main() {
    superbible::main::<Toon>();
}
