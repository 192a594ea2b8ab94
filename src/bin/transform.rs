
//! A spinning wireframe torus whose vertices are transformed on the CPU every frame, and drawn
//! with an identity model-view matrix.

use math3d::{Mat4, Vec3};
use superbible::{Color, Demo, DemoState, MatrixStack, Result};
use superbible::buffer::{PrimitiveMode, VertexBuffer};
use superbible::graphics;
use superbible::pipeline::FixedPipeline;
use superbible::shapes::{self, MeshVertex};

/// Applies `matrix` to the position and normal of every vertex
fn transform_vertices(vertices: &[MeshVertex], matrix: Mat4<f32>) -> Vec<MeshVertex> {
    vertices.iter()
        .map(|vertex| MeshVertex {
            position: matrix.transform_point(vertex.position),
            normal: matrix.transform_direction(vertex.normal),
            .. *vertex
        })
        .collect()
}

fn torus_transform(y_rot: f32) -> Mat4<f32> {
    Mat4::translation(Vec3::new(0.0, 0.0, -2.5)) * Mat4::rotation_y(y_rot.to_radians())
}

struct Transform {
    pipeline: FixedPipeline,
    model: Vec<MeshVertex>,
    torus: VertexBuffer<MeshVertex>,
    y_rot: f32,
}

impl Demo for Transform {
    fn setup(_state: &mut DemoState) -> Result<Transform> {
        graphics::set_depth_testing(false);
        graphics::set_wireframe(true);

        let model = shapes::torus(0.35, 0.15, 40, 20);
        let torus = VertexBuffer::with_data(PrimitiveMode::Triangles, &transform_vertices(&model, torus_transform(0.0)));

        Ok(Transform {
            pipeline: FixedPipeline::new()?,
            model,
            torus,
            y_rot: 0.0,
        })
    }

    fn tick(&mut self, _state: &mut DemoState) {
        self.y_rot = (self.y_rot + 0.5) % 360.0;
    }

    fn draw(&mut self, _state: &DemoState, stack: &mut MatrixStack) {
        graphics::clear(Some(Color::rgb(0.0, 0.0, 0.5)), true, false);

        self.torus.set_data(&transform_vertices(&self.model, torus_transform(self.y_rot)));

        stack.load_identity();
        self.pipeline.bind(stack);
        self.torus.draw();
    }

    fn on_resize(&mut self, state: &DemoState, stack: &mut MatrixStack) {
        stack.perspective(35.0, state.aspect(), 1.0, 50.0);
    }

    fn close(&mut self) {
        graphics::set_wireframe(false);
    }

    fn name() -> &'static str { "transform" }
}

fn main() {
    superbible::main::<Transform>();
}

#[cfg(test)]
mod tests {
    use super::*;
    use math3d::Vec2;

    #[test]
    fn moves_vertices_in_front_of_the_camera() {
        let vertex = MeshVertex::new(Vec3::new(1.0, 0.0, 0.0), Vec3::new(1.0, 0.0, 0.0), Vec2::new(0.25, 0.5));

        let moved = transform_vertices(&[vertex], torus_transform(90.0));
        let p = moved[0].position;
        assert!(p.x.abs() < 0.0001 && p.y.abs() < 0.0001);
        assert!((p.z - -3.5).abs() < 0.0001);

        // Directions are only rotated
        assert!((moved[0].normal.z - -1.0).abs() < 0.0001);
        assert_eq!(vertex.uv, moved[0].uv);
    }
}
