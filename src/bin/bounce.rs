
//! A red square bouncing around the window.

use math3d::{Vec2, Vec3};
use superbible::{Color, Demo, DemoState, MatrixStack, Result};
use superbible::buffer::{PrimitiveMode, VertexBuffer};
use superbible::graphics;
use superbible::points::{PointPipeline, PointVertex};
use superbible::region::Region;

/// Length of a side of the square
const SIZE: f32 = 25.0;
/// The shorter side of the window always shows this range around the origin
const RANGE: f32 = 100.0;

/// The top left corner of the square and how far it moves every tick
#[derive(Debug, Clone, Copy, PartialEq)]
struct Bouncer {
    corner: Vec2<f32>,
    step: Vec2<f32>,
}

impl Bouncer {
    fn new() -> Bouncer {
        Bouncer { corner: Vec2::zero(), step: Vec2::new(1.0, 1.0) }
    }

    /// Moves one step, turning around at the edges of `area`. The square is pulled back inside
    /// if the area shrank.
    fn advance(&mut self, area: Region) {
        if self.corner.x + SIZE >= area.max.x {
            self.step.x = -self.step.x.abs();
        } else if self.corner.x <= area.min.x {
            self.step.x = self.step.x.abs();
        }
        if self.corner.y >= area.max.y {
            self.step.y = -self.step.y.abs();
        } else if self.corner.y - SIZE <= area.min.y {
            self.step.y = self.step.y.abs();
        }

        self.corner += self.step;
        self.corner.x = self.corner.x.min(area.max.x - SIZE).max(area.min.x);
        self.corner.y = self.corner.y.max(area.min.y + SIZE).min(area.max.y);
    }
}

struct Bounce {
    pipeline: PointPipeline,
    square: VertexBuffer<PointVertex>,
    bouncer: Bouncer,
    area: Region,
}

impl Demo for Bounce {
    fn setup(state: &mut DemoState) -> Result<Bounce> {
        graphics::set_depth_testing(false);

        let square = [
            PointVertex::new(0.0, 0.0),
            PointVertex::new(0.0, -SIZE),
            PointVertex::new(SIZE, -SIZE),
            PointVertex::new(SIZE, 0.0),
        ];

        Ok(Bounce {
            pipeline: PointPipeline::new()?,
            square: VertexBuffer::with_data(PrimitiveMode::TriangleFan, &square),
            bouncer: Bouncer::new(),
            area: Region::fit_aspect(RANGE, state.aspect()),
        })
    }

    fn tick(&mut self, _state: &mut DemoState) {
        self.bouncer.advance(self.area);
    }

    fn draw(&mut self, _state: &DemoState, stack: &mut MatrixStack) {
        graphics::clear(Some(Color::rgb(0.0, 0.0, 1.0)), false, false);

        stack.load_identity();
        stack.translate(Vec3::from2(self.bouncer.corner, 0.0));
        self.pipeline.bind(stack, 1.0, Color::rgb(1.0, 0.0, 0.0));
        self.square.draw();
    }

    fn on_resize(&mut self, state: &DemoState, stack: &mut MatrixStack) {
        self.area = Region::fit_aspect(RANGE, state.aspect());
        stack.ortho(self.area.min.x, self.area.max.x, self.area.min.y, self.area.max.y, -1.0, 1.0);
    }

    fn name() -> &'static str { "bounce" }
}

fn main() {
    superbible::main::<Bounce>();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn area() -> Region {
        Region::fit_aspect(RANGE, 1.5)
    }

    #[test]
    fn turns_at_the_right_edge() {
        let area = area();
        let mut bouncer = Bouncer { corner: Vec2::new(area.max.x - SIZE - 0.5, 0.0), step: Vec2::new(1.0, 1.0) };

        bouncer.advance(area);
        assert_eq!(area.max.x - SIZE, bouncer.corner.x);
        bouncer.advance(area);
        assert_eq!(-1.0, bouncer.step.x);
        assert!(bouncer.corner.x < area.max.x - SIZE);
    }

    #[test]
    fn stays_inside() {
        let area = area();
        let mut bouncer = Bouncer::new();

        for _ in 0..2000 {
            bouncer.advance(area);
            let Vec2 { x, y } = bouncer.corner;
            assert!(x >= area.min.x && x + SIZE <= area.max.x, "Left the area at x = {}", x);
            assert!(y <= area.max.y && y - SIZE >= area.min.y, "Left the area at y = {}", y);
        }
    }

    #[test]
    fn shrinking_pulls_the_square_back() {
        let mut bouncer = Bouncer { corner: Vec2::new(120.0, 90.0), step: Vec2::new(1.0, 1.0) };
        let small = Region::fit_aspect(RANGE, 0.5);

        bouncer.advance(small);
        assert_eq!(RANGE - SIZE, bouncer.corner.x);
        assert_eq!(Vec2::new(-1.0, 1.0), bouncer.step);
    }
}
