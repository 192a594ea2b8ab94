
//! A textured world of spheres with translucent shadows. Move around with W/A/S/D or the arrow
//! keys, Q and E move sideways.

use superbible::{Demo, DemoState, Input, MatrixStack, Result};
use superbible::sphere_world::{SphereWorld, Style};

struct SphereWorldDemo {
    world: SphereWorld,
}

impl Demo for SphereWorldDemo {
    fn setup(state: &mut DemoState) -> Result<SphereWorldDemo> {
        Ok(SphereWorldDemo { world: SphereWorld::new(Style::textured(), state)? })
    }

    fn handle_input(&mut self, input: &Input, _state: &mut DemoState) {
        self.world.handle_input(input);
    }

    fn tick(&mut self, _state: &mut DemoState) {
        self.world.tick();
    }

    fn draw(&mut self, _state: &DemoState, stack: &mut MatrixStack) {
        self.world.draw(stack);
    }

    fn on_resize(&mut self, state: &DemoState, stack: &mut MatrixStack) {
        self.world.on_resize(state, stack);
    }

    fn name() -> &'static str { "sphereworld" }
}

fn main() {
    superbible::main::<SphereWorldDemo>();
}
