
//! The sphere world without textures, fading into linear fog. Controls are the same as in
//! `sphereworld`.

use superbible::{Demo, DemoState, Input, MatrixStack, Result};
use superbible::sphere_world::{SphereWorld, Style};

struct Fogged {
    world: SphereWorld,
}

impl Demo for Fogged {
    fn setup(state: &mut DemoState) -> Result<Fogged> {
        Ok(Fogged { world: SphereWorld::new(Style::fogged(), state)? })
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

    fn name() -> &'static str { "fogged" }
}

fn main() {
    superbible::main::<Fogged>();
}
