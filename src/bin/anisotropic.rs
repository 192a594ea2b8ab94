
//! A textured tunnel for comparing texture filters. Up and Down move through the tunnel, `1` to
//! `6` select the minification filter, `7` turns on maximum anisotropic filtering and `8` turns
//! it off again.

use std::path::Path;

use log::info;
use math3d::Vec3;
use superbible::{Color, Demo, DemoState, Input, Key, KeyState, MatrixStack, Result};
use superbible::buffer::{PrimitiveMode, VertexBuffer};
use superbible::graphics;
use superbible::pipeline::FixedPipeline;
use superbible::pixmap::{patterns, Pixmap};
use superbible::shapes::{self, MeshVertex};
use superbible::texture::{self, Texture, TextureFilter, TextureWrap};

const SEGMENTS: usize = 6;
const START_Z: f32 = -60.0;
const ZOOM_SPEED: f32 = 1.0;

struct Anisotropic {
    pipeline: FixedPipeline,

    floor: VertexBuffer<MeshVertex>,
    ceiling: VertexBuffer<MeshVertex>,
    walls: VertexBuffer<MeshVertex>,

    floor_texture: Texture,
    ceiling_texture: Texture,
    brick_texture: Texture,

    z_pos: f32,
    zoom: f32,
}

fn tunnel_texture<F: FnOnce() -> Pixmap>(assets: &Path, name: &str, fallback: F) -> Texture {
    let mut texture = Texture::from_asset_or(assets, name, fallback);
    texture.set_filter(TextureFilter::Linear, TextureFilter::LinearMipmapLinear);
    texture.set_wrap(TextureWrap::Repeat);
    texture
}

impl Anisotropic {
    fn textures(&mut self) -> [&mut Texture; 3] {
        [&mut self.floor_texture, &mut self.ceiling_texture, &mut self.brick_texture]
    }

    fn set_filter(&mut self, filter: TextureFilter) {
        info!("Using {:?} filtering", filter);
        for texture in self.textures().iter_mut() {
            texture.set_filter(filter.mag_filter(), filter);
        }
    }

    fn set_anisotropy(&mut self, level: f32) {
        info!("Anisotropy level {}", level);
        for texture in self.textures().iter_mut() {
            texture.set_anisotropy(level);
        }
    }
}

impl Demo for Anisotropic {
    fn setup(state: &mut DemoState) -> Result<Anisotropic> {
        graphics::set_depth_testing(true);

        let mut pipeline = FixedPipeline::new()?;
        pipeline.state.texture = true;

        let assets = &state.config.assets;
        let floor_texture = tunnel_texture(assets, "floor", || {
            patterns::checkerboard(256, 32, Color::rgb(0.8, 0.8, 0.75), Color::rgb(0.2, 0.2, 0.25))
        });
        let ceiling_texture = tunnel_texture(assets, "ceiling", || {
            patterns::checkerboard(256, 64, Color::rgb(0.6, 0.6, 0.65), Color::rgb(0.45, 0.45, 0.5))
        });
        let brick_texture = tunnel_texture(assets, "brick", || {
            patterns::bricks(256, Color::rgb(0.6, 0.2, 0.1), Color::rgb(0.75, 0.75, 0.7))
        });

        let tunnel = shapes::tunnel(SEGMENTS);
        info!("Anisotropic filtering up to {}", texture::max_anisotropy());

        Ok(Anisotropic {
            pipeline,

            floor: VertexBuffer::with_data(PrimitiveMode::Triangles, &tunnel.floor),
            ceiling: VertexBuffer::with_data(PrimitiveMode::Triangles, &tunnel.ceiling),
            walls: VertexBuffer::with_data(PrimitiveMode::Triangles, &tunnel.walls),

            floor_texture,
            ceiling_texture,
            brick_texture,

            z_pos: START_Z,
            zoom: 0.0,
        })
    }

    fn handle_input(&mut self, input: &Input, _state: &mut DemoState) {
        self.zoom = if input.down(Key::Up) {
            ZOOM_SPEED
        } else if input.down(Key::Down) {
            -ZOOM_SPEED
        } else {
            0.0
        };

        for (key, &filter) in Key::DIGITS.iter().zip(TextureFilter::ALL.iter()) {
            if input.key(*key) == KeyState::Pressed {
                self.set_filter(filter);
            }
        }

        if input.key(Key::Key7) == KeyState::Pressed {
            self.set_anisotropy(texture::max_anisotropy());
        }
        if input.key(Key::Key8) == KeyState::Pressed {
            self.set_anisotropy(1.0);
        }
    }

    fn tick(&mut self, _state: &mut DemoState) {
        self.z_pos += self.zoom;
    }

    fn draw(&mut self, _state: &DemoState, stack: &mut MatrixStack) {
        graphics::clear(Some(Color::BLACK), true, false);

        stack.load_identity();
        stack.translate(Vec3::new(0.0, 0.0, self.z_pos));
        self.pipeline.bind(stack);

        self.floor_texture.bind(0);
        self.floor.draw();
        self.ceiling_texture.bind(0);
        self.ceiling.draw();
        self.brick_texture.bind(0);
        self.walls.draw();
    }

    fn on_resize(&mut self, state: &DemoState, stack: &mut MatrixStack) {
        stack.perspective(90.0, state.aspect(), 1.0, 500.0);
    }

    fn name() -> &'static str { "anisotropic" }
}

fn main() {
    superbible::main::<Anisotropic>();
}
