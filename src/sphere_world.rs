
//! The sphere world scene: a ground plane with randomly placed spheres, a spinning torus and an
//! orbiting sphere, all casting flat shadows. The camera can be moved around freely. Used by both
//! the `sphereworld` and the `fogged` demo, which differ only in their `Style`.

use std::path::Path;

use log::debug;
use math3d::{plane_equation, planar_shadow_matrix, Frame, Mat4, Vec3, Vec4};
use rand::Rng;

use crate::buffer::{PrimitiveMode, VertexBuffer};
use crate::color::Color;
use crate::error::Result;
use crate::graphics::{self, BlendSettings, FaceSide, StencilSettings, WindingOrder};
use crate::input::{Input, Key};
use crate::matrix_stack::MatrixStack;
use crate::pipeline::{FixedPipeline, Fog, Light, Material};
use crate::pixmap::{patterns, Pixmap};
use crate::shapes::{self, MeshVertex};
use crate::texture::{Texture, TextureFilter, TextureWrap};
use crate::DemoState;

pub const NUM_SPHERES: usize = 30;
pub const GROUND_Y: f32 = -0.4;
pub const GROUND_EXTENT: i32 = 20;

pub const LIGHT_POSITION: Vec4<f32> = Vec4::new(-100.0, 100.0, 50.0, 1.0);

const LOW_LIGHT: Color = Color { r: 0.25, g: 0.25, b: 0.25, a: 1.0 };

const MOVE_SPEED: f32 = 0.075;
const TURN_SPEED: f32 = 0.075;
const STRAFE_SPEED: f32 = 0.1;

/// How the scene is shaded
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Style {
    /// Use the grass, wood and orb textures. All objects are white when this is set.
    pub textured: bool,
    pub fog: Option<Fog>,
    pub ground: Color,
    pub spheres: Color,
    pub small_sphere: Color,
    pub torus: Color,
    pub shadow: Color,
    /// Blends shadows with the ground. The stencil buffer keeps overlapping shadows from getting
    /// darker.
    pub translucent_shadows: bool,
    /// Slices and stacks of the spheres
    pub sphere_detail: (usize, usize),
    /// Degrees the torus turns per tick
    pub spin_speed: f32,
}

impl Style {
    pub fn textured() -> Style {
        Style {
            textured: true,
            fog: None,
            ground: Color::WHITE,
            spheres: Color::WHITE,
            small_sphere: Color::WHITE,
            torus: Color::WHITE,
            shadow: Color::rgba(0.0, 0.0, 0.0, 0.6),
            translucent_shadows: true,
            sphere_detail: (21, 11),
            spin_speed: 1.0,
        }
    }

    pub fn fogged() -> Style {
        Style {
            textured: false,
            fog: Some(Fog { start: 5.0, end: 30.0, color: LOW_LIGHT }),
            ground: Color::rgb(0.6, 0.4, 0.1),
            spheres: Color::rgb(0.0, 1.0, 0.0),
            small_sphere: Color::rgb(0.0, 0.0, 1.0),
            torus: Color::rgb(1.0, 0.0, 0.0),
            shadow: Color::BLACK,
            translucent_shadows: false,
            sphere_detail: (17, 9),
            spin_speed: 2.0,
        }
    }
}

struct Textures {
    grass: Texture,
    wood: Texture,
    orb: Texture,
}

pub struct SphereWorld {
    style: Style,
    pipeline: FixedPipeline,
    textures: Option<Textures>,

    ground: VertexBuffer<MeshVertex>,
    big_sphere: VertexBuffer<MeshVertex>,
    small_sphere: VertexBuffer<MeshVertex>,
    torus: VertexBuffer<MeshVertex>,

    spheres: Vec<Frame>,
    camera: Frame,
    shadow_matrix: Mat4<f32>,

    y_rot: f32,
    forward: f32,
    turn: f32,
    right: f32,
}

impl SphereWorld {
    pub fn new(style: Style, state: &mut DemoState) -> Result<SphereWorld> {
        let mut pipeline = FixedPipeline::new()?;
        pipeline.state.fog = style.fog;
        pipeline.state.texture = style.textured;

        let textures = if style.textured {
            Some(load_textures(state))
        } else {
            None
        };

        let mesh = |mut vertices: Vec<MeshVertex>, color: Color| {
            shapes::paint(&mut vertices, color);
            VertexBuffer::with_data(PrimitiveMode::Triangles, &vertices)
        };
        let (slices, stacks) = style.sphere_detail;
        let tex_repeat = 1.0 / (GROUND_EXTENT as f32 * 0.075);

        let ground = mesh(shapes::ground_grid(GROUND_EXTENT, 1, GROUND_Y, tex_repeat), style.ground);
        let big_sphere = mesh(shapes::sphere(0.3, slices, stacks), style.spheres);
        let small_sphere = mesh(shapes::sphere(0.1, slices, stacks), style.small_sphere);
        let torus = mesh(shapes::torus(0.35, 0.15, 61, 37), style.torus);

        let spheres = place_spheres(state.rng());

        // Any three points on the ground
        let shadow_matrix = plane_equation(
            Vec3::new(0.0, GROUND_Y, 0.0),
            Vec3::new(10.0, GROUND_Y, 0.0),
            Vec3::new(5.0, GROUND_Y, -5.0),
        ).map(|plane| planar_shadow_matrix(plane, LIGHT_POSITION))
         .unwrap_or_else(Mat4::identity);

        graphics::set_culling(Some((WindingOrder::CounterClockwise, FaceSide::Back)));
        graphics::set_depth_testing(true);

        Ok(SphereWorld {
            style,
            pipeline,
            textures,

            ground,
            big_sphere,
            small_sphere,
            torus,

            spheres,
            camera: Frame::new(),
            shadow_matrix,

            y_rot: 0.0,
            forward: 0.0,
            turn: 0.0,
            right: 0.0,
        })
    }

    pub fn handle_input(&mut self, input: &Input) {
        let axis = |positive: bool, negative: bool, speed: f32| {
            if positive {
                speed
            } else if negative {
                -speed
            } else {
                0.0
            }
        };

        self.forward = axis(
            input.down(Key::W) || input.down(Key::Up),
            input.down(Key::S) || input.down(Key::Down),
            MOVE_SPEED,
        );
        self.turn = axis(
            input.down(Key::A) || input.down(Key::Left),
            input.down(Key::D) || input.down(Key::Right),
            TURN_SPEED,
        );
        self.right = axis(input.down(Key::Q), input.down(Key::E), STRAFE_SPEED);
    }

    pub fn tick(&mut self) {
        self.y_rot = (self.y_rot + self.style.spin_speed) % 360.0;

        if self.forward != 0.0 {
            self.camera.move_forward(self.forward * 2.0);
        }
        if self.turn != 0.0 {
            self.camera.rotate_local_y(self.turn);
        }
        if self.right != 0.0 {
            self.camera.move_right(self.right);
        }
    }

    pub fn on_resize(&self, state: &DemoState, stack: &mut MatrixStack) {
        stack.perspective(35.0, state.aspect(), 1.0, 50.0);
    }

    pub fn draw(&mut self, stack: &mut MatrixStack) {
        graphics::clear(Some(LOW_LIGHT), true, true);

        stack.load_identity();
        stack.set_view(self.camera.camera_matrix(false));

        // Position the light before any other transformations
        self.pipeline.state.lighting = Some(Light {
            ambient: LOW_LIGHT,
            diffuse: Color::WHITE,
            specular: Color::WHITE,
            global_ambient: Color::BLACK,
            .. Light::default()
        });
        self.pipeline.state.material = Material { specular: Color::BLACK, shininess: 128.0 };
        self.pipeline.place_light(LIGHT_POSITION, stack);

        // Ground
        if let Some(ref textures) = self.textures {
            textures.grass.bind(0);
        }
        self.pipeline.bind(stack);
        self.ground.draw();

        // Shadows first, flattened onto the ground
        let lighting = self.pipeline.state.lighting.take();
        self.pipeline.state.texture = false;
        self.pipeline.state.color_override = Some(self.style.shadow);
        graphics::set_depth_testing(false);
        if self.style.translucent_shadows {
            graphics::set_blending(Some(BlendSettings::default()));
            graphics::set_stencil(Some(StencilSettings::draw_once()));
        }

        let shadow_matrix = self.shadow_matrix;
        stack.push(|stack| {
            stack.multiply(shadow_matrix);
            self.draw_inhabitants(stack);
        });

        graphics::set_stencil(None);
        graphics::set_blending(None);
        graphics::set_depth_testing(true);
        self.pipeline.state.color_override = None;
        self.pipeline.state.texture = self.style.textured;
        self.pipeline.state.lighting = lighting;

        // Then everything normally
        self.draw_inhabitants(stack);
    }

    fn draw_inhabitants(&mut self, stack: &mut MatrixStack) {
        let textures = self.textures.as_ref();

        for sphere in self.spheres.iter() {
            stack.push(|stack| {
                stack.multiply(sphere.matrix(false));
                if let Some(textures) = textures {
                    textures.orb.bind(0);
                }
                self.pipeline.bind(stack);
                self.big_sphere.draw();
            });
        }

        let y_rot = self.y_rot;
        stack.push(|stack| {
            stack.translate(Vec3::new(0.0, 0.1, -2.5));

            stack.push(|stack| {
                stack.rotate(-y_rot * 2.0, Vec3::new(0.0, 1.0, 0.0));
                stack.translate(Vec3::new(1.0, 0.0, 0.0));
                self.pipeline.bind(stack);
                self.small_sphere.draw();
            });

            // Only the torus is shiny
            self.pipeline.state.material.specular = Color::WHITE;
            stack.rotate(y_rot, Vec3::new(0.0, 1.0, 0.0));
            if let Some(ref textures) = self.textures {
                textures.wood.bind(0);
            }
            self.pipeline.bind(stack);
            self.torus.draw();
            self.pipeline.state.material.specular = Color::BLACK;
        });
    }
}

/// Spreads the spheres over the ground, between -20 and 20 on the x and z axis
fn place_spheres<R: Rng>(rng: &mut R) -> Vec<Frame> {
    (0..NUM_SPHERES).map(|_| {
        let x = rng.gen::<f32>() * 40.0 - 20.0;
        let z = rng.gen::<f32>() * 40.0 - 20.0;

        let mut frame = Frame::new();
        frame.set_origin(Vec3::new(x, 0.0, z));
        frame
    }).collect()
}

fn load_textures(state: &mut DemoState) -> Textures {
    let assets = state.config.assets.clone();
    let rng = state.rng();

    Textures {
        grass: load_texture(&assets, "grass", || {
            patterns::noise(128, Color::rgb(0.25, 0.55, 0.15), 0.2, rng)
        }),
        wood: load_texture(&assets, "wood", || {
            patterns::wood(128, Color::rgb(0.75, 0.55, 0.3), Color::rgb(0.45, 0.28, 0.12), 6.0)
        }),
        orb: load_texture(&assets, "orb", || {
            patterns::checkerboard(64, 8, Color::rgb(0.9, 0.9, 1.0), Color::rgb(0.3, 0.4, 0.8))
        }),
    }
}

fn load_texture<F: FnOnce() -> Pixmap>(assets: &Path, name: &str, fallback: F) -> Texture {
    let mut texture = Texture::from_asset_or(assets, name, fallback);
    texture.set_filter(TextureFilter::Linear, TextureFilter::LinearMipmapLinear);
    texture.set_wrap(TextureWrap::Repeat);
    debug!("Loaded {} texture ({}x{})", name, texture.width, texture.height);
    texture
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn spheres_are_spread_over_ground() {
        let mut rng = StdRng::seed_from_u64(0);
        let spheres = place_spheres(&mut rng);

        assert_eq!(NUM_SPHERES, spheres.len());
        for sphere in spheres.iter() {
            let origin = sphere.origin();
            assert!(origin.x >= -20.0 && origin.x <= 20.0);
            assert!(origin.z >= -20.0 && origin.z <= 20.0);
            assert_eq!(0.0, origin.y);
        }
    }

    #[test]
    fn shadows_land_on_ground() {
        let plane = plane_equation(
            Vec3::new(0.0, GROUND_Y, 0.0),
            Vec3::new(10.0, GROUND_Y, 0.0),
            Vec3::new(5.0, GROUND_Y, -5.0),
        ).unwrap();
        let shadow = planar_shadow_matrix(plane, LIGHT_POSITION);

        let p = shadow * Vec4::new(0.0, 0.1, -2.5, 1.0);
        assert!((p.y / p.w - GROUND_Y).abs() < 0.001);
    }

    #[test]
    fn styles() {
        let fogged = Style::fogged();
        assert!(!fogged.textured);
        assert_eq!(Some(5.0), fogged.fog.map(|f| f.start));

        let textured = Style::textured();
        assert!(textured.translucent_shadows);
        assert!(textured.shadow.a < 1.0);
    }
}
