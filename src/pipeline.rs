
//! A shader program which does what the legacy fixed function pipeline did for the demos:
//! per-vertex lighting with a single (spot) light, color tracking materials, flat shading,
//! texture modulation and linear fog. State is set by modifying `FixedPipeline::state` and
//! applied by `bind`.

use math3d::{Vec3, Vec4};
use log::debug;

use crate::buffer::Vertex;
use crate::color::Color;
use crate::error::Result;
use crate::matrix_stack::MatrixStack;
use crate::shader::Shader;
use crate::shapes::MeshVertex;

/// A single light source. The ambient and diffuse terms are multiplied with the vertex color,
/// since materials always track the vertex color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    /// Eye space position. `w = 0` gives a directional light shining from `position.xyz`,
    /// `w = 1` a point light. Use `FixedPipeline::place_light` to position the light in world
    /// space.
    pub position: Vec4<f32>,
    pub ambient: Color,
    pub diffuse: Color,
    pub specular: Color,
    /// Ambient light which is present even without any light source
    pub global_ambient: Color,
    /// Turns a point light into a spot light
    pub spot: Option<Spot>,
}

impl Default for Light {
    fn default() -> Light {
        Light {
            position: Vec4::new(0.0, 0.0, 1.0, 0.0),
            ambient: Color::BLACK,
            diffuse: Color::WHITE,
            specular: Color::WHITE,
            global_ambient: Color::rgb(0.2, 0.2, 0.2),
            spot: None,
        }
    }
}

/// Limits a point light to a cone, like `GL_SPOT_CUTOFF` and `GL_SPOT_EXPONENT` did
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spot {
    /// Eye space direction of the cone. Use `FixedPipeline::aim_spot` to set it in world space.
    pub direction: Vec3<f32>,
    /// Angle between the axis and the edge of the cone, in degrees. At most 90.
    pub cutoff: f32,
    /// Focuses the light towards the axis of the cone. 0 lights the whole cone evenly.
    pub exponent: f32,
}

impl Spot {
    /// The shader compares this against the angle to each vertex
    pub fn cos_cutoff(&self) -> f32 {
        self.cutoff.max(0.0).min(90.0).to_radians().cos()
    }
}

/// The parts of a material which do not track the vertex color
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub specular: Color,
    /// Specular exponent, between 0 and 128
    pub shininess: f32,
}

impl Default for Material {
    fn default() -> Material {
        Material {
            specular: Color::BLACK,
            shininess: 0.0,
        }
    }
}

/// Linear fog, blending towards `color` between `start` and `end` units away from the eye
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fog {
    pub start: f32,
    pub end: f32,
    pub color: Color,
}

impl Fog {
    /// `1 / (end - start)`, or 0 when `end` is not past `start`. In that case the fog switches
    /// from none to full at `end`.
    pub fn scale(&self) -> f32 {
        if self.end > self.start {
            1.0 / (self.end - self.start)
        } else {
            0.0
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PipelineState {
    /// Lighting is disabled when this is `None`
    pub lighting: Option<Light>,
    pub material: Material,
    /// Modulates the vertex color with the texture bound to unit 0
    pub texture: bool,
    /// Uses the color of the last vertex for the whole triangle, like `GL_FLAT`
    pub flat_shading: bool,
    /// Cel shading. The diffuse intensity picks a texel from the first row of the texture, which
    /// replaces the lit color. Needs lighting and `texture`.
    pub toon: bool,
    pub fog: Option<Fog>,
    /// Draws everything in this color, ignoring vertex colors and lighting
    pub color_override: Option<Color>,
}

pub struct FixedPipeline {
    shader: Shader,
    pub state: PipelineState,
}

impl FixedPipeline {
    pub fn new() -> Result<FixedPipeline> {
        let vertex_source = format!("{}{}{}", VERTEX_HEADER, MeshVertex::gen_shader_input_decl(), VERTEX_BODY);
        let shader = Shader::new(&vertex_source, FRAGMENT_SOURCE)?;
        debug!("Compiled fixed function pipeline");

        Ok(FixedPipeline {
            shader,
            state: PipelineState::default(),
        })
    }

    /// Transforms `position` by the current model-view matrix and uses it as the light position,
    /// like `glLightfv(GL_LIGHT0, GL_POSITION, ...)` did. Does nothing if lighting is disabled.
    pub fn place_light(&mut self, position: Vec4<f32>, stack: &MatrixStack) {
        if let Some(ref mut light) = self.state.lighting {
            light.position = stack.model_view() * position;
        }
    }

    /// Transforms `direction` by the current model-view matrix and uses it as the direction of the
    /// spot light, like `glLightfv(GL_LIGHT0, GL_SPOT_DIRECTION, ...)` did. Does nothing if there
    /// is no spot light.
    pub fn aim_spot(&mut self, direction: Vec3<f32>, stack: &MatrixStack) {
        if let Some(Light { spot: Some(ref mut spot), .. }) = self.state.lighting {
            spot.direction = stack.model_view().transform_direction(direction);
        }
    }

    /// Binds the program and uploads the current state and matrices. Has to be called again
    /// whenever the state or the matrices change before drawing.
    pub fn bind(&self, stack: &MatrixStack) {
        let shader = &self.shader;
        let state = &self.state;

        shader.bind();
        shader.set_uniform("mvp", stack.mvp());
        shader.set_uniform("model_view", stack.model_view());
        shader.set_uniform("normal_matrix", stack.normal_matrix());

        shader.set_uniform("use_color_override", state.color_override.is_some());
        shader.set_uniform("color_override", state.color_override.unwrap_or_default());

        shader.set_uniform("lighting", state.lighting.is_some());
        if let Some(light) = state.lighting {
            shader.set_uniform("light_position", light.position);
            shader.set_uniform("light_ambient", light.ambient);
            shader.set_uniform("light_diffuse", light.diffuse);
            shader.set_uniform("light_specular", light.specular);
            shader.set_uniform("global_ambient", light.global_ambient);
            shader.set_uniform("material_specular", state.material.specular);
            shader.set_uniform("material_shininess", state.material.shininess);

            shader.set_uniform("spot", light.spot.is_some());
            if let Some(spot) = light.spot {
                shader.set_uniform("spot_direction", spot.direction);
                shader.set_uniform("spot_cos_cutoff", spot.cos_cutoff());
                shader.set_uniform("spot_exponent", spot.exponent);
            }
        }
        shader.set_uniform("toon", state.toon);
        shader.set_uniform("flat_shading", state.flat_shading);

        shader.set_uniform("texturing", state.texture);
        shader.set_uniform("tex", 0i32);

        shader.set_uniform("fog", state.fog.is_some());
        if let Some(fog) = state.fog {
            shader.set_uniform("fog_end", fog.end);
            shader.set_uniform("fog_scale", fog.scale());
            shader.set_uniform("fog_color", fog.color);
        }
    }
}

const VERTEX_HEADER: &str = "
#version 330 core

";

const VERTEX_BODY: &str = "
uniform mat4 mvp;
uniform mat4 model_view;
uniform mat3 normal_matrix;

uniform bool use_color_override;
uniform vec4 color_override;

uniform bool lighting;
uniform vec4 light_position;
uniform vec4 light_ambient;
uniform vec4 light_diffuse;
uniform vec4 light_specular;
uniform vec4 global_ambient;
uniform vec4 material_specular;
uniform float material_shininess;

uniform bool spot;
uniform vec3 spot_direction;
uniform float spot_cos_cutoff;
uniform float spot_exponent;

uniform bool toon;

out vec4 v_color;
flat out vec4 v_flat_color;
out vec2 v_uv;
out float v_eye_distance;

vec4 shade(vec3 eye) {
    vec3 n = normalize(normal_matrix * normal);
    vec3 l;
    if (light_position.w == 0.0) {
        l = normalize(light_position.xyz);
    } else {
        l = normalize(light_position.xyz - eye);
    }

    float diffuse = max(dot(n, l), 0.0);
    if (toon) {
        v_uv = vec2(diffuse, 0.5);
        return vec4(1.0);
    }

    // Infinite viewer
    vec3 h = normalize(l + vec3(0.0, 0.0, 1.0));
    float specular = 0.0;
    if (diffuse > 0.0) {
        specular = pow(max(dot(n, h), 0.0001), material_shininess);
    }

    float attenuation = 1.0;
    if (spot && light_position.w != 0.0) {
        float spot_dot = dot(-l, normalize(spot_direction));
        attenuation = spot_dot < spot_cos_cutoff ? 0.0 : pow(max(spot_dot, 0.0001), spot_exponent);
    }

    vec3 rgb =
        color.rgb * global_ambient.rgb +
        attenuation * (
            color.rgb * light_ambient.rgb +
            color.rgb * light_diffuse.rgb * diffuse +
            material_specular.rgb * light_specular.rgb * specular
        );
    return vec4(min(rgb, vec3(1.0)), color.a);
}

void main() {
    vec4 eye = model_view * vec4(position, 1.0);
    gl_Position = mvp * vec4(position, 1.0);
    v_uv = uv;
    v_eye_distance = length(eye.xyz);

    if (use_color_override) {
        v_color = color_override;
    } else if (lighting) {
        v_color = shade(eye.xyz);
    } else {
        v_color = color;
    }
    v_flat_color = v_color;
}
";

const FRAGMENT_SOURCE: &str = "
#version 330 core

in vec4 v_color;
flat in vec4 v_flat_color;
in vec2 v_uv;
in float v_eye_distance;

out vec4 frag_color;

uniform bool flat_shading;
uniform bool texturing;
uniform sampler2D tex;

uniform bool fog;
uniform float fog_end;
uniform float fog_scale;
uniform vec4 fog_color;

void main() {
    vec4 color = flat_shading ? v_flat_color : v_color;
    if (texturing) {
        color *= texture(tex, v_uv);
    }
    if (fog) {
        float f;
        if (fog_scale > 0.0) {
            f = clamp((fog_end - v_eye_distance) * fog_scale, 0.0, 1.0);
        } else {
            f = v_eye_distance < fog_end ? 1.0 : 0.0;
        }
        color.rgb = mix(fog_color.rgb, color.rgb, f);
    }
    frag_color = color;
}
";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fog_scale() {
        let fog = Fog { start: 5.0, end: 30.0, color: Color::BLACK };
        assert!((fog.scale() - 0.04).abs() < 0.00001);

        let degenerate = Fog { start: 10.0, end: 10.0, color: Color::BLACK };
        assert_eq!(0.0, degenerate.scale());
        let reversed = Fog { start: 30.0, end: 5.0, color: Color::BLACK };
        assert_eq!(0.0, reversed.scale());
    }

    #[test]
    fn fog_shader_guards_degenerate_range() {
        assert!(FRAGMENT_SOURCE.contains("uniform float fog_scale;"));
        assert!(FRAGMENT_SOURCE.contains("if (fog_scale > 0.0)"));
        assert!(!FRAGMENT_SOURCE.contains("fog_start"));
    }

    #[test]
    fn vertex_inputs_match_shader() {
        let inputs = MeshVertex::gen_shader_input_decl();

        for name in &["position", "normal", "uv", "color"] {
            assert!(inputs.contains(name), "Missing input {} in\n{}", name, inputs);
            assert!(VERTEX_BODY.contains(name));
        }
        assert!(inputs.contains("layout(location = 0) in vec3 position;"));
        assert!(inputs.contains("in vec4 color;"));
    }

    #[test]
    fn default_state() {
        let state = PipelineState::default();
        assert!(state.lighting.is_none());
        assert!(state.fog.is_none());
        assert!(!state.texture);
        assert!(!state.flat_shading);
        assert!(!state.toon);
        assert_eq!(Color::BLACK, state.material.specular);
        assert_eq!(None, Light::default().spot);
    }

    #[test]
    fn spot_cutoff() {
        let spot = |cutoff: f32| Spot { direction: Vec3::new(0.0, 0.0, -1.0), cutoff, exponent: 0.0 };

        assert!((spot(60.0).cos_cutoff() - 0.5).abs() < 0.0001);
        assert!((spot(0.0).cos_cutoff() - 1.0).abs() < 0.0001);
        // Wider cones are not possible, 180 used to mean "not a spot light"
        assert!(spot(180.0).cos_cutoff().abs() < 0.0001);
    }

    #[test]
    fn shaders_declare_every_uniform() {
        let vertex = ["spot_direction", "spot_cos_cutoff", "spot_exponent", "toon", "light_position"];
        for name in vertex.iter() {
            assert!(VERTEX_BODY.contains(&format!(" {};", name)), "Missing uniform {}", name);
        }
        for name in ["flat_shading", "texturing", "fog_end", "fog_scale"].iter() {
            assert!(FRAGMENT_SOURCE.contains(&format!(" {};", name)), "Missing uniform {}", name);
        }
        assert!(VERTEX_BODY.contains("flat out vec4 v_flat_color;"));
        assert!(FRAGMENT_SOURCE.contains("flat in vec4 v_flat_color;"));
    }
}
