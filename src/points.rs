
//! Drawing 2D point lists, either as plain squares, as antialiased circles or as textured
//! point sprites.

use math3d::Vec2;
use superbible_derive::Vertex;

use crate::buffer::Vertex;
use crate::color::Color;
use crate::error::Result;
use crate::graphics;
use crate::matrix_stack::MatrixStack;
use crate::shader::Shader;

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Vertex)]
pub struct PointVertex {
    pub position: Vec2<f32>,
}

impl PointVertex {
    pub fn new(x: f32, y: f32) -> PointVertex {
        PointVertex { position: Vec2::new(x, y) }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointMode {
    /// Square points without any smoothing
    Square,
    /// Round points with smoothed edges. Needs blending.
    Antialiased,
    /// Each point shows the texture bound to unit 0
    Sprite,
}

impl PointMode {
    fn index(self) -> i32 {
        match self {
            PointMode::Square => 0,
            PointMode::Antialiased => 1,
            PointMode::Sprite => 2,
        }
    }
}

pub struct PointPipeline {
    shader: Shader,
    pub mode: PointMode,
}

impl PointPipeline {
    pub fn new() -> Result<PointPipeline> {
        let vertex_source = format!("{}{}{}", VERTEX_HEADER, PointVertex::gen_shader_input_decl(), VERTEX_BODY);
        let shader = Shader::new(&vertex_source, FRAGMENT_SOURCE)?;

        Ok(PointPipeline { shader, mode: PointMode::Square })
    }

    /// Binds the program for drawing points of the given size, in pixels. Points can also be used
    /// to draw lines, in which case `size` is ignored.
    pub fn bind(&self, stack: &MatrixStack, size: f32, color: Color) {
        graphics::set_program_point_size(true);

        self.shader.bind();
        self.shader.set_uniform("mvp", stack.mvp());
        self.shader.set_uniform("point_size", size);
        self.shader.set_uniform("color", color);
        self.shader.set_uniform("mode", self.mode.index());
        self.shader.set_uniform("tex", 0i32);
    }
}

const VERTEX_HEADER: &str = "
#version 330 core

";

const VERTEX_BODY: &str = "
uniform mat4 mvp;
uniform float point_size;

void main() {
    gl_Position = mvp * vec4(position, 0.0, 1.0);
    gl_PointSize = point_size;
}
";

const FRAGMENT_SOURCE: &str = "
#version 330 core

out vec4 frag_color;

uniform vec4 color;
uniform int mode;
uniform sampler2D tex;

void main() {
    if (mode == 1) {
        // Distance from the center of the point, 1 at the edge
        float r = length(gl_PointCoord - vec2(0.5)) * 2.0;
        float alpha = 1.0 - smoothstep(1.0 - fwidth(r), 1.0, r);
        if (alpha <= 0.0) discard;
        frag_color = vec4(color.rgb, color.a * alpha);
    } else if (mode == 2) {
        frag_color = color * texture(tex, gl_PointCoord);
    } else {
        frag_color = color;
    }
}
";
