
use gl;
use gl::types::*;

use crate::shader::UniformValue;
use crate::buffer::VertexData;

/// A color with red, green, blue and alpha components between 0 and 1. Used as a vertex
/// attribute, as a uniform and for the pixels of generated textures.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const BLACK: Color = Color { r: 0.0, g: 0.0, b: 0.0, a: 1.0 };
    pub const WHITE: Color = Color { r: 1.0, g: 1.0, b: 1.0, a: 1.0 };

    /// An opaque color. Components are clamped to `0..=1`.
    pub fn rgb(r: f32, g: f32, b: f32) -> Color {
        Color::rgba(r, g, b, 1.0)
    }

    /// Components are clamped to `0..=1`.
    pub fn rgba(r: f32, g: f32, b: f32, a: f32) -> Color {
        Color { r: unit(r), g: unit(g), b: unit(b), a: unit(a) }
    }

    /// Maps 255 to 1.0, like `glColor3ub` does.
    pub fn from_u8(r: u8, g: u8, b: u8, a: u8) -> Color {
        let convert = |v: u8| v as f32 / 255.0;
        Color { r: convert(r), g: convert(g), b: convert(b), a: convert(a) }
    }

    /// The RGBA bytes of this color, as stored in a pixmap.
    pub fn to_u8(&self) -> [u8; 4] {
        let convert = |v: f32| (unit(v) * 255.0).round() as u8;
        [convert(self.r), convert(self.g), convert(self.b), convert(self.a)]
    }

    pub fn with_alpha(self, alpha: f32) -> Color {
        Color { a: unit(alpha), .. self }
    }

    /// Scales red, green and blue by `factor`, keeping alpha.
    pub fn with_lightness(&self, factor: f32) -> Color {
        Color::rgba(self.r * factor, self.g * factor, self.b * factor, self.a)
    }

    pub fn lerp(self, other: Color, t: f32) -> Color {
        let mix = |a: f32, b: f32| a + (b - a) * t;
        Color {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
            a: mix(self.a, other.a),
        }
    }
}

fn unit(value: f32) -> f32 {
    value.max(0.0).min(1.0)
}

impl VertexData for Color {
    type Primitive = f32;
}

impl UniformValue for Color {
    const KIND: GLenum = gl::FLOAT_VEC4;

    unsafe fn set_uniform(color: &Color, location: GLint) {
        gl::Uniform4f(location, color.r, color.g, color.b, color.a);
    }

    unsafe fn set_uniform_slice(colors: &[Color], location: GLint) {
        gl::Uniform4fv(location, colors.len() as GLsizei, colors.as_ptr() as *const GLfloat);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn components() {
        assert_eq!(Color::rgba(1.0, 0.0, 0.5, 0.0), Color::rgba(2.0, -1.0, 0.5, -0.5));
        assert_eq!(Color::rgb(1.0, 0.0, 1.0), Color::from_u8(255, 0, 255, 255));
        assert_eq!([255, 128, 0, 64], Color::rgba(1.0, 0.5, 0.0, 0.25).to_u8());
        assert_eq!(0.2, Color::WHITE.with_alpha(0.2).a);
    }

    #[test]
    fn mixing() {
        assert_eq!(Color::rgb(0.5, 0.5, 0.5), Color::BLACK.lerp(Color::WHITE, 0.5));
        assert_eq!(Color::rgb(1.0, 0.5, 0.0), Color::rgb(0.8, 0.4, 0.0).with_lightness(1.25));
        assert_eq!(0.3, Color::rgba(1.0, 1.0, 1.0, 0.3).with_lightness(0.5).a);
    }
}
