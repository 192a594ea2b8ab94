
use std::mem::size_of;

use gl;
use gl::types::*;
use math3d::{Vec2, Vec3, Vec4};

/// How the vertices in a buffer are assembled when drawing.
#[repr(u32)] // GLenum is u32
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PrimitiveMode {
    Points      = gl::POINTS,
    Lines       = gl::LINES,
    LineStrip   = gl::LINE_STRIP,
    LineLoop    = gl::LINE_LOOP,
    Triangles   = gl::TRIANGLES,
    TriangleFan = gl::TRIANGLE_FAN,
}

/// Scalar types which can be passed to vertex shaders. Only implemented for `f32`, `i32` and
/// `u32`; custom vertex fields should implement [`VertexData`] instead.
///
/// [`VertexData`]: trait.VertexData.html
pub trait GlPrimitive: Sized {
    const GL_ENUM: GLenum;
    /// `""`, `"i"` or `"u"`, as in `vec3`, `ivec3` and `uvec3`
    const GLSL_PREFIX: &'static str;
    const GLSL_SCALAR: &'static str;

    fn gl_enum() -> GLenum { Self::GL_ENUM }
    fn is_integer() -> bool { !Self::GLSL_PREFIX.is_empty() }
}

impl GlPrimitive for GLfloat {
    const GL_ENUM: GLenum = gl::FLOAT;
    const GLSL_PREFIX: &'static str = "";
    const GLSL_SCALAR: &'static str = "float";
}

impl GlPrimitive for GLint {
    const GL_ENUM: GLenum = gl::INT;
    const GLSL_PREFIX: &'static str = "i";
    const GLSL_SCALAR: &'static str = "int";
}

impl GlPrimitive for GLuint {
    const GL_ENUM: GLenum = gl::UNSIGNED_INT;
    const GLSL_PREFIX: &'static str = "u";
    const GLSL_SCALAR: &'static str = "uint";
}

/// A struct whose fields map to the inputs of a vertex shader, in order. Derive it with
/// `#[derive(Vertex)]` on a `#[repr(C)]` struct whose fields all implement [`VertexData`].
///
/// ```rust,ignore
/// #[repr(C)]
/// #[derive(Vertex)]
/// struct Vert {
///     position: Vec3<f32>,
///     color: Color,
/// }
/// ```
///
/// [`VertexData`]: trait.VertexData.html
pub trait Vertex: Sized {
    /// Describes each field to the currently bound vertex array.
    fn setup_attrib_pointers();

    /// `layout(location = N) in <type> <name>;` for every field
    fn gen_shader_input_decl() -> String;
}

/// One field of a [`Vertex`]: between one and four values of a single [`GlPrimitive`].
///
/// [`Vertex`]: trait.Vertex.html
/// [`GlPrimitive`]: trait.GlPrimitive.html
pub trait VertexData: Sized {
    type Primitive: GlPrimitive;

    fn primitives() -> usize {
        size_of::<Self>() / size_of::<Self::Primitive>()
    }

    /// The glsl type of the matching shader input, e.g. `vec3`
    fn get_glsl_type() -> String {
        match Self::primitives() {
            1 => Self::Primitive::GLSL_SCALAR.to_owned(),
            n @ 2 ..= 4 => format!("{}vec{}", Self::Primitive::GLSL_PREFIX, n),
            n => panic!("{} values can not be passed as one vertex attribute", n),
        }
    }
}

impl<T: GlPrimitive> VertexData for T { type Primitive = T; }
impl<T: GlPrimitive + Copy> VertexData for Vec2<T> { type Primitive = T; }
impl<T: GlPrimitive + Copy> VertexData for Vec3<T> { type Primitive = T; }
impl<T: GlPrimitive + Copy> VertexData for Vec4<T> { type Primitive = T; }

/// Arguments to `glVertexAttribPointer` for one vertex field. Created by `#[derive(Vertex)]`.
#[derive(Debug, Clone)]
pub struct AttribBinding {
    /// Attribute location in the shader
    pub index: usize,
    pub primitives: usize,
    pub primitive_type: GLenum,
    /// Maps integers to `0.0..1.0` or `-1.0..1.0`. Ignored for integer attributes.
    pub normalized: bool,
    /// Passes integers to the shader unconverted
    pub integer: bool,
    /// Bytes between consecutive vertices
    pub stride: usize,
    /// Bytes from the start of the vertex to this field
    pub offset: usize,
}

impl AttribBinding {
    pub fn enable(&self) {
        let index = self.index as GLuint;
        let size = self.primitives as GLint;
        let stride = self.stride as GLsizei;
        let offset = self.offset as *const GLvoid;

        unsafe {
            gl::EnableVertexAttribArray(index);
            if self.integer {
                gl::VertexAttribIPointer(index, size, self.primitive_type, stride, offset);
            } else {
                gl::VertexAttribPointer(index, size, self.primitive_type, self.normalized as GLboolean, stride, offset);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    #[test]
    fn glsl_types() {
        assert_eq!("float", f32::get_glsl_type());
        assert_eq!("vec3", Vec3::<f32>::get_glsl_type());
        assert_eq!("ivec2", Vec2::<i32>::get_glsl_type());
        assert_eq!("uvec4", Vec4::<u32>::get_glsl_type());
        assert_eq!("vec4", Color::get_glsl_type());
    }

    #[test]
    fn attribute_sizes() {
        assert_eq!(4, Color::primitives());
        assert_eq!(2, Vec2::<f32>::primitives());
        assert!(u32::is_integer());
        assert!(!f32::is_integer());
    }
}
