
use gl;
use gl::types::*;
use math3d::{Mat3, Mat4, Vec2, Vec3, Vec4};

/// An active uniform of a linked program, as reported by OpenGL
#[derive(Debug, Clone)]
pub struct UniformBinding {
    pub name: String,
    pub location: GLint,
    pub kind: GLenum,
}

/// Everything which implements this trait can be stored into the uniform value of a shader.
pub trait UniformValue: Sized {
    /// The glsl type this value is stored into, as reported by `glGetActiveUniform`.
    const KIND: GLenum;

    unsafe fn set_uniform(data: &Self, location: GLint);
    unsafe fn set_uniform_slice(slice: &[Self], location: GLint);

    /// Whether a uniform of the given type can be set from this value. Only differs from
    /// `KIND == kind` for values which can also be stored in other types, like texture units.
    fn accepts(kind: GLenum) -> bool {
        kind == Self::KIND
    }
}

impl UniformValue for Vec2<f32> {
    const KIND: GLenum = gl::FLOAT_VEC2;

    unsafe fn set_uniform(vec: &Vec2<f32>, location: GLint) {
        gl::Uniform2f(location, vec.x, vec.y);
    }

    unsafe fn set_uniform_slice(slice: &[Vec2<f32>], location: GLint) {
        gl::Uniform2fv(location, slice.len() as GLsizei, slice.as_ptr() as *const GLfloat);
    }
}

impl UniformValue for Vec3<f32> {
    const KIND: GLenum = gl::FLOAT_VEC3;

    unsafe fn set_uniform(vec: &Vec3<f32>, location: GLint) {
        gl::Uniform3f(location, vec.x, vec.y, vec.z);
    }

    unsafe fn set_uniform_slice(slice: &[Vec3<f32>], location: GLint) {
        gl::Uniform3fv(location, slice.len() as GLsizei, slice.as_ptr() as *const GLfloat);
    }
}

impl UniformValue for Vec4<f32> {
    const KIND: GLenum = gl::FLOAT_VEC4;

    unsafe fn set_uniform(vec: &Vec4<f32>, location: GLint) {
        gl::Uniform4f(location, vec.x, vec.y, vec.z, vec.w);
    }

    unsafe fn set_uniform_slice(slice: &[Vec4<f32>], location: GLint) {
        gl::Uniform4fv(location, slice.len() as GLsizei, slice.as_ptr() as *const GLfloat);
    }
}

// Matrices are column major, so they never need to be transposed
impl UniformValue for Mat3<f32> {
    const KIND: GLenum = gl::FLOAT_MAT3;

    unsafe fn set_uniform(mat: &Mat3<f32>, location: GLint) {
        gl::UniformMatrix3fv(location, 1, gl::FALSE, mat.as_ptr());
    }

    unsafe fn set_uniform_slice(slice: &[Mat3<f32>], location: GLint) {
        gl::UniformMatrix3fv(location, slice.len() as GLsizei, gl::FALSE, slice.as_ptr() as *const GLfloat);
    }
}

impl UniformValue for Mat4<f32> {
    const KIND: GLenum = gl::FLOAT_MAT4;

    unsafe fn set_uniform(mat: &Mat4<f32>, location: GLint) {
        gl::UniformMatrix4fv(location, 1, gl::FALSE, mat.as_ptr());
    }

    unsafe fn set_uniform_slice(slice: &[Mat4<f32>], location: GLint) {
        gl::UniformMatrix4fv(location, slice.len() as GLsizei, gl::FALSE, slice.as_ptr() as *const GLfloat);
    }
}

impl UniformValue for f32 {
    const KIND: GLenum = gl::FLOAT;

    unsafe fn set_uniform(value: &f32, location: GLint) {
        gl::Uniform1f(location, *value);
    }

    unsafe fn set_uniform_slice(slice: &[f32], location: GLint) {
        gl::Uniform1fv(location, slice.len() as GLsizei, slice.as_ptr());
    }
}

impl UniformValue for i32 {
    const KIND: GLenum = gl::INT;

    unsafe fn set_uniform(value: &i32, location: GLint) {
        gl::Uniform1i(location, *value);
    }

    unsafe fn set_uniform_slice(slice: &[i32], location: GLint) {
        gl::Uniform1iv(location, slice.len() as GLsizei, slice.as_ptr());
    }

    // Samplers are set to the index of a texture unit
    fn accepts(kind: GLenum) -> bool {
        kind == gl::INT || kind == gl::SAMPLER_2D
    }
}

impl UniformValue for bool {
    const KIND: GLenum = gl::BOOL;

    unsafe fn set_uniform(value: &bool, location: GLint) {
        gl::Uniform1i(location, *value as GLint);
    }

    unsafe fn set_uniform_slice(slice: &[bool], location: GLint) {
        let values = slice.iter().map(|&b| b as GLint).collect::<Vec<_>>();
        gl::Uniform1iv(location, values.len() as GLsizei, values.as_ptr());
    }
}
