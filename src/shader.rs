
//! Compiling, linking and feeding glsl programs

mod uniform;

pub use self::uniform::*;

use std::ffi::CString;
use std::ptr;

use gl;
use gl::types::*;
use log::{debug, warn};

use crate::error::{Error, Result};

/// Compiles a single shader stage. On failure the info log is returned in `Error::Shader`.
pub fn compile(source: &str, shader_type: GLenum) -> Result<GLuint> {
    let c_str = CString::new(source.as_bytes())
        .map_err(|_| Error::Shader(String::from("Shader source contains a null byte")))?;

    unsafe {
        let shader = gl::CreateShader(shader_type);
        gl::ShaderSource(shader, 1, &c_str.as_ptr(), ptr::null());
        gl::CompileShader(shader);

        let mut status = gl::FALSE as GLint;
        gl::GetShaderiv(shader, gl::COMPILE_STATUS, &mut status);

        if status != (gl::TRUE as GLint) {
            let mut log_len = 0;
            gl::GetShaderiv(shader, gl::INFO_LOG_LENGTH, &mut log_len);

            let mut buffer = vec![0u8; log_len.max(1) as usize];
            gl::GetShaderInfoLog(shader, log_len, ptr::null_mut(), buffer.as_mut_ptr() as *mut GLchar);
            gl::DeleteShader(shader);

            Err(Error::Shader(info_log(buffer)))
        } else {
            Ok(shader)
        }
    }
}

// Skips the null terminator
fn info_log(mut buffer: Vec<u8>) -> String {
    if let Some(end) = buffer.iter().position(|&b| b == 0) {
        buffer.truncate(end);
    }
    String::from_utf8_lossy(&buffer).into_owned()
}

/// A linked vertex + fragment program
pub struct Shader {
    program: GLuint,
    vertex_shader: GLuint,
    fragment_shader: GLuint,
    uniforms: Vec<UniformBinding>,
}

impl Shader {
    /// Constructs a glsl program from source.
    pub fn new(vertex_source: &str, fragment_source: &str) -> Result<Shader> {
        let vertex_shader = compile(vertex_source, gl::VERTEX_SHADER)?;
        let fragment_shader = match compile(fragment_source, gl::FRAGMENT_SHADER) {
            Ok(shader) => shader,
            Err(err) => {
                unsafe { gl::DeleteShader(vertex_shader) };
                return Err(err);
            },
        };

        let program = unsafe {
            let program = gl::CreateProgram();
            gl::AttachShader(program, vertex_shader);
            gl::AttachShader(program, fragment_shader);
            gl::LinkProgram(program);

            let mut status = gl::FALSE as GLint;
            gl::GetProgramiv(program, gl::LINK_STATUS, &mut status);
            if status != (gl::TRUE as GLint) {
                let mut log_len = 0;
                gl::GetProgramiv(program, gl::INFO_LOG_LENGTH, &mut log_len);

                let mut buffer = vec![0u8; log_len.max(1) as usize];
                gl::GetProgramInfoLog(program, log_len, ptr::null_mut(), buffer.as_mut_ptr() as *mut GLchar);

                gl::DeleteProgram(program);
                gl::DeleteShader(vertex_shader);
                gl::DeleteShader(fragment_shader);

                return Err(Error::Link(info_log(buffer)));
            }

            program
        };

        let uniforms = unsafe { active_uniforms(program) };
        debug!("Linked program {} with {} uniforms", program, uniforms.len());

        Ok(Shader { program, vertex_shader, fragment_shader, uniforms })
    }

    /// Binds this shader, replacing the previously bound shader. Subsequent draw calls
    /// will use this shader.
    pub fn bind(&self) {
        unsafe {
            gl::UseProgram(self.program);
        }
    }

    /// Looks up the active uniform with the given name. Uniforms which are declared but never
    /// used are removed by the glsl compiler, and are thus not found.
    pub fn uniform(&self, name: &str) -> Option<&UniformBinding> {
        self.uniforms.iter().find(|u| u.name == name)
    }

    /// Sets the uniform with the given name. The shader has to be bound. Setting a uniform which
    /// does not exist does nothing, and setting a uniform to a value of the wrong type logs a
    /// warning.
    pub fn set_uniform<T: UniformValue>(&self, name: &str, value: T) {
        if let Some(binding) = self.uniform(name) {
            if T::accepts(binding.kind) {
                unsafe { T::set_uniform(&value, binding.location) };
            } else {
                warn!("Uniform {} has type {:#x}, which can not be set from a {:#x}", name, binding.kind, T::KIND);
            }
        }
    }

    /// Sets an array uniform, starting at its first element
    pub fn set_uniform_slice<T: UniformValue>(&self, name: &str, values: &[T]) {
        if let Some(binding) = self.uniform(name) {
            if T::accepts(binding.kind) {
                unsafe { T::set_uniform_slice(values, binding.location) };
            } else {
                warn!("Uniform {} has type {:#x}, which can not be set from a {:#x}", name, binding.kind, T::KIND);
            }
        }
    }
}

unsafe fn active_uniforms(program: GLuint) -> Vec<UniformBinding> {
    let mut count = 0;
    gl::GetProgramiv(program, gl::ACTIVE_UNIFORMS, &mut count);

    let mut max_name_len = 0;
    gl::GetProgramiv(program, gl::ACTIVE_UNIFORM_MAX_LENGTH, &mut max_name_len);

    let mut uniforms = Vec::with_capacity(count as usize);
    for index in 0..count.max(0) as GLuint {
        let mut buffer = vec![0u8; max_name_len.max(1) as usize];
        let mut len = 0;
        let mut size = 0;
        let mut kind = 0;
        gl::GetActiveUniform(
            program, index,
            max_name_len, &mut len,
            &mut size, &mut kind,
            buffer.as_mut_ptr() as *mut GLchar,
        );
        buffer.truncate(len.max(0) as usize);

        let mut name = String::from_utf8_lossy(&buffer).into_owned();
        // Arrays are reported as "name[0]"
        if name.ends_with("[0]") {
            let new_len = name.len() - 3;
            name.truncate(new_len);
        }

        let c_name = match CString::new(name.clone()) {
            Ok(c_name) => c_name,
            Err(_) => continue,
        };
        let location = gl::GetUniformLocation(program, c_name.as_ptr());

        uniforms.push(UniformBinding { name, location, kind });
    }

    uniforms
}

impl Drop for Shader {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteProgram(self.program);
            gl::DeleteShader(self.vertex_shader);
            gl::DeleteShader(self.fragment_shader);
        }
    }
}
