
use std::marker::PhantomData;
use std::mem::size_of;

use gl;
use gl::types::*;

use super::*;

/// Vertices stored on the GPU once and drawn every frame. This is what display lists used to be.
///
/// ```rust,ignore
/// let cube = VertexBuffer::with_data(PrimitiveMode::Triangles, &shapes::color_cube(50.0));
///
/// pipeline.bind(&stack);
/// cube.draw();
/// ```
pub struct VertexBuffer<T: Vertex> {
    phantom: PhantomData<T>,
    vertex_count: usize,
    primitive_mode: PrimitiveMode,

    vbo: GLuint,
    vao: GLuint,
}

impl<T: Vertex> VertexBuffer<T> {
    /// Uploads the given vertices into a new buffer.
    pub fn with_data(primitive_mode: PrimitiveMode, vertices: &[T]) -> VertexBuffer<T> {
        let mut vbo = 0;
        let mut vao = 0;

        unsafe {
            gl::GenVertexArrays(1, &mut vao);
            gl::GenBuffers(1, &mut vbo);

            gl::BindVertexArray(vao);
            gl::BindBuffer(gl::ARRAY_BUFFER, vbo);
            gl::BufferData(
                gl::ARRAY_BUFFER,
                (vertices.len() * size_of::<T>()) as GLsizeiptr,
                vertices.as_ptr() as *const GLvoid,
                gl::STATIC_DRAW,
            );
            T::setup_attrib_pointers();
            gl::BindVertexArray(0);
        }

        VertexBuffer {
            phantom: PhantomData,
            vertex_count: vertices.len(),
            primitive_mode,
            vbo,
            vao,
        }
    }

    /// Replaces all vertices in this buffer. Meant for geometry which changes every frame.
    pub fn set_data(&mut self, vertices: &[T]) {
        unsafe {
            gl::BindBuffer(gl::ARRAY_BUFFER, self.vbo);
            gl::BufferData(
                gl::ARRAY_BUFFER,
                (vertices.len() * size_of::<T>()) as GLsizeiptr,
                vertices.as_ptr() as *const GLvoid,
                gl::DYNAMIC_DRAW,
            );
        }
        self.vertex_count = vertices.len();
    }

    pub fn len(&self) -> usize {
        self.vertex_count
    }

    pub fn is_empty(&self) -> bool {
        self.vertex_count == 0
    }

    pub fn draw(&self) {
        if self.vertex_count == 0 {
            return;
        }

        unsafe {
            gl::BindVertexArray(self.vao);
            gl::DrawArrays(self.primitive_mode as GLenum, 0, self.vertex_count as GLsizei);
        }
    }
}

impl<T: Vertex> Drop for VertexBuffer<T> {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteBuffers(1, &self.vbo);
            gl::DeleteVertexArrays(1, &self.vao);
        }
    }
}
