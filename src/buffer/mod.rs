
//! Utilities for storing and drawing vertex data in GPU buffers.

mod primitives;
mod vertex_buffer;

pub use self::primitives::*;
pub use self::vertex_buffer::*;
