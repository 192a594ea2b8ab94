
//! Small 3D math library: vectors, column major matrices, the geometric helpers needed for
//! planar shadows and an orthonormal frame for cameras and actors.

#[cfg(feature = "serialize")]
extern crate serde;

pub mod traits;
pub mod vec;
pub mod mat;
pub mod angle;
pub mod geometry;
pub mod frame;
#[cfg(feature = "serialize")]
mod serialize;

pub use crate::traits::*;
pub use crate::vec::*;
pub use crate::mat::*;
pub use crate::angle::*;
pub use crate::geometry::*;
pub use crate::frame::Frame;
