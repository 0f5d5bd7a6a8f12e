//! Small linear algebra library for a free-look camera.
//!
//! Provides float-generic 2-, 3- and 4-component vectors, row-major 3x3 and
//! 4x4 matrices with the transforms needed to build view and projection
//! matrices, and a [`FreeLookCamera`](camera::FreeLookCamera) composing them.

#![warn(missing_debug_implementations)]
#![warn(rust_2018_idioms)]
#![warn(clippy::cast_lossless)]

#[macro_use]
mod macros;

pub mod angle;
pub mod camera;
pub mod io;
pub mod matrix;
pub mod num;
pub mod vector;

pub use angle::{Angle, Degrees, Radians};
pub use camera::{FreeLookCamera, FreeLookConfig};
pub use matrix::{Matrix3x3, Matrix4x4};
pub use num::Float;
pub use vector::{DVec2, DVec3, DVec4, Vec2, Vec3, Vec4, Vector2, Vector3, Vector4};
