//! Conversion of skeletal armatures into renderable, skinnable meshes: one
//! octahedral solid per deforming bone, aggregated into a single vertex/face
//! buffer with per-bone weight groups and a deform-binding request.
#![cfg_attr(not(debug_assertions), warn(missing_docs))]

pub mod error;

mod armature;
mod assemble;
mod mesh;
mod octahedron;

pub use armature::*;
pub use assemble::*;
pub use mesh::*;
pub use octahedron::*;

use nalgebra::{Point3, Vector3};

/// Scalar type used for all geometry.
pub type Real = f64;

/// A point in an armature's local (bind pose) space.
pub type WorldPoint = Point3<Real>;

/// A vector in an armature's local (bind pose) space.
pub type WorldVector = Vector3<Real>;

/// Index type of vertices within an assembled mesh buffer.
pub type VertexIndex = u32;
