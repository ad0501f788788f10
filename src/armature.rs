//! Input snapshot types: bones and the armatures that own them.
//!
//! An [Armature] is a value-typed snapshot taken by the host in the
//! armature's local bind pose; conversion never reads ambient state and
//! never mutates the snapshot.

use crate::{error::Error, Real, WorldPoint, WorldVector};

/// Tolerance for the orthonormality checks in [Bone::validate].
pub const AXIS_TOLERANCE: Real = 1.0e-6;

/// A rigid skeleton segment.
///
/// `x_axis` and `z_axis` are the bone's local axes: unit length, mutually
/// orthogonal, and both perpendicular to `tail - head`. [Bone::validate]
/// checks those invariants; the geometry builder assumes them.
#[derive(Debug, Clone, PartialEq)]
pub struct Bone {
    /// Name, unique within the owning armature.
    pub name: String,
    /// Start point of the bone.
    pub head: WorldPoint,
    /// End point of the bone. Must differ from `head`.
    pub tail: WorldPoint,
    /// Local X axis.
    pub x_axis: WorldVector,
    /// Local Z axis.
    pub z_axis: WorldVector,
    /// Rotation about the bone's own length axis, in radians.
    pub roll: Real,
    /// Whether this bone influences skin weights.
    pub deform: bool,
}

impl Bone {
    /// The vector from head to tail.
    #[inline]
    pub fn direction(&self) -> WorldVector {
        self.tail - self.head
    }

    /// The distance from head to tail.
    #[inline]
    pub fn length(&self) -> Real {
        self.direction().norm()
    }

    /// Check the axis invariants: `head ≠ tail`, both axes unit length,
    /// axes orthogonal to each other and to the bone direction.
    pub fn validate(&self) -> Result<(), Error> {
        let dir = self.direction();
        if dir.norm() <= AXIS_TOLERANCE {
            return Err(Error::ZeroLengthBone(self.name.clone()));
        }
        for (axis, v) in [("x", &self.x_axis), ("z", &self.z_axis)] {
            let norm = v.norm();
            if (norm - 1.0).abs() > AXIS_TOLERANCE {
                return Err(Error::AxisNotUnit {
                    bone: self.name.clone(),
                    axis,
                    norm,
                });
            }
        }
        let y = dir.normalize();
        for (pair, dot) in [
            ("x and z axes", self.x_axis.dot(&self.z_axis)),
            ("x axis and bone direction", self.x_axis.dot(&y)),
            ("z axis and bone direction", self.z_axis.dot(&y)),
        ] {
            if dot.abs() > AXIS_TOLERANCE {
                return Err(Error::AxesNotOrthogonal {
                    bone: self.name.clone(),
                    pair,
                    dot,
                });
            }
        }
        Ok(())
    }
}

/// A skeleton: an ordered set of bones.
///
/// Bone order is preserved throughout conversion, so two assemblies of the
/// same snapshot produce identical buffers.
#[derive(Debug, Clone, PartialEq)]
pub struct Armature {
    /// Name of the armature object.
    pub name: String,
    /// Bones in armature-defined order.
    pub bones: Vec<Bone>,
}

impl Armature {
    /// Iterate over the bones flagged to deform, in armature order.
    pub fn deforming(&self) -> impl Iterator<Item = &Bone> {
        self.bones.iter().filter(|b| b.deform)
    }

    /// Default name for the mesh generated from this armature.
    pub fn mesh_name(&self) -> String {
        format!("{}_mesh", self.name)
    }
}
