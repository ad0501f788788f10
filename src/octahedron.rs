//! Per-bone geometry synthesis.
//!
//! Each deforming bone becomes a small octahedral solid: a sharp point at
//! head and tail, and a square "waist" of four equatorial vertices pulled
//! 10% of the way toward the tail, giving the familiar asymmetric diamond
//! silhouette of a bone visualization mesh.

use std::f64::consts::FRAC_PI_4;

use nalgebra::{Rotation3, Unit};

use crate::{Real, VertexIndex, WorldPoint, WorldVector};

/// Vertices emitted per bone.
pub const VERTS_PER_BONE: usize = 6;

/// Triangles emitted per bone.
pub const FACES_PER_BONE: usize = 8;

/// Waist radius as a fraction of bone length.
pub const RADIUS_RATIO: Real = 0.15;

/// How far the waist sits along the bone, as a fraction of its length.
pub const WAIST_RATIO: Real = 0.1;

/// Fixed angular offset added to a bone's roll, so the diamond's points
/// straddle the local X/Z axes instead of lying on them.
pub const ROLL_OFFSET: Real = FRAC_PI_4;

/// Build the octahedral solid for one bone.
///
/// Vertices are emitted in a fixed order: `[head, tail, X+, X-, Z+, Z-]`,
/// where the last four are the equatorial vertices after the waist
/// translation and the roll rotation (which pivots at `head` and never
/// moves the head or tail). Face indices are rebased by `base`, the number
/// of vertices already in the caller's buffer.
///
/// Callers guarantee `head ≠ tail` and an orthonormal `x_axis`/`z_axis`
/// pair perpendicular to `tail - head` (see [Bone::validate](crate::Bone::validate)).
pub fn bone_octahedron(
    head: WorldPoint,
    tail: WorldPoint,
    x_axis: WorldVector,
    z_axis: WorldVector,
    roll: Real,
    base: VertexIndex,
) -> ([WorldPoint; VERTS_PER_BONE], [[VertexIndex; 3]; FACES_PER_BONE]) {
    let dir = tail - head;
    let radius = dir.norm() * RADIUS_RATIO;

    let x = x_axis * radius;
    let z = z_axis * radius;

    let mut verts = [
        head,
        tail,
        head + x, // X+
        head - x, // X-
        head + z, // Z+
        head - z, // Z-
    ];

    let waist = dir * WAIST_RATIO;
    let rot = Rotation3::from_axis_angle(&Unit::new_normalize(dir), roll + ROLL_OFFSET);
    for v in &mut verts[2..] {
        *v = head + rot * (*v + waist - head);
    }

    let b = base;
    let faces = [
        [b, b + 2, b + 4], // head X+ Z+
        [b, b + 4, b + 3], // head Z+ X-
        [b, b + 3, b + 5], // head X- Z-
        [b, b + 5, b + 2], // head Z- X+
        [b + 1, b + 2, b + 4], // tail X+ Z+
        [b + 1, b + 4, b + 3], // tail Z+ X-
        [b + 1, b + 3, b + 5], // tail X- Z-
        [b + 1, b + 5, b + 2], // tail Z- X+
    ];

    (verts, faces)
}
