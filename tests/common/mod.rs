#![allow(dead_code)]

use ossify::{Bone, Real, WorldPoint, WorldVector};
use quickcheck::{Arbitrary, Gen};

/// A [Bone] satisfying the axis invariants, for property tests.
#[derive(Debug, Clone)]
pub struct ValidBone(pub Bone);

fn real_in(g: &mut Gen, lo: Real, hi: Real) -> Real {
    let t = u32::arbitrary(g) as Real / u32::MAX as Real;
    lo + t * (hi - lo)
}

/// An arbitrary point on the unit sphere.
fn unit_vector(g: &mut Gen) -> WorldVector {
    let theta = real_in(g, 0.0, std::f64::consts::PI);
    let phi = real_in(g, 0.0, std::f64::consts::TAU);
    WorldVector::new(
        theta.sin() * phi.cos(),
        theta.sin() * phi.sin(),
        theta.cos(),
    )
}

/// An orthonormal (x, z) pair perpendicular to `y`, at an arbitrary
/// rotation about `y`.
pub fn frame_for(g: &mut Gen, y: &WorldVector) -> (WorldVector, WorldVector) {
    // any helper axis not parallel to y
    let helper = if y.x.abs() < 0.9 {
        WorldVector::x()
    } else {
        WorldVector::z()
    };
    let x = y.cross(&helper).normalize();
    let z = x.cross(y);
    let spin = nalgebra::Rotation3::from_axis_angle(
        &nalgebra::Unit::new_normalize(*y),
        real_in(g, 0.0, std::f64::consts::TAU),
    );
    (spin * x, spin * z)
}

impl Arbitrary for ValidBone {
    fn arbitrary(g: &mut Gen) -> Self {
        let head = WorldPoint::new(
            real_in(g, -10.0, 10.0),
            real_in(g, -10.0, 10.0),
            real_in(g, -10.0, 10.0),
        );
        let dir = unit_vector(g);
        let length = real_in(g, 0.1, 10.0);
        let (x_axis, z_axis) = frame_for(g, &dir);
        ValidBone(Bone {
            name: format!("bone_{:04x}", u16::arbitrary(g)),
            head,
            tail: head + dir * length,
            x_axis,
            z_axis,
            roll: real_in(g, -std::f64::consts::TAU, std::f64::consts::TAU),
            deform: true,
        })
    }
}

/// A straight chain of `n` deforming bones stacked along +Z.
pub fn chain(n: usize) -> Vec<Bone> {
    (0..n)
        .map(|i| Bone {
            name: format!("bone.{i:03}"),
            head: WorldPoint::new(0.0, 0.0, i as Real),
            tail: WorldPoint::new(0.0, 0.0, i as Real + 1.0),
            x_axis: WorldVector::x(),
            z_axis: WorldVector::y(),
            roll: 0.0,
            deform: true,
        })
        .collect()
}
