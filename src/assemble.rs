//! Armature walking and buffer aggregation.
//!
//! One conversion is a single synchronous pass: deforming bones are
//! visited in armature order, each bone's octahedron is appended to the
//! global buffers at an offset equal to the running vertex count, and one
//! weight group is recorded per bone. Since every bone contributes exactly
//! [VERTS_PER_BONE](crate::VERTS_PER_BONE) vertices, the offset of bone
//! `i` is always `6 * i`;
//! a concurrent adaptation could assign offsets up front and build bones
//! independently.

use crate::{
    bone_octahedron, error::Error, Armature, MeshBuffer, SkinBinding, VertexIndex, WeightGroup,
};

/// What [assemble_with] should do when no bones qualify for conversion.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum EmptyPolicy {
    /// Succeed with empty buffers; the caller decides whether that is an
    /// error. The default.
    #[default]
    EmptyMesh,
    /// Fail with [Error::NoDeformingBones].
    Error,
}

/// A complete conversion result: the mesh data the host should persist as
/// a new mesh object, and the deformer it should attach to it.
#[derive(Debug, Clone, PartialEq)]
pub struct Assembly {
    /// Suggested name for the mesh object (`<armature>_mesh`).
    pub name: String,
    /// Assembled vertex/face buffers and weight groups.
    pub mesh: MeshBuffer,
    /// Deformer attachment request targeting the source armature.
    pub binding: SkinBinding,
}

/// Convert an armature snapshot into mesh data, treating an armature with
/// no deforming bones as a successful empty result.
///
/// See [assemble_with] for the full contract.
pub fn assemble(armature: &Armature) -> Result<Assembly, Error> {
    assemble_with(armature, EmptyPolicy::default())
}

/// Convert an armature snapshot into mesh data.
///
/// Bones with `deform == false` are skipped. Each remaining bone is
/// validated before any of its geometry is built; a malformed bone aborts
/// the whole conversion with an error naming it, and no partial buffers
/// escape. The conversion is deterministic: the same snapshot always
/// yields an identical [Assembly].
///
/// # Errors
/// * a deforming bone fails [Bone::validate](crate::Bone::validate)
/// * no bones deform and `empty` is [EmptyPolicy::Error]
pub fn assemble_with(armature: &Armature, empty: EmptyPolicy) -> Result<Assembly, Error> {
    #[cfg(feature = "tracing")]
    tracing::debug!(armature = %armature.name, "assembling armature mesh");

    let mut mesh = MeshBuffer::default();
    for bone in armature.deforming() {
        bone.validate()?;

        let base = mesh.vertices.len() as VertexIndex;
        #[cfg(feature = "tracing")]
        tracing::trace!(bone = %bone.name, base, "building bone octahedron");

        let (verts, faces) = bone_octahedron(
            bone.head,
            bone.tail,
            bone.x_axis,
            bone.z_axis,
            bone.roll,
            base,
        );
        mesh.vertices.extend_from_slice(&verts);
        mesh.faces.extend_from_slice(&faces);
        mesh.weight_groups.push(WeightGroup {
            bone: bone.name.clone(),
            weights: (base..mesh.vertices.len() as VertexIndex)
                .map(|i| (i, 1.0))
                .collect(),
        });
    }

    if mesh.is_empty() && empty == EmptyPolicy::Error {
        return Err(Error::NoDeformingBones(armature.name.clone()));
    }

    Ok(Assembly {
        name: armature.mesh_name(),
        mesh,
        binding: SkinBinding::vertex_groups(armature.name.clone()),
    })
}
