//! Output buffer types: the assembled mesh and its skin binding.

use crate::{Real, VertexIndex, WorldPoint};

/// A named set of `(vertex, weight)` pairs binding mesh vertices to one
/// bone for pose-driven deformation.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightGroup {
    /// Name of the bone this group binds to.
    pub bone: String,
    /// Weighted vertex indices; always a contiguous run with weight 1.0.
    pub weights: Vec<(VertexIndex, Real)>,
}

/// Mesh data assembled from an armature: global vertex and triangle
/// buffers plus one weight group per deforming bone.
///
/// Weight groups are kept in bone order, and their index ranges are
/// contiguous, disjoint, and together cover `0..vertices.len()`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshBuffer {
    /// Vertex positions, concatenated across bones.
    pub vertices: Vec<WorldPoint>,
    /// Triangles as global vertex indices.
    pub faces: Vec<[VertexIndex; 3]>,
    /// Per-bone weight groups, in bone order.
    pub weight_groups: Vec<WeightGroup>,
}

impl MeshBuffer {
    /// Whether the buffer holds any geometry.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Look up a weight group by bone name.
    pub fn group(&self, bone: &str) -> Option<&WeightGroup> {
        self.weight_groups.iter().find(|g| g.bone == bone)
    }
}

/// A request to attach a skeletal deformer to the generated mesh.
///
/// Deformation is driven by the per-bone weight groups; envelope (implicit
/// volume) influence is always disabled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkinBinding {
    /// Name of the source armature the deformer should reference.
    pub armature: String,
    /// Drive deformation from the named weight groups.
    pub use_vertex_groups: bool,
    /// Drive deformation from bone envelopes. Never enabled here.
    pub use_envelopes: bool,
}

impl SkinBinding {
    /// The binding emitted for every conversion: vertex groups on,
    /// envelopes off.
    pub fn vertex_groups(armature: impl Into<String>) -> Self {
        Self {
            armature: armature.into(),
            use_vertex_groups: true,
            use_envelopes: false,
        }
    }
}
