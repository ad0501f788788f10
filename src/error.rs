use crate::Real;

/// Errors raised while converting an armature into a mesh.
///
/// Conversion never partially commits: any of these aborts the whole
/// assembly and no buffers are returned.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("bone {0:?}: head and tail are coincident")]
    ZeroLengthBone(String),
    #[error("bone {bone:?}: {axis} axis is not unit length: ‖v‖ = {norm}")]
    AxisNotUnit {
        bone: String,
        axis: &'static str,
        norm: Real,
    },
    #[error("bone {bone:?}: {pair} are not orthogonal: v·w = {dot}")]
    AxesNotOrthogonal {
        bone: String,
        pair: &'static str,
        dot: Real,
    },
    #[error("armature {0:?} has no deforming bones")]
    NoDeformingBones(String),
}

impl Error {
    /// The name of the bone this error concerns, if any.
    pub fn bone(&self) -> Option<&str> {
        match self {
            Self::ZeroLengthBone(bone)
            | Self::AxisNotUnit { bone, .. }
            | Self::AxesNotOrthogonal { bone, .. } => Some(bone),
            Self::NoDeformingBones(_) => None,
        }
    }
}
