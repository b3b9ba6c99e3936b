//! Errors raised by scene graph mutation and frame composition.
//!
//! Numeric problems (NaN from a zero-length axis, a degenerate projection) are
//! never reported here: the math layer stays unchecked on the per-frame path.
//! What ends up in [`SceneError`] are programming errors against the hierarchy
//! and the reasons a frame has to be dropped as a whole.

use crate::data_structures::scene_graph::NodeId;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SceneError {
    /// The id was never issued by this graph or its node has been removed.
    #[error("node {0} does not exist in this scene graph")]
    UnknownNode(NodeId),

    /// Attaching would make a node its own ancestor.
    #[error("attaching {child} under {parent} would create a cycle")]
    Cycle { parent: NodeId, child: NodeId },

    /// A node has exactly one owner; it must be detached before it moves.
    #[error("{child} is already attached to {parent}")]
    AlreadyAttached { parent: NodeId, child: NodeId },

    #[error("{child} is not a child of {parent}")]
    NotAChild { parent: NodeId, child: NodeId },

    /// The camera node's world transform has no inverse, so no view matrix exists.
    #[error("camera node {0} has a singular world transform")]
    SingularView(NodeId),
}
