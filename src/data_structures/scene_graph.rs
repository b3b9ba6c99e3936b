//! Scene graph and hierarchical scene organization.
//!
//! Nodes live in a [`SceneGraph`] arena and are addressed by [`NodeId`]
//! handles. Every node owns its children (an ordered list of ids) and keeps a
//! non-owning back-reference to its parent, which is only used to walk upwards
//! when a world transform is requested.
//!
//! The graph never caches world transforms: [`SceneGraph::world_transform`]
//! and [`SceneGraph::walk`] recompute them from the local model matrices every
//! time, so changing any ancestor is visible on the next query without an
//! invalidation step.

use std::{fmt, num::NonZeroU32};

use cgmath::Matrix4;
use log::debug;

use crate::{error::SceneError, math};

/// Handle to a node in a [`SceneGraph`].
///
/// Slots are reused after removal; the generation tells a stale handle apart
/// from the node that took its slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId {
    index: u32,
    generation: NonZeroU32,
}

impl NodeId {
    #[inline]
    pub fn index(&self) -> u32 {
        self.index
    }

    #[inline]
    pub fn generation(&self) -> u32 {
        self.generation.get()
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}v{}", self.index, self.generation)
    }
}

/// A named entity with a local transform.
///
/// `model_matrix` is relative to the parent. `has_mesh` marks the node as
/// something the frame composer emits uniforms for; a node may have a mesh and
/// children at the same time.
#[derive(Debug, Clone)]
pub struct Node {
    name: String,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    model_matrix: Matrix4<f32>,
    has_mesh: bool,
}

impl Node {
    fn new(name: String) -> Self {
        Self {
            name,
            parent: None,
            children: Vec::new(),
            model_matrix: math::identity(),
            has_mesh: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Children in insertion order, which is also draw order.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn model_matrix(&self) -> Matrix4<f32> {
        self.model_matrix
    }

    pub fn has_mesh(&self) -> bool {
        self.has_mesh
    }
}

#[derive(Debug)]
struct Slot {
    generation: NonZeroU32,
    node: Option<Node>,
}

/// Owning store for all nodes of a scene.
///
/// A freshly created node is a root: it has no parent until it is attached.
/// Detaching a node turns it (and its subtree) back into a root that stays in
/// the graph until it is re-attached or explicitly [`removed`](Self::remove).
#[derive(Debug, Default)]
pub struct SceneGraph {
    slots: Vec<Slot>,
    free_list: Vec<u32>,
}

impl SceneGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a detached node with an identity transform and no mesh.
    pub fn create(&mut self, name: impl Into<String>) -> NodeId {
        let node = Node::new(name.into());
        if let Some(index) = self.free_list.pop() {
            let slot = &mut self.slots[index as usize];
            slot.node = Some(node);
            NodeId {
                index,
                generation: slot.generation,
            }
        } else {
            let index = self.slots.len() as u32;
            let generation = NonZeroU32::MIN;
            self.slots.push(Slot {
                generation,
                node: Some(node),
            });
            NodeId { index, generation }
        }
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.get(id).is_some()
    }

    /// Number of live nodes, attached or not.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.node.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn node(&self, id: NodeId) -> Result<&Node, SceneError> {
        self.get(id).ok_or(SceneError::UnknownNode(id))
    }

    /// All nodes without a parent, in slot order.
    pub fn roots(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.slots.iter().enumerate().filter_map(|(index, slot)| {
            slot.node
                .as_ref()
                .filter(|node| node.parent.is_none())
                .map(|_| NodeId {
                    index: index as u32,
                    generation: slot.generation,
                })
        })
    }

    /// Appends `child` to the end of `parent`'s children.
    ///
    /// Fails if either node is unknown, if `child` already has a parent, or if
    /// `child` is `parent` itself or one of its ancestors.
    pub fn attach(&mut self, parent: NodeId, child: NodeId) -> Result<(), SceneError> {
        self.node(parent)?;
        let current = self.node(child)?.parent;
        if child == parent || self.is_ancestor(child, parent) {
            return Err(SceneError::Cycle { parent, child });
        }
        if let Some(owner) = current {
            return Err(SceneError::AlreadyAttached {
                parent: owner,
                child,
            });
        }

        self.get_mut(parent)
            .ok_or(SceneError::UnknownNode(parent))?
            .children
            .push(child);
        self.get_mut(child)
            .ok_or(SceneError::UnknownNode(child))?
            .parent = Some(parent);
        debug!("attached {} under {}", self.label(child), self.label(parent));
        Ok(())
    }

    /// Removes `child` from `parent`'s children and clears its parent.
    ///
    /// The subtree below `child` is left intact and becomes a root of its own;
    /// the caller decides whether to re-attach or [`remove`](Self::remove) it.
    pub fn detach(&mut self, parent: NodeId, child: NodeId) -> Result<(), SceneError> {
        self.node(child)?;
        let siblings = &mut self
            .get_mut(parent)
            .ok_or(SceneError::UnknownNode(parent))?
            .children;
        let position = siblings
            .iter()
            .position(|&id| id == child)
            .ok_or(SceneError::NotAChild { parent, child })?;
        siblings.remove(position);

        self.get_mut(child)
            .ok_or(SceneError::UnknownNode(child))?
            .parent = None;
        debug!("detached {} from {}", self.label(child), self.label(parent));
        Ok(())
    }

    /// Destroys `id` and its whole subtree, detaching it from its parent first.
    ///
    /// Returns the number of nodes freed.
    pub fn remove(&mut self, id: NodeId) -> Result<usize, SceneError> {
        if let Some(parent) = self.node(id)?.parent {
            self.detach(parent, id)?;
        }
        let doomed: Vec<NodeId> = self.depth_first(id).collect();
        for &node in &doomed {
            let slot = &mut self.slots[node.index as usize];
            slot.node = None;
            match slot.generation.checked_add(1) {
                Some(generation) => {
                    slot.generation = generation;
                    self.free_list.push(node.index);
                }
                // generations exhausted: the slot is never handed out again
                None => debug!("retiring slot {}", node.index),
            }
        }
        debug!("removed subtree {} ({} nodes)", id, doomed.len());
        Ok(doomed.len())
    }

    pub fn model_matrix(&self, id: NodeId) -> Result<Matrix4<f32>, SceneError> {
        Ok(self.node(id)?.model_matrix)
    }

    pub fn set_model_matrix(&mut self, id: NodeId, matrix: Matrix4<f32>) -> Result<(), SceneError> {
        self.update_model_matrix(id, |local| *local = matrix)
    }

    /// Mutates the local transform of `id` in place.
    pub fn update_model_matrix(
        &mut self,
        id: NodeId,
        mutation: impl FnOnce(&mut Matrix4<f32>),
    ) -> Result<(), SceneError> {
        let node = self.get_mut(id).ok_or(SceneError::UnknownNode(id))?;
        mutation(&mut node.model_matrix);
        Ok(())
    }

    pub fn set_has_mesh(&mut self, id: NodeId, has_mesh: bool) -> Result<(), SceneError> {
        self.get_mut(id).ok_or(SceneError::UnknownNode(id))?.has_mesh = has_mesh;
        Ok(())
    }

    /// Whether `ancestor` appears on the parent chain of `node`.
    ///
    /// A node is not its own ancestor. Unknown ids are never ancestors.
    pub fn is_ancestor(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = self.get(node).and_then(Node::parent);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.get(id).and_then(Node::parent);
        }
        false
    }

    /// Composes the local transforms from the root down to `id`.
    ///
    /// The root's transform ends up leftmost, so ancestors are applied
    /// outside their descendants: `T_root * ... * T_parent * T_id`.
    pub fn world_transform(&self, id: NodeId) -> Result<Matrix4<f32>, SceneError> {
        let mut chain = vec![self.node(id)?.model_matrix];
        let mut current = self.node(id)?.parent;
        while let Some(parent) = current {
            let node = self.node(parent)?;
            chain.push(node.model_matrix);
            current = node.parent;
        }
        Ok(chain
            .into_iter()
            .rev()
            .fold(math::identity(), |world, local| world * local))
    }

    /// First node named `name` in depth-first order below (and including) `root`.
    pub fn find(&self, root: NodeId, name: &str) -> Option<NodeId> {
        self.depth_first(root)
            .find(|&id| self.get(id).is_some_and(|node| node.name == name))
    }

    /// Depth-first pre-order ids starting at `root`, children in insertion order.
    pub fn depth_first(&self, root: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.walk(root).map(|(id, _)| id)
    }

    /// Depth-first pre-order traversal that also yields each node's world
    /// transform, accumulated top-down from `root`.
    ///
    /// The accumulation is seeded with `root`'s full world transform, so a
    /// subtree below a moved ancestor reports the same matrices as
    /// [`world_transform`](Self::world_transform).
    pub fn walk(&self, root: NodeId) -> Walk<'_> {
        let stack = self
            .world_transform(root)
            .map(|world| vec![(root, world)])
            .unwrap_or_default();
        Walk { graph: self, stack }
    }

    fn get(&self, id: NodeId) -> Option<&Node> {
        self.slots
            .get(id.index as usize)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.node.as_ref())
    }

    fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.slots
            .get_mut(id.index as usize)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.node.as_mut())
    }

    fn label(&self, id: NodeId) -> String {
        match self.get(id) {
            Some(node) => format!("'{}' {}", node.name, id),
            None => id.to_string(),
        }
    }
}

/// Iterator returned by [`SceneGraph::walk`].
pub struct Walk<'a> {
    graph: &'a SceneGraph,
    stack: Vec<(NodeId, Matrix4<f32>)>,
}

impl Iterator for Walk<'_> {
    type Item = (NodeId, Matrix4<f32>);

    fn next(&mut self) -> Option<Self::Item> {
        let (id, world) = self.stack.pop()?;
        if let Some(node) = self.graph.get(id) {
            // reversed so the first child is popped first
            for &child in node.children.iter().rev() {
                if let Some(child_node) = self.graph.get(child) {
                    self.stack.push((child, world * child_node.model_matrix));
                }
            }
        }
        Some((id, world))
    }
}
