// ── Sensor tree traversal ──
//
// One descent, several outputs. `walk` visits nodes depth-first in
// Group -> ProbeNode -> Device -> Sensor order and hands each node's
// children results back to the visitor on the way up, so both the
// flattener (postorder) and the pretty printer (preorder) share it.

mod flatten;
mod node;
mod render;

pub use flatten::{FlatSensor, flatten};
pub use node::{NodeKind, NodeRef};
pub use render::render;

use crate::model::SensorTree;

/// Callbacks for [`walk`].
pub trait Visitor<'a> {
    type Output;

    /// Called before the node's children are walked.
    fn enter(&mut self, _node: NodeRef<'a>, _depth: usize) {}

    /// Called after all children are walked, with their results in order.
    fn leave(
        &mut self,
        node: NodeRef<'a>,
        depth: usize,
        children: Vec<Self::Output>,
    ) -> Self::Output;
}

/// Walk `node` and everything below it.
///
/// The root is a container, not a level: its children are walked at the
/// root's own depth. Every other node walks its children at `depth + 1`.
pub fn walk<'a, V: Visitor<'a>>(node: NodeRef<'a>, depth: usize, visitor: &mut V) -> V::Output {
    visitor.enter(node, depth);
    let child_depth = match node {
        NodeRef::Root(_) => depth,
        _ => depth + 1,
    };
    let children = node
        .children()
        .into_iter()
        .map(|child| walk(child, child_depth, visitor))
        .collect();
    visitor.leave(node, depth, children)
}

struct SensorCounter;

impl<'a> Visitor<'a> for SensorCounter {
    type Output = usize;

    fn leave(&mut self, node: NodeRef<'a>, _depth: usize, children: Vec<usize>) -> usize {
        match node {
            NodeRef::Sensor(_) => 1,
            _ => children.into_iter().sum(),
        }
    }
}

impl SensorTree {
    /// Number of sensors reachable from the root.
    pub fn sensor_count(&self) -> usize {
        walk(self.as_node(), 0, &mut SensorCounter)
    }

    /// The tree root as a traversal node.
    pub fn as_node(&self) -> NodeRef<'_> {
        NodeRef::Root(self)
    }
}
