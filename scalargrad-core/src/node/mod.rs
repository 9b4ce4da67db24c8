//! # Node Module (`node`)
//!
//! Defines [`Node`], the scalar value handle at the heart of the computation graph.
//!
//! A `Node` is a cheap, clonable handle (`Rc<RefCell<NodeData>>`) to shared state.
//! Several downstream nodes may hold the same operand, so ownership is shared through
//! reference counting. Operands always exist before their consumers, which keeps the
//! graph acyclic and lets plain `Rc` drop it once unreachable.
//!
//! ## Structure:
//! - [`create`]: Leaf constructors and scalar coercion (`From<f64>`, [`Operand`]).
//! - [`accessors`]: Reading `value`/`grad`/`operands`, gradient mutation helpers.
//! - [`debug`]: `Display` and `Debug` implementations.
//! - [`traits`]: Operator overloading (`+ - * /`, unary `-`, `Pow`, `Sum`).
//! - [`autograd_methods`]: `backward`, `zero_grad` and the op methods (`tanh`, `exp`, ...).

use crate::autograd::BackwardOp;
use std::cell::RefCell;
use std::rc::Rc;

pub mod accessors;
pub mod autograd_methods;
pub mod create;
pub mod debug;
pub mod traits;

pub use create::Operand;

/// Stable identity of a node, derived from the address of its shared state.
///
/// Valid for as long as some `Node` handle to the same state is alive, which the
/// traversal engine guarantees by holding clones of every reachable node.
pub type NodeId = *const RefCell<NodeData>;

/// The shared state behind a [`Node`] handle.
#[derive(Debug)]
pub struct NodeData {
    /// Forward-computed value. Never changes after construction.
    pub(crate) value: f64,
    /// Accumulated gradient of the current backward terminal w.r.t. this node.
    pub(crate) grad: f64,
    /// Inputs that produced this node, in operand order. Empty for leaves.
    pub(crate) operands: Vec<Node>,
    /// Local derivative rule used during the backward pass.
    pub(crate) op: BackwardOp,
    /// Diagnostic label. No semantic effect.
    pub(crate) label: Option<String>,
}

// Long chains would otherwise be released through one nested drop per node.
impl Drop for NodeData {
    fn drop(&mut self) {
        let mut stack = std::mem::take(&mut self.operands);
        while let Some(node) = stack.pop() {
            if let Ok(cell) = Rc::try_unwrap(node.data) {
                let mut data = cell.into_inner();
                stack.append(&mut data.operands);
            }
        }
    }
}

/// A differentiable scalar in the computation graph.
///
/// Cloning a `Node` clones the handle, not the value: both clones observe the same
/// gradient after [`Node::backward`].
///
/// `Node` is `!Send` and `!Sync`: a graph stays on the thread that built it.
pub struct Node {
    pub(crate) data: Rc<RefCell<NodeData>>,
}

impl Node {
    /// Creates a new node produced by `op` from `operands`.
    ///
    /// Used by the `*_op` constructors in [`crate::ops`]; the operand vector is
    /// always freshly allocated by the caller.
    pub(crate) fn from_op(value: f64, operands: Vec<Node>, op: BackwardOp) -> Node {
        debug_assert_eq!(operands.len(), op.arity());
        Node {
            data: Rc::new(RefCell::new(NodeData {
                value,
                grad: 0.0,
                operands,
                op,
                label: None,
            })),
        }
    }
}

// Manual implementation of Clone: clones the Rc, not the NodeData.
impl Clone for Node {
    fn clone(&self) -> Self {
        Node {
            data: Rc::clone(&self.data),
        }
    }
}

/// Two handles are equal when they refer to the same node.
impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.data, &other.data)
    }
}

impl Eq for Node {}

impl std::hash::Hash for Node {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id().hash(state);
    }
}
