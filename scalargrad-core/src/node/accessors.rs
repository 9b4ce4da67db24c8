use crate::autograd::BackwardOp;
use crate::node::{Node, NodeData, NodeId};
use std::cell::{Ref, RefMut};
use std::rc::Rc;

impl Node {
    /// Immutable borrow of the shared node state.
    pub(crate) fn read_data(&self) -> Ref<'_, NodeData> {
        self.data.borrow()
    }

    /// Mutable borrow of the shared node state.
    pub(crate) fn write_data(&self) -> RefMut<'_, NodeData> {
        self.data.borrow_mut()
    }

    /// Returns the forward value.
    pub fn value(&self) -> f64 {
        self.read_data().value
    }

    /// Returns the accumulated gradient (0.0 until a backward pass reaches this node).
    pub fn grad(&self) -> f64 {
        self.read_data().grad
    }

    /// Returns clones of the operand handles, in operand order.
    pub fn operands(&self) -> Vec<Node> {
        self.read_data().operands.clone()
    }

    /// Returns the local derivative rule of this node.
    pub fn op(&self) -> BackwardOp {
        self.read_data().op
    }

    /// A leaf has no operands (input or coerced constant).
    pub fn is_leaf(&self) -> bool {
        self.read_data().operands.is_empty()
    }

    pub fn label(&self) -> Option<String> {
        self.read_data().label.clone()
    }

    pub fn set_label(&self, label: impl Into<String>) {
        self.write_data().label = Some(label.into());
    }

    /// Pointer identity of this node. See [`NodeId`].
    pub fn id(&self) -> NodeId {
        Rc::as_ptr(&self.data)
    }

    /// Overwrites the gradient. Only the backward seed and `zero_grad` use this.
    pub(crate) fn set_grad(&self, grad: f64) {
        self.write_data().grad = grad;
    }

    /// Adds `contribution` to the gradient (accumulation across consumers).
    pub(crate) fn accumulate_grad(&self, contribution: f64) {
        self.write_data().grad += contribution;
    }
}
