use crate::autograd::BackwardOp;
use crate::node::{Node, Operand};

/// Applies the Rectified Linear Unit: `z = max(0, a)`.
///
/// Backward: `a.grad += g` where `a > 0`, nothing otherwise (the subgradient at 0 is 0).
pub fn relu_op(a: impl Into<Operand>) -> Node {
    let a = a.into().into_node();
    let value = a.value().max(0.0);
    Node::from_op(value, vec![a], BackwardOp::Relu)
}
