use crate::autograd::BackwardOp;
use crate::node::{Node, Operand};

/// Computes the natural exponential: `z = e^a`.
///
/// Backward: `a.grad += g * z`, reusing the cached output.
pub fn exp_op(a: impl Into<Operand>) -> Node {
    let a = a.into().into_node();
    let output = a.value().exp();
    Node::from_op(output, vec![a], BackwardOp::Exp { output })
}
