use crate::autograd::BackwardOp;
use crate::node::{Node, Operand};

/// Multiplies two operands: `z = a * b`.
///
/// Backward: `a.grad += g * b`, `b.grad += g * a`.
pub fn mul_op(a: impl Into<Operand>, b: impl Into<Operand>) -> Node {
    let a = a.into().into_node();
    let b = b.into().into_node();
    let value = a.value() * b.value();
    Node::from_op(value, vec![a, b], BackwardOp::Mul)
}
