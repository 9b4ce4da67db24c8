use crate::autograd::BackwardOp;
use crate::node::{Node, Operand};

/// Adds two operands: `z = a + b`.
///
/// Backward: both operands receive the upstream gradient unchanged.
///
/// Either side may be a raw number, which is coerced into a constant leaf first.
pub fn add_op(a: impl Into<Operand>, b: impl Into<Operand>) -> Node {
    let a = a.into().into_node();
    let b = b.into().into_node();
    let value = a.value() + b.value();
    Node::from_op(value, vec![a, b], BackwardOp::Add)
}
