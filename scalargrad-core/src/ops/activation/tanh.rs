use crate::autograd::BackwardOp;
use crate::node::{Node, Operand};

/// Applies the hyperbolic tangent: `t = (e^(2a) - 1) / (e^(2a) + 1)`.
///
/// The forward value is computed with [`f64::tanh`], the same closed form without the
/// overflow of `e^(2a)` for large `|a|`. `t` is cached in the tag, so the backward rule
/// `a.grad += g * (1 - t^2)` does not re-evaluate the exponential.
pub fn tanh_op(a: impl Into<Operand>) -> Node {
    let a = a.into().into_node();
    let output = a.value().tanh();
    Node::from_op(output, vec![a], BackwardOp::Tanh { output })
}
