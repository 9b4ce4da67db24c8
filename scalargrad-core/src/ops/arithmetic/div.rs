use crate::node::{Node, Operand};
use crate::ops::arithmetic::{mul_op, powf_op};

/// Divides `a` by `b`, defined as `a * b^-1`.
///
/// Division by a zero-valued node is not intercepted: the forward value and the
/// gradients become `inf`/`NaN` as floating-point evaluation dictates.
pub fn div_op(a: impl Into<Operand>, b: impl Into<Operand>) -> Node {
    mul_op(a, powf_op(b, -1.0))
}
