use crate::node::{Node, Operand};
use crate::ops::arithmetic::mul_op;

/// Negates an operand, defined as `a * -1`.
pub fn neg_op(a: impl Into<Operand>) -> Node {
    mul_op(a, -1.0_f64)
}
