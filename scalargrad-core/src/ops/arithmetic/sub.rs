use crate::node::{Node, Operand};
use crate::ops::arithmetic::{add_op, neg_op};

/// Subtracts `b` from `a`, defined as `a + (-b)`.
pub fn sub_op(a: impl Into<Operand>, b: impl Into<Operand>) -> Node {
    add_op(a, neg_op(b))
}
