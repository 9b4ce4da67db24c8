use crate::autograd::BackwardOp;
use crate::error::ScalarGradError;
use crate::node::{Node, Operand};

/// Raises `base` to a fixed real `exponent`: `z = base^exponent`.
///
/// Backward: `base.grad += g * exponent * base^(exponent - 1)`.
///
/// # Errors
/// Returns [`ScalarGradError::InvalidExponentType`] if `exponent` is a [`Node`]:
/// differentiating through a variable exponent is not supported.
pub fn pow_op(
    base: impl Into<Operand>,
    exponent: impl Into<Operand>,
) -> Result<Node, ScalarGradError> {
    match exponent.into() {
        Operand::Scalar(exponent) => Ok(powf_op(base, exponent)),
        Operand::Node(_) => Err(ScalarGradError::InvalidExponentType {
            operation: "pow".to_string(),
        }),
    }
}

/// Infallible form of [`pow_op`] for callers that already hold an `f64` exponent.
pub(crate) fn powf_op(base: impl Into<Operand>, exponent: f64) -> Node {
    let base = base.into().into_node();
    let value = base.value().powf(exponent);
    Node::from_op(value, vec![base], BackwardOp::Pow { exponent })
}
