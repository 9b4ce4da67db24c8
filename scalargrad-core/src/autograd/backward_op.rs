use crate::error::ScalarGradError;
use std::fmt;

/// Local derivative rule attached to every [`Node`](crate::Node).
///
/// Each variant carries exactly the data its rule needs beyond the operand values,
/// which are immutable once the node exists and are therefore read back at
/// backward time. The traversal engine dispatches on the tag instead of invoking
/// a captured closure, so every rule can be exercised without building a graph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BackwardOp {
    /// Inputs and coerced constants. Propagates nothing.
    Leaf,
    /// `z = a + b`
    Add,
    /// `z = a * b`
    Mul,
    /// `z = a^exponent` with a fixed real exponent.
    Pow { exponent: f64 },
    /// `z = tanh(a)`, caching `z` from the forward pass.
    Tanh { output: f64 },
    /// `z = e^a`, caching `z` from the forward pass.
    Exp { output: f64 },
    /// `z = max(0, a)`
    Relu,
}

impl BackwardOp {
    /// Computes the gradient contribution for each operand.
    ///
    /// Given `grad_output` (dL/dz) and the forward values of the operands, returns
    /// dL/dz * dz/d(operand_i) for every operand, in operand order. The caller is
    /// responsible for *adding* these contributions to the operands' gradients.
    ///
    /// # Errors
    /// Returns [`ScalarGradError::OperandCountMismatch`] if `operands` does not hold
    /// exactly [`arity`](Self::arity) values.
    pub fn backward(
        &self,
        grad_output: f64,
        operands: &[f64],
    ) -> Result<Vec<f64>, ScalarGradError> {
        let grads = match (*self, operands) {
            (BackwardOp::Leaf, []) => Vec::new(),
            (BackwardOp::Add, [_, _]) => vec![grad_output, grad_output],
            (BackwardOp::Mul, [a, b]) => vec![grad_output * b, grad_output * a],
            (BackwardOp::Pow { exponent }, [a]) => {
                vec![grad_output * exponent * a.powf(exponent - 1.0)]
            }
            (BackwardOp::Tanh { output }, [_]) => vec![grad_output * (1.0 - output * output)],
            (BackwardOp::Exp { output }, [_]) => vec![grad_output * output],
            (BackwardOp::Relu, [a]) => vec![if *a > 0.0 { grad_output } else { 0.0 }],
            _ => {
                log::error!(
                    "Rule '{}' expects {} operands, got {}",
                    self,
                    self.arity(),
                    operands.len()
                );
                return Err(ScalarGradError::OperandCountMismatch {
                    operation: self.to_string(),
                    expected: self.arity(),
                    actual: operands.len(),
                });
            }
        };
        Ok(grads)
    }

    /// Number of operands this rule expects.
    pub fn arity(&self) -> usize {
        match self {
            BackwardOp::Leaf => 0,
            BackwardOp::Add | BackwardOp::Mul => 2,
            BackwardOp::Pow { .. }
            | BackwardOp::Tanh { .. }
            | BackwardOp::Exp { .. }
            | BackwardOp::Relu => 1,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, BackwardOp::Leaf)
    }
}

impl fmt::Display for BackwardOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackwardOp::Leaf => write!(f, "leaf"),
            BackwardOp::Add => write!(f, "+"),
            BackwardOp::Mul => write!(f, "*"),
            BackwardOp::Pow { exponent } => write!(f, "**{}", exponent),
            BackwardOp::Tanh { .. } => write!(f, "tanh"),
            BackwardOp::Exp { .. } => write!(f, "exp"),
            BackwardOp::Relu => write!(f, "relu"),
        }
    }
}
