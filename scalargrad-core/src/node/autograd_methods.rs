// src/node/autograd_methods.rs

use crate::autograd::ComputationGraph;
use crate::error::ScalarGradError;
use crate::node::{Node, Operand};
use crate::ops;

impl Node {
    /// Computes the gradient of this node w.r.t. every node it was built from.
    ///
    /// Seeds `self.grad` to 1.0 and propagates through the reachable subgraph in
    /// dependency-closed order. Other gradients are accumulated onto whatever they
    /// held before; call [`Node::zero_grad`] (or [`ComputationGraph::zero_grad`])
    /// between independent passes that share leaves.
    ///
    /// # Errors
    /// Returns [`ScalarGradError::CycleDetected`] if the graph cannot be ordered, or
    /// [`ScalarGradError::OperandCountMismatch`] if a node's rule does not match its operands.
    pub fn backward(&self) -> Result<(), ScalarGradError> {
        if self.is_leaf() {
            log::warn!("backward() called on leaf {}. Only the seed gradient is set.", self);
        }
        let graph = ComputationGraph::build(self)?;
        graph.backward()?;
        Ok(())
    }

    /// Resets the gradient of this node to 0.
    pub fn zero_grad(&self) {
        self.set_grad(0.0);
    }

    /// `self^exponent` for a fixed real exponent. See [`ops::pow_op`] for the checked form.
    pub fn powf(&self, exponent: f64) -> Node {
        ops::arithmetic::powf_op(self, exponent)
    }

    /// `self^exponent`, rejecting node exponents.
    pub fn try_pow(&self, exponent: impl Into<Operand>) -> Result<Node, ScalarGradError> {
        ops::pow_op(self, exponent)
    }

    pub fn tanh(&self) -> Node {
        ops::tanh_op(self)
    }

    pub fn exp(&self) -> Node {
        ops::exp_op(self)
    }

    pub fn relu(&self) -> Node {
        ops::relu_op(self)
    }
}
