//! # Autograd Module (`autograd`)
//!
//! Reverse-mode differentiation over the node graph.
//!
//! - [`backward_op`]: [`BackwardOp`], the tagged local derivative rule stored in every node.
//! - [`graph`]: [`ComputationGraph`], which orders the reachable subgraph so that every
//!   node runs after all of its consumers, then applies the rules.
//! - [`grad_check`]: finite-difference verification of analytical gradients.

pub mod backward_op;
pub mod grad_check;
pub mod graph;

pub use backward_op::BackwardOp;
pub use grad_check::{check_grad, GradCheckConfig, GradCheckError};
pub use graph::ComputationGraph;
