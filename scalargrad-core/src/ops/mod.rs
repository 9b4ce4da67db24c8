//! # Scalar Operations Module (`ops`)
//!
//! Every differentiable operation lives here, grouped by family.
//!
//! ## Structure:
//!
//! - **`_op` Functions:** Each operation has a core function (named `xxx_op`) that performs
//!   the forward computation eagerly and returns a new [`Node`](crate::Node) whose operands
//!   are the inputs and whose [`BackwardOp`](crate::autograd::BackwardOp) tag encodes the
//!   local derivative rule.
//! - **Composite operations** (`sub`, `neg`, `div`) are defined in terms of the primitive
//!   ones and inherit their rules, so they introduce no tags of their own.
//! - **Coercion:** binary operations accept anything `Into<Operand>`; raw numbers are
//!   wrapped in constant leaves before the result node is built.
//!
//! ## Key Submodules:
//!
//! - [`arithmetic`]: add, sub, mul, div, neg, pow.
//! - [`activation`]: tanh, relu.
//! - [`math_elem`]: exp.

pub mod activation;
pub mod arithmetic;
pub mod math_elem;

pub use activation::{relu_op, tanh_op};
pub use arithmetic::{add_op, div_op, mul_op, neg_op, pow_op, sub_op};
pub use math_elem::exp_op;
