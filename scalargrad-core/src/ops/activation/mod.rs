// src/ops/activation/mod.rs

//! # Activation Functions
//!
//! Non-linear unary operations.
//!
//! ## Currently Implemented:
//! - [`tanh_op`]: Hyperbolic tangent.
//! - [`relu_op`]: Rectified Linear Unit.

pub mod relu;
pub mod tanh;

pub use relu::relu_op;
pub use tanh::tanh_op;

#[cfg(test)]
mod relu_test;
#[cfg(test)]
mod tanh_test;
