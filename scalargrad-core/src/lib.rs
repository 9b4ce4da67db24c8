//! # ScalarGrad
//!
//! Reverse-mode automatic differentiation over scalar values.
//!
//! Arithmetic on [`Node`]s eagerly computes the forward value and records a directed
//! acyclic graph of operands. [`Node::backward`] then propagates d(output)/d(node) to
//! every upstream node in a single reverse traversal.
//!
//! ```
//! use scalargrad_core::Node;
//!
//! let a = Node::with_label(2.0, "a");
//! let b = Node::with_label(-3.0, "b");
//! let l = &(&a * &b) + 10.0;
//! l.backward().unwrap();
//! assert_eq!(l.value(), 4.0);
//! assert_eq!(a.grad(), -3.0);
//! assert_eq!(b.grad(), 2.0);
//! ```

pub mod autograd;
pub mod node;
pub mod ops;
pub mod utils;

pub mod error;

// Re-export the main types so they are reachable as `scalargrad_core::Node` etc.
pub use autograd::{BackwardOp, ComputationGraph};
pub use error::ScalarGradError;
pub use node::{Node, Operand};
// Re-export the trait backing `node.pow(..)`.
pub use num_traits::Pow;
