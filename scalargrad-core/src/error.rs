use thiserror::Error;

/// Custom error type for the ScalarGrad engine.
///
/// Degenerate numeric cases (e.g. `pow` with a zero base and a negative exponent)
/// are not represented here: they surface as `NaN`/`inf` values and gradients,
/// exactly as the floating-point evaluation produces them.
#[derive(Error, Debug, PartialEq, Clone)]
pub enum ScalarGradError {
    #[error("Invalid exponent type for operation {operation}: expected a real number, got a graph node")]
    InvalidExponentType { operation: String },

    #[error("Cycle detected in the computation graph during backward pass.")]
    CycleDetected,

    #[error("Operation {operation} expects {expected} operand values, got {actual}")]
    OperandCountMismatch {
        operation: String,
        expected: usize,
        actual: usize,
    },

    #[error("Internal error: {0}")]
    InternalError(String),
}
