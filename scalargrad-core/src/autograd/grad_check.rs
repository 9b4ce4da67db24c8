use crate::error::ScalarGradError;
use crate::node::Node;
use approx::relative_eq;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: Analytical grad {analytical_grad:?} != Numerical grad {numerical_grad:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },
    #[error("Numerical gradient is NaN or infinite for input {input_index}. Details: Loss+: {loss_plus:?}, Loss-: {loss_minus:?}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },
    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value:?}")]
    AnalyticalGradNaNOrInfinite { input_index: usize, value: f64 },
    #[error("Forward function execution failed during gradient check: {0}")]
    ForwardPassError(ScalarGradError),
    #[error("Backward pass execution failed during gradient check: {0}")]
    BackwardPassError(ScalarGradError),
    #[error("Gradient check requires at least one input.")]
    EmptyInputs,
}

/// Step size and tolerances for [`check_grad`].
///
/// A gradient passes when `|analytical - numerical| <= abs_tolerance` or the
/// relative difference is within `rel_tolerance`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradCheckConfig {
    pub epsilon: f64,
    pub abs_tolerance: f64,
    pub rel_tolerance: f64,
}

impl Default for GradCheckConfig {
    fn default() -> Self {
        GradCheckConfig {
            epsilon: 1e-6,
            abs_tolerance: 1e-4,
            rel_tolerance: 1e-4,
        }
    }
}

impl GradCheckConfig {
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    pub fn with_abs_tolerance(mut self, abs_tolerance: f64) -> Self {
        self.abs_tolerance = abs_tolerance;
        self
    }

    pub fn with_rel_tolerance(mut self, rel_tolerance: f64) -> Self {
        self.rel_tolerance = rel_tolerance;
        self
    }
}

/// Checks analytical gradients against numerical gradients using centered finite differences.
///
/// `func` builds an expression from one leaf per entry of `inputs`. It is called once for
/// the analytical pass and twice per input with that input shifted by `±epsilon`; every
/// call receives freshly created leaves, so no gradient state leaks between evaluations.
///
/// # Errors
/// Returns the first [`GradCheckError`] encountered, in input order.
pub fn check_grad<F>(func: F, inputs: &[f64], config: &GradCheckConfig) -> Result<(), GradCheckError>
where
    F: Fn(&[Node]) -> Result<Node, ScalarGradError>,
{
    if inputs.is_empty() {
        return Err(GradCheckError::EmptyInputs);
    }

    let evaluate = |values: &[f64]| -> Result<f64, GradCheckError> {
        let leaves: Vec<Node> = values.iter().map(|&v| Node::new(v)).collect();
        let output = func(&leaves).map_err(GradCheckError::ForwardPassError)?;
        Ok(output.value())
    };

    // --- 1. Analytical gradients ---
    let leaves: Vec<Node> = inputs.iter().map(|&v| Node::new(v)).collect();
    let output = func(&leaves).map_err(GradCheckError::ForwardPassError)?;
    output.backward().map_err(GradCheckError::BackwardPassError)?;

    // --- 2. Numerical gradients, one input at a time ---
    for (i, leaf) in leaves.iter().enumerate() {
        let analytical_grad = leaf.grad();
        if !analytical_grad.is_finite() {
            return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                input_index: i,
                value: analytical_grad,
            });
        }

        let mut shifted = inputs.to_vec();
        shifted[i] = inputs[i] + config.epsilon;
        let loss_plus = evaluate(&shifted)?;
        shifted[i] = inputs[i] - config.epsilon;
        let loss_minus = evaluate(&shifted)?;

        let numerical_grad = (loss_plus - loss_minus) / (2.0 * config.epsilon);
        if !numerical_grad.is_finite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                input_index: i,
                loss_plus,
                loss_minus,
            });
        }

        log::trace!(
            "check_grad input {}: analytical={}, numerical={}",
            i,
            analytical_grad,
            numerical_grad
        );

        if !relative_eq!(
            analytical_grad,
            numerical_grad,
            epsilon = config.abs_tolerance,
            max_relative = config.rel_tolerance
        ) {
            return Err(GradCheckError::GradientMismatch {
                input_index: i,
                analytical_grad,
                numerical_grad,
                difference: (analytical_grad - numerical_grad).abs(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{check_grad, GradCheckConfig, GradCheckError};
    use crate::error::ScalarGradError;
    use crate::node::Node;
    use crate::utils::testing::init_test_logger;

    #[test]
    fn test_check_grad_passes_for_polynomial() -> Result<(), GradCheckError> {
        init_test_logger();
        // f(x, y) = x^2 * y + 3y
        let func = |inputs: &[Node]| -> Result<Node, ScalarGradError> {
            let x = &inputs[0];
            let y = &inputs[1];
            Ok(&(&x.powf(2.0) * y) + &(3.0 * y))
        };
        check_grad(func, &[1.5, -0.7], &GradCheckConfig::default())
    }

    #[test]
    fn test_check_grad_detects_wrong_gradient() {
        // Gradient is cut by rebuilding the input as a constant: analytical grad on x is 0.
        let func = |inputs: &[Node]| -> Result<Node, ScalarGradError> {
            let detached = Node::constant(inputs[0].value());
            Ok(&detached * &detached)
        };
        let result = check_grad(func, &[2.0], &GradCheckConfig::default());
        match result {
            Err(GradCheckError::GradientMismatch {
                input_index,
                analytical_grad,
                numerical_grad,
                ..
            }) => {
                assert_eq!(input_index, 0);
                assert_eq!(analytical_grad, 0.0);
                assert!((numerical_grad - 4.0).abs() < 1e-3);
            }
            other => panic!("Expected GradientMismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_check_grad_reports_forward_errors() {
        let func = |inputs: &[Node]| crate::ops::pow_op(&inputs[0], &inputs[1]);
        let result = check_grad(func, &[2.0, 3.0], &GradCheckConfig::default());
        assert!(matches!(
            result,
            Err(GradCheckError::ForwardPassError(
                ScalarGradError::InvalidExponentType { .. }
            ))
        ));
    }

    #[test]
    fn test_check_grad_reports_non_finite_analytical_grad() {
        let func = |inputs: &[Node]| Ok(inputs[0].powf(0.5));
        let result = check_grad(func, &[0.0], &GradCheckConfig::default());
        assert!(matches!(
            result,
            Err(GradCheckError::AnalyticalGradNaNOrInfinite { input_index: 0, .. })
        ));
    }

    #[test]
    fn test_check_grad_rejects_empty_inputs() {
        let func = |_: &[Node]| Ok(Node::new(1.0));
        assert_eq!(
            check_grad(func, &[], &GradCheckConfig::default()),
            Err(GradCheckError::EmptyInputs)
        );
    }

    #[test]
    fn test_config_builders() {
        let config = GradCheckConfig::default()
            .with_epsilon(1e-3)
            .with_abs_tolerance(1e-2)
            .with_rel_tolerance(1e-1);
        assert_eq!(config.epsilon, 1e-3);
        assert_eq!(config.abs_tolerance, 1e-2);
        assert_eq!(config.rel_tolerance, 1e-1);
    }
}
