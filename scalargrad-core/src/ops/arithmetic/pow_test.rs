#[cfg(test)]
mod tests {
    use crate::autograd::{check_grad, GradCheckConfig, GradCheckError};
    use crate::error::ScalarGradError;
    use crate::node::Node;
    use crate::ops::arithmetic::pow_op;
    use approx::assert_relative_eq;
    use num_traits::Pow;

    #[test]
    fn test_pow_forward() -> Result<(), ScalarGradError> {
        let a = Node::new(2.0);
        assert_eq!(pow_op(&a, 3.0)?.value(), 8.0);
        assert_eq!(a.powf(2.0).value(), 4.0);
        assert_eq!((&a).pow(-1.0).value(), 0.5);
        assert_eq!((&a).pow(3).value(), 8.0);
        Ok(())
    }

    #[test]
    fn test_pow_rejects_node_exponent() {
        let a = Node::new(2.0);
        let n = Node::new(3.0);
        let result = pow_op(&a, &n);
        assert_eq!(
            result,
            Err(ScalarGradError::InvalidExponentType {
                operation: "pow".to_string()
            })
        );
        assert!(a.try_pow(n).is_err());
        assert!(a.try_pow(2).is_ok());
    }

    #[test]
    fn test_pow_backward() {
        let a = Node::new(2.0);
        let b = a.powf(3.0);
        b.backward().unwrap();
        // d/dx x^3 = 3x^2 = 12 at x=2
        assert_relative_eq!(a.grad(), 12.0, epsilon = 1e-12);
    }

    #[test]
    fn test_pow_fractional_exponent() {
        let a = Node::new(4.0);
        let b = a.powf(0.5);
        assert_eq!(b.value(), 2.0);
        b.backward().unwrap();
        assert_relative_eq!(a.grad(), 0.25, epsilon = 1e-12);
    }

    #[test]
    fn test_pow_zero_base_negative_exponent_yields_non_finite() {
        let a = Node::new(0.0);
        let b = a.powf(-2.0);
        assert!(b.value().is_infinite());
        b.backward().unwrap();
        assert!(!a.grad().is_finite());
    }

    #[test]
    fn test_pow_grad_check() -> Result<(), GradCheckError> {
        let func = |inputs: &[Node]| Ok(inputs[0].powf(3.0));
        check_grad(func, &[1.3], &GradCheckConfig::default())?;
        let func = |inputs: &[Node]| Ok(inputs[0].powf(-1.5));
        check_grad(func, &[2.2], &GradCheckConfig::default())
    }
}
