#[cfg(test)]
mod tests {
    use crate::autograd::{check_grad, BackwardOp, GradCheckConfig, GradCheckError};
    use crate::node::Node;
    use crate::ops::activation::tanh_op;
    use approx::assert_relative_eq;

    #[test]
    fn test_tanh_at_zero() {
        let x = Node::new(0.0);
        let y = x.tanh();
        assert_eq!(y.value(), 0.0);
        y.backward().unwrap();
        // 1 - tanh(0)^2 = 1
        assert_eq!(x.grad(), 1.0);
    }

    #[test]
    fn test_tanh_matches_exponential_form() {
        for &v in &[-2.5_f64, -0.3, 0.7, 1.9] {
            let e2 = (2.0 * v).exp();
            let expected = (e2 - 1.0) / (e2 + 1.0);
            assert_relative_eq!(tanh_op(v).value(), expected, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_tanh_caches_output_in_tag() {
        let y = tanh_op(0.8_f64);
        match y.op() {
            BackwardOp::Tanh { output } => assert_eq!(output, y.value()),
            other => panic!("Expected Tanh tag, got {:?}", other),
        }
    }

    #[test]
    fn test_tanh_saturates_without_nan() {
        let x = Node::new(400.0);
        let y = x.tanh();
        assert_eq!(y.value(), 1.0);
        y.backward().unwrap();
        assert_eq!(x.grad(), 0.0);
    }

    #[test]
    fn test_tanh_backward() {
        let x = Node::new(0.5);
        let y = x.tanh();
        y.backward().unwrap();
        let t = 0.5_f64.tanh();
        assert_relative_eq!(x.grad(), 1.0 - t * t, epsilon = 1e-12);
    }

    #[test]
    fn test_tanh_grad_check() -> Result<(), GradCheckError> {
        // A single neuron: tanh(w * x + b)
        let func = |inputs: &[Node]| Ok((&(&inputs[0] * &inputs[1]) + &inputs[2]).tanh());
        check_grad(func, &[-0.6, 1.3, 0.25], &GradCheckConfig::default())
    }
}
