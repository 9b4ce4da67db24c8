#[cfg(test)]
mod tests {
    use crate::autograd::{check_grad, GradCheckConfig, GradCheckError};
    use crate::node::Node;
    use crate::ops::activation::relu_op;

    #[test]
    fn test_relu_forward() {
        assert_eq!(relu_op(-2.0_f64).value(), 0.0);
        assert_eq!(relu_op(0.0_f64).value(), 0.0);
        assert_eq!(relu_op(3.5_f64).value(), 3.5);
    }

    #[test]
    fn test_relu_backward() {
        let pos = Node::new(1.5);
        let neg = Node::new(-0.5);
        let y = &pos.relu() + &neg.relu();
        y.backward().unwrap();
        assert_eq!(pos.grad(), 1.0);
        assert_eq!(neg.grad(), 0.0);
    }

    #[test]
    fn test_relu_grad_check_away_from_kink() -> Result<(), GradCheckError> {
        let func = |inputs: &[Node]| Ok((&inputs[0] * &inputs[1]).relu());
        check_grad(func, &[2.0, 0.75], &GradCheckConfig::default())?;
        check_grad(func, &[2.0, -0.75], &GradCheckConfig::default())
    }
}
