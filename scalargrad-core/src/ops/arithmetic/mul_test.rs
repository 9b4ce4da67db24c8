#[cfg(test)]
mod tests {
    use crate::autograd::{check_grad, GradCheckConfig, GradCheckError};
    use crate::node::Node;
    use crate::ops::arithmetic::mul_op;

    #[test]
    fn test_mul_forward() {
        let a = Node::new(33.0);
        let b = Node::new(3.0);
        assert_eq!(mul_op(&a, &b).value(), 99.0);
        assert_eq!((&a * 3.0).value(), 99.0);
        assert_eq!((3.0 * &a).value(), 99.0);
    }

    #[test]
    fn test_mul_backward() {
        let a = Node::new(2.0);
        let b = Node::new(3.0);
        let c = &a * &b;
        c.backward().unwrap();
        assert_eq!(a.grad(), 3.0);
        assert_eq!(b.grad(), 2.0);
    }

    #[test]
    fn test_mul_square_via_same_node() {
        // x * x -> 2x
        let x = Node::new(-1.5);
        let y = &x * &x;
        y.backward().unwrap();
        assert_eq!(x.grad(), -3.0);
    }

    #[test]
    fn test_mul_by_constant_backward() {
        let x = Node::new(4.0);
        let y = 2.5 * &x;
        y.backward().unwrap();
        assert_eq!(x.grad(), 2.5);
    }

    #[test]
    fn test_mul_grad_check() -> Result<(), GradCheckError> {
        let func = |inputs: &[Node]| Ok(mul_op(&inputs[0], &inputs[1]));
        check_grad(func, &[0.8, -2.1], &GradCheckConfig::default())
    }
}
