// src/node/traits.rs
//
// Operator overloading. Every combination of `Node`, `&Node` and `f64` is routed to
// the corresponding `*_op` function, so `x + 2.0` and `2.0 + x` both work.

use crate::node::Node;
use crate::ops::{add_op, div_op, mul_op, neg_op};
use crate::ops::arithmetic::{powf_op, sub_op};
use num_traits::Pow;
use std::iter::Sum;
use std::ops::{Add, Div, Mul, Neg, Sub};

macro_rules! impl_binary_op {
    ($trait:ident, $method:ident, $op_fn:ident) => {
        impl $trait<Node> for Node {
            type Output = Node;
            fn $method(self, rhs: Node) -> Node {
                $op_fn(self, rhs)
            }
        }

        impl<'a> $trait<&'a Node> for Node {
            type Output = Node;
            fn $method(self, rhs: &'a Node) -> Node {
                $op_fn(self, rhs)
            }
        }

        impl<'a> $trait<Node> for &'a Node {
            type Output = Node;
            fn $method(self, rhs: Node) -> Node {
                $op_fn(self, rhs)
            }
        }

        impl<'a, 'b> $trait<&'b Node> for &'a Node {
            type Output = Node;
            fn $method(self, rhs: &'b Node) -> Node {
                $op_fn(self, rhs)
            }
        }

        impl $trait<f64> for Node {
            type Output = Node;
            fn $method(self, rhs: f64) -> Node {
                $op_fn(self, rhs)
            }
        }

        impl<'a> $trait<f64> for &'a Node {
            type Output = Node;
            fn $method(self, rhs: f64) -> Node {
                $op_fn(self, rhs)
            }
        }

        impl $trait<Node> for f64 {
            type Output = Node;
            fn $method(self, rhs: Node) -> Node {
                $op_fn(self, rhs)
            }
        }

        impl<'a> $trait<&'a Node> for f64 {
            type Output = Node;
            fn $method(self, rhs: &'a Node) -> Node {
                $op_fn(self, rhs)
            }
        }
    };
}

impl_binary_op!(Add, add, add_op);
impl_binary_op!(Sub, sub, sub_op);
impl_binary_op!(Mul, mul, mul_op);
impl_binary_op!(Div, div, div_op);

impl Neg for Node {
    type Output = Node;
    fn neg(self) -> Node {
        neg_op(self)
    }
}

impl<'a> Neg for &'a Node {
    type Output = Node;
    fn neg(self) -> Node {
        neg_op(self)
    }
}

impl Pow<f64> for Node {
    type Output = Node;
    fn pow(self, exponent: f64) -> Node {
        powf_op(self, exponent)
    }
}

impl<'a> Pow<f64> for &'a Node {
    type Output = Node;
    fn pow(self, exponent: f64) -> Node {
        powf_op(self, exponent)
    }
}

impl Pow<i32> for Node {
    type Output = Node;
    fn pow(self, exponent: i32) -> Node {
        powf_op(self, exponent as f64)
    }
}

impl<'a> Pow<i32> for &'a Node {
    type Output = Node;
    fn pow(self, exponent: i32) -> Node {
        powf_op(self, exponent as f64)
    }
}

/// Sums nodes left to right; an empty iterator yields the constant 0.
impl Sum for Node {
    fn sum<I: Iterator<Item = Node>>(mut iter: I) -> Node {
        match iter.next() {
            Some(first) => iter.fold(first, |acc, x| add_op(acc, x)),
            None => Node::constant(0.0),
        }
    }
}

impl<'a> Sum<&'a Node> for Node {
    fn sum<I: Iterator<Item = &'a Node>>(iter: I) -> Node {
        iter.cloned().sum()
    }
}
