use crate::autograd::BackwardOp;
use crate::node::Node;

impl Node {
    /// Creates a new leaf node (an input) with zero gradient.
    pub fn new(value: f64) -> Node {
        Node::from_op(value, Vec::new(), BackwardOp::Leaf)
    }

    /// Creates a new leaf node carrying a diagnostic label.
    pub fn with_label(value: f64, label: impl Into<String>) -> Node {
        let node = Node::new(value);
        node.set_label(label);
        node
    }

    /// Wraps a raw number in a constant leaf so the graph stays uniform.
    ///
    /// Constants are ordinary leaves: no operands, no-op backward rule. They still
    /// receive a gradient during backward, which callers are free to ignore.
    pub fn constant(value: f64) -> Node {
        Node::new(value)
    }
}

macro_rules! impl_from_scalar {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Node {
                fn from(value: $t) -> Node {
                    Node::constant(value as f64)
                }
            }

            impl From<$t> for Operand {
                fn from(value: $t) -> Operand {
                    Operand::Scalar(value as f64)
                }
            }
        )*
    };
}

impl_from_scalar!(f64, f32, i32);

/// An argument to an operation: either an existing node or a raw number.
///
/// Lets `*_op` functions accept `&Node`, `Node` and plain numbers alike; raw numbers
/// are coerced into constant leaves by [`Operand::into_node`].
#[derive(Debug, Clone)]
pub enum Operand {
    Node(Node),
    Scalar(f64),
}

impl Operand {
    /// Returns the operand as a node, wrapping scalars in a fresh constant leaf.
    pub fn into_node(self) -> Node {
        match self {
            Operand::Node(node) => node,
            Operand::Scalar(value) => Node::constant(value),
        }
    }

    /// Forward value of the operand.
    pub fn value(&self) -> f64 {
        match self {
            Operand::Node(node) => node.value(),
            Operand::Scalar(value) => *value,
        }
    }
}

impl From<Node> for Operand {
    fn from(node: Node) -> Operand {
        Operand::Node(node)
    }
}

impl From<&Node> for Operand {
    fn from(node: &Node) -> Operand {
        Operand::Node(node.clone())
    }
}
