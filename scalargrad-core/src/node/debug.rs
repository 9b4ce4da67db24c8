// src/node/debug.rs
use crate::node::Node;
use std::fmt;

// Manual implementation of Debug: operands are shown by value only, so printing
// a node never walks the whole graph.
impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.data.try_borrow() {
            Ok(guard) => f
                .debug_struct("Node")
                .field("label", &guard.label)
                .field("value", &guard.value)
                .field("grad", &guard.grad)
                .field("op", &guard.op)
                .field(
                    "operands",
                    &guard.operands.iter().map(|o| o.value()).collect::<Vec<f64>>(),
                )
                .finish(),
            Err(_) => write!(f, "Node(<mutably borrowed>)"),
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let guard = self.read_data();
        match &guard.label {
            Some(label) => write!(f, "Node(label={}, value={})", label, guard.value),
            None => write!(f, "Node(value={})", guard.value),
        }
    }
}
