// Run with: RUST_LOG=trace cargo run --example diamond_graph
//
// A shared node reached through paths of different lengths: d = (s * c) + s.
use scalargrad_core::{ComputationGraph, Node, ScalarGradError};

fn main() -> Result<(), ScalarGradError> {
    env_logger::init();

    let a = Node::with_label(1.0, "a");
    let b = Node::with_label(2.0, "b");
    let c = Node::with_label(4.0, "c");
    let s = &a + &b;
    s.set_label("s");
    let m = &s * &c;
    m.set_label("m");
    let d = &m + &s;
    d.set_label("d");

    let graph = ComputationGraph::build(&d)?;
    println!("Backward order ({} nodes):", graph.len());
    for (i, node) in graph.order().iter().enumerate() {
        println!("  {:>2}: {} [{}]", i, node, node.op());
    }

    graph.backward()?;
    for node in [&s, &a, &b, &c] {
        println!("{} grad={}", node, node.grad());
    }
    Ok(())
}
