// Run with: RUST_LOG=debug cargo run --example scenario
use scalargrad_core::{Node, ScalarGradError};

fn main() -> Result<(), ScalarGradError> {
    env_logger::init();

    let a = Node::with_label(2.0, "a");
    let b = Node::with_label(-3.0, "b");
    let c = Node::with_label(10.0, "c");
    let e = &a * &b;
    e.set_label("e");
    let d = &e + &c;
    d.set_label("d");
    let f = Node::with_label(-2.0, "f");
    let l = &d * &f;
    l.set_label("L");

    l.backward()?;

    println!("{} (grad={})", l, l.grad());
    for node in [&a, &b, &c, &d, &e, &f] {
        println!("  {} -> dL/d{} = {}", node, node.label().unwrap_or_default(), node.grad());
    }

    // A single tanh neuron, then a division.
    let x = Node::with_label(0.0, "x");
    let y = x.tanh();
    y.backward()?;
    println!("{} -> dy/dx = {}", y, x.grad());

    let p = Node::with_label(6.0, "p");
    let q = Node::with_label(2.0, "q");
    let r = &p / &q;
    r.backward()?;
    println!("{} -> dr/dp = {}, dr/dq = {}", r, p.grad(), q.grad());

    Ok(())
}
