use crate::node::Node;

/// Checks that `actual` is within `tolerance` of `expected`.
/// Panics with both values and the difference otherwise.
pub fn check_value_near(actual: f64, expected: f64, tolerance: f64) {
    let diff = (actual - expected).abs();
    if !(diff <= tolerance) {
        panic!(
            "Value mismatch: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
            actual, expected, diff, tolerance
        );
    }
}

/// Checks the gradient of every node against `expected_grads`, in order.
/// Panics on length mismatch or on the first gradient outside `tolerance`.
pub fn check_grads_near(nodes: &[&Node], expected_grads: &[f64], tolerance: f64) {
    assert_eq!(
        nodes.len(),
        expected_grads.len(),
        "Node count does not match expected gradient count"
    );

    for (i, (node, expected)) in nodes.iter().zip(expected_grads.iter()).enumerate() {
        let actual = node.grad();
        let diff = (actual - expected).abs();
        if !(diff <= tolerance) {
            panic!(
                "Gradient mismatch at index {} ({}): actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
                i, node, actual, expected, diff, tolerance
            );
        }
    }
}

/// Installs `env_logger` once for the test binary; honours `RUST_LOG`.
#[cfg(test)]
pub(crate) fn init_test_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}
