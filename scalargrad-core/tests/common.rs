use scalargrad_core::autograd::GradCheckConfig;

// Helpers shared by the integration test binaries.
// Added allow(dead_code) because usage across different test crates isn't detected easily.
#[allow(dead_code)]
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Finite-difference settings used across the integration tests.
#[allow(dead_code)]
pub fn grad_check_config() -> GradCheckConfig {
    GradCheckConfig::default()
        .with_epsilon(1e-6)
        .with_abs_tolerance(1e-4)
        .with_rel_tolerance(1e-4)
}
