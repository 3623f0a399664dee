//! Skip policy for suites that depend on the embedded cluster.
//!
//! Setting `SKIP_TEST_CLUSTER` to `1`, `true`, or `yes` turns a failed
//! bootstrap into a logged skip. Without it the failure panics so CI never
//! silently loses database coverage.

fn skip_requested() -> bool {
    std::env::var("SKIP_TEST_CLUSTER")
        .map(|value| matches!(value.to_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(false)
}

/// Return `None` when skipping is allowed, otherwise panic with `reason`.
pub fn handle_cluster_setup_failure<T>(reason: impl std::fmt::Display) -> Option<T> {
    if skip_requested() {
        eprintln!("SKIP-TEST-CLUSTER: {reason}");
        None
    } else {
        panic!("Test cluster setup failed: {reason}. Set SKIP_TEST_CLUSTER=1 to skip.");
    }
}
