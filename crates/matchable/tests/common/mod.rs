//! Shared setup for matchable integration tests.

/// Installs a fmt subscriber once per test binary so registry logs show up
/// with `--nocapture`.
pub fn init_tracing() {
	let _ = tracing_subscriber::fmt::try_init();
}
