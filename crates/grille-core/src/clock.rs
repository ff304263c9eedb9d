//! Time injection
//!
//! Snapshot timestamps come from a [`Clock`] handed in at construction, so
//! tests can pin or advance time deterministically.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use parking_lot::RwLock;

/// Source of the current time
pub trait Clock: Send + Sync {
	/// Returns the current instant
	fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock [`Clock`] used outside of tests
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
	/// Creates a wall clock
	pub fn new() -> Self {
		Self
	}
}

impl Clock for SystemClock {
	fn now(&self) -> DateTime<Utc> {
		Utc::now()
	}
}

/// Manually driven [`Clock`] for tests
///
/// Clones share the same underlying instant, so a test can keep one handle
/// and advance time while the code under test holds another.
#[derive(Debug, Clone)]
pub struct FixedClock {
	current: Arc<RwLock<DateTime<Utc>>>,
}

impl FixedClock {
	/// Creates a clock pinned to `initial`
	pub fn new(initial: DateTime<Utc>) -> Self {
		Self {
			current: Arc::new(RwLock::new(initial)),
		}
	}

	/// Moves the clock forward by `duration`
	pub fn advance(&self, duration: Duration) {
		let mut current = self.current.write();
		*current += duration;
	}

	/// Pins the clock to `instant`
	pub fn set(&self, instant: DateTime<Utc>) {
		*self.current.write() = instant;
	}
}

impl Clock for FixedClock {
	fn now(&self) -> DateTime<Utc> {
		*self.current.read()
	}
}
