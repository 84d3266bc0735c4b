//! Elapsed-time tracking on top of a free running millisecond clock

/// Source of the current time
pub trait Clock {
	/// Milliseconds since the clock started. Wraps after roughly 49 days.
	fn millis(&self) -> u32;
}

impl<C: Clock + ?Sized> Clock for &C {
	fn millis(&self) -> u32 {
		(**self).millis()
	}
}

/// Restartable stopwatch
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Chrono {
	started: u32,
}

impl Chrono {
	/// Create a [`Chrono`] which starts counting at `now`
	pub fn new(now: u32) -> Self {
		Self { started: now }
	}

	pub fn restart(&mut self, now: u32) {
		self.started = now;
	}

	/// Milliseconds since the last restart
	///
	/// Uses wrapping arithmetic so that a clock overflow doesn't stall the stopwatch.
	pub fn elapsed(&self, now: u32) -> u32 {
		now.wrapping_sub(self.started)
	}

	/// Whether at least `timeout` milliseconds have passed since the last restart
	pub fn has_passed(&self, now: u32, timeout: u32) -> bool {
		self.elapsed(now) >= timeout
	}
}
