//! Status LED blink patterns

use crate::{
	chrono::Chrono,
	config::{LED_OFF_IDLE_MS, LED_OFF_PUMPING_MS, LED_ON_IDLE_MS, LED_ON_PUMPING_MS},
};

/// Length of the current blink phase
///
/// | pumping | lit | duration |
/// |---|---|---|
/// | yes | yes | 500ms |
/// | yes | no | 1500ms |
/// | no | yes | 10ms |
/// | no | no | 2000ms |
pub fn phase_duration(pumping: bool, lit: bool) -> u32 {
	match (pumping, lit) {
		(true, true) => LED_ON_PUMPING_MS,
		(true, false) => LED_OFF_PUMPING_MS,
		(false, true) => LED_ON_IDLE_MS,
		(false, false) => LED_OFF_IDLE_MS,
	}
}

/// Derives the blink pattern from the watering cycle
pub struct Annunciator {
	lit: bool,
	chrono: Chrono,
}

impl Annunciator {
	/// A new annunciator starts in the dark phase
	pub fn new(now: u32) -> Self {
		Self {
			lit: false,
			chrono: Chrono::new(now),
		}
	}

	pub fn is_lit(&self) -> bool {
		self.lit
	}

	/// Advance the blink pattern
	///
	/// Returns the new LED state when the phase changed, `None` otherwise.
	pub fn update(&mut self, now: u32, pumping: bool) -> Option<bool> {
		if !self.chrono.has_passed(now, phase_duration(pumping, self.lit)) {
			return None;
		}

		self.chrono.restart(now);
		self.lit = !self.lit;
		Some(self.lit)
	}
}
