//! Timed alternation of the pump between running and resting

use ufmt::derive::uDebug;

use crate::{chrono::Chrono, config::CYCLE_TIME_MS};

/// Phase of the watering cycle
#[derive(uDebug, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
	/// Pump energized for the potentiometer controlled run time
	Pumping,
	/// Pump resting for [`CYCLE_TIME_MS`]
	Idle,
}

impl Phase {
	fn from_pumping(pumping: bool) -> Self {
		if pumping {
			Self::Pumping
		} else {
			Self::Idle
		}
	}
}

/// Pump state machine
///
/// Deciding *when* to switch is left to the cycle timer, while the prime switch and the light
/// sensor only decide *what* to switch to. Both qualifiers are applied at a transition and never
/// in between, so a run which has started keeps going when it gets dark.
pub struct WateringCycle {
	pumping: bool,
	chrono: Chrono,
}

impl WateringCycle {
	/// A new cycle starts out pumping
	pub fn new(now: u32) -> Self {
		Self::with_state(true, now)
	}

	/// Create a cycle in a given state with its timer started at `now`
	pub fn with_state(pumping: bool, now: u32) -> Self {
		Self {
			pumping,
			chrono: Chrono::new(now),
		}
	}

	pub fn is_pumping(&self) -> bool {
		self.pumping
	}

	pub fn phase(&self) -> Phase {
		Phase::from_pumping(self.pumping)
	}

	/// How long the current phase lasts
	pub fn threshold(&self, pump_time: u32) -> u32 {
		if self.pumping {
			pump_time
		} else {
			CYCLE_TIME_MS
		}
	}

	/// Whether the current phase has run its course
	pub fn is_due(&self, now: u32, pump_time: u32) -> bool {
		self.chrono.has_passed(now, self.threshold(pump_time))
	}

	/// Switch phase
	///
	/// An engaged prime switch keeps the pump running no matter what. Otherwise the pump only
	/// starts when it is light outside. Stopping the pump is never vetoed.
	pub fn transition(&mut self, now: u32, prime: bool, light: bool) -> Phase {
		self.chrono.restart(now);
		let flipped = !self.pumping;
		self.pumping = if prime { true } else { flipped && light };
		self.phase()
	}
}
