//! Restart requests raised from pin-change interrupts
//!
//! A restart throws away every bit of control state and starts a new session from scratch. It is
//! the only way to leave diagnostic mode or the tank-empty alarm, and the way configuration
//! changes (plugging in the display, flipping the prime switch) take effect.

use core::sync::atomic::{AtomicBool, Ordering};
use ufmt::derive::uDebug;

/// Returned by every control step which was cut short by a restart request
#[derive(uDebug, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Restart;

/// Flag set from interrupt context and polled by the control loop
///
/// Only plain loads and stores are used since the AVR has no atomic read-modify-write.
pub struct ResetTrigger {
	requested: AtomicBool,
}

impl ResetTrigger {
	pub const fn new() -> Self {
		Self {
			requested: AtomicBool::new(false),
		}
	}

	pub fn request(&self) {
		self.requested.store(true, Ordering::SeqCst);
	}

	pub fn is_requested(&self) -> bool {
		self.requested.load(Ordering::SeqCst)
	}

	/// Forget about a pending request
	pub fn clear(&self) {
		self.requested.store(false, Ordering::SeqCst);
	}

	/// Fail with [`Restart`] if a restart has been requested
	pub fn check(&self) -> Result<(), Restart> {
		if self.is_requested() {
			Err(Restart)
		} else {
			Ok(())
		}
	}
}

impl Default for ResetTrigger {
	fn default() -> Self {
		Self::new()
	}
}

/// Electrical levels of the watched inputs, `true` meaning high
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PinLevels {
	pub reset_switch: bool,
	pub prime: bool,
	pub tank_empty: bool,
	pub display_sense: bool,
}

impl PinLevels {
	/// Whether moving from `previous` to these levels should restart the controller
	///
	/// The reset button only counts when it is pressed (falling edge). Any change of the other
	/// inputs counts.
	pub fn triggers_restart(&self, previous: &PinLevels) -> bool {
		let reset_pressed = previous.reset_switch && !self.reset_switch;

		reset_pressed
			|| previous.prime != self.prime
			|| previous.tank_empty != self.tank_empty
			|| previous.display_sense != self.display_sense
	}
}
