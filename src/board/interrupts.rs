//! Pin-change interrupt which turns edges on the watched switches into restart requests

use arduino_hal::pac::{EXINT, PORTD};
use avr_device::interrupt::Mutex;
use core::cell::Cell;

use crate::reset::{PinLevels, ResetTrigger};

/// D4, manual reset button
const RESET_SWITCH: u8 = 1 << 4;
/// D5, prime switch
const PRIME: u8 = 1 << 5;
/// D6, tank-empty switch
const TANK_EMPTY: u8 = 1 << 6;
/// D7, display presence sense
const DISPLAY_SENSE: u8 = 1 << 7;

const WATCHED: u8 = RESET_SWITCH | PRIME | TANK_EMPTY | DISPLAY_SENSE;

/// Enables the PCINT2 vector, which covers port D
const PCIE2: u8 = 1 << 2;

pub static RESET: ResetTrigger = ResetTrigger::new();

/// Port D levels seen by the previous interrupt
static LAST_LEVELS: Mutex<Cell<u8>> = Mutex::new(Cell::new(WATCHED));

fn read_port() -> u8 {
	unsafe { (*PORTD::ptr()).pind.read().bits() }
}

fn levels(port: u8) -> PinLevels {
	PinLevels {
		reset_switch: port & RESET_SWITCH != 0,
		prime: port & PRIME != 0,
		tank_empty: port & TANK_EMPTY != 0,
		display_sense: port & DISPLAY_SENSE != 0,
	}
}

/// Start watching the switches
///
/// The pins have to be configured as pulled-up inputs before this is called.
pub fn watch(exint: &EXINT) {
	avr_device::interrupt::free(|cs| LAST_LEVELS.borrow(cs).set(read_port()));
	exint.pcmsk2.write(|w| unsafe { w.bits(WATCHED) });
	exint.pcicr.write(|w| unsafe { w.bits(PCIE2) });
}

#[avr_device::interrupt(atmega328p)]
#[allow(non_snake_case)]
fn PCINT2() {
	avr_device::interrupt::free(|cs| {
		let last_cell = LAST_LEVELS.borrow(cs);
		let current = read_port();
		if levels(current).triggers_restart(&levels(last_cell.get())) {
			RESET.request();
		}
		last_cell.set(current);
	})
}
