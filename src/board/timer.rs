//! Millisecond clock driven by TIMER0
//!
//! Ref: https://blog.rahix.de/005-avr-hal-millis/

use avr_device::interrupt::Mutex;
use core::cell::Cell;

use crate::chrono::Clock;

const PRESCALER: u32 = 64;
const TIMER_COUNTS: u32 = 250;

const MILLIS_INCREMENT: u32 = PRESCALER * TIMER_COUNTS / 16000;

pub struct Timer {
	millis: Mutex<Cell<u32>>,
}

impl Timer {
	pub fn init(tc0: arduino_hal::pac::TC0) {
		// Configure the timer for the above interval (in CTC mode)
		// and enable its interrupt.
		tc0.tccr0a.write(|w| w.wgm0().ctc());
		tc0.ocr0a.write(|w| unsafe { w.bits(TIMER_COUNTS as u8) });
		tc0.tccr0b.write(|w| match PRESCALER {
			8 => w.cs0().prescale_8(),
			64 => w.cs0().prescale_64(),
			256 => w.cs0().prescale_256(),
			1024 => w.cs0().prescale_1024(),
			_ => panic!(),
		});
		tc0.timsk0.write(|w| w.ocie0a().set_bit());
	}
}

impl Clock for Timer {
	fn millis(&self) -> u32 {
		avr_device::interrupt::free(|cs| self.millis.borrow(cs).get())
	}
}

pub static TIMER: Timer = Timer {
	millis: Mutex::new(Cell::new(0)),
};

#[avr_device::interrupt(atmega328p)]
#[allow(non_snake_case)]
fn TIMER0_COMPA() {
	avr_device::interrupt::free(|cs| {
		let millis_cell = TIMER.millis.borrow(cs);
		millis_cell.set(millis_cell.get().wrapping_add(MILLIS_INCREMENT));
	})
}
