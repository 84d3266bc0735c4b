use arduino_hal::I2c;
use core::{convert::Infallible, fmt::Write};

use ssd1306::{mode::TerminalMode, prelude::*, I2CDisplayInterface, Ssd1306};
use ufmt::uWrite;

use crate::display::TextDisplay;

/// SSD1306 OLED in terminal mode, plugged in over I2C
///
/// Nothing is sent over the bus until [`TextDisplay::init`], so this can be created whether a
/// display is attached or not.
pub struct Display {
	inner: Ssd1306<I2CInterface<I2c>, DisplaySize128x64, TerminalMode>,
}

impl Display {
	pub fn new(i2c: I2c) -> Self {
		let interface = I2CDisplayInterface::new(i2c);
		let display = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
			.into_terminal_mode();

		Self { inner: display }
	}
}

impl TextDisplay for Display {
	fn init(&mut self) {
		let _ = self.inner.init();
		let _ = self.inner.clear();
	}

	fn clear(&mut self) {
		let _ = self.inner.clear();
	}

	fn set_position(&mut self, column: u8, row: u8) {
		let _ = self.inner.set_position(column, row);
	}
}

impl uWrite for Display {
	type Error = Infallible;

	fn write_str(&mut self, s: &str) -> Result<(), Self::Error> {
		let _ = self.inner.write_str(s);
		Ok(())
	}
}
