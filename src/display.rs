use core::convert::Infallible;

use ufmt::uWrite;

/// A single row is 16 characters across.
pub const ROW_LENGTH: u8 = 16;

/// Rows used by the diagnostic screens
pub const ROW_COUNT: u8 = 2;

/// Character grid the diagnostic screens are written to
///
/// Text is written with [`ufmt`] from the current cursor position.
pub trait TextDisplay: uWrite<Error = Infallible> {
	/// Wake the display up. Only called once a display is known to be plugged in.
	fn init(&mut self);

	fn clear(&mut self);

	fn set_position(&mut self, column: u8, row: u8);
}
