//! Write formatted telemetry to the USART peripheral.

use core::{convert::Infallible, ptr::addr_of_mut};
use ufmt::uWrite;

#[cfg(target_arch = "avr")]
pub type Port = arduino_hal::hal::usart::Usart0<arduino_hal::clock::MHz16>;

/// Stand-in port for builds without a USART, swallows everything written to it
#[cfg(not(target_arch = "avr"))]
pub struct Port;

#[cfg(not(target_arch = "avr"))]
impl uWrite for Port {
	type Error = Infallible;

	fn write_str(&mut self, _s: &str) -> Result<(), Self::Error> {
		Ok(())
	}
}

pub struct SerialWriter {
	inner: Option<Port>,
}

impl uWrite for SerialWriter {
	type Error = Infallible;

	/// Output written before [`set_serial`] is dropped.
	fn write_str(&mut self, s: &str) -> Result<(), Self::Error> {
		if let Some(serial) = &mut self.inner {
			let _ = serial.write_str(s);
		}

		Ok(())
	}
}

static mut SERIAL: SerialWriter = SerialWriter { inner: None };

pub fn set_serial(serial: Port) {
	let writer = unsafe { writer() };
	if writer.inner.is_none() {
		writer.inner = Some(serial);
	}
}

/// Access the global writer
///
/// # Safety
///
/// The writer must only be used from the main thread of execution, never from an interrupt.
#[doc(hidden)]
pub unsafe fn writer() -> &'static mut SerialWriter {
	&mut *addr_of_mut!(SERIAL)
}

/// Convenience wrapper so that `unsafe { ... }` isn't required whenever something should be
/// logged to serial output.
///
/// ```ignore
/// log!("{}, {}", my_value_1, my_value_2);
/// ```
#[macro_export]
macro_rules! log {
    ($fmt:literal) => {{
		let writer = unsafe { $crate::serial::writer() };
		let _ = ufmt::uwriteln!(writer, $fmt);
	}};
    ($fmt:literal, $($values:expr),*) => {{
		let writer = unsafe { $crate::serial::writer() };
		let _ = ufmt::uwriteln!(writer, $fmt, $($values),*);
	}}
}
