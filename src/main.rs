#![cfg_attr(target_arch = "avr", no_std, no_main)]

#[cfg(target_arch = "avr")]
mod firmware {
	use arduino_hal::{Delay, Peripherals, Pins};
	use core::panic::PanicInfo;
	use greenhouse_irrigation::{
		board::{
			display::Display,
			interrupts::{self, RESET},
			timer::{Timer, TIMER},
			AnalogSensors, BoardInputs, BoardOutputs,
		},
		log,
		serial::set_serial,
		Controller,
	};

	#[arduino_hal::entry]
	fn main() -> ! {
		let dp: Peripherals = arduino_hal::Peripherals::take().unwrap();
		let pins: Pins = arduino_hal::pins!(dp);

		// Initialize the serial interface for telemetry.
		set_serial(arduino_hal::default_serial!(dp, pins, 57600));

		// Initialize the timer.
		Timer::init(dp.TC0);

		let mut adc = arduino_hal::Adc::new(dp.ADC, Default::default());
		let light_sensor = pins.a0.into_analog_input(&mut adc);
		let pot = pins.a1.into_analog_input(&mut adc);

		// All switches pull their pin to ground when closed.
		let _reset_switch = pins.d4.into_pull_up_input();
		let prime = pins.d5.into_pull_up_input();
		let tank_empty = pins.d6.into_pull_up_input();
		let display_sense = pins.d7.into_pull_up_input();

		let pump = pins.d8.into_output();
		let led = pins.d9.into_output();

		// The OLED display is using the I2C interface, not SPI.
		let i2c = arduino_hal::I2c::new(
			dp.TWI,
			pins.a4.into_pull_up_input(),
			pins.a5.into_pull_up_input(),
			100_000,
		);

		interrupts::watch(&dp.EXINT);

		// Turn on interrupts for this device.
		unsafe { avr_device::interrupt::enable() };

		let analog = AnalogSensors::new(adc, light_sensor, pot);
		let inputs: BoardInputs = BoardInputs::new(tank_empty, prime, display_sense, analog);
		let outputs: BoardOutputs = BoardOutputs::new(pump, led);
		let mut controller =
			Controller::new(inputs, outputs, Display::new(i2c), &TIMER, Delay::new(), &RESET);

		loop {
			// Every session ends in a restart request, the next one starts from scratch.
			let restart = controller.run();
			log!("{:?}", restart);
		}
	}

	#[panic_handler]
	fn panic(_: &PanicInfo) -> ! {
		loop {}
	}
}

#[cfg(not(target_arch = "avr"))]
fn main() {
	eprintln!("greenhouse-irrigation runs on the Arduino Nano, build it for the avr-atmega328p target");
}
