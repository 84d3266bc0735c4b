//! Screens shown while a display is plugged in

use ufmt::{derive::uDebug, uWrite};

use crate::{
	display::TextDisplay,
	sampler::{is_light, light_percent, pot_percent, pump_time_setting, Inputs},
};

/// Diagnostic screens, in the order they are shown
#[derive(uDebug, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
	WaterLevel,
	LightLevel,
	PumpSetting,
	PrimeSwitch,
}

impl Screen {
	pub const SEQUENCE: [Screen; 4] = [
		Screen::WaterLevel,
		Screen::LightLevel,
		Screen::PumpSetting,
		Screen::PrimeSwitch,
	];

	/// Take the readings this screen shows
	pub fn sample<I: Inputs>(self, inputs: &mut I) -> Reading {
		match self {
			Self::WaterLevel => Reading::WaterLevel {
				tank_empty: inputs.tank_empty(),
			},
			Self::LightLevel => Reading::LightLevel {
				raw: inputs.raw_light(),
			},
			Self::PumpSetting => Reading::PumpSetting {
				raw: inputs.raw_pot(),
			},
			Self::PrimeSwitch => Reading::PrimeSwitch {
				engaged: inputs.prime_engaged(),
			},
		}
	}
}

/// A sampled value ready to be rendered
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reading {
	WaterLevel { tank_empty: bool },
	LightLevel { raw: u16 },
	PumpSetting { raw: u16 },
	PrimeSwitch { engaged: bool },
}

impl Reading {
	/// Clear the display and write the two rows of this reading
	pub fn render<D: TextDisplay>(&self, display: &mut D) {
		display.clear();
		display.set_position(0, 0);
		let _ = self.write_heading(display);
		display.set_position(0, 1);
		let _ = self.write_detail(display);
	}

	fn write_heading<W: uWrite + ?Sized>(&self, w: &mut W) -> Result<(), W::Error> {
		match self {
			Self::WaterLevel { .. } => ufmt::uwrite!(w, "Water level"),
			Self::LightLevel { raw } => ufmt::uwrite!(w, "Light level {}%", light_percent(*raw)),
			Self::PumpSetting { raw } => ufmt::uwrite!(w, "Pump pot {}%", pot_percent(*raw)),
			Self::PrimeSwitch { .. } => ufmt::uwrite!(w, "Prime switch"),
		}
	}

	fn write_detail<W: uWrite + ?Sized>(&self, w: &mut W) -> Result<(), W::Error> {
		match self {
			Self::WaterLevel { tank_empty: false } => ufmt::uwrite!(w, "We have water"),
			Self::WaterLevel { tank_empty: true } => ufmt::uwrite!(w, "Tank is empty"),
			Self::LightLevel { raw } if is_light(*raw) => ufmt::uwrite!(w, "It's daytime"),
			Self::LightLevel { .. } => ufmt::uwrite!(w, "It's night"),
			Self::PumpSetting { raw } => {
				let seconds = pump_time_setting(*raw) / 1_000;
				let (minutes, seconds) = (seconds / 60, seconds % 60);
				ufmt::uwrite!(w, "Run time {}:", minutes)?;
				if seconds < 10 {
					ufmt::uwrite!(w, "0")?;
				}
				ufmt::uwrite!(w, "{}", seconds)
			}
			Self::PrimeSwitch { engaged: true } => ufmt::uwrite!(w, "Prime is on"),
			Self::PrimeSwitch { engaged: false } => ufmt::uwrite!(w, "Prime is off"),
		}
	}
}
