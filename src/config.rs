//! Fixed timings and thresholds which drive the controller
//!
//! There is no runtime configuration. The pump potentiometer is the only value an operator can
//! tune, everything else is decided here.

/// Largest value the 10-bit ADC returns
pub const ADC_MAX: u16 = 1023;

/// Shortest pump run time in milliseconds, with the potentiometer turned fully down
pub const MIN_PUMP_TIME_MS: u32 = 5_000;
/// Longest pump run time in milliseconds, with the potentiometer turned fully up
pub const MAX_PUMP_TIME_MS: u32 = 600_000;
/// How long the pump rests between runs
pub const CYCLE_TIME_MS: u32 = 3_600_000;

/// Light sensor readings below this value count as daytime (lower readings are brighter)
pub const DARK_THRESHOLD: u16 = 512;

/// LED lit phase while pumping
pub const LED_ON_PUMPING_MS: u32 = 500;
/// LED dark phase while pumping
pub const LED_OFF_PUMPING_MS: u32 = 1_500;
/// LED lit phase while idle
pub const LED_ON_IDLE_MS: u32 = 10;
/// LED dark phase while idle
pub const LED_OFF_IDLE_MS: u32 = 2_000;

/// LED lit phase of the tank-empty alarm
pub const ALARM_ON_MS: u32 = 20;
/// LED dark phase of the tank-empty alarm
pub const ALARM_OFF_MS: u32 = 500;

/// Number of blinks confirming that a session has started
pub const STARTUP_BLINKS: u8 = 3;
/// Lit and dark phase of each startup blink
pub const STARTUP_BLINK_MS: u32 = 250;

/// How long each diagnostic screen stays up
pub const DIAGNOSTIC_DWELL_MS: u32 = 2_000;
