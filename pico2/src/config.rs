//! Board wiring and bus settings (BitDogLab on a Pico 2).
//!
//! Pins themselves are taken by name from the peripherals struct in
//! `main.rs`; the map is kept here for reference:
//!
//! | Function            | Pin    | Peripheral      |
//! |---------------------|--------|-----------------|
//! | Sensor SDA / SCL    | 0 / 1  | I2C0            |
//! | Button A            | 5      | GPIO, pull-up   |
//! | Button B            | 6      | GPIO, pull-up   |
//! | WS2812 data         | 7      | PIO0 SM0        |
//! | Buzzer              | 10     | PWM slice 5 A   |
//! | Display SDA / SCL   | 14 / 15| I2C1            |
//! | Joystick button     | 22     | GPIO, pull-up   |

// =============================================================================
// I2C Buses
// =============================================================================

/// Sensor bus clock. Both sensors share I2C0.
pub const SENSOR_I2C_HZ: u32 = 100_000;

/// Display bus clock.
pub const DISPLAY_I2C_HZ: u32 = 400_000;

/// TCS34725 color sensor (GY-33 module).
pub const TCS34725_ADDRESS: u8 = 0x29;

/// BH1750 light sensor, ADDR pin low.
pub const BH1750_ADDRESS: u8 = 0x23;

/// SSD1306 OLED.
pub const SSD1306_ADDRESS: u8 = 0x3C;

// =============================================================================
// Buzzer
// =============================================================================

/// Alert tone.
pub const BUZZER_TONE_HZ: u32 = 1500;

/// PWM counts per tone period.
pub const BUZZER_PERIOD_COUNTS: u16 = 1000;

/// Compare level while sounding (5% duty).
pub const BUZZER_ON_LEVEL: u16 = 50;

const _: () = assert!(BUZZER_ON_LEVEL < BUZZER_PERIOD_COUNTS);

// =============================================================================
// Tasks
// =============================================================================

/// Button edges buffered between the GPIO tasks and the navigation task.
pub const EDGE_QUEUE_DEPTH: usize = 8;

/// Demo waveform update interval (`demo-sensors` feature).
pub const DEMO_UPDATE_MS: u64 = 20;
