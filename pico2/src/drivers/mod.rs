//! Peripheral protocols.
//!
//! - `bh1750`: Ambient light sensor over I2C
//! - `tcs34725`: RGB color sensor over I2C (GY-33 module)
//! - `buzzer`: PWM settings for the alert tone
//! - `matrix`: WS2812 frame for the 5x5 LED matrix

pub mod bh1750;
pub mod buzzer;
pub mod matrix;
pub mod tcs34725;
