//! TCS34725 RGBC color sensor (GY-33 module).
//!
//! Register addresses are sent with the command bit set. Reads use the
//! auto-increment protocol so clear, red, green and blue come from one
//! 8-byte burst starting at CDATA, each channel little-endian.

use embedded_hal_async::i2c::I2c;

use crate::error::SensorError;

const COMMAND: u8 = 0x80;
const AUTO_INCREMENT: u8 = 0x20;

const ENABLE: u8 = 0x00;
const ATIME: u8 = 0x01;
const CONTROL: u8 = 0x0F;
const CDATA: u8 = 0x14;

/// Power on and enable the RGBC ADC.
const ENABLE_PON_AEN: u8 = 0x03;
/// 43 integration cycles, about 103 ms.
const ATIME_103MS: u8 = 0xD5;
const GAIN_1X: u8 = 0x00;

/// One RGBC conversion.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ColorReading {
    pub clear: u16,
    pub red: u16,
    pub green: u16,
    pub blue: u16,
}

impl ColorReading {
    /// Decode the CDATA..BDATAH burst.
    pub const fn from_burst(buf: &[u8; 8]) -> Self {
        Self {
            clear: u16::from_le_bytes([buf[0], buf[1]]),
            red: u16::from_le_bytes([buf[2], buf[3]]),
            green: u16::from_le_bytes([buf[4], buf[5]]),
            blue: u16::from_le_bytes([buf[6], buf[7]]),
        }
    }
}

pub struct Tcs34725 {
    address: u8,
}

impl Tcs34725 {
    pub const fn new(address: u8) -> Self { Self { address } }

    /// Enable the sensor with ~103 ms integration and 1x gain.
    pub async fn init<I: I2c>(
        &self,
        i2c: &mut I,
    ) -> Result<(), SensorError> {
        for (register, value) in [(ENABLE, ENABLE_PON_AEN), (ATIME, ATIME_103MS), (CONTROL, GAIN_1X)] {
            i2c.write(self.address, &[COMMAND | register, value])
                .await
                .map_err(|_| SensorError::Color)?;
        }
        Ok(())
    }

    /// Latest conversion of all four channels.
    pub async fn read<I: I2c>(
        &self,
        i2c: &mut I,
    ) -> Result<ColorReading, SensorError> {
        let mut buf = [0u8; 8];
        i2c.write_read(self.address, &[COMMAND | AUTO_INCREMENT | CDATA], &mut buf)
            .await
            .map_err(|_| SensorError::Color)?;
        Ok(ColorReading::from_burst(&buf))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TCS34725_ADDRESS;
    use crate::testing::{MockI2c, block_on};

    #[test]
    fn test_init_writes_registers() {
        let sensor = Tcs34725::new(TCS34725_ADDRESS);
        let mut i2c = MockI2c::new();

        block_on(sensor.init(&mut i2c)).unwrap();

        assert_eq!(
            i2c.writes,
            [
                (0x29, vec![0x80, 0x03]),
                (0x29, vec![0x81, 0xD5]),
                (0x29, vec![0x8F, 0x00]),
            ]
        );
    }

    #[test]
    fn test_burst_read() {
        let sensor = Tcs34725::new(TCS34725_ADDRESS);
        let mut i2c = MockI2c::new();
        i2c.queue_read(&[0x2C, 0x01, 0xC8, 0x00, 0x0A, 0x00, 0x00, 0x01]);

        let reading = block_on(sensor.read(&mut i2c)).unwrap();

        assert_eq!(i2c.writes, [(0x29, vec![0xB4])]);
        assert_eq!(
            reading,
            ColorReading {
                clear: 300,
                red: 200,
                green: 10,
                blue: 256,
            }
        );
    }

    #[test]
    fn test_bus_failure() {
        let sensor = Tcs34725::new(TCS34725_ADDRESS);
        let mut i2c = MockI2c::failing(TCS34725_ADDRESS);

        assert_eq!(block_on(sensor.init(&mut i2c)), Err(SensorError::Color));
        assert_eq!(block_on(sensor.read(&mut i2c)), Err(SensorError::Color));
    }
}
