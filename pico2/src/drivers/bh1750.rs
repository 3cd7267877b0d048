//! BH1750 ambient light sensor.
//!
//! Runs in continuous high-resolution mode: after start-up every read
//! returns the latest conversion as a big-endian count, 1.2 counts per lux.

use embedded_hal_async::delay::DelayNs;
use embedded_hal_async::i2c::I2c;

use crate::error::SensorError;

const POWER_ON: u8 = 0x01;
const CONTINUOUS_HIGH_RES: u8 = 0x10;

/// Worst-case first conversion time in high-resolution mode.
const FIRST_CONVERSION_MS: u32 = 180;

/// Counts to lux (divide by 1.2).
#[inline]
pub const fn lux_from_raw(raw: u16) -> u16 { (raw as u32 * 10 / 12) as u16 }

pub struct Bh1750 {
    address: u8,
}

impl Bh1750 {
    pub const fn new(address: u8) -> Self { Self { address } }

    /// Power on, start continuous conversions and wait for the first one.
    pub async fn init<I: I2c, D: DelayNs>(
        &self,
        i2c: &mut I,
        delay: &mut D,
    ) -> Result<(), SensorError> {
        i2c.write(self.address, &[POWER_ON])
            .await
            .map_err(|_| SensorError::Light)?;
        i2c.write(self.address, &[CONTINUOUS_HIGH_RES])
            .await
            .map_err(|_| SensorError::Light)?;
        delay.delay_ms(FIRST_CONVERSION_MS).await;
        Ok(())
    }

    /// Latest light level in lux.
    pub async fn read_lux<I: I2c>(
        &self,
        i2c: &mut I,
    ) -> Result<u16, SensorError> {
        let mut buf = [0u8; 2];
        i2c.read(self.address, &mut buf)
            .await
            .map_err(|_| SensorError::Light)?;
        Ok(lux_from_raw(u16::from_be_bytes(buf)))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BH1750_ADDRESS;
    use crate::testing::{MockI2c, NoDelay, block_on};

    #[test]
    fn test_lux_conversion() {
        assert_eq!(lux_from_raw(0), 0);
        assert_eq!(lux_from_raw(12), 10);
        assert_eq!(lux_from_raw(1200), 1000);
        // Truncates
        assert_eq!(lux_from_raw(13), 10);
        assert_eq!(lux_from_raw(u16::MAX), 54_612);
    }

    #[test]
    fn test_init_sequence() {
        let sensor = Bh1750::new(BH1750_ADDRESS);
        let mut i2c = MockI2c::new();
        let mut delay = NoDelay::default();

        block_on(sensor.init(&mut i2c, &mut delay)).unwrap();

        assert_eq!(i2c.writes, [(0x23, vec![0x01]), (0x23, vec![0x10])]);
        assert_eq!(delay.total_ns, 180_000_000);
    }

    #[test]
    fn test_read_is_big_endian() {
        let sensor = Bh1750::new(BH1750_ADDRESS);
        let mut i2c = MockI2c::new();
        // 0x01E0 = 480 counts = 400 lux
        i2c.queue_read(&[0x01, 0xE0]);

        assert_eq!(block_on(sensor.read_lux(&mut i2c)), Ok(400));
    }

    #[test]
    fn test_bus_failure() {
        let sensor = Bh1750::new(BH1750_ADDRESS);
        let mut i2c = MockI2c::failing(BH1750_ADDRESS);

        assert_eq!(block_on(sensor.read_lux(&mut i2c)), Err(SensorError::Light));
        assert_eq!(block_on(sensor.init(&mut i2c, &mut NoDelay::default())), Err(SensorError::Light));
    }
}
