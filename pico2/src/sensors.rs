//! Both sensors on the shared I2C0 bus.
//!
//! A failed read never stops the loop: the affected fields are zeroed and
//! the fault is handed back for the caller to log.

use embedded_hal_async::delay::DelayNs;
use embedded_hal_async::i2c::I2c;
use lumicolor_common::RawSample;

use crate::config::{BH1750_ADDRESS, TCS34725_ADDRESS};
use crate::drivers::bh1750::Bh1750;
use crate::drivers::tcs34725::{ColorReading, Tcs34725};
use crate::error::SensorError;

/// One sample plus whatever went wrong getting it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Readout {
    pub sample: RawSample,
    pub light_fault: Option<SensorError>,
    pub color_fault: Option<SensorError>,
}

impl Readout {
    pub fn faults(&self) -> impl Iterator<Item = SensorError> { self.light_fault.into_iter().chain(self.color_fault) }
}

pub struct Sensors<I> {
    i2c: I,
    light: Bh1750,
    color: Tcs34725,
}

impl<I: I2c> Sensors<I> {
    pub const fn new(i2c: I) -> Self {
        Self {
            i2c,
            light: Bh1750::new(BH1750_ADDRESS),
            color: Tcs34725::new(TCS34725_ADDRESS),
        }
    }

    /// Configure both sensors. Each is attempted even if the other fails;
    /// the first failure is returned.
    pub async fn init<D: DelayNs>(
        &mut self,
        delay: &mut D,
    ) -> Result<(), SensorError> {
        let light = self.light.init(&mut self.i2c, delay).await;
        let color = self.color.init(&mut self.i2c).await;
        light.and(color)
    }

    /// Read both sensors, zeroing whatever could not be read.
    pub async fn read(&mut self) -> Readout {
        let (lux, light_fault) = match self.light.read_lux(&mut self.i2c).await {
            Ok(lux) => (lux, None),
            Err(e) => (0, Some(e)),
        };
        let (color, color_fault) = match self.color.read(&mut self.i2c).await {
            Ok(color) => (color, None),
            Err(e) => (ColorReading::default(), Some(e)),
        };

        Readout {
            sample: RawSample {
                light: lux,
                red: color.red,
                green: color.green,
                blue: color.blue,
                clear: color.clear,
            },
            light_fault,
            color_fault,
        }
    }

    /// Release the bus.
    pub fn release(self) -> I { self.i2c }
}

// =============================================================================
// Unit Tests
// =============================================================================
