//! Firmware error types.
//!
//! All variants carry only fixed-size data so they can be logged with
//! defmt and copied freely. None of them stop the sampling loop: the caller
//! logs the error and carries on with a zeroed reading or a stale frame.

/// Sensor bus failures.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
pub enum SensorError {
    /// An I2C transaction with the light sensor failed.
    Light,
    /// An I2C transaction with the color sensor failed.
    Color,
}

/// OLED failures.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
pub enum DisplayError {
    /// Controller initialization commands were not acknowledged.
    Init,
    /// Sending the framebuffer failed.
    Flush,
}

/// Any firmware error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
pub enum Error {
    Sensor(SensorError),
    Display(DisplayError),
}

impl From<SensorError> for Error {
    fn from(e: SensorError) -> Self { Self::Sensor(e) }
}

impl From<DisplayError> for Error {
    fn from(e: DisplayError) -> Self { Self::Display(e) }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn first_failure(
        light: Result<u16, SensorError>,
        flush: Result<(), DisplayError>,
    ) -> Result<u16, Error> {
        let lux = light?;
        flush?;
        Ok(lux)
    }

    #[test]
    fn test_question_mark_converts() {
        assert_eq!(first_failure(Ok(10), Ok(())), Ok(10));
        assert_eq!(first_failure(Err(SensorError::Light), Ok(())), Err(Error::Sensor(SensorError::Light)));
        assert_eq!(first_failure(Ok(10), Err(DisplayError::Flush)), Err(Error::Display(DisplayError::Flush)));
    }
}
