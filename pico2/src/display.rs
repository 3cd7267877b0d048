//! SSD1306 128x64 OLED on I2C1.
//!
//! Buffered graphics mode: each cycle redraws the whole screen into RAM and
//! [`present`] sends it in one flush.

use lumicolor_common::Screen;
use lumicolor_common::draw::draw_screen;
use lumicolor_common::render::Line;
use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::*;
use ssd1306::{I2CDisplayInterface, Ssd1306};

use crate::config::SSD1306_ADDRESS;
use crate::error::DisplayError;

/// Concrete display driver, generic over the blocking I2C bus.
pub type Oled<I2C> = Ssd1306<I2CInterface<I2C>, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>;

/// Initialize the controller and blank the panel.
pub fn init<I2C>(i2c: I2C) -> Result<Oled<I2C>, DisplayError>
where
    I2C: embedded_hal::i2c::I2c,
{
    let interface = I2CDisplayInterface::new_custom_address(i2c, SSD1306_ADDRESS);
    let mut display = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0).into_buffered_graphics_mode();
    display.init().map_err(|_| DisplayError::Init)?;
    display.clear_buffer();
    display.flush().map_err(|_| DisplayError::Flush)?;
    Ok(display)
}

/// Draw `lines` for `screen` and send the frame.
pub fn present<I2C>(
    display: &mut Oled<I2C>,
    screen: Screen,
    lines: &[Line],
) -> Result<(), DisplayError>
where
    I2C: embedded_hal::i2c::I2c,
{
    draw_screen(display, screen, lines);
    display.flush().map_err(|_| DisplayError::Flush)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use lumicolor_common::Decision;
    use lumicolor_common::render::select;

    use super::*;
    use crate::testing::MockI2c;

    #[test]
    fn test_init_talks_to_display_address() {
        let display = init(MockI2c::new()).unwrap();
        let i2c = display.release().release();

        assert!(!i2c.writes.is_empty());
        assert!(i2c.writes.iter().all(|(address, _)| *address == SSD1306_ADDRESS));
    }

    #[test]
    fn test_present_sends_lit_pixels() {
        let mut display = init(MockI2c::new()).unwrap();
        let lines = select(Screen::Menu, &Decision::default());

        present(&mut display, Screen::Menu, &lines).unwrap();

        let i2c = display.release().release();
        // Data writes start with the 0x40 control byte
        let lit = i2c
            .writes
            .iter()
            .filter(|(_, bytes)| bytes.first() == Some(&0x40))
            .any(|(_, bytes)| bytes[1..].iter().any(|b| *b != 0));
        assert!(lit);
    }

    #[test]
    fn test_missing_display() {
        assert_eq!(init(MockI2c::failing(SSD1306_ADDRESS)).err(), Some(DisplayError::Init));
    }
}
