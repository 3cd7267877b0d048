//! Text dump of a monochrome display.
//!
//! Two pixel rows share one text row using half-block glyphs, so the
//! 128x64 OLED prints as 128 columns by 32 lines.

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::SimulatorDisplay;

/// Render `display` as text, one line per pair of pixel rows.
pub fn render(display: &SimulatorDisplay<BinaryColor>) -> String {
    let size = display.size();
    let (width, height) = (size.width as i32, size.height as i32);
    let lit = |x: i32, y: i32| y < height && display.get_pixel(Point::new(x, y)) == BinaryColor::On;

    let mut out = String::with_capacity(((width + 1) * (height / 2 + 1)) as usize);
    for y in (0..height).step_by(2) {
        for x in 0..width {
            out.push(match (lit(x, y), lit(x, y + 1)) {
                (true, true) => '█',
                (true, false) => '▀',
                (false, true) => '▄',
                (false, false) => ' ',
            });
        }
        out.push('\n');
    }
    out
}

// =============================================================================
// Unit Tests
// =============================================================================
