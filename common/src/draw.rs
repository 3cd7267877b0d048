//! Drawing selected lines onto a monochrome target.
//!
//! Works on any `DrawTarget<Color = BinaryColor>`: the SSD1306 buffer on
//! the device and the `SimulatorDisplay` on the desktop.

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::text::{Baseline, Text};
use profont::PROFONT_9_POINT;

use crate::layout::line_origins;
use crate::navigation::Screen;
use crate::render::Line;

/// Text style for every line on the OLED.
pub const TEXT_STYLE: MonoTextStyle<'static, BinaryColor> = MonoTextStyle::new(&PROFONT_9_POINT, BinaryColor::On);

/// Clear `display` and draw `lines` at the origins for `screen`.
///
/// Lines beyond the layout's slot count are dropped.
pub fn draw_screen<D>(
    display: &mut D,
    screen: Screen,
    lines: &[Line],
) where
    D: DrawTarget<Color = BinaryColor>,
{
    display.clear(BinaryColor::Off).ok();

    for (line, origin) in lines.iter().zip(line_origins(screen)) {
        Text::with_baseline(line.as_str(), *origin, TEXT_STYLE, Baseline::Top)
            .draw(display)
            .ok();
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
