//! Frame for the 5x5 WS2812 matrix.
//!
//! Every cell shows the same color. Byte order on the wire (GRB) is the
//! PIO driver's concern.

use lumicolor_common::OutputColor;
use lumicolor_common::config::MATRIX_PIXELS;
use smart_leds::RGB8;

pub type Frame = [RGB8; MATRIX_PIXELS];

/// All cells off.
pub const DARK_FRAME: Frame = [RGB8 { r: 0, g: 0, b: 0 }; MATRIX_PIXELS];

/// Fill the matrix with `color`.
#[inline]
pub const fn frame(color: OutputColor) -> Frame {
    [RGB8 {
        r: color.r,
        g: color.g,
        b: color.b,
    }; MATRIX_PIXELS]
}

// =============================================================================
// Unit Tests
// =============================================================================
