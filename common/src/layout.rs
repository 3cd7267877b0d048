//! Line positions on the 128x64 OLED.
//!
//! Each screen has a fixed origin (top-left pixel) per line, in the order
//! [`render::select`](crate::render::select) emits them. Titles sit higher
//! and, on the menu and status screens, are indented to look centred in the
//! ProFont 9pt face.

use embedded_graphics::prelude::Point;

use crate::navigation::Screen;

pub const MENU_ORIGINS: [Point; 3] = [Point::new(16, 4), Point::new(4, 24), Point::new(4, 40)];

pub const STATUS_ORIGINS: [Point; 4] = [Point::new(24, 2), Point::new(4, 16), Point::new(4, 30), Point::new(4, 44)];

pub const VALUES_ORIGINS: [Point; 4] = [Point::new(4, 2), Point::new(4, 20), Point::new(4, 34), Point::new(4, 48)];

/// Line origins for `screen`.
#[inline]
pub const fn line_origins(screen: Screen) -> &'static [Point] {
    match screen {
        Screen::Menu => &MENU_ORIGINS,
        Screen::Status => &STATUS_ORIGINS,
        Screen::Values => &VALUES_ORIGINS,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
    use crate::render::MAX_LINES;

    #[test]
    fn test_origins_on_screen() {
        for screen in [Screen::Menu, Screen::Status, Screen::Values] {
            let origins = line_origins(screen);
            assert!(origins.len() <= MAX_LINES);
            for origin in origins {
                assert!(origin.x >= 0 && (origin.x as u32) < SCREEN_WIDTH);
                assert!(origin.y >= 0 && (origin.y as u32) < SCREEN_HEIGHT);
            }
        }
    }

    #[test]
    fn test_lines_move_down() {
        for screen in [Screen::Menu, Screen::Status, Screen::Values] {
            let origins = line_origins(screen);
            assert!(origins.windows(2).all(|pair| pair[0].y < pair[1].y));
        }
    }
}
