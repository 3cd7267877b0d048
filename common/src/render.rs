//! Text lines for the active screen.
//!
//! [`select`] is a pure function of the screen and the latest
//! [`Decision`]; drawing and logging the lines is left to the caller.

use core::fmt::Write;

use heapless::{String, Vec};

use crate::engine::Decision;
use crate::navigation::Screen;

/// Most lines any screen shows.
pub const MAX_LINES: usize = 4;

/// Characters per line. The widest line ("Estado: Alerta Cor") is 18.
pub const LINE_LENGTH: usize = 24;

pub type Line = String<LINE_LENGTH>;
pub type Lines = Vec<Line, MAX_LINES>;

/// Lines to show on `screen` for this cycle, top to bottom.
pub fn select(
    screen: Screen,
    decision: &Decision,
) -> Lines {
    let mut lines = Lines::new();
    match screen {
        Screen::Menu => {
            push_str(&mut lines, "MENU INICIAL");
            push_str(&mut lines, "A: Tela Status");
            push_str(&mut lines, "B: Tela Valores");
        }
        Screen::Status => {
            let state = decision.alert.system_state(decision.lux);
            push_str(&mut lines, "- STATUS -");
            push_fmt(&mut lines, format_args!("Luz: {} Lux", decision.lux));
            push_fmt(&mut lines, format_args!("Cor: {}", decision.label.display_name()));
            push_fmt(&mut lines, format_args!("Estado: {}", state.display_name()));
        }
        Screen::Values => {
            push_str(&mut lines, "- VALORES RGB -");
            push_fmt(&mut lines, format_args!("Vermelho: {}", decision.color.r));
            push_fmt(&mut lines, format_args!("Verde:    {}", decision.color.g));
            push_fmt(&mut lines, format_args!("Azul:     {}", decision.color.b));
        }
    }
    lines
}

fn push_str(
    lines: &mut Lines,
    text: &str,
) {
    let mut line = Line::new();
    line.push_str(text).ok();
    lines.push(line).ok();
}

fn push_fmt(
    lines: &mut Lines,
    args: core::fmt::Arguments<'_>,
) {
    let mut line = Line::new();
    let _ = line.write_fmt(args);
    lines.push(line).ok();
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alert::AlertState;
    use crate::classify::ColorLabel;
    use crate::sample::NormalizedColor;

    fn texts(lines: &Lines) -> std::vec::Vec<&str> { lines.iter().map(|line| line.as_str()).collect() }

    fn decision(
        lux: u16,
        label: ColorLabel,
        active: bool,
    ) -> Decision {
        Decision {
            lux,
            color: NormalizedColor::new(12, 200, 7),
            label,
            alert: AlertState {
                active,
                blink_phase: false,
            },
            ..Decision::default()
        }
    }

    #[test]
    fn test_menu() {
        let lines = select(Screen::Menu, &Decision::default());
        assert_eq!(texts(&lines), ["MENU INICIAL", "A: Tela Status", "B: Tela Valores"]);
    }

    #[test]
    fn test_status_normal() {
        let lines = select(Screen::Status, &decision(320, ColorLabel::Green, false));
        assert_eq!(texts(&lines), ["- STATUS -", "Luz: 320 Lux", "Cor: Verde", "Estado: Normal"]);
    }

    #[test]
    fn test_status_low_light() {
        let lines = select(Screen::Status, &decision(12, ColorLabel::Dark, true));
        assert_eq!(lines[3].as_str(), "Estado: Luz Baixa");
    }

    #[test]
    fn test_status_color_alert() {
        let lines = select(Screen::Status, &decision(400, ColorLabel::Red, true));
        assert_eq!(lines[2].as_str(), "Cor: Vermelho");
        assert_eq!(lines[3].as_str(), "Estado: Alerta Cor");
    }

    #[test]
    fn test_values() {
        let lines = select(Screen::Values, &decision(0, ColorLabel::Green, false));
        assert_eq!(texts(&lines), ["- VALORES RGB -", "Vermelho: 12", "Verde:    200", "Azul:     7"]);
    }

    #[test]
    fn test_widest_lines_fit() {
        let lines = select(Screen::Status, &decision(u16::MAX, ColorLabel::Undefined, true));
        assert_eq!(lines[1].as_str(), "Luz: 65535 Lux");
        assert_eq!(lines[2].as_str(), "Cor: Indefinido");
        assert_eq!(lines[3].as_str(), "Estado: Alerta Cor");
    }

    #[test]
    fn test_overflow_is_dropped() {
        let mut lines = Lines::new();
        push_str(&mut lines, "esta linha passa dos vinte e quatro caracteres");
        assert_eq!(lines[0].as_str(), "");

        for _ in 0..MAX_LINES {
            push_str(&mut lines, "ok");
        }
        assert_eq!(lines.len(), MAX_LINES);
        assert_eq!(lines[MAX_LINES - 1].as_str(), "ok");
    }
}
