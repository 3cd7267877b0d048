//! One sampling cycle per step, as on the device.
//!
//! The device loop is: apply pending button edges, read sensors, evaluate,
//! drive the outputs, draw. [`Simulation::step`] does the same against the
//! scene track and the button script, on a simulated millisecond clock that
//! advances by the sampling interval after each step.

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::SimulatorDisplay;
use lumicolor_common::config::{SAMPLE_PERIOD_MS, SCREEN_HEIGHT, SCREEN_WIDTH, STARTUP_DELAY_MS};
use lumicolor_common::draw::draw_screen;
use lumicolor_common::event_log::EventLog;
use lumicolor_common::navigation::EdgeOutcome;
use lumicolor_common::render::{self, Lines};
use lumicolor_common::{Decision, NavigationCell, Screen, evaluate_cycle};

use crate::scenes::SceneTrack;
use crate::script::Script;

/// What one step produced.
#[derive(Clone, Debug)]
pub struct Frame {
    pub at_ms: u32,
    pub scene: &'static str,
    pub screen: Screen,
    pub decision: Decision,
    pub lines: Lines,
}

impl Frame {
    /// The buzzer sounds while the alert is active and inside its blink window.
    #[inline]
    pub const fn buzzer_on(&self) -> bool { self.decision.alert.blink_phase }
}

/// Simulated node: clock, navigation, inputs and the OLED framebuffer.
pub struct Simulation {
    now_ms: u32,
    interval_ms: u32,
    nav: NavigationCell,
    script: Script,
    scenes: SceneTrack,
    display: SimulatorDisplay<BinaryColor>,
    events: EventLog,
    previous: Option<Decision>,
}

impl Simulation {
    /// Starts where the device does: after the settle delay, on the menu.
    pub fn new(
        scenes: SceneTrack,
        script: Script,
    ) -> Self {
        Self {
            now_ms: STARTUP_DELAY_MS as u32,
            interval_ms: SAMPLE_PERIOD_MS as u32,
            nav: NavigationCell::new(),
            script,
            scenes,
            display: SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT)),
            events: EventLog::new(),
            previous: None,
        }
    }

    /// Use a different sampling interval. Zero is treated as one millisecond.
    #[must_use]
    pub fn with_interval(
        mut self,
        interval_ms: u32,
    ) -> Self {
        self.interval_ms = interval_ms.max(1);
        self
    }

    /// Run one cycle and advance the clock.
    pub fn step(&mut self) -> Frame {
        let now = self.now_ms;

        for edge in self.script.due(now) {
            match self.nav.on_edge(*edge) {
                EdgeOutcome::Moved(screen) => {
                    self.events
                        .push(edge.at_ms, format_args!("{:?} -> {:?}", edge.input, screen));
                }
                EdgeOutcome::Ignored => {
                    self.events
                        .push(edge.at_ms, format_args!("{:?} ignorado", edge.input));
                }
                EdgeOutcome::Bounced => {
                    self.events
                        .push(edge.at_ms, format_args!("{:?} rejeitado (debounce)", edge.input));
                }
            }
        }

        let scene = self.scenes.scene_at(now).name;
        let decision = evaluate_cycle(self.scenes.sample_at(now), now);
        self.log_changes(now, &decision);

        let screen = self.nav.screen();
        let lines = render::select(screen, &decision);
        draw_screen(&mut self.display, screen, &lines);

        self.previous = Some(decision);
        self.now_ms = now.wrapping_add(self.interval_ms);

        Frame {
            at_ms: now,
            scene,
            screen,
            decision,
            lines,
        }
    }

    fn log_changes(
        &mut self,
        now: u32,
        decision: &Decision,
    ) {
        let (label_changed, alert_changed) = match &self.previous {
            Some(previous) => (previous.label != decision.label, previous.alert.active != decision.alert.active),
            None => (true, decision.alert.active),
        };

        if label_changed {
            self.events
                .push(now, format_args!("cor: {}", decision.label.display_name()));
        }
        if alert_changed {
            let state = if decision.alert.active { "ativo" } else { "normal" };
            self.events.push(now, format_args!("alerta {}", state));
        }
    }

    #[inline]
    pub const fn now_ms(&self) -> u32 { self.now_ms }

    #[inline]
    pub const fn interval_ms(&self) -> u32 { self.interval_ms }

    #[inline]
    pub const fn script(&self) -> &Script { &self.script }

    #[inline]
    pub const fn display(&self) -> &SimulatorDisplay<BinaryColor> { &self.display }

    #[inline]
    pub const fn events(&self) -> &EventLog { &self.events }
}

impl Default for Simulation {
    fn default() -> Self { Self::new(SceneTrack::default(), Script::default_session()) }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use lumicolor_common::{ButtonEdge, ColorLabel, Input};

    use super::*;

    #[test]
    fn test_starts_after_settle_delay_on_menu() {
        let mut sim = Simulation::new(SceneTrack::default(), Script::default());
        let frame = sim.step();

        assert_eq!(frame.at_ms, 2000);
        assert_eq!(frame.screen, Screen::Menu);
        assert_eq!(frame.lines[0].as_str(), "MENU INICIAL");
        assert_eq!(sim.now_ms(), 2100);
    }

    #[test]
    fn test_edge_applies_in_same_cycle() {
        let script = Script::new(vec![ButtonEdge::new(Input::B, 2050)]);
        let mut sim = Simulation::new(SceneTrack::default(), script);

        assert_eq!(sim.step().screen, Screen::Menu);
        let frame = sim.step();
        assert_eq!(frame.screen, Screen::Values);
        assert_eq!(frame.lines[0].as_str(), "- VALORES RGB -");
    }

    #[test]
    fn test_bounce_logged_and_dropped() {
        let script = Script::new(vec![
            ButtonEdge::new(Input::A, 2000),
            ButtonEdge::new(Input::Joystick, 2040),
        ]);
        let mut sim = Simulation::new(SceneTrack::default(), script);
        assert_eq!(sim.step().screen, Screen::Status);

        // The 2040 ms edge is due on the 2100 ms cycle
        let frame = sim.step();
        assert_eq!(frame.at_ms, 2100);
        assert_eq!(frame.screen, Screen::Status);
        assert!(sim.events().iter().any(|line| line.contains("Joystick rejeitado")));
    }

    #[test]
    fn test_first_frame_logs_label_and_alert() {
        let mut sim = Simulation::default();
        let frame = sim.step();

        // 2000 ms falls in the red card scene, inside the blink window
        assert_eq!(frame.scene, "cartao vermelho");
        assert_eq!(frame.decision.label, ColorLabel::Red);
        assert!(frame.buzzer_on());

        let events: Vec<&str> = sim.events().iter().collect();
        assert_eq!(events, ["[  2000] cor: Vermelho", "[  2000] alerta ativo"]);
    }

    #[test]
    fn test_unreached_edges_remain() {
        let script = Script::new(vec![ButtonEdge::new(Input::A, 2100), ButtonEdge::new(Input::B, 9000)]);
        let mut sim = Simulation::new(SceneTrack::default(), script);
        sim.step();
        sim.step();

        assert_eq!(sim.script().remaining(), 1);
    }

    #[test]
    fn test_interval_floor() {
        let mut sim = Simulation::default().with_interval(0);
        assert_eq!(sim.interval_ms(), 1);
        sim.step();
        assert_eq!(sim.now_ms(), 2001);
    }

    #[test]
    fn test_display_holds_last_frame() {
        let mut sim = Simulation::default();
        sim.step();

        let lit = sim
            .display()
            .bounding_box()
            .points()
            .filter(|p| sim.display().get_pixel(*p) == BinaryColor::On)
            .count();
        assert!(lit > 0);
    }
}
