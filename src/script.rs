//! Scripted button session.
//!
//! Stands in for the GPIO edge tasks: a list of timestamped [`ButtonEdge`]s
//! handed to the navigation cell as simulated time passes them. Bounces are
//! just extra edges a few milliseconds after a real press.
//!
//! Scripts can also be given on the command line as comma-separated
//! `<ms>:<input>` pairs, where input is `a`, `b` or `j` (joystick):
//!
//! ```text
//! 2500:a,2540:a,6000:j
//! ```

use std::fmt;

use lumicolor_common::{ButtonEdge, Input};

/// Edges in time order with a cursor to the next one not yet delivered.
#[derive(Clone, Debug, Default)]
pub struct Script {
    edges: Vec<ButtonEdge>,
    next: usize,
}

impl Script {
    pub fn new(mut edges: Vec<ButtonEdge>) -> Self {
        edges.sort_by_key(|edge| edge.at_ms);
        Self { edges, next: 0 }
    }

    /// A walk through every screen, with bounces and ignored presses.
    pub fn default_session() -> Self {
        Self::new(vec![
            // Menu -> Status, contact bounce dropped
            ButtonEdge::new(Input::A, 4_500),
            ButtonEdge::new(Input::A, 4_540),
            // Already on Status: accepted but ignored
            ButtonEdge::new(Input::A, 7_000),
            // Back to Menu, bounce from a different button dropped
            ButtonEdge::new(Input::Joystick, 11_000),
            ButtonEdge::new(Input::B, 11_100),
            // Menu -> Values
            ButtonEdge::new(Input::B, 11_600),
            ButtonEdge::new(Input::Joystick, 20_000),
            // Joystick on Menu does nothing
            ButtonEdge::new(Input::Joystick, 20_500),
            ButtonEdge::new(Input::A, 21_000),
        ])
    }

    /// Edges due at or before `now_ms` that have not been delivered yet.
    pub fn due(
        &mut self,
        now_ms: u32,
    ) -> &[ButtonEdge] {
        let start = self.next;
        while self.next < self.edges.len() && self.edges[self.next].at_ms <= now_ms {
            self.next += 1;
        }
        &self.edges[start..self.next]
    }

    pub fn remaining(&self) -> usize { self.edges.len() - self.next }
}

/// Why a command-line script could not be parsed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScriptError {
    /// An entry without the `<ms>:<input>` shape.
    Malformed(String),
    /// The timestamp is not a millisecond count.
    BadTime(String),
    /// The input is not one of `a`, `b`, `j`.
    UnknownInput(String),
}

impl fmt::Display for ScriptError {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::Malformed(entry) => write!(f, "expected <ms>:<input>, got {entry:?}"),
            Self::BadTime(time) => write!(f, "invalid timestamp {time:?}"),
            Self::UnknownInput(input) => write!(f, "unknown input {input:?} (use a, b or j)"),
        }
    }
}

impl std::error::Error for ScriptError {}

/// Parse `2500:a,6000:j` into a script.
pub fn parse_script(text: &str) -> Result<Script, ScriptError> {
    let mut edges = Vec::new();
    for entry in text.split(',').map(str::trim).filter(|entry| !entry.is_empty()) {
        let (time, input) = entry
            .split_once(':')
            .ok_or_else(|| ScriptError::Malformed(entry.to_owned()))?;
        let at_ms = time
            .trim()
            .parse::<u32>()
            .map_err(|_| ScriptError::BadTime(time.to_owned()))?;
        edges.push(ButtonEdge::new(parse_input(input.trim())?, at_ms));
    }
    Ok(Script::new(edges))
}

fn parse_input(name: &str) -> Result<Input, ScriptError> {
    match name.to_ascii_lowercase().as_str() {
        "a" => Ok(Input::A),
        "b" => Ok(Input::B),
        "j" | "joy" | "joystick" => Ok(Input::Joystick),
        _ => Err(ScriptError::UnknownInput(name.to_owned())),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_due_delivers_each_edge_once() {
        let mut script = Script::new(vec![ButtonEdge::new(Input::B, 300), ButtonEdge::new(Input::A, 100)]);

        assert!(script.due(50).is_empty());
        assert_eq!(script.due(100), [ButtonEdge::new(Input::A, 100)]);
        assert!(script.due(200).is_empty());
        assert_eq!(script.due(1000), [ButtonEdge::new(Input::B, 300)]);
        assert_eq!(script.remaining(), 0);
    }

    #[test]
    fn test_parse_script() {
        let mut script = parse_script("2500:a, 2540:A,6000:joystick,7000:b").unwrap();
        let edges = script.due(u32::MAX).to_vec();
        assert_eq!(
            edges,
            [
                ButtonEdge::new(Input::A, 2500),
                ButtonEdge::new(Input::A, 2540),
                ButtonEdge::new(Input::Joystick, 6000),
                ButtonEdge::new(Input::B, 7000),
            ]
        );
    }

    #[test]
    fn test_parse_script_errors() {
        assert_eq!(parse_script("2500").unwrap_err(), ScriptError::Malformed("2500".into()));
        assert_eq!(parse_script("soon:a").unwrap_err(), ScriptError::BadTime("soon".into()));
        assert_eq!(parse_script("10:x").unwrap_err(), ScriptError::UnknownInput("x".into()));
    }

    #[test]
    fn test_empty_script() {
        let mut script = parse_script("").unwrap();
        assert!(script.due(u32::MAX).is_empty());
    }
}
