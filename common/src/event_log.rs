//! Small ring buffer of recent events.
//!
//! Keeps the last [`EVENT_LOG_SIZE`] navigation and alert events as
//! timestamped text lines for the simulator's frame dump.
//!
//! # Usage
//!
//! ```ignore
//! let mut log = EventLog::new();
//! log.push(1200, format_args!("A -> {:?}", Screen::Status));
//!
//! for line in log.iter() {
//!     println!("{}", line);
//! }
//! ```

use core::fmt::{Arguments, Write};

use heapless::{Deque, String};

/// Lines kept in the ring buffer.
pub const EVENT_LOG_SIZE: usize = 6;

/// Characters per line, timestamp included.
pub const EVENT_LINE_LENGTH: usize = 48;

/// Ring buffer of event lines, oldest first.
pub struct EventLog {
    buffer: Deque<String<EVENT_LINE_LENGTH>, EVENT_LOG_SIZE>,
}

impl EventLog {
    pub const fn new() -> Self { Self { buffer: Deque::new() } }

    /// Append `[at_ms] message`, dropping the oldest line when full.
    /// Messages longer than a line are cut short.
    pub fn push(
        &mut self,
        at_ms: u32,
        message: Arguments<'_>,
    ) {
        if self.buffer.is_full() {
            self.buffer.pop_front();
        }

        let mut line = Truncating(String::new());
        let _ = write!(line, "[{:>6}] ", at_ms);
        let _ = line.write_fmt(message);
        let _ = self.buffer.push_back(line.0);
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> { self.buffer.iter().map(|line| line.as_str()) }

    #[inline]
    pub fn len(&self) -> usize { self.buffer.len() }

    #[inline]
    pub fn is_empty(&self) -> bool { self.buffer.is_empty() }
}

impl Default for EventLog {
    fn default() -> Self { Self::new() }
}

/// Writer that keeps what fits and silently drops the rest.
struct Truncating(String<EVENT_LINE_LENGTH>);

impl Write for Truncating {
    fn write_str(
        &mut self,
        s: &str,
    ) -> core::fmt::Result {
        for c in s.chars() {
            if self.0.push(c).is_err() {
                break;
            }
        }
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_iter() {
        let mut log = EventLog::new();
        assert!(log.is_empty());

        log.push(1200, format_args!("A -> Status"));
        log.push(1500, format_args!("alert on"));

        let lines: std::vec::Vec<&str> = log.iter().collect();
        assert_eq!(lines, ["[  1200] A -> Status", "[  1500] alert on"]);
    }

    #[test]
    fn test_oldest_dropped_when_full() {
        let mut log = EventLog::new();
        for i in 0..(EVENT_LOG_SIZE as u32 + 2) {
            log.push(i, format_args!("event {}", i));
        }
        assert_eq!(log.len(), EVENT_LOG_SIZE);
        assert_eq!(log.iter().next(), Some("[     2] event 2"));
    }

    #[test]
    fn test_long_message_truncated() {
        let mut log = EventLog::new();
        log.push(0, format_args!("{}", "x".repeat(100)));
        let line = log.iter().next().unwrap_or_default();
        assert_eq!(line.len(), EVENT_LINE_LENGTH);
        assert!(line.ends_with('x'));
    }
}
