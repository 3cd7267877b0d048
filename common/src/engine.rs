//! One sampling cycle, end to end.
//!
//! [`evaluate_cycle`] is the single entry point both the firmware and the
//! simulator call each tick. It owns no state: everything it returns is
//! recomputed from the sample and the clock.

use crate::alert::AlertState;
use crate::brightness::{self, OutputColor};
use crate::classify::{self, ColorLabel};
use crate::sample::{NormalizedColor, RawSample};

/// Everything derived from one sample.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Decision {
    pub lux: u16,
    /// Normalized channels, before classifier correction.
    pub color: NormalizedColor,
    pub label: ColorLabel,
    pub alert: AlertState,
    /// Color for every matrix cell.
    pub output: OutputColor,
}

/// Run normalize, classify, alert and brightness for one sample.
pub fn evaluate_cycle(
    sample: RawSample,
    now_ms: u32,
) -> Decision {
    let color = sample.normalized();
    let label = classify::classify(color);
    let alert = AlertState::evaluate(sample.light, label, color.r, now_ms);
    let output = brightness::map(sample.light, color);

    Decision {
        lux: sample.light,
        color,
        label,
        alert,
        output,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
