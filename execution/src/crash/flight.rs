//! Flight animation frames.
//!
//! The display climbs from 1.00x in 0.05x steps, one step every
//! [FLIGHT_TICK], and stops exactly on the round's endpoint.

use super::round::Endpoint;
use crashbet_types::crash::{DISPLAY_SCALE, FLIGHT_STEP, FLIGHT_TICK_MS, MIN_TARGET_MULTIPLIER};
use std::time::Duration;

/// Delay between two frames.
pub const FLIGHT_TICK: Duration = Duration::from_millis(FLIGHT_TICK_MS);

/// Iterator over displayed multipliers (2 decimals) from 1.00 to the endpoint.
#[derive(Clone, Debug)]
pub struct FlightPath {
    // Frames are tracked in hundredths to avoid accumulating float drift
    next: u64,
    end: u64,
    step: u64,
    done: bool,
}

impl FlightPath {
    pub fn new(endpoint: f64) -> Self {
        let start = to_cents(MIN_TARGET_MULTIPLIER);
        Self {
            next: start,
            end: to_cents(endpoint).max(start),
            step: to_cents(FLIGHT_STEP),
            done: false,
        }
    }

    pub fn to_endpoint(endpoint: &Endpoint) -> Self {
        Self::new(endpoint.value())
    }

    /// Frames remaining, including the final one.
    pub fn frame_count(&self) -> u64 {
        if self.done {
            return 0;
        }
        // Past the last full step only the endpoint frame remains
        self.end.saturating_sub(self.next).div_ceil(self.step) + 1
    }

    /// Time to play the remaining frames at [FLIGHT_TICK] per step.
    pub fn duration(&self) -> Duration {
        let steps = self.frame_count().saturating_sub(1);
        FLIGHT_TICK.saturating_mul(u32::try_from(steps).unwrap_or(u32::MAX))
    }
}

impl Iterator for FlightPath {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.done {
            return None;
        }
        if self.next >= self.end {
            self.done = true;
            return Some(self.end as f64 / DISPLAY_SCALE);
        }
        let frame = self.next;
        self.next = self.next.saturating_add(self.step);
        Some(frame as f64 / DISPLAY_SCALE)
    }
}

fn to_cents(value: f64) -> u64 {
    // Negative and NaN saturate to 0
    (value * DISPLAY_SCALE).round() as u64
}
