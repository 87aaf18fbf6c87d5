use std::num::NonZeroUsize;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::constants::{FULL_TURN_DEGREES, MIN_SPIN_DEGREES, SPIN_OFFSET_DEGREES};

/// Where the wheel is in its spin cycle.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum WheelPhase {
    Idle,
    /// The wheel is animating towards `pending_index`.
    Spinning { pending_index: usize },
    ResultShown,
}

/// Result of a single selector call.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct SpinOutcome {
    pub new_rotation: u64,
    pub selected_index: usize,
}

impl SpinOutcome {
    /// Applies an already drawn increment to `current_rotation`.
    pub fn from_increment(current_rotation: u64, increment: u64, item_count: NonZeroUsize) -> Self {
        let new_rotation = current_rotation.saturating_add(increment);
        Self {
            new_rotation,
            selected_index: landing_index(new_rotation, item_count),
        }
    }
}

/// Draws a forward increment in `[MIN_SPIN_DEGREES, MIN_SPIN_DEGREES + 359]`.
pub fn draw_increment<R: Rng + ?Sized>(rng: &mut R) -> u64 {
    MIN_SPIN_DEGREES + rng.gen_range(0..SPIN_OFFSET_DEGREES)
}

/// Segment under the pointer once the wheel rests at `rotation` degrees.
///
/// The exact boundary between two segments belongs to the later one.
pub fn landing_index(rotation: u64, item_count: NonZeroUsize) -> usize {
    let count = item_count.get();
    let normalized = (rotation % FULL_TURN_DEGREES) as f64;
    let segment_width = FULL_TURN_DEGREES as f64 / count as f64;
    let index = (normalized / segment_width).floor() as usize;
    index.min(count - 1)
}

pub fn spin<R: Rng + ?Sized>(current_rotation: u64, item_count: NonZeroUsize, rng: &mut R) -> SpinOutcome {
    SpinOutcome::from_increment(current_rotation, draw_increment(rng), item_count)
}

/// Snapshot of one session's wheel.
///
/// Transitions never mutate; they return the next snapshot, or `None` when
/// the request does not apply in the current phase.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct SpinState {
    pub rotation: u64,
    pub phase: WheelPhase,
    /// Result of the last settled spin. Stays on the previous result while spinning.
    pub selected_index: Option<usize>,
}

impl Default for SpinState {
    fn default() -> Self {
        Self::new()
    }
}

impl SpinState {
    pub fn new() -> Self {
        Self {
            rotation: 0,
            phase: WheelPhase::Idle,
            selected_index: None,
        }
    }

    pub fn is_spinning(&self) -> bool {
        matches!(self.phase, WheelPhase::Spinning { .. })
    }

    pub fn show_result(&self) -> bool {
        self.phase == WheelPhase::ResultShown
    }

    /// Index the current spin will land on, if one is in flight.
    pub fn pending_index(&self) -> Option<usize> {
        match self.phase {
            WheelPhase::Spinning { pending_index } => Some(pending_index),
            _ => None,
        }
    }

    /// Starts a spin. Ignored (and `rng` left untouched) while already spinning.
    pub fn request_spin<R: Rng + ?Sized>(&self, item_count: NonZeroUsize, rng: &mut R) -> Option<Self> {
        if self.is_spinning() {
            return None;
        }
        self.request_spin_with(spin(self.rotation, item_count, rng))
    }

    pub fn request_spin_with(&self, outcome: SpinOutcome) -> Option<Self> {
        if self.is_spinning() {
            return None;
        }
        log::debug!(
            "wheel spin started: rotation {} -> {}, landing on segment {}",
            self.rotation,
            outcome.new_rotation,
            outcome.selected_index
        );
        Some(Self {
            rotation: outcome.new_rotation,
            phase: WheelPhase::Spinning {
                pending_index: outcome.selected_index,
            },
            selected_index: self.selected_index,
        })
    }

    /// Settles the in-flight spin and reveals its result.
    pub fn complete_spin(&self) -> Option<Self> {
        let pending_index = self.pending_index()?;
        log::debug!("wheel settled on segment {}", pending_index);
        Some(Self {
            rotation: self.rotation,
            phase: WheelPhase::ResultShown,
            selected_index: Some(pending_index),
        })
    }
}
