use serde::{Deserialize, Serialize};

use crate::geometry::{layout_segments, WheelSegment};
use crate::prize::PrizeCatalog;
use crate::random::RandomSource;
use crate::selection::{
    cumulative_weights, forward_delta, landing_angle, select_index, target_rotation,
    CumulativeOption,
};

/// A catalog together with its derived layout, computed once per catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Wheel {
    catalog: PrizeCatalog,
    segments: Vec<WheelSegment>,
    cumulative: Vec<CumulativeOption>,
}

impl Wheel {
    pub fn new(catalog: PrizeCatalog) -> Self {
        let segments = layout_segments(&catalog);
        let cumulative = cumulative_weights(&catalog);
        Self {
            catalog,
            segments,
            cumulative,
        }
    }

    pub fn catalog(&self) -> &PrizeCatalog {
        &self.catalog
    }

    pub fn segments(&self) -> &[WheelSegment] {
        &self.segments
    }

    pub fn cumulative(&self) -> &[CumulativeOption] {
        &self.cumulative
    }

    pub fn total_weight(&self) -> f64 {
        self.catalog.total_weight()
    }
}

/// Everything decided when a spin starts.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SpinOutcome {
    pub winner_index: usize,
    pub winner_name: String,
    pub draw: f64,
    pub landing_angle: f64,
    pub forward_delta: f64,
    pub target_rotation: f64,
}

/// Spin lifecycle of one widget.
///
/// `rotation_degrees` only ever grows so the wheel always turns the same way.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct SpinState {
    pub spinning: bool,
    pub rotation_degrees: f64,
    pub winning_option_name: Option<String>,
    pending: Option<SpinOutcome>,
}

impl SpinState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> Option<&SpinOutcome> {
        self.pending.as_ref()
    }

    /// Draws a winner and sets the rotation the wheel must animate to.
    ///
    /// Returns `None` without touching any state while a spin is in flight.
    pub fn start_spin<R: RandomSource + ?Sized>(
        &mut self,
        wheel: &Wheel,
        rng: &mut R,
    ) -> Option<SpinOutcome> {
        if self.spinning {
            log::warn!("Ignoring spin request while the wheel is still turning");
            return None;
        }

        self.spinning = true;
        self.winning_option_name = None;

        let draw = rng.next_unit() * wheel.total_weight();
        let winner_index = select_index(wheel.cumulative(), draw);
        let segment = &wheel.segments()[winner_index];

        let landing = landing_angle(segment, rng.next_unit());
        let delta = forward_delta(self.rotation_degrees, landing);
        let target = target_rotation(self.rotation_degrees, landing);

        log::debug!(
            "draw {:.4} of {:.4} -> segment {} ({:.2}°..{:.2}°), landing at {:.2}°",
            draw,
            wheel.total_weight(),
            winner_index,
            segment.start_angle,
            segment.end_angle,
            landing
        );

        self.rotation_degrees = target;

        let outcome = SpinOutcome {
            winner_index,
            winner_name: segment.name.clone(),
            draw,
            landing_angle: landing,
            forward_delta: delta,
            target_rotation: target,
        };
        self.pending = Some(outcome.clone());
        Some(outcome)
    }

    /// Reveals the winner picked in `start_spin` and frees the wheel.
    pub fn complete_spin(&mut self) -> Option<&str> {
        if !self.spinning {
            return None;
        }
        self.spinning = false;
        let outcome = self.pending.take()?;
        log::info!("Wheel settled on {:?}", outcome.winner_name);
        self.winning_option_name = Some(outcome.winner_name);
        self.winning_option_name.as_deref()
    }
}
