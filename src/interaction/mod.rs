use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::{TimelineError, TimelineResult};

mod key_bindings;

pub use key_bindings::KeyBindings;

/// Discrete navigation input; one event applies exactly one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NavigationCommand {
    ZoomIn,
    ZoomOut,
    PanEarlier,
    PanLater,
}

/// Step sizes for keyboard navigation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationTuning {
    /// Span multiplier for one zoom-in step.
    pub zoom_in_factor: f64,
    /// Span multiplier for one zoom-out step.
    pub zoom_out_factor: f64,
    /// Pan distance as a fraction of the current span.
    pub pan_step_ratio: f64,
}

impl Default for NavigationTuning {
    fn default() -> Self {
        Self {
            zoom_in_factor: 0.9,
            zoom_out_factor: 1.1,
            pan_step_ratio: 0.1,
        }
    }
}

impl NavigationTuning {
    pub fn validate(self) -> TimelineResult<Self> {
        for (name, value) in [
            ("zoom_in_factor", self.zoom_in_factor),
            ("zoom_out_factor", self.zoom_out_factor),
            ("pan_step_ratio", self.pan_step_ratio),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(TimelineError::InvalidData(format!(
                    "navigation `{name}` must be finite and > 0"
                )));
            }
        }
        Ok(self)
    }
}

/// Stateless `(Viewport, NavigationCommand) -> Viewport` transformer.
///
/// The window is never clamped to the catalog range; panning or zooming out
/// past every entry just yields an empty view.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NavigationController {
    tuning: NavigationTuning,
}

impl NavigationController {
    pub fn new(tuning: NavigationTuning) -> TimelineResult<Self> {
        Ok(Self {
            tuning: tuning.validate()?,
        })
    }

    #[must_use]
    pub fn tuning(self) -> NavigationTuning {
        self.tuning
    }

    /// Computes the window that follows `viewport` after `command`.
    ///
    /// Fails only when the step would leave the finite range of `f64`.
    pub fn apply(self, viewport: Viewport, command: NavigationCommand) -> TimelineResult<Viewport> {
        let center = viewport.center();
        let span = viewport.span();

        let (time_min, time_max) = match command {
            NavigationCommand::ZoomIn => rescale(center, span * self.tuning.zoom_in_factor),
            NavigationCommand::ZoomOut => rescale(center, span * self.tuning.zoom_out_factor),
            NavigationCommand::PanEarlier => shift(viewport, -span * self.tuning.pan_step_ratio),
            NavigationCommand::PanLater => shift(viewport, span * self.tuning.pan_step_ratio),
        };

        Viewport::new(time_min, time_max)
    }
}

fn rescale(center: f64, span: f64) -> (f64, f64) {
    let half = span / 2.0;
    (center - half, center + half)
}

fn shift(viewport: Viewport, delta: f64) -> (f64, f64) {
    (viewport.time_min() + delta, viewport.time_max() + delta)
}

/// Pending navigation commands in arrival order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandQueue {
    pending: VecDeque<NavigationCommand>,
}

impl CommandQueue {
    pub fn push(&mut self, command: NavigationCommand) {
        self.pending.push_back(command);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Removes and yields every pending command, oldest first.
    pub fn drain(&mut self) -> impl Iterator<Item = NavigationCommand> + '_ {
        self.pending.drain(..)
    }
}
