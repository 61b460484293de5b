//! photo-timeline: capture timestamps of an image directory on a zoomable,
//! pannable vertical timeline.
//!
//! `core` holds the catalog and the time-to-pixel viewport, `interaction`
//! the keyboard navigation state machine, `render` the backend-agnostic draw
//! list, and `api` the engine tying them together for a host window.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod metadata;
pub mod render;
pub mod telemetry;

#[cfg(feature = "gtk4-adapter")]
pub mod platform_gtk;

pub use api::{TimelineConfig, TimelineEngine};
pub use error::{TimelineError, TimelineResult};
