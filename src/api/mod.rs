mod engine;
mod engine_config;
mod frame_builder;
pub mod label_format;
pub mod launch;
mod render_style;

pub use engine::TimelineEngine;
pub use engine_config::TimelineConfig;
pub use frame_builder::build_timeline_frame;
pub use label_format::{
    TimeLabelPolicy, format_entry_label, format_time_label, format_timestamp,
    truncate_to_timestamp,
};
pub use launch::{CONFIG_ENV_VAR, load_catalog, load_config_from_env, parse_args, usage};
pub use render_style::TimelineStyle;
