#[macro_use]
pub mod druid_supplemental;

pub mod config;
pub mod controls;
pub mod error;
pub mod linest;
pub mod plot_editor;
pub mod render;
pub mod schema;
