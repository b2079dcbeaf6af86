#[macro_use]
mod utils;

pub mod registering_focus;
pub mod widget_ext_ext;
