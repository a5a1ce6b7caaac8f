mod get_settings;
mod structs;

pub use get_settings::*;
pub use structs::*;
