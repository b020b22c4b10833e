pub mod commands;
pub mod constants;
pub mod layout;
mod options;
pub mod range;
pub mod render;
mod types;

pub use commands::*;
pub use options::*;
pub use range::{resolve_range, select_pages, to_zero_based};
pub use types::*;
