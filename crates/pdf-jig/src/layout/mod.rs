//! Layout calculation for splitting and spreading
//!
//! Everything here is a pure function of page geometry:
//! - Page and region types shared with the renderer
//! - Rotation rules (hidden rotation, reading order)
//! - Split planning (one page into two)
//! - Spread planning (two pages into one)
//! - Margin trimming

mod margin;
mod rotation;
mod split;
mod spread;
mod types;

pub use margin::*;
pub use rotation::*;
pub use split::*;
pub use spread::*;
pub use types::*;
