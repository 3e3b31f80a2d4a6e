//! Chart specifications and the builders that produce them.
//!
//! Builders are pure: the same table and control values always give an
//! equal [`Figure`]. Heavy work (filtering, grouping, color mapping) is done
//! here so the rendering surface only has to draw.

mod builders;
mod color;
mod figure;

pub use builders::*;
pub use color::*;
pub use figure::*;
