pub mod cell;
#[allow(clippy::module_inception)]
pub mod grid;
pub mod ser;

pub use cell::{Cell, CellWall};
pub use grid::Grid;
