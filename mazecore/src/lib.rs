//! Maze engine: a square grid of cells with symmetric passages, three
//! generators and solution checking.
//!
//! ```
//! use mazecore::{check_solution, generate, solve, Algorithm};
//!
//! let grid = generate(9, Algorithm::DepthFirst, Some(42)).unwrap();
//! let route = solve(&grid).unwrap();
//! assert!(check_solution(&grid, &route).is_ok());
//! ```

pub mod algorithms;
pub mod array;
pub mod dims;
pub mod error;
pub mod grid;
pub mod solver;

pub use algorithms::{
    generate, generate_many, generate_steps, generate_with, random_from_seed, Algorithm,
    MazeAlgorithm, Random, Snapshot, Steps, UnknownAlgorithm,
};
pub use dims::Coord;
pub use error::{Error, ErrorKind, Result};
pub use grid::{
    ser::{deserialize, serialize},
    Cell, CellWall, Grid,
};
pub use solver::{check_solution, path_from_marks, report, shortest_path, solve, SolutionReport};
