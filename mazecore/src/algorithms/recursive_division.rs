use std::cmp::Ordering;

use rand::Rng as _;

use super::{MazeAlgorithm, Random, Steps};
use crate::{
    dims::Coord,
    grid::{CellWall, Grid},
};

/// Chambers thinner than this are left as they are.
const MIN_CHAMBER: i32 = 2;

/// Adds walls to an empty chamber, splitting it recursively.
///
/// Every wall line keeps exactly one gap, so the two halves stay connected.
/// Recursion depth is bounded by the number of splits along one axis.
#[derive(Debug)]
pub struct RecursiveDivision;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Chamber {
    top: i32,
    left: i32,
    height: i32,
    width: i32,
}

impl MazeAlgorithm for RecursiveDivision {
    fn build(&self, grid: &mut Grid, rng: &mut Random, steps: &mut Steps) {
        grid.open_all();
        steps.record(grid);

        let size = grid.size() as i32;
        divide(
            grid,
            rng,
            steps,
            Chamber {
                top: 0,
                left: 0,
                height: size,
                width: size,
            },
        );
    }
}

fn divide(grid: &mut Grid, rng: &mut Random, steps: &mut Steps, chamber: Chamber) {
    let Chamber {
        top,
        left,
        height,
        width,
    } = chamber;

    if height < MIN_CHAMBER || width < MIN_CHAMBER {
        return;
    }

    let horizontal = match height.cmp(&width) {
        Ordering::Greater => true,
        Ordering::Less => false,
        Ordering::Equal => rng.gen(),
    };

    if horizontal {
        // wall runs below `line`
        let line = top + rng.gen_range(0..height - 1);
        let gap = left + rng.gen_range(0..width);
        for col in left..left + width {
            if col != gap {
                grid.build_wall(Coord(line, col), CellWall::Bottom);
            }
        }
        steps.record(grid);

        let upper = line - top + 1;
        divide(grid, rng, steps, Chamber { height: upper, ..chamber });
        divide(
            grid,
            rng,
            steps,
            Chamber {
                top: line + 1,
                height: height - upper,
                ..chamber
            },
        );
    } else {
        // wall runs right of `line`
        let line = left + rng.gen_range(0..width - 1);
        let gap = top + rng.gen_range(0..height);
        for row in top..top + height {
            if row != gap {
                grid.build_wall(Coord(row, line), CellWall::Right);
            }
        }
        steps.record(grid);

        let west = line - left + 1;
        divide(grid, rng, steps, Chamber { width: west, ..chamber });
        divide(
            grid,
            rng,
            steps,
            Chamber {
                left: line + 1,
                width: width - west,
                ..chamber
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::random_from_seed;

    fn build(size: i32, seed: u64) -> Grid {
        let mut grid = Grid::new(size).unwrap();
        RecursiveDivision.build(&mut grid, &mut random_from_seed(Some(seed)), &mut Steps::disabled());
        grid
    }

    #[test]
    fn stays_connected() {
        for size in 1..12 {
            for seed in 0..5 {
                let grid = build(size, seed);
                assert!(grid.is_connected(), "size {} seed {}", size, seed);
                assert!(grid.is_symmetric());
            }
        }
    }

    #[test]
    fn splits_down_to_corridors() {
        // dividing to width 1 leaves exactly one passage per split
        let grid = build(9, 11);
        assert_eq!(grid.edge_count(), grid.cell_count() - 1);
    }

    #[test]
    fn two_by_two_keeps_one_gap() {
        let grid = build(2, 4);
        assert_eq!(grid.edge_count(), 3);
    }
}
