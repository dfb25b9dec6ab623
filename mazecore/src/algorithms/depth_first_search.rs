use rand::seq::SliceRandom as _;
use smallvec::SmallVec;

use super::{MazeAlgorithm, Random, Steps};
use crate::{array::Array2D, dims::Coord, grid::Grid};

/// Randomized depth-first backtracking from the entry cell.
///
/// Uses an explicit stack, so the depth of the carved corridors is not
/// limited by the call stack.
#[derive(Debug)]
pub struct DepthFirstSearch;

impl MazeAlgorithm for DepthFirstSearch {
    fn build(&self, grid: &mut Grid, rng: &mut Random, steps: &mut Steps) {
        let mut visited = Array2D::new(false, grid.size(), grid.size());
        let mut stack = Vec::with_capacity(grid.cell_count());

        steps.record(grid);

        let start = grid.entry();
        visited[start] = true;
        stack.push(start);
        while let Some(current) = stack.pop() {
            let unvisited_neighbors = grid
                .neighbors(current)
                .into_iter()
                .filter(|cell| !visited[*cell])
                .collect::<SmallVec<[Coord; 4]>>();

            if let Some(&next) = unvisited_neighbors.choose(rng) {
                stack.push(current);
                grid.connect(current, next);
                visited[next] = true;
                stack.push(next);

                steps.record(grid);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::random_from_seed;

    #[test]
    fn visits_every_cell_once() {
        let mut grid = Grid::new(12).unwrap();
        let mut steps = Steps::disabled();
        DepthFirstSearch.build(&mut grid, &mut random_from_seed(Some(3)), &mut steps);

        // initial state plus one step per carved cell
        assert_eq!(steps.count(), grid.cell_count());
        assert_eq!(grid.edge_count(), grid.cell_count() - 1);
        assert!(grid.is_connected());
    }

    #[test]
    fn large_grid_does_not_recurse() {
        let mut grid = Grid::new(300).unwrap();
        DepthFirstSearch.build(&mut grid, &mut random_from_seed(Some(0)), &mut Steps::disabled());
        assert!(grid.is_connected());
    }
}
