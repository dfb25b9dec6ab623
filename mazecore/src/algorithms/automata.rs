use rand::{seq::SliceRandom as _, Rng as _};
use smallvec::SmallVec;

use super::{MazeAlgorithm, Random, Steps};
use crate::{array::Array2D, dims::Coord, grid::Grid};

/// Randomized frontier growth, Prim style.
///
/// Compared to [`super::DepthFirstSearch`] it branches much more often and
/// leaves short dead ends instead of long corridors.
#[derive(Debug)]
pub struct Automata;

impl MazeAlgorithm for Automata {
    fn build(&self, grid: &mut Grid, rng: &mut Random, steps: &mut Steps) {
        let size = grid.size();
        let mut visited = Array2D::new(false, size, size);
        let mut in_frontier = Array2D::new(false, size, size);
        let mut frontier: Vec<Coord> = Vec::new();

        steps.record(grid);

        let start = Coord(
            rng.gen_range(0..size as i32),
            rng.gen_range(0..size as i32),
        );
        visited[start] = true;
        for next in grid.neighbors(start) {
            in_frontier[next] = true;
            frontier.push(next);
        }

        while !frontier.is_empty() {
            let cell = frontier.swap_remove(rng.gen_range(0..frontier.len()));
            if visited[cell] {
                continue;
            }

            let visited_neighbors = grid
                .neighbors(cell)
                .into_iter()
                .filter(|pos| visited[*pos])
                .collect::<SmallVec<[Coord; 4]>>();

            // frontier cells always touch the tree
            if let Some(&from) = visited_neighbors.choose(rng) {
                grid.connect(from, cell);
            }
            visited[cell] = true;
            steps.record(grid);

            for next in grid.neighbors(cell) {
                if !visited[next] && !in_frontier[next] {
                    in_frontier[next] = true;
                    frontier.push(next);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::{random_from_seed, DepthFirstSearch};

    #[test]
    fn spanning_tree() {
        for seed in 0..10 {
            let mut grid = Grid::new(10).unwrap();
            Automata.build(&mut grid, &mut random_from_seed(Some(seed)), &mut Steps::disabled());

            assert_eq!(grid.edge_count(), grid.cell_count() - 1);
            assert!(grid.is_connected());
            assert!(grid.is_symmetric());
        }
    }

    #[test]
    fn more_dead_ends_than_backtracking() {
        let (mut automata, mut dfs) = (0, 0);
        for seed in 0..5 {
            let mut grid = Grid::new(25).unwrap();
            Automata.build(&mut grid, &mut random_from_seed(Some(seed)), &mut Steps::disabled());
            automata += grid.dead_ends();

            let mut grid = Grid::new(25).unwrap();
            DepthFirstSearch.build(&mut grid, &mut random_from_seed(Some(seed)), &mut Steps::disabled());
            dfs += grid.dead_ends();
        }

        assert!(automata > dfs, "automata {} vs dfs {}", automata, dfs);
    }
}
