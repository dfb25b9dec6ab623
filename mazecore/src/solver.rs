use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::{
    array::Array2D,
    dims::Coord,
    error::{Error, ErrorKind, Result},
    grid::Grid,
};

/// Outcome of checking a submitted path, ready to hand to a front-end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolutionReport {
    pub valid: bool,
    /// Moves made by the submitted path, when it is valid.
    pub step_count: Option<usize>,
    /// Moves of the shortest route from entry to exit, when one exists.
    pub shortest_step_count: Option<usize>,
    pub error: Option<ErrorKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Validates `path` as a walk from the entry to the exit of `grid`.
///
/// Checks run in order: length, bounds, open passages between consecutive
/// coordinates, then endpoints. The walk may revisit cells and need not be the
/// shortest one.
pub fn check_solution(grid: &Grid, path: &[Coord]) -> Result<()> {
    if path.len() < 2 {
        return Err(Error::EmptyPath(path.len()));
    }

    if let Some(&pos) = path.iter().find(|pos| !grid.in_bounds(**pos)) {
        return Err(Error::OutOfBounds(pos));
    }

    if let Some(step) = path.windows(2).find(|step| !grid.is_open(step[0], step[1])) {
        return Err(Error::DisconnectedStep(step[0], step[1]));
    }

    let (entry, exit) = (path[0], path[path.len() - 1]);
    if entry != grid.entry() || exit != grid.exit() {
        return Err(Error::WrongEndpoints {
            entry,
            exit,
            expected_entry: grid.entry(),
            expected_exit: grid.exit(),
        });
    }

    Ok(())
}

/// Checks `path` and gathers step counts for scoring.
pub fn report(grid: &Grid, path: &[Coord]) -> SolutionReport {
    let shortest_step_count = solve(grid).map(|route| route.len() - 1);

    match check_solution(grid, path) {
        Ok(()) => SolutionReport {
            valid: true,
            step_count: Some(path.len() - 1),
            shortest_step_count,
            error: None,
            message: None,
        },
        Err(err) => SolutionReport::failed(&err, shortest_step_count),
    }
}

impl SolutionReport {
    /// Report for an attempt that could not be accepted, scored against the
    /// shortest route of `grid`.
    pub fn from_error(grid: &Grid, err: &Error) -> Self {
        Self::failed(err, solve(grid).map(|route| route.len() - 1))
    }

    fn failed(err: &Error, shortest_step_count: Option<usize>) -> Self {
        SolutionReport {
            valid: false,
            step_count: None,
            shortest_step_count,
            error: Some(err.kind()),
            message: Some(err.to_string()),
        }
    }
}

/// Shortest route from the entry to the exit.
pub fn solve(grid: &Grid) -> Option<Vec<Coord>> {
    shortest_path(grid, grid.entry(), grid.exit())
}

/// Breadth-first search through open passages, both ends included.
pub fn shortest_path(grid: &Grid, from: Coord, to: Coord) -> Option<Vec<Coord>> {
    bfs(grid, from, to, |_| true)
}

fn bfs(
    grid: &Grid,
    from: Coord,
    to: Coord,
    allowed: impl Fn(Coord) -> bool,
) -> Option<Vec<Coord>> {
    if !grid.in_bounds(from) || !grid.in_bounds(to) || !allowed(from) || !allowed(to) {
        return None;
    }

    let mut parents: Array2D<Option<Coord>> = Array2D::new(None, grid.size(), grid.size());
    let mut queue = VecDeque::from([from]);
    parents[from] = Some(from);

    while let Some(current) = queue.pop_front() {
        if current == to {
            let mut path = vec![current];
            let mut pos = current;
            while pos != from {
                pos = parents[pos]?;
                path.push(pos);
            }
            path.reverse();
            return Some(path);
        }

        for next in grid.open_neighbors(current) {
            if parents[next].is_none() && allowed(next) {
                parents[next] = Some(current);
                queue.push_back(next);
            }
        }
    }

    None
}

/// Turns a matrix of selected cells into an ordered path.
///
/// The route is searched from the entry to the exit through marked cells
/// only. Marks off that route are ignored.
pub fn path_from_marks<R: AsRef<[bool]>>(grid: &Grid, marks: &[R]) -> Result<Vec<Coord>> {
    let size = grid.size();
    if marks.len() != size || marks.iter().any(|row| row.as_ref().len() != size) {
        return Err(Error::MalformedGrid(format!(
            "marks must be a {0}x{0} matrix",
            size
        )));
    }

    let is_marked = |pos: Coord| marks[pos.0 as usize].as_ref()[pos.1 as usize];

    let (entry, exit) = (grid.entry(), grid.exit());
    if !is_marked(entry) || !is_marked(exit) {
        return Err(Error::WrongEndpoints {
            entry,
            exit,
            expected_entry: entry,
            expected_exit: exit,
        });
    }

    bfs(grid, entry, exit, is_marked).ok_or(Error::DisconnectedStep(entry, exit))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::{generate, Algorithm};

    /// 3x3 maze shaped like an S:
    /// row 0 goes right, down on the right, row 1 goes left, down on the left,
    /// row 2 goes right.
    fn snake() -> Grid {
        let mut grid = Grid::new(3).unwrap();
        for (a, b) in [
            ((0, 0), (0, 1)),
            ((0, 1), (0, 2)),
            ((0, 2), (1, 2)),
            ((1, 2), (1, 1)),
            ((1, 1), (1, 0)),
            ((1, 0), (2, 0)),
            ((2, 0), (2, 1)),
            ((2, 1), (2, 2)),
        ] {
            grid.open_edge(a.into(), b.into()).unwrap();
        }
        grid
    }

    fn path(coords: &[(i32, i32)]) -> Vec<Coord> {
        coords.iter().map(|&c| c.into()).collect()
    }

    #[test]
    fn accepts_valid_walk() {
        let grid = snake();
        let route = solve(&grid).unwrap();
        assert_eq!(route.len(), 9);
        assert_eq!(check_solution(&grid, &route), Ok(()));
    }

    #[test]
    fn accepts_walk_with_detours() {
        let grid = snake();
        let mut route = solve(&grid).unwrap();
        // back and forth along the first corridor
        route.insert(2, Coord(0, 0));
        route.insert(3, Coord(0, 1));
        assert_eq!(&route[..5], &path(&[(0, 0), (0, 1), (0, 0), (0, 1), (0, 2)])[..]);
        assert_eq!(check_solution(&grid, &route), Ok(()));

        let report = report(&grid, &route);
        assert!(report.valid);
        assert_eq!(report.step_count, Some(10));
        assert_eq!(report.shortest_step_count, Some(8));
    }

    #[test]
    fn report_from_error_matches_rejected_check() {
        let grid = snake();
        let jump = path(&[(0, 0), (0, 2)]);

        let rejected = report(&grid, &jump);
        let err = check_solution(&grid, &jump).unwrap_err();
        assert_eq!(SolutionReport::from_error(&grid, &err), rejected);
        assert_eq!(rejected.error, Some(ErrorKind::DisconnectedStep));
        assert_eq!(rejected.shortest_step_count, Some(8));
        assert_eq!(rejected.step_count, None);
    }

    #[test]
    fn empty_path() {
        let grid = snake();
        assert_eq!(check_solution(&grid, &[]), Err(Error::EmptyPath(0)));
        assert_eq!(
            check_solution(&grid, &path(&[(0, 0)])),
            Err(Error::EmptyPath(1))
        );
    }

    #[test]
    fn out_of_bounds() {
        let grid = snake();
        assert_eq!(
            check_solution(&grid, &path(&[(0, 0), (0, -1)])),
            Err(Error::OutOfBounds(Coord(0, -1)))
        );
        assert_eq!(
            check_solution(&grid, &path(&[(0, 0), (3, 0), (2, 2)])),
            Err(Error::OutOfBounds(Coord(3, 0)))
        );
    }

    #[test]
    fn disconnected_step() {
        let grid = snake();
        assert_eq!(
            check_solution(&grid, &path(&[(0, 0), (0, 2)])),
            Err(Error::DisconnectedStep(Coord(0, 0), Coord(0, 2)))
        );
        // wall between rows 0 and 1 on the left
        assert_eq!(
            check_solution(&grid, &path(&[(0, 0), (1, 0), (2, 0)])),
            Err(Error::DisconnectedStep(Coord(0, 0), Coord(1, 0)))
        );
    }

    #[test]
    fn wrong_endpoints() {
        let grid = snake();
        let err = check_solution(&grid, &path(&[(0, 0), (0, 1)])).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::WrongEndpoints);

        let err = check_solution(&grid, &path(&[(2, 1), (2, 2)])).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::WrongEndpoints);
    }

    #[test]
    fn report_on_failure() {
        let grid = snake();
        let report = report(&grid, &path(&[(0, 0)]));
        assert!(!report.valid);
        assert_eq!(report.step_count, None);
        assert_eq!(report.error, Some(ErrorKind::EmptyPath));
        assert_eq!(report.shortest_step_count, Some(8));
        assert!(report.message.is_some());
    }

    #[test]
    fn no_route_in_walled_grid() {
        let grid = Grid::new(3).unwrap();
        assert_eq!(solve(&grid), None);
        assert_eq!(shortest_path(&grid, Coord(1, 1), Coord(1, 1)), Some(vec![Coord(1, 1)]));
        assert_eq!(shortest_path(&grid, Coord(0, 0), Coord(5, 5)), None);
    }

    #[test]
    fn shortest_path_on_open_grid() {
        let mut grid = Grid::new(5).unwrap();
        grid.open_all();
        let route = solve(&grid).unwrap();
        assert_eq!(route.len(), 9);
        assert_eq!(check_solution(&grid, &route), Ok(()));
    }

    #[test]
    fn solves_generated_mazes() {
        for algorithm in Algorithm::ALL {
            let grid = generate(5, algorithm, Some(42)).unwrap();
            let route = solve(&grid).unwrap();
            assert_eq!(check_solution(&grid, &route), Ok(()));
        }
    }

    #[test]
    fn marks_to_path() {
        let grid = snake();
        let all = vec![vec![true; 3]; 3];
        let route = path_from_marks(&grid, &all).unwrap();
        assert_eq!(check_solution(&grid, &route), Ok(()));

        let mut marks = all.clone();
        marks[1][1] = false;
        assert_eq!(
            path_from_marks(&grid, &marks),
            Err(Error::DisconnectedStep(Coord(0, 0), Coord(2, 2)))
        );

        let mut marks = all.clone();
        marks[2][2] = false;
        assert_eq!(
            path_from_marks(&grid, &marks).unwrap_err().kind(),
            ErrorKind::WrongEndpoints
        );

        assert_eq!(
            path_from_marks(&grid, &[vec![true; 3]]).unwrap_err().kind(),
            ErrorKind::MalformedGrid
        );
    }
}
