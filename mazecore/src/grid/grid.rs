use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::{
    array::Array2D,
    dims::Coord,
    error::{Error, Result},
    grid::cell::{Cell, CellWall},
};

/// Square maze of `N x N` cells with symmetric passages.
///
/// Entry is the top-left cell `(0, 0)` and exit the bottom-right cell
/// `(N - 1, N - 1)`. Cells connect only to their 4-directional neighbours.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<u8>>", into = "Vec<Vec<u8>>")]
pub struct Grid {
    pub(crate) cells: Array2D<Cell>,
}

impl Grid {
    /// Allocates a fully walled grid.
    pub fn new(size: i32) -> Result<Self> {
        if size < 1 {
            return Err(Error::InvalidSize(size));
        }

        let size = size as usize;
        Ok(Grid {
            cells: Array2D::new(Cell::walled(), size, size),
        })
    }

    pub fn size(&self) -> usize {
        self.cells.rows()
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub fn entry(&self) -> Coord {
        Coord::ZERO
    }

    pub fn exit(&self) -> Coord {
        let last = self.size() as i32 - 1;
        Coord(last, last)
    }

    pub fn in_bounds(&self, pos: Coord) -> bool {
        self.cells.dim_to_idx(pos).is_some()
    }

    pub fn cell(&self, pos: Coord) -> Option<Cell> {
        self.cells.get(pos).copied()
    }

    pub fn cells(&self) -> &Array2D<Cell> {
        &self.cells
    }

    /// Returns the wall of `cell` that faces `cell2`, if they are adjacent.
    pub fn which_wall_between(cell: Coord, cell2: Coord) -> Option<CellWall> {
        match cell2.checked_sub(cell)? {
            Coord(-1, 0) => Some(CellWall::Top),
            Coord(0, 1) => Some(CellWall::Right),
            Coord(1, 0) => Some(CellWall::Bottom),
            Coord(0, -1) => Some(CellWall::Left),
            _ => None,
        }
    }

    pub fn is_valid_wall(&self, cell: Coord, wall: CellWall) -> bool {
        self.in_bounds(cell) && self.in_bounds(cell + wall.to_coord())
    }

    pub fn open_edge(&mut self, a: Coord, b: Coord) -> Result<()> {
        let wall = self.edge_between(a, b)?;
        self.add_passage(a, wall);
        Ok(())
    }

    pub fn close_edge(&mut self, a: Coord, b: Coord) -> Result<()> {
        let wall = self.edge_between(a, b)?;
        self.build_wall(a, wall);
        Ok(())
    }

    /// Whether `a` and `b` are adjacent cells joined by an open passage.
    ///
    /// Never fails; out of bounds or non-adjacent pairs are simply closed.
    pub fn is_open(&self, a: Coord, b: Coord) -> bool {
        if !self.in_bounds(a) || !self.in_bounds(b) {
            return false;
        }

        match (Self::which_wall_between(a, b), self.cells.get(a)) {
            (Some(wall), Some(cell)) => cell.is_open(wall),
            _ => false,
        }
    }

    fn edge_between(&self, a: Coord, b: Coord) -> Result<CellWall> {
        Self::which_wall_between(a, b)
            .filter(|&wall| self.is_valid_wall(a, wall))
            .ok_or(Error::NotAdjacent(a, b))
    }

    /// Opens `wall` of `cell` together with the matching wall of its neighbour.
    /// Walls leading off the grid are left untouched.
    pub(crate) fn add_passage(&mut self, cell: Coord, wall: CellWall) {
        if !self.is_valid_wall(cell, wall) {
            return;
        }

        self.cells[cell].make_passage(wall);
        self.cells[cell + wall.to_coord()].make_passage(wall.reverse_wall());
    }

    pub(crate) fn build_wall(&mut self, cell: Coord, wall: CellWall) {
        if !self.is_valid_wall(cell, wall) {
            return;
        }

        self.cells[cell].build_wall(wall);
        self.cells[cell + wall.to_coord()].build_wall(wall.reverse_wall());
    }

    /// Opens the edge between two cells generators already know to be adjacent.
    pub(crate) fn connect(&mut self, a: Coord, b: Coord) {
        if let Some(wall) = Self::which_wall_between(a, b) {
            self.add_passage(a, wall);
        }
    }

    /// Opens every interior edge, leaving a single empty chamber.
    pub fn open_all(&mut self) {
        for pos in Coord::iter_fill(Coord::ZERO, self.cells.size()) {
            self.add_passage(pos, CellWall::Right);
            self.add_passage(pos, CellWall::Bottom);
        }
    }

    pub fn neighbors(&self, cell: Coord) -> SmallVec<[Coord; 4]> {
        CellWall::get_in_order()
            .into_iter()
            .filter(|&wall| self.is_valid_wall(cell, wall))
            .map(|wall| cell + wall.to_coord())
            .collect()
    }

    pub fn open_neighbors(&self, cell: Coord) -> SmallVec<[Coord; 4]> {
        let Some(&c) = self.cells.get(cell) else {
            return SmallVec::new();
        };

        c.open_walls()
            .filter(|&wall| self.is_valid_wall(cell, wall))
            .map(|wall| cell + wall.to_coord())
            .collect()
    }

    /// Number of open edges, each counted once.
    pub fn edge_count(&self) -> usize {
        self.cells
            .iter_pos()
            .map(|pos| {
                let cell = self.cells[pos];
                cell.is_open(CellWall::Right) as usize + cell.is_open(CellWall::Bottom) as usize
            })
            .sum()
    }

    /// Cells with exactly one passage.
    pub fn dead_ends(&self) -> usize {
        self.cells.iter().filter(|c| c.passage_count() == 1).count()
    }

    /// Number of cells reachable from `from` through open edges.
    pub fn reachable_from(&self, from: Coord) -> usize {
        if !self.in_bounds(from) {
            return 0;
        }

        let mut visited = self.cells.map(|_| false);
        let mut queue = VecDeque::from([from]);
        visited[from] = true;
        let mut count = 0;

        while let Some(current) = queue.pop_front() {
            count += 1;
            for next in self.open_neighbors(current) {
                if !visited[next] {
                    visited[next] = true;
                    queue.push_back(next);
                }
            }
        }

        count
    }

    pub fn is_connected(&self) -> bool {
        self.reachable_from(self.entry()) == self.cell_count()
    }

    /// Whether every open wall is reciprocated by the neighbour behind it.
    /// Openings that lead off the grid count as asymmetric.
    pub fn is_symmetric(&self) -> bool {
        self.first_asymmetric().is_none()
    }

    pub(crate) fn first_asymmetric(&self) -> Option<(Coord, CellWall)> {
        self.cells.iter_pos().find_map(|pos| {
            self.cells[pos]
                .open_walls()
                .find(|&wall| {
                    self.cells
                        .get(pos + wall.to_coord())
                        .map_or(true, |other| other.is_closed(wall.reverse_wall()))
                })
                .map(|wall| (pos, wall))
        })
    }
}
