use bitflags::bitflags;

use crate::dims::Coord;

bitflags! {
    /// Open passages of a single cell, one bit per cardinal direction.
    ///
    /// A set bit means the edge is passable. A fresh cell is fully walled.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Cell: u8 {
        const TOP = 1;
        const RIGHT = 1 << 1;
        const BOTTOM = 1 << 2;
        const LEFT = 1 << 3;
    }
}

impl Cell {
    pub fn walled() -> Self {
        Cell::empty()
    }

    pub fn is_open(self, wall: CellWall) -> bool {
        self.contains(wall.flag())
    }

    pub fn is_closed(self, wall: CellWall) -> bool {
        !self.is_open(wall)
    }

    pub fn make_passage(&mut self, wall: CellWall) {
        self.insert(wall.flag());
    }

    pub fn build_wall(&mut self, wall: CellWall) {
        self.remove(wall.flag());
    }

    pub fn open_walls(self) -> impl Iterator<Item = CellWall> {
        CellWall::get_in_order()
            .into_iter()
            .filter(move |wall| self.is_open(*wall))
    }

    pub fn passage_count(self) -> u32 {
        self.bits().count_ones()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellWall {
    Top,
    Right,
    Bottom,
    Left,
}

impl CellWall {
    pub fn get_in_order() -> [CellWall; 4] {
        [CellWall::Top, CellWall::Right, CellWall::Bottom, CellWall::Left]
    }

    pub fn flag(self) -> Cell {
        match self {
            CellWall::Top => Cell::TOP,
            CellWall::Right => Cell::RIGHT,
            CellWall::Bottom => Cell::BOTTOM,
            CellWall::Left => Cell::LEFT,
        }
    }

    /// Offset to the neighbour on the other side of this wall, as `(row, col)`.
    pub fn to_coord(self) -> Coord {
        match self {
            CellWall::Top => Coord(-1, 0),
            CellWall::Right => Coord(0, 1),
            CellWall::Bottom => Coord(1, 0),
            CellWall::Left => Coord(0, -1),
        }
    }

    pub fn reverse_wall(self) -> CellWall {
        match self {
            CellWall::Top => CellWall::Bottom,
            CellWall::Right => CellWall::Left,
            CellWall::Bottom => CellWall::Top,
            CellWall::Left => CellWall::Right,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walls_reverse_to_themselves() {
        for wall in CellWall::get_in_order() {
            assert_eq!(wall.reverse_wall().reverse_wall(), wall);
            assert_eq!(wall.to_coord() + wall.reverse_wall().to_coord(), Coord::ZERO);
        }
    }

    #[test]
    fn passages() {
        let mut cell = Cell::walled();
        assert_eq!(cell.bits(), 0);

        cell.make_passage(CellWall::Right);
        cell.make_passage(CellWall::Left);
        assert!(cell.is_open(CellWall::Right));
        assert!(cell.is_closed(CellWall::Top));
        assert_eq!(cell.bits(), 0b1010);
        assert_eq!(cell.passage_count(), 2);

        cell.build_wall(CellWall::Right);
        assert_eq!(cell.open_walls().collect::<Vec<_>>(), vec![CellWall::Left]);
    }
}
