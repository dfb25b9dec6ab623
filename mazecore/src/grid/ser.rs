use crate::{
    array::Array2D,
    dims::Coord,
    error::{Error, Result},
    grid::{cell::Cell, Grid},
};

impl Grid {
    /// One bitmask per cell, one `Vec` per row.
    pub fn to_matrix(&self) -> Vec<Vec<u8>> {
        self.cells.map(|cell| cell.bits()).to_rows()
    }

    /// Rebuilds a grid from bitmasks produced by [`Grid::to_matrix`].
    ///
    /// The matrix must be square and non-empty, every value must only use the
    /// four direction bits, and every opening must be reciprocated by the
    /// neighbour it leads to.
    pub fn from_matrix<R: AsRef<[u8]>>(matrix: &[R]) -> Result<Self> {
        let size = matrix.len();
        if size == 0 {
            return Err(Error::MalformedGrid("matrix is empty".into()));
        }

        let mut cells = Array2D::new(Cell::walled(), size, size);
        for (row, values) in matrix.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != size {
                return Err(Error::MalformedGrid(format!(
                    "row {} has {} cells, expected {}",
                    row,
                    values.len(),
                    size
                )));
            }

            for (col, &bits) in values.iter().enumerate() {
                let cell = Cell::from_bits(bits).ok_or_else(|| {
                    Error::MalformedGrid(format!(
                        "invalid bitmask {} at {}",
                        bits,
                        Coord(row as i32, col as i32)
                    ))
                })?;
                cells[Coord(row as i32, col as i32)] = cell;
            }
        }

        let grid = Grid { cells };
        if let Some((pos, wall)) = grid.first_asymmetric() {
            return Err(Error::MalformedGrid(format!(
                "opening {:?} of cell {} is not reciprocated",
                wall, pos
            )));
        }

        Ok(grid)
    }
}

pub fn serialize(grid: &Grid) -> Vec<Vec<u8>> {
    grid.to_matrix()
}

pub fn deserialize<R: AsRef<[u8]>>(matrix: &[R]) -> Result<Grid> {
    Grid::from_matrix(matrix)
}

impl From<Grid> for Vec<Vec<u8>> {
    fn from(grid: Grid) -> Self {
        grid.to_matrix()
    }
}

impl TryFrom<Vec<Vec<u8>>> for Grid {
    type Error = Error;

    fn try_from(matrix: Vec<Vec<u8>>) -> Result<Self> {
        Grid::from_matrix(&matrix)
    }
}
