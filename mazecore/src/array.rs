use std::ops;

use crate::dims::Coord;

/// Row-major square-or-rectangular buffer indexed by [`Coord`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Array2D<T> {
    buf: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T> Array2D<T> {
    pub fn size(&self) -> Coord {
        Coord(self.rows as i32, self.cols as i32)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn dim_to_idx(&self, pos: Coord) -> Option<usize> {
        if !pos.all_non_negative() {
            return None;
        }

        let (row, col) = (pos.0 as usize, pos.1 as usize);
        if row >= self.rows || col >= self.cols {
            return None;
        }

        Some(row * self.cols + col)
    }

    pub fn idx_to_dim(&self, idx: usize) -> Option<Coord> {
        if idx >= self.buf.len() {
            return None;
        }

        Some(Coord((idx / self.cols) as i32, (idx % self.cols) as i32))
    }

    pub fn get(&self, pos: Coord) -> Option<&T> {
        self.dim_to_idx(pos).and_then(|i| self.buf.get(i))
    }

    pub fn get_mut(&mut self, pos: Coord) -> Option<&mut T> {
        self.dim_to_idx(pos).and_then(|i| self.buf.get_mut(i))
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.buf.iter()
    }

    pub fn iter_pos(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.buf.len()).filter_map(move |i| self.idx_to_dim(i))
    }

    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> Array2D<U> {
        Array2D {
            buf: self.buf.iter().map(f).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Copies the buffer out as one `Vec` per row.
    pub fn to_rows(&self) -> Vec<Vec<T>>
    where
        T: Clone,
    {
        if self.cols == 0 {
            return vec![Vec::new(); self.rows];
        }
        self.buf.chunks(self.cols).map(|row| row.to_vec()).collect()
    }
}

impl<T: Clone> Array2D<T> {
    pub fn new(item: T, rows: usize, cols: usize) -> Self {
        Self {
            buf: vec![item; rows * cols],
            rows,
            cols,
        }
    }
}

impl<T> ops::Index<Coord> for Array2D<T> {
    type Output = T;

    fn index(&self, index: Coord) -> &Self::Output {
        self.get(index).expect("Index out of bounds")
    }
}

impl<T> ops::IndexMut<Coord> for Array2D<T> {
    fn index_mut(&mut self, index: Coord) -> &mut Self::Output {
        self.get_mut(index).expect("Index out of bounds")
    }
}
