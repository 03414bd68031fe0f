//! Board module - manages the game grid
//!
//! The board is an N x N grid where each cell holds a lavender tag, or is
//! empty while a collapse is in progress.
//! Uses a flat vector in row-major order (row * size + col).
//! Coordinates: (row, col) with row 0 at the top; cells fall toward larger rows.

use arrayvec::ArrayVec;

use crate::types::{Cell, Pos, Tag};

/// The game board - `size` rows x `size` columns using flat storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    size: usize,
    /// Flat array of cells, row-major order (row * size + col)
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new board with every cell empty
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    /// Build a board from rows of tags. Returns `None` unless the rows form a
    /// non-empty square.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Option<Self> {
        let size = rows.len();
        if size == 0 || rows.iter().any(|r| r.as_ref().len() != size) {
            return None;
        }
        let cells = rows
            .iter()
            .flat_map(|r| r.as_ref().iter().map(|&t| Some(Tag(t))))
            .collect();
        Some(Self { size, cells })
    }

    /// Rows of raw tag values; empty cells are reported as `None`.
    pub fn to_rows(&self) -> Vec<Vec<Option<u8>>> {
        self.cells
            .chunks(self.size)
            .map(|row| row.iter().map(|c| c.map(|t| t.0)).collect())
            .collect()
    }

    #[inline(always)]
    fn index(&self, pos: Pos) -> Option<usize> {
        if pos.row >= self.size || pos.col >= self.size {
            return None;
        }
        Some(pos.row * self.size + pos.col)
    }

    /// Rows (and columns) of the board
    pub fn size(&self) -> usize {
        self.size
    }

    /// Get cell at `pos`. Returns None if out of bounds
    pub fn get(&self, pos: Pos) -> Option<Cell> {
        self.index(pos).map(|idx| self.cells[idx])
    }

    /// Tag at `pos`, `None` when out of bounds or empty
    pub fn tag(&self, pos: Pos) -> Option<Tag> {
        self.get(pos).flatten()
    }

    /// Set cell at `pos`. Returns false if out of bounds
    pub fn set(&mut self, pos: Pos, cell: Cell) -> bool {
        match self.index(pos) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, pos: Pos) -> bool {
        self.index(pos).is_some()
    }

    /// In-bounds orthogonal neighbours of `pos` (up, down, left, right)
    pub fn neighbors(&self, pos: Pos) -> ArrayVec<Pos, 4> {
        let mut out = ArrayVec::new();
        if pos.row > 0 {
            out.push(Pos::new(pos.row - 1, pos.col));
        }
        if pos.row + 1 < self.size {
            out.push(Pos::new(pos.row + 1, pos.col));
        }
        if pos.col > 0 {
            out.push(Pos::new(pos.row, pos.col - 1));
        }
        if pos.col + 1 < self.size {
            out.push(Pos::new(pos.row, pos.col + 1));
        }
        out
    }

    /// Every coordinate in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Pos> {
        let size = self.size;
        (0..size * size).map(move |i| Pos::new(i / size, i % size))
    }

    /// True when no cell is empty
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| c.is_some())
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_none()).count()
    }

    /// Get a reference to the internal cells
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Top-to-bottom cells of one column, `None` when `col` is off the board
    pub fn column(&self, col: usize) -> Option<Vec<Cell>> {
        if col >= self.size {
            return None;
        }
        Some(
            (0..self.size)
                .map(|row| self.cells[row * self.size + col])
                .collect(),
        )
    }

    /// Write the board as raw tag values (empty cells as `u8::MAX`).
    pub fn write_u8_grid(&self, out: &mut Vec<Vec<u8>>) {
        out.resize_with(self.size, Vec::new);
        for (dst, row) in out.iter_mut().zip(self.cells.chunks(self.size)) {
            dst.clear();
            dst.extend(row.iter().map(|c| c.map_or(u8::MAX, |t| t.0)));
        }
    }
}
