//! Tile grid of one series point

use super::reference::ImageReference;

/// `rows x cols` grid of tiles, row-major, empty positions kept as `None`.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    rows: u32,
    cols: u32,
    tiles: Vec<Option<ImageReference>>,
}

impl Frame {
    /// Grid with every position empty
    pub fn empty(rows: u32, cols: u32) -> Self {
        Self {
            rows,
            cols,
            tiles: vec![None; rows as usize * cols as usize],
        }
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn cols(&self) -> u32 {
        self.cols
    }

    fn slot(&self, row: u32, col: u32) -> Option<usize> {
        if row == 0 || col == 0 || row > self.rows || col > self.cols {
            return None;
        }
        Some((row - 1) as usize * self.cols as usize + (col - 1) as usize)
    }

    /// Place a tile at its own (1-based) position; returns the tile it replaced.
    ///
    /// Caller guarantees the position is inside the grid.
    pub(crate) fn place(&mut self, tile: ImageReference) -> Option<ImageReference> {
        let slot = self.slot(tile.tile_row, tile.tile_col)?;
        self.tiles[slot].replace(tile)
    }

    /// Tile at 1-based (row, col); `None` for an empty or out-of-grid position
    pub fn tile(&self, row: u32, col: u32) -> Option<&ImageReference> {
        self.slot(row, col).and_then(|i| self.tiles[i].as_ref())
    }

    /// All positions in row-major order, empty ones included
    pub fn tiles(&self) -> impl Iterator<Item = (u32, u32, Option<&ImageReference>)> + '_ {
        let cols = self.cols.max(1);
        self.tiles.iter().enumerate().map(move |(i, t)| {
            let i = i as u32;
            (i / cols + 1, i % cols + 1, t.as_ref())
        })
    }

    /// Number of occupied positions
    pub fn image_count(&self) -> usize {
        self.tiles.iter().filter(|t| t.is_some()).count()
    }
}
