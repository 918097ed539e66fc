//! Image series indexing - groups tile references into ordered movie frames
//!
//! A logical image of a time-lapse / z-stack / multi-series acquisition arrives
//! as a flat list of tiles, each tagged with optional (timepoint, depth,
//! series number) coordinates. This module turns that list into frames:
//!
//! - [`SeriesPoint`] - the coordinate triple, with a total order
//! - [`Frame`] - one tile grid per series point, empty cells kept explicit
//! - [`ImageSeriesIndex`] - builds the ordered, labeled [`FrameList`]
//! - [`TimeDepthMatrix`] - optional 2D (time x depth) addressing of frames
//!
//! Everything here is pure; a built `FrameList` is an immutable value shared
//! by the player and the rendering layer.

pub mod frame;
pub mod index;
pub mod matrix;
pub mod point;
pub mod reference;

pub use frame::Frame;
pub use index::{FrameList, ImageSeriesIndex, SeriesFrame};
pub use matrix::TimeDepthMatrix;
pub use point::SeriesPoint;
pub use reference::ImageReference;

use thiserror::Error;

/// Largest accepted tile grid (rows x cols); every frame allocates one cell per tile
pub const MAX_GRID_TILES: u64 = 1 << 16;

/// Errors raised while indexing a series
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SeriesError {
    /// Tile position lies outside the declared tile grid (malformed upstream data)
    #[error("tile ({tile_row}, {tile_col}) is outside the {tile_rows}x{tile_cols} tile grid")]
    InvalidCoordinate {
        tile_row: u32,
        tile_col: u32,
        tile_rows: u32,
        tile_cols: u32,
    },

    /// Declared tile grid is too large to allocate per frame
    #[error("{tile_rows}x{tile_cols} tile grid exceeds the limit of {max_tiles} tiles")]
    GridTooLarge {
        tile_rows: u32,
        tile_cols: u32,
        max_tiles: u64,
    },
}
