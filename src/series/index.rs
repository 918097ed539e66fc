//! Groups tile references into an ordered, labeled frame list
//!
//! One frame per distinct [`SeriesPoint`], sorted by the point order. Tiles
//! mapping to an occupied grid cell of the same point overwrite the earlier
//! tile (last write wins).

use std::collections::BTreeMap;

use log::{debug, info};

use super::{MAX_GRID_TILES, SeriesError};
use super::frame::Frame;
use super::point::SeriesPoint;
use super::reference::ImageReference;

/// One entry of a [`FrameList`]
#[derive(Clone, Debug, PartialEq)]
pub struct SeriesFrame {
    pub point: SeriesPoint,
    pub frame: Frame,
    pub label: String,
}

/// Ordered frame sequence produced by [`ImageSeriesIndex::build`]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameList {
    tile_rows: u32,
    tile_cols: u32,
    frames: Vec<SeriesFrame>,
}

impl FrameList {
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&SeriesFrame> {
        self.frames.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SeriesFrame> {
        self.frames.iter()
    }

    pub fn points(&self) -> impl Iterator<Item = &SeriesPoint> + '_ {
        self.frames.iter().map(|f| &f.point)
    }

    pub fn tile_rows(&self) -> u32 {
        self.tile_rows
    }

    pub fn tile_cols(&self) -> u32 {
        self.tile_cols
    }

    /// Label with position, e.g. `Time: 5.0 sec (2/10)`
    pub fn progress_label(&self, index: usize) -> Option<String> {
        let frame = self.frames.get(index)?;
        Some(format!("{} ({}/{})", frame.label, index + 1, self.frames.len()))
    }
}

impl<'a> IntoIterator for &'a FrameList {
    type Item = &'a SeriesFrame;
    type IntoIter = std::slice::Iter<'a, SeriesFrame>;

    fn into_iter(self) -> Self::IntoIter {
        self.frames.iter()
    }
}

/// Stateless builder of [`FrameList`]s
pub struct ImageSeriesIndex;

impl ImageSeriesIndex {
    /// Group `references` by series point into `tile_rows x tile_cols` frames.
    ///
    /// Fails with [`SeriesError::GridTooLarge`] when the grid holds more than
    /// [`MAX_GRID_TILES`] cells, and with [`SeriesError::InvalidCoordinate`]
    /// on the first tile outside the grid. Empty input yields an empty list.
    pub fn build<I>(references: I, tile_rows: u32, tile_cols: u32) -> Result<FrameList, SeriesError>
    where
        I: IntoIterator<Item = ImageReference>,
    {
        if u64::from(tile_rows) * u64::from(tile_cols) > MAX_GRID_TILES {
            return Err(SeriesError::GridTooLarge {
                tile_rows,
                tile_cols,
                max_tiles: MAX_GRID_TILES,
            });
        }

        let mut groups: BTreeMap<SeriesPoint, Frame> = BTreeMap::new();
        let mut tile_count = 0usize;

        for reference in references {
            let (row, col) = (reference.tile_row, reference.tile_col);
            if row == 0 || row > tile_rows || col == 0 || col > tile_cols {
                return Err(SeriesError::InvalidCoordinate {
                    tile_row: row,
                    tile_col: col,
                    tile_rows,
                    tile_cols,
                });
            }

            let point = reference.series_point();
            let frame = groups
                .entry(point)
                .or_insert_with(|| Frame::empty(tile_rows, tile_cols));
            if frame.place(reference).is_some() {
                debug!("Duplicate tile ({}, {}) at [{}], keeping last", row, col, point);
            }
            tile_count += 1;
        }

        let frames: Vec<SeriesFrame> = groups
            .into_iter()
            .map(|(point, frame)| SeriesFrame {
                label: Self::label(&point),
                point,
                frame,
            })
            .collect();

        info!(
            "Indexed {} tiles into {} frames ({}x{} grid)",
            tile_count,
            frames.len(),
            tile_rows,
            tile_cols
        );

        Ok(FrameList {
            tile_rows,
            tile_cols,
            frames,
        })
    }

    /// Human-readable label of a series point
    pub fn label(point: &SeriesPoint) -> String {
        point.label()
    }
}
