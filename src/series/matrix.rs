//! Time x depth addressing of a frame list (two-slider view)
//!
//! Possible only when no frame has a series number, every frame has both a
//! timepoint and a depth, and every timepoint has the same number of depth
//! levels. Then the sorted frame list is exactly the row-major matrix.

use super::index::FrameList;
use super::point::{SeriesPoint, format_value};

#[derive(Clone, Debug, PartialEq)]
pub struct TimeDepthMatrix {
    /// rows = timepoints (ascending), cols = depth levels (ascending)
    points: Vec<Vec<SeriesPoint>>,
    depth_count: usize,
}

impl TimeDepthMatrix {
    /// Build the matrix, or `None` when the frames don't form a full grid
    pub fn from_frames(frames: &FrameList) -> Option<Self> {
        let mut points: Vec<Vec<SeriesPoint>> = Vec::new();
        let mut current_time: Option<f32> = None;

        for point in frames.points() {
            if point.series_number.is_some() {
                return None;
            }
            let (Some(t), Some(_)) = (point.timepoint, point.depth) else {
                return None;
            };
            // Frames are sorted, so equal timepoints are adjacent
            match current_time {
                Some(prev) if prev.total_cmp(&t).is_eq() => {
                    if let Some(row) = points.last_mut() {
                        row.push(*point);
                    }
                }
                _ => {
                    points.push(vec![*point]);
                    current_time = Some(t);
                }
            }
        }

        let depth_count = points.first()?.len();
        if points.iter().any(|row| row.len() != depth_count) {
            return None;
        }
        Some(Self { points, depth_count })
    }

    pub fn timepoint_count(&self) -> usize {
        self.points.len()
    }

    pub fn depth_count(&self) -> usize {
        self.depth_count
    }

    /// Point at 0-based (time, depth) indices
    pub fn point(&self, time_idx: usize, depth_idx: usize) -> Option<&SeriesPoint> {
        self.points.get(time_idx)?.get(depth_idx)
    }

    /// Index into the source [`FrameList`]
    pub fn frame_index(&self, time_idx: usize, depth_idx: usize) -> Option<usize> {
        if time_idx >= self.timepoint_count() || depth_idx >= self.depth_count {
            return None;
        }
        Some(time_idx * self.depth_count + depth_idx)
    }

    /// Time slider label, e.g. `Time: 5.0 sec (1/3)`
    pub fn time_label(&self, time_idx: usize) -> Option<String> {
        let t = self.point(time_idx, 0)?.timepoint?;
        Some(format!(
            "Time: {} sec ({}/{})",
            format_value(t),
            time_idx + 1,
            self.timepoint_count()
        ))
    }

    /// Depth slider label, e.g. `Depth: 2.0 (2/4)`
    pub fn depth_label(&self, depth_idx: usize) -> Option<String> {
        let z = self.point(0, depth_idx)?.depth?;
        Some(format!(
            "Depth: {} ({}/{})",
            format_value(z),
            depth_idx + 1,
            self.depth_count
        ))
    }
}
