//! Image tile reference as delivered by the server

use serde::{Deserialize, Serialize};

use super::point::SeriesPoint;

/// One acquired image tile at a specific acquisition coordinate.
///
/// Tile row/column are 1-based. The three series coordinates are
/// independently optional.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageReference {
    pub tile_row: u32,
    pub tile_col: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timepoint: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depth: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub series_number: Option<i32>,
    /// Opaque image / channel stack id, used by the renderer to build URLs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_id: Option<String>,
}

impl ImageReference {
    /// Tile without any series coordinates
    pub fn tile(tile_row: u32, tile_col: u32) -> Self {
        Self {
            tile_row,
            tile_col,
            timepoint: None,
            depth: None,
            series_number: None,
            image_id: None,
        }
    }

    pub fn with_timepoint(mut self, timepoint: f32) -> Self {
        self.timepoint = Some(timepoint);
        self
    }

    pub fn with_depth(mut self, depth: f32) -> Self {
        self.depth = Some(depth);
        self
    }

    pub fn with_series_number(mut self, series_number: i32) -> Self {
        self.series_number = Some(series_number);
        self
    }

    pub fn with_image_id(mut self, id: impl Into<String>) -> Self {
        self.image_id = Some(id.into());
        self
    }

    /// Series point this tile belongs to
    pub fn series_point(&self) -> SeriesPoint {
        SeriesPoint::new(self.timepoint, self.depth, self.series_number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_camel_case() {
        let json = r#"{"tileRow": 2, "tileCol": 3, "timepoint": 1.5, "seriesNumber": 4, "imageId": "cs-17"}"#;
        let r: ImageReference = serde_json::from_str(json).unwrap();
        assert_eq!(r.tile_row, 2);
        assert_eq!(r.tile_col, 3);
        assert_eq!(r.timepoint, Some(1.5));
        assert_eq!(r.depth, None);
        assert_eq!(r.series_number, Some(4));
        assert_eq!(r.image_id.as_deref(), Some("cs-17"));
    }

    #[test]
    fn test_series_point_from_reference() {
        let r = ImageReference::tile(1, 1).with_timepoint(5.0).with_depth(2.0);
        assert_eq!(r.series_point(), SeriesPoint::new(Some(5.0), Some(2.0), None));
    }
}
