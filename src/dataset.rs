//! Dataset file: tile grid dimensions plus the image references of one
//! logical image, as fetched from the server.
//!
//! ```json
//! { "tileRows": 2, "tileCols": 2,
//!   "images": [ { "tileRow": 1, "tileCol": 1, "timepoint": 0.0 } ] }
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::series::{FrameList, ImageReference, ImageSeriesIndex};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub tile_rows: u32,
    pub tile_cols: u32,
    #[serde(default)]
    pub images: Vec<ImageReference>,
}

impl Dataset {
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read dataset: {}", path.display()))?;
        Self::from_json(&json).with_context(|| format!("Invalid dataset: {}", path.display()))
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Index the images into ordered frames
    pub fn frames(&self) -> Result<FrameList> {
        let frames = ImageSeriesIndex::build(self.images.iter().cloned(), self.tile_rows, self.tile_cols)?;
        Ok(frames)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_TIMEPOINTS: &str = r#"{
        "tileRows": 1, "tileCols": 2,
        "images": [
            {"tileRow": 1, "tileCol": 2, "timepoint": 10.0},
            {"tileRow": 1, "tileCol": 1, "timepoint": 0.0},
            {"tileRow": 1, "tileCol": 2, "timepoint": 0.0}
        ]
    }"#;

    #[test]
    fn test_parse_and_index() {
        let dataset = Dataset::from_json(TWO_TIMEPOINTS).unwrap();
        assert_eq!(dataset.images.len(), 3);
        let frames = dataset.frames().unwrap();
        assert_eq!(frames.len(), 2);
        assert_eq!(frames.get(0).unwrap().frame.image_count(), 2);
        assert_eq!(frames.get(1).unwrap().label, "Time: 10.0 sec");
    }

    #[test]
    fn test_out_of_grid_tile_fails() {
        let json = r#"{"tileRows": 1, "tileCols": 1, "images": [{"tileRow": 2, "tileCol": 1}]}"#;
        let err = Dataset::from_json(json).unwrap().frames().unwrap_err();
        assert!(err.to_string().contains("outside the 1x1 tile grid"));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dataset.json");
        std::fs::write(&path, TWO_TIMEPOINTS).unwrap();
        assert_eq!(Dataset::load(&path).unwrap().tile_cols, 2);
        assert!(Dataset::load(&dir.path().join("missing.json")).is_err());
    }

    #[test]
    fn test_oversized_grid_fails() {
        let json = r#"{"tileRows": 100000, "tileCols": 100000, "images": [{"tileRow": 1, "tileCol": 1}]}"#;
        let err = Dataset::from_json(json).unwrap().frames().unwrap_err();
        assert!(err.to_string().contains("exceeds the limit"));
    }
}
