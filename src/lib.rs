//! TILEPLAY - tile series indexing and movie playback for screening image viewers
//!
//! Re-exports all modules for use by the binary target.

// Core engine (event bus, player)
pub mod core;

// Series indexing (pure)
pub mod series;

// App modules
pub mod cli;
pub mod config;
pub mod dataset;
pub mod paths;

// Re-export commonly used types
pub use core::event_bus::{BoxedEvent, EventBus, downcast_event};
pub use core::player::{FrameLoader, MoviePlayer, PlaybackState, PlayerError};
pub use series::{Frame, FrameList, ImageReference, ImageSeriesIndex, SeriesError, SeriesPoint};
