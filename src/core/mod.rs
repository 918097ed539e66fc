//! Core engine modules - event bus, player
//!
//! These modules form the playback engine, independent of any UI.

pub mod event_bus;
pub mod player;
pub mod player_events;

// Re-exports for convenience
pub use event_bus::EventBus;
pub use player::{MoviePlayer, PlaybackState};
