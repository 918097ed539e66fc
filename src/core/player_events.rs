//! Player notifications published on the player's [`EventBus`](super::event_bus::EventBus).

use super::player::PlaybackState;

// === Transport ===

/// Stopped <-> Playing transition
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlaybackStateChangedEvent {
    pub state: PlaybackState,
    pub frame: usize,
}

/// Current frame index changed (step, seek, autoplay, rewind)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameChangedEvent {
    pub frame: usize,
    pub frame_count: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameDelayChangedEvent {
    pub delay_ms: u64,
}

// === Frame loading ===

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameLoadedEvent {
    pub index: usize,
}

/// Loader failed; playback is not affected
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameLoadFailedEvent {
    pub index: usize,
    pub error: String,
}
