//! Movie player - Stopped/Playing state machine over an ordered frame list
//!
//! **Architecture**: the player owns only playback state (current frame,
//! Stopped/Playing, delay). Frames themselves are loaded by a caller-supplied
//! [`FrameLoader`]; the player treats it as an opaque async operation.
//!
//! **Used by**: viewer transport buttons (play/stop/next/previous), position
//! slider (seek), progress label (frame).
//!
//! # Threading
//!
//! Single-threaded: the player is an `Rc` handle and spawns its continuations
//! with [`tokio::task::spawn_local`]. All transport calls must therefore run
//! inside a [`tokio::task::LocalSet`].
//!
//! # Autoplay
//!
//! `play()` schedules a continuation after the frame delay. Each continuation:
//! - exits if the playing generation it was spawned for is no longer current
//! - at the last frame: stops and rewinds to frame 0 (no auto-resume)
//! - otherwise advances by one, awaits the load, then waits
//!   `max(0, delay - load_time)` before the next continuation
//!
//! Load failures count as completion; playback goes on.
//!
//! # Load ordering
//!
//! Every load (manual or autoplay) passes one FIFO gate, so at most one
//! `load_frame` is outstanding per player. Autoplay re-checks its generation
//! after acquiring the gate, so nothing is loaded on its behalf once `stop()`
//! has returned.

use std::cell::RefCell;
use std::fmt;
use std::future::Future;
use std::rc::Rc;
use std::time::Duration;

use futures::future::LocalBoxFuture;
use log::{debug, info, trace, warn};
use thiserror::Error;
use tokio::sync::Mutex as AsyncMutex;
use tokio::time::Instant;

use super::event_bus::EventBus;
use super::player_events::{
    FrameChangedEvent, FrameDelayChangedEvent, FrameLoadFailedEvent, FrameLoadedEvent,
    PlaybackStateChangedEvent,
};
use crate::config::PlayerSettings;

/// Default minimum delay between autoplay frames
pub const DEFAULT_FRAME_DELAY: Duration = Duration::from_millis(100);

/// Asynchronous frame loader supplied by the viewer.
///
/// Resolves once the frame is on screen (tile grid swapped, image URLs
/// preloaded). Errors are reported through the player's events.
pub trait FrameLoader {
    fn load_frame(&self, index: usize) -> LocalBoxFuture<'static, anyhow::Result<()>>;
}

impl<F, Fut> FrameLoader for F
where
    F: Fn(usize) -> Fut,
    Fut: Future<Output = anyhow::Result<()>> + 'static,
{
    fn load_frame(&self, index: usize) -> LocalBoxFuture<'static, anyhow::Result<()>> {
        Box::pin(self(index))
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PlaybackState {
    #[default]
    Stopped,
    Playing,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlayerError {
    #[error("frame index {index} out of range (frame count {frame_count})")]
    IndexOutOfRange { index: usize, frame_count: usize },
}

#[derive(Debug)]
struct State {
    frame: usize,
    playback: PlaybackState,
    /// Bumped on every play/stop; identifies one playing session
    generation: u64,
    delay: Duration,
}

/// Outcome of one autoplay continuation
enum Step {
    Stale,
    End,
    Advance(usize),
}

struct Shared {
    frame_count: usize,
    state: RefCell<State>,
    loader: Box<dyn FrameLoader>,
    gate: AsyncMutex<()>,
    events: EventBus,
}

/// Playback controller handle. Clones share the same player.
#[derive(Clone)]
pub struct MoviePlayer {
    shared: Rc<Shared>,
}

impl fmt::Debug for MoviePlayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MoviePlayer")
            .field("frame_count", &self.shared.frame_count)
            .field("state", &*self.shared.state.borrow())
            .finish()
    }
}

impl MoviePlayer {
    /// Player over `frame_count` frames with the default 100ms frame delay
    pub fn new(frame_count: usize, loader: impl FrameLoader + 'static) -> Self {
        Self::with_delay(frame_count, loader, DEFAULT_FRAME_DELAY)
    }

    pub fn with_settings(
        frame_count: usize,
        loader: impl FrameLoader + 'static,
        settings: &PlayerSettings,
    ) -> Self {
        Self::with_delay(frame_count, loader, settings.frame_delay())
    }

    pub fn with_delay(frame_count: usize, loader: impl FrameLoader + 'static, delay: Duration) -> Self {
        info!(
            "MoviePlayer initialized ({} frames, {}ms frame delay)",
            frame_count,
            delay.as_millis()
        );
        Self {
            shared: Rc::new(Shared {
                frame_count,
                state: RefCell::new(State {
                    frame: 0,
                    playback: PlaybackState::Stopped,
                    generation: 0,
                    delay,
                }),
                loader: Box::new(loader),
                gate: AsyncMutex::new(()),
                events: EventBus::new(),
            }),
        }
    }

    // === Queries ===

    pub fn frame_count(&self) -> usize {
        self.shared.frame_count
    }

    /// Current frame index (0-based)
    pub fn frame(&self) -> usize {
        self.shared.state.borrow().frame
    }

    pub fn state(&self) -> PlaybackState {
        self.shared.state.borrow().playback
    }

    pub fn is_playing(&self) -> bool {
        self.state() == PlaybackState::Playing
    }

    pub fn is_stopped(&self) -> bool {
        self.state() == PlaybackState::Stopped
    }

    pub fn is_first_frame(&self) -> bool {
        self.frame() == 0
    }

    pub fn is_last_frame(&self) -> bool {
        self.shared.frame_count > 0 && self.frame() == self.shared.frame_count - 1
    }

    pub fn frame_delay(&self) -> Duration {
        self.shared.state.borrow().delay
    }

    /// Bus carrying [`player_events`](super::player_events) notifications
    pub fn events(&self) -> &EventBus {
        &self.shared.events
    }

    // === Transport ===

    /// Start autoplay. Rewinds first when sitting on the last frame.
    pub fn play(&self) {
        if self.shared.frame_count == 0 {
            return;
        }
        let (generation, rewound) = {
            let mut state = self.shared.state.borrow_mut();
            if state.playback == PlaybackState::Playing {
                return;
            }
            let rewound = state.frame != 0 && state.frame + 1 == self.shared.frame_count;
            if rewound {
                state.frame = 0;
            }
            state.playback = PlaybackState::Playing;
            state.generation += 1;
            (state.generation, rewound)
        };

        if rewound {
            self.frame_changed(0);
            self.spawn_load(0);
        }
        debug!("Playback started at frame {} (generation {})", self.frame(), generation);
        self.state_changed();

        let player = self.clone();
        tokio::task::spawn_local(async move { player.autoplay(generation).await });
    }

    /// Stop autoplay; pending continuations become stale.
    ///
    /// Loads already queued by a rewind or a manual step/seek still run, so
    /// the displayed frame keeps matching [`frame`](Self::frame).
    pub fn stop(&self) {
        {
            let mut state = self.shared.state.borrow_mut();
            if state.playback == PlaybackState::Stopped {
                return;
            }
            state.playback = PlaybackState::Stopped;
            state.generation += 1;
        }
        debug!("Playback stopped at frame {}", self.frame());
        self.state_changed();
    }

    /// Step forward one frame (stops autoplay first). No-op at the last frame.
    pub fn next(&self) {
        self.step(1);
    }

    /// Step back one frame (stops autoplay first). No-op at frame 0.
    pub fn previous(&self) {
        self.step(-1);
    }

    fn step(&self, delta: isize) {
        if self.shared.frame_count == 0 {
            return;
        }
        self.stop();
        let target = {
            let mut state = self.shared.state.borrow_mut();
            let Some(target) = state.frame.checked_add_signed(delta) else {
                return;
            };
            if target >= self.shared.frame_count {
                return;
            }
            state.frame = target;
            target
        };
        trace!("Stepped to frame {}", target);
        self.frame_changed(target);
        self.spawn_load(target);
    }

    /// Jump to `index` and load it, whether playing or stopped
    pub fn seek(&self, index: usize) -> Result<(), PlayerError> {
        let frame_count = self.shared.frame_count;
        if index >= frame_count {
            return Err(PlayerError::IndexOutOfRange { index, frame_count });
        }
        let changed = {
            let mut state = self.shared.state.borrow_mut();
            let changed = state.frame != index;
            state.frame = index;
            changed
        };
        trace!("Seek to frame {}", index);
        if changed {
            self.frame_changed(index);
        }
        self.spawn_load(index);
        Ok(())
    }

    /// Change the minimum delay between autoplay frames
    pub fn set_frame_delay(&self, delay: Duration) {
        {
            let mut state = self.shared.state.borrow_mut();
            if state.delay == delay {
                return;
            }
            state.delay = delay;
        }
        debug!("Frame delay set to {}ms", delay.as_millis());
        self.shared.events.emit(FrameDelayChangedEvent {
            delay_ms: delay.as_millis() as u64,
        });
    }

    // === Autoplay ===

    async fn autoplay(self, generation: u64) {
        let mut wait = self.frame_delay();
        loop {
            tokio::time::sleep(wait).await;
            let gate = self.shared.gate.lock().await;

            match self.advance(generation) {
                Step::Stale => {
                    trace!("Discarding stale continuation (generation {})", generation);
                    return;
                }
                Step::End => {
                    drop(gate);
                    debug!("Reached last frame, rewinding");
                    self.rewind();
                    self.stop();
                    return;
                }
                Step::Advance(index) => {
                    self.frame_changed(index);
                    let started = Instant::now();
                    self.issue_load(index).await;
                    drop(gate);
                    wait = self.frame_delay().saturating_sub(started.elapsed());
                    trace!("Next continuation in {}ms", wait.as_millis());
                }
            }
        }
    }

    fn advance(&self, generation: u64) -> Step {
        let mut state = self.shared.state.borrow_mut();
        if state.generation != generation || state.playback != PlaybackState::Playing {
            return Step::Stale;
        }
        if state.frame + 1 >= self.shared.frame_count {
            return Step::End;
        }
        state.frame += 1;
        Step::Advance(state.frame)
    }

    fn rewind(&self) {
        {
            let mut state = self.shared.state.borrow_mut();
            if state.frame == 0 {
                return;
            }
            state.frame = 0;
        }
        self.frame_changed(0);
        self.spawn_load(0);
    }

    // === Loading ===

    /// Queue a load behind the gate
    fn spawn_load(&self, index: usize) {
        let player = self.clone();
        tokio::task::spawn_local(async move {
            let _gate = player.shared.gate.lock().await;
            player.issue_load(index).await;
        });
    }

    /// Run the loader (gate must be held) and publish the outcome
    async fn issue_load(&self, index: usize) {
        trace!("Loading frame {}", index);
        match self.shared.loader.load_frame(index).await {
            Ok(()) => self.shared.events.emit(FrameLoadedEvent { index }),
            Err(e) => {
                warn!("Frame {} failed to load: {:#}", index, e);
                self.shared.events.emit(FrameLoadFailedEvent {
                    index,
                    error: format!("{:#}", e),
                });
            }
        }
    }

    // === Notifications ===

    fn frame_changed(&self, frame: usize) {
        self.shared.events.emit(FrameChangedEvent {
            frame,
            frame_count: self.shared.frame_count,
        });
    }

    fn state_changed(&self) {
        let (state, frame) = {
            let s = self.shared.state.borrow();
            (s.playback, s.frame)
        };
        self.shared
            .events
            .emit(PlaybackStateChangedEvent { state, frame });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::event_bus::downcast_event;
    use std::cell::Cell;
    use tokio::task::LocalSet;

    type Loads = Rc<RefCell<Vec<usize>>>;

    fn recording_player(frame_count: usize) -> (MoviePlayer, Loads) {
        let loads: Loads = Rc::new(RefCell::new(Vec::new()));
        let log = Rc::clone(&loads);
        let player = MoviePlayer::new(frame_count, move |index: usize| {
            log.borrow_mut().push(index);
            async { anyhow::Ok(()) }
        });
        (player, loads)
    }

    /// Player whose loads take `load_ms` of (paused) time
    fn slow_player(frame_count: usize, load_ms: u64) -> (MoviePlayer, Loads) {
        let loads: Loads = Rc::new(RefCell::new(Vec::new()));
        let log = Rc::clone(&loads);
        let player = MoviePlayer::new(frame_count, move |index: usize| {
            log.borrow_mut().push(index);
            async move {
                tokio::time::sleep(Duration::from_millis(load_ms)).await;
                anyhow::Ok(())
            }
        });
        (player, loads)
    }

    /// Let spawned local tasks run without advancing time
    async fn settle() {
        for _ in 0..16 {
            tokio::task::yield_now().await;
        }
    }

    async fn sleep_ms(ms: u64) {
        tokio::time::sleep(Duration::from_millis(ms)).await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_initial_state() {
        let (player, loads) = recording_player(5);
        assert_eq!(player.frame(), 0);
        assert_eq!(player.state(), PlaybackState::Stopped);
        assert!(player.is_first_frame());
        assert!(!player.is_last_frame());
        assert_eq!(player.frame_delay(), DEFAULT_FRAME_DELAY);
        assert!(loads.borrow().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_play_one_continuation() {
        LocalSet::new()
            .run_until(async {
                let (player, loads) = recording_player(5);
                player.play();
                assert!(player.is_playing());

                sleep_ms(150).await;
                assert_eq!(player.frame(), 1);
                assert_eq!(*loads.borrow(), vec![1]);
                player.stop();
            })
            .await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_play_at_last_frame_rewinds() {
        LocalSet::new()
            .run_until(async {
                let (player, loads) = recording_player(5);
                player.seek(4).unwrap();
                settle().await;
                assert!(player.is_last_frame());

                player.play();
                assert_eq!(player.frame(), 0);
                assert!(player.is_playing());
                settle().await;
                assert_eq!(*loads.borrow(), vec![4, 0]);
                player.stop();
            })
            .await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_before_first_continuation() {
        LocalSet::new()
            .run_until(async {
                let (player, loads) = recording_player(5);
                player.play();
                player.stop();
                assert_eq!(player.state(), PlaybackState::Stopped);

                sleep_ms(1000).await;
                assert!(loads.borrow().is_empty());
                assert_eq!(player.frame(), 0);
            })
            .await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_play_twice_is_noop() {
        LocalSet::new()
            .run_until(async {
                let (player, loads) = recording_player(5);
                player.play();
                player.play();
                sleep_ms(150).await;
                // a second autoplay loop would have advanced twice
                assert_eq!(player.frame(), 1);
                assert_eq!(*loads.borrow(), vec![1]);
                player.stop();
            })
            .await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_autoplay_stops_and_rewinds_at_end() {
        LocalSet::new()
            .run_until(async {
                let (player, loads) = recording_player(3);
                player.play();
                sleep_ms(1000).await;
                assert!(player.is_stopped());
                assert_eq!(player.frame(), 0);
                assert_eq!(*loads.borrow(), vec![1, 2, 0]);
            })
            .await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_next_at_last_frame_noop() {
        LocalSet::new()
            .run_until(async {
                let (player, loads) = recording_player(5);
                player.seek(4).unwrap();
                settle().await;
                player.next();
                settle().await;
                assert_eq!(player.frame(), 4);
                assert_eq!(*loads.borrow(), vec![4]);
            })
            .await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_previous_and_next_step() {
        LocalSet::new()
            .run_until(async {
                let (player, loads) = recording_player(5);
                player.previous();
                settle().await;
                assert_eq!(player.frame(), 0);
                assert!(loads.borrow().is_empty());

                player.next();
                player.next();
                player.previous();
                settle().await;
                assert_eq!(player.frame(), 1);
                assert_eq!(*loads.borrow(), vec![1, 2, 1]);
            })
            .await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_next_while_playing_stops_first() {
        LocalSet::new()
            .run_until(async {
                let (player, loads) = recording_player(5);
                player.play();
                sleep_ms(150).await;
                assert_eq!(player.frame(), 1);

                player.next();
                assert!(player.is_stopped());
                assert_eq!(player.frame(), 2);

                sleep_ms(1000).await;
                assert_eq!(player.frame(), 2);
                assert_eq!(*loads.borrow(), vec![1, 2]);
            })
            .await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_seek_loads_regardless_of_state() {
        LocalSet::new()
            .run_until(async {
                let (player, loads) = recording_player(5);
                player.seek(3).unwrap();
                settle().await;
                assert_eq!(player.frame(), 3);
                assert_eq!(*loads.borrow(), vec![3]);

                // same index again still loads
                player.seek(3).unwrap();
                settle().await;
                assert_eq!(*loads.borrow(), vec![3, 3]);

                player.seek(0).unwrap();
                player.play();
                player.seek(3).unwrap();
                assert!(player.is_playing());
                settle().await;
                assert_eq!(player.frame(), 3);
                assert_eq!(loads.borrow().last(), Some(&3));
                player.stop();
            })
            .await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_seek_out_of_range() {
        LocalSet::new()
            .run_until(async {
                let (player, loads) = recording_player(5);
                player.seek(2).unwrap();
                settle().await;

                let err = player.seek(10).unwrap_err();
                assert_eq!(
                    err,
                    PlayerError::IndexOutOfRange {
                        index: 10,
                        frame_count: 5
                    }
                );
                assert_eq!(player.frame(), 2);
                assert!(player.is_stopped());
                assert_eq!(*loads.borrow(), vec![2]);
            })
            .await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_frames_all_noops() {
        LocalSet::new()
            .run_until(async {
                let (player, loads) = recording_player(0);
                player.play();
                assert!(player.is_stopped());
                player.next();
                player.previous();
                assert!(player.seek(0).is_err());
                sleep_ms(500).await;
                assert_eq!(player.frame(), 0);
                assert!(!player.is_last_frame());
                assert!(loads.borrow().is_empty());
            })
            .await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_slow_load_does_not_double_delay() {
        LocalSet::new()
            .run_until(async {
                let (player, loads) = slow_player(5, 80);
                let start = Instant::now();
                player.play();

                // frame 1 at 100ms, load done at 180ms, frame 2 at 200ms
                tokio::time::sleep_until(start + Duration::from_millis(190)).await;
                assert_eq!(player.frame(), 1);
                tokio::time::sleep_until(start + Duration::from_millis(205)).await;
                assert_eq!(player.frame(), 2);
                assert_eq!(*loads.borrow(), vec![1, 2]);
                player.stop();
            })
            .await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_custom_frame_delay() {
        LocalSet::new()
            .run_until(async {
                let (player, _loads) = recording_player(10);
                player.set_frame_delay(Duration::from_millis(500));
                player.play();
                sleep_ms(450).await;
                assert_eq!(player.frame(), 0);
                sleep_ms(100).await;
                assert_eq!(player.frame(), 1);
                player.stop();

                let delays: Vec<u64> = player
                    .events()
                    .poll()
                    .iter()
                    .filter_map(|e| downcast_event::<FrameDelayChangedEvent>(e).map(|d| d.delay_ms))
                    .collect();
                assert_eq!(delays, vec![500]);
            })
            .await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_stale_completion_discarded() {
        LocalSet::new()
            .run_until(async {
                let (player, loads) = slow_player(10, 300);
                let start = Instant::now();
                player.play();

                // load of frame 1 in flight (100..400ms)
                tokio::time::sleep_until(start + Duration::from_millis(150)).await;
                player.stop();
                tokio::time::sleep_until(start + Duration::from_millis(160)).await;
                player.play();

                // old continuation resumes at 400ms and must not advance
                tokio::time::sleep_until(start + Duration::from_millis(450)).await;
                assert_eq!(player.frame(), 2);
                assert_eq!(*loads.borrow(), vec![1, 2]);
                player.stop();
            })
            .await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_loads_never_overlap() {
        LocalSet::new()
            .run_until(async {
                let active = Rc::new(Cell::new(0usize));
                let peak = Rc::new(Cell::new(0usize));
                let order: Loads = Rc::new(RefCell::new(Vec::new()));
                let (a, p, o) = (Rc::clone(&active), Rc::clone(&peak), Rc::clone(&order));
                let player = MoviePlayer::new(5, move |index: usize| {
                    o.borrow_mut().push(index);
                    let (a, p) = (Rc::clone(&a), Rc::clone(&p));
                    async move {
                        a.set(a.get() + 1);
                        p.set(p.get().max(a.get()));
                        tokio::time::sleep(Duration::from_millis(50)).await;
                        a.set(a.get() - 1);
                        anyhow::Ok(())
                    }
                });

                player.seek(1).unwrap();
                player.seek(2).unwrap();
                player.seek(3).unwrap();
                sleep_ms(500).await;
                assert_eq!(*order.borrow(), vec![1, 2, 3]);
                assert_eq!(peak.get(), 1);
            })
            .await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_load_failure_does_not_halt_playback() {
        LocalSet::new()
            .run_until(async {
                let player = MoviePlayer::new(3, |index: usize| async move {
                    if index == 1 {
                        anyhow::bail!("image server unavailable");
                    }
                    Ok(())
                });
                player.play();
                sleep_ms(1000).await;
                assert!(player.is_stopped());
                assert_eq!(player.frame(), 0);

                let events = player.events().poll();
                let failed: Vec<_> = events
                    .iter()
                    .filter_map(|e| downcast_event::<FrameLoadFailedEvent>(e))
                    .collect();
                assert_eq!(failed.len(), 1);
                assert_eq!(failed[0].index, 1);
                assert!(failed[0].error.contains("image server unavailable"));

                let loaded: Vec<usize> = events
                    .iter()
                    .filter_map(|e| downcast_event::<FrameLoadedEvent>(e).map(|l| l.index))
                    .collect();
                assert_eq!(loaded, vec![2, 0]);
            })
            .await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_state_change_notifications() {
        LocalSet::new()
            .run_until(async {
                let (player, _loads) = recording_player(2);
                let seen = Rc::new(RefCell::new(Vec::new()));
                let sink = Rc::clone(&seen);
                player
                    .events()
                    .subscribe::<PlaybackStateChangedEvent, _>(move |e| {
                        sink.borrow_mut().push((e.state, e.frame));
                    });

                player.play();
                sleep_ms(1000).await;

                assert_eq!(
                    *seen.borrow(),
                    vec![(PlaybackState::Playing, 0), (PlaybackState::Stopped, 0)]
                );
            })
            .await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_observer_can_query_player() {
        LocalSet::new()
            .run_until(async {
                let (player, _loads) = recording_player(5);
                let seen = Rc::new(RefCell::new(Vec::new()));
                let (sink, handle) = (Rc::clone(&seen), player.clone());
                player.events().subscribe::<FrameChangedEvent, _>(move |e| {
                    sink.borrow_mut().push((e.frame, handle.frame(), handle.is_stopped()));
                });

                player.next();
                player.seek(3).unwrap();
                settle().await;
                assert_eq!(*seen.borrow(), vec![(1, 1, true), (3, 3, true)]);
            })
            .await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_single_frame_play_does_not_reload() {
        LocalSet::new()
            .run_until(async {
                let (player, loads) = recording_player(1);
                player.play();
                sleep_ms(1000).await;

                assert!(player.is_stopped());
                assert_eq!(player.frame(), 0);
                assert!(loads.borrow().is_empty());
                let frame_changes = player
                    .events()
                    .poll()
                    .iter()
                    .filter(|e| downcast_event::<FrameChangedEvent>(e).is_some())
                    .count();
                assert_eq!(frame_changes, 0);
            })
            .await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_after_rewinding_play_keeps_rewind_load() {
        LocalSet::new()
            .run_until(async {
                let (player, loads) = recording_player(5);
                player.seek(4).unwrap();
                settle().await;
                loads.borrow_mut().clear();

                player.play();
                player.stop();
                sleep_ms(1000).await;

                // only the rewind load; autoplay issued nothing
                assert_eq!(*loads.borrow(), vec![0]);
                assert_eq!(player.frame(), 0);
                assert!(player.is_stopped());
            })
            .await;
    }
}
