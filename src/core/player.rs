//! Playback engine
//!
//! A background task drains the playback queue and pretends to play each
//! track for its catalog duration. The id of the playing track is published
//! through a watch channel so readers never wait on the task.

use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

use crate::config::Settings;
use crate::error::{ConfigurationError, PlayerError, QueueError};
use crate::stores::{CurrentTrack, Discography, PlaybackQueue};
use crate::utils::durations::{format_duration, parse_duration};
use crate::utils::threading::spawn_background;

const LOCAL_TEST_PLAYER: &str = "local://test-player";

/// How often the loop wakes up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerTiming {
    /// Interval between progress checks while playing
    pub tick: Duration,
    /// Wait after finding the queue empty
    pub idle_backoff: Duration,
}

impl Default for PlayerTiming {
    fn default() -> Self {
        Self {
            tick: Duration::from_secs(1),
            idle_backoff: Duration::from_secs(2),
        }
    }
}

/// Playback state, owned by the loop task
#[derive(Debug, Clone, PartialEq, Eq)]
enum PlayerState {
    Idle,
    Playing {
        track_id: String,
        remaining: Duration,
        started_at: Instant,
    },
    Stopped,
}

/// Where the engine is in its start/stop lifecycle
enum Lifecycle {
    Ready,
    Running {
        cancel: CancellationToken,
        handle: JoinHandle<()>,
    },
    Stopped,
}

/// Simulated player fed by the playback queue
pub struct PlaybackEngine {
    queue: Arc<dyn PlaybackQueue>,
    finder: Arc<dyn Discography>,
    timing: PlayerTiming,
    now_playing: Arc<watch::Sender<String>>,
    lifecycle: Mutex<Lifecycle>,
}

impl PlaybackEngine {
    pub fn new(
        finder: Arc<dyn Discography>,
        queue: Arc<dyn PlaybackQueue>,
        timing: PlayerTiming,
    ) -> Self {
        let (now_playing, _) = watch::channel(String::new());
        Self {
            queue,
            finder,
            timing,
            now_playing: Arc::new(now_playing),
            lifecycle: Mutex::new(Lifecycle::Ready),
        }
    }

    /// Spawn the playback loop on the current tokio runtime.
    ///
    /// An engine runs at most once: starting it again while running, or
    /// after it has been stopped, is refused.
    pub fn start(&self) -> Result<(), PlayerError> {
        let mut lifecycle = self.lifecycle.lock();
        match *lifecycle {
            Lifecycle::Running { .. } => return Err(PlayerError::AlreadyRunning),
            Lifecycle::Stopped => return Err(PlayerError::Stopped),
            Lifecycle::Ready => {}
        }

        let cancel = CancellationToken::new();
        let playback = PlaybackLoop {
            queue: Arc::clone(&self.queue),
            finder: Arc::clone(&self.finder),
            timing: self.timing,
            state: PlayerState::Idle,
            now_playing: Arc::clone(&self.now_playing),
        };
        let handle = spawn_background("player", playback.run(cancel.clone()));

        *lifecycle = Lifecycle::Running { cancel, handle };
        info!(
            tick_ms = self.timing.tick.as_millis() as u64,
            "Player started"
        );
        Ok(())
    }

    /// Stop playback and wait for the loop task to exit.
    ///
    /// The loop checks for cancellation every time it wakes, so this returns
    /// within one sleep interval at most. Stopping twice is a no-op.
    pub async fn stop(&self) {
        let previous = std::mem::replace(&mut *self.lifecycle.lock(), Lifecycle::Stopped);

        if let Lifecycle::Running { cancel, handle } = previous {
            cancel.cancel();
            debug!("waiting for playback loop to stop");
            if let Err(e) = handle.await {
                error!("Playback loop ended abnormally: {}", e);
            }
            info!("Player stopped");
        }

        self.now_playing.send_replace(String::new());
    }

    /// Latest published track id, `""` when idle or stopped
    pub fn current_track_id(&self) -> String {
        self.now_playing.borrow().clone()
    }

    /// Receiver notified each time the playing track changes
    pub fn subscribe(&self) -> watch::Receiver<String> {
        self.now_playing.subscribe()
    }
}

impl CurrentTrack for PlaybackEngine {
    fn current_track_id(&self) -> String {
        PlaybackEngine::current_track_id(self)
    }
}

/// State owned by the background task
struct PlaybackLoop {
    queue: Arc<dyn PlaybackQueue>,
    finder: Arc<dyn Discography>,
    timing: PlayerTiming,
    state: PlayerState,
    now_playing: Arc<watch::Sender<String>>,
}

impl PlaybackLoop {
    async fn run(mut self, cancel: CancellationToken) {
        debug!("starting playback loop");
        loop {
            if cancel.is_cancelled() {
                break;
            }
            let wait = self.advance(Instant::now());
            tokio::select! {
                biased;
                _ = cancel.cancelled() => break,
                _ = tokio::time::sleep(wait) => {}
            }
        }

        self.state = PlayerState::Stopped;
        self.publish(String::new());
        debug!("playback loop exited");
    }

    /// Apply every transition due at `now` and return how long to sleep
    fn advance(&mut self, now: Instant) -> Duration {
        loop {
            match self.state {
                PlayerState::Stopped => return self.timing.tick,
                PlayerState::Idle => match self.queue.dequeue() {
                    Ok(track_id) => {
                        if let Some(remaining) = self.resolve_duration(&track_id) {
                            info!(
                                track_id = %track_id,
                                duration = %format_duration(remaining),
                                "Now playing"
                            );
                            self.publish(track_id.clone());
                            self.state = PlayerState::Playing {
                                track_id,
                                remaining,
                                started_at: now,
                            };
                        }
                    }
                    Err(QueueError::Empty) => {
                        debug!("empty queue, waiting");
                        return self.timing.idle_backoff;
                    }
                    Err(e) => {
                        error!("Failed to take next track: {}", e);
                        return self.timing.idle_backoff;
                    }
                },
                PlayerState::Playing {
                    remaining,
                    started_at,
                    ..
                } => {
                    let elapsed = now.saturating_duration_since(started_at);
                    if elapsed < remaining {
                        if let PlayerState::Playing { track_id, .. } = &self.state {
                            debug!(
                                track_id = %track_id,
                                elapsed = %format_duration(elapsed),
                                "playing"
                            );
                        }
                        return self.timing.tick.min(remaining - elapsed);
                    }

                    debug!("playback complete");
                    self.state = PlayerState::Idle;
                    self.publish(String::new());
                }
            }
        }
    }

    /// Look up how long a dequeued track plays for; unplayable tracks are
    /// skipped
    fn resolve_duration(&self, track_id: &str) -> Option<Duration> {
        let track = match self.finder.get_track(track_id) {
            Ok(track) => track,
            Err(e) => {
                warn!(track_id, "Skipping queued track: {}", e);
                return None;
            }
        };

        let duration = parse_duration(&track.duration);
        if duration.is_none() {
            warn!(
                track_id,
                duration = %track.duration,
                "Skipping track with unreadable duration"
            );
        }
        duration
    }

    fn publish(&self, track_id: String) {
        self.now_playing.send_replace(track_id);
    }
}

/// Build the player named by `player.url`
pub fn from_config(
    settings: &Settings,
    finder: Arc<dyn Discography>,
    queue: Arc<dyn PlaybackQueue>,
) -> Result<Arc<PlaybackEngine>, ConfigurationError> {
    if settings.player.url != LOCAL_TEST_PLAYER {
        return Err(ConfigurationError::Invalid(format!(
            "no player defined for {:?}",
            settings.player.url
        )));
    }

    let timing = PlayerTiming {
        tick: Duration::from_millis(settings.player.tick),
        idle_backoff: Duration::from_millis(settings.player.backoff),
    };
    Ok(Arc::new(PlaybackEngine::new(finder, queue, timing)))
}
