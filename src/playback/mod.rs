//! Time-driven playback of a recorded [`StepSequence`]
//!
//! [`PlaybackController`] is a small state machine:
//!
//! ```text
//!            load                 play
//!  Idle ───────────────▶ Paused ───────▶ Playing
//!   ▲                      ▲   ◀───────     │
//!   │ reset (any state)    │     pause      │ tick on last frame
//!   └──────────────────────┴────────────────┘
//! ```
//!
//! The cursor names the frame currently on screen. `load` makes frame 0
//! current without emitting it (the renderer reads it through
//! [`PlaybackController::current`]); every tick then emits exactly one frame,
//! the next one. The last frame is emitted with `is_final` set, after which
//! the cursor sits one past the end and playback pauses.

mod ticker;

pub use ticker::{IntervalTimer, ManualTicker, TickSource};

use crate::steps::{Step, StepSequence};
use std::time::Duration;

/// Observable controller state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackStatus {
    /// No sequence loaded
    Idle,
    /// Sequence loaded, not advancing
    Paused,
    /// Tick source armed
    Playing,
}

/// One frame handed to the renderer
#[derive(Debug, Clone, Copy)]
pub struct PlaybackFrame<'a> {
    pub index: usize,
    pub step: &'a Step,
    pub is_final: bool,
}

/// Receives frames as playback advances
pub trait Renderer {
    fn render(&mut self, frame: PlaybackFrame<'_>);
}

/// Walks a step sequence forward under control of a [`TickSource`]
#[derive(Debug)]
pub struct PlaybackController<T: TickSource> {
    sequence: Option<StepSequence>,
    cursor: usize,
    running: bool,
    ticker: T,
    interval: Duration,
}

impl<T: TickSource> PlaybackController<T> {
    pub fn new(ticker: T, interval: Duration) -> Self {
        PlaybackController {
            sequence: None,
            cursor: 0,
            running: false,
            ticker,
            interval,
        }
    }

    pub fn status(&self) -> PlaybackStatus {
        match (&self.sequence, self.running) {
            (None, _) => PlaybackStatus::Idle,
            (Some(_), false) => PlaybackStatus::Paused,
            (Some(_), true) => PlaybackStatus::Playing,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.running
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn sequence(&self) -> Option<&StepSequence> {
        self.sequence.as_ref()
    }

    /// True once the final frame has been emitted
    pub fn is_finished(&self) -> bool {
        self.sequence
            .as_ref()
            .is_some_and(|sequence| self.cursor >= sequence.len())
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn ticker(&self) -> &T {
        &self.ticker
    }

    pub fn ticker_mut(&mut self) -> &mut T {
        &mut self.ticker
    }

    /// Change the tick period. A running schedule is re-armed in place.
    pub fn set_interval(&mut self, interval: Duration) {
        self.interval = interval;
        if self.running {
            self.ticker.arm(interval);
        }
    }

    /// Replace whatever was loaded with `sequence`, paused at frame 0
    pub fn load(&mut self, sequence: StepSequence) {
        self.ticker.disarm();
        self.running = false;
        self.cursor = 0;
        log::info!(
            "loaded {} ({} steps)",
            sequence.algorithm(),
            sequence.len()
        );
        self.sequence = Some(sequence);
    }

    /// Start ticking. Returns false (and changes nothing) when idle, already
    /// playing, or finished.
    pub fn play(&mut self) -> bool {
        if self.status() != PlaybackStatus::Paused || self.is_finished() {
            return false;
        }
        self.running = true;
        self.ticker.arm(self.interval);
        log::info!("playing from step {}", self.cursor);
        true
    }

    /// Stop ticking. Returns false when not playing.
    pub fn pause(&mut self) -> bool {
        if !self.running {
            return false;
        }
        self.running = false;
        self.ticker.disarm();
        log::info!("paused at step {}", self.cursor);
        true
    }

    /// Drop the sequence and disarm. Safe from any state.
    pub fn reset(&mut self) {
        self.ticker.disarm();
        self.running = false;
        self.cursor = 0;
        if self.sequence.take().is_some() {
            log::info!("playback reset");
        }
    }

    /// Deliver one tick from the armed source.
    ///
    /// # Panics
    ///
    /// When not playing. The tick source is only armed while playing, so
    /// this indicates a broken caller.
    pub fn tick<R: Renderer + ?Sized>(&mut self, renderer: &mut R) {
        assert!(
            self.running,
            "tick() delivered while playback is {:?}",
            self.status()
        );
        self.advance(renderer);
    }

    /// Advance a single frame by hand while paused. Returns false when
    /// idle, playing or finished.
    pub fn step<R: Renderer + ?Sized>(&mut self, renderer: &mut R) -> bool {
        if self.status() != PlaybackStatus::Paused || self.is_finished() {
            return false;
        }
        self.advance(renderer);
        true
    }

    /// Go back to frame 0 of the loaded sequence, paused
    pub fn rewind(&mut self) -> bool {
        if self.sequence.is_none() {
            return false;
        }
        self.ticker.disarm();
        self.running = false;
        self.cursor = 0;
        true
    }

    /// The frame currently on screen: frame 0 after `load`, the last frame
    /// once finished
    pub fn current(&self) -> Option<PlaybackFrame<'_>> {
        let sequence = self.sequence.as_ref()?;
        let last = sequence.len() - 1;
        let index = self.cursor.min(last);
        Some(PlaybackFrame {
            index,
            step: sequence.get(index)?,
            is_final: index == last,
        })
    }

    fn advance<R: Renderer + ?Sized>(&mut self, renderer: &mut R) {
        let Some(sequence) = self.sequence.as_ref() else {
            panic!("playback advanced with no sequence loaded");
        };
        let last = sequence.len() - 1;
        let next = self.cursor + 1;

        if next < last {
            renderer.render(PlaybackFrame {
                index: next,
                step: &sequence[next],
                is_final: false,
            });
            self.cursor = next;
            return;
        }

        renderer.render(PlaybackFrame {
            index: last,
            step: sequence.last(),
            is_final: true,
        });
        self.cursor = sequence.len();
        self.running = false;
        self.ticker.disarm();
        log::info!("playback complete after {} steps", sequence.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ValueLimits;
    use crate::steps::Algorithm;

    #[derive(Default)]
    struct Indices(Vec<(usize, bool)>);

    impl Renderer for Indices {
        fn render(&mut self, frame: PlaybackFrame<'_>) {
            self.0.push((frame.index, frame.is_final));
        }
    }

    fn controller_with(values: &[i64]) -> PlaybackController<ManualTicker> {
        let sequence = Algorithm::Bubble
            .record(values, &ValueLimits::default())
            .unwrap();
        let mut controller =
            PlaybackController::new(ManualTicker::new(), Duration::from_millis(300));
        controller.load(sequence);
        controller
    }

    #[test]
    fn test_load_is_paused_at_zero() {
        let controller = controller_with(&[2, 1]);
        assert_eq!(controller.status(), PlaybackStatus::Paused);
        assert_eq!(controller.cursor(), 0);
        let current = controller.current().unwrap();
        assert_eq!(current.index, 0);
        assert_eq!(current.step.snapshot(), &[2, 1]);
        assert!(!current.is_final);
    }

    #[test]
    fn test_ticks_emit_each_frame_once() {
        // [3, 2, 1] under bubble sort: initial, 3 swaps, final
        let mut controller = controller_with(&[3, 2, 1]);
        assert_eq!(controller.sequence().unwrap().len(), 5);
        assert!(controller.play());

        let mut seen = Indices::default();
        for _ in 0..4 {
            controller.tick(&mut seen);
        }

        assert_eq!(seen.0, vec![(1, false), (2, false), (3, false), (4, true)]);
        assert_eq!(controller.cursor(), 5);
        assert_eq!(controller.status(), PlaybackStatus::Paused);
        assert!(!controller.ticker().is_armed());
        assert!(controller.is_finished());
        assert!(controller.current().unwrap().is_final);
    }

    #[test]
    fn test_play_when_finished_is_noop() {
        let mut controller = controller_with(&[1]);
        controller.play();
        controller.tick(&mut Indices::default());
        assert!(controller.is_finished());
        assert!(!controller.play());
        assert_eq!(controller.ticker().arm_count(), 1);
    }

    #[test]
    fn test_manual_step_only_while_paused() {
        let mut controller = controller_with(&[2, 1]);
        let mut seen = Indices::default();

        assert!(controller.step(&mut seen));
        assert_eq!(seen.0, vec![(1, false)]);

        controller.play();
        assert!(!controller.step(&mut seen));
        controller.pause();

        assert!(controller.step(&mut seen));
        assert!(!controller.step(&mut seen));
        assert_eq!(seen.0, vec![(1, false), (2, true)]);
    }

    #[test]
    fn test_rewind_returns_to_start() {
        let mut controller = controller_with(&[2, 1]);
        controller.play();
        controller.tick(&mut Indices::default());
        assert!(controller.rewind());
        assert_eq!(controller.cursor(), 0);
        assert_eq!(controller.status(), PlaybackStatus::Paused);
        assert!(!controller.ticker().is_armed());
    }

    #[test]
    fn test_set_interval_rearms_running_source() {
        let mut controller = controller_with(&[2, 1]);
        controller.set_interval(Duration::from_millis(10));
        assert_eq!(controller.ticker().arm_count(), 0);

        controller.play();
        controller.set_interval(Duration::from_millis(20));
        assert_eq!(
            controller.ticker().period(),
            Some(Duration::from_millis(20))
        );
    }

    #[test]
    #[should_panic(expected = "tick() delivered while playback is Idle")]
    fn test_tick_while_idle_panics() {
        let mut controller =
            PlaybackController::new(ManualTicker::new(), Duration::from_millis(1));
        controller.tick(&mut Indices::default());
    }
}
