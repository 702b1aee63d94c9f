//! Playback state machine over a [`StepSequence`].
//!
//! The controller is the only owner of the playback state: the current
//! index, the play flag and the speed multiplier. It has two states:
//!
//! - **Idle**: nothing is scheduled; the index only moves through
//!   `next`/`prev`/`seek`/`reset`.
//! - **Playing**: one loop registration is live with the host
//!   [`Scheduler`]; each [`PlaybackController::on_tick`] may advance by
//!   exactly one step once the step interval has elapsed.
//!
//! Playback stops by itself on the last step. `play()` on the last step is
//! ignored rather than entering a loop with nothing to do.
//!
//! Manual navigation never touches the auto-advance baseline, so stepping by
//! hand while playing does not shift the next automatic advance.

use super::scheduler::{FrameClock, Registration, RegistrationSource, Scheduler};
use super::sequence::{Step, StepSequence};
use std::time::Duration;
use tracing::{debug, trace, warn};

/// Dwell time per step at 1.0x speed
pub const BASE_INTERVAL: Duration = Duration::from_millis(2000);

/// Speed multiplier a freshly loaded sequence starts with
pub const DEFAULT_SPEED: f64 = 1.0;

/// Callback fired on every index change with the new index and its step
pub type IndexListener<T> = Box<dyn FnMut(usize, &Step<T>)>;

/// Read-only view of the playback state for control widgets
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackState {
    pub current_index: usize,
    pub length: usize,
    pub is_playing: bool,
    pub speed: f64,
}

impl PlaybackState {
    pub fn at_start(&self) -> bool {
        self.current_index == 0
    }

    pub fn at_end(&self) -> bool {
        self.current_index + 1 >= self.length
    }
}

/// Returns true when `speed` can be used as a multiplier
pub fn is_valid_speed(speed: f64) -> bool {
    speed.is_finite() && speed > 0.0
}

pub struct PlaybackController<T, S: Scheduler = FrameClock> {
    sequence: StepSequence<T>,
    current_index: usize,
    is_playing: bool,
    speed: f64,
    default_speed: f64,
    base_interval: Duration,

    /// Timestamp of the last automatic advance (or the baseline tick)
    last_advance: Option<Duration>,

    /// Live loop registration while playing
    registration: Option<Registration>,
    registrations: RegistrationSource,
    scheduler: S,
    listeners: Vec<IndexListener<T>>,
}

impl<T, S: Scheduler> PlaybackController<T, S> {
    /// Create an idle controller at step 0 of `sequence`.
    pub fn new(sequence: StepSequence<T>, scheduler: S) -> Self {
        PlaybackController {
            sequence,
            current_index: 0,
            is_playing: false,
            speed: DEFAULT_SPEED,
            default_speed: DEFAULT_SPEED,
            base_interval: BASE_INTERVAL,
            last_advance: None,
            registration: None,
            registrations: RegistrationSource::default(),
            scheduler,
            listeners: Vec::new(),
        }
    }

    /// Override the dwell time per step at 1.0x
    pub fn with_base_interval(mut self, base_interval: Duration) -> Self {
        if base_interval.is_zero() {
            warn!("ignoring zero base interval");
        } else {
            self.base_interval = base_interval;
        }
        self
    }

    /// Override the speed used for every newly loaded sequence
    pub fn with_default_speed(mut self, speed: f64) -> Self {
        if is_valid_speed(speed) {
            self.default_speed = speed;
            self.speed = speed;
        } else {
            warn!(speed, "ignoring invalid default speed");
        }
        self
    }

    /// Register a listener for index changes
    pub fn subscribe(&mut self, listener: impl FnMut(usize, &Step<T>) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn state(&self) -> PlaybackState {
        PlaybackState {
            current_index: self.current_index,
            length: self.sequence.len(),
            is_playing: self.is_playing,
            speed: self.speed,
        }
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_step(&self) -> Option<&Step<T>> {
        self.sequence.get(self.current_index)
    }

    pub fn sequence(&self) -> &StepSequence<T> {
        &self.sequence
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Dwell time per step at the current speed
    pub fn step_interval(&self) -> Duration {
        Duration::try_from_secs_f64(self.base_interval.as_secs_f64() / self.speed)
            .unwrap_or(Duration::MAX)
    }

    /// Start auto-advance. Returns false if already playing or on the last step.
    pub fn play(&mut self) -> bool {
        if self.is_playing {
            return false;
        }
        if self.current_index >= self.sequence.last_index() {
            debug!(index = self.current_index, "play ignored on last step");
            return false;
        }

        let registration = self.registrations.mint();
        self.scheduler.register(registration);
        self.registration = Some(registration);
        self.is_playing = true;
        self.last_advance = None;

        debug!(
            index = self.current_index,
            speed = self.speed,
            registration = registration.id(),
            "playback started"
        );
        true
    }

    /// Stop auto-advance, leaving the index where it is
    pub fn pause(&mut self) {
        if self.is_playing {
            self.stop_loop();
            debug!(index = self.current_index, "playback paused");
        }
    }

    /// Play if idle, pause if playing
    pub fn toggle(&mut self) {
        if self.is_playing {
            self.pause();
        } else {
            self.play();
        }
    }

    /// Stop and return to step 0
    pub fn reset(&mut self) -> bool {
        self.stop_loop();
        debug!("playback reset");
        self.set_index(0)
    }

    /// Step forward, clamped at the last step
    pub fn next(&mut self) -> bool {
        let target = (self.current_index + 1).min(self.sequence.last_index());
        self.set_index(target)
    }

    /// Step back, clamped at step 0
    pub fn prev(&mut self) -> bool {
        let target = self.current_index.saturating_sub(1);
        self.set_index(target)
    }

    /// Jump to `target`, clamped into the sequence bounds
    pub fn seek(&mut self, target: i64) -> bool {
        let index = self.sequence.clamp_index(target);
        debug!(target, index, "seek");
        self.set_index(index)
    }

    /// Change the speed multiplier.
    ///
    /// Zero, negative and non-finite values are rejected and the previous
    /// speed is kept. The new speed only affects intervals computed from the
    /// next tick onwards.
    pub fn set_speed(&mut self, speed: f64) -> bool {
        if !is_valid_speed(speed) {
            warn!(speed, kept = self.speed, "rejected playback speed");
            return false;
        }
        self.speed = speed;
        debug!(speed, "playback speed set");
        true
    }

    /// Replace the active sequence, cancelling any running loop.
    ///
    /// Nothing from the previous sequence survives: the controller is idle at
    /// step 0 with the default speed, and listeners are told about step 0 of
    /// the new sequence.
    pub fn load_sequence(&mut self, sequence: StepSequence<T>) {
        self.stop_loop();
        self.sequence = sequence;
        self.current_index = 0;
        self.speed = self.default_speed;
        debug!(length = self.sequence.len(), "sequence loaded");
        self.notify();
    }

    /// Deliver one frame tick.
    ///
    /// Ticks for a registration other than the live one are dropped. Returns
    /// true when the tick advanced the index.
    pub fn on_tick(&mut self, registration: Registration, now: Duration) -> bool {
        if !self.is_playing || self.registration != Some(registration) {
            trace!(registration = registration.id(), "dropping stale tick");
            return false;
        }

        let last = self.sequence.last_index();
        if self.current_index >= last {
            // Reached by manual navigation while playing
            self.stop_loop();
            debug!(index = self.current_index, "playback finished");
            return false;
        }

        let Some(last_advance) = self.last_advance else {
            self.last_advance = Some(now);
            return false;
        };

        if now.saturating_sub(last_advance) < self.step_interval() {
            return false;
        }

        self.last_advance = Some(now);
        let index = self.current_index + 1;
        trace!(index, "auto-advance");
        self.set_index(index);

        if index >= last {
            self.stop_loop();
            debug!(index, "playback finished");
        }
        true
    }

    fn stop_loop(&mut self) {
        if let Some(registration) = self.registration.take() {
            self.scheduler.unregister(registration);
        }
        self.is_playing = false;
        self.last_advance = None;
    }

    fn set_index(&mut self, index: usize) -> bool {
        if index == self.current_index {
            return false;
        }
        self.current_index = index;
        self.notify();
        true
    }

    fn notify(&mut self) {
        if let Some(step) = self.sequence.get(self.current_index) {
            for listener in self.listeners.iter_mut() {
                listener(self.current_index, step);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn controller(len: usize) -> PlaybackController<usize> {
        let sequence = StepSequence::new((0..len).collect()).unwrap();
        PlaybackController::new(sequence, FrameClock::new())
    }

    fn tick(c: &mut PlaybackController<usize>, at: u64) -> bool {
        match c.scheduler().active() {
            Some(reg) => c.on_tick(reg, ms(at)),
            None => false,
        }
    }

    #[test]
    fn test_initial_state() {
        let c = controller(5);
        let state = c.state();
        assert_eq!(state.current_index, 0);
        assert_eq!(state.length, 5);
        assert!(!state.is_playing);
        assert_eq!(state.speed, 1.0);
        assert!(state.at_start());
        assert!(!state.at_end());
    }

    #[test]
    fn test_first_tick_only_sets_baseline() {
        let mut c = controller(4);
        assert!(c.play());
        assert!(!tick(&mut c, 50_000));
        assert_eq!(c.current_index(), 0);
        assert!(tick(&mut c, 52_000));
        assert_eq!(c.current_index(), 1);
    }

    #[test]
    fn test_one_step_per_tick_after_long_gap() {
        let mut c = controller(6);
        c.play();
        tick(&mut c, 0);
        assert!(tick(&mut c, 60_000));
        assert_eq!(c.current_index(), 1);
    }

    #[test]
    fn test_play_on_last_step_is_ignored() {
        let mut c = controller(3);
        c.seek(2);
        assert!(!c.play());
        assert!(!c.is_playing());
        assert_eq!(c.scheduler().active(), None);
    }

    #[test]
    fn test_play_twice_keeps_single_registration() {
        let mut c = controller(3);
        assert!(c.play());
        assert!(!c.play());
        assert_eq!(c.scheduler().registrations(), 1);
    }

    #[test]
    fn test_pause_unregisters_and_keeps_index() {
        let mut c = controller(5);
        c.play();
        tick(&mut c, 0);
        tick(&mut c, 2000);
        c.pause();
        assert!(!c.is_playing());
        assert_eq!(c.current_index(), 1);
        assert_eq!(c.scheduler().active(), None);
    }

    #[test]
    fn test_speed_change_applies_to_next_interval() {
        let mut c = controller(5);
        c.play();
        tick(&mut c, 0);
        assert!(!tick(&mut c, 1000));
        assert!(c.set_speed(2.0));
        // 1500ms elapsed >= 1000ms interval at 2x
        assert!(tick(&mut c, 1500));
        assert_eq!(c.current_index(), 1);
    }

    #[test]
    fn test_invalid_speed_rejected() {
        let mut c = controller(3);
        c.set_speed(0.5);
        for bad in [0.0, -1.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(!c.set_speed(bad));
            assert_eq!(c.speed(), 0.5);
        }
    }

    #[test]
    fn test_tiny_speed_does_not_overflow_interval() {
        let mut c = controller(3);
        assert!(c.set_speed(f64::MIN_POSITIVE));
        assert_eq!(c.step_interval(), Duration::MAX);
    }

    #[test]
    fn test_manual_step_to_end_stops_on_next_tick() {
        let mut c = controller(3);
        c.play();
        tick(&mut c, 0);
        c.seek(2);
        assert!(c.is_playing());
        assert!(!tick(&mut c, 10));
        assert!(!c.is_playing());
        assert_eq!(c.current_index(), 2);
    }

    #[test]
    fn test_reset_notifies_only_on_change() {
        let mut c = controller(4);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        c.subscribe(move |index, step| {
            assert_eq!(index, step.index());
            sink.borrow_mut().push(index);
        });

        assert!(!c.reset());
        c.next();
        c.next();
        assert!(c.reset());
        assert_eq!(*seen.borrow(), vec![1, 2, 0]);
    }

    #[test]
    fn test_builder_overrides() {
        let sequence = StepSequence::new(vec![0, 1, 2]).unwrap();
        let c = PlaybackController::new(sequence, FrameClock::new())
            .with_base_interval(ms(500))
            .with_default_speed(2.0);
        assert_eq!(c.speed(), 2.0);
        assert_eq!(c.step_interval(), ms(250));

        let sequence = StepSequence::new(vec![0]).unwrap();
        let c = PlaybackController::new(sequence, FrameClock::new())
            .with_base_interval(Duration::ZERO)
            .with_default_speed(-3.0);
        assert_eq!(c.speed(), DEFAULT_SPEED);
        assert_eq!(c.step_interval(), BASE_INTERVAL);
    }
}
