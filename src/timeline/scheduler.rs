// Host scheduler seam for the auto-advance loop

/// Identifies one registration of the auto-advance loop.
///
/// Every `play()` mints a fresh registration; ticks carrying any other
/// registration are stale and get dropped by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Registration(u64);

impl Registration {
    pub fn id(self) -> u64 {
        self.0
    }
}

/// Something that delivers monotonic frame timestamps while a loop is registered.
///
/// The controller calls `register` when playback starts and `unregister` when
/// it stops (pause, auto-stop, reset, sequence switch). At most one
/// registration is live at any time.
pub trait Scheduler {
    fn register(&mut self, registration: Registration);
    fn unregister(&mut self, registration: Registration);
}

/// Scheduler that simply remembers the live registration.
///
/// The UI frame loop (or a test) asks it for the active registration and
/// forwards a tick to the controller once per frame.
#[derive(Debug, Default)]
pub struct FrameClock {
    active: Option<Registration>,
    registrations: u64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registration that should receive the next tick, if any
    pub fn active(&self) -> Option<Registration> {
        self.active
    }

    /// Total registrations ever made
    pub fn registrations(&self) -> u64 {
        self.registrations
    }
}

impl Scheduler for FrameClock {
    fn register(&mut self, registration: Registration) {
        self.active = Some(registration);
        self.registrations += 1;
    }

    fn unregister(&mut self, registration: Registration) {
        if self.active == Some(registration) {
            self.active = None;
        }
    }
}

/// Monotonic source of registrations
#[derive(Debug, Default)]
pub(crate) struct RegistrationSource {
    next: u64,
}

impl RegistrationSource {
    pub(crate) fn mint(&mut self) -> Registration {
        self.next += 1;
        Registration(self.next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_clock_tracks_single_registration() {
        let mut source = RegistrationSource::default();
        let mut clock = FrameClock::new();

        let first = source.mint();
        clock.register(first);
        assert_eq!(clock.active(), Some(first));

        clock.unregister(first);
        assert_eq!(clock.active(), None);

        let second = source.mint();
        assert_ne!(first, second);
        clock.register(second);
        // Stale unregister must not cancel the newer loop
        clock.unregister(first);
        assert_eq!(clock.active(), Some(second));
        assert_eq!(clock.registrations(), 2);
    }
}
