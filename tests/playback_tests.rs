// Integration tests for timeline playback

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use algotty::timeline::{FrameClock, PlaybackController, StepSequence};

const FRAME: Duration = Duration::from_millis(16);

fn sequence(len: usize) -> StepSequence<usize> {
    StepSequence::new((0..len).collect()).expect("non-empty sequence")
}

/// Controller over `len` steps plus the log of every index it announced
fn controller(len: usize) -> (PlaybackController<usize>, Rc<RefCell<Vec<usize>>>) {
    let mut controller = PlaybackController::new(sequence(len), FrameClock::new());
    let seen = Rc::new(RefCell::new(Vec::new()));
    let log = Rc::clone(&seen);
    controller.subscribe(move |index, step| {
        assert_eq!(index, step.index());
        log.borrow_mut().push(index);
    });
    (controller, seen)
}

fn tick(controller: &mut PlaybackController<usize>, now: Duration) -> bool {
    match controller.scheduler().active() {
        Some(registration) => controller.on_tick(registration, now),
        None => false,
    }
}

/// Tick every frame until playback stops, returning when it stopped
fn play_to_end(controller: &mut PlaybackController<usize>) -> Duration {
    let mut now = Duration::ZERO;
    while controller.is_playing() {
        tick(controller, now);
        now += FRAME;
        assert!(now < Duration::from_secs(3600), "playback never finished");
    }
    now
}

#[test]
fn test_eight_step_walkthrough() {
    let (mut c, seen) = controller(8);
    assert!(c.play());

    for k in 0..8u64 {
        tick(&mut c, Duration::from_millis(k * 2001));
    }

    assert_eq!(c.current_index(), 7);
    assert!(!c.is_playing());
    assert_eq!(*seen.borrow(), vec![1, 2, 3, 4, 5, 6, 7]);
    assert!(c.scheduler().active().is_none());
}

#[test]
fn test_seek_clamps_out_of_range_targets() {
    let (mut c, seen) = controller(8);
    assert!(c.seek(999));
    assert_eq!(c.current_index(), 7);
    assert!(c.seek(-5));
    assert_eq!(c.current_index(), 0);
    assert_eq!(*seen.borrow(), vec![7, 0]);
}

#[test]
fn test_index_stays_in_bounds_for_any_command() {
    let targets = [
        i64::MIN,
        -1_000_000,
        -1,
        0,
        3,
        7,
        8,
        1_000_000,
        i64::MAX,
    ];
    for len in [1usize, 2, 8] {
        let (mut c, _) = controller(len);
        for &target in &targets {
            c.seek(target);
            assert!(c.current_index() < len);
            c.next();
            assert!(c.current_index() < len);
            c.prev();
            c.prev();
            assert!(c.current_index() < len);
        }
    }
}

#[test]
fn test_clamped_moves_do_not_renotify() {
    let (mut c, seen) = controller(3);
    assert!(!c.prev());
    assert!(!c.seek(-10));
    assert!(!c.reset());
    assert!(seen.borrow().is_empty());

    c.seek(2);
    assert!(!c.next());
    assert!(!c.next());
    assert!(!c.seek(50));
    assert_eq!(*seen.borrow(), vec![2]);
}

#[test]
fn test_playback_stops_on_last_step() {
    for len in [1usize, 2, 5, 13] {
        let (mut c, _) = controller(len);
        if len == 1 {
            assert!(!c.play());
            continue;
        }
        assert!(c.play());
        play_to_end(&mut c);
        assert_eq!(c.current_index(), len - 1);
        assert!(!c.is_playing());

        // Nothing moves once stopped
        assert!(!tick(&mut c, Duration::from_secs(1000)));
        assert_eq!(c.current_index(), len - 1);
    }
}

#[test]
fn test_speed_scales_time_not_order() {
    let (mut slow, slow_seen) = controller(6);
    slow.play();
    let slow_elapsed = play_to_end(&mut slow);

    let (mut fast, fast_seen) = controller(6);
    assert!(fast.set_speed(2.0));
    fast.play();
    let fast_elapsed = play_to_end(&mut fast);

    assert_eq!(*slow_seen.borrow(), *fast_seen.borrow());
    assert_eq!(*fast_seen.borrow(), vec![1, 2, 3, 4, 5]);

    // Five intervals, each late by at most one frame
    let slop = FRAME * 6;
    assert!(fast_elapsed <= slow_elapsed / 2 + slop);
    assert!(fast_elapsed + slop >= slow_elapsed / 2);
}

#[test]
fn test_manual_next_keeps_auto_advance_on_its_interval() {
    let (mut c, seen) = controller(10);
    c.play();
    tick(&mut c, Duration::ZERO);
    tick(&mut c, Duration::from_millis(1000));
    assert!(c.next());
    assert_eq!(c.current_index(), 1);

    // Neither earlier nor later than one interval after the anchor at t=0
    assert!(!tick(&mut c, Duration::from_millis(1001)));
    assert!(!tick(&mut c, Duration::from_millis(1999)));
    assert_eq!(c.current_index(), 1);
    assert!(tick(&mut c, Duration::from_millis(2000)));
    assert_eq!(c.current_index(), 2);
    assert_eq!(*seen.borrow(), vec![1, 2]);
}

#[test]
fn test_sequence_switch_cancels_stale_ticks() {
    let (mut c, seen) = controller(8);
    c.play();
    let stale = c.scheduler().active().expect("loop registered");
    tick(&mut c, Duration::ZERO);

    c.load_sequence(sequence(4));
    assert!(!c.is_playing());
    assert_eq!(c.current_index(), 0);

    // A tick already in flight for the old loop must be ignored
    assert!(!c.on_tick(stale, Duration::from_secs(10)));
    assert_eq!(c.current_index(), 0);

    // Playing the new sequence registers afresh; the old token stays dead
    c.play();
    let live = c.scheduler().active().expect("loop registered");
    assert_ne!(live, stale);
    tick(&mut c, Duration::from_secs(20));
    assert!(!c.on_tick(stale, Duration::from_secs(30)));
    assert_eq!(c.current_index(), 0);
    assert!(tick(&mut c, Duration::from_secs(22)));
    assert_eq!(c.current_index(), 1);

    assert_eq!(*seen.borrow(), vec![0, 1]);
}

#[test]
fn test_speed_change_mid_playback() {
    let (mut c, _) = controller(10);
    c.play();
    tick(&mut c, Duration::ZERO);
    assert!(c.set_speed(4.0));
    assert!(tick(&mut c, Duration::from_millis(500)));
    assert_eq!(c.current_index(), 1);

    assert!(!c.set_speed(0.0));
    assert!(!c.set_speed(f64::NAN));
    assert_eq!(c.speed(), 4.0);
    assert!(c.is_playing());
}

#[test]
fn test_toggle_pause_resume() {
    let (mut c, _) = controller(5);
    c.toggle();
    assert!(c.is_playing());
    tick(&mut c, Duration::ZERO);
    tick(&mut c, Duration::from_millis(2000));
    c.toggle();
    assert!(!c.is_playing());
    assert_eq!(c.current_index(), 1);

    // Resuming waits a full interval from the first tick after play
    c.toggle();
    assert!(!tick(&mut c, Duration::from_millis(9000)));
    assert!(!tick(&mut c, Duration::from_millis(10_999)));
    assert!(tick(&mut c, Duration::from_millis(11_000)));
    assert_eq!(c.current_index(), 2);
}
