// Host-side tests for the frame-polled timers.

use folio_core::timing::{Clock, Debounce, FrameLimiter, ManualClock, Throttle};

#[test]
fn manual_clock_advances_and_sets() {
    let clock = ManualClock::new(10.0);
    assert_eq!(clock.now_ms(), 10.0);
    clock.advance(5.5);
    assert_eq!(clock.now_ms(), 15.5);
    clock.set(100.0);
    assert_eq!(clock.now_ms(), 100.0);
}

#[test]
fn debounce_fires_once_after_quiet_window() {
    let clock = ManualClock::new(0.0);
    let mut d = Debounce::new(250.0);
    assert!(!d.poll(clock.now_ms()));

    d.trigger(clock.now_ms());
    clock.advance(100.0);
    d.trigger(clock.now_ms());
    clock.advance(200.0);
    assert!(!d.poll(clock.now_ms()), "retrigger restarts the window");

    clock.advance(50.0);
    assert!(d.poll(clock.now_ms()));
    assert!(!d.poll(clock.now_ms()));
    assert!(!d.is_pending());
}

#[test]
fn debounce_cancel_drops_pending_call() {
    let mut d = Debounce::new(100.0);
    d.trigger(0.0);
    assert!(d.is_pending());
    d.cancel();
    assert!(!d.poll(1000.0));
}

#[test]
fn throttle_is_leading_edge() {
    let mut t = Throttle::new(200.0);
    assert!(t.try_fire(0.0));
    assert!(!t.try_fire(50.0));
    assert!(!t.try_fire(199.0));
    assert!(t.try_fire(200.0));
    assert!(!t.try_fire(250.0));
}

#[test]
fn frame_limiter_caps_rate_without_drift() {
    let mut limiter = FrameLimiter::new(30.0);
    let mut fired = 0;
    // One simulated second of 60 Hz frames.
    for frame in 1..=60 {
        if limiter.ready(frame as f64 * 1000.0 / 60.0) {
            fired += 1;
        }
    }
    assert!((28..=30).contains(&fired), "fired {fired} times");
}

#[test]
fn frame_limiter_reset_allows_immediate_frame() {
    let mut limiter = FrameLimiter::new(30.0);
    assert!(limiter.ready(1000.0));
    assert!(!limiter.ready(1010.0));
    limiter.reset();
    assert!(limiter.ready(1020.0));
}
