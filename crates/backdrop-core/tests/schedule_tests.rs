use backdrop_core::*;
use std::time::Duration;

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

#[test]
fn throttle_drops_events_inside_window() {
    let mut t = Throttle::new(ms(16));
    assert!(t.admit(ms(0)));
    assert!(!t.admit(ms(5)));
    assert!(!t.admit(ms(15)));
    assert!(t.admit(ms(16)));
    assert!(!t.admit(ms(20)));
    t.reset();
    assert!(t.admit(ms(21)));
}

#[test]
fn timer_fires_once_per_period() {
    let mut timer = RepeatingTimer::new(ms(15_000), ms(0));
    assert!(!timer.poll(ms(14_999)));
    assert!(timer.poll(ms(15_000)));
    assert!(!timer.poll(ms(15_100)));
    assert!(timer.poll(ms(30_000)));
}

#[test]
fn timer_coalesces_missed_periods() {
    let mut timer = RepeatingTimer::new(ms(15_000), ms(0));
    assert!(timer.poll(ms(15_000)));
    // three periods slept through: one firing, then back on the grid
    assert!(timer.poll(ms(75_000)));
    assert!(!timer.poll(ms(75_500)));
    assert!(!timer.poll(ms(89_999)));
    assert!(timer.poll(ms(90_000)));
}

#[test]
fn timer_restart_pushes_deadline() {
    let mut timer = RepeatingTimer::new(ms(1_000), ms(0));
    timer.restart(ms(900));
    assert!(!timer.poll(ms(1_000)));
    assert!(timer.poll(ms(1_900)));
}

#[test]
fn zero_period_is_clamped() {
    let timer = RepeatingTimer::new(Duration::ZERO, ms(0));
    assert_eq!(timer.period(), ms(1));
}

#[test]
fn manual_clock_clones_share_time() {
    let clock = ManualClock::default();
    let other = clock.clone();
    clock.advance(ms(250));
    assert_eq!(other.now(), ms(250));
    other.set(ms(10));
    assert_eq!(clock.now(), ms(10));
}

#[test]
fn season_rotation_skips_nothing_after_long_sleep() {
    let mut rotation = SeasonRotation::new(Season::Autumn, ms(15_000), ms(0));
    assert_eq!(rotation.poll(ms(300_000)), Some(Season::Winter));
    assert_eq!(rotation.poll(ms(300_001)), None);
}
