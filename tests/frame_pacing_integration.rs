//! Frame pacing integration tests for the fixed 60 fps loop.

use walkcycle::resources::clock::{Clock, ManualClock, SystemClock};
use walkcycle::resources::framepacer::FramePacer;

const FRAMES: u64 = 30;

fn run_loop<C: Clock>(clock: &mut C, pacer: &FramePacer, mut work: impl FnMut(&mut C, u64)) -> Vec<u64> {
    let mut starts = Vec::new();
    for frame in 0..FRAMES {
        let frame_start = clock.ticks_ms();
        starts.push(frame_start);
        work(clock, frame);
        pacer.pace(clock, frame_start);
    }
    starts.push(clock.ticks_ms());
    starts
}

#[test]
fn real_clock_keeps_sixteen_ms_frames() {
    let mut clock = SystemClock::new();
    let pacer = FramePacer::new(60);
    let starts = run_loop(&mut clock, &pacer, |_, _| {});

    for pair in starts.windows(2) {
        assert!(pair[1] - pair[0] >= 16, "frame shorter than budget: {:?}", pair);
    }
    let mean = (starts[starts.len() - 1] - starts[0]) as f64 / FRAMES as f64;
    // 16 to 17 ms when idle; sleep overshoot on a busy machine can add more.
    assert!((16.0..=18.0).contains(&mean), "mean frame period {} ms", mean);
}

#[test]
fn manual_clock_frames_are_exactly_the_budget() {
    let mut clock = ManualClock::new(0);
    let pacer = FramePacer::new(60);
    let starts = run_loop(&mut clock, &pacer, |clock, frame| clock.advance(frame % 10));

    assert_eq!(starts.len() as u64, FRAMES + 1);
    assert!(starts.windows(2).all(|p| p[1] - p[0] == 16));
    assert_eq!(clock.ticks_ms(), FRAMES * 16);
}

#[test]
fn overrunning_frames_are_not_paced() {
    let mut clock = ManualClock::new(0);
    let pacer = FramePacer::new(60);
    let starts = run_loop(&mut clock, &pacer, |clock, frame| {
        if frame % 2 == 0 {
            clock.advance(25);
        }
    });

    for (frame, pair) in starts.windows(2).enumerate() {
        let expected = if frame % 2 == 0 { 25 } else { 16 };
        assert_eq!(pair[1] - pair[0], expected, "frame {}", frame);
    }
}

#[test]
fn other_rates_use_truncated_budget() {
    let mut clock = ManualClock::new(7);
    let pacer = FramePacer::new(30);
    let starts = run_loop(&mut clock, &pacer, |_, _| {});
    assert_eq!(pacer.frame_delay_ms(), 33);
    assert_eq!(starts[FRAMES as usize] - starts[0], FRAMES * 33);
}
