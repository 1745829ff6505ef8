//! Integration tests for the focus timer state machine.

use focusboard_core::timer::{RecordingRenderer, BREAK_END_TONE, WORK_END_TONE};
use focusboard_core::{AudioRenderer, Event, Mode, Preset, TimerEngine, TimerSettings};
use proptest::prelude::*;

/// Tick `n` times, rendering tones like a host would. Returns the events.
fn run_ticks(engine: &mut TimerEngine, n: u64, renderer: &dyn AudioRenderer) -> Vec<Event> {
    let mut events = Vec::new();
    for _ in 0..n {
        if let Some(event) = engine.tick() {
            if let Some(tone) = event.tone() {
                renderer.play(tone);
            }
            events.push(event);
        }
    }
    events
}

fn transitions(events: &[Event]) -> Vec<(Mode, Mode)> {
    events
        .iter()
        .filter_map(|e| match e {
            Event::AlertFired { from, to, .. } => Some((*from, *to)),
            _ => None,
        })
        .collect()
}

#[test]
fn classic_pomodoro_cycle() {
    let mut engine = TimerEngine::default();
    engine
        .apply_settings(TimerSettings::from_preset(Preset::Short))
        .unwrap();
    let renderer = RecordingRenderer::new();
    engine.start();

    let events = run_ticks(&mut engine, 1500, &renderer);
    assert_eq!(transitions(&events), vec![(Mode::Work, Mode::Break)]);
    assert_eq!(engine.mode(), Mode::Break);
    assert_eq!(engine.remaining_secs(), 300);
    assert_eq!(renderer.played(), vec![WORK_END_TONE]);

    let events = run_ticks(&mut engine, 300, &renderer);
    assert_eq!(transitions(&events), vec![(Mode::Break, Mode::Work)]);
    assert_eq!(engine.mode(), Mode::Work);
    assert_eq!(engine.remaining_secs(), 1500);
    assert!(engine.is_running());
    assert_eq!(renderer.played(), vec![WORK_END_TONE, BREAK_END_TONE]);
}

#[test]
fn paused_timer_ignores_delivered_ticks() {
    let mut engine = TimerEngine::new(TimerSettings::custom(10, 5));
    engine.start();
    run_ticks(&mut engine, 4, &focusboard_core::timer::Silent);
    engine.pause();
    let events = run_ticks(&mut engine, 100, &focusboard_core::timer::Silent);
    assert!(events.is_empty());
    assert_eq!(engine.remaining_secs(), 6);
    assert_eq!(engine.mode(), Mode::Work);
}

#[test]
fn muted_host_hears_nothing_but_modes_still_flip() {
    let mut engine = TimerEngine::new(TimerSettings::custom(2, 2));
    engine.set_sound_enabled(false);
    let renderer = RecordingRenderer::new();
    engine.start();
    let events = run_ticks(&mut engine, 4, &renderer);
    assert_eq!(transitions(&events).len(), 2);
    assert!(renderer.played().is_empty());
}

#[test]
fn rejected_settings_leave_engine_untouched() {
    let mut engine = TimerEngine::new(TimerSettings::custom(10, 5));
    engine.start();
    engine.tick();
    let before = engine.clone();
    assert!(engine.apply_settings(TimerSettings::custom(0, 0)).is_err());
    assert_eq!(engine, before);
}

proptest! {
    #[test]
    fn apply_settings_starts_fresh(w in 1u64..100_000, b in 1u64..100_000) {
        let mut engine = TimerEngine::default();
        engine.start();
        engine.tick();
        engine.apply_settings(TimerSettings::custom(w, b)).unwrap();
        prop_assert_eq!(engine.progress_fraction(), 0.0);
        prop_assert_eq!(engine.remaining_secs(), w);
        prop_assert_eq!(engine.mode(), Mode::Work);
        prop_assert!(!engine.is_running());
    }

    #[test]
    fn ticking_follows_the_cycle(w in 1u64..40, b in 1u64..40, n in 0u64..200) {
        let mut engine = TimerEngine::new(TimerSettings::custom(w, b));
        engine.start();
        let events = run_ticks(&mut engine, n, &focusboard_core::timer::Silent);

        let cycle = w + b;
        let offset = n % cycle;
        let expected_alerts = (n / cycle) * 2 + u64::from(offset >= w);
        prop_assert_eq!(transitions(&events).len() as u64, expected_alerts);

        if n < w {
            prop_assert_eq!(engine.remaining_secs(), w - n);
            prop_assert_eq!(engine.mode(), Mode::Work);
        } else {
            prop_assert!(!events.is_empty());
        }

        if offset < w {
            prop_assert_eq!(engine.mode(), Mode::Work);
            prop_assert_eq!(engine.remaining_secs(), w - offset);
        } else {
            prop_assert_eq!(engine.mode(), Mode::Break);
            prop_assert_eq!(engine.remaining_secs(), b - (offset - w));
        }
        let progress = engine.progress_fraction();
        prop_assert!((0.0..=1.0).contains(&progress));
    }

    #[test]
    fn start_and_pause_are_idempotent(w in 1u64..50, b in 1u64..50, n in 0u64..120) {
        let mut base = TimerEngine::new(TimerSettings::custom(w, b));
        base.start();
        run_ticks(&mut base, n, &focusboard_core::timer::Silent);

        let mut once = base.clone();
        once.start();
        let mut twice = base.clone();
        twice.start();
        twice.start();
        prop_assert_eq!(&once, &twice);

        let mut once = base.clone();
        once.pause();
        let mut twice = base.clone();
        twice.pause();
        twice.pause();
        prop_assert_eq!(&once, &twice);
    }

    #[test]
    fn reset_is_idempotent(w in 1u64..50, b in 1u64..50, n in 0u64..120, run in any::<bool>()) {
        let mut engine = TimerEngine::new(TimerSettings::custom(w, b));
        engine.start();
        run_ticks(&mut engine, n, &focusboard_core::timer::Silent);
        if !run {
            engine.pause();
        }
        engine.reset();
        let after_one = engine.clone();
        engine.reset();
        prop_assert_eq!(&engine, &after_one);
        prop_assert_eq!(engine.mode(), Mode::Work);
        prop_assert!(!engine.is_running());
        prop_assert_eq!(engine.remaining_secs(), w);
    }
}
