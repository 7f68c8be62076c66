// End-to-end spawn and tick behaviour of the simulation context.

mod common;

use common::{CountingAudio, RecordingSurface};
use fireworks_core::*;
use glam::DVec2;

const NARROW: f64 = 400.0;
const WIDE: f64 = 1280.0;

fn sim(css_width: f64, tier: QualityTier) -> Simulation {
    let host = HostProfile::default().with_initial_tier(tier);
    let viewport = Viewport::new(css_width, 800.0, host.pixel_density);
    Simulation::new(host, viewport, 0.0, 42)
}

fn surface() -> RecordingSurface {
    RecordingSurface::new(WIDE, 800.0)
}

#[test]
fn narrow_high_tier_spawn_makes_24_particles_one_label_and_a_chime() {
    let mut s = sim(NARROW, QualityTier::High);
    let mut audio = CountingAudio::default();
    let outcome = s.spawn(DVec2::new(100.0, 100.0), 0.0, &mut audio);
    assert_eq!(
        outcome,
        SpawnOutcome::Burst {
            particles: 24,
            label: true,
            chimed: true
        }
    );
    assert_eq!(s.particles().len(), 24);
    assert_eq!(s.labels().len(), 1);
    assert_eq!(audio.chimes.len(), 1);
}

#[test]
fn narrow_low_tier_spawn_is_silent_and_labelless() {
    let mut s = sim(NARROW, QualityTier::Low);
    let mut audio = CountingAudio::default();
    s.spawn(DVec2::new(100.0, 100.0), 0.0, &mut audio);
    assert_eq!(s.particles().len(), 5);
    assert!(s.labels().is_empty());
    assert!(audio.chimes.is_empty());
}

#[test]
fn batch_sizes_scale_with_tier_and_width() {
    let expect = [
        (QualityTier::High, WIDE, 50),
        (QualityTier::Medium, WIDE, 20),
        (QualityTier::Low, WIDE, 10),
        (QualityTier::Medium, NARROW, 10),
    ];
    for (tier, width, count) in expect {
        let mut s = sim(width, tier);
        s.spawn(DVec2::ZERO, 0.0, &mut Silent);
        assert_eq!(s.particles().len(), count, "{tier} at {width}");
    }
}

#[test]
fn spawn_within_cooldown_is_a_no_op() {
    let mut s = sim(NARROW, QualityTier::High);
    let mut audio = CountingAudio::default();
    s.spawn(DVec2::new(10.0, 10.0), 0.0, &mut audio);
    let second = s.spawn(DVec2::new(300.0, 50.0), 200.0, &mut audio);
    assert_eq!(second, SpawnOutcome::Suppressed);
    assert_eq!(s.particles().len(), 24);
    assert_eq!(s.labels().len(), 1);
    assert_eq!(audio.chimes.len(), 1);
}

#[test]
fn spawn_after_cooldown_succeeds() {
    let mut s = sim(NARROW, QualityTier::High);
    let mut audio = CountingAudio::default();
    s.spawn(DVec2::new(10.0, 10.0), 0.0, &mut audio);
    let second = s.spawn(DVec2::new(10.0, 10.0), 241.0, &mut audio);
    assert!(matches!(second, SpawnOutcome::Burst { .. }));
    assert_eq!(s.particles().len(), 48);
    assert_eq!(audio.chimes.len(), 2);
}

#[test]
fn suppressed_spawn_does_not_restart_cooldown() {
    let mut s = sim(NARROW, QualityTier::High);
    s.spawn(DVec2::ZERO, 0.0, &mut Silent);
    s.spawn(DVec2::ZERO, 200.0, &mut Silent);
    let third = s.spawn(DVec2::ZERO, 250.0, &mut Silent);
    assert!(matches!(third, SpawnOutcome::Burst { .. }));
}

#[test]
fn reduced_motion_only_requests_an_overlay() {
    for tier in QualityTier::ALL {
        let host = HostProfile::detect("", 1.0, true).with_initial_tier(tier);
        let viewport = Viewport::new(WIDE, 800.0, 1.0);
        let mut s = Simulation::new(host, viewport, 0.0, 1);
        let mut audio = CountingAudio::default();
        let at = DVec2::new(42.0, 24.0);
        assert_eq!(s.spawn(at, 0.0, &mut audio), SpawnOutcome::Overlay { at });
        assert_eq!(s.spawn(at, 1000.0, &mut audio), SpawnOutcome::Overlay { at });
        assert!(s.particles().is_empty());
        assert!(s.labels().is_empty());
        assert!(audio.chimes.is_empty());
    }
}

#[test]
fn reduced_motion_overlays_share_the_cooldown() {
    let host = HostProfile::detect("", 1.0, true);
    let viewport = Viewport::new(WIDE, 800.0, 1.0);
    let mut s = Simulation::new(host, viewport, 0.0, 5);
    let overlays = (0..10)
        .filter(|t| {
            matches!(
                s.spawn(DVec2::new(5.0, 5.0), *t as f64, &mut Silent),
                SpawnOutcome::Overlay { .. }
            )
        })
        .count();
    assert_eq!(overlays, 1);
    assert!(matches!(
        s.spawn(DVec2::new(5.0, 5.0), 240.0, &mut Silent),
        SpawnOutcome::Overlay { .. }
    ));
    assert!(s.particles().is_empty());
}

#[test]
fn label_count_respects_tier_cap() {
    let mut s = sim(NARROW, QualityTier::High);
    for i in 0..20 {
        s.spawn(DVec2::ZERO, i as f64 * 300.0, &mut Silent);
    }
    assert_eq!(s.labels().len(), 12);
}

#[test]
fn chime_pans_with_spawn_position() {
    let mut s = sim(1000.0, QualityTier::High);
    let mut audio = CountingAudio::default();
    s.spawn(DVec2::new(0.0, 0.0), 0.0, &mut audio);
    s.spawn(DVec2::new(1000.0, 0.0), 500.0, &mut audio);
    s.spawn(DVec2::new(500.0, 0.0), 1000.0, &mut audio);
    let pans: Vec<f64> = audio.chimes.iter().map(|c| c.pan).collect();
    assert!((pans[0] + 0.4).abs() < 1e-9);
    assert!((pans[1] - 0.4).abs() < 1e-9);
    assert!(pans[2].abs() < 1e-9);
}

#[test]
fn tick_fades_then_draws_survivors() {
    let mut s = sim(WIDE, QualityTier::Medium);
    let mut surf = surface();
    s.start(0.0);
    s.spawn(DVec2::new(400.0, 400.0), 0.0, &mut Silent);
    let report = s.tick(16.0, &mut surf);

    assert_eq!(surf.ops[0], common::Op::Composite(Composite::DestinationOut));
    assert_eq!(report.dt_ms, 16.0);
    assert_eq!(report.particles_drawn, 20);
    assert_eq!(report.labels_drawn, 1);
    assert_eq!(surf.circles(), 20);
    assert_eq!(surf.texts(), 1);
}

#[test]
fn dead_particles_leave_on_the_tick_they_die() {
    let mut s = sim(WIDE, QualityTier::Low);
    let mut surf = surface();
    s.start(0.0);
    s.spawn(DVec2::new(400.0, 400.0), 0.0, &mut Silent);

    let mut now = 0.0;
    for _ in 0..2000 {
        now += 16.0;
        let mut expected_alive = 0;
        for p in s.particles() {
            let mut probe = p.clone();
            if probe.update(16.0) {
                expected_alive += 1;
            }
        }
        surf.clear();
        let report = s.tick(now, &mut surf);
        assert_eq!(report.particles_drawn, expected_alive);
        assert_eq!(s.particles().len(), expected_alive);
        assert_eq!(surf.circles(), expected_alive);
        assert!(s.particles().iter().all(|p| p.alpha > 0.0));
        if s.particles().is_empty() {
            return;
        }
    }
    panic!("particles never expired");
}

#[test]
fn population_never_exceeds_ceiling_after_a_tick() {
    let mut s = sim(WIDE, QualityTier::High);
    let mut surf = surface();
    s.start(0.0);
    let mut now = 0.0;
    for _ in 0..11 {
        now += 240.0;
        s.spawn(DVec2::new(640.0, 400.0), now, &mut Silent);
    }
    assert_eq!(s.particles().len(), 550);

    // Park and resume so the next tick measures a one-millisecond delta.
    s.set_hidden(true, now);
    assert_eq!(s.set_hidden(false, now), LoopCommand::Schedule);
    let report = s.tick(now + 1.0, &mut surf);
    assert_eq!(report.evicted, 50);
    assert_eq!(s.particles().len(), 500);

    // Pressure for many frames: the ceiling tracks the tier as it degrades.
    for _ in 0..200 {
        now += 30.0;
        s.spawn(DVec2::new(640.0, 400.0), now, &mut Silent);
        s.tick(now, &mut surf);
        let ceiling = s.tier().profile().population_ceiling;
        assert!(s.particles().len() <= ceiling);
    }
    assert_eq!(s.tier(), QualityTier::Low);
}

#[test]
fn tier_change_leaves_live_particles_untouched() {
    let mut s = sim(WIDE, QualityTier::High);
    let mut surf = surface();
    s.start(0.0);
    s.spawn(DVec2::new(640.0, 400.0), 0.0, &mut Silent);
    let frictions: Vec<f64> = s.particles().iter().map(|p| p.friction).collect();

    let mut now = 0.0;
    let mut changed = None;
    for _ in 0..4 {
        now += 23.0;
        changed = s.tick(now, &mut surf).tier_change.or(changed);
    }
    assert_eq!(changed.map(|c| c.to), Some(QualityTier::Medium));
    assert!(s.particles().iter().all(|p| p.friction == frictions[0]));

    s.spawn(DVec2::new(640.0, 400.0), 1000.0, &mut Silent);
    let medium = QualityTier::Medium.profile().friction;
    assert!(s.particles().iter().any(|p| p.friction == medium));
}

#[test]
fn resuming_from_hidden_resets_the_frame_clock() {
    let mut s = sim(WIDE, QualityTier::High);
    let mut surf = surface();
    assert_eq!(s.start(0.0), LoopCommand::Schedule);
    let (_, cmd) = s.frame(16.0, &mut surf, true);
    assert_eq!(cmd, LoopCommand::Schedule);

    assert_eq!(s.set_hidden(true, 20.0), LoopCommand::Cancel);
    assert_eq!(s.loop_state(), LoopState::Idle);
    assert_eq!(s.set_hidden(false, 60_000.0), LoopCommand::Schedule);
    assert_eq!(s.loop_state(), LoopState::Running);

    let (report, _) = s.frame(60_016.0, &mut surf, true);
    assert_eq!(report.dt_ms, 16.0);
}

#[test]
fn hidden_at_end_of_tick_parks_the_loop() {
    let mut s = sim(WIDE, QualityTier::High);
    let mut surf = surface();
    s.start(0.0);
    let (_, cmd) = s.frame(16.0, &mut surf, false);
    assert_eq!(cmd, LoopCommand::Nothing);
    assert_eq!(s.loop_state(), LoopState::Idle);
    assert_eq!(s.set_hidden(false, 500.0), LoopCommand::Schedule);
    assert_eq!(s.last_frame_ms(), 500.0);
}

#[test]
fn repeated_visible_signal_does_not_double_schedule() {
    let mut s = sim(WIDE, QualityTier::High);
    assert_eq!(s.start(0.0), LoopCommand::Schedule);
    assert_eq!(s.set_hidden(false, 10.0), LoopCommand::Nothing);
    assert_eq!(s.last_frame_ms(), 0.0);
}
