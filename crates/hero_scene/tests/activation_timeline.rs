//! Headless timeline tests: drive the scene with a virtual clock and check the
//! activation schedule and per-frame invariants.

use std::time::Duration;

use hero_scene::activation::ActivationScheduler;
use hero_scene::config::TimingConfig;
use hero_scene::prelude::*;

fn started_scene() -> HeroScene {
    let mut scene = HeroScene::new(&HeroConfig::default()).unwrap();
    scene.start();
    scene
}

/// Tick the scene in 500 ms frames until the virtual clock reaches `t_ms`
fn advance_to(scene: &mut HeroScene, now_ms: &mut u64, t_ms: u64) {
    while *now_ms < t_ms {
        scene.tick(0.5);
        *now_ms += 500;
    }
}

#[test]
fn test_activation_timeline() {
    let mut scene = started_scene();
    let mut now = 0;

    let expected = [
        (0, Group::Frontend, 0),
        (1500, Group::Frontend, 1),
        (3000, Group::Frontend, 2),
        (4000, Group::Backend, 2),
        (4500, Group::Backend, 0),
        (6000, Group::Backend, 1),
        (7500, Group::Backend, 2),
        (8000, Group::Frontend, 2),
        (12_000, Group::Backend, 2),
    ];

    for (t, group, index) in expected {
        advance_to(&mut scene, &mut now, t);
        let state = scene.activation();
        assert_eq!(
            (state.active_group(), state.active_index()),
            (group, index),
            "unexpected activation at t = {t} ms"
        );
    }
}

/// Group and index fires in one update
fn fire_counts(events: &[ActivationEvent]) -> (usize, usize) {
    let groups = events
        .iter()
        .filter(|e| matches!(e, ActivationEvent::GroupChanged { .. }))
        .count();
    (groups, events.len() - groups)
}

/// Run `steps` updates of 500 ms, recording fires and state after each
fn run(scheduler: &mut ActivationScheduler, steps: usize) -> (Vec<(usize, usize)>, Vec<ActivationState>) {
    (0..steps)
        .map(|_| {
            let events = scheduler.update(Duration::from_millis(500));
            (fire_counts(&events), scheduler.state())
        })
        .unzip()
}

#[test]
fn test_fire_pattern_repeats_every_12_seconds() {
    let mut scheduler = ActivationScheduler::new(&TimingConfig::default(), 3);
    scheduler.start();
    assert_eq!(scheduler.fire_cycle(), Some(Duration::from_secs(12)));

    let (first_fires, first_states) = run(&mut scheduler, 24);
    let (second_fires, second_states) = run(&mut scheduler, 24);

    assert_eq!(first_fires, second_fires);
    assert_eq!(first_fires.iter().map(|f| f.0).sum::<usize>(), 3);
    assert_eq!(first_fires.iter().map(|f| f.1).sum::<usize>(), 8);
    // Three group flips and eight index steps per cycle: the state does not repeat yet
    assert_ne!(first_states, second_states);
    assert_eq!(first_states[23], ActivationState::new(Group::Backend, 2));
}

#[test]
fn test_activation_state_repeats_every_72_seconds() {
    let mut scheduler = ActivationScheduler::new(&TimingConfig::default(), 3);
    scheduler.start();

    // lcm(2 * 4000, 3 * 1500) ms
    let (_, first) = run(&mut scheduler, 144);
    let (_, second) = run(&mut scheduler, 144);

    assert_eq!(first, second);
    assert_eq!(first[143], ActivationState::default());
    // No shorter whole-cycle period
    for cycles in 1..6 {
        assert_ne!(first[cycles * 24 - 1], ActivationState::default());
    }
}

#[test]
fn test_group_and_index_sequences() {
    let mut scene = started_scene();
    for _ in 0..120 {
        scene.tick(0.25);
    }

    let events = scene.drain_events();
    let groups: Vec<_> = events
        .iter()
        .filter_map(|e| match e {
            ActivationEvent::GroupChanged { to, .. } => Some(*to),
            ActivationEvent::IndexChanged { .. } => None,
        })
        .collect();
    let indices: Vec<_> = events
        .iter()
        .filter_map(|e| match e {
            ActivationEvent::IndexChanged { to, .. } => Some(*to),
            ActivationEvent::GroupChanged { .. } => None,
        })
        .collect();

    // 30 s of frames: 7 group fires, 20 index fires
    assert_eq!(
        groups,
        [Group::Backend, Group::Frontend].iter().copied().cycle().take(7).collect::<Vec<_>>()
    );
    assert_eq!(indices, [1, 2, 0].iter().copied().cycle().take(20).collect::<Vec<_>>());
}

#[test]
fn test_frame_invariants() {
    let mut scene = started_scene();
    let hovered = scene.layout().node_by_label("NODE").unwrap().id;
    scene.on_pointer_enter(hovered);

    let mut previous_angles = vec![0.0_f32; scene.layout().len()];
    // Irregular frame pacing, including a stall and a bogus negative delta
    let deltas = [0.016, 0.016, 0.033, 0.25, -1.0, 0.0, 0.5, 1.7, 0.016];

    for i in 0..400 {
        let frame = scene.tick(deltas[i % deltas.len()]);

        let active: Vec<_> = frame.nodes().iter().filter(|n| n.active).collect();
        assert_eq!(active.len(), 1, "frame {} has {} active nodes", frame.frame(), active.len());

        for (node, previous) in frame.nodes().iter().zip(previous_angles.iter_mut()) {
            assert!(node.angle_y >= *previous, "angle went backwards on {:?}", node.id);
            *previous = node.angle_y;

            let high = node.active || node.hovered;
            assert_eq!(node.emissive_intensity == 0.4, high);
            if !high {
                assert_eq!(node.emissive_intensity, 0.2);
            }
            if !node.active {
                assert_eq!(node.tilt_x, 0.0);
                assert_eq!(node.scale, 1.0);
            }
        }

        assert_eq!(frame.headline.title.starts_with("Frontend"), frame.active_group() == Group::Frontend);
        assert!(frame.time.delta >= 0.0);
    }
}

#[test]
fn test_stop_freezes_activation() {
    let mut scene = started_scene();
    scene.tick(5.0);
    let frozen = scene.activation();
    let _ = scene.drain_events();

    scene.stop();
    scene.stop();
    for _ in 0..40 {
        scene.tick(1.0);
    }

    assert_eq!(scene.activation(), frozen);
    assert!(scene.drain_events().is_empty());

    // Restarting resumes from the frozen state with fresh periods
    scene.start();
    scene.tick(1.5);
    assert_eq!(scene.activation().active_index(), (frozen.active_index() + 1) % 3);
    assert_eq!(scene.activation().active_group(), frozen.active_group());
}

#[test]
fn test_custom_group_size_wraps() {
    let mut config = HeroConfig::default();
    config.groups.frontend.labels = vec!["A".into(), "B".into(), "C".into(), "D".into(), "E".into()];
    config.groups.backend.labels = vec!["V".into(), "W".into(), "X".into(), "Y".into(), "Z".into()];
    config.timing.group_period_ms = 100_000;
    config.timing.index_period_ms = 1000;

    let mut scene = HeroScene::new(&config).unwrap();
    scene.start();

    let mut seen = Vec::new();
    for _ in 0..7 {
        scene.tick(1.0);
        seen.push(scene.activation().active_index());
    }
    assert_eq!(seen, vec![1, 2, 3, 4, 0, 1, 2]);
}
