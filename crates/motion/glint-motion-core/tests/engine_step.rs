use glint_motion_core::{
    Command, Config, CounterSpec, Engine, Inputs, Layer, ObservationEvent, ObserverTarget,
    TargetResolver, Value,
};

fn approx(a: f32, b: f32, eps: f32) {
    assert!((a - b).abs() <= eps, "left={a} right={b} eps={eps}");
}

// A simple resolver used by tests
struct MapResolver(std::collections::HashMap<String, String>);
impl TargetResolver for MapResolver {
    fn resolve(&mut self, path: &str) -> Option<String> {
        self.0.get(path).cloned()
    }
}

/// it should resolve handles via prebind and fall back to canonical paths
#[test]
fn prebind_and_fallback() {
    let mut engine = Engine::new(Config::default());
    let bound = engine.add_counter(CounterSpec::new(10.0), "stats.bound");
    let _unbound = engine.add_counter(CounterSpec::new(10.0), "stats.unbound");

    let mut map = std::collections::HashMap::new();
    map.insert("stats.bound".to_string(), "HANDLE_A".to_string());
    let mut resolver = MapResolver(map);
    engine.prebind(&mut resolver);

    let observations = [bound, _unbound]
        .iter()
        .map(|id| ObservationEvent {
            target: ObserverTarget::Counter(*id),
            entered: true,
        })
        .collect();
    let out = engine.update(
        0.0,
        Inputs {
            observations,
            ..Default::default()
        },
    );

    let keys: Vec<_> = out.changes.iter().map(|c| c.key.as_str()).collect();
    assert!(keys.contains(&"HANDLE_A"));
    assert!(keys.contains(&"stats.unbound"));
}

/// it should emit one offset per layer when the scroll position moves
#[test]
fn parallax_offsets_follow_scroll() {
    let mut engine = Engine::new(Config::default());
    let _set = engine.add_layer_set(vec![
        Layer::new(0.5, "hero.bg"),
        Layer::new(0.3, "hero.orb.left"),
        Layer::new(0.2, "hero.orb.right"),
    ]);

    let out = engine.update(
        0.016,
        Inputs {
            scroll: Some(100.0),
            ..Default::default()
        },
    );
    assert_eq!(out.changes.len(), 3);
    let offset = |key: &str| {
        out.changes
            .iter()
            .find(|c| c.key == key)
            .and_then(|c| c.value.as_float())
            .expect("offset present")
    };
    approx(offset("hero.bg"), 50.0, 1e-5);
    approx(offset("hero.orb.left"), 30.0, 1e-5);
    approx(offset("hero.orb.right"), 20.0, 1e-5);

    // Unchanged scroll emits nothing.
    let out = engine.update(
        0.016,
        Inputs {
            scroll: Some(100.0),
            ..Default::default()
        },
    );
    assert!(out.changes.is_empty());
}

/// it should drop a removed counter and ignore observations against it
#[test]
fn removed_counter_is_inert() {
    let mut engine = Engine::new(Config::default());
    let id = engine.add_counter(CounterSpec::new(42.0), "stats.gone");
    engine.update(
        0.0,
        Inputs {
            commands: vec![Command::RemoveCounter { id }],
            observations: vec![ObservationEvent {
                target: ObserverTarget::Counter(id),
                entered: true,
            }],
            ..Default::default()
        },
    );
    assert_eq!(engine.counter_value(id), None);
    let out = engine.update(1.0, Inputs::default());
    assert!(out.is_empty());
}

/// it should produce identical outputs for the same dt/input sequence
#[test]
fn determinism_same_sequence_same_outputs() {
    let build = || {
        let mut engine = Engine::new(Config::default());
        let counter = engine.add_counter(CounterSpec::new(300.0).with_suffix("+"), "stats.c");
        let reveal = engine.add_reveal_set(Default::default(), vec!["r.0".into(), "r.1".into()]);
        (engine, counter, reveal)
    };
    let (mut e1, c1, r1) = build();
    let (mut e2, c2, r2) = build();
    assert_eq!(c1, c2);
    assert_eq!(r1, r2);

    let script = |counter, set| {
        vec![
            Inputs {
                observations: vec![
                    ObservationEvent {
                        target: ObserverTarget::Counter(counter),
                        entered: true,
                    },
                    ObservationEvent {
                        target: ObserverTarget::RevealElement { set, index: 1 },
                        entered: true,
                    },
                ],
                scroll: Some(42.0),
                ..Default::default()
            },
            Inputs::default(),
            Inputs::default(),
        ]
    };

    let seq = [0.016, 0.016, 0.3];
    for ((dt, i1), i2) in seq.iter().zip(script(c1, r1)).zip(script(c2, r2)) {
        let o1 = serde_json::to_string(e1.update(*dt, i1)).unwrap();
        let o2 = serde_json::to_string(e2.update(*dt, i2)).unwrap();
        assert_eq!(o1, o2);
    }
}

/// it should emit text changes while a counter run is in flight
#[test]
fn counter_changes_are_text_values() {
    let mut engine = Engine::new(Config::default());
    let id = engine.add_counter(CounterSpec::new(300.0).with_suffix("+"), "stats.live");
    engine.update(
        0.0,
        Inputs {
            observations: vec![ObservationEvent {
                target: ObserverTarget::Counter(id),
                entered: true,
            }],
            ..Default::default()
        },
    );
    let out = engine.update(0.4, Inputs::default());
    let change = out
        .changes
        .iter()
        .find(|c| c.key == "stats.live")
        .expect("mid-run change");
    match &change.value {
        Value::Text(s) => assert!(s.ends_with('+'), "render keeps the suffix: {s}"),
        other => panic!("expected text change, got {other:?}"),
    }
}
