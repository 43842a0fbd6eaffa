use glint_motion_core::{
    Config, CounterSpec, Inputs as MotionInputs, ObservationEvent, ObserverTarget, Theme,
};
use glint_page_core::{ChatLauncher, PageEngine, PageEvent, PageInputs, UiEvent};

struct Recorder {
    shows: u32,
}

impl ChatLauncher for Recorder {
    fn show_floating_window(&mut self) {
        self.shows += 1;
    }
}

/// it should carry motion outputs through the page frame
#[test]
fn frame_includes_motion_changes() {
    let mut page = PageEngine::new(Config::default());
    let id = page
        .motion
        .add_counter(CounterSpec::new(25.0).with_suffix("+"), "about.stats.years");

    let inputs = PageInputs {
        motion: MotionInputs {
            observations: vec![ObservationEvent {
                target: ObserverTarget::Counter(id),
                entered: true,
            }],
            ..Default::default()
        },
        ..Default::default()
    };
    let frame = page.step(0.0, inputs, None);
    assert_eq!(frame.epoch, 1);
    assert!(frame
        .motion
        .changes
        .iter()
        .any(|c| c.key == "about.stats.years"));

    for _ in 0..60 {
        page.step(0.016, PageInputs::default(), None);
    }
    assert_eq!(page.motion.counter_render(id).as_deref(), Some("25+"));
}

/// it should report chat availability through events
#[test]
fn chat_events_reflect_launcher_presence() {
    let mut page = PageEngine::new(Config::default());

    let frame = page.step(
        0.016,
        PageInputs {
            ui: vec![UiEvent::OpenChat],
            ..Default::default()
        },
        None,
    );
    assert!(frame.events.contains(&PageEvent::ChatUnavailable));

    let mut rec = Recorder { shows: 0 };
    let frame = page.step(
        0.016,
        PageInputs {
            ui: vec![UiEvent::OpenChat],
            ..Default::default()
        },
        Some(&mut rec),
    );
    assert!(frame.events.contains(&PageEvent::ChatOpened));
    assert_eq!(rec.shows, 1);
}

/// it should toggle cosmetic selectors without side effects
#[test]
fn theme_and_dark_mode_are_cosmetic() {
    let mut page = PageEngine::new(Config::default());
    assert_eq!(page.theme(), Theme::Blue);
    assert!(page.dark_mode());

    let frame = page.step(
        0.016,
        PageInputs {
            ui: vec![
                UiEvent::SetTheme { theme: Theme::Cyan },
                UiEvent::SetDarkMode { enabled: false },
            ],
            ..Default::default()
        },
        None,
    );
    assert_eq!(page.theme(), Theme::Cyan);
    assert!(!page.dark_mode());
    assert!(frame
        .events
        .contains(&PageEvent::ThemeChanged { theme: Theme::Cyan }));
    assert!(frame
        .events
        .contains(&PageEvent::DarkModeChanged { enabled: false }));

    // Setting the same values again emits nothing.
    let frame = page.step(
        0.016,
        PageInputs {
            ui: vec![
                UiEvent::SetTheme { theme: Theme::Cyan },
                UiEvent::SetDarkMode { enabled: false },
            ],
            ..Default::default()
        },
        None,
    );
    assert!(frame.events.is_empty());
}

/// it should advance the epoch every step
#[test]
fn epoch_is_monotonic() {
    let mut page = PageEngine::new(Config::default());
    let a = page.step(0.016, PageInputs::default(), None).epoch;
    let b = page.step(0.016, PageInputs::default(), None).epoch;
    let c = page.step(0.016, PageInputs::default(), None).epoch;
    assert_eq!((a, b, c), (1, 2, 3));
}
