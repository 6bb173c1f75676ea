use backdrop_core::*;
use std::time::Duration;

fn seasonal() -> (SeasonalBackdrop<ManualClock>, ManualClock) {
    let clock = ManualClock::default();
    let config = SceneConfig::default().with_viewport(ViewportState::new(1024.0, 768.0));
    (Backdrop::seasonal(Season::Spring, clock.clone(), config), clock)
}

fn sections() -> (SectionBackdrop<ManualClock>, ManualClock) {
    let clock = ManualClock::default();
    let config = SceneConfig::for_kind(SceneKind::Section);
    (Backdrop::sections(Section::Home, clock.clone(), config), clock)
}

#[test]
fn spider_frame_contents() {
    let (backdrop, _) = seasonal();
    let frame = backdrop.frame();
    assert_eq!(frame.count(KeyKind::Particle), 15);
    assert_eq!(frame.count(KeyKind::Node), 48 + 30 + 30);
    assert_eq!(frame.count(KeyKind::Core), 1);
    assert_eq!(frame.count(KeyKind::Pointer), 0);
    assert!(frame.is_finite());
    assert!(frame.keys_unique());
}

#[test]
fn hover_adds_pointer_ring() {
    let (mut backdrop, _) = seasonal();
    backdrop.on_pointer_enter();
    assert!(backdrop.on_pointer_move(512.0, 384.0));
    assert_eq!(backdrop.frame().count(KeyKind::Pointer), 1);
    backdrop.on_pointer_leave();
    assert_eq!(backdrop.frame().count(KeyKind::Pointer), 0);
}

#[test]
fn pointer_on_a_node_stays_finite() {
    let (mut backdrop, _) = seasonal();
    let node = generate_web_layer(&SPIDER_LAYERS[2], 2, backdrop.inputs().viewport).nodes[0];
    backdrop.on_pointer_enter();
    backdrop.on_pointer_move(node.original.x, node.original.y);
    let frame = backdrop.frame();
    assert!(frame.is_finite());
    assert!(frame.keys_unique());
}

#[test]
fn frames_repeat_until_inputs_change() {
    let (mut backdrop, clock) = seasonal();
    let first = backdrop.frame();
    assert_eq!(first.drawables, backdrop.frame().drawables);
    clock.advance(Duration::from_millis(20));
    backdrop.on_scroll(300.0);
    assert_ne!(first.drawables, backdrop.frame().drawables);
}

#[test]
fn season_rotates_and_transition_ends() {
    let (mut backdrop, clock) = seasonal();
    assert!(!backdrop.tick());
    clock.advance(Duration::from_secs(15));
    assert!(backdrop.tick());
    assert_eq!(backdrop.theme().name, "Summer Radiance");
    assert_eq!(backdrop.particles().len(), 20);
    assert!(backdrop.is_transitioning());

    clock.advance(Duration::from_millis(999));
    assert!(!backdrop.tick());
    assert!(backdrop.is_transitioning());
    clock.advance(Duration::from_millis(1));
    assert!(!backdrop.tick());
    assert!(!backdrop.is_transitioning());
}

#[test]
fn particles_fade_in_after_theme_change() {
    let (mut backdrop, clock) = sections();
    assert!(backdrop.on_section(Section::Skills));
    let frame = backdrop.frame();
    let particles: Vec<_> = frame
        .iter()
        .filter(|d| d.key.kind == KeyKind::Particle)
        .collect();
    assert_eq!(particles.len(), 30);
    assert!(particles.iter().all(|d| d.opacity == 0.0));

    clock.advance(Duration::from_millis(500));
    let half = backdrop.frame();
    assert!(half
        .iter()
        .filter(|d| d.key.kind == KeyKind::Particle)
        .all(|d| d.opacity > 0.0));
}

#[test]
fn scroll_and_pointer_are_throttled() {
    let (mut backdrop, clock) = seasonal();
    assert!(backdrop.on_scroll(10.0));
    assert!(!backdrop.on_scroll(20.0));
    assert_eq!(backdrop.inputs().scroll.offset_y, 10.0);
    clock.advance(Duration::from_millis(16));
    assert!(backdrop.on_scroll(30.0));
    assert_eq!(backdrop.inputs().scroll.offset_y, 30.0);

    assert!(backdrop.on_pointer_move(1.0, 2.0));
    assert!(!backdrop.on_pointer_move(3.0, 4.0));
    assert_eq!(backdrop.inputs().pointer, PointerState { x: 1.0, y: 2.0 });
}

#[test]
fn section_probes_are_rate_limited() {
    let (mut backdrop, clock) = sections();
    assert!(backdrop.should_probe_sections());
    clock.advance(Duration::from_millis(50));
    assert!(!backdrop.should_probe_sections());
    clock.advance(Duration::from_millis(50));
    assert!(backdrop.should_probe_sections());
}

#[test]
fn section_frame_contents() {
    let (mut backdrop, _) = sections();
    assert!(backdrop.on_section(Section::Skills));
    assert!(!backdrop.on_section(Section::Skills));
    backdrop.on_pointer_enter();
    backdrop.on_pointer_move(100.0, 100.0);
    let frame = backdrop.frame();
    assert_eq!(frame.count(KeyKind::Glyph), 8);
    // every fourth of the foreground's 90 spokes + 45 circular edges
    assert_eq!(frame.count(KeyKind::Node), 34);
    assert_eq!(frame.count(KeyKind::Pointer), 2);
    assert_eq!(frame.count(KeyKind::Core), 2);
    assert!(frame.keys_unique());
    assert!(frame.is_finite());
}

#[test]
fn section_bounds_drive_theme() {
    let (mut backdrop, _) = sections();
    backdrop.on_resize(1000.0, 1000.0);
    let bounds = [SectionBounds {
        section: Section::Projects,
        top: 0.0,
        bottom: 800.0,
    }];
    assert!(backdrop.on_section_bounds(&bounds));
    assert_eq!(backdrop.source().section(), Section::Projects);
    assert!(!backdrop.on_section_bounds(&[]));
}

#[test]
fn seasonal_source_ignores_sections() {
    let (mut backdrop, _) = seasonal();
    assert!(!backdrop.on_section(Section::Contact));
    assert_eq!(backdrop.theme().name, "Spring Bloom");
}

#[test]
fn resize_reseeds_inside_new_viewport() {
    let (mut backdrop, _) = seasonal();
    backdrop.on_resize(200.0, 100.0);
    for seed in backdrop.particles().seeds() {
        assert!(seed.base.x <= 200.0 && seed.base.y <= 100.0);
    }
    let frame = backdrop.frame();
    assert_eq!(frame.viewport, ViewportState::new(200.0, 100.0));
}

#[test]
fn zero_viewport_frame_is_finite() {
    let (mut backdrop, _) = sections();
    backdrop.on_resize(0.0, 0.0);
    backdrop.on_pointer_enter();
    let frame = backdrop.frame();
    assert!(!frame.is_empty());
    assert!(frame.is_finite());
    assert_eq!(frame.viewport, ViewportState::new(1024.0, 768.0));
}
