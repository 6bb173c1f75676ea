use backdrop_core::distort::{pointer_displacement, ring_wave_offset, wave_offset, Distortion};
use backdrop_core::*;
use glam::Vec2;

#[test]
fn force_is_zero_at_and_beyond_radius() {
    let field = PointerField::SPIDER;
    for d in [150.0, 150.01, 200.0, 1e6, f32::INFINITY] {
        assert_eq!(pointer_force(d, &field), 0.0, "distance {d}");
    }
    assert_eq!(pointer_force(f32::NAN, &field), 0.0);
}

#[test]
fn force_decreases_strictly_inside_radius() {
    for field in [PointerField::SPIDER, PointerField::SECTION] {
        let mut last = f32::INFINITY;
        let mut d = 0.0;
        while d < field.radius {
            let f = pointer_force(d, &field);
            assert!(f < last, "not decreasing at {d}");
            assert!(f > 0.0);
            last = f;
            d += 5.0;
        }
    }
}

#[test]
fn full_force_at_pointer_without_dividing_by_zero() {
    let p = Vec2::new(300.0, 200.0);
    assert_eq!(pointer_force(0.0, &PointerField::SPIDER), 15.0);
    let offset = pointer_displacement(p, p, &PointerField::SPIDER, 1.0);
    assert!(offset.is_finite());
    assert!((offset.length() - 15.0).abs() < 1e-4);
}

#[test]
fn displacement_points_away_from_pointer() {
    let pointer = Vec2::new(100.0, 100.0);
    let point = Vec2::new(150.0, 100.0);
    let offset = pointer_displacement(point, pointer, &PointerField::SPIDER, 1.0);
    assert!(offset.x > 0.0);
    assert!(offset.y.abs() < 1e-4);
}

#[test]
fn zero_radius_field_is_inert() {
    let field = PointerField {
        radius: 0.0,
        max_force: 50.0,
    };
    assert_eq!(pointer_force(0.0, &field), 0.0);
}

#[test]
fn wave_is_bounded_for_huge_scroll() {
    let amplitude = 18.0;
    let mut scroll = -1.0e6_f32;
    while scroll <= 1.0e6 {
        for original in [Vec2::ZERO, Vec2::new(512.0, 384.0), Vec2::new(3000.0, -40.0)] {
            let w = wave_offset(original, scroll, 1.0, amplitude);
            assert!(w.is_finite());
            assert!(w.x.abs() <= amplitude * 0.3 + 1e-3);
            assert!(w.y.abs() <= amplitude * 0.5 + 1e-3);
        }
        scroll += 12_345.6;
    }
}

#[test]
fn distorted_points_stay_near_original() {
    let theme = Season::Summer.theme();
    let layer = SPIDER_LAYERS[2];
    let original = Vec2::new(400.0, 300.0);
    let pointer = PointerState { x: 410.0, y: 300.0 };
    // wave bound plus the full pointer force
    let bound = theme.wave_amplitude * 0.5 + theme.wave_amplitude * 0.3 + 15.0;
    for scroll in [-1e6, -1234.5, 0.0, 0.5, 999.0, 1e6] {
        for hovered in [false, true] {
            let p = distort(
                original,
                ScrollState::new(scroll),
                pointer,
                &layer,
                &theme,
                PointerField::SPIDER,
                hovered,
            );
            assert!(p.is_finite());
            assert!(p.distance(original) <= bound + 1e-3, "scroll {scroll}");
        }
    }
}

#[test]
fn non_finite_scroll_is_treated_as_top() {
    let theme = Season::Winter.theme();
    let layer = SPIDER_LAYERS[0];
    let original = Vec2::new(10.0, 20.0);
    let at_nan = distort(
        original,
        ScrollState::new(f32::NAN),
        PointerState::default(),
        &layer,
        &theme,
        PointerField::SPIDER,
        false,
    );
    let at_zero = distort(
        original,
        ScrollState::new(0.0),
        PointerState::default(),
        &layer,
        &theme,
        PointerField::SPIDER,
        false,
    );
    assert_eq!(at_nan, at_zero);
}

#[test]
fn ring_wave_is_vertical_and_bounded() {
    let theme = Section::Skills.theme();
    let layer = SECTION_LAYERS[2];
    let wave = RingWave {
        angle: 1.3,
        amplitude: 15.0,
    };
    let original = Vec2::new(600.0, 300.0);
    let mut scroll = -1.0e5_f32;
    while scroll <= 1.0e5 {
        let d = Distortion::new(
            ScrollState::new(scroll),
            PointerState::default(),
            &layer,
            &theme,
            PointerField::SECTION,
            false,
        );
        let p = d.apply_ring(original, wave);
        assert_eq!(p.x, original.x);
        assert!((p.y - original.y).abs() <= 15.0 + 1e-3);
        scroll += 777.7;
    }
}

#[test]
fn ring_wave_phase_follows_angle() {
    let wave = RingWave {
        angle: std::f32::consts::FRAC_PI_4,
        amplitude: 15.0,
    };
    // at zero scroll the phase is angle * 2
    assert!((ring_wave_offset(wave, 0.0, 0.8) - 15.0).abs() < 1e-4);
    assert_eq!(ring_wave_offset(RingWave::FLAT, 1234.0, 1.0), 0.0);
}

#[test]
fn section_lines_use_their_own_waves() {
    let vp = ViewportState::new(1024.0, 768.0);
    let layer = SECTION_LAYERS[2];
    let web = generate_section_layer(&layer, 2, vp);
    let d = Distortion::new(
        ScrollState::new(0.0),
        PointerState::default(),
        &layer,
        &Section::Home.theme(),
        PointerField::SECTION,
        false,
    );
    // first spoke of ring 1: center stays put, the node rises by sin(0) = 0
    let (from, to) = d.apply_line(&web.connections[0]);
    assert_eq!(from, vp.center());
    assert!((to - web.connections[0].to).length() < 1e-4);
}
