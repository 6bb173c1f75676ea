use backdrop_core::web::previous_ring_angle;
use backdrop_core::*;
use std::f32::consts::TAU;

fn test_layer() -> Layer {
    Layer {
        ring_count: 3,
        base_size: 60.0,
        ..SPIDER_LAYERS[2]
    }
}

#[test]
fn ring_node_counts_follow_four_r_plus_two() {
    let web = generate_web_layer(&test_layer(), 0, ViewportState::new(1024.0, 768.0));
    assert_eq!(web.nodes_on_ring(1), 6);
    assert_eq!(web.nodes_on_ring(2), 10);
    assert_eq!(web.nodes_on_ring(3), 14);
    assert_eq!(web.nodes.len(), 30);
    // one radial per node, one circular per even-indexed node
    assert_eq!(web.connections.len(), 30 + 15);
}

#[test]
fn nodes_sit_on_their_ring_radius() {
    let vp = ViewportState::new(1024.0, 768.0);
    let web = generate_web_layer(&test_layer(), 0, vp);
    let center = vp.center();
    for node in &web.nodes {
        let r = node.original.distance(center);
        assert!((r - node.ring as f32 * 60.0).abs() < 1e-3, "{:?}", node);
    }
}

#[test]
fn first_ring_connects_to_center() {
    let vp = ViewportState::new(800.0, 600.0);
    let web = generate_web_layer(&test_layer(), 1, vp);
    let radial_first: Vec<_> = web
        .connections
        .iter()
        .filter(|c| c.key.kind == KeyKind::Radial && c.key.ring == 1)
        .collect();
    assert_eq!(radial_first.len(), 6);
    assert!(radial_first.iter().all(|c| c.from == vp.center()));
}

#[test]
fn zero_and_garbage_viewports_stay_finite() {
    let viewports = [
        ViewportState::new(0.0, 0.0),
        ViewportState::new(-5.0, 10.0),
        ViewportState::new(f32::NAN, f32::INFINITY),
        ViewportState::new(1.0, 1.0),
        ViewportState::new(3840.0, 2160.0),
    ];
    for vp in viewports {
        for (i, layer) in SPIDER_LAYERS.iter().chain(SECTION_LAYERS.iter()).enumerate() {
            let web = generate_web_layer(layer, i as u8, vp);
            assert!(!web.nodes.is_empty());
            assert!(web.nodes.iter().all(|n| n.original.is_finite()));
            assert!(web
                .connections
                .iter()
                .all(|c| c.from.is_finite() && c.to.is_finite()));
        }
    }
}

#[test]
fn zero_viewport_centers_on_fallback() {
    let center = ViewportState::new(0.0, 0.0).center();
    assert_eq!(center, glam::Vec2::new(512.0, 384.0));
}

#[test]
fn degenerate_layer_uses_fallback_rings() {
    let layer = Layer {
        ring_count: 0,
        base_size: f32::NAN,
        ..SPIDER_LAYERS[0]
    };
    let web = generate_web_layer(&layer, 0, ViewportState::default());
    assert_eq!(web.nodes.len(), 30);
}

#[test]
fn spokes_use_proportional_parent_index() {
    // ring 2 has 10 nodes mapped onto 4 parent slots
    let slots: Vec<u32> = (0..10)
        .map(|i| (previous_ring_angle(2, i) / TAU * 4.0).round() as u32)
        .collect();
    assert_eq!(slots, vec![0, 0, 0, 1, 1, 2, 2, 2, 3, 3]);
}

#[test]
fn layer_keys_are_distinct_across_layers() {
    let vp = ViewportState::default();
    let a = generate_web_layer(&SPIDER_LAYERS[0], 0, vp);
    let b = generate_web_layer(&SPIDER_LAYERS[1], 1, vp);
    assert!(a
        .nodes
        .iter()
        .all(|n| b.nodes.iter().all(|m| m.key != n.key)));
}

#[test]
fn section_rings_hold_six_r_nodes() {
    let web = generate_section_layer(&SECTION_LAYERS[2], 2, ViewportState::new(1024.0, 768.0));
    let counts: Vec<usize> = (1..=5).map(|r| web.nodes_on_ring(r)).collect();
    assert_eq!(counts, vec![6, 12, 18, 24, 30]);
    assert_eq!(web.nodes.len(), 90);
    assert_eq!(web.connections.len(), 90 + 45);
    assert!(web.connections.iter().all(|c| c.waves.is_some()));
}

#[test]
fn section_spokes_keep_their_angle() {
    let vp = ViewportState::new(1024.0, 768.0);
    let center = vp.center();
    let web = generate_section_layer(&SECTION_LAYERS[1], 1, vp);
    for c in web.connections.iter().filter(|c| c.key.kind == KeyKind::Radial) {
        let inner = c.from - center;
        let outer = c.to - center;
        let ring = c.key.ring as f32;
        assert!((outer.length() - ring * 90.0).abs() < 1e-2, "{:?}", c.key);
        assert!((inner.length() - (ring - 1.0) * 90.0).abs() < 1e-2, "{:?}", c.key);
        if c.key.ring > 1 {
            assert!(inner.angle_between(outer).abs() < 1e-3, "{:?}", c.key);
        }
    }
}

#[test]
fn section_spoke_waves_match_their_ends() {
    let web = generate_section_layer(&SECTION_LAYERS[0], 0, ViewportState::default());
    for c in web.connections.iter().filter(|c| c.key.kind == KeyKind::Radial) {
        let [inner, outer] = c.waves.unwrap();
        assert_eq!(outer.amplitude, 15.0);
        assert_eq!(inner.amplitude, if c.key.ring == 1 { 0.0 } else { 10.0 });
        if c.key.ring > 1 {
            assert_eq!(inner.angle, outer.angle);
        }
    }
}

#[test]
fn spider_layouts_use_the_positional_wave() {
    let web = generate_web_layer(&test_layer(), 0, ViewportState::default());
    assert!(web.connections.iter().all(|c| c.waves.is_none()));
}

#[test]
fn scene_kinds_pick_their_generator() {
    let vp = ViewportState::new(1024.0, 768.0);
    let spider = SceneKind::SpiderWeb.layouts(vp);
    let section = SceneKind::Section.layouts(vp);
    assert_eq!(spider[2].nodes_on_ring(2), 10);
    assert_eq!(section[2].nodes_on_ring(2), 12);
    assert_eq!(section_nodes_on_ring(4), 24);
}
