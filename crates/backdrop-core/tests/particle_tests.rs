use backdrop_core::*;

fn every_theme() -> Vec<Theme> {
    Season::ALL
        .iter()
        .map(|s| s.theme())
        .chain(Section::ALL.iter().map(|s| s.theme()))
        .collect()
}

#[test]
fn seeded_count_matches_theme() {
    let vp = ViewportState::new(1280.0, 720.0);
    for (i, theme) in every_theme().iter().enumerate() {
        let mut rng = seeded_rng(7, i);
        let field = ParticleField::seed(theme, vp, &mut rng);
        assert_eq!(field.len(), theme.particle_count, "{}", theme.name);
        let animated = field.animate(ScrollState::new(250.0), vp);
        assert_eq!(animated.len(), theme.particle_count, "{}", theme.name);
    }
}

#[test]
fn animation_is_finite_over_large_scroll() {
    let vp = ViewportState::default();
    for (i, theme) in every_theme().iter().enumerate() {
        let field = ParticleField::seed(theme, vp, &mut seeded_rng(1, i));
        for scroll in [-1.0e6, -3.5, 0.0, 17.25, 1.0e6] {
            for p in field.animate(ScrollState::new(scroll), vp) {
                assert!(p.position.is_finite(), "{} at {scroll}", theme.name);
                assert!(p.drawable().is_finite());
            }
        }
    }
}

#[test]
fn same_seed_gives_same_field() {
    let theme = Season::Autumn.theme();
    let vp = ViewportState::default();
    let a = ParticleField::seed(&theme, vp, &mut seeded_rng(42, 2));
    let b = ParticleField::seed(&theme, vp, &mut seeded_rng(42, 2));
    assert_eq!(a.seeds(), b.seeds());
    let c = ParticleField::seed(&theme, vp, &mut seeded_rng(42, 3));
    assert_ne!(a.seeds(), c.seeds());
}

#[test]
fn animate_does_not_reroll() {
    let theme = Section::Projects.theme();
    let vp = ViewportState::default();
    let field = ParticleField::seed(&theme, vp, &mut seeded_rng(9, 5));
    let scroll = ScrollState::new(480.0);
    assert_eq!(field.animate(scroll, vp), field.animate(scroll, vp));
}

#[test]
fn seasonal_values_come_from_theme_pools() {
    let theme = Season::Spring.theme();
    let field = ParticleField::seed(&theme, ViewportState::default(), &mut seeded_rng(3, 0));
    for seed in field.seeds() {
        assert!([3.0, 4.0].contains(&seed.size));
        assert!([0.8, 1.0].contains(&seed.speed));
        assert!(theme.particle_colors.contains(&seed.color));
    }
}

#[test]
fn section_colors_cycle_by_index() {
    let theme = Section::About.theme();
    let field = ParticleField::seed(&theme, ViewportState::default(), &mut seeded_rng(3, 1));
    for (i, seed) in field.seeds().iter().enumerate() {
        assert_eq!(seed.color, theme.particle_colors[i % 3]);
        assert!((1.0..=5.0).contains(&seed.size));
        assert!((0.4..=0.8).contains(&seed.opacity));
    }
}

#[test]
fn sanitized_theme_falls_back() {
    let broken = Theme {
        particle_count: 0,
        particle_colors: &[],
        particle_sizes: Pool::Choice(&[]),
        wave_amplitude: f32::NAN,
        ..Season::Spring.theme()
    };
    let field = ParticleField::seed(&broken, ViewportState::default(), &mut seeded_rng(0, 0));
    assert_eq!(field.len(), 10);
    assert!(field.seeds().iter().all(|s| s.color == FALLBACK_COLOR));
    assert!(field.seeds().iter().all(|s| s.size == 3.0));
    assert_eq!(broken.sanitized().wave_amplitude, 10.0);
}

#[test]
fn shapes_map_to_primitives() {
    let vp = ViewportState::default();
    let expect = [
        (Season::Spring, "ellipse"),
        (Season::Summer, "circle"),
        (Season::Autumn, "path"),
        (Season::Winter, "spokes"),
    ];
    for (season, kind) in expect {
        let field = ParticleField::seed(&season.theme(), vp, &mut seeded_rng(5, season.index()));
        let p = field.animate(ScrollState::default(), vp)[0].primitive();
        let got = match p {
            Primitive::Ellipse { .. } => "ellipse",
            Primitive::Circle { .. } => "circle",
            Primitive::QuadPath { .. } => "path",
            Primitive::Spokes { count: 4, .. } => "spokes",
            _ => "other",
        };
        assert_eq!(got, kind, "{season:?}");
    }
}

#[test]
fn glyphs_only_for_shaped_sections() {
    let vp = ViewportState::default();
    let scroll = ScrollState::new(120.0);
    for section in [Section::Skills, Section::Projects, Section::Experience] {
        let glyphs = section_glyphs(&section.theme(), vp, scroll);
        assert_eq!(glyphs.len(), 8, "{section:?}");
        assert!(glyphs.iter().all(|g| g.key.kind == KeyKind::Glyph));
    }
    assert!(section_glyphs(&Section::Home.theme(), vp, scroll).is_empty());
}

#[test]
fn only_section_dots_glow() {
    let vp = ViewportState::default();
    for (i, theme) in every_theme().iter().enumerate() {
        let field = ParticleField::seed(theme, vp, &mut seeded_rng(3, i));
        for p in field.animate(ScrollState::new(40.0), vp) {
            let glows = p.drawable().glow;
            assert_eq!(glows, p.shape == ParticleShape::Dot, "{}", theme.name);
        }
    }
    let summer = Season::Summer.theme();
    assert_eq!(summer.shape, ParticleShape::Firefly);
}
