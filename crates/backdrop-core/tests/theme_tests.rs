use backdrop_core::*;
use std::time::Duration;

#[test]
fn months_map_to_seasons() {
    let expect = [
        (1, Season::Winter),
        (2, Season::Winter),
        (3, Season::Spring),
        (5, Season::Spring),
        (6, Season::Summer),
        (8, Season::Summer),
        (9, Season::Autumn),
        (11, Season::Autumn),
        (12, Season::Winter),
    ];
    for (month, season) in expect {
        assert_eq!(Season::from_month(month), season, "month {month}");
    }
    assert_eq!(Season::from_month(13), Season::Spring);
}

#[test]
fn rotation_cycles_without_skips() {
    let period = Duration::from_secs(15);
    let mut rotation = SeasonRotation::from_month(4, period, Duration::ZERO);
    assert_eq!(rotation.current(), Season::Spring);
    let mut seen = Vec::new();
    for k in 1..=4 {
        let changed = rotation.poll(period * k);
        assert_eq!(changed, Some(rotation.current()));
        seen.push(rotation.current());
    }
    assert_eq!(
        seen,
        vec![Season::Summer, Season::Autumn, Season::Winter, Season::Spring]
    );
}

#[test]
fn select_theme_by_context() {
    assert_eq!(select_theme(ThemeContext::Month(7)).name, "Summer Radiance");
    assert_eq!(select_theme(ThemeContext::Season(Season::Winter)).name, "Winter Frost");
    let skills = select_theme(ThemeContext::Section(Section::Skills));
    assert_eq!(skills.particle_count, 30);
    assert_eq!(skills.motion, ParticleMotion::Orbit);
    assert_eq!(skills.glyph, Some(Glyph::Triangle));
}

#[test]
fn unknown_section_id_is_home() {
    assert_eq!(Section::parse("projects"), Section::Projects);
    assert_eq!(Section::parse("blog"), Section::Home);
    assert_eq!(Section::parse(""), Section::Home);
}

#[test]
fn palette_cycles_every_four() {
    let p = Season::Spring.theme().palette;
    assert_eq!(p.cycle(0), p.primary);
    assert_eq!(p.cycle(2), p.tertiary);
    assert_eq!(p.cycle(5), p.secondary);
}

#[test]
fn detection_band_picks_first_overlap() {
    let bounds = [
        SectionBounds {
            section: Section::Home,
            top: -900.0,
            bottom: 100.0,
        },
        SectionBounds {
            section: Section::About,
            top: -100.0,
            bottom: 600.0,
        },
        SectionBounds {
            section: Section::Skills,
            top: 300.0,
            bottom: 900.0,
        },
    ];
    assert_eq!(active_section(&bounds, 1000.0), Some(Section::About));
    assert_eq!(active_section(&bounds[2..], 1000.0), Some(Section::Skills));
    // top below 40% of the viewport
    let low = [SectionBounds {
        section: Section::Contact,
        top: 401.0,
        bottom: 1400.0,
    }];
    assert_eq!(active_section(&low, 1000.0), None);
}

#[test]
fn section_source_reports_changes_only() {
    let mut source = SectionThemes::default();
    assert_eq!(source.section(), Section::Home);
    assert!(!source.set_section(Section::Home));
    assert!(source.set_section(Section::Contact));
    assert_eq!(source.theme().name, "contact");
    assert!(!source.poll(Duration::from_secs(60)));
}

#[test]
fn css_color_string() {
    assert_eq!(rgba(59, 130, 246, 0.6).to_css(), "rgba(59, 130, 246, 0.6)");
}
