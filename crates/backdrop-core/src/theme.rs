//! Color palettes, particle settings and the two theme selectors.
//!
//! A [`Theme`] is chosen either by season (rotating on a timer) or by the page
//! section currently in view. The selectors are separate [`ThemeSource`]
//! implementations; a scene owns exactly one of them.

use crate::constants::{
    DEFAULT_WAVE_AMPLITUDE, FALLBACK_PARTICLE_COUNT, FALLBACK_PARTICLE_SIZE,
    FALLBACK_PARTICLE_SPEED, SECTION_BOTTOM_BAND, SECTION_TOP_BAND,
};
use crate::schedule::SeasonRotation;
use rand::Rng;
use std::fmt;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Rgba {
    Rgba { r, g, b, a }
}

impl Rgba {
    pub fn to_css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }

    /// Hashable identity, used by renderers to cache CSS strings.
    #[inline]
    pub fn key(&self) -> (u8, u8, u8, u32) {
        (self.r, self.g, self.b, self.a.to_bits())
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

pub const FALLBACK_COLOR: Rgba = rgba(59, 130, 246, 0.6);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub primary: Rgba,
    pub secondary: Rgba,
    pub tertiary: Rgba,
    pub accent: Rgba,
}

impl Palette {
    /// Colors in declaration order, wrapping every four.
    pub fn cycle(&self, i: usize) -> Rgba {
        match i % 4 {
            0 => self.primary,
            1 => self.secondary,
            2 => self.tertiary,
            _ => self.accent,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ParticleShape {
    Petal,
    Firefly,
    Leaf,
    Snowflake,
    Dot,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ParticleMotion {
    /// Sway sideways and fall with scroll (seasonal themes).
    Drift,
    /// Circle a seeded anchor.
    Orbit,
    /// Lissajous-like wobble around the anchor.
    Grid,
    /// Climb as the page scrolls down.
    Rise,
    Float,
}

/// Outline drawn by the section background's shape row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Glyph {
    Triangle,
    Square,
    Ring,
}

/// Where a per-particle scalar comes from when the field is seeded.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Pool {
    Choice(&'static [f32]),
    Span(f32, f32),
}

impl Pool {
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R, fallback: f32) -> f32 {
        match *self {
            Pool::Choice(values) if values.is_empty() => fallback,
            Pool::Choice(values) => values[rng.gen_range(0..values.len())],
            Pool::Span(lo, hi) if hi > lo => lo + rng.gen::<f32>() * (hi - lo),
            Pool::Span(lo, _) => lo,
        }
    }

    fn is_usable(&self) -> bool {
        match *self {
            Pool::Choice(values) => !values.is_empty() && values.iter().all(|v| v.is_finite()),
            Pool::Span(lo, hi) => lo.is_finite() && hi.is_finite(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorPick {
    /// Uniform pick from the pool at seed time.
    Random,
    /// `pool[i % len]`.
    Cycle,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub palette: Palette,
    pub particle_count: usize,
    pub shape: ParticleShape,
    pub motion: ParticleMotion,
    pub glyph: Option<Glyph>,
    pub particle_colors: &'static [Rgba],
    pub color_pick: ColorPick,
    pub particle_sizes: Pool,
    pub particle_speeds: Pool,
    pub particle_opacity: Pool,
    pub glow_intensity: f32,
    pub animation_speed: f32,
    pub wave_amplitude: f32,
}

impl Theme {
    /// Replace malformed fields with the documented fallbacks so one bad
    /// record cannot poison a whole frame.
    pub fn sanitized(mut self) -> Self {
        if self.particle_count == 0 {
            log::warn!("[theme] {}: particle_count 0, using {}", self.name, FALLBACK_PARTICLE_COUNT);
            self.particle_count = FALLBACK_PARTICLE_COUNT;
        }
        if self.particle_colors.is_empty() {
            log::warn!("[theme] {}: empty color pool", self.name);
            self.particle_colors = &[FALLBACK_COLOR];
        }
        if !self.particle_sizes.is_usable() {
            log::warn!("[theme] {}: unusable size pool", self.name);
            self.particle_sizes = Pool::Choice(&[FALLBACK_PARTICLE_SIZE]);
        }
        if !self.particle_speeds.is_usable() {
            log::warn!("[theme] {}: unusable speed pool", self.name);
            self.particle_speeds = Pool::Choice(&[FALLBACK_PARTICLE_SPEED]);
        }
        if !self.particle_opacity.is_usable() {
            self.particle_opacity = Pool::Choice(&[0.6]);
        }
        if !self.wave_amplitude.is_finite() {
            self.wave_amplitude = DEFAULT_WAVE_AMPLITUDE;
        }
        if !self.animation_speed.is_finite() || self.animation_speed <= 0.0 {
            self.animation_speed = 1.0;
        }
        if !self.glow_intensity.is_finite() || self.glow_intensity < 0.0 {
            self.glow_intensity = 1.0;
        }
        self
    }
}

// ---------------- Seasons ----------------

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
}

impl Season {
    pub const ALL: [Season; 4] = [Season::Spring, Season::Summer, Season::Autumn, Season::Winter];

    /// Calendar month (1 = January) to season, northern hemisphere.
    pub fn from_month(month: u32) -> Self {
        match month {
            3..=5 => Season::Spring,
            6..=8 => Season::Summer,
            9..=11 => Season::Autumn,
            12 | 1 | 2 => Season::Winter,
            _ => {
                log::warn!("[theme] month {month} out of range, defaulting to spring");
                Season::Spring
            }
        }
    }

    pub fn next(self) -> Self {
        match self {
            Season::Spring => Season::Summer,
            Season::Summer => Season::Autumn,
            Season::Autumn => Season::Winter,
            Season::Winter => Season::Spring,
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn parse(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "spring" => Some(Season::Spring),
            "summer" => Some(Season::Summer),
            "autumn" | "fall" => Some(Season::Autumn),
            "winter" => Some(Season::Winter),
            _ => None,
        }
    }

    pub fn theme(self) -> Theme {
        match self {
            Season::Spring => SPRING,
            Season::Summer => SUMMER,
            Season::Autumn => AUTUMN,
            Season::Winter => WINTER,
        }
    }
}

const SPRING: Theme = Theme {
    name: "Spring Bloom",
    palette: Palette {
        primary: rgba(34, 197, 94, 0.6),
        secondary: rgba(59, 130, 246, 0.5),
        tertiary: rgba(236, 72, 153, 0.4),
        accent: rgba(250, 204, 21, 0.5),
    },
    particle_count: 15,
    shape: ParticleShape::Petal,
    motion: ParticleMotion::Drift,
    glyph: None,
    particle_colors: &[
        rgba(236, 72, 153, 0.8),
        rgba(250, 204, 21, 0.7),
        rgba(34, 197, 94, 0.6),
    ],
    color_pick: ColorPick::Random,
    particle_sizes: Pool::Choice(&[3.0, 4.0]),
    particle_speeds: Pool::Choice(&[0.8, 1.0]),
    particle_opacity: Pool::Choice(&[0.6]),
    glow_intensity: 2.0,
    animation_speed: 1.0,
    wave_amplitude: 15.0,
};

const SUMMER: Theme = Theme {
    name: "Summer Radiance",
    palette: Palette {
        primary: rgba(59, 130, 246, 0.7),
        secondary: rgba(34, 197, 94, 0.6),
        tertiary: rgba(251, 146, 60, 0.5),
        accent: rgba(250, 204, 21, 0.6),
    },
    particle_count: 20,
    shape: ParticleShape::Firefly,
    motion: ParticleMotion::Drift,
    glyph: None,
    particle_colors: &[rgba(250, 204, 21, 0.9), rgba(251, 146, 60, 0.8)],
    color_pick: ColorPick::Random,
    particle_sizes: Pool::Choice(&[2.0, 3.0]),
    particle_speeds: Pool::Choice(&[1.0, 1.2]),
    particle_opacity: Pool::Choice(&[0.7]),
    glow_intensity: 2.0,
    animation_speed: 1.2,
    wave_amplitude: 18.0,
};

const AUTUMN: Theme = Theme {
    name: "Autumn Harvest",
    palette: Palette {
        primary: rgba(251, 146, 60, 0.6),
        secondary: rgba(239, 68, 68, 0.5),
        tertiary: rgba(217, 119, 6, 0.5),
        accent: rgba(245, 158, 11, 0.6),
    },
    particle_count: 18,
    shape: ParticleShape::Leaf,
    motion: ParticleMotion::Drift,
    glyph: None,
    particle_colors: &[rgba(251, 146, 60, 0.8), rgba(239, 68, 68, 0.7)],
    color_pick: ColorPick::Random,
    particle_sizes: Pool::Choice(&[4.0, 5.0]),
    particle_speeds: Pool::Choice(&[0.6, 0.8]),
    particle_opacity: Pool::Choice(&[0.5]),
    glow_intensity: 2.0,
    animation_speed: 0.8,
    wave_amplitude: 12.0,
};

const WINTER: Theme = Theme {
    name: "Winter Frost",
    palette: Palette {
        primary: rgba(59, 130, 246, 0.5),
        secondary: rgba(148, 163, 184, 0.6),
        tertiary: rgba(139, 92, 246, 0.4),
        accent: rgba(219, 234, 254, 0.7),
    },
    particle_count: 25,
    shape: ParticleShape::Snowflake,
    motion: ParticleMotion::Drift,
    glyph: None,
    particle_colors: &[rgba(219, 234, 254, 0.9), rgba(148, 163, 184, 0.8)],
    color_pick: ColorPick::Random,
    particle_sizes: Pool::Choice(&[2.0, 3.0]),
    particle_speeds: Pool::Choice(&[0.4, 0.6]),
    particle_opacity: Pool::Choice(&[0.6]),
    glow_intensity: 1.0,
    animation_speed: 0.6,
    wave_amplitude: 8.0,
};

// ---------------- Sections ----------------

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    About,
    Education,
    Skills,
    Experience,
    Projects,
    Contact,
}

impl Section {
    /// Page order, top to bottom.
    pub const ALL: [Section; 7] = [
        Section::Home,
        Section::About,
        Section::Education,
        Section::Skills,
        Section::Experience,
        Section::Projects,
        Section::Contact,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Education => "education",
            Section::Skills => "skills",
            Section::Experience => "experience",
            Section::Projects => "projects",
            Section::Contact => "contact",
        }
    }

    /// Unknown ids fall back to `Home`.
    pub fn parse(id: &str) -> Self {
        Section::ALL
            .into_iter()
            .find(|s| s.id() == id)
            .unwrap_or(Section::Home)
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn theme(self) -> Theme {
        let (colors, particle_count): (&'static [Rgba; 3], usize) = match self {
            Section::Home => (&HOME_COLORS, 25),
            Section::About => (&ABOUT_COLORS, 20),
            Section::Education => (&EDUCATION_COLORS, 18),
            Section::Skills => (&SKILLS_COLORS, 30),
            Section::Experience => (&EXPERIENCE_COLORS, 22),
            Section::Projects => (&PROJECTS_COLORS, 35),
            Section::Contact => (&CONTACT_COLORS, 20),
        };
        let (motion, glyph) = match self {
            Section::Skills => (ParticleMotion::Orbit, Some(Glyph::Triangle)),
            Section::Projects => (ParticleMotion::Grid, Some(Glyph::Square)),
            Section::Experience => (ParticleMotion::Rise, Some(Glyph::Ring)),
            _ => (ParticleMotion::Float, None),
        };
        Theme {
            name: self.id(),
            // sections define no tertiary color; the accent doubles for it
            palette: Palette {
                primary: colors[0],
                secondary: colors[1],
                tertiary: colors[2],
                accent: colors[2],
            },
            particle_count,
            shape: ParticleShape::Dot,
            motion,
            glyph,
            particle_colors: colors,
            color_pick: ColorPick::Cycle,
            particle_sizes: Pool::Span(1.0, 5.0),
            particle_speeds: Pool::Span(0.3, 1.5),
            particle_opacity: Pool::Span(0.4, 0.8),
            glow_intensity: 1.0,
            animation_speed: 1.0,
            wave_amplitude: DEFAULT_WAVE_AMPLITUDE,
        }
    }
}

// primary, secondary, accent
static HOME_COLORS: [Rgba; 3] = [
    rgba(59, 130, 246, 0.6),
    rgba(139, 92, 246, 0.4),
    rgba(16, 185, 129, 0.3),
];
static ABOUT_COLORS: [Rgba; 3] = [
    rgba(16, 185, 129, 0.6),
    rgba(59, 130, 246, 0.4),
    rgba(236, 72, 153, 0.3),
];
static EDUCATION_COLORS: [Rgba; 3] = [
    rgba(236, 72, 153, 0.6),
    rgba(251, 146, 60, 0.4),
    rgba(139, 92, 246, 0.3),
];
static SKILLS_COLORS: [Rgba; 3] = [
    rgba(251, 146, 60, 0.6),
    rgba(239, 68, 68, 0.4),
    rgba(59, 130, 246, 0.3),
];
static EXPERIENCE_COLORS: [Rgba; 3] = [
    rgba(239, 68, 68, 0.6),
    rgba(245, 158, 11, 0.4),
    rgba(16, 185, 129, 0.3),
];
static PROJECTS_COLORS: [Rgba; 3] = [
    rgba(16, 185, 129, 0.6),
    rgba(59, 130, 246, 0.4),
    rgba(139, 92, 246, 0.3),
];
static CONTACT_COLORS: [Rgba; 3] = [
    rgba(139, 92, 246, 0.6),
    rgba(236, 72, 153, 0.4),
    rgba(251, 146, 60, 0.3),
];

/// Viewport-relative bounds of one page section, as reported by the DOM.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionBounds {
    pub section: Section,
    pub top: f32,
    pub bottom: f32,
}

/// First section (in the given order) overlapping the detection band:
/// its top above 40% of the viewport and its bottom below 20%.
pub fn active_section(bounds: &[SectionBounds], viewport_height: f32) -> Option<Section> {
    bounds
        .iter()
        .find(|b| {
            b.top <= viewport_height * SECTION_TOP_BAND
                && b.bottom >= viewport_height * SECTION_BOTTOM_BAND
        })
        .map(|b| b.section)
}

// ---------------- Selection ----------------

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeContext {
    Season(Season),
    /// Calendar month, 1 = January.
    Month(u32),
    Section(Section),
}

pub fn select_theme(context: ThemeContext) -> Theme {
    match context {
        ThemeContext::Season(season) => season.theme(),
        ThemeContext::Month(month) => Season::from_month(month).theme(),
        ThemeContext::Section(section) => section.theme(),
    }
}

/// Supplies the active theme to a scene and reports when it changes.
pub trait ThemeSource {
    fn theme(&self) -> Theme;

    /// Stable small integer identifying the active theme; mixed into the
    /// particle seed.
    fn theme_index(&self) -> usize;

    /// Advance time-driven selection. Returns `true` when the theme changed.
    fn poll(&mut self, now: Duration) -> bool;

    /// Section-driven selection. Returns `true` when the theme changed.
    fn set_section(&mut self, _section: Section) -> bool {
        false
    }
}

/// Seasonal themes rotating on a repeating timer.
#[derive(Clone, Debug)]
pub struct SeasonalThemes {
    pub rotation: SeasonRotation,
}

impl SeasonalThemes {
    pub fn new(rotation: SeasonRotation) -> Self {
        Self { rotation }
    }

    pub fn season(&self) -> Season {
        self.rotation.current()
    }
}

impl ThemeSource for SeasonalThemes {
    fn theme(&self) -> Theme {
        self.rotation.current().theme()
    }

    fn theme_index(&self) -> usize {
        self.rotation.current().index()
    }

    fn poll(&mut self, now: Duration) -> bool {
        self.rotation.poll(now).is_some()
    }
}

/// Themes following the page section in view.
#[derive(Clone, Debug)]
pub struct SectionThemes {
    current: Section,
}

impl Default for SectionThemes {
    fn default() -> Self {
        Self {
            current: Section::Home,
        }
    }
}

impl SectionThemes {
    pub fn new(initial: Section) -> Self {
        Self { current: initial }
    }

    pub fn section(&self) -> Section {
        self.current
    }
}

impl ThemeSource for SectionThemes {
    fn theme(&self) -> Theme {
        self.current.theme()
    }

    fn theme_index(&self) -> usize {
        self.current.index()
    }

    fn poll(&mut self, _now: Duration) -> bool {
        false
    }

    fn set_section(&mut self, section: Section) -> bool {
        if section == self.current {
            return false;
        }
        log::info!("[theme] section {} -> {}", self.current.id(), section.id());
        self.current = section;
        true
    }
}
