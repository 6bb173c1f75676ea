//! The background component: owns input state, throttles, the theme source and
//! the seeded particle field, and produces one [`GeometryFrame`] per call.

use crate::constants::{
    DEFAULT_SCENE_SEED, POINTER_THROTTLE_MS, SCROLL_THROTTLE_MS, SEASON_ROTATION_MS,
    SECTION_PROBE_THROTTLE_MS, THEME_TRANSITION_MS,
};
use crate::distort::PointerField;
use crate::frame::GeometryFrame;
use crate::particles::{seeded_rng, ParticleField};
use crate::scene::{compose_frame, SceneInputs, SceneKind};
use crate::schedule::{Clock, SeasonRotation, Throttle};
use crate::state::{FrameInputs, PointerState, ScrollState, ViewportState};
use crate::theme::{
    active_section, Season, Section, SectionBounds, SectionThemes, SeasonalThemes, Theme,
    ThemeSource,
};
use crate::web::WebLayout;
use std::time::Duration;

/// Tunables for one mounted background.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneConfig {
    pub seed: u64,
    pub viewport: ViewportState,
    pub pointer_throttle: Duration,
    pub scroll_throttle: Duration,
    pub section_probe_throttle: Duration,
    pub rotation_period: Duration,
    pub transition: Duration,
    pub pointer_field: PointerField,
}

impl SceneConfig {
    pub fn for_kind(kind: SceneKind) -> Self {
        Self {
            seed: DEFAULT_SCENE_SEED,
            viewport: ViewportState::default(),
            pointer_throttle: Duration::from_millis(POINTER_THROTTLE_MS),
            scroll_throttle: Duration::from_millis(SCROLL_THROTTLE_MS),
            section_probe_throttle: Duration::from_millis(SECTION_PROBE_THROTTLE_MS),
            rotation_period: Duration::from_millis(SEASON_ROTATION_MS),
            transition: Duration::from_millis(THEME_TRANSITION_MS),
            pointer_field: kind.pointer_field(),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_viewport(mut self, viewport: ViewportState) -> Self {
        self.viewport = viewport;
        self
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self::for_kind(SceneKind::SpiderWeb)
    }
}

pub struct Backdrop<S: ThemeSource, C: Clock> {
    kind: SceneKind,
    config: SceneConfig,
    source: S,
    clock: C,
    inputs: FrameInputs,
    layouts: Vec<WebLayout>,
    particles: ParticleField,
    pointer_throttle: Throttle,
    scroll_throttle: Throttle,
    section_throttle: Throttle,
    transition_started: Option<Duration>,
}

pub type SeasonalBackdrop<C> = Backdrop<SeasonalThemes, C>;
pub type SectionBackdrop<C> = Backdrop<SectionThemes, C>;

impl<C: Clock> Backdrop<SeasonalThemes, C> {
    /// Spider-web background starting at `season`, rotating every
    /// `config.rotation_period`.
    pub fn seasonal(season: Season, clock: C, config: SceneConfig) -> Self {
        let rotation = SeasonRotation::new(season, config.rotation_period, clock.now());
        Self::new(SceneKind::SpiderWeb, SeasonalThemes::new(rotation), clock, config)
    }
}

impl<C: Clock> Backdrop<SectionThemes, C> {
    pub fn sections(initial: Section, clock: C, config: SceneConfig) -> Self {
        Self::new(SceneKind::Section, SectionThemes::new(initial), clock, config)
    }
}

impl<S: ThemeSource, C: Clock> Backdrop<S, C> {
    pub fn new(kind: SceneKind, source: S, clock: C, config: SceneConfig) -> Self {
        let inputs = FrameInputs {
            viewport: config.viewport,
            ..FrameInputs::default()
        };
        let theme = source.theme();
        let mut rng = seeded_rng(config.seed, source.theme_index());
        let particles = ParticleField::seed(&theme, inputs.viewport, &mut rng);
        log::info!("[backdrop] {:?} mounted with theme {}", kind, theme.name);
        Self {
            kind,
            config,
            layouts: kind.layouts(inputs.viewport),
            source,
            clock,
            inputs,
            particles,
            pointer_throttle: Throttle::new(config.pointer_throttle),
            scroll_throttle: Throttle::new(config.scroll_throttle),
            section_throttle: Throttle::new(config.section_probe_throttle),
            transition_started: None,
        }
    }

    pub fn kind(&self) -> SceneKind {
        self.kind
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn theme(&self) -> Theme {
        self.source.theme()
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn inputs(&self) -> FrameInputs {
        self.inputs
    }

    pub fn particles(&self) -> &ParticleField {
        &self.particles
    }

    pub fn is_hovered(&self) -> bool {
        self.inputs.hovered
    }

    pub fn is_transitioning(&self) -> bool {
        self.transition_started.is_some()
    }

    fn reseed(&mut self) {
        let theme = self.source.theme();
        let mut rng = seeded_rng(self.config.seed, self.source.theme_index());
        self.particles = ParticleField::seed(&theme, self.inputs.viewport, &mut rng);
    }

    fn begin_transition(&mut self) {
        self.reseed();
        self.transition_started = Some(self.clock.now());
    }

    pub fn on_resize(&mut self, width: f32, height: f32) {
        let viewport = ViewportState::new(width, height);
        if viewport == self.inputs.viewport {
            return;
        }
        log::debug!("[backdrop] resize {width}x{height}");
        self.inputs.viewport = viewport;
        self.layouts = self.kind.layouts(viewport);
        self.reseed();
    }

    /// Record a scroll offset. Returns `false` when the event was throttled.
    pub fn on_scroll(&mut self, offset_y: f32) -> bool {
        if !self.scroll_throttle.admit(self.clock.now()) {
            return false;
        }
        self.inputs.scroll = ScrollState::new(offset_y);
        true
    }

    /// Record a pointer position. Returns `false` when the event was throttled.
    pub fn on_pointer_move(&mut self, x: f32, y: f32) -> bool {
        if !self.pointer_throttle.admit(self.clock.now()) {
            return false;
        }
        self.inputs.pointer = PointerState { x, y };
        true
    }

    pub fn on_pointer_enter(&mut self) {
        self.inputs.hovered = true;
    }

    pub fn on_pointer_leave(&mut self) {
        self.inputs.hovered = false;
    }

    /// Whether the caller should measure section bounds now. Limits DOM
    /// queries to one per probe window.
    pub fn should_probe_sections(&mut self) -> bool {
        self.section_throttle.admit(self.clock.now())
    }

    /// Switch to `section`'s theme. Returns `true` when the theme changed.
    pub fn on_section(&mut self, section: Section) -> bool {
        if !self.source.set_section(section) {
            return false;
        }
        self.begin_transition();
        true
    }

    /// Pick the section overlapping the detection band and switch to it.
    pub fn on_section_bounds(&mut self, bounds: &[SectionBounds]) -> bool {
        let height = self.inputs.viewport.effective().height;
        match active_section(bounds, height) {
            Some(section) => self.on_section(section),
            None => false,
        }
    }

    /// Advance timers. Returns `true` when the theme changed on this tick.
    pub fn tick(&mut self) -> bool {
        let now = self.clock.now();
        let changed = self.source.poll(now);
        if changed {
            self.begin_transition();
        } else if let Some(started) = self.transition_started {
            if now.saturating_sub(started) >= self.config.transition {
                self.transition_started = None;
            }
        }
        changed
    }

    fn particle_fade(&self) -> f32 {
        match self.transition_started {
            Some(started) => {
                let window = self.config.transition.as_secs_f32();
                if window <= 0.0 {
                    return 1.0;
                }
                let elapsed = self.clock.now().saturating_sub(started).as_secs_f32();
                (elapsed / window).min(1.0)
            }
            None => 1.0,
        }
    }

    pub fn frame(&self) -> GeometryFrame {
        let theme = self.source.theme();
        compose_frame(&SceneInputs {
            kind: self.kind,
            theme: &theme,
            layouts: &self.layouts,
            particles: &self.particles,
            frame: self.inputs,
            field: self.config.pointer_field,
            particle_fade: self.particle_fade(),
        })
    }
}

/// Object-safe view of a [`Backdrop`] for front-ends that choose the scene
/// at runtime.
pub trait SceneDriver {
    fn kind(&self) -> SceneKind;
    fn theme(&self) -> Theme;
    fn inputs(&self) -> FrameInputs;
    fn on_resize(&mut self, width: f32, height: f32);
    fn on_scroll(&mut self, offset_y: f32) -> bool;
    fn on_pointer_move(&mut self, x: f32, y: f32) -> bool;
    fn on_pointer_enter(&mut self);
    fn on_pointer_leave(&mut self);
    fn should_probe_sections(&mut self) -> bool;
    fn on_section(&mut self, section: Section) -> bool;
    fn on_section_bounds(&mut self, bounds: &[SectionBounds]) -> bool;
    fn tick(&mut self) -> bool;
    fn frame(&self) -> GeometryFrame;
}

impl<S: ThemeSource, C: Clock> SceneDriver for Backdrop<S, C> {
    fn kind(&self) -> SceneKind {
        Backdrop::kind(self)
    }
    fn theme(&self) -> Theme {
        Backdrop::theme(self)
    }
    fn inputs(&self) -> FrameInputs {
        Backdrop::inputs(self)
    }
    fn on_resize(&mut self, width: f32, height: f32) {
        Backdrop::on_resize(self, width, height)
    }
    fn on_scroll(&mut self, offset_y: f32) -> bool {
        Backdrop::on_scroll(self, offset_y)
    }
    fn on_pointer_move(&mut self, x: f32, y: f32) -> bool {
        Backdrop::on_pointer_move(self, x, y)
    }
    fn on_pointer_enter(&mut self) {
        Backdrop::on_pointer_enter(self)
    }
    fn on_pointer_leave(&mut self) {
        Backdrop::on_pointer_leave(self)
    }
    fn should_probe_sections(&mut self) -> bool {
        Backdrop::should_probe_sections(self)
    }
    fn on_section(&mut self, section: Section) -> bool {
        Backdrop::on_section(self, section)
    }
    fn on_section_bounds(&mut self, bounds: &[SectionBounds]) -> bool {
        Backdrop::on_section_bounds(self, bounds)
    }
    fn tick(&mut self) -> bool {
        Backdrop::tick(self)
    }
    fn frame(&self) -> GeometryFrame {
        Backdrop::frame(self)
    }
}

/// Build the driver described by `config` for `kind`.
///
/// The seasonal scene starts at the season of `month` (1 = January); the
/// section scene starts at `Home` and follows the page from there.
pub fn boxed_driver<C: Clock + 'static>(
    kind: SceneKind,
    month: u32,
    clock: C,
    config: SceneConfig,
) -> Box<dyn SceneDriver> {
    match kind {
        SceneKind::SpiderWeb => Box::new(Backdrop::seasonal(
            Season::from_month(month),
            clock,
            config,
        )),
        SceneKind::Section => Box::new(Backdrop::sections(Section::Home, clock, config)),
    }
}
