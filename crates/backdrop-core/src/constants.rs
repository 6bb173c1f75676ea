// Shared geometry/timing tuning constants used by the web and native frontends.

// Viewport
pub const FALLBACK_VIEWPORT_WIDTH: f32 = 1024.0; // used before first layout / when prerendering
pub const FALLBACK_VIEWPORT_HEIGHT: f32 = 768.0;

// Scroll-driven wave (spider web layers)
pub const WAVE_Y_SCROLL_RATE: f32 = 0.005;
pub const WAVE_Y_SPATIAL_RATE: f32 = 0.003; // applied to the original x coordinate
pub const WAVE_Y_AMPLITUDE_SHARE: f32 = 0.5;
pub const WAVE_X_SCROLL_RATE: f32 = 0.004;
pub const WAVE_X_SPATIAL_RATE: f32 = 0.002; // applied to the original y coordinate
pub const WAVE_X_AMPLITUDE_SHARE: f32 = 0.3;
pub const DEFAULT_WAVE_AMPLITUDE: f32 = 10.0;

// Section webs: 6r nodes per ring, vertical wave phased by node angle
pub const SECTION_SEGMENTS_PER_RING: u32 = 6;
pub const SECTION_WAVE_SCROLL_RATE: f32 = 0.002;
pub const SECTION_WAVE_ANGLE_RATE: f32 = 2.0;
pub const SECTION_WAVE_AMPLITUDE: f32 = 15.0;
pub const SECTION_SPOKE_WAVE_AMPLITUDE: f32 = 10.0; // inner end of outer-ring spokes

// Pointer repulsion
pub const SPIDER_POINTER_RADIUS: f32 = 150.0;
pub const SPIDER_POINTER_FORCE: f32 = 15.0;
pub const SECTION_POINTER_RADIUS: f32 = 200.0;
pub const SECTION_POINTER_FORCE: f32 = 25.0;

// Event coalescing and timers (milliseconds)
pub const POINTER_THROTTLE_MS: u64 = 16; // one processed event per display refresh
pub const SCROLL_THROTTLE_MS: u64 = 16;
pub const SECTION_PROBE_THROTTLE_MS: u64 = 100;
pub const SEASON_ROTATION_MS: u64 = 15_000;
pub const THEME_TRANSITION_MS: u64 = 1_000;

// Section detection band, as fractions of viewport height
pub const SECTION_TOP_BAND: f32 = 0.4;
pub const SECTION_BOTTOM_BAND: f32 = 0.2;

// Particles
pub const FALLBACK_PARTICLE_COUNT: usize = 10;
pub const FALLBACK_PARTICLE_SIZE: f32 = 3.0;
pub const FALLBACK_PARTICLE_SPEED: f32 = 1.0;
pub const DRIFT_SWAY_PX: f32 = 20.0;
pub const DRIFT_TIME_SCROLL_RATE: f32 = 0.005;
pub const DRIFT_TIME_INDEX_STEP: f32 = 0.1;
pub const FALL_RATE: f32 = 0.05; // vertical drift per scrolled pixel, scaled by speed
pub const RISE_RATE: f32 = 0.1;
pub const ORBIT_RADIUS_MIN: f32 = 50.0;
pub const ORBIT_RADIUS_SPAN: f32 = 100.0;

// Section glyphs
pub const GLYPH_COUNT: usize = 8;
pub const GLYPH_BASE_SIZE: f32 = 20.0;

// Contact form
pub const CONTACT_SUCCESS_DISPLAY_MS: u64 = 5_000;
pub const CONTACT_ENDPOINT: &str = "https://api.web3forms.com/submit";

// Default seed for particle placement
pub const DEFAULT_SCENE_SEED: u64 = 42;
