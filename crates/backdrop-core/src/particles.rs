//! Theme particles and section glyphs.
//!
//! Particle base values are rolled once when a theme becomes active and kept
//! in a [`ParticleField`]; each frame only re-evaluates the scroll-driven
//! motion, so nothing jitters between frames.

use crate::constants::{
    DRIFT_SWAY_PX, DRIFT_TIME_INDEX_STEP, DRIFT_TIME_SCROLL_RATE, FALLBACK_PARTICLE_SIZE,
    FALLBACK_PARTICLE_SPEED, FALL_RATE, GLYPH_BASE_SIZE, GLYPH_COUNT, ORBIT_RADIUS_MIN,
    ORBIT_RADIUS_SPAN, RISE_RATE,
};
use crate::error::GeometryError;
use crate::frame::{DrawKey, Drawable, KeyKind, Paint, Primitive, QuadSegment};
use crate::state::{ScrollState, ViewportState};
use crate::theme::{ColorPick, Glyph, ParticleMotion, ParticleShape, Rgba, Theme, FALLBACK_COLOR};
use glam::Vec2;
use rand::prelude::*;
use smallvec::{smallvec, SmallVec};
use std::f32::consts::TAU;

/// Derive the particle RNG for one theme activation from the scene seed, so
/// each theme gets its own stable layout.
pub fn seeded_rng(scene_seed: u64, theme_index: usize) -> StdRng {
    let mix = scene_seed ^ (theme_index as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15);
    StdRng::seed_from_u64(mix)
}

/// Values rolled once per particle at seed time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleSeed {
    pub base: Vec2,
    pub size: f32,
    pub speed: f32,
    pub color: Rgba,
    pub opacity: f32,
    pub rotation_deg: f32,
    pub orbit_radius: f32,
}

impl ParticleSeed {
    fn check(&self, index: usize) -> Result<(), GeometryError> {
        let fields = [
            ("base", self.base.is_finite()),
            ("size", self.size.is_finite()),
            ("speed", self.speed.is_finite()),
            ("opacity", self.opacity.is_finite()),
            ("rotation", self.rotation_deg.is_finite()),
            ("orbit radius", self.orbit_radius.is_finite()),
        ];
        match fields.iter().find(|(_, ok)| !ok) {
            Some((field, _)) => Err(GeometryError::MalformedParticle { index, field }),
            None => Ok(()),
        }
    }
}

/// A particle evaluated for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub key: DrawKey,
    pub position: Vec2,
    pub size: f32,
    pub rotation: f32, // radians
    pub color: Rgba,
    pub opacity: f32,
    pub shape: ParticleShape,
}

#[derive(Clone, Debug)]
pub struct ParticleField {
    theme: Theme,
    seeds: Vec<ParticleSeed>,
}

impl ParticleField {
    /// Roll `theme.particle_count` particles spread over the viewport.
    pub fn seed<R: Rng + ?Sized>(theme: &Theme, viewport: ViewportState, rng: &mut R) -> Self {
        let theme = theme.sanitized();
        let vp = viewport.effective();
        let seeds = (0..theme.particle_count)
            .map(|i| {
                let base = Vec2::new(rng.gen::<f32>() * vp.width, rng.gen::<f32>() * vp.height);
                let size = theme.particle_sizes.sample(rng, FALLBACK_PARTICLE_SIZE);
                let speed = theme.particle_speeds.sample(rng, FALLBACK_PARTICLE_SPEED);
                let color = match theme.color_pick {
                    ColorPick::Random => theme
                        .particle_colors
                        .choose(rng)
                        .copied()
                        .unwrap_or(FALLBACK_COLOR),
                    ColorPick::Cycle => theme
                        .particle_colors
                        .get(i % theme.particle_colors.len().max(1))
                        .copied()
                        .unwrap_or(FALLBACK_COLOR),
                };
                ParticleSeed {
                    base,
                    size,
                    speed,
                    color,
                    opacity: theme.particle_opacity.sample(rng, 0.6),
                    rotation_deg: rng.gen::<f32>() * 360.0,
                    orbit_radius: ORBIT_RADIUS_MIN + rng.gen::<f32>() * ORBIT_RADIUS_SPAN,
                }
            })
            .collect();
        log::debug!("[particles] seeded {} for {}", theme.particle_count, theme.name);
        Self { theme, seeds }
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn seeds(&self) -> &[ParticleSeed] {
        &self.seeds
    }

    pub fn len(&self) -> usize {
        self.seeds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seeds.is_empty()
    }

    /// Evaluate every particle for the current scroll offset. Particles that
    /// fail to evaluate are logged and left out.
    pub fn animate(&self, scroll: ScrollState, viewport: ViewportState) -> Vec<Particle> {
        let height = viewport.effective().height;
        let scroll = scroll.offset();
        self.seeds
            .iter()
            .enumerate()
            .filter_map(|(i, seed)| match self.animate_one(i, seed, scroll, height) {
                Ok(p) => Some(p),
                Err(e) => {
                    log::warn!("[particles] skipping: {e}");
                    None
                }
            })
            .collect()
    }

    fn animate_one(
        &self,
        i: usize,
        seed: &ParticleSeed,
        scroll: f32,
        height: f32,
    ) -> Result<Particle, GeometryError> {
        seed.check(i)?;
        let fi = i as f32;
        let b = seed.base;
        let t = scroll * DRIFT_TIME_SCROLL_RATE * self.theme.animation_speed
            + fi * DRIFT_TIME_INDEX_STEP;

        let position = match self.theme.motion {
            ParticleMotion::Drift => Vec2::new(
                b.x + (t * seed.speed).sin() * DRIFT_SWAY_PX,
                b.y + (scroll * seed.speed * FALL_RATE) % height,
            ),
            ParticleMotion::Orbit => {
                let angle = (scroll * 0.001 + fi * 0.5) % TAU;
                b + Vec2::new(angle.cos(), angle.sin()) * seed.orbit_radius
            }
            ParticleMotion::Grid => Vec2::new(
                b.x + (scroll * 0.002 + fi * 0.3).sin() * 40.0,
                b.y + (scroll * 0.001 + fi * 0.2).cos() * 30.0,
            ),
            ParticleMotion::Rise => Vec2::new(
                b.x + (scroll * 0.001 + fi).sin() * 20.0,
                (b.y - scroll * seed.speed * RISE_RATE) % height,
            ),
            ParticleMotion::Float => Vec2::new(
                b.x + (scroll * 0.001 * seed.speed + fi).sin() * 30.0,
                b.y + (scroll * seed.speed * FALL_RATE) % height,
            ),
        };

        // degrees of spin per unit of particle time
        let spin = match self.theme.shape {
            ParticleShape::Petal => 10.0,
            ParticleShape::Leaf => 5.0,
            ParticleShape::Snowflake => 8.0,
            ParticleShape::Firefly | ParticleShape::Dot => 0.0,
        };
        let key = DrawKey::free(KeyKind::Particle, i as u16);
        let particle = Particle {
            key,
            position,
            size: seed.size,
            rotation: (seed.rotation_deg + t * spin).to_radians(),
            color: seed.color,
            opacity: seed.opacity,
            shape: self.theme.shape,
        };
        if particle.position.is_finite() && particle.rotation.is_finite() {
            Ok(particle)
        } else {
            Err(GeometryError::NonFinite { key })
        }
    }
}

fn rotate_about(p: Vec2, pivot: Vec2, angle: f32) -> Vec2 {
    pivot + Vec2::from_angle(angle).rotate(p - pivot)
}

impl Particle {
    pub fn primitive(&self) -> Primitive {
        let p = self.position;
        let s = self.size;
        match self.shape {
            ParticleShape::Petal => Primitive::Ellipse {
                center: p,
                radii: Vec2::new(s, s * 1.5),
                rotation: self.rotation,
                fill: self.color,
            },
            ParticleShape::Leaf => {
                let r = |v: Vec2| rotate_about(v, p, self.rotation);
                Primitive::QuadPath {
                    start: p,
                    segments: smallvec![
                        QuadSegment {
                            ctrl: r(p + Vec2::new(s, -s)),
                            to: r(p + Vec2::new(s * 2.0, 0.0)),
                        },
                        QuadSegment {
                            ctrl: r(p + Vec2::new(s, s)),
                            to: p,
                        },
                    ],
                    fill: self.color,
                }
            }
            ParticleShape::Snowflake => Primitive::Spokes {
                center: p,
                length: s * 1.5,
                count: 4,
                rotation: self.rotation,
                stroke: self.color,
                width: 1.0,
            },
            ParticleShape::Firefly | ParticleShape::Dot => Primitive::Circle {
                center: p,
                radius: s,
                paint: Paint::Fill(self.color),
            },
        }
    }

    pub fn drawable(&self) -> Drawable {
        let d = Drawable::new(self.key, self.opacity, self.primitive());
        // only section dots are blurred; fireflies are plain circles
        match self.shape {
            ParticleShape::Dot => d.glowing(),
            _ => d,
        }
    }
}

/// Row of outlined glyphs drifting with scroll, for themes that define one.
pub fn section_glyphs(theme: &Theme, viewport: ViewportState, scroll: ScrollState) -> Vec<Drawable> {
    let Some(glyph) = theme.glyph else {
        return Vec::new();
    };
    let vp = viewport.effective();
    let scroll = scroll.offset();
    (0..GLYPH_COUNT)
        .filter_map(|i| {
            let fi = i as f32;
            let center = Vec2::new(
                vp.width / GLYPH_COUNT as f32 * fi + (scroll * 0.001 + fi).sin() * 50.0,
                vp.height * 0.3 + (scroll * 0.0008 + fi).cos() * 100.0,
            );
            let size = GLYPH_BASE_SIZE + (scroll * 0.002 + fi).sin() * 10.0;
            let rotation = ((scroll * 0.1 + fi * 45.0) % 360.0).to_radians();
            let opacity = (0.1 + (scroll * 0.001 + fi).sin() * 0.1).max(0.0);
            let place = |v: Vec2| center + Vec2::from_angle(rotation).rotate(v);

            let primitive = match glyph {
                Glyph::Triangle => {
                    let points: SmallVec<[Vec2; 4]> = smallvec![
                        place(Vec2::new(0.0, -size)),
                        place(Vec2::new(size * 0.866, size * 0.5)),
                        place(Vec2::new(-size * 0.866, size * 0.5)),
                    ];
                    Primitive::Polygon {
                        points,
                        stroke: theme.palette.accent,
                        width: 1.0,
                    }
                }
                Glyph::Square => {
                    let h = size / 2.0;
                    Primitive::Polygon {
                        points: smallvec![
                            place(Vec2::new(-h, -h)),
                            place(Vec2::new(h, -h)),
                            place(Vec2::new(h, h)),
                            place(Vec2::new(-h, h)),
                        ],
                        stroke: theme.palette.secondary,
                        width: 1.0,
                    }
                }
                Glyph::Ring => Primitive::Circle {
                    center,
                    radius: size / 2.0,
                    paint: Paint::Stroke {
                        color: theme.palette.primary,
                        width: 1.0,
                    },
                },
            };
            let drawable = Drawable::new(DrawKey::free(KeyKind::Glyph, i as u16), opacity, primitive);
            if drawable.is_finite() {
                Some(drawable)
            } else {
                log::warn!("[particles] skipping glyph {i}: non-finite geometry");
                None
            }
        })
        .collect()
}
