//! Per-point distortion layered over the static web layout: a scroll-driven
//! wave followed by pointer repulsion.

use crate::constants::{
    SECTION_POINTER_FORCE, SECTION_POINTER_RADIUS, SECTION_WAVE_ANGLE_RATE,
    SECTION_WAVE_SCROLL_RATE, SPIDER_POINTER_FORCE, SPIDER_POINTER_RADIUS,
    WAVE_X_AMPLITUDE_SHARE, WAVE_X_SCROLL_RATE, WAVE_X_SPATIAL_RATE, WAVE_Y_AMPLITUDE_SHARE,
    WAVE_Y_SCROLL_RATE, WAVE_Y_SPATIAL_RATE,
};
use crate::layer::Layer;
use crate::state::{PointerState, ScrollState};
use crate::theme::Theme;
use crate::web::{RingWave, WebConnection};
use glam::Vec2;

/// Reach and strength of the pointer repulsion.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerField {
    pub radius: f32,
    pub max_force: f32,
}

impl PointerField {
    pub const SPIDER: PointerField = PointerField {
        radius: SPIDER_POINTER_RADIUS,
        max_force: SPIDER_POINTER_FORCE,
    };
    pub const SECTION: PointerField = PointerField {
        radius: SECTION_POINTER_RADIUS,
        max_force: SECTION_POINTER_FORCE,
    };
}

/// Linear falloff: `max_force` at distance 0, zero at and beyond the radius.
#[inline]
pub fn pointer_force(distance: f32, field: &PointerField) -> f32 {
    if field.radius <= 0.0 || distance.is_nan() || distance >= field.radius {
        return 0.0;
    }
    (1.0 - distance.max(0.0) / field.radius) * field.max_force
}

/// Offset pushing `point` away from `pointer`.
///
/// A point exactly under the pointer has no direction; `atan2(0, 0)` is 0 so
/// it is pushed along +x with the full force instead of dividing by zero.
pub fn pointer_displacement(point: Vec2, pointer: Vec2, field: &PointerField, response: f32) -> Vec2 {
    let d = point - pointer;
    let force = pointer_force(d.length(), field) * response;
    if force == 0.0 {
        return Vec2::ZERO;
    }
    let angle = d.y.atan2(d.x);
    Vec2::new(angle.cos(), angle.sin()) * force
}

/// Wave offset for a point at `original` under scroll `scroll`.
///
/// Bounded by `amplitude * 0.3` horizontally and `amplitude * 0.5`
/// vertically for any scroll offset.
pub fn wave_offset(original: Vec2, scroll: f32, scroll_speed: f32, amplitude: f32) -> Vec2 {
    let dy = (scroll * WAVE_Y_SCROLL_RATE * scroll_speed + original.x * WAVE_Y_SPATIAL_RATE).sin()
        * (amplitude * WAVE_Y_AMPLITUDE_SHARE);
    let dx = (scroll * WAVE_X_SCROLL_RATE * scroll_speed + original.y * WAVE_X_SPATIAL_RATE).cos()
        * (amplitude * WAVE_X_AMPLITUDE_SHARE);
    Vec2::new(dx, dy)
}

/// Vertical offset of a section-web line end. Bounded by `wave.amplitude`.
pub fn ring_wave_offset(wave: RingWave, scroll: f32, scroll_speed: f32) -> f32 {
    (scroll * SECTION_WAVE_SCROLL_RATE * scroll_speed + wave.angle * SECTION_WAVE_ANGLE_RATE).sin()
        * wave.amplitude
}

/// Distortion parameters fixed for one layer in one frame.
#[derive(Clone, Copy, Debug)]
pub struct Distortion {
    scroll: f32,
    scroll_speed: f32,
    amplitude: f32,
    pointer: Option<Vec2>,
    field: PointerField,
    response: f32,
}

impl Distortion {
    pub fn new(
        scroll: ScrollState,
        pointer: PointerState,
        layer: &Layer,
        theme: &Theme,
        field: PointerField,
        hovered: bool,
    ) -> Self {
        Self {
            scroll: scroll.offset(),
            scroll_speed: layer.scroll_speed,
            amplitude: theme.wave_amplitude,
            pointer: hovered.then(|| pointer.position()),
            field,
            response: layer.pointer_response,
        }
    }

    pub fn apply(&self, original: Vec2) -> Vec2 {
        let waved = original + wave_offset(original, self.scroll, self.scroll_speed, self.amplitude);
        self.repel(original, waved)
    }

    /// Distort one end of a section-web line: its own vertical wave, then
    /// the pointer.
    pub fn apply_ring(&self, original: Vec2, wave: RingWave) -> Vec2 {
        let dy = ring_wave_offset(wave, self.scroll, self.scroll_speed);
        self.repel(original, original + Vec2::new(0.0, dy))
    }

    /// Both ends of `line`, using its per-end waves when it carries them.
    pub fn apply_line(&self, line: &WebConnection) -> (Vec2, Vec2) {
        match line.waves {
            Some([from, to]) => (
                self.apply_ring(line.from, from),
                self.apply_ring(line.to, to),
            ),
            None => (self.apply(line.from), self.apply(line.to)),
        }
    }

    fn repel(&self, original: Vec2, mut p: Vec2) -> Vec2 {
        if let Some(pointer) = self.pointer {
            p += pointer_displacement(p, pointer, &self.field, self.response);
        }
        if p.is_finite() {
            p
        } else {
            log::debug!("[distort] non-finite result at ({}, {}), using original", original.x, original.y);
            original
        }
    }
}

/// One-shot form of [`Distortion::apply`].
pub fn distort(
    original: Vec2,
    scroll: ScrollState,
    pointer: PointerState,
    layer: &Layer,
    theme: &Theme,
    field: PointerField,
    hovered: bool,
) -> Vec2 {
    Distortion::new(scroll, pointer, layer, theme, field, hovered).apply(original)
}
