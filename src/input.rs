// Pure helpers shared by the DOM wiring; no browser calls so they can be
// tested on the host.

use backdrop_core::constants::DEFAULT_SCENE_SEED;
use backdrop_core::{ContactError, SceneKind, SubmitStatus};
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MountOptions {
    pub kind: SceneKind,
    pub seed: u64,
}

impl Default for MountOptions {
    fn default() -> Self {
        Self {
            kind: SceneKind::SpiderWeb,
            seed: DEFAULT_SCENE_SEED,
        }
    }
}

/// Read mount options from the canvas data attributes. Unknown or malformed
/// values fall back to the defaults.
pub fn mount_options(mode: Option<&str>, seed: Option<&str>) -> MountOptions {
    let defaults = MountOptions::default();
    let kind = match mode.map(str::trim) {
        None | Some("") => defaults.kind,
        Some(m) => SceneKind::parse(m).unwrap_or_else(|| {
            log::warn!("[mount] unknown mode {m:?}, using seasonal");
            defaults.kind
        }),
    };
    let seed = match seed.map(str::trim) {
        None | Some("") => defaults.seed,
        Some(s) => s.parse().unwrap_or_else(|_| {
            log::warn!("[mount] bad seed {s:?}");
            defaults.seed
        }),
    };
    MountOptions { kind, seed }
}

/// JavaScript months count from 0.
#[inline]
pub fn calendar_month(js_month: u32) -> u32 {
    js_month.min(11) + 1
}

#[inline]
pub fn effective_dpr(dpr: f64) -> f64 {
    if dpr.is_finite() && dpr > 0.0 {
        dpr
    } else {
        1.0
    }
}

/// Backing-store size for a canvas covering `css_w` x `css_h` CSS pixels.
pub fn backing_size(css_w: f32, css_h: f32, dpr: f64) -> (u32, u32) {
    let dpr = effective_dpr(dpr);
    let px = |v: f32| {
        if v.is_finite() && v > 0.0 {
            ((v as f64 * dpr) as u32).max(1)
        } else {
            1
        }
    };
    (px(css_w), px(css_h))
}

/// Pointer position relative to the canvas's top-left corner, in CSS pixels.
#[inline]
pub fn client_to_canvas(client: Vec2, canvas_origin: Vec2) -> Vec2 {
    client - canvas_origin
}

/// Value written to the form's status attribute.
pub fn status_attr(status: SubmitStatus, submitting: bool) -> &'static str {
    if submitting {
        return "submitting";
    }
    match status {
        SubmitStatus::Idle => "idle",
        SubmitStatus::Success { .. } => "success",
        SubmitStatus::Error => "error",
    }
}

/// Interpret the relay's `success` field.
pub fn relay_outcome(success: Option<bool>) -> Result<(), ContactError> {
    match success {
        Some(true) => Ok(()),
        _ => Err(ContactError::Rejected),
    }
}
