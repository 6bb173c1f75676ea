//! Per-frame inputs threaded explicitly into the geometry functions.
//!
//! Nothing here reads window globals; the front-ends copy the latest
//! viewport, scroll and pointer values in on every event.

use crate::constants::{FALLBACK_VIEWPORT_HEIGHT, FALLBACK_VIEWPORT_WIDTH};
use glam::Vec2;

/// Current window dimensions in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportState {
    pub width: f32,
    pub height: f32,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            width: FALLBACK_VIEWPORT_WIDTH,
            height: FALLBACK_VIEWPORT_HEIGHT,
        }
    }
}

impl ViewportState {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Dimensions safe to divide by: any zero, negative or non-finite side is
    /// replaced by the fallback for that side.
    pub fn effective(&self) -> Self {
        let pick = |v: f32, fallback: f32| if v.is_finite() && v > 0.0 { v } else { fallback };
        Self {
            width: pick(self.width, FALLBACK_VIEWPORT_WIDTH),
            height: pick(self.height, FALLBACK_VIEWPORT_HEIGHT),
        }
    }

    pub fn center(&self) -> Vec2 {
        let e = self.effective();
        Vec2::new(e.width * 0.5, e.height * 0.5)
    }
}

/// Last observed pointer position.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
}

impl PointerState {
    #[inline]
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// Vertical scroll position.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollState {
    pub offset_y: f32,
}

impl ScrollState {
    pub fn new(offset_y: f32) -> Self {
        Self { offset_y }
    }

    /// Scroll offset with non-finite values treated as the top of the page.
    #[inline]
    pub fn offset(&self) -> f32 {
        if self.offset_y.is_finite() {
            self.offset_y
        } else {
            0.0
        }
    }
}

/// Everything a scene needs to compute one frame.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameInputs {
    pub viewport: ViewportState,
    pub scroll: ScrollState,
    pub pointer: PointerState,
    pub hovered: bool,
}
