//! Drawable primitives produced for one frame.
//!
//! A [`GeometryFrame`] is recomputed every frame and never stored. Each
//! element carries an index-derived [`DrawKey`] so renderers that diff their
//! display lists can match elements across frames.

use crate::state::ViewportState;
use crate::theme::Rgba;
use fnv::FnvHashSet;
use glam::Vec2;
use smallvec::SmallVec;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum KeyKind {
    Radial,
    Circular,
    Node,
    Particle,
    Glyph,
    Core,
    Pointer,
}

impl KeyKind {
    pub fn as_str(self) -> &'static str {
        match self {
            KeyKind::Radial => "radial",
            KeyKind::Circular => "circular",
            KeyKind::Node => "node",
            KeyKind::Particle => "particle",
            KeyKind::Glyph => "glyph",
            KeyKind::Core => "core",
            KeyKind::Pointer => "pointer",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DrawKey {
    pub kind: KeyKind,
    pub layer: u8,
    pub ring: u16,
    pub index: u16,
}

impl DrawKey {
    pub const fn new(kind: KeyKind, layer: u8, ring: u16, index: u16) -> Self {
        Self {
            kind,
            layer,
            ring,
            index,
        }
    }

    /// Key for an element outside any layer (particles, glyphs, overlays).
    pub const fn free(kind: KeyKind, index: u16) -> Self {
        Self::new(kind, 0, 0, index)
    }
}

impl fmt::Display for DrawKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}-{}-{}",
            self.layer,
            self.kind.as_str(),
            self.ring,
            self.index
        )
    }
}

/// Stroke color source for web lines.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Ink {
    Solid(Rgba),
    /// Diagonal gradient over the viewport using the frame's `web_gradient`.
    WebGradient,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Paint {
    Fill(Rgba),
    Stroke { color: Rgba, width: f32 },
}

/// Quadratic Bézier segment: control point then end point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QuadSegment {
    pub ctrl: Vec2,
    pub to: Vec2,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    Line {
        from: Vec2,
        to: Vec2,
        ink: Ink,
        width: f32,
    },
    Circle {
        center: Vec2,
        radius: f32,
        paint: Paint,
    },
    Ellipse {
        center: Vec2,
        radii: Vec2,
        rotation: f32, // radians
        fill: Rgba,
    },
    /// Closed filled path of quadratic segments.
    QuadPath {
        start: Vec2,
        segments: SmallVec<[QuadSegment; 2]>,
        fill: Rgba,
    },
    /// Closed outline.
    Polygon {
        points: SmallVec<[Vec2; 4]>,
        stroke: Rgba,
        width: f32,
    },
    /// `count` evenly spaced spokes from `center`.
    Spokes {
        center: Vec2,
        length: f32,
        count: u8,
        rotation: f32, // radians
        stroke: Rgba,
        width: f32,
    },
}

impl Primitive {
    pub fn is_finite(&self) -> bool {
        match self {
            Primitive::Line { from, to, width, .. } => {
                from.is_finite() && to.is_finite() && width.is_finite()
            }
            Primitive::Circle { center, radius, .. } => center.is_finite() && radius.is_finite(),
            Primitive::Ellipse {
                center,
                radii,
                rotation,
                ..
            } => center.is_finite() && radii.is_finite() && rotation.is_finite(),
            Primitive::QuadPath {
                start, segments, ..
            } => {
                start.is_finite()
                    && segments
                        .iter()
                        .all(|s| s.ctrl.is_finite() && s.to.is_finite())
            }
            Primitive::Polygon { points, width, .. } => {
                width.is_finite() && points.iter().all(|p| p.is_finite())
            }
            Primitive::Spokes {
                center,
                length,
                rotation,
                ..
            } => center.is_finite() && length.is_finite() && rotation.is_finite(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Drawable {
    pub key: DrawKey,
    pub opacity: f32,
    /// Draw with the theme's soft glow.
    pub glow: bool,
    pub primitive: Primitive,
}

impl Drawable {
    pub fn new(key: DrawKey, opacity: f32, primitive: Primitive) -> Self {
        Self {
            key,
            opacity,
            glow: false,
            primitive,
        }
    }

    pub fn glowing(mut self) -> Self {
        self.glow = true;
        self
    }

    pub fn is_finite(&self) -> bool {
        self.opacity.is_finite() && self.primitive.is_finite()
    }
}

/// Ordered display list for one frame, back to front.
#[derive(Clone, Debug)]
pub struct GeometryFrame {
    pub viewport: ViewportState,
    pub glow_intensity: f32,
    /// Stops of the `Ink::WebGradient` stroke: start, middle, end.
    pub web_gradient: [Rgba; 3],
    pub drawables: Vec<Drawable>,
}

impl GeometryFrame {
    pub fn new(viewport: ViewportState, glow_intensity: f32, web_gradient: [Rgba; 3]) -> Self {
        Self {
            viewport: viewport.effective(),
            glow_intensity,
            web_gradient,
            drawables: Vec::new(),
        }
    }

    #[inline]
    pub fn push(&mut self, drawable: Drawable) {
        self.drawables.push(drawable);
    }

    pub fn len(&self) -> usize {
        self.drawables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drawables.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Drawable> {
        self.drawables.iter()
    }

    pub fn count(&self, kind: KeyKind) -> usize {
        self.drawables.iter().filter(|d| d.key.kind == kind).count()
    }

    pub fn is_finite(&self) -> bool {
        self.drawables.iter().all(Drawable::is_finite)
    }

    /// True when no two drawables share a key.
    pub fn keys_unique(&self) -> bool {
        let mut seen = FnvHashSet::default();
        self.drawables.iter().all(|d| seen.insert(d.key))
    }
}
