//! Radial web layouts for one layer.
//!
//! The layout depends only on the layer and the viewport; scroll and pointer
//! distortion are applied afterwards to the retained original coordinates.
//! Spider webs use `4r + 2` nodes per ring with proportional-index spokes;
//! section webs use `6r` nodes per ring with spokes at a constant angle.

use crate::constants::{SECTION_SEGMENTS_PER_RING, SECTION_SPOKE_WAVE_AMPLITUDE, SECTION_WAVE_AMPLITUDE};
use crate::error::GeometryError;
use crate::frame::{DrawKey, KeyKind};
use crate::layer::Layer;
use crate::state::ViewportState;
use glam::Vec2;
use std::f32::consts::TAU;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WebNode {
    pub key: DrawKey,
    pub ring: u32,
    pub index: u32,
    pub original: Vec2,
}

/// Vertical wave carried by one end of a section-web line: phase angle and
/// height in px.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RingWave {
    pub angle: f32,
    pub amplitude: f32,
}

impl RingWave {
    pub const FLAT: RingWave = RingWave {
        angle: 0.0,
        amplitude: 0.0,
    };
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WebConnection {
    pub key: DrawKey,
    pub from: Vec2,
    pub to: Vec2,
    /// Per-end waves for section webs; `None` means the positional wave.
    pub waves: Option<[RingWave; 2]>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct WebLayout {
    pub nodes: Vec<WebNode>,
    pub connections: Vec<WebConnection>,
}

impl WebLayout {
    pub fn nodes_on_ring(&self, ring: u32) -> usize {
        self.nodes.iter().filter(|n| n.ring == ring).count()
    }
}

/// Angle of the ring `ring - 1` node that node `i` of ring `ring` connects to.
///
/// Uses a proportional index over `(ring - 1) * 4` slots rather than the
/// previous ring's actual `4(ring - 1) + 2` nodes, so spokes come out
/// slightly skewed.
pub fn previous_ring_angle(ring: u32, i: u32) -> f32 {
    debug_assert!(ring > 1);
    let n = Layer::nodes_on_ring(ring);
    let slots = (ring - 1) * 4;
    let slot = (i * slots) / n;
    slot as f32 / slots as f32 * TAU
}

/// Nodes laid out on ring `ring` (1-based) of a section web.
#[inline]
pub fn section_nodes_on_ring(ring: u32) -> u32 {
    ring * SECTION_SEGMENTS_PER_RING
}

#[inline]
fn on_ring(center: Vec2, radius: f32, angle: f32) -> Vec2 {
    center + Vec2::new(angle.cos(), angle.sin()) * radius
}

fn checked_connection(key: DrawKey, from: Vec2, to: Vec2) -> Result<WebConnection, GeometryError> {
    if from.is_finite() && to.is_finite() {
        Ok(WebConnection {
            key,
            from,
            to,
            waves: None,
        })
    } else {
        Err(GeometryError::NonFinite { key })
    }
}

fn push_node(out: &mut WebLayout, key: DrawKey, ring: u32, index: u32, pos: Vec2) {
    if pos.is_finite() {
        out.nodes.push(WebNode {
            key,
            ring,
            index,
            original: pos,
        });
    } else {
        log::warn!("[web] skipping node {key}: non-finite position");
    }
}

fn push_connection(out: &mut WebLayout, connection: Result<WebConnection, GeometryError>) {
    match connection {
        Ok(c) => out.connections.push(c),
        Err(e) => log::warn!("[web] skipping connection: {e}"),
    }
}

/// Lay out the nodes and connections of `layer` around the viewport center.
///
/// Ring `r` (1-based) holds `4r + 2` nodes at radius `r * base_size`. Ring 1
/// connects radially to the center, outer rings to their proportional-index
/// parent, and every even-indexed node to its clockwise neighbour.
pub fn generate_web_layer(layer: &Layer, layer_index: u8, viewport: ViewportState) -> WebLayout {
    let layer = layer.sanitized();
    let center = viewport.center();
    let total = layer.node_count() as usize;
    let mut out = WebLayout {
        nodes: Vec::with_capacity(total),
        connections: Vec::with_capacity(total + total / 2),
    };

    for ring in 1..=layer.ring_count {
        let radius = ring as f32 * layer.base_size;
        let n = Layer::nodes_on_ring(ring);

        for i in 0..n {
            let angle = i as f32 / n as f32 * TAU;
            let pos = on_ring(center, radius, angle);
            let node_key = DrawKey::new(KeyKind::Node, layer_index, ring as u16, i as u16);
            push_node(&mut out, node_key, ring, i, pos);

            let radial_key = DrawKey::new(KeyKind::Radial, layer_index, ring as u16, i as u16);
            let parent = if ring == 1 {
                center
            } else {
                on_ring(
                    center,
                    (ring - 1) as f32 * layer.base_size,
                    previous_ring_angle(ring, i),
                )
            };
            push_connection(&mut out, checked_connection(radial_key, parent, pos));

            if i % 2 == 0 {
                let next_angle = ((i + 1) % n) as f32 / n as f32 * TAU;
                let next = on_ring(center, radius, next_angle);
                let circular_key =
                    DrawKey::new(KeyKind::Circular, layer_index, ring as u16, i as u16);
                push_connection(&mut out, checked_connection(circular_key, pos, next));
            }
        }
    }

    log::trace!(
        "[web] layer {} nodes={} connections={}",
        layer.name,
        out.nodes.len(),
        out.connections.len()
    );
    out
}

/// Lay out a section-background web for `layer`.
///
/// Ring `r` holds `6r` nodes. Every spoke runs from the previous ring (the
/// center for ring 1) to its node along the same angle, and every
/// even-indexed node links to its clockwise neighbour. Line ends carry a
/// [`RingWave`]: full height on ring nodes, a lower one on the inner end of
/// outer spokes, none at the center. Connections are ordered ring by ring,
/// spoke before circular edge.
pub fn generate_section_layer(layer: &Layer, layer_index: u8, viewport: ViewportState) -> WebLayout {
    let layer = layer.sanitized();
    let center = viewport.center();
    let total: usize = (1..=layer.ring_count)
        .map(|r| section_nodes_on_ring(r) as usize)
        .sum();
    let mut out = WebLayout {
        nodes: Vec::with_capacity(total),
        connections: Vec::with_capacity(total + total / 2),
    };

    for ring in 1..=layer.ring_count {
        let radius = ring as f32 * layer.base_size;
        let n = section_nodes_on_ring(ring);

        for i in 0..n {
            let angle = i as f32 / n as f32 * TAU;
            let pos = on_ring(center, radius, angle);
            let node_key = DrawKey::new(KeyKind::Node, layer_index, ring as u16, i as u16);
            push_node(&mut out, node_key, ring, i, pos);

            let outer = RingWave {
                angle,
                amplitude: SECTION_WAVE_AMPLITUDE,
            };
            let (inner, inner_wave) = if ring == 1 {
                (center, RingWave::FLAT)
            } else {
                (
                    on_ring(center, (ring - 1) as f32 * layer.base_size, angle),
                    RingWave {
                        angle,
                        amplitude: SECTION_SPOKE_WAVE_AMPLITUDE,
                    },
                )
            };
            let radial_key = DrawKey::new(KeyKind::Radial, layer_index, ring as u16, i as u16);
            push_connection(
                &mut out,
                checked_connection(radial_key, inner, pos).map(|mut c| {
                    c.waves = Some([inner_wave, outer]);
                    c
                }),
            );

            if i % 2 == 0 {
                let next_angle = ((i + 1) % n) as f32 / n as f32 * TAU;
                let next = on_ring(center, radius, next_angle);
                let next_wave = RingWave {
                    angle: next_angle,
                    amplitude: SECTION_WAVE_AMPLITUDE,
                };
                let circular_key =
                    DrawKey::new(KeyKind::Circular, layer_index, ring as u16, i as u16);
                push_connection(
                    &mut out,
                    checked_connection(circular_key, pos, next).map(|mut c| {
                        c.waves = Some([outer, next_wave]);
                        c
                    }),
                );
            }
        }
    }

    log::trace!(
        "[web] section layer {} nodes={} connections={}",
        layer.name,
        out.nodes.len(),
        out.connections.len()
    );
    out
}
