/// One depth plane of a radial web.
///
/// Layers are declared once in the static tables below and never mutated.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layer {
    pub name: &'static str,
    pub ring_count: u32,
    /// Radius step between rings, in px.
    pub base_size: f32,
    pub stroke_width: f32,
    pub node_size: f32,
    pub opacity: f32,
    /// Multiplier on the scroll phase of the wave distortion.
    pub scroll_speed: f32,
    /// Multiplier on the pointer repulsion force.
    pub pointer_response: f32,
}

const FALLBACK_RING_COUNT: u32 = 3;
const FALLBACK_BASE_SIZE: f32 = 60.0;

impl Layer {
    pub fn sanitized(mut self) -> Self {
        if self.ring_count == 0 {
            log::warn!("[layer] {}: ring_count 0, using {}", self.name, FALLBACK_RING_COUNT);
            self.ring_count = FALLBACK_RING_COUNT;
        }
        if !self.base_size.is_finite() || self.base_size <= 0.0 {
            log::warn!("[layer] {}: bad base_size {}, using {}", self.name, self.base_size, FALLBACK_BASE_SIZE);
            self.base_size = FALLBACK_BASE_SIZE;
        }
        if !self.scroll_speed.is_finite() {
            self.scroll_speed = 1.0;
        }
        if !self.pointer_response.is_finite() {
            self.pointer_response = 1.0;
        }
        self
    }

    /// Nodes laid out on ring `ring` (1-based).
    #[inline]
    pub fn nodes_on_ring(ring: u32) -> u32 {
        ring * 4 + 2
    }

    pub fn node_count(&self) -> u32 {
        (1..=self.ring_count).map(Self::nodes_on_ring).sum()
    }
}

// Spider-web background, back to front.
pub const SPIDER_LAYERS: [Layer; 3] = [
    Layer {
        name: "background",
        ring_count: 4,
        base_size: 100.0,
        stroke_width: 1.0,
        node_size: 1.5,
        opacity: 0.15,
        scroll_speed: 0.2,
        pointer_response: 0.3,
    },
    Layer {
        name: "middle",
        ring_count: 3,
        base_size: 80.0,
        stroke_width: 1.5,
        node_size: 2.0,
        opacity: 0.25,
        scroll_speed: 0.6,
        pointer_response: 0.7,
    },
    Layer {
        name: "foreground",
        ring_count: 3,
        base_size: 60.0,
        stroke_width: 2.0,
        node_size: 2.5,
        opacity: 0.4,
        scroll_speed: 1.0,
        pointer_response: 1.0,
    },
];

// Section background, back to front.
pub const SECTION_LAYERS: [Layer; 3] = [
    Layer {
        name: "background",
        ring_count: 3,
        base_size: 120.0,
        stroke_width: 1.0,
        node_size: 3.0,
        opacity: 0.2,
        scroll_speed: 0.3,
        pointer_response: 1.0,
    },
    Layer {
        name: "middle",
        ring_count: 4,
        base_size: 90.0,
        stroke_width: 1.0,
        node_size: 3.0,
        opacity: 0.4,
        scroll_speed: 0.5,
        pointer_response: 1.0,
    },
    Layer {
        name: "foreground",
        ring_count: 5,
        base_size: 60.0,
        stroke_width: 2.0,
        node_size: 3.0,
        opacity: 0.6,
        scroll_speed: 0.8,
        pointer_response: 1.0,
    },
];
