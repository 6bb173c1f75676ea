pub mod constants;
pub mod contact;
pub mod distort;
pub mod driver;
pub mod error;
pub mod frame;
pub mod layer;
pub mod particles;
pub mod scene;
pub mod schedule;
pub mod state;
pub mod theme;
pub mod web;

pub use contact::{ContactForm, ContactPayload, SubmitStatus};
pub use distort::{distort, pointer_force, PointerField};
pub use driver::{boxed_driver, Backdrop, SceneConfig, SceneDriver, SeasonalBackdrop, SectionBackdrop};
pub use error::{ContactError, GeometryError};
pub use frame::*;
pub use layer::{Layer, SECTION_LAYERS, SPIDER_LAYERS};
pub use particles::{section_glyphs, seeded_rng, Particle, ParticleField};
pub use scene::{compose_frame, SceneInputs, SceneKind};
pub use schedule::*;
pub use state::*;
pub use theme::*;
pub use web::{
    generate_section_layer, generate_web_layer, section_nodes_on_ring, RingWave, WebConnection,
    WebLayout, WebNode,
};
