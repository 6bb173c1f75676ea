// DOM hooks and canvas rendering tunables for the web front-end.

// Element ids looked up at startup
pub const CANVAS_ID: &str = "backdrop-canvas";
pub const CONTACT_FORM_ID: &str = "contact-form";

// Canvas data attributes
pub const MODE_ATTR: &str = "data-mode"; // "seasonal" | "section"
pub const SEED_ATTR: &str = "data-seed";

// Contact form data attributes
pub const ACCESS_KEY_ATTR: &str = "data-access-key";
pub const ENDPOINT_ATTR: &str = "data-endpoint"; // overrides the default relay
pub const STATUS_ATTR: &str = "data-status"; // written back for CSS to style

// Glow
pub const GLOW_BLUR_PX: f64 = 4.0; // shadow blur per unit of theme glow intensity
