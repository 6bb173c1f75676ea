use backdrop_core::{Section, SectionBounds};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Window inner size in CSS pixels, or zero when unavailable.
pub fn viewport_size(window: &web::Window) -> (f32, f32) {
    let read = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32
    };
    (read(window.inner_width()), read(window.inner_height()))
}

/// Match the canvas backing store to the window size times the device pixel
/// ratio. Returns the ratio so drawing can scale CSS pixels onto it.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) -> f64 {
    let Some(w) = web::window() else {
        return 1.0;
    };
    let dpr = w.device_pixel_ratio();
    let (css_w, css_h) = viewport_size(&w);
    let (w_px, h_px) = crate::input::backing_size(css_w, css_h, dpr);
    canvas.set_width(w_px);
    canvas.set_height(h_px);
    crate::input::effective_dpr(dpr)
}

pub fn data_attr(el: &web::Element, name: &str) -> Option<String> {
    el.get_attribute(name).filter(|v| !v.trim().is_empty())
}

/// Viewport-relative bounds of every page section present in the document,
/// in page order.
pub fn section_bounds(document: &web::Document) -> Vec<SectionBounds> {
    Section::ALL
        .iter()
        .filter_map(|&section| {
            let el = document.get_element_by_id(section.id())?;
            let rect = el.get_bounding_client_rect();
            Some(SectionBounds {
                section,
                top: rect.top() as f32,
                bottom: rect.bottom() as f32,
            })
        })
        .collect()
}

pub fn canvas_by_id(document: &web::Document, id: &str) -> anyhow::Result<web::HtmlCanvasElement> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{id}"))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))
}
