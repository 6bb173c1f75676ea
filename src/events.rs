use crate::dom;
use crate::input;
use backdrop_core::SceneDriver;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

struct Listener {
    target: web::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

/// Event listeners owned by a mounted component. Dropping the set removes
/// every listener from its target.
#[derive(Default)]
pub struct Listeners {
    entries: Vec<Listener>,
}

impl Listeners {
    pub fn listen(
        &mut self,
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> anyhow::Result<()> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        target
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        self.entries.push(Listener {
            target: target.clone(),
            event,
            closure,
        });
        Ok(())
    }

    pub fn clear(&mut self) {
        for l in self.entries.drain(..) {
            _ = l
                .target
                .remove_event_listener_with_callback(l.event, l.closure.as_ref().unchecked_ref());
        }
    }
}

impl Drop for Listeners {
    fn drop(&mut self) {
        self.clear();
    }
}

pub type SharedDriver = Rc<RefCell<Box<dyn SceneDriver>>>;

#[derive(Clone)]
pub struct InputWiring {
    pub window: web::Window,
    pub document: web::Document,
    pub canvas: web::HtmlCanvasElement,
    pub driver: SharedDriver,
    pub dpr: Rc<RefCell<f64>>,
}

/// Feed the current section bounds to the driver when the probe window
/// allows it.
pub fn probe_sections(w: &InputWiring) {
    let mut driver = w.driver.borrow_mut();
    if driver.kind() != backdrop_core::SceneKind::Section || !driver.should_probe_sections() {
        return;
    }
    let bounds = dom::section_bounds(&w.document);
    if driver.on_section_bounds(&bounds) {
        log::info!("[section] now {}", driver.theme().name);
    }
}

pub fn wire_input_handlers(w: &InputWiring) -> anyhow::Result<Listeners> {
    let mut listeners = Listeners::default();
    let window_target: &web::EventTarget = w.window.as_ref();

    let wr = w.clone();
    listeners.listen(window_target, "resize", move |_| {
        *wr.dpr.borrow_mut() = dom::sync_canvas_backing_size(&wr.canvas);
        let (width, height) = dom::viewport_size(&wr.window);
        wr.driver.borrow_mut().on_resize(width, height);
    })?;

    let ws = w.clone();
    listeners.listen(window_target, "scroll", move |_| {
        let offset = ws.window.scroll_y().unwrap_or(0.0) as f32;
        ws.driver.borrow_mut().on_scroll(offset);
        probe_sections(&ws);
    })?;

    let wm = w.clone();
    listeners.listen(window_target, "mousemove", move |ev| {
        let Some(ev) = ev.dyn_ref::<web::MouseEvent>() else {
            return;
        };
        let rect = wm.canvas.get_bounding_client_rect();
        let pos = input::client_to_canvas(
            Vec2::new(ev.client_x() as f32, ev.client_y() as f32),
            Vec2::new(rect.left() as f32, rect.top() as f32),
        );
        wm.driver.borrow_mut().on_pointer_move(pos.x, pos.y);
    })?;

    // hover is tracked on the whole page; the canvas itself ignores pointer events
    if let Some(root) = w.document.document_element() {
        let root_target: &web::EventTarget = root.as_ref();
        let we = w.clone();
        listeners.listen(root_target, "mouseenter", move |_| {
            we.driver.borrow_mut().on_pointer_enter();
        })?;
        let wl = w.clone();
        listeners.listen(root_target, "mouseleave", move |_| {
            wl.driver.borrow_mut().on_pointer_leave();
        })?;
    }

    Ok(listeners)
}
