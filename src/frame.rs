use crate::events::SharedDriver;
use crate::render::CanvasPainter;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub driver: SharedDriver,
    pub painter: CanvasPainter,
    pub dpr: Rc<RefCell<f64>>,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let frame = {
            let mut driver = self.driver.borrow_mut();
            if driver.tick() {
                log::info!("[theme] now {}", driver.theme().name);
            }
            driver.frame()
        };
        let dpr = *self.dpr.borrow();
        self.painter.paint(&frame, dpr);
    }
}

type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Handle on a running requestAnimationFrame loop.
pub struct AnimationLoop {
    tick: TickSlot,
    request_id: Rc<Cell<Option<i32>>>,
}

impl AnimationLoop {
    /// Cancel the pending frame and release the loop closure.
    pub fn stop(&self) {
        if let (Some(id), Some(w)) = (self.request_id.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
        // dropping the closure breaks its self-reference
        self.tick.borrow_mut().take();
    }
}

impl Drop for AnimationLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

fn request(tick: &TickSlot, request_id: &Cell<Option<i32>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        request_id.set(w.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> AnimationLoop {
    let tick: TickSlot = Rc::new(RefCell::new(None));
    let request_id = Rc::new(Cell::new(None));

    let tick_clone = tick.clone();
    let request_clone = request_id.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        request_clone.set(None);
        frame_ctx.borrow_mut().frame();
        request(&tick_clone, &request_clone);
    }) as Box<dyn FnMut()>));

    request(&tick, &request_id);
    AnimationLoop { tick, request_id }
}
