#![cfg(target_arch = "wasm32")]
use backdrop_core::{boxed_driver, InstantClock, SceneConfig, ViewportState};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod contact;
mod dom;
mod events;
mod frame;
mod input;
mod render;

struct Mounted {
    // field order matters: stop the loop before the listeners go
    animation: frame::AnimationLoop,
    _listeners: events::Listeners,
}

/// A background mounted on a canvas. Unmounting (or dropping the handle)
/// removes every listener and cancels the animation frame.
#[wasm_bindgen]
pub struct BackdropHandle {
    inner: Option<Mounted>,
}

#[wasm_bindgen]
impl BackdropHandle {
    pub fn unmount(&mut self) {
        if let Some(m) = self.inner.take() {
            m.animation.stop();
            drop(m);
            log::info!("[mount] unmounted");
        }
    }

    #[wasm_bindgen(getter)]
    pub fn mounted(&self) -> bool {
        self.inner.is_some()
    }
}

impl Drop for BackdropHandle {
    fn drop(&mut self) {
        self.unmount();
    }
}

thread_local! {
    static AUTO_MOUNTED: RefCell<Option<BackdropHandle>> = const { RefCell::new(None) };
    static CONTACT: RefCell<Option<events::Listeners>> = const { RefCell::new(None) };
}

fn mount_canvas(canvas: web::HtmlCanvasElement) -> anyhow::Result<BackdropHandle> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el: &web::Element = canvas.as_ref();
    let options = input::mount_options(
        dom::data_attr(canvas_el, constants::MODE_ATTR).as_deref(),
        dom::data_attr(canvas_el, constants::SEED_ATTR).as_deref(),
    );
    let month = input::calendar_month(js_sys::Date::new_0().get_month());
    let (width, height) = dom::viewport_size(&window);
    let config = SceneConfig::for_kind(options.kind)
        .with_seed(options.seed)
        .with_viewport(ViewportState::new(width, height));

    let driver: events::SharedDriver = Rc::new(RefCell::new(boxed_driver(
        options.kind,
        month,
        InstantClock::default(),
        config,
    )));
    let dpr = Rc::new(RefCell::new(dom::sync_canvas_backing_size(&canvas)));

    let wiring = events::InputWiring {
        window,
        document,
        canvas: canvas.clone(),
        driver: driver.clone(),
        dpr: dpr.clone(),
    };
    let listeners = events::wire_input_handlers(&wiring)?;
    events::probe_sections(&wiring);

    let painter = render::CanvasPainter::new(&canvas)?;
    let animation = frame::start_loop(Rc::new(RefCell::new(frame::FrameContext {
        driver,
        painter,
        dpr,
    })));
    log::info!("[mount] {:?} (seed {})", options.kind, options.seed);
    Ok(BackdropHandle {
        inner: Some(Mounted {
            animation,
            _listeners: listeners,
        }),
    })
}

/// Mount a background on the canvas with the given id.
#[wasm_bindgen]
pub fn mount(canvas_id: &str) -> Result<BackdropHandle, JsValue> {
    let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
    dom::canvas_by_id(&document, canvas_id)
        .and_then(mount_canvas)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Tear down the background mounted at startup, if any.
#[wasm_bindgen]
pub fn unmount_default() {
    AUTO_MOUNTED.with(|m| m.borrow_mut().take());
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("backdrop-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    if document.get_element_by_id(constants::CANVAS_ID).is_some() {
        let handle = mount_canvas(dom::canvas_by_id(&document, constants::CANVAS_ID)?)?;
        AUTO_MOUNTED.with(|m| *m.borrow_mut() = Some(handle));
    } else {
        log::info!("[mount] no #{} on this page", constants::CANVAS_ID);
    }

    if let Some(listeners) = contact::wire_contact_form(&document)? {
        CONTACT.with(|c| *c.borrow_mut() = Some(listeners));
    }
    Ok(())
}
