use crate::constants::{ACCESS_KEY_ATTR, CONTACT_FORM_ID, ENDPOINT_ATTR, STATUS_ATTR};
use crate::dom;
use crate::events::Listeners;
use crate::input;
use backdrop_core::constants::{CONTACT_ENDPOINT, CONTACT_SUCCESS_DISPLAY_MS};
use backdrop_core::{
    Clock, ContactError, ContactForm, ContactPayload, InstantClock, SubmitStatus,
};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

#[derive(Clone)]
struct FormWiring {
    form: web::HtmlFormElement,
    state: Rc<RefCell<ContactForm>>,
    clock: Rc<InstantClock>,
    access_key: String,
    endpoint: String,
}

fn field_element(form: &web::HtmlFormElement, name: &str) -> Option<web::Element> {
    form.query_selector(&format!("[name=\"{name}\"]")).ok().flatten()
}

fn read_field(form: &web::HtmlFormElement, name: &str) -> String {
    match field_element(form, name) {
        Some(el) => {
            if let Some(input) = el.dyn_ref::<web::HtmlInputElement>() {
                input.value()
            } else if let Some(area) = el.dyn_ref::<web::HtmlTextAreaElement>() {
                area.value()
            } else {
                String::new()
            }
        }
        None => String::new(),
    }
}

fn clear_field(form: &web::HtmlFormElement, name: &str) {
    if let Some(el) = field_element(form, name) {
        if let Some(input) = el.dyn_ref::<web::HtmlInputElement>() {
            input.set_value("");
        } else if let Some(area) = el.dyn_ref::<web::HtmlTextAreaElement>() {
            area.set_value("");
        }
    }
}

fn show_status(w: &FormWiring) {
    let state = w.state.borrow();
    let attr = input::status_attr(state.status(), state.is_submitting());
    _ = w.form.set_attribute(STATUS_ATTR, attr);
}

fn request_body(payload: &ContactPayload) -> Result<String, JsValue> {
    let obj = js_sys::Object::new();
    for (k, v) in payload.fields() {
        js_sys::Reflect::set(&obj, &JsValue::from_str(k), &JsValue::from_str(v))?;
    }
    js_sys::JSON::stringify(&obj)?
        .as_string()
        .ok_or_else(|| JsValue::from_str("unserializable payload"))
}

async fn post(endpoint: &str, payload: &ContactPayload) -> Result<(), ContactError> {
    let transport = |e: JsValue| ContactError::Transport(format!("{:?}", e));
    let window = web::window().ok_or_else(|| ContactError::Transport("no window".into()))?;

    let headers = web::Headers::new().map_err(transport)?;
    headers.set("Content-Type", "application/json").map_err(transport)?;
    headers.set("Accept", "application/json").map_err(transport)?;
    let init = web::RequestInit::new();
    init.set_method("POST");
    init.set_headers(&headers);
    init.set_body(&JsValue::from_str(&request_body(payload).map_err(transport)?));

    let request = web::Request::new_with_str_and_init(endpoint, &init).map_err(transport)?;
    let response: web::Response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(transport)?
        .dyn_into()
        .map_err(transport)?;
    let json = JsFuture::from(response.json().map_err(transport)?)
        .await
        .map_err(transport)?;
    let success = js_sys::Reflect::get(&json, &JsValue::from_str("success"))
        .ok()
        .and_then(|v| v.as_bool());
    input::relay_outcome(success)
}

fn schedule_reset(w: &FormWiring, since: Duration) {
    let Some(window) = web::window() else {
        return;
    };
    let wr = w.clone();
    // the timer is the authority here; a coarse clock may read just under 5 s
    let cb = Closure::once_into_js(move || {
        wr.state.borrow_mut().expire_success(since);
        show_status(&wr);
    });
    _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        cb.unchecked_ref(),
        CONTACT_SUCCESS_DISPLAY_MS as i32,
    );
}

fn submit(w: &FormWiring) {
    let payload = {
        let mut state = w.state.borrow_mut();
        state.name = read_field(&w.form, "name");
        state.email = read_field(&w.form, "email");
        state.message = read_field(&w.form, "message");
        match state.begin_submit(&w.access_key) {
            Ok(p) => p,
            Err(e) => {
                log::warn!("[contact] not sent: {e}");
                return;
            }
        }
    };
    show_status(w);

    let w = w.clone();
    spawn_local(async move {
        let result = post(&w.endpoint, &payload).await;
        let now = w.clock.now();
        w.state.borrow_mut().finish(result, now);
        let status = w.state.borrow().status();
        if let SubmitStatus::Success { since } = status {
            for name in ["name", "email", "message"] {
                clear_field(&w.form, name);
            }
            schedule_reset(&w, since);
        }
        show_status(&w);
    });
}

/// Hook the contact form if the page has one.
pub fn wire_contact_form(document: &web::Document) -> anyhow::Result<Option<Listeners>> {
    let Some(el) = document.get_element_by_id(CONTACT_FORM_ID) else {
        return Ok(None);
    };
    let form: web::HtmlFormElement = el.dyn_into().map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let form_el: &web::Element = form.as_ref();
    let access_key = dom::data_attr(form_el, ACCESS_KEY_ATTR).unwrap_or_default();
    if access_key.is_empty() {
        log::warn!("[contact] form has no {ACCESS_KEY_ATTR}; the relay will reject it");
    }
    let endpoint =
        dom::data_attr(form_el, ENDPOINT_ATTR).unwrap_or_else(|| CONTACT_ENDPOINT.to_string());

    let wiring = FormWiring {
        form: form.clone(),
        state: Rc::new(RefCell::new(ContactForm::default())),
        clock: Rc::new(InstantClock::default()),
        access_key,
        endpoint,
    };
    show_status(&wiring);

    let mut listeners = Listeners::default();
    let ws = wiring.clone();
    listeners.listen(form.as_ref(), "submit", move |ev| {
        ev.prevent_default();
        submit(&ws);
    })?;
    log::info!("[contact] form wired");
    Ok(Some(listeners))
}
