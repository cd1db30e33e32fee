use crate::frame::{dispatch, App};
use glam::DVec2;
use starwave_core::ClickOutcome;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Forward every document click to the engine. The listener is passive and
/// owns the app for the lifetime of the page.
pub fn wire_click(document: &web::Document, app: Rc<RefCell<App>>) {
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let origin = DVec2::new(ev.client_x() as f64, ev.client_y() as f64);
        dispatch(&app, |a| {
            if let ClickOutcome::DoubleClick { .. } = a.click(origin) {
                log::info!("[click] double click -> gallery");
            }
        });
    }) as Box<dyn FnMut(_)>);

    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(true);
    _ = document.add_event_listener_with_callback_and_add_event_listener_options(
        "click",
        closure.as_ref().unchecked_ref(),
        &opts,
    );
    closure.forget();
}
