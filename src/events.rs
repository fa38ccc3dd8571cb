use crate::core::ripple::RippleEngine;
use crate::input;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Spawn a ring on every click over the overlay canvas.
pub fn wire_click_ripples(canvas: &web::HtmlCanvasElement, engine: Rc<RefCell<RippleEngine>>) {
    let canvas_for_click = canvas.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let pos = input::mouse_canvas_px(&ev, &canvas_for_click);
        if pos.x.is_finite() && pos.y.is_finite() {
            log::info!("[click] ripple at ({:.0}, {:.0})", pos.x, pos.y);
            engine.borrow_mut().spawn(pos);
        }
    }) as Box<dyn FnMut(_)>);
    _ = canvas.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}
