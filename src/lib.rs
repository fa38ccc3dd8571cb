#![cfg(target_arch = "wasm32")]
use crate::core::ripple::{RippleEngine, RippleParams};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod content;
mod core;
mod dom;
mod events;
mod fitter;
mod frame;
mod input;
mod render;

// Keep the overlay canvas backing store matched to the viewport
fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("ripplefit starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let container = document
        .get_element_by_id(constants::CONTENT_CONTAINER_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::CONTENT_CONTAINER_ID))?;

    let canvas_el = document
        .get_element_by_id(constants::RIPPLE_CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::RIPPLE_CANVAS_ID))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    let ctx = canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?
        .ok_or_else(|| anyhow::anyhow!("no 2d context"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    wire_canvas_resize(&canvas);

    // Fragment load runs concurrently with the animation wiring; a failed
    // load only swaps in the fallback markup and never touches the canvas.
    spawn_local(content::load_into(container));

    let engine = Rc::new(RefCell::new(RippleEngine::new(RippleParams::default())));
    events::wire_click_ripples(&canvas, engine.clone());

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        engine,
        canvas,
        ctx,
    }));
    frame::start_loop(frame_ctx);

    Ok(())
}
