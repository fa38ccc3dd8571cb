use crate::core::ripple::RippleEngine;
use crate::render;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Everything the per-frame tick needs: the ring simulation plus the surface
/// it draws on. The canvas is exclusively owned by this loop.
pub struct FrameContext {
    pub engine: Rc<RefCell<RippleEngine>>,
    pub canvas: web::HtmlCanvasElement,
    pub ctx: web::CanvasRenderingContext2d,
}

impl FrameContext {
    /// One animation tick: wipe the surface, then advance and stroke every
    /// ring. Expired rings are dropped by the engine in the same pass, after
    /// their final zero-opacity draw.
    pub fn frame(&mut self) {
        render::clear(&self.ctx, &self.canvas);
        let ctx = self.ctx.clone();
        self.engine
            .borrow_mut()
            .step(|ripple| render::stroke_ripple(&ctx, ripple));
    }
}

/// Drive `frame()` from requestAnimationFrame for the life of the page.
/// The closure re-schedules itself; there is no cancellation path.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
