use glam::Vec2;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Current viewport size in CSS px, or `None` outside a browser context.
pub fn viewport_px() -> Option<Vec2> {
    let window = web::window()?;
    let vw = window.inner_width().ok()?.as_f64()?;
    let vh = window.inner_height().ok()?.as_f64()?;
    Some(Vec2::new(vw as f32, vh as f32))
}

/// Size the overlay canvas backing store to cover the whole viewport.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(vp) = viewport_px() {
        canvas.set_width((vp.x as u32).max(1));
        canvas.set_height((vp.y as u32).max(1));
    }
}
