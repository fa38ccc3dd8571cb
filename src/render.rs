use crate::constants::{RIPPLE_STROKE_RGB, RIPPLE_STROKE_WIDTH};
use crate::core::ripple::Ripple;
use web_sys as web;

/// Wipe the previous frame so rings never leave trails.
pub fn clear(ctx: &web::CanvasRenderingContext2d, canvas: &web::HtmlCanvasElement) {
    ctx.clear_rect(0.0, 0.0, canvas.width() as f64, canvas.height() as f64);
}

/// Stroke one ring: circle outline at its center, opacity from `life`.
pub fn stroke_ripple(ctx: &web::CanvasRenderingContext2d, ripple: &Ripple) {
    ctx.begin_path();
    if ctx
        .arc(
            ripple.center.x as f64,
            ripple.center.y as f64,
            ripple.radius as f64,
            0.0,
            std::f64::consts::TAU,
        )
        .is_err()
    {
        return;
    }
    let [r, g, b] = RIPPLE_STROKE_RGB;
    ctx.set_stroke_style_str(&format!("rgba({}, {}, {}, {})", r, g, b, ripple.life));
    ctx.set_line_width(RIPPLE_STROKE_WIDTH);
    ctx.stroke();
}
