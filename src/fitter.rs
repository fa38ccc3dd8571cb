//! DOM side of the viewport fitter: measure the injected content's natural
//! size, run the pure geometry, and write the resulting CSS transform back.

use crate::core::fit::{fit_transform, FitTransform};
use crate::dom;
use glam::Vec2;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Fit and center the container's first child inside the current viewport.
///
/// Any previous scale is reset to identity before measuring so
/// `offsetWidth`/`offsetHeight` report the natural size rather than the
/// previously applied one. A missing or zero-sized child is a no-op.
pub fn refit(container: &web::Element) {
    let Some(child) = container.first_element_child() else {
        return;
    };
    let Some(content) = child.dyn_ref::<web::HtmlElement>() else {
        return;
    };
    let style = content.style();
    _ = style.set_property("transform", "scale(1)");
    let natural = Vec2::new(
        content.offset_width() as f32,
        content.offset_height() as f32,
    );
    let Some(viewport) = dom::viewport_px() else {
        return;
    };
    let Some(transform) = fit_transform(natural, viewport) else {
        return;
    };
    apply(&style, transform);
}

fn apply(style: &web::CssStyleDeclaration, t: FitTransform) {
    _ = style.set_property("transform-origin", "top left");
    _ = style.set_property("transform", &format!("scale({})", t.scale));
    _ = style.set_property("left", &format!("{}px", t.offset.x));
    _ = style.set_property("top", &format!("{}px", t.offset.y));
}

/// Recompute the fit on every window resize. Recomputation is cheap and
/// idempotent, so no debouncing.
pub fn wire_refit_on_resize(container: &web::Element) {
    let container_resize = container.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        refit(&container_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}
