// Scale/center geometry for fitting a content block inside the viewport.
// Host tests `include!` this file, so it must not carry inner attributes or
// crate-relative imports.

use glam::Vec2;

/// Uniform scale plus top-left offset that centers the scaled box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FitTransform {
    pub scale: f32,
    pub offset: Vec2,
}

/// Compute the transform that fits `content` (natural, unscaled px) inside
/// `viewport` without cropping, preserving aspect ratio.
///
/// The smaller axis ratio is chosen, so the scaled bounding box never
/// exceeds the viewport on either axis (it may letterbox). Returns `None`
/// when either content dimension is not strictly positive, which callers
/// treat as "no content loaded yet" and skip fitting.
pub fn fit_transform(content: Vec2, viewport: Vec2) -> Option<FitTransform> {
    if content.x <= 0.0 || content.y <= 0.0 {
        return None;
    }
    let scale = (viewport.x / content.x).min(viewport.y / content.y);
    let offset = (viewport - content * scale) * 0.5;
    Some(FitTransform { scale, offset })
}
