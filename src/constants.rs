// Fixed page tuning constants and DOM ids. There is deliberately no runtime
// configuration surface beyond these.

// DOM ids expected in the host page
pub const CONTENT_CONTAINER_ID: &str = "app";
pub const RIPPLE_CANVAS_ID: &str = "ripple-canvas";

// Content fragment
pub const CONTENT_URL: &str = "content.html"; // fetched relative to the page
pub const CONTENT_LOAD_ERROR_HTML: &str = "<p>Unable to load content.</p>";

// Ring stroke appearance; opacity comes from each ring's `life`
pub const RIPPLE_STROKE_WIDTH: f64 = 5.0; // px
pub const RIPPLE_STROKE_RGB: [u8; 3] = [255, 255, 255];
