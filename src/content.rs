//! Fragment loading: fetch `content.html`, inject it, and hand the result to
//! the fitter. Load failure substitutes a static fallback message and is the
//! only recoverable error on the page.

use crate::constants::{CONTENT_LOAD_ERROR_HTML, CONTENT_URL};
use crate::fitter;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// Fetch the fragment and inject it into `container`, then fit it once and
/// keep it fitted across resizes. On any failure the container gets the
/// fallback markup instead; no retry, and no fit is attempted (there is no
/// content child worth measuring).
pub async fn load_into(container: web::Element) {
    match fetch_fragment(CONTENT_URL).await {
        Ok(html) => {
            container.set_inner_html(&html);
            log::info!("[content] loaded {} ({} bytes)", CONTENT_URL, html.len());
            fitter::refit(&container);
            fitter::wire_refit_on_resize(&container);
        }
        Err(e) => {
            log::error!("[content] load failed: {e:?}");
            container.set_inner_html(CONTENT_LOAD_ERROR_HTML);
        }
    }
}

async fn fetch_fragment(url: &str) -> anyhow::Result<String> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let resp_value = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let resp: web::Response = resp_value
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    if !resp.ok() {
        anyhow::bail!("fetch {} returned status {}", url, resp.status());
    }
    let text_promise: js_sys::Promise = resp.text().map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let text = JsFuture::from(text_promise)
        .await
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    text.as_string()
        .ok_or_else(|| anyhow::anyhow!("response body was not text"))
}
