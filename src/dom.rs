use vessel_core::Viewport;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Attach `handler` for `event` on `target` for the lifetime of the page.
pub fn listen<E: wasm_bindgen::convert::FromWasmAbi + 'static>(
    target: &web::EventTarget,
    event: &str,
    handler: impl FnMut(E) + 'static,
) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    if let Err(e) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
    {
        log::warn!("[dom] could not listen for {}: {:?}", event, e);
    }
    closure.forget();
}

/// Like [`listen`], registered as passive (or explicitly non-passive).
pub fn listen_with_passive<E: wasm_bindgen::convert::FromWasmAbi + 'static>(
    target: &web::EventTarget,
    event: &str,
    passive: bool,
    handler: impl FnMut(E) + 'static,
) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    let options = web::AddEventListenerOptions::new();
    options.set_passive(passive);
    if let Err(e) = target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        closure.as_ref().unchecked_ref(),
        &options,
    ) {
        log::warn!("[dom] could not listen for {}: {:?}", event, e);
    }
    closure.forget();
}

/// Every element matching `selector`, in document order.
pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::HtmlElement> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web::HtmlElement>().ok())
        .collect()
}

#[inline]
pub fn viewport(window: &web::Window) -> Viewport {
    let w = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(1.0);
    let h = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(1.0);
    Viewport::new(w as f32, h as f32)
}

#[inline]
pub fn scroll_y(window: &web::Window) -> f32 {
    window.scroll_y().unwrap_or(0.0) as f32
}

/// Document height minus the viewport height.
pub fn scrollable_height(window: &web::Window, document: &web::Document) -> f32 {
    let content = document.body().map(|b| b.scroll_height()).unwrap_or(0) as f32;
    content - viewport(window).height
}

pub fn set_style_var(element: &web::HtmlElement, name: &str, value: &str) {
    _ = element.style().set_property(name, value);
}

/// The document element as an `HtmlElement`, for styling variables.
pub fn root_element(document: &web::Document) -> Option<web::HtmlElement> {
    document
        .document_element()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

pub fn add_body_class(document: &web::Document, class: &str) {
    if let Some(body) = document.body() {
        _ = body.class_list().add_1(class);
    }
}

/// Match a canvas backing store to the viewport size.
pub fn sync_canvas_to_viewport(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let vp = viewport(&w);
        canvas.set_width((vp.width as u32).max(1));
        canvas.set_height((vp.height as u32).max(1));
    }
}

/// Match a canvas backing store to its container's CSS size times the
/// (capped) device pixel ratio.
pub fn sync_canvas_to_container(
    canvas: &web::HtmlCanvasElement,
    container: &web::HtmlElement,
    max_dpr: f64,
) -> (u32, u32) {
    let dpr = web::window()
        .map(|w| w.device_pixel_ratio())
        .unwrap_or(1.0)
        .min(max_dpr);
    let w_px = ((container.client_width() as f64 * dpr) as u32).max(1);
    let h_px = ((container.client_height() as f64 * dpr) as u32).max(1);
    canvas.set_width(w_px);
    canvas.set_height(h_px);
    (w_px, h_px)
}
