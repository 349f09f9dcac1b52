use crate::constants::{ACCENT_VAR, DYE_CANVAS_ID, PARALLAX_SELECTOR, TINT_VAR};
use crate::dom;
use vessel_core::{parallax_offset, AmbientStyle, DyeGradient, PageHost, DEFAULT_PARALLAX_DEPTH};
use wasm_bindgen::JsCast;
use web_sys as web;

struct DyeCanvas {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

struct ParallaxLayer {
    element: web::HtmlElement,
    depth: f32,
}

/// The live page as seen by the scheduler.
pub struct DomHost {
    window: web::Window,
    document: web::Document,
    root: Option<web::HtmlElement>,
    dye: Option<DyeCanvas>,
    parallax: Vec<ParallaxLayer>,
}

impl DomHost {
    pub fn new(window: web::Window, document: web::Document) -> Self {
        let dye = find_dye_canvas(&document);
        if dye.is_none() {
            log::warn!("[dye] no #{} 2d canvas; dye field disabled", DYE_CANVAS_ID);
        }
        let parallax = dom::query_all(&document, PARALLAX_SELECTOR)
            .into_iter()
            .map(|element| {
                let depth = element
                    .dataset()
                    .get("depth")
                    .and_then(|d| d.trim().parse::<f32>().ok())
                    .unwrap_or(DEFAULT_PARALLAX_DEPTH);
                ParallaxLayer { element, depth }
            })
            .collect();
        let host = Self {
            root: dom::root_element(&document),
            window,
            document,
            dye,
            parallax,
        };
        if let Some(d) = &host.dye {
            dom::sync_canvas_to_viewport(&d.canvas);
        }
        host
    }

    /// Set `--accent` directly, e.g. to the time-of-day color at startup.
    pub fn set_accent(&self, value: &str) {
        if let Some(root) = &self.root {
            dom::set_style_var(root, ACCENT_VAR, value);
        }
    }
}

fn find_dye_canvas(document: &web::Document) -> Option<DyeCanvas> {
    let canvas = document
        .get_element_by_id(DYE_CANVAS_ID)?
        .dyn_into::<web::HtmlCanvasElement>()
        .ok()?;
    let ctx = canvas
        .get_context("2d")
        .ok()
        .flatten()?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .ok()?;
    Some(DyeCanvas { canvas, ctx })
}

impl PageHost for DomHost {
    fn scrollable_height(&self) -> f32 {
        dom::scrollable_height(&self.window, &self.document)
    }

    fn dye_surface_size(&self) -> Option<(f32, f32)> {
        self.dye
            .as_ref()
            .map(|d| (d.canvas.width() as f32, d.canvas.height() as f32))
    }

    fn paint_dye(&mut self, gradient: &DyeGradient) {
        let Some(DyeCanvas { canvas, ctx }) = &self.dye else {
            return;
        };
        let (w, h) = (canvas.width() as f64, canvas.height() as f64);
        ctx.clear_rect(0.0, 0.0, w, h);
        let (x, y) = (gradient.center.x as f64, gradient.center.y as f64);
        let grad = match ctx.create_radial_gradient(x, y, 0.0, x, y, gradient.radius.max(0.0) as f64) {
            Ok(g) => g,
            Err(e) => {
                log::error!("[dye] gradient error: {:?}", e);
                return;
            }
        };
        for stop in &gradient.stops {
            _ = grad.add_color_stop(stop.offset, &stop.color);
        }
        ctx.set_fill_style_canvas_gradient(&grad);
        ctx.fill_rect(0.0, 0.0, w, h);
    }

    fn publish_ambient(&mut self, style: &AmbientStyle) {
        if let Some(root) = &self.root {
            dom::set_style_var(root, TINT_VAR, &style.tint);
            dom::set_style_var(root, ACCENT_VAR, &style.accent);
        }
    }

    fn apply_parallax(&mut self, scroll_current: f32) {
        for layer in &self.parallax {
            let y = parallax_offset(scroll_current, layer.depth);
            _ = layer
                .element
                .style()
                .set_property("transform", &format!("translate3d(0, {}px, 0)", y));
        }
    }

    fn resize(&mut self) {
        if let Some(d) = &self.dye {
            dom::sync_canvas_to_viewport(&d.canvas);
        }
    }
}
