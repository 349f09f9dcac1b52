use crate::constants::HOVER_ITEM_SELECTOR;
use crate::dom;
use crate::frame::SharedScheduler;
use vessel_core::InputEvent;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Window-level pointer, scroll, resize and unload listeners.
pub fn wire_page_inputs(window: &web::Window, scheduler: &SharedScheduler) {
    let target: &web::EventTarget = window.unchecked_ref();

    let s = scheduler.clone();
    let w = window.clone();
    dom::listen_with_passive(target, "mousemove", true, move |ev: web::MouseEvent| {
        s.borrow_mut().dispatch(InputEvent::PointerMove {
            x: ev.client_x() as f32,
            y: ev.client_y() as f32,
            viewport: dom::viewport(&w),
        });
    });

    let s = scheduler.clone();
    let w = window.clone();
    dom::listen_with_passive(target, "scroll", true, move |_: web::Event| {
        s.borrow_mut().dispatch(InputEvent::Scroll {
            offset: dom::scroll_y(&w),
        });
    });

    let s = scheduler.clone();
    dom::listen(target, "resize", move |_: web::Event| {
        s.borrow_mut().dispatch(InputEvent::Resize);
    });

    let s = scheduler.clone();
    dom::listen(target, "beforeunload", move |_: web::Event| {
        s.borrow_mut().dispatch(InputEvent::Teardown);
    });
}

/// Swatch hover on every journal item: `data-color` overrides the hue while
/// the pointer is inside.
pub fn wire_hover_items(document: &web::Document, scheduler: &SharedScheduler) {
    let items = dom::query_all(document, HOVER_ITEM_SELECTOR);
    log::debug!("[events] {} hover items", items.len());
    for item in items {
        let s = scheduler.clone();
        let el = item.clone();
        dom::listen(item.unchecked_ref(), "mouseenter", move |_: web::Event| {
            let swatch = el.dataset().get("color").filter(|c| !c.is_empty());
            s.borrow_mut().dispatch(InputEvent::HoverEnter { swatch });
        });

        let s = scheduler.clone();
        dom::listen(item.unchecked_ref(), "mouseleave", move |_: web::Event| {
            s.borrow_mut().dispatch(InputEvent::HoverLeave);
        });
    }
}
