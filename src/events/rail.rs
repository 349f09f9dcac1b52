use crate::constants::{RAIL_NAV_SELECTOR, RAIL_PAGE_FRACTION, RAIL_SELECTOR, RAIL_WHEEL_FACTOR};
use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

fn smooth_scroll_left(rail: &web::HtmlElement, left: f64) {
    let opts = web::ScrollToOptions::new();
    opts.set_left(left);
    opts.set_behavior(web::ScrollBehavior::Smooth);
    rail.scroll_by_with_scroll_to_options(&opts);
}

/// Horizontal journal rail: dominant vertical wheel motion scrolls sideways,
/// and `data-journal-nav` buttons page through it.
pub fn wire_journal_rail(document: &web::Document) {
    let Some(rail) = document
        .query_selector(RAIL_SELECTOR)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
    else {
        return;
    };

    let r = rail.clone();
    dom::listen_with_passive(rail.unchecked_ref(), "wheel", false, move |ev: web::WheelEvent| {
        if ev.delta_y().abs() <= ev.delta_x().abs() {
            return;
        }
        ev.prevent_default();
        smooth_scroll_left(&r, ev.delta_y() * RAIL_WHEEL_FACTOR);
    });

    for button in dom::query_all(document, RAIL_NAV_SELECTOR) {
        let direction = match button.dataset().get("journalNav").as_deref() {
            Some("next") => 1.0,
            _ => -1.0,
        };
        let r = rail.clone();
        dom::listen(button.unchecked_ref(), "click", move |_: web::Event| {
            let amount = r.client_width() as f64 * RAIL_PAGE_FRACTION;
            smooth_scroll_left(&r, amount * direction);
        });
    }
}
