#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use std::rc::Rc;
use vessel_core::{
    restore_dye, seed_hue, time_of_day_accent, AnimationScheduler, AnimationState, ColorBlender,
    DyeState,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod host;
mod render;
mod storage;

use constants::DYE_STORAGE_KEY;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("vessel-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let host = host::DomHost::new(window.clone(), document.clone());

    let hour = js_sys::Date::new_0().get_hours();
    let accent = time_of_day_accent(hour);
    host.set_accent(accent.color);

    let store = storage::open_dye_store(&window);
    let dye = seed_hue(
        restore_dye(
            store.as_ref(),
            DYE_STORAGE_KEY,
            DyeState::for_viewport(dom::viewport(&window)),
        ),
        accent.hue,
    );
    log::info!(
        "[init] hour={} accent={} hue={:.1} intensity={:.2}",
        hour,
        accent.color,
        dye.hue,
        dye.intensity
    );

    let state = AnimationState::new(dye, dom::scroll_y(&window));
    let vessel = render::init_vessel(&window, &document).await;
    let scheduler: frame::SharedScheduler = Rc::new(RefCell::new(AnimationScheduler::new(
        state,
        ColorBlender::default(),
        host,
        vessel,
        store,
        DYE_STORAGE_KEY,
    )));

    events::wire_page_inputs(&window, &scheduler);
    events::wire_hover_items(&document, &scheduler);
    events::wire_journal_rail(&document);

    frame::start_loop(scheduler);
    Ok(())
}
