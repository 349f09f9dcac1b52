use crate::host::DomHost;
use crate::render::GpuVessel;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use vessel_core::AnimationScheduler;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type SharedScheduler = Rc<RefCell<AnimationScheduler<DomHost, GpuVessel>>>;

/// Drive the scheduler from `requestAnimationFrame` for the life of the page.
pub fn start_loop(scheduler: SharedScheduler) {
    let started = Instant::now();
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let elapsed = started.elapsed().as_secs_f32();
        scheduler.borrow_mut().frame(elapsed);
        if let Some(cb) = tick_clone.borrow().as_ref() {
            request_frame(cb);
        }
    }) as Box<dyn FnMut()>));
    if let Some(cb) = tick.borrow().as_ref() {
        request_frame(cb);
    }
}

fn request_frame(cb: &Closure<dyn FnMut()>) {
    if let Some(w) = web::window() {
        if let Err(e) = w.request_animation_frame(cb.as_ref().unchecked_ref()) {
            log::error!("[frame] requestAnimationFrame failed: {:?}", e);
        }
    }
}
