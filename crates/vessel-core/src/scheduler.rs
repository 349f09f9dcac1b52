//! The per-frame orchestrator and the single input boundary.

use crate::color::{scroll_progress, AmbientStyle, ColorBlender};
use crate::constants::{DYE_FOLLOW_RATE, SCROLL_DAMPING};
use crate::deform::{DeformInputs, Vessel, VesselRenderer};
use crate::field::{dye_gradient, follow_pointer, PageHost};
use crate::input;
use crate::persist::{persist_dye, DyeStore};
use crate::state::{AnimationState, Viewport};

/// Everything the page can tell the animation about.
#[derive(Clone, Debug, PartialEq)]
pub enum InputEvent {
    PointerMove { x: f32, y: f32, viewport: Viewport },
    Scroll { offset: f32 },
    /// `None` when the hovered element carries no swatch.
    HoverEnter { swatch: Option<String> },
    HoverLeave,
    Resize,
    Teardown,
}

pub struct AnimationScheduler<H, R> {
    state: AnimationState,
    blender: ColorBlender,
    host: H,
    vessel: Option<Vessel<R>>,
    store: Box<dyn DyeStore>,
    storage_key: String,
}

impl<H: PageHost, R: VesselRenderer> AnimationScheduler<H, R> {
    pub fn new(
        state: AnimationState,
        blender: ColorBlender,
        host: H,
        vessel: Option<Vessel<R>>,
        store: Box<dyn DyeStore>,
        storage_key: impl Into<String>,
    ) -> Self {
        Self {
            state,
            blender,
            host,
            vessel,
            store,
            storage_key: storage_key.into(),
        }
    }

    pub fn state(&self) -> &AnimationState {
        &self.state
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn vessel(&self) -> Option<&Vessel<R>> {
        self.vessel.as_ref()
    }

    pub fn has_vessel(&self) -> bool {
        self.vessel.is_some()
    }

    pub fn persist(&self) {
        persist_dye(self.store.as_ref(), &self.storage_key, &self.state.dye);
    }

    pub fn dispatch(&mut self, event: InputEvent) {
        match event {
            InputEvent::PointerMove { x, y, viewport } => {
                input::on_pointer_move(&mut self.state, x, y, viewport);
            }
            InputEvent::Scroll { offset } => input::on_scroll(&mut self.state, offset),
            InputEvent::HoverEnter { swatch: None } => {
                log::debug!("[input] hover without swatch ignored");
            }
            InputEvent::HoverEnter { swatch: Some(swatch) } => {
                match input::on_hover_enter(&mut self.state, &swatch) {
                    Ok(hue) => {
                        self.host
                            .publish_ambient(&AmbientStyle::from_swatch(&swatch, hue));
                        self.persist();
                    }
                    Err(e) => log::debug!("[input] hover ignored: {}", e),
                }
            }
            InputEvent::HoverLeave => input::on_hover_leave(&mut self.state),
            InputEvent::Resize => {
                self.host.resize();
                if let Some(v) = &mut self.vessel {
                    v.resize();
                }
            }
            InputEvent::Teardown => self.persist(),
        }
    }

    /// Run one frame. `elapsed_sec` is the time since the loop started.
    pub fn frame(&mut self, elapsed_sec: f32) {
        follow_pointer(&mut self.state, DYE_FOLLOW_RATE);

        self.state.scroll.advance(SCROLL_DAMPING);
        let current = self.state.scroll.current();
        let progress = scroll_progress(current, self.host.scrollable_height());
        self.state.scroll_progress = progress;
        self.blender.blend(&mut self.state, progress);
        self.host
            .publish_ambient(&AmbientStyle::from_hue(self.state.dye.hue));
        self.host.apply_parallax(current);

        if let Some((w, h)) = self.host.dye_surface_size() {
            self.host.paint_dye(&dye_gradient(&self.state.dye, w, h));
        }

        if let Some(vessel) = &mut self.vessel {
            let inputs = DeformInputs {
                t: elapsed_sec,
                px: self.state.pointer.px,
                py: self.state.pointer.py,
                scroll_progress: progress,
            };
            if let Err(e) = vessel.frame(&inputs) {
                log::error!("[vessel] render error: {}", e);
            }
        }
    }
}
