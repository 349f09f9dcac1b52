//! Per-frame vessel deformation.
//!
//! The rest shape is captured once as an immutable reference buffer. Every
//! frame the live buffer is rebuilt from it in full, so offsets never
//! accumulate across frames.

use crate::constants::{ENVELOPE_BAND_SCALE, ENVELOPE_CENTER_OFFSET};
use crate::mesh::LatheGeometry;
use glam::{EulerRot, Mat4, Quat, Vec3};
use thiserror::Error;

/// Signal weights for the radial displacement.
#[derive(Clone, Debug)]
pub struct DeformParams {
    pub center_offset: f32,
    pub band_scale: f32,

    pub wave_theta_freq: f32,
    pub wave_speed: f32,
    pub wave_amp: f32,

    pub breathe_speed: f32,
    pub breathe_y_freq: f32,
    pub breathe_amp: f32,

    pub pointer_x_amp: f32,
    pub pointer_y_amp: f32,

    pub scroll_theta_freq: f32,
    pub scroll_phase: f32,
    pub scroll_amp: f32,
}

impl Default for DeformParams {
    fn default() -> Self {
        Self {
            center_offset: ENVELOPE_CENTER_OFFSET,
            band_scale: ENVELOPE_BAND_SCALE,
            wave_theta_freq: 2.2,
            wave_speed: 1.05,
            wave_amp: 0.015,
            breathe_speed: 0.95,
            breathe_y_freq: 2.2,
            breathe_amp: 0.012,
            pointer_x_amp: 0.008,
            pointer_y_amp: 0.007,
            scroll_theta_freq: 3.5,
            scroll_phase: 12.0,
            scroll_amp: 0.026,
        }
    }
}

impl DeformParams {
    /// Same envelope, every signal silenced.
    pub fn still() -> Self {
        Self {
            wave_amp: 0.0,
            breathe_amp: 0.0,
            pointer_x_amp: 0.0,
            pointer_y_amp: 0.0,
            scroll_amp: 0.0,
            ..Self::default()
        }
    }
}

/// Frame inputs shared by the per-vertex and whole-mesh motion.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DeformInputs {
    /// Elapsed seconds.
    pub t: f32,
    pub px: f32,
    pub py: f32,
    pub scroll_progress: f32,
}

/// Bell-shaped weight along the vertical axis, `1` at `y = -center_offset`.
#[inline]
pub fn envelope(y: f32, params: &DeformParams) -> f32 {
    let d = (y + params.center_offset) * params.band_scale;
    (-(d * d)).exp()
}

/// Sum of the four displacement signals for one vertex, before the envelope.
#[inline]
pub fn radial_signal(theta: f32, y: f32, inputs: &DeformInputs, params: &DeformParams) -> f32 {
    let t = inputs.t;
    let s = inputs.scroll_progress;
    let wave = (theta * params.wave_theta_freq + t * params.wave_speed).sin() * params.wave_amp;
    let breathe = (t * params.breathe_speed + y * params.breathe_y_freq).sin() * params.breathe_amp;
    let pointer = inputs.px * theta.cos() * params.pointer_x_amp
        + inputs.py * theta.sin() * params.pointer_y_amp;
    let scroll = (theta * params.scroll_theta_freq + s * params.scroll_phase).sin() * s * params.scroll_amp;
    wave + breathe + pointer + scroll
}

pub struct MeshDeformer {
    reference: Box<[f32]>,
    live: LatheGeometry,
    params: DeformParams,
}

impl MeshDeformer {
    pub fn new(geometry: LatheGeometry, params: DeformParams) -> Self {
        Self {
            reference: geometry.positions().into(),
            live: geometry,
            params,
        }
    }

    pub fn reference(&self) -> &[f32] {
        &self.reference
    }

    pub fn geometry(&self) -> &LatheGeometry {
        &self.live
    }

    pub fn params(&self) -> &DeformParams {
        &self.params
    }

    /// Rebuild every live vertex from the reference, then refresh normals.
    pub fn update(&mut self, inputs: &DeformInputs) {
        let params = &self.params;
        let live = self.live.positions_mut();
        for (dst, src) in live
            .chunks_exact_mut(3)
            .zip(self.reference.chunks_exact(3))
        {
            let (x, y, z) = (src[0], src[1], src[2]);
            let theta = z.atan2(x);
            let offset = radial_signal(theta, y, inputs, params) * envelope(y, params);
            // x + cos(theta) * offset == cos(theta) * (radial + offset)
            dst[0] = x + theta.cos() * offset;
            dst[1] = y;
            dst[2] = z + theta.sin() * offset;
        }
        self.live.compute_vertex_normals();
    }
}

/// Whole-mesh motion weights.
#[derive(Clone, Debug)]
pub struct PoseParams {
    pub spin_rate: f32,
    pub tilt_base: f32,
    pub pointer_yaw: f32,
    pub pointer_pitch: f32,
    pub pointer_roll: f32,
    pub scroll_pitch: f32,
    pub lift_base: f32,
    pub bob_amp: f32,
    pub bob_rate: f32,

    // idle sway, one (rate, amplitude) pair per axis
    pub sway_pitch_rate: f32,
    pub sway_pitch_amp: f32,
    pub sway_yaw_rate: f32,
    pub sway_yaw_amp: f32,
    pub sway_roll_rate: f32,
    pub sway_roll_amp: f32,
}

impl Default for PoseParams {
    fn default() -> Self {
        Self {
            spin_rate: 0.22,
            tilt_base: -0.16,
            pointer_yaw: 0.12,
            pointer_pitch: -0.08,
            pointer_roll: 0.02,
            scroll_pitch: 0.12,
            lift_base: 0.03,
            bob_amp: 0.06,
            bob_rate: 0.5,
            sway_pitch_rate: 0.55,
            sway_pitch_amp: 0.07,
            sway_yaw_rate: 0.4,
            sway_yaw_amp: 0.05,
            sway_roll_rate: 0.3,
            sway_roll_amp: 0.025,
        }
    }
}

/// Rigid transform applied to the whole vessel.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct VesselPose {
    /// Intrinsic XYZ Euler angles in radians.
    pub rotation: Vec3,
    pub lift: f32,
}

impl VesselPose {
    pub fn at(inputs: &DeformInputs, params: &PoseParams) -> Self {
        let t = inputs.t;
        let idle_x = (t * params.sway_pitch_rate).sin() * params.sway_pitch_amp;
        let idle_y = (t * params.sway_yaw_rate).cos() * params.sway_yaw_amp;
        let idle_z = (t * params.sway_roll_rate).sin() * params.sway_roll_amp;
        let rotation = Vec3::new(
            params.tilt_base
                + idle_x
                + inputs.py * params.pointer_pitch
                + inputs.scroll_progress * params.scroll_pitch,
            t * params.spin_rate + idle_y + inputs.px * params.pointer_yaw,
            idle_z + inputs.px * params.pointer_roll,
        );
        Self {
            rotation,
            lift: params.lift_base + (t * params.bob_rate).sin() * params.bob_amp,
        }
    }

    pub fn model_matrix(&self) -> Mat4 {
        let r = self.rotation;
        Mat4::from_rotation_translation(
            Quat::from_euler(EulerRot::XYZ, r.x, r.y, r.z),
            Vec3::new(0.0, self.lift, 0.0),
        )
    }
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("render surface lost")]
    SurfaceLost,
    #[error("gpu error: {0}")]
    Gpu(String),
}

/// A 3D backend able to draw the vessel.
pub trait VesselRenderer {
    fn render(&mut self, geometry: &LatheGeometry, pose: &VesselPose) -> Result<(), RenderError>;
    /// Track the mount's new size.
    fn resize(&mut self);
}

/// Deformer paired with the backend that draws it.
pub struct Vessel<R> {
    deformer: MeshDeformer,
    pose_params: PoseParams,
    renderer: R,
}

impl<R: VesselRenderer> Vessel<R> {
    pub fn new(deformer: MeshDeformer, renderer: R) -> Self {
        Self {
            deformer,
            pose_params: PoseParams::default(),
            renderer,
        }
    }

    pub fn deformer(&self) -> &MeshDeformer {
        &self.deformer
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn frame(&mut self, inputs: &DeformInputs) -> Result<VesselPose, RenderError> {
        self.deformer.update(inputs);
        let pose = VesselPose::at(inputs, &self.pose_params);
        self.renderer.render(self.deformer.geometry(), &pose)?;
        Ok(pose)
    }

    pub fn resize(&mut self) {
        self.renderer.resize();
    }
}
