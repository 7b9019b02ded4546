//! Stochastic particle emission along sounding notes

use crate::particle::Particle;
use crate::rng::Rng;

/// Horizontal span of one sounding note, in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoteSpan {
    pub x_start: f64,
    pub x_end: f64,
}

/// Emission tuning for one effect
///
/// Velocity bounds are pixels per frame; the effect front-ends divide
/// their per-second bounds by the frame rate before building this.
#[derive(Debug, Clone, Copy)]
pub struct EmitParams {
    /// Vertical origin shared by all new particles
    pub y_start: f64,
    /// Particles synthesized per sounding note
    pub per_note: u32,
    /// Constant term of the jitter phase
    pub phase_offset: f64,
    /// Per-frame increment of the jitter phase
    pub phase_step: f64,
    pub vx_min: f64,
    pub vx_max: f64,
    pub vy_min: f64,
    pub vy_max: f64,
}

/// Synthesize fresh particles along each note span
///
/// The jitter phase `sin(offset + i + step * frame)` varies per note
/// and per frame so repeated notes do not emit identically. It slides a
/// half-width window along the note span and shifts the horizontal
/// velocity bounds by `phase / 5`. Each particle starts at `y_start`
/// with `age` zero.
pub fn emit(
    particles: &mut Vec<Particle>,
    notes: &[NoteSpan],
    frame: u32,
    params: &EmitParams,
    rng: &mut dyn Rng,
) {
    for (i, note) in notes.iter().enumerate() {
        debug_assert!(note.x_end >= note.x_start, "inverted note span");
        let span = note.x_end - note.x_start;

        let phase = (params.phase_offset + i as f64 + params.phase_step * frame as f64).sin();
        let gap = (phase + 1.0) / 2.0 * (span / 2.0);

        let real_start = note.x_start + gap;
        let real_end = real_start + span / 2.0;
        let real_vmin = params.vx_min + phase / 5.0;
        let real_vmax = params.vx_max + phase / 5.0;

        for _ in 0..params.per_note {
            particles.push(Particle::spawn(
                rng.uniform(real_start, real_end) as f32,
                params.y_start as f32,
                rng.uniform(real_vmin, real_vmax) as f32,
                rng.uniform(params.vy_min, params.vy_max) as f32,
            ));
        }
    }
}
