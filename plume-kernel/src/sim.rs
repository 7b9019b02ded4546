//! Per-frame simulate call parameters

use std::path::Path;

use crate::emitter::NoteSpan;

/// Arguments shared by both effects' simulate entry points
///
/// Effect tuning lives in the per-effect configs; everything here
/// changes per frame or per host instance.
#[derive(Debug, Clone, Copy)]
pub struct SimParams<'a> {
    /// Video frame rate; per-second tuning is scaled by it
    pub fps: f64,
    /// Index of the frame being simulated
    pub frame: u32,
    pub width: u32,
    pub height: u32,
    /// Horizontal span of each currently sounding note
    pub notes: &'a [NoteSpan],
    /// Vertical emission origin shared by all notes
    pub y_start: f64,
    /// Particles to synthesize per sounding note
    pub particles_per_note: u32,
    /// Cache written by the previous simulate call; `None` starts empty
    pub input: Option<&'a Path>,
    /// Cache handed to the next render or simulate call
    pub output: &'a Path,
}

/// Emission velocity bounds in pixels per second
#[derive(Debug, Clone, Copy)]
pub struct VelocityBounds {
    pub vx_min: f64,
    pub vx_max: f64,
    pub vy_min: f64,
    pub vy_max: f64,
}
