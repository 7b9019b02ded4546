//! Smoke effect: dense plumes with optional diffusion
//!
//! The smoke variant runs far higher particle counts than dust, so
//! every particle renders much dimmer and the body of the plume comes
//! from overlap. Emission velocity bounds are supplied per call instead
//! of fixed in the config, and the pairwise pass pushes neighbors apart
//! (gated by a per-call flag) so plumes billow instead of clumping.

use std::path::Path;

use plume_frame::Frame;
use tracing::debug;

use crate::cache;
use crate::compositor::{composite, CompositeParams};
use crate::emitter::{self, EmitParams};
use crate::interact;
use crate::physics::{self, StepParams};
use crate::rng::Rng;
use crate::sim::{SimParams, VelocityBounds};

/// Tuning for the smoke effect
#[derive(Debug, Clone, Copy)]
pub struct SmokeConfig {
    /// Per-second velocity decay constant
    pub air_resistance: f64,
    /// Maximum particle lifetime in seconds
    pub max_age: f64,
    /// Diffusion radius in pixels
    pub diffuse_radius: f64,
    /// Maximum diffusion strength in pixels per second
    pub diffuse_strength: f64,
}

impl Default for SmokeConfig {
    fn default() -> Self {
        Self {
            air_resistance: 0.95,
            max_age: 8.0,
            diffuse_radius: 4.0,
            diffuse_strength: 1.0,
        }
    }
}

/// Jitter phase constants (cf. the dust offsets)
const PHASE_OFFSET: f64 = 0.0;
const PHASE_STEP: f64 = 0.1;

/// Simulate one frame of smoke activity
///
/// Load the previous frame's cache (or start empty), emit along the
/// sounding notes with the caller's per-second velocity bounds,
/// integrate, optionally run the diffusion pass, then write the
/// surviving set to `sim.output`. As with dust, freshly culled
/// particles still act as force sources in the pairwise pass but are
/// not saved.
pub fn simulate(
    cfg: &SmokeConfig,
    sim: &SimParams<'_>,
    velocity: &VelocityBounds,
    diffusion: bool,
    rng: &mut dyn Rng,
) {
    assert!(sim.fps > 0.0, "frame rate must be positive");

    let mut particles = match sim.input {
        Some(path) => cache::load(path),
        None => Vec::new(),
    };

    emitter::emit(
        &mut particles,
        sim.notes,
        sim.frame,
        &EmitParams {
            y_start: sim.y_start,
            per_note: sim.particles_per_note,
            phase_offset: PHASE_OFFSET,
            phase_step: PHASE_STEP,
            vx_min: velocity.vx_min / sim.fps,
            vx_max: velocity.vx_max / sim.fps,
            vy_min: velocity.vy_min / sim.fps,
            vy_max: velocity.vy_max / sim.fps,
        },
        rng,
    );

    physics::integrate(
        &mut particles,
        &StepParams {
            fps: sim.fps,
            width: sim.width,
            height: sim.height,
            air_resistance: cfg.air_resistance,
            max_age: cfg.max_age,
        },
    );

    if diffusion {
        interact::diffuse(&mut particles, cfg.diffuse_radius, cfg.diffuse_strength / sim.fps);
    }

    particles.retain(|p| p.alive);
    debug!("smoke frame {}: {} live particles", sim.frame, particles.len());
    cache::save(&particles, sim.output);
}

/// Composite the cached smoke onto the frame
///
/// Each particle blends white at a tenth of `intensity`, its 3x3
/// neighborhood at a thirtieth; density comes from particle overlap.
pub fn render(cfg: &SmokeConfig, frame: &mut Frame<'_>, cache_path: &Path, intensity: f64) {
    let particles = cache::load(cache_path);
    composite(
        frame,
        &particles,
        intensity,
        &CompositeParams {
            max_age: cfg.max_age,
            center_div: 10.0,
            neighbor_div: 30.0,
        },
    );
}
