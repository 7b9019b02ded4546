//! Dust effect: sparse glowing specks with short-range attraction
//!
//! Specks lift off each sounding note, drift against air resistance,
//! and clump slightly as nearby pairs pull together. Expected particle
//! counts are low, so each speck renders at full intensity.

use std::path::Path;

use plume_frame::Frame;
use tracing::debug;

use crate::cache;
use crate::compositor::{composite, CompositeParams};
use crate::emitter::{self, EmitParams};
use crate::interact;
use crate::physics::{self, StepParams};
use crate::rng::Rng;
use crate::sim::SimParams;

/// Tuning for the dust effect
///
/// Velocity and strength fields are pixels per second; the simulate
/// call scales them by the frame rate.
#[derive(Debug, Clone, Copy)]
pub struct DustConfig {
    /// Per-second velocity decay constant
    pub air_resistance: f64,
    /// Maximum particle lifetime in seconds
    pub max_age: f64,
    /// Attraction radius in pixels
    pub attract_radius: f64,
    /// Maximum attraction strength in pixels per second
    pub attract_strength: f64,
    /// Horizontal emission velocity bounds
    pub vx_min: f64,
    pub vx_max: f64,
    /// Vertical emission velocity bounds (negative = upward)
    pub vy_min: f64,
    pub vy_max: f64,
}

impl Default for DustConfig {
    fn default() -> Self {
        Self {
            air_resistance: 0.95,
            max_age: 4.0,
            attract_radius: 4.0,
            attract_strength: 4.0,
            vx_min: -10.0,
            vx_max: 10.0,
            vy_min: -125.0,
            vy_max: -100.0,
        }
    }
}

/// Jitter phase constants; offset by 12 so dust and smoke riding the
/// same notes never pulse in sync.
const PHASE_OFFSET: f64 = 12.0;
const PHASE_STEP: f64 = 0.12;

/// Simulate one frame of dust activity
///
/// Load the previous frame's cache (or start empty), emit along the
/// sounding notes, integrate, run the attraction pass, then write the
/// surviving set to `sim.output` for the next call. The attraction pass
/// runs over the full buffer, so freshly culled particles still act as
/// force sources this frame; only live particles are saved.
pub fn simulate(cfg: &DustConfig, sim: &SimParams<'_>, rng: &mut dyn Rng) {
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
            vx_min: cfg.vx_min / sim.fps,
            vx_max: cfg.vx_max / sim.fps,
            vy_min: cfg.vy_min / sim.fps,
            vy_max: cfg.vy_max / sim.fps,
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

    interact::attract(&mut particles, cfg.attract_radius, cfg.attract_strength / sim.fps);

    particles.retain(|p| p.alive);
    debug!("dust frame {}: {} live particles", sim.frame, particles.len());
    cache::save(&particles, sim.output);
}

/// Composite the cached dust onto the frame
///
/// Reads the cache written by [`simulate`]; mutates only the image.
/// Each speck blends white at full `intensity`, with its 3x3
/// neighborhood at a third of that.
pub fn render(cfg: &DustConfig, frame: &mut Frame<'_>, cache_path: &Path, intensity: f64) {
    let particles = cache::load(cache_path);
    composite(
        frame,
        &particles,
        intensity,
        &CompositeParams {
            max_age: cfg.max_age,
            center_div: 1.0,
            neighbor_div: 3.0,
        },
    );
}
