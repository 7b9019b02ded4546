//! Per-frame particle motion

use crate::particle::Particle;

/// Integration parameters for one frame step
#[derive(Debug, Clone, Copy)]
pub struct StepParams {
    pub fps: f64,
    pub width: u32,
    pub height: u32,
    /// Per-second velocity decay constant
    pub air_resistance: f64,
    /// Maximum particle lifetime in seconds
    pub max_age: f64,
}

/// Advance every particle by one Euler step
///
/// Check order is fixed: move, bounds cull, lifetime cull, drag, age.
/// A culled particle is charged neither drag nor age for the frame. The
/// per-frame drag is `air_resistance ^ (1/fps)`, so the per-second
/// decay is invariant to the frame rate. The lifetime cull is strictly
/// greater-than: a particle at exactly `max_age` survives the frame.
pub fn integrate(particles: &mut [Particle], params: &StepParams) {
    let drag = params.air_resistance.powf(1.0 / params.fps) as f32;
    let dt = (1.0 / params.fps) as f32;
    let width = params.width as f32;
    let height = params.height as f32;

    for p in particles.iter_mut() {
        p.x += p.vx;
        p.y += p.vy;
        if p.x < 0.0 || p.y < 0.0 || p.x >= width || p.y >= height {
            p.alive = false;
            continue;
        }
        if p.age as f64 > params.max_age {
            p.alive = false;
            continue;
        }
        p.vx *= drag;
        p.vy *= drag;
        p.age += dt;
    }
}
