//! The particle record shared by both effects

/// One simulated speck of smoke
///
/// Positions are pixels; velocities are pixels per frame, so they are
/// tied to the frame rate they were emitted at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Cleared when the particle is culled; kept in the working buffer
    /// until the pre-save filter so pairwise passes stay index-stable
    pub alive: bool,
    /// Seconds since emission
    pub age: f32,
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
}

impl Particle {
    /// Fresh particle at the given position and velocity
    pub fn spawn(x: f32, y: f32, vx: f32, vy: f32) -> Self {
        Self {
            alive: true,
            age: 0.0,
            x,
            y,
            vx,
            vy,
        }
    }
}
