//! Cached-particle compositing shared by both renderers

use plume_frame::Frame;

use crate::particle::Particle;

/// Per-effect compositing weights
///
/// The smoke effect runs far higher particle counts than dust, so it
/// uses much larger dividers and relies on overlap for density.
#[derive(Debug, Clone, Copy)]
pub(crate) struct CompositeParams {
    /// Lifetime used for the fade curve and the age cutoff
    pub max_age: f64,
    /// Intensity divider for the particle's own pixel
    pub center_div: f64,
    /// Intensity divider for the 3x3 neighborhood
    pub neighbor_div: f64,
}

/// Composite every young, in-frame particle onto the image
///
/// Brightness fades inverse-quadratically, `255 * (1 - (age/max)^2)`,
/// so a particle holds most of its brightness and drops away sharply
/// near end of life. The particle's pixel is blended white at
/// `intensity / center_div`, then the whole 3x3 neighborhood (center
/// included a second time) at `intensity / neighbor_div` as a cheap
/// blur. The frame is the only thing mutated.
pub(crate) fn composite(
    frame: &mut Frame<'_>,
    particles: &[Particle],
    intensity: f64,
    params: &CompositeParams,
) {
    for p in particles {
        let x = p.x as i64;
        let y = p.y as i64;
        if p.age as f64 >= params.max_age || !frame.contains_px(x, y) {
            continue;
        }

        let value = (255.0 * (1.0 - (p.age as f64 / params.max_age).powi(2))) as u8;
        let white = [value; 3];

        frame.mix(x as u32, y as u32, white, intensity / params.center_div);
        for dx in -1..=1 {
            for dy in -1..=1 {
                let (nx, ny) = (x + dx, y + dy);
                if frame.contains_px(nx, ny) {
                    frame.mix(nx as u32, ny as u32, white, intensity / params.neighbor_div);
                }
            }
        }
    }
}
