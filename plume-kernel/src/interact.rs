//! Short-range pairwise particle interaction
//!
//! Both passes are O(n²) over unordered pairs, exchanging equal and
//! opposite velocity deltas. The per-pair strength falls off linearly
//! from its maximum at zero distance to nothing at the radius, and the
//! delta is split between the axes in proportion to `dx / (dx + dy)`
//! and `dy / (dx + dy)`.

use crate::particle::Particle;

/// Pull nearby pairs together (dust effect)
///
/// `strength` is the maximum per-frame velocity exchange in pixels.
/// Pairs with `|dx + dy| < 1` are skipped: the axis split divides by
/// that sum.
pub fn attract(particles: &mut [Particle], radius: f64, strength: f64) {
    pairwise(particles, radius, strength, -1.0, true);
}

/// Push nearby pairs apart (smoke effect)
///
/// Sign-flipped twin of [`attract`], minus the near-zero offset guard:
/// a near-coincident pair divides by a tiny `dx + dy` and takes a large
/// kick. Kept as-is rather than unified; see DESIGN.md.
pub fn diffuse(particles: &mut [Particle], radius: f64, strength: f64) {
    pairwise(particles, radius, strength, 1.0, false);
}

fn pairwise(particles: &mut [Particle], radius: f64, strength: f64, sign: f64, guard: bool) {
    let len = particles.len();
    for i in 0..len {
        for j in i + 1..len {
            let (head, tail) = particles.split_at_mut(j);
            let p1 = &mut head[i];
            let p2 = &mut tail[0];

            let dx = (p1.x - p2.x) as f64;
            let dy = (p1.y - p2.y) as f64;
            let dist = dx.hypot(dy);
            if dist > radius || (guard && (dx + dy).abs() < 1.0) {
                continue;
            }

            let s = strength * (1.0 - dist / radius);
            let total = dx + dy;
            let ddx = sign * s * (dx / total);
            let ddy = sign * s * (dy / total);

            p1.vx += ddx as f32;
            p1.vy += ddy as f32;
            p2.vx -= ddx as f32;
            p2.vy -= ddy as f32;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vel_sums(particles: &[Particle]) -> (f32, f32) {
        particles
            .iter()
            .fold((0.0, 0.0), |(vx, vy), p| (vx + p.vx, vy + p.vy))
    }

    #[test]
    fn test_attraction_conserves_momentum() {
        let mut particles = [
            Particle::spawn(100.0, 100.0, 1.0, 0.5),
            Particle::spawn(102.0, 101.0, -0.5, 0.25),
            Particle::spawn(101.0, 99.0, 0.0, 0.0),
        ];
        let before = vel_sums(&particles);

        attract(&mut particles, 4.0, 4.0 / 30.0);

        let after = vel_sums(&particles);
        assert!((before.0 - after.0).abs() < 1e-5, "vx sum changed");
        assert!((before.1 - after.1).abs() < 1e-5, "vy sum changed");
    }

    #[test]
    fn test_pairs_outside_radius_are_untouched() {
        let mut particles = [
            Particle::spawn(0.0, 0.0, 0.0, 0.0),
            Particle::spawn(10.0, 0.0, 0.0, 0.0),
        ];
        attract(&mut particles, 4.0, 1.0);
        assert_eq!(particles[0].vx, 0.0);
        assert_eq!(particles[1].vx, 0.0);
    }

    #[test]
    fn test_attraction_skips_degenerate_offsets() {
        // dx + dy = -0.4 + 0.3, well under the guard threshold.
        let mut particles = [
            Particle::spawn(10.0, 10.0, 0.0, 0.0),
            Particle::spawn(10.4, 9.7, 0.0, 0.0),
        ];
        attract(&mut particles, 4.0, 1.0);
        assert_eq!(particles[0].vx, 0.0);
        assert_eq!(particles[0].vy, 0.0);
    }

    #[test]
    fn test_diffusion_has_no_degeneracy_guard() {
        let mut particles = [
            Particle::spawn(10.0, 10.0, 0.0, 0.0),
            Particle::spawn(10.4, 9.7, 0.0, 0.0),
        ];
        diffuse(&mut particles, 4.0, 1.0);
        assert_ne!(particles[0].vx, 0.0);
    }

    #[test]
    fn test_diffusion_is_sign_flipped_attraction() {
        let pair = [
            Particle::spawn(50.0, 50.0, 0.0, 0.0),
            Particle::spawn(52.0, 51.0, 0.0, 0.0),
        ];

        let mut attracted = pair;
        attract(&mut attracted, 4.0, 0.5);
        let mut diffused = pair;
        diffuse(&mut diffused, 4.0, 0.5);

        assert!((attracted[0].vx + diffused[0].vx).abs() < 1e-6);
        assert!((attracted[0].vy + diffused[0].vy).abs() < 1e-6);
        assert!((attracted[1].vx + diffused[1].vx).abs() < 1e-6);
    }

    #[test]
    fn test_strength_falls_off_with_distance() {
        let mut near = [
            Particle::spawn(0.0, 50.0, 0.0, 0.0),
            Particle::spawn(1.0, 50.0, 0.0, 0.0),
        ];
        let mut far = [
            Particle::spawn(0.0, 50.0, 0.0, 0.0),
            Particle::spawn(3.0, 50.0, 0.0, 0.0),
        ];
        attract(&mut near, 4.0, 1.0);
        attract(&mut far, 4.0, 1.0);

        assert!(
            near[0].vx.abs() > far[0].vx.abs(),
            "near pair {} should exchange more than far pair {}",
            near[0].vx,
            far[0].vx
        );
    }

    #[test]
    fn test_empty_and_single_are_no_ops() {
        attract(&mut [], 4.0, 1.0);

        let mut one = [Particle::spawn(5.0, 5.0, 1.0, 1.0)];
        attract(&mut one, 4.0, 1.0);
        assert_eq!(one[0].vx, 1.0);
    }
}
