//! Binary particle cache
//!
//! A simulate call writes the surviving particle set here; the next
//! render or simulate call on the same effect instance reads it back.
//! That file is the only state crossing call boundaries.
//!
//! Format: a `u32` little-endian particle count, then one
//! [`RECORD_SIZE`]-byte record per particle: `alive` as a single byte,
//! then `age`, `x`, `y`, `vx`, `vy` as little-endian `f32`. No magic
//! number, no version tag, never appended to. The encoding is private
//! between consecutive calls on one cache path; the caller owns the
//! file's lifecycle and deletion.
//!
//! Both entry points fail soft: an unreadable file loads as whatever was
//! decoded before the error (possibly nothing), an unwritable file makes
//! `save` a no-op. Each logs a warning; a frame with a failed cache just
//! shows no or stale smoke.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

use tracing::warn;

use crate::particle::Particle;

/// Encoded size of one particle record in bytes
pub const RECORD_SIZE: usize = 21;

/// Read a particle set back from a cache file
///
/// Never returns a dead particle: records with a cleared `alive` byte
/// are dropped. None should ever be written, but old caches are
/// tolerated.
pub fn load(path: &Path) -> Vec<Particle> {
    let mut particles = Vec::new();
    if let Err(e) = read_records(path, &mut particles) {
        warn!("cannot read particle cache {}: {}", path.display(), e);
    }
    particles
}

/// Write a particle set to a cache file, count first, surviving order
///
/// Callers filter to live particles before saving so the written count
/// covers only them.
pub fn save(particles: &[Particle], path: &Path) {
    if let Err(e) = write_records(particles, path) {
        warn!("cannot write particle cache {}: {}", path.display(), e);
    }
}

fn read_records(path: &Path, out: &mut Vec<Particle>) -> io::Result<()> {
    let mut reader = BufReader::new(File::open(path)?);

    let mut count_buf = [0u8; 4];
    reader.read_exact(&mut count_buf)?;
    let count = u32::from_le_bytes(count_buf);

    let mut record = [0u8; RECORD_SIZE];
    for _ in 0..count {
        reader.read_exact(&mut record)?;
        let particle = decode(&record);
        if particle.alive {
            out.push(particle);
        }
    }
    Ok(())
}

fn write_records(particles: &[Particle], path: &Path) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);

    writer.write_all(&(particles.len() as u32).to_le_bytes())?;
    for particle in particles {
        writer.write_all(&encode(particle))?;
    }
    writer.flush()
}

fn encode(p: &Particle) -> [u8; RECORD_SIZE] {
    let mut buf = [0u8; RECORD_SIZE];
    buf[0] = p.alive as u8;
    buf[1..5].copy_from_slice(&p.age.to_le_bytes());
    buf[5..9].copy_from_slice(&p.x.to_le_bytes());
    buf[9..13].copy_from_slice(&p.y.to_le_bytes());
    buf[13..17].copy_from_slice(&p.vx.to_le_bytes());
    buf[17..21].copy_from_slice(&p.vy.to_le_bytes());
    buf
}

fn decode(buf: &[u8; RECORD_SIZE]) -> Particle {
    Particle {
        alive: buf[0] != 0,
        age: le_f32(buf, 1),
        x: le_f32(buf, 5),
        y: le_f32(buf, 9),
        vx: le_f32(buf, 13),
        vy: le_f32(buf, 17),
    }
}

#[inline]
fn le_f32(buf: &[u8; RECORD_SIZE], at: usize) -> f32 {
    f32::from_le_bytes([buf[at], buf[at + 1], buf[at + 2], buf[at + 3]])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("plume-cache-{}-{}", std::process::id(), name))
    }

    #[test]
    fn test_round_trip_is_exact() {
        let path = temp_path("roundtrip.bin");
        let particles = vec![
            Particle { alive: true, age: 0.5, x: 10.25, y: 20.5, vx: -1.5, vy: 3.75 },
            Particle { alive: true, age: 3.999, x: 0.0, y: 719.0, vx: 0.0, vy: -0.001 },
        ];

        save(&particles, &path);
        let loaded = load(&path);
        fs::remove_file(&path).unwrap();

        assert_eq!(loaded, particles);
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let loaded = load(&temp_path("does-not-exist.bin"));
        assert!(loaded.is_empty());
    }

    #[test]
    fn test_dead_records_are_dropped_on_load() {
        let path = temp_path("dead.bin");
        let particles = vec![
            Particle { alive: true, age: 1.0, x: 5.0, y: 6.0, vx: 0.0, vy: 0.0 },
            Particle { alive: false, age: 2.0, x: 7.0, y: 8.0, vx: 0.0, vy: 0.0 },
            Particle { alive: true, age: 3.0, x: 9.0, y: 10.0, vx: 0.0, vy: 0.0 },
        ];

        save(&particles, &path);
        let loaded = load(&path);
        fs::remove_file(&path).unwrap();

        assert_eq!(loaded.len(), 2);
        assert!(loaded.iter().all(|p| p.alive));
        assert_eq!(loaded[0].x, 5.0);
        assert_eq!(loaded[1].x, 9.0);
    }

    #[test]
    fn test_truncated_file_keeps_records_read_so_far() {
        let path = temp_path("truncated.bin");

        // Claim three records but provide one.
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&3u32.to_le_bytes());
        bytes.extend_from_slice(&encode(&Particle::spawn(1.0, 2.0, 0.5, -0.5)));
        fs::write(&path, &bytes).unwrap();

        let loaded = load(&path);
        fs::remove_file(&path).unwrap();

        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].x, 1.0);
    }

    #[test]
    fn test_save_to_unwritable_path_is_a_noop() {
        let particles = [Particle::spawn(1.0, 2.0, 0.5, -0.5)];

        // A directory cannot be opened for writing.
        let dir = std::env::temp_dir();
        save(&particles, &dir);
        assert!(dir.is_dir());

        // A path under a missing parent cannot be created.
        let orphan = temp_path("no-such-dir").join("cache.bin");
        save(&particles, &orphan);
        assert!(!orphan.exists());
        assert!(load(&orphan).is_empty());
    }

    #[test]
    fn test_empty_set_round_trips() {
        let path = temp_path("empty.bin");

        save(&[], &path);
        let loaded = load(&path);
        let size = fs::metadata(&path).unwrap().len();
        fs::remove_file(&path).unwrap();

        assert!(loaded.is_empty());
        // Just the count word.
        assert_eq!(size, 4);
    }
}
