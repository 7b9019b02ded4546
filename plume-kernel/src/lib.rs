//! Per-frame particle simulation and compositing for a piano visualizer
//!
//! Two effect engines render smoke-like trails above sounding notes:
//! - `dust`: sparse bright specks with short-range attraction
//! - `smoke`: dense dim plumes with optional diffusion
//!
//! Each simulate call advances exactly one video frame of particle
//! motion and persists the surviving set to a binary cache file; the
//! matching render call reloads that file and composites onto a
//! packed-RGB frame. Consecutive calls share no memory: the cache file
//! is the only hand-off, so simulate and render may come from entirely
//! separate invocations.
//!
//! The kernel takes no file locks. The caller must serialize
//! simulate-then-render access to a given cache path and must never run
//! two simulate calls against the same path concurrently; overlapping
//! access is a data race at the OS file level. Both cache paths fail
//! soft: a frame with an unreadable or unwritable cache logs a warning
//! and simply shows no (or stale) smoke, and the next frame starts
//! clean.

mod cache;
mod compositor;
mod emitter;
mod interact;
mod particle;
mod physics;
mod rng;
mod sim;

pub mod dust;
pub mod smoke;

pub use dust::DustConfig;
pub use emitter::NoteSpan;
pub use particle::Particle;
pub use rng::{Rng, Xorshift64};
pub use sim::{SimParams, VelocityBounds};
pub use smoke::SmokeConfig;
