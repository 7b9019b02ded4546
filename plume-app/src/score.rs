//! Built-in demo performance
//!
//! The real host decides which notes sound on each frame; the demo
//! binary stands in with a short looping arpeggio laid out on an
//! 88-key keyboard spanning the frame width.

use plume_kernel::NoteSpan;

/// Keys on the keyboard layout
const NUM_KEYS: u32 = 88;

/// One note of the demo score
#[derive(Debug, Clone, Copy)]
pub struct Note {
    /// Key index, 0 = lowest
    pub key: u32,
    /// Onset in seconds
    pub start: f64,
    /// Release in seconds
    pub end: f64,
}

/// Rising-then-falling arpeggio, looped by [`sounding`]
const SCORE: &[Note] = &[
    Note { key: 39, start: 0.0, end: 0.9 },
    Note { key: 43, start: 0.5, end: 1.4 },
    Note { key: 46, start: 1.0, end: 1.9 },
    Note { key: 51, start: 1.5, end: 2.4 },
    Note { key: 46, start: 2.0, end: 2.9 },
    Note { key: 43, start: 2.5, end: 3.4 },
    Note { key: 39, start: 3.0, end: 3.9 },
    Note { key: 35, start: 3.5, end: 4.4 },
];

/// Loop length in seconds
const LOOP_SECS: f64 = 4.5;

/// Horizontal span of a key on the rendered keyboard
pub fn key_span(key: u32, width: u32) -> NoteSpan {
    let key_width = width as f64 / NUM_KEYS as f64;
    let x_start = key as f64 * key_width;
    NoteSpan {
        x_start,
        x_end: x_start + key_width,
    }
}

/// Spans of every note sounding at `time` seconds
pub fn sounding(time: f64, width: u32) -> Vec<NoteSpan> {
    let t = time % LOOP_SECS;
    SCORE
        .iter()
        .filter(|n| t >= n.start && t < n.end)
        .map(|n| key_span(n.key, width))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_spans_tile_the_width() {
        let first = key_span(0, 880);
        assert_eq!(first.x_start, 0.0);
        assert_eq!(first.x_end, 10.0);

        let last = key_span(87, 880);
        assert_eq!(last.x_end, 880.0);
    }

    #[test]
    fn test_overlapping_notes_both_sound() {
        // At 0.6s the first two notes overlap.
        assert_eq!(sounding(0.6, 880).len(), 2);
        // At 0.2s only the first has started.
        assert_eq!(sounding(0.2, 880).len(), 1);
    }

    #[test]
    fn test_score_loops() {
        assert_eq!(sounding(0.2, 880), sounding(0.2 + LOOP_SECS, 880));
    }
}
