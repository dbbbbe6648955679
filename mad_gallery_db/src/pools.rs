// Fixed placeholder pools and the random-choice seam.
//
// Every "pick something when the document didn't say" decision calls
// `Picker::pick_index`. Production code passes a `GalleryRng`; tests pass a
// `FixedPick` so assertions can name the exact placeholder that was chosen.

use mad_gallery_prng::GalleryRng;

/// Placeholder author names, used when a record has no author and by the
/// synthetic dataset.
pub const AUTHORS: [&str; 8] = [
    "Nelliel",
    "Zeryo",
    "Kurokage",
    "Sora",
    "MotionD",
    "FrameZero",
    "PixelHeart",
    "EchoVibe",
];

/// Placeholder recommendation sentences.
pub const COMMENTS: [&str; 4] = [
    "视觉表现力极强，分镜切换堪称教科书级别。",
    "整体色调控制出色，氛围营造到位。",
    "音乐与画面的结合令人印象深刻。",
    "剪辑节奏把握精准，情感传递直接。",
];

pub const TAGS: [&str; 10] = [
    "Typography",
    "Monochrome",
    "Glitch",
    "Emotional",
    "Cyberpunk",
    "Minimalist",
    "High Speed",
    "Rhythm",
    "Abstract",
    "Storytelling",
];

pub const TITLE_BASES: [&str; 10] = [
    "Eternity", "Silence", "Noise", "Fragment", "Memory", "Protocol", "Horizon", "Decay", "Bloom",
    "System",
];

pub const TITLE_SUFFIXES: [&str; 7] = ["I", "II", "Overdrive", "Redux", "Final", "Concept", "Zero"];

pub const MOODS: [&str; 4] = ["压抑", "爆发", "宁静", "赛博"];

/// Source of uniform indices into a pool.
pub trait Picker {
    /// Return an index in `0..len`. Callers never pass `len == 0`.
    fn pick_index(&mut self, len: usize) -> usize;
}

impl Picker for GalleryRng {
    fn pick_index(&mut self, len: usize) -> usize {
        self.range_usize(0, len)
    }
}

/// Picker that always answers the same index, clamped to the pool.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedPick(pub usize);

impl Picker for FixedPick {
    fn pick_index(&mut self, len: usize) -> usize {
        self.0.min(len.saturating_sub(1))
    }
}

/// Uniform element of a non-empty pool.
pub fn pick<'a, P: Picker + ?Sized>(picker: &mut P, pool: &[&'a str]) -> &'a str {
    pool[picker.pick_index(pool.len())]
}
