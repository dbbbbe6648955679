// Synthetic dataset used when the document yields nothing.
//
// Self-contained: draws only from the fixed pools in `pools.rs` and the
// caller's `Picker`, never from a document. Always returns exactly
// `FALLBACK_COUNT` complete records with ids `mad_001` through `mad_100`.

use crate::complete::ID_PREFIX;
use crate::config::GalleryConfig;
use crate::pools::{AUTHORS, MOODS, Picker, TAGS, TITLE_BASES, TITLE_SUFFIXES, pick};
use crate::types::Record;

pub const FALLBACK_COUNT: u32 = 100;

/// Inclusive bounds on tags per synthetic record.
const MIN_TAGS: usize = 2;
const MAX_TAGS: usize = 4;

/// Draw `count` distinct tags in draw order.
fn sample_tags<P: Picker + ?Sized>(picker: &mut P, count: usize) -> Vec<String> {
    let mut remaining: Vec<&str> = TAGS.to_vec();
    let mut tags = Vec::with_capacity(count);
    for _ in 0..count.min(TAGS.len()) {
        let idx = picker.pick_index(remaining.len());
        tags.push(remaining.swap_remove(idx).to_string());
    }
    tags
}

fn synthetic_comment<P: Picker + ?Sized>(picker: &mut P, rank: u32) -> String {
    let seconds = 10 + picker.pick_index(20);
    let temperature = if rank % 2 == 0 { "冷色系" } else { "暖色系" };
    let mood = pick(picker, &MOODS);
    format!(
        "视觉表现力极强，在{seconds}秒处的分镜切换堪称教科书级别。整体色调控制在{temperature}，营造出一种{mood}的氛围。"
    )
}

/// Build one synthetic record.
pub fn synthetic_record<P: Picker + ?Sized>(
    picker: &mut P,
    rank: u32,
    config: &GalleryConfig,
) -> Record {
    let id = format!("{ID_PREFIX}{rank:03}");
    let title = format!(
        "{} {}",
        pick(picker, &TITLE_BASES),
        pick(picker, &TITLE_SUFFIXES)
    )
    .to_uppercase();
    let author = pick(picker, &AUTHORS).to_uppercase();
    let comment = synthetic_comment(picker, rank);
    let tag_count = MIN_TAGS + picker.pick_index(MAX_TAGS - MIN_TAGS + 1);
    let tags = sample_tags(picker, tag_count);

    Record {
        rank,
        cover_url: config.placeholder_for(&id),
        id,
        title,
        author,
        comment,
        tags,
    }
}

/// Generate the full synthetic dataset, ranks `1..=FALLBACK_COUNT`.
pub fn generate_fallback<P: Picker + ?Sized>(picker: &mut P, config: &GalleryConfig) -> Vec<Record> {
    (1..=FALLBACK_COUNT)
        .map(|rank| synthetic_record(picker, rank, config))
        .collect()
}
