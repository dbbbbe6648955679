// Field completion: turns parser output into fully populated `Record`s.
//
// Per partial record, in order:
// 1. rank = position in the output (1-based)
// 2. id = "mad_" + slug(title), or "mad_item_<rank>" if the slug is empty
// 3. author/comment = document value, else a pooled placeholder
// 4. cover = resolved by the policy paired with the document's convention
//    (supplied path for A, title-derived filename for B), else the
//    placeholder image for the id
// 5. tags = empty
//
// Nothing here can fail. Randomness comes only from the `Picker`, and the
// author is always picked before the comment, so a seeded picker reproduces
// the same dataset.

use crate::config::GalleryConfig;
use crate::pools::{AUTHORS, COMMENTS, Picker, pick};
use crate::probe::ImageProbe;
use crate::types::{Convention, PartialRecord, Record};

/// Prefix shared by every record id.
pub const ID_PREFIX: &str = "mad_";

/// Marker stripped from titles before slugging.
const TITLE_MARKER: &str = "【MAD】";

/// Candidate extensions for title-derived covers, in lookup order.
pub const IMAGE_EXTENSIONS: [&str; 5] = [".png", ".jpg", ".jpeg", ".webp", ".gif"];

/// Characters that cannot appear in a cover file name.
const ILLEGAL_FILENAME_CHARS: [char; 10] = ['/', '\\', '?', '%', '*', ':', '|', '"', '<', '>'];

/// Everything completion needs besides the record itself.
pub struct CompletionContext<'a> {
    pub config: &'a GalleryConfig,
    pub picker: &'a mut dyn Picker,
    pub probe: &'a dyn ImageProbe,
}

/// Slug a title: ASCII word characters and CJK ideographs survive, every
/// other run collapses to one `_`, edges are trimmed, result lower-cased.
pub fn slugify(title: &str) -> String {
    let stripped = title.replace(TITLE_MARKER, "").replace(['【', '】'], "");
    let mut slug = String::with_capacity(stripped.len());
    let mut in_gap = false;
    for ch in stripped.chars() {
        if is_slug_char(ch) {
            slug.push(ch);
            in_gap = false;
        } else if !in_gap {
            slug.push('_');
            in_gap = true;
        }
    }
    slug.trim_matches('_').to_ascii_lowercase()
}

fn is_slug_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_' || ('\u{4e00}'..='\u{9fff}').contains(&ch)
}

/// Record id for a title at a given rank.
pub fn make_id(title: &str, rank: u32) -> String {
    let slug = slugify(title);
    if slug.is_empty() {
        format!("{ID_PREFIX}item_{rank}")
    } else {
        format!("{ID_PREFIX}{slug}")
    }
}

/// File name stem for a title-derived cover.
pub fn cover_file_stem(title: &str) -> String {
    let replaced: String = title
        .chars()
        .map(|c| if ILLEGAL_FILENAME_CHARS.contains(&c) { '_' } else { c })
        .collect();
    replaced.trim().to_string()
}

/// `<prefix><dir>/<name>`, tolerating an empty `dir`.
fn join_image_path(prefix: &str, dir: &str, name: &str) -> String {
    if dir.is_empty() {
        format!("{prefix}{name}")
    } else {
        format!("{prefix}{dir}/{name}")
    }
}

/// Cover for Convention A: normalize a path captured from the document.
pub fn resolve_supplied_cover(path: Option<&str>, id: &str, config: &GalleryConfig) -> String {
    let Some(path) = path.map(str::trim).filter(|p| !p.is_empty()) else {
        return config.placeholder_for(id);
    };
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }

    let path = path.replace('\\', "/");
    let clean = path
        .strip_prefix("./")
        .or_else(|| path.strip_prefix("../"))
        .unwrap_or(&path);

    let dir = config.image_subdir();
    let already_under_dir = !dir.is_empty()
        && clean
            .strip_prefix(dir)
            .is_some_and(|rest| rest.starts_with('/'));
    if already_under_dir {
        format!("/{clean}")
    } else {
        join_image_path("/", dir, clean)
    }
}

/// Cover for Convention B: probe `<title stem><ext>` for each extension and
/// build a URL-safe path under the base path for the first hit.
pub fn resolve_title_cover(
    title: &str,
    id: &str,
    config: &GalleryConfig,
    probe: &dyn ImageProbe,
) -> String {
    let stem = cover_file_stem(title);
    if stem.is_empty() {
        return config.placeholder_for(id);
    }
    IMAGE_EXTENSIONS
        .iter()
        .map(|ext| format!("{stem}{ext}"))
        .find(|name| probe.exists(name))
        .map(|name| {
            join_image_path(
                &config.normalized_base(),
                config.image_subdir(),
                &name.replace(' ', "%20"),
            )
        })
        .unwrap_or_else(|| config.placeholder_for(id))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Complete one partial record at the given rank.
pub fn complete_record(partial: PartialRecord, rank: u32, ctx: &mut CompletionContext<'_>) -> Record {
    let id = make_id(&partial.title, rank);

    let author = non_empty(partial.author)
        .unwrap_or_else(|| pick(&mut *ctx.picker, &AUTHORS).to_string());
    let comment = non_empty(partial.comment)
        .unwrap_or_else(|| pick(&mut *ctx.picker, &COMMENTS).to_string());

    let cover_url = match ctx.config.convention {
        Convention::A => resolve_supplied_cover(partial.cover_path.as_deref(), &id, ctx.config),
        Convention::B => resolve_title_cover(&partial.title, &id, ctx.config, ctx.probe),
    };

    Record {
        rank,
        id,
        title: partial.title,
        author,
        cover_url,
        comment,
        tags: Vec::new(),
    }
}

/// Complete every partial record, assigning ranks `1..=N` in order.
pub fn complete_all(partials: Vec<PartialRecord>, ctx: &mut CompletionContext<'_>) -> Vec<Record> {
    partials
        .into_iter()
        .zip(1u32..)
        .map(|(partial, rank)| complete_record(partial, rank, ctx))
        .collect()
}
